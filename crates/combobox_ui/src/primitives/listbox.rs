use super::*;

/// Generic listbox container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listbox {
    /// Listbox id, targeted by the combobox input. Defaults to [`LISTBOX_ID`].
    pub id: Option<String>,
    /// Extra class of the `<ul>`.
    pub class_name: Option<String>,
    /// Vertical orientation.
    pub vertical: bool,
    /// Horizontal orientation.
    pub horizontal: bool,
    /// Horizontal orientation inlined with adjacent elements.
    pub inline: bool,
    /// Accessible label.
    pub aria_label: Option<String>,
    /// List items.
    pub children: Vec<Markup>,
}

impl Listbox {
    /// Builds the listbox tree.
    pub fn render(&self) -> Markup {
        let orientation = (self.horizontal || self.inline).then_some("horizontal");
        Element::new("ul")
            .attr("id", resolve_or(self.id.clone(), LISTBOX_ID.to_string()))
            .class(compose([
                ClassFragment::from("slds-listbox"),
                ConditionalSet::new()
                    .with("slds-listbox--vertical", self.vertical)
                    .with("slds-listbox--horizontal", self.horizontal)
                    .with("slds-listbox--inline", self.inline)
                    .into(),
                self.class_name.as_ref().into(),
            ]))
            .attr("role", "listbox")
            .opt_attr("aria-orientation", orientation)
            .opt_attr("aria-label", self.aria_label.clone())
            .children(self.children.iter().cloned())
            .into()
    }
}

impl From<Listbox> for Markup {
    fn from(value: Listbox) -> Self {
        value.render()
    }
}

/// Presentation wrapper for one entry of a listbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListboxItem {
    /// Extra class of the `<li>`.
    pub class_name: Option<String>,
    /// Item content, usually a single option.
    pub children: Vec<Markup>,
}

impl ListboxItem {
    /// Wraps a single child.
    pub fn wrap(child: impl Into<Markup>) -> Self {
        Self {
            class_name: None,
            children: vec![child.into()],
        }
    }

    /// Builds the item tree.
    pub fn render(&self) -> Markup {
        Element::new("li")
            .attr("role", "presentation")
            .class(compose([
                ClassFragment::from("slds-listbox__item"),
                self.class_name.as_ref().into(),
            ]))
            .children(self.children.iter().cloned())
            .into()
    }
}

impl From<ListboxItem> for Markup {
    fn from(value: ListboxItem) -> Self {
        value.render()
    }
}

/// Selectable option inside a listbox item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListboxOption {
    /// Option id. Defaults to [`LISTBOX_OPTION_ID`].
    pub id: Option<String>,
    /// Option flavour; `None` renders the bare option.
    pub option_type: Option<ListboxOptionType>,
    /// Extra class composed after the type classes.
    pub class_name: Option<String>,
    /// Option content.
    pub children: Vec<Markup>,
}

impl ListboxOption {
    /// Builds the option tree.
    pub fn render(&self) -> Markup {
        Element::new("span")
            .attr("id", resolve_or(self.id.clone(), LISTBOX_OPTION_ID.to_string()))
            .class(compose([
                ClassFragment::from("slds-media slds-listbox__option"),
                ListboxOptionType::ALL
                    .into_iter()
                    .map(|kind| (kind.modifier_class(), self.option_type == Some(kind)))
                    .collect::<ConditionalSet>()
                    .into(),
                self.class_name.as_ref().into(),
            ]))
            .attr("role", "option")
            .children(self.children.iter().cloned())
            .into()
    }
}

impl From<ListboxOption> for Markup {
    fn from(value: ListboxOption) -> Self {
        value.render()
    }
}
