use super::*;

/// Listbox option showing an entity icon, a result name and an optional meta line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityOption {
    /// Option id.
    pub id: Option<String>,
    /// Extra class of the option.
    pub class_name: Option<String>,
    /// Option is the current selection.
    pub selected: bool,
    /// Option has visual focus.
    pub focused: bool,
    /// Show the secondary line below the result name.
    pub entity_meta: bool,
    /// Entity type such as `account` or `lead`.
    pub entity_type: Option<String>,
    /// Result name.
    pub entity_title: Option<String>,
    /// Physical location shown on the meta line.
    pub entity_location: Option<String>,
    /// Render `children` (typically highlighted match text) instead of the title.
    pub typeahead: bool,
    /// Typeahead content.
    pub children: Vec<Markup>,
}

impl EntityOption {
    /// Builds the option tree.
    pub fn render(&self) -> Markup {
        let class_name = compose([
            ClassFragment::from(
                ConditionalSet::new()
                    .with("slds-media--center", !self.entity_meta)
                    .with("slds-listbox__option--has-meta", self.entity_meta)
                    .with("slds-is-selected", self.selected)
                    .with("slds-has-focus", self.focused),
            ),
            self.class_name.as_ref().into(),
        ]);

        let figure = Element::new("span")
            .attr("class", "slds-media__figure")
            .child(StandardIcon {
                class_name: Some("slds-icon--small".to_string()),
                symbol: Some(resolve_or(self.entity_type.clone(), "account".to_string())),
                ..StandardIcon::default()
            });

        let title = Element::new("span")
            .attr(
                "class",
                "slds-listbox__option-text slds-listbox__option-text--entity",
            );
        let title = if self.typeahead {
            title.children(self.children.iter().cloned())
        } else {
            title.child(resolve_or(
                self.entity_title.clone(),
                "Salesforce.com, Inc.".to_string(),
            ))
        };

        let body = Element::new("span")
            .attr("class", "slds-media__body")
            .child(title)
            .opt_child(self.entity_meta.then(|| self.meta_line()));

        ListboxOption {
            id: self.id.clone(),
            option_type: Some(ListboxOptionType::Entity),
            class_name: Some(class_name.into_string()),
            children: vec![figure.into(), body.into()],
        }
        .render()
    }

    fn meta_line(&self) -> Element {
        let entity_type = resolve_or(
            self.entity_type.as_deref().map(upper_first),
            "Account".to_string(),
        );
        let location = resolve_or(
            self.entity_location.as_deref().map(upper_first),
            "San Francisco".to_string(),
        );
        Element::new("span")
            .attr(
                "class",
                "slds-listbox__option-meta slds-listbox__option-meta--entity",
            )
            .child(format!("{entity_type} \u{2022} {location}"))
    }
}

impl From<EntityOption> for Markup {
    fn from(value: EntityOption) -> Self {
        value.render()
    }
}

/// Plain text option with a selection tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainOption {
    /// Option id.
    pub id: Option<String>,
    /// Extra class of the option.
    pub class_name: Option<String>,
    /// Option is the current selection.
    pub selected: bool,
    /// Option has visual focus.
    pub focused: bool,
    /// Hide the tick figure.
    pub hide_icon: bool,
    /// Option text, also used as the tooltip.
    pub title: Option<String>,
}

impl PlainOption {
    /// Builds the option tree.
    pub fn render(&self) -> Markup {
        let class_name = compose([
            ClassFragment::from("slds-media--small slds-media--center"),
            ConditionalSet::new()
                .with("slds-is-selected", self.selected)
                .with("slds-has-focus", self.focused)
                .into(),
            self.class_name.as_ref().into(),
        ]);

        let figure = (!self.hide_icon).then(|| {
            Element::new("span")
                .attr("class", "slds-media__figure")
                .child(SvgIcon::new(
                    "slds-icon slds-icon--x-small slds-listbox__icon-selected",
                    IconSprite::Utility,
                    "check",
                ))
        });

        let text = Element::new("span")
            .attr("class", "slds-truncate")
            .opt_attr("title", self.title.clone())
            .opt_child(self.selected.then(|| assistive_text("Current Selection:")))
            .child(" ")
            .opt_child(self.title.as_deref());

        let mut children: Vec<Markup> = figure.into_iter().map(Markup::from).collect();
        children.push(Element::new("span").attr("class", "slds-media__body").child(text).into());

        ListboxOption {
            id: self.id.clone(),
            option_type: Some(ListboxOptionType::Plain),
            class_name: Some(class_name.into_string()),
            children,
        }
        .render()
    }
}

impl From<PlainOption> for Markup {
    fn from(value: PlainOption) -> Self {
        value.render()
    }
}
