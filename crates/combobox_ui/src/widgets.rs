//! Form, avatar, popover and pill sub-widgets consumed by the combobox demos.

use crate::class_names::{compose, ClassFragment};
use crate::icons::{assistive_text, IconSprite, SvgIcon};
use crate::markup::{Element, Markup};

/// Round image or icon holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Avatar {
    /// Extra class of the avatar.
    pub class_name: Option<String>,
    /// Content; an empty list renders a placeholder image.
    pub children: Vec<Markup>,
}

impl Avatar {
    /// Builds the avatar tree.
    pub fn render(&self) -> Markup {
        let avatar = Element::new("span").class(compose([
            ClassFragment::from("slds-avatar"),
            self.class_name.as_ref().into(),
        ]));
        if self.children.is_empty() {
            avatar
                .child(
                    Element::new("img")
                        .attr("src", "/assets/images/avatar1.jpg")
                        .attr("alt", "meaningful text"),
                )
                .into()
        } else {
            avatar.children(self.children.iter().cloned()).into()
        }
    }
}

impl From<Avatar> for Markup {
    fn from(value: Avatar) -> Self {
        value.render()
    }
}

/// Text input; every attribute is passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Extra class of the input.
    pub class_name: Option<String>,
    /// Attributes in order, applied after `class`.
    pub attrs: Vec<(&'static str, String)>,
}

impl Input {
    /// Builds the input element.
    pub fn render(&self) -> Markup {
        let mut input = Element::new("input").class(compose([
            ClassFragment::from("slds-input"),
            self.class_name.as_ref().into(),
        ]));
        for (name, value) in &self.attrs {
            input = input.attr(*name, value.clone());
        }
        input.into()
    }
}

impl From<Input> for Markup {
    fn from(value: Input) -> Self {
        value.render()
    }
}

/// Dialog-style floating panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popover {
    /// Extra class of the popover section.
    pub class_name: Option<String>,
    /// Extra class of the popover body.
    pub body_class_name: Option<String>,
    /// Body content.
    pub children: Vec<Markup>,
}

impl Popover {
    /// Builds the popover tree.
    pub fn render(&self) -> Markup {
        Element::new("section")
            .class(compose([
                ClassFragment::from("slds-popover"),
                self.class_name.as_ref().into(),
            ]))
            .attr("role", "dialog")
            .child(
                Element::new("div")
                    .class(compose([
                        ClassFragment::from("slds-popover__body"),
                        self.body_class_name.as_ref().into(),
                    ]))
                    .children(self.children.iter().cloned()),
            )
            .into()
    }
}

impl From<Popover> for Markup {
    fn from(value: Popover) -> Self {
        value.render()
    }
}

/// A removable selected-option token inside a horizontal listbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListboxPill {
    /// Pill label.
    pub label: String,
    /// Optional `tabindex`; the first pill of a group is usually `0`.
    pub tab_index: Option<String>,
    /// Leading content such as an avatar.
    pub children: Vec<Markup>,
}

impl ListboxPill {
    /// Builds the pill tree.
    pub fn render(&self) -> Markup {
        Element::new("span")
            .attr("class", "slds-pill")
            .attr("role", "option")
            .opt_attr("tabindex", self.tab_index.clone())
            .attr("aria-selected", "true")
            .children(self.children.iter().cloned())
            .child(
                Element::new("span")
                    .attr("class", "slds-pill__label")
                    .attr("title", self.label.clone())
                    .child(self.label.as_str()),
            )
            .child(
                Element::new("span")
                    .attr("class", "slds-icon_container slds-pill__remove")
                    .attr("title", "Remove")
                    .child(SvgIcon::new(
                        "slds-icon slds-icon--x-small slds-icon-text-default",
                        IconSprite::Utility,
                        "close",
                    ))
                    .child(assistive_text("Press delete or backspace to remove")),
            )
            .into()
    }
}

impl From<ListboxPill> for Markup {
    fn from(value: ListboxPill) -> Self {
        value.render()
    }
}
