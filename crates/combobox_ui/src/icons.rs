//! Icon sub-widgets.
//!
//! Icons are opaque to the combobox primitives: they accept a class name, a
//! sprite and a symbol and emit an SVG sprite reference.

use std::str::FromStr;

use crate::class_names::{compose, ClassFragment};
use crate::defaults::{resolve, resolve_or};
use crate::error::ParseTokenError;
use crate::markup::{Element, Markup};

/// Icon sprite sheets shipped with the design system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconSprite {
    /// Monochrome utility glyphs.
    #[default]
    Utility,
    /// Coloured entity icons.
    Standard,
    /// Action icons.
    Action,
    /// Document type icons.
    Doctype,
    /// Custom object icons.
    Custom,
}

impl IconSprite {
    /// Token used in sprite paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utility => "utility",
            Self::Standard => "standard",
            Self::Action => "action",
            Self::Doctype => "doctype",
            Self::Custom => "custom",
        }
    }

    fn href(self, symbol: &str) -> String {
        format!("/assets/icons/{}-sprite/svg/symbols.svg#{symbol}", self.as_str())
    }
}

impl FromStr for IconSprite {
    type Err = ParseTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "utility" => Ok(Self::Utility),
            "standard" => Ok(Self::Standard),
            "action" => Ok(Self::Action),
            "doctype" => Ok(Self::Doctype),
            "custom" => Ok(Self::Custom),
            other => Err(ParseTokenError::UnknownSprite(other.to_string())),
        }
    }
}

/// Bare `<svg>` referencing one symbol of a sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgIcon {
    /// Class of the `<svg>` element.
    pub class_name: Option<String>,
    /// Sprite sheet.
    pub sprite: IconSprite,
    /// Symbol id within the sprite.
    pub symbol: String,
}

impl SvgIcon {
    /// Shorthand for an icon with a class, sprite and symbol.
    pub fn new(class_name: &str, sprite: IconSprite, symbol: &str) -> Self {
        Self {
            class_name: Some(class_name.to_string()),
            sprite,
            symbol: symbol.to_string(),
        }
    }

    /// Builds the icon tree.
    pub fn render(&self) -> Markup {
        Element::new("svg")
            .class(compose([self.class_name.as_ref()]))
            .attr("aria-hidden", "true")
            .child(Element::new("use").attr("xlink:href", self.sprite.href(&self.symbol)))
            .into()
    }
}

impl From<SvgIcon> for Markup {
    fn from(value: SvgIcon) -> Self {
        value.render()
    }
}

/// Utility glyph inside an icon container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilityIcon {
    /// Class of the outer container.
    pub container_class_name: Option<String>,
    /// Class of the `<svg>`.
    pub class_name: Option<String>,
    /// Symbol id, defaults to `announcement`.
    pub symbol: Option<String>,
    /// Container title.
    pub title: Option<String>,
    /// Screen-reader text.
    pub assistive_text: Option<String>,
}

impl UtilityIcon {
    /// Builds the icon tree.
    pub fn render(&self) -> Markup {
        let symbol = resolve_or(self.symbol.clone(), "announcement".to_string());
        let svg = SvgIcon {
            class_name: Some(resolve_or(
                self.class_name.clone(),
                "slds-icon slds-icon-text-default".to_string(),
            )),
            sprite: IconSprite::Utility,
            symbol,
        };
        Element::new("span")
            .class(compose([
                ClassFragment::from("slds-icon_container"),
                self.container_class_name.as_ref().into(),
            ]))
            .opt_attr("title", self.title.clone())
            .child(svg)
            .opt_child(self.assistive_text.as_deref().map(assistive_text))
            .into()
    }
}

impl From<UtilityIcon> for Markup {
    fn from(value: UtilityIcon) -> Self {
        value.render()
    }
}

/// Entity icon with its coloured container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardIcon {
    /// Class of the outer container.
    pub container_class_name: Option<String>,
    /// Extra class of the `<svg>`.
    pub class_name: Option<String>,
    /// Entity symbol, defaults to `account`.
    pub symbol: Option<String>,
    /// Container title, defaults to the symbol.
    pub title: Option<String>,
    /// Screen-reader text, defaults to `Description of icon`.
    pub assistive_text: Option<String>,
}

impl StandardIcon {
    /// Builds the icon tree.
    pub fn render(&self) -> Markup {
        let symbol = resolve_or(self.symbol.clone(), "account".to_string());
        let title = resolve(
            self.title.clone(),
            || self.symbol.clone(),
            "description of icon".to_string(),
        );
        Element::new("span")
            .class(compose([
                ClassFragment::from("slds-icon_container"),
                ClassFragment::from(format!("slds-icon-standard-{symbol}")),
                self.container_class_name.as_ref().into(),
            ]))
            .attr("title", title)
            .child(SvgIcon {
                class_name: Some(
                    compose([ClassFragment::from("slds-icon"), self.class_name.as_ref().into()])
                        .into_string(),
                ),
                sprite: IconSprite::Standard,
                symbol,
            })
            .child(assistive_text(&resolve_or(
                self.assistive_text.clone(),
                "Description of icon".to_string(),
            )))
            .into()
    }
}

impl From<StandardIcon> for Markup {
    fn from(value: StandardIcon) -> Self {
        value.render()
    }
}

/// Icon-only button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonIcon {
    /// Extra class of the `<button>`.
    pub class_name: Option<String>,
    /// Utility symbol, defaults to `settings`.
    pub symbol: Option<String>,
    /// Button title.
    pub title: Option<String>,
    /// Screen-reader text.
    pub assistive_text: Option<String>,
    /// Value of `aria-haspopup`, if any.
    pub aria_haspopup: Option<String>,
}

impl ButtonIcon {
    /// Builds the button tree.
    pub fn render(&self) -> Markup {
        let symbol = resolve_or(self.symbol.clone(), "settings".to_string());
        Element::new("button")
            .class(compose([
                ClassFragment::from("slds-button slds-button--icon"),
                self.class_name.as_ref().into(),
            ]))
            .opt_attr("aria-haspopup", self.aria_haspopup.clone())
            .opt_attr("title", self.title.clone())
            .child(SvgIcon::new("slds-button__icon", IconSprite::Utility, &symbol))
            .opt_child(self.assistive_text.as_deref().map(assistive_text))
            .into()
    }
}

impl From<ButtonIcon> for Markup {
    fn from(value: ButtonIcon) -> Self {
        value.render()
    }
}

pub(crate) fn assistive_text(text: &str) -> Element {
    Element::new("span")
        .attr("class", "slds-assistive-text")
        .child(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn svg_icon_references_sprite_symbol() {
        let icon = SvgIcon::new("slds-icon", IconSprite::Utility, "search").render();
        assert_eq!(
            icon.to_html(),
            r#"<svg class="slds-icon" aria-hidden="true"><use xlink:href="/assets/icons/utility-sprite/svg/symbols.svg#search"></use></svg>"#
        );
    }

    #[test]
    fn standard_icon_defaults_to_account() {
        let icon = StandardIcon::default().render();
        let container = icon.as_element().expect("element");
        assert!(container.has_class("slds-icon-standard-account"));
        assert_eq!(container.attribute("title"), Some("description of icon"));
        assert!(icon.to_html().contains("standard-sprite/svg/symbols.svg#account"));
    }

    #[test]
    fn standard_icon_title_falls_back_to_symbol() {
        let icon = StandardIcon {
            symbol: Some("lead".to_string()),
            ..StandardIcon::default()
        }
        .render();
        let container = icon.as_element().expect("element");
        assert_eq!(container.attribute("title"), Some("lead"));
        assert!(container.has_class("slds-icon-standard-lead"));
    }

    #[test]
    fn sprite_parses_known_names_only() {
        assert_eq!("standard".parse::<IconSprite>(), Ok(IconSprite::Standard));
        assert_eq!(
            "emoji".parse::<IconSprite>(),
            Err(ParseTokenError::UnknownSprite("emoji".to_string()))
        );
    }

    #[test]
    fn button_icon_carries_assistive_text() {
        let button = ButtonIcon {
            symbol: Some("close".to_string()),
            assistive_text: Some("Remove selected option".to_string()),
            ..ButtonIcon::default()
        }
        .render();
        assert_eq!(
            button.find_by_class("slds-assistive-text").map(|el| el.text_content()),
            Some("Remove selected option".to_string())
        );
        assert!(button.to_html().contains("#close"));
    }
}
