//! Listbox, option and combobox tree builders.
//!
//! Each builder is a plain props struct with a `render` method. Rendering is
//! pure: the same props always produce the same [`Markup`] tree, and state such
//! as "open" or "focused" is supplied by the caller on every render.

use std::str::FromStr;

use crate::class_names::{compose, ClassFragment, ConditionalSet};
use crate::defaults::{resolve_or, upper_first};
use crate::error::ParseTokenError;
use crate::icons::{assistive_text, ButtonIcon, IconSprite, StandardIcon, SvgIcon, UtilityIcon};
use crate::markup::{Element, Markup};
use crate::widgets::Input;

mod combobox;
mod listbox;
mod options;

pub use combobox::{ComboboxContainer, ObjectSwitcher};
pub use listbox::{Listbox, ListboxItem, ListboxOption};
pub use options::{EntityOption, PlainOption};

/// Default id of the listbox a combobox controls.
pub const LISTBOX_ID: &str = "listbox-unique-id";
/// Default id of a listbox option.
pub const LISTBOX_OPTION_ID: &str = "listbox-option-unique-id";
/// Default id of the combobox input.
pub const COMBOBOX_ID: &str = "combobox-unique-id";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Where the combobox input shows its icons.
pub enum InputIconPosition {
    /// No input icon.
    #[default]
    None,
    /// Icon before the text.
    Left,
    /// Icon after the text.
    Right,
    /// Icons on both sides.
    Both,
}

impl InputIconPosition {
    /// Token form of the position.
    pub fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }

    fn has_left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }
}

impl FromStr for InputIconPosition {
    type Err = ParseTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "none" => Ok(Self::None),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "both" => Ok(Self::Both),
            other => Err(ParseTokenError::UnknownIconPosition(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual flavour of a listbox option.
pub enum ListboxOptionType {
    /// Text with a selection tick.
    Plain,
    /// Entity icon with title and optional meta line.
    Entity,
}

impl ListboxOptionType {
    /// Every option flavour, in modifier-class order.
    pub const ALL: [Self; 2] = [Self::Plain, Self::Entity];

    /// Token form of the type.
    pub fn token(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Entity => "entity",
        }
    }

    fn modifier_class(self) -> String {
        format!("slds-listbox__option--{}", self.token())
    }
}

/// `"true"` or `"false"`, for ARIA state attributes.
pub fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_position_round_trips_tokens() {
        for position in [
            InputIconPosition::None,
            InputIconPosition::Left,
            InputIconPosition::Right,
            InputIconPosition::Both,
        ] {
            assert_eq!(position.token().parse::<InputIconPosition>(), Ok(position));
        }
        assert_eq!("".parse::<InputIconPosition>(), Ok(InputIconPosition::None));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let err = "middle".parse::<InputIconPosition>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown input icon position `middle`; expected left, right, both or none"
        );
    }

    #[test]
    fn option_types_map_to_modifier_classes() {
        let classes: Vec<_> = ListboxOptionType::ALL
            .into_iter()
            .map(ListboxOptionType::modifier_class)
            .collect();
        assert_eq!(
            classes,
            ["slds-listbox__option--plain", "slds-listbox__option--entity"]
        );
        assert_eq!(
            ListboxOptionType::Entity.modifier_class(),
            "slds-listbox__option--entity"
        );
    }

    #[test]
    fn bool_token_spells_aria_booleans() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
