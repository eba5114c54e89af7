//! Combobox and listbox primitives for the design-system style guide.
//!
//! The crate owns the conditional class-name composer, the attribute
//! defaulting helpers, and pure tree builders for every combobox family
//! member (listbox, options, pills, object switcher). Builders return an
//! immutable [`Markup`] tree; the Leptos bridge in [`view`] mounts it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod class_names;
pub mod defaults;
mod error;
mod icons;
pub mod markup;
mod primitives;
pub mod view;
mod widgets;

pub use class_names::{compose, ClassFragment, ComposedClassName, ConditionalSet};
pub use defaults::{resolve, resolve_or};
pub use error::ParseTokenError;
pub use icons::{ButtonIcon, IconSprite, StandardIcon, SvgIcon, UtilityIcon};
pub use markup::{Element, Markup};
pub use primitives::{
    bool_token, ComboboxContainer, EntityOption, InputIconPosition, Listbox, ListboxItem,
    ListboxOption, ListboxOptionType, ObjectSwitcher, PlainOption, COMBOBOX_ID, LISTBOX_ID,
    LISTBOX_OPTION_ID,
};
pub use view::MarkupView;
pub use widgets::{Avatar, Input, ListboxPill, Popover};

/// Convenience imports for crates composing combobox demos.
pub mod prelude {
    pub use crate::{
        bool_token, compose, resolve, resolve_or, Avatar, ButtonIcon, ClassFragment,
        ComboboxContainer, ComposedClassName, ConditionalSet, Element, EntityOption, IconSprite,
        Input, InputIconPosition, Listbox, ListboxItem, ListboxOption, ListboxOptionType,
        ListboxPill, Markup, MarkupView, ObjectSwitcher, PlainOption, Popover, StandardIcon,
        SvgIcon, UtilityIcon,
    };
}
