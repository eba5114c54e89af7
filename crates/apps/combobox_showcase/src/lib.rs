//! Combobox style-guide app.
//!
//! Renders every combobox demo through `combobox_ui` builders and hosts a
//! live combobox whose display state is held here, outside the builders, and
//! fed back into them on every change.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use combobox_ui::prelude::*;
use leptos::ev::KeyboardEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod fixtures;

use fixtures::{catalog, default_demo, find_demo, UniqueIdCounter};

/// Titles offered by the live combobox.
pub const LIVE_OPTIONS: [&str; 4] = ["Acme", "Edge SLA", "Express Logistics SLA", "GenePoint SLA"];

/// Icon placements offered by the live combobox's position picker.
pub const LIVE_ICON_POSITIONS: [InputIconPosition; 4] = [
    InputIconPosition::Right,
    InputIconPosition::Left,
    InputIconPosition::Both,
    InputIconPosition::None,
];

#[derive(Debug, Error)]
/// Showcase failures; none of them interrupt rendering.
pub enum ShowcaseError {
    /// The requested demo id is not part of the catalog.
    #[error("unknown demo `{0}`")]
    UnknownDemo(String),
    /// A persisted state payload could not be decoded.
    #[error("invalid showcase state: {0}")]
    InvalidState(#[from] serde_json::Error),
}

/// Display state of the live combobox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveComboboxState {
    /// Listbox is expanded.
    pub is_open: bool,
    /// Index of the visually focused option.
    pub focused: Option<usize>,
    /// Index of the selected option.
    pub selected: Option<usize>,
}

impl LiveComboboxState {
    /// Drops indices that do not name one of [`LIVE_OPTIONS`].
    pub fn within_options(self) -> Self {
        let in_range = |index: &usize| *index < LIVE_OPTIONS.len();
        Self {
            is_open: self.is_open,
            focused: self.focused.filter(in_range),
            selected: self.selected.filter(in_range),
        }
    }
}

/// Input events understood by the live combobox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveAction {
    /// Open or close the listbox.
    Toggle,
    /// Move focus down, opening the listbox first.
    FocusNext,
    /// Move focus up.
    FocusPrevious,
    /// Select the focused option and close.
    Select,
    /// Clear the selection.
    Clear,
    /// Close without selecting.
    Dismiss,
}

impl LiveAction {
    /// Maps a keyboard `key` value to an action.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Self::FocusNext),
            "ArrowUp" => Some(Self::FocusPrevious),
            "Enter" => Some(Self::Select),
            "Escape" => Some(Self::Dismiss),
            "Backspace" | "Delete" => Some(Self::Clear),
            _ => None,
        }
    }
}

/// Next live state after `action`.
pub fn reduce_live(state: &LiveComboboxState, action: LiveAction) -> LiveComboboxState {
    let last = LIVE_OPTIONS.len() - 1;
    let mut next = state.clone();
    match action {
        LiveAction::Toggle => {
            next.is_open = !state.is_open;
            if !next.is_open {
                next.focused = None;
            }
        }
        LiveAction::FocusNext => {
            next.is_open = true;
            next.focused = Some(
                state
                    .focused
                    .map_or(0, |index| index.saturating_add(1).min(last)),
            );
        }
        LiveAction::FocusPrevious => {
            if state.is_open {
                next.focused = Some(
                    state
                        .focused
                        .map_or(last, |index| index.saturating_sub(1).min(last)),
                );
            }
        }
        LiveAction::Select => {
            if state.is_open && state.focused.is_some() {
                next.selected = state.focused;
                next.is_open = false;
                next.focused = None;
            }
        }
        LiveAction::Clear => next.selected = None,
        LiveAction::Dismiss => {
            next.is_open = false;
            next.focused = None;
        }
    }
    next
}

fn live_option_id(index: usize) -> String {
    format!("live-option-{index}")
}

/// Builds the live combobox for `state` with its icons at `input_icon`.
pub fn live_combobox(state: &LiveComboboxState, input_icon: InputIconPosition) -> Markup {
    let options = LIVE_OPTIONS
        .iter()
        .enumerate()
        .map(|(index, title)| {
            ListboxItem::wrap(EntityOption {
                id: Some(live_option_id(index)),
                entity_title: Some((*title).to_string()),
                entity_meta: true,
                focused: state.focused == Some(index),
                selected: state.selected == Some(index),
                ..EntityOption::default()
            })
            .render()
        })
        .collect();

    let value = state
        .selected
        .and_then(|index| LIVE_OPTIONS.get(index))
        .map(|title| (*title).to_string());

    ComboboxContainer {
        id: Some("live-combobox".to_string()),
        label: Some("Live combobox".to_string()),
        is_open: state.is_open,
        autocomplete: true,
        input_icon,
        input_button_icon: value.is_some(),
        input_icon_right_symbol: Some(if value.is_some() { "close" } else { "search" }.to_string()),
        aria_controls: Some("live-listbox".to_string()),
        aria_activedescendant: state.focused.map(live_option_id),
        value,
        listbox: Some(
            Listbox {
                id: Some("live-listbox".to_string()),
                class_name: Some("slds-dropdown slds-dropdown--fluid".to_string()),
                vertical: true,
                children: options,
                ..Listbox::default()
            }
            .render(),
        ),
        ..ComboboxContainer::default()
    }
    .render()
}

/// Persisted showcase state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxShowcaseState {
    /// Id of the demo on stage.
    pub active_demo: String,
    /// Live combobox state.
    #[serde(default)]
    pub live: LiveComboboxState,
}

impl Default for ComboboxShowcaseState {
    fn default() -> Self {
        Self {
            active_demo: default_demo().id.to_string(),
            live: LiveComboboxState::default(),
        }
    }
}

/// Decodes a persisted state payload.
///
/// # Errors
///
/// Returns [`ShowcaseError::InvalidState`] when `value` does not match the state shape.
/// Live indices outside [`LIVE_OPTIONS`] are dropped rather than rejected.
pub fn restore_state(value: Value) -> Result<ComboboxShowcaseState, ShowcaseError> {
    let mut restored: ComboboxShowcaseState = serde_json::from_value(value)?;
    restored.live = restored.live.within_options();
    Ok(restored)
}

#[component]
/// Combobox style-guide app contents.
pub fn ComboboxShowcaseApp(
    /// Previously persisted state payload.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the state payload whenever it changes.
    #[prop(optional)]
    on_persist: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(ComboboxShowcaseState::default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    if let Some(restored_state) = restored_state {
        match restore_state(restored_state) {
            Ok(restored) => {
                last_saved.set(serde_json::to_string(&restored).ok());
                state.set(restored);
            }
            Err(err) => logging::warn!("combobox showcase restore failed: {err}"),
        }
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("combobox showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_persist) = on_persist {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_persist.call(value),
                Err(err) => logging::warn!("combobox showcase persist failed: {err}"),
            }
        }
    });

    let icon_position = create_rw_signal(InputIconPosition::Right);
    let demos = store_value(catalog(&UniqueIdCounter::new()));
    let dispatch = move |action: LiveAction| {
        state.update(|value| value.live = reduce_live(&value.live, action));
    };

    let tabs = demos
        .get_value()
        .into_iter()
        .map(|demo| {
            let id = demo.id;
            view! {
                <button
                    type="button"
                    role="tab"
                    class="slds-button"
                    aria-selected=move || bool_token(state.get().active_demo == id)
                    on:click=move |_| state.update(|value| value.active_demo = id.to_string())
                >
                    {demo.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <main class="combobox-showcase">
            <nav role="tablist" aria-label="Combobox demos">{tabs}</nav>
            <section class="combobox-showcase__stage">
                {move || {
                    let active = state.get().active_demo;
                    demos.with_value(|demos| match find_demo(demos, &active) {
                        Ok(demo) => demo.element.clone(),
                        Err(err) => {
                            logging::warn!("{err}");
                            default_demo().element
                        }
                    })
                }}
            </section>
            <section
                class="combobox-showcase__live"
                on:keydown=move |ev: KeyboardEvent| {
                    if let Some(action) = LiveAction::from_key(ev.key().as_str()) {
                        ev.prevent_default();
                        dispatch(action);
                    }
                }
            >
                <select
                    class="slds-select"
                    aria-label="Icon position"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<InputIconPosition>() {
                            Ok(position) => icon_position.set(position),
                            Err(err) => logging::warn!("combobox showcase: {err}"),
                        }
                    }
                >
                    {LIVE_ICON_POSITIONS
                        .into_iter()
                        .map(|position| {
                            view! {
                                <option
                                    value=position.token()
                                    selected=move || icon_position.get() == position
                                >
                                    {position.token()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                {move || live_combobox(&state.get().live, icon_position.get())}
                <button
                    type="button"
                    class="slds-button slds-button--neutral"
                    on:click=move |_| dispatch(LiveAction::Toggle)
                >
                    "Toggle listbox"
                </button>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arrow_down_opens_and_walks_options() {
        let mut state = LiveComboboxState::default();
        state = reduce_live(&state, LiveAction::FocusNext);
        assert!(state.is_open);
        assert_eq!(state.focused, Some(0));
        for _ in 0..10 {
            state = reduce_live(&state, LiveAction::FocusNext);
        }
        assert_eq!(state.focused, Some(LIVE_OPTIONS.len() - 1));
        state = reduce_live(&state, LiveAction::FocusPrevious);
        assert_eq!(state.focused, Some(LIVE_OPTIONS.len() - 2));
    }

    #[test]
    fn select_closes_and_records_choice() {
        let open = LiveComboboxState {
            is_open: true,
            focused: Some(1),
            selected: None,
        };
        let selected = reduce_live(&open, LiveAction::Select);
        assert_eq!(
            selected,
            LiveComboboxState {
                is_open: false,
                focused: None,
                selected: Some(1),
            }
        );
        assert_eq!(reduce_live(&selected, LiveAction::Clear).selected, None);
    }

    #[test]
    fn select_without_focus_is_ignored() {
        let closed = LiveComboboxState::default();
        assert_eq!(reduce_live(&closed, LiveAction::Select), closed);
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(LiveAction::from_key("ArrowDown"), Some(LiveAction::FocusNext));
        assert_eq!(LiveAction::from_key("Escape"), Some(LiveAction::Dismiss));
        assert_eq!(LiveAction::from_key("a"), None);
    }

    #[test]
    fn live_combobox_reflects_state() {
        let markup = live_combobox(
            &LiveComboboxState {
                is_open: true,
                focused: Some(2),
                selected: Some(0),
            },
            InputIconPosition::Right,
        );
        let input = markup.find_by_tag("input").expect("input");
        assert_eq!(input.attribute("aria-activedescendant"), Some("live-option-2"));
        assert_eq!(input.attribute("value"), Some("Acme"));
        assert_eq!(input.attribute("aria-controls"), Some("live-listbox"));
        assert!(markup.find_by_tag("button").is_some());

        let focused = markup.find_all_by_class("slds-has-focus");
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].attribute("id"), Some("live-option-2"));
        let selected = markup.find_all_by_class("slds-is-selected");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].attribute("id"), Some("live-option-0"));
    }

    #[test]
    fn closed_live_combobox_shows_search_icon() {
        let markup = live_combobox(&LiveComboboxState::default(), InputIconPosition::Right);
        assert!(markup.find_by_tag("button").is_none());
        assert!(markup.find_by_class("slds-input__icon--right").is_some());
        assert_eq!(
            markup
                .find(&|el| el.attribute("role") == Some("combobox"))
                .and_then(|el| el.attribute("aria-expanded")),
            Some("false")
        );
    }

    #[test]
    fn icon_picker_tokens_parse_back_to_positions() {
        for position in LIVE_ICON_POSITIONS {
            let parsed = position.token().parse::<InputIconPosition>();
            assert_eq!(parsed, Ok(position));
        }
        let left = live_combobox(
            &LiveComboboxState::default(),
            "left".parse().expect("left token"),
        );
        assert!(left.find_by_class("slds-input__icon--left").is_some());
        assert!(left.find_by_class("slds-input__icon--right").is_none());
    }

    #[test]
    fn state_restores_with_defaults_for_missing_live_section() {
        let restored = restore_state(serde_json::json!({ "active_demo": "focused" }))
            .expect("restore");
        assert_eq!(restored.active_demo, "focused");
        assert_eq!(restored.live, LiveComboboxState::default());
        assert!(matches!(
            restore_state(serde_json::json!({ "live": true })),
            Err(ShowcaseError::InvalidState(_))
        ));
    }

    #[test]
    fn state_survives_serialisation() {
        let state = ComboboxShowcaseState {
            active_demo: "non-modal-dialog".to_string(),
            live: LiveComboboxState {
                is_open: true,
                focused: Some(3),
                selected: None,
            },
        };
        let value = serde_json::to_value(&state).expect("serialize");
        assert_eq!(restore_state(value).expect("restore"), state);
    }

    #[test]
    fn restored_indices_outside_options_are_dropped() {
        let restored = restore_state(serde_json::json!({
            "active_demo": "default",
            "live": { "is_open": true, "focused": 99, "selected": 42 }
        }))
        .expect("restore");
        assert_eq!(
            restored.live,
            LiveComboboxState {
                is_open: true,
                focused: None,
                selected: None,
            }
        );

        let markup = live_combobox(&restored.live, InputIconPosition::Right);
        let input = markup.find_by_tag("input").expect("input");
        assert_eq!(input.attribute("aria-activedescendant"), None);
        assert_eq!(input.attribute("value"), None);

        let restored = restore_state(serde_json::json!({
            "active_demo": "default",
            "live": { "is_open": true, "focused": u64::MAX }
        }))
        .expect("restore");
        assert_eq!(
            reduce_live(&restored.live, LiveAction::FocusNext).focused,
            Some(0)
        );
    }

    #[test]
    fn reducer_clamps_indices_past_the_last_option() {
        let last = LIVE_OPTIONS.len() - 1;
        let stray = LiveComboboxState {
            is_open: true,
            focused: Some(usize::MAX),
            selected: None,
        };
        assert_eq!(reduce_live(&stray, LiveAction::FocusNext).focused, Some(last));
        assert_eq!(
            reduce_live(&stray, LiveAction::FocusPrevious).focused,
            Some(last)
        );
    }
}
