//! Demo fixtures for the combobox style guide page.

use std::cell::Cell;

use combobox_ui::prelude::*;

use crate::ShowcaseError;

/// Id of the selected-pills listbox in the "options selected" state.
pub const LISTBOX_SELECTIONS_ID: &str = "listbox-selections-unique-id";
/// Id of the first dropdown option.
pub const LISTBOX_OPTION_ID_01: &str = "listbox-option-unique-id-01";
/// Id of the second dropdown option.
pub const LISTBOX_OPTION_ID_02: &str = "listbox-option-unique-id-02";

const LIST_TITLES: [&str; 12] = [
    "Acme",
    "Edge SLA",
    "Express Logistics SLA",
    "GenePoint Lab Generators",
    "GenePoint SLA",
    "Pyramid Emergency Generators",
    "United Oil Installations",
    "United Oil Plant Standby Generators",
    "United Oil SLA",
    "United Oil Standby Generators",
    "University of AZ Installations",
    "University of AZ Portable Generators",
];

/// Monotonic id source for fixture options.
///
/// Each counter is independent; ids are `{prefix}{n}` with `n` starting at 1.
#[derive(Debug, Default)]
pub struct UniqueIdCounter {
    last: Cell<u64>,
}

impl UniqueIdCounter {
    /// Creates a counter whose first id ends in `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id with the given prefix.
    pub fn next_id(&self, prefix: &str) -> String {
        let next = self.last.get() + 1;
        self.last.set(next);
        format!("{prefix}{next}")
    }
}

/// One rendered style-guide entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    /// Stable demo id.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Rendered markup.
    pub element: Markup,
    /// Script run after mounting, if any.
    pub script: Option<&'static str>,
}

fn demo_frame(content: impl Into<Markup>) -> Markup {
    Element::new("div")
        .attr("class", "demo-only")
        .attr("style", "height: 10rem;")
        .child(content)
        .into()
}

fn search_combobox() -> ComboboxContainer {
    ComboboxContainer {
        autocomplete: true,
        input_icon: InputIconPosition::Right,
        input_icon_right_symbol: Some("search".to_string()),
        ..ComboboxContainer::default()
    }
}

/// Two-option dropdown; `focused` highlights the first option.
pub fn listbox_dropdown(focused: bool) -> Markup {
    Listbox {
        class_name: Some("slds-dropdown slds-dropdown--fluid".to_string()),
        vertical: true,
        children: vec![
            ListboxItem::wrap(EntityOption {
                id: Some(LISTBOX_OPTION_ID_01.to_string()),
                entity_title: Some("Acme".to_string()),
                entity_meta: true,
                focused,
                ..EntityOption::default()
            })
            .render(),
            ListboxItem::wrap(EntityOption {
                id: Some(LISTBOX_OPTION_ID_02.to_string()),
                entity_title: Some("Salesforce.com, Inc.".to_string()),
                entity_meta: true,
                ..EntityOption::default()
            })
            .render(),
        ],
        ..Listbox::default()
    }
    .render()
}

/// Long result list with ids drawn from `ids`.
pub fn listbox_list(ids: &UniqueIdCounter) -> Markup {
    Listbox {
        class_name: Some("slds-dropdown--length-10".to_string()),
        vertical: true,
        children: LIST_TITLES
            .iter()
            .map(|title| {
                ListboxItem::wrap(EntityOption {
                    id: Some(ids.next_id("listbox-option-id-")),
                    entity_title: Some((*title).to_string()),
                    entity_meta: true,
                    ..EntityOption::default()
                })
                .render()
            })
            .collect(),
        ..Listbox::default()
    }
    .render()
}

fn pill(label: &str, tab_index: Option<&str>) -> Markup {
    ListboxItem::wrap(ListboxPill {
        label: label.to_string(),
        tab_index: tab_index.map(str::to_string),
        children: vec![Avatar {
            class_name: Some("slds-avatar--x-small slds-pill__icon_container".to_string()),
            children: vec![StandardIcon::default().render()],
        }
        .render()],
    })
    .render()
}

/// Horizontal listbox of selected pills.
pub fn selected_pills() -> Markup {
    Listbox {
        id: Some(LISTBOX_SELECTIONS_ID.to_string()),
        aria_label: Some("Selected Options:".to_string()),
        class_name: Some("slds-p-top--xxx-small".to_string()),
        horizontal: true,
        children: vec![pill("Acme", Some("0")), pill("Salesforce.com, Inc.", None)],
        ..Listbox::default()
    }
    .render()
}

/// The closed autocomplete combobox.
pub fn default_demo() -> Demo {
    Demo {
        id: "default",
        label: "Default",
        element: demo_frame(ComboboxContainer {
            listbox: Some(listbox_dropdown(false)),
            ..search_combobox()
        }),
        script: None,
    }
}

/// Focus, open and selection states.
pub fn states() -> Vec<Demo> {
    vec![
        Demo {
            id: "focused",
            label: "Focused",
            element: demo_frame(ComboboxContainer {
                is_open: true,
                listbox: Some(listbox_dropdown(false)),
                ..search_combobox()
            }),
            script: Some("document.getElementById('combobox-unique-id').focus()"),
        },
        Demo {
            id: "open-item-focused",
            label: "Open - Item Focused",
            element: demo_frame(ComboboxContainer {
                is_open: true,
                listbox: Some(listbox_dropdown(true)),
                aria_activedescendant: Some(LISTBOX_OPTION_ID_01.to_string()),
                ..search_combobox()
            }),
            script: None,
        },
        Demo {
            id: "closed-options-selected",
            label: "Option(s) Selected",
            element: demo_frame(ComboboxContainer {
                listbox: Some(listbox_dropdown(false)),
                children: vec![selected_pills()],
                ..search_combobox()
            }),
            script: None,
        },
    ]
}

/// Usage examples in context.
pub fn examples(ids: &UniqueIdCounter) -> Vec<Demo> {
    vec![Demo {
        id: "non-modal-dialog",
        label: "Non-modal Dialog",
        element: Popover {
            class_name: Some("slds-nubbin--top-left".to_string()),
            body_class_name: Some("slds-p-horizontal--none".to_string()),
            children: vec![ComboboxContainer {
                is_open: true,
                hide_label: true,
                form_control_class_name: Some("slds-m-around--small".to_string()),
                listbox: Some(listbox_list(ids)),
                static_listbox: true,
                ..search_combobox()
            }
            .render()],
        }
        .render(),
        script: None,
    }]
}

/// Every demo in page order: default, states, then examples.
pub fn catalog(ids: &UniqueIdCounter) -> Vec<Demo> {
    let mut demos = vec![default_demo()];
    demos.extend(states());
    demos.extend(examples(ids));
    demos
}

/// Looks up a demo by id.
///
/// # Errors
///
/// Returns [`ShowcaseError::UnknownDemo`] when no demo has the id.
pub fn find_demo<'a>(demos: &'a [Demo], id: &str) -> Result<&'a Demo, ShowcaseError> {
    demos
        .iter()
        .find(|demo| demo.id == id)
        .ok_or_else(|| ShowcaseError::UnknownDemo(id.to_string()))
}

/// Static HTML for every demo, one `<section>` each.
pub fn render_catalog_html(ids: &UniqueIdCounter) -> String {
    catalog(ids)
        .into_iter()
        .map(|demo| {
            Markup::from(
                Element::new("section")
                    .attr("data-demo-id", demo.id)
                    .child(Element::new("h2").child(demo.label))
                    .child(demo.element),
            )
            .to_html()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counters_are_independent() {
        let first = UniqueIdCounter::new();
        let second = UniqueIdCounter::new();
        assert_eq!(first.next_id("listbox-option-id-"), "listbox-option-id-1");
        assert_eq!(first.next_id("listbox-option-id-"), "listbox-option-id-2");
        assert_eq!(second.next_id("x-"), "x-1");
    }

    #[test]
    fn catalog_order_and_ids() {
        let ids = UniqueIdCounter::new();
        let demos = catalog(&ids);
        let demo_ids: Vec<_> = demos.iter().map(|demo| demo.id).collect();
        assert_eq!(
            demo_ids,
            vec![
                "default",
                "focused",
                "open-item-focused",
                "closed-options-selected",
                "non-modal-dialog",
            ]
        );
        assert!(find_demo(&demos, "focused").is_ok());
        assert_eq!(
            find_demo(&demos, "missing").unwrap_err().to_string(),
            "unknown demo `missing`"
        );
    }

    #[test]
    fn item_focused_state_points_at_first_option() {
        let demos = states();
        let demo = find_demo(&demos, "open-item-focused").expect("demo");
        let input = demo.element.find_by_tag("input").expect("input");
        assert_eq!(input.attribute("aria-activedescendant"), Some(LISTBOX_OPTION_ID_01));
        let focused = demo.element.find_all_by_class("slds-has-focus");
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].attribute("id"), Some(LISTBOX_OPTION_ID_01));
        assert!(demo.element.find_by_class("slds-is-open").is_some());
    }

    #[test]
    fn selected_state_renders_pills_after_control() {
        let demos = states();
        let demo = find_demo(&demos, "closed-options-selected").expect("demo");
        let pills = demo.element.find_all_by_class("slds-pill");
        assert_eq!(pills.len(), 2);
        assert_eq!(pills[0].attribute("tabindex"), Some("0"));
        assert_eq!(pills[1].attribute("tabindex"), None);
        let selections = demo
            .element
            .find(&|el| el.attribute("id") == Some(LISTBOX_SELECTIONS_ID))
            .expect("selections");
        assert_eq!(selections.attribute("aria-orientation"), Some("horizontal"));
    }

    #[test]
    fn dialog_example_uses_fresh_option_ids() {
        let ids = UniqueIdCounter::new();
        let demos = examples(&ids);
        let options = demos[0].element.find_all_by_class("slds-listbox__option");
        assert_eq!(options.len(), LIST_TITLES.len());
        assert_eq!(options[0].attribute("id"), Some("listbox-option-id-1"));
        assert_eq!(options[11].attribute("id"), Some("listbox-option-id-12"));
        let combobox = demos[0]
            .element
            .find(&|el| el.attribute("role") == Some("combobox"))
            .expect("combobox");
        assert_eq!(combobox.class_name(), "slds-combobox slds-is-open");
    }

    #[test]
    fn catalog_html_wraps_each_demo() {
        let html = render_catalog_html(&UniqueIdCounter::new());
        assert_eq!(html.matches("<section data-demo-id=").count(), 5);
        assert!(html.contains(r#"<div class="demo-only" style="height: 10rem;">"#));
    }
}
