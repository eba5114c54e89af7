use super::*;

/// Combobox container for the text input, its icons, the listbox of options,
/// the listbox of selected pills and the object switcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxContainer {
    /// Input id. Defaults to [`COMBOBOX_ID`].
    pub id: Option<String>,
    /// Label text. Defaults to `Search`.
    pub label: Option<String>,
    /// Keep the label for assistive technology only.
    pub hide_label: bool,
    /// Extra class of the `role="combobox"` element.
    pub class_name: Option<String>,
    /// Extra class of the element holding the input and listbox.
    pub container_class_name: Option<String>,
    /// Extra class of the form element.
    pub form_class_name: Option<String>,
    /// Extra class of the form element control.
    pub form_control_class_name: Option<String>,
    /// Extra class of the element wrapping the input.
    pub input_container_class_name: Option<String>,
    /// Listbox is expanded.
    pub is_open: bool,
    /// Listbox is always shown, without a dropdown trigger.
    pub static_listbox: bool,
    /// Selected pills sit inline with the input.
    pub selected_options_inline: bool,
    /// Object switcher sits inline with the input.
    pub object_switcher_inline: bool,
    /// Render the object switcher.
    pub object_switcher: bool,
    /// Input icon placement.
    pub input_icon: InputIconPosition,
    /// Sprite of the left icon; `Standard` with [`InputIconPosition::Both`] renders an entity icon.
    pub input_icon_left_sprite: Option<IconSprite>,
    /// Symbol of the left icon.
    pub input_icon_left_symbol: Option<String>,
    /// Symbol of the right icon.
    pub input_icon_right_symbol: Option<String>,
    /// Render the right icon as a button.
    pub input_button_icon: bool,
    /// Current input value.
    pub value: Option<String>,
    /// Input suggests completions from the listbox.
    pub autocomplete: bool,
    /// Input is read-only.
    pub readonly: bool,
    /// Input `tabindex`.
    pub tab_index: Option<String>,
    /// Id of the controlled listbox. Defaults to [`LISTBOX_ID`].
    pub aria_controls: Option<String>,
    /// Id of the visually focused option.
    pub aria_activedescendant: Option<String>,
    /// Input placeholder.
    pub placeholder: Option<String>,
    /// Dropdown listbox rendered inside the combobox.
    pub listbox: Option<Markup>,
    /// Selected options, usually a horizontal [`Listbox`] of pills.
    pub children: Vec<Markup>,
}

impl ComboboxContainer {
    /// Builds the combobox tree.
    pub fn render(&self) -> Markup {
        let input_id = resolve_or(self.id.clone(), COMBOBOX_ID.to_string());

        let label = Element::new("label")
            .class(compose([
                ClassFragment::from("slds-form-element__label"),
                ClassFragment::from([("slds-assistive-text", self.hide_label)]),
            ]))
            .attr("for", input_id.clone())
            .child(resolve_or(self.label.clone(), "Search".to_string()));

        let selections = || Markup::Fragment(self.children.clone());

        let container = Element::new("div")
            .class(compose([
                ClassFragment::from("slds-combobox_container"),
                ConditionalSet::new()
                    .with("slds-has-inline-listbox", self.selected_options_inline)
                    .with("slds-has-object-switcher", self.object_switcher_inline)
                    .into(),
                self.container_class_name.as_ref().into(),
            ]))
            .opt_child(
                (self.input_icon == InputIconPosition::Left && self.selected_options_inline)
                    .then(|| {
                        SvgIcon::new(
                            "slds-icon slds-icon--x-small slds-combobox_container__icon",
                            IconSprite::Utility,
                            "search",
                        )
                    }),
            )
            .opt_child(self.object_switcher.then(|| ObjectSwitcher::default().render()))
            .opt_child(self.selected_options_inline.then(selections))
            .child(self.combobox(&input_id));

        let control = Element::new("div")
            .class(compose([
                ClassFragment::from("slds-form-element__control"),
                self.form_control_class_name.as_ref().into(),
            ]))
            .child(container)
            .opt_child((!self.selected_options_inline).then(selections));

        Element::new("div")
            .class(compose([
                ClassFragment::from("slds-form-element"),
                self.form_class_name.as_ref().into(),
            ]))
            .child(label)
            .child(control)
            .into()
    }

    fn combobox(&self, input_id: &str) -> Element {
        let position = self.input_icon;
        let form_element = Element::new("div")
            .class(compose([
                ClassFragment::from("slds-combobox__form-element"),
                ConditionalSet::new()
                    .with(
                        "slds-input-has-icon slds-input-has-icon--left",
                        position == InputIconPosition::Left,
                    )
                    .with(
                        "slds-input-has-icon slds-input-has-icon--right",
                        position == InputIconPosition::Right,
                    )
                    .with(
                        "slds-input-has-icon slds-input-has-icon--left-right",
                        position == InputIconPosition::Both,
                    )
                    .into(),
                self.input_container_class_name.as_ref().into(),
            ]))
            .opt_child(self.left_icon())
            .child(self.input(input_id))
            .opt_child(self.right_icon());

        Element::new("div")
            .class(compose([
                ClassFragment::from("slds-combobox"),
                ConditionalSet::new()
                    .with(
                        "slds-dropdown-trigger slds-dropdown-trigger_click",
                        !self.static_listbox,
                    )
                    .with("slds-is-open", self.is_open)
                    .into(),
                self.class_name.as_ref().into(),
            ]))
            .attr("aria-expanded", bool_token(self.is_open))
            .attr("aria-haspopup", "listbox")
            .attr("role", "combobox")
            .child(form_element)
            .opt_child(self.listbox.clone())
    }

    fn left_icon(&self) -> Option<Markup> {
        if self.input_icon == InputIconPosition::Both
            && self.input_icon_left_sprite == Some(IconSprite::Standard)
        {
            let symbol = resolve_or(self.input_icon_left_symbol.clone(), "account".to_string());
            let assistive = format!("{symbol} {}", self.value.as_deref().unwrap_or_default());
            return Some(
                StandardIcon {
                    container_class_name: Some("slds-combobox__input-entity-icon".to_string()),
                    class_name: Some("slds-icon--small".to_string()),
                    symbol: Some(symbol.clone()),
                    title: Some(symbol),
                    assistive_text: Some(assistive.trim_end().to_string()),
                }
                .render(),
            );
        }
        self.input_icon.has_left().then(|| {
            UtilityIcon {
                container_class_name: Some(
                    "slds-input__icon slds-input__icon--left".to_string(),
                ),
                class_name: Some("slds-icon slds-icon--x-small slds-icon-text-default".to_string()),
                symbol: Some(resolve_or(
                    self.input_icon_left_symbol.clone(),
                    "search".to_string(),
                )),
                ..UtilityIcon::default()
            }
            .render()
        })
    }

    // The plain right icon and the close button are mutually exclusive: a
    // button icon suppresses the plain icon whatever its symbol.
    fn right_icon(&self) -> Option<Markup> {
        if self.input_icon == InputIconPosition::Right && !self.input_button_icon {
            return Some(
                UtilityIcon {
                    container_class_name: Some(
                        "slds-input__icon slds-input__icon--right".to_string(),
                    ),
                    class_name: Some(
                        "slds-icon slds-icon--x-small slds-icon-text-default".to_string(),
                    ),
                    symbol: Some(resolve_or(
                        self.input_icon_right_symbol.clone(),
                        "search".to_string(),
                    )),
                    ..UtilityIcon::default()
                }
                .render(),
            );
        }
        (self.input_button_icon && self.input_icon_right_symbol.as_deref() == Some("close")).then(
            || {
                ButtonIcon {
                    class_name: Some("slds-input__icon slds-input__icon--right".to_string()),
                    symbol: Some("close".to_string()),
                    title: Some("Remove selected option".to_string()),
                    assistive_text: Some("Remove selected option".to_string()),
                    aria_haspopup: None,
                }
                .render()
            },
        )
    }

    fn input(&self, input_id: &str) -> Markup {
        let placeholder = resolve_or(
            self.placeholder.clone(),
            if self.autocomplete {
                "Search Salesforce".to_string()
            } else {
                "Select an Option".to_string()
            },
        );

        let mut attrs = vec![("id", input_id.to_string())];
        if let Some(active) = &self.aria_activedescendant {
            attrs.push(("aria-activedescendant", active.clone()));
        }
        if self.autocomplete {
            attrs.push(("aria-autocomplete", "list".to_string()));
        }
        attrs.push((
            "aria-controls",
            resolve_or(self.aria_controls.clone(), LISTBOX_ID.to_string()),
        ));
        attrs.push(("autocomplete", "off".to_string()));
        attrs.push(("role", "textbox".to_string()));
        attrs.push(("type", "text".to_string()));
        attrs.push(("placeholder", placeholder));
        if self.readonly || self.value.is_some() {
            attrs.push(("readonly", String::new()));
        }
        if let Some(value) = &self.value {
            attrs.push(("value", value.clone()));
        }
        if let Some(tab_index) = &self.tab_index {
            attrs.push(("tabindex", tab_index.clone()));
        }

        Input {
            class_name: Some("slds-combobox__input".to_string()),
            attrs,
        }
        .render()
    }
}

impl From<ComboboxContainer> for Markup {
    fn from(value: ComboboxContainer) -> Self {
        value.render()
    }
}

/// Popup menu button for choosing which object a combobox searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSwitcher {
    /// Extra class of the switcher.
    pub class_name: Option<String>,
}

impl ObjectSwitcher {
    /// Builds the switcher tree.
    pub fn render(&self) -> Markup {
        let icon = Element::new("span")
            .attr("class", "slds-icon_container slds-icon-standard-account")
            .attr("title", "Accounts")
            .child(SvgIcon::new("slds-icon slds-icon--small", IconSprite::Standard, "account"))
            .child(assistive_text("Searching in: Accounts"));

        Element::new("div")
            .class(compose([
                ClassFragment::from(
                    "slds-listbox--object-switcher slds-dropdown-trigger slds-dropdown-trigger--click",
                ),
                self.class_name.as_ref().into(),
            ]))
            .child(
                Element::new("button")
                    .attr("class", "slds-button slds-button--icon")
                    .attr("aria-haspopup", "true")
                    .attr("title", "Select object to search in")
                    .child(icon)
                    .child(SvgIcon::new(
                        "slds-button__icon slds-button__icon--x-small",
                        IconSprite::Utility,
                        "down",
                    )),
            )
            .into()
    }
}

impl From<ObjectSwitcher> for Markup {
    fn from(value: ObjectSwitcher) -> Self {
        value.render()
    }
}
