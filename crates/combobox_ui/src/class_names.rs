//! Conditional class-name composition.
//!
//! Every primitive builds its `class` attribute through [`compose`]: an ordered
//! list of [`ClassFragment`]s is flattened into a single space-joined string of
//! unique tokens. Fragments that resolve to nothing are skipped silently so a
//! malformed or absent class never breaks a render pass.

use std::borrow::Cow;
use std::fmt;

/// One entry in a class-name composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassFragment {
    /// Class tokens that are always included.
    Literal(Cow<'static, str>),
    /// Class tokens gated by a boolean condition, in insertion order.
    ConditionalSet(ConditionalSet),
    /// Placeholder that contributes nothing.
    Empty,
}

impl From<&'static str> for ClassFragment {
    fn from(value: &'static str) -> Self {
        Self::Literal(Cow::Borrowed(value))
    }
}

impl From<String> for ClassFragment {
    fn from(value: String) -> Self {
        Self::Literal(Cow::Owned(value))
    }
}

impl From<&String> for ClassFragment {
    fn from(value: &String) -> Self {
        Self::Literal(Cow::Owned(value.clone()))
    }
}

impl From<ConditionalSet> for ClassFragment {
    fn from(value: ConditionalSet) -> Self {
        Self::ConditionalSet(value)
    }
}

impl<T> From<Option<T>> for ClassFragment
where
    T: Into<ClassFragment>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<const N: usize> From<[(&'static str, bool); N]> for ClassFragment {
    fn from(value: [(&'static str, bool); N]) -> Self {
        Self::ConditionalSet(value.into_iter().collect())
    }
}

/// Ordered mapping from candidate class tokens to their inclusion condition.
///
/// Keys keep their insertion order. Mutually exclusive keys (for example two
/// orientation classes) are the caller's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionalSet {
    entries: Vec<(Cow<'static, str>, bool)>,
}

impl ConditionalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key`, included in the output iff `enabled`.
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, enabled: bool) -> Self {
        self.entries.push((key.into(), enabled));
        self
    }

    /// Returns the keys in insertion order together with their conditions.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(key, enabled)| (key.as_ref(), *enabled))
    }
}

impl<K> FromIterator<(K, bool)> for ConditionalSet
where
    K: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, enabled)| (key.into(), enabled))
                .collect(),
        }
    }
}

/// Space-joined, order-preserving, duplicate-free class tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedClassName {
    tokens: Vec<String>,
}

impl ComposedClassName {
    /// Tokens in first-occurrence order.
    pub fn as_tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns `true` when `token` is part of the composed class.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|candidate| candidate == token)
    }

    /// Returns `true` when no fragment contributed a token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consumes the composition and returns the joined class string.
    pub fn into_string(self) -> String {
        self.tokens.join(" ")
    }

    fn push(&mut self, raw: &str) {
        for token in raw.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }
}

impl fmt::Display for ComposedClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<ComposedClassName> for String {
    fn from(value: ComposedClassName) -> Self {
        value.into_string()
    }
}

/// Flattens `fragments` left to right into a [`ComposedClassName`].
///
/// Literals contribute their whitespace-separated tokens; a conditional set
/// contributes the tokens of each key whose condition is `true`. A token seen
/// twice is kept at its first position only.
pub fn compose<I>(fragments: I) -> ComposedClassName
where
    I: IntoIterator,
    I::Item: Into<ClassFragment>,
{
    let mut composed = ComposedClassName::default();
    for fragment in fragments {
        match fragment.into() {
            ClassFragment::Literal(literal) => composed.push(&literal),
            ClassFragment::ConditionalSet(set) => {
                for (key, enabled) in set.entries() {
                    if enabled {
                        composed.push(key);
                    }
                }
            }
            ClassFragment::Empty => {}
        }
    }
    composed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_input_composes_to_empty_string() {
        assert_eq!(compose(Vec::<ClassFragment>::new()).to_string(), "");
        assert_eq!(compose([ConditionalSet::new()]).to_string(), "");
        assert_eq!(
            compose([ClassFragment::Empty, ClassFragment::from(""), "   ".into()]).to_string(),
            ""
        );
    }

    #[test]
    fn listbox_orientation_scenario() {
        let composed = compose([
            ClassFragment::from("slds-listbox"),
            ClassFragment::from([
                ("slds-listbox--vertical", true),
                ("slds-listbox--horizontal", false),
            ]),
            ClassFragment::from("extra"),
        ]);
        assert_eq!(
            composed.to_string(),
            "slds-listbox slds-listbox--vertical extra"
        );
    }

    #[test]
    fn set_keys_follow_their_conditions() {
        let cases = [
            (true, true, "a b"),
            (true, false, "a"),
            (false, true, "b"),
            (false, false, ""),
        ];
        for (a, b, expected) in cases {
            let composed = compose([ConditionalSet::new().with("a", a).with("b", b)]);
            assert_eq!(composed.to_string(), expected, "a={a} b={b}");
            assert_eq!(composed.contains("a"), a);
            assert_eq!(composed.contains("b"), b);
        }
    }

    #[test]
    fn duplicates_keep_first_position() {
        let composed = compose([
            ClassFragment::from("slds-media--small slds-media--center"),
            ClassFragment::from([("slds-media--center", true), ("slds-is-selected", true)]),
            ClassFragment::from("slds-media--small"),
        ]);
        assert_eq!(
            composed.as_tokens(),
            ["slds-media--small", "slds-media--center", "slds-is-selected"]
        );
    }

    #[test]
    fn false_entry_does_not_block_later_true_entry() {
        let composed = compose([
            ClassFragment::from([("shared", false)]),
            ClassFragment::from("first"),
            ClassFragment::from([("shared", true)]),
        ]);
        assert_eq!(composed.to_string(), "first shared");
    }

    #[test]
    fn multi_token_keys_share_tokens() {
        let composed = compose([ConditionalSet::new()
            .with("slds-input-has-icon slds-input-has-icon--left", false)
            .with("slds-input-has-icon slds-input-has-icon--right", true)
            .with("slds-input-has-icon slds-input-has-icon--left-right", false)]);
        assert_eq!(
            composed.to_string(),
            "slds-input-has-icon slds-input-has-icon--right"
        );
    }

    #[test]
    fn optional_fragments_resolve_to_empty() {
        let missing: Option<String> = None;
        let present = Some("slds-dropdown".to_string());
        let composed = compose([
            ClassFragment::from("slds-listbox"),
            missing.into(),
            present.into(),
        ]);
        assert_eq!(composed.into_string(), "slds-listbox slds-dropdown");
    }

    #[test]
    fn no_duplicates_across_mixed_fragments() {
        let fragments = vec![
            ClassFragment::from("a b a"),
            ClassFragment::from([("b", true), ("c", true), ("d", false)]),
            ClassFragment::Empty,
            ClassFragment::from("c  e"),
            ClassFragment::from([("d", true)]),
        ];
        let composed = compose(fragments);
        assert_eq!(composed.as_tokens(), ["a", "b", "c", "e", "d"]);
        assert!(!composed.to_string().contains("  "));
    }

    const ALPHABET: [&str; 6] = ["a", "b", "c", "slds-x", "slds-y", "slds-z"];

    fn token_list() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..3)
            .prop_map(|tokens| tokens.join(" "))
    }

    fn fragment() -> impl Strategy<Value = ClassFragment> {
        prop_oneof![
            token_list().prop_map(ClassFragment::from),
            prop::collection::vec((token_list(), any::<bool>()), 0..4)
                .prop_map(|entries| ClassFragment::ConditionalSet(entries.into_iter().collect())),
            Just(ClassFragment::Empty),
        ]
    }

    /// Reference model: every included token in order, first occurrence kept.
    fn expected_tokens(fragments: &[ClassFragment]) -> Vec<String> {
        let included = fragments.iter().flat_map(|fragment| match fragment {
            ClassFragment::Literal(literal) => vec![literal.to_string()],
            ClassFragment::ConditionalSet(set) => set
                .entries()
                .filter(|(_, enabled)| *enabled)
                .map(|(key, _)| key.to_string())
                .collect(),
            ClassFragment::Empty => Vec::new(),
        });
        let mut tokens: Vec<String> = Vec::new();
        for raw in included {
            for token in raw.split_whitespace() {
                if !tokens.iter().any(|seen| seen == token) {
                    tokens.push(token.to_string());
                }
            }
        }
        tokens
    }

    proptest! {
        #[test]
        fn composition_matches_first_occurrence_model(
            fragments in prop::collection::vec(fragment(), 0..6)
        ) {
            let composed = compose(fragments.clone());
            let expected = expected_tokens(&fragments);
            prop_assert_eq!(composed.as_tokens(), expected.as_slice());

            let joined = composed.to_string();
            let mut split: Vec<&str> = joined.split(' ').filter(|token| !token.is_empty()).collect();
            let count = split.len();
            split.sort_unstable();
            split.dedup();
            prop_assert_eq!(split.len(), count);
            prop_assert!(!joined.starts_with(' ') && !joined.ends_with(' '));
        }

        #[test]
        fn single_set_key_appears_iff_enabled(
            flags in prop::collection::vec(any::<bool>(), ALPHABET.len())
        ) {
            let set: ConditionalSet = ALPHABET.iter().copied().zip(flags.iter().copied()).collect();
            let composed = compose([set]);
            for (key, enabled) in ALPHABET.iter().zip(&flags) {
                prop_assert_eq!(composed.contains(key), *enabled);
            }
        }
    }
}
