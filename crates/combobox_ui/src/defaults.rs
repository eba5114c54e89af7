//! Attribute defaulting chains.
//!
//! Optional display properties resolve to the first *defined* value among an
//! explicit prop, a lazily computed fallback, and a hardcoded default. Only
//! `None` counts as absent: an explicit empty string is kept as-is.

/// Returns `explicit` when set, else the result of `computed`, else `fallback`.
///
/// `computed` runs only when `explicit` is `None`.
pub fn resolve<T, F>(explicit: Option<T>, computed: F, fallback: T) -> T
where
    F: FnOnce() -> Option<T>,
{
    match explicit {
        Some(value) => value,
        None => computed().unwrap_or(fallback),
    }
}

/// Two-step chain: `explicit` when set, else `fallback`.
pub fn resolve_or<T>(explicit: Option<T>, fallback: T) -> T {
    resolve(explicit, || None, fallback)
}

/// Upper-cases the first character of `value`, leaving the rest untouched.
pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
