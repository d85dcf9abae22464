//! Bidirectional name resolution for the canonical enumerations.
//!
//! Every enumeration exposes one display name through [`Named::name`] and a
//! list of accepted alternates. [`resolve_name`] maps any of those spellings
//! back to the variant, ignoring case, spaces and punctuation.

use crate::error::VedicError;

/// An enumeration with a closed, ordered set of named members.
pub trait Named: Copy + 'static {
    /// What the enumeration is called in error messages.
    const KIND: &'static str;

    /// Every member in canonical order.
    fn members() -> &'static [Self];

    /// Canonical display name.
    fn display_name(self) -> &'static str;

    /// Alternate spellings accepted on input (English names, transliterations).
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }
}

fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve a name or alias to a member of `T`.
pub fn resolve_name<T: Named>(input: &str) -> Result<T, VedicError> {
    let key = fold(input);
    let unknown = || VedicError::UnknownName {
        kind: T::KIND,
        name: input.to_string(),
    };
    if key.is_empty() {
        return Err(unknown());
    }
    T::members()
        .iter()
        .copied()
        .find(|m| fold(m.display_name()) == key || m.aliases().iter().any(|a| fold(a) == key))
        .ok_or_else(unknown)
}
