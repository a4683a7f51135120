//! Case-insensitive string set for token values.
use std::collections::BTreeMap;
use std::fmt;

/// A set of strings compared without regard to case.
///
/// The first spelling inserted for a value is the one reported back. Iteration
/// is ordered by the folded key so output is deterministic across runs.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct InvariantSet {
    /// Folded key → original spelling.
    entries: BTreeMap<String, String>,
}

impl InvariantSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning `false` if an equal value (ignoring case)
    /// was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let key = fold(&value);
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    /// Removes a value, ignoring case.
    pub fn remove(&mut self, value: &str) -> bool {
        self.entries.remove(&fold(value)).is_some()
    }

    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains_key(&fold(value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates values in their original spelling.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Values in `self` that are missing from `other`.
    pub fn difference<'a>(&'a self, other: &'a InvariantSet) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(|(key, _)| !other.entries.contains_key(*key))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_subset(&self, other: &InvariantSet) -> bool {
        self.entries.keys().all(|key| other.entries.contains_key(key))
    }

    /// Returns true if at least one value is shared with `other`.
    pub fn intersects(&self, other: &InvariantSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.entries.keys().any(|key| large.entries.contains_key(key))
    }

    /// Keeps only values matching the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|_, value| keep(value));
    }

    /// Joins the values with a separator, in iteration order.
    pub fn join(&self, separator: &str) -> String {
        self.iter().collect::<Vec<_>>().join(separator)
    }
}

fn fold(value: &str) -> String {
    value.to_lowercase()
}

impl PartialEq for InvariantSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.keys().eq(other.entries.keys())
    }
}

impl Eq for InvariantSet {}

impl fmt::Debug for InvariantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for InvariantSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for InvariantSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl From<Vec<String>> for InvariantSet {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for InvariantSet {
    fn from(values: [&str; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<InvariantSet> for Vec<String> {
    fn from(set: InvariantSet) -> Self {
        set.entries.into_values().collect()
    }
}
