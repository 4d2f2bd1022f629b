//! Insertion-ordered attribute lists.
//!
//! Attribute order is observable in the serialized output, so attributes
//! are kept as an ordered list of pairs rather than a map. `set` on an
//! existing name replaces the value in place, keeping the original
//! position; `merge` layers another list on top with the other side
//! winning ties.

/// An ordered list of `name="value"` attribute pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrList {
    pairs: Vec<(String, String)>,
}

impl AttrList {
    /// An empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Build a list from static pairs, preserving their order.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut list = Self::new();
        for (name, value) in pairs {
            list.set(*name, *value);
        }
        list
    }

    /// Whether the list has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Set `name` to `value`, replacing an existing entry in place or
    /// appending a new one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Append a space-separated word to `name` (the `class` accumulation
    /// rule), or set it if absent.
    pub fn append_word(&mut self, name: &str, word: &str) {
        match self.pairs.iter_mut().find(|(n, _)| n == name) {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(word);
            }
            None => self.set(name, word),
        }
    }

    /// The value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Layer `other` on top of this list; `other` wins key collisions,
    /// colliding keys keep their original position.
    pub fn merge(&mut self, other: Self) {
        for (name, value) in other.pairs {
            self.set(name, value);
        }
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Build an [`AttrList`] from `name => value` pairs.
///
/// ```
/// use vellum_builder::attrs;
///
/// let a = attrs!["class" => "wide", "id" => "main"];
/// assert_eq!(a.get("id"), Some("main"));
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::AttrList::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut list = $crate::AttrList::new();
        $(list.set($name, $value);)+
        list
    }};
}
