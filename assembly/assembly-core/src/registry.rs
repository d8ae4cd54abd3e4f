//! The tree-wide mate registry.
//!
//! One registry exists per assembly, owned by the root
//! [`Assembly`](crate::Assembly) object and passed by reference into the
//! algorithms that need it. Each entry pairs a mate frame with the selector
//! path of its owning node.

use std::collections::HashMap;

use assembly_types::Mate;

/// A registered mate: its frame plus the selector of the owning node.
#[derive(Debug, Clone, PartialEq)]
pub struct MateEntry {
    /// The mate frame. Expressed in the owner's post-relocation local frame
    /// once the assembly has been relocated; before that, in the frame
    /// supplied at registration time.
    pub mate: Mate,
    /// Root-relative selector path identifying the owning node.
    pub owner: String,
}

/// Mapping from mate name to [`MateEntry`].
///
/// Mates are registered once and never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MateRegistry {
    entries: HashMap<String, MateEntry>,
}

impl MateRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered mates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no mates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a mate entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MateEntry> {
        self.entries.get(name)
    }

    /// Check whether a mate name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Register a mate entry under `name`, replacing any previous entry
    /// with the same name.
    pub fn insert(&mut self, name: impl Into<String>, entry: MateEntry) {
        self.entries.insert(name.into(), entry);
    }

    /// Iterate over `(name, entry)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MateEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate mutably over entries; used by relocation to re-express mate
    /// frames.
    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = &mut MateEntry> {
        self.entries.values_mut()
    }
}
