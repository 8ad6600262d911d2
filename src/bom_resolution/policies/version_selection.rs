use crate::bom_resolution::domain::ComponentEntry;

/// VersionSelection policy for picking the entry of a component to resolve
///
/// A BOM lists one or more version entries per component but carries no
/// marker for the active one. Every accessor goes through this policy so a
/// future explicit marker only has to be handled here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionSelection {
    /// The first entry in document order
    #[default]
    FirstEntry,
}

impl VersionSelection {
    /// Selects an entry, or `None` when the component has no entries
    pub fn select<'a>(&self, entries: &'a [ComponentEntry]) -> Option<&'a ComponentEntry> {
        match self {
            VersionSelection::FirstEntry => entries.first(),
        }
    }
}
