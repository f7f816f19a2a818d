//! Fields bound to a logger and re-emitted on every record

use super::field::Field;
use std::sync::Arc;

/// Ordered, persistent set of bound fields
///
/// Each `with` call contributes one shared group. Groups are never mutated
/// once attached, so cloning a `BoundFields` only bumps reference counts and a
/// derived set never affects its parent.
///
/// # Example
///
/// ```
/// use rust_field_logger::{BoundFields, Field};
///
/// let base = BoundFields::new().with(&[Field::new("service", "api")]);
/// let child = base.with(&[Field::new("request_id", 7)]);
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(child.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoundFields {
    groups: Vec<Arc<[Field]>>,
}

impl BoundFields {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Return a new set holding these groups followed by `fields`
    #[must_use]
    pub fn with(&self, fields: &[Field]) -> Self {
        let mut groups = self.groups.clone();
        if !fields.is_empty() {
            groups.push(Arc::from(fields));
        }
        Self { groups }
    }

    /// Iterate fields in attachment order
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.groups.iter().flat_map(|group| group.iter())
    }

    /// Number of attached groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of bound fields
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
