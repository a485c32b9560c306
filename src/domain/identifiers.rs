//! Identifiers for reporting tables and stored rows

use nutype::nutype;

/// Unique identifier for a reporting table
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
    AsRef
))]
pub struct TableId(i64);

/// Monotonic version of a stored row
///
/// Bumped by the upsert collaborator on every overwrite; concurrent
/// writers to the same `(table, date)` key resolve last-writer-wins.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
    AsRef
))]
pub struct RowVersion(u64);

impl RowVersion {
    /// Version assigned to a freshly inserted row
    pub fn initial() -> Self {
        Self::new(1)
    }

    /// Version after an overwrite
    pub fn bumped(&self) -> Self {
        Self::new(self.into_inner().saturating_add(1))
    }
}
