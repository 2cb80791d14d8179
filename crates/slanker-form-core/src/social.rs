//! Social-media row bookkeeping.
//!
//! Owns row identity and ordering; the row values themselves live in the
//! form inputs. The list is never left empty: removing the last row
//! immediately creates a replacement.

/// Identifier of one social row, unique for the lifetime of the list.
pub type RowId = u32;

#[derive(Debug, Clone, Default)]
pub struct SocialRows {
    next_id: RowId,
    ids: Vec<RowId>,
}

impl SocialRows {
    pub fn new() -> SocialRows {
        SocialRows::default()
    }

    /// Append a new empty row and return its id.
    pub fn add(&mut self) -> RowId {
        self.next_id += 1;
        let id = self.next_id;
        self.ids.push(id);
        id
    }

    /// Remove the row with `id`. Returns the id of the replacement row when
    /// the removal emptied the list, `None` otherwise. Unknown ids are
    /// ignored.
    pub fn remove(&mut self, id: RowId) -> Option<RowId> {
        self.ids.retain(|&existing| existing != id);
        if self.ids.is_empty() {
            return Some(self.add());
        }
        None
    }

    /// Drop every row and start over with a single empty one; returns the
    /// new row's id.
    pub fn reset(&mut self) -> RowId {
        self.ids.clear();
        self.add()
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// DOM id for a row element.
    pub fn dom_id(id: RowId) -> String {
        format!("social-{id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut rows = SocialRows::new();
        let a = rows.add();
        let b = rows.add();
        let c = rows.add();
        assert!(a < b && b < c);
        assert_eq!(rows.ids(), &[a, b, c]);
    }

    #[test]
    fn removing_a_middle_row_keeps_the_rest() {
        let mut rows = SocialRows::new();
        let a = rows.add();
        let b = rows.add();
        assert_eq!(rows.remove(a), None);
        assert_eq!(rows.ids(), &[b]);
    }

    #[test]
    fn removing_the_last_row_leaves_exactly_one_fresh_row() {
        let mut rows = SocialRows::new();
        let only = rows.add();
        let replacement = rows.remove(only).expect("replacement row");
        assert_ne!(replacement, only);
        assert_eq!(rows.ids(), &[replacement]);
    }

    #[test]
    fn removing_an_unknown_id_changes_nothing() {
        let mut rows = SocialRows::new();
        let a = rows.add();
        assert_eq!(rows.remove(999), None);
        assert_eq!(rows.ids(), &[a]);
    }

    #[test]
    fn reset_collapses_to_a_single_row() {
        let mut rows = SocialRows::new();
        rows.add();
        rows.add();
        rows.add();
        let fresh = rows.reset();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.ids(), &[fresh]);
    }

    #[test]
    fn dom_ids_follow_the_row_counter() {
        let mut rows = SocialRows::new();
        let id = rows.add();
        assert_eq!(SocialRows::dom_id(id), format!("social-{id}"));
    }
}
