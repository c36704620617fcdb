//! Find-operation snapshots.
//!
//! A snapshot is the ordered list of object identifiers that matched the
//! search template when the search was initiated. It never re-evaluates the
//! store; later changes to the store are not visible to an open search.

use tokenstore_core::{Attribute, ObjectId, Result};
use tokenstore_objects::ObjectStore;

/// The frozen match list of one search plus its read cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindSnapshot {
    matches: Vec<ObjectId>,
    cursor: usize,
}

impl FindSnapshot {
    /// Match every record in `store` against `template`, in store order.
    ///
    /// An empty match set is a valid, empty snapshot. Allocation failure
    /// yields `HostMemory` and discards the partial list.
    pub fn build(store: &ObjectStore, template: &[Attribute]) -> Result<Self> {
        let mut matches = Vec::new();
        for object in store.filter(template) {
            matches.try_reserve(1)?;
            matches.push(object.id());
        }
        Ok(Self { matches, cursor: 0 })
    }

    /// Copy up to `max_count` identifiers from the cursor and advance it.
    ///
    /// An exhausted snapshot yields an empty page.
    pub fn next_page(&mut self, max_count: usize) -> Vec<ObjectId> {
        let end = self.cursor.saturating_add(max_count).min(self.matches.len());
        let page = self.matches[self.cursor..end].to_vec();
        self.cursor = end;
        page
    }

    /// Fill `out` from the cursor and return how many slots were written.
    pub fn fill(&mut self, out: &mut [ObjectId]) -> usize {
        let end = self.cursor.saturating_add(out.len()).min(self.matches.len());
        let count = end - self.cursor;
        out[..count].copy_from_slice(&self.matches[self.cursor..end]);
        self.cursor = end;
        count
    }

    /// All identifiers captured at initiation.
    pub fn matches(&self) -> &[ObjectId] {
        &self.matches
    }

    /// Identifiers not yet paged out.
    pub fn remaining(&self) -> usize {
        self.matches.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tokenstore_core::AttrType;
    use tokenstore_objects::TokenObject;

    fn store_of(labels: &[&[u8]]) -> ObjectStore {
        let mut store = ObjectStore::new();
        for (i, label) in labels.iter().enumerate() {
            let mut obj = TokenObject::new();
            obj.set_id(ObjectId(i as u64 + 1)).unwrap();
            obj.append_attributes(&[Attribute::new(AttrType::LABEL, label.to_vec())])
                .unwrap();
            store.insert(obj).unwrap();
        }
        store
    }

    #[test]
    fn test_build_filters_in_store_order() {
        let store = store_of(&[b"a", b"b", b"a", b"c"]);
        let snap =
            FindSnapshot::build(&store, &[Attribute::new(AttrType::LABEL, b"a".to_vec())]).unwrap();
        assert_eq!(snap.matches(), &[ObjectId(1), ObjectId(3)]);
    }

    #[test]
    fn test_empty_store_gives_empty_snapshot() {
        let mut snap = FindSnapshot::build(&ObjectStore::new(), &[]).unwrap();
        assert!(snap.is_empty());
        assert!(snap.next_page(10).is_empty());
    }

    #[test]
    fn test_paging() {
        let store = store_of(&[b"a", b"b", b"c", b"d", b"e"]);
        let mut snap = FindSnapshot::build(&store, &[]).unwrap();

        assert_eq!(snap.next_page(2), vec![ObjectId(1), ObjectId(2)]);
        assert_eq!(snap.remaining(), 3);
        assert_eq!(snap.next_page(0), vec![]);
        assert_eq!(snap.next_page(10), vec![ObjectId(3), ObjectId(4), ObjectId(5)]);
        assert_eq!(snap.next_page(10), vec![]);
        assert_eq!(snap.next_page(usize::MAX), vec![]);
    }

    #[test]
    fn test_fill_writes_prefix() {
        let store = store_of(&[b"a", b"b", b"c"]);
        let mut snap = FindSnapshot::build(&store, &[]).unwrap();

        let mut out = [ObjectId::INVALID; 2];
        assert_eq!(snap.fill(&mut out), 2);
        assert_eq!(out, [ObjectId(1), ObjectId(2)]);

        let mut out = [ObjectId::INVALID; 4];
        assert_eq!(snap.fill(&mut out), 1);
        assert_eq!(out[0], ObjectId(3));
        assert_eq!(out[1], ObjectId::INVALID);
        assert_eq!(snap.fill(&mut out), 0);
    }

    proptest! {
        #[test]
        fn prop_paging_yields_each_match_once(
            count in 0usize..40,
            pages in prop::collection::vec(0usize..7, 1..30),
        ) {
            let labels: Vec<Vec<u8>> = (0..count).map(|i| vec![i as u8]).collect();
            let refs: Vec<&[u8]> = labels.iter().map(Vec::as_slice).collect();
            let store = store_of(&refs);
            let mut snap = FindSnapshot::build(&store, &[]).unwrap();

            let mut seen = Vec::new();
            for k in &pages {
                let page = snap.next_page(*k);
                prop_assert!(page.len() <= *k);
                seen.extend(page);
            }
            seen.extend(snap.next_page(count));

            prop_assert_eq!(seen.as_slice(), snap.matches());
            prop_assert_eq!(snap.remaining(), 0);
        }
    }
}
