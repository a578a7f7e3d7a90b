use std::collections::HashMap;

use crate::marker::ObjectiveMarker;

mod section;

/// Every marker of a map, keyed by the id scripts chose for it.
///
/// Markers are kept densely packed so iteration never sees holes: removing one moves the last
/// marker into its slot. Each marker knows its slot through [`ObjectiveMarker::array_index`].
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    /// Id to slot in `dense`.
    indices: HashMap<i32, usize>,
    dense: Vec<(i32, ObjectiveMarker)>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `marker` under `id`. Adding `None` does nothing.
    ///
    /// If `id` is already taken, the new marker takes over the slot of the old one, which is returned.
    pub fn add(
        &mut self,
        id: i32,
        marker: impl Into<Option<ObjectiveMarker>>,
    ) -> Option<ObjectiveMarker> {
        let mut marker = marker.into()?;

        if let Some(&index) = self.indices.get(&id) {
            marker.set_array_index(index);
            tracing::debug!("Replacing marker {id} in slot {index}");
            return Some(std::mem::replace(&mut self.dense[index].1, marker));
        }

        let index = self.dense.len();
        marker.set_array_index(index);
        self.dense.push((id, marker));
        self.indices.insert(id, index);

        None
    }

    pub fn get(&self, id: i32) -> Option<&ObjectiveMarker> {
        self.indices.get(&id).map(|&index| &self.dense[index].1)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut ObjectiveMarker> {
        self.indices
            .get(&id)
            .map(|&index| &mut self.dense[index].1)
    }

    pub fn has(&self, id: i32) -> bool {
        self.indices.contains_key(&id)
    }

    /// Removes and returns the marker stored under `id`, if any.
    /// The last marker is moved into the freed slot.
    pub fn remove(&mut self, id: i32) -> Option<ObjectiveMarker> {
        let index = self.indices.remove(&id)?;
        let (_, removed) = self.dense.swap_remove(index);

        if let Some((moved_id, moved)) = self.dense.get_mut(index) {
            tracing::debug!("Removed marker {id}, moved marker {moved_id} into slot {index}");
            moved.set_array_index(index);
            self.indices.insert(*moved_id, index);
        }

        Some(removed)
    }

    pub fn size(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.dense.clear();
    }

    /// Iterates over all markers in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.dense.iter())
    }

    /// Like [`MarkerStore::iter`], but also yields the id of each marker.
    pub fn iter_with_ids(&self) -> impl ExactSizeIterator<Item = (i32, &ObjectiveMarker)> {
        self.dense.iter().map(|(id, marker)| (*id, marker))
    }

    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut ObjectiveMarker> {
        self.dense.iter_mut().map(|(_, marker)| marker)
    }
}

/// Iterator over the markers of a [`MarkerStore`], in slot order.
pub struct Iter<'a>(std::slice::Iter<'a, (i32, ObjectiveMarker)>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ObjectiveMarker;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, marker)| marker)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a MarkerStore {
    type Item = &'a ObjectiveMarker;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::marker::{LineMarker, MarkerKind, PointMarker, ShapeMarker};

    use super::*;

    const TEST_ID: i32 = 42;

    fn point(x: f32, y: f32) -> ObjectiveMarker {
        ObjectiveMarker::from(PointMarker::new(x, y))
    }

    /// Every stored marker has to sit in the slot it thinks it does.
    fn assert_consistent(store: &MarkerStore) {
        assert_eq!(store.indices.len(), store.dense.len());
        for (index, (id, marker)) in store.dense.iter().enumerate() {
            assert_eq!(marker.array_index(), index);
            assert_eq!(store.indices.get(id), Some(&index));
        }
    }

    #[test]
    fn basic_operations() {
        let mut store = MarkerStore::new();
        assert_eq!(store.size(), 0);
        assert!(store.is_empty());

        let marker = point(5.0, 5.0);
        store.add(TEST_ID, marker.clone());

        assert_eq!(store.size(), 1);
        assert!(store.has(TEST_ID));
        assert_eq!(store.get(TEST_ID), Some(&marker));

        assert_eq!(store.remove(TEST_ID), Some(marker));
        assert_eq!(store.size(), 0);
        assert!(!store.has(TEST_ID));
        assert_eq!(store.get(TEST_ID), None);
    }

    #[test]
    fn add_none() {
        let mut store = MarkerStore::new();
        assert_eq!(store.add(1, None), None);
        assert_eq!(store.size(), 0);
        assert!(!store.has(1));
    }

    #[test]
    fn add_replaces() {
        let mut store = MarkerStore::new();
        store.add(7, point(0.0, 0.0));
        store.add(1, point(1.0, 1.0));

        let replacement = ObjectiveMarker::from(ShapeMarker::new(2.0, 2.0));
        let previous = store.add(1, replacement);

        assert_eq!(previous, Some({
            let mut previous = point(1.0, 1.0);
            previous.set_array_index(1);
            previous
        }));
        assert_eq!(store.size(), 2);

        let stored = store.get(1).unwrap();
        assert_eq!(stored.array_index(), 1);
        assert!(matches!(stored.kind, MarkerKind::Shape(_)));
        assert_consistent(&store);
    }

    #[test]
    fn remove_middle() {
        let mut store = MarkerStore::new();
        store.add(1, point(1.0, 1.0));
        store.add(2, point(2.0, 2.0));
        store.add(3, point(3.0, 3.0));

        store.remove(2);
        assert_eq!(store.size(), 2);

        // the last marker took over the freed slot
        assert_eq!(store.get(3).unwrap().array_index(), 1);
        assert_eq!(store.get(1).unwrap().array_index(), 0);

        let positions: Vec<f32> = store.iter().map(|marker| marker.kind.pos().x).collect();
        assert_eq!(positions, vec![1.0, 3.0]);
        assert_consistent(&store);
    }

    #[test]
    fn remove_last() {
        let mut store = MarkerStore::new();
        store.add(1, point(1.0, 1.0));
        store.add(2, point(2.0, 2.0));

        store.remove(2);
        assert_eq!(store.size(), 1);
        assert!(store.has(1));
        assert!(!store.has(2));
        assert_eq!(store.get(1).unwrap().array_index(), 0);
        assert_consistent(&store);
    }

    #[test]
    fn remove_missing() {
        let mut store = MarkerStore::new();
        store.add(1, point(1.0, 1.0));

        assert_eq!(store.remove(999), None);
        assert_eq!(store.size(), 1);
        assert_consistent(&store);
    }

    #[test]
    fn iteration() {
        let mut store = MarkerStore::new();
        assert_eq!(store.iter().count(), 0);

        for i in 0..5 {
            store.add(i, point(i as f32, i as f32));
        }

        let mut seen: Vec<i32> = Vec::new();
        for marker in &store {
            seen.push(marker.kind.pos().x as i32);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(store.iter().len(), 5);

        let ids: Vec<i32> = store.iter_with_ids().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn iter_mut() {
        let mut store = MarkerStore::new();
        store.add(1, point(1.0, 1.0));
        store.add(2, ObjectiveMarker::from(LineMarker::new(0.0, 0.0, 1.0, 1.0)));

        for marker in store.iter_mut() {
            marker.minimap = true;
        }

        assert!(store.iter().all(|marker| marker.minimap));
        assert_consistent(&store);
    }

    #[test]
    fn clear() {
        let mut store = MarkerStore::new();
        store.add(1, point(1.0, 1.0));
        store.add(2, point(2.0, 2.0));

        store.clear();
        assert_eq!(store.size(), 0);
        assert!(!store.has(1));
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn arbitrary_ids() {
        let mut store = MarkerStore::new();
        store.add(i32::MIN, point(0.0, 0.0));
        store.add(-1, point(1.0, 1.0));
        store.add(i32::MAX, point(2.0, 2.0));

        assert!(store.has(i32::MIN));
        assert!(store.has(i32::MAX));
        store.remove(i32::MIN);
        assert_eq!(store.get(i32::MAX).unwrap().array_index(), 0);
        assert_consistent(&store);
    }

    #[test]
    fn invariants_hold_over_many_operations() {
        let mut store = MarkerStore::new();

        // small linear congruential generator, so the sequence is the same on every run
        let mut state: u32 = 12345;
        let mut next = || {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            (state >> 16) % 32
        };

        for _ in 0..2000 {
            let id = next() as i32;
            if next() % 3 == 0 {
                let had = store.has(id);
                let size = store.size();
                store.remove(id);
                assert_eq!(store.size(), if had { size - 1 } else { size });
            } else {
                let marker = point(id as f32, 0.0);
                store.add(id, marker);
                assert!(store.has(id));
                assert_eq!(store.get(id).unwrap().kind.pos().x, id as f32);
            }
            assert_consistent(&store);
        }
    }
}
