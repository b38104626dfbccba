//! Todo List
//!
//! The ordered collection and the only code that mutates it.
//! Order is meaningful: it is the display order and the index space used
//! by drag reordering.

use crate::error::{TodoError, TodoResult};
use crate::filter::{visible_positions, FilterMode};
use crate::item::TodoItem;

/// Ordered todo collection with its id allocator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    /// Next id to hand out; ids are never reused
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Collection position of the item with `id`
    pub fn position(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Number of items not yet completed
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    /// Append a new item, returning its id
    pub fn add(&mut self, text: &str) -> TodoResult<u32> {
        if text.trim().is_empty() {
            return Err(TodoError::InvalidInput);
        }
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
        self.items.push(TodoItem::new(id, text));
        log::debug!("[STORE] add #{} ({} items)", id, self.items.len());
        Ok(id)
    }

    /// Flip the completion flag of the item with `id`
    pub fn toggle_complete(&mut self, id: u32) -> TodoResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        item.completed = !item.completed;
        log::debug!("[STORE] toggle #{} -> completed={}", id, item.completed);
        Ok(())
    }

    /// Remove the item with `id`, returning it
    pub fn delete(&mut self, id: u32) -> TodoResult<TodoItem> {
        let pos = self.position(id).ok_or(TodoError::NotFound(id))?;
        log::debug!("[STORE] delete #{}", id);
        Ok(self.items.remove(pos))
    }

    /// Remove every completed item, returning how many went
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        log::debug!("[STORE] clear completed: removed {}", removed);
        removed
    }

    /// Move the item at `from` so that it ends up at `to`
    ///
    /// Both are collection positions and must be `< len`.
    pub fn move_item(&mut self, from: usize, to: usize) -> TodoResult<()> {
        let len = self.items.len();
        for index in [from, to] {
            if index >= len {
                return Err(TodoError::OutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        // rotate keeps the move a single step: the item is never absent
        if from < to {
            self.items[from..=to].rotate_left(1);
        } else {
            self.items[to..=from].rotate_right(1);
        }
        log::debug!("[STORE] move {} -> {}", from, to);
        Ok(())
    }

    /// Move between rows of the view filtered by `mode`
    ///
    /// The dragged item takes the collection position currently held by
    /// visible row `to`; hidden items keep their positions relative to
    /// each other.
    pub fn move_visible(&mut self, mode: FilterMode, from: usize, to: usize) -> TodoResult<()> {
        let positions = visible_positions(&self.items, mode);
        let len = positions.len();
        let resolve = |index: usize| {
            positions
                .get(index)
                .copied()
                .ok_or(TodoError::OutOfRange { index, len })
        };
        let (from, to) = (resolve(from)?, resolve(to)?);
        self.move_item(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn list_of(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            list.add(text).unwrap();
        }
        list
    }

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_incomplete_item() {
        let mut list = TodoList::new();
        let id = list.add("Buy milk").unwrap();

        assert_eq!(list.len(), 1);
        let item = list.get(id).unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_add_blank_text_is_rejected() {
        let mut list = list_of(&["A"]);
        let before = list.clone();

        assert_eq!(list.add(""), Err(TodoError::InvalidInput));
        assert_eq!(list.add("   "), Err(TodoError::InvalidInput));
        assert_eq!(list, before);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        list.delete(a).unwrap();
        let b = list.add("B").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = list_of(&["A", "B"]);
        let id = list.items()[0].id;

        list.toggle_complete(id).unwrap();
        assert!(list.get(id).unwrap().completed);
        assert!(!list.items()[1].completed);

        list.toggle_complete(id).unwrap();
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut list = list_of(&["A"]);
        let before = list.clone();
        assert_eq!(list.toggle_complete(99), Err(TodoError::NotFound(99)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let mut list = list_of(&["A", "B", "C"]);
        let id = list.items()[1].id;

        let removed = list.delete(id).unwrap();
        assert_eq!(removed.text, "B");
        assert_eq!(texts(&list), vec!["A", "C"]);

        let before = list.clone();
        assert_eq!(list.delete(id), Err(TodoError::NotFound(id)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_clear_completed() {
        let mut list = list_of(&["A", "B", "C"]);
        let (a, c) = (list.items()[0].id, list.items()[2].id);
        list.toggle_complete(a).unwrap();
        list.toggle_complete(c).unwrap();

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(texts(&list), vec!["B"]);
        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn test_move_forward() {
        let mut list = list_of(&["A", "B", "C", "D"]);
        let moved_id = list.items()[0].id;

        list.move_item(0, 2).unwrap();
        assert_eq!(texts(&list), vec!["B", "C", "A", "D"]);
        assert_eq!(list.items()[2].id, moved_id);
    }

    #[test]
    fn test_move_backward() {
        let mut list = list_of(&["A", "B", "C", "D"]);
        list.move_item(3, 1).unwrap();
        assert_eq!(texts(&list), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_move_out_of_range_is_rejected() {
        let mut list = list_of(&["A", "B"]);
        let before = list.clone();

        assert_eq!(list.move_item(0, 2), Err(TodoError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(list.move_item(5, 0), Err(TodoError::OutOfRange { index: 5, len: 2 }));
        assert_eq!(list, before);
        assert!(list.move_item(1, 1).is_ok());
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_refuses_when_ids_run_out() {
        let mut list = list_of(&["A"]);
        list.next_id = u32::MAX;
        let before = list.clone();

        assert_eq!(list.add("B"), Err(TodoError::IdsExhausted));
        assert_eq!(list.add("C"), Err(TodoError::IdsExhausted));
        assert_eq!(list, before);
    }

    #[test]
    fn test_move_visible_upward_under_filter() {
        // [A, B, x(done), C] -> active rows are [A, B, C]
        let mut list = list_of(&["A", "B", "x", "C"]);
        let x = list.items()[2].id;
        list.toggle_complete(x).unwrap();

        list.move_visible(FilterMode::Active, 2, 0).unwrap();
        assert_eq!(texts(&list), vec!["C", "A", "B", "x"]);
        let visible: Vec<&str> = filter(list.items(), FilterMode::Active)
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(visible, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_move_visible_maps_filtered_rows() {
        // [A, x(done), B, C] -> active rows are [A, B, C]
        let mut list = list_of(&["A", "x", "B", "C"]);
        let x = list.items()[1].id;
        list.toggle_complete(x).unwrap();

        list.move_visible(FilterMode::Active, 0, 2).unwrap();
        assert_eq!(texts(&list), vec!["x", "B", "C", "A"]);
        let visible: Vec<&str> = filter(list.items(), FilterMode::Active)
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(visible, vec!["B", "C", "A"]);

        assert_eq!(
            list.move_visible(FilterMode::Active, 0, 3),
            Err(TodoError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_counts() {
        let mut list = list_of(&["A", "B", "C"]);
        let b = list.items()[1].id;
        list.toggle_complete(b).unwrap();
        assert_eq!(list.active_count(), 2);
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn test_active_filter_scenario() {
        let mut list = TodoList::new();
        let milk = list.add("Buy milk").unwrap();
        list.add("Walk dog").unwrap();
        list.toggle_complete(milk).unwrap();

        let active: Vec<&str> = filter(list.items(), FilterMode::Active)
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(active, vec!["Walk dog"]);
    }

    proptest! {
        #[test]
        fn test_adds_yield_distinct_ids(texts in proptest::collection::vec("[ a-z]{0,6}", 0..30)) {
            let mut list = TodoList::new();
            let mut expected = 0;
            for text in &texts {
                if list.add(text).is_ok() {
                    expected += 1;
                }
            }
            let non_empty = texts.iter().filter(|t| !t.trim().is_empty()).count();
            prop_assert_eq!(expected, non_empty);
            prop_assert_eq!(list.len(), non_empty);

            let ids: HashSet<u32> = list.items().iter().map(|i| i.id).collect();
            prop_assert_eq!(ids.len(), list.len());
        }

        #[test]
        fn test_move_preserves_items(len in 1usize..12, from in 0usize..12, to in 0usize..12) {
            let mut list = TodoList::new();
            for i in 0..len {
                list.add(&format!("item {}", i)).unwrap();
            }
            let mut before: Vec<u32> = list.items().iter().map(|i| i.id).collect();
            let moved = list.move_item(from, to);

            if from < len && to < len {
                prop_assert!(moved.is_ok());
                let id = before[from];
                prop_assert_eq!(list.items()[to].id, id);
                // same reference semantics as remove + insert on a Vec
                let item = before.remove(from);
                before.insert(to, item);
            } else {
                prop_assert!(moved.is_err());
            }
            let after: Vec<u32> = list.items().iter().map(|i| i.id).collect();
            prop_assert_eq!(after, before);
        }
    }
}
