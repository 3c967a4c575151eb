//! Item sequences and the windowed cursor
//!
//! An [`ItemSequence`] is owned by whoever supplies the items (a widget); the
//! scroll engine only walks it through a [`SequenceCursor`], which holds a
//! weak handle plus an index. Advancing the window replaces the cursor rather
//! than mutating it.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::{Rc, Weak};

/// Shared handle to a sequence, kept by the owning widget
pub type SharedSequence<T> = Rc<RefCell<ItemSequence<T>>>;

/// One entry of a sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    /// Content, or `None` for a padding placeholder
    pub content: Option<T>,
    /// Extent along the scroll axis; `None` falls back to the viewport extent
    pub size: Option<f32>,
}

impl<T> Item<T> {
    pub fn new(content: T) -> Self {
        Self {
            content: Some(content),
            size: None,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            content: None,
            size: None,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.content.is_none()
    }
}

/// Ordered list of items
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSequence<T> {
    items: Vec<Item<T>>,
}

impl<T> Default for ItemSequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ItemSequence<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item<T>>) -> Self {
        Self { items }
    }

    /// Surround `values` with `gap` placeholders on each side.
    ///
    /// An empty `values` yields an empty sequence, not a run of placeholders.
    pub fn padded<I: IntoIterator<Item = T>>(values: I, gap: usize) -> Self {
        let mut items: Vec<Item<T>> = values.into_iter().map(Item::new).collect();
        if items.is_empty() {
            return Self::new();
        }
        let mut padded = Vec::with_capacity(items.len() + 2 * gap);
        padded.extend((0..gap).map(|_| Item::placeholder()));
        padded.append(&mut items);
        padded.extend((0..gap).map(|_| Item::placeholder()));
        Self { items: padded }
    }

    pub fn into_shared(self) -> SharedSequence<T> {
        Rc::new(RefCell::new(self))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item<T>> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item<T>> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Item<T>> {
        self.items.iter_mut()
    }

    pub fn push(&mut self, item: Item<T>) {
        self.items.push(item);
    }

    /// Insert an item, clamping `index` to the end of the sequence
    pub fn insert(&mut self, index: usize, item: Item<T>) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Insert several items starting at `index`
    pub fn insert_many<I: IntoIterator<Item = Item<T>>>(&mut self, index: usize, items: I) {
        let index = index.min(self.items.len());
        self.items.splice(index..index, items);
    }

    /// Remove a range of items, clamped to the sequence bounds
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<Item<T>> {
        let end = range.end.min(self.items.len());
        let start = range.start.min(end);
        self.items.drain(start..end).collect()
    }

    /// Replace the `remove` items just before the last `trailing` items with
    /// `items`, returning what was removed.
    ///
    /// Used to grow or shrink the content in front of trailing padding.
    pub fn splice_tail<I: IntoIterator<Item = Item<T>>>(
        &mut self,
        trailing: usize,
        remove: usize,
        items: I,
    ) -> Vec<Item<T>> {
        let end = self.items.len().saturating_sub(trailing);
        let start = end.saturating_sub(remove);
        self.items.splice(start..end, items).collect()
    }

    /// Number of placeholders at the start of the sequence
    pub fn leading_placeholders(&self) -> usize {
        self.items.iter().take_while(|item| item.is_placeholder()).count()
    }

    /// Number of placeholders at the end of the sequence
    pub fn trailing_placeholders(&self) -> usize {
        self.items
            .iter()
            .rev()
            .take_while(|item| item.is_placeholder())
            .count()
    }

    /// Number of items with content
    pub fn content_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_placeholder()).count()
    }

    /// Index of the first item whose content satisfies `predicate`
    pub fn position<P: Fn(&T) -> bool>(&self, predicate: P) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.content.as_ref().is_some_and(&predicate))
    }
}

/// Non-owning cursor over an [`ItemSequence`]
pub struct SequenceCursor<T> {
    sequence: Weak<RefCell<ItemSequence<T>>>,
    index: usize,
}

impl<T> Clone for SequenceCursor<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            index: self.index,
        }
    }
}

impl<T> fmt::Debug for SequenceCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceCursor")
            .field("index", &self.index)
            .field("alive", &(self.sequence.strong_count() > 0))
            .finish()
    }
}

impl<T> SequenceCursor<T> {
    /// Cursor at `index`, or `None` when the index is out of range
    pub fn new(sequence: &SharedSequence<T>, index: usize) -> Option<Self> {
        if index >= sequence.borrow().len() {
            return None;
        }
        Some(Self {
            sequence: Rc::downgrade(sequence),
            index,
        })
    }

    fn at(&self, index: usize) -> Option<Self> {
        let sequence = self.sequence.upgrade()?;
        let len = sequence.borrow().len();
        (index < len).then(|| Self {
            sequence: self.sequence.clone(),
            index,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The backing sequence, if its owner still holds it
    pub fn sequence(&self) -> Option<SharedSequence<T>> {
        self.sequence.upgrade()
    }

    /// Length of the backing sequence (0 once it was dropped)
    pub fn len(&self) -> usize {
        self.sequence
            .upgrade()
            .map(|sequence| sequence.borrow().len())
            .unwrap_or(0)
    }

    /// Whether the cursor still points at an existing item
    pub fn is_valid(&self) -> bool {
        self.index < self.len()
    }

    /// Cursor one item forward
    pub fn next(&self) -> Option<Self> {
        self.at(self.index + 1)
    }

    /// Cursor one item back
    pub fn previous(&self) -> Option<Self> {
        self.index.checked_sub(1).and_then(|index| self.at(index))
    }

    /// Re-seat a cursor left dangling by a shrinking sequence onto the last item
    pub fn clamped(&self) -> Option<Self> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.at(self.index.min(len - 1))
    }

    /// Explicit extent of the current item
    pub fn size(&self) -> Option<f32> {
        let sequence = self.sequence.upgrade()?;
        let sequence = sequence.borrow();
        sequence.get(self.index).and_then(|item| item.size)
    }
}

impl<T: Clone> SequenceCursor<T> {
    /// Copy of the current item
    pub fn item(&self) -> Option<Item<T>> {
        let sequence = self.sequence.upgrade()?;
        let sequence = sequence.borrow();
        sequence.get(self.index).cloned()
    }

    /// Content of the current item (`None` for placeholders)
    pub fn content(&self) -> Option<T> {
        let sequence = self.sequence.upgrade()?;
        let sequence = sequence.borrow();
        sequence.get(self.index).and_then(|item| item.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn contents(sequence: &ItemSequence<i32>) -> Vec<Option<i32>> {
        sequence.iter().map(|item| item.content).collect()
    }

    #[test]
    fn test_padded_sequence() {
        let sequence = ItemSequence::padded(1..=3, 2);
        assert_eq!(
            contents(&sequence),
            vec![None, None, Some(1), Some(2), Some(3), None, None]
        );
        assert_eq!(sequence.leading_placeholders(), 2);
        assert_eq!(sequence.trailing_placeholders(), 2);
        assert_eq!(sequence.content_count(), 3);
    }

    #[test]
    fn test_padded_empty_values() {
        let sequence = ItemSequence::<i32>::padded(std::iter::empty(), 2);
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_cursor_traversal() {
        let shared = ItemSequence::padded(1..=2, 1).into_shared();
        let first = SequenceCursor::new(&shared, 0).unwrap();
        assert!(first.previous().is_none());
        assert_eq!(first.content(), None);

        let second = first.next().unwrap();
        assert_eq!(second.index(), 1);
        assert_eq!(second.content(), Some(1));
        assert_eq!(second.previous().unwrap().index(), 0);

        let last = second.next().unwrap().next().unwrap();
        assert_eq!(last.index(), 3);
        assert!(last.next().is_none());
    }

    #[test]
    fn test_cursor_out_of_range() {
        let shared = ItemSequence::padded(1..=2, 0).into_shared();
        assert!(SequenceCursor::new(&shared, 2).is_none());
    }

    #[test]
    fn test_cursor_is_weak() {
        let shared = ItemSequence::padded(1..=2, 0).into_shared();
        let cursor = SequenceCursor::new(&shared, 0).unwrap();
        drop(shared);
        assert!(cursor.next().is_none());
        assert!(cursor.content().is_none());
        assert_eq!(cursor.len(), 0);
        assert!(!cursor.is_valid());
    }

    #[test]
    fn test_tail_edit_keeps_cursor_position() {
        let shared = ItemSequence::padded(1..=3, 1).into_shared();
        let cursor = SequenceCursor::new(&shared, 2).unwrap();

        shared.borrow_mut().insert_many(4, [Item::new(4), Item::new(5)]);
        assert_eq!(cursor.content(), Some(2));

        shared.borrow_mut().remove_range(4..6);
        assert_eq!(cursor.content(), Some(2));
        assert_eq!(cursor.len(), 5);
    }

    #[test]
    fn test_push_and_insert() {
        let shared = ItemSequence::padded(1..=2, 0).into_shared();
        let cursor = SequenceCursor::new(&shared, 1).unwrap();

        shared.borrow_mut().push(Item::new(4));
        shared.borrow_mut().insert(2, Item::new(3));
        shared.borrow_mut().insert(99, Item::placeholder());
        assert_eq!(
            contents(&shared.borrow()),
            vec![Some(1), Some(2), Some(3), Some(4), None]
        );
        assert_eq!(cursor.content(), Some(2));

        // An edit before the cursor leaves it on whatever now holds its index.
        shared.borrow_mut().insert(0, Item::new(0));
        assert_eq!(cursor.content(), Some(1));
    }

    #[test]
    fn test_clamped_after_shrink() {
        let shared = ItemSequence::padded(1..=5, 0).into_shared();
        let cursor = SequenceCursor::new(&shared, 4).unwrap();
        shared.borrow_mut().remove_range(2..5);
        assert!(!cursor.is_valid());

        let clamped = cursor.clamped().unwrap();
        assert_eq!(clamped.index(), 1);
        assert_eq!(clamped.content(), Some(2));
    }

    #[test]
    fn test_item_sizes() {
        let shared = ItemSequence::from_items(vec![Item::new(1).with_size(40.0), Item::new(2)])
            .into_shared();
        let cursor = SequenceCursor::new(&shared, 0).unwrap();
        assert_eq!(cursor.size(), Some(40.0));
        assert_eq!(cursor.next().unwrap().size(), None);
    }

    #[test]
    fn test_splice_before_trailing_padding() {
        let mut sequence = ItemSequence::padded(1..=3, 2);
        sequence.splice_tail(2, 0, [Item::new(4), Item::new(5)]);
        assert_eq!(
            contents(&sequence),
            vec![None, None, Some(1), Some(2), Some(3), Some(4), Some(5), None, None]
        );

        let removed = sequence.splice_tail(2, 3, std::iter::empty());
        assert_eq!(removed.len(), 3);
        assert_eq!(
            contents(&sequence),
            vec![None, None, Some(1), Some(2), None, None]
        );
    }

    #[test]
    fn test_cursor_item() {
        let shared = ItemSequence::from_items(vec![Item::new(7).with_size(30.0)]).into_shared();
        let cursor = SequenceCursor::new(&shared, 0).unwrap();
        assert_eq!(cursor.item(), Some(Item::new(7).with_size(30.0)));
    }

    #[test]
    fn test_position_lookup() {
        let sequence = ItemSequence::padded(10..=20, 2);
        assert_eq!(sequence.position(|value| *value == 10), Some(2));
        assert_eq!(sequence.position(|value| *value == 99), None);
    }
}
