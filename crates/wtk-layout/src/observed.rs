#![forbid(unsafe_code)]

//! Ordered collection with transactional observer hooks.
//!
//! Every mutation runs as a two-phase transaction against an optional
//! [`CollectionObserver`]:
//!
//! 1. `prepare` may veto the mutation; the collection is left untouched.
//! 2. The mutation is applied.
//! 3. `commit` runs; if it fails the collection applies the mutation's
//!    inverse and returns the error.
//!
//! No borrow of the backing storage is held while a hook runs, so hooks may
//! read the collection and even mutate it (a splitter inserts its own
//! handles from inside `commit`).

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{LayoutError, Result};

/// Identity comparison for collection items.
///
/// `remove` and `index_of` search by identity, not by value.
pub trait ItemIdentity {
    fn same_item(&self, other: &Self) -> bool;
}

impl<T: ?Sized> ItemIdentity for Rc<T> {
    fn same_item(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

/// A single structural change, as seen by the observer hooks.
#[derive(Debug)]
pub enum Mutation<'a, T> {
    Insert { index: usize, item: &'a T },
    Remove { index: usize, item: &'a T },
    /// `items` is the full content before the clear.
    Clear { items: &'a [T] },
}

/// Hooks bracketing every mutation of an [`ObservedCollection`].
///
/// Both default to accepting the mutation.
pub trait CollectionObserver<T> {
    /// Runs before the mutation. An error cancels it.
    fn prepare(&self, mutation: &Mutation<'_, T>) -> Result<()> {
        let _ = mutation;
        Ok(())
    }

    /// Runs after the mutation. An error rolls it back.
    fn commit(&self, mutation: &Mutation<'_, T>) -> Result<()> {
        let _ = mutation;
        Ok(())
    }
}

/// An ordered sequence whose mutations are observed transactionally.
///
/// Duplicates are permitted; identity lookups find the first occurrence.
pub struct ObservedCollection<T> {
    items: RefCell<Vec<T>>,
    observer: RefCell<Option<Weak<dyn CollectionObserver<T>>>>,
}

impl<T> Default for ObservedCollection<T> {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservedCollection")
            .field("items", &self.items.borrow())
            .field("observed", &self.observer.borrow().is_some())
            .finish()
    }
}

impl<T: Clone + ItemIdentity> ObservedCollection<T> {
    /// Create an empty, unobserved collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection reporting to `observer`.
    pub fn with_observer(observer: Weak<dyn CollectionObserver<T>>) -> Self {
        let collection = Self::default();
        collection.set_observer(Some(observer));
        collection
    }

    /// Replace the observer. `None` detaches it.
    pub fn set_observer(&self, observer: Option<Weak<dyn CollectionObserver<T>>>) {
        *self.observer.borrow_mut() = observer;
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }

    /// Position of the first item identical to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.borrow().iter().position(|it| it.same_item(item))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Snapshot of the current items.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// Append `item`.
    pub fn add(&self, item: T) -> Result<()> {
        self.insert(self.len(), item)
    }

    /// Insert `item` at `index` (`0..=len`).
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(LayoutError::IndexOutOfRange { index, len });
        }
        self.transact(&Mutation::Insert { index, item: &item })
    }

    /// Remove and return the item at `index` (`0..len`).
    pub fn remove_at(&self, index: usize) -> Result<T> {
        let item = self.get(index).ok_or(LayoutError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        self.transact(&Mutation::Remove { index, item: &item })?;
        Ok(item)
    }

    /// Remove the first item identical to `item`.
    ///
    /// Returns `Ok(false)` without running any hook when it is absent.
    pub fn remove(&self, item: &T) -> Result<bool> {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    /// Remove every item.
    pub fn clear(&self) -> Result<()> {
        let snapshot = self.to_vec();
        self.transact(&Mutation::Clear { items: &snapshot })
    }

    fn observer(&self) -> Option<Rc<dyn CollectionObserver<T>>> {
        self.observer.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn transact(&self, mutation: &Mutation<'_, T>) -> Result<()> {
        let observer = self.observer();
        if let Some(observer) = &observer {
            observer.prepare(mutation)?;
        }
        self.apply(mutation);
        if let Some(observer) = &observer
            && let Err(err) = observer.commit(mutation)
        {
            self.revert(mutation);
            return Err(err);
        }
        Ok(())
    }

    fn apply(&self, mutation: &Mutation<'_, T>) {
        let mut items = self.items.borrow_mut();
        match *mutation {
            Mutation::Insert { index, item } => items.insert(index, item.clone()),
            Mutation::Remove { index, .. } => {
                items.remove(index);
            }
            Mutation::Clear { .. } => items.clear(),
        }
    }

    /// Best-effort inverse of `apply`. The commit hook may have changed the
    /// collection further, so positions are re-resolved by identity.
    fn revert(&self, mutation: &Mutation<'_, T>) {
        let mut items = self.items.borrow_mut();
        match *mutation {
            Mutation::Insert { index, item } => {
                let at = if items.get(index).is_some_and(|it| it.same_item(item)) {
                    Some(index)
                } else {
                    items.iter().position(|it| it.same_item(item))
                };
                if let Some(at) = at {
                    items.remove(at);
                }
            }
            Mutation::Remove { index, item } => {
                let at = index.min(items.len());
                items.insert(at, item.clone());
            }
            Mutation::Clear { items: previous } => {
                *items = previous.to_vec();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Records hook calls and fails on demand.
    #[derive(Default)]
    struct Recorder {
        log: RefCell<Vec<String>>,
        fail_prepare: Cell<bool>,
        fail_commit: Cell<bool>,
        seen_len: Cell<Option<usize>>,
        collection: RefCell<Option<Rc<ObservedCollection<Rc<str>>>>>,
    }

    impl Recorder {
        fn name(mutation: &Mutation<'_, Rc<str>>) -> String {
            match mutation {
                Mutation::Insert { index, item } => format!("insert {index} {item}"),
                Mutation::Remove { index, item } => format!("remove {index} {item}"),
                Mutation::Clear { items } => format!("clear {}", items.len()),
            }
        }
    }

    impl CollectionObserver<Rc<str>> for Recorder {
        fn prepare(&self, mutation: &Mutation<'_, Rc<str>>) -> Result<()> {
            self.log
                .borrow_mut()
                .push(format!("prepare {}", Self::name(mutation)));
            if self.fail_prepare.get() {
                return Err(LayoutError::native("prepare", "vetoed"));
            }
            Ok(())
        }

        fn commit(&self, mutation: &Mutation<'_, Rc<str>>) -> Result<()> {
            self.log
                .borrow_mut()
                .push(format!("commit {}", Self::name(mutation)));
            if let Some(collection) = self.collection.borrow().as_ref() {
                self.seen_len.set(Some(collection.len()));
            }
            if self.fail_commit.get() {
                return Err(LayoutError::native("commit", "rejected"));
            }
            Ok(())
        }
    }

    fn observed() -> (Rc<ObservedCollection<Rc<str>>>, Rc<Recorder>) {
        let recorder = Rc::new(Recorder::default());
        let observer: Weak<dyn CollectionObserver<Rc<str>>> = Rc::downgrade(&recorder) as _;
        let collection = Rc::new(ObservedCollection::with_observer(observer));
        *recorder.collection.borrow_mut() = Some(collection.clone());
        (collection, recorder)
    }

    fn item(s: &str) -> Rc<str> {
        Rc::from(s)
    }

    #[test]
    fn insert_runs_hooks_in_order() {
        let (c, r) = observed();
        c.add(item("a")).unwrap();
        assert_eq!(*r.log.borrow(), vec!["prepare insert 0 a", "commit insert 0 a"]);
        assert_eq!(r.seen_len.get(), Some(1));
    }

    #[test]
    fn prepare_failure_leaves_collection_untouched() {
        let (c, r) = observed();
        c.add(item("a")).unwrap();
        r.fail_prepare.set(true);
        assert!(c.add(item("b")).is_err());
        assert_eq!(c.len(), 1);
        assert!(c.remove_at(0).is_err());
        assert_eq!(c.len(), 1);
        assert!(c.clear().is_err());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn commit_failure_rolls_back_insert() {
        let (c, r) = observed();
        let a = item("a");
        c.add(a.clone()).unwrap();
        r.fail_commit.set(true);
        let b = item("b");
        assert!(c.insert(0, b.clone()).is_err());
        assert_eq!(c.len(), 1);
        assert_eq!(c.index_of(&b), None);
        assert_eq!(c.index_of(&a), Some(0));
    }

    #[test]
    fn commit_failure_restores_removed_item_position() {
        let (c, r) = observed();
        let items: Vec<_> = ["a", "b", "c"].into_iter().map(item).collect();
        for it in &items {
            c.add(it.clone()).unwrap();
        }
        r.fail_commit.set(true);
        assert!(c.remove_at(1).is_err());
        assert_eq!(c.index_of(&items[1]), Some(1));
        assert!(c.clear().is_err());
        assert_eq!(c.len(), 3);
        assert_eq!(c.index_of(&items[2]), Some(2));
    }

    #[test]
    fn out_of_range_is_rejected_before_hooks() {
        let (c, r) = observed();
        assert_eq!(
            c.insert(1, item("x")),
            Err(LayoutError::IndexOutOfRange { index: 1, len: 0 })
        );
        assert!(matches!(
            c.remove_at(0),
            Err(LayoutError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(r.log.borrow().is_empty());
    }

    #[test]
    fn remove_absent_is_noop() {
        let (c, r) = observed();
        c.add(item("a")).unwrap();
        r.log.borrow_mut().clear();
        assert_eq!(c.remove(&item("a")), Ok(false));
        assert!(r.log.borrow().is_empty());
    }

    #[test]
    fn identity_not_equality() {
        let c: ObservedCollection<Rc<str>> = ObservedCollection::new();
        let first = item("same");
        let second = item("same");
        c.add(first.clone()).unwrap();
        c.add(second.clone()).unwrap();
        assert_eq!(c.index_of(&second), Some(1));
        assert_eq!(c.remove(&second), Ok(true));
        assert_eq!(c.index_of(&first), Some(0));
        assert!(!c.contains(&second));
    }

    #[test]
    fn duplicates_resolve_to_first() {
        let c: ObservedCollection<Rc<str>> = ObservedCollection::new();
        let a = item("a");
        c.add(a.clone()).unwrap();
        c.add(a.clone()).unwrap();
        assert_eq!(c.index_of(&a), Some(0));
        assert_eq!(c.remove(&a), Ok(true));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn clear_hook_sees_previous_items() {
        let (c, r) = observed();
        c.add(item("a")).unwrap();
        c.add(item("b")).unwrap();
        r.log.borrow_mut().clear();
        c.clear().unwrap();
        assert_eq!(*r.log.borrow(), vec!["prepare clear 2", "commit clear 2"]);
        assert!(c.is_empty());
    }

    #[test]
    fn dropped_observer_is_ignored() {
        let (c, r) = observed();
        r.collection.borrow_mut().take();
        drop(r);
        c.add(item("a")).unwrap();
        assert_eq!(c.len(), 1);
    }
}
