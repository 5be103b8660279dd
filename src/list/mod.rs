use std::fmt::{Debug, Formatter};

use crate::list::arena::{Arena, Node, NodeId};
use crate::list::cursor::{Cursor, CursorMut};
use crate::list::error::Error;
use crate::{IntoIter, Iter};

pub mod cursor;
pub mod error;
pub mod iterator;

mod algorithms;
mod arena;

/// A doubly-linked list whose nodes live in a slot arena and point at each
/// other through stable integer handles.
///
/// Endpoint operations ([`push_front`], [`push_back`], [`pop_front`],
/// [`pop_back`], [`first`], [`last`]) run in *O*(1). Every positional
/// operation — [`get`], [`insert`], [`remove`], [`set`], and the searches —
/// is built by placing a cursor at the target index and delegating to it;
/// the cursor is the only component that touches interior links.
///
/// # Invariants
///
/// - `len() == 0` iff there is no head iff there is no tail;
/// - every interior link is mutual: a node's `next` points back at it via
///   `prev`, and vice versa;
/// - the head node has no `prev`, the tail node has no `next`;
/// - walking forward from the head visits exactly `len()` nodes and ends
///   at the tail, and the backward walk is its exact reverse.
///
/// These hold before and after every successful operation, and failed
/// operations do not mutate the list at all.
///
/// [`push_front`]: List::push_front
/// [`push_back`]: List::push_back
/// [`pop_front`]: List::pop_front
/// [`pop_back`]: List::pop_back
/// [`first`]: List::first
/// [`last`]: List::last
/// [`get`]: List::get
/// [`insert`]: List::insert
/// [`remove`]: List::remove
/// [`set`]: List::set
pub struct List<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
    pub(crate) len: usize,
}

// private methods
impl<T> List<T> {
    /// Walk forward from the head `at` steps and return the handle there,
    /// or `None` when the walk runs off the tail (`at >= len`).
    pub(crate) fn node_at(&self, at: usize) -> Option<NodeId> {
        let mut id = self.head;
        for _ in 0..at {
            id = id.and_then(|n| self.arena[n].next);
        }
        id
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use arena_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// The count is maintained alongside the links, so no traversal
    /// happens here.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.first().is_err());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Provides a reference to the first element, or [`Error::Empty`] if
    /// the list has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.first(), Err(Error::Empty));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T, Error> {
        let id = self.head.ok_or(Error::Empty)?;
        Ok(&self.arena[id].value)
    }

    /// Provides a reference to the last element, or [`Error::Empty`] if
    /// the list has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.last(), Err(Error::Empty));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.last(), Ok(&1));
    /// ```
    pub fn last(&self) -> Result<&T, Error> {
        let id = self.tail.ok_or(Error::Empty)?;
        Ok(&self.arena[id].value)
    }

    /// Adds an element first in the list.
    ///
    /// On an empty list the new node becomes head and tail at once.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.first(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.first(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.arena[old].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// On an empty list the new node becomes head and tail at once.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.last(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.arena[old].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        let node = self.arena.remove(id);
        self.head = node.next;
        match self.head {
            Some(new) => self.arena[new].prev = None,
            None => self.tail = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        let node = self.arena.remove(id);
        self.tail = node.prev;
        match self.tail {
            Some(new) => self.arena[new].next = None,
            None => self.head = None,
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Provides a read-only cursor positioned at index `at`.
    ///
    /// A list of length *n* has *n* + 1 cursor positions, `0..=n`;
    /// position *n* is past the last element. Any other index fails with
    /// [`Error::OutOfBounds`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let list: List<_> = [1, 2, 3].into();
    ///
    /// let mut cursor = list.cursor(1).unwrap();
    /// assert_eq!(cursor.next(), Ok(&2));
    ///
    /// assert!(list.cursor(3).is_ok());
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>, Error> {
        Cursor::new(self, at)
    }

    /// Provides a mutating cursor positioned at index `at`.
    ///
    /// The same *n* + 1 positions as [`cursor`](List::cursor) are valid;
    /// any other index fails with [`Error::OutOfBounds`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = [1, 2, 3].into();
    ///
    /// let mut cursor = list.cursor_mut(3).unwrap();
    /// cursor.insert(4);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>, Error> {
        CursorMut::new(self, at)
    }

    /// Returns the element at position `at`, or [`Error::OutOfBounds`]
    /// unless `at < len`.
    ///
    /// The lookup places a cursor at `at` and takes one forward step.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let list: List<_> = [1, 2, 3].into();
    ///
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(2), Ok(&3));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, at: usize) -> Result<&T, Error> {
        if at >= self.len {
            return Err(Error::OutOfBounds {
                index: at,
                len: self.len,
            });
        }
        self.cursor(at)?.next()
    }

    /// Adds an element at position `at`, shifting everything from `at`
    /// onward one place toward the back. `at == len` appends. Fails with
    /// [`Error::OutOfBounds`] unless `at <= len`.
    ///
    /// The insertion places a cursor at `at` and splices before its next
    /// element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = [1, 2, 3].into();
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, value: T) -> Result<(), Error> {
        let mut cursor = self.cursor_mut(at)?;
        cursor.insert(value);
        Ok(())
    }

    /// Removes the element at position `at` and returns it. Fails with
    /// [`Error::OutOfBounds`] unless `at < len`.
    ///
    /// The removal places a cursor at `at`, steps over the element, and
    /// removes it through the cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// list.push_front(2);
    /// list.push_front(3);
    ///
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T, Error> {
        if at >= self.len {
            return Err(Error::OutOfBounds {
                index: at,
                len: self.len,
            });
        }
        let mut cursor = self.cursor_mut(at)?;
        cursor.next()?;
        cursor.remove()
    }

    /// Replaces the element at position `at` and returns the old value.
    /// Fails with [`Error::OutOfBounds`] unless `at < len`.
    ///
    /// The replacement places a cursor at `at`, steps over the element,
    /// and overwrites it through the cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list: List<_> = [1, 2, 3].into();
    ///
    /// assert_eq!(list.set(1, 20), Ok(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 20, 3]);
    /// ```
    pub fn set(&mut self, at: usize, value: T) -> Result<T, Error> {
        if at >= self.len {
            return Err(Error::OutOfBounds {
                index: at,
                len: self.len,
            });
        }
        let mut cursor = self.cursor_mut(at)?;
        cursor.next()?;
        cursor.set(value)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::Error;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    use quickcheck_macros::quickcheck;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.first(), Err(Error::Empty));
        assert_eq!(list.last(), Err(Error::Empty));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.last(), Ok(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.last(), Ok(&3));
        assert_eq!(list.first(), Ok(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.first(), Ok(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.first(), Err(Error::Empty));
        assert_eq!(list.last(), Err(Error::Empty));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(9));
        assert_eq!(list.last(), Ok(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11).unwrap();
        assert_eq!(list.first(), Ok(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), Ok(11));
        assert_eq!(list.first(), Ok(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12).unwrap();
        assert_eq!(list.last(), Ok(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));
    }

    #[test]
    fn list_index_errors() {
        let mut list = List::from_iter(0..3);

        assert_eq!(list.get(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(list.remove(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(list.set(3, 9), Err(Error::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(
            list.insert(4, 9),
            Err(Error::OutOfBounds { index: 4, len: 3 })
        );
        // `insert` accepts the one-past-the-end position, unlike `get`.
        assert!(list.insert(3, 9).is_ok());
        list_eq(&list, vec![0, 1, 2, 9]);
    }

    #[test]
    fn list_get_and_set() {
        let mut list = List::from_iter(0..5);
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(&(i as i32)));
        }
        assert_eq!(list.set(2, 20), Ok(2));
        assert_eq!(list.get(2), Ok(&20));
        list_eq(&list, vec![0, 1, 20, 3, 4]);
    }

    #[test]
    fn list_round_trip() {
        for at in 0..=4 {
            let mut list = List::from_iter(0..4);
            let before = list.len();
            list.insert(at, 42).unwrap();
            assert_eq!(list.len(), before + 1);
            assert_eq!(list.get(at), Ok(&42));
        }
    }

    #[test]
    fn forward_and_backward_agree() {
        let mut list = List::from_iter(0..7);
        list.remove(3).unwrap();
        list.insert(2, 9).unwrap();
        list.push_front(8);

        let forward: Vec<_> = list.iter().cloned().collect();
        let mut backward: Vec<_> = list.iter().rev().cloned().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), list.len());
    }

    #[test]
    fn driver_scenario() {
        fn joined(names: &List<&str>) -> String {
            names.iter().map(|name| format!("{} --> ", name)).collect()
        }

        let mut names: List<&str> = ["Tom", "Kate", "Harry", "Sam"].into();
        assert_eq!(joined(&names), "Tom --> Kate --> Harry --> Sam --> ");

        names.push_front("Bill");
        assert_eq!(
            joined(&names),
            "Bill --> Tom --> Kate --> Harry --> Sam --> "
        );

        names.push_back("Sue");
        assert_eq!(
            joined(&names),
            "Bill --> Tom --> Kate --> Harry --> Sam --> Sue --> "
        );

        assert_eq!(names.remove(2), Ok("Kate"));
        assert_eq!(joined(&names), "Bill --> Tom --> Harry --> Sam --> Sue --> ");

        assert_eq!(names.remove(2), Ok("Harry"));
        assert_eq!(joined(&names), "Bill --> Tom --> Sam --> Sue --> ");
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut list = List::from_iter(0..4);
        for _ in 0..100 {
            list.remove(1).unwrap();
            list.insert(2, 7).unwrap();
        }
        assert_eq!(list.len(), 4);
    }

    #[quickcheck]
    fn insert_then_remove_matches_vec(seed: Vec<i32>, at: usize, value: i32) {
        let mut list = List::from_iter(seed.iter().copied());
        let mut model = seed;
        let at = at % (model.len() + 1);

        list.insert(at, value).unwrap();
        model.insert(at, value);
        assert_eq!(Vec::from_iter(list.iter().copied()), model);

        assert_eq!(list.remove(at), Ok(value));
        model.remove(at);
        assert_eq!(Vec::from_iter(list.iter().copied()), model);
        assert_eq!(list.len(), model.len());
    }
}
