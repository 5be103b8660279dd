//! This crate provides a doubly-linked list with a bidirectional, mutating
//! cursor, implemented over a slot arena with stable integer handles.
//!
//! The [`List`] allows inserting, removing and replacing elements at any
//! cursor position in constant time. In compromise, placing a cursor (or
//! accessing an element) at an arbitrary position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use arena_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_mut(0).unwrap();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.next(), Ok(&1));
//!
//! let mut cursor = list.cursor_mut(3).unwrap();
//! cursor.next().unwrap(); // step over the element at position 3...
//! assert_eq!(cursor.remove(), Ok(3)); // ...and remove it
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 4]);
//! ```
//!
//! # Memory Layout
//!
//! Nodes are not allocated one by one; they live in slots of a backing
//! vector and name each other by slot index:
//!
//! ```text
//!    List                     Arena slots
//! ╔════════╗     ┌──────────┬──────────┬──────────┬──────────┐
//! ║ head: 0║     │ slot 0   │ slot 1   │ slot 2   │ slot 3   │
//! ║ tail: 2║     │ value A  │ value B  │ value C  │ (vacant) │
//! ║ len:  3║     │ prev: -  │ prev: 0  │ prev: 1  │          │
//! ╚════════╝     │ next: 1  │ next: 2  │ next: -  │          │
//!                └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! A removal vacates a slot and threads it onto a free list; the next
//! insertion reuses it before the vector grows. Handles are plain indices
//! and never leave the crate, so every handle the list or a cursor holds
//! refers to a live node — there is no `unsafe` anywhere in the crate.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] iterator, a double-ended,
//! fused, exact-size forward view. A draining [`IntoIter`] is provided
//! through `IntoIterator`.
//!
//! ```
//! use arena_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, [`Cursor`] and [`CursorMut`] provide a seekable view
//! of a list. A cursor rests between elements: a list of length *n* has
//! *n* + 1 cursor positions, `0..=n`. Stepping forward or backward yields
//! the element the cursor moved over, and on a [`CursorMut`] the element
//! yielded by the most recent step can be removed or replaced — once per
//! step. Insertion happens at the cursor position itself and needs no
//! prior step.
//!
//! ```
//! use arena_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut cursor = list.cursor_mut(1).unwrap();
//!
//! assert_eq!(cursor.next(), Ok(&2));
//! assert_eq!(cursor.set(20), Ok(2));
//! // The step is spent; another edit needs another step.
//! assert_eq!(cursor.set(30), Err(Error::NoStep));
//!
//! assert_eq!(cursor.previous(), Ok(&20));
//! assert_eq!(cursor.remove(), Ok(20));
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 3]);
//! ```
//!
//! Every out-of-contract call — an index outside `0..=len`, a step past an
//! end, an edit without a step, an endpoint read on an empty list — fails
//! with an [`Error`] and leaves the list untouched.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IntoIter`]: crate::IntoIter
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`Error`]: crate::list::error::Error

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::error::Error;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;

pub mod list;
