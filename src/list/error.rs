use thiserror::Error;

/// The failure surface of the list and its cursors.
///
/// Every out-of-contract call fails immediately with one of these variants
/// and leaves the list untouched; nothing is logged or retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index argument fell outside its valid range. Cursor construction
    /// and [`insert`](crate::List::insert) accept `0..=len`; element access
    /// ([`get`](crate::List::get), [`remove`](crate::List::remove),
    /// [`set`](crate::List::set)) accepts `0..len`.
    #[error("index {index} out of bounds for list of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// A cursor step was attempted past an end of the list
    /// (`next` beyond the last element, `previous` before the first).
    #[error("cursor stepped past the end of the list")]
    NoSuchElement,

    /// `remove` or `set` was called on a cursor with no element to act on:
    /// no `next`/`previous` step has happened since the cursor was created
    /// or since it last mutated the list.
    #[error("no cursor step since creation or the last mutation")]
    NoStep,

    /// [`first`](crate::List::first) or [`last`](crate::List::last) was
    /// called on an empty list.
    #[error("the list is empty")]
    Empty,
}
