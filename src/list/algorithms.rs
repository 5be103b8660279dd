use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::list::List;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the position of the first element equal to `target`, or
    /// `None` if no element matches. Comparison is by value equality.
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
    /// let list: List<_> = [1, 2, 1].into();
    ///
    /// assert_eq!(list.index_of(&1), Some(0));
    /// assert_eq!(list.index_of(&2), Some(1));
    /// assert_eq!(list.index_of(&3), None);
    /// ```
    pub fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == target)
    }

    /// Returns the position of the last element equal to `target`, or
    /// `None` if no element matches. The scan runs backward from the tail.
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
    /// let list: List<_> = [1, 2, 1].into();
    ///
    /// assert_eq!(list.last_index_of(&1), Some(2));
    /// assert_eq!(list.last_index_of(&2), Some(1));
    /// assert_eq!(list.last_index_of(&3), None);
    /// ```
    pub fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().rposition(|e| e == target)
    }

    /// Returns the position of the smallest element in one forward scan,
    /// or `None` on an empty list.
    ///
    /// A later element displaces the current candidate whenever the
    /// candidate compares greater than *or equal* to it, so among equal
    /// minima the LAST occurrence's index is returned.
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
    /// let list: List<_> = [3, 1, 2, 1].into();
    /// assert_eq!(list.index_of_min(), Some(3));
    ///
    /// assert_eq!(List::<i32>::new().index_of_min(), None);
    /// ```
    pub fn index_of_min(&self) -> Option<usize>
    where
        T: Ord,
    {
        let mut iter = self.iter().enumerate();
        let (mut min_index, mut min) = iter.next()?;
        for (index, value) in iter {
            if *min >= *value {
                min = value;
                min_index = index;
            }
        }
        Some(min_index)
    }
}
