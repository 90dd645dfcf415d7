//! Typed view over a `RawList`.

use alloc::vec::Vec;
use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::marker::PhantomData;

use crate::element::Element;
use crate::error::{CapacityError, Error};
use crate::index::Index;
use crate::raw::{self, RangeArgument, RawList};
use crate::strategy::{Bulk, CopyStrategy};

/// A growable double-ended list of `T`, stored as fixed-size byte records.
///
/// Each element is encoded through [`Element`] into a `RawList` slot of
/// `T::size()` bytes, so the layout, growth and capacity rules are exactly
/// those of [`RawList`].
///
/// # Examples
///
/// ```
/// use ringlist::List;
///
/// let mut list: List<u32> = List::new();
/// list.push_back(2).unwrap();
/// list.push_back(3).unwrap();
/// list.push_front(1).unwrap();
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert_eq!(list.pop_back(), Some(3));
/// ```
pub struct List<T: Element, I: Index = usize, S: CopyStrategy = Bulk> {
    raw: RawList<I, S>,
    marker: PhantomData<T>,
}

impl<T: Element, I: Index, S: CopyStrategy> List<T, I, S> {
    /// Creates an empty list. Nothing is allocated until the first push.
    ///
    /// A zero-sized `T` gets a list that stays empty: every call that would
    /// allocate fails with `ZeroItemSize`, matching [`create`](List::create).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list: List<u16> = List::new();
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> List<T, I, S> {
        List {
            raw: RawList::unallocated(T::size()),
            marker: PhantomData,
        }
    }

    /// Creates an empty list with `capacity` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list: List<u64> = List::create(16).unwrap();
    /// assert_eq!(list.capacity(), 16);
    /// assert_eq!(list.as_raw().item_size(), 8);
    /// ```
    pub fn create(capacity: usize) -> Result<Self, Error> {
        RawList::create(T::size(), capacity).map(Self::from_raw_unchecked)
    }

    #[inline]
    fn from_raw_unchecked(raw: RawList<I, S>) -> Self {
        debug_assert_eq!(raw.item_size(), T::size());
        List { raw, marker: PhantomData }
    }

    /// Frees the buffer; see [`RawList::destroy`].
    #[inline]
    pub fn destroy(&mut self) {
        self.raw.destroy()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of allocated slots, including the reserved one.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Adds `element` to the back, growing the buffer if needed.
    ///
    /// On failure the element is handed back inside the error and the list
    /// is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{Error, List};
    ///
    /// let mut list: List<u8, u8> = List::create(255).unwrap();
    /// for i in 0..254 {
    ///     list.push_back(i as u8).unwrap();
    /// }
    ///
    /// let overflow = list.push_back(42).unwrap_err();
    /// assert_eq!(overflow.element, 42);
    /// assert_eq!(overflow.error, Error::CapacityOverflow { requested: 256, max: 255 });
    /// assert_eq!(list.len(), 254);
    /// ```
    pub fn push_back(&mut self, element: T) -> Result<(), CapacityError<T>> {
        match self.raw.push_back_slot() {
            Ok(slot) => {
                element.write_to(slot);
                Ok(())
            }
            Err(error) => Err(CapacityError { element, error }),
        }
    }

    /// Adds `element` to the front, growing the buffer if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list: List<i32> = List::new();
    /// list.push_front(-1).unwrap();
    /// list.push_front(-2).unwrap();
    /// assert_eq!(list.peek_front(), Some(-2));
    /// ```
    pub fn push_front(&mut self, element: T) -> Result<(), CapacityError<T>> {
        match self.raw.push_front_slot() {
            Ok(slot) => {
                element.write_to(slot);
                Ok(())
            }
            Err(error) => Err(CapacityError { element, error }),
        }
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.raw.pop_front().map(T::read_from)
    }

    /// Removes and returns the back element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.raw.pop_back().map(T::read_from)
    }

    /// The front element, or `None` if empty.
    #[inline]
    pub fn peek_front(&self) -> Option<T> {
        self.raw.peek_front().map(T::read_from)
    }

    /// The back element, or `None` if empty.
    #[inline]
    pub fn peek_back(&self) -> Option<T> {
        self.raw.peek_back().map(T::read_from)
    }

    /// The element at `index`, counting from the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list: List<u8> = vec![4, 5, 6].into_iter().collect();
    /// assert_eq!(list.get(1), Some(5));
    /// assert_eq!(list.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw.at(index).map(T::read_from)
    }

    /// Removes the element at `index`, keeping the order of the rest.
    ///
    /// Returns the removed element, or `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list: List<u8> = vec![1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(list.remove_ordered(1), Some(2));
    /// assert_eq!(list.to_vec(), vec![1, 3, 4]);
    /// ```
    pub fn remove_ordered(&mut self, index: usize) -> Option<T> {
        let element = self.get(index)?;
        self.raw.remove_ordered(index).ok()?;
        Some(element)
    }

    /// Removes the element at `index` by moving the back element into its
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list: List<u8> = vec![1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(list.remove_unordered(0), Some(1));
    /// assert_eq!(list.to_vec(), vec![4, 2, 3]);
    /// ```
    pub fn remove_unordered(&mut self, index: usize) -> Option<T> {
        let element = self.get(index)?;
        self.raw.remove_unordered(index).ok()?;
        Some(element)
    }

    /// Replaces the contents with `count` copies of `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list: List<f32> = List::new();
    /// list.set(&0.5, 3).unwrap();
    /// assert_eq!(list.to_vec(), vec![0.5, 0.5, 0.5]);
    /// ```
    pub fn set(&mut self, element: &T, count: usize) -> Result<(), Error> {
        self.raw.fill_with(count, |slot| element.write_to(slot))
    }

    /// Moves the buffer to `capacity` slots; see [`RawList::realloc`].
    #[inline]
    pub fn realloc(&mut self, capacity: usize) -> Result<(), Error> {
        self.raw.realloc(capacity)
    }

    /// Makes the contents contiguous from the first slot; see
    /// [`RawList::reorder`].
    #[inline]
    pub fn reorder(&mut self) -> Result<(), Error> {
        self.raw.reorder()
    }

    /// An independent copy of elements `[start, end)`.
    #[inline]
    pub fn create_subset(&self, start: usize, end: usize) -> Result<Self, Error> {
        self.raw.create_subset(start, end).map(Self::from_raw_unchecked)
    }

    /// Like [`create_subset`](List::create_subset), taking a range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list: List<u32> = (0..6).collect();
    /// assert_eq!(list.subset(2..4).unwrap().to_vec(), vec![2, 3]);
    /// assert!(list.subset(4..4).is_err());
    /// ```
    pub fn subset<R>(&self, range: R) -> Result<Self, Error>
        where R: RangeArgument<usize>
    {
        self.raw.subset(range).map(Self::from_raw_unchecked)
    }

    /// Copies every element of `other` onto the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let mut list: List<u16> = (0..3).collect();
    /// let other: List<u16, u8> = (3..5).collect();
    /// list.append(&other).unwrap();
    /// assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn append<J, U>(&mut self, other: &List<T, J, U>) -> Result<(), Error>
        where J: Index,
              U: CopyStrategy
    {
        self.raw.append(&other.raw)
    }

    /// Index of the first element whose encoding equals that of `element`.
    ///
    /// Comparison is on encoded bytes, so for floats `-0.0` and `0.0` differ
    /// and a NaN matches an identical NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::List;
    ///
    /// let list: List<i64> = vec![7, -3, 7].into_iter().collect();
    /// assert_eq!(list.contains(&7), Some(0));
    /// assert_eq!(list.contains(&-3), Some(1));
    /// assert_eq!(list.contains(&0), None);
    /// ```
    pub fn contains(&self, element: &T) -> Option<usize> {
        let mut probe = raw::zeroed(T::size()).ok()?;
        element.write_to(&mut probe);
        self.raw.contains(&probe)
    }

    /// Decodes every element, front to back, into a `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Front-to-back iterator of decoded elements.
    #[inline]
    pub fn iter(&self) -> Elements<T> {
        Elements {
            inner: self.raw.iter(),
            marker: PhantomData,
        }
    }

    /// The untyped list underneath.
    #[inline]
    pub fn as_raw(&self) -> &RawList<I, S> {
        &self.raw
    }

    /// Unwraps into the untyped list underneath.
    #[inline]
    pub fn into_raw(self) -> RawList<I, S> {
        self.raw
    }
}

/// Iterator over the decoded elements of a [`List`].
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Elements<'a, T> {
    inner: raw::Iter<'a>,
    marker: PhantomData<fn() -> T>,
}

impl<'a, T> Clone for Elements<'a, T> {
    fn clone(&self) -> Self {
        Elements {
            inner: self.inner.clone(),
            marker: PhantomData,
        }
    }
}

impl<'a, T: Element> Iterator for Elements<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(T::read_from)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Element> DoubleEndedIterator for Elements<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(T::read_from)
    }
}

impl<'a, T: Element> ExactSizeIterator for Elements<'a, T> {}

impl<'a, T: Element> FusedIterator for Elements<'a, T> {}

impl<'a, T: Element, I: Index, S: CopyStrategy> IntoIterator for &'a List<T, I, S> {
    type Item = T;
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element, I: Index, S: CopyStrategy> Default for List<T, I, S> {
    #[inline]
    fn default() -> Self {
        List::new()
    }
}

impl<T: Element, I: Index, S: CopyStrategy> Clone for List<T, I, S> {
    fn clone(&self) -> Self {
        List {
            raw: self.raw.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: Element + fmt::Debug, I: Index, S: CopyStrategy> fmt::Debug for List<T, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Equality of encoded bytes, element by element.
impl<T: Element, I: Index, S: CopyStrategy> PartialEq for List<T, I, S> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: Element, I: Index, S: CopyStrategy> Eq for List<T, I, S> {}

/// Pushes each element onto the back. Stops at the first element the list
/// cannot grow to hold; that element and the rest are dropped.
impl<T: Element, I: Index, S: CopyStrategy> Extend<T> for List<T, I, S> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, iter: It) {
        for element in iter {
            if self.push_back(element).is_err() {
                return;
            }
        }
    }
}

impl<T: Element, I: Index, S: CopyStrategy> FromIterator<T> for List<T, I, S> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}
