use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::marker::PhantomData;

pub use odds::IndexRange as RangeArgument;

use crate::error::Error;
use crate::index::Index;
use crate::strategy::{Bulk, CopyStrategy};
use crate::utils::count;

use self::internal::allocate;
pub(crate) use self::internal::zeroed;

mod internal;
mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::Iter;

/// A growable, type-erased ring buffer of fixed-size byte elements.
///
/// Every element is exactly `item_size()` bytes. Elements enter and leave at
/// either end in O(1); the buffer grows by half its capacity whenever a push
/// would otherwise fill it.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `append` pushes onto
/// the back in this manner, and iterating over `RawList` goes front to back.
///
/// # Capacity
///
/// One slot is always kept free so that `head == tail` unambiguously means
/// empty. A list with `capacity()` slots holds at most `capacity() - 1`
/// elements before it has to grow.
pub struct RawList<I: Index = usize, S: CopyStrategy = Bulk> {
    item_size: usize,
    data: Box<[u8]>,
    cap: I,
    head: I,
    tail: I,
    strategy: PhantomData<S>,
}

impl<I: Index, S: CopyStrategy> RawList<I, S> {
    /// Creates an empty list with room for `capacity` slots of `item_size`
    /// bytes each. The buffer is zero-filled.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{Error, RawList};
    ///
    /// let list: RawList = RawList::create(4, 8).unwrap();
    /// assert_eq!(list.capacity(), 8);
    /// assert!(list.is_empty());
    ///
    /// let zero: Result<RawList, Error> = RawList::create(4, 0);
    /// assert_eq!(zero.err(), Some(Error::ZeroCapacity));
    /// ```
    pub fn create(item_size: usize, capacity: usize) -> Result<Self, Error> {
        if item_size == 0 {
            return Err(Error::ZeroItemSize);
        }
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let data = allocate::<I>(item_size, capacity)?;
        Ok(RawList {
            item_size,
            data,
            cap: I::from(capacity),
            head: I::from(0),
            tail: I::from(0),
            strategy: PhantomData,
        })
    }

    /// An empty list that has not allocated yet. The first push allocates.
    pub(crate) fn unallocated(item_size: usize) -> Self {
        RawList {
            item_size,
            data: Box::default(),
            cap: I::from(0),
            head: I::from(0),
            tail: I::from(0),
            strategy: PhantomData,
        }
    }

    /// Frees the buffer and leaves the list empty with zero capacity.
    ///
    /// Calling it again is a no-op. A released list still works; the next
    /// push allocates a fresh buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[7]).unwrap();
    /// list.destroy();
    /// list.destroy();
    /// assert_eq!(list.capacity(), 0);
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn destroy(&mut self) {
        self.data = Box::default();
        self.cap = I::from(0);
        self.head = I::from(0);
        self.tail = I::from(0);
    }

    /// Size in bytes of one element.
    #[inline]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Number of allocated slots, including the reserved one.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut v: RawList = RawList::create(2, 4).unwrap();
    /// assert_eq!(v.len(), 0);
    /// v.push_back(&[1, 0]).unwrap();
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        count(self.tail(), self.head(), self.cap())
    }

    /// Number of bytes held by live elements, `len() * item_size()`.
    #[inline]
    pub fn byte_count(&self) -> usize {
        self.len() * self.item_size
    }

    /// Returns true if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Element at `index`, where 0 is the oldest (front) element.
    ///
    /// Returns `None` unless `index < len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[3]).unwrap();
    /// list.push_back(&[4]).unwrap();
    /// list.push_front(&[2]).unwrap();
    /// assert_eq!(list.at(0), Some(&[2][..]));
    /// assert_eq!(list.at(2), Some(&[4][..]));
    /// assert_eq!(list.at(3), None);
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Option<&[u8]> {
        if index < self.len() {
            let slot = self.wrap_add(self.tail(), index);
            Some(self.slot(slot))
        } else {
            None
        }
    }

    /// Mutable access to the element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index < self.len() {
            let slot = self.wrap_add(self.tail(), index);
            Some(self.slot_mut(slot))
        } else {
            None
        }
    }

    /// Returns a pair of slices which contain, in order, the bytes of every
    /// element. The second slice is empty unless the contents wrap around the
    /// end of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 6).unwrap();
    /// list.push_back(&[0]).unwrap();
    /// list.push_back(&[1]).unwrap();
    /// list.push_front(&[9]).unwrap();
    /// assert_eq!(list.as_slices(), (&[9][..], &[0, 1][..]));
    /// ```
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let size = self.item_size;
        let (tail, head) = (self.tail() * size, self.head() * size);
        if self.is_contiguous() {
            (&self.data[tail..head], &[])
        } else {
            (&self.data[tail..], &self.data[..head])
        }
    }

    /// Returns a front-to-back iterator over element bytes.
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter::new(&self.data, self.item_size, self.cap(), self.tail(), self.head())
    }

    /// Copies `value` onto the back of the list, growing it first if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(4, 4).unwrap();
    /// for i in 1u32..=4 {
    ///     list.push_back(&i.to_ne_bytes()).unwrap();
    /// }
    /// assert_eq!(list.len(), 4);
    /// assert!(list.capacity() >= 5);
    /// ```
    pub fn push_back(&mut self, value: &[u8]) -> Result<(), Error> {
        self.check_item(value)?;
        S::copy(self.push_back_slot()?, value);
        Ok(())
    }

    /// Copies `value` onto the front of the list, growing it first if needed.
    pub fn push_front(&mut self, value: &[u8]) -> Result<(), Error> {
        self.check_item(value)?;
        S::copy(self.push_front_slot()?, value);
        Ok(())
    }

    /// Claims a new back slot and hands it out for writing.
    pub(crate) fn push_back_slot(&mut self) -> Result<&mut [u8], Error> {
        self.reserve_for_push()?;
        let head = self.head();
        self.set_head(self.advance(head));
        Ok(self.slot_mut(head))
    }

    /// Claims a new front slot and hands it out for writing.
    pub(crate) fn push_front_slot(&mut self) -> Result<&mut [u8], Error> {
        self.reserve_for_push()?;
        let tail = self.retreat(self.tail());
        self.set_tail(tail);
        Ok(self.slot_mut(tail))
    }

    /// Removes the front element and returns its bytes, or `None` if the list
    /// is empty.
    ///
    /// The returned bytes live in the vacated slot; they stay readable until
    /// the list is next mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 3).unwrap();
    /// list.push_back(&[1]).unwrap();
    /// list.push_back(&[2]).unwrap();
    ///
    /// assert_eq!(list.pop_front(), Some(&[1][..]));
    /// assert_eq!(list.pop_front(), Some(&[2][..]));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<&[u8]> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail();
        self.set_tail(self.advance(tail));
        Some(self.slot(tail))
    }

    /// Removes the back element and returns its bytes, or `None` if the list
    /// is empty.
    pub fn pop_back(&mut self) -> Option<&[u8]> {
        if self.is_empty() {
            return None;
        }
        let head = self.retreat(self.head());
        self.set_head(head);
        Some(self.slot(head))
    }

    /// The front (oldest) element, or `None` if the list is empty.
    #[inline]
    pub fn peek_front(&self) -> Option<&[u8]> {
        self.at(0)
    }

    /// The back (newest) element, or `None` if the list is empty.
    #[inline]
    pub fn peek_back(&self) -> Option<&[u8]> {
        if self.is_empty() {
            None
        } else {
            Some(self.slot(self.retreat(self.head())))
        }
    }

    /// Removes the element at `index` by overwriting it with the back
    /// element.
    ///
    /// This does not preserve ordering, but is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[1]).unwrap();
    /// list.push_back(&[2]).unwrap();
    /// list.push_back(&[3]).unwrap();
    ///
    /// list.remove_unordered(0).unwrap();
    /// assert_eq!(list.as_slices().0, &[3, 2]);
    /// assert!(list.remove_unordered(2).is_err());
    /// ```
    pub fn remove_unordered(&mut self, index: usize) -> Result<(), Error> {
        let len = self.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        let newest = self.retreat(self.head());
        let slot = self.wrap_add(self.tail(), index);
        if slot != newest {
            self.copy_slot(slot, newest);
        }
        self.set_head(newest);
        Ok(())
    }

    /// Removes the element at `index`, shifting every later element one slot
    /// towards the front.
    ///
    /// This preserves ordering, and is O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[1]).unwrap();
    /// list.push_back(&[2]).unwrap();
    /// list.push_back(&[3]).unwrap();
    ///
    /// list.remove_ordered(0).unwrap();
    /// assert_eq!(list.as_slices().0, &[2, 3]);
    /// ```
    pub fn remove_ordered(&mut self, index: usize) -> Result<(), Error> {
        let len = self.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        let mut dst = self.wrap_add(self.tail(), index);
        for _ in index + 1..len {
            let src = self.advance(dst);
            self.copy_slot(dst, src);
            dst = src;
        }
        self.set_head(self.retreat(self.head()));
        Ok(())
    }

    /// Replaces the contents with `count` copies of `template`.
    ///
    /// Grows the buffer first when `count` elements would not fit. The result
    /// is contiguous, starting at the first slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(2, 2).unwrap();
    /// list.set(&[0xAB, 0xCD], 5).unwrap();
    /// assert_eq!(list.len(), 5);
    /// assert!(list.iter().all(|item| item == [0xAB, 0xCD]));
    /// ```
    pub fn set(&mut self, template: &[u8], count: usize) -> Result<(), Error> {
        self.check_item(template)?;
        self.fill_with(count, |slot| S::copy(slot, template))
    }

    /// Makes the list `count` copies of whatever `write` puts in the first
    /// slot.
    pub(crate) fn fill_with<F>(&mut self, count: usize, write: F) -> Result<(), Error>
        where F: FnOnce(&mut [u8])
    {
        if count >= self.cap() {
            let max = I::max_capacity();
            let required = count
                .checked_add(1)
                .ok_or(Error::CapacityOverflow { requested: count, max })?;
            let target = cmp::min(cmp::max(count.saturating_add(count / 2), required), max);
            if target < required {
                return Err(Error::CapacityOverflow { requested: required, max });
            }
            self.data = allocate::<I>(self.item_size, target)?;
            self.cap = I::from(target);
        }
        if count > 0 {
            write(self.slot_mut(0));
            for slot in 1..count {
                self.copy_slot(slot, 0);
            }
        }
        self.set_tail(0);
        self.set_head(count);
        Ok(())
    }

    /// Moves the buffer to `capacity` slots, keeping every element in order.
    ///
    /// `capacity` is raised to `len() + 1` if smaller, so this never drops
    /// elements. Afterwards the contents start at the first slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[1]).unwrap();
    /// list.push_back(&[2]).unwrap();
    /// list.realloc(1).unwrap();
    /// assert_eq!(list.capacity(), 3);
    /// assert_eq!(list.as_slices().0, &[1, 2]);
    /// ```
    pub fn realloc(&mut self, capacity: usize) -> Result<(), Error> {
        let len = self.len();
        let capacity = cmp::max(capacity, len + 1);
        let mut data = allocate::<I>(self.item_size, capacity)?;
        self.copy_segments_into(&mut data);
        self.data = data;
        self.cap = I::from(capacity);
        self.set_tail(0);
        self.set_head(len);
        Ok(())
    }

    /// Rewrites the buffer so the front element sits in the first slot and
    /// the contents no longer wrap.
    ///
    /// Logical contents are untouched; only the physical layout changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 5).unwrap();
    /// list.push_back(&[1]).unwrap();
    /// list.push_front(&[0]).unwrap();
    /// assert_eq!(list.as_slices(), (&[0][..], &[1][..]));
    ///
    /// list.reorder().unwrap();
    /// assert_eq!(list.as_slices(), (&[0, 1][..], &[][..]));
    /// ```
    pub fn reorder(&mut self) -> Result<(), Error> {
        let tail = self.tail();
        if self.is_empty() || tail == 0 {
            return Ok(());
        }
        let len = self.len();
        let bytes = len * self.item_size;
        if self.is_contiguous() && tail >= len {
            // The free run before `tail` holds everything: copy in place.
            S::copy_within(&mut self.data, tail * self.item_size, 0, bytes);
        } else {
            let mut staging = zeroed(bytes)?;
            self.copy_segments_into(&mut staging);
            S::copy(&mut self.data[..bytes], &staging);
        }
        self.set_tail(0);
        self.set_head(len);
        Ok(())
    }

    /// Copies every element, oldest first, to the front of `dest` and
    /// returns the number of bytes written.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{Error, RawList};
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[2]).unwrap();
    /// list.push_front(&[1]).unwrap();
    ///
    /// let mut flat = [0u8; 4];
    /// assert_eq!(list.copy_to_array(&mut flat), Ok(2));
    /// assert_eq!(flat, [1, 2, 0, 0]);
    ///
    /// let mut short = [0u8; 1];
    /// assert_eq!(list.copy_to_array(&mut short),
    ///            Err(Error::BufferTooSmall { needed: 2, found: 1 }));
    /// ```
    pub fn copy_to_array(&self, dest: &mut [u8]) -> Result<usize, Error> {
        let needed = self.byte_count();
        if dest.len() < needed {
            return Err(Error::BufferTooSmall { needed, found: dest.len() });
        }
        self.copy_segments_into(dest);
        Ok(needed)
    }

    /// Returns a newly allocated, flat copy of every element, oldest first.
    pub fn create_array(&self) -> Result<Vec<u8>, Error> {
        let mut array = zeroed(self.byte_count())?;
        self.copy_segments_into(&mut array);
        Ok(array.into_vec())
    }

    /// Returns a new, independent list holding a copy of elements
    /// `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[2]).unwrap();
    /// list.push_back(&[3]).unwrap();
    /// list.push_back(&[4]).unwrap();
    ///
    /// let subset = list.create_subset(1, 3).unwrap();
    /// assert_eq!(subset.len(), 2);
    /// assert_eq!(subset.as_slices().0, &[3, 4]);
    ///
    /// assert!(list.create_subset(2, 2).is_err());
    /// assert!(list.create_subset(1, 4).is_err());
    /// ```
    pub fn create_subset(&self, start: usize, end: usize) -> Result<Self, Error> {
        let len = self.len();
        if start >= end || end > len || start >= len {
            return Err(Error::InvalidRange { start, end, len });
        }
        let subset_len = end - start;
        let mut subset = Self::create(self.item_size, subset_len + 1)?;
        self.copy_range_into(start, subset_len, &mut subset.data);
        subset.set_head(subset_len);
        Ok(subset)
    }

    /// Like [`create_subset`](RawList::create_subset), taking a range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 8).unwrap();
    /// for i in 0..5 {
    ///     list.push_back(&[i]).unwrap();
    /// }
    /// assert_eq!(list.subset(3..).unwrap().as_slices().0, &[3, 4]);
    /// assert_eq!(list.subset(..2).unwrap().as_slices().0, &[0, 1]);
    /// assert_eq!(list.subset(..).unwrap().len(), 5);
    /// ```
    pub fn subset<R>(&self, range: R) -> Result<Self, Error>
        where R: RangeArgument<usize>
    {
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or_else(|| self.len());
        self.create_subset(start, end)
    }

    /// Copies every element of `other`, in order, onto the back of `self`.
    ///
    /// `other` is left untouched. Afterwards `self` is contiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{Error, RawList};
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// let mut other: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[0]).unwrap();
    /// other.push_back(&[1]).unwrap();
    /// other.push_back(&[2]).unwrap();
    ///
    /// list.append(&other).unwrap();
    /// assert_eq!(list.as_slices().0, &[0, 1, 2]);
    /// assert_eq!(other.len(), 2);
    ///
    /// let wide: RawList = RawList::create(2, 4).unwrap();
    /// assert_eq!(list.append(&wide), Err(Error::ItemSizeMismatch { expected: 1, found: 2 }));
    /// ```
    pub fn append<J, T>(&mut self, other: &RawList<J, T>) -> Result<(), Error>
        where J: Index,
              T: CopyStrategy
    {
        if self.item_size != other.item_size {
            return Err(Error::ItemSizeMismatch {
                expected: self.item_size,
                found: other.item_size,
            });
        }
        let len = self.len();
        let combined = len + other.len();
        if combined >= self.cap() {
            self.realloc(combined + 1)?;
        } else {
            self.reorder()?;
        }
        let start = len * self.item_size;
        let (front, back) = other.as_slices();
        let (first, rest) = self.data[start..].split_at_mut(front.len());
        S::copy(first, front);
        S::copy(&mut rest[..back.len()], back);
        self.set_head(combined);
        Ok(())
    }

    /// Index of the first element whose bytes equal `item`, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RawList;
    ///
    /// let mut list: RawList = RawList::create(1, 4).unwrap();
    /// list.push_back(&[5]).unwrap();
    /// list.push_back(&[6]).unwrap();
    ///
    /// assert_eq!(list.contains(&[6]), Some(1));
    /// assert_eq!(list.contains(&[7]), None);
    /// ```
    pub fn contains(&self, item: &[u8]) -> Option<usize> {
        if item.len() != self.item_size {
            return None;
        }
        self.iter().position(|element| element == item)
    }
}

#[cfg(test)]
mod tests;
