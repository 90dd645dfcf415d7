use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::ops::Range;

use super::RawList;
use crate::error::Error;
use crate::index::Index;
use crate::strategy::CopyStrategy;
use crate::utils::*;

/// Allocates a zero-filled block for `capacity` items of `item_size` bytes.
///
/// Never aborts: overflow and allocator refusal are both reported. Zero-sized
/// items are refused here too, so a list built without `create` can never
/// start holding them.
pub fn allocate<I: Index>(item_size: usize, capacity: usize) -> Result<Box<[u8]>, Error> {
    if item_size == 0 {
        return Err(Error::ZeroItemSize);
    }
    let max = I::max_capacity();
    if capacity > max {
        return Err(Error::CapacityOverflow { requested: capacity, max });
    }
    let bytes = item_size
        .checked_mul(capacity)
        .ok_or(Error::CapacityOverflow { requested: capacity, max })?;
    zeroed(bytes)
}

/// A zero-filled byte block of exactly `bytes` bytes.
pub fn zeroed(bytes: usize) -> Result<Box<[u8]>, Error> {
    let mut block = Vec::new();
    block.try_reserve_exact(bytes).map_err(|_| Error::AllocFailed { bytes })?;
    block.resize(bytes, 0);
    Ok(block.into_boxed_slice())
}

impl<I: Index, S: CopyStrategy> RawList<I, S> {
    #[inline]
    pub(super) fn cap(&self) -> usize {
        self.cap.to_usize()
    }

    #[inline]
    pub(super) fn head(&self) -> usize {
        self.head.to_usize()
    }

    #[inline]
    pub(super) fn tail(&self) -> usize {
        self.tail.to_usize()
    }

    #[inline]
    pub(super) fn set_head(&mut self, head: usize) {
        debug_assert!(head < self.cap() || head == 0, "head={} cap={}", head, self.cap());
        self.head = I::from(head);
    }

    #[inline]
    pub(super) fn set_tail(&mut self, tail: usize) {
        debug_assert!(tail < self.cap() || tail == 0, "tail={} cap={}", tail, self.cap());
        self.tail = I::from(tail);
    }

    #[inline]
    pub(super) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.cap())
    }

    #[inline]
    pub(super) fn advance(&self, slot: usize) -> usize {
        self.wrap_add(slot, 1)
    }

    #[inline]
    pub(super) fn retreat(&self, slot: usize) -> usize {
        wrap_sub(slot, 1, self.cap())
    }

    #[inline]
    pub(super) fn is_contiguous(&self) -> bool {
        self.tail() <= self.head()
    }

    /// Byte range backing `slot`.
    #[inline]
    pub(super) fn slot_range(&self, slot: usize) -> Range<usize> {
        debug_assert!(slot < self.cap(), "slot={} cap={}", slot, self.cap());
        let start = slot * self.item_size;
        start..start + self.item_size
    }

    #[inline]
    pub(super) fn slot(&self, slot: usize) -> &[u8] {
        &self.data[self.slot_range(slot)]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut [u8] {
        let range = self.slot_range(slot);
        &mut self.data[range]
    }

    /// Copies the element in slot `src` over the one in slot `dst`.
    #[inline]
    pub(super) fn copy_slot(&mut self, dst: usize, src: usize) {
        let size = self.item_size;
        S::copy_within(&mut self.data, src * size, dst * size, size);
    }

    #[inline]
    pub(super) fn check_item(&self, value: &[u8]) -> Result<(), Error> {
        if value.len() == self.item_size {
            Ok(())
        } else {
            Err(Error::ItemSizeMismatch { expected: self.item_size, found: value.len() })
        }
    }

    /// Grows the buffer if one more element would fill the reserved slot.
    pub(super) fn reserve_for_push(&mut self) -> Result<(), Error> {
        let len = self.len();
        let cap = self.cap();
        if len + 1 < cap {
            return Ok(());
        }
        let required = len + 2;
        let target = cmp::max(cap.saturating_add(cap / 2), required);
        let max = I::max_capacity();
        if cmp::min(target, max) < required {
            return Err(Error::CapacityOverflow { requested: required, max });
        }
        self.realloc(cmp::min(target, max))
    }

    /// Writes the live elements, oldest first, to the front of `dst`.
    ///
    /// The list is either contiguous or split in two, so at most two copies
    /// are needed.
    pub(super) fn copy_segments_into(&self, dst: &mut [u8]) {
        let (front, back) = self.as_slices();
        debug_assert!(dst.len() >= front.len() + back.len());
        let (first, rest) = dst.split_at_mut(front.len());
        S::copy(first, front);
        S::copy(&mut rest[..back.len()], back);
    }

    /// Writes `len` elements starting at logical `index` to the front of
    /// `dst`.
    pub(super) fn copy_range_into(&self, index: usize, len: usize, dst: &mut [u8]) {
        if len == 0 {
            return;
        }
        let size = self.item_size;
        let start = self.wrap_add(self.tail(), index);
        let pre_wrap_len = cmp::min(len, self.cap() - start);
        let (first, rest) = dst.split_at_mut(pre_wrap_len * size);
        S::copy(first, &self.data[start * size..(start + pre_wrap_len) * size]);
        let post_wrap_len = len - pre_wrap_len;
        S::copy(&mut rest[..post_wrap_len * size], &self.data[..post_wrap_len * size]);
    }
}
