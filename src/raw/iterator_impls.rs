use core::iter::FusedIterator;

use crate::utils::*;

/// `RawList` iterator, yielding each element's bytes front to back.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    ring: &'a [u8],
    item_size: usize,
    cap: usize,
    head: usize,
    tail: usize,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(super) fn new(ring: &'a [u8], item_size: usize, cap: usize, tail: usize, head: usize) -> Self {
        Iter { ring, item_size, cap, head, tail }
    }

    #[inline]
    fn slot(&self, slot: usize) -> &'a [u8] {
        let start = slot * self.item_size;
        &self.ring[start..start + self.item_size]
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        if self.tail == self.head {
            return None;
        }
        let tail = self.tail;
        self.tail = wrap_add(tail, 1, self.cap);
        Some(self.slot(tail))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = count(self.tail, self.head, self.cap);
        (len, Some(len))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a [u8]> {
        if self.tail == self.head {
            return None;
        }
        self.head = wrap_sub(self.head, 1, self.cap);
        Some(self.slot(self.head))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}
