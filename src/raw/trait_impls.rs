use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use super::RawList;
use crate::index::Index;
use crate::strategy::CopyStrategy;

/// Deep copy: the clone owns a buffer of the same capacity and layout.
impl<I: Index, S: CopyStrategy> Clone for RawList<I, S> {
    fn clone(&self) -> Self {
        RawList {
            item_size: self.item_size,
            data: self.data.clone(),
            cap: self.cap,
            head: self.head,
            tail: self.tail,
            strategy: PhantomData,
        }
    }
}

/// Lists are equal when they hold the same elements in the same order,
/// regardless of capacity or physical layout.
impl<I: Index, S: CopyStrategy> PartialEq for RawList<I, S> {
    fn eq(&self, other: &Self) -> bool {
        self.item_size == other.item_size
            && self.len() == other.len()
            && self.iter().eq(other.iter())
    }
}

impl<I: Index, S: CopyStrategy> Eq for RawList<I, S> {}

impl<I: Index, S: CopyStrategy> Hash for RawList<I, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item_size.hash(state);
        self.len().hash(state);
        for element in self.iter() {
            state.write(element);
        }
    }
}

impl<I: Index, S: CopyStrategy> fmt::Debug for RawList<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<'a, I: Index, S: CopyStrategy> IntoIterator for &'a RawList<I, S> {
    type Item = &'a [u8];
    type IntoIter = super::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
