//! Slot arithmetic on a ring of `capacity` slots.

/// Slot `addend` positions after `index`, wrapping past the end.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity && addend <= capacity,
                  "wrap_add index={} addend={} cap={}",
                  index,
                  addend,
                  capacity);
    let room = capacity - index;
    if addend < room {
        index + addend
    } else {
        addend - room
    }
}

/// Slot `subtrahend` positions before `index`, wrapping past the start.
#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity && subtrahend <= capacity,
                  "wrap_sub index={} subtrahend={} cap={}",
                  index,
                  subtrahend,
                  capacity);
    if subtrahend <= index {
        index - subtrahend
    } else {
        capacity - (subtrahend - index)
    }
}

/// Number of live slots between `tail` (inclusive) and `head` (exclusive).
///
/// A released ring has `capacity == 0` and `head == tail == 0`.
#[inline]
pub fn count(tail: usize, head: usize, capacity: usize) -> usize {
    debug_assert!(head < capacity || (capacity == 0 && head == 0));
    debug_assert!(tail < capacity || (capacity == 0 && tail == 0));
    if head >= tail {
        head - tail
    } else {
        capacity + head - tail
    }
}
