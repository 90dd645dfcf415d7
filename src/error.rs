//! Error types reported by `RawList` and `List`.

#[cfg(feature = "std")]
use std::error;
use core::fmt;

/// The reason an operation on a list was refused.
///
/// A failed call never leaves the list half-mutated: whatever the list held
/// before the call, it still holds afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The allocator could not provide `bytes` bytes.
    AllocFailed {
        /// Size of the refused request.
        bytes: usize,
    },
    /// The requested capacity does not fit the list's index type, or its size
    /// in bytes overflows `usize`.
    CapacityOverflow {
        /// Requested capacity in elements.
        requested: usize,
        /// Largest capacity the index type can address.
        max: usize,
    },
    /// A list cannot be created with zero capacity.
    ZeroCapacity,
    /// A list cannot be created with zero-sized items.
    ZeroItemSize,
    /// `index` does not name a live element.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live elements.
        len: usize,
    },
    /// `start..end` is empty or reaches past the live elements.
    InvalidRange {
        /// Range start.
        start: usize,
        /// Range end (exclusive).
        end: usize,
        /// Number of live elements.
        len: usize,
    },
    /// An element or another list does not have the expected item size.
    ItemSizeMismatch {
        /// Item size of the list being operated on.
        expected: usize,
        /// Item size that was supplied.
        found: usize,
    },
    /// A destination buffer is too short to hold the flattened list.
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::AllocFailed { bytes } => write!(f, "allocation of {} bytes failed", bytes),
            Error::CapacityOverflow { requested, max } => {
                write!(f, "capacity {} exceeds the maximum of {}", requested, max)
            }
            Error::ZeroCapacity => write!(f, "capacity must be non-zero"),
            Error::ZeroItemSize => write!(f, "item size must be non-zero"),
            Error::OutOfBounds { index, len } => {
                write!(f, "index out of bounds: the len is {} but the index is {}", len, index)
            }
            Error::InvalidRange { start, end, len } => {
                write!(f, "invalid range {}..{} for a list of len {}", start, end, len)
            }
            Error::ItemSizeMismatch { expected, found } => {
                write!(f, "item size mismatch: expected {} bytes, found {}", expected, found)
            }
            Error::BufferTooSmall { needed, found } => {
                write!(f, "buffer too small: needed {} bytes, found {}", needed, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

/// Error value returned when a typed push cannot make room.
///
/// The element that could not be stored is handed back unchanged.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
    /// Why the list could not grow.
    pub error: Error,
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> error::Error for CapacityError<T> {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", CAPERROR, self.error)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: {} ({:?})", CAPERROR, self.error)
    }
}
