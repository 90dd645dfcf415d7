//! A growable, double-ended list of fixed-size elements backed by a
//! circular buffer.
//!
//! The list stores opaque byte records of one size chosen at creation time.
//! It has `O(1)` amortized inserts and removals at both ends, `O(1)` indexing,
//! and grows by half its capacity whenever a push would otherwise fill it.
//!
//! [`RawList`] is the type-erased core: elements go in and come out as
//! `&[u8]`. [`List`] wraps it for any `T` with a fixed-size encoding
//! (see [`Element`]).
//!
//! # Feature Flags
//! The **ringlist** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and needs only `alloc`
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow `GenericArray<u8, N>` as a
//!     `List` element.
//!
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringlist = "0.1"
//! ```
//!
//! Currently ringlist by default links to the standard library, but if you
//! would instead like to use ringlist in a `#![no_std]` situation or crate you
//! can request this via:
//!
//! ```toml
//! [dependencies]
//! ringlist = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! One slot is always kept free so that an empty list and a full one look
//! different. A list with `capacity()` slots holds at most `capacity() - 1`
//! elements before it grows.
//! [Read more]
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Type parameters
//!
//! Both list types take two optional parameters:
//!
//! - `I: Index` is the integer type storing `head`, `tail` and capacity
//!   (`usize` by default). A `RawList<u8>` never grows past 255 slots.
//! - `S: CopyStrategy` chooses how bytes are moved: [`Bulk`] (default) or
//!   [`Bytewise`].
//!
//! # Examples
//! ```
//! use ringlist::RawList;
//!
//! let mut list: RawList = RawList::create(4, 4).unwrap();
//! list.push_back(&1u32.to_ne_bytes()).unwrap();
//! list.push_back(&2u32.to_ne_bytes()).unwrap();
//! list.push_back(&3u32.to_ne_bytes()).unwrap();
//! assert_eq!(list.capacity(), 4);
//!
//! list.push_back(&4u32.to_ne_bytes()).unwrap();
//! assert!(list.capacity() >= 5);
//!
//! assert_eq!(list.pop_front(), Some(&1u32.to_ne_bytes()[..]));
//! assert_eq!(list.len(), 3);
//! ```
//!
//! # Subset & Append
//! ```
//! use ringlist::List;
//!
//! let mut list: List<u32> = (1..=5).collect();
//! let middle = list.subset(1..4).unwrap();
//! assert_eq!(middle.to_vec(), vec![2, 3, 4]);
//!
//! list.append(&middle).unwrap();
//! assert_eq!(format!("{:?}", list), "[1, 2, 3, 4, 5, 2, 3, 4]");
//! ```
//!
//! # Reorder
//! ```
//! use ringlist::RawList;
//!
//! let mut list: RawList = RawList::create(1, 4).unwrap();
//! list.push_back(&[2]).unwrap();
//! list.push_front(&[1]).unwrap();
//! assert_eq!(list.as_slices(), (&[1][..], &[2][..]));
//!
//! list.reorder().unwrap();
//! assert_eq!(list.create_array().unwrap(), vec![1, 2]);
//! assert_eq!(list.as_slices().0, &[1, 2]);
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;
extern crate odds;
#[cfg(feature = "use_generic_array")]
extern crate generic_array;

mod element;
mod index;
mod list;
mod raw;
mod strategy;
mod utils;
pub mod error;

pub use element::Element;
pub use error::{CapacityError, Error};
pub use index::Index;
pub use list::{Elements, List};
pub use raw::{Iter, RangeArgument, RawList};
pub use strategy::{Bulk, Bytewise, CopyStrategy};
