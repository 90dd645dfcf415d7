//! Fixed-size byte encodings for typed lists.

use core::mem;

/// A value with a fixed-size byte representation.
///
/// [`List`](crate::List) stores its elements through this trait, so each
/// element occupies exactly `size()` bytes of the underlying `RawList`.
/// `read_from(write_to(x))` must give back `x`.
pub trait Element: Sized {
    /// Number of bytes one value occupies.
    fn size() -> usize;

    /// Encodes `self` into `dst`, which is exactly `size()` bytes long.
    fn write_to(&self, dst: &mut [u8]);

    /// Decodes a value from `src`, which is exactly `size()` bytes long.
    fn read_from(src: &[u8]) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline(always)]
            fn size() -> usize {
                mem::size_of::<$t>()
            }

            #[inline]
            fn write_to(&self, dst: &mut [u8]) {
                dst.copy_from_slice(&self.to_ne_bytes());
            }

            #[inline]
            fn read_from(src: &[u8]) -> Self {
                let mut bytes = [0u8; mem::size_of::<$t>()];
                bytes.copy_from_slice(src);
                <$t>::from_ne_bytes(bytes)
            }
        }
    )*}
}

impl_element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<const N: usize> Element for [u8; N] {
    #[inline(always)]
    fn size() -> usize {
        N
    }

    #[inline]
    fn write_to(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self);
    }

    #[inline]
    fn read_from(src: &[u8]) -> Self {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(src);
        bytes
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Element;
    use generic_array::typenum::Unsigned;
    use generic_array::{ArrayLength, GenericArray};

    impl<N> Element for GenericArray<u8, N>
    where
        N: ArrayLength<u8>,
    {
        #[inline(always)]
        fn size() -> usize {
            N::to_usize()
        }

        #[inline]
        fn write_to(&self, dst: &mut [u8]) {
            dst.copy_from_slice(self.as_slice());
        }

        #[inline]
        fn read_from(src: &[u8]) -> Self {
            GenericArray::clone_from_slice(src)
        }
    }
}
