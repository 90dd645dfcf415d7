//! Copy strategies for `RawList`.

/// Tagging trait selecting how a list moves element bytes around.
///
/// Every byte a list writes, whether pushing, growing, reordering or
/// appending, goes through one of these two functions.
pub trait CopyStrategy {
    /// Copies `src` into `dst`. The two slices have equal length and never
    /// overlap.
    fn copy(dst: &mut [u8], src: &[u8]);

    /// Copies `len` bytes inside `buf` from offset `src` to offset `dst`.
    /// The regions may overlap.
    fn copy_within(buf: &mut [u8], src: usize, dst: usize, len: usize);
}

/// Copies whole blocks at once (`memcpy`/`memmove`).
///
/// This is the default and almost always the faster choice.
pub struct Bulk;

impl CopyStrategy for Bulk {
    #[inline]
    fn copy(dst: &mut [u8], src: &[u8]) {
        dst.copy_from_slice(src);
    }

    #[inline]
    fn copy_within(buf: &mut [u8], src: usize, dst: usize, len: usize) {
        buf.copy_within(src..src + len, dst);
    }
}

/// Copies one byte at a time.
///
/// Useful on targets where the platform `memcpy` is unavailable or slower
/// than a plain loop for the tiny element sizes being moved.
pub struct Bytewise;

impl CopyStrategy for Bytewise {
    #[inline]
    fn copy(dst: &mut [u8], src: &[u8]) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src) {
            *d = *s;
        }
    }

    #[inline]
    fn copy_within(buf: &mut [u8], src: usize, dst: usize, len: usize) {
        debug_assert!(src + len <= buf.len() && dst + len <= buf.len(),
                      "cpy dst={} src={} len={} buf={}",
                      dst,
                      src,
                      len,
                      buf.len());
        if dst <= src {
            for i in 0..len {
                buf[dst + i] = buf[src + i];
            }
        } else {
            for i in (0..len).rev() {
                buf[dst + i] = buf[src + i];
            }
        }
    }
}
