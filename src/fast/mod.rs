//! Hot-path helpers that trade validation or generality for speed.
//!
//! The block helpers use SSE2, which every x86_64 CPU has, and fall back to plain slice operations
//! elsewhere.


#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128i, _mm_cmpeq_epi8, _mm_loadu_si128, _mm_movemask_epi8, _mm_storeu_si128,
};

#[cfg(target_arch = "x86_64")]
const BLOCK: usize = 16;

/// Parses decimal digits without any validation, stopping at the end of the string or at the first
/// NUL. Signs, whitespace and other non-digits produce garbage rather than an error, and overflow
/// wraps.
///
/// Only use this on input that is already known to be a plain non-negative number.
pub fn fast_stoi_unchecked(val: &str) -> i32 {
    fast_stoi_bytes(val.as_bytes())
}

/// Like [`fast_stoi_unchecked`], for NUL-terminated or raw byte buffers.
pub fn fast_stoi_bytes(val: &[u8]) -> i32 {
    let mut number = 0_i32;
    for &byte in val.iter().take_while(|&&b| b != 0) {
        number = number
            .wrapping_mul(10)
            .wrapping_add(byte as i32 - b'0' as i32);
    }
    number
}

/// Copies all of `src` into the front of `dst`, 16 bytes at a time, and returns the number of bytes
/// copied.
///
/// # Panics
/// Panics if `dst` is shorter than `src`.
pub fn fast_copy(dst: &mut [u8], src: &[u8]) -> usize {
    let len = src.len();
    assert!(
        dst.len() >= len,
        "destination of {} bytes can't hold {} bytes",
        dst.len(),
        len
    );

    let copied = copy_blocks(&mut dst[..len], src);
    dst[copied..len].copy_from_slice(&src[copied..]);
    len
}

/// Compares two byte slices 16 bytes at a time.
pub fn fast_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    match eq_blocks(a, b) {
        Some(compared) => a[compared..] == b[compared..],
        None => false,
    }
}

// Both helpers below handle the whole 16-byte blocks and return how many bytes they covered, so
// the callers only deal with the tail.

#[cfg(target_arch = "x86_64")]
fn copy_blocks(dst: &mut [u8], src: &[u8]) -> usize {
    debug_assert_eq!(dst.len(), src.len());
    let blocks = src.len() / BLOCK;
    let s = src.as_ptr().cast::<__m128i>();
    let d = dst.as_mut_ptr().cast::<__m128i>();

    for i in 0..blocks {
        // SAFETY: i < len / 16 and both slices are len bytes long, so each 16-byte access is in
        // bounds. The loadu/storeu variants have no alignment requirement.
        unsafe { _mm_storeu_si128(d.add(i), _mm_loadu_si128(s.add(i))) };
    }
    blocks * BLOCK
}

#[cfg(not(target_arch = "x86_64"))]
fn copy_blocks(_dst: &mut [u8], _src: &[u8]) -> usize {
    0
}

/// `None` as soon as a block differs, otherwise the number of bytes compared.
#[cfg(target_arch = "x86_64")]
fn eq_blocks(a: &[u8], b: &[u8]) -> Option<usize> {
    debug_assert_eq!(a.len(), b.len());
    let blocks = a.len() / BLOCK;
    let pa = a.as_ptr().cast::<__m128i>();
    let pb = b.as_ptr().cast::<__m128i>();

    for i in 0..blocks {
        // SAFETY: i < len / 16 and both slices are len bytes long, so each 16-byte load is in
        // bounds and unaligned loads are allowed.
        let mask = unsafe {
            _mm_movemask_epi8(_mm_cmpeq_epi8(_mm_loadu_si128(pa.add(i)), _mm_loadu_si128(pb.add(i))))
        };
        if mask != 0xFFFF {
            return None;
        }
    }
    Some(blocks * BLOCK)
}

#[cfg(not(target_arch = "x86_64"))]
fn eq_blocks(_a: &[u8], _b: &[u8]) -> Option<usize> {
    Some(0)
}
