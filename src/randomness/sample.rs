//! Unbiased sampling helpers over any [`RngCore`].

use rand_core::RngCore;

/// Draws a uniformly distributed index in `0..bound`.
///
/// Uses rejection sampling over 64-bit words: values above the largest
/// multiple of `bound` are redrawn, so the result carries no modulo bias.
/// Errors from the source are propagated, never retried. An empty range
/// is an error and draws nothing.
pub fn uniform_index<R: RngCore + ?Sized>(
    rng: &mut R,
    bound: usize,
) -> Result<usize, rand_core::Error> {
    if bound == 0 {
        return Err(rand_core::Error::new("cannot sample from an empty range"));
    }
    let range = bound as u64;
    // 2^64 mod range
    let rem = range.wrapping_neg() % range;
    let limit = u64::MAX - rem;

    loop {
        let mut word = [0u8; 8];
        rng.try_fill_bytes(&mut word)?;
        let value = u64::from_le_bytes(word);
        if value <= limit {
            return Ok((value % range) as usize);
        }
    }
}

/// Picks a uniformly random element of a slice.
///
/// Fails on an empty slice, like [`uniform_index`] with a zero bound.
pub fn choose<'a, R: RngCore + ?Sized, T>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, rand_core::Error> {
    let index = uniform_index(rng, items.len())?;
    Ok(&items[index])
}
