//! Threshold-based parallel dispatch over disjoint chunks of a buffer
//!
//! Small workloads run sequentially; above [`PARALLEL_THRESHOLD`] units of
//! work the chunks are handed to rayon. Chunks never overlap, so results
//! are identical either way.

use rayon::prelude::*;

/// Minimum total work (accumulator updates) before going parallel
pub(crate) const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Run `f(index, chunk)` for every `chunk_len`-sized chunk of `data`.
///
/// `work_per_chunk` estimates the cost of one call and only drives the
/// parallel/sequential decision.
pub(crate) fn for_each_chunk<T, F>(data: &mut [T], chunk_len: usize, work_per_chunk: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    if chunk_len == 0 {
        return;
    }
    let chunks = data.len() / chunk_len;
    if chunks > 1 && work_per_chunk.saturating_mul(chunks) >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(i, chunk)| f(i, chunk));
    } else {
        for (i, chunk) in data.chunks_mut(chunk_len).enumerate() {
            f(i, chunk);
        }
    }
}

/// Like [`for_each_chunk`], with per-worker scratch state created by `init`.
pub(crate) fn for_each_chunk_init<T, S, I, F>(
    data: &mut [T],
    chunk_len: usize,
    work_per_chunk: usize,
    init: I,
    f: F,
) where
    T: Send,
    I: Fn() -> S + Sync,
    F: Fn(&mut S, usize, &mut [T]) + Sync,
{
    if chunk_len == 0 {
        return;
    }
    let chunks = data.len() / chunk_len;
    if chunks > 1 && work_per_chunk.saturating_mul(chunks) >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(chunk_len)
            .enumerate()
            .for_each_init(&init, |state, (i, chunk)| f(state, i, chunk));
    } else {
        let mut state = init();
        for (i, chunk) in data.chunks_mut(chunk_len).enumerate() {
            f(&mut state, i, chunk);
        }
    }
}
