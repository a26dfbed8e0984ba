//! Fixed-size partitioning of sequences.

/// Represents an error when [`chunk`] is called with a size of zero.
///
/// Chunking requires a size of at least one; a zero size cannot make
/// progress through the input. Negative sizes are unrepresentable because
/// the size parameter is a `usize`.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::{ChunkSizeError, chunk};
///
/// let error = chunk(&[1, 2, 3], 0).unwrap_err();
/// assert_eq!(error, ChunkSizeError);
/// assert_eq!(format!("{}", error), "chunk size must be at least 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSizeError;

impl std::fmt::Display for ChunkSizeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("chunk size must be at least 1")
    }
}

impl std::error::Error for ChunkSizeError {}

/// Partitions a sequence into consecutive chunks of the given size.
///
/// Every chunk except possibly the last has exactly `size` elements; the
/// last chunk holds the remainder (between 1 and `size` elements).
/// Concatenating the chunks in order reproduces the input exactly.
///
/// A `size` greater than the input length yields a single chunk equal to
/// the whole input. An empty input yields no chunks.
///
/// # Errors
///
/// Returns [`ChunkSizeError`] when `size` is zero. No partial result is
/// produced; the input is untouched either way.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::chunk;
///
/// let chunks = chunk(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 3)?;
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
///
/// // Oversized chunks cover the whole input at once.
/// assert_eq!(chunk(&[1, 2], 10)?, vec![vec![1, 2]]);
///
/// // Zero is rejected.
/// assert!(chunk(&[1, 2], 0).is_err());
/// # Ok::<(), recollect::seq::ChunkSizeError>(())
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ChunkSizeError> {
    if size == 0 {
        return Err(ChunkSizeError);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_empty_input() {
        let chunks = chunk(&[] as &[i32], 3);
        assert_eq!(chunks, Ok(vec![]));
    }

    #[test]
    fn test_chunk_exact_division() {
        let chunks = chunk(&[1, 2, 3, 4], 2);
        assert_eq!(chunks, Ok(vec![vec![1, 2], vec![3, 4]]));
    }

    #[test]
    fn test_chunk_zero_size_is_rejected() {
        assert_eq!(chunk(&[1, 2, 3], 0), Err(ChunkSizeError));
    }
}
