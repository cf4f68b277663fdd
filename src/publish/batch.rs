//! Batch partitioning.

/// A contiguous group of at most `batch_size` files with its 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    pub index: usize,
    pub files: &'a [String],
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Number of batches needed for `len` files: `ceil(len / size)`.
pub fn batch_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1))
}

/// Split `files` into consecutive batches of at most `size`, preserving order.
/// A zero size is treated as one.
pub fn partition(files: &[String], size: usize) -> Vec<Batch<'_>> {
    files
        .chunks(size.max(1))
        .enumerate()
        .map(|(i, files)| Batch { index: i + 1, files })
        .collect()
}
