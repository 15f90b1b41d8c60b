//! Incrementally growing prefix window ("load more" / infinite scroll)

use crate::error::{QueryError, QueryResult};

/// Default number of items revealed initially and per load
pub const DEFAULT_BATCH: usize = 20;

/// Monotonically growing visible-count cursor
///
/// `visible` only ever grows. When the underlying sequence shrinks the cursor
/// is left alone and the window is clamped at read time instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementalCursor {
    visible: usize,
    batch: usize,
}

impl Default for IncrementalCursor {
    fn default() -> Self {
        Self {
            visible: DEFAULT_BATCH,
            batch: DEFAULT_BATCH,
        }
    }
}

impl IncrementalCursor {
    /// Cursor showing one batch, growing by `batch` per load
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ZeroBatch`] when `batch` is zero.
    pub const fn with_batch(batch: usize) -> QueryResult<Self> {
        if batch == 0 {
            return Err(QueryError::ZeroBatch);
        }
        Ok(Self {
            visible: batch,
            batch,
        })
    }

    /// Restore a cursor from a previously reported visible count
    ///
    /// Counts below one batch are raised to one batch.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ZeroBatch`] when `batch` is zero.
    pub fn resume(batch: usize, visible: usize) -> QueryResult<Self> {
        let mut cursor = Self::with_batch(batch)?;
        cursor.visible = visible.max(batch);
        Ok(cursor)
    }

    /// Current visible count (may exceed the sequence length)
    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    /// Items revealed per load
    #[must_use]
    pub const fn batch(&self) -> usize {
        self.batch
    }

    /// Reveal one more batch
    pub const fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.batch);
    }

    /// Cursor after one more batch, leaving `self` untouched
    #[must_use]
    pub const fn next(mut self) -> Self {
        self.load_more();
        self
    }

    /// Whether a sequence of `len` items has unrevealed items
    #[must_use]
    pub const fn has_more(&self, len: usize) -> bool {
        self.visible < len
    }

    /// Number of items rendered for a sequence of `len` items
    #[must_use]
    pub fn rendered_len(&self, len: usize) -> usize {
        self.visible.min(len)
    }

    /// Visible prefix of `items`
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(..self.rendered_len(items.len())).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_starts_at_twenty() {
        let cursor = IncrementalCursor::default();
        assert_eq!(cursor.visible(), 20);
        assert_eq!(cursor.batch(), 20);
    }

    #[test]
    fn test_zero_batch_is_rejected() {
        assert_eq!(IncrementalCursor::with_batch(0), Err(QueryError::ZeroBatch));
        assert_eq!(IncrementalCursor::resume(0, 40), Err(QueryError::ZeroBatch));
    }

    #[test]
    fn test_load_more_adds_one_batch() {
        let mut cursor = IncrementalCursor::default();
        cursor.load_more();
        cursor.load_more();
        assert_eq!(cursor.visible(), 60);
    }

    #[test]
    fn test_has_more_and_window_over_45_items() {
        let items: Vec<usize> = (0..45).collect();
        let mut cursor = IncrementalCursor::default();

        assert!(cursor.has_more(items.len()));
        assert_eq!(cursor.window(&items).len(), 20);

        cursor.load_more();
        assert!(cursor.has_more(items.len()));
        assert_eq!(cursor.window(&items).len(), 40);

        cursor.load_more();
        assert!(!cursor.has_more(items.len()));
        assert_eq!(cursor.window(&items).len(), 45);
        assert_eq!(cursor.window(&items).last(), Some(&44));
    }

    #[test]
    fn test_shrinking_sequence_does_not_reset_cursor() {
        let mut cursor = IncrementalCursor::default();
        cursor.load_more();
        cursor.load_more();

        let narrowed: Vec<usize> = (0..5).collect();
        assert_eq!(cursor.window(&narrowed), &[0, 1, 2, 3, 4]);
        assert!(!cursor.has_more(narrowed.len()));
        assert_eq!(cursor.visible(), 60);
    }

    #[test]
    fn test_resume_never_goes_below_one_batch() {
        assert_eq!(IncrementalCursor::resume(20, 0).unwrap().visible(), 20);
        assert_eq!(IncrementalCursor::resume(20, 55).unwrap().visible(), 55);
    }

    #[test]
    fn test_next_is_pure() {
        let cursor = IncrementalCursor::default();
        let advanced = cursor.next();
        assert_eq!(cursor.visible(), 20);
        assert_eq!(advanced.visible(), 40);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let cursor = IncrementalCursor::default();
        assert!(!cursor.has_more(20));
        assert_eq!(cursor.rendered_len(20), 20);
    }
}
