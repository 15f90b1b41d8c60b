//! Memoized view derivation

use crate::directory::{Directory, FilteredView};
use crate::filter::ViewQuery;

/// Remembers the last derived view
///
/// The view is recomputed only when the collection (by identity), the search
/// text or the department changes.
#[derive(Debug, Default)]
pub struct ViewMemo {
    last: Option<MemoEntry>,
    recomputations: u64,
}

#[derive(Debug)]
struct MemoEntry {
    directory: Directory,
    query: ViewQuery,
    view: FilteredView,
}

impl ViewMemo {
    /// Create an empty memo
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// View of `directory` for `query`, reusing the previous result when inputs match
    pub fn view(&mut self, directory: &Directory, query: &ViewQuery) -> FilteredView {
        if let Some(entry) = &self.last
            && entry.directory.same_collection(directory)
            && entry.query == *query
        {
            return entry.view.clone();
        }

        let view = directory.view(query);
        self.recomputations += 1;
        self.last = Some(MemoEntry {
            directory: directory.clone(),
            query: query.clone(),
            view: view.clone(),
        });
        view
    }

    /// Number of times a view was actually computed
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Drop the remembered view
    pub fn clear(&mut self) {
        self.last = None;
    }
}
