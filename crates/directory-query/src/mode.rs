//! Presentation modes over one filtered sequence

use crate::incremental::IncrementalCursor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the filtered sequence is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    /// Discrete page windows
    #[default]
    Paged,
    /// Monotonically growing visible prefix
    Incremental,
}

impl PresentationMode {
    /// Query-string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paged => "paged",
            Self::Incremental => "incremental",
        }
    }

    /// The other mode
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Paged => Self::Incremental,
            Self::Incremental => Self::Paged,
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position inside the active presentation mode
///
/// Search and department live outside the cursor, so switching modes only
/// resets the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationCursor {
    /// 1-based page
    Paged {
        /// Requested page
        page: usize,
    },
    /// Visible prefix
    Incremental(IncrementalCursor),
}

impl PresentationCursor {
    /// Fresh cursor for `mode`
    #[must_use]
    pub const fn start(mode: PresentationMode, batch: IncrementalCursor) -> Self {
        match mode {
            PresentationMode::Paged => Self::Paged { page: 1 },
            PresentationMode::Incremental => Self::Incremental(batch),
        }
    }

    /// Mode this cursor belongs to
    #[must_use]
    pub const fn mode(&self) -> PresentationMode {
        match self {
            Self::Paged { .. } => PresentationMode::Paged,
            Self::Incremental(_) => PresentationMode::Incremental,
        }
    }

    /// Cursor after switching to `mode`; unchanged when already in `mode`
    #[must_use]
    pub const fn switch_to(self, mode: PresentationMode, batch: IncrementalCursor) -> Self {
        if matches!(
            (self.mode(), mode),
            (PresentationMode::Paged, PresentationMode::Paged)
                | (PresentationMode::Incremental, PresentationMode::Incremental)
        ) {
            self
        } else {
            Self::start(mode, batch)
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_mode_is_paged() {
        assert_eq!(PresentationMode::default(), PresentationMode::Paged);
        assert_eq!(PresentationMode::Paged.other(), PresentationMode::Incremental);
        assert_eq!(PresentationMode::Incremental.to_string(), "incremental");
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: PresentationMode = serde_json::from_str("\"incremental\"").unwrap_or_default();
        assert_eq!(mode, PresentationMode::Incremental);
    }

    #[test]
    fn test_switching_resets_position() {
        let batch = IncrementalCursor::default();
        let paged = PresentationCursor::Paged { page: 4 };

        let switched = paged.switch_to(PresentationMode::Incremental, batch);
        assert_eq!(switched, PresentationCursor::Incremental(batch));

        let back = switched.switch_to(PresentationMode::Paged, batch);
        assert_eq!(back, PresentationCursor::Paged { page: 1 });
    }

    #[test]
    fn test_switching_to_same_mode_keeps_position() {
        let batch = IncrementalCursor::default();
        let cursor = PresentationCursor::Incremental(batch.next().next());

        assert_eq!(cursor.switch_to(PresentationMode::Incremental, batch), cursor);
        assert_eq!(
            PresentationCursor::Paged { page: 3 }.switch_to(PresentationMode::Paged, batch),
            PresentationCursor::Paged { page: 3 }
        );
    }
}
