//! Directory query engine
//!
//! Pure derivation of filtered employee views and the two presentation
//! windows (pages and an incrementally growing prefix) laid over them.
//! Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod directory;
pub mod error;
pub mod filter;
pub mod incremental;
pub mod memo;
pub mod mode;
pub mod paging;
pub mod sampling;

pub use directory::{Directory, FilteredView};
pub use error::{QueryError, QueryResult};
pub use filter::{Matcher, ViewQuery, compute_view};
pub use incremental::IncrementalCursor;
pub use memo::ViewMemo;
pub use mode::{PresentationCursor, PresentationMode};
pub use paging::{PageWindow, Paginator};
pub use sampling::{assign_departments, random_employee_id};
