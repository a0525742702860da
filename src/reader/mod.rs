//! Paginated reader module
//!
//! One windowed read loop shared by every feed kind.
//!
//! # Overview
//!
//! - [`EntrySource`] - bounded sequence of raw entries. [`StreamingEntries`]
//!   walks sibling elements of a streamed index; [`TreeEntries`] iterates a
//!   list inside an eagerly parsed document.
//! - [`EntryMapper`] - turns one entry into a record, or into nothing when
//!   the entry lacks required data.
//! - [`PaginatedReader`] - applies a [`PageWindow`], drives the mapper and
//!   hands each record to the caller's handler until the source runs out,
//!   the limit is reached or the handler returns [`Flow::Stop`].
//!
//! The source is owned by the read and dropped on every exit path, which
//! releases the underlying response body.

mod engine;
mod mapper;
mod source;
mod types;

pub use engine::PaginatedReader;
pub use mapper::{CategoryMapper, EnrichedMapper, EntryMapper, SummaryMapper, SupplierMapper};
pub use source::{EntrySource, StreamingEntries, TreeEntries};
pub use types::{
    Flow, LimitBasis, PageWindow, ReadStats, ReadSummary, Termination, DEFAULT_LIMIT,
};
