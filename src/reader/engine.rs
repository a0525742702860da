//! Read loop

use super::mapper::EntryMapper;
use super::source::EntrySource;
use super::types::{Flow, PageWindow, ReadStats, ReadSummary, Termination};
use crate::error::{Error, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Windowed, handler-driven reader over an [`EntrySource`]
#[derive(Debug, Clone, Default)]
pub struct PaginatedReader {
    window: PageWindow,
    cancel: CancellationToken,
}

impl PaginatedReader {
    /// Create a reader for one window
    pub fn new(window: PageWindow) -> Self {
        Self {
            window,
            cancel: CancellationToken::new(),
        }
    }

    /// Abort between entries once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The window applied to reads
    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Read `source` through `mapper`, handing every record to `handler`.
    ///
    /// Skipped entries are never materialized. Entries the mapper rejects
    /// count as examined but never reach the handler. Handler and mapper
    /// errors end the read and are returned as is; the source is dropped
    /// before returning either way.
    pub async fn run<S, M, H>(
        &self,
        mut source: S,
        mapper: &M,
        mut handler: H,
    ) -> Result<ReadSummary>
    where
        S: EntrySource,
        M: EntryMapper<Entry = S::Entry>,
        H: FnMut(M::Record) -> Result<Flow>,
    {
        let window = self.window;
        let mut stats = ReadStats::default();

        let termination = loop {
            if self.cancel.is_cancelled() {
                info!(
                    "Read cancelled after {} delivered, {} examined, {} skipped",
                    stats.delivered, stats.examined, stats.skipped
                );
                return Err(Error::Cancelled);
            }

            if stats.counted(window.basis) >= window.limit {
                break Termination::LimitReached;
            }

            if stats.skipped < window.skip {
                if !source.skip_entry().await? {
                    break Termination::Exhausted;
                }
                stats.skipped += 1;
                debug!("Skipped entry {}", stats.skipped);
                continue;
            }

            let Some(entry) = source.next_entry().await? else {
                break Termination::Exhausted;
            };
            stats.examined += 1;

            let Some(record) = mapper.map(entry).await? else {
                debug!("Entry {} produced no record", stats.skipped + stats.examined);
                continue;
            };

            let flow = handler(record)?;
            stats.delivered += 1;
            debug!("Delivered record {}", stats.delivered);
            if flow == Flow::Stop {
                break Termination::Stopped;
            }
        };

        info!(
            "Read finished ({}): {} delivered, {} examined, {} skipped",
            termination, stats.delivered, stats.examined, stats.skipped
        );

        Ok(ReadSummary { stats, termination })
    }
}
