//! Reader types
//!
//! Window, handler verdict and read counters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Records delivered when no limit is given
pub const DEFAULT_LIMIT: usize = 20;

/// Which counter the window's limit bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitBasis {
    /// Records handed to the handler
    #[default]
    Delivered,
    /// Entries materialized and mapped, including those that produced no record
    Examined,
}

impl FromStr for LimitBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "delivered" => Ok(Self::Delivered),
            "examined" => Ok(Self::Examined),
            other => Err(format!(
                "unknown limit basis '{other}' (expected 'delivered' or 'examined')"
            )),
        }
    }
}

impl fmt::Display for LimitBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered => f.write_str("delivered"),
            Self::Examined => f.write_str("examined"),
        }
    }
}

/// Skip/limit window over a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Leading entries discarded unread
    pub skip: usize,
    /// Upper bound on the counter chosen by `basis`
    pub limit: usize,
    #[serde(default)]
    pub basis: LimitBasis,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT)
    }
}

impl PageWindow {
    /// Create a window bounding delivered records
    pub fn new(skip: usize, limit: usize) -> Self {
        Self {
            skip,
            limit,
            basis: LimitBasis::Delivered,
        }
    }

    /// Window covering the whole feed
    pub fn unbounded() -> Self {
        Self::new(0, usize::MAX)
    }

    /// Set the number of skipped entries
    #[must_use]
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Set the limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the limit basis
    #[must_use]
    pub fn with_basis(mut self, basis: LimitBasis) -> Self {
        self.basis = basis;
        self
    }
}

/// Handler verdict after each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading
    Continue,
    /// End the read now
    Stop,
}

impl From<bool> for Flow {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Self::Continue
        } else {
            Self::Stop
        }
    }
}

/// Counters of one read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Entries discarded by the window's skip
    pub skipped: usize,
    /// Entries materialized and mapped
    pub examined: usize,
    /// Records handed to the handler
    pub delivered: usize,
}

impl ReadStats {
    /// Value of the counter a limit bounds
    pub fn counted(&self, basis: LimitBasis) -> usize {
        match basis {
            LimitBasis::Delivered => self.delivered,
            LimitBasis::Examined => self.examined,
        }
    }

    /// Entries examined that produced no record
    pub fn unmapped(&self) -> usize {
        self.examined - self.delivered
    }
}

/// Why a read ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No entries left
    Exhausted,
    /// The window's limit was reached
    LimitReached,
    /// The handler returned [`Flow::Stop`]
    Stopped,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => f.write_str("exhausted"),
            Self::LimitReached => f.write_str("limit reached"),
            Self::Stopped => f.write_str("stopped by handler"),
        }
    }
}

/// Outcome of a completed read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadSummary {
    pub stats: ReadStats,
    pub termination: Termination,
}
