//! Page markers emitted by the range calculator.
//!
//! A pagination strip is an ordered sequence of markers: concrete page
//! numbers interleaved with ellipsis placeholders standing for collapsed
//! runs of pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One slot of a pagination strip.
///
/// Serializes as `{"page": n}` for page numbers and as the sentinel string
/// `"dots"` for the ellipsis placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageMarker {
    /// A navigable page number (1-based).
    Page(usize),
    /// A collapsed run of pages, not itself navigable.
    Dots,
}

impl PageMarker {
    /// Check whether this marker is a concrete page number.
    pub fn is_page(&self) -> bool {
        matches!(self, PageMarker::Page(_))
    }

    /// Check whether this marker is an ellipsis placeholder.
    pub fn is_dots(&self) -> bool {
        matches!(self, PageMarker::Dots)
    }

    /// Get the page number, if any.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Dots => None,
        }
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Dots => write!(f, "..."),
        }
    }
}
