//! libpaginate-core
//!
//! Pagination engine for windowed list views: computes the marker strip
//! (page numbers and collapsed-run ellipses) for a page count and active
//! page, tracks navigation state with a change callback, and carries the
//! item-window arithmetic listings use to size their pages.
//!
//! Public API:
//! - `PageMarker` - One slot of a pagination strip (page number or ellipsis)
//! - `page_range` - Pure computation of the marker strip
//! - `Pager` - Navigation state with clamped jumps and a change callback
//! - `total_pages` / `page_window` / `clamp_page` - Item-window math
//! - `PaginationConfig` - Strip shape configuration with TOML load/save

use serde::{Deserialize, Serialize};

pub mod marker;
pub use marker::PageMarker;

pub mod range;
pub use range::page_range;

pub mod pager;
pub use pager::{PageChangeFn, Pager};

pub mod window;
pub use window::{clamp_page, page_window, total_pages, DEFAULT_PER_PAGE};

/// Shape configuration for a pagination strip.
///
/// Immutable for the lifetime of one `Pager`; create a new pager to
/// reshape a strip.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Page numbers shown on each side of the active page
    pub siblings: usize,

    /// Page numbers pinned at each end of the strip
    pub boundaries: usize,

    /// Page selected before the first navigation
    pub initial_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            siblings: 1,
            boundaries: 1,
            initial_page: 1,
        }
    }
}

impl PaginationConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(&path)?;
        let config: PaginationConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded pagination config");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
