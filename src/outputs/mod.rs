//! Output generation for processed feeds.
//!
//! # Submodules
//!
//! - [`json`]: writes the whole [`Feed`](crate::feed::Feed) to a dated JSON file
//! - [`markdown`]: renders one page of the feed as Markdown for the terminal
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── feed.json
//! ```

pub mod json;
pub mod markdown;
