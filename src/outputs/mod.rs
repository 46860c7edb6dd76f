//! Output generation modules for the text front page and the JSON digest.
//!
//! # Submodules
//!
//! - [`text`]: Renders the accumulated articles as a text front page
//! - [`json`]: Writes a [`crate::models::HeadlineDigest`] to a JSON file
//!
//! # Output Structure
//!
//! ```text
//! stdout                     # text front page
//!
//! json_output_dir/
//! └── 2026-08-07/
//!     └── us.json            # digest for one country, one run per file
//! ```

pub mod json;
pub mod text;
