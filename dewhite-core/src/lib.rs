//! # dewhite-core
//!
//! Turns near-white backgrounds in PNG images transparent, one file or a
//! whole directory at a time.
//!
//! ## Example
//!
//! ```no_run
//! use dewhite_core::process_dir;
//!
//! let mut stdout = std::io::stdout();
//! let report = process_dir("assets", &mut stdout).unwrap();
//! println!("{} ok, {} failed", report.processed, report.failed);
//! ```

pub mod batch;
pub mod filter;

pub use batch::{process_dir, process_file, BatchReport, FileOutcome};
pub use filter::{
    clear_white, is_white, remove_white_background, FilterError, TRANSPARENT_WHITE,
    WHITE_THRESHOLD,
};
