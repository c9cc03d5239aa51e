//! Album catalog: the static set of albums the player can open.
//!
//! Albums come from a TOML catalog file, from a scanned directory of audio
//! files, or from the small built-in catalog when neither is available.

mod builtin;
mod load;
mod model;
mod scan;

pub use builtin::builtin_catalog;
pub use model::*;
pub use scan::scan_album;
