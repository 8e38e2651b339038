// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,search,...}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod search;  // src/gui/actions/search.rs

pub use copy::copy;
pub use export::export;
pub use search::{clear_selection, link, reset, search};
