//! Entity loaders, one per slice of the legacy document.
//!
//! Each loader maps its section into store mutations and reports how many
//! records it created plus any soft, per-record errors. Store failures
//! propagate as hard errors and abort the run.

pub mod articles;
pub mod authors;
pub mod config;
pub mod newsletters;
pub mod sections;
pub mod tags;
