// LogLens - core/mod.rs
//
// Core extraction and query logic.
// Must NOT depend on: platform, app.
// Only export's `*_to_path` helpers open files; everything else works on
// in-memory slices, iterators and `Write` targets.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod summary;
