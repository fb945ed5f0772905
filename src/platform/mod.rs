// LogLens - platform/mod.rs
//
// Platform abstraction layer: filesystem reads and config resolution.
// Dependencies: standard library, directories crate.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
