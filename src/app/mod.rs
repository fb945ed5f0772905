// LogLens - app/mod.rs
//
// Application layer: wires the line source, extractor, summary and filters
// together for front ends.
// Dependencies: core, platform.

pub mod analysis;
