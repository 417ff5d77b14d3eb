// file: src/synthesis/mod.rs
// description: config synthesis module exports
// reference: internal module structure

pub mod builder;
pub mod document;

pub use builder::{Admission, ConfigBuilder, synthesize};
pub use document::{IndexerConfig, RepoEntry};
