// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exclusions;
pub mod github;
pub mod pipeline;
pub mod repository;
pub mod synthesis;
pub mod utils;

pub use config::Settings;
pub use error::{Result, SynthError};
pub use exclusions::ExclusionSet;
pub use github::{GitHubClient, Page, RawRepository, RepositoryPages, enumerate};
pub use pipeline::PipelineOrchestrator;
pub use repository::{CloneUrl, Credentials, authenticated_url, canonical_name};
pub use synthesis::{Admission, ConfigBuilder, IndexerConfig, RepoEntry, synthesize};
