// file: src/github/mod.rs
// description: GitHub organization repository enumeration
// reference: internal module structure

pub mod client;
pub mod link;
pub mod pages;

pub use client::GitHubClient;
pub use pages::{FIRST_PAGE, Page, RawRepository, RepositoryPages, enumerate};
