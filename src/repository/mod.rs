// file: src/repository/mod.rs
// description: repository identity module exports
// reference: internal module structure

pub mod clone_url;
pub mod credentials;

pub use clone_url::{CloneUrl, authenticated_url, canonical_name};
pub use credentials::Credentials;
