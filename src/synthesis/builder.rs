// file: src/synthesis/builder.rs
// description: folds enumerated repositories into an indexer config
// reference: builder pattern over an owned accumulator

use crate::config::Settings;
use crate::error::Result;
use crate::exclusions::ExclusionSet;
use crate::github::RawRepository;
use crate::repository::{CloneUrl, Credentials};
use crate::synthesis::document::{IndexerConfig, RepoEntry};
use futures::{Stream, TryStreamExt};
use std::collections::BTreeMap;
use std::pin::pin;
use tracing::{debug, info};

/// What happened to a repository offered to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Added,
    /// An entry with the same canonical name existed and was overwritten.
    Replaced,
    Excluded,
}

#[derive(Debug)]
pub struct ConfigBuilder {
    exclusions: ExclusionSet,
    credentials: Credentials,
    branch: String,
    db_path: String,
    max_concurrent_indexers: u32,
    repos: BTreeMap<String, RepoEntry>,
}

impl ConfigBuilder {
    pub fn new(exclusions: ExclusionSet, credentials: Credentials, settings: &Settings) -> Self {
        Self {
            exclusions,
            credentials,
            branch: settings.branch.clone(),
            db_path: settings.db_path.clone(),
            max_concurrent_indexers: settings.max_concurrent_indexers,
            repos: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, repository: &RawRepository) -> Result<Admission> {
        let url = CloneUrl::parse(&repository.clone_url)?;
        let name = url.canonical_name();

        if self.exclusions.contains(name) {
            debug!("Excluding {}", name);
            return Ok(Admission::Excluded);
        }

        let entry = RepoEntry {
            url: url.authenticated(&self.credentials),
            branch: self.branch.clone(),
        };

        match self.repos.insert(name.to_string(), entry) {
            Some(_) => {
                debug!("Replacing earlier entry for {}", name);
                Ok(Admission::Replaced)
            }
            None => {
                debug!("Adding {}", name);
                Ok(Admission::Added)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn build(self) -> IndexerConfig {
        IndexerConfig {
            db_path: self.db_path,
            repos: self.repos,
            max_concurrent_indexers: self.max_concurrent_indexers,
        }
    }
}

/// Drains `repositories` into `builder`. Any stream or URL error aborts.
pub async fn synthesize<S>(repositories: S, mut builder: ConfigBuilder) -> Result<IndexerConfig>
where
    S: Stream<Item = Result<RawRepository>>,
{
    let mut repositories = pin!(repositories);
    let mut seen = 0usize;
    let mut excluded = 0usize;

    while let Some(repository) = repositories.try_next().await? {
        seen += 1;
        if builder.add(&repository)? == Admission::Excluded {
            excluded += 1;
        }
    }

    info!(
        "Synthesized {} repositories ({} seen, {} excluded)",
        builder.len(),
        seen,
        excluded
    );

    Ok(builder.build())
}
