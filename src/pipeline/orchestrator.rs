// file: src/pipeline/orchestrator.rs
// description: coordinates enumeration, exclusion filtering and config synthesis
// reference: drives one sequential run from page source to indexer config

use crate::config::Settings;
use crate::error::Result;
use crate::exclusions::ExclusionSet;
use crate::github::{RepositoryPages, enumerate};
use crate::repository::Credentials;
use crate::synthesis::{ConfigBuilder, IndexerConfig, synthesize};
use std::time::Instant;
use tracing::info;

pub struct PipelineOrchestrator<S> {
    settings: Settings,
    source: S,
    exclusions: ExclusionSet,
    credentials: Credentials,
}

impl<S: RepositoryPages> PipelineOrchestrator<S> {
    pub fn new(
        settings: Settings,
        source: S,
        exclusions: ExclusionSet,
        credentials: Credentials,
    ) -> Self {
        Self {
            settings,
            source,
            exclusions,
            credentials,
        }
    }

    /// Enumerates every page and synthesizes the config. Consumes the
    /// orchestrator; a fresh run re-issues all page requests.
    pub async fn run(self) -> Result<IndexerConfig> {
        let start_time = Instant::now();
        info!("Enumerating repositories ({} exclusions)", self.exclusions.len());

        let builder = ConfigBuilder::new(self.exclusions, self.credentials, &self.settings);
        let config = synthesize(enumerate(&self.source), builder).await?;

        info!("Enumeration complete in {:.2}s", start_time.elapsed().as_secs_f64());
        Ok(config)
    }
}
