// file: src/synthesis/document.rs
// description: indexer config document model and its json rendering
// reference: https://docs.rs/serde_json/latest/serde_json/ser/struct.PrettyFormatter.html

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::io::Write;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    pub url: String,
    pub branch: String,
}

/// The indexer configuration. Field order is the rendered key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    #[serde(rename = "dbpath")]
    pub db_path: String,
    pub repos: BTreeMap<String, RepoEntry>,
    #[serde(rename = "max-concurrent-indexers")]
    pub max_concurrent_indexers: u32,
}

impl IndexerConfig {
    pub fn render(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut serializer)?;
        out.push(b'\n');
        Ok(out)
    }

    /// Renders the whole document before writing, so nothing is written on failure.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let rendered = self.render()?;
        writer.write_all(&rendered)?;
        writer.flush()?;
        Ok(())
    }
}
