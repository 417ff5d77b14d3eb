// file: src/exclusions.rs
// description: exclusion list loading from a line-oriented text file
// reference: internal file format, one repository name per line

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

const COMMENT_PREFIX: char = '#';

/// Canonical repository names left out of the generated config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the exclusion file. A missing path means no exclusions; an
    /// unreadable file is reported and treated the same way.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            debug!("No exclusion file given");
            return Self::new();
        };

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(
                    "Error reading exclusion file {}; skipping: {}",
                    path.display(),
                    e
                );
                return Self::new();
            }
        };

        let mut set = Self::new();
        // Split on raw bytes so a stray non-UTF-8 byte only affects its own line.
        for line in BufReader::new(file).split(b'\n') {
            match line {
                Ok(mut bytes) => {
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                    set.insert_line(String::from_utf8_lossy(&bytes).into_owned());
                }
                Err(e) => {
                    warn!(
                        "Stopped reading exclusion file {} early: {}",
                        path.display(),
                        e
                    );
                    break;
                }
            }
        }

        info!("Loaded {} exclusions from {}", set.len(), path.display());
        set
    }

    pub fn parse(content: &str) -> Self {
        let mut set = Self::new();
        for line in content.lines() {
            set.insert_line(line.to_string());
        }
        set
    }

    fn insert_line(&mut self, line: String) {
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return;
        }
        self.names.insert(line);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
