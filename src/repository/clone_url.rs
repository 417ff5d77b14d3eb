// file: src/repository/clone_url.rs
// description: parsed clone urls with canonical name and credential derivation
// reference: https://docs.github.com/en/rest/repos/repos

use crate::error::{Result, SynthError};
use crate::repository::Credentials;
use std::fmt;
use std::str::FromStr;

const SCHEME_DELIMITER: &str = "://";
const GIT_SUFFIX: &str = ".git";

/// A clone URL of the shape `<scheme>://<host>/<org>/<name>.git`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneUrl {
    pub scheme: String,
    pub host: String,
    pub org: String,
    pub name: String,
}

impl CloneUrl {
    pub fn parse(raw: &str) -> Result<Self> {
        let (scheme, rest) = raw
            .split_once(SCHEME_DELIMITER)
            .ok_or_else(|| SynthError::malformed(raw, "missing scheme delimiter"))?;

        if scheme.is_empty() {
            return Err(SynthError::malformed(raw, "empty scheme"));
        }

        let mut segments = rest.split('/');
        let host = segments.next().unwrap_or_default();

        if host.is_empty() {
            return Err(SynthError::malformed(raw, "missing host"));
        }

        if host.contains('@') {
            return Err(SynthError::malformed(raw, "host already carries credentials"));
        }

        let path: Vec<&str> = segments.collect();
        let [org, repo] = path.as_slice() else {
            return Err(SynthError::malformed(
                raw,
                format!("expected <org>/<name>{} path", GIT_SUFFIX),
            ));
        };

        if org.is_empty() {
            return Err(SynthError::malformed(raw, "empty organization"));
        }

        let name = repo
            .strip_suffix(GIT_SUFFIX)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                SynthError::malformed(raw, format!("expected <name>{} as last segment", GIT_SUFFIX))
            })?;

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            org: org.to_string(),
            name: name.to_string(),
        })
    }

    pub fn canonical_name(&self) -> &str {
        &self.name
    }

    pub fn authenticated(&self, credentials: &Credentials) -> String {
        format!(
            "{}{}{}:{}@{}/{}/{}{}",
            self.scheme,
            SCHEME_DELIMITER,
            credentials.user,
            credentials.token,
            self.host,
            self.org,
            self.name,
            GIT_SUFFIX
        )
    }
}

impl FromStr for CloneUrl {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CloneUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}/{}/{}{}",
            self.scheme, SCHEME_DELIMITER, self.host, self.org, self.name, GIT_SUFFIX
        )
    }
}

pub fn canonical_name(url: &str) -> Result<String> {
    Ok(CloneUrl::parse(url)?.name)
}

pub fn authenticated_url(url: &str, credentials: &Credentials) -> Result<String> {
    Ok(CloneUrl::parse(url)?.authenticated(credentials))
}
