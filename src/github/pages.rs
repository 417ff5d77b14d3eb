// file: src/github/pages.rs
// description: paginated repository source abstraction and lazy enumeration
// reference: https://docs.rs/futures/latest/futures/stream/fn.try_unfold.html

use crate::error::{Result, SynthError};
use futures::stream::{self, Stream, TryStreamExt};
use serde::Deserialize;
use tracing::{debug, info};

pub const FIRST_PAGE: u32 = 1;

/// Repository descriptor as reported by the listing API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRepository {
    pub clone_url: String,
}

impl RawRepository {
    pub fn new(clone_url: impl Into<String>) -> Self {
        Self {
            clone_url: clone_url.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub repositories: Vec<RawRepository>,
    /// `None` or `Some(0)` marks the last page.
    pub next_page: Option<u32>,
}

/// One page of an organization's repository listing per call.
#[allow(async_fn_in_trait)]
pub trait RepositoryPages {
    async fn fetch_page(&self, page: u32) -> Result<Page>;
}

impl<T: RepositoryPages> RepositoryPages for &T {
    async fn fetch_page(&self, page: u32) -> Result<Page> {
        (**self).fetch_page(page).await
    }
}

/// Lazily drains every page of `source`, starting at page 1, yielding
/// repositories in API order. The first page error ends the stream.
pub fn enumerate<S: RepositoryPages>(
    source: &S,
) -> impl Stream<Item = Result<RawRepository>> + '_ {
    stream::try_unfold(Some(FIRST_PAGE), move |cursor| advance(source, cursor))
        .map_ok(|repositories| stream::iter(repositories.into_iter().map(Ok::<_, SynthError>)))
        .try_flatten()
}

async fn advance<S: RepositoryPages>(
    source: &S,
    cursor: Option<u32>,
) -> Result<Option<(Vec<RawRepository>, Option<u32>)>> {
    let Some(page_number) = cursor else {
        debug!("Repository listing exhausted");
        return Ok(None);
    };

    let page = source.fetch_page(page_number).await?;
    let next = page.next_page.filter(|n| *n != 0);

    info!(
        "Fetched page {} ({} repositories)",
        page_number,
        page.repositories.len()
    );

    Ok(Some((page.repositories, next)))
}
