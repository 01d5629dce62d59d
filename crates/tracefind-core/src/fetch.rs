//! Remote fetching of candidate files.

use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;
use url::Url;

use tracefind_domain::expand_url_template;

use crate::source::ByteSource;

const USER_AGENT: &str = concat!("tracefind/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure modes of a single remote fetch attempt.
///
/// None of these abort a resolution sweep; the orchestrator reports them
/// and moves on to the next candidate.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("composed url `{url}` is invalid: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("fetch of `{url}` failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Fetches remote candidates over HTTP.
///
/// The client is built on first use and reused for every later fetch.
/// It manages its own connection pool and is internally synchronized,
/// so a shared `UrlFetcher` may be called from multiple threads.
#[derive(Debug, Default)]
pub struct UrlFetcher {
    client: OnceCell<Client>,
}

impl UrlFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self) -> Result<&Client, FetchError> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .user_agent(USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build()
                .map_err(FetchError::Client)
        })
    }

    /// Fetches `name` through `url_template` with a single GET.
    ///
    /// `Ok(None)` covers everything that just means "keep looking": a
    /// 404, an empty body, and any other non-success status (those get
    /// their status line and header block logged first; a 404 is the
    /// routine miss on a legitimate search branch and stays silent).
    /// Transport-level failures surface as errors for the caller to
    /// report.
    pub fn fetch(&self, name: &str, url_template: &str) -> Result<Option<ByteSource>, FetchError> {
        let expanded = expand_url_template(url_template, name);
        let url = Url::parse(&expanded).map_err(|source| FetchError::InvalidUrl {
            url: expanded.clone(),
            source,
        })?;

        let response = self
            .client()?
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: expanded.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!(url = %expanded, "unexpected response:\n{}", header_block(&response));
            return Ok(None);
        }

        let body = response
            .bytes()
            .map_err(|source| FetchError::Transport {
                url: expanded.clone(),
                source,
            })?;
        if body.is_empty() {
            return Ok(None);
        }
        Ok(Some(ByteSource::from_bytes(expanded, body.to_vec())))
    }
}

fn header_block(response: &Response) -> String {
    use std::fmt::Write as _;

    let mut block = format!("{:?} {}", response.version(), response.status());
    for (key, value) in response.headers() {
        let _ = write!(block, "\n{key}: {}", String::from_utf8_lossy(value.as_bytes()));
    }
    block
}
