use crate::{Error, PostId, SearchResult};
use reqwest::RequestBuilder;
use std::fmt::{self, Debug};
use std::time::Duration;

/// Pause inserted after every DELETE so a long sweep stays under the esa.io
/// rate limit.
const DELETE_PAUSE: Duration = Duration::from_secs(1);

macro_rules! request_impl {
    ($($f:ident),* $(,)*) => {
        $(
            #[inline]
            pub(crate) fn $f(&self, path: &str) -> RequestBuilder {
                tracing::info!(path, concat!("Client::", stringify!($f)));
                self.client
                    .$f(format!("{}{}", self.base_url, path))
                    .bearer_auth(&self.token)
            }
        )*
    };
}

/// HTTP client for one esa.io workspace.
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) token: String,
    pub(crate) client: reqwest::Client,
}

impl Client {
    /// Creates a new `Client` for the given team, with the base URL
    /// `https://api.esa.io/v1/teams/<team>/`. Use [`Client::with_base_url`] to
    /// change the base URL.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // tested to not panic
    pub fn new(team: &str, token: impl Into<String>) -> Client {
        const USER_AGENT: &str = concat!("esa-sweep/", env!("CARGO_PKG_VERSION"));

        Client {
            base_url: format!("https://api.esa.io/v1/teams/{}/", team),
            token: token.into(),
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap(),
        }
    }

    /// Creates a new `Client` with a custom base URL.
    #[must_use]
    pub fn with_base_url(mut self, mut base_url: String) -> Client {
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Searches the workspace for posts matching `query`.
    ///
    /// `query` is passed through verbatim as the `q` parameter, so the caller
    /// is responsible for supplying a URL-safe value. Only the first page of
    /// results is returned; [`SearchResult::total_count`] reports how many
    /// posts matched overall.
    #[tracing::instrument(skip(self))]
    pub async fn search_posts(&self, query: &str) -> Result<SearchResult, Error> {
        let body = self
            .get(&format!("posts?q={}", query))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let results: SearchResult = serde_json::from_str(&body)?;
        tracing::debug!(
            returned = results.posts.len(),
            total_count = results.total_count,
        );
        Ok(results)
    }

    /// Deletes a single post.
    #[tracing::instrument(skip(self))]
    pub async fn delete_post(&self, id: PostId) -> Result<(), Error> {
        self.delete(&format!("posts/{}", id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Deletes posts one at a time, in the order given, pausing for one second
    /// after each request.
    ///
    /// Stops at the first failure; posts deleted before the failing request
    /// stay deleted.
    #[tracing::instrument(skip_all, fields(count = ids.len()))]
    pub async fn delete_posts(&self, ids: &[PostId]) -> Result<(), Error> {
        for &id in ids {
            self.delete_post(id).await?;
            tokio::time::sleep(DELETE_PAUSE).await;
        }
        Ok(())
    }

    request_impl!(delete, get);
}

impl Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
