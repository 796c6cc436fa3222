use chrono::{DateTime, Utc};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A post number, unique within a team.
#[allow(clippy::module_name_repetitions)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct PostId(pub u64);

/// One page of results from the posts-search endpoint.
///
/// Every field defaults when absent, so partial bodies decode without error.
/// Only the post numbers drive any behavior here; the pagination metadata is
/// decoded for completeness but sweeping never follows `next_page`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResult {
    /// Posts matching the query, in API order (search relevance).
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Previous page number, if any.
    #[serde(default)]
    pub prev_page: Option<u64>,
    /// Next page number, if any.
    #[serde(default)]
    pub next_page: Option<u64>,
    /// Total number of matching posts across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// The page this result represents.
    #[serde(default)]
    pub page: u64,
    /// Number of posts per page.
    #[serde(default)]
    pub per_page: u64,
    /// Largest page size the API allows.
    #[serde(default)]
    pub max_per_page: u64,
}

impl SearchResult {
    /// Returns the numbers of the matched posts, preserving API order.
    #[must_use]
    pub fn post_ids(&self) -> Vec<PostId> {
        self.posts.iter().map(|post| post.number).collect()
    }
}

/// A post as returned by the esa.io API.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Post {
    /// The post number; the only field deletion cares about.
    pub number: PostId,
    /// Post title, without its category path.
    #[serde(default)]
    pub name: String,
    /// Full title, including category path and tags.
    #[serde(default)]
    pub full_name: String,
    /// Whether the post is marked work-in-progress.
    #[serde(default)]
    pub wip: bool,
    /// Markdown body.
    #[serde(default)]
    pub body_md: String,
    /// Rendered HTML body.
    #[serde(default)]
    pub body_html: String,
    /// When the post was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the post was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Commit message of the latest revision.
    #[serde(default)]
    pub message: String,
    /// Post kind (`stock` or `flow`).
    #[serde(default)]
    pub kind: String,
    /// Number of comments.
    #[serde(default)]
    pub comments_count: u64,
    /// Number of tasks in the body.
    #[serde(default)]
    pub tasks_count: u64,
    /// Number of completed tasks.
    #[serde(default)]
    pub done_tasks_count: u64,
    /// Browser URL of the post.
    #[serde(default)]
    pub url: String,
    /// Tags, kept as raw JSON since nothing here depends on their shape.
    #[serde(default)]
    pub tags: Vec<Value>,
    /// Category path, if the post is filed under one.
    #[serde(default)]
    pub category: Option<String>,
    /// Latest revision number.
    #[serde(default)]
    pub revision_number: u64,
    /// Who created the post.
    #[serde(default)]
    pub created_by: Author,
    /// Who last updated the post.
    #[serde(default)]
    pub updated_by: Author,
    /// Number of stars.
    #[serde(default)]
    pub stargazers_count: u64,
    /// Number of watchers.
    #[serde(default)]
    pub watchers_count: u64,
    /// Whether the authenticated user starred the post.
    #[serde(default)]
    pub star: bool,
    /// Whether the authenticated user watches the post.
    #[serde(default)]
    pub watch: bool,
    /// External sharing URLs, kept as raw JSON.
    #[serde(default)]
    pub sharing_urls: Option<Value>,
}

/// A team member referenced by a post.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Author {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Screen name (login).
    #[serde(default)]
    pub screen_name: String,
    /// Avatar URL.
    #[serde(default)]
    pub icon: String,
}
