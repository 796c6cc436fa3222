use std::env;

/// Runtime configuration, read once from the environment at startup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Personal access token presented as a bearer token.
    pub token: String,
    /// Team (workspace) name, forming the API base URL.
    pub team: String,
    /// Search query selecting the posts to delete, e.g. `wip:true`.
    pub query: String,
}

/// A required environment variable that was unset or empty.
///
/// Not a fault: the binary prints the message and exits cleanly without
/// touching the network.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MissingEnv {
    /// `ESA_TOKEN` was unset or empty.
    #[error("ESA_TOKEN is not set")]
    Token,
    /// `ESA_TEAM` was unset or empty.
    #[error("ESA_TEAM is not set")]
    Team,
    /// `ESA_SEARCH_QUERY` was unset or empty.
    #[error("ESA_SEARCH_QUERY is not set")]
    Query,
}

impl Config {
    /// Reads `ESA_TOKEN`, `ESA_TEAM`, and `ESA_SEARCH_QUERY` from the
    /// environment. An empty value counts as unset.
    pub fn from_env() -> Result<Config, MissingEnv> {
        Config::from_vars(
            env::var("ESA_TOKEN").ok(),
            env::var("ESA_TEAM").ok(),
            env::var("ESA_SEARCH_QUERY").ok(),
        )
    }

    fn from_vars(
        token: Option<String>,
        team: Option<String>,
        query: Option<String>,
    ) -> Result<Config, MissingEnv> {
        Ok(Config {
            token: require(token, MissingEnv::Token)?,
            team: require(team, MissingEnv::Team)?,
            query: require(query, MissingEnv::Query)?,
        })
    }
}

fn require(value: Option<String>, missing: MissingEnv) -> Result<String, MissingEnv> {
    value.filter(|value| !value.is_empty()).ok_or(missing)
}
