//! REST profile store client.
//!
//! Reads `level`, `xp` and `role` for one user from a PostgREST-style
//! endpoint (`{url}/rest/v1/users?id=eq.{id}&select=level,xp,role`). One
//! request per lookup, no retry, platform default timeouts.

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::{LevelLookup, ProfileSource, UserProfile};
use crate::config::ProfileStoreSettings;
use crate::error::LookupError;

const USERS_PATH: &str = "rest/v1/users";
const SELECTED_COLUMNS: &str = "level,xp,role";

struct Endpoint {
    users_url: Url,
    api_key: String,
}

/// Profile source backed by the REST data endpoint.
pub struct RestProfileSource {
    endpoint: Option<Endpoint>,
    http_client: Client,
}

impl RestProfileSource {
    /// Build a client from resolved settings.
    ///
    /// Missing credentials or an unparsable URL leave the source in degraded
    /// mode, where every lookup reports [`LookupError::MissingCredentials`].
    pub fn new(settings: &ProfileStoreSettings) -> Self {
        let endpoint = settings.credentials().and_then(|(url, api_key)| {
            match users_url(url) {
                Ok(users_url) => Some(Endpoint {
                    users_url,
                    api_key: api_key.to_string(),
                }),
                Err(e) => {
                    warn!(url, error = %e, "ignoring invalid profile store URL");
                    None
                }
            }
        });

        Self {
            endpoint,
            http_client: Client::new(),
        }
    }

    /// Whether lookups will actually hit the network.
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn try_fetch(&self, user_id: &str) -> Result<UserProfile, LookupError> {
        let endpoint = self
            .endpoint
            .as_ref()
            .ok_or(LookupError::MissingCredentials)?;

        let resp = self
            .http_client
            .get(endpoint.users_url.clone())
            .query(&[("id", format!("eq.{user_id}").as_str()), ("select", SELECTED_COLUMNS)])
            .header("apikey", &endpoint.api_key)
            .bearer_auth(&endpoint.api_key)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(LookupError::Status(resp.status().as_u16()));
        }

        let body = resp.text().await?;
        let rows: Vec<UserProfile> =
            serde_json::from_str(&body).map_err(|e| LookupError::Malformed(e.to_string()))?;

        rows.into_iter().next().ok_or(LookupError::NotFound)
    }
}

impl ProfileSource for RestProfileSource {
    async fn fetch_profile(&self, user_id: &str) -> LevelLookup {
        let lookup = LevelLookup::from(self.try_fetch(user_id).await);
        match &lookup {
            LevelLookup::Found(profile) => {
                debug!(user_id, level = ?profile.level, "profile lookup succeeded");
            }
            LevelLookup::Unavailable(LookupError::MissingCredentials) => {
                debug!(user_id, "profile store not configured; using default level");
            }
            LevelLookup::Unavailable(err) => {
                warn!(user_id, error = %err, "profile lookup failed; using default level");
            }
        }
        lookup
    }
}

fn users_url(base: &str) -> Result<Url, url::ParseError> {
    let base = Url::parse(&format!("{}/", base.trim_end_matches('/')))?;
    base.join(USERS_PATH)
}
