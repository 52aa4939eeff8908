//! Authentication module for the Medium integration token and the token owner.

use crate::error::Result;
use crate::http::{MediumHttpClient, MediumResponse};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Medium self-issued integration token.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct IntegrationToken(String);

impl IntegrationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    /// Returns the raw token for the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for IntegrationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IntegrationToken(***)")
    }
}

/// The account that owns the integration token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediumUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Resolves and caches the token owner, whose id is the author of created posts.
#[derive(Debug)]
pub struct UserResolver {
    http_client: Arc<MediumHttpClient>,
    user: OnceCell<MediumUser>,
}

impl UserResolver {
    /// Creates a new user resolver.
    pub fn new(http_client: Arc<MediumHttpClient>) -> Self {
        Self {
            http_client,
            user: OnceCell::new(),
        }
    }

    /// Gets the token owner, asking Medium on first use.
    pub async fn current_user(&self) -> Result<&MediumUser> {
        self.user.get_or_try_init(|| self.fetch_user()).await
    }

    /// Gets the author id for post creation.
    pub async fn author_id(&self) -> Result<String> {
        Ok(self.current_user().await?.id.clone())
    }

    /// Gets the cached user without calling the API.
    pub fn cached_user(&self) -> Option<&MediumUser> {
        self.user.get()
    }

    async fn fetch_user(&self) -> Result<MediumUser> {
        tracing::info!("Looking up Medium user for integration token");

        let response = self.http_client.get("/me").await?;
        let me: MediumResponse<MediumUser> = MediumHttpClient::read_json(response).await?;
        let user = me.into_result()?;

        tracing::info!(
            "Authenticated as {}",
            user.username.as_deref().unwrap_or(&user.id)
        );
        Ok(user)
    }
}
