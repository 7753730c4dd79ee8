//! Local stand-in for the identity provider.

use anyhow::Result;
use async_trait::async_trait;
use rota_sdk::IdentityProvider;

/// Identity known only from the environment; signing out just forgets it.
#[derive(Debug, Default)]
pub struct LocalIdentity {
    user: Option<String>,
}

impl LocalIdentity {
    pub fn from_env() -> Self {
        Self {
            user: std::env::var("ROTA_USER").ok().filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    async fn sign_out(&self) -> Result<()> {
        tracing::debug!(user = ?self.user, "forgetting local identity");
        Ok(())
    }
}
