//! Sign-out hook for the external identity provider.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_out(&self) -> Result<()>;
}

/// Sign out, returning whether the caller should go back to the login screen.
/// A failed sign-out is logged and keeps the user where they are.
pub async fn logout(identity: &dyn IdentityProvider) -> bool {
    match identity.sign_out().await {
        Ok(()) => {
            tracing::info!("signed out");
            true
        }
        Err(e) => {
            tracing::error!("sign-out failed: {:#}", e);
            false
        }
    }
}
