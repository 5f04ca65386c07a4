//! What a share handler may touch on the host side.

use socialize_launch::{ActivityHost, LaunchTracker};
use socialize_types::AuthProviderType;
use std::sync::Arc;

/// Host-side account capability checks (linked accounts, installed SDKs).
pub trait AuthCapabilities: Send + Sync {
    fn is_supported(&self, provider: AuthProviderType) -> bool;
}

/// A fixed set of supported providers.
#[derive(Debug, Clone, Default)]
pub struct SupportedProviders(Vec<AuthProviderType>);

impl SupportedProviders {
    pub fn new(providers: impl IntoIterator<Item = AuthProviderType>) -> Self {
        Self(providers.into_iter().collect())
    }
}

impl AuthCapabilities for SupportedProviders {
    fn is_supported(&self, provider: AuthProviderType) -> bool {
        self.0.contains(&provider)
    }
}

/// The hosting screen a share was started from.
#[derive(Clone)]
pub struct ShareContext {
    launches: Arc<LaunchTracker>,
    auth: Arc<dyn AuthCapabilities>,
}

impl ShareContext {
    pub fn new(launches: Arc<LaunchTracker>, auth: Arc<dyn AuthCapabilities>) -> Self {
        Self { launches, auth }
    }

    pub fn host(&self) -> &dyn ActivityHost {
        self.launches.host().as_ref()
    }

    pub fn launches(&self) -> &LaunchTracker {
        &self.launches
    }

    pub fn auth(&self) -> &dyn AuthCapabilities {
        self.auth.as_ref()
    }
}

impl std::fmt::Debug for ShareContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareContext")
            .field("pending_launches", &self.launches.pending_count())
            .finish_non_exhaustive()
    }
}
