//! Policy seam: compiled policies, channel-scoped providers, and the registry
//! the host hands in.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;

use crate::error::{PolicyError, ValidationError};
use crate::messages::SignedData;

/// A compiled policy. Implementations own all signature and identity checks.
pub trait Policy {
    /// Accepts iff `signature_set` satisfies the policy. An empty set must not
    /// satisfy a non-trivial policy.
    fn evaluate(&self, signature_set: &[SignedData]) -> Result<(), PolicyError>;
}

/// Compiles policy bytes against one channel's membership.
pub trait PolicyProvider: Send + Sync {
    fn new_policy(&self, policy_bytes: &[u8]) -> Result<Box<dyn Policy>, PolicyError>;
}

/// Channel id → policy provider. Built by the host, read-only once handed to
/// a `Validator`.
#[derive(Clone, Default)]
pub struct ChannelRegistry {
    providers: BTreeMap<String, Arc<dyn PolicyProvider>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` for `channel_id`, replacing any previous one.
    pub fn insert(&mut self, channel_id: impl Into<String>, provider: Arc<dyn PolicyProvider>) {
        self.providers.insert(channel_id.into(), provider);
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>, provider: Arc<dyn PolicyProvider>) -> Self {
        self.insert(channel_id, provider);
        self
    }

    pub fn get(&self, channel_id: &str) -> Option<&Arc<dyn PolicyProvider>> {
        self.providers.get(channel_id)
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl core::fmt::Debug for ChannelRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.providers.keys()).finish()
    }
}

/// Compiles `policy_bytes` with the provider registered for `channel_id`.
pub fn compile(
    registry: &ChannelRegistry,
    channel_id: &str,
    policy_bytes: &[u8],
) -> Result<Box<dyn Policy>, ValidationError> {
    let provider = registry
        .get(channel_id)
        .ok_or_else(|| ValidationError::UnknownChannel(channel_id.into()))?;
    provider.new_policy(policy_bytes).map_err(ValidationError::PolicyCompile)
}

/// Evaluates the signature set of action `action` against `policy`.
pub fn evaluate(
    policy: &dyn Policy,
    action: usize,
    signature_set: &[SignedData],
) -> Result<(), ValidationError> {
    policy
        .evaluate(signature_set)
        .map_err(|reason| ValidationError::PolicyEvaluation { action, reason })
}
