//! Shared test fixtures: policy providers and endorsement signing helpers.

#![allow(dead_code)]

mod counting;
mod schnorr;

pub use counting::{CountingProvider, EvaluationLog, UNCOMPILABLE};
pub use schnorr::{endorse, endorser_identity, SchnorrPolicy, SchnorrProvider};

use std::sync::Arc;

use vscc::{ChannelRegistry, Validator};

pub const CHANNEL: &str = "testchannel";

/// A validator whose only channel uses the counting provider.
pub fn counting_validator() -> (Validator, EvaluationLog) {
    let log = EvaluationLog::default();
    let registry = ChannelRegistry::new()
        .with_channel(CHANNEL, Arc::new(CountingProvider::new(log.clone())));
    (Validator::new(registry), log)
}

/// A validator whose only channel verifies BIP-340 signatures.
pub fn schnorr_validator() -> Validator {
    Validator::new(ChannelRegistry::new().with_channel(CHANNEL, Arc::new(SchnorrProvider)))
}
