//! Top-level validation: one envelope, one policy, one verdict.

use alloc::string::String;
use alloc::sync::Arc;
use log::{debug, error};

use crate::error::{ArgumentError, DecodeLayer, ValidationError};
use crate::lifecycle;
use crate::messages::{self, ChaincodeActionPayload, ChaincodeHeaderExtension, ChannelHeader};
use crate::policy::{self, ChannelRegistry};
use crate::signature_set::build_signature_set;
use crate::unpack::unpack;

/// Validates endorser transactions against channel policies.
///
/// Holds only the read-only channel registry, so one instance can serve
/// concurrent calls for any number of channels.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<ChannelRegistry>,
}

impl Validator {
    pub fn new(registry: ChannelRegistry) -> Self {
        Self { registry: Arc::new(registry) }
    }

    /// Shares a registry that is already held elsewhere by the host.
    pub fn from_shared(registry: Arc<ChannelRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Accepts iff every action's endorsements satisfy the policy and every
    /// lifecycle action passes the lifecycle checks. Stops at the first failure.
    pub fn validate(&self, envelope_bytes: &[u8], policy_bytes: &[u8]) -> Result<(), ValidationError> {
        if envelope_bytes.is_empty() {
            return Err(ArgumentError::MissingEnvelope.into());
        }
        if policy_bytes.is_empty() {
            return Err(ArgumentError::MissingPolicy.into());
        }

        debug!("validation invoked ({} envelope bytes)", envelope_bytes.len());

        let unpacked = unpack(envelope_bytes).map_err(|e| {
            error!("envelope rejected: {}", e);
            e
        })?;
        let channel_header = &unpacked.channel_header;

        let policy = policy::compile(&self.registry, &channel_header.channel_id, policy_bytes)
            .map_err(|e| {
                error!("channel {:?}: {}", channel_header.channel_id, e);
                e
            })?;

        for (index, action) in unpacked.transaction.actions.iter().enumerate() {
            let cap: ChaincodeActionPayload =
                messages::decode(&action.payload, DecodeLayer::ChaincodeActionPayload).map_err(|e| {
                    error!("tx {} action {}: {}", channel_header.tx_id, index, e);
                    e
                })?;

            let signature_set = build_signature_set(&cap.action);
            policy::evaluate(policy.as_ref(), index, &signature_set).map_err(|e| {
                error!("tx {} action {}: {}", channel_header.tx_id, index, e);
                e
            })?;

            let target = target_chaincode(channel_header).map_err(|e| {
                error!("tx {} action {}: {}", channel_header.tx_id, index, e);
                e
            })?;
            if lifecycle::is_lifecycle_chaincode(&target) {
                lifecycle::guard(&cap)?;
            }
        }

        debug!(
            "tx {} valid ({} action(s))",
            channel_header.tx_id,
            unpacked.transaction.actions.len()
        );
        Ok(())
    }
}

/// Name of the chaincode the transaction targets, read from the channel
/// header extension. A missing chaincode id is a decode failure.
pub fn target_chaincode(channel_header: &ChannelHeader) -> Result<String, ValidationError> {
    let ext: ChaincodeHeaderExtension =
        messages::decode(&channel_header.extension, DecodeLayer::ChaincodeHeaderExtension)?;
    ext.chaincode_id
        .map(|id| id.name)
        .ok_or_else(|| ValidationError::decode(DecodeLayer::ChaincodeHeaderExtension, "missing chaincode id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use crate::error::ErrorKind;
    use crate::messages::{encode, ChaincodeId};

    #[test]
    fn empty_inputs_are_argument_errors() {
        let v = Validator::new(ChannelRegistry::new());
        assert_eq!(
            v.validate(&[], &[1]),
            Err(ValidationError::Argument(ArgumentError::MissingEnvelope))
        );
        assert_eq!(
            v.validate(&[1], &[]),
            Err(ValidationError::Argument(ArgumentError::MissingPolicy))
        );
    }

    #[test]
    fn unregistered_channel_is_rejected() {
        let tx = crate::builder::TransactionBuilder::new("nochannel", "mycc").build().unwrap();
        let err = Validator::new(ChannelRegistry::new()).validate(&tx, &[1]).unwrap_err();
        assert_eq!(err, ValidationError::UnknownChannel("nochannel".into()));
        assert_eq!(err.kind(), ErrorKind::PolicyCompile);
    }

    #[test]
    fn target_chaincode_reads_the_extension() {
        let ext = ChaincodeHeaderExtension { chaincode_id: Some(ChaincodeId::named("lscc")) };
        let chdr = ChannelHeader {
            extension: encode(&ext, DecodeLayer::ChaincodeHeaderExtension).unwrap(),
            ..Default::default()
        };
        assert_eq!(target_chaincode(&chdr).unwrap(), "lscc");
    }

    #[test]
    fn target_chaincode_fails_closed() {
        let ext = ChaincodeHeaderExtension { chaincode_id: None };
        let chdr = ChannelHeader {
            extension: encode(&ext, DecodeLayer::ChaincodeHeaderExtension).unwrap(),
            ..Default::default()
        };
        assert!(matches!(
            target_chaincode(&chdr),
            Err(ValidationError::Decode { layer: DecodeLayer::ChaincodeHeaderExtension, .. })
        ));

        let chdr = ChannelHeader { extension: vec![], ..Default::default() };
        assert_eq!(target_chaincode(&chdr).unwrap_err().kind(), ErrorKind::Decode);
    }
}
