//! Envelope assembly. Symmetric to `unpack`; used by tests and by hosts that
//! need well-formed transactions without a full proposal flow.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{DecodeLayer, ValidationError};
use crate::messages::{
    encode, ChaincodeActionPayload, ChaincodeEndorsedAction, ChaincodeHeaderExtension, ChaincodeId,
    ChaincodeInput, ChaincodeInvocationSpec, ChaincodeProposalPayload, ChaincodeSpec, ChannelHeader,
    Endorsement, Envelope, Header, HeaderType, Payload, Transaction, TransactionAction,
};
use crate::signature_set::signed_bytes;

#[derive(Debug, Clone)]
enum ProposalInput {
    Invocation(ChaincodeInvocationSpec),
    Raw(Vec<u8>),
}

/// One endorsed action of a transaction.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    proposal_response_payload: Vec<u8>,
    endorsements: Vec<Endorsement>,
    input: ProposalInput,
}

impl ActionBuilder {
    pub fn new(proposal_response_payload: impl Into<Vec<u8>>) -> Self {
        Self {
            proposal_response_payload: proposal_response_payload.into(),
            endorsements: Vec::new(),
            input: ProposalInput::Raw(Vec::new()),
        }
    }

    /// The exact bytes `endorser` has to sign for this action.
    pub fn signing_bytes(&self, endorser: &[u8]) -> Vec<u8> {
        signed_bytes(&self.proposal_response_payload, endorser)
    }

    pub fn endorsement(mut self, endorser: impl Into<Vec<u8>>, signature: impl Into<Vec<u8>>) -> Self {
        self.endorsements.push(Endorsement {
            endorser: endorser.into(),
            signature: signature.into(),
        });
        self
    }

    /// Sets the proposal input to an invocation of `chaincode` with `args`
    /// (function name first).
    pub fn invocation(mut self, chaincode: &str, args: &[&[u8]]) -> Self {
        self.input = ProposalInput::Invocation(ChaincodeInvocationSpec {
            chaincode_spec: Some(ChaincodeSpec {
                chaincode_id: Some(ChaincodeId::named(chaincode)),
                input: Some(ChaincodeInput { args: args.iter().map(|a| a.to_vec()).collect() }),
                ..Default::default()
            }),
        });
        self
    }

    /// Sets the proposal input to an arbitrary invocation spec, including
    /// ones with absent nested fields.
    pub fn invocation_spec(mut self, spec: ChaincodeInvocationSpec) -> Self {
        self.input = ProposalInput::Invocation(spec);
        self
    }

    /// Sets the encoded `ChaincodeInvocationSpec` bytes directly.
    pub fn raw_input(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.input = ProposalInput::Raw(input.into());
        self
    }

    pub fn to_payload(&self) -> Result<ChaincodeActionPayload, ValidationError> {
        let input = match &self.input {
            ProposalInput::Invocation(cis) => encode(cis, DecodeLayer::ChaincodeInvocationSpec)?,
            ProposalInput::Raw(bytes) => bytes.clone(),
        };
        let cpp = ChaincodeProposalPayload { input, transient_map: Vec::new() };
        Ok(ChaincodeActionPayload {
            chaincode_proposal_payload: encode(&cpp, DecodeLayer::ChaincodeProposalPayload)?,
            action: ChaincodeEndorsedAction {
                proposal_response_payload: self.proposal_response_payload.clone(),
                endorsements: self.endorsements.clone(),
            },
        })
    }

    pub fn to_action(&self) -> Result<TransactionAction, ValidationError> {
        Ok(TransactionAction {
            header: Vec::new(),
            payload: encode(&self.to_payload()?, DecodeLayer::ChaincodeActionPayload)?,
        })
    }
}

#[derive(Debug, Clone)]
enum ActionEntry {
    Built(ActionBuilder),
    Raw(TransactionAction),
}

/// A complete envelope: channel header, chaincode extension and actions.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    channel_id: String,
    tx_id: String,
    header_type: i32,
    chaincode: Option<String>,
    actions: Vec<ActionEntry>,
}

impl TransactionBuilder {
    pub fn new(channel_id: impl Into<String>, chaincode: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            tx_id: String::new(),
            header_type: HeaderType::EndorserTransaction.as_i32(),
            chaincode: Some(chaincode.into()),
            actions: Vec::new(),
        }
    }

    pub fn tx_id(mut self, tx_id: impl Into<String>) -> Self {
        self.tx_id = tx_id.into();
        self
    }

    /// Raw header type; any value, including unknown ones, is written as is.
    pub fn header_type(mut self, header_type: i32) -> Self {
        self.header_type = header_type;
        self
    }

    /// Leaves the chaincode id out of the header extension.
    pub fn without_chaincode_id(mut self) -> Self {
        self.chaincode = None;
        self
    }

    pub fn action(mut self, action: ActionBuilder) -> Self {
        self.actions.push(ActionEntry::Built(action));
        self
    }

    /// Appends an already encoded action, e.g. one with a malformed payload.
    pub fn raw_action(mut self, action: TransactionAction) -> Self {
        self.actions.push(ActionEntry::Raw(action));
        self
    }

    pub fn build(self) -> Result<Vec<u8>, ValidationError> {
        let ext = ChaincodeHeaderExtension { chaincode_id: self.chaincode.map(ChaincodeId::named) };
        let chdr = ChannelHeader {
            header_type: self.header_type,
            version: 0,
            channel_id: self.channel_id,
            tx_id: self.tx_id,
            epoch: 0,
            extension: encode(&ext, DecodeLayer::ChaincodeHeaderExtension)?,
        };

        let actions = self
            .actions
            .into_iter()
            .map(|entry| match entry {
                ActionEntry::Built(builder) => builder.to_action(),
                ActionEntry::Raw(action) => Ok(action),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let transaction = Transaction { actions };

        let payload = Payload {
            header: Header {
                channel_header: encode(&chdr, DecodeLayer::ChannelHeader)?,
                signature_header: Vec::new(),
            },
            data: encode(&transaction, DecodeLayer::Transaction)?,
        };
        let envelope = Envelope {
            payload: encode(&payload, DecodeLayer::Payload)?,
            signature: Vec::new(),
        };
        encode(&envelope, DecodeLayer::Envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use crate::unpack::unpack;
    use crate::messages::decode;

    #[test]
    fn built_envelope_unpacks_with_actions_in_order() {
        let bytes = TransactionBuilder::new("ch", "mycc")
            .tx_id("tx1")
            .action(ActionBuilder::new(vec![1u8]).endorsement(vec![0xAu8], vec![0xBu8]))
            .raw_action(TransactionAction { header: vec![], payload: vec![0xFF] })
            .action(ActionBuilder::new(vec![2u8]))
            .build()
            .unwrap();

        let unpacked = unpack(&bytes).unwrap();
        assert_eq!(unpacked.channel_header.channel_id, "ch");
        assert_eq!(unpacked.channel_header.tx_id, "tx1");
        let actions = &unpacked.transaction.actions;
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[1].payload, vec![0xFF]);

        let first: ChaincodeActionPayload =
            decode(&actions[0].payload, DecodeLayer::ChaincodeActionPayload).unwrap();
        assert_eq!(first.action.proposal_response_payload, vec![1]);
        assert_eq!(first.action.endorsements.len(), 1);
    }

    #[test]
    fn signing_bytes_match_signature_set_layout() {
        let action = ActionBuilder::new(b"resp".to_vec());
        assert_eq!(action.signing_bytes(b"peer0"), b"resppeer0".to_vec());
    }
}
