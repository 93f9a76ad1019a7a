//! Peer-level records: transactions, endorsed actions and chaincode invocations.

use alloc::string::String;
use alloc::vec::Vec;
use borsh::{BorshDeserialize, BorshSerialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Transaction {
    pub actions: Vec<TransactionAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TransactionAction {
    /// Encoded signature header of the action; opaque to validation.
    pub header: Vec<u8>,
    /// Encoded `ChaincodeActionPayload`.
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeActionPayload {
    /// Encoded `ChaincodeProposalPayload`.
    pub chaincode_proposal_payload: Vec<u8>,
    pub action: ChaincodeEndorsedAction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeEndorsedAction {
    /// The bytes every endorser signed (before its identity is appended).
    pub proposal_response_payload: Vec<u8>,
    pub endorsements: Vec<Endorsement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Endorsement {
    /// Serialized identity of the endorser.
    pub endorser: Vec<u8>,
    pub signature: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeProposalPayload {
    /// Encoded `ChaincodeInvocationSpec`.
    pub input: Vec<u8>,
    pub transient_map: Vec<(String, Vec<u8>)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeInvocationSpec {
    pub chaincode_spec: Option<ChaincodeSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeSpec {
    pub chaincode_type: i32,
    pub chaincode_id: Option<ChaincodeId>,
    pub input: Option<ChaincodeInput>,
    pub timeout: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeInput {
    /// args[0] is the function name; the rest are its arguments.
    pub args: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeId {
    pub name: String,
    pub version: String,
    pub path: String,
}

impl ChaincodeId {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }
}

/// Decoded from `ChannelHeader::extension`; names the chaincode the transaction targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChaincodeHeaderExtension {
    pub chaincode_id: Option<ChaincodeId>,
}
