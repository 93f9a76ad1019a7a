//! Wire records and the Borsh codec that moves them in and out of bytes.

pub mod common;
pub mod peer;

use alloc::string::ToString;
use alloc::vec::Vec;
use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::{DecodeLayer, ValidationError};

pub use common::{ChannelHeader, Envelope, Header, HeaderType, Payload, SignedData};
pub use peer::{
    ChaincodeActionPayload, ChaincodeEndorsedAction, ChaincodeHeaderExtension, ChaincodeId,
    ChaincodeInput, ChaincodeInvocationSpec, ChaincodeProposalPayload, ChaincodeSpec, Endorsement,
    Transaction, TransactionAction,
};

/// Decodes one record, attributing any failure to `layer`.
/// The record must consume `bytes` exactly; trailing data is a decode failure.
pub fn decode<T: BorshDeserialize>(bytes: &[u8], layer: DecodeLayer) -> Result<T, ValidationError> {
    borsh::from_slice::<T>(bytes).map_err(|e| ValidationError::decode(layer, e.to_string()))
}

/// Encodes one record. Writing into a `Vec` only fails on an encoder bug,
/// which is reported against `layer` like a decode failure.
pub fn encode<T: BorshSerialize>(value: &T, layer: DecodeLayer) -> Result<Vec<u8>, ValidationError> {
    borsh::to_vec(value).map_err(|e| ValidationError::decode(layer, e.to_string()))
}
