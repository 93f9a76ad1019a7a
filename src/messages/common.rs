//! Channel-level records: the signed envelope and the headers that route it.

use alloc::string::String;
use alloc::vec::Vec;
use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::ValidationError;

/// Top-level signed wrapper. Its own signature is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Envelope {
    /// Encoded `Payload`.
    pub payload: Vec<u8>,
    pub signature: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Payload {
    pub header: Header,
    /// Encoded `Transaction` when the channel header says ENDORSER_TRANSACTION.
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct Header {
    /// Encoded `ChannelHeader`.
    pub channel_header: Vec<u8>,
    /// Encoded signature header of the creator; opaque to validation.
    pub signature_header: Vec<u8>,
}

/// Field order matches the Borsh wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ChannelHeader {
    /// Raw `HeaderType` value. Kept raw so unknown types still decode and can be reported.
    pub header_type: i32,
    pub version: i32,
    pub channel_id: String,
    pub tx_id: String,
    pub epoch: u64,
    /// Encoded `ChaincodeHeaderExtension` for endorser transactions.
    pub extension: Vec<u8>,
}

impl ChannelHeader {
    pub fn header_type(&self) -> Result<HeaderType, ValidationError> {
        HeaderType::try_from(self.header_type)
    }
}

/// Header type. Wire format is i32; internal logic uses this enum for exhaustive matching.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderType {
    Message = 0,
    Config = 1,
    ConfigUpdate = 2,
    EndorserTransaction = 3,
    OrdererTransaction = 4,
    DeliverSeekInfo = 5,
    ChaincodePackage = 6,
}

impl HeaderType {
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl core::convert::TryFrom<i32> for HeaderType {
    type Error = ValidationError;
    fn try_from(value: i32) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(HeaderType::Message),
            1 => Ok(HeaderType::Config),
            2 => Ok(HeaderType::ConfigUpdate),
            3 => Ok(HeaderType::EndorserTransaction),
            4 => Ok(HeaderType::OrdererTransaction),
            5 => Ok(HeaderType::DeliverSeekInfo),
            6 => Ok(HeaderType::ChaincodePackage),
            other => Err(ValidationError::UnsupportedType(other)),
        }
    }
}

/// One (data, identity, signature) tuple handed to the policy evaluator.
///
/// For endorsements `data` is the proposal response payload followed by the
/// endorser identity, with no separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedData {
    pub data: Vec<u8>,
    pub identity: Vec<u8>,
    pub signature: Vec<u8>,
}
