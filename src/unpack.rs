//! Envelope unpacking: raw bytes to the layered record set of one transaction.

use crate::error::{DecodeLayer, ValidationError};
use crate::messages::{self, ChannelHeader, Envelope, HeaderType, Payload, Transaction};

/// The decoded layers of one endorser transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackedEnvelope {
    pub payload: Payload,
    pub channel_header: ChannelHeader,
    pub transaction: Transaction,
}

/// Decodes envelope → payload → channel header, checks the header type, then
/// decodes the transaction. Fails fast at the first layer that does not decode.
///
/// The header type is checked before `payload.data` is touched, so a
/// non-endorser envelope is reported as unsupported whatever its data holds.
pub fn unpack(envelope_bytes: &[u8]) -> Result<UnpackedEnvelope, ValidationError> {
    let envelope: Envelope = messages::decode(envelope_bytes, DecodeLayer::Envelope)?;
    let payload: Payload = messages::decode(&envelope.payload, DecodeLayer::Payload)?;
    let channel_header: ChannelHeader =
        messages::decode(&payload.header.channel_header, DecodeLayer::ChannelHeader)?;

    match channel_header.header_type()? {
        HeaderType::EndorserTransaction => {}
        _ => return Err(ValidationError::UnsupportedType(channel_header.header_type)),
    }

    let transaction: Transaction = messages::decode(&payload.data, DecodeLayer::Transaction)?;

    Ok(UnpackedEnvelope { payload, channel_header, transaction })
}
