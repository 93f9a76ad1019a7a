//! Signature set construction for one endorsed action.

use alloc::vec::Vec;

use crate::messages::{ChaincodeEndorsedAction, Endorsement, SignedData};

/// Reconstructs the exact bytes an endorser signed:
/// `proposal_response_payload || endorser`, no separator, payload first.
pub fn signed_bytes(proposal_response_payload: &[u8], endorser: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(proposal_response_payload.len() + endorser.len());
    data.extend_from_slice(proposal_response_payload);
    data.extend_from_slice(endorser);
    data
}

fn signed_data(proposal_response_payload: &[u8], endorsement: &Endorsement) -> SignedData {
    SignedData {
        data: signed_bytes(proposal_response_payload, &endorsement.endorser),
        identity: endorsement.endorser.clone(),
        signature: endorsement.signature.clone(),
    }
}

/// One entry per endorsement, in endorsement order. No endorsements gives an
/// empty set; rejecting it is the evaluator's job.
pub fn build_signature_set(action: &ChaincodeEndorsedAction) -> Vec<SignedData> {
    action
        .endorsements
        .iter()
        .map(|e| signed_data(&action.proposal_response_payload, e))
        .collect()
}
