//! A reference k-of-n policy over BIP-340 Schnorr keys.
//! Identities are 32-byte x-only public keys; each signature must verify over
//! the signed data exactly as the validator built it.

use borsh::{BorshDeserialize, BorshSerialize};
use k256::schnorr::signature::{Signer, Verifier};
use k256::schnorr::{Signature, SigningKey, VerifyingKey};

use vscc::signature_set::signed_bytes;
use vscc::{Policy, PolicyError, PolicyProvider, SignedData};

#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct SchnorrPolicy {
    pub threshold: u8,
    pub signers: Vec<[u8; 32]>,
}

impl SchnorrPolicy {
    /// `threshold` of the keys derived from `seeds`.
    pub fn of(threshold: u8, seeds: &[u8]) -> Self {
        let signers = seeds
            .iter()
            .map(|s| endorser_identity(*s).try_into().expect("32-byte key"))
            .collect();
        Self { threshold, signers }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("encode policy")
    }
}

pub struct SchnorrProvider;

impl PolicyProvider for SchnorrProvider {
    fn new_policy(&self, policy_bytes: &[u8]) -> Result<Box<dyn Policy>, PolicyError> {
        let policy: SchnorrPolicy = borsh::from_slice(policy_bytes)
            .map_err(|e| PolicyError::new(format!("cannot decode policy: {}", e)))?;
        if policy.threshold == 0 {
            return Err(PolicyError::new("vacuous policy: threshold 0"));
        }
        Ok(Box::new(policy))
    }
}

impl Policy for SchnorrPolicy {
    fn evaluate(&self, signature_set: &[SignedData]) -> Result<(), PolicyError> {
        let mut satisfied: Vec<[u8; 32]> = Vec::new();
        for sd in signature_set {
            let Ok(key) = <[u8; 32]>::try_from(sd.identity.as_slice()) else {
                continue;
            };
            if !self.signers.contains(&key) || satisfied.contains(&key) {
                continue;
            }
            if verify(&key, &sd.data, &sd.signature) {
                satisfied.push(key);
            }
        }
        if satisfied.len() >= self.threshold as usize {
            Ok(())
        } else {
            Err(PolicyError::new(format!(
                "{} of {} required signatures",
                satisfied.len(),
                self.threshold
            )))
        }
    }
}

fn verify(key: &[u8; 32], msg: &[u8], sig: &[u8]) -> bool {
    let Ok(vk) = VerifyingKey::from_bytes(key) else {
        return false;
    };
    let Ok(sig) = Signature::try_from(sig) else {
        return false;
    };
    vk.verify(msg, &sig).is_ok()
}

fn signing_key(seed: u8) -> SigningKey {
    let key_bytes = [seed; 32];
    SigningKey::from_bytes((&key_bytes[..]).into()).expect("fixed test key is valid")
}

/// x-only public key for `seed`, used as the serialized endorser identity.
pub fn endorser_identity(seed: u8) -> Vec<u8> {
    let pk: [u8; 32] = signing_key(seed).verifying_key().to_bytes().into();
    pk.to_vec()
}

/// Endorses `proposal_response_payload` as `seed`: (identity, signature).
pub fn endorse(seed: u8, proposal_response_payload: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let identity = endorser_identity(seed);
    let msg = signed_bytes(proposal_response_payload, &identity);
    let sig: Signature = signing_key(seed).sign(&msg);
    (identity, sig.to_bytes().to_vec())
}
