//! A policy provider that records every evaluation it is asked to perform.

use std::sync::{Arc, Mutex};

use vscc::{Policy, PolicyError, PolicyProvider, SignedData};

/// Policy bytes that the counting provider refuses to compile.
pub const UNCOMPILABLE: &[u8] = b"uncompilable";

/// Signature sets seen by the provider's policies, in call order.
#[derive(Clone, Default)]
pub struct EvaluationLog(Arc<Mutex<Vec<Vec<SignedData>>>>);

impl EvaluationLog {
    pub fn calls(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn sets(&self) -> Vec<Vec<SignedData>> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, set: &[SignedData]) {
        self.0.lock().unwrap().push(set.to_vec());
    }
}

/// Compiles policy bytes into "some endorser identity equals these bytes".
pub struct CountingProvider {
    log: EvaluationLog,
}

impl CountingProvider {
    pub fn new(log: EvaluationLog) -> Self {
        Self { log }
    }
}

struct RequiredEndorser {
    required: Vec<u8>,
    log: EvaluationLog,
}

impl Policy for RequiredEndorser {
    fn evaluate(&self, signature_set: &[SignedData]) -> Result<(), PolicyError> {
        self.log.record(signature_set);
        if signature_set.iter().any(|sd| sd.identity == self.required) {
            Ok(())
        } else {
            Err(PolicyError::new(format!(
                "no endorsement from {:?} among {} signature(s)",
                String::from_utf8_lossy(&self.required),
                signature_set.len()
            )))
        }
    }
}

impl PolicyProvider for CountingProvider {
    fn new_policy(&self, policy_bytes: &[u8]) -> Result<Box<dyn Policy>, PolicyError> {
        if policy_bytes == UNCOMPILABLE {
            return Err(PolicyError::new("malformed policy"));
        }
        Ok(Box::new(RequiredEndorser {
            required: policy_bytes.to_vec(),
            log: self.log.clone(),
        }))
    }
}
