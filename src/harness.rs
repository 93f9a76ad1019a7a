//! Invocation entry points: `init` and `invoke` over a raw argument list.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::{ArgumentError, ValidationError};
use crate::validator::Validator;

/// Minimum argument count: function selector, envelope, policy.
pub const MIN_INVOKE_ARGS: usize = 3;
pub const ARG_ENVELOPE: usize = 1;
pub const ARG_POLICY: usize = 2;

/// Binary outcome reported back to the host. Success carries no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success,
    Error(String),
}

impl Response {
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success => None,
            Response::Error(msg) => Some(msg.as_str()),
        }
    }
}

impl From<Result<(), ValidationError>> for Response {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Response::Success,
            Err(e) => Response::Error(e.to_string()),
        }
    }
}

/// Picks the envelope and policy out of `args`. args[0] (the function
/// selector) is ignored; empty entries count as absent.
pub fn split_args(args: &[Vec<u8>]) -> Result<(&[u8], &[u8]), ArgumentError> {
    if args.len() < MIN_INVOKE_ARGS {
        return Err(ArgumentError::TooFewArguments(args.len()));
    }
    let envelope = args[ARG_ENVELOPE].as_slice();
    if envelope.is_empty() {
        return Err(ArgumentError::MissingEnvelope);
    }
    let policy = args[ARG_POLICY].as_slice();
    if policy.is_empty() {
        return Err(ArgumentError::MissingPolicy);
    }
    Ok((envelope, policy))
}

impl Validator {
    /// Nothing to set up; validation holds no state of its own.
    pub fn init(&self) -> Response {
        Response::Success
    }

    pub fn invoke(&self, args: &[Vec<u8>]) -> Response {
        let result = split_args(args)
            .map_err(ValidationError::from)
            .and_then(|(envelope, policy)| self.validate(envelope, policy));
        Response::from(result)
    }
}
