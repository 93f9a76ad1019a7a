//! Extra structural checks for actions that invoke the lifecycle chaincode.
//!
//! The allow-list is closed: a function name maps to `Deploy`, `Upgrade`, or
//! `Unsupported`, and only the first two pass.

use alloc::string::String;
use alloc::vec::Vec;
use log::{error, info};

use crate::error::{DecodeLayer, LifecycleError, ValidationError};
use crate::messages::{
    self, ChaincodeActionPayload, ChaincodeInvocationSpec, ChaincodeProposalPayload,
};

/// Name of the lifecycle-management system chaincode.
pub const LIFECYCLE_CHAINCODE: &str = "lscc";

pub const DEPLOY: &str = "deploy";
pub const UPGRADE: &str = "upgrade";

/// A lifecycle function name after the single mapping step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleFunction {
    Deploy,
    Upgrade,
    Unsupported(String),
}

impl LifecycleFunction {
    /// Case-sensitive exact match against the allow-list.
    pub fn from_name(name: &[u8]) -> Self {
        match name {
            n if n == DEPLOY.as_bytes() => Self::Deploy,
            n if n == UPGRADE.as_bytes() => Self::Upgrade,
            other => Self::Unsupported(String::from_utf8_lossy(other).into_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Deploy => DEPLOY,
            Self::Upgrade => UPGRADE,
            Self::Unsupported(name) => name.as_str(),
        }
    }
}

pub fn is_lifecycle_chaincode(name: &str) -> bool {
    name == LIFECYCLE_CHAINCODE
}

/// A lifecycle invocation that passed the structural checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleInvocation {
    pub function: LifecycleFunction,
    /// Arguments after the function name; opaque here.
    pub args: Vec<Vec<u8>>,
}

/// Decodes the proposal payload of `action` down to the function name and
/// arguments. Absent nested specs and an empty argument list are rejected.
pub fn parse_invocation(action: &ChaincodeActionPayload) -> Result<LifecycleInvocation, ValidationError> {
    let cpp: ChaincodeProposalPayload = messages::decode(
        &action.chaincode_proposal_payload,
        DecodeLayer::ChaincodeProposalPayload,
    )?;

    if cpp.input.is_empty() {
        return Err(LifecycleError::MissingInvocationSpec.into());
    }
    let cis: ChaincodeInvocationSpec =
        messages::decode(&cpp.input, DecodeLayer::ChaincodeInvocationSpec)?;

    let spec = cis.chaincode_spec.ok_or(LifecycleError::MissingChaincodeSpec)?;
    let input = spec.input.ok_or(LifecycleError::MissingInput)?;

    let mut args = input.args.into_iter();
    let name = args.next().ok_or(LifecycleError::EmptyArguments)?;

    Ok(LifecycleInvocation {
        function: LifecycleFunction::from_name(&name),
        args: args.collect(),
    })
}

/// Runs the lifecycle checks on one action. Deploy and upgrade are accepted at
/// this layer; instantiation-policy compliance and read/write-set shape are
/// not checked here.
pub fn guard(action: &ChaincodeActionPayload) -> Result<(), ValidationError> {
    let invocation = parse_invocation(action).map_err(|e| {
        error!("lifecycle invocation rejected: {}", e);
        e
    })?;

    match invocation.function {
        LifecycleFunction::Deploy | LifecycleFunction::Upgrade => {
            info!(
                "validating invocation of lifecycle function {} with {} argument(s)",
                invocation.function.as_str(),
                invocation.args.len()
            );
            // TODO: enforce the deployed chaincode's instantiation policy and
            // the shape of the lifecycle read/write set once both are exposed to validation.
            Ok(())
        }
        LifecycleFunction::Unsupported(name) => {
            error!("invocation of lifecycle function {:?} is not allowed", name);
            Err(LifecycleError::UnsupportedFunction(name).into())
        }
    }
}
