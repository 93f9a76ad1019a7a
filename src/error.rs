// src/error.rs

use alloc::string::String;

/// Identifies which record of the nested transaction structure failed to decode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeLayer {
    Envelope,
    Payload,
    ChannelHeader,
    Transaction,
    ChaincodeActionPayload,
    ChaincodeHeaderExtension,
    ChaincodeProposalPayload,
    ChaincodeInvocationSpec,
}

impl DecodeLayer {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Envelope => "Envelope",
            Self::Payload => "Payload",
            Self::ChannelHeader => "ChannelHeader",
            Self::Transaction => "Transaction",
            Self::ChaincodeActionPayload => "ChaincodeActionPayload",
            Self::ChaincodeHeaderExtension => "ChaincodeHeaderExtension",
            Self::ChaincodeProposalPayload => "ChaincodeProposalPayload",
            Self::ChaincodeInvocationSpec => "ChaincodeInvocationSpec",
        }
    }
}

impl core::fmt::Display for DecodeLayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problems with the invocation argument list itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// Fewer than three arguments were supplied (count supplied).
    TooFewArguments(usize),

    /// The serialized envelope was absent or empty.
    MissingEnvelope,

    /// The serialized policy was absent or empty.
    MissingPolicy,
}

impl core::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewArguments(n) => {
                write!(f, "Incorrect number of arguments: got {}, expected at least 3", n)
            }
            Self::MissingEnvelope => write!(f, "No block to validate"),
            Self::MissingPolicy => write!(f, "No policy supplied"),
        }
    }
}

/// Error reported by a policy provider or a compiled policy.
/// The evaluator owns the message; this crate only carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyError(pub String);

impl PolicyError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

impl core::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structural problems with an invocation of the lifecycle chaincode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// The proposal input decoded to nothing usable.
    MissingInvocationSpec,

    /// The invocation spec carries no chaincode spec.
    MissingChaincodeSpec,

    /// The chaincode spec carries no input.
    MissingInput,

    /// The input carries no arguments, so there is no function name.
    EmptyArguments,

    /// The function name is not on the lifecycle allow-list.
    UnsupportedFunction(String),
}

impl core::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingInvocationSpec => {
                write!(f, "committing invalid lifecycle invocation: no invocation spec")
            }
            Self::MissingChaincodeSpec => {
                write!(f, "committing invalid lifecycle invocation: no chaincode spec")
            }
            Self::MissingInput => {
                write!(f, "committing invalid lifecycle invocation: no chaincode input")
            }
            Self::EmptyArguments => {
                write!(f, "committing invalid lifecycle invocation: no arguments")
            }
            Self::UnsupportedFunction(name) => write!(
                f,
                "committing an invocation of function {:?} of the lifecycle chaincode is invalid",
                name
            ),
        }
    }
}

/// Coarse classification of a rejection, stable across identical inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "export-json", derive(serde::Serialize))]
pub enum ErrorKind {
    Argument,
    Decode,
    UnsupportedType,
    PolicyCompile,
    PolicyEvaluation,
    LifecycleInvocation,
}

/// Every way a validation call can reject a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The invocation arguments were missing or incomplete.
    Argument(ArgumentError),

    /// A record at `layer` could not be decoded.
    Decode { layer: DecodeLayer, reason: String },

    /// The channel header type is not an endorser transaction (raw wire value).
    UnsupportedType(i32),

    /// No policy provider is registered for the channel.
    UnknownChannel(String),

    /// The supplied policy bytes could not be compiled.
    PolicyCompile(PolicyError),

    /// The signature set of action `action` does not satisfy the policy.
    PolicyEvaluation { action: usize, reason: PolicyError },

    /// A lifecycle chaincode invocation failed its structural checks.
    LifecycleInvocation(LifecycleError),
}

impl ValidationError {
    pub fn decode(layer: DecodeLayer, reason: impl Into<String>) -> Self {
        Self::Decode { layer, reason: reason.into() }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(_) => ErrorKind::Argument,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Self::UnknownChannel(_) | Self::PolicyCompile(_) => ErrorKind::PolicyCompile,
            Self::PolicyEvaluation { .. } => ErrorKind::PolicyEvaluation,
            Self::LifecycleInvocation(_) => ErrorKind::LifecycleInvocation,
        }
    }
}

impl From<ArgumentError> for ValidationError {
    fn from(err: ArgumentError) -> Self {
        Self::Argument(err)
    }
}

impl From<LifecycleError> for ValidationError {
    fn from(err: LifecycleError) -> Self {
        Self::LifecycleInvocation(err)
    }
}

// Manual implementation of Display for no_std environments.
impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Argument(e) => write!(f, "Argument error: {}", e),
            Self::Decode { layer, reason } => {
                write!(f, "Decode error: failed to decode {}: {}", layer, reason)
            }
            Self::UnsupportedType(t) => write!(
                f,
                "Only Endorser Transactions are supported, provided type {}",
                t
            ),
            Self::UnknownChannel(channel) => {
                write!(f, "Policy compile error: no policy provider for channel {:?}", channel)
            }
            Self::PolicyCompile(e) => write!(f, "Policy compile error: {}", e),
            Self::PolicyEvaluation { action, reason } => write!(
                f,
                "Policy evaluation failed for action {}: {}",
                action, reason
            ),
            Self::LifecycleInvocation(e) => write!(f, "Lifecycle invocation error: {}", e),
        }
    }
}

// Enable standard Error trait if the "std" feature is on.
#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

#[cfg(feature = "std")]
impl std::error::Error for PolicyError {}
