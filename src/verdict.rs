//! A compact summary of one validation call, for hosts that record decisions.

use alloc::string::{String, ToString};

use crate::error::{ErrorKind, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "export-json", derive(serde::Serialize))]
#[cfg_attr(feature = "export-json", serde(tag = "status", rename_all = "snake_case"))]
pub enum Verdict {
    Accepted,
    Rejected { kind: ErrorKind, message: String },
}

impl Verdict {
    pub fn from_result(result: &Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Verdict::Accepted,
            Err(e) => Verdict::Rejected { kind: e.kind(), message: e.to_string() },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected { kind, .. } => Some(*kind),
        }
    }

    /// JSON form, e.g. `{"status":"rejected","kind":"Decode","message":"..."}`.
    #[cfg(feature = "export-json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
