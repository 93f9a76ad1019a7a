#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Needed for Vec, String, Box and Arc
extern crate alloc;

pub mod builder;
pub mod error;
pub mod harness;
pub mod lifecycle;
pub mod messages;
pub mod policy;
pub mod signature_set;
pub mod unpack;
pub mod validator;
pub mod verdict;

pub use builder::{ActionBuilder, TransactionBuilder};
pub use error::{ErrorKind, PolicyError, ValidationError};
pub use harness::Response;
pub use lifecycle::{LifecycleFunction, LIFECYCLE_CHAINCODE};
pub use messages::SignedData;
pub use policy::{ChannelRegistry, Policy, PolicyProvider};
pub use validator::Validator;
pub use verdict::Verdict;
