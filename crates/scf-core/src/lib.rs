#![deny(missing_docs)]
#![doc = "Shared error surface, validated G(n, p) parameters and canonical serialization helpers for the SCF bound engine."]

pub mod errors;
pub mod hash;
pub mod params;
pub mod serde;

pub use crate::serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
pub use errors::{ErrorInfo, ScfError};
pub use hash::stable_hash_string;
pub use params::{validate_n, validate_p, validate_threshold, GnpParams, MAX_VERTICES};
