//! Keccak sponge hash functions with 224, 256, 384 and 512 bit digests.
//!
//! ```
//! use keccak_sha3::{HashVariant, Sha3};
//!
//! let mut h = Sha3::new(HashVariant::Sha3_256);
//! h.update(b"abcd");
//! let mut fork = h.copy();
//! h.update(b"efgh");
//! fork.update(b"wxyz");
//! assert_eq!(h.hexdigest(), "48624fa43c68d5c552855a4e2919e74645f683f5384f72b5b051b71ea41d4f2d");
//! assert_ne!(fork.digest(), h.digest());
//! ```
#![allow(non_upper_case_globals)]

pub mod errors;
pub mod ffi;
pub mod sha3;

pub use errors::{Error, Result};
pub use sha3::{Domain, HashVariant, Sha3, SharedSha3};
