use core::fmt;

use crate::errors::{Error, Result};

pub use hasher::Sha3;
pub use lane::{Interleaved, Lane, NativeLane};
pub use shared::SharedSha3;
pub use sponge::Sponge;
pub use state::KeccakState;

mod hasher;
mod keccakf;
mod lane;
mod shared;
mod sponge;
mod state;

/// Width of the Keccak-f permutation in bits.
pub const STATE_BITS: usize = 1600;

const dsbyteKeccak: u8 = 0b00000001;
const dsbyteSHA3: u8 = 0b00000110;

/// The four fixed-length hash functions, named by digest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashVariant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashVariant {
    pub const ALL: [HashVariant; 4] = [
        HashVariant::Sha3_224,
        HashVariant::Sha3_256,
        HashVariant::Sha3_384,
        HashVariant::Sha3_512,
    ];

    /// Looks a variant up by digest length in bits.
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            224 => Ok(HashVariant::Sha3_224),
            256 => Ok(HashVariant::Sha3_256),
            384 => Ok(HashVariant::Sha3_384),
            512 => Ok(HashVariant::Sha3_512),
            _ => Err(Error::UnsupportedVariant(bits)),
        }
    }

    /// Digest length in bytes.
    pub const fn digest_size(self) -> usize {
        match self {
            HashVariant::Sha3_224 => 28,
            HashVariant::Sha3_256 => 32,
            HashVariant::Sha3_384 => 48,
            HashVariant::Sha3_512 => 64,
        }
    }

    /// Capacity in bits: twice the digest length.
    pub const fn capacity(self) -> usize {
        2 * 8 * self.digest_size()
    }

    /// Rate in bits.
    pub const fn rate(self) -> usize {
        STATE_BITS - self.capacity()
    }

    /// Rate in bytes.
    pub const fn block_size(self) -> usize {
        self.rate() / 8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashVariant::Sha3_224 => "sha3-224",
            HashVariant::Sha3_256 => "sha3-256",
            HashVariant::Sha3_384 => "sha3-384",
            HashVariant::Sha3_512 => "sha3-512",
        }
    }
}

impl TryFrom<usize> for HashVariant {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        HashVariant::from_bits(bits)
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First byte of the multi-rate padding.
///
/// [`Domain::Keccak`] gives the Keccak submission functions, which are the
/// default of [`Sha3::new`]; [`Domain::Fips202`] gives the standardised
/// FIPS 202 SHA-3 functions. The two families share everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Domain {
    #[default]
    Keccak,
    Fips202,
}

impl Domain {
    pub const fn byte(self) -> u8 {
        match self {
            Domain::Keccak => dsbyteKeccak,
            Domain::Fips202 => dsbyteSHA3,
        }
    }
}

pub fn new224() -> Sha3 {
    Sha3::new(HashVariant::Sha3_224)
}

pub fn new256() -> Sha3 {
    Sha3::new(HashVariant::Sha3_256)
}

pub fn new384() -> Sha3 {
    Sha3::new(HashVariant::Sha3_384)
}

pub fn new512() -> Sha3 {
    Sha3::new(HashVariant::Sha3_512)
}

fn oneshot<const N: usize>(variant: HashVariant, data: &[u8]) -> [u8; N] {
    debug_assert_eq!(variant.digest_size(), N);
    let mut out = [0u8; N];
    let mut sponge = Sponge::<NativeLane>::new(variant.block_size(), dsbyteKeccak);
    sponge.update(data);
    sponge.finalize_into(&mut out);
    out
}

pub fn sha3_224(data: &[u8]) -> [u8; 28] {
    oneshot(HashVariant::Sha3_224, data)
}

pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    oneshot(HashVariant::Sha3_256, data)
}

pub fn sha3_384(data: &[u8]) -> [u8; 48] {
    oneshot(HashVariant::Sha3_384, data)
}

pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    oneshot(HashVariant::Sha3_512, data)
}
