use core::ops::{BitAnd, BitXor, BitXorAssign, Not};

use zeroize::{DefaultIsZeroes, Zeroize};

/// One 64-bit word of the Keccak-f[1600] state.
///
/// The permutation is written once against this trait. Two representations
/// implement it: native `u64` words, and [`Interleaved`] pairs of `u32`
/// words for targets without 64-bit registers. Which one the hashers use is
/// fixed at build time through [`NativeLane`].
pub trait Lane:
    Copy
    + Default
    + Eq
    + core::fmt::Debug
    + Zeroize
    + BitXor<Output = Self>
    + BitXorAssign
    + BitAnd<Output = Self>
    + Not<Output = Self>
{
    /// Round constants of the iota step, in this representation.
    const RC: [Self; 24];

    /// Cyclic left rotation of the 64-bit lane by `n` bits.
    fn rotate(self, n: u32) -> Self;

    fn from_le_bytes(bytes: [u8; 8]) -> Self;

    fn to_le_bytes(self) -> [u8; 8];
}

// The round constants in the iota step.
pub(crate) const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

impl Lane for u64 {
    const RC: [u64; 24] = ROUND_CONSTANTS;

    #[inline(always)]
    fn rotate(self, n: u32) -> Self {
        self.rotate_left(n)
    }

    #[inline(always)]
    fn from_le_bytes(bytes: [u8; 8]) -> Self {
        u64::from_le_bytes(bytes)
    }

    #[inline(always)]
    fn to_le_bytes(self) -> [u8; 8] {
        u64::to_le_bytes(self)
    }
}

/// A 64-bit lane stored as two 32-bit words: `even` holds bits 0, 2, .., 62
/// and `odd` holds bits 1, 3, .., 63.
///
/// With this split a 64-bit rotation becomes two 32-bit rotations (plus a
/// swap of the halves for odd amounts), so no carries cross word borders.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Interleaved {
    pub even: u32,
    pub odd: u32,
}

impl Interleaved {
    pub const fn from_u64(x: u64) -> Self {
        let mut even = 0u32;
        let mut odd = 0u32;
        let mut i = 0;
        while i < 32 {
            even |= (((x >> (2 * i)) & 1) as u32) << i;
            odd |= (((x >> (2 * i + 1)) & 1) as u32) << i;
            i += 1;
        }
        Interleaved { even, odd }
    }

    pub const fn to_u64(self) -> u64 {
        let mut x = 0u64;
        let mut i = 0;
        while i < 32 {
            x |= (((self.even >> i) & 1) as u64) << (2 * i);
            x |= (((self.odd >> i) & 1) as u64) << (2 * i + 1);
            i += 1;
        }
        x
    }
}

const fn interleave_table(rc: &[u64; 24]) -> [Interleaved; 24] {
    let mut out = [Interleaved { even: 0, odd: 0 }; 24];
    let mut i = 0;
    while i < 24 {
        out[i] = Interleaved::from_u64(rc[i]);
        i += 1;
    }
    out
}

impl DefaultIsZeroes for Interleaved {}

impl BitXor for Interleaved {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Interleaved {
            even: self.even ^ rhs.even,
            odd: self.odd ^ rhs.odd,
        }
    }
}

impl BitXorAssign for Interleaved {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.even ^= rhs.even;
        self.odd ^= rhs.odd;
    }
}

impl BitAnd for Interleaved {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Interleaved {
            even: self.even & rhs.even,
            odd: self.odd & rhs.odd,
        }
    }
}

impl Not for Interleaved {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Interleaved {
            even: !self.even,
            odd: !self.odd,
        }
    }
}

impl Lane for Interleaved {
    const RC: [Interleaved; 24] = interleave_table(&ROUND_CONSTANTS);

    // Rotating by 2s moves both halves by s. Rotating by 2s+1 swaps the
    // halves: the new even bits are the old odd bits moved by s+1, the new
    // odd bits are the old even bits moved by s.
    #[inline(always)]
    fn rotate(self, n: u32) -> Self {
        let n = n % 64;
        if n % 2 == 0 {
            Interleaved {
                even: self.even.rotate_left(n / 2),
                odd: self.odd.rotate_left(n / 2),
            }
        } else {
            Interleaved {
                even: self.odd.rotate_left(n / 2 + 1),
                odd: self.even.rotate_left(n / 2),
            }
        }
    }

    #[inline]
    fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Interleaved::from_u64(u64::from_le_bytes(bytes))
    }

    #[inline]
    fn to_le_bytes(self) -> [u8; 8] {
        self.to_u64().to_le_bytes()
    }
}

/// Lane representation used by the hashers on this target.
#[cfg(any(feature = "lanes32", not(target_pointer_width = "64")))]
pub type NativeLane = Interleaved;

/// Lane representation used by the hashers on this target.
#[cfg(not(any(feature = "lanes32", not(target_pointer_width = "64"))))]
pub type NativeLane = u64;
