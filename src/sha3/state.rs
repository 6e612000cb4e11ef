use core::fmt::Debug;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::keccakf::keccak_f1600;
use super::lane::Lane;

/// Number of bytes in the 1600-bit permutation state.
pub const STATE_BYTES: usize = 200;

/// Rotation offsets of the rho step, indexed `[x][y]`.
const RHO_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];

/// The Keccak-f[1600] state: a 5x5 array of lanes, stored row-major so the
/// lane at column `x`, row `y` sits at index `x + 5 * y`.
///
/// Bytes map onto lanes little-endian, byte `i` being byte `i % 8` of lane
/// `i / 8`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeccakState<L: Lane> {
    lanes: [L; 25],
}

impl<L: Lane> KeccakState<L> {
    pub fn new() -> Self {
        KeccakState {
            lanes: [L::default(); 25],
        }
    }

    #[inline(always)]
    pub fn lane(&self, x: usize, y: usize) -> L {
        self.lanes[x + 5 * y]
    }

    #[inline(always)]
    pub fn lane_mut(&mut self, x: usize, y: usize) -> &mut L {
        &mut self.lanes[x + 5 * y]
    }

    /// XOR of the five lanes of column `x`.
    pub fn column_parity(&self, x: usize) -> L {
        self.lane(x, 0) ^ self.lane(x, 1) ^ self.lane(x, 2) ^ self.lane(x, 3) ^ self.lane(x, 4)
    }

    /// Applies Keccak-f[1600].
    #[inline]
    pub fn permute(&mut self) {
        keccak_f1600(&mut self.lanes);
    }

    /// XORs `block` into the leading bytes of the state.
    ///
    /// `block.len()` must be a multiple of 8 and at most [`STATE_BYTES`];
    /// every rate of the four hash variants satisfies this.
    pub fn xor_block(&mut self, block: &[u8]) {
        debug_assert!(block.len() % 8 == 0 && block.len() <= STATE_BYTES);
        for (lane, chunk) in self.lanes.iter_mut().zip(block.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *lane ^= L::from_le_bytes(bytes);
        }
    }

    /// Copies the leading `out.len()` bytes of the state into `out`.
    pub fn extract(&self, out: &mut [u8]) {
        debug_assert!(out.len() <= STATE_BYTES);
        for (chunk, lane) in out.chunks_mut(8).zip(self.lanes.iter()) {
            let bytes = lane.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    pub fn theta(&mut self) {
        let c: [L; 5] = core::array::from_fn(|x| self.column_parity(x));
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate(1);
            for y in 0..5 {
                *self.lane_mut(x, y) ^= d;
            }
        }
    }

    pub fn rho(&mut self) {
        for x in 0..5 {
            for y in 0..5 {
                let l = self.lane(x, y).rotate(RHO_OFFSETS[x][y]);
                *self.lane_mut(x, y) = l;
            }
        }
    }

    /// Moves lane `(x, y)` to `(y, 2x + 3y)`.
    pub fn pi(&mut self) {
        let old = self.lanes;
        for x in 0..5 {
            for y in 0..5 {
                *self.lane_mut(y, (2 * x + 3 * y) % 5) = old[x + 5 * y];
            }
        }
    }

    pub fn chi(&mut self) {
        for y in 0..5 {
            let row: [L; 5] = core::array::from_fn(|x| self.lane(x, y));
            for x in 0..5 {
                *self.lane_mut(x, y) = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }
    }

    pub fn iota(&mut self, round: usize) {
        *self.lane_mut(0, 0) ^= L::RC[round];
    }

    /// Keccak-f[1600] computed step by step, one step per call.
    ///
    /// Far slower than [`KeccakState::permute`] and producing the same
    /// result; kept as the readable form of the permutation.
    pub fn permute_reference(&mut self) {
        for round in 0..24 {
            self.theta();
            self.rho();
            self.pi();
            self.chi();
            self.iota(round);
        }
    }

    pub fn lanes(&self) -> &[L; 25] {
        &self.lanes
    }

    pub fn from_lanes(lanes: [L; 25]) -> Self {
        KeccakState { lanes }
    }
}

impl<L: Lane> Default for KeccakState<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lane> Zeroize for KeccakState<L> {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
    }
}

impl<L: Lane> Drop for KeccakState<L> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<L: Lane> ZeroizeOnDrop for KeccakState<L> {}

/// Censored version of Debug
impl<L: Lane> Debug for KeccakState<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("KeccakState").field(&"<redacted>").finish()
    }
}
