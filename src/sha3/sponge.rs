use core::cmp::min;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::lane::Lane;
use super::state::{KeccakState, STATE_BYTES};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum SpongeDirection {
    // Absorbing indicates that the sponge is absorbing input.
    Absorbing,
    // Squeezing indicates that the sponge is being squeezed. Only finalize
    // copies ever get here.
    Squeezing,
}

/// A Keccak sponge over the 1600-bit state with a fixed rate.
///
/// Input is buffered until a whole block of `rate` bytes is available, then
/// XORed into the state and permuted. Output is produced by
/// [`Sponge::finalize_into`], which pads and squeezes a clone, so the sponge
/// itself only ever absorbs.
#[derive(Clone, PartialEq, Eq)]
pub struct Sponge<L: Lane> {
    state: KeccakState<L>,
    // pending input, valid bytes are buffer[..n]
    buffer: [u8; STATE_BYTES],
    n: usize,
    // rate in bytes
    rate: usize,
    ds: u8,
    direction: SpongeDirection,
}

impl<L: Lane> Sponge<L> {
    /// Creates an empty sponge absorbing `rate` bytes per block and padding
    /// with the domain-separation byte `ds`.
    ///
    /// `rate` must be a non-zero multiple of 8 below 200.
    pub fn new(rate: usize, ds: u8) -> Self {
        assert!(rate > 0 && rate < STATE_BYTES && rate % 8 == 0);
        Sponge {
            state: KeccakState::new(),
            buffer: [0; STATE_BYTES],
            n: 0,
            rate,
            ds,
            direction: SpongeDirection::Absorbing,
        }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn domain(&self) -> u8 {
        self.ds
    }

    /// Number of input bytes waiting for a full block.
    pub fn buffered(&self) -> usize {
        self.n
    }

    pub fn reset(&mut self) {
        self.state = KeccakState::new();
        self.buffer.zeroize();
        self.n = 0;
        self.direction = SpongeDirection::Absorbing;
    }

    /// XORs one full block into the rate part of the state and permutes.
    #[inline]
    pub fn absorb_block(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len(), self.rate);
        self.state.xor_block(block);
        self.state.permute();
    }

    fn absorb_buffer(&mut self) {
        self.state.xor_block(&self.buffer[..self.rate]);
        self.state.permute();
        self.n = 0;
    }

    pub fn update(&mut self, data: &[u8]) {
        debug_assert_eq!(self.direction, SpongeDirection::Absorbing);
        let rate = self.rate;
        let mut p = data;

        if self.n > 0 {
            let take = min(p.len(), rate - self.n);
            self.buffer[self.n..self.n + take].copy_from_slice(&p[..take]);
            self.n += take;
            p = &p[take..];
            if self.n < rate {
                return;
            }
            self.absorb_buffer();
        }

        let mut blocks = p.chunks_exact(rate);
        for block in &mut blocks {
            self.absorb_block(block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.n = rest.len();
    }

    /// Pads the buffered input and squeezes `out.len()` bytes from a copy of
    /// the sponge. `self` is left as it was.
    pub fn finalize_into(&self, out: &mut [u8]) {
        let mut copy = self.clone();
        copy.pad_and_permute();
        copy.squeeze(out);
    }

    // Multi-rate padding: domain byte right after the message, zeros, and
    // the top bit of the last rate byte. Both can hit the same byte.
    fn pad_and_permute(&mut self) {
        let rate = self.rate;
        self.buffer[self.n..rate].fill(0);
        self.buffer[self.n] ^= self.ds;
        self.buffer[rate - 1] ^= 0x80;
        self.absorb_buffer();
        self.direction = SpongeDirection::Squeezing;
    }

    // Output starts at the beginning of the rate window; `self.n` counts the
    // bytes of the current window already handed out.
    fn squeeze(&mut self, out: &mut [u8]) {
        debug_assert_eq!(self.direction, SpongeDirection::Squeezing);
        let rate = self.rate;
        let mut window = [0u8; STATE_BYTES];
        self.state.extract(&mut window[..rate]);

        let mut out = out;
        while !out.is_empty() {
            if self.n == rate {
                self.state.permute();
                self.state.extract(&mut window[..rate]);
                self.n = 0;
            }
            let copy_len = min(out.len(), rate - self.n);
            out[..copy_len].copy_from_slice(&window[self.n..self.n + copy_len]);
            self.n += copy_len;
            out = &mut out[copy_len..];
        }
        window.zeroize();
    }
}

impl<L: Lane> Drop for Sponge<L> {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}

impl<L: Lane> ZeroizeOnDrop for Sponge<L> {}

impl<L: Lane> core::fmt::Debug for Sponge<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sponge")
            .field("rate", &self.rate)
            .field("buffered", &self.n)
            .field("state", &self.state)
            .finish()
    }
}
