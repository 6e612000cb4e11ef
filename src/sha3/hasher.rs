use core::fmt;

use crate::errors::{Error, Result};

use super::lane::NativeLane;
use super::sponge::Sponge;
use super::{Domain, HashVariant};

/// An incremental hash object bound to one [`HashVariant`].
///
/// `update` is the only operation that changes the absorbed state. Digests
/// are computed on a copy of the sponge, so they can be requested at any
/// point and in between updates.
///
/// Input must be bytes; text has to be encoded by the caller:
///
/// ```
/// use keccak_sha3::{HashVariant, Sha3};
///
/// let mut h = Sha3::new(HashVariant::Sha3_224);
/// h.update("abcd".as_bytes());
/// assert_eq!(h.hexdigest(), "be2ec6c1cce305a0ba88300bfcad0ab0b9f480f964be34b2cd253199");
/// ```
///
/// ```compile_fail
/// use keccak_sha3::{HashVariant, Sha3};
///
/// let mut h = Sha3::new(HashVariant::Sha3_224);
/// h.update("abcd");
/// ```
#[derive(Clone)]
pub struct Sha3 {
    variant: HashVariant,
    domain: Domain,
    sponge: Sponge<NativeLane>,
}

impl Sha3 {
    /// Hash object with the Keccak padding byte ([`Domain::Keccak`]).
    pub fn new(variant: HashVariant) -> Self {
        Self::with_domain(variant, Domain::Keccak)
    }

    pub fn with_domain(variant: HashVariant, domain: Domain) -> Self {
        Sha3 {
            variant,
            domain,
            sponge: Sponge::new(variant.block_size(), domain.byte()),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.sponge.update(data);
    }

    /// Writes the digest of everything absorbed so far into `out`, which
    /// must be exactly [`Sha3::digest_size`] bytes long.
    pub fn digest_into(&self, out: &mut [u8]) -> Result<()> {
        let expected = self.digest_size();
        if out.len() != expected {
            return Err(Error::OutputLength {
                expected,
                actual: out.len(),
            });
        }
        self.sponge.finalize_into(out);
        Ok(())
    }

    pub fn digest(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.digest_size()];
        self.sponge.finalize_into(&mut out);
        out
    }

    /// Lowercase hex of [`Sha3::digest`].
    pub fn hexdigest(&self) -> String {
        hex::encode(self.digest())
    }

    /// Independent copy sharing the input absorbed so far.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Drops all absorbed input.
    pub fn reset(&mut self) {
        self.sponge.reset();
    }

    pub fn variant(&self) -> HashVariant {
        self.variant
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Digest length in bytes.
    pub fn digest_size(&self) -> usize {
        self.variant.digest_size()
    }

    /// Block length in bytes, `rate / 8`.
    pub fn block_size(&self) -> usize {
        self.sponge.rate()
    }

    /// Rate in bits.
    pub fn rate(&self) -> usize {
        self.variant.rate()
    }

    /// Capacity in bits.
    pub fn capacity(&self) -> usize {
        self.variant.capacity()
    }
}

impl std::io::Write for Sha3 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for Sha3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} HASH object>", self.variant)
    }
}

impl fmt::Debug for Sha3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha3")
            .field("variant", &self.variant)
            .field("domain", &self.domain)
            .field("sponge", &self.sponge)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn oneshot(variant: HashVariant, data: &[u8]) -> Vec<u8> {
        let mut h = Sha3::new(variant);
        h.update(data);
        h.digest()
    }

    #[test]
    fn test_metadata() {
        for variant in HashVariant::ALL {
            let h = Sha3::new(variant);
            assert_eq!(h.block_size() * 8, h.rate());
            assert_eq!(h.rate() + h.capacity(), 1600);
            assert_eq!(h.digest().len(), h.digest_size());
            assert_eq!(h.hexdigest().len(), 2 * h.digest_size());
            assert_eq!(h.capacity(), 2 * 8 * h.digest_size());
        }

        let h = Sha3::new(HashVariant::Sha3_384);
        assert_eq!((h.digest_size(), h.block_size(), h.rate(), h.capacity()), (48, 104, 832, 768));
    }

    #[test]
    fn test_split_invariance() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut data = vec![0u8; 2000];
        rng.fill(&mut data[..]);

        for variant in HashVariant::ALL {
            let expect = oneshot(variant, &data);
            for _ in 0..20 {
                let mut h = Sha3::new(variant);
                let mut rest = &data[..];
                while !rest.is_empty() {
                    // zero-length pieces included
                    let take = rng.random_range(0..=rest.len().min(300));
                    h.update(&rest[..take]);
                    rest = &rest[take..];
                }
                h.update(&[]);
                assert_eq!(h.digest(), expect);
            }
        }
    }

    #[test]
    fn test_digest_is_idempotent() {
        let mut h = Sha3::new(HashVariant::Sha3_256);
        h.update(b"abcd");
        let first = h.digest();
        assert_eq!(h.digest(), first);
        assert_eq!(h.hexdigest(), hex::encode(&first));

        h.update(b"efgh");
        assert_eq!(h.digest(), oneshot(HashVariant::Sha3_256, b"abcdefgh"));
        assert_ne!(h.digest(), first);
    }

    #[test]
    fn test_copy_is_independent() {
        let variant = HashVariant::Sha3_512;
        let mut a = Sha3::new(variant);
        a.update(b"shared prefix ");
        let mut b = a.copy();
        a.update(b"left");
        b.update(b"right");

        assert_eq!(a.digest(), oneshot(variant, b"shared prefix left"));
        assert_eq!(b.digest(), oneshot(variant, b"shared prefix right"));
        assert_eq!(b.block_size(), a.block_size());
    }

    #[test]
    fn test_digest_into() {
        let h = Sha3::new(HashVariant::Sha3_224);
        let mut out = [0u8; 28];
        h.digest_into(&mut out).unwrap();
        assert_eq!(out.to_vec(), h.digest());

        let mut short = [0u8; 27];
        assert_eq!(
            h.digest_into(&mut short),
            Err(Error::OutputLength { expected: 28, actual: 27 })
        );
        assert_eq!(short, [0u8; 27]);
    }

    #[test]
    fn test_reset() {
        let mut h = Sha3::new(HashVariant::Sha3_256);
        h.update(&[7u8; 1000]);
        h.reset();
        assert_eq!(h.digest(), Sha3::new(HashVariant::Sha3_256).digest());
    }

    #[test]
    fn test_io_write() {
        use std::io::Write;

        let mut h = Sha3::new(HashVariant::Sha3_256);
        let mut src: &[u8] = &[3u8; 5000];
        std::io::copy(&mut src, &mut h).unwrap();
        h.flush().unwrap();
        assert_eq!(h.digest(), oneshot(HashVariant::Sha3_256, &[3u8; 5000]));
    }

    #[test]
    fn test_formatting() {
        let mut h = Sha3::new(HashVariant::Sha3_224);
        h.update(b"secret");
        assert_eq!(h.to_string(), "<sha3-224 HASH object>");
        let dbg = format!("{h:?}");
        assert!(dbg.contains("redacted"));
        assert!(dbg.contains("buffered: 6"));
    }
}
