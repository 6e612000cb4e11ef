use spin::Mutex;

use crate::errors::Result;

use super::hasher::Sha3;
use super::{Domain, HashVariant};

/// A [`Sha3`] behind a per-instance lock, for objects reached from several
/// threads at once.
///
/// Every call takes the lock for its own duration only; the guard is dropped
/// on every return path. Digests snapshot the sponge under the lock and
/// finalize outside it.
pub struct SharedSha3 {
    variant: HashVariant,
    inner: Mutex<Sha3>,
}

impl SharedSha3 {
    pub fn new(variant: HashVariant) -> Self {
        Sha3::new(variant).into()
    }

    pub fn with_domain(variant: HashVariant, domain: Domain) -> Self {
        Sha3::with_domain(variant, domain).into()
    }

    pub fn update(&self, data: &[u8]) {
        self.inner.lock().update(data);
    }

    pub fn digest_into(&self, out: &mut [u8]) -> Result<()> {
        self.snapshot().digest_into(out)
    }

    pub fn digest(&self) -> Vec<u8> {
        self.snapshot().digest()
    }

    pub fn hexdigest(&self) -> String {
        self.snapshot().hexdigest()
    }

    pub fn copy(&self) -> Self {
        self.snapshot().into()
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Unlocked copy of the current hash object.
    pub fn snapshot(&self) -> Sha3 {
        self.inner.lock().clone()
    }

    pub fn into_inner(self) -> Sha3 {
        self.inner.into_inner()
    }

    pub fn variant(&self) -> HashVariant {
        self.variant
    }

    pub fn digest_size(&self) -> usize {
        self.variant.digest_size()
    }

    pub fn block_size(&self) -> usize {
        self.variant.block_size()
    }

    pub fn rate(&self) -> usize {
        self.variant.rate()
    }

    pub fn capacity(&self) -> usize {
        self.variant.capacity()
    }
}

impl From<Sha3> for SharedSha3 {
    fn from(h: Sha3) -> Self {
        SharedSha3 {
            variant: h.variant(),
            inner: Mutex::new(h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_matches_plain() {
        let shared = SharedSha3::new(HashVariant::Sha3_256);
        let mut plain = Sha3::new(HashVariant::Sha3_256);
        for chunk in [&b"abcd"[..], &b""[..], &b"efgh"[..], &[0u8; 500][..]] {
            shared.update(chunk);
            plain.update(chunk);
            assert_eq!(shared.digest(), plain.digest());
        }
        assert_eq!(shared.hexdigest(), plain.hexdigest());
        assert_eq!(shared.block_size(), plain.block_size());
        assert_eq!(shared.into_inner().digest(), plain.digest());
    }

    #[test]
    fn test_concurrent_updates_on_one_instance() {
        // All threads feed the same bytes, so every interleaving of whole
        // updates absorbs the same message.
        let shared = Arc::new(SharedSha3::new(HashVariant::Sha3_224));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        shared.update(&[0x61; 7]);
                        let _ = shared.digest();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let mut expect = Sha3::new(HashVariant::Sha3_224);
        expect.update(&[0x61; 4 * 1000 * 7]);
        assert_eq!(shared.digest(), expect.digest());
    }

    #[test]
    fn test_distinct_instances_in_parallel() {
        let expect = {
            let mut h = Sha3::new(HashVariant::Sha3_512);
            h.update(&[0x61; 100_000]);
            h.digest()
        };

        let base = SharedSha3::new(HashVariant::Sha3_512);
        let copies: Vec<_> = (0..4).map(|_| base.copy()).collect();
        let handles: Vec<_> = copies
            .into_iter()
            .map(|h| {
                thread::spawn(move || {
                    for chunk in [0x61u8; 100_000].chunks(1000) {
                        h.update(chunk);
                    }
                    h.digest()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expect);
        }
        assert_eq!(base.digest(), Sha3::new(HashVariant::Sha3_512).digest());
    }
}
