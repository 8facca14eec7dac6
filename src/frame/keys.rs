use super::MaskKey;
use rand::rngs::ThreadRng;
use rand::{thread_rng, RngCore};

/// A source of mask keys for outgoing frames.
///
/// Keys only need to be unpredictable to intermediaries, they are not secret.
pub trait MaskKeys {
    fn next_key(&mut self) -> MaskKey;
}

impl<K: MaskKeys + ?Sized> MaskKeys for &mut K {
    fn next_key(&mut self) -> MaskKey {
        (**self).next_key()
    }
}

/// Deterministic key sequence compatible with older peers of this library.
///
/// Every call advances the seed to `(seed ^ 0xf24d6ade) * 31` and yields its
/// little-endian bytes.
#[derive(Clone, Debug)]
pub struct SeededKeys {
    seed: u32,
}

impl SeededKeys {
    const INITIAL: u32 = 0xf1c3_7166;
    const STEP: u32 = 0xf24d_6ade;

    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl Default for SeededKeys {
    fn default() -> Self {
        Self::new(Self::INITIAL)
    }
}

impl MaskKeys for SeededKeys {
    fn next_key(&mut self) -> MaskKey {
        self.seed = (self.seed ^ Self::STEP).wrapping_mul(31);
        self.seed.to_le_bytes()
    }
}

/// Keys drawn from a random number generator, the thread-local one by default.
#[derive(Clone, Debug)]
pub struct RandomKeys<R = ThreadRng> {
    rng: R,
}

impl<R: RngCore> RandomKeys<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomKeys {
    fn default() -> Self {
        Self::new(thread_rng())
    }
}

impl<R: RngCore> MaskKeys for RandomKeys<R> {
    fn next_key(&mut self) -> MaskKey {
        let mut key = [0; 4];
        self.rng.fill_bytes(&mut key);
        key
    }
}
