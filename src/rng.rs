use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Derives independent ChaCha8 streams from one seed.
///
/// A stream depends only on the seed and its name: requesting, adding or
/// removing other streams never changes what a given name produces, and
/// asking for the same name twice yields the same sequence again.
#[derive(Debug, Clone, Copy)]
pub struct RngManager {
    seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stream(&self, name: &str) -> StreamRng {
        let mut inner = ChaCha8Rng::seed_from_u64(self.seed);
        inner.set_stream(stream_id(name));
        StreamRng { inner }
    }
}

/// FNV-1a over the name, finished with an LCG step so short names spread.
fn stream_id(name: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
    let hash = name.bytes().fold(FNV_OFFSET, |acc, byte| {
        (acc ^ byte as u64).wrapping_mul(FNV_PRIME)
    });
    hash.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

pub struct StreamRng {
    inner: ChaCha8Rng,
}

impl RngCore for StreamRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
