use std::hash::{BuildHasher, Hash, Hasher};

/// A key with a hash chosen by the test rather than derived from its value, so that collisions
/// can be forced between unequal keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collider<T: Eq> {
    pub hash: u64,
    pub value: T,
}

impl<T: Eq> Collider<T> {
    pub const fn new(hash: u64, value: T) -> Collider<T> {
        Collider {
            hash,
            value,
        }
    }
}

impl<T: Eq> Hash for Collider<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// A hasher that reports the last integer written to it unchanged. Combined with [`Collider`],
/// tests know exactly which bucket each key lands in.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.rotate_left(8) ^ *byte as u64;
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }

    fn write_usize(&mut self, i: usize) {
        self.state = i as u64;
    }

    fn write_u32(&mut self, i: u32) {
        self.state = i as u64;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityBuildHasher;

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
