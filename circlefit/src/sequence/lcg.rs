use rand::{RngCore, SeedableRng};

/// Minimal linear congruential generator (Numerical Recipes constants) over a 32-bit state.
///
/// `state = state * 1664525 + 1013904223 (mod 2^32)`, every output is the new state.
/// Cheap and fully reproducible from its seed, which is all the sequence generator needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const MULTIPLIER: u32 = 1_664_525;
    pub const INCREMENT: u32 = 1_013_904_223;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        unit_sample(self)
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// The seed is taken modulo 2^32, so seeds agree with [`Lcg::new`]
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

/// Maps the next 32 bits of `rng` onto `[0, 1)`
pub fn unit_sample(rng: &mut impl RngCore) -> f64 {
    rng.next_u32() as f64 / 4_294_967_296.0
}
