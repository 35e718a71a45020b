/// SplitMix64 generator with explicit state.
///
/// Not cryptographic; used for reproducible visual variety. The same seed
/// always yields the same stream within and across renders.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed the generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64 random bits.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// One deterministic draw in `[0, 1)` keyed by `(seed, index, salt)`.
///
/// Distinct salts give decorrelated streams for attributes that share an
/// index, so e.g. a particle's position and size do not track each other.
pub fn uniform01(seed: u64, index: u64, salt: u64) -> f64 {
    let key = seed
        ^ index.wrapping_mul(0xD6E8_FEB8_6659_FD93)
        ^ salt.wrapping_mul(0xA076_1D64_78BD_642F);
    Rng64::new(key).next_f64_01()
}
