use crate::UniformSource;

const DEFAULT_SEED: u32 = 123456789;

/// MWC256 random number generator.
/// Multiply-with-carry generator suggested by Marsaglia in his DIEHARD suite.
/// Fully determined by its seed, which makes it the default source for
/// reproducible simulation runs.
#[derive(Debug, Clone)]
pub struct Mwc256 {
    q: [u32; 256],
    carry: u32,
    i: u8,
}

impl Mwc256 {
    /// Create a generator with the default seed
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a generator with the given seed
    pub fn with_seed(seed: u32) -> Self {
        let mut q = [0u32; 256];
        let mut j = seed;

        for q_val in &mut q {
            j = j.wrapping_mul(69069).wrapping_add(12345);
            *q_val = j;
        }

        Self {
            q,
            carry: 362436,
            i: 255,
        }
    }

    /// Generate a random u32
    pub fn rand32(&mut self) -> u32 {
        const A: u64 = 809430660;

        self.i = self.i.wrapping_add(1);
        let t = A * (self.q[self.i as usize] as u64) + (self.carry as u64);
        self.carry = (t >> 32) as u32;
        self.q[self.i as usize] = (t & 0xFFFFFFFF) as u32;
        self.q[self.i as usize]
    }

    /// Generate a random f64 in the range [0, 1)
    pub fn unifrand(&mut self) -> f64 {
        // 2^32 keeps u32::MAX strictly below 1.0
        const MULT: f64 = 1.0 / 4294967296.0;
        MULT * (self.rand32() as f64)
    }
}

impl Default for Mwc256 {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for Mwc256 {
    fn next_uniform(&mut self) -> f64 {
        self.unifrand()
    }
}
