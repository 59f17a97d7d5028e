//! PCG XSH-RR 64/32: 64-bit LCG state with a rotated xorshift output
//! permutation. Not cryptographically secure; never use it where an
//! attacker predicting outputs matters.

/// 64-bit LCG multiplier with good spectral quality (O'Neill, PCG paper).
const MULTIPLIER: u64 = 6364136223846793005;

/// Caller-owned generator state: 64-bit state plus a fixed odd increment
/// selecting the stream. Every draw mutates the state, so sharing one
/// instance across threads requires external synchronization; Rust's
/// `&mut self` methods make unsynchronized sharing unrepresentable in
/// safe code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new(init_state: u64, init_seq: u64) -> Self {
        let mut g = Pcg32 { state: 0, inc: 0 };
        g.seed(init_state, init_seq);
        g
    }

    /// Reseeds in place, discarding all prior state. The double advance
    /// mixes the seed through the LCG before the first output, so weak
    /// seeds do not leak into predictable early draws.
    pub fn seed(&mut self, init_state: u64, init_seq: u64) {
        self.inc = (init_seq << 1) | 1;
        self.state = 0;
        self.advance();
        self.state = self.state.wrapping_add(init_state);
        self.advance();
    }

    fn advance(&mut self) {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);
    }

    pub fn next_word(&mut self) -> u32 {
        let old = self.state;
        self.advance();

        // Xorshift folds the high-quality top bits downward; the top five
        // bits then pick a rotation, which removes the short-period
        // low-bit weakness of the raw LCG.
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;

        xorshifted.rotate_right(rot)
    }

    /// Uniform draw from `[0, bound)` by rejection sampling: draws below
    /// `(2^32 - bound) mod bound` are thrown away, which removes the
    /// modulo bias a plain `% bound` would carry. Expected draws stay
    /// below two even at the worst bound. Panics if `bound` is zero.
    pub fn uniform_word(&mut self, bound: u32) -> u32 {
        let threshold = bound.wrapping_neg() % bound;

        loop {
            let word = self.next_word();
            if word >= threshold {
                return word % bound;
            }
        }
    }

    /// Uniform draw from `[min, bound)`.
    pub fn uniform_word_in(&mut self, min: u32, bound: u32) -> u32 {
        min + self.uniform_word(bound - min)
    }

    /// Uniform draw from `[min, bound)` over signed values. The span must
    /// fit in a 32-bit word.
    pub fn uniform_int(&mut self, min: i64, bound: i64) -> i64 {
        let span = bound - min;
        debug_assert!(span > 0 && span <= u32::MAX as i64);

        min + self.uniform_word(span as u32) as i64
    }
}

impl Default for Pcg32 {
    /// Convenience instance with the reference PCG seed. Still owned by
    /// whoever constructs it; there is no process-wide shared generator.
    fn default() -> Self {
        Pcg32::new(0x853c49e6748fea9b, 0xda3e39cb94b95bdb)
    }
}
