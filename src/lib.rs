mod addsub;
mod bitlen;
mod classic;
mod div;
mod mul;
mod newton;
mod rng;
mod shift;

pub use bitlen::{ceil_log2, leading_zero_count, most_significant_bit_index};
pub use div::{div_mod, div_mod_with_threshold, DivisionMode, NEWTON_THRESHOLD};
pub use rng::Pcg32;

/// Unsigned arbitrary-length integer: base 2^32 digits stored least
/// significant first, never with a leading zero word. Zero is the empty
/// sequence. Arithmetic routines treat magnitudes as immutable and
/// allocate fresh outputs.
#[derive(Eq, PartialEq, Hash, Clone, Debug)]
pub struct Magnitude(Vec<u32>);

impl Magnitude {
    pub const fn zero() -> Self {
        Magnitude(Vec::new())
    }

    pub fn one() -> Self {
        Magnitude(vec![1])
    }

    /// Builds a magnitude from little-endian words, trimming leading zeros.
    pub fn from_words(mut words: Vec<u32>) -> Self {
        while words.last() == Some(&0) {
            words.pop();
        }
        Magnitude(words)
    }

    pub fn from_u32(n: u32) -> Self {
        if n == 0 {
            Magnitude::zero()
        } else {
            Magnitude(vec![n])
        }
    }

    pub fn from_u64(n: u64) -> Self {
        Magnitude::from_words(vec![n as u32, (n >> 32) as u32])
    }

    /// 2^bit.
    pub fn pow2(bit: u64) -> Self {
        let mut words = vec![0; (bit / 32) as usize + 1];
        let len = words.len();
        words[len - 1] = 1 << (bit % 32);
        Magnitude(words)
    }

    pub fn words(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

fn compare(a: &Magnitude, b: &Magnitude) -> std::cmp::Ordering {
    // No leading zero words, so a longer magnitude is always greater.
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }

    for i in (0..a.len()).rev() {
        if a.0[i] != b.0[i] {
            return a.0[i].cmp(&b.0[i]);
        }
    }

    std::cmp::Ordering::Equal
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(compare(self, other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare(self, other)
    }
}

impl From<u32> for Magnitude {
    fn from(n: u32) -> Self {
        Magnitude::from_u32(n)
    }
}

impl From<u64> for Magnitude {
    fn from(n: u64) -> Self {
        Magnitude::from_u64(n)
    }
}

#[cfg(test)]
use quickcheck::Arbitrary;

#[cfg(test)]
impl Arbitrary for Magnitude {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Magnitude::from_words(Vec::<u32>::arbitrary(g))
    }
}

#[cfg(test)]
pub fn rng() -> rand_pcg::Pcg64 {
    let now = std::time::Instant::now();
    let seed = now.elapsed().as_nanos();

    rand_pcg::Pcg64::new(0xcafef00dd15ea5e5 ^ seed, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}

#[cfg(test)]
pub fn random_magnitude(rng: &mut impl rand::Rng, words: usize) -> Magnitude {
    Magnitude::from_words((0..words).map(|_| rng.gen()).collect())
}
