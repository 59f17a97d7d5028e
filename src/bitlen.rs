use crate::Magnitude;

/// Number of zero bits above the highest set bit of `word`; 32 for 0.
///
/// Binary-search doubling: probe the top 16 bits, then 8, 4, 2, 1.
pub fn leading_zero_count(word: u32) -> u32 {
    if word == 0 {
        return 32;
    }

    let mut n = word;
    let mut count = 0;

    if n & 0xFFFF_0000 == 0 {
        count += 16;
        n <<= 16;
    }
    if n & 0xFF00_0000 == 0 {
        count += 8;
        n <<= 8;
    }
    if n & 0xF000_0000 == 0 {
        count += 4;
        n <<= 4;
    }
    if n & 0xC000_0000 == 0 {
        count += 2;
        n <<= 2;
    }
    if n & 0x8000_0000 == 0 {
        count += 1;
    }

    count
}

/// Position of the highest set bit; -1 for 0.
pub fn most_significant_bit_index(word: u32) -> i32 {
    31 - leading_zero_count(word) as i32
}

/// Smallest n with 2^n >= word. Caller guarantees word > 0.
pub fn ceil_log2(word: u32) -> u32 {
    debug_assert!(word > 0);

    let index = most_significant_bit_index(word) as u32;
    if word & (word - 1) == 0 {
        index
    } else {
        index + 1
    }
}

impl Magnitude {
    /// Highest set bit position plus one, over the whole word sequence.
    /// 0 for the zero magnitude.
    pub fn bit_length(&self) -> u64 {
        match self.words().last() {
            Some(&top) => {
                let words_below = (self.len() - 1) as u64;
                words_below * 32 + (most_significant_bit_index(top) + 1) as u64
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_leading_zeros() {
        assert_eq!(leading_zero_count(0), 32);
        assert_eq!(leading_zero_count(1), 31);
        assert_eq!(leading_zero_count(0x8000_0000), 0);
        assert_eq!(leading_zero_count(0x0001_0000), 15);
        assert_eq!(leading_zero_count(0xFFFF_FFFF), 0);

        for bit in 0..32 {
            assert_eq!(leading_zero_count(1 << bit), 31 - bit);
        }
    }

    #[test]
    fn finds_most_significant_bit() {
        assert_eq!(most_significant_bit_index(0), -1);
        assert_eq!(most_significant_bit_index(1), 0);
        assert_eq!(most_significant_bit_index(6), 2);
        assert_eq!(most_significant_bit_index(u32::MAX), 31);
    }

    #[test]
    fn ceil_log2_rounds_up() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(1024), 10);
        assert_eq!(ceil_log2(1025), 11);
        assert_eq!(ceil_log2(u32::MAX), 32);
    }

    #[test]
    fn measures_bit_length() {
        assert_eq!(Magnitude::zero().bit_length(), 0);
        assert_eq!(Magnitude::one().bit_length(), 1);
        assert_eq!(Magnitude::from_u32(0x8000_0000).bit_length(), 32);
        assert_eq!(Magnitude::from_words(vec![0, 1]).bit_length(), 33);
        assert_eq!(Magnitude::from_words(vec![!0, !0, 0x10]).bit_length(), 69);
        assert_eq!(Magnitude::pow2(12345).bit_length(), 12346);
    }
}
