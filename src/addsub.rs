use crate::Magnitude;

impl Magnitude {
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.len() >= other.len() {
            (self.words(), other.words())
        } else {
            (other.words(), self.words())
        };

        let mut r = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;

        for (i, &v) in long.iter().enumerate() {
            let w = short.get(i).copied().unwrap_or(0);
            let sum = v as u64 + w as u64 + carry;
            r.push(sum as u32);
            carry = sum >> 32;
        }

        if carry != 0 {
            r.push(carry as u32);
        }

        Magnitude::from_words(r)
    }

    pub fn add_word(&self, other: u32) -> Self {
        let n = self.words();

        let mut r = Vec::with_capacity(n.len() + 1);
        let mut carry = other as u64;

        for &v in n {
            let sum = v as u64 + carry;
            r.push(sum as u32);
            carry = sum >> 32;
        }

        if carry != 0 {
            r.push(carry as u32);
        }

        Magnitude::from_words(r)
    }

    /// None when `other > self`.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        let a = self.words();
        let b = other.words();

        if b.len() > a.len() {
            return None;
        }

        let mut r = Vec::with_capacity(a.len());
        let mut borrow = 0;

        for (i, &v) in a.iter().enumerate() {
            let w = b.get(i).copied().unwrap_or(0);
            let diff = (v as u64).wrapping_sub(w as u64).wrapping_sub(borrow);

            r.push(diff as u32);
            borrow = diff >> 63;
        }

        if borrow != 0 {
            return None;
        }

        Some(Magnitude::from_words(r))
    }

    pub fn sub(&self, other: &Self) -> Self {
        match self.checked_sub(other) {
            Some(diff) => diff,
            None => panic!("magnitude subtraction underflow"),
        }
    }
}

impl std::ops::Add<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    fn add(self, other: &Magnitude) -> Magnitude {
        Magnitude::add(self, other)
    }
}

impl std::ops::Sub<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    fn sub(self, other: &Magnitude) -> Magnitude {
        Magnitude::sub(self, other)
    }
}
