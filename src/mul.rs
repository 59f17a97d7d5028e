use crate::Magnitude;

impl Magnitude {
    /// Schoolbook multiply-accumulate. This is the multiplication engine
    /// Newton division leans on; a subquadratic engine can replace it
    /// behind the same signature without touching the division code.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Magnitude::zero();
        }

        let n = self.words();
        let m = other.words();

        let mut r = vec![0; n.len() + m.len()];

        for (j, &x) in m.iter().enumerate() {
            if x == 0 {
                continue;
            }

            // Product of any two u32 plus two u32 carries fits in u64,
            // so carry folds into the partial product without overflow.
            let mut carry = 0;

            for (i, &v) in n.iter().enumerate() {
                let p = v as u64 * x as u64 + r[i + j] as u64 + carry;
                r[i + j] = p as u32;
                carry = p >> 32;
            }

            r[n.len() + j] = carry as u32;
        }

        Magnitude::from_words(r)
    }

    pub fn mul_word(&self, other: u32) -> Self {
        if other == 0 {
            return Magnitude::zero();
        }

        let n = self.words();

        let mut r = Vec::with_capacity(n.len() + 1);
        let mut carry = 0;

        for &v in n {
            let p = v as u64 * other as u64 + carry;
            r.push(p as u32);
            carry = p >> 32;
        }
        r.push(carry as u32);

        Magnitude::from_words(r)
    }
}

impl std::ops::Mul<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    #[inline]
    fn mul(self, other: &Magnitude) -> Magnitude {
        Magnitude::mul(self, other)
    }
}

impl std::ops::Mul<u32> for &Magnitude {
    type Output = Magnitude;

    #[inline]
    fn mul(self, other: u32) -> Magnitude {
        self.mul_word(other)
    }
}
