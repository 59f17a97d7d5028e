use crate::Magnitude;

impl Magnitude {
    pub fn shl(&self, shift: u64) -> Magnitude {
        if self.is_zero() {
            return Magnitude::zero();
        }

        let offset = (shift / 32) as usize;
        let shift = (shift % 32) as u32;

        let comp = (32 - shift) % 32;
        let comp_mask = if shift == 0 { 0 } else { !0 };

        let n = self.words();
        let mut r = vec![0; n.len() + offset + 1];
        let mut carry = 0;

        for (i, &v) in n.iter().enumerate() {
            r[i + offset] = carry | (v << shift);
            carry = (v >> comp) & comp_mask;
        }
        r[n.len() + offset] = carry;

        Magnitude::from_words(r)
    }

    pub fn shr(&self, shift: u64) -> Magnitude {
        let offset = (shift / 32) as usize;
        if offset >= self.len() {
            return Magnitude::zero();
        }

        let shift = (shift % 32) as u32;

        let comp = (32 - shift) % 32;
        let comp_mask = if shift == 0 { 0 } else { !0 };

        let n = self.words();
        let mut r = vec![0; n.len() - offset];
        let mut carry = 0;

        for i in (offset..n.len()).rev() {
            let v = n[i];
            r[i - offset] = carry | (v >> shift);
            carry = (v << comp) & comp_mask;
        }

        Magnitude::from_words(r)
    }
}

impl std::ops::Shl<u64> for &Magnitude {
    type Output = Magnitude;

    fn shl(self, rhs: u64) -> Magnitude {
        Magnitude::shl(self, rhs)
    }
}

impl std::ops::Shr<u64> for &Magnitude {
    type Output = Magnitude;

    fn shr(self, rhs: u64) -> Magnitude {
        Magnitude::shr(self, rhs)
    }
}
