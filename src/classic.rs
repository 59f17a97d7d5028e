//! Schoolbook long division in base 2^32, exact at any operand size.
//!
//! The multi-word path normalizes both operands so the divisor's top word
//! has its high bit set, estimates each quotient word from the top two
//! words of the running remainder over the divisor's top word, refines the
//! estimate against the next divisor word, and falls back to a rare
//! add-back when the multiply-subtract borrows.

use crate::bitlen::leading_zero_count;
use crate::Magnitude;

const B: u64 = 1 << 32;

pub(crate) fn div_rem(u: &Magnitude, d: &Magnitude) -> (Magnitude, Magnitude) {
    debug_assert!(!d.is_zero());

    if u < d {
        return (Magnitude::zero(), u.clone());
    }

    if d.len() == 1 {
        let (q, r) = div_rem_word(u, d.words()[0]);
        return (q, Magnitude::from_u32(r));
    }

    div_rem_long(u, d)
}

/// Single-word divisor fast path: one chained u64 divide per word.
pub(crate) fn div_rem_word(u: &Magnitude, d: u32) -> (Magnitude, u32) {
    debug_assert!(d != 0);

    let n = u.words();
    let d = d as u64;

    let mut q = vec![0; n.len()];
    let mut rem = 0;

    for i in (0..n.len()).rev() {
        let t = (rem << 32) | n[i] as u64;
        q[i] = (t / d) as u32;
        rem = t % d;
    }

    (Magnitude::from_words(q), rem as u32)
}

fn div_rem_long(u: &Magnitude, d: &Magnitude) -> (Magnitude, Magnitude) {
    // Normalize so the divisor's leading word has its top bit set. This
    // keeps every per-step estimate within one of the true quotient word.
    let shift = leading_zero_count(d.words()[d.len() - 1]) as u64;

    let dn = d.shl(shift);
    let dn = dn.words();
    let m = dn.len();

    let mut un = u.shl(shift).words().to_vec();
    let n = un.len();
    un.push(0);

    debug_assert!(m >= 2 && n >= m);

    let den = dn[m - 1] as u64;
    let den_next = dn[m - 2] as u64;

    let mut q = vec![0; n - m + 1];

    for j in (0..=n - m).rev() {
        // Estimate the quotient word from the top two remainder words.
        let top = ((un[j + m] as u64) << 32) | un[j + m - 1] as u64;
        let mut qhat = top / den;
        let mut rhat = top - qhat * den;

        // Correct the estimate downward against the next divisor word.
        loop {
            if qhat >= B || qhat * den_next > (rhat << 32) + un[j + m - 2] as u64 {
                qhat -= 1;
                rhat += den;

                if rhat < B {
                    continue;
                }
            }
            break;
        }

        // u[j..j+m] -= qhat * d
        let borrow = sub_mul(&mut un[j..=j + m], dn, qhat);
        if borrow {
            // Over-estimated by one after all. Very unlikely.
            qhat -= 1;
            add_back(&mut un[j..=j + m], dn);
        }

        q[j] = qhat as u32;
    }

    un.truncate(m);
    let rem = Magnitude::from_words(un).shr(shift);

    (Magnitude::from_words(q), rem)
}

/// u -= q * d over the current window; returns whether the window borrowed.
///
/// q may still sit one past the word range here; the resulting borrow is
/// what sends the caller down the add-back path.
fn sub_mul(u: &mut [u32], d: &[u32], q: u64) -> bool {
    debug_assert!(q <= B);

    let mut carry = 0;
    let mut borrow = 0;

    for i in 0..d.len() {
        let p = q * d[i] as u64 + carry;
        carry = p >> 32;

        let diff = (u[i] as u64)
            .wrapping_sub(p as u32 as u64)
            .wrapping_sub(borrow);

        u[i] = diff as u32;
        borrow = diff >> 63;
    }

    let diff = (u[d.len()] as u64).wrapping_sub(carry).wrapping_sub(borrow);
    u[d.len()] = diff as u32;

    diff >> 63 != 0
}

/// u += d over the current window, dropping the final carry (it cancels
/// the borrow left behind by an over-estimated sub_mul).
fn add_back(u: &mut [u32], d: &[u32]) {
    let mut carry = 0;

    for i in 0..d.len() {
        let sum = u[i] as u64 + d[i] as u64 + carry;
        u[i] = sum as u32;
        carry = sum >> 32;
    }

    u[d.len()] = (u[d.len()] as u64).wrapping_add(carry) as u32;
}
