//! Newton-Raphson reciprocal division.
//!
//! Computes the exact scaled reciprocal `R = floor(2^n / d)` by doubling
//! working precision through integer Newton steps, turns the division into
//! one multiplication `Q0 = (u * R) >> n`, and finishes with a classic
//! division over the bounded leftover. Correct at every operand size; it
//! only pays off once the divisor is long enough for the mode selector to
//! route here.

use crate::{classic, Magnitude};

pub(crate) fn div_rem(u: &Magnitude, d: &Magnitude) -> (Magnitude, Magnitude) {
    debug_assert!(!d.is_zero());

    if u < d {
        return (Magnitude::zero(), u.clone());
    }

    let ubits = u.bit_length();
    let dbits = d.bit_length();

    // The scale 2^n must exceed the dividend so the truncated product
    // below undershoots the true quotient by at most two, and must cover
    // twice the divisor so the reciprocal is well-formed.
    let k = dbits.max(ubits.div_ceil(2)) + 1;
    let n = 2 * k;

    let r = reciprocal(d, dbits, n);

    // Q0 <= Q <= Q0 + 2, so the leftover is below 3*d and the classic
    // correction pass costs a couple of word operations per divisor word.
    let q0 = u.mul(&r).shr(n);
    let rest = u.sub(&q0.mul(d));

    let (q_fix, rem) = classic::div_rem(&rest, d);

    (q0.add(&q_fix), rem)
}

/// Exact `floor(2^n / d)` for `n >= 2*d.bit_length() + 2`.
///
/// The approximation is kept an underestimate throughout: the seed divides
/// by a rounded-up truncation of `d`, and every Newton step refines against
/// a divisor that is rounded up wherever it is truncated. That keeps the
/// error term `2^m - d~*x` nonnegative, so each step is pure magnitude
/// arithmetic with no signed cases.
fn reciprocal(d: &Magnitude, dbits: u64, n: u64) -> Magnitude {
    debug_assert!(n >= 2 * dbits + 2);

    // Seed: classic division of 2^(2t) by the divisor's top t bits.
    let t = dbits.min(32);
    let (mut x, mut m) = if t == dbits {
        (classic::div_rem(&Magnitude::pow2(2 * t), d).0, 2 * t)
    } else {
        let top = d.shr(dbits - t).add_word(1);
        (classic::div_rem(&Magnitude::pow2(2 * t), &top).0, t + dbits)
    };

    // Precision-doubling ladder: lift the scale, then regain full accuracy
    // at the new scale with one Newton step against a divisor truncated to
    // just past the target precision. Each pass doubles the correct bits,
    // so the pass count is logarithmic in the divisor's bit length and the
    // dominant cost is one multiplication at the current precision.
    while m < n {
        let good = m - dbits;
        let m_next = (dbits + 2 * good).min(n);

        x = x.shl(m_next - m);
        x = refine(&x, d, dbits, m_next);
        m = m_next;
    }

    // One full-precision polish step crushes the truncation error carried
    // up the ladder, leaving the subtract loop at most a step or two.
    x = refine(&x, d, dbits, n);

    let mut e = Magnitude::pow2(n).sub(&d.mul(&x));
    while e >= *d {
        x = x.add_word(1);
        e = e.sub(d);
    }

    x
}

/// One integer Newton step at scale `m`: `x += (x * (2^m - d~*x)) >> m`,
/// where `d~` is `d` ceil-truncated to slightly more than the precision
/// this step needs to deliver.
fn refine(x: &Magnitude, d: &Magnitude, dbits: u64, m: u64) -> Magnitude {
    let keep = dbits.min(m - dbits + 4);
    let cut = dbits - keep;

    let prod = if cut == 0 {
        d.mul(x)
    } else {
        d.shr(cut).add_word(1).mul(x).shl(cut)
    };

    let e = Magnitude::pow2(m).sub(&prod);
    x.add(&x.mul(&e).shr(m))
}
