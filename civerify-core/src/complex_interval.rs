use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// A rectangle in ℂ: `[a,b] + i[c,d]`, represented as a pair of real
/// `Interval`s for the real and imaginary axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexInterval {
    pub re: Interval,
    pub im: Interval,
}

impl ComplexInterval {
    #[inline]
    pub fn new(re: Interval, im: Interval) -> Self {
        Self { re, im }
    }

    /// The degenerate complex interval at the point `(re, im)`.
    #[inline]
    pub fn point(re: f64, im: f64) -> Self {
        Self {
            re: Interval::point(re),
            im: Interval::point(im),
        }
    }

    pub const ZERO: Self = Self {
        re: Interval::ZERO,
        im: Interval::ZERO,
    };

    /// `(width(re), width(im))`.
    #[inline]
    pub fn widths(self) -> (f64, f64) {
        (self.re.width(), self.im.width())
    }

    /// The degenerate complex interval at the centroid.
    #[inline]
    pub fn mid(self) -> Self {
        Self::point(self.re.mid(), self.im.mid())
    }

    /// `true` iff `0` lies within both axes.
    #[inline]
    pub fn contains_zero(self) -> bool {
        self.re.contains_zero() && self.im.contains_zero()
    }

    #[inline]
    pub fn subset(self, other: Self) -> bool {
        self.re.subset(other.re) && self.im.subset(other.im)
    }

    #[inline]
    pub fn disjoint(self, other: Self) -> bool {
        self.re.disjoint(other.re) || self.im.disjoint(other.im)
    }

    pub fn intersect(self, other: Self) -> Option<Self> {
        Some(Self {
            re: self.re.intersect(other.re)?,
            im: self.im.intersect(other.im)?,
        })
    }

    #[inline]
    pub fn neg(self) -> Self {
        Self {
            re: self.re.neg(),
            im: self.im.neg(),
        }
    }

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re.add(rhs.re),
            im: self.im.add(rhs.im),
        }
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re.sub(rhs.re),
            im: self.im.sub(rhs.im),
        }
    }

    /// Add a real interval to the real axis only, leaving `im` untouched.
    #[inline]
    pub fn add_real(self, rhs: Interval) -> Self {
        Self {
            re: self.re.add(rhs),
            im: self.im,
        }
    }

    /// Subtract a real interval from the real axis only.
    #[inline]
    pub fn sub_real(self, rhs: Interval) -> Self {
        Self {
            re: self.re.sub(rhs),
            im: self.im,
        }
    }

    /// Complex interval multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`.
    pub fn mul(self, rhs: Self) -> Self {
        let ac = self.re.mul(rhs.re);
        let bd = self.im.mul(rhs.im);
        let ad = self.re.mul(rhs.im);
        let bc = self.im.mul(rhs.re);
        Self {
            re: ac.sub(bd),
            im: ad.add(bc),
        }
    }

    /// `self * k` for a real interval scalar `k`.
    pub fn scale_real(self, k: Interval) -> Self {
        Self {
            re: self.re.mul(k),
            im: self.im.mul(k),
        }
    }

    /// `self^2`, computed with the tighter real `sqr` on the cross terms.
    pub fn sqr(self) -> Self {
        self.mul(self)
    }

    /// `self^n` for small non-negative integer `n`.
    pub fn powi(self, n: u32) -> Self {
        match n {
            0 => ComplexInterval::point(1.0, 0.0),
            1 => self,
            _ => {
                let half = self.powi(n / 2);
                let sq = half.mul(half);
                if n % 2 == 0 {
                    sq
                } else {
                    sq.mul(self)
                }
            }
        }
    }

    /// Infimum of `|z|` over `z` in `self`.
    pub fn inf_norm(self) -> f64 {
        if self.contains_zero() {
            0.0
        } else {
            self.re.inf_abs().hypot(self.im.inf_abs())
        }
    }

    /// Multiplicative inverse `1/z = conj(z) / |z|^2`. `ok=false` if the
    /// enclosure of `|z|^2` contains zero.
    pub fn recip(self) -> (Self, bool) {
        let norm_sq = self.re.sqr().add(self.im.sqr());
        let (inv_norm_sq, ok) = norm_sq.recip();
        if !ok {
            return (self, false);
        }
        (
            Self {
                re: self.re.mul(inv_norm_sq),
                im: self.im.neg().mul(inv_norm_sq),
            },
            true,
        )
    }

    /// `self / rhs`. `ok=false` if `rhs` cannot be inverted.
    pub fn div(self, rhs: Self) -> (Self, bool) {
        let (inv, ok) = rhs.recip();
        if !ok {
            return (self, false);
        }
        (self.mul(inv), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(re_lo: f64, re_hi: f64, im_lo: f64, im_hi: f64) -> ComplexInterval {
        ComplexInterval::new(
            Interval::new(re_lo, re_hi).unwrap(),
            Interval::new(im_lo, im_hi).unwrap(),
        )
    }

    #[test]
    fn point_has_zero_width() {
        let z = ComplexInterval::point(1.0, 2.0);
        assert_eq!(z.widths(), (0.0, 0.0));
    }

    #[test]
    fn contains_zero_requires_both_axes() {
        assert!(ci(-1.0, 1.0, -1.0, 1.0).contains_zero());
        assert!(!ci(1.0, 2.0, -1.0, 1.0).contains_zero());
        assert!(!ci(-1.0, 1.0, 1.0, 2.0).contains_zero());
    }

    #[test]
    fn subset_and_disjoint() {
        let inner = ci(0.0, 1.0, 0.0, 1.0);
        let outer = ci(-1.0, 2.0, -1.0, 2.0);
        assert!(inner.subset(outer));
        assert!(!outer.subset(inner));

        let far = ci(10.0, 11.0, 10.0, 11.0);
        assert!(inner.disjoint(far));
        assert!(!inner.disjoint(outer));
    }

    #[test]
    fn multiplication_matches_point_arithmetic() {
        // (1+2i)(3+4i) = -5 + 10i
        let a = ComplexInterval::point(1.0, 2.0);
        let b = ComplexInterval::point(3.0, 4.0);
        let c = a.mul(b);
        assert!((c.re.mid() - (-5.0)).abs() < 1e-9);
        assert!((c.im.mid() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn recip_of_point_one() {
        let one = ComplexInterval::point(1.0, 0.0);
        let (inv, ok) = one.recip();
        assert!(ok);
        assert!((inv.re.mid() - 1.0).abs() < 1e-9);
        assert!(inv.im.mid().abs() < 1e-9);
    }

    #[test]
    fn recip_fails_when_norm_straddles_zero() {
        let z = ci(-1.0, 1.0, -1.0, 1.0);
        let (_, ok) = z.recip();
        assert!(!ok);
    }

    #[test]
    fn inf_norm_zero_when_straddling_origin() {
        let z = ci(-1.0, 1.0, -1.0, 1.0);
        assert_eq!(z.inf_norm(), 0.0);

        let away = ci(3.0, 4.0, 0.0, 0.0);
        assert!((away.inf_norm() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn intersect_empty_when_axes_disjoint() {
        let a = ci(0.0, 1.0, 0.0, 1.0);
        let b = ci(5.0, 6.0, 5.0, 6.0);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn json_round_trip_preserves_bounds() {
        let z = ci(-1.5, 2.5, -0.25, 0.75);
        let encoded = serde_json::to_string(&z).unwrap();
        let decoded: ComplexInterval = serde_json::from_str(&encoded).unwrap();
        assert_eq!(z, decoded);
    }
}
