use crate::complex_interval::ComplexInterval;
use crate::interval::Interval;

/// Which axis of which component was widest, as returned by [`Box2::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    Z1Re,
    Z1Im,
    Z2Re,
    Z2Im,
}

/// An axis-aligned rectangle in ℂ²: the ordered pair `(z1, z2)` of
/// `ComplexInterval`s the rest of the crate calls a "box".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box2 {
    pub z1: ComplexInterval,
    pub z2: ComplexInterval,
}

impl Box2 {
    #[inline]
    pub fn new(z1: ComplexInterval, z2: ComplexInterval) -> Self {
        Self { z1, z2 }
    }

    /// The four real+imag widths of `z1` and `z2`.
    pub fn widths(&self) -> (f64, f64, f64, f64) {
        let (z1_re, z1_im) = self.z1.widths();
        let (z2_re, z2_im) = self.z2.widths();
        (z1_re, z1_im, z2_re, z2_im)
    }

    /// The degenerate box at the centroid.
    pub fn mid(&self) -> Self {
        Self {
            z1: self.z1.mid(),
            z2: self.z2.mid(),
        }
    }

    /// Componentwise intersection; `None` if either axis pair is disjoint.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        Some(Self {
            z1: self.z1.intersect(other.z1)?,
            z2: self.z2.intersect(other.z2)?,
        })
    }

    /// `true` iff any of the four real intervals of either component is
    /// disjoint from its counterpart in `other`.
    pub fn disjoint(&self, other: &Self) -> bool {
        self.z1.disjoint(other.z1) || self.z2.disjoint(other.z2)
    }

    /// `true` iff every component of `self` is contained in the matching
    /// component of `other`.
    pub fn subset(&self, other: &Self) -> bool {
        self.z1.subset(other.z1) && self.z2.subset(other.z2)
    }

    /// Locate the widest axis among the four (`z1.re`, `z1.im`, `z2.re`,
    /// `z2.im`), breaking ties by preferring `z1` over `z2` and the real
    /// axis over the imaginary axis, then cut that real interval at its
    /// midpoint. Produces two boxes identical to `self` except on the cut
    /// axis.
    pub fn split(&self) -> (Self, Self, SplitAxis) {
        let (z1_re, z1_im, z2_re, z2_im) = self.widths();

        // Tie-break order mirrors the candidate order: z1 before z2, real
        // before imaginary. A strict `>` comparison against the running
        // maximum preserves that precedence.
        let mut axis = SplitAxis::Z1Re;
        let mut max_width = z1_re;
        if z1_im > max_width {
            axis = SplitAxis::Z1Im;
            max_width = z1_im;
        }
        if z2_re > max_width {
            axis = SplitAxis::Z2Re;
            max_width = z2_re;
        }
        if z2_im > max_width {
            axis = SplitAxis::Z2Im;
        }

        let (left, right) = match axis {
            SplitAxis::Z1Re => {
                let (lo, hi) = split_interval(self.z1.re);
                (
                    Self::new(ComplexInterval::new(lo, self.z1.im), self.z2),
                    Self::new(ComplexInterval::new(hi, self.z1.im), self.z2),
                )
            }
            SplitAxis::Z1Im => {
                let (lo, hi) = split_interval(self.z1.im);
                (
                    Self::new(ComplexInterval::new(self.z1.re, lo), self.z2),
                    Self::new(ComplexInterval::new(self.z1.re, hi), self.z2),
                )
            }
            SplitAxis::Z2Re => {
                let (lo, hi) = split_interval(self.z2.re);
                (
                    Self::new(self.z1, ComplexInterval::new(lo, self.z2.im)),
                    Self::new(self.z1, ComplexInterval::new(hi, self.z2.im)),
                )
            }
            SplitAxis::Z2Im => {
                let (lo, hi) = split_interval(self.z2.im);
                (
                    Self::new(self.z1, ComplexInterval::new(self.z2.re, lo)),
                    Self::new(self.z1, ComplexInterval::new(self.z2.re, hi)),
                )
            }
        };

        (left, right, axis)
    }
}

/// Cut `iv` at its midpoint, returning `([lo, mid], [mid, hi])`.
fn split_interval(iv: Interval) -> (Interval, Interval) {
    let m = iv.mid();
    (
        Interval::new(iv.lo, m).expect("midpoint cannot invert a valid interval's bounds"),
        Interval::new(m, iv.hi).expect("midpoint cannot invert a valid interval's bounds"),
    )
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
    fn split_picks_widest_axis() {
        // z2.im is by far the widest axis.
        let b = Box2::new(ci(-1.0, 1.0, -1.0, 1.0), ci(-1.0, 1.0, -100.0, 100.0));
        let (_, _, axis) = b.split();
        assert_eq!(axis, SplitAxis::Z2Im);
    }

    #[test]
    fn split_ties_prefer_z1_then_real() {
        // All four axes equally wide: must pick z1.re.
        let b = Box2::new(ci(-1.0, 1.0, -1.0, 1.0), ci(-1.0, 1.0, -1.0, 1.0));
        let (_, _, axis) = b.split();
        assert_eq!(axis, SplitAxis::Z1Re);
    }

    #[test]
    fn split_children_partition_parent() {
        let b = Box2::new(ci(-1.0, 1.0, -1.0, 1.0), ci(-1.0, 1.0, -1.0, 1.0));
        let (left, right, _) = b.split();

        // Each child is a strict subset of the parent (at least one axis shrank).
        assert!(left.subset(&b));
        assert!(right.subset(&b));
        assert_ne!(left, b);
        assert_ne!(right, b);

        // The children's union (the hull on the cut axis) reconstructs the parent.
        assert_eq!(left.z1.re.lo, b.z1.re.lo);
        assert_eq!(right.z1.re.hi, b.z1.re.hi);
        assert_eq!(left.z1.re.hi, right.z1.re.lo);
    }

    #[test]
    fn subset_and_disjoint_delegate_to_components() {
        let inner = Box2::new(ci(0.0, 1.0, 0.0, 1.0), ci(0.0, 1.0, 0.0, 1.0));
        let outer = Box2::new(ci(-1.0, 2.0, -1.0, 2.0), ci(-1.0, 2.0, -1.0, 2.0));
        assert!(inner.subset(&outer));

        let far = Box2::new(ci(10.0, 11.0, 10.0, 11.0), ci(10.0, 11.0, 10.0, 11.0));
        assert!(inner.disjoint(&far));
    }

    #[test]
    fn intersect_empty_when_any_axis_disjoint() {
        let a = Box2::new(ci(0.0, 1.0, 0.0, 1.0), ci(0.0, 1.0, 0.0, 1.0));
        let b = Box2::new(ci(0.0, 1.0, 0.0, 1.0), ci(5.0, 6.0, 5.0, 6.0));
        assert!(a.intersect(&b).is_none());
    }

    #[test]
    fn mid_is_degenerate() {
        let b = Box2::new(ci(-1.0, 1.0, -1.0, 1.0), ci(-1.0, 1.0, -1.0, 1.0));
        let m = b.mid();
        assert_eq!(m.widths(), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(m.z1.re.lo, 0.0);
    }
}
