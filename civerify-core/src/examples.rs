use crate::box2::Box2;
use crate::complex_interval::ComplexInterval;
use crate::error::CoreError;
use crate::interval::Interval;
use crate::oracle::{Axis, Oracle};

/// Built-in example maps `F: ℂ² → ℂ²`, selectable from the CLI by name.
///
/// Each variant implements the [`Oracle`] contract with a hand-derived
/// closed-form derivative rather than a generic automatic-differentiation
/// trace — see the crate docs for why a general AD kernel is out of scope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceOracle {
    /// `F(z1, z2) = (z1, z2)`. One zero at the origin.
    Identity,
    /// `F(z1, z2) = (z1² − 1, z2)`. Two zeros at `(±1, 0)`.
    Trivial,
    /// `F(z1, z2) = (z1² + 4, z2² + 4)`. No real-axis-adjacent zeros in a
    /// small domain around the origin.
    NoZeros,
    /// `F(z1, z2) = (z1 − p, z2)`. Exercises the scalar parameter.
    ParamShift,
    /// `F(z1, z2) = (z1·z2, z1·z2)`. Jacobian is everywhere singular along
    /// `z1 = z2 = 0`, forcing indecision until the step cap.
    Product,
    /// The degree-5/4 polynomial system carried over from the original
    /// implementation's "Example 2".
    Polynomial,
}

impl ReferenceOracle {
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Trivial => "trivial",
            Self::NoZeros => "no-zeros",
            Self::ParamShift => "param-shift",
            Self::Product => "product",
            Self::Polynomial => "polynomial",
        }
    }

    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            "identity" => Ok(Self::Identity),
            "trivial" => Ok(Self::Trivial),
            "no-zeros" => Ok(Self::NoZeros),
            "param-shift" => Ok(Self::ParamShift),
            "product" => Ok(Self::Product),
            "polynomial" => Ok(Self::Polynomial),
            other => Err(CoreError::UnknownOracle(other.to_string())),
        }
    }
}

#[inline]
fn real(x: f64) -> ComplexInterval {
    ComplexInterval::point(x, 0.0)
}

#[inline]
fn k(x: f64) -> Interval {
    Interval::point(x)
}

impl Oracle for ReferenceOracle {
    fn evaluate(&self, box_: &Box2, p: Interval) -> (ComplexInterval, ComplexInterval, bool) {
        let z1 = box_.z1;
        let z2 = box_.z2;
        match self {
            Self::Identity => (z1, z2, true),
            Self::Trivial => (z1.sqr().sub(real(1.0)), z2, true),
            Self::NoZeros => (z1.sqr().add(real(4.0)), z2.sqr().add(real(4.0)), true),
            Self::ParamShift => (z1.sub_real(p), z2, true),
            Self::Product => {
                let f = z1.mul(z2);
                (f, f, true)
            }
            Self::Polynomial => {
                let f1 = z1
                    .powi(5)
                    .mul(z2.sqr())
                    .scale_real(k(4e-5))
                    .add(z1.mul(z2.powi(4)).scale_real(k(2e-3)))
                    .add(z1.sqr().mul(z2).scale_real(k(2.0)))
                    .sub(z2)
                    .add(real(0.75));
                let f2 = z1
                    .mul(z2.powi(4))
                    .scale_real(k(3e-4))
                    .sub(z1.powi(3).scale_real(k(7e-6)))
                    .add(z1.mul(z2.sqr()).scale_real(k(2.0)))
                    .sub(z1)
                    .add(real(0.75));
                (f1, f2, true)
            }
        }
    }

    fn derivative(
        &self,
        box_: &Box2,
        axis: Axis,
        _p: Interval,
    ) -> (ComplexInterval, ComplexInterval, bool) {
        let z1 = box_.z1;
        let z2 = box_.z2;
        let zero = ComplexInterval::ZERO;
        let one = real(1.0);
        match (self, axis) {
            (Self::Identity, Axis::Z1) => (one, zero, true),
            (Self::Identity, Axis::Z2) => (zero, one, true),

            (Self::Trivial, Axis::Z1) => (z1.scale_real(k(2.0)), zero, true),
            (Self::Trivial, Axis::Z2) => (zero, one, true),

            (Self::NoZeros, Axis::Z1) => (z1.scale_real(k(2.0)), zero, true),
            (Self::NoZeros, Axis::Z2) => (zero, z2.scale_real(k(2.0)), true),

            (Self::ParamShift, Axis::Z1) => (one, zero, true),
            (Self::ParamShift, Axis::Z2) => (zero, one, true),

            (Self::Product, Axis::Z1) => (z2, z2, true),
            (Self::Product, Axis::Z2) => (z1, z1, true),

            (Self::Polynomial, Axis::Z1) => {
                let df1 = z1
                    .powi(4)
                    .mul(z2.sqr())
                    .scale_real(k(2e-4))
                    .add(z2.powi(4).scale_real(k(2e-3)))
                    .add(z1.mul(z2).scale_real(k(4.0)));
                let df2 = z2
                    .powi(4)
                    .scale_real(k(3e-4))
                    .sub(z1.sqr().scale_real(k(2.1e-5)))
                    .add(z2.sqr().scale_real(k(2.0)))
                    .sub(one);
                (df1, df2, true)
            }
            (Self::Polynomial, Axis::Z2) => {
                let df1 = z1
                    .powi(5)
                    .mul(z2)
                    .scale_real(k(8e-5))
                    .add(z1.mul(z2.powi(3)).scale_real(k(8e-3)))
                    .add(z1.sqr().scale_real(k(2.0)))
                    .sub(one);
                let df2 = z1
                    .mul(z2.powi(3))
                    .scale_real(k(1.2e-3))
                    .add(z1.mul(z2).scale_real(k(4.0)));
                (df1, df2, true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn point_box(re1: f64, im1: f64, re2: f64, im2: f64) -> Box2 {
        Box2::new(
            ComplexInterval::point(re1, im1),
            ComplexInterval::point(re2, im2),
        )
    }

    #[test]
    fn parse_round_trips_names() {
        for name in ["identity", "trivial", "no-zeros", "param-shift", "product", "polynomial"] {
            let oracle = ReferenceOracle::parse(name).unwrap();
            assert_eq!(oracle.name(), name);
        }
    }

    #[test]
    fn parse_rejects_unknown_name() {
        assert!(ReferenceOracle::parse("bogus").is_err());
    }

    #[test]
    fn identity_vanishes_at_origin() {
        let oracle = ReferenceOracle::Identity;
        let b = point_box(0.0, 0.0, 0.0, 0.0);
        let (f1, f2, ok) = oracle.evaluate(&b, Interval::ZERO);
        assert!(ok);
        assert!(f1.contains_zero());
        assert!(f2.contains_zero());
    }

    #[test]
    fn trivial_vanishes_at_plus_and_minus_one() {
        let oracle = ReferenceOracle::Trivial;
        for z1 in [1.0, -1.0] {
            let b = point_box(z1, 0.0, 0.0, 0.0);
            let (f1, f2, ok) = oracle.evaluate(&b, Interval::ZERO);
            assert!(ok);
            assert!(f1.contains_zero());
            assert!(f2.contains_zero());
        }
    }

    #[test]
    fn no_zeros_never_contains_zero_near_origin() {
        let oracle = ReferenceOracle::NoZeros;
        let b = point_box(0.0, 0.0, 0.0, 0.0);
        let (f1, f2, ok) = oracle.evaluate(&b, Interval::ZERO);
        assert!(ok);
        assert!(!f1.contains_zero());
        assert!(!f2.contains_zero());
    }

    #[test]
    fn param_shift_tracks_parameter() {
        let oracle = ReferenceOracle::ParamShift;
        let b = point_box(0.3, 0.0, 0.0, 0.0);
        let (f1, _, ok) = oracle.evaluate(&b, Interval::point(0.3));
        assert!(ok);
        assert!(f1.contains_zero());

        let (f1_off, _, ok2) = oracle.evaluate(&b, Interval::point(5.0));
        assert!(ok2);
        assert!(!f1_off.contains_zero());
    }

    #[test]
    fn product_vanishes_whenever_either_coordinate_is_zero() {
        let oracle = ReferenceOracle::Product;
        let b = point_box(0.0, 0.0, 3.0, 0.0);
        let (f1, f2, ok) = oracle.evaluate(&b, Interval::ZERO);
        assert!(ok);
        assert!(f1.contains_zero());
        assert!(f2.contains_zero());
    }

    #[test]
    fn derivative_of_identity_is_the_identity_matrix() {
        let oracle = ReferenceOracle::Identity;
        let b = point_box(1.0, 1.0, 1.0, 1.0);
        let (d1, d2, ok) = oracle.derivative(&b, Axis::Z1, Interval::ZERO);
        assert!(ok);
        assert!((d1.re.mid() - 1.0).abs() < 1e-9);
        assert!(d2.re.mid().abs() < 1e-9);
    }
}
