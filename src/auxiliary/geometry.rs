//! Points, weights and the exact zero sentinel used by shells and primitive pairs.

use std::fmt;
use std::ops::Add;

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;

// ====
// Zero
// ====

/// An exact, non-floating zero.
///
/// This is used wherever a quantity must vanish by construction rather than numerically, *e.g.*
/// the exponent of a unit shell or the position of a unit shell. It is distinguishable at the
/// type level from a small-but-nonzero floating value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zero;

impl fmt::Display for Zero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0")
    }
}

// ========
// Exponent
// ========

/// A Gaussian exponent, which is either a finite positive value or the exact [`Zero`] carried by
/// unit shells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Exponent {
    /// A finite exponent $`\alpha > 0`$.
    Finite(f64),

    /// The exact zero exponent of a unit shell.
    Zero(Zero),
}

impl Exponent {
    /// The floating value of this exponent. [`Exponent::Zero`] maps to exactly `0.0`.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Exponent::Finite(a) => *a,
            Exponent::Zero(_) => 0.0,
        }
    }

    /// Returns `true` if this is the exact zero sentinel.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Exponent::Zero(_))
    }
}

impl From<f64> for Exponent {
    fn from(a: f64) -> Self {
        Exponent::Finite(a)
    }
}

impl From<Zero> for Exponent {
    fn from(z: Zero) -> Self {
        Exponent::Zero(z)
    }
}

impl Add for Exponent {
    type Output = Exponent;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Exponent::Zero(z), Exponent::Zero(_)) => Exponent::Zero(z),
            (Exponent::Finite(a), Exponent::Zero(_)) | (Exponent::Zero(_), Exponent::Finite(a)) => {
                Exponent::Finite(a)
            }
            (Exponent::Finite(a), Exponent::Finite(b)) => Exponent::Finite(a + b),
        }
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Finite(a) => write!(f, "{a:+.7e}"),
            Exponent::Zero(z) => write!(f, "{z}"),
        }
    }
}

// ======
// Centre
// ======

/// A reference to the Cartesian centre of a shell, or the zero placeholder of a unit shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Centre<'a> {
    /// A real centre.
    Real(&'a Point3<f64>),

    /// The placeholder of a coordinate-free unit shell.
    Zero(Zero),
}

impl<'a> Centre<'a> {
    /// Returns `true` if this is the zero placeholder.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Centre::Zero(_))
    }

    /// The real point, if any.
    #[inline]
    #[must_use]
    pub fn real(&self) -> Option<&'a Point3<f64>> {
        match self {
            Centre::Real(r) => Some(r),
            Centre::Zero(_) => None,
        }
    }

    /// The position as a point. The zero placeholder maps to the origin.
    #[inline]
    #[must_use]
    pub fn to_point(&self) -> Point3<f64> {
        match self {
            Centre::Real(r) => **r,
            Centre::Zero(_) => Point3::origin(),
        }
    }
}

impl<'a> From<&'a Point3<f64>> for Centre<'a> {
    fn from(r: &'a Point3<f64>) -> Self {
        Centre::Real(r)
    }
}

impl<'a> From<Zero> for Centre<'a> {
    fn from(z: Zero) -> Self {
        Centre::Zero(z)
    }
}

// =================
// Utility functions
// =================

/// Returns the squared distance $`\lvert \mathbf{r}_i - \mathbf{r}_j \rvert^2`$ between two
/// centres.
///
/// A [`Centre::Zero`] has no position of its own and coincides with whatever it is paired with,
/// so any pair involving it is at distance exactly zero.
#[inline]
#[must_use]
pub fn squared_distance(ri: Centre<'_>, rj: Centre<'_>) -> f64 {
    match (ri, rj) {
        (Centre::Real(ri), Centre::Real(rj)) => (ri - rj).norm_squared(),
        _ => 0.0,
    }
}

/// Returns the centre of charge
///
/// ```math
///     \frac{w_a \mathbf{r}_a + w_b \mathbf{r}_b}{w_a + w_b}.
/// ```
///
/// A [`Exponent::Zero`] weight contributes nothing, so the result is exactly the other point
/// without any rounding. A [`Centre::Zero`] position takes the position of its partner. If both
/// weights vanish, the first point is returned.
#[inline]
#[must_use]
pub fn centre_of_charge(
    wa: Exponent,
    ra: Centre<'_>,
    wb: Exponent,
    rb: Centre<'_>,
) -> Point3<f64> {
    let (pa, pb) = match (ra, rb) {
        (Centre::Real(pa), Centre::Real(pb)) => (*pa, *pb),
        (Centre::Real(pa), Centre::Zero(_)) => (*pa, *pa),
        (Centre::Zero(_), Centre::Real(pb)) => (*pb, *pb),
        (Centre::Zero(_), Centre::Zero(_)) => (Point3::origin(), Point3::origin()),
    };
    match (wa, wb) {
        (Exponent::Finite(wa), Exponent::Finite(wb)) => {
            Point3::from((pa.coords * wa + pb.coords * wb) / (wa + wb))
        }
        (Exponent::Finite(_), Exponent::Zero(_)) | (Exponent::Zero(_), Exponent::Zero(_)) => pa,
        (Exponent::Zero(_), Exponent::Finite(_)) => pb,
    }
}
