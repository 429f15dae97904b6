//! Gaussian-product combination of primitives within a shell tuple, and of bra primitive pairs
//! with ket primitive pairs.

use approx;
use itertools::iproduct;
use nalgebra::Point3;

use crate::auxiliary::geometry::{centre_of_charge, squared_distance, Centre, Exponent, Zero};
use crate::integrals::shell_tuple::ShellTuple;

#[cfg(test)]
#[path = "primitives_tests.rs"]
mod primitives_tests;

// =============
// PrimitivePair
// =============

/// The Gaussian-product combination of one primitive from each member of a shell tuple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimitivePair {
    /// The product of the two contraction coefficients and the Gaussian-product prefactor,
    /// $`C_i C_j \exp\left[-\frac{a_i a_j}{a_i + a_j} r_{ij}^2\right]`$.
    pub e: f64,

    /// The combined exponent $`a_i + a_j`$.
    pub a: f64,

    /// The exponent-weighted centre of the two primitives.
    pub ra: Point3<f64>,
}

// ==============
// BraKetPrimitive
// ==============

/// The combination of a bra primitive pair with a ket primitive pair, ready for quadrature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BraKetPrimitive {
    /// The scalar $`\frac{e_{\mathrm{bra}} e_{\mathrm{ket}}}{A B \sqrt{A + B}}`$.
    pub c: f64,

    /// The combined exponent $`A`$ of the bra pair.
    pub a: f64,

    /// The combined centre of the bra pair.
    pub ra: Point3<f64>,

    /// The combined exponent $`B`$ of the ket pair.
    pub b: f64,

    /// The combined centre of the ket pair.
    pub rb: Point3<f64>,
}

// =========
// Functions
// =========

/// Returns the exponential factor of the Gaussian Product Theorem,
/// $`\exp\left[-\frac{a_i a_j}{a_i + a_j} r_{ij}^2\right]`$.
///
/// When one exponent is the exact zero of a unit shell, the factor is
/// $`\exp\left[-a r_{ij}^2 / a\right]`$ with the finite exponent $`a`$; unit shells coincide
/// with their partner, so in practice $`r_{ij}^2 = 0`$ and the factor is one.
#[inline]
#[must_use]
pub fn gaussian_product_exp(ai: Exponent, aj: Exponent, rij2: f64) -> f64 {
    match (ai, aj) {
        (Exponent::Finite(ai), Exponent::Finite(aj)) => (-ai * aj * rij2 / (ai + aj)).exp(),
        (Exponent::Finite(a), Exponent::Zero(_)) | (Exponent::Zero(_), Exponent::Finite(a)) => {
            (-a * rij2 / a).exp()
        }
        (Exponent::Zero(_), Exponent::Zero(_)) => 1.0,
    }
}

/// Resolves the centre of a tuple member. Unit members are coordinate-free, so whatever centre
/// is supplied for them is replaced by the zero placeholder.
fn member_centre<'a>(is_unit: bool, supplied: Centre<'a>, partner: Centre<'_>) -> Centre<'a> {
    match (is_unit, supplied) {
        (true, Centre::Real(r)) => {
            let coincident = partner
                .real()
                .map_or(false, |p| approx::relative_eq!(*r, *p));
            if !coincident {
                log::warn!(
                    "A unit shell was given the centre {r}, which does not coincide with its partner; it is treated as coincident."
                );
            }
            Centre::Zero(Zero)
        }
        (false, Centre::Zero(_)) => {
            log::warn!(
                "A real shell was given the zero placeholder as its centre; it is treated as coincident with its partner."
            );
            supplied
        }
        _ => supplied,
    }
}

/// Applies the Gaussian Product Theorem to every pair of primitives drawn from the two members
/// of a shell tuple.
///
/// The primitives of the second member form the outer loop and those of the first member the
/// inner loop, so the pair of the `i`-th primitive of the first member and the `j`-th primitive
/// of the second member sits at index `j * nprims(first) + i`. Exactly `tuple.nprims()` pairs are
/// produced.
///
/// # Arguments
///
/// * `tuple` - The shell tuple.
/// * `ri` - The centre of the first member.
/// * `rj` - The centre of the second member, or [`Centre::Zero`] if the second member is a unit
///   shell.
///
/// A real member must be given a real centre. Passing [`Centre::Zero`] for a real member is
/// outside the contract of this function: a warning is logged and the member is taken to sit on
/// its partner's centre.
///
/// # Returns
///
/// The primitive pairs.
pub fn primitive_pairs(tuple: &ShellTuple, ri: Centre<'_>, rj: Centre<'_>) -> Vec<PrimitivePair> {
    let p = tuple.first();
    let q = tuple.second();
    let ri = member_centre(p.is_unit(), ri, rj);
    let rj = member_centre(q.is_unit(), rj, ri);
    let rij2 = squared_distance(ri, rj);

    let mut pairs = Vec::with_capacity(p.nprims() * q.nprims());
    for (aj, cj) in q.primitives() {
        for (ai, ci) in p.primitives() {
            pairs.push(PrimitivePair {
                e: ci * cj * gaussian_product_exp(ai, aj, rij2),
                a: (ai + aj).value(),
                ra: centre_of_charge(ai, ri, aj, rj),
            });
        }
    }
    log::debug!(
        "Computed {} primitive pair{} for shell tuple ({tuple}).",
        pairs.len(),
        if pairs.len() == 1 { "" } else { "s" }
    );
    pairs
}

/// Combines a bra primitive pair with a ket primitive pair.
///
/// # Arguments
///
/// * `bra` - A primitive pair from the bra.
/// * `ket` - A primitive pair from the ket.
///
/// # Returns
///
/// The combined scalar together with the combined exponents and centres of the bra and the ket.
#[inline]
#[must_use]
pub fn bra_ket_primitive(bra: &PrimitivePair, ket: &PrimitivePair) -> BraKetPrimitive {
    let a = bra.a;
    let b = ket.a;
    let c = (bra.e * ket.e) / (a * b * (a + b).sqrt());
    BraKetPrimitive {
        c,
        a,
        ra: bra.ra,
        b,
        rb: ket.ra,
    }
}

/// Combines every bra primitive pair with every ket primitive pair.
///
/// The ket pairs form the outer loop and the bra pairs the inner loop.
pub fn bra_ket_primitives(bra: &[PrimitivePair], ket: &[PrimitivePair]) -> Vec<BraKetPrimitive> {
    let mut prims = Vec::with_capacity(bra.len() * ket.len());
    prims.extend(iproduct!(ket.iter(), bra.iter()).map(|(k, b)| bra_ket_primitive(b, k)));
    prims
}
