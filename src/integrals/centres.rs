//! Selection of the four centres of a bra/ket combination.

use std::fmt;

use nalgebra::Point3;

use crate::auxiliary::geometry::{Centre, Zero};
use crate::basis::ao::ConfigurationError;
use crate::integrals::shell_tuple::{Arity, Bra, Ket};

#[cfg(test)]
#[path = "centres_tests.rs"]
mod centres_tests;

/// The centres $`\mathbf{r}_i, \mathbf{r}_j, \mathbf{r}_k, \mathbf{r}_l`$ of the first and second
/// members of a bra and the first and second members of a ket.
///
/// Every supported arity combination is exposed through the same four accessors. Positions
/// occupied by unit shells read as [`Centre::Zero`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Centres<'a> {
    /// A bra of arity two with a ket of arity two.
    BraKet22 {
        ri: &'a Point3<f64>,
        rj: &'a Point3<f64>,
        rk: &'a Point3<f64>,
        rl: &'a Point3<f64>,
    },

    /// A bra of arity two with a ket of arity one.
    BraKet21 {
        ri: &'a Point3<f64>,
        rj: &'a Point3<f64>,
        rk: &'a Point3<f64>,
    },

    /// A bra of arity one with a ket of arity one.
    BraKet11 {
        ri: &'a Point3<f64>,
        rk: &'a Point3<f64>,
    },
}

impl<'a> Centres<'a> {
    /// Centres for a two-shell bra and a two-shell ket.
    #[must_use]
    pub fn bra2_ket2(
        ri: &'a Point3<f64>,
        rj: &'a Point3<f64>,
        rk: &'a Point3<f64>,
        rl: &'a Point3<f64>,
    ) -> Self {
        Centres::BraKet22 { ri, rj, rk, rl }
    }

    /// Centres for a two-shell bra and a one-shell ket.
    #[must_use]
    pub fn bra2_ket1(ri: &'a Point3<f64>, rj: &'a Point3<f64>, rk: &'a Point3<f64>) -> Self {
        Centres::BraKet21 { ri, rj, rk }
    }

    /// Centres for a one-shell bra and a one-shell ket.
    #[must_use]
    pub fn bra1_ket1(ri: &'a Point3<f64>, rk: &'a Point3<f64>) -> Self {
        Centres::BraKet11 { ri, rk }
    }

    /// Selects the centres matching the arities of a bra and a ket.
    ///
    /// # Arguments
    ///
    /// * `bra` - The bra tuple.
    /// * `ket` - The ket tuple.
    /// * `rs` - The centres of the real shells, in the order bra first, bra second (if any), ket
    ///   first, ket second (if any).
    ///
    /// # Errors
    ///
    /// Errors if the arity combination is not supported, or if the number of centres supplied
    /// does not match the number of real shells.
    pub fn for_tuples(
        bra: &Bra,
        ket: &Ket,
        rs: &[&'a Point3<f64>],
    ) -> Result<Self, ConfigurationError> {
        match (bra.arity(), ket.arity(), rs) {
            (Arity::Two, Arity::Two, &[ri, rj, rk, rl]) => Ok(Self::bra2_ket2(ri, rj, rk, rl)),
            (Arity::Two, Arity::One, &[ri, rj, rk]) => Ok(Self::bra2_ket1(ri, rj, rk)),
            (Arity::One, Arity::One, &[ri, rk]) => Ok(Self::bra1_ket1(ri, rk)),
            (Arity::One, Arity::Two, _) => Err(ConfigurationError(
                "A one-shell bra with a two-shell ket is not supported; swap the bra and the ket."
                    .to_string(),
            )),
            (bra_arity, ket_arity, _) => Err(ConfigurationError(format!(
                "A ({bra_arity}, {ket_arity}) bra/ket combination requires {} centres, but {} were given.",
                bra_arity as usize + ket_arity as usize,
                rs.len()
            ))),
        }
    }

    /// The arities of the bra and the ket.
    #[inline]
    pub fn arities(&self) -> (Arity, Arity) {
        match self {
            Centres::BraKet22 { .. } => (Arity::Two, Arity::Two),
            Centres::BraKet21 { .. } => (Arity::Two, Arity::One),
            Centres::BraKet11 { .. } => (Arity::One, Arity::One),
        }
    }

    /// The centre of the first member of the bra.
    #[inline]
    pub fn ri(&self) -> Centre<'a> {
        match *self {
            Centres::BraKet22 { ri, .. }
            | Centres::BraKet21 { ri, .. }
            | Centres::BraKet11 { ri, .. } => Centre::Real(ri),
        }
    }

    /// The centre of the second member of the bra.
    #[inline]
    pub fn rj(&self) -> Centre<'a> {
        match *self {
            Centres::BraKet22 { rj, .. } | Centres::BraKet21 { rj, .. } => Centre::Real(rj),
            Centres::BraKet11 { .. } => Centre::Zero(Zero),
        }
    }

    /// The centre of the first member of the ket.
    #[inline]
    pub fn rk(&self) -> Centre<'a> {
        match *self {
            Centres::BraKet22 { rk, .. }
            | Centres::BraKet21 { rk, .. }
            | Centres::BraKet11 { rk, .. } => Centre::Real(rk),
        }
    }

    /// The centre of the second member of the ket.
    #[inline]
    pub fn rl(&self) -> Centre<'a> {
        match *self {
            Centres::BraKet22 { rl, .. } => Centre::Real(rl),
            Centres::BraKet21 { .. } | Centres::BraKet11 { .. } => Centre::Zero(Zero),
        }
    }

    /// All four centres in the order $`(i, j, k, l)`$.
    #[inline]
    pub fn all(&self) -> [Centre<'a>; 4] {
        [self.ri(), self.rj(), self.rk(), self.rl()]
    }
}

impl<'a> fmt::Display for Centres<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (bra_arity, ket_arity) = self.arities();
        writeln!(f, "Centres ({bra_arity}, {ket_arity}):")?;
        for (label, centre) in ["i", "j", "k", "l"].iter().zip(self.all()) {
            match centre {
                Centre::Real(r) => {
                    writeln!(f, "  r{label} = ({:+.7}, {:+.7}, {:+.7})", r.x, r.y, r.z)?
                }
                Centre::Zero(z) => writeln!(f, "  r{label} = {z}")?,
            }
        }
        Ok(())
    }
}
