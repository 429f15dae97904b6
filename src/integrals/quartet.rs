//! Host-side assembly of a bra, a ket and their centres into the primitive data consumed by
//! Rys quadrature.

use std::fmt;

use anyhow::{self, Context};
use nalgebra::Point3;

use crate::basis::ao::ConfigurationError;
use crate::integrals::centres::Centres;
use crate::integrals::primitives::{
    bra_ket_primitives, primitive_pairs, BraKetPrimitive, PrimitivePair,
};
use crate::integrals::shell_tuple::{Bra, Ket};

#[cfg(test)]
#[path = "quartet_tests.rs"]
mod quartet_tests;

/// A bra and a ket together with the centres of their members.
#[derive(Clone, Copy, Debug)]
pub struct ShellQuartet<'a> {
    /// The bra tuple.
    bra: &'a Bra,

    /// The ket tuple.
    ket: &'a Ket,

    /// The centres of the bra and ket members.
    centres: Centres<'a>,
}

impl<'a> ShellQuartet<'a> {
    /// Constructs a new [`ShellQuartet`].
    ///
    /// # Errors
    ///
    /// Errors if the arities implied by `centres` do not match those of `bra` and `ket`.
    pub fn new(
        bra: &'a Bra,
        ket: &'a Ket,
        centres: Centres<'a>,
    ) -> Result<Self, ConfigurationError> {
        let (bra_arity, ket_arity) = centres.arities();
        if bra_arity != bra.arity() || ket_arity != ket.arity() {
            return Err(ConfigurationError(format!(
                "Centres for a ({bra_arity}, {ket_arity}) combination cannot be used with a ({}, {}) bra/ket.",
                bra.arity(),
                ket.arity()
            )));
        }
        Ok(Self { bra, ket, centres })
    }

    /// Constructs a new [`ShellQuartet`], selecting the centres from the arities of `bra` and
    /// `ket`.
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
    /// Errors if the centres cannot be selected for the given bra and ket.
    pub fn from_points(
        bra: &'a Bra,
        ket: &'a Ket,
        rs: &[&'a Point3<f64>],
    ) -> Result<Self, anyhow::Error> {
        let centres = Centres::for_tuples(bra, ket, rs)
            .with_context(|| format!("Unable to select centres for the ({bra}|{ket}) quartet."))?;
        Ok(Self::new(bra, ket, centres)?)
    }

    /// The bra tuple.
    pub fn bra(&self) -> &'a Bra {
        self.bra
    }

    /// The ket tuple.
    pub fn ket(&self) -> &'a Ket {
        self.ket
    }

    /// The centres of the bra and ket members.
    pub fn centres(&self) -> &Centres<'a> {
        &self.centres
    }

    /// The total angular momentum of the quartet.
    pub fn l(&self) -> u32 {
        self.bra.l() + self.ket.l()
    }

    /// The number of basis-function products in the quartet.
    pub fn nbf(&self) -> usize {
        self.bra.nbf() * self.ket.nbf()
    }

    /// The number of bra/ket primitive combinations in the quartet.
    pub fn nprims(&self) -> usize {
        self.bra.nprims() * self.ket.nprims()
    }

    /// The Gaussian-product primitive pairs of the bra.
    pub fn bra_pairs(&self) -> Vec<PrimitivePair> {
        primitive_pairs(self.bra, self.centres.ri(), self.centres.rj())
    }

    /// The Gaussian-product primitive pairs of the ket.
    pub fn ket_pairs(&self) -> Vec<PrimitivePair> {
        primitive_pairs(self.ket, self.centres.rk(), self.centres.rl())
    }

    /// Every bra/ket primitive combination of the quartet, with the ket pairs in the outer loop
    /// and the bra pairs in the inner loop.
    pub fn primitives(&self) -> Vec<BraKetPrimitive> {
        let prims = bra_ket_primitives(&self.bra_pairs(), &self.ket_pairs());
        log::debug!(
            "Prepared {} bra/ket primitive combinations for the ({}|{}) quartet.",
            prims.len(),
            self.bra,
            self.ket
        );
        prims
    }
}

impl<'a> fmt::Display for ShellQuartet<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.bra, self.ket)
    }
}
