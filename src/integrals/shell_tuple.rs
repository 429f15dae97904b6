//! Bra and ket tuples of shells.

use std::fmt;

use crate::basis::ao::{Shell, ShellView, UnitShell};

#[cfg(test)]
#[path = "shell_tuple_tests.rs"]
mod shell_tuple_tests;

// =====
// Arity
// =====

/// The number of real shells in a [`ShellTuple`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arity {
    /// One real shell paired with an implicit unit shell.
    One = 1,

    /// Two real shells.
    Two = 2,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

// ======
// Member
// ======

/// The logical position of a shell in a [`ShellTuple`].
///
/// Only two positions exist, so an out-of-range member cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Member {
    /// Position 0.
    First,

    /// Position 1.
    Second,
}

// ==========
// ShellTuple
// ==========

/// An ordered pair of shell-like entities forming the bra or the ket of a four-centre integral.
///
/// The first member is always a real [`Shell`]. The second member is either another real shell
/// or, for one-centre terms, a [`UnitShell`] that is never stored but produced on access.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellTuple {
    first: Shell,
    second: Option<Shell>,
}

/// A shell tuple on the bra side.
pub type Bra = ShellTuple;

/// A shell tuple on the ket side.
pub type Ket = ShellTuple;

impl ShellTuple {
    /// Constructs a tuple of arity one, pairing `first` with an implicit unit shell.
    #[must_use]
    pub fn single(first: Shell) -> Self {
        Self {
            first,
            second: None,
        }
    }

    /// Constructs a tuple of arity two.
    #[must_use]
    pub fn pair(first: Shell, second: Shell) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// The number of real shells in this tuple.
    #[inline]
    pub fn arity(&self) -> Arity {
        if self.second.is_some() {
            Arity::Two
        } else {
            Arity::One
        }
    }

    /// The first member, which is always a real shell.
    #[inline]
    pub fn first(&self) -> ShellView<'_> {
        ShellView::Real(&self.first)
    }

    /// The second member. For a tuple of arity one this is a fresh [`UnitShell`].
    #[inline]
    pub fn second(&self) -> ShellView<'_> {
        match self.second.as_ref() {
            Some(shell) => ShellView::Real(shell),
            None => ShellView::Unit(UnitShell),
        }
    }

    /// The member at a logical position.
    #[inline]
    pub fn get(&self, member: Member) -> ShellView<'_> {
        match member {
            Member::First => self.first(),
            Member::Second => self.second(),
        }
    }

    /// The real shells of this tuple, in order.
    pub fn shells(&self) -> impl Iterator<Item = &Shell> + '_ {
        std::iter::once(&self.first).chain(self.second.iter())
    }

    /// The total angular momentum of this tuple.
    #[inline]
    pub fn l(&self) -> u32 {
        self.first().l() + self.second().l()
    }

    /// The number of basis-function products in this tuple.
    #[inline]
    pub fn nbf(&self) -> usize {
        self.first().nbf() * self.second().nbf()
    }

    /// The number of primitive pairs in this tuple.
    #[inline]
    pub fn nprims(&self) -> usize {
        self.first().nprims() * self.second().nprims()
    }
}

impl fmt::Display for ShellTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second.as_ref() {
            Some(second) => write!(f, "{}{}", self.first.l(), second.l()),
            None => write!(f, "{}", self.first.l()),
        }
    }
}

/// The total angular momentum of a shell tuple.
#[inline]
pub fn l(tuple: &ShellTuple) -> u32 {
    tuple.l()
}

/// The number of basis-function products of a shell tuple.
#[inline]
pub fn nbf(tuple: &ShellTuple) -> usize {
    tuple.nbf()
}

/// The number of primitive pairs of a shell tuple.
#[inline]
pub fn nprims(tuple: &ShellTuple) -> usize {
    tuple.nprims()
}
