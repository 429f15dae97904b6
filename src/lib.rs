//! # rysq-shell: shells and primitive pairs for Rys-quadrature integrals
//!
//! This crate provides the shared data layer that feeds a Rys-quadrature evaluation of
//! four-centre electron-repulsion integrals:
//! - contracted shells of Cartesian Gaussians with their orbitals enumerated in a fixed
//!   lexicographic order,
//! - unit shells standing in for point sources in one-centre terms,
//! - bra and ket tuples of one or two shells,
//! - Gaussian-product combination of primitive pairs within a tuple, and of bra pairs with
//!   ket pairs, and
//! - a uniform four-centre view in which unit shells occupy zero placeholders.
//!
//! The quadrature roots and weights, the recursion relations and the contraction of the final
//! integrals live downstream and are not part of this crate.
//!
//! ## Execution contexts
//!
//! Everything in [`angmom`], [`auxiliary`], [`basis`], [`integrals::shell_tuple`],
//! [`integrals::centres`] and [`integrals::primitives::bra_ket_primitive`] works on plain data,
//! does not allocate, and does not dispatch dynamically, so it can be called from any execution
//! context. Only shell construction and the functions that return whole tables of primitive
//! combinations ([`integrals::primitives::primitive_pairs`],
//! [`integrals::primitives::bra_ket_primitives`] and [`integrals::quartet::ShellQuartet`])
//! allocate, and these are meant to run on the host.
//!
//! ## Examples and usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions.
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade. No logger is
//! installed by this crate.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

/// Returns the product of the numbers of basis functions of any number of shell-like values,
/// *i.e.* anything with an `nbf()` method.
///
/// ```
/// use rysq_shell::basis::ao::{Shell, UnitShell};
///
/// let p = Shell::single(1, 1.0, 1.0).unwrap();
/// let d = Shell::single(2, 1.0, 1.0).unwrap();
/// assert_eq!(rysq_shell::nbf![p, d, UnitShell], 18);
/// ```
#[macro_export]
macro_rules! nbf {
    ($($shell:expr),+ $(,)?) => {
        1usize $(* $shell.nbf())+
    };
}

pub mod angmom;
pub mod auxiliary;
pub mod basis;
pub mod integrals;
