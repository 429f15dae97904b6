//! Cartesian Gaussian shells and their orbital enumeration.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use derive_builder::{Builder, UninitializedFieldError};
use itertools::{Either, Itertools};
use serde::{Deserialize, Serialize};

use crate::angmom::{angmom_label, nbf, MAX_CART, MAX_L};
use crate::auxiliary::geometry::{Exponent, Zero};

#[cfg(test)]
#[path = "ao_tests.rs"]
mod ao_tests;

// ==================
// ConfigurationError
// ==================

/// Error raised when a shell, or anything assembled from shells, cannot be constructed
/// consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError(pub String);

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Configuration error: {}", self.0)
    }
}

impl Error for ConfigurationError {}

impl From<UninitializedFieldError> for ConfigurationError {
    fn from(err: UninitializedFieldError) -> Self {
        ConfigurationError(err.to_string())
    }
}

// =======
// Orbital
// =======

/// A single Cartesian Gaussian $`x^{l_x} y^{l_y} z^{l_z}`$ within a shell, identified by its
/// exponent triple.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Orbital {
    /// The exponent of $`x`$.
    pub x: u16,

    /// The exponent of $`y`$.
    pub y: u16,

    /// The exponent of $`z`$.
    pub z: u16,
}

impl Orbital {
    /// Constructs an orbital from its exponent triple.
    #[inline]
    #[must_use]
    pub const fn new(x: u16, y: u16, z: u16) -> Self {
        Self { x, y, z }
    }

    /// The total Cartesian rank $`l_x + l_y + l_z`$.
    #[inline]
    #[must_use]
    pub fn l(&self) -> u32 {
        u32::from(self.x) + u32::from(self.y) + u32::from(self.z)
    }

    /// The exponent triple as a tuple.
    #[inline]
    #[must_use]
    pub fn as_tuple(&self) -> (u16, u16, u16) {
        (self.x, self.y, self.z)
    }

    /// Translates this orbital to a human-understandable string.
    ///
    /// # Arguments
    ///
    /// * `flat` - A flag indicating if the string representation is flat (*e.g.* `xxyz`) or
    ///   compact (*e.g.* `x^2yz`).
    pub fn label(&self, flat: bool) -> String {
        if self.l() == 0 {
            "1".to_string()
        } else {
            let carts = ["x", "y", "z"];
            [self.x, self.y, self.z]
                .iter()
                .enumerate()
                .map(|(i, &l)| {
                    if flat {
                        carts[i].repeat(usize::from(l))
                    } else {
                        match l.cmp(&1) {
                            Ordering::Greater => format!("{}^{l}", carts[i]),
                            Ordering::Equal => carts[i].to_string(),
                            Ordering::Less => String::new(),
                        }
                    }
                })
                .collect::<String>()
        }
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(true))
    }
}

/// Iterates over the Cartesian orbitals of rank `l` in lexicographic order.
///
/// For `k` in `0..=l` and then `z` in `0..=k`, the orbital $`(l - k, k - z, z)`$ is produced, so
/// that orbitals are grouped by decreasing $`x`$-exponent and then by decreasing $`y`$-exponent.
/// Downstream contraction indexes orbitals positionally, so this order is fixed.
///
/// This iterator does not allocate.
pub fn lex_orbitals(l: u16) -> impl Iterator<Item = Orbital> {
    (0..=l).flat_map(move |k| (0..=k).map(move |z| Orbital::new(l - k, k - z, z)))
}

// =========
// CartOrder
// =========

/// Fixed-capacity storage of the Cartesian orbitals of a certain rank in lexicographic order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartOrder {
    /// The rank of the Cartesian Gaussians.
    lcart: u32,

    /// The orbitals. Only the first `nbf(lcart)` entries are meaningful.
    orbitals: [Orbital; MAX_CART],
}

impl CartOrder {
    /// Constructs a new [`CartOrder`] structure for a specified rank with lexicographic order.
    ///
    /// # Errors
    ///
    /// Errors if the number of Cartesian components of rank `lcart` exceeds [`MAX_CART`].
    pub fn lex(lcart: u32) -> Result<Self, ConfigurationError> {
        if lcart > MAX_L || nbf(lcart) > MAX_CART {
            return Err(ConfigurationError(format!(
                "Angular momentum {lcart} requires {} Cartesian functions, but at most {MAX_CART} are supported.",
                nbf(lcart)
            )));
        }
        let l = u16::try_from(lcart).map_err(|err| ConfigurationError(err.to_string()))?;
        let mut orbitals = [Orbital::default(); MAX_CART];
        orbitals
            .iter_mut()
            .zip(lex_orbitals(l))
            .for_each(|(slot, orbital)| *slot = orbital);
        Ok(Self { lcart, orbitals })
    }

    /// The rank of the Cartesian Gaussians.
    #[inline]
    pub fn lcart(&self) -> u32 {
        self.lcart
    }

    /// Returns the number of Cartesian components in the shell.
    #[inline]
    pub fn ncomps(&self) -> usize {
        nbf(self.lcart)
    }

    /// The constituent orbitals.
    #[inline]
    pub fn as_slice(&self) -> &[Orbital] {
        &self.orbitals[..self.ncomps()]
    }

    /// Iterates over the constituent orbitals.
    pub fn iter(&'_ self) -> Iter<'_, Orbital> {
        self.as_slice().iter()
    }

    /// Returns the Cartesian component with a specified index in this shell.
    pub fn get(&self, i: usize) -> Option<&Orbital> {
        self.as_slice().get(i)
    }
}

impl fmt::Display for CartOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cart ({}) ({})",
            if self.lcart % 2 == 0 { "g" } else { "u" },
            self.iter().map(|orbital| orbital.label(true)).join(", ")
        )
    }
}

impl fmt::Debug for CartOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cartesian rank: {}", self.lcart)?;
        writeln!(f, "Order:")?;
        for orbital in self.iter() {
            writeln!(f, "  {:?}", orbital.as_tuple())?;
        }
        Ok(())
    }
}

// =========
// Primitive
// =========

/// A primitive Gaussian $`C \exp\left[-a \lvert \mathbf{r} - \mathbf{R} \rvert^2\right]`$ in a
/// contraction, characterised by its exponent $`a`$ and contraction coefficient $`C`$.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// The exponent $`a > 0`$.
    #[serde(rename = "exponent")]
    pub a: f64,

    /// The contraction coefficient $`C`$.
    #[serde(rename = "coefficient")]
    pub c: f64,
}

impl Primitive {
    /// Constructs a primitive from its exponent and contraction coefficient.
    #[inline]
    #[must_use]
    pub const fn new(a: f64, c: f64) -> Self {
        Self { a, c }
    }
}

impl From<(f64, f64)> for Primitive {
    fn from((a, c): (f64, f64)) -> Self {
        Self { a, c }
    }
}

// =====
// Shell
// =====

/// Structure representing a contracted shell of Cartesian Gaussians sharing an angular
/// momentum.
///
/// A shell is only ever observed fully constructed and is read-only thereafter, so it may be
/// shared freely between threads.
#[derive(Clone, Builder, PartialEq, Debug, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate", error = "ConfigurationError"))]
#[serde(try_from = "ShellRaw", into = "ShellRaw")]
pub struct Shell {
    /// The angular momentum of the shell, which is the sum of the Cartesian exponents of every
    /// orbital in it.
    l: u32,

    /// The Gaussian primitives in the contraction of this shell.
    #[builder(setter(custom))]
    primitives: Vec<Primitive>,

    /// The orbitals of this shell in lexicographic order.
    #[builder(setter(skip), default = "self.default_cart_order()?")]
    cart_order: CartOrder,
}

impl ShellBuilder {
    /// Sets the primitives of the contraction.
    pub fn primitives(&mut self, prims: &[Primitive]) -> &mut Self {
        self.primitives = Some(prims.to_vec());
        self
    }

    /// Appends a single primitive to the contraction.
    pub fn primitive(&mut self, a: f64, c: f64) -> &mut Self {
        self.primitives
            .get_or_insert_with(Vec::new)
            .push(Primitive::new(a, c));
        self
    }

    fn default_cart_order(&self) -> Result<CartOrder, ConfigurationError> {
        let l = self
            .l
            .ok_or_else(|| ConfigurationError("`l` has not been set.".to_string()))?;
        CartOrder::lex(l)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let res = self.check();
        if let Err(err) = res.as_ref() {
            log::error!("Shell rejected: {err}");
        }
        res
    }

    fn check(&self) -> Result<(), ConfigurationError> {
        if let Some(l) = self.l {
            if l > MAX_L || nbf(l) > MAX_CART {
                return Err(ConfigurationError(format!(
                    "Angular momentum {l} requires {} Cartesian functions, but at most {MAX_CART} are supported.",
                    nbf(l)
                )));
            }
        }
        if let Some(prims) = self.primitives.as_ref() {
            if prims.is_empty() {
                return Err(ConfigurationError(
                    "A shell must contain at least one primitive.".to_string(),
                ));
            }
            if let Some((i, prim)) = prims
                .iter()
                .find_position(|prim| !(prim.a.is_finite() && prim.a > 0.0))
            {
                return Err(ConfigurationError(format!(
                    "Primitive {i} has exponent {}, but exponents must be finite and positive.",
                    prim.a
                )));
            }
            if let Some((i, prim)) = prims.iter().find_position(|prim| !prim.c.is_finite()) {
                return Err(ConfigurationError(format!(
                    "Primitive {i} has a non-finite contraction coefficient {}.",
                    prim.c
                )));
            }
        }
        Ok(())
    }
}

impl Shell {
    /// Returns a builder to construct a new [`Shell`].
    pub fn builder() -> ShellBuilder {
        ShellBuilder::default()
    }

    /// Constructs a new contracted [`Shell`].
    ///
    /// # Arguments
    ///
    /// * `l` - The angular momentum of the shell.
    /// * `prims` - The primitives of the contraction, in order.
    ///
    /// # Errors
    ///
    /// Errors if `prims` is empty, if any primitive is invalid, or if the number of Cartesian
    /// functions of rank `l` exceeds [`MAX_CART`].
    pub fn new(l: u32, prims: &[Primitive]) -> Result<Self, ConfigurationError> {
        let shell = Self::builder().l(l).primitives(prims).build()?;
        log::debug!("Constructed shell {shell}.");
        Ok(shell)
    }

    /// Constructs a new [`Shell`] containing a single primitive.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn single(l: u32, a: f64, c: f64) -> Result<Self, ConfigurationError> {
        Self::new(l, &[Primitive::new(a, c)])
    }

    /// The angular momentum of this shell.
    #[inline]
    pub fn l(&self) -> u32 {
        self.l
    }

    /// The primitives of the contraction of this shell.
    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The number of primitive Gaussians in this shell.
    #[inline]
    pub fn nprims(&self) -> usize {
        self.primitives.len()
    }

    /// The number of basis functions in this shell.
    #[inline]
    pub fn nbf(&self) -> usize {
        nbf(self.l)
    }

    /// The orbitals of this shell in lexicographic order.
    #[inline]
    pub fn orbitals(&self) -> &[Orbital] {
        self.cart_order.as_slice()
    }

    /// The orbital with a specified index in this shell, if any.
    #[inline]
    pub fn orbital(&self, i: usize) -> Option<&Orbital> {
        self.cart_order.get(i)
    }

    /// The Cartesian ordering information of this shell.
    pub fn cart_order(&self) -> &CartOrder {
        &self.cart_order
    }
}

impl Index<usize> for Shell {
    type Output = Orbital;

    fn index(&self, i: usize) -> &Self::Output {
        &self.orbitals()[i]
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shell ({} primitive{})",
            angmom_label(self.l),
            self.nprims(),
            if self.nprims() == 1 { "" } else { "s" }
        )
    }
}

/// The serialised form of a [`Shell`]. Orbitals are not serialised since they are derived.
#[derive(Clone, Serialize, Deserialize)]
struct ShellRaw {
    /// The angular momentum of the shell.
    l: u32,

    /// The primitives of the contraction.
    primitives: Vec<Primitive>,
}

impl TryFrom<ShellRaw> for Shell {
    type Error = ConfigurationError;

    fn try_from(raw: ShellRaw) -> Result<Self, Self::Error> {
        Shell::new(raw.l, &raw.primitives)
    }
}

impl From<Shell> for ShellRaw {
    fn from(shell: Shell) -> Self {
        ShellRaw {
            l: shell.l,
            primitives: shell.primitives,
        }
    }
}

// =========
// UnitShell
// =========

static UNIT_ORBITALS: [Orbital; 1] = [Orbital::new(0, 0, 0)];

/// A degenerate, coordinate-free shell representing a point source.
///
/// It has angular momentum zero, exactly one orbital $`(0, 0, 0)`$, and exactly one primitive
/// whose coefficient is one and whose exponent is the exact [`Zero`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitShell;

impl UnitShell {
    /// The angular momentum of a unit shell.
    pub const L: u32 = 0;

    /// The coefficient of the single primitive of a unit shell.
    pub const COEFFICIENT: f64 = 1.0;

    /// The angular momentum of this shell.
    #[inline]
    pub fn l(&self) -> u32 {
        Self::L
    }

    /// The number of basis functions in this shell, which is always one.
    #[inline]
    pub fn nbf(&self) -> usize {
        1
    }

    /// The number of primitives in this shell, which is always one.
    #[inline]
    pub fn nprims(&self) -> usize {
        1
    }

    /// The exponent of the single primitive.
    #[inline]
    pub fn exponent(&self) -> Exponent {
        Exponent::Zero(Zero)
    }

    /// The single primitive as an `(exponent, coefficient)` pair.
    #[inline]
    pub fn primitive(&self) -> (Exponent, f64) {
        (self.exponent(), Self::COEFFICIENT)
    }

    /// The single orbital $`(0, 0, 0)`$.
    #[inline]
    pub fn orbitals(&self) -> &'static [Orbital] {
        &UNIT_ORBITALS
    }
}

impl fmt::Display for UnitShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit shell")
    }
}

// =========
// ShellView
// =========

/// A closed tagged variant over the shell-like entities that can occupy a position in a shell
/// tuple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellView<'a> {
    /// A real contracted shell.
    Real(&'a Shell),

    /// A unit shell standing in for a point source.
    Unit(UnitShell),
}

impl<'a> ShellView<'a> {
    /// The angular momentum of the underlying shell.
    #[inline]
    pub fn l(&self) -> u32 {
        match self {
            ShellView::Real(shell) => shell.l(),
            ShellView::Unit(unit) => unit.l(),
        }
    }

    /// The number of basis functions of the underlying shell.
    #[inline]
    pub fn nbf(&self) -> usize {
        match self {
            ShellView::Real(shell) => shell.nbf(),
            ShellView::Unit(unit) => unit.nbf(),
        }
    }

    /// The number of primitives of the underlying shell.
    #[inline]
    pub fn nprims(&self) -> usize {
        match self {
            ShellView::Real(shell) => shell.nprims(),
            ShellView::Unit(unit) => unit.nprims(),
        }
    }

    /// The orbitals of the underlying shell.
    #[inline]
    pub fn orbitals(&self) -> &'a [Orbital] {
        match *self {
            ShellView::Real(shell) => shell.orbitals(),
            ShellView::Unit(unit) => unit.orbitals(),
        }
    }

    /// Iterates over the `(exponent, coefficient)` pairs of the primitives of the underlying
    /// shell without allocating.
    #[inline]
    pub fn primitives(&self) -> impl Iterator<Item = (Exponent, f64)> + 'a {
        match *self {
            ShellView::Real(shell) => Either::Left(
                shell
                    .primitives()
                    .iter()
                    .map(|prim| (Exponent::Finite(prim.a), prim.c)),
            ),
            ShellView::Unit(unit) => Either::Right(std::iter::once(unit.primitive())),
        }
    }

    /// Returns `true` if this is a unit shell.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, ShellView::Unit(_))
    }
}

impl<'a> From<&'a Shell> for ShellView<'a> {
    fn from(shell: &'a Shell) -> Self {
        ShellView::Real(shell)
    }
}

impl<'a> From<UnitShell> for ShellView<'a> {
    fn from(unit: UnitShell) -> Self {
        ShellView::Unit(unit)
    }
}

impl<'a> fmt::Display for ShellView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellView::Real(shell) => write!(f, "{shell}"),
            ShellView::Unit(unit) => write!(f, "{unit}"),
        }
    }
}

// ==========================
// Multi-shell function count
// ==========================

/// Returns the product of the numbers of basis functions of an arbitrary collection of shells.
pub fn nbf_product<'a, I>(shells: I) -> usize
where
    I: IntoIterator,
    I::Item: Into<ShellView<'a>>,
{
    shells.into_iter().map(|shell| shell.into().nbf()).product()
}
