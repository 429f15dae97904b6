//! Angular-momentum labels and the compile-time bounds on supported shells.

/// Alphabetical labels of angular momenta.
pub static ANGMOM_LABELS: [&str; 7] = ["S", "P", "D", "F", "G", "H", "I"];

/// The largest angular momentum that a [`crate::basis::ao::Shell`] can carry.
pub const MAX_L: u32 = 6;

/// The number of Cartesian functions in a shell of angular momentum [`MAX_L`]. This sizes the
/// fixed-capacity orbital storage inside every shell.
pub const MAX_CART: usize = nbf(MAX_L);

/// Returns the number of Cartesian Gaussians of rank $`l`$, *i.e.* $`(l+1)(l+2)/2`$.
#[inline]
#[must_use]
pub const fn nbf(l: u32) -> usize {
    let n = l as usize + 1;
    (n * n + n) / 2
}

/// Returns the alphabetical label of an angular momentum, or its decimal representation if it
/// lies beyond the tabulated labels.
pub fn angmom_label(l: u32) -> String {
    usize::try_from(l)
        .ok()
        .and_then(|l| ANGMOM_LABELS.get(l))
        .map(|label| label.to_string())
        .unwrap_or_else(|| l.to_string())
}
