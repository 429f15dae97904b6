//! Basis functions: shells of Cartesian Gaussians and unit shells.

pub mod ao;
