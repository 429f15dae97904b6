//! Shell tuples, Gaussian-product primitive pairs and centre selection for four-centre
//! electron-repulsion integrals.

pub mod centres;
pub mod primitives;
pub mod quartet;
pub mod shell_tuple;
