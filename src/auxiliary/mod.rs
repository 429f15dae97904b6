//! Helper items to assist the working of the shell and primitive layers.

pub mod geometry;
