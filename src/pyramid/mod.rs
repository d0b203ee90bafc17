//! Gaussian/Laplacian pyramids and the multi-band blender.

pub mod blend;
mod ops;
