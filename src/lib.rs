//! Coarse-to-fine optical flow estimation and motion compensation.
//!
//! The [`model`] module implements the motion compensation transformer:
//! a coarse flow network, a fine flow network, a bilinear warp operator,
//! and a composer that chains them into a single forward pass.

pub mod common;
pub mod config;
pub mod model;

pub use model::{warp, FlowFieldInit, FlowFieldInput, FlowFieldOutput};
