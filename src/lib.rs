//! poly3d - interactive viewer for flat-shaded polyhedra
//!
//! The binary wires these modules to a winit event loop; they are exposed
//! as a library so configuration and key mapping can be tested directly.

pub mod config;
pub mod input;
pub mod systems;
