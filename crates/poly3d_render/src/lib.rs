//! wgpu rendering for poly3d
//!
//! This crate provides the GPU side of [`poly3d_core::GraphicsBackend`].
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Flat-colour triangle pipeline with a per-draw transform
//! - [`WgpuBackend`] - Records a frame's draws and submits them in one render pass
//!
//! Vertex positions go straight to clip space with no projection; the shader
//! only remaps the depth range.

pub mod context;
pub mod pipeline;
mod backend;
mod error;

pub use backend::{RenderSettings, WgpuBackend};
pub use error::RenderError;
