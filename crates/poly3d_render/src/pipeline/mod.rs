//! Rendering pipeline components

pub mod types;
pub mod shape_pipeline;

pub use types::{TransformUniform, uniform_stride, POSITION_LAYOUT, COLOR_LAYOUT};
pub use shape_pipeline::{DrawCommand, ShapePipeline};
