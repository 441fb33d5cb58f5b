//! wgpu implementation of [`GraphicsBackend`]
//!
//! Uploads become static vertex buffers. Between `clear` and `present` the
//! backend collects draws along with the transform that was set for each,
//! then `present` writes all transforms and encodes a single render pass.

use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::{dpi::PhysicalSize, window::Window};

use poly3d_core::{BufferId, GraphicsBackend, UniformId};
use poly3d_math::{Mat4, mat4::IDENTITY};

use crate::context::RenderContext;
use crate::pipeline::{DrawCommand, ShapePipeline, TransformUniform};
use crate::RenderError;

/// Settings the backend takes from the app config
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    pub clear_color: [f32; 4],
    pub vsync: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: [0.8, 0.8, 0.8, 1.0],
            vsync: true,
        }
    }
}

struct PendingDraw {
    positions: BufferId,
    colors: BufferId,
    vertex_count: u32,
}

/// Window-backed GPU backend
pub struct WgpuBackend {
    context: RenderContext,
    pipeline: ShapePipeline,
    /// Indexed by `BufferId`; `None` until first upload
    buffers: Vec<Option<wgpu::Buffer>>,
    bound: Option<(BufferId, BufferId)>,
    transform: Mat4,
    draws: Vec<PendingDraw>,
    transforms: Vec<TransformUniform>,
    clear_color: wgpu::Color,
}

impl WgpuBackend {
    /// Create the device, surface, and pipeline for `window`.
    ///
    /// Blocks until the adapter and device are ready.
    pub fn new(window: Arc<Window>, settings: RenderSettings) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, settings.vsync))?;

        let mut pipeline = ShapePipeline::new(&context.device, context.config.format);
        pipeline.ensure_depth_texture(&context.device, context.config.width, context.config.height);

        let [r, g, b, a] = settings.clear_color;
        Ok(Self {
            context,
            pipeline,
            buffers: Vec::new(),
            bound: None,
            transform: IDENTITY,
            draws: Vec::new(),
            transforms: Vec::new(),
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.context.resize(size);
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    fn buffer(&self, id: BufferId) -> Option<&wgpu::Buffer> {
        self.buffers.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Submit the frame collected since the last `clear`
    pub fn present(&mut self) -> Result<(), RenderError> {
        let output = self.context.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.pipeline
            .upload_transforms(&self.context.device, &self.context.queue, &self.transforms);

        let mut commands = Vec::with_capacity(self.draws.len());
        for draw in &self.draws {
            match (self.buffer(draw.positions), self.buffer(draw.colors)) {
                (Some(positions), Some(colors)) => commands.push(DrawCommand {
                    positions,
                    colors,
                    vertex_count: draw.vertex_count,
                }),
                _ => {
                    return Err(RenderError::Other(format!(
                        "draw references unknown buffers {:?}/{:?}",
                        draw.positions, draw.colors
                    )))
                }
            }
        }

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, &commands, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl GraphicsBackend for WgpuBackend {
    fn create_buffer(&mut self) -> BufferId {
        let id = BufferId(self.buffers.len() as u32);
        self.buffers.push(None);
        id
    }

    fn upload(&mut self, buffer: BufferId, data: &[[f32; 4]]) {
        let Some(slot) = self.buffers.get_mut(buffer.0 as usize) else {
            log::error!("Upload to unknown buffer {:?}", buffer);
            return;
        };

        *slot = Some(self.context.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Vertex Buffer"),
            contents: bytemuck::cast_slice(data),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn transform_uniform(&self) -> UniformId {
        UniformId(0)
    }

    fn clear(&mut self) {
        self.draws.clear();
        self.transforms.clear();
        self.bound = None;
    }

    fn bind_vertex_buffers(&mut self, positions: BufferId, colors: BufferId) {
        self.bound = Some((positions, colors));
    }

    fn set_transform(&mut self, _uniform: UniformId, transform: &Mat4) {
        self.transform = *transform;
    }

    fn draw_triangles(&mut self, vertex_count: u32) {
        let Some((positions, colors)) = self.bound else {
            log::warn!("draw_triangles called with no bound buffers");
            return;
        };
        if vertex_count == 0 {
            return;
        }

        self.draws.push(PendingDraw {
            positions,
            colors,
            vertex_count,
        });
        self.transforms.push(TransformUniform::new(self.transform));
    }
}
