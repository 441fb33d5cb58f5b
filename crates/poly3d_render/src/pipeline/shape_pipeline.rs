//! Render pipeline for flat-coloured shapes
//!
//! Every draw in a frame gets its own slot in one uniform buffer and binds it
//! with a dynamic offset, so several shapes with different transforms can
//! share a single render pass.

use super::types::{uniform_stride, TransformUniform, COLOR_LAYOUT, POSITION_LAYOUT};

/// One draw, ready to encode
pub struct DrawCommand<'a> {
    pub positions: &'a wgpu::Buffer,
    pub colors: &'a wgpu::Buffer,
    pub vertex_count: u32,
}

/// Render pipeline for shape triangle lists
pub struct ShapePipeline {
    /// The render pipeline
    pipeline: wgpu::RenderPipeline,
    /// Bind group layout for the transform uniform
    bind_group_layout: wgpu::BindGroupLayout,
    /// Transform slots, `stride` bytes apart
    uniform_buffer: wgpu::Buffer,
    /// Bind group for the uniform buffer
    bind_group: wgpu::BindGroup,
    /// Number of slots the uniform buffer holds
    capacity: usize,
    stride: u64,
    /// Depth texture
    depth_texture: Option<wgpu::TextureView>,
    depth_size: (u32, u32),
}

impl ShapePipeline {
    const INITIAL_CAPACITY: usize = 16;

    /// Create a new shape pipeline
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let stride = uniform_stride(device.limits().min_uniform_buffer_offset_alignment);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Shape Bind Group Layout"),
            entries: &[
                // Transform
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<TransformUniform>() as u64,
                        ),
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shape Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shape Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/shape.wgsl").into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shape Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[POSITION_LAYOUT, COLOR_LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Face winding is not consistent across the solids
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let (uniform_buffer, bind_group) =
            Self::create_uniforms(device, &bind_group_layout, Self::INITIAL_CAPACITY, stride);

        Self {
            pipeline,
            bind_group_layout,
            uniform_buffer,
            bind_group,
            capacity: Self::INITIAL_CAPACITY,
            stride,
            depth_texture: None,
            depth_size: (0, 0),
        }
    }

    fn create_uniforms(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        capacity: usize,
        stride: u64,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape Transform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shape Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &uniform_buffer,
                        offset: 0,
                        size: wgpu::BufferSize::new(std::mem::size_of::<TransformUniform>() as u64),
                    }),
                },
            ],
        });

        (uniform_buffer, bind_group)
    }

    /// Grow the uniform buffer to hold at least `count` transforms
    fn ensure_capacity(&mut self, device: &wgpu::Device, count: usize) {
        if count <= self.capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        log::debug!("Growing transform buffer from {} to {} slots", self.capacity, capacity);
        let (buffer, bind_group) =
            Self::create_uniforms(device, &self.bind_group_layout, capacity, self.stride);
        self.uniform_buffer = buffer;
        self.bind_group = bind_group;
        self.capacity = capacity;
    }

    /// Write one transform per draw, slot `i` for draw `i`
    pub fn upload_transforms(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        transforms: &[TransformUniform],
    ) {
        if transforms.is_empty() {
            return;
        }
        self.ensure_capacity(device, transforms.len());

        let stride = self.stride as usize;
        let mut bytes = vec![0u8; stride * transforms.len()];
        for (slot, transform) in bytes.chunks_exact_mut(stride).zip(transforms) {
            let data = bytemuck::bytes_of(transform);
            slot[..data.len()].copy_from_slice(data);
        }
        queue.write_buffer(&self.uniform_buffer, 0, &bytes);
    }

    /// Ensure depth texture exists and is the right size
    pub fn ensure_depth_texture(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.depth_texture.is_none() || self.depth_size != (width, height) {
            let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width: width.max(1),
                    height: height.max(1),
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth32Float,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });

            self.depth_texture = Some(depth_texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.depth_size = (width, height);
        }
    }

    /// Clear colour and depth, then issue `draws` in order.
    ///
    /// Draw `i` uses transform slot `i` from the last `upload_transforms`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        draws: &[DrawCommand<'_>],
        clear_color: wgpu::Color,
    ) {
        let Some(depth_view) = self.depth_texture.as_ref() else {
            log::error!("Depth texture not created, skipping frame");
            return;
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Shape Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);

        for (i, draw) in draws.iter().enumerate() {
            let offset = (i as u64 * self.stride) as wgpu::DynamicOffset;
            render_pass.set_bind_group(0, &self.bind_group, &[offset]);
            render_pass.set_vertex_buffer(0, draw.positions.slice(..));
            render_pass.set_vertex_buffer(1, draw.colors.slice(..));
            render_pass.draw(0..draw.vertex_count, 0..1);
        }
    }
}
