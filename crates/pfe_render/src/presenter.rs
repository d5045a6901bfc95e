//! Nearest-neighbour upscaling of the logical frame into the window.

use std::sync::Arc;

use pfe_core::{EngineError, Frame, Presenter};
use winit::window::Window;

use crate::gpu_context::GpuContext;

/// Format of the uploaded frame. Surface pixels are sRGB-encoded bytes, so
/// sampling through an sRGB view into an sRGB swapchain reproduces them
/// unchanged.
const FRAME_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

pub struct GpuPresenter {
    gpu: GpuContext,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    texture_size: (u32, u32),
}

impl GpuPresenter {
    pub fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, EngineError> {
        let gpu = GpuContext::new(window)?;
        let device = &gpu.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Present Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/present.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Present Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Present Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Nearest in both directions: every logical pixel becomes a hard-edged block.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Frame Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let texture = create_frame_texture(device, width, height);
        let bind_group = create_bind_group(device, &bind_group_layout, &texture, &sampler);

        Ok(Self {
            gpu,
            pipeline,
            bind_group_layout,
            sampler,
            texture,
            bind_group,
            texture_size: (width, height),
        })
    }

    fn ensure_texture(&mut self, width: u32, height: u32) {
        if self.texture_size == (width, height) {
            return;
        }
        self.texture = create_frame_texture(&self.gpu.device, width, height);
        self.bind_group = create_bind_group(
            &self.gpu.device,
            &self.bind_group_layout,
            &self.texture,
            &self.sampler,
        );
        self.texture_size = (width, height);
    }
}

impl Presenter for GpuPresenter {
    fn present(&mut self, frame: &Frame<'_>) -> Result<(), EngineError> {
        let expected = frame_byte_len(frame.width, frame.height);
        if Some(frame.pixels.len()) != expected {
            return Err(EngineError::Present(format!(
                "frame is {} bytes, expected {:?} for {}x{}",
                frame.pixels.len(),
                expected,
                frame.width,
                frame.height
            )));
        }

        let (window_w, window_h) = (frame.window_size.x, frame.window_size.y);
        if window_w == 0 || window_h == 0 {
            // Minimised: nothing to draw into.
            return Ok(());
        }
        if self.gpu.size != (window_w, window_h) {
            self.gpu.resize(window_w, window_h);
        }

        self.ensure_texture(frame.width, frame.height);
        self.gpu.queue.write_texture(
            self.texture.as_image_copy(),
            frame.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * frame.width),
                rows_per_image: Some(frame.height),
            },
            wgpu::Extent3d {
                width: frame.width,
                height: frame.height,
                depth_or_array_layers: 1,
            },
        );

        let Some((output, view)) = self.gpu.begin_frame()? else {
            return Ok(());
        };

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Present Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some([x, y, w, h]) = viewport_rect(frame, self.gpu.size) {
                pass.set_viewport(x, y, w, h, 0.0, 1.0);
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.bind_group, &[]);
                pass.draw(0..3, 0..1);
            }
        }

        self.gpu.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn create_frame_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Frame Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FRAME_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    })
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &wgpu::Texture,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Frame Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn frame_byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

/// The letterbox rectangle clipped to the render target, or `None` when
/// nothing of it is visible.
fn viewport_rect(frame: &Frame<'_>, target: (u32, u32)) -> Option<[f32; 4]> {
    let x = frame.viewport_offset.x.min(target.0);
    let y = frame.viewport_offset.y.min(target.1);
    let w = frame.viewport_extent.x.min(target.0 - x);
    let h = frame.viewport_extent.y.min(target.1 - y);
    if w == 0 || h == 0 {
        return None;
    }
    Some([x as f32, y as f32, w as f32, h as f32])
}
