//! Offscreen wgpu backend.
//!
//! Draw calls are recorded between `begin_scene` and `end_scene` and
//! replayed into a single render pass against an offscreen color/depth
//! target. Pipelines are cached per state combination (topology, blending,
//! depth, culling), so a scene that sticks to a few engine states compiles
//! a few pipelines once and reuses them forever.

use std::collections::HashMap;

use anyhow::Context as _;
use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use super::{
    BlendFunc, Color, CompFunc, CullMode, Device, FillMode, FogMode, Light, Material,
    PrimitiveType, RenderState, TexImage, TextureCreateParams, TextureHandle, TransformType,
    Vertex, VertexCol, VertexTex2,
};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct RawVertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
    uv2: [f32; 2],
}

impl RawVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x2,
        3 => Float32x2,
    ];

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RawVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl From<&VertexTex2> for RawVertex {
    fn from(v: &VertexTex2) -> Self {
        Self {
            position: v.coord.into(),
            normal: v.normal.into(),
            uv: v.uv.into(),
            uv2: v.uv2.into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

/// Everything that forces a distinct render pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PipelineKey {
    primitive: PrimitiveType,
    blending: bool,
    blend: (BlendFunc, BlendFunc),
    depth_test: bool,
    depth_write: bool,
    depth_func: CompFunc,
    culling: bool,
    cull_mode: CullMode,
}

struct GpuTexture {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

struct DrawCmd {
    key: PipelineKey,
    vertices: Vec<RawVertex>,
    uniforms: Uniforms,
    texture: Option<u32>,
}

pub struct GpuDevice {
    device: wgpu::Device,
    queue: wgpu::Queue,
    color_view: wgpu::TextureView,
    depth_view: wgpu::TextureView,
    shader: wgpu::ShaderModule,
    pipeline_layout: wgpu::PipelineLayout,
    texture_layout: wgpu::BindGroupLayout,
    uniform_layout: wgpu::BindGroupLayout,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,
    textures: Vec<Option<GpuTexture>>,
    white_texture: GpuTexture,

    transforms: [Matrix4<f32>; 3],
    bound_texture: [Option<u32>; 2],
    texture_enabled: [bool; 2],
    texture_factor: Color,
    material_diffuse: Color,
    global_ambient: Color,
    clear_color: Color,
    blending: bool,
    blend: (BlendFunc, BlendFunc),
    depth_test: bool,
    depth_write: bool,
    depth_func: CompFunc,
    texturing: bool,
    culling: bool,
    cull_mode: CullMode,
    draws: Vec<DrawCmd>,
}

fn blend_factor(func: BlendFunc) -> wgpu::BlendFactor {
    match func {
        BlendFunc::Zero => wgpu::BlendFactor::Zero,
        BlendFunc::One => wgpu::BlendFactor::One,
        BlendFunc::SrcColor => wgpu::BlendFactor::Src,
        BlendFunc::InvSrcColor => wgpu::BlendFactor::OneMinusSrc,
        BlendFunc::DstColor => wgpu::BlendFactor::Dst,
        BlendFunc::InvDstColor => wgpu::BlendFactor::OneMinusDst,
        BlendFunc::SrcAlpha => wgpu::BlendFactor::SrcAlpha,
        BlendFunc::InvSrcAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
        BlendFunc::DstAlpha => wgpu::BlendFactor::DstAlpha,
        BlendFunc::InvDstAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
    }
}

fn compare_function(func: CompFunc) -> wgpu::CompareFunction {
    match func {
        CompFunc::Never => wgpu::CompareFunction::Never,
        CompFunc::Less => wgpu::CompareFunction::Less,
        CompFunc::Equal => wgpu::CompareFunction::Equal,
        CompFunc::NotEqual => wgpu::CompareFunction::NotEqual,
        CompFunc::LessEqual => wgpu::CompareFunction::LessEqual,
        CompFunc::Greater => wgpu::CompareFunction::Greater,
        CompFunc::GreaterEqual => wgpu::CompareFunction::GreaterEqual,
        CompFunc::Always => wgpu::CompareFunction::Always,
    }
}

fn topology(primitive: PrimitiveType) -> wgpu::PrimitiveTopology {
    match primitive {
        PrimitiveType::Lines => wgpu::PrimitiveTopology::LineList,
        PrimitiveType::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        PrimitiveType::Triangles => wgpu::PrimitiveTopology::TriangleList,
        PrimitiveType::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
    }
}

impl GpuDevice {
    /// Create an offscreen device rendering into a `width` x `height`
    /// target. Blocks on adapter and device acquisition.
    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        futures::executor::block_on(Self::new_async(width, height))
    }

    async fn new_async(width: u32, height: u32) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable graphics adapter")?;
        log::info!("rendering on adapter '{}'", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
            })
            .await
            .context("requesting device")?;

        let extent = wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };
        let color = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene color"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: COLOR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene depth"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[DEPTH_FORMAT],
        });
        let color_view = color.create_view(&wgpu::TextureViewDescriptor::default());
        let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
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
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene pipeline layout"),
            bind_group_layouts: &[Some(&texture_layout), Some(&uniform_layout)],
            immediate_size: 0,
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene_shader.wgsl").into()),
        });

        let white_texture = Self::upload_texture(
            &device,
            &queue,
            &texture_layout,
            &TexImage::solid([255, 255, 255, 255]),
            &TextureCreateParams::default(),
            Some("white fallback"),
        );

        Ok(Self {
            device,
            queue,
            color_view,
            depth_view,
            shader,
            pipeline_layout,
            texture_layout,
            uniform_layout,
            pipelines: HashMap::new(),
            textures: Vec::new(),
            white_texture,
            transforms: [Matrix4::from_scale(1.0); 3],
            bound_texture: [None, None],
            texture_enabled: [false, false],
            texture_factor: Color::WHITE,
            material_diffuse: Color::WHITE,
            global_ambient: Color::WHITE,
            clear_color: Color::BLACK,
            blending: false,
            blend: (BlendFunc::SrcAlpha, BlendFunc::InvSrcAlpha),
            depth_test: true,
            depth_write: true,
            depth_func: CompFunc::LessEqual,
            texturing: true,
            culling: true,
            cull_mode: CullMode::Ccw,
            draws: Vec::new(),
        })
    }

    fn upload_texture(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        image: &TexImage,
        params: &TextureCreateParams,
        label: Option<&str>,
    ) -> GpuTexture {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: COLOR_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let filter = |f: super::TexFilter| match f {
            super::TexFilter::Nearest => wgpu::FilterMode::Nearest,
            super::TexFilter::Linear => wgpu::FilterMode::Linear,
        };
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: filter(params.mag_filter),
            min_filter: filter(params.min_filter),
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label,
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });
        GpuTexture {
            texture,
            bind_group,
        }
    }

    fn current_key(&self, primitive: PrimitiveType) -> PipelineKey {
        PipelineKey {
            primitive,
            blending: self.blending,
            blend: self.blend,
            depth_test: self.depth_test,
            depth_write: self.depth_write,
            depth_func: self.depth_func,
            culling: self.culling,
            cull_mode: self.cull_mode,
        }
    }

    fn ensure_pipeline(&mut self, key: PipelineKey) {
        if self.pipelines.contains_key(&key) {
            return;
        }
        let blend = key.blending.then(|| wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: blend_factor(key.blend.0),
                dst_factor: blend_factor(key.blend.1),
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        });
        let cull = key.culling.then(|| match key.cull_mode {
            CullMode::Cw => wgpu::Face::Front,
            CullMode::Ccw => wgpu::Face::Back,
        });
        let pipeline = self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                cache: None,
                label: Some("scene pipeline"),
                layout: Some(&self.pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &self.shader,
                    entry_point: Some("vs_main"),
                    buffers: &[RawVertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &self.shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: COLOR_FORMAT,
                        blend,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: topology(key.primitive),
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: cull,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: key.depth_test.then(|| wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: Some(key.depth_write),
                    depth_compare: Some(compare_function(key.depth_func)),
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview_mask: None,
            });
        self.pipelines.insert(key, pipeline);
    }

    fn record(&mut self, primitive: PrimitiveType, vertices: Vec<RawVertex>, color: Color) {
        if vertices.is_empty() {
            return;
        }
        let mvp = self.transforms[2] * self.transforms[1] * self.transforms[0];
        let texture = if self.texturing && self.texture_enabled[0] {
            self.bound_texture[0]
        } else {
            None
        };
        self.draws.push(DrawCmd {
            key: self.current_key(primitive),
            vertices,
            uniforms: Uniforms {
                mvp: mvp.into(),
                color: [color.r, color.g, color.b, color.a],
            },
            texture,
        });
    }

    /// The modulation color for the next draw: material diffuse scaled by
    /// the global ambient and the current texture factor.
    fn draw_color(&self) -> Color {
        Color::new(
            self.material_diffuse.r * self.global_ambient.r * self.texture_factor.r,
            self.material_diffuse.g * self.global_ambient.g * self.texture_factor.g,
            self.material_diffuse.b * self.global_ambient.b * self.texture_factor.b,
            self.material_diffuse.a * self.texture_factor.a,
        )
    }
}

impl Device for GpuDevice {
    fn name(&self) -> &'static str {
        "wgpu"
    }

    fn begin_scene(&mut self) {
        self.draws.clear();
    }

    /// Replay the recorded draws into one render pass and submit.
    fn end_scene(&mut self) {
        let keys: Vec<PipelineKey> = self.draws.iter().map(|d| d.key).collect();
        for key in keys {
            self.ensure_pipeline(key);
        }

        let mut buffers = Vec::with_capacity(self.draws.len());
        for draw in &self.draws {
            let vertex_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("scene vertices"),
                    contents: bytemuck::cast_slice(&draw.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let uniform_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("scene uniforms"),
                    contents: bytemuck::cast_slice(&[draw.uniforms]),
                    usage: wgpu::BufferUsages::UNIFORM,
                });
            let uniform_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("scene uniforms"),
                layout: &self.uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            buffers.push((vertex_buffer, uniform_group));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene encoder"),
            });
        {
            let clear = wgpu::Color {
                r: self.clear_color.r as f64,
                g: self.clear_color.g as f64,
                b: self.clear_color.b as f64,
                a: self.clear_color.a as f64,
            };
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                multiview_mask: None,
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.color_view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            for (draw, (vertex_buffer, uniform_group)) in self.draws.iter().zip(&buffers) {
                let texture_group = draw
                    .texture
                    .and_then(|id| (id as usize).checked_sub(1))
                    .and_then(|slot| self.textures.get(slot))
                    .and_then(|t| t.as_ref())
                    .map(|t| &t.bind_group)
                    .unwrap_or(&self.white_texture.bind_group);
                pass.set_pipeline(&self.pipelines[&draw.key]);
                pass.set_bind_group(0, texture_group, &[]);
                pass.set_bind_group(1, uniform_group, &[]);
                pass.set_vertex_buffer(0, vertex_buffer.slice(..));
                pass.draw(0..draw.vertices.len() as u32, 0..1);
            }
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        self.draws.clear();
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
    }

    fn set_transform(&mut self, transform_type: TransformType, matrix: Matrix4<f32>) {
        let slot = match transform_type {
            TransformType::World => 0,
            TransformType::View => 1,
            TransformType::Projection => 2,
        };
        self.transforms[slot] = matrix;
    }

    fn set_material(&mut self, material: &Material) {
        self.material_diffuse = material.diffuse;
    }

    fn set_light(&mut self, _index: usize, _light: &Light) {}

    fn set_light_enabled(&mut self, _index: usize, _enabled: bool) {}

    fn set_global_ambient(&mut self, color: Color) {
        self.global_ambient = color;
    }

    fn create_texture(
        &mut self,
        image: &TexImage,
        params: &TextureCreateParams,
    ) -> TextureHandle {
        let expected = image.width as usize * image.height as usize * 4;
        if image.rgba.len() != expected {
            log::warn!(
                "rejecting texture upload: {} bytes for {}x{}",
                image.rgba.len(),
                image.width,
                image.height
            );
            return TextureHandle::default();
        }
        let texture = Self::upload_texture(
            &self.device,
            &self.queue,
            &self.texture_layout,
            image,
            params,
            None,
        );
        self.textures.push(Some(texture));
        TextureHandle {
            valid: true,
            id: self.textures.len() as u32,
            width: image.width,
            height: image.height,
            alpha: image.has_alpha,
        }
    }

    fn destroy_texture(&mut self, texture: &TextureHandle) {
        let Some(slot) = texture.slot().and_then(|i| self.textures.get_mut(i)) else {
            return;
        };
        if let Some(gpu) = slot.take() {
            gpu.texture.destroy();
        }
        for stage in &mut self.bound_texture {
            if *stage == Some(texture.id) {
                *stage = None;
            }
        }
    }

    fn set_texture(&mut self, stage: usize, texture: &TextureHandle) {
        if stage < 2 {
            self.bound_texture[stage] = texture.valid.then_some(texture.id);
        }
    }

    fn set_texture_enabled(&mut self, stage: usize, enabled: bool) {
        if stage < 2 {
            self.texture_enabled[stage] = enabled;
        }
    }

    fn set_texture_factor(&mut self, color: Color) {
        self.texture_factor = color;
    }

    fn draw_primitive(&mut self, primitive: PrimitiveType, vertices: &[Vertex]) {
        let raw = vertices
            .iter()
            .map(|v| RawVertex {
                position: v.coord.into(),
                normal: v.normal.into(),
                uv: v.uv.into(),
                uv2: v.uv.into(),
            })
            .collect();
        let color = self.draw_color();
        self.record(primitive, raw, color);
    }

    fn draw_primitive_col(&mut self, primitive: PrimitiveType, vertices: &[VertexCol]) {
        // Flat color comes through the uniform; one call per color run.
        let Some(first) = vertices.first() else {
            return;
        };
        let color = first.color;
        let raw = vertices
            .iter()
            .map(|v| RawVertex {
                position: v.coord.into(),
                normal: [0.0, 1.0, 0.0],
                uv: [0.0, 0.0],
                uv2: [0.0, 0.0],
            })
            .collect();
        self.record(primitive, raw, color);
    }

    fn draw_primitive_tex2(&mut self, primitive: PrimitiveType, vertices: &[VertexTex2]) {
        let raw = vertices.iter().map(RawVertex::from).collect();
        let color = self.draw_color();
        self.record(primitive, raw, color);
    }

    fn set_render_state(&mut self, state: RenderState, enabled: bool) {
        match state {
            RenderState::Blending => self.blending = enabled,
            RenderState::DepthTest => self.depth_test = enabled,
            RenderState::DepthWrite => self.depth_write = enabled,
            RenderState::Texturing => self.texturing = enabled,
            RenderState::Culling => self.culling = enabled,
            RenderState::Lighting
            | RenderState::Fog
            | RenderState::AlphaTest => {}
        }
    }

    fn set_depth_test_func(&mut self, func: CompFunc) {
        self.depth_func = func;
    }

    fn set_blend_func(&mut self, src: BlendFunc, dst: BlendFunc) {
        self.blend = (src, dst);
    }

    fn set_fog_params(
        &mut self,
        _mode: FogMode,
        _color: Color,
        _start: f32,
        _end: f32,
        _density: f32,
    ) {
    }

    fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    fn set_fill_mode(&mut self, _mode: FillMode) {}
}
