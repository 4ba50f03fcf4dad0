//! Abstract graphics device.
//!
//! [`Device`] is the contract between the engine and a concrete backend.
//! The engine never talks to the GPU directly: it batches geometry, caches
//! render state and then issues the minimal sequence of device calls. Two
//! implementations ship with the crate:
//!
//! - [`null::NullDevice`] swallows every call; useful for headless runs and
//!   for test spies built on top of the same trait.
//! - [`gpu::GpuDevice`] renders into an offscreen wgpu target.

use cgmath::{Matrix4, Vector2, Vector3};

pub mod gpu;
pub mod null;

/// An RGBA color with `f32` components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Component-wise inverse, alpha included. Used by the engine when a
    /// "white = transparent" blend mode needs the complement of the factor.
    pub fn inverse(&self) -> Color {
        Color::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, 1.0 - self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Surface material: the lighting response of a batch of triangles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

/// Kind of light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    Directional,
    Point,
    Spot,
}

/// A light as understood by the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub light_type: LightType,
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub position: Vector3<f32>,
    pub direction: Vector3<f32>,
    /// Attenuation as (constant, linear, quadratic).
    pub attenuation: Vector3<f32>,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            light_type: LightType::Directional,
            ambient: Color::BLACK,
            diffuse: Color::WHITE,
            specular: Color::BLACK,
            position: Vector3::new(0.0, 0.0, 0.0),
            direction: Vector3::new(0.0, -1.0, 0.0),
            attenuation: Vector3::new(1.0, 0.0, 0.0),
        }
    }
}

/// Which transform matrix a [`Device::set_transform`] call replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformType {
    World,
    View,
    Projection,
}

/// Toggleable device render states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
    Lighting,
    Texturing,
    Blending,
    Fog,
    DepthTest,
    DepthWrite,
    AlphaTest,
    Culling,
}

/// Depth/alpha comparison functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompFunc {
    Never,
    Less,
    Equal,
    NotEqual,
    LessEqual,
    Greater,
    GreaterEqual,
    Always,
}

/// Blend factors for [`Device::set_blend_func`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFunc {
    Zero,
    One,
    SrcColor,
    InvSrcColor,
    DstColor,
    InvDstColor,
    SrcAlpha,
    InvSrcAlpha,
    DstAlpha,
    InvDstAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogMode {
    Linear,
    Exp,
    Exp2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// Cull clockwise faces.
    Cw,
    /// Cull counter-clockwise faces.
    Ccw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillMode {
    Point,
    Lines,
    Poly,
}

/// Primitive interpretation of a vertex run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
}

/// Plain vertex: position, normal, one texture coordinate set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub coord: Vector3<f32>,
    pub normal: Vector3<f32>,
    pub uv: Vector2<f32>,
}

/// Colored vertex without texturing, for debug overlays and flat shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexCol {
    pub coord: Vector3<f32>,
    pub color: Color,
}

/// Dual-textured vertex, the format the object tree batches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexTex2 {
    pub coord: Vector3<f32>,
    pub normal: Vector3<f32>,
    pub uv: Vector2<f32>,
    pub uv2: Vector2<f32>,
}

impl VertexTex2 {
    pub fn new(coord: Vector3<f32>, normal: Vector3<f32>, uv: Vector2<f32>) -> Self {
        Self {
            coord,
            normal,
            uv,
            uv2: uv,
        }
    }
}

/// Texture filtering for minification/magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexFilter {
    Nearest,
    Linear,
}

/// Parameters for creating a device texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureCreateParams {
    pub mipmap: bool,
    pub min_filter: TexFilter,
    pub mag_filter: TexFilter,
}

impl Default for TextureCreateParams {
    fn default() -> Self {
        Self {
            mipmap: true,
            min_filter: TexFilter::Linear,
            mag_filter: TexFilter::Linear,
        }
    }
}

/// Decoded image pixels ready for upload: tightly packed RGBA8.
#[derive(Debug, Clone)]
pub struct TexImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub has_alpha: bool,
}

impl TexImage {
    /// Convert a decoded [`image::DynamicImage`] into upload-ready pixels.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        let has_alpha = img.color().has_alpha();
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            rgba: rgba.into_raw(),
            has_alpha,
        }
    }

    /// A solid-color 1x1 stand-in, handy in tests and fallbacks.
    pub fn solid(color: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: color.to_vec(),
            has_alpha: color[3] != 255,
        }
    }
}

/// Handle to a device texture.
///
/// Only the engine's texture cache holds these; everything above refers to
/// textures by name. An invalid (default) handle orders before every valid
/// handle so cache bookkeeping keeps failed slots at the front of ordered
/// containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureHandle {
    pub valid: bool,
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub alpha: bool,
}

impl TextureHandle {
    /// Zero-based backend slot for this handle, `None` when invalid.
    /// Backend ids start at 1 so the default handle never maps to a slot.
    pub fn slot(&self) -> Option<usize> {
        if !self.valid {
            return None;
        }
        (self.id as usize).checked_sub(1)
    }
}

impl PartialOrd for TextureHandle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextureHandle {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.valid, self.id).cmp(&(other.valid, other.id))
    }
}

/// The contract every rendering backend implements.
///
/// Callers are expected to route all state changes through the engine's
/// caches; a backend may assume calls arrive already de-duplicated.
pub trait Device {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    fn begin_scene(&mut self);
    fn end_scene(&mut self);
    fn clear(&mut self, color: Color);

    fn set_transform(&mut self, transform_type: TransformType, matrix: Matrix4<f32>);
    fn set_material(&mut self, material: &Material);
    fn set_light(&mut self, index: usize, light: &Light);
    fn set_light_enabled(&mut self, index: usize, enabled: bool);
    fn set_global_ambient(&mut self, color: Color);

    fn create_texture(&mut self, image: &TexImage, params: &TextureCreateParams)
    -> TextureHandle;
    fn destroy_texture(&mut self, texture: &TextureHandle);
    fn set_texture(&mut self, stage: usize, texture: &TextureHandle);
    fn set_texture_enabled(&mut self, stage: usize, enabled: bool);
    fn set_texture_factor(&mut self, color: Color);

    fn draw_primitive(&mut self, primitive: PrimitiveType, vertices: &[Vertex]);
    fn draw_primitive_col(&mut self, primitive: PrimitiveType, vertices: &[VertexCol]);
    fn draw_primitive_tex2(&mut self, primitive: PrimitiveType, vertices: &[VertexTex2]);

    fn set_render_state(&mut self, state: RenderState, enabled: bool);
    fn set_depth_test_func(&mut self, func: CompFunc);
    fn set_blend_func(&mut self, src: BlendFunc, dst: BlendFunc);
    fn set_fog_params(&mut self, mode: FogMode, color: Color, start: f32, end: f32, density: f32);
    fn set_cull_mode(&mut self, mode: CullMode);
    fn set_fill_mode(&mut self, mode: FillMode);
}
