//! No-op device for headless execution.

use cgmath::Matrix4;

use super::{
    BlendFunc, Color, CompFunc, CullMode, Device, FillMode, FogMode, Light, Material,
    PrimitiveType, RenderState, TexImage, TextureCreateParams, TextureHandle, TransformType,
    Vertex, VertexCol, VertexTex2,
};

/// A device that swallows every call.
///
/// Texture creation still hands out distinct valid handles so the cache
/// layers above behave exactly as they would against a real backend.
#[derive(Debug, Default)]
pub struct NullDevice {
    next_texture_id: u32,
}

impl NullDevice {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Device for NullDevice {
    fn name(&self) -> &'static str {
        "null"
    }

    fn begin_scene(&mut self) {}
    fn end_scene(&mut self) {}
    fn clear(&mut self, _color: Color) {}

    fn set_transform(&mut self, _transform_type: TransformType, _matrix: Matrix4<f32>) {}
    fn set_material(&mut self, _material: &Material) {}
    fn set_light(&mut self, _index: usize, _light: &Light) {}
    fn set_light_enabled(&mut self, _index: usize, _enabled: bool) {}
    fn set_global_ambient(&mut self, _color: Color) {}

    fn create_texture(
        &mut self,
        image: &TexImage,
        _params: &TextureCreateParams,
    ) -> TextureHandle {
        self.next_texture_id += 1;
        TextureHandle {
            valid: true,
            id: self.next_texture_id,
            width: image.width,
            height: image.height,
            alpha: image.has_alpha,
        }
    }

    fn destroy_texture(&mut self, _texture: &TextureHandle) {}
    fn set_texture(&mut self, _stage: usize, _texture: &TextureHandle) {}
    fn set_texture_enabled(&mut self, _stage: usize, _enabled: bool) {}
    fn set_texture_factor(&mut self, _color: Color) {}

    fn draw_primitive(&mut self, _primitive: PrimitiveType, _vertices: &[Vertex]) {}
    fn draw_primitive_col(&mut self, _primitive: PrimitiveType, _vertices: &[VertexCol]) {}
    fn draw_primitive_tex2(&mut self, _primitive: PrimitiveType, _vertices: &[VertexTex2]) {}

    fn set_render_state(&mut self, _state: RenderState, _enabled: bool) {}
    fn set_depth_test_func(&mut self, _func: CompFunc) {}
    fn set_blend_func(&mut self, _src: BlendFunc, _dst: BlendFunc) {}
    fn set_fog_params(
        &mut self,
        _mode: FogMode,
        _color: Color,
        _start: f32,
        _end: f32,
        _density: f32,
    ) {
    }
    fn set_cull_mode(&mut self, _mode: CullMode) {}
    fn set_fill_mode(&mut self, _mode: FillMode) {}
}
