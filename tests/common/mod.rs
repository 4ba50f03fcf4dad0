#![allow(dead_code)]

//! Shared test doubles.

use cgmath::Matrix4;
use strata_ngin::device::{
    BlendFunc, Color, CompFunc, CullMode, Device, FillMode, FogMode, Light, Material,
    PrimitiveType, RenderState, TexImage, TextureCreateParams, TextureHandle, TransformType,
    Vertex, VertexCol, VertexTex2,
};

pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A device that records every call so tests can assert on traffic.
#[derive(Debug, Default)]
pub struct SpyDevice {
    pub calls: Vec<String>,
    /// When set, texture creation hands out invalid handles.
    pub fail_create: bool,
    pub next_texture_id: u32,
    pub last_global_ambient: Option<Color>,
    pub last_blend: Option<(BlendFunc, BlendFunc)>,
    pub render_states: Vec<(RenderState, bool)>,
    pub texture_stages: Vec<(usize, bool)>,
}

impl SpyDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| *c == name).count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
        self.render_states.clear();
        self.texture_stages.clear();
    }
}

impl Device for SpyDevice {
    fn name(&self) -> &'static str {
        "spy"
    }

    fn begin_scene(&mut self) {
        self.calls.push("begin_scene".into());
    }

    fn end_scene(&mut self) {
        self.calls.push("end_scene".into());
    }

    fn clear(&mut self, _color: Color) {
        self.calls.push("clear".into());
    }

    fn set_transform(&mut self, _transform_type: TransformType, _matrix: Matrix4<f32>) {
        self.calls.push("set_transform".into());
    }

    fn set_material(&mut self, _material: &Material) {
        self.calls.push("set_material".into());
    }

    fn set_light(&mut self, _index: usize, _light: &Light) {
        self.calls.push("set_light".into());
    }

    fn set_light_enabled(&mut self, _index: usize, _enabled: bool) {
        self.calls.push("set_light_enabled".into());
    }

    fn set_global_ambient(&mut self, color: Color) {
        self.calls.push("set_global_ambient".into());
        self.last_global_ambient = Some(color);
    }

    fn create_texture(
        &mut self,
        image: &TexImage,
        _params: &TextureCreateParams,
    ) -> TextureHandle {
        self.calls.push("create_texture".into());
        if self.fail_create {
            return TextureHandle::default();
        }
        self.next_texture_id += 1;
        TextureHandle {
            valid: true,
            id: self.next_texture_id,
            width: image.width,
            height: image.height,
            alpha: image.has_alpha,
        }
    }

    fn destroy_texture(&mut self, _texture: &TextureHandle) {
        self.calls.push("destroy_texture".into());
    }

    fn set_texture(&mut self, _stage: usize, _texture: &TextureHandle) {
        self.calls.push("set_texture".into());
    }

    fn set_texture_enabled(&mut self, stage: usize, enabled: bool) {
        self.calls.push("set_texture_enabled".into());
        self.texture_stages.push((stage, enabled));
    }

    fn set_texture_factor(&mut self, _color: Color) {
        self.calls.push("set_texture_factor".into());
    }

    fn draw_primitive(&mut self, _primitive: PrimitiveType, _vertices: &[Vertex]) {
        self.calls.push("draw_primitive".into());
    }

    fn draw_primitive_col(&mut self, _primitive: PrimitiveType, _vertices: &[VertexCol]) {
        self.calls.push("draw_primitive_col".into());
    }

    fn draw_primitive_tex2(&mut self, _primitive: PrimitiveType, _vertices: &[VertexTex2]) {
        self.calls.push("draw_primitive_tex2".into());
    }

    fn set_render_state(&mut self, state: RenderState, enabled: bool) {
        self.calls.push("set_render_state".into());
        self.render_states.push((state, enabled));
    }

    fn set_depth_test_func(&mut self, _func: CompFunc) {
        self.calls.push("set_depth_test_func".into());
    }

    fn set_blend_func(&mut self, src: BlendFunc, dst: BlendFunc) {
        self.calls.push("set_blend_func".into());
        self.last_blend = Some((src, dst));
    }

    fn set_fog_params(
        &mut self,
        _mode: FogMode,
        _color: Color,
        _start: f32,
        _end: f32,
        _density: f32,
    ) {
        self.calls.push("set_fog_params".into());
    }

    fn set_cull_mode(&mut self, _mode: CullMode) {
        self.calls.push("set_cull_mode".into());
    }

    fn set_fill_mode(&mut self, _mode: FillMode) {
        self.calls.push("set_fill_mode".into());
    }
}
