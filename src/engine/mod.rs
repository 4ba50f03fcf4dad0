//! Engine core: object ranks, batched geometry, cached render state.
//!
//! The engine owns four cooperating pieces:
//!
//! - a growable array of [`EngineObject`] slots addressed by *rank* (a
//!   stable integer handle; callers never hold references into the array)
//! - the [`object_tree::ObjectTree`], a 5-tier index that batches triangles
//!   by texture pair, rank, LOD band, and material/state
//! - the [`texture_cache::TextureCache`] with its failure blacklist
//! - a render-state cache that compares against the last applied state,
//!   color, per-stage texture and material, and only issues the device
//!   calls for fields that changed
//!
//! Everything is single-threaded and frame-driven: the embedding
//! application feeds [`Event::Frame`] ticks and calls [`Engine::render`]
//! once per frame.

use cgmath::{Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, SquareMatrix, Vector3, perspective};

use crate::device::{
    BlendFunc, Color, CullMode, Device, Material, PrimitiveType, RenderState, TexImage,
    TextureHandle, TransformType, VertexTex2,
};
use crate::event::Event;

pub mod decals;
pub mod object_tree;
pub mod texture_cache;

use decals::Decals;
use object_tree::{DataTier, ObjectTree, TriangleType};
use texture_cache::TextureCache;

/// Engine-level render state bitmask.
///
/// These flags describe *intent* (how a batch of triangles wants to be
/// blended and textured); [`Engine::set_state`] translates them into the
/// device calls that realize it.
pub mod state {
    /// Normal opaque material.
    pub const NORMAL: u32 = 0;
    /// Transparent texture, black means fully transparent.
    pub const TTEXTURE_BLACK: u32 = 1 << 0;
    /// Transparent texture, white means fully transparent.
    pub const TTEXTURE_WHITE: u32 = 1 << 1;
    /// Transparent diffuse color.
    pub const TDIFFUSE: u32 = 1 << 2;
    /// Repeat the texture at the borders.
    pub const WRAP: u32 = 1 << 3;
    /// Clamp the texture at the borders.
    pub const CLAMP: u32 = 1 << 4;
    /// Light texture (maximum ambient).
    pub const LIGHT: u32 = 1 << 5;
    /// Dual black texturing (second stage modulates).
    pub const DUAL_BLACK: u32 = 1 << 6;
    /// Dual white texturing (second stage adds).
    pub const DUAL_WHITE: u32 = 1 << 7;
    pub const PART1: u32 = 1 << 8;
    pub const PART2: u32 = 1 << 9;
    pub const PART3: u32 = 1 << 10;
    pub const PART4: u32 = 1 << 11;
    /// Double-sided faces.
    pub const TWO_FACE: u32 = 1 << 12;
    /// Image carries an alpha channel.
    pub const ALPHA: u32 = 1 << 13;
    /// Always use the second texture stage.
    pub const SECOND: u32 = 1 << 14;
    /// Subject to fog.
    pub const FOG: u32 = 1 << 15;
    /// Transparent color, black means fully transparent.
    pub const TCOLOR_BLACK: u32 = 1 << 16;
    /// Transparent color, white means fully transparent.
    pub const TCOLOR_WHITE: u32 = 1 << 17;
}

/// What to do with the `ALPHA` state flag when the configuration does not
/// permit alpha-channel rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    /// Strip the flag, render opaque.
    Strip,
    /// Honor the flag.
    Allow,
    /// Replace it with black-texture transparency.
    BlackTransparency,
}

/// One rendered entity. Externally addressed only by rank.
#[derive(Debug, Clone)]
pub struct EngineObject {
    pub used: bool,
    pub visible: bool,
    pub draw_world: bool,
    pub draw_front: bool,
    pub transform: Matrix4<f32>,
    /// Bounding box, always containing the origin.
    pub bbox_min: Vector3<f32>,
    pub bbox_max: Vector3<f32>,
    pub radius: f32,
    /// Distance to the camera, recomputed each frame.
    pub distance: f32,
    pub shadow_rank: Option<usize>,
    pub transparency: f32,
    pub total_triangles: usize,
}

impl Default for EngineObject {
    fn default() -> Self {
        Self {
            used: false,
            visible: true,
            draw_world: true,
            draw_front: false,
            transform: Matrix4::identity(),
            bbox_min: Vector3::new(0.0, 0.0, 0.0),
            bbox_max: Vector3::new(0.0, 0.0, 0.0),
            radius: 0.0,
            distance: 0.0,
            shadow_rank: None,
            transparency: 0.0,
            total_triangles: 0,
        }
    }
}

/// Base LOD distance limits, scaled by the object-detail setting.
const LIMIT_LOD: [f32; 2] = [100.0, 200.0];

/// The graphics engine. Generic over its [`Device`] backend so tests can
/// substitute spies and headless runs the [`crate::device::null::NullDevice`].
pub struct Engine<D: Device> {
    device: D,
    objects: Vec<EngineObject>,
    tree: ObjectTree,
    textures: TextureCache,
    pub decals: Decals,

    // Render-state cache ("last applied" fields). All device state flows
    // through set_state/set_texture/set_material; a direct device call
    // from outside would silently invalidate these.
    last_state: Option<(u32, Color)>,
    last_texture: [Option<String>; 2],
    last_material: Option<Material>,

    pause: bool,
    time: f32,
    update_geometry: bool,
    statistic_triangle: usize,

    alpha_mode: AlphaMode,
    particle_density: f32,
    object_detail: f32,
    clipping_distance: f32,
    terrain_vision: f32,
    last_object_detail: f32,
    last_clipping_distance: f32,
    ground_spot_visible: bool,
    ambient_color: Color,
    background_color: Color,

    eye_pos: Vector3<f32>,
    view_matrix: Matrix4<f32>,
    proj_matrix: Matrix4<f32>,
}

impl<D: Device> Engine<D> {
    pub fn new(device: D) -> Self {
        log::info!("engine created on '{}' device", device.name());
        Self {
            device,
            objects: Vec::new(),
            tree: ObjectTree::new(),
            textures: TextureCache::new(),
            decals: Decals::new(),
            last_state: None,
            last_texture: [None, None],
            last_material: None,
            pause: false,
            time: 0.0,
            update_geometry: false,
            statistic_triangle: 0,
            alpha_mode: AlphaMode::Allow,
            particle_density: 1.0,
            object_detail: 1.0,
            clipping_distance: 1.0,
            terrain_vision: 1000.0,
            last_object_detail: 1.0,
            last_clipping_distance: 1.0,
            ground_spot_visible: true,
            ambient_color: Color::new(0.5, 0.5, 0.5, 1.0),
            background_color: Color::BLACK,
            eye_pos: Vector3::new(0.0, 0.0, 0.0),
            view_matrix: Matrix4::identity(),
            proj_matrix: Matrix4::identity(),
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ---- objects ----------------------------------------------------------

    /// Allocate an object slot and return its rank. Ranks are stable for
    /// the object's lifetime and freed slots are reused.
    pub fn create_object(&mut self) -> usize {
        if let Some(rank) = self.objects.iter().position(|o| !o.used) {
            self.objects[rank] = EngineObject {
                used: true,
                ..EngineObject::default()
            };
            return rank;
        }
        self.objects.push(EngineObject {
            used: true,
            ..EngineObject::default()
        });
        self.objects.len() - 1
    }

    pub fn object_exists(&self, rank: usize) -> bool {
        self.objects.get(rank).is_some_and(|o| o.used)
    }

    pub fn object(&self, rank: usize) -> Option<&EngineObject> {
        self.objects.get(rank).filter(|o| o.used)
    }

    fn object_mut(&mut self, rank: usize) -> Option<&mut EngineObject> {
        self.objects.get_mut(rank).filter(|o| o.used)
    }

    /// Delete an object: prune its tree branches, release its shadow spot
    /// and free the slot. Returns false for unknown ranks.
    pub fn delete_object(&mut self, rank: usize) -> bool {
        if !self.object_exists(rank) {
            return false;
        }
        self.tree.delete_object(rank);
        self.decals.delete_shadow_spot_of(rank);
        self.objects[rank] = EngineObject::default();
        true
    }

    /// Remove every object, the whole tree and all decals.
    pub fn flush_objects(&mut self) {
        self.tree.flush();
        self.objects.clear();
        self.decals = Decals::new();
    }

    pub fn set_object_transform(&mut self, rank: usize, transform: Matrix4<f32>) -> bool {
        match self.object_mut(rank) {
            Some(obj) => {
                obj.transform = transform;
                true
            }
            None => false,
        }
    }

    pub fn set_object_visible(&mut self, rank: usize, visible: bool) -> bool {
        self.object_mut(rank)
            .map(|o| o.visible = visible)
            .is_some()
    }

    pub fn set_object_draw_world(&mut self, rank: usize, draw: bool) -> bool {
        self.object_mut(rank)
            .map(|o| o.draw_world = draw)
            .is_some()
    }

    pub fn set_object_draw_front(&mut self, rank: usize, draw: bool) -> bool {
        self.object_mut(rank)
            .map(|o| o.draw_front = draw)
            .is_some()
    }

    pub fn set_object_transparency(&mut self, rank: usize, value: f32) -> bool {
        self.object_mut(rank)
            .map(|o| o.transparency = value.clamp(0.0, 1.0))
            .is_some()
    }

    // ---- geometry submission ----------------------------------------------

    /// Add independent triangles to an object. `vertices` length must be a
    /// multiple of three.
    #[allow(clippy::too_many_arguments)]
    pub fn add_triangles(
        &mut self,
        rank: usize,
        vertices: &[VertexTex2],
        material: &Material,
        state: u32,
        tex1: &str,
        tex2: &str,
        min: f32,
        max: f32,
        global_update: bool,
    ) -> bool {
        debug_assert!(vertices.len() % 3 == 0);
        if !self.object_exists(rank) {
            return false;
        }
        self.tree.add(
            TriangleType::Triangles,
            tex1,
            tex2,
            rank,
            min,
            max,
            material,
            state,
            vertices,
        );
        self.after_add(rank, vertices, global_update, vertices.len() / 3);
        true
    }

    /// Add a triangle strip ("surface") to an object.
    #[allow(clippy::too_many_arguments)]
    pub fn add_surface(
        &mut self,
        rank: usize,
        vertices: &[VertexTex2],
        material: &Material,
        state: u32,
        tex1: &str,
        tex2: &str,
        min: f32,
        max: f32,
        global_update: bool,
    ) -> bool {
        if !self.object_exists(rank) {
            return false;
        }
        self.tree.add(
            TriangleType::Surface,
            tex1,
            tex2,
            rank,
            min,
            max,
            material,
            state,
            vertices,
        );
        let triangles = vertices.len().saturating_sub(2);
        self.after_add(rank, vertices, global_update, triangles);
        true
    }

    fn after_add(
        &mut self,
        rank: usize,
        vertices: &[VertexTex2],
        global_update: bool,
        triangles: usize,
    ) {
        if global_update {
            self.update_geometry = true;
        } else {
            let obj = &mut self.objects[rank];
            for v in vertices {
                obj.bbox_min.x = v.coord.x.min(obj.bbox_min.x);
                obj.bbox_min.y = v.coord.y.min(obj.bbox_min.y);
                obj.bbox_min.z = v.coord.z.min(obj.bbox_min.z);
                obj.bbox_max.x = v.coord.x.max(obj.bbox_max.x);
                obj.bbox_max.y = v.coord.y.max(obj.bbox_max.y);
                obj.bbox_max.z = v.coord.z.max(obj.bbox_max.z);
            }
            obj.radius = obj.bbox_min.magnitude().max(obj.bbox_max.magnitude());
        }
        self.objects[rank].total_triangles += triangles;
    }

    /// Exact-match lookup of an existing bucket, for merge-or-create
    /// decisions. `None` means no bucket with these keys exists yet.
    pub fn search_triangles(
        &mut self,
        rank: usize,
        material: &Material,
        state: u32,
        tex1: &str,
        min: f32,
        max: f32,
    ) -> Option<&mut DataTier> {
        self.tree.search(tex1, rank, min, max, material, state)
    }

    /// Triangle count of an object, `None` for unknown ranks.
    pub fn get_total_triangles(&self, rank: usize) -> Option<usize> {
        self.object(rank).map(|o| o.total_triangles)
    }

    // ---- LOD ---------------------------------------------------------------

    /// LOD boundary `index` (0 or 1), from the current or the previously
    /// applied detail setting.
    pub fn limit_lod(&self, index: usize, last: bool) -> f32 {
        let detail = if last {
            self.last_object_detail
        } else {
            self.object_detail
        };
        LIMIT_LOD[index] * detail
    }

    pub fn set_object_detail(&mut self, value: f32) {
        self.object_detail = value.max(0.0);
        self.change_lod();
    }

    pub fn set_clipping_distance(&mut self, value: f32) {
        self.clipping_distance = value.max(0.5);
        self.change_lod();
    }

    /// Re-band the whole tree after a detail-level change, preserving
    /// bucket vertex data.
    pub fn change_lod(&mut self) {
        let old = [self.limit_lod(0, true), self.limit_lod(1, true)];
        let new = [self.limit_lod(0, false), self.limit_lod(1, false)];
        let old_terrain = self.terrain_vision * self.last_clipping_distance;
        let new_terrain = self.terrain_vision * self.clipping_distance;
        self.tree.change_lod(old, new, old_terrain, new_terrain);
        self.last_object_detail = self.object_detail;
        self.last_clipping_distance = self.clipping_distance;
    }

    // ---- textures ----------------------------------------------------------

    /// Load a texture by name, uploading on first use. Failures are logged
    /// and blacklisted; `None` leaves the caller rendering untextured.
    pub fn load_texture(&mut self, name: &str) -> Option<TextureHandle> {
        self.textures.load(&mut self.device, name)
    }

    /// Load a texture from pixels already in memory.
    pub fn load_texture_from_image(&mut self, name: &str, image: &TexImage) -> Option<TextureHandle> {
        self.textures.load_from_image(&mut self.device, name, image)
    }

    pub fn destroy_texture(&mut self, name: &str) {
        self.textures.destroy(&mut self.device, name);
    }

    pub fn texture_handle(&self, name: &str) -> Option<TextureHandle> {
        self.textures.get(name)
    }

    pub fn texture_cache(&self) -> &TextureCache {
        &self.textures
    }

    /// Bind a texture by name to a stage, skipping the device call when the
    /// stage already holds it. A name without a cached handle binds nothing
    /// and stays pending, so the bind goes through once the texture loads.
    pub fn set_texture(&mut self, name: &str, stage: usize) {
        if stage >= 2 || self.last_texture[stage].as_deref() == Some(name) {
            return;
        }
        if let Some(handle) = self.textures.get(name) {
            self.device.set_texture(stage, &handle);
            self.last_texture[stage] = Some(name.to_owned());
        }
    }

    /// Apply a material, skipping the device call when unchanged.
    pub fn set_material(&mut self, material: &Material) {
        if self.last_material.as_ref() == Some(material) {
            return;
        }
        self.last_material = Some(*material);
        self.device.set_material(material);
    }

    // ---- render state ------------------------------------------------------

    /// Translate an engine state bitmask into device calls.
    ///
    /// Consecutive calls with identical (state, color) issue nothing; the
    /// caches are reset at the start of every frame so the first call
    /// always performs a full apply.
    pub fn set_state(&mut self, state: u32, color: Color) {
        if self.last_state == Some((state, color)) {
            return;
        }
        self.last_state = Some((state, color));

        let mut state = state;
        if self.alpha_mode != AlphaMode::Allow && (state & state::ALPHA) != 0 {
            state &= !state::ALPHA;
            if self.alpha_mode == AlphaMode::BlackTransparency {
                state |= state::TTEXTURE_BLACK;
            }
        }

        let dev = &mut self.device;
        if state & state::TTEXTURE_BLACK != 0 {
            dev.set_render_state(RenderState::Fog, false);
            dev.set_render_state(RenderState::DepthWrite, false);
            dev.set_render_state(RenderState::Blending, true);
            dev.set_render_state(RenderState::AlphaTest, false);
            dev.set_render_state(RenderState::Texturing, true);
            dev.set_blend_func(BlendFunc::One, BlendFunc::InvSrcColor);
            dev.set_texture_enabled(0, true);
            dev.set_texture_factor(color);
        } else if state & state::TTEXTURE_WHITE != 0 {
            dev.set_render_state(RenderState::Fog, false);
            dev.set_render_state(RenderState::DepthWrite, false);
            dev.set_render_state(RenderState::Blending, true);
            dev.set_render_state(RenderState::AlphaTest, false);
            dev.set_render_state(RenderState::Texturing, true);
            dev.set_blend_func(BlendFunc::DstColor, BlendFunc::Zero);
            dev.set_texture_enabled(0, true);
            dev.set_texture_factor(color.inverse());
        } else if state & state::TCOLOR_BLACK != 0 {
            dev.set_render_state(RenderState::Fog, false);
            dev.set_render_state(RenderState::DepthWrite, false);
            dev.set_render_state(RenderState::Blending, true);
            dev.set_render_state(RenderState::AlphaTest, false);
            dev.set_render_state(RenderState::Texturing, true);
            dev.set_blend_func(BlendFunc::One, BlendFunc::InvSrcColor);
            dev.set_texture_factor(color);
            dev.set_texture_enabled(0, true);
        } else if state & state::TCOLOR_WHITE != 0 {
            dev.set_render_state(RenderState::Fog, false);
            dev.set_render_state(RenderState::DepthWrite, false);
            dev.set_render_state(RenderState::Blending, true);
            dev.set_render_state(RenderState::AlphaTest, false);
            dev.set_render_state(RenderState::Texturing, true);
            dev.set_blend_func(BlendFunc::DstColor, BlendFunc::Zero);
            dev.set_texture_factor(color.inverse());
            dev.set_texture_enabled(0, true);
        } else if state & state::TDIFFUSE != 0 {
            dev.set_render_state(RenderState::Fog, false);
            dev.set_render_state(RenderState::DepthWrite, false);
            dev.set_render_state(RenderState::Blending, true);
            dev.set_render_state(RenderState::AlphaTest, false);
            dev.set_render_state(RenderState::Texturing, true);
            dev.set_blend_func(BlendFunc::SrcAlpha, BlendFunc::InvSrcAlpha);
            dev.set_texture_enabled(0, true);
        } else if state & state::ALPHA != 0 {
            dev.set_render_state(RenderState::Fog, true);
            dev.set_render_state(RenderState::DepthWrite, true);
            dev.set_render_state(RenderState::Blending, false);
            dev.set_render_state(RenderState::AlphaTest, true);
            dev.set_render_state(RenderState::Texturing, true);
            dev.set_texture_factor(color);
            dev.set_texture_enabled(0, true);
        } else {
            dev.set_render_state(RenderState::Fog, true);
            dev.set_render_state(RenderState::DepthWrite, true);
            dev.set_render_state(RenderState::Blending, false);
            dev.set_render_state(RenderState::AlphaTest, false);
            dev.set_render_state(RenderState::Texturing, true);
            dev.set_texture_enabled(0, true);
        }

        if state & state::FOG != 0 {
            dev.set_render_state(RenderState::Fog, true);
        }

        let second = self.ground_spot_visible && (state & state::SECOND) != 0;
        if (state & (state::DUAL_BLACK | state::DUAL_WHITE)) != 0 && second {
            dev.set_texture_enabled(1, true);
        } else {
            dev.set_texture_enabled(1, false);
        }

        if state & state::TWO_FACE != 0 {
            dev.set_render_state(RenderState::Culling, false);
        } else {
            dev.set_render_state(RenderState::Culling, true);
            dev.set_cull_mode(CullMode::Ccw);
        }

        if state & state::LIGHT != 0 {
            dev.set_global_ambient(Color::WHITE);
        } else {
            dev.set_global_ambient(self.ambient_color);
        }
    }

    // ---- frame flow --------------------------------------------------------

    pub fn set_pause(&mut self, pause: bool) {
        self.pause = pause;
    }

    pub fn get_pause(&self) -> bool {
        self.pause
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Route an event into the engine. Frame ticks advance the simulation;
    /// everything else passes through untouched (returns true).
    pub fn process_event(&mut self, event: &Event) -> bool {
        if let Event::Frame { r_time } = *event {
            self.frame_update(r_time);
        }
        true
    }

    /// Per-frame bookkeeping: time, camera distances, decal lifetimes and
    /// any deferred geometry recomputation.
    pub fn frame_update(&mut self, r_time: f32) {
        if self.pause {
            return;
        }
        self.time += r_time;

        for obj in &mut self.objects {
            if obj.used {
                let center = obj.transform.w.truncate();
                obj.distance = (self.eye_pos - center).magnitude();
            }
        }

        self.decals.frame_update(r_time);

        if self.update_geometry {
            self.recompute_geometry();
            self.update_geometry = false;
        }
    }

    fn recompute_geometry(&mut self) {
        for rank in 0..self.objects.len() {
            if !self.objects[rank].used {
                continue;
            }
            let mut bbox_min = Vector3::new(0.0, 0.0, 0.0);
            let mut bbox_max = Vector3::new(0.0, 0.0, 0.0);
            for v in self.tree.vertices_of(rank) {
                bbox_min.x = v.coord.x.min(bbox_min.x);
                bbox_min.y = v.coord.y.min(bbox_min.y);
                bbox_min.z = v.coord.z.min(bbox_min.z);
                bbox_max.x = v.coord.x.max(bbox_max.x);
                bbox_max.y = v.coord.y.max(bbox_max.y);
                bbox_max.z = v.coord.z.max(bbox_max.z);
            }
            let obj = &mut self.objects[rank];
            obj.bbox_min = bbox_min;
            obj.bbox_max = bbox_max;
            obj.radius = bbox_min.magnitude().max(bbox_max.magnitude());
        }
    }

    /// Render one frame: reset the state caches, then walk the tree
    /// outside-in, applying only the texture/material/state deltas between
    /// buckets and LOD-filtering by each object's camera distance.
    pub fn render(&mut self) {
        self.statistic_triangle = 0;
        self.last_state = None;
        self.last_texture = [None, None];
        self.last_material = None;

        self.device.begin_scene();
        self.device.clear(self.background_color);
        self.device
            .set_transform(TransformType::View, self.view_matrix);
        self.device
            .set_transform(TransformType::Projection, self.proj_matrix);
        self.set_state(state::NORMAL, Color::WHITE);

        let tree = std::mem::take(&mut self.tree);
        self.draw_pass(&tree, false);
        self.draw_pass(&tree, true);
        self.tree = tree;

        self.device.end_scene();
    }

    fn draw_pass(&mut self, tree: &ObjectTree, front: bool) {
        if front {
            self.device.set_render_state(RenderState::DepthTest, false);
        }
        for tier in tree.tiers() {
            self.set_texture(&tier.tex1, 0);
            if !tier.tex2.is_empty() {
                self.set_texture(&tier.tex2, 1);
            }
            for rank_tier in &tier.ranks {
                let Some(obj) = self.objects.get(rank_tier.obj_rank) else {
                    continue;
                };
                if !obj.used || !obj.visible {
                    continue;
                }
                if front != obj.draw_front || (!front && !obj.draw_world) {
                    continue;
                }
                let distance = obj.distance;
                let transform = obj.transform;
                self.device.set_transform(TransformType::World, transform);
                for lod in &rank_tier.lods {
                    if !lod.contains(distance) {
                        continue;
                    }
                    for batch in &lod.batches {
                        for data in &batch.data {
                            self.set_material(&data.material);
                            self.set_state(data.state, Color::WHITE);
                            let primitive = match data.triangle_type {
                                TriangleType::Triangles => PrimitiveType::Triangles,
                                TriangleType::Surface => PrimitiveType::TriangleStrip,
                            };
                            self.device.draw_primitive_tex2(primitive, &data.vertices);
                            self.statistic_triangle += data.triangle_count();
                        }
                    }
                }
            }
        }
        if front {
            self.device.set_render_state(RenderState::DepthTest, true);
        }
    }

    /// Triangles drawn during the last [`Engine::render`].
    pub fn statistic_triangle(&self) -> usize {
        self.statistic_triangle
    }

    // ---- settings ----------------------------------------------------------

    pub fn set_alpha_mode(&mut self, mode: AlphaMode) {
        self.alpha_mode = mode;
    }

    pub fn set_ambient_color(&mut self, color: Color) {
        self.ambient_color = color;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    pub fn set_ground_spot_visible(&mut self, visible: bool) {
        self.ground_spot_visible = visible;
    }

    /// Particle density in [0, 2]; 0 disables emission altogether.
    pub fn set_particle_density(&mut self, value: f32) {
        self.particle_density = value.clamp(0.0, 2.0);
    }

    pub fn particle_density(&self) -> f32 {
        self.particle_density
    }

    /// Scale a particle emission interval by the configured density. A
    /// density of zero pushes the interval out of reach.
    pub fn particle_adapt(&self, factor: f32) -> f32 {
        if self.particle_density == 0.0 {
            return 1_000_000.0;
        }
        factor / self.particle_density
    }

    /// Position the camera; distances and the view matrix derive from it.
    pub fn set_view_params(&mut self, eye: Vector3<f32>, look_at: Vector3<f32>, up: Vector3<f32>) {
        self.eye_pos = eye;
        self.view_matrix = Matrix4::look_at_rh(
            Point3::from_vec(eye),
            Point3::from_vec(look_at),
            up,
        );
    }

    pub fn set_projection(&mut self, fovy_deg: f32, aspect: f32, near: f32, far: f32) {
        self.proj_matrix = perspective(Deg(fovy_deg), aspect, near, far);
    }

    // ---- decals ------------------------------------------------------------

    /// Create a shadow spot for an object, recording the back-reference.
    pub fn create_shadow_spot(&mut self, rank: usize) -> Option<usize> {
        if !self.object_exists(rank) {
            return None;
        }
        let shadow_rank = self.decals.create_shadow_spot(rank);
        self.objects[rank].shadow_rank = Some(shadow_rank);
        Some(shadow_rank)
    }

    pub fn delete_shadow_spot(&mut self, rank: usize) {
        if self.decals.delete_shadow_spot_of(rank) {
            if let Some(obj) = self.object_mut(rank) {
                obj.shadow_rank = None;
            }
        }
    }
}
