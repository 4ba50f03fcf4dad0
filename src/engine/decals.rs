//! Ground decals: shadow spots, ground spots and ground marks.
//!
//! All three live in flat arrays with a `used` tombstone instead of being
//! removed eagerly; ranks handed out to callers stay stable while a frame
//! is iterating the arrays, and freed slots are reused by the next create.

use cgmath::Vector3;

use crate::device::Color;

/// Shape of a shadow spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowType {
    #[default]
    Normal,
    Worm,
}

/// Circular shadow under an object.
#[derive(Debug, Clone)]
pub struct ShadowSpot {
    pub used: bool,
    pub hide: bool,
    pub obj_rank: usize,
    pub shadow_type: ShadowType,
    pub pos: Vector3<f32>,
    pub normal: Vector3<f32>,
    pub angle: f32,
    pub radius: f32,
    pub intensity: f32,
    pub height: f32,
}

impl Default for ShadowSpot {
    fn default() -> Self {
        Self {
            used: false,
            hide: false,
            obj_rank: 0,
            shadow_type: ShadowType::Normal,
            pos: Vector3::new(0.0, 0.0, 0.0),
            normal: Vector3::new(0.0, 0.0, 0.0),
            angle: 0.0,
            radius: 0.0,
            intensity: 0.0,
            height: 0.0,
        }
    }
}

/// Large colored spot blended into the ground texture.
#[derive(Debug, Clone)]
pub struct GroundSpot {
    pub used: bool,
    pub color: Color,
    pub min: f32,
    pub max: f32,
    pub smooth: f32,
    pub pos: Vector3<f32>,
    pub radius: f32,
    pub draw_pos: Vector3<f32>,
    pub draw_radius: f32,
}

impl Default for GroundSpot {
    fn default() -> Self {
        Self {
            used: false,
            color: Color::default(),
            min: 0.0,
            max: 0.0,
            smooth: 0.0,
            pos: Vector3::new(0.0, 0.0, 0.0),
            radius: 0.0,
            draw_pos: Vector3::new(0.0, 0.0, 0.0),
            draw_radius: 0.0,
        }
    }
}

/// Life phase of a ground mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundMarkPhase {
    #[default]
    Null,
    Increase,
    Fixed,
    Decrease,
}

/// A fading mark painted on the ground (tracks, scorch patterns).
#[derive(Debug, Clone)]
pub struct GroundMark {
    pub used: bool,
    pub draw: bool,
    pub phase: GroundMarkPhase,
    /// Durations of the increase / fixed / decrease phases.
    pub delay: [f32; 3],
    /// Time spent in the current phase.
    pub fix: f32,
    pub pos: Vector3<f32>,
    pub radius: f32,
    pub intensity: f32,
    pub draw_pos: Vector3<f32>,
    pub draw_radius: f32,
    pub draw_intensity: f32,
    pub dx: usize,
    pub dy: usize,
    pub table: Vec<u8>,
}

impl Default for GroundMark {
    fn default() -> Self {
        Self {
            used: false,
            draw: false,
            phase: GroundMarkPhase::Null,
            delay: [0.0; 3],
            fix: 0.0,
            pos: Vector3::new(0.0, 0.0, 0.0),
            radius: 0.0,
            intensity: 0.0,
            draw_pos: Vector3::new(0.0, 0.0, 0.0),
            draw_radius: 0.0,
            draw_intensity: 0.0,
            dx: 0,
            dy: 0,
            table: Vec::new(),
        }
    }
}

/// Storage for all decal kinds.
#[derive(Debug, Default)]
pub struct Decals {
    pub shadow_spots: Vec<ShadowSpot>,
    pub ground_spots: Vec<GroundSpot>,
    pub ground_marks: Vec<GroundMark>,
}

fn claim<T: Default>(slots: &mut Vec<T>, used: impl Fn(&T) -> bool) -> usize {
    if let Some(i) = slots.iter().position(|s| !used(s)) {
        slots[i] = T::default();
        return i;
    }
    slots.push(T::default());
    slots.len() - 1
}

impl Decals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shadow spot bound to `obj_rank`, returning its rank.
    pub fn create_shadow_spot(&mut self, obj_rank: usize) -> usize {
        let rank = claim(&mut self.shadow_spots, |s| s.used);
        let spot = &mut self.shadow_spots[rank];
        spot.used = true;
        spot.obj_rank = obj_rank;
        spot.normal = Vector3::new(0.0, 1.0, 0.0);
        spot.intensity = 1.0;
        rank
    }

    /// Tombstone the shadow spot of `obj_rank`, if any. Returns whether a
    /// spot was released.
    pub fn delete_shadow_spot_of(&mut self, obj_rank: usize) -> bool {
        for spot in &mut self.shadow_spots {
            if spot.used && spot.obj_rank == obj_rank {
                spot.used = false;
                return true;
            }
        }
        false
    }

    pub fn shadow_spot_of(&self, obj_rank: usize) -> Option<&ShadowSpot> {
        self.shadow_spots
            .iter()
            .find(|s| s.used && s.obj_rank == obj_rank)
    }

    pub fn shadow_spot_of_mut(&mut self, obj_rank: usize) -> Option<&mut ShadowSpot> {
        self.shadow_spots
            .iter_mut()
            .find(|s| s.used && s.obj_rank == obj_rank)
    }

    pub fn create_ground_spot(&mut self) -> usize {
        let rank = claim(&mut self.ground_spots, |s| s.used);
        let spot = &mut self.ground_spots[rank];
        spot.used = true;
        spot.smooth = 1.0;
        rank
    }

    pub fn delete_ground_spot(&mut self, rank: usize) {
        if let Some(spot) = self.ground_spots.get_mut(rank) {
            spot.used = false;
        }
    }

    pub fn ground_spot_mut(&mut self, rank: usize) -> Option<&mut GroundSpot> {
        self.ground_spots.get_mut(rank).filter(|s| s.used)
    }

    /// Create a ground mark; `table` is the dx * dy coverage bitmap.
    pub fn create_ground_mark(
        &mut self,
        pos: Vector3<f32>,
        radius: f32,
        delay: [f32; 3],
        dx: usize,
        dy: usize,
        table: Vec<u8>,
    ) -> usize {
        let rank = claim(&mut self.ground_marks, |m| m.used);
        let mark = &mut self.ground_marks[rank];
        mark.used = true;
        mark.draw = true;
        mark.phase = GroundMarkPhase::Increase;
        mark.delay = delay;
        mark.pos = pos;
        mark.radius = radius;
        mark.intensity = 0.0;
        mark.dx = dx;
        mark.dy = dy;
        mark.table = table;
        rank
    }

    pub fn delete_ground_mark(&mut self, rank: usize) {
        if let Some(mark) = self.ground_marks.get_mut(rank) {
            mark.used = false;
            mark.draw = false;
        }
    }

    /// Advance ground-mark lifetimes by one frame step.
    pub fn frame_update(&mut self, r_time: f32) {
        for mark in &mut self.ground_marks {
            if !mark.used {
                continue;
            }
            match mark.phase {
                GroundMarkPhase::Increase => {
                    mark.fix += r_time;
                    mark.intensity = (mark.fix / mark.delay[0]).min(1.0);
                    if mark.fix >= mark.delay[0] {
                        mark.phase = GroundMarkPhase::Fixed;
                        mark.fix = 0.0;
                        mark.intensity = 1.0;
                    }
                }
                GroundMarkPhase::Fixed => {
                    mark.fix += r_time;
                    if mark.fix >= mark.delay[1] {
                        mark.phase = GroundMarkPhase::Decrease;
                        mark.fix = 0.0;
                    }
                }
                GroundMarkPhase::Decrease => {
                    mark.fix += r_time;
                    mark.intensity = 1.0 - (mark.fix / mark.delay[2]).min(1.0);
                    if mark.fix >= mark.delay[2] {
                        mark.used = false;
                        mark.draw = false;
                        mark.phase = GroundMarkPhase::Null;
                    }
                }
                GroundMarkPhase::Null => {}
            }
            mark.draw_pos = mark.pos;
            mark.draw_radius = mark.radius;
            mark.draw_intensity = mark.intensity;
        }
    }
}
