//! Mushroom automation: an ambush trap that sniffs for nearby targets,
//! inflates, spits a burst of corrosive projectiles and smokes off.

use std::collections::HashSet;
use std::sync::LazyLock;

use cgmath::Vector3;

use crate::automation::{AutoContext, Automation, AutomationBase, SoundType};
use crate::event::Event;
use crate::level::ParserLine;
use crate::object::{ObjectArena, ObjectId, ObjectType};
use crate::particle::ParticleType;

/// Attack radius.
const TARGET_DISTANCE: f32 = 50.0;

/// Object types worth attacking.
const TARGET_TYPES: &[ObjectType] = &[
    ObjectType::Human,
    ObjectType::MobileWheeledLogistic,
    ObjectType::MobileTrackedLogistic,
    ObjectType::MobileWingedLogistic,
    ObjectType::MobileLeggedLogistic,
    ObjectType::MobileWheeledShooter,
    ObjectType::MobileTrackedShooter,
    ObjectType::MobileWingedShooter,
    ObjectType::MobileLeggedShooter,
    ObjectType::MobileWheeledOrganicShooter,
    ObjectType::MobileTrackedOrganicShooter,
    ObjectType::MobileWingedOrganicShooter,
    ObjectType::MobileLeggedOrganicShooter,
    ObjectType::MobileWheeledSniffer,
    ObjectType::MobileTrackedSniffer,
    ObjectType::MobileWingedSniffer,
    ObjectType::MobileLeggedSniffer,
    ObjectType::MobileThumper,
    ObjectType::MobileShielder,
    ObjectType::MobileRecycler,
    ObjectType::MobileSubmarine,
];

static TARGET_SET: LazyLock<HashSet<ObjectType>> =
    LazyLock::new(|| TARGET_TYPES.iter().copied().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MushPhase {
    Wait,
    Snif,
    Zoom,
    Fire,
    Smoke,
}

impl MushPhase {
    fn to_int(self) -> i32 {
        match self {
            MushPhase::Wait => 1,
            MushPhase::Snif => 2,
            MushPhase::Zoom => 3,
            MushPhase::Fire => 4,
            MushPhase::Smoke => 5,
        }
    }

    fn from_int(value: i32) -> Self {
        match value {
            2 => MushPhase::Snif,
            3 => MushPhase::Zoom,
            4 => MushPhase::Fire,
            5 => MushPhase::Smoke,
            _ => MushPhase::Wait,
        }
    }
}

pub struct MushAutomation {
    base: AutomationBase,
    phase: MushPhase,
    progress: f32,
    speed: f32,
    last_particle: f32,
    /// Inflation of the cap, 1.0 at rest.
    size: f32,
}

fn rand() -> f32 {
    rand::random::<f32>()
}

impl MushAutomation {
    pub fn new(object: ObjectId) -> Self {
        let mut auto = Self {
            base: AutomationBase::new(object),
            phase: MushPhase::Wait,
            progress: 0.0,
            speed: 1.0 / 4.0,
            last_particle: 0.0,
            size: 1.0,
        };
        auto.init();
        auto
    }

    pub fn phase(&self) -> MushPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether a valid target stands within attack distance.
    fn search_target(&self, objects: &ObjectArena, pos: Vector3<f32>) -> bool {
        for obj in objects.iter() {
            if obj.id == self.base.object || obj.locked {
                continue;
            }
            if !TARGET_SET.contains(&obj.object_type) {
                continue;
            }
            let delta = obj.position - pos;
            let dist = (delta.x * delta.x + delta.y * delta.y + delta.z * delta.z).sqrt();
            if dist < TARGET_DISTANCE {
                return true;
            }
        }
        false
    }

    fn fire_particles(&mut self, ctx: &mut AutoContext, pos: Vector3<f32>) {
        if self.last_particle + 0.05 > self.base.time {
            return;
        }
        self.last_particle = self.base.time;
        let mut origin = pos;
        origin.y += 5.0;
        for _ in 0..10 {
            let speed = Vector3::new(
                (rand() - 0.5) * 200.0,
                -(20.0 + rand() * 20.0),
                (rand() - 0.5) * 200.0,
            );
            let channel = ctx
                .particles
                .create_particle(origin, speed, 1.0, ParticleType::Gun2, 2.0, 100.0, 0.0);
            ctx.particles
                .set_object_father(channel, self.base.object.0 as usize);
        }
    }

    fn smoke_particles(&mut self, ctx: &mut AutoContext, pos: Vector3<f32>) {
        if self.last_particle + ctx.particle_adapt(0.10) > self.base.time {
            return;
        }
        self.last_particle = self.base.time;
        let mut origin = pos;
        origin.y += 5.0;
        let speed = Vector3::new(
            (rand() - 0.5) * 4.0,
            -(0.5 + rand() * 0.5),
            (rand() - 0.5) * 4.0,
        );
        let dim = rand() * 2.5 + 2.0;
        ctx.particles
            .create_particle(origin, speed, dim, ParticleType::Smoke3, 4.0, 0.0, 0.0);
    }
}

impl Automation for MushAutomation {
    fn init(&mut self) {
        self.phase = MushPhase::Wait;
        self.progress = 0.0;
        self.speed = 1.0 / 4.0;
        self.last_particle = 0.0;
        self.size = 1.0;
        self.base.time = 0.0;
    }

    /// One frame of the attack cycle.
    ///
    /// The phase checks run in sequence on purpose: a phase entered during
    /// this call is observed by the later checks in the same call, which
    /// is what makes the resting mushroom react on the very frame its wait
    /// expires instead of one frame late.
    fn event_process(&mut self, ctx: &mut AutoContext, event: &Event) -> bool {
        self.base.event_process(ctx, event);
        if ctx.paused {
            return true;
        }
        let Some(r_time) = event.frame_time() else {
            return true;
        };

        let Some(pos) = ctx.objects.get(self.base.object).map(|o| o.position) else {
            return true;
        };

        self.progress += r_time * self.speed;
        let mut factor = 0.0;

        if self.phase == MushPhase::Wait && self.progress >= 1.0 {
            if self.search_target(ctx.objects, pos) {
                self.phase = MushPhase::Snif;
                self.progress = 0.0;
                self.speed = 1.0 / 1.5;
            } else {
                self.phase = MushPhase::Wait;
                self.progress = 0.0;
                self.speed = 1.0 / (2.0 + rand() * 2.0);
            }
        }

        if self.phase == MushPhase::Snif {
            factor = self.progress.min(1.0);
            if self.progress >= 1.0 {
                // The attack is committed once sniffing began; a target
                // slipping out of range no longer calls it off.
                self.phase = MushPhase::Zoom;
                self.progress = 0.0;
                self.speed = 1.0 / 1.0;
            }
        }

        if self.phase == MushPhase::Zoom {
            factor = 1.0;
            self.size = 1.0 + self.progress.min(1.0) * 0.3;
            if self.progress >= 1.0 {
                ctx.play_sound(SoundType::Mushroom, pos, 1.0, 1.0);
                self.phase = MushPhase::Fire;
                self.progress = 0.0;
                self.speed = 1.0 / 1.0;
            }
        }

        if self.phase == MushPhase::Fire {
            factor = (1.0 - self.progress).max(0.0);
            self.size = 1.0 + factor * 0.3;
            if self.progress >= 1.0 {
                self.phase = MushPhase::Smoke;
                self.progress = 0.0;
                self.speed = 1.0 / 2.0;
                self.size = 1.0;
            } else {
                self.fire_particles(ctx, pos);
            }
        }

        if self.phase == MushPhase::Smoke {
            if self.progress >= 1.0 {
                self.phase = MushPhase::Wait;
                self.progress = 0.0;
                self.speed = 1.0 / (2.0 + rand() * 2.0);
            } else {
                self.smoke_particles(ctx, pos);
            }
        }

        // Tremble and inflate in proportion to how committed the attack is.
        if let Some(obj) = ctx.objects.get_mut(self.base.object) {
            let time = self.base.time;
            if factor != 0.0 || self.size != 1.0 {
                let dir_x = (time * std::f32::consts::PI * 4.0).sin();
                let dir_z = (time * std::f32::consts::PI * 4.0).cos();
                let angle = (time * 10.0).sin() * factor * 0.04;
                obj.set_rotation_x(angle * dir_z);
                obj.set_rotation_z(angle * dir_x);
                obj.set_scale_x((1.0 + (time * 8.0).sin() * factor * 0.06) * self.size);
                obj.set_scale_y((1.0 + (time * 5.0).sin() * factor * 0.06) * self.size);
                obj.set_scale_z((1.0 + (time * 7.0).sin() * factor * 0.06) * self.size);
            } else {
                obj.set_rotation_x(0.0);
                obj.set_rotation_z(0.0);
                obj.set_scale(Vector3::new(1.0, 1.0, 1.0));
            }
        }

        true
    }

    fn write(&self, line: &mut ParserLine) -> bool {
        if self.phase == MushPhase::Wait {
            return false;
        }
        line.add_param("aExist", 1);
        self.base.write(line);
        line.add_param("aPhase", self.phase.to_int());
        line.add_param("aProgress", self.progress);
        line.add_param("aSpeed", self.speed);
        true
    }

    fn read(&mut self, line: &ParserLine) -> bool {
        if !line.param("aExist").map(|p| p.as_bool(false)).unwrap_or(false) {
            return false;
        }
        self.base.read(line);
        self.phase = MushPhase::from_int(line.param("aPhase").map(|p| p.as_int(1)).unwrap_or(1));
        self.progress = line.param("aProgress").map(|p| p.as_float(0.0)).unwrap_or(0.0);
        self.speed = line.param("aSpeed").map(|p| p.as_float(1.0)).unwrap_or(1.0);
        self.last_particle = 0.0;
        true
    }
}
