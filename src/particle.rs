//! Particle manager.
//!
//! Particles live in tombstoned channels: a freed channel is reused by the
//! next create, so channel indices handed to automations stay cheap and
//! stable for a particle's lifetime. The manager only simulates lifetime,
//! gravity and wind here; rendering is the engine's business.

use cgmath::Vector3;

/// Kind of particle, selecting texture frame and motion profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleType {
    /// Organic projectile (mushroom spit).
    Gun2,
    /// Heavy dark smoke.
    Smoke3,
    Smoke1,
    Glint,
    Flame,
    Explosion,
    Spark,
}

/// One live particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub used: bool,
    pub kind: ParticleType,
    pub pos: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub dim: f32,
    /// Seconds lived so far.
    pub time: f32,
    /// Total lifetime in seconds.
    pub duration: f32,
    pub mass: f32,
    pub wind_sensitivity: f32,
    /// Object rank this particle is attached to, if any.
    pub father: Option<usize>,
}

#[derive(Debug)]
pub struct ParticleManager {
    channels: Vec<Particle>,
    wind: Vector3<f32>,
}

impl Default for ParticleManager {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            wind: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

const GRAVITY: f32 = -9.81;

impl ParticleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_wind(&mut self, wind: Vector3<f32>) {
        self.wind = wind;
    }

    /// Spawn a particle and return its channel. Freed channels are reused
    /// before the array grows.
    #[allow(clippy::too_many_arguments)]
    pub fn create_particle(
        &mut self,
        pos: Vector3<f32>,
        velocity: Vector3<f32>,
        dim: f32,
        kind: ParticleType,
        duration: f32,
        mass: f32,
        wind_sensitivity: f32,
    ) -> usize {
        let particle = Particle {
            used: true,
            kind,
            pos,
            velocity,
            dim,
            time: 0.0,
            duration,
            mass,
            wind_sensitivity,
            father: None,
        };
        if let Some(channel) = self.channels.iter().position(|p| !p.used) {
            self.channels[channel] = particle;
            return channel;
        }
        self.channels.push(particle);
        self.channels.len() - 1
    }

    /// Attach a particle to an object so it dies with it.
    pub fn set_object_father(&mut self, channel: usize, obj_rank: usize) {
        if let Some(p) = self.channels.get_mut(channel).filter(|p| p.used) {
            p.father = Some(obj_rank);
        }
    }

    pub fn particle(&self, channel: usize) -> Option<&Particle> {
        self.channels.get(channel).filter(|p| p.used)
    }

    /// Live particle count.
    pub fn count(&self) -> usize {
        self.channels.iter().filter(|p| p.used).count()
    }

    /// Kill every particle attached to `obj_rank`.
    pub fn delete_father(&mut self, obj_rank: usize) {
        for p in &mut self.channels {
            if p.used && p.father == Some(obj_rank) {
                p.used = false;
            }
        }
    }

    /// Age and move live particles; expired ones free their channel.
    pub fn frame_update(&mut self, r_time: f32) {
        for p in &mut self.channels {
            if !p.used {
                continue;
            }
            p.time += r_time;
            if p.time >= p.duration {
                p.used = false;
                continue;
            }
            if p.mass > 0.0 {
                p.velocity.y += GRAVITY * (p.mass / 100.0) * r_time;
            }
            p.pos += p.velocity * r_time;
            p.pos += self.wind * p.wind_sensitivity * r_time;
        }
    }
}
