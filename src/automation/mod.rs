//! Frame-driven object automations.
//!
//! An automation is a small state machine bound to one game object. It
//! receives the event stream (frame ticks, mostly) and mutates the world
//! through an [`AutoContext`] of borrowed subsystems instead of holding
//! references of its own, so an automation can always be saved, restored
//! or dropped without anything dangling.

use cgmath::Vector3;

use crate::event::Event;
use crate::level::ParserLine;
use crate::object::{ObjectArena, ObjectId};
use crate::particle::ParticleManager;

pub mod mush;

/// Why an automation cannot make progress. `None` from
/// [`Automation::error`] means everything is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationError {
    /// Mid-cycle, not interruptible.
    Busy,
    /// Nothing to act on.
    NoTarget,
}

/// Sounds an automation may request. Playback is the embedder's problem;
/// the engine only queues the requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundType {
    Mushroom,
    Burn,
    Pshhh,
}

/// One queued playback request.
#[derive(Debug, Clone, Copy)]
pub struct SoundEvent {
    pub sound: SoundType,
    pub pos: Vector3<f32>,
    pub amplitude: f32,
    pub frequency: f32,
}

/// Borrowed world access handed to automations each event.
pub struct AutoContext<'a> {
    pub paused: bool,
    /// Configured particle density, [0, 2].
    pub particle_density: f32,
    pub particles: &'a mut ParticleManager,
    pub objects: &'a mut ObjectArena,
    pub sounds: &'a mut Vec<SoundEvent>,
}

impl AutoContext<'_> {
    /// Scale an emission interval by the particle density. Zero density
    /// pushes the interval out of reach, disabling emission.
    pub fn particle_adapt(&self, factor: f32) -> f32 {
        if self.particle_density == 0.0 {
            return 1_000_000.0;
        }
        factor / self.particle_density
    }

    pub fn play_sound(&mut self, sound: SoundType, pos: Vector3<f32>, amplitude: f32, frequency: f32) {
        self.sounds.push(SoundEvent {
            sound,
            pos,
            amplitude,
            frequency,
        });
    }
}

/// Behavior common to every automation.
pub trait Automation {
    /// Reset to the initial phase.
    fn init(&mut self);

    /// Process one event. Returning true passes the event on to other
    /// consumers.
    fn event_process(&mut self, ctx: &mut AutoContext, event: &Event) -> bool;

    /// Current blocking condition, if any.
    fn error(&self) -> Option<AutomationError> {
        None
    }

    /// Persist state into `line`. Returning false means there is nothing
    /// worth saving (the automation is in its resting phase).
    fn write(&self, line: &mut ParserLine) -> bool;

    /// Restore state from `line`. Returning false leaves the automation
    /// untouched (the line carries no saved state).
    fn read(&mut self, line: &ParserLine) -> bool;
}

/// Bookkeeping shared by all automations: the bound object, busy flag and
/// the running clocks.
#[derive(Debug, Clone)]
pub struct AutomationBase {
    pub object: ObjectId,
    pub busy: bool,
    pub time: f32,
    pub progress_time: f32,
    pub progress_total: f32,
}

impl AutomationBase {
    pub fn new(object: ObjectId) -> Self {
        Self {
            object,
            busy: false,
            time: 0.0,
            progress_time: 0.0,
            progress_total: 0.0,
        }
    }

    /// Advance the shared clocks. Paused frames tick nothing.
    pub fn event_process(&mut self, ctx: &AutoContext, event: &Event) {
        if ctx.paused {
            return;
        }
        if let Some(r_time) = event.frame_time() {
            self.time += r_time;
            self.progress_time += r_time;
        }
    }

    pub fn write(&self, line: &mut ParserLine) {
        line.add_param("aBusy", self.busy as i32);
        line.add_param("aTime", self.time);
        line.add_param("aProgressTime", self.progress_time);
        line.add_param("aProgressTotal", self.progress_total);
    }

    pub fn read(&mut self, line: &ParserLine) {
        self.busy = line.param("aBusy").map(|p| p.as_bool(false)).unwrap_or(false);
        self.time = line.param("aTime").map(|p| p.as_float(0.0)).unwrap_or(0.0);
        self.progress_time = line
            .param("aProgressTime")
            .map(|p| p.as_float(0.0))
            .unwrap_or(0.0);
        self.progress_total = line
            .param("aProgressTotal")
            .map(|p| p.as_float(0.0))
            .unwrap_or(0.0);
    }
}
