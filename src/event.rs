//! Simulation events.
//!
//! Events are a tagged sum type: the payload of each variant is statically
//! known from the discriminant, so consumers never have to guess which
//! fields are live.

/// An event delivered to the engine and to object automations.
///
/// The only event the core simulation reacts to is [`Event::Frame`]; the
/// remaining variants exist so embedding applications can route their input
/// through the same channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// One simulation frame. `r_time` is the elapsed time in seconds since
    /// the previous frame.
    Frame { r_time: f32 },
    /// A key press, identified by the embedder's key code.
    KeyDown { code: u32 },
    /// Mouse movement in interface coordinates.
    MouseMove { x: f32, y: f32 },
}

impl Event {
    /// Frame-time of a frame event, `None` for anything else.
    pub fn frame_time(&self) -> Option<f32> {
        match *self {
            Event::Frame { r_time } => Some(r_time),
            _ => None,
        }
    }
}

/// Produces [`Event::Frame`] ticks from wall-clock time.
#[derive(Debug)]
pub struct FrameClock {
    last: instant::Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: instant::Instant::now(),
        }
    }

    /// A frame event carrying the seconds elapsed since the previous tick.
    pub fn tick(&mut self) -> Event {
        let now = instant::Instant::now();
        let r_time = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        Event::Frame { r_time }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
