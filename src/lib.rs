//! strata-ngin
//!
//! A batching-oriented 3D engine core with a pluggable graphics device.
//! All drawing and state changes flow through the [`device::Device`]
//! trait, so the same scene runs against the offscreen wgpu backend, the
//! no-op null device or a test spy. Geometry is batched in a layered tree
//! keyed by texture pair, object rank and LOD band, which keeps the
//! per-frame state-change count low; on top of the engine sit the
//! particle manager, the game-object arena and frame-driven automation
//! state machines.
//!
//! High-level modules
//! - `device`: the backend contract plus the wgpu and null implementations
//! - `engine`: object ranks, the batching tree, texture cache, decals and
//!   the cached render-state dispatch
//! - `event`: the event stream automations and the engine consume
//! - `particle`: channel-based particle simulation
//! - `object`: game objects and the arena owning them
//! - `automation`: per-object state machines (mushroom ambush and friends)
//! - `level`: the `Cmd key=value` line format used for save/restore
//!

pub mod automation;
pub mod device;
pub mod engine;
pub mod event;
pub mod level;
pub mod object;
pub mod particle;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Matrix4, Vector2, Vector3};
