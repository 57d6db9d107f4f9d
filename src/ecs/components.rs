use glam::Vec2;

use crate::host::{AnimationDriver, AudioSink, ClipId};

/// Current world position in scene units.
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec2);

/// Velocity in scene units/second. Present only on animals the host gave a
/// movement body; everything that moves an animal writes through this.
#[derive(Debug, Clone, Copy)]
pub struct Velocity(pub Vec2);

/// The fixed point an animal wanders around: its spawn position.
#[derive(Debug, Clone, Copy)]
pub struct Home(pub Vec2);

/// Which way the sprite faces, from the sign of horizontal velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Animal name for logs.
#[derive(Debug, Clone)]
pub struct AnimalName(pub String);

/// Current behavior state plus the timers that drive it.
#[derive(Debug, Clone, Copy)]
pub struct AnimalState {
    pub behavior: Behavior,
    /// Point currently moved toward while wandering.
    pub target: Vec2,
    /// Seconds until a fresh wander target is picked.
    pub target_timer: f32,
    /// Seconds until the next ambient call.
    pub voice_timer: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Behavior {
    Wandering,
    Sleeping,
}

/// Per-animal movement and voice tunables.
#[derive(Debug, Clone, Copy)]
pub struct WanderParams {
    /// Walk speed in scene units/second.
    pub move_speed: f32,
    /// Wander targets stay within this distance of home.
    pub radius: f32,
    /// Seconds between wander target changes.
    pub retarget_interval: f32,
    /// Base seconds between ambient calls.
    pub call_interval: f32,
}

impl Default for WanderParams {
    fn default() -> Self {
        Self {
            move_speed: 1.5,
            radius: 5.0,
            retarget_interval: 3.0,
            call_interval: 5.0,
        }
    }
}

/// Engine bindings for one animal, resolved once at spawn. Missing entries
/// are reported there and stay inert; every use is guarded.
pub struct Rig {
    pub anim: Option<Box<dyn AnimationDriver>>,
    pub audio: Option<Box<dyn AudioSink>>,
    /// Ambient call played on the voice timer.
    pub call_clip: Option<ClipId>,
    /// One-shot cue played when falling asleep.
    pub sleep_clip: Option<ClipId>,
}

impl Rig {
    /// A rig with nothing bound. Animals with this rig stay silent and
    /// unanimated but otherwise behave.
    pub fn empty() -> Self {
        Self {
            anim: None,
            audio: None,
            call_clip: None,
            sleep_clip: None,
        }
    }
}
