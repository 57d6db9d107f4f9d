//! Seams to the host engine. The scene consumes these services (animation
//! flags, one-shot audio, prop visibility) without knowing how the host
//! implements them; bindings are resolved once at assembly and never
//! re-queried.

/// Opaque handle to a host-loaded audio asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipId(pub u32);

/// Named boolean flags understood by the host's animation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimFlag {
    Moving,
    Sleeping,
}

impl AnimFlag {
    pub fn label(self) -> &'static str {
        match self {
            AnimFlag::Moving => "moving",
            AnimFlag::Sleeping => "sleeping",
        }
    }
}

/// Animation driver for one scene object. Flags are fire-and-forget; the
/// host decides what they mean visually.
pub trait AnimationDriver: Send + Sync {
    fn set_flag(&mut self, flag: AnimFlag, value: bool);
}

/// Audio output owned by one scene object or channel: fire-and-forget clip
/// playback plus a mute switch.
pub trait AudioSink: Send + Sync {
    fn play(&mut self, clip: ClipId);
    fn set_muted(&mut self, muted: bool);
}

/// A scene prop that can be shown or hidden (sun, moon).
pub trait Prop: Send + Sync {
    fn set_active(&mut self, active: bool);
}

// ---------------------------------------------------------------------------
// Demo implementations
// ---------------------------------------------------------------------------
// The headless demo has no real engine behind it; these log what the host
// would do and remember the last state they were told.

/// Prop that records visibility and logs flips at debug level.
pub struct LogProp {
    name: &'static str,
    active: bool,
}

impl LogProp {
    pub fn new(name: &'static str, active: bool) -> Self {
        Self { name, active }
    }
}

impl Prop for LogProp {
    fn set_active(&mut self, active: bool) {
        if self.active != active {
            log::debug!("{} {}", self.name, if active { "shown" } else { "hidden" });
        }
        self.active = active;
    }
}

/// Audio sink that logs playback and mute changes at debug level.
pub struct LogSink {
    name: String,
    muted: bool,
}

impl LogSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            muted: false,
        }
    }
}

impl AudioSink for LogSink {
    fn play(&mut self, clip: ClipId) {
        if !self.muted {
            log::debug!("{} plays clip {}", self.name, clip.0);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if self.muted != muted {
            log::debug!("{} {}", self.name, if muted { "muted" } else { "unmuted" });
        }
        self.muted = muted;
    }
}

/// Animation driver that logs flag changes at debug level.
pub struct LogAnimator {
    name: String,
    moving: bool,
    sleeping: bool,
}

impl LogAnimator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            moving: false,
            sleeping: false,
        }
    }
}

impl AnimationDriver for LogAnimator {
    fn set_flag(&mut self, flag: AnimFlag, value: bool) {
        // Only log edges; flags are re-asserted every tick.
        let slot = match flag {
            AnimFlag::Moving => &mut self.moving,
            AnimFlag::Sleeping => &mut self.sleeping,
        };
        if *slot != value {
            log::debug!("{}: {} = {}", self.name, flag.label(), value);
        }
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_labels() {
        assert_eq!(AnimFlag::Moving.label(), "moving");
        assert_eq!(AnimFlag::Sleeping.label(), "sleeping");
    }

    #[test]
    fn log_sinks_track_state() {
        let mut prop = LogProp::new("sun", true);
        prop.set_active(false);
        assert!(!prop.active);

        let mut sink = LogSink::new("ambience");
        sink.set_muted(true);
        assert!(sink.muted);
        sink.play(ClipId(3)); // muted: no-op beyond the state check

        let mut anim = LogAnimator::new("hen");
        anim.set_flag(AnimFlag::Sleeping, true);
        assert!(anim.sleeping);
        assert!(!anim.moving);
    }
}
