use crate::host::{AudioSink, Prop};

/// Scene pieces the day/night cycle drives. Each binding is optional; a
/// missing one is reported once at construction and skipped from then on.
pub struct CycleBindings {
    pub sun: Option<Box<dyn Prop>>,
    pub moon: Option<Box<dyn Prop>>,
    pub day_ambience: Option<Box<dyn AudioSink>>,
    pub night_ambience: Option<Box<dyn AudioSink>>,
}

impl CycleBindings {
    /// No scene pieces at all. The cycle still tracks its phase.
    pub fn empty() -> Self {
        Self {
            sun: None,
            moon: None,
            day_ambience: None,
            night_ambience: None,
        }
    }
}

/// Day/night toggle. Owns the current phase and, on each flip, resyncs the
/// bound scene: sun and day ambience live by day, moon and night ambience
/// by night.
pub struct DayNightCycle {
    is_day: bool,
    bindings: CycleBindings,
}

impl DayNightCycle {
    /// Starts in day mode. The scene is assumed authored for daytime, so
    /// nothing is pushed to the bindings until the first toggle.
    pub fn new(bindings: CycleBindings) -> Self {
        if bindings.sun.is_none() {
            log::error!("day/night cycle: no sun prop bound");
        }
        if bindings.moon.is_none() {
            log::error!("day/night cycle: no moon prop bound");
        }
        if bindings.day_ambience.is_none() {
            log::error!("day/night cycle: no day ambience bound");
        }
        if bindings.night_ambience.is_none() {
            log::error!("day/night cycle: no night ambience bound");
        }
        Self {
            is_day: true,
            bindings,
        }
    }

    pub fn is_day(&self) -> bool {
        self.is_day
    }

    pub fn is_night(&self) -> bool {
        !self.is_day
    }

    /// Flip the phase and resync every bound scene piece. Sun/moon
    /// visibility and the two ambience mutes are kept mutually exclusive.
    pub fn toggle(&mut self) {
        self.is_day = !self.is_day;
        let day = self.is_day;
        if let Some(sun) = self.bindings.sun.as_mut() {
            sun.set_active(day);
        }
        if let Some(moon) = self.bindings.moon.as_mut() {
            moon.set_active(!day);
        }
        if let Some(ambience) = self.bindings.day_ambience.as_mut() {
            ambience.set_muted(!day);
        }
        if let Some(ambience) = self.bindings.night_ambience.as_mut() {
            ambience.set_muted(day);
        }
        log::info!("switched to {} mode", if day { "day" } else { "night" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ClipId;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Prop whose active flag can be read from outside the cycle.
    #[derive(Clone)]
    struct SharedProp(Arc<AtomicBool>);

    impl SharedProp {
        fn new(active: bool) -> Self {
            Self(Arc::new(AtomicBool::new(active)))
        }
        fn active(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Prop for SharedProp {
        fn set_active(&mut self, active: bool) {
            self.0.store(active, Ordering::SeqCst);
        }
    }

    /// Audio sink whose mute flag can be read from outside the cycle.
    #[derive(Clone)]
    struct SharedMute(Arc<AtomicBool>);

    impl SharedMute {
        fn new() -> Self {
            Self(Arc::new(AtomicBool::new(false)))
        }
        fn muted(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl AudioSink for SharedMute {
        fn play(&mut self, _clip: ClipId) {}
        fn set_muted(&mut self, muted: bool) {
            self.0.store(muted, Ordering::SeqCst);
        }
    }

    struct Handles {
        sun: SharedProp,
        moon: SharedProp,
        day: SharedMute,
        night: SharedMute,
    }

    fn bound_cycle() -> (DayNightCycle, Handles) {
        let handles = Handles {
            sun: SharedProp::new(true),
            moon: SharedProp::new(false),
            day: SharedMute::new(),
            night: SharedMute::new(),
        };
        let cycle = DayNightCycle::new(CycleBindings {
            sun: Some(Box::new(handles.sun.clone())),
            moon: Some(Box::new(handles.moon.clone())),
            day_ambience: Some(Box::new(handles.day.clone())),
            night_ambience: Some(Box::new(handles.night.clone())),
        });
        (cycle, handles)
    }

    #[test]
    fn starts_in_day_mode() {
        let cycle = DayNightCycle::new(CycleBindings::empty());
        assert!(cycle.is_day());
        assert!(!cycle.is_night());
    }

    #[test]
    fn toggle_parity() {
        let (mut cycle, handles) = bound_cycle();

        for i in 1..=7 {
            cycle.toggle();
            let expect_day = i % 2 == 0;
            assert_eq!(cycle.is_day(), expect_day, "after {} toggles", i);
            assert_eq!(handles.sun.active(), expect_day);
        }
    }

    #[test]
    fn sun_and_moon_are_mutually_exclusive() {
        let (mut cycle, handles) = bound_cycle();

        for _ in 0..4 {
            cycle.toggle();
            assert_ne!(handles.sun.active(), handles.moon.active());
            assert_eq!(handles.sun.active(), cycle.is_day());
        }
    }

    #[test]
    fn ambience_mutes_swap_with_phase() {
        let (mut cycle, handles) = bound_cycle();

        cycle.toggle(); // night
        assert!(handles.day.muted());
        assert!(!handles.night.muted());

        cycle.toggle(); // day again
        assert!(!handles.day.muted());
        assert!(handles.night.muted());
    }

    #[test]
    fn missing_bindings_leave_toggle_working() {
        let mut cycle = DayNightCycle::new(CycleBindings::empty());

        cycle.toggle();
        assert!(cycle.is_night());
        cycle.toggle();
        assert!(cycle.is_day());
    }
}
