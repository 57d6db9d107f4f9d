use std::time::Duration;

use glam::Vec2;
use instant::Instant;

use crate::animal::{self, AnimalSpawn};
use crate::camera::{Camera, CameraConfig};
use crate::daynight::{CycleBindings, DayNightCycle};
use crate::ecs::systems;
use crate::host::{ClipId, LogAnimator, LogProp, LogSink};

/// Target simulation tick rate (seconds per tick).
const TICK_RATE: f64 = 1.0 / 60.0;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How many animals to spawn on startup.
const FLOCK_SIZE: usize = 6;
/// Side length of the square the flock scatters over.
const YARD_SPREAD: f32 = 8.0;
/// How often to log tick stats (seconds).
const STATS_LOG_INTERVAL: f64 = 5.0;
/// Demo cadence for the day/night toggle (simulated seconds).
const TOGGLE_PERIOD: f64 = 10.0;
/// How long the demo scenario runs (simulated seconds).
const DEMO_DURATION: f64 = 60.0;
/// Host clip handles for the demo rigs.
const CLIP_CALL: ClipId = ClipId(1);
const CLIP_SLEEP: ClipId = ClipId(2);

// ---------------------------------------------------------------------------
// Tick timing
// ---------------------------------------------------------------------------

struct TickStats {
    frame_count: u64,
    last_log_time: Instant,
    frame_time_sum: f64,
    frame_time_min: f64,
    frame_time_max: f64,
    ticks_since_log: u32,
    frames_since_log: u32,
}

impl TickStats {
    fn new() -> Self {
        Self {
            frame_count: 0,
            last_log_time: Instant::now(),
            frame_time_sum: 0.0,
            frame_time_min: f64::MAX,
            frame_time_max: 0.0,
            ticks_since_log: 0,
            frames_since_log: 0,
        }
    }

    fn record_frame(&mut self, dt: f64, ticks: u32) {
        self.frame_count += 1;
        self.frames_since_log += 1;
        self.ticks_since_log += ticks;
        self.frame_time_sum += dt;
        self.frame_time_min = self.frame_time_min.min(dt);
        self.frame_time_max = self.frame_time_max.max(dt);

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= STATS_LOG_INTERVAL {
            let avg_ms = (self.frame_time_sum / self.frames_since_log as f64) * 1000.0;
            let tps = self.ticks_since_log as f64 / elapsed;
            log::info!(
                "TPS: {:.0} | avg: {:.2}ms | min: {:.2}ms | max: {:.2}ms | total frames: {}",
                tps,
                avg_ms,
                self.frame_time_min * 1000.0,
                self.frame_time_max * 1000.0,
                self.frame_count,
            );
            self.last_log_time = Instant::now();
            self.frame_time_sum = 0.0;
            self.frame_time_min = f64::MAX;
            self.frame_time_max = 0.0;
            self.ticks_since_log = 0;
            self.frames_since_log = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level simulation state: the yard, its day/night cycle and the
/// viewpoint, plus the fixed-timestep bookkeeping.
struct App {
    world: hecs::World,
    cycle: DayNightCycle,
    camera: Camera,

    // RNG (shared, deterministic per session)
    rng: fastrand::Rng,

    // Fixed timestep
    accumulator: f64,
    tick_count: u64,
    sim_time: f64,
    next_toggle_at: f64,

    stats: TickStats,
}

impl App {
    fn new() -> Self {
        let mut rng = fastrand::Rng::new();
        let mut world = hecs::World::new();

        for _ in 0..FLOCK_SIZE {
            let name = animal::generate_animal_name(&mut rng);
            let home = Vec2::new(rng.f32() - 0.5, rng.f32() - 0.5) * YARD_SPREAD;

            let mut spawn = AnimalSpawn::new(name.clone(), home);
            spawn.anim = Some(Box::new(LogAnimator::new(name.clone())));
            spawn.audio = Some(Box::new(LogSink::new(name)));
            spawn.call_clip = Some(CLIP_CALL);
            spawn.sleep_clip = Some(CLIP_SLEEP);
            animal::spawn_animal(&mut world, spawn, &mut rng);
        }
        log::info!("spawned a flock of {}", FLOCK_SIZE);

        let cycle = DayNightCycle::new(CycleBindings {
            sun: Some(Box::new(LogProp::new("sun", true))),
            moon: Some(Box::new(LogProp::new("moon", false))),
            day_ambience: Some(Box::new(LogSink::new("day ambience"))),
            night_ambience: Some(Box::new(LogSink::new("night ambience"))),
        });

        Self {
            world,
            cycle,
            camera: Camera::new(CameraConfig::default()),
            rng,
            accumulator: 0.0,
            tick_count: 0,
            sim_time: 0.0,
            next_toggle_at: TOGGLE_PERIOD,
            stats: TickStats::new(),
        }
    }

    /// Run fixed-timestep simulation ticks.
    fn run_fixed_update(&mut self, dt: f64) {
        self.accumulator += dt;

        if self.accumulator > MAX_ACCUMULATOR {
            self.accumulator = MAX_ACCUMULATOR;
        }

        while self.accumulator >= TICK_RATE {
            self.step();
            self.accumulator -= TICK_RATE;
            self.tick_count += 1;
        }
    }

    /// One simulation tick: demo scenario driving, then the systems.
    fn step(&mut self) {
        let dt = TICK_RATE as f32;
        self.sim_time += TICK_RATE;

        if self.sim_time >= self.next_toggle_at {
            self.cycle.toggle();
            self.next_toggle_at += TOGGLE_PERIOD;
        }

        systems::tick(&mut self.world, dt, self.cycle.is_night(), &mut self.rng);

        // Scripted viewpoint input: a slow circular pan with a gentle
        // zoom wobble, standing in for the host's input layer.
        let t = self.sim_time as f32;
        let axes = Vec2::new((t * 0.4).sin(), (t * 0.4).cos());
        let scroll = (t * 0.25).sin() * 0.1;
        self.camera.update(dt, axes, scroll);
    }
}

/// Entry point: assemble the yard and run the bounded demo loop.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    log::info!(
        "yard is open: {} animals, day/night flips every {:.0}s, demo runs {:.0}s",
        FLOCK_SIZE,
        TOGGLE_PERIOD,
        DEMO_DURATION,
    );

    let mut last_frame_time = Instant::now();
    while app.sim_time < DEMO_DURATION {
        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f64();
        last_frame_time = now;

        let ticks_before = app.tick_count;
        app.run_fixed_update(dt);
        app.stats
            .record_frame(dt, (app.tick_count - ticks_before) as u32);

        std::thread::sleep(Duration::from_secs_f64(TICK_RATE));
    }

    log::info!("demo finished after {} ticks", app.tick_count);
    Ok(())
}
