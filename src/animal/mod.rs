use glam::Vec2;

use crate::ecs::components::{
    AnimalName, AnimalState, Behavior, Facing, Home, Position, Rig, Velocity, WanderParams,
};
use crate::ecs::systems::behavior;
use crate::host::{AnimationDriver, AudioSink, ClipId};

/// Everything needed to stand one animal up in the world. The host pieces
/// are optional; leaving one out is reported at spawn and the animal just
/// runs without it.
pub struct AnimalSpawn {
    pub name: String,
    /// Spawn position, which is also the center of its wander disk.
    pub home: Vec2,
    pub params: WanderParams,
    /// Whether the host attached a movement body. Without one the animal
    /// still sleeps, wakes and calls, it just never leaves `home`.
    pub body: bool,
    pub anim: Option<Box<dyn AnimationDriver>>,
    pub audio: Option<Box<dyn AudioSink>>,
    pub call_clip: Option<ClipId>,
    pub sleep_clip: Option<ClipId>,
}

impl AnimalSpawn {
    /// A bare spawn at `home`; callers fill in the host pieces they have.
    pub fn new(name: impl Into<String>, home: Vec2) -> Self {
        Self {
            name: name.into(),
            home,
            params: WanderParams::default(),
            body: true,
            anim: None,
            audio: None,
            call_clip: None,
            sleep_clip: None,
        }
    }
}

/// Spawn one animal. Starts wandering with a target already picked and the
/// voice countdown staggered so a flock doesn't call in unison.
pub fn spawn_animal(
    world: &mut hecs::World,
    spawn: AnimalSpawn,
    rng: &mut fastrand::Rng,
) -> hecs::Entity {
    if !spawn.body {
        log::error!("{}: no movement body attached", spawn.name);
    }
    if spawn.anim.is_none() {
        log::error!("{}: no animation driver attached", spawn.name);
    }

    let mut state = AnimalState {
        behavior: Behavior::Wandering,
        target: spawn.home,
        target_timer: 0.0,
        voice_timer: rng.f32() * spawn.params.call_interval,
    };
    behavior::retarget(&mut state, spawn.home, &spawn.params, rng);

    let rig = Rig {
        anim: spawn.anim,
        audio: spawn.audio,
        call_clip: spawn.call_clip,
        sleep_clip: spawn.sleep_clip,
    };

    if spawn.body {
        world.spawn((
            Position(spawn.home),
            Velocity(Vec2::ZERO),
            Home(spawn.home),
            Facing::Right,
            AnimalName(spawn.name),
            state,
            spawn.params,
            rig,
        ))
    } else {
        world.spawn((
            Position(spawn.home),
            Home(spawn.home),
            Facing::Right,
            AnimalName(spawn.name),
            state,
            spawn.params,
            rig,
        ))
    }
}

/// Generate a procedural barnyard name from name parts.
pub fn generate_animal_name(rng: &mut fastrand::Rng) -> String {
    const PREFIXES: &[&str] = &[
        "", "", "", "", "", "Old ", "Little ", "Big ", "Granny ", "Farmer ",
        "Miss ", "Sergeant ",
    ];
    const NAMES: &[&str] = &[
        "Clucky", "Henrietta", "Feathers", "Dot", "Goldie", "Butterscotch",
        "Daisy", "Rosie", "Clover", "Hazel", "Maple", "Biddy", "Pip",
        "Speckle", "Waddles", "Strut", "Gertie", "Mabel", "Pearl", "Olive",
        "Poppy", "Bess", "Peck", "Bantam",
    ];
    const SUFFIXES: &[&str] = &[
        "", "", "", "", "", " Jr.", " II", " the Brave", " Featherfoot",
    ];
    format!(
        "{}{}{}",
        PREFIXES[rng.usize(0..PREFIXES.len())],
        NAMES[rng.usize(0..NAMES.len())],
        SUFFIXES[rng.usize(0..SUFFIXES.len())],
    )
}
