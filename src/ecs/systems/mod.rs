pub mod behavior;
pub mod movement;

/// Run all simulation systems for one fixed tick. `night` is the day/night
/// cycle's current phase, sampled once by the caller so every animal sees
/// the same value this tick.
pub fn tick(world: &mut hecs::World, dt: f32, night: bool, rng: &mut fastrand::Rng) {
    // 1. Behavior state machines (transitions, steering, voice timers)
    behavior::update(world, dt, night, rng);

    // 2. Movement integration (apply velocity to position)
    movement::integrate(world, dt);
}
