use glam::Vec2;

use crate::ecs::components::{
    AnimalName, AnimalState, Behavior, Facing, Home, Position, Rig, Velocity, WanderParams,
};
use crate::host::AnimFlag;

/// Distance to the wander target that counts as arrival.
const ARRIVE_DIST: f32 = 0.2;
/// Horizontal speed below which facing is left unchanged.
const FACING_DEADZONE: f32 = 0.01;
/// Squared speed above which the moving animation flag is raised.
const MOVING_SQ: f32 = 0.1;

/// Update animal state machines: day/night transitions, wander steering,
/// ambient voice timers. `night` is the scene's day/night signal, read once
/// per tick by the caller.
pub fn update(world: &mut hecs::World, dt: f32, night: bool, rng: &mut fastrand::Rng) {
    for (_, (state, rig, name, params, home, pos, facing, mut vel)) in world.query_mut::<(
        &mut AnimalState,
        &mut Rig,
        &AnimalName,
        &WanderParams,
        &Home,
        &Position,
        &mut Facing,
        Option<&mut Velocity>,
    )>() {
        // --- Transitions (edge-triggered; holding the signal is a no-op) ---
        if night {
            if state.behavior != Behavior::Sleeping {
                state.behavior = Behavior::Sleeping;
                if let (Some(audio), Some(clip)) = (rig.audio.as_mut(), rig.sleep_clip) {
                    audio.play(clip);
                }
                if let Some(v) = &mut vel {
                    v.0 = Vec2::ZERO;
                }
                log::info!("{} is going to sleep", name.0);
            }
        } else if state.behavior != Behavior::Wandering {
            state.behavior = Behavior::Wandering;
            if let Some(anim) = rig.anim.as_mut() {
                anim.set_flag(AnimFlag::Sleeping, false);
            }
            retarget(state, home.0, params, rng);
            state.voice_timer = params.call_interval;
            log::info!("{} woke up and is wandering", name.0);
        }

        // --- Per-state tick ---
        match state.behavior {
            Behavior::Wandering => {
                // Steering needs the movement body; without it the animal
                // still transitions and calls, it just never moves.
                if let Some(v) = &mut vel {
                    state.target_timer -= dt;
                    if state.target_timer <= 0.0 {
                        retarget(state, home.0, params, rng);
                    }

                    let dir = (state.target - pos.0).normalize_or_zero();
                    v.0 = dir * params.move_speed;

                    // Close enough: force a fresh target next tick.
                    if pos.0.distance(state.target) < ARRIVE_DIST {
                        state.target_timer = 0.0;
                    }

                    if v.0.x < -FACING_DEADZONE {
                        *facing = Facing::Left;
                    } else if v.0.x > FACING_DEADZONE {
                        *facing = Facing::Right;
                    }
                }

                if let Some(anim) = rig.anim.as_mut() {
                    let moving = vel.as_ref().map_or(false, |v| v.0.length_squared() > MOVING_SQ);
                    anim.set_flag(AnimFlag::Moving, moving);
                }

                // --- Ambient voice ---
                state.voice_timer -= dt;
                if state.voice_timer <= 0.0 {
                    if let (Some(audio), Some(clip)) = (rig.audio.as_mut(), rig.call_clip) {
                        audio.play(clip);
                        // Random +/- 1s so a flock doesn't call in lockstep.
                        state.voice_timer = params.call_interval + (rng.f32() * 2.0 - 1.0);
                        log::debug!("{} calls out", name.0);
                    }
                }
            }
            Behavior::Sleeping => {
                if let Some(v) = &mut vel {
                    v.0 = Vec2::ZERO;
                }
                if let Some(anim) = rig.anim.as_mut() {
                    anim.set_flag(AnimFlag::Moving, false);
                    anim.set_flag(AnimFlag::Sleeping, true);
                }
            }
        }
    }
}

/// Pick a new wander target uniformly inside the disk around `home` and
/// restart the retarget countdown.
pub(crate) fn retarget(
    state: &mut AnimalState,
    home: Vec2,
    params: &WanderParams,
    rng: &mut fastrand::Rng,
) {
    state.target = home + disk_offset(params.radius, rng);
    state.target_timer = params.retarget_interval;
}

/// Uniform random point in a disk of the given radius (sqrt keeps the
/// distribution uniform by area, not bunched at the center).
fn disk_offset(radius: f32, rng: &mut fastrand::Rng) -> Vec2 {
    let angle = rng.f32() * std::f32::consts::TAU;
    let dist = radius * rng.f32().sqrt();
    Vec2::new(angle.cos(), angle.sin()) * dist
}
