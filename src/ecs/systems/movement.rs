use crate::ecs::components::{Position, Velocity};

/// Integrate velocity into position. Stands in for the host engine's
/// kinematics; entities without a velocity (no movement body) are skipped.
///
/// No friction or damping here: the behavior system sets velocity outright
/// every tick, and sleeping animals must stay at exactly zero.
pub fn integrate(world: &mut hecs::World, dt: f32) {
    for (_, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0 * dt;
    }
}
