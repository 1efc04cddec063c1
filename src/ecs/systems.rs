use hecs::World;

use super::components::{Placement, ShaderClock, SurfaceIndex};
use crate::domain::config::TimeUniformPolicy;
use crate::domain::motion::SurfacePlacement;

/// Put every surface at its slot on the ring for the given rotation.
pub fn place_surfaces(world: &mut World, rotation: f64, radius: f64) {
    let count = world.query::<&SurfaceIndex>().iter().count();
    for (_, (index, placement)) in world.query_mut::<(&SurfaceIndex, &mut Placement)>() {
        placement.0 = SurfacePlacement::on_ring(index.0, count, rotation, radius);
    }
}

/// Advance shader clocks by one frame according to `policy`.
pub fn advance_shader_time(world: &mut World, policy: TimeUniformPolicy) {
    match policy {
        TimeUniformPolicy::AllSurfaces => {
            for (_, clock) in world.query_mut::<&mut ShaderClock>() {
                clock.0 += 1;
            }
        }
        TimeUniformPolicy::LastSurface => {
            let last = world
                .query::<(&SurfaceIndex, &ShaderClock)>()
                .iter()
                .max_by_key(|(_, (index, _))| index.0)
                .map(|(entity, _)| entity);
            if let Some(entity) = last {
                if let Ok(mut clock) = world.get::<&mut ShaderClock>(entity) {
                    clock.0 += 1;
                }
            }
        }
    }
}
