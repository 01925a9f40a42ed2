//! Animation system: advances every entity's clip player.

use crate::core::scene::Scene;

/// Tick all entity clip players by `dt` seconds.
///
/// Call this once per tick before building the node buffer.
pub fn tick_clips(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        if let Some(ref mut player) = entity.clip {
            player.tick(dt);
        }
    }
}
