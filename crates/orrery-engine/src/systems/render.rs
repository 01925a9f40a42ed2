use crate::components::entity::Entity;
use crate::renderer::instance::{NodeBuffer, NodeInstance};

/// Build the node buffer from a set of entities.
/// Inactive entities are skipped; order follows the iterator.
pub fn build_node_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut NodeBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let (clip, clip_time) = match &entity.clip {
            Some(player) => (player.clip as f32, player.time),
            None => (NodeInstance::NO_CLIP, 0.0),
        };

        let q = entity.rotation;
        buffer.push(NodeInstance {
            id: entity.id.0 as f32,
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            qx: q.x,
            qy: q.y,
            qz: q.z,
            qw: q.w,
            scale: entity.scale,
            clip,
            clip_time,
            _pad: 0.0,
        });
    }
}
