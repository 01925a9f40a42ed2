//! Frame buffer layout.
//! Read back by the JavaScript host through `get_frame_ptr` and the capacity getters.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 16 floats]
//! [Nodes: max_nodes × 12 floats]
//! [Events: max_events × 4 floats]
//! [Orbit rings: max_orbit_vertices × 3 floats]
//! ```
//!
//! Capacities are written into the header every frame.
//! The host reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraFrame;
use crate::renderer::instance::NodeInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_NODES: usize = 2;
pub const HEADER_NODE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_MAX_ORBIT_VERTICES: usize = 6;
pub const HEADER_ORBIT_VERTEX_COUNT: usize = 7;
pub const HEADER_ELAPSED: usize = 8;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section (wire format, never changes).
pub const CAMERA_FLOATS: usize = CameraFrame::FLOATS;

/// Floats per node transform (wire format, never changes).
pub const NODE_FLOATS: usize = NodeInstance::FLOATS;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Floats per orbit ring vertex: x, y, z.
pub const ORBIT_VERTEX_FLOATS: usize = 3;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_nodes: usize,
    pub max_events: usize,
    pub max_orbit_vertices: usize,

    pub node_data_floats: usize,
    pub event_data_floats: usize,
    pub orbit_data_floats: usize,

    /// Offset (in floats) where the camera begins.
    pub camera_offset: usize,
    /// Offset (in floats) where node data begins.
    pub node_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where orbit ring data begins.
    pub orbit_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

/// Everything that goes into one frame.
pub struct FrameData<'a> {
    pub frame_counter: u32,
    /// Simulation seconds since start.
    pub elapsed: f64,
    pub camera: &'a CameraFrame,
    pub nodes: &'a [NodeInstance],
    pub events: &'a [GameEvent],
    pub orbit_vertices: &'a [[f32; 3]],
}

/// Section sizes actually written, after truncation to capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenCounts {
    pub nodes: usize,
    pub events: usize,
    pub orbit_vertices: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_nodes: usize, max_events: usize, max_orbit_vertices: usize) -> Self {
        let node_data_floats = max_nodes * NODE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let orbit_data_floats = max_orbit_vertices * ORBIT_VERTEX_FLOATS;

        let camera_offset = HEADER_FLOATS;
        let node_data_offset = camera_offset + CAMERA_FLOATS;
        let event_data_offset = node_data_offset + node_data_floats;
        let orbit_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = orbit_data_offset + orbit_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_nodes,
            max_events,
            max_orbit_vertices,
            node_data_floats,
            event_data_floats,
            orbit_data_floats,
            camera_offset,
            node_data_offset,
            event_data_offset,
            orbit_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_nodes, config.max_events, config.max_orbit_vertices)
    }

    /// A zeroed buffer of the right size.
    pub fn allocate(&self) -> Vec<f32> {
        vec![0.0; self.buffer_total_floats]
    }

    /// Write one frame into `out`. Sections longer than their capacity are truncated.
    ///
    /// `out` must be at least `buffer_total_floats` long; shorter buffers are left untouched.
    pub fn write_frame(&self, out: &mut [f32], frame: &FrameData<'_>) -> WrittenCounts {
        if out.len() < self.buffer_total_floats {
            log::error!(
                "Frame buffer too small: {} < {}",
                out.len(),
                self.buffer_total_floats
            );
            return WrittenCounts { nodes: 0, events: 0, orbit_vertices: 0 };
        }

        let nodes = frame.nodes.len().min(self.max_nodes);
        let events = frame.events.len().min(self.max_events);
        let orbit_vertices = frame.orbit_vertices.len().min(self.max_orbit_vertices);
        if nodes < frame.nodes.len() {
            log::warn!("Dropping {} nodes over capacity", frame.nodes.len() - nodes);
        }
        if events < frame.events.len() {
            log::warn!("Dropping {} events over capacity", frame.events.len() - events);
        }

        let header = &mut out[..HEADER_FLOATS];
        header.fill(0.0);
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = frame.frame_counter as f32;
        header[HEADER_MAX_NODES] = self.max_nodes as f32;
        header[HEADER_NODE_COUNT] = nodes as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = events as f32;
        header[HEADER_MAX_ORBIT_VERTICES] = self.max_orbit_vertices as f32;
        header[HEADER_ORBIT_VERTEX_COUNT] = orbit_vertices as f32;
        header[HEADER_ELAPSED] = frame.elapsed as f32;

        let camera: &[f32] = bytemuck::cast_slice(std::slice::from_ref(frame.camera));
        out[self.camera_offset..self.camera_offset + CAMERA_FLOATS].copy_from_slice(camera);

        let node_floats: &[f32] = bytemuck::cast_slice(&frame.nodes[..nodes]);
        out[self.node_data_offset..self.node_data_offset + node_floats.len()]
            .copy_from_slice(node_floats);

        let event_floats: &[f32] = bytemuck::cast_slice(&frame.events[..events]);
        out[self.event_data_offset..self.event_data_offset + event_floats.len()]
            .copy_from_slice(event_floats);

        let ring_floats: &[f32] = bytemuck::cast_slice(&frame.orbit_vertices[..orbit_vertices]);
        out[self.orbit_data_offset..self.orbit_data_offset + ring_floats.len()]
            .copy_from_slice(ring_floats);

        WrittenCounts { nodes, events, orbit_vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_nodes, 16);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.max_orbit_vertices, 1024);

        assert_eq!(layout.camera_offset, 16);
        assert_eq!(layout.node_data_offset, 32);
        assert_eq!(layout.event_data_offset, 32 + 16 * 12);
        assert_eq!(layout.orbit_data_offset, 32 + 16 * 12 + 32 * 4);
        assert_eq!(layout.buffer_total_floats, 32 + 16 * 12 + 32 * 4 + 1024 * 3);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(7, 5, 300);

        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.node_data_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.event_data_offset, layout.node_data_offset + layout.node_data_floats);
        assert_eq!(layout.orbit_data_offset, layout.event_data_offset + layout.event_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.orbit_data_offset + layout.orbit_data_floats);
    }

    #[test]
    fn write_frame_fills_sections() {
        let layout = ProtocolLayout::new(4, 2, 8);
        let mut out = layout.allocate();

        let camera = CameraFrame {
            eye: [1.0, 2.0, 3.0],
            fov_degrees: 75.0,
            ..Default::default()
        };
        let nodes = [NodeInstance { id: 9.0, scale: 0.1, ..Default::default() }];
        let events = [GameEvent::new(3.0, 1.0, 0.0, 0.0)];
        let rings = [[60.0, 0.0, -100.0], [0.0, 0.0, -40.0]];

        let counts = layout.write_frame(
            &mut out,
            &FrameData {
                frame_counter: 42,
                elapsed: 0.7,
                camera: &camera,
                nodes: &nodes,
                events: &events,
                orbit_vertices: &rings,
            },
        );

        assert_eq!(counts, WrittenCounts { nodes: 1, events: 1, orbit_vertices: 2 });
        assert_eq!(out[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(out[HEADER_FRAME_COUNTER], 42.0);
        assert_eq!(out[HEADER_MAX_NODES], 4.0);
        assert_eq!(out[HEADER_NODE_COUNT], 1.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(out[HEADER_ORBIT_VERTEX_COUNT], 2.0);
        assert!((out[HEADER_ELAPSED] - 0.7).abs() < 1e-6);

        assert_eq!(&out[layout.camera_offset..layout.camera_offset + 3], &[1.0, 2.0, 3.0]);
        assert_eq!(out[layout.camera_offset + 9], 75.0);
        assert_eq!(out[layout.node_data_offset], 9.0);
        assert_eq!(out[layout.node_data_offset + 8], 0.1);
        assert_eq!(out[layout.event_data_offset], 3.0);
        assert_eq!(out[layout.orbit_data_offset + 3], 0.0);
        assert_eq!(out[layout.orbit_data_offset + 5], -40.0);
    }

    #[test]
    fn write_frame_truncates_to_capacity() {
        let layout = ProtocolLayout::new(1, 1, 1);
        let mut out = layout.allocate();
        let nodes = [NodeInstance::default(); 3];
        let events = [GameEvent::default(); 2];
        let rings = [[0.0; 3]; 5];

        let counts = layout.write_frame(
            &mut out,
            &FrameData {
                frame_counter: 0,
                elapsed: 0.0,
                camera: &CameraFrame::default(),
                nodes: &nodes,
                events: &events,
                orbit_vertices: &rings,
            },
        );

        assert_eq!(counts, WrittenCounts { nodes: 1, events: 1, orbit_vertices: 1 });
        assert_eq!(out[HEADER_NODE_COUNT], 1.0);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let layout = ProtocolLayout::new(1, 1, 1);
        let mut out = vec![7.0; 4];
        let counts = layout.write_frame(
            &mut out,
            &FrameData {
                frame_counter: 1,
                elapsed: 0.0,
                camera: &CameraFrame::default(),
                nodes: &[],
                events: &[],
                orbit_vertices: &[],
            },
        );
        assert_eq!(counts.nodes, 0);
        assert_eq!(out, vec![7.0; 4]);
    }
}
