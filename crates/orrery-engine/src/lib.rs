pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::host::Host;
pub use api::types::{EntityId, GameEvent};
pub use assets::loader::{model_channel, LoadStatus, ModelHandle, ModelRequest};
pub use assets::manifest::{
    BodyDescriptor, CameraDescriptor, LineStyle, MaterialDescriptor, ModelDescriptor, SceneManifest,
};
pub use assets::model::{ClipInfo, ModelAsset};
pub use assets::AssetError;
pub use bridge::protocol::{FrameData, ProtocolLayout};
pub use components::animation::ClipPlayer;
pub use components::entity::Entity;
pub use crate::core::scene::Scene;
pub use crate::core::time::{FixedTimestep, SimClock};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{keys, InputState, MoveState, WheelConfig};
pub use renderer::camera::{CameraFrame, FollowRig, PerspectiveCamera};
pub use renderer::instance::{NodeBuffer, NodeInstance};
pub use systems::animation::tick_clips;
pub use systems::lighting::{AmbientLight, DirectionalLight, LightRig, PointLight};
pub use systems::movement::{integrate, FlightModel, Spaceship};
pub use systems::orbit::{ring_points, spin_angle, update_orbits, Orbit, Planet};
pub use systems::proximity::{Navigation, ProximityNavigator};
pub use systems::render::build_node_buffer;
