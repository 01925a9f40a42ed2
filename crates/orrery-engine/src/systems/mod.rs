pub mod animation;
pub mod lighting;
pub mod movement;
pub mod orbit;
pub mod proximity;
pub mod render;
