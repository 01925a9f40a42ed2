pub mod animation;
pub mod entity;
