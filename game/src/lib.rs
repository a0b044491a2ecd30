pub mod constants;
pub mod entity;
pub mod physics;
pub mod player;
pub mod world;
