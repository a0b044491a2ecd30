pub mod collision;
pub mod physics_system;
