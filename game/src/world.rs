pub mod world_helpers;
