pub mod map_storage;
pub mod rules_config;
pub mod storage_error;
