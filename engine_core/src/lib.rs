pub mod constants;
pub mod logging;
pub mod storage;
pub mod tiles;
