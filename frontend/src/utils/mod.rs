pub mod location;
pub mod storage;
