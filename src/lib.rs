pub mod browser;
pub mod capture;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod storage;
