pub mod coin;
pub mod engine;
pub mod error;
pub mod event;
pub mod reader;
pub mod receipt;
pub mod station;
pub mod writer;
