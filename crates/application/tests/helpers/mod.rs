#![allow(dead_code)]

mod mock_models;

pub use mock_models::*;
pub use mock_ports::*;
