pub mod command;
pub mod error;
pub mod money;
pub mod rate;
