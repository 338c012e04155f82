pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod telemetry;
pub mod worker;
