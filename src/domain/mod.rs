pub mod account;
pub mod bank;
pub mod ledger;
pub mod projection;
pub mod registry;
pub mod seed;
pub mod session;
