//! Domain model types

pub mod carrier;
pub mod good;
pub mod staging;
pub mod worker;

pub use carrier::Carrier;
pub use good::{Good, Valuable};
pub use staging::Staging;
pub use worker::Worker;
