//! Application layer for muatan

pub mod config;
pub mod input;
pub mod session;

pub use config::Config;
pub use input::collect_goods;
pub use session::{run_session, SessionReport};
