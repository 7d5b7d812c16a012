//! Climate sensor drivers

pub mod dht11;
pub mod timing;

pub use dht11::{Dht11Link, LinkTiming};
pub use timing::BoundedWait;
