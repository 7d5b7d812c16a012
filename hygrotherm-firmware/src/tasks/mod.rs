//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod display;
pub mod indicator;
pub mod sensor;

pub use display::display_task;
pub use indicator::indicator_task;
pub use sensor::sensor_task;
