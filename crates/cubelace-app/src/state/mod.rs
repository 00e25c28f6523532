//! Application state outside the controller.

pub use self::settings::{Settings, StrategySet};

mod settings;
