mod behavior;
mod controller;
mod label_format;

pub use behavior::ChartBehavior;
pub use controller::{ChartController, LifecyclePhase};
pub use label_format::{NumericInput, format_number};
