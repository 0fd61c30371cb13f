pub mod calculation;
pub mod core;
pub mod server;
pub mod settings;
pub mod store;

pub use calculation::{calculate, WindowCalculationParameters, WindowCalculationResult};
