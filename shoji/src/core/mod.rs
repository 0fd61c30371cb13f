mod display;
mod window;

pub use display::{AdjacentScreens, Direction, Screen, ScreenId, UsableScreens};
pub use window::{Window, WindowId};
