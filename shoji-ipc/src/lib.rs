pub mod action;
pub mod geometry;
pub mod protocol;
pub mod settings;

pub use action::{RectangleAction, SubWindowAction, WindowAction};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use protocol::{DisplayInfo, PlacementMessage, PlacementResult, WindowInfo};
pub use settings::Settings;
