use serde::{Deserialize, Serialize};

use crate::action::{SubWindowAction, WindowAction};
use crate::geometry::Rect;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: u32,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub id: u32,
    pub frame: Rect,
    // minus menu bar and dock
    pub visible_frame: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlacementMessage {
    Calculate {
        window: WindowInfo,
        displays: Vec<DisplayInfo>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_display: Option<u32>,
        action: WindowAction,
    },
    Forget {
        window_id: u32,
    },
    SetSettings {
        settings: Settings,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlacementResult {
    Placement {
        rect: Rect,
        display_id: u32,
        action: WindowAction,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sub_action: Option<SubWindowAction>,
    },
    Skipped,
    Ok,
    Error {
        message: String,
    },
}
