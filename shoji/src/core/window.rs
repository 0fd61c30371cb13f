use shoji_ipc::{Rect, WindowInfo};

pub type WindowId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub id: WindowId,
    pub rect: Rect,
}

impl Window {
    pub fn new(id: WindowId, rect: Rect) -> Self {
        Self { id, rect }
    }

    pub fn from_window_info(info: &WindowInfo) -> Self {
        Self {
            id: info.id,
            rect: info.rect.sanitized(),
        }
    }

    pub fn with_rect(&self, rect: Rect) -> Self {
        Self { id: self.id, rect }
    }
}
