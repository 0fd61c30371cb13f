use std::collections::HashMap;

use shoji_ipc::RectangleAction;

use crate::core::WindowId;

/// Most recent placement per window.
#[derive(Debug, Default)]
pub struct LastActionStore {
    actions: HashMap<WindowId, RectangleAction>,
}

impl LastActionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, window_id: WindowId) -> Option<RectangleAction> {
        self.actions.get(&window_id).copied()
    }

    pub fn record(&mut self, window_id: WindowId, action: RectangleAction) {
        tracing::debug!(
            "Last action for window {}: {} ({:?}) {} on display {}",
            window_id,
            action.action,
            action.sub_action,
            action.rect,
            action.screen_id
        );
        self.actions.insert(window_id, action);
    }

    pub fn forget(&mut self, window_id: WindowId) -> Option<RectangleAction> {
        let removed = self.actions.remove(&window_id);
        if removed.is_some() {
            tracing::debug!("Forgot last action for window {}", window_id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
