use shoji_ipc::WindowAction;

use super::partition::cell;
use super::{RectCalculationParameters, RectResult, WindowCalculation};

/// Quarter of the usable frame anchored at one of its corners.
pub struct CornerCalculation;

impl WindowCalculation for CornerCalculation {
    fn name(&self) -> &'static str {
        "corner"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let (col, row) = match params.action {
            WindowAction::TopLeft => (0, 0),
            WindowAction::TopRight => (1, 0),
            WindowAction::BottomLeft => (0, 1),
            WindowAction::BottomRight => (1, 1),
            _ => return None,
        };
        Some(RectResult::new(cell(&params.visible_frame, 2, 2, col, row)))
    }
}
