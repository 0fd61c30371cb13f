use shoji_ipc::{Rect, WindowAction};

use super::cycle::FractionCycle;
use super::{RectCalculationParameters, RectResult, WindowCalculation};

/// Left and right halves. Repeating the command on an untouched window
/// narrows or widens it: 1/2, then 2/3, then 1/3 of the usable width.
pub struct LeftRightHalfCalculation {
    cycle: FractionCycle,
}

impl LeftRightHalfCalculation {
    pub const fn new() -> Self {
        Self {
            cycle: FractionCycle::THIRDS,
        }
    }
}

impl Default for LeftRightHalfCalculation {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowCalculation for LeftRightHalfCalculation {
    fn name(&self) -> &'static str {
        "left_right_half"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let frame = params.visible_frame;
        let (sub_action, fraction) = self.cycle.next(params);

        // The right side starts at the left side's complement so that two
        // halves always tile an odd-width frame.
        let (x, width) = match params.action {
            WindowAction::LeftHalf => (0.0, fraction.of(frame.width)),
            WindowAction::RightHalf => {
                let x = fraction.complement().of(frame.width);
                (x, frame.width - x)
            }
            _ => return None,
        };

        Some(RectResult::with_sub_action(
            Rect::new(frame.min_x() + x, frame.min_y(), width, frame.height),
            sub_action,
        ))
    }
}

/// Top and bottom halves, cycling heights the same way.
pub struct TopBottomHalfCalculation {
    cycle: FractionCycle,
}

impl TopBottomHalfCalculation {
    pub const fn new() -> Self {
        Self {
            cycle: FractionCycle::THIRDS,
        }
    }
}

impl Default for TopBottomHalfCalculation {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowCalculation for TopBottomHalfCalculation {
    fn name(&self) -> &'static str {
        "top_bottom_half"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let frame = params.visible_frame;
        let (sub_action, fraction) = self.cycle.next(params);

        let (y, height) = match params.action {
            WindowAction::TopHalf => (0.0, fraction.of(frame.height)),
            WindowAction::BottomHalf => {
                let y = fraction.complement().of(frame.height);
                (y, frame.height - y)
            }
            _ => return None,
        };

        Some(RectResult::with_sub_action(
            Rect::new(frame.min_x(), frame.min_y() + y, frame.width, height),
            sub_action,
        ))
    }
}
