use shoji_ipc::WindowAction;

use super::center::CenterCalculation;
use super::{
    RectCalculationParameters, RectResult, WindowCalculation, WindowCalculationParameters,
    WindowCalculationResult,
};

/// Sends the window to the next or previous display in display order and
/// centers it there at its current size.
pub struct NextPrevDisplayCalculation;

impl WindowCalculation for NextPrevDisplayCalculation {
    fn name(&self) -> &'static str {
        "next_prev_display"
    }

    fn calculate(&self, params: &WindowCalculationParameters) -> Option<WindowCalculationResult> {
        let screens = params.usable_screens;
        let adjacent = screens.adjacent_screens()?;
        let target = match params.action {
            WindowAction::NextDisplay => adjacent.next,
            WindowAction::PreviousDisplay => adjacent.prev,
            _ => return None,
        };

        let rect_params = params.as_rect_params_in(screens.adjusted_visible_frame(target));
        let result = self.calculate_rect(&rect_params)?;

        Some(WindowCalculationResult {
            rect: rect_params.to_screen(result.rect),
            screen: *target,
            resulting_action: params.action,
            resulting_sub_action: None,
        })
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        Some(RectResult::new(CenterCalculation::centered(
            &params.window.rect,
            &params.visible_frame,
        )))
    }
}
