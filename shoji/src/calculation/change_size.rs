use shoji_ipc::{Rect, WindowAction};

use super::{RectCalculationParameters, RectResult, WindowCalculation};

/// Grows or shrinks the window around its center. The long side changes by
/// `size_step` and the short side follows so the aspect ratio holds. The
/// result stays inside the usable frame and no smaller than `minimum_size`.
pub struct ChangeSizeCalculation;

impl WindowCalculation for ChangeSizeCalculation {
    fn name(&self) -> &'static str {
        "change_size"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let direction = match params.action {
            WindowAction::Larger => 1.0,
            WindowAction::Smaller => -1.0,
            _ => return None,
        };
        let window = params.window.rect;
        let frame = params.visible_frame;
        let settings = &params.settings;

        let step = settings.size_step.max(0.0) * direction;
        let (dw, dh) = if window.is_landscape() {
            (step, proportional(step, window.height, window.width))
        } else {
            (proportional(step, window.width, window.height), step)
        };

        let min_width = settings.minimum_size.width.max(0.0).min(frame.width);
        let min_height = settings.minimum_size.height.max(0.0).min(frame.height);
        let width = bounded(window.width + dw, min_width, frame.width);
        let height = bounded(window.height + dh, min_height, frame.height);

        let x = bounded(
            (window.mid_x() - width / 2.0).round(),
            frame.min_x(),
            frame.max_x() - width,
        );
        let y = bounded(
            (window.mid_y() - height / 2.0).round(),
            frame.min_y(),
            frame.max_y() - height,
        );

        Some(RectResult::new(Rect::new(x, y, width, height)))
    }
}

fn proportional(step: f64, short: f64, long: f64) -> f64 {
    if long > 0.0 {
        (step * short / long).round()
    } else {
        step
    }
}

// Unlike f64::clamp this never panics; `max` wins if the bounds cross.
fn bounded(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
