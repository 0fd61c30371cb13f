use shoji_ipc::Rect;

use super::partition::{Axis, Fraction};
use super::{RectCalculationParameters, RectResult, WindowCalculation};

/// Centers the window in the usable frame, keeping its size. A window that
/// does not fit takes the whole frame instead.
pub struct CenterCalculation;

impl CenterCalculation {
    pub fn centered(window: &Rect, frame: &Rect) -> Rect {
        if window.fits_within(frame) {
            Rect::new(
                ((frame.width - window.width) / 2.0).round() + frame.min_x(),
                ((frame.height - window.height) / 2.0).round() + frame.min_y(),
                window.width,
                window.height,
            )
        } else {
            *frame
        }
    }
}

impl WindowCalculation for CenterCalculation {
    fn name(&self) -> &'static str {
        "center"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        Some(RectResult::new(Self::centered(
            &params.window.rect,
            &params.visible_frame,
        )))
    }
}

pub struct CenterHalfCalculation;

impl WindowCalculation for CenterHalfCalculation {
    fn name(&self) -> &'static str {
        "center_half"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let frame = params.visible_frame;
        let half = Fraction::new(1, 2);
        let size = match Axis::long(&frame) {
            Axis::Horizontal => Rect::new(0.0, 0.0, half.of(frame.width), frame.height),
            Axis::Vertical => Rect::new(0.0, 0.0, frame.width, half.of(frame.height)),
        };
        Some(RectResult::new(CenterCalculation::centered(&size, &frame)))
    }
}
