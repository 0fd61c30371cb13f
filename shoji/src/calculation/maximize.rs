use shoji_ipc::Rect;

use super::center::CenterCalculation;
use super::{RectCalculationParameters, RectResult, WindowCalculation};

pub struct MaximizeCalculation;

impl WindowCalculation for MaximizeCalculation {
    fn name(&self) -> &'static str {
        "maximize"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        Some(RectResult::new(params.visible_frame))
    }
}

/// Full usable height; x and width are left alone.
pub struct MaximizeHeightCalculation;

impl WindowCalculation for MaximizeHeightCalculation {
    fn name(&self) -> &'static str {
        "maximize_height"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let window = params.window.rect;
        let frame = params.visible_frame;
        Some(RectResult::new(Rect::new(
            window.x,
            frame.min_y(),
            window.width,
            frame.height,
        )))
    }
}

/// A configured share of the usable frame, centered.
pub struct AlmostMaximizeCalculation;

impl WindowCalculation for AlmostMaximizeCalculation {
    fn name(&self) -> &'static str {
        "almost_maximize"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let frame = params.visible_frame;
        let settings = &params.settings;
        let width = (frame.width * settings.almost_maximize_width.clamp(0.0, 1.0)).floor();
        let height = (frame.height * settings.almost_maximize_height.clamp(0.0, 1.0)).floor();

        Some(RectResult::new(CenterCalculation::centered(
            &Rect::new(0.0, 0.0, width, height),
            &frame,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use shoji_ipc::{Settings, WindowAction};

    #[test]
    fn test_maximize_is_idempotent() {
        let usable = screens(vec![laptop(), external()], 2);
        let results = press(
            &usable,
            Rect::new(1500.0, 100.0, 400.0, 300.0),
            WindowAction::Maximize,
            2,
        );
        assert_eq!(results[0].rect, Rect::new(1440.0, 0.0, 1920.0, 1080.0));
        assert_eq!(results[0].rect, results[1].rect);
        assert_eq!(results[1].resulting_sub_action, None);
    }

    #[test]
    fn test_maximize_height_keeps_x_and_width() {
        let usable = screens(vec![laptop()], 1);
        let result = run(
            &usable,
            Rect::new(200.0, 300.0, 500.0, 200.0),
            WindowAction::MaximizeHeight,
            None,
        )
        .unwrap();
        assert_eq!(result.rect, Rect::new(200.0, 25.0, 500.0, 875.0));
    }

    #[test]
    fn test_almost_maximize_uses_configured_fraction() {
        let usable = screens(vec![external()], 2);
        let window = Rect::new(1500.0, 100.0, 400.0, 300.0);

        let result = run(&usable, window, WindowAction::AlmostMaximize, None).unwrap();
        assert_eq!(result.rect, Rect::new(1536.0, 54.0, 1728.0, 972.0));

        let settings = Settings {
            almost_maximize_width: 0.5,
            almost_maximize_height: 1.0,
            ..Settings::default()
        };
        let result = run_with(&usable, window, WindowAction::AlmostMaximize, None, settings).unwrap();
        assert_eq!(result.rect, Rect::new(1920.0, 0.0, 960.0, 1080.0));
        assert!(result.rect.centered_within(&usable.visible_frame_of_current_screen()));
    }
}
