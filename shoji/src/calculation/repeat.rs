use shoji_ipc::Rect;

use super::WindowCalculationParameters;

/// Expresses `rect` relative to `frame`'s top-left corner.
pub fn normalize(rect: &Rect, frame: &Rect) -> Rect {
    rect.translate(-frame.x, -frame.y)
}

/// True when the previous action on this window was the same action and the
/// window is still exactly where it left it. Comparison is exact: the caller
/// applies results verbatim, so any difference means the user moved or
/// resized the window in between.
pub fn is_repeated_command(params: &WindowCalculationParameters) -> bool {
    params.as_rect_params().is_repeated_command()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::core::Window;
    use shoji_ipc::{RectangleAction, Settings, SubWindowAction, WindowAction};

    fn params_for<'a>(
        screens: &'a crate::core::UsableScreens,
        rect: Rect,
        action: WindowAction,
        last: Option<RectangleAction>,
    ) -> WindowCalculationParameters<'a> {
        WindowCalculationParameters::new(
            Window::new(WINDOW_ID, rect),
            screens,
            action,
            last,
            Settings::default(),
        )
    }

    fn left_half_record(rect: Rect) -> RectangleAction {
        RectangleAction {
            action: WindowAction::LeftHalf,
            sub_action: Some(SubWindowAction::Half),
            rect,
            screen_id: 1,
        }
    }

    #[test]
    fn test_no_last_action() {
        let screens = screens(vec![laptop()], 1);
        let rect = Rect::new(0.0, 25.0, 720.0, 875.0);
        assert!(!is_repeated_command(&params_for(&screens, rect, WindowAction::LeftHalf, None)));
    }

    #[test]
    fn test_same_action_same_rect() {
        let screens = screens(vec![laptop()], 1);
        let rect = Rect::new(0.0, 25.0, 720.0, 875.0);
        let params = params_for(&screens, rect, WindowAction::LeftHalf, Some(left_half_record(rect)));
        assert!(is_repeated_command(&params));
    }

    #[test]
    fn test_different_action() {
        let screens = screens(vec![laptop()], 1);
        let rect = Rect::new(0.0, 25.0, 720.0, 875.0);
        let params = params_for(&screens, rect, WindowAction::RightHalf, Some(left_half_record(rect)));
        assert!(!is_repeated_command(&params));
    }

    #[test]
    fn test_tiny_difference_is_not_repeated() {
        let screens = screens(vec![laptop()], 1);
        let rect = Rect::new(0.0, 25.0, 720.0, 875.0);
        for moved in [
            Rect::new(0.001, 25.0, 720.0, 875.0),
            Rect::new(0.0, 25.001, 720.0, 875.0),
            Rect::new(0.0, 25.0, 720.001, 875.0),
            Rect::new(0.0, 25.0, 720.0, 874.999),
        ] {
            let params =
                params_for(&screens, moved, WindowAction::LeftHalf, Some(left_half_record(rect)));
            assert!(!is_repeated_command(&params), "{}", moved);
        }
    }

    #[test]
    fn test_normalize() {
        let frame = Rect::new(1440.0, 25.0, 1920.0, 1055.0);
        assert_eq!(
            normalize(&Rect::new(1500.0, 125.0, 100.0, 100.0), &frame),
            Rect::new(60.0, 100.0, 100.0, 100.0)
        );
    }
}
