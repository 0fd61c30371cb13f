use shoji_ipc::{Rect, WindowAction};

use super::partition::Axis;
use super::{
    calculate_on_current_screen, RectCalculationParameters, RectResult, WindowCalculation,
    WindowCalculationParameters, WindowCalculationResult,
};
use crate::core::Direction;

/// Moves the window by `move_step` along one axis, keeping it inside the
/// usable frame. A window already flush against the edge it is moving
/// towards jumps to the display beyond that edge; with no display there the
/// move yields nothing.
pub struct MoveCalculation {
    axis: Axis,
}

impl MoveCalculation {
    pub const HORIZONTAL: MoveCalculation = MoveCalculation {
        axis: Axis::Horizontal,
    };
    pub const VERTICAL: MoveCalculation = MoveCalculation {
        axis: Axis::Vertical,
    };

    fn direction(&self, action: WindowAction) -> Option<Direction> {
        match (self.axis, action) {
            (Axis::Horizontal, WindowAction::MoveLeft) => Some(Direction::Left),
            (Axis::Horizontal, WindowAction::MoveRight) => Some(Direction::Right),
            (Axis::Vertical, WindowAction::MoveUp) => Some(Direction::Up),
            (Axis::Vertical, WindowAction::MoveDown) => Some(Direction::Down),
            _ => None,
        }
    }
}

impl WindowCalculation for MoveCalculation {
    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Horizontal => "move_horizontal",
            Axis::Vertical => "move_vertical",
        }
    }

    fn calculate(&self, params: &WindowCalculationParameters) -> Option<WindowCalculationResult> {
        let direction = self.direction(params.action)?;
        let rect_params = params.as_rect_params();

        if at_edge(&rect_params.window.rect, &rect_params.visible_frame, direction) {
            // Nothing beyond this edge: the move does not apply.
            let screen = params.usable_screens.screen_in_direction(direction)?;
            let frame = params.usable_screens.adjusted_visible_frame(screen);
            tracing::debug!(
                "window {} crosses {:?} to display {}",
                params.window.id,
                direction,
                screen.id
            );
            return Some(WindowCalculationResult {
                rect: reanchor(&params.window.rect, &frame, direction),
                screen: *screen,
                resulting_action: params.action,
                resulting_sub_action: None,
            });
        }

        calculate_on_current_screen(self, params)
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let direction = self.direction(params.action)?;
        let window = params.window.rect;
        let frame = params.visible_frame;
        let step = params.settings.move_step.max(0.0);

        let (dx, dy) = match direction {
            Direction::Left => (-step, 0.0),
            Direction::Right => (step, 0.0),
            Direction::Up => (0.0, -step),
            Direction::Down => (0.0, step),
        };

        let width = window.width.min(frame.width);
        let height = window.height.min(frame.height);
        let x = bounded(window.x + dx, frame.min_x(), frame.max_x() - width);
        let y = bounded(window.y + dy, frame.min_y(), frame.max_y() - height);

        Some(RectResult::new(Rect::new(x, y, width, height)))
    }
}

fn at_edge(window: &Rect, frame: &Rect, direction: Direction) -> bool {
    match direction {
        Direction::Left => window.min_x() <= frame.min_x(),
        Direction::Right => window.max_x() >= frame.max_x(),
        Direction::Up => window.min_y() <= frame.min_y(),
        Direction::Down => window.max_y() >= frame.max_y(),
    }
}

/// Places the window against the edge of `frame` facing the display it
/// came from. Both rects are global.
fn reanchor(window: &Rect, frame: &Rect, direction: Direction) -> Rect {
    let width = window.width.min(frame.width);
    let height = window.height.min(frame.height);
    let x = bounded(window.x, frame.min_x(), frame.max_x() - width);
    let y = bounded(window.y, frame.min_y(), frame.max_y() - height);

    let (x, y) = match direction {
        Direction::Right => (frame.min_x(), y),
        Direction::Left => (frame.max_x() - width, y),
        Direction::Down => (x, frame.min_y()),
        Direction::Up => (x, frame.max_y() - height),
    };
    Rect::new(x, y, width, height).sanitized()
}

fn bounded(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
