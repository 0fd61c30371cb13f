//! Placement strategies: one per action family, each a pure function of the
//! window, the usable frame, the action and the previous action.

mod center;
mod change_size;
mod corner;
pub mod cycle;
mod display;
mod fourths;
mod half;
mod maximize;
mod movement;
pub mod partition;
pub mod registry;
mod repeat;
mod sixths;
mod thirds;

use shoji_ipc::{Point, Rect, RectangleAction, Settings, SubWindowAction, WindowAction};

use crate::core::{Screen, UsableScreens, Window};

pub use center::{CenterCalculation, CenterHalfCalculation};
pub use change_size::ChangeSizeCalculation;
pub use corner::CornerCalculation;
pub use display::NextPrevDisplayCalculation;
pub use fourths::FourthsCalculation;
pub use half::{LeftRightHalfCalculation, TopBottomHalfCalculation};
pub use maximize::{AlmostMaximizeCalculation, MaximizeCalculation, MaximizeHeightCalculation};
pub use movement::MoveCalculation;
pub use registry::calculation_for;
pub use repeat::{is_repeated_command, normalize};
pub use sixths::SixthsCalculation;
pub use thirds::ThirdsCalculation;

pub trait WindowCalculation: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Resolves the target display and rectangle. `None` means the action
    /// does not apply right now.
    fn calculate(&self, params: &WindowCalculationParameters) -> Option<WindowCalculationResult> {
        calculate_on_current_screen(self, params)
    }

    /// Computes the rectangle in coordinates relative to the usable frame,
    /// whose top-left corner is `(0, 0)`.
    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult>;
}

/// Default placement: compute against the current display's usable frame and
/// stay on the current display.
pub fn calculate_on_current_screen<C: WindowCalculation + ?Sized>(
    calculation: &C,
    params: &WindowCalculationParameters,
) -> Option<WindowCalculationResult> {
    let rect_params = params.as_rect_params();
    let result = calculation.calculate_rect(&rect_params)?;

    Some(WindowCalculationResult {
        rect: rect_params.to_screen(result.rect),
        screen: *params.usable_screens.current_screen(),
        resulting_action: params.action,
        resulting_sub_action: result.sub_action,
    })
}

/// Full calculation input, including the display topology.
#[derive(Debug, Clone)]
pub struct WindowCalculationParameters<'a> {
    pub window: Window,
    pub usable_screens: &'a UsableScreens,
    pub action: WindowAction,
    pub last_action: Option<RectangleAction>,
    pub settings: Settings,
}

impl<'a> WindowCalculationParameters<'a> {
    pub fn new(
        window: Window,
        usable_screens: &'a UsableScreens,
        action: WindowAction,
        last_action: Option<RectangleAction>,
        settings: Settings,
    ) -> Self {
        Self {
            window,
            usable_screens,
            action,
            last_action,
            settings,
        }
    }

    /// Reduced parameters against the current display's usable frame.
    pub fn as_rect_params(&self) -> RectCalculationParameters {
        self.as_rect_params_in(self.usable_screens.visible_frame_of_current_screen())
    }

    /// Reduced parameters against `visible_frame`. Every rectangle is
    /// translated so the frame's top-left corner becomes the origin.
    pub fn as_rect_params_in(&self, visible_frame: Rect) -> RectCalculationParameters {
        let last_action = self.last_action.map(|last| RectangleAction {
            rect: normalize(&last.rect, &visible_frame),
            ..last
        });

        RectCalculationParameters {
            window: self
                .window
                .with_rect(normalize(&self.window.rect, &visible_frame)),
            visible_frame: visible_frame.with_origin(Point::default()),
            action: self.action,
            last_action,
            settings: self.settings,
            origin: visible_frame.origin(),
        }
    }
}

/// Calculation input with the display topology resolved down to one frame.
#[derive(Debug, Clone, Copy)]
pub struct RectCalculationParameters {
    pub window: Window,
    pub visible_frame: Rect,
    pub action: WindowAction,
    pub last_action: Option<RectangleAction>,
    pub settings: Settings,
    /// Global position of the frame's top-left corner.
    pub origin: Point,
}

impl RectCalculationParameters {
    /// Maps a frame-relative rectangle back to global coordinates.
    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.origin.x, self.origin.y).sanitized()
    }

    /// Same action as last time, and the window still sits exactly where
    /// that action put it.
    pub fn is_repeated_command(&self) -> bool {
        self.last_action
            .is_some_and(|last| last.action == self.action && last.rect == self.window.rect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectResult {
    pub rect: Rect,
    pub sub_action: Option<SubWindowAction>,
}

impl RectResult {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            sub_action: None,
        }
    }

    pub fn with_sub_action(rect: Rect, sub_action: SubWindowAction) -> Self {
        Self {
            rect,
            sub_action: Some(sub_action),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowCalculationResult {
    pub rect: Rect,
    pub screen: Screen,
    pub resulting_action: WindowAction,
    pub resulting_sub_action: Option<SubWindowAction>,
}

impl WindowCalculationResult {
    /// The record the caller stores and passes back on the next call for
    /// the same window.
    pub fn to_rectangle_action(&self) -> RectangleAction {
        RectangleAction {
            action: self.resulting_action,
            sub_action: self.resulting_sub_action,
            rect: self.rect,
            screen_id: self.screen.id,
        }
    }
}

/// Looks up the strategy for the requested action and runs it.
pub fn calculate(params: &WindowCalculationParameters) -> Option<WindowCalculationResult> {
    let calculation = calculation_for(params.action);
    let result = calculation.calculate(params);

    match &result {
        Some(result) => tracing::debug!(
            "{} via {}: window {} {} -> {} on display {} ({:?})",
            params.action,
            calculation.name(),
            params.window.id,
            params.window.rect,
            result.rect,
            result.screen.id,
            result.resulting_sub_action
        ),
        None => tracing::debug!(
            "{} via {}: window {} not applicable",
            params.action,
            calculation.name(),
            params.window.id
        ),
    }

    result
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub const WINDOW_ID: u32 = 7;

    /// 1440x900 display with a 25pt menu bar, the usable frame starts at y=25.
    pub fn laptop() -> Screen {
        Screen::new(
            1,
            Rect::new(0.0, 0.0, 1440.0, 900.0),
            Rect::new(0.0, 25.0, 1440.0, 875.0),
        )
    }

    /// 1920x1080 display to the right of `laptop`, no reserved areas.
    pub fn external() -> Screen {
        Screen::new(
            2,
            Rect::new(1440.0, 0.0, 1920.0, 1080.0),
            Rect::new(1440.0, 0.0, 1920.0, 1080.0),
        )
    }

    /// 1080x1920 portrait display to the left of `laptop`.
    pub fn portrait() -> Screen {
        Screen::new(
            3,
            Rect::new(-1080.0, 0.0, 1080.0, 1920.0),
            Rect::new(-1080.0, 0.0, 1080.0, 1920.0),
        )
    }

    pub fn screens(all: Vec<Screen>, current: u32) -> UsableScreens {
        UsableScreens::new(all, current).unwrap()
    }

    pub fn run(
        screens: &UsableScreens,
        rect: Rect,
        action: WindowAction,
        last_action: Option<RectangleAction>,
    ) -> Option<WindowCalculationResult> {
        run_with(screens, rect, action, last_action, Settings::default())
    }

    pub fn run_with(
        screens: &UsableScreens,
        rect: Rect,
        action: WindowAction,
        last_action: Option<RectangleAction>,
        settings: Settings,
    ) -> Option<WindowCalculationResult> {
        let params = WindowCalculationParameters::new(
            Window::new(WINDOW_ID, rect),
            screens,
            action,
            last_action,
            settings,
        );
        calculate(&params)
    }

    /// Presses `action` `presses` times, feeding each result back as the
    /// window's rect and the last action. Returns every result.
    pub fn press(
        screens: &UsableScreens,
        start: Rect,
        action: WindowAction,
        presses: usize,
    ) -> Vec<WindowCalculationResult> {
        let mut rect = start;
        let mut last_action = None;
        let mut results = Vec::with_capacity(presses);
        for _ in 0..presses {
            let result = run(screens, rect, action, last_action).unwrap();
            rect = result.rect;
            last_action = Some(result.to_rectangle_action());
            results.push(result);
        }
        results
    }
}
