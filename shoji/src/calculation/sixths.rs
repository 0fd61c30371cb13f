use shoji_ipc::SubWindowAction;

use super::cycle::PositionCycle;
use super::partition::{cell, Axis};
use super::{RectCalculationParameters, RectResult, WindowCalculation};

const ORDER: &[SubWindowAction] = &[
    SubWindowAction::TopLeftSixth,
    SubWindowAction::TopCenterSixth,
    SubWindowAction::TopRightSixth,
    SubWindowAction::BottomLeftSixth,
    SubWindowAction::BottomCenterSixth,
    SubWindowAction::BottomRightSixth,
];

/// Sixths of the usable frame: three columns by two rows on a landscape
/// frame. On a portrait frame the grid is transposed, so left, center and
/// right run down the long side and top and bottom become the two columns.
pub struct SixthsCalculation {
    cycle: PositionCycle,
}

impl SixthsCalculation {
    pub const TOP_LEFT: SixthsCalculation = SixthsCalculation::starting_at(0);
    pub const TOP_CENTER: SixthsCalculation = SixthsCalculation::starting_at(1);
    pub const TOP_RIGHT: SixthsCalculation = SixthsCalculation::starting_at(2);
    pub const BOTTOM_LEFT: SixthsCalculation = SixthsCalculation::starting_at(3);
    pub const BOTTOM_CENTER: SixthsCalculation = SixthsCalculation::starting_at(4);
    pub const BOTTOM_RIGHT: SixthsCalculation = SixthsCalculation::starting_at(5);

    const fn starting_at(index: usize) -> Self {
        Self {
            cycle: PositionCycle::new(ORDER, index),
        }
    }
}

impl WindowCalculation for SixthsCalculation {
    fn name(&self) -> &'static str {
        "sixths"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let frame = params.visible_frame;
        let position = self.cycle.next(params);
        let index = ORDER.iter().position(|p| *p == position)? as u32;
        let (along, across) = (index % 3, index / 3);

        let rect = match Axis::long(&frame) {
            Axis::Horizontal => cell(&frame, 3, 2, along, across),
            Axis::Vertical => cell(&frame, 2, 3, across, along),
        };
        Some(RectResult::with_sub_action(rect, position))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use pretty_assertions::assert_eq;
    use shoji_ipc::{Rect, SubWindowAction, WindowAction};

    #[test]
    fn test_sixths_on_landscape() {
        let usable = screens(vec![laptop()], 1);
        let window = Rect::new(300.0, 300.0, 500.0, 400.0);
        let place = |action| run(&usable, window, action, None).unwrap().rect;

        assert_eq!(place(WindowAction::TopLeftSixth), Rect::new(0.0, 25.0, 480.0, 437.0));
        assert_eq!(place(WindowAction::TopCenterSixth), Rect::new(480.0, 25.0, 480.0, 437.0));
        assert_eq!(place(WindowAction::TopRightSixth), Rect::new(960.0, 25.0, 480.0, 437.0));
        assert_eq!(place(WindowAction::BottomLeftSixth), Rect::new(0.0, 462.0, 480.0, 438.0));
        assert_eq!(
            place(WindowAction::BottomRightSixth),
            Rect::new(960.0, 462.0, 480.0, 438.0)
        );
    }

    #[test]
    fn test_sixths_on_portrait_are_transposed() {
        let usable = screens(vec![portrait()], 3);
        let window = Rect::new(-1000.0, 100.0, 500.0, 400.0);
        let place = |action| run(&usable, window, action, None).unwrap().rect;

        assert_eq!(place(WindowAction::TopLeftSixth), Rect::new(-1080.0, 0.0, 540.0, 640.0));
        assert_eq!(place(WindowAction::TopCenterSixth), Rect::new(-1080.0, 640.0, 540.0, 640.0));
        assert_eq!(
            place(WindowAction::BottomRightSixth),
            Rect::new(-540.0, 1280.0, 540.0, 640.0)
        );
    }

    #[test]
    fn test_sixths_cycle_through_all_cells() {
        let usable = screens(vec![laptop()], 1);
        let results = press(
            &usable,
            Rect::new(300.0, 300.0, 500.0, 400.0),
            WindowAction::TopRightSixth,
            7,
        );
        let subs: Vec<_> = results.iter().map(|r| r.resulting_sub_action.unwrap()).collect();
        assert_eq!(
            subs,
            vec![
                SubWindowAction::TopRightSixth,
                SubWindowAction::BottomLeftSixth,
                SubWindowAction::BottomCenterSixth,
                SubWindowAction::BottomRightSixth,
                SubWindowAction::TopLeftSixth,
                SubWindowAction::TopCenterSixth,
                SubWindowAction::TopRightSixth,
            ]
        );
        assert_eq!(results[6].rect, results[0].rect);
    }
}
