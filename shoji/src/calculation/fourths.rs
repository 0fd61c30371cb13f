use shoji_ipc::SubWindowAction;

use super::cycle::PositionCycle;
use super::partition::{slice, Axis};
use super::{RectCalculationParameters, RectResult, WindowCalculation};

const ORDER: &[SubWindowAction] = &[
    SubWindowAction::FirstFourth,
    SubWindowAction::SecondFourth,
    SubWindowAction::ThirdFourth,
    SubWindowAction::LastFourth,
];

/// Quarter slices along the long side. Repeats step to the next slice,
/// wrapping after the last one.
pub struct FourthsCalculation {
    cycle: PositionCycle,
}

impl FourthsCalculation {
    pub const FIRST: FourthsCalculation = FourthsCalculation::starting_at(0);
    pub const SECOND: FourthsCalculation = FourthsCalculation::starting_at(1);
    pub const THIRD: FourthsCalculation = FourthsCalculation::starting_at(2);
    pub const LAST: FourthsCalculation = FourthsCalculation::starting_at(3);

    const fn starting_at(index: usize) -> Self {
        Self {
            cycle: PositionCycle::new(ORDER, index),
        }
    }
}

impl WindowCalculation for FourthsCalculation {
    fn name(&self) -> &'static str {
        "fourths"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let frame = params.visible_frame;
        let position = self.cycle.next(params);
        let index = ORDER.iter().position(|p| *p == position)? as u32;

        Some(RectResult::with_sub_action(
            slice(&frame, Axis::long(&frame), index, index + 1, 4),
            position,
        ))
    }
}
