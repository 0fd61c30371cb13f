use shoji_ipc::SubWindowAction;

use super::cycle::PositionCycle;
use super::partition::{slice, Axis};
use super::{RectCalculationParameters, RectResult, WindowCalculation};

const FIRST_THIRD: &[SubWindowAction] = &[
    SubWindowAction::FirstThird,
    SubWindowAction::CenterThird,
    SubWindowAction::LastThird,
];
const CENTER_THIRD: &[SubWindowAction] = &[SubWindowAction::CenterThird];
const LAST_THIRD: &[SubWindowAction] = &[
    SubWindowAction::LastThird,
    SubWindowAction::CenterThird,
    SubWindowAction::FirstThird,
];
const FIRST_TWO_THIRDS: &[SubWindowAction] = &[
    SubWindowAction::FirstTwoThirds,
    SubWindowAction::LastTwoThirds,
];
const LAST_TWO_THIRDS: &[SubWindowAction] = &[
    SubWindowAction::LastTwoThirds,
    SubWindowAction::FirstTwoThirds,
];

/// Thirds of the usable frame along its long side. Repeating a single third
/// walks it across the frame; repeating two thirds flips between the two ends.
pub struct ThirdsCalculation {
    cycle: PositionCycle,
}

impl ThirdsCalculation {
    pub const FIRST: ThirdsCalculation = ThirdsCalculation::new(FIRST_THIRD);
    pub const CENTER: ThirdsCalculation = ThirdsCalculation::new(CENTER_THIRD);
    pub const LAST: ThirdsCalculation = ThirdsCalculation::new(LAST_THIRD);
    pub const FIRST_TWO: ThirdsCalculation = ThirdsCalculation::new(FIRST_TWO_THIRDS);
    pub const LAST_TWO: ThirdsCalculation = ThirdsCalculation::new(LAST_TWO_THIRDS);

    const fn new(order: &'static [SubWindowAction]) -> Self {
        Self {
            cycle: PositionCycle::new(order, 0),
        }
    }
}

impl WindowCalculation for ThirdsCalculation {
    fn name(&self) -> &'static str {
        "thirds"
    }

    fn calculate_rect(&self, params: &RectCalculationParameters) -> Option<RectResult> {
        let frame = params.visible_frame;
        let position = self.cycle.next(params);
        let (from, to) = match position {
            SubWindowAction::FirstThird => (0, 1),
            SubWindowAction::CenterThird => (1, 2),
            SubWindowAction::LastThird => (2, 3),
            SubWindowAction::FirstTwoThirds => (0, 2),
            SubWindowAction::LastTwoThirds => (1, 3),
            _ => return None,
        };

        Some(RectResult::with_sub_action(
            slice(&frame, Axis::long(&frame), from, to, 3),
            position,
        ))
    }
}
