//! Cycle policies shared by the strategies whose repeated presses step
//! through several placements.
//!
//! A press continues the cycle only when it repeats the previous command on
//! an untouched window; the previous result's sub-action names the state to
//! continue from. Anything else starts over at the first state.

use shoji_ipc::SubWindowAction;

use super::partition::Fraction;
use super::RectCalculationParameters;

/// Cycle over fractions of the frame, used by the half placements.
#[derive(Debug, Clone, Copy)]
pub struct FractionCycle {
    states: &'static [(SubWindowAction, Fraction)],
}

impl FractionCycle {
    /// First, second and third press: 1/2, 2/3, then 1/3.
    pub const THIRDS: FractionCycle = FractionCycle {
        states: &[
            (SubWindowAction::Half, Fraction::new(1, 2)),
            (SubWindowAction::TwoThirds, Fraction::new(2, 3)),
            (SubWindowAction::OneThird, Fraction::new(1, 3)),
        ],
    };

    pub fn states(&self) -> &'static [(SubWindowAction, Fraction)] {
        self.states
    }

    pub fn next(&self, params: &RectCalculationParameters) -> (SubWindowAction, Fraction) {
        let index = advance(self.states.iter().map(|(sub, _)| *sub), 0, params);
        self.states[index]
    }
}

/// Cycle over positions, e.g. first fourth, second fourth, and so on.
#[derive(Debug, Clone, Copy)]
pub struct PositionCycle {
    order: &'static [SubWindowAction],
    start: usize,
}

impl PositionCycle {
    pub const fn new(order: &'static [SubWindowAction], start: usize) -> Self {
        Self { order, start }
    }

    pub fn next(&self, params: &RectCalculationParameters) -> SubWindowAction {
        let index = advance(self.order.iter().copied(), self.start, params);
        self.order[index % self.order.len()]
    }
}

fn advance(
    states: impl ExactSizeIterator<Item = SubWindowAction> + Clone,
    start: usize,
    params: &RectCalculationParameters,
) -> usize {
    let len = states.len();
    if !params.is_repeated_command() {
        return start;
    }
    let previous = params
        .last_action
        .and_then(|last| last.sub_action)
        .and_then(|sub| states.clone().position(|s| s == sub));

    match previous {
        Some(index) => (index + 1) % len,
        None => start,
    }
}
