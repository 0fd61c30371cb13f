//! Action to strategy lookup. Every strategy lives in a static, so the table
//! is fixed at compile time and the `match` keeps it exhaustive.

use shoji_ipc::WindowAction;

use super::{
    AlmostMaximizeCalculation, CenterCalculation, CenterHalfCalculation, ChangeSizeCalculation,
    CornerCalculation, FourthsCalculation, LeftRightHalfCalculation, MaximizeCalculation,
    MaximizeHeightCalculation, MoveCalculation, NextPrevDisplayCalculation, SixthsCalculation,
    ThirdsCalculation, TopBottomHalfCalculation, WindowCalculation,
};

static LEFT_RIGHT_HALF: LeftRightHalfCalculation = LeftRightHalfCalculation::new();
static TOP_BOTTOM_HALF: TopBottomHalfCalculation = TopBottomHalfCalculation::new();
static CENTER: CenterCalculation = CenterCalculation;
static CENTER_HALF: CenterHalfCalculation = CenterHalfCalculation;
static CORNER: CornerCalculation = CornerCalculation;
static MAXIMIZE: MaximizeCalculation = MaximizeCalculation;
static MAXIMIZE_HEIGHT: MaximizeHeightCalculation = MaximizeHeightCalculation;
static ALMOST_MAXIMIZE: AlmostMaximizeCalculation = AlmostMaximizeCalculation;
static CHANGE_SIZE: ChangeSizeCalculation = ChangeSizeCalculation;
static MOVE_HORIZONTAL: MoveCalculation = MoveCalculation::HORIZONTAL;
static MOVE_VERTICAL: MoveCalculation = MoveCalculation::VERTICAL;
static NEXT_PREV_DISPLAY: NextPrevDisplayCalculation = NextPrevDisplayCalculation;

static FIRST_THIRD: ThirdsCalculation = ThirdsCalculation::FIRST;
static CENTER_THIRD: ThirdsCalculation = ThirdsCalculation::CENTER;
static LAST_THIRD: ThirdsCalculation = ThirdsCalculation::LAST;
static FIRST_TWO_THIRDS: ThirdsCalculation = ThirdsCalculation::FIRST_TWO;
static LAST_TWO_THIRDS: ThirdsCalculation = ThirdsCalculation::LAST_TWO;

static FIRST_FOURTH: FourthsCalculation = FourthsCalculation::FIRST;
static SECOND_FOURTH: FourthsCalculation = FourthsCalculation::SECOND;
static THIRD_FOURTH: FourthsCalculation = FourthsCalculation::THIRD;
static LAST_FOURTH: FourthsCalculation = FourthsCalculation::LAST;

static TOP_LEFT_SIXTH: SixthsCalculation = SixthsCalculation::TOP_LEFT;
static TOP_CENTER_SIXTH: SixthsCalculation = SixthsCalculation::TOP_CENTER;
static TOP_RIGHT_SIXTH: SixthsCalculation = SixthsCalculation::TOP_RIGHT;
static BOTTOM_LEFT_SIXTH: SixthsCalculation = SixthsCalculation::BOTTOM_LEFT;
static BOTTOM_CENTER_SIXTH: SixthsCalculation = SixthsCalculation::BOTTOM_CENTER;
static BOTTOM_RIGHT_SIXTH: SixthsCalculation = SixthsCalculation::BOTTOM_RIGHT;

pub fn calculation_for(action: WindowAction) -> &'static dyn WindowCalculation {
    match action {
        WindowAction::LeftHalf | WindowAction::RightHalf => &LEFT_RIGHT_HALF,
        WindowAction::TopHalf | WindowAction::BottomHalf => &TOP_BOTTOM_HALF,
        WindowAction::Center => &CENTER,
        WindowAction::CenterHalf => &CENTER_HALF,
        WindowAction::TopLeft
        | WindowAction::TopRight
        | WindowAction::BottomLeft
        | WindowAction::BottomRight => &CORNER,
        WindowAction::Maximize => &MAXIMIZE,
        WindowAction::MaximizeHeight => &MAXIMIZE_HEIGHT,
        WindowAction::AlmostMaximize => &ALMOST_MAXIMIZE,
        WindowAction::Larger | WindowAction::Smaller => &CHANGE_SIZE,
        WindowAction::MoveLeft | WindowAction::MoveRight => &MOVE_HORIZONTAL,
        WindowAction::MoveUp | WindowAction::MoveDown => &MOVE_VERTICAL,
        WindowAction::NextDisplay | WindowAction::PreviousDisplay => &NEXT_PREV_DISPLAY,
        WindowAction::FirstThird => &FIRST_THIRD,
        WindowAction::CenterThird => &CENTER_THIRD,
        WindowAction::LastThird => &LAST_THIRD,
        WindowAction::FirstTwoThirds => &FIRST_TWO_THIRDS,
        WindowAction::LastTwoThirds => &LAST_TWO_THIRDS,
        WindowAction::FirstFourth => &FIRST_FOURTH,
        WindowAction::SecondFourth => &SECOND_FOURTH,
        WindowAction::ThirdFourth => &THIRD_FOURTH,
        WindowAction::LastFourth => &LAST_FOURTH,
        WindowAction::TopLeftSixth => &TOP_LEFT_SIXTH,
        WindowAction::TopCenterSixth => &TOP_CENTER_SIXTH,
        WindowAction::TopRightSixth => &TOP_RIGHT_SIXTH,
        WindowAction::BottomLeftSixth => &BOTTOM_LEFT_SIXTH,
        WindowAction::BottomCenterSixth => &BOTTOM_CENTER_SIXTH,
        WindowAction::BottomRightSixth => &BOTTOM_RIGHT_SIXTH,
    }
}
