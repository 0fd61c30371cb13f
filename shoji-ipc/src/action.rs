use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WindowAction {
    LeftHalf,
    RightHalf,
    TopHalf,
    BottomHalf,
    Center,
    CenterHalf,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Maximize,
    MaximizeHeight,
    AlmostMaximize,
    Larger,
    Smaller,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    NextDisplay,
    PreviousDisplay,
    FirstThird,
    CenterThird,
    LastThird,
    FirstTwoThirds,
    LastTwoThirds,
    FirstFourth,
    SecondFourth,
    ThirdFourth,
    LastFourth,
    TopLeftSixth,
    TopCenterSixth,
    TopRightSixth,
    BottomLeftSixth,
    BottomCenterSixth,
    BottomRightSixth,
}

/// Cycle state a calculation landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubWindowAction {
    // half placements, by the fraction of the frame they cover
    Half,
    TwoThirds,
    OneThird,
    // thirds
    FirstThird,
    CenterThird,
    LastThird,
    FirstTwoThirds,
    LastTwoThirds,
    // fourths
    FirstFourth,
    SecondFourth,
    ThirdFourth,
    LastFourth,
    // sixths
    TopLeftSixth,
    TopCenterSixth,
    TopRightSixth,
    BottomLeftSixth,
    BottomCenterSixth,
    BottomRightSixth,
}

/// Record of the last placement applied to a window. Produced by one
/// calculation and handed back unchanged as input to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleAction {
    pub action: WindowAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_action: Option<SubWindowAction>,
    pub rect: Rect,
    pub screen_id: u32,
}
