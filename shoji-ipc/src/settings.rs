use serde::{Deserialize, Serialize};

use crate::geometry::{EdgeInsets, Size};

/// Tunables consumed by the placement engine as plain values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub size_step: f64,
    pub move_step: f64,
    pub minimum_size: Size,
    pub almost_maximize_width: f64,
    pub almost_maximize_height: f64,
    pub screen_edge_gaps: EdgeInsets,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size_step: 30.0,
            move_step: 30.0,
            minimum_size: Size::new(200.0, 150.0),
            almost_maximize_width: 0.9,
            almost_maximize_height: 0.9,
            screen_edge_gaps: EdgeInsets::default(),
        }
    }
}
