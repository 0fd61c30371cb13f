use std::cmp::Ordering;

use anyhow::{bail, Result};
use shoji_ipc::{DisplayInfo, EdgeInsets, Rect};

pub type ScreenId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub id: ScreenId,
    pub frame: Rect,
    pub visible_frame: Rect,
}

impl Screen {
    pub fn new(id: ScreenId, frame: Rect, visible_frame: Rect) -> Self {
        Self {
            id,
            frame,
            visible_frame,
        }
    }

    pub fn from_display_info(info: &DisplayInfo) -> Self {
        Self {
            id: info.id,
            frame: info.frame.sanitized(),
            visible_frame: info.visible_frame.sanitized(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
pub struct AdjacentScreens<'a> {
    pub next: &'a Screen,
    pub prev: &'a Screen,
}

/// Displays ordered left to right by origin x, then y, then id.
#[derive(Debug, Clone)]
pub struct UsableScreens {
    screens: Vec<Screen>,
    current: usize,
    edge_gaps: EdgeInsets,
}

impl UsableScreens {
    pub fn new(screens: Vec<Screen>, current: ScreenId) -> Result<Self> {
        if screens.is_empty() {
            bail!("No displays available");
        }
        let screens = sorted(screens);
        let Some(current) = screens.iter().position(|s| s.id == current) else {
            bail!("Unknown display: {}", current);
        };
        Ok(Self {
            screens,
            current,
            edge_gaps: EdgeInsets::default(),
        })
    }

    /// Picks the display sharing the most area with the window, or the one
    /// whose center is closest when the window is entirely off-screen.
    pub fn for_window(screens: Vec<Screen>, window_rect: &Rect) -> Result<Self> {
        if screens.is_empty() {
            bail!("No displays available");
        }
        let screens = sorted(screens);

        let by_overlap = screens
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.frame.intersection(window_rect).map(|r| (i, r.area())))
            .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(i, _)| i);

        let current = by_overlap.unwrap_or_else(|| {
            let center = window_rect.center();
            screens
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let dx = s.frame.mid_x() - center.x;
                    let dy = s.frame.mid_y() - center.y;
                    (i, dx * dx + dy * dy)
                })
                .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
                .map(|(i, _)| i)
                .unwrap_or(0)
        });

        Ok(Self {
            screens,
            current,
            edge_gaps: EdgeInsets::default(),
        })
    }

    pub fn with_edge_gaps(mut self, edge_gaps: EdgeInsets) -> Self {
        self.edge_gaps = edge_gaps;
        self
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn num_screens(&self) -> usize {
        self.screens.len()
    }

    pub fn current_screen(&self) -> &Screen {
        &self.screens[self.current]
    }

    pub fn frame_of_current_screen(&self) -> Rect {
        self.current_screen().frame
    }

    pub fn visible_frame_of_current_screen(&self) -> Rect {
        self.adjusted_visible_frame(self.current_screen())
    }

    pub fn adjusted_visible_frame(&self, screen: &Screen) -> Rect {
        if self.edge_gaps.is_zero() {
            screen.visible_frame
        } else {
            screen.visible_frame.inset(&self.edge_gaps)
        }
    }

    /// Wraps at both ends.
    pub fn adjacent_screens(&self) -> Option<AdjacentScreens<'_>> {
        let count = self.screens.len();
        if count <= 1 {
            return None;
        }
        Some(AdjacentScreens {
            next: &self.screens[(self.current + 1) % count],
            prev: &self.screens[(self.current + count - 1) % count],
        })
    }

    /// Nearest display lying entirely beyond the current display's edge in
    /// `direction`. Displays overlapping on the other axis win over ones that
    /// only touch diagonally. Does not wrap.
    pub fn screen_in_direction(&self, direction: Direction) -> Option<&Screen> {
        let current = self.current_screen().frame;

        self.screens
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.current)
            .filter_map(|(_, s)| {
                let frame = s.frame;
                let (gap, overlap, offset) = match direction {
                    Direction::Left => (
                        current.min_x() - frame.max_x(),
                        overlap_1d(current.min_y(), current.max_y(), frame.min_y(), frame.max_y()),
                        (current.mid_y() - frame.mid_y()).abs(),
                    ),
                    Direction::Right => (
                        frame.min_x() - current.max_x(),
                        overlap_1d(current.min_y(), current.max_y(), frame.min_y(), frame.max_y()),
                        (current.mid_y() - frame.mid_y()).abs(),
                    ),
                    Direction::Up => (
                        current.min_y() - frame.max_y(),
                        overlap_1d(current.min_x(), current.max_x(), frame.min_x(), frame.max_x()),
                        (current.mid_x() - frame.mid_x()).abs(),
                    ),
                    Direction::Down => (
                        frame.min_y() - current.max_y(),
                        overlap_1d(current.min_x(), current.max_x(), frame.min_x(), frame.max_x()),
                        (current.mid_x() - frame.mid_x()).abs(),
                    ),
                };
                (gap >= 0.0).then_some((s, overlap <= 0.0, gap, offset))
            })
            .min_by(|a, b| {
                a.1.cmp(&b.1)
                    .then_with(|| a.2.total_cmp(&b.2))
                    .then_with(|| a.3.total_cmp(&b.3))
            })
            .map(|(s, ..)| s)
    }
}

fn sorted(mut screens: Vec<Screen>) -> Vec<Screen> {
    screens.sort_by(display_order);
    screens
}

fn display_order(a: &Screen, b: &Screen) -> Ordering {
    a.frame
        .x
        .total_cmp(&b.frame.x)
        .then_with(|| a.frame.y.total_cmp(&b.frame.y))
        .then_with(|| a.id.cmp(&b.id))
}

fn overlap_1d(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    (a2.min(b2) - a1.max(b1)).max(0.0)
}
