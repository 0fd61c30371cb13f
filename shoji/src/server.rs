//! JSON-lines driver: one `PlacementMessage` per input line, one
//! `PlacementResult` per output line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use shoji_ipc::{DisplayInfo, PlacementMessage, PlacementResult, Settings, WindowAction, WindowInfo};

use crate::calculation::{calculate, WindowCalculationParameters};
use crate::core::{Screen, UsableScreens, Window};
use crate::settings;
use crate::store::LastActionStore;

#[derive(Debug, Default)]
pub struct ServerState {
    pub settings: Settings,
    pub store: LastActionStore,
}

impl ServerState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            store: LastActionStore::new(),
        }
    }
}

pub fn run<R: BufRead, W: Write>(state: &mut ServerState, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }
        let result = handle_line(state, &line);
        serde_json::to_writer(&mut output, &result)?;
        writeln!(output)?;
        output.flush()?;
    }
    tracing::info!("Input closed, {} windows tracked", state.store.len());
    Ok(())
}

pub fn handle_line(state: &mut ServerState, line: &str) -> PlacementResult {
    match serde_json::from_str::<PlacementMessage>(line) {
        Ok(msg) => handle_message(state, msg),
        Err(e) => {
            tracing::warn!("Rejected request: {}", e);
            PlacementResult::Error {
                message: format!("invalid request: {}", e),
            }
        }
    }
}

pub fn handle_message(state: &mut ServerState, msg: PlacementMessage) -> PlacementResult {
    match msg {
        PlacementMessage::Calculate {
            window,
            displays,
            current_display,
            action,
        } => handle_calculate(state, &window, &displays, current_display, action),
        PlacementMessage::Forget { window_id } => {
            state.store.forget(window_id);
            PlacementResult::Ok
        }
        PlacementMessage::SetSettings { settings } => match settings::validate(&settings) {
            Ok(()) => {
                tracing::info!("Settings updated");
                state.settings = settings;
                PlacementResult::Ok
            }
            Err(e) => {
                tracing::warn!("Rejected settings: {}", e);
                PlacementResult::Error {
                    message: e.to_string(),
                }
            }
        },
    }
}

fn handle_calculate(
    state: &mut ServerState,
    window: &WindowInfo,
    displays: &[DisplayInfo],
    current_display: Option<u32>,
    action: WindowAction,
) -> PlacementResult {
    let window = Window::from_window_info(window);
    let usable = match resolve_screens(displays, current_display, &window) {
        Ok(usable) => usable.with_edge_gaps(state.settings.screen_edge_gaps),
        Err(e) => {
            tracing::warn!("Cannot place window {}: {}", window.id, e);
            return PlacementResult::Error {
                message: e.to_string(),
            };
        }
    };

    let params = WindowCalculationParameters::new(
        window,
        &usable,
        action,
        state.store.get(window.id),
        state.settings,
    );

    match calculate(&params) {
        Some(result) => {
            state.store.record(window.id, result.to_rectangle_action());
            PlacementResult::Placement {
                rect: result.rect,
                display_id: result.screen.id,
                action: result.resulting_action,
                sub_action: result.resulting_sub_action,
            }
        }
        None => PlacementResult::Skipped,
    }
}

fn resolve_screens(
    displays: &[DisplayInfo],
    current_display: Option<u32>,
    window: &Window,
) -> Result<UsableScreens> {
    let screens: Vec<Screen> = displays.iter().map(Screen::from_display_info).collect();
    match current_display {
        Some(id) => UsableScreens::new(screens, id),
        None => UsableScreens::for_window(screens, &window.rect),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shoji_ipc::{Rect, SubWindowAction};

    const LAPTOP: &str = r#"{"id":1,"frame":{"x":0,"y":0,"width":1440,"height":900},"visible_frame":{"x":0,"y":25,"width":1440,"height":875}}"#;
    const EXTERNAL: &str = r#"{"id":2,"frame":{"x":1440,"y":0,"width":1920,"height":1080},"visible_frame":{"x":1440,"y":0,"width":1920,"height":1080}}"#;

    fn calculate_line(rect: Rect, displays: &[&str], action: &str) -> String {
        format!(
            r#"{{"type":"calculate","window":{{"id":7,"rect":{}}},"displays":[{}],"action":"{}"}}"#,
            serde_json::to_string(&rect).unwrap(),
            displays.join(","),
            action
        )
    }

    fn placed(result: PlacementResult) -> (Rect, u32, Option<SubWindowAction>) {
        match result {
            PlacementResult::Placement {
                rect,
                display_id,
                sub_action,
                ..
            } => (rect, display_id, sub_action),
            other => panic!("expected placement, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_requests_cycle() {
        let mut state = ServerState::default();
        let mut rect = Rect::new(300.0, 300.0, 500.0, 400.0);
        let mut widths = vec![];
        for _ in 0..4 {
            let result = handle_line(&mut state, &calculate_line(rect, &[LAPTOP], "left_half"));
            let (placed_rect, display_id, _) = placed(result);
            assert_eq!(display_id, 1);
            widths.push(placed_rect.width);
            rect = placed_rect;
        }
        assert_eq!(widths, vec![720.0, 960.0, 480.0, 720.0]);
    }

    #[test]
    fn test_forget_restarts_cycle() {
        let mut state = ServerState::default();
        let start = Rect::new(300.0, 300.0, 500.0, 400.0);
        let (first, _, _) = placed(handle_line(&mut state, &calculate_line(start, &[LAPTOP], "left_half")));

        assert_eq!(
            handle_line(&mut state, r#"{"type":"forget","window_id":7}"#),
            PlacementResult::Ok
        );
        assert!(state.store.get(7).is_none());

        let (again, _, sub) = placed(handle_line(&mut state, &calculate_line(first, &[LAPTOP], "left_half")));
        assert_eq!(again, first);
        assert_eq!(sub, Some(SubWindowAction::Half));
    }

    #[test]
    fn test_single_display_next_is_skipped() {
        let mut state = ServerState::default();
        let result = handle_line(
            &mut state,
            &calculate_line(Rect::new(100.0, 100.0, 400.0, 300.0), &[LAPTOP], "next_display"),
        );
        assert_eq!(result, PlacementResult::Skipped);
        assert!(state.store.get(7).is_none());
    }

    #[test]
    fn test_single_display_edge_move_is_skipped() {
        let mut state = ServerState::default();
        let result = handle_line(
            &mut state,
            &calculate_line(Rect::new(1040.0, 100.0, 400.0, 300.0), &[LAPTOP], "move_right"),
        );
        assert_eq!(result, PlacementResult::Skipped);
        assert!(state.store.get(7).is_none());
    }

    #[test]
    fn test_current_display_resolved_from_overlap() {
        let mut state = ServerState::default();
        let result = handle_line(
            &mut state,
            &calculate_line(
                Rect::new(1500.0, 100.0, 400.0, 300.0),
                &[LAPTOP, EXTERNAL],
                "maximize",
            ),
        );
        let (rect, display_id, _) = placed(result);
        assert_eq!(display_id, 2);
        assert_eq!(rect, Rect::new(1440.0, 0.0, 1920.0, 1080.0));
    }

    #[test]
    fn test_edge_gaps_from_settings() {
        let mut state = ServerState::default();
        let result = handle_line(
            &mut state,
            r#"{"type":"set_settings","settings":{"screen_edge_gaps":{"top":10,"left":10,"bottom":10,"right":10}}}"#,
        );
        assert_eq!(result, PlacementResult::Ok);

        let (rect, _, _) = placed(handle_line(
            &mut state,
            &calculate_line(Rect::new(100.0, 100.0, 400.0, 300.0), &[LAPTOP], "maximize"),
        ));
        assert_eq!(rect, Rect::new(10.0, 35.0, 1420.0, 855.0));
    }

    #[test]
    fn test_invalid_requests_are_errors() {
        let mut state = ServerState::default();
        assert!(matches!(
            handle_line(&mut state, "{not json"),
            PlacementResult::Error { .. }
        ));
        assert!(matches!(
            handle_line(&mut state, r#"{"type":"set_settings","settings":{"size_step":-3}}"#),
            PlacementResult::Error { .. }
        ));
        assert_eq!(state.settings.size_step, 30.0);

        let no_displays = calculate_line(Rect::new(0.0, 0.0, 10.0, 10.0), &[], "center");
        assert!(matches!(
            handle_line(&mut state, &no_displays),
            PlacementResult::Error { .. }
        ));
    }

    #[test]
    fn test_run_writes_one_line_per_request() {
        let mut state = ServerState::default();
        let input = format!(
            "{}\n\n{}\n{}\n",
            calculate_line(Rect::new(100.0, 100.0, 400.0, 300.0), &[LAPTOP], "center"),
            r#"{"type":"forget","window_id":7}"#,
            "garbage"
        );
        let mut output = Vec::new();
        run(&mut state, input.as_bytes(), &mut output).unwrap();

        let lines: Vec<_> = String::from_utf8(output).unwrap().lines().map(String::from).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r#"{"type":"placement""#));
        assert_eq!(lines[1], r#"{"type":"ok"}"#);
        assert!(lines[2].starts_with(r#"{"type":"error""#));
    }
}
