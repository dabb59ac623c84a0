use go_rules::{Engine, EngineConfig, GameState, GoError, Point, Stone};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Outcome of the last placement attempt, as handed to the page.
#[derive(Serialize)]
struct MoveReport<'a> {
    ok: bool,
    reason: Option<&'static str>,
    notice: Option<&'static str>,
    captured: &'a [[u8; 2]],
}

/// Star points for a board size as a JSON array of `[col, row]` pairs.
#[wasm_bindgen]
pub fn star_points(size: u8) -> String {
    points_json(&go_rules::hoshi::star_points(size))
}

#[wasm_bindgen]
pub struct WasmEngine {
    inner: Engine,
    last_error: Option<GoError>,
}

#[wasm_bindgen]
impl WasmEngine {
    /// Sizes outside the supported range fall back to the default board.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Self {
        let inner = Engine::with_config(EngineConfig::with_size(size)).unwrap_or_default();
        Self {
            inner,
            last_error: None,
        }
    }

    /// Build from a JSON config such as `{"size": 13}`. Returns `None` on a
    /// bad config.
    pub fn from_config_json(json: &str) -> Option<WasmEngine> {
        let config = EngineConfig::from_json(json).ok()?;
        let inner = Engine::with_config(config).ok()?;
        Some(Self {
            inner,
            last_error: None,
        })
    }

    // -- Game actions --

    /// Play for the side to move. Returns false if the move was rejected;
    /// `last_error` then holds the reason.
    pub fn try_play(&mut self, col: u8, row: u8) -> bool {
        let stone = self.inner.current_player();
        match self.inner.attempt_move((col, row), stone) {
            Ok(_) => {
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e);
                false
            }
        }
    }

    pub fn restart(&mut self) {
        self.inner.restart();
        self.last_error = None;
    }

    pub fn is_legal(&self, col: u8, row: u8) -> bool {
        self.inner.is_legal((col, row), self.inner.current_player())
    }

    // -- Engine accessors (WASM-friendly types) --

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.cells())
    }

    /// Move number per point, `0` where empty.
    pub fn move_numbers(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.inner.move_numbers())
    }

    pub fn current_turn_stone(&self) -> i8 {
        self.inner.current_player().to_int()
    }

    pub fn move_number(&self) -> u32 {
        self.inner.move_number()
    }

    pub fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    /// `1` Black, `-1` White, `0` while the game is running.
    pub fn winner(&self) -> i8 {
        self.inner.winner().map_or(0, Stone::to_int)
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_col(&self) -> i8 {
        self.inner.ko().map_or(-1, |ko| ko.pos.0 as i8)
    }

    pub fn ko_row(&self) -> i8 {
        self.inner.ko().map_or(-1, |ko| ko.pos.1 as i8)
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    /// Status line to show under the board. After a rejected move this is the
    /// generic invalid-move notice.
    pub fn status(&self) -> String {
        match self.last_error {
            Some(_) => GoError::NOTICE.to_string(),
            None => self.inner.status_line(),
        }
    }

    /// Machine-readable reason for the last rejected move, or empty string.
    pub fn last_error(&self) -> String {
        self.last_error.map(|e| e.code().to_string()).unwrap_or_default()
    }

    // -- JSON serialization (WASM boundary) --

    /// Points emptied by the last accepted move, as `[col, row]` pairs.
    pub fn last_captures_json(&self) -> String {
        points_json(self.inner.last_captures())
    }

    /// Report on the last placement attempt.
    pub fn last_move_json(&self) -> String {
        let captured = to_pairs(self.inner.last_captures());
        let report = match self.last_error {
            Some(e) => MoveReport {
                ok: false,
                reason: Some(e.code()),
                notice: Some(GoError::NOTICE),
                captured: &[],
            },
            None => MoveReport {
                ok: true,
                reason: None,
                notice: None,
                captured: &captured,
            },
        };
        serde_json::to_string(&report).unwrap_or_else(|_| r#"{"ok":false}"#.to_string())
    }

    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.inner.game_state()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Replace the current game with a serialized `GameState`.
    pub fn load_state_json(&mut self, json: &str) -> bool {
        let Ok(state) = serde_json::from_str::<GameState>(json) else {
            return false;
        };
        match Engine::from_game_state(state) {
            Ok(engine) => {
                self.inner = engine;
                self.last_error = None;
                true
            }
            Err(_) => false,
        }
    }
}

fn to_pairs(points: &[Point]) -> Vec<[u8; 2]> {
    points.iter().map(|&(c, r)| [c, r]).collect()
}

fn points_json(points: &[Point]) -> String {
    serde_json::to_string(&to_pairs(points)).unwrap_or_else(|_| "[]".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_falls_back_to_default() {
        let engine = WasmEngine::new(0);
        assert_eq!(engine.size(), 19);
    }

    #[test]
    fn config_json_picks_size() {
        let engine = WasmEngine::from_config_json(r#"{"size": 9}"#).unwrap();
        assert_eq!(engine.size(), 9);
        assert!(WasmEngine::from_config_json(r#"{"size": 99}"#).is_none());
    }

    #[test]
    fn rejected_move_shows_notice() {
        let mut engine = WasmEngine::new(9);
        assert!(engine.try_play(2, 2));
        assert_eq!(engine.status(), "Current Player: White");
        assert!(!engine.try_play(2, 2));
        assert_eq!(engine.status(), "Invalid move. Try again.");
        assert_eq!(engine.last_error(), "occupied");

        let report: serde_json::Value = serde_json::from_str(&engine.last_move_json()).unwrap();
        assert_eq!(report["ok"], false);
        assert_eq!(report["reason"], "occupied");
    }

    #[test]
    fn capture_reported_as_pairs() {
        let mut engine = WasmEngine::new(9);
        for (col, row) in [(0, 1), (0, 0), (1, 0)] {
            assert!(engine.try_play(col, row));
        }
        assert_eq!(engine.last_captures_json(), "[[0,0]]");
        let report: serde_json::Value = serde_json::from_str(&engine.last_move_json()).unwrap();
        assert_eq!(report["captured"], serde_json::json!([[0, 0]]));
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut engine = WasmEngine::new(9);
        engine.try_play(4, 4);
        let json = engine.state_json();

        let mut other = WasmEngine::new(19);
        assert!(other.load_state_json(&json));
        assert_eq!(other.size(), 9);
        assert_eq!(other.move_number(), 1);
        assert_eq!(other.current_turn_stone(), -1);
        assert!(!other.load_state_json("not json"));
    }

    #[test]
    fn exhausted_move_counter_rejects_instead_of_panicking() {
        let mut state: serde_json::Value =
            serde_json::from_str(&WasmEngine::new(5).state_json()).unwrap();
        state["move_number"] = serde_json::json!(u32::MAX);

        let mut engine = WasmEngine::new(19);
        assert!(engine.load_state_json(&state.to_string()));
        assert!(!engine.try_play(0, 0));
        assert_eq!(engine.last_error(), "move_limit");
        assert_eq!(engine.move_number(), u32::MAX);
    }

    #[test]
    fn star_points_for_nineteen() {
        let pts: Vec<[u8; 2]> = serde_json::from_str(&star_points(19)).unwrap();
        assert_eq!(pts.len(), 9);
        assert!(pts.contains(&[9, 9]));
    }
}
