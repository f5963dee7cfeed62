use yzpad::{
    Category, DieAdjust, GameState, Player, Row, ScoreAssigned, Scorepad, ScorepadOptions,
    TurnPhase,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmScorepad {
    pad: Scorepad,
}

#[wasm_bindgen]
impl WasmScorepad {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, series: bool, manual_dice: bool) -> Self {
        Self {
            pad: Scorepad::new(options(series, manual_dice), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32, series: bool, manual_dice: bool) {
        self.pad = Scorepad::new(options(series, manual_dice), seed as u64);
    }

    pub fn add_player(&mut self, name: &str) -> Result<u32, JsValue> {
        self.pad
            .add_player(name)
            .map(|index| index as u32)
            .map_err(js_err)
    }

    pub fn remove_player(&mut self, index: u32) -> Result<(), JsValue> {
        self.pad
            .remove_player(index as usize)
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn start_round(&mut self) -> Result<(), JsValue> {
        self.pad.start_round().map(|_| ()).map_err(js_err)
    }

    pub fn quick_start(&mut self) -> Result<(), JsValue> {
        self.pad.quick_start().map(|_| ()).map_err(js_err)
    }

    pub fn roll(&mut self) -> Result<Vec<u8>, JsValue> {
        self.pad
            .roll()
            .map(|hand| hand.dice().to_vec())
            .map_err(js_err)
    }

    pub fn toggle_hold(&mut self, index: u32) -> Result<bool, JsValue> {
        self.pad.toggle_hold(index as usize).map_err(js_err)
    }

    pub fn step_die(&mut self, index: u32, delta: i8) -> Result<u8, JsValue> {
        self.pad
            .adjust_die(index as usize, DieAdjust::Step(delta))
            .map_err(js_err)
    }

    pub fn set_die(&mut self, index: u32, face: u8) -> Result<u8, JsValue> {
        self.pad
            .adjust_die(index as usize, DieAdjust::Set(face))
            .map_err(js_err)
    }

    pub fn select_category(&mut self, key: &str, player_index: u32) -> Result<JsValue, JsValue> {
        let category = key.parse::<Category>().map_err(js_err)?;
        let assigned = self
            .pad
            .select_category(category, player_index as usize)
            .map_err(js_err)?;
        to_js_value(&JsScoreAssigned::from(assigned))
    }

    pub fn play_again(&mut self) -> Result<(), JsValue> {
        self.pad.play_again().map_err(js_err)
    }

    pub fn reset_group(&mut self) {
        self.pad.reset_group();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let turn = self.pad.turn_state();
        let current = self.pad.current_player_index();

        let players = self
            .pad
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| JsPlayer::from_player(&self.pad, index, player))
            .collect();

        let preview = self
            .pad
            .preview(current)
            .into_iter()
            .map(|(category, points)| JsPreview {
                key: category.key(),
                points,
            })
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(self.pad.state()),
            phase: turn.phase.map(phase_to_str),
            status: turn.to_string(),
            current_player: current as u32,
            rolls_left: turn.rolls_left,
            dice: turn.dice.to_vec(),
            held: turn.held.to_vec(),
            players,
            preview,
            rows: Row::ALL.iter().map(|&row| JsRow::from(row)).collect(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    phase: Option<&'static str>,
    status: String,
    current_player: u32,
    rolls_left: u8,
    dice: Vec<u8>,
    held: Vec<bool>,
    players: Vec<JsPlayer>,
    preview: Vec<JsPreview>,
    rows: Vec<JsRow>,
}

#[derive(Serialize)]
struct JsRow {
    key: &'static str,
    label: &'static str,
    computed: bool,
    header: bool,
}

impl From<Row> for JsRow {
    fn from(row: Row) -> Self {
        Self {
            key: row.key(),
            label: row.label(),
            computed: row.is_computed(),
            header: row.is_header(),
        }
    }
}

#[derive(Serialize)]
struct JsPlayer {
    name: String,
    /// One cell per entry of `Snapshot::rows`.
    cells: Vec<Option<u32>>,
    series: u32,
    rounds_completed: u32,
}

impl JsPlayer {
    fn from_player(pad: &Scorepad, index: usize, player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            cells: Row::ALL
                .iter()
                .map(|&row| pad.row_value(index, row))
                .collect(),
            series: player.series(),
            rounds_completed: player.rounds_completed(),
        }
    }
}

#[derive(Serialize)]
struct JsPreview {
    key: &'static str,
    points: u16,
}

#[derive(Serialize)]
struct JsScoreAssigned {
    player_index: u32,
    key: &'static str,
    points: u16,
    round_over: bool,
    next_player: Option<u32>,
}

impl From<ScoreAssigned> for JsScoreAssigned {
    fn from(assigned: ScoreAssigned) -> Self {
        Self {
            player_index: assigned.player_index as u32,
            key: assigned.category.key(),
            points: assigned.points,
            round_over: assigned.round_over,
            next_player: assigned.next_player.map(|index| index as u32),
        }
    }
}

fn options(series: bool, manual_dice: bool) -> ScorepadOptions {
    ScorepadOptions::default()
        .with_series(series)
        .with_manual_dice(manual_dice)
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Setup => "Setup",
        GameState::Playing => "Playing",
        GameState::RoundOver => "RoundOver",
    }
}

fn phase_to_str(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::AwaitingRoll => "AwaitingRoll",
        TurnPhase::RollingAllowed => "RollingAllowed",
        TurnPhase::MustScore => "MustScore",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
