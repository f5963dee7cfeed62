//! A multi-player Yahtzee scorepad engine with optional `no_std` support.
//!
//! The crate provides a [`Scorepad`] type that manages the roster, the dice
//! of the current turn, the scoresheets of every player, and the round flow
//! from the first roll until every player has filled every category.
//!
//! Scoring itself is a pure function, [`score`], usable without a scorepad.
//!
//! # Example
//!
//! ```no_run
//! use yzpad::{Category, Scorepad, ScorepadOptions};
//!
//! let mut pad = Scorepad::new(ScorepadOptions::default(), 42);
//! pad.add_player("Ada").unwrap();
//! pad.start_round().unwrap();
//! pad.roll().unwrap();
//! pad.select_category(Category::Chance, 0).unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod category;
pub mod die;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod scoresheet;
pub mod scoring;

// Re-export main types
pub use category::{Category, Row};
pub use die::{DieAdjust, FACES, HAND_SIZE};
pub use error::{
    AdjustError, CategoryParseError, ErrorKind, HoldError, RollError, RoundError, ScoreError,
    SetupError,
};
pub use game::{GameState, Scorepad, TurnPhase, TurnState};
pub use hand::Hand;
pub use options::ScorepadOptions;
pub use player::Player;
pub use result::{ScoreAssigned, Totals};
pub use scoresheet::Scoresheet;
pub use scoring::{score, score_key};
