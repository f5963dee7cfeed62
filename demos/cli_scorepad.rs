//! CLI scorepad example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use yzpad::{Category, DieAdjust, GameState, Row, Scorepad, ScorepadOptions};

fn main() {
    env_logger::init();

    println!("Yahtzee scorepad CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = ScorepadOptions::default()
        .with_series(true)
        .with_manual_dice(true);
    let mut pad = Scorepad::new(options, seed);

    if !setup(&mut pad) {
        return;
    }

    loop {
        while pad.state() == GameState::Playing {
            print_turn(&pad);
            println!("{}", colorize(ACTIONS, "90"));

            let input = prompt_line("Action: ");
            let mut words = input.split_whitespace();
            let result = match words.next().unwrap_or("") {
                "r" | "roll" => pad.roll().map(|_| ()).map_err(|e| e.to_string()),
                "h" | "hold" => parse_die(words.next())
                    .and_then(|i| pad.toggle_hold(i).map(|_| ()).map_err(|e| e.to_string())),
                "+" | "-" => {
                    let delta = if input.starts_with('+') { 1 } else { -1 };
                    parse_die(words.next()).and_then(|i| {
                        pad.adjust_die(i, DieAdjust::Step(delta))
                            .map(|_| ())
                            .map_err(|e| e.to_string())
                    })
                }
                "s" | "score" => words
                    .next()
                    .ok_or_else(|| "missing category".to_string())
                    .and_then(|key| key.parse::<Category>().map_err(|e| e.to_string()))
                    .and_then(|category| {
                        let player = pad.current_player_index();
                        pad.select_category(category, player)
                            .map(|assigned| {
                                println!("Scored {} in {}.", assigned.points, category.label());
                            })
                            .map_err(|e| e.to_string())
                    }),
                "p" | "preview" => {
                    print_preview(&pad);
                    Ok(())
                }
                "q" | "quit" => return,
                _ => Err("unknown action".to_string()),
            };

            if let Err(err) = result {
                println!("Rejected: {err}");
            }
        }

        print_scoresheet(&pad);
        println!("{}", pad.turn_state());

        match prompt_line("Play again (a), new group (n) or quit (q)? ").as_str() {
            "a" | "again" => {
                if let Err(err) = pad.play_again() {
                    println!("Play again error: {err}");
                }
            }
            "n" | "new" => {
                pad.reset_group();
                if !setup(&mut pad) {
                    return;
                }
            }
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

const ACTIONS: &str =
    "Actions: [r]oll  [h]old <die>  + <die>  - <die>  [s]core <key>  [p]review  [q]uit";

/// Collects player names and starts the first round. Returns `false` to quit.
fn setup(pad: &mut Scorepad) -> bool {
    loop {
        let input = prompt_line("Player name (empty to start, '1' for quick start): ");
        match input.as_str() {
            "q" | "quit" => return false,
            "1" => return pad.quick_start().is_ok(),
            "" => match pad.start_round() {
                Ok(_) => return true,
                Err(err) => println!("Setup error: {err}"),
            },
            name => {
                if let Err(err) = pad.add_player(name) {
                    println!("Setup error: {err}");
                }
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn parse_die(word: Option<&str>) -> Result<usize, String> {
    word.and_then(|w| w.parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| "expected a die number 1-5".to_string())
}

fn print_turn(pad: &Scorepad) {
    let name = pad.current_player().map_or("?", |p| p.name());
    println!("\n{name}'s turn - {}", pad.turn_state());
    println!("Dice: {}", pad.hand());
}

fn print_preview(pad: &Scorepad) {
    let preview = pad.preview(pad.current_player_index());
    if preview.is_empty() {
        println!("Nothing to preview.");
        return;
    }
    for (category, points) in preview {
        println!("  {:<16} {:>3}  ({})", category.label(), points, category.key());
    }
}

fn print_scoresheet(pad: &Scorepad) {
    print!("\n{:<16}", "");
    for player in pad.players() {
        print!(" {:>10}", player.name());
    }
    println!();

    for row in Row::ALL {
        if row == Row::SeriesTotal && !pad.options().series {
            continue;
        }
        let label = if row.is_header() {
            colorize(&format!("{:<16}", row.label()), "1")
        } else {
            format!("{:<16}", row.label())
        };
        print!("{label}");
        for index in 0..pad.player_count() {
            let cell = pad
                .row_value(index, row)
                .map_or_else(String::new, |v| v.to_string());
            print!(" {cell:>10}");
        }
        println!();
    }
    println!();
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
