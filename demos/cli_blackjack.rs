//! CLI blackjack demo: three rounds against a dealer that hits soft 17.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_state::{
    DealError, DealerPolicy, GameOptions, GameState, HitSoft17, Phase, RoundResult,
};
use tracing_subscriber::EnvFilter;

const ROUNDS: usize = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = GameState::new(GameOptions::default()).shuffle(seed);

    for _ in 0..ROUNDS {
        game = match game.deal() {
            Ok(game) => game,
            Err(DealError::NotEnoughCards) => {
                println!("Shoe is empty. Reshuffling.");
                match game.shuffle(seed.wrapping_add(1)).deal() {
                    Ok(game) => game,
                    Err(err) => {
                        println!("Deal error: {err}");
                        return;
                    }
                }
            }
        };

        while game.phase == Phase::PlayerTurn {
            println!("Player: {}", game.player);
            println!("Dealer: {}", game.dealer.dealer_string());

            let Some(input) = prompt_line("What will you do? (h)it, (s)tand: ") else {
                return;
            };
            let next = match input.as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "q" | "quit" => return,
                other => {
                    println!("Invalid option: {other}");
                    continue;
                }
            };

            match next {
                Ok(next) => game = next,
                Err(err) => {
                    println!("Action error: {err}");
                    return;
                }
            }
        }

        game = match HitSoft17.play(&game) {
            Ok(game) => game,
            Err(err) => {
                println!("Dealer error: {err}");
                return;
            }
        };

        let (next, result) = game.end_hand();
        print_result(&result);
        game = next;
    }
}

/// Reads one trimmed, lowercased line. `None` on end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_result(result: &RoundResult) {
    println!("==FINAL HANDS==");
    println!("Player: {}\nScore: {}", result.player, result.player_score);
    println!("Dealer: {}\nScore: {}", result.dealer, result.dealer_score);
    println!("{}", result.outcome);
    println!();
}
