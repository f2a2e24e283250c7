//! Interactive single-player blackjack round.

#![expect(clippy::unwrap_used, reason = "binary glue, not library code")]

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{DealerRules, DealerState, DeckBuilder, Hand};

fn prompt_line(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();
    input.trim().to_uppercase()
}

fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(ToString::to_string).collect();
    cards.join(", ")
}

fn print_player(player: &Hand) {
    println!("YOUR CARDS: {}", format_hand(player));
    // A standard deck has no Jokers, so scoring cannot fail.
    let scores = player.scores().unwrap();
    println!("Your score(s): {:?}", scores.valid());
}

fn print_dealer_up_card(dealer: &Hand) {
    println!("DEALER'S CARDS: {}, [HIDDEN]", dealer.cards()[0]);
}

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = DeckBuilder::new().shuffle().build_seeded(seed);

    let mut player = Hand::new();
    let mut dealer = Hand::new();

    // Two cards each, alternating, player first.
    for _ in 0..2 {
        deck.deal(&mut player).unwrap();
        deck.deal(&mut dealer).unwrap();
    }

    print_dealer_up_card(&dealer);
    println!("-------------------");
    print_player(&player);

    loop {
        match prompt_line("\nHIT (H) or STAY (S): ").as_str() {
            "H" => {
                deck.deal(&mut player).unwrap();

                if player.is_bust().unwrap() {
                    println!("*** YOU WENT BUST ***");
                    println!("YOUR CARDS: {}", format_hand(&player));
                    println!("Your score(s): {:?}", player.scores().unwrap().totals());
                    println!("YOU LOST");
                    return ExitCode::SUCCESS;
                }

                print_dealer_up_card(&dealer);
                println!("-------------------");
                print_player(&player);
            }
            "S" => break,
            _ => println!("Invalid input."),
        }
    }

    let state = match DealerRules::default().play(&mut deck, &mut dealer) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("Round aborted: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("DEALER'S CARDS: {}", format_hand(&dealer));

    if state == DealerState::Busted {
        println!("Dealer score(s): {:?}", dealer.scores().unwrap().totals());
        println!("*** DEALER WENT BUST ***");
        println!("YOU WON");
        return ExitCode::SUCCESS;
    }

    let dealer_score = dealer.best_score().unwrap().unwrap_or(0);
    let player_score = player.best_score().unwrap().unwrap_or(0);
    println!("Dealer score: {dealer_score}");
    println!("Your score:   {player_score}");

    if player_score > dealer_score {
        println!("YOU WON");
    } else {
        println!("YOU LOST");
    }

    ExitCode::SUCCESS
}
