//! CLI blackjack table example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Card, DealerStep, DealerTicket, DealerView, HandValue, HandView, Phase, Suit, Table,
    TableOptions, TableView,
};

fn main() {
    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let Ok(mut table) = Table::new(TableOptions::default(), seed) else {
        println!("Could not build the shoe.");
        return;
    };

    loop {
        render(&table.snapshot());

        match table.phase() {
            Phase::Betting => {
                let balance = table.bankroll();
                if balance == 0 {
                    println!("You are out of money. Game over.");
                    break;
                }

                let input = prompt_line(&format!("Bet amount (1-{balance}): "));
                if input == "q" || input == "quit" {
                    println!("Goodbye.");
                    break;
                }
                if let Err(err) = table.place_bet_str(&input) {
                    println!("{err}");
                }
            }
            Phase::PlayerTurn => match prompt_line("Action ([h]it / [s]tand): ").as_str() {
                "h" | "hit" => match table.hit() {
                    Ok(card) => println!("You draw {}.", format_card(card)),
                    Err(err) => println!("{err}"),
                },
                "s" | "stand" => match table.stand() {
                    Ok(ticket) => run_dealer(&mut table, ticket),
                    Err(err) => println!("{err}"),
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            },
            Phase::DealerTurn | Phase::Resolved => {
                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" | "" => {
                        if let Err(err) = table.play_again() {
                            println!("{err}");
                        }
                    }
                    _ => {
                        println!("Goodbye.");
                        break;
                    }
                }
            }
        }
    }
}

/// Steps the dealer to settlement, pausing between draws so each card
/// lands on its own beat.
fn run_dealer(table: &mut Table, ticket: DealerTicket) {
    println!("{}", table.message());
    let delay = table.options().dealer_step_delay;

    loop {
        thread::sleep(delay);
        match table.dealer_step(ticket) {
            Ok(DealerStep::Drew(card)) => println!("Dealer draws {}.", format_card(card)),
            Ok(DealerStep::Settled(summary)) => {
                println!(
                    "{} (dealer {}, you {})",
                    table.message(),
                    summary.dealer_total,
                    summary.player_total
                );
                break;
            }
            Err(err) => {
                println!("{err}");
                break;
            }
        }
    }
}

fn render(view: &TableView) {
    println!("\nBalance: £{}", view.bankroll);
    if let Some(bet) = view.bet {
        println!("Current bet: £{bet}");
    }
    println!("Shoe: {} cards remaining", view.cards_remaining);

    if !view.dealer.cards.is_empty() {
        println!(
            "Dealer: {} (value {})",
            format_dealer(&view.dealer),
            value_label(view.dealer.value)
        );
    }
    if !view.player.cards.is_empty() {
        println!(
            "You:    {} (value {})",
            format_hand(&view.player),
            value_label(view.player.value)
        );
    }
    println!("{}", view.message);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn value_label(value: HandValue) -> String {
    if value.is_soft {
        format!("soft {}", value.total)
    } else {
        value.total.to_string()
    }
}

fn format_dealer(dealer: &DealerView) -> String {
    dealer
        .cards
        .iter()
        .map(|slot| slot.map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &HandView) -> String {
    hand.cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
