//! Terminal blackjack against a dealer who draws to a fixed total.

use core::time::Duration;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::input::{parse_action, parse_bet, parse_yes};
use bjsolo::{
    BetInput, Game, GameOptions, GameState, Hand, MIN_BET, PlayerAction, RoundOutcome,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play blackjack against the dealer")]
struct Args {
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 6)]
    decks: u8,

    /// Total at which the dealer stands.
    #[arg(long, default_value_t = 17)]
    stand_on: u8,

    /// Starting bankroll.
    #[arg(long, default_value_t = 1000)]
    bankroll: usize,

    /// Shuffle seed. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between dealer hits, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pace_ms: u64,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_stand_threshold(args.stand_on)
        .with_bankroll(args.bankroll);
    let mut game = Game::new(options, seed);
    let pace = Duration::from_millis(args.pace_ms);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_welcome(args.stand_on);

    while game.state() == GameState::AwaitingBet {
        println!("\nBankroll: ${}", game.bankroll());
        let Some(bet) = prompt_bet(&mut lines, game.bankroll())? else {
            game.quit();
            break;
        };

        if let Err(err) = game.bet(bet) {
            println!("Bet error: {err}");
            continue;
        }
        announce_reshuffle(&mut game);

        if game.state() == GameState::PlayerTurn {
            player_turn(&mut game, &mut lines)?;
        }

        if game.state() == GameState::DealerTurn {
            dealer_turn(&mut game, pace)?;
        }

        let result = match game.showdown() {
            Ok(result) => result,
            Err(err) => {
                println!("Showdown error: {err}");
                break;
            }
        };

        if game.player_hand().is_blackjack() {
            println!("\nYour hand: {}", game.player_hand());
            println!("Dealer's hand: {}", game.dealer_hand());
            if result.outcome == RoundOutcome::Push {
                println!("Both you and the dealer have blackjack! It's a push!");
            } else {
                println!("{}", result.outcome);
            }
        } else {
            print_hands(&game);
            println!("{}", result.outcome);
        }
        println!("\nYour bankroll: ${}", game.bankroll());

        if game.state() == GameState::GameOver {
            println!("\nYou don't have enough money for the minimum bet!");
            break;
        }

        let again = prompt_line(&mut lines, "\nWould you like to play again? (Y/N): ")?;
        if !again.is_some_and(|line| parse_yes(&line)) {
            game.quit();
        }
    }

    println!("\nThanks for playing! You're leaving with ${}", game.bankroll());
    Ok(())
}

fn print_welcome(stand_on: u8) {
    println!("Welcome to Blackjack!");
    println!("Rules:");
    println!("- Try to get as close to 21 as possible without going over.");
    println!("- Face cards are worth 10. Aces are worth 1 or 11.");
    println!(
        "- Dealer must hit on {} and stand on {stand_on}.",
        stand_on.saturating_sub(1)
    );
    println!("- Minimum bet is ${MIN_BET}.");
    println!("{}", "-".repeat(40));
}

fn player_turn<B: BufRead>(game: &mut Game, lines: &mut io::Lines<B>) -> io::Result<()> {
    while game.state() == GameState::PlayerTurn {
        println!(
            "\nYour hand: {} (Value: {})",
            game.player_hand(),
            game.player_hand().value()
        );
        if let Some(card) = game.dealer_up_card() {
            println!("Dealer's hand: {card} ?");
        }

        let Some(line) = prompt_line(lines, "\nWould you like to (H)it or (S)tand? ")? else {
            // End of input stands on the current hand.
            if let Err(err) = game.stand() {
                println!("Action error: {err}");
            }
            break;
        };

        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(err) => {
                println!("Invalid input. {err}.");
                continue;
            }
        };

        match action {
            PlayerAction::Hit => {
                if let Err(err) = game.hit() {
                    println!("Action error: {err}");
                }
                announce_reshuffle(game);
            }
            PlayerAction::Stand => {
                if let Err(err) = game.stand() {
                    println!("Action error: {err}");
                }
            }
        }
    }

    let hand = game.player_hand();
    if hand.is_bust() {
        println!("\nBust! Your hand: {hand} (Value: {})", hand.value());
    } else if hand.value() == 21 {
        println!("\nYour hand: {hand} (Value: 21)");
        println!("Twenty-one!");
    }

    Ok(())
}

fn dealer_turn(game: &mut Game, pace: Duration) -> io::Result<()> {
    println!(
        "\nDealer's hand: {} (Value: {})",
        game.dealer_hand(),
        game.dealer_hand().value()
    );

    let drawn = match game.dealer_play() {
        Ok(drawn) => drawn,
        Err(err) => {
            println!("Dealer error: {err}");
            return Ok(());
        }
    };
    announce_reshuffle(game);

    // Replay the draws one at a time for pacing.
    let cards = game.dealer_hand().cards();
    let initial = cards.len() - drawn.len();
    for shown in initial + 1..=cards.len() {
        thread::sleep(pace);
        let partial: Hand = cards[..shown].iter().copied().collect();
        println!("Dealer hits: {partial} (Value: {})", partial.value());
        io::stdout().flush()?;
    }

    if game.dealer_hand().is_bust() {
        println!("Dealer busts!");
    }

    Ok(())
}

fn print_hands(game: &Game) {
    println!(
        "\nYour hand: {} (Value: {})",
        game.player_hand(),
        game.player_hand().value()
    );
    println!(
        "Dealer's hand: {} (Value: {})",
        game.dealer_hand(),
        game.dealer_hand().value()
    );
}

fn announce_reshuffle(game: &mut Game) {
    if game.take_reshuffle_notice() {
        println!("Reshuffling deck...");
    }
}

fn prompt_line<B: BufRead>(
    lines: &mut io::Lines<B>,
    prompt: &str,
) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn prompt_bet<B: BufRead>(
    lines: &mut io::Lines<B>,
    bankroll: usize,
) -> io::Result<Option<usize>> {
    loop {
        let Some(line) = prompt_line(lines, "Place your bet (or 0 to quit): $")? else {
            return Ok(None);
        };

        match parse_bet(&line, bankroll) {
            Ok(BetInput::Amount(amount)) => return Ok(Some(amount)),
            Ok(BetInput::Quit) => return Ok(None),
            Err(err) => println!("{err}!"),
        }
    }
}
