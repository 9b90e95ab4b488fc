//! Interactive two-player game in the terminal.
//!
//! Both seats are human and share the keyboard. After each game the player
//! is asked whether to play again. Options: --length, --seed, --min-length,
//! --max-length, --verbose

use anyhow::Result;
use clap::Parser;
use dialoguer::{Confirm, Input, Select};

use digit_pairs::core::{GameConfig, GameRng, GameState, Move, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use digit_pairs::driver::Session;
use digit_pairs::games::PairSumGame;

#[derive(Debug, Parser)]
#[command(name = "digit-pairs", about = "Sum pairs of digits until one is left")]
struct Args {
    /// Starting string length (prompted for when absent)
    #[arg(short, long)]
    length: Option<usize>,

    /// Seed for digit generation (random when absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Shortest allowed starting string
    #[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Longest allowed starting string
    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    log(args.verbose)?;

    let config = GameConfig::default().with_length_bounds(args.min_length, args.max_length);
    let game = PairSumGame::new(config)?;
    let mut rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    println!("seed {}", rng.seed());

    loop {
        let length = match args.length {
            Some(length) => length,
            None => prompt_length(game.config())?,
        };
        play(Session::start(game.clone(), length, &mut rng)?)?;

        println!();
        let again = Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}

/// Run one game to the end and print the result.
fn play(mut session: Session) -> Result<()> {
    while !session.is_over() {
        let moves = session.legal_moves()?;
        let labels = moves
            .iter()
            .map(|mv| label(session.state(), *mv))
            .collect::<Vec<_>>();

        println!();
        println!("{}", render(session.state()));
        let choice = Select::new()
            .with_prompt(format!("{} to move", session.to_move()))
            .items(&labels)
            .default(0)
            .interact()?;

        let seat = session.to_move();
        match session.play(moves[choice]) {
            Ok(record) => println!("{}: {}", seat, record),
            Err(err) => println!("rejected: {}", err),
        }
    }

    let state = session.state();
    println!();
    println!(
        "final digit {}, score {} + bank {} = {}",
        state.digits()[0],
        state.score(),
        state.bank(),
        state.final_score()
    );
    match session.outcome()?.winner() {
        Some(seat) => println!("{} wins", seat),
        None => println!("draw"),
    }
    Ok(())
}

/// Initialize terminal logging. Moves are logged at debug level.
fn log(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn prompt_length(config: &GameConfig) -> Result<usize> {
    let config = *config;
    let length = Input::<usize>::new()
        .with_prompt(format!("String length [{}-{}]", config.min_length, config.max_length))
        .validate_with(move |length: &usize| -> Result<(), String> {
            config.check_length(*length).map_err(|err| err.to_string())
        })
        .interact_text()?;
    Ok(length)
}

/// Digits with their indices underneath.
fn render(state: &GameState) -> String {
    let digits = state
        .digits()
        .iter()
        .map(|d| format!("{:>3}", d))
        .collect::<String>();
    let indices = (0..state.len()).map(|i| format!("{:>3}", i)).collect::<String>();
    format!(
        "{}\n{}\nscore {}  bank {}",
        digits,
        indices,
        state.score(),
        state.bank()
    )
}

fn label(state: &GameState, mv: Move) -> String {
    let digits = state.digits();
    let index = mv.index();
    if mv.is_pair_sum() {
        format!("sum {}+{} at {} (+1)", digits[index], digits[index + 1], index)
    } else {
        format!("delete {} at {} (-1)", digits[index], index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shows_indices() {
        let state = GameState::from_parts(vec![4, 5, 1], 2, 0).unwrap();
        let lines: Vec<_> = render(&state).lines().map(str::to_owned).collect();

        assert_eq!(lines, vec!["  4  5  1", "  0  1  2", "score 2  bank 0"]);
    }

    #[test]
    fn test_render_wide_string() {
        let state = GameState::from_parts(vec![6; 12], -3, 1).unwrap();
        let rendered = render(&state);
        let indices = rendered.lines().nth(1).unwrap();

        assert!(indices.ends_with(" 10 11"));
        assert!(rendered.ends_with("score -3  bank 1"));
    }

    #[test]
    fn test_label() {
        let state = GameState::from_parts(vec![4, 5, 1], 0, 0).unwrap();

        assert_eq!(label(&state, Move::PairSum { index: 0 }), "sum 4+5 at 0 (+1)");
        assert_eq!(label(&state, Move::DeleteUnpaired { index: 2 }), "delete 1 at 2 (-1)");
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["digit-pairs", "--seed", "7", "-l", "16"]).unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.length, Some(16));
        assert_eq!(args.min_length, DEFAULT_MIN_LENGTH);
        assert_eq!(args.max_length, DEFAULT_MAX_LENGTH);
        assert!(!args.verbose);
    }
}
