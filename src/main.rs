use std::io::{self, BufRead, Write};
use std::thread::sleep;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use dice_race::{GameConfig, GameLoop, PlayerId, TurnObserver, TurnOutcome, TurnReport};

/// Dice Race to 100: a 2-4 player board race with boosts and setbacks.
#[derive(Parser)]
#[command(name = "dice-race", about = "Race to square 100 with boosts and setbacks")]
struct Cli {
    /// Number of players (2-4). Prompted for when omitted
    #[arg(long, short)]
    players: Option<usize>,

    /// Player name, once per player in turn order. Prompted for when omitted
    #[arg(long = "name", short)]
    names: Vec<String>,

    /// Fixed die seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Base pacing delay in milliseconds (0 disables pauses)
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Roll automatically instead of waiting for Enter
    #[arg(long)]
    auto: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    println!("🎲 Welcome to Dice Race to 100! 🎲");
    println!("====================================");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let config = collect_config(&cli, &mut input)?;
    info!("config: {:?}", config);

    println!("\nGame starting...");

    let observer = ConsoleObserver::new(input, Duration::from_millis(cli.delay_ms), cli.auto);
    let mut game = GameLoop::from_config(&config, observer)?;
    let seed = game.seed();

    let summary = game.run()?;
    info!(
        "{} won in {} turns (seed {})",
        summary.winner_name, summary.turns, seed
    );

    Ok(())
}

/// Build the game configuration from flags, prompting for anything missing.
fn collect_config(cli: &Cli, input: &mut impl BufRead) -> Result<GameConfig> {
    let count = match (cli.players, cli.names.len()) {
        (Some(count), 0) => count,
        (Some(count), named) if count != named => {
            bail!("--players {} does not match {} --name flags", count, named)
        }
        (_, 0) => prompt(input, "Enter the number of players (2-4): ")?
            .parse()
            .context("player count must be a number")?,
        (_, named) => named,
    };

    GameConfig::validate_player_count(count)
        .context("Invalid number of players. Please restart. Exiting.")?;

    let mut config = if cli.names.is_empty() {
        let mut names = Vec::with_capacity(count);
        for i in 0..count {
            names.push(prompt(input, &format!("Enter name for Player {}: ", i + 1))?);
        }
        GameConfig::new(names)
    } else {
        GameConfig::new(cli.names.iter().cloned())
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    config.validate()?;
    Ok(config)
}

/// Print `message` and read one trimmed line.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

/// Renders the race on the terminal, waiting for Enter before each roll.
struct ConsoleObserver<R> {
    input: R,
    delay: Duration,
    auto: bool,
}

impl<R: BufRead> ConsoleObserver<R> {
    fn new(input: R, delay: Duration, auto: bool) -> Self {
        Self { input, delay, auto }
    }

    fn pause(&self, units: u32) {
        if !self.delay.is_zero() {
            sleep(self.delay * units);
        }
    }

    fn wait_for_enter(&mut self) {
        if self.auto {
            println!();
            return;
        }
        let _ = io::stdout().flush();
        let mut line = String::new();
        if let Err(err) = self.input.read_line(&mut line) {
            warn!("failed to read from stdin: {err}");
        }
    }
}

impl<R: BufRead> TurnObserver for ConsoleObserver<R> {
    fn before_roll(&mut self, _player: PlayerId, name: &str, position: u8) {
        println!("------------------------------------");
        println!("It's {name}'s turn. (Position: {position})");
        print!("Press Enter to roll the dice...");
        self.wait_for_enter();
    }

    fn on_turn(&mut self, report: &TurnReport) {
        let result = &report.result;
        println!("\n{} rolled a {}!", report.player_name, result.roll);
        self.pause(1);

        match result.outcome {
            TurnOutcome::Overshoot => {
                println!("Oh no! A roll of {} overshoots 100. Turn skipped.", result.roll);
            }
            TurnOutcome::Win => {}
            TurnOutcome::Moved(to) => {
                println!("You move to position {to}.");
                self.pause(1);
            }
            TurnOutcome::BoostApplied { from, to } => {
                println!("You move to position {from}.");
                self.pause(1);
                println!("🎉 Wow! You landed on a boost! You jump from {from} to {to}!");
                self.pause(2);
            }
            TurnOutcome::SetbackApplied { from, to } => {
                println!("You move to position {from}.");
                self.pause(1);
                println!("🐍 Ouch! You landed on a setback! You slide from {from} to {to}.");
                self.pause(2);
            }
        }

        print!("\n{}", report.standings);
        if !result.outcome.is_win() {
            self.pause(2);
        }
    }

    fn on_game_over(&mut self, _winner: PlayerId, name: &str) {
        println!("\n====================================");
        println!("🏆 CONGRATULATIONS {name}! YOU WIN! 🏆");
        println!("====================================");
        println!("Thank you for playing!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("dice-race").chain(args.iter().copied()))
    }

    #[test]
    fn test_config_from_flags() {
        let cli = parse_cli(&["--name", "Ada", "--name", "Brian", "--seed", "9"]);
        let config = collect_config(&cli, &mut Cursor::new("")).unwrap();

        assert_eq!(config.player_names, vec!["Ada", "Brian"]);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_config_from_prompts() {
        let cli = parse_cli(&[]);
        let mut input = Cursor::new("3\nAda\nBrian\nCleo\n");
        let config = collect_config(&cli, &mut input).unwrap();

        assert_eq!(config.player_names, vec!["Ada", "Brian", "Cleo"]);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_bad_player_count_rejected() {
        let cli = parse_cli(&[]);
        let err = collect_config(&cli, &mut Cursor::new("5\n")).unwrap_err();
        assert!(err.to_string().contains("Invalid number of players"));

        let cli = cli_with_players(1);
        assert!(collect_config(&cli, &mut Cursor::new("")).is_err());
    }

    #[test]
    fn test_mismatched_flags_rejected() {
        let cli = parse_cli(&["--players", "3", "--name", "Ada", "--name", "Brian"]);
        assert!(collect_config(&cli, &mut Cursor::new("")).is_err());
    }

    #[test]
    fn test_headless_console_game() {
        let config = GameConfig::new(["Ada", "Brian"]).with_seed(11);
        let observer = ConsoleObserver::new(Cursor::new(""), Duration::ZERO, true);
        let mut game = GameLoop::from_config(&config, observer).unwrap();

        let summary = game.run().unwrap();
        assert!(summary.winner_name == "Ada" || summary.winner_name == "Brian");
    }

    fn cli_with_players(count: usize) -> Cli {
        parse_cli(&["--players", &count.to_string()])
    }
}
