#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, ui, ComputerPlayer, Game, GameError, HumanPlayer, Mark, MatchRunner, Player,
    RandomPlayer,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Side {
    /// Player A, moves first.
    X,
    /// Player B, moves second.
    O,
}

#[cfg(feature = "std")]
impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Side::X, help = "Mark you play; X always opens")]
        mark: Side,
    },
    /// Watch the computer play against a random opponent.
    Local {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { mark } => {
            let human: Mark = mark.into();
            let computer = human.opponent();
            println!("You are {}. The computer plays {}.", human, computer);
            println!("Type 'help' for move syntax, 'quit' to leave.\n");

            let human_player: Box<dyn Player> = Box::new(HumanPlayer::stdio());
            let computer_player: Box<dyn Player> = Box::new(ComputerPlayer::new());
            let (x, o) = match human {
                Mark::X => (human_player, computer_player),
                Mark::O => (computer_player, human_player),
            };
            let mut runner = MatchRunner::new(x, o, Game::new(human, computer)?);

            loop {
                match runner.play_round().await {
                    Ok(_) => {
                        println!("{}\n", ui::render_scoreboard(&runner.scoreboard()));
                    }
                    Err(e) if matches!(e.downcast_ref::<GameError>(), Some(GameError::Abandoned(_))) => {
                        break;
                    }
                    Err(e) => return Err(e),
                }
            }
            println!("\nThanks for playing!");
            println!("{}", ui::render_scoreboard(&runner.scoreboard()));
        }
        Commands::Local { games, seed } => {
            println!("Starting {} games: random opponent (X) vs computer (O)...", games);
            let seed = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (games will be reproducible)", s);
                    s
                }
                None => rand::random(),
            };

            let mut runner = MatchRunner::new(
                Box::new(RandomPlayer::new(seed)),
                Box::new(ComputerPlayer::new()),
                Game::default(),
            );
            let score = runner.play_rounds(games).await?;
            println!(
                "Random opponent wins: {}  Computer wins: {}  Draws: {}",
                score.human_wins, score.computer_wins, score.draws
            );
            if score.human_wins > 0 {
                return Err(anyhow::anyhow!(
                    "computer lost {} of {} games",
                    score.human_wins,
                    games
                ));
            }
        }
    }
    Ok(())
}
