use serde::Serialize;
use tictactoe::{ComputerPlayer, Game, MatchRunner, RandomPlayer, Scoreboard};

#[derive(Serialize)]
struct Report {
    seed: u64,
    games: u32,
    #[serde(flatten)]
    score: Scoreboard,
    computer_lost: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", env!("CARGO_BIN_NAME"));
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = args[2].parse()?;

    let mut runner = MatchRunner::new(
        Box::new(RandomPlayer::new(seed)),
        Box::new(ComputerPlayer::new()),
        Game::default(),
    );
    let score = runner.play_rounds(games).await?;

    let report = Report {
        seed,
        games,
        score,
        computer_lost: score.human_wins > 0,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
