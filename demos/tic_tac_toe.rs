use clap::{Parser, ValueEnum};
use minimax_ttt::board::Mark;
use minimax_ttt::random::{CustomNumberGenerator, RandomGenerator, StandardRandomGenerator};
use minimax_ttt::session::{BotKind, GameSession, GameStatus, parse_position};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Answer {
    Yes,
    No,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Bot {
    Minimax,
    Random,
}

impl From<Bot> for BotKind {
    fn from(bot: Bot) -> Self {
        match bot {
            Bot::Minimax => BotKind::Minimax,
            Bot::Random => BotKind::Random,
        }
    }
}

/// Play tic-tac-toe against the computer.
#[derive(Debug, Parser)]
#[command(name = "tic_tac_toe")]
struct Args {
    /// Whether you move first (as X). Asked interactively when omitted.
    #[arg(long, value_enum)]
    first: Option<Answer>,

    #[arg(long, value_enum, default_value_t = Bot::Minimax)]
    bot: Bot,

    /// Seed for the random bot; a fresh thread-local generator is used otherwise.
    #[arg(long)]
    seed: Option<u64>,

    /// Log level, overridden by RUST_LOG.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let first = match args.first {
        Some(answer) => answer,
        None => match ask_first(&mut input)? {
            Some(answer) => answer,
            None => return Ok(()),
        },
    };
    let human = match first {
        Answer::Yes => Mark::X,
        Answer::No => Mark::O,
    };
    info!(%human, bot = ?args.bot, seed = ?args.seed, "starting game");

    match args.seed {
        Some(seed) => play(
            GameSession::builder()
                .with_human_mark(human)
                .with_bot(args.bot.into())
                .with_random_generator(CustomNumberGenerator::from_seed(seed))
                .build(),
            &mut input,
        ),
        None => play(
            GameSession::<StandardRandomGenerator>::builder()
                .with_human_mark(human)
                .with_bot(args.bot.into())
                .build(),
            &mut input,
        ),
    }
}

fn ask_first(input: &mut impl BufRead) -> io::Result<Option<Answer>> {
    loop {
        let Some(line) = prompt(input, "Do you want to go first? (Y/n) ")? else {
            return Ok(None);
        };
        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(Some(Answer::Yes)),
            "n" => return Ok(Some(Answer::No)),
            _ => println!("Invalid input! Please enter 'Y' or 'n'."),
        }
    }
}

fn play<K: RandomGenerator>(mut game: GameSession<K>, input: &mut impl BufRead) -> io::Result<()> {
    loop {
        let status = if game.is_human_turn() {
            print!("{}", game.board());
            let Some(line) = prompt(input, "Enter 'row' and 'column' separated by a comma: ")?
            else {
                return Ok(());
            };
            match parse_position(&line).and_then(|pos| game.play_human(pos)) {
                Ok(status) => status,
                Err(err) => {
                    println!("{err}! Try again.");
                    continue;
                }
            }
        } else {
            println!("AI's turn...");
            match game.play_bot() {
                Ok((_, status)) => status,
                Err(err) => {
                    error!(%err, "bot could not move");
                    return Ok(());
                }
            }
        };

        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(mark) => {
                print!("{}", game.board());
                println!("{mark} wins!");
                return Ok(());
            }
            GameStatus::Draw => {
                print!("{}", game.board());
                println!("It's a draw!");
                return Ok(());
            }
        }
    }
}

/// Returns `None` at end of input.
fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
