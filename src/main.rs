// sortty: step-by-step sorting visualizer and race arena

use std::io::{self, Read};

use clap::{ArgAction, Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, Level};

use sortty::api;
use sortty::engine::constants::{
    DEFAULT_GENERATED_LEN, DEFAULT_GENERATED_MAX, DEFAULT_GENERATED_MIN, DEFAULT_SPEED, MAX_SPEED,
    MIN_SPEED,
};
use sortty::engine::{self, input, AlgorithmId, Element, SortError};
use sortty::playback::Speed;
use sortty::race;
use sortty::stats::{self, Mode, SessionRecord, SessionSink, StatsBook};
use sortty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "sortty", version, about = "Sorting algorithms, one step at a time")]
struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step through one algorithm
    Learn(LearnArgs),
    /// Race several algorithms on the same array
    Race(RaceArgs),
    /// Read a sort request as JSON from stdin and print the response
    SortJson,
    /// Read a race request as JSON from stdin and print the response
    RaceJson,
}

#[derive(Args, Debug)]
struct LearnArgs {
    /// bubble, insertion, selection, merge, quick or heap
    algorithm: AlgorithmId,

    #[command(flatten)]
    array: ArrayArgs,
}

#[derive(Args, Debug)]
struct RaceArgs {
    /// Comma separated algorithm ids
    #[arg(value_delimiter = ',', required = true)]
    algorithms: Vec<String>,

    #[command(flatten)]
    array: ArrayArgs,
}

#[derive(Args, Debug)]
struct ArrayArgs {
    /// Array to sort, e.g. "5,3,8,1"; random when omitted
    #[arg(short, long)]
    array: Option<String>,

    /// Length of a random array
    #[arg(short, long, default_value_t = DEFAULT_GENERATED_LEN)]
    size: usize,

    /// Seed for the random array
    #[arg(long)]
    seed: Option<u64>,

    /// Smallest random value
    #[arg(long, default_value_t = DEFAULT_GENERATED_MIN)]
    min: Element,

    /// Largest random value
    #[arg(long, default_value_t = DEFAULT_GENERATED_MAX)]
    max: Element,

    /// Playback speed
    #[arg(long, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u8).range(i64::from(MIN_SPEED)..=i64::from(MAX_SPEED)))]
    speed: u8,
}

impl ArrayArgs {
    fn resolve(&self) -> Result<Vec<Element>, SortError> {
        if let Some(text) = &self.array {
            return input::parse_array(text);
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(input::generate_array(&mut rng, self.size, self.min, self.max))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // The TUI owns stdout
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_tui(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut body = String::new();
    io::stdin().read_to_string(&mut body)?;
    Ok(body)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut book = StatsBook::new();

    match cli.command {
        Command::Learn(args) => {
            let output = match args
                .array
                .resolve()
                .and_then(|array| engine::run(args.algorithm, &array))
            {
                Ok(output) => output,
                Err(e) => {
                    eprintln!("Error: {}", e.public_message());
                    std::process::exit(1);
                }
            };
            book.record_session(SessionRecord::from_run(&output, Mode::Learn));

            let mut app = App::learn(&output, Speed::new(args.array.speed));
            run_tui(&mut app)?;
        }
        Command::Race(args) => {
            let result = match args
                .array
                .resolve()
                .and_then(|array| race::race(&args.algorithms, &array))
            {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("Error: {}", e.public_message());
                    std::process::exit(1);
                }
            };
            stats::record_race(&mut book, &result);

            let mut app = App::race(&result, Speed::new(args.array.speed));
            run_tui(&mut app)?;
        }
        Command::SortJson => {
            println!("{}", api::sort_json(&read_stdin()?, &mut book));
        }
        Command::RaceJson => {
            println!("{}", api::race_json(&read_stdin()?, &mut book));
        }
    }

    info!(summary = %serde_json::to_string(&book.summary())?, "session statistics");
    Ok(())
}
