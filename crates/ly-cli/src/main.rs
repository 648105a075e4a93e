//! CLI frontend for the Liu-Yao divination engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use ly_engine::Language;
use ly_session::SessionConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::Format;

#[derive(Parser)]
#[command(
    name = "ly",
    about = "Liu-Yao six-line divination with three coins",
    version,
    propagate_version = true
)]
struct Cli {
    /// Report language: zh-CN, zh-TW, en or ja
    #[arg(short, long, global = true, default_value = "zh-CN")]
    lang: Language,

    /// History file
    #[arg(long, global = true, default_value = "ly-history.json")]
    history: PathBuf,

    /// Maximum number of saved readings
    #[arg(long, global = true, default_value_t = ly_session::DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toss three coins six times and read the hexagram
    Cast {
        /// RNG seed for a reproducible casting
        #[arg(short, long)]
        seed: Option<u64>,

        /// The question being asked
        #[arg(short, long, default_value = "")]
        question: String,

        /// Print the hexagram and reading as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print the report as plain text instead of markdown
        #[arg(long)]
        plain: bool,

        /// Do not record the reading in history
        #[arg(long)]
        no_save: bool,
    },

    /// Read a hexagram from six line values (6-9), bottom line first
    Read {
        /// Line values: 6 old yin, 7 young yang, 8 young yin, 9 old yang
        #[arg(num_args = 6, required = true)]
        lines: Vec<u32>,

        /// Print the hexagram and reading as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print the report as plain text instead of markdown
        #[arg(long)]
        plain: bool,
    },

    /// List the eight palaces and their hexagrams
    Palaces,

    /// Inspect or clear saved readings
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List saved readings, newest first
    List,

    /// Show one saved reading
    Show {
        /// Record id or a unique prefix of it
        id: String,
    },

    /// Delete every saved reading
    Clear,
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SessionConfig::default()
        .with_language(cli.lang)
        .with_history_limit(cli.history_limit);

    let result = match cli.command {
        Commands::Cast {
            seed,
            question,
            json,
            plain,
            no_save,
        } => {
            let config = match seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            };
            let history = (!no_save).then_some(cli.history.as_path());
            let format = Format::from_flags(json, plain);
            commands::cast::run(&config, &question, format, history)
        }
        Commands::Read { lines, json, plain } => {
            commands::read::run(&config, &lines, Format::from_flags(json, plain))
        }
        Commands::Palaces => commands::palaces::run(cli.lang),
        Commands::History { action } => {
            let limit = config.history_limit;
            match action {
                HistoryAction::List => commands::history::list(&cli.history, limit),
                HistoryAction::Show { id } => commands::history::show(&cli.history, limit, &id),
                HistoryAction::Clear => commands::history::clear(&cli.history, limit),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
