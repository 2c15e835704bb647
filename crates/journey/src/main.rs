//! journey - track a daily learning habit from the terminal
//!
//! Wires together:
//! - Configuration loading
//! - Store initialization
//! - The progress session
//! - Plain-text reports

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use journey::{ProgressSession, open_gateway, report};
use journey_config::load_config_or_default;
use journey_core::GoalDuration;
use journey_util::{Clock, JourneyError, SystemClock, default_config_path, is_mock_time_active, parse_day};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// journey - Track a daily learning habit
#[derive(Parser, Debug)]
#[command(name = "journey")]
#[command(about = "Track a daily learning habit: streaks, freezes and goals", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/journey/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Data directory override (or set JOURNEY_DATA_DIR env var)
    #[arg(short, long, env = "JOURNEY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log level (overrides the config file)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Act as if today were this day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start tracking a new goal
    Start {
        /// What you are learning
        topic: String,

        /// Goal length: Week, Month or Year
        #[arg(short = 'u', long, default_value = "Week")]
        duration: GoalDuration,

        /// Replace saved progress
        #[arg(long)]
        force: bool,
    },

    /// Show the goal, streak and freezes
    Status,

    /// Mark today as learned
    Log,

    /// Spend a freeze on today
    Freeze,

    /// Change the topic or duration of the goal
    Goal {
        /// New topic
        topic: String,

        /// New goal length (default: keep the current one)
        #[arg(short = 'u', long)]
        duration: Option<GoalDuration>,

        /// Changing course mid-period; today's mark is dropped
        #[arg(long)]
        midway: bool,

        /// First day of the new period (default: today)
        #[arg(long, value_parser = parse_day)]
        start: Option<NaiveDate>,
    },

    /// Start the same goal again from today, keeping history
    Renew,

    /// Check whether yesterday was missed
    Check,

    /// Show a month calendar of learned and frozen days
    Calendar {
        /// Month to show (YYYY-MM, default: this month)
        #[arg(long, value_parser = parse_month)]
        month: Option<NaiveDate>,
    },

    /// Zero the streak and freeze counters
    Reset {
        /// Also forget every learned and frozen day
        #[arg(long)]
        history: bool,
    },

    /// Delete saved progress
    Clear,
}

fn parse_month(value: &str) -> Result<NaiveDate, JourneyError> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").map_err(|_| {
        JourneyError::InvalidDate {
            value: value.to_string(),
            expected: "YYYY-MM",
        }
    })
}

fn resume(args: &Args, gateway: journey_store::PersistenceGateway) -> Result<ProgressSession> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let Some(mut session) = ProgressSession::resume(gateway, clock) else {
        bail!("No saved progress; run `journey start <topic>` first");
    };

    if let Some(day) = args.date {
        session.simulate_day(day);
    }
    Ok(session)
}

fn run(args: Args, settings: journey_config::Settings) -> Result<()> {
    let gateway = open_gateway(&settings).with_context(|| {
        format!("Failed to open progress store in {:?}", settings.data_dir)
    })?;

    match args.command {
        Command::Start {
            ref topic,
            duration,
            force,
        } => {
            if !force && gateway.load(Arc::new(SystemClock)).is_some() {
                bail!("Progress already exists; use `journey goal` to change it or pass --force");
            }

            let clock: Arc<dyn Clock> = Arc::new(SystemClock);
            let mut session = ProgressSession::start(gateway, clock, topic, duration)?;
            if let Some(day) = args.date {
                session.simulate_day(day);
                session.reset_goal_keep_history();
            }
            print!("{}", report::status_report(session.state()));
        }

        Command::Status => {
            let session = resume(&args, gateway)?;
            print!("{}", report::status_report(session.state()));
        }

        Command::Log => {
            let mut session = resume(&args, gateway)?;
            if session.log_today() {
                println!(
                    "Logged {}. Streak: {} day(s)",
                    session.state().today(),
                    session.state().current_streak_count()
                );
            } else {
                println!("Today is already marked");
            }
        }

        Command::Freeze => {
            let mut session = resume(&args, gateway)?;
            let state = session.state();
            if state.is_today_logged() || state.is_today_frozen() {
                println!("Today is already marked");
            } else if !state.has_freezes_remaining() {
                println!("No freezes left for this goal");
            } else if session.freeze_today() {
                println!(
                    "Froze {}. {} freeze(s) left",
                    session.state().today(),
                    session.state().freezes_remaining()
                );
            }
        }

        Command::Goal {
            ref topic,
            duration,
            midway,
            start,
        } => {
            let mut session = resume(&args, gateway)?;
            let duration = duration.unwrap_or(session.state().goal_duration());
            session.update_goal(topic, duration, midway, start)?;
            print!("{}", report::status_report(session.state()));
        }

        Command::Renew => {
            let mut session = resume(&args, gateway)?;
            session.reset_goal_keep_history();
            print!("{}", report::status_report(session.state()));
        }

        Command::Check => {
            let mut session = resume(&args, gateway)?;
            if session.check_streak() {
                println!("Yesterday was missed; your streak is broken.");
                println!("Run `journey reset` to start over or `journey renew` to restart the goal.");
            } else {
                println!(
                    "Streak intact: {} day(s)",
                    session.state().current_streak_count()
                );
            }
        }

        Command::Calendar { month } => {
            let session = resume(&args, gateway)?;
            let month = month.unwrap_or(session.state().today());
            print!("{}", report::calendar_report(session.state(), month));
        }

        Command::Reset { history } => {
            let mut session = resume(&args, gateway)?;
            if history {
                session.reset_streak_and_history();
                println!("Streak and history cleared");
            } else {
                session.reset_streak();
                println!("Streak reset");
            }
        }

        Command::Clear => {
            gateway.clear();
            println!("Saved progress deleted");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_config_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;
    if let Some(dir) = &args.data_dir {
        settings.data_dir = dir.clone();
    }

    // Initialize logging; stdout is reserved for reports
    let level = args.log_level.as_deref().unwrap_or(&settings.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %args.config.display(),
        data_dir = %settings.data_dir.display(),
        "journey starting"
    );

    if is_mock_time_active() {
        warn!("Mock time is active; dates come from JOURNEY_MOCK_TIME");
    }
    if let Some(day) = args.date {
        info!(day = %day, "Simulating today");
    }

    run(args, settings)
}
