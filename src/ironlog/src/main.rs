#[macro_use]
extern crate log;

use std::io;

use anyhow::anyhow;
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use dotenv::dotenv;
use ironlog::{DatabaseHandler, IronLog, Query};
use ironlog_types::{WindowAnchor, WindowConfig};

#[derive(Parser)]
#[command(name = "ironlog", version)]
pub struct IronLogCli {
    #[arg(env, long)]
    pub database_url: Option<String>,
    /// Id of the user the reports are for
    #[arg(env = "IRONLOG_USER", long)]
    pub user: Option<i32>,
    /// Length of the trailing window for body analytics
    #[arg(
        env = "IRONLOG_WINDOW_DAYS",
        long,
        default_value_t = WindowConfig::DEFAULT_DAYS,
        value_parser = clap::value_parser!(i64).range(1..=WindowConfig::MAX_DAYS),
    )]
    pub window_days: i64,
    /// Measure the window back from `now` or from the `latest-record`
    #[arg(env = "IRONLOG_WINDOW_ANCHOR", long, default_value_t = WindowAnchor::Now)]
    pub window_anchor: WindowAnchor,
    #[clap(subcommand)]
    pub subcommand: IronLogCommand,
}

#[derive(Subcommand)]
pub enum IronLogCommand {
    ///
    /// Estimated one-rep max history for an exercise
    ///
    OneRepMax { exercise_id: i32 },
    ///
    /// Training volume of a workout, broken down by exercise
    ///
    WorkoutVolume { workout_id: i32 },
    ///
    /// Lifetime workout, set and volume totals
    ///
    Summary,
    ///
    /// Weight, BMI and body fat over the trailing window
    ///
    BodySummary,
    ///
    /// Body summary with BMR, calorie needs and ideal weight range
    ///
    AdvancedBodySummary,
    ///
    /// BMI for every weigh-in of the period
    ///
    BmiHistory {
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..=WindowConfig::MAX_DAYS))]
        days: Option<i64>,
    },
    ///
    /// Workouts and volume for all time and this week
    ///
    Dashboard,
    ///
    /// Insert the built-in exercises if they are missing
    ///
    Seed,
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx::query", log::LevelFilter::Off)
        .filter_module("sea_orm_migration::migrator", log::LevelFilter::Off)
        .init();

    if let Err(error) = env_file {
        debug!("No .env loaded: {}", error);
    }

    let cli = IronLogCli::parse();

    let query = match cli.subcommand {
        IronLogCommand::Completions { shell } => {
            let mut command = IronLogCli::command();
            let name = command.get_name().to_string();
            generate(shell, &mut command, name, &mut io::stdout());
            return Ok(());
        }
        IronLogCommand::Seed => {
            let db_handler = connect(cli.database_url).await?;
            let inserted = db_handler.seed_builtin_exercises().await?;
            println!("Inserted {} built-in exercises", inserted);
            return Ok(());
        }
        IronLogCommand::OneRepMax { exercise_id } => Query::OneRepMax { exercise_id },
        IronLogCommand::WorkoutVolume { workout_id } => Query::WorkoutVolume { workout_id },
        IronLogCommand::Summary => Query::Summary,
        IronLogCommand::BodySummary => Query::BodySummary,
        IronLogCommand::AdvancedBodySummary => Query::AdvancedBodySummary,
        IronLogCommand::BmiHistory { days } => Query::BmiHistory { days },
        IronLogCommand::Dashboard => Query::Dashboard,
    };

    let user_id = cli
        .user
        .ok_or(anyhow!("No user given, pass --user or set IRONLOG_USER"))?;
    let window = WindowConfig::new(cli.window_days, cli.window_anchor);
    let ironlog = IronLog::new(connect(cli.database_url).await?, window);

    let report = ironlog
        .query(user_id, query, Local::now().naive_local())
        .await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

async fn connect(database_url: Option<String>) -> anyhow::Result<DatabaseHandler> {
    let database_url =
        database_url.ok_or(anyhow!("No database given, pass --database-url or set DATABASE_URL"))?;
    DatabaseHandler::new(database_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        IronLogCli::command().debug_assert();
    }

    #[test]
    fn parses_window_options() {
        let cli = IronLogCli::try_parse_from([
            "ironlog",
            "--database-url",
            "sqlite::memory:",
            "--user",
            "4",
            "--window-days",
            "14",
            "--window-anchor",
            "latest-record",
            "bmi-history",
            "--days",
            "60",
        ])
        .unwrap();

        assert_eq!(cli.user, Some(4));
        assert_eq!(cli.window_days, 14);
        assert_eq!(cli.window_anchor, WindowAnchor::LatestRecord);
        assert!(matches!(
            cli.subcommand,
            IronLogCommand::BmiHistory { days: Some(60) }
        ));
    }

    #[test]
    fn rejects_unknown_anchor() {
        let result = IronLogCli::try_parse_from([
            "ironlog",
            "--window-anchor",
            "yesterday",
            "summary",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_windows() {
        for days in ["0", "-5", "100000000"] {
            let window = IronLogCli::try_parse_from(["ironlog", "--window-days", days, "summary"]);
            assert!(window.is_err(), "--window-days {days}");

            let bmi = IronLogCli::try_parse_from(["ironlog", "bmi-history", "--days", days]);
            assert!(bmi.is_err(), "bmi-history --days {days}");
        }

        let cli = IronLogCli::try_parse_from(["ironlog", "--window-days", "36500", "summary"])
            .unwrap();
        assert_eq!(cli.window_days, WindowConfig::MAX_DAYS);
    }
}
