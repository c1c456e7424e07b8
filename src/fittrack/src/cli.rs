use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
pub struct FitTrackCli {
    #[arg(env, long, default_value = "db.json")]
    pub database_path: PathBuf,
    #[clap(subcommand)]
    pub subcommand: FitTrackCommand,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Create a new profile
    ///
    Register {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in centimetres
        #[arg(long)]
        height: f64,
        /// Weight Loss / Muscle Gain / Maintain
        #[arg(long)]
        goal: String,
    },
    ///
    /// Print the profile greeting and BMI
    ///
    Show {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
    },
    ///
    /// Recommend a workout for the profile goal and BMI
    ///
    Recommend {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
    },
    ///
    /// Log calories burned today
    ///
    Log {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
        calories: f64,
    },
    ///
    /// Predict tomorrow's calorie burn from the logged trend
    ///
    Predict {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
    },
    ///
    /// Print BMI based health advice
    ///
    Advice {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
    },
    ///
    /// Update weight and height
    ///
    Update {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        height: f64,
    },
    ///
    /// Print BMI, recommendation, forecast and advice together
    ///
    Report {
        #[arg(long, env = "FITTRACK_USER")]
        user: String,
    },
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

/// Writes the completion script for `shell`. Nothing else may reach the
/// writer, since the output is meant to be sourced.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut command = FitTrackCli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, out);
}
