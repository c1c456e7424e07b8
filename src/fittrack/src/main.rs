#[macro_use]
extern crate log;

use clap::Parser;
use dotenv::dotenv;
use fittrack::{
    FitnessTracker, ProfileStore,
    cli::{FitTrackCli, FitTrackCommand, write_completions},
    types::Profile,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(error) = dotenv_result {
        debug!("no .env loaded: {}", error);
    }

    let cli = FitTrackCli::parse();
    debug!("using profile store at {}", cli.database_path.display());
    let tracker = FitnessTracker::new(ProfileStore::new(cli.database_path));

    match cli.subcommand {
        FitTrackCommand::Register {
            user,
            name,
            age,
            weight,
            height,
            goal,
        } => {
            let profile = Profile::new(name, age, weight, height, goal)?;
            tracker.register(&user, profile).await?;
            show(&tracker, &user).await
        }
        FitTrackCommand::Show { user } => show(&tracker, &user).await,
        FitTrackCommand::Recommend { user } => {
            let recommendation = tracker.recommend(&user).await?;
            println!("{}", recommendation);
            Ok(())
        }
        FitTrackCommand::Log { user, calories } => {
            let entry = tracker.log_calories(&user, calories).await?;
            println!("Logged {} kcal for {}", entry.calories, entry.date);
            Ok(())
        }
        FitTrackCommand::Predict { user } => {
            let forecast = tracker.predict(&user).await?;
            println!("{}", forecast);
            Ok(())
        }
        FitTrackCommand::Advice { user } => {
            let advice = tracker.advice(&user).await?;
            println!("Advice: {}", advice);
            Ok(())
        }
        FitTrackCommand::Update {
            user,
            weight,
            height,
        } => {
            tracker.update_weight_height(&user, weight, height).await?;
            println!("Weight and height updated.");
            show(&tracker, &user).await
        }
        FitTrackCommand::Report { user } => {
            let report = tracker.report(&user).await?;
            println!("{}", report);
            Ok(())
        }
        FitTrackCommand::Completions { shell } => {
            write_completions(shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

async fn show(tracker: &FitnessTracker, user: &str) -> anyhow::Result<()> {
    let profile = tracker.profile(user).await?;
    let bmi = fittrack::algo::bmi(profile.weight_kg, profile.height_cm)?;
    println!("Welcome {}!", profile.name);
    println!("BMI: {}", bmi);
    Ok(())
}
