use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use career_path_recommender::models::{LearningPath, Recommendation};
use career_path_recommender::{
    profile, report, AppConfig, CareerCatalog, Recommender, StudentProfile, TopNPolicy,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "career-path")]
#[command(about = "Career recommendations and learning paths for students", long_about = None)]
struct Cli {
    /// TOML config with defaults and learning resources
    #[arg(long, global = true, env = "CAREER_PATH_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Inputs {
    /// Career catalog CSV
    #[arg(long)]
    catalog: PathBuf,
    /// Student profile JSON
    #[arg(long)]
    profile: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank careers for a student and plan the top one
    Recommend {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(long)]
        top_n: Option<usize>,
        /// Fail instead of clamping an out-of-range --top-n
        #[arg(long)]
        strict: bool,
        #[arg(long)]
        json: bool,
    },
    /// Build a learning path toward one career
    Path {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(long)]
        career: String,
        #[arg(long)]
        months: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown report
    Report {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(long)]
        top_n: Option<usize>,
        #[arg(long)]
        months: Option<u32>,
        #[arg(long, default_value = "career-report.md")]
        out: PathBuf,
    },
    /// Show how complete a student profile is
    Profile {
        #[arg(long)]
        profile: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "career_path_recommender=info",
        1 => "career_path_recommender=debug",
        _ => "career_path_recommender=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn load_inputs(
    inputs: &Inputs,
    config: &AppConfig,
    policy: TopNPolicy,
) -> anyhow::Result<(Recommender, StudentProfile)> {
    let catalog = CareerCatalog::from_csv_path(&inputs.catalog)
        .with_context(|| format!("failed to load careers from {}", inputs.catalog.display()))?;
    let student = profile::load_profile(&inputs.profile)
        .with_context(|| format!("failed to load profile from {}", inputs.profile.display()))?;
    let recommender = Recommender::new(Arc::new(catalog), config.resource_table(), policy)
        .context("failed to build career index")?;
    Ok((recommender, student))
}

fn print_recommendations(recommendations: &[Recommendation<'_>]) {
    println!("Top career recommendations:");
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} overall {:.2} (similarity {:.3}, skill match {:.1}%, education fit {:.1})",
            rank + 1,
            rec.career.title,
            rec.overall_score,
            rec.similarity,
            rec.skill_match * 100.0,
            rec.education_compatibility
        );
        println!(
            "   growth {}, salary {}, requires {}",
            rec.career.growth_potential, rec.career.salary_range, rec.career.education_level
        );
        if !rec.missing_skills.is_empty() {
            println!("   skills to learn: {}", rec.missing_skills.join(", "));
        }
    }
}

fn print_path(path: &LearningPath, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(path)?);
    } else {
        print!("{}", report::render_path(path));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Recommend {
            inputs,
            top_n,
            strict,
            json,
        } => {
            let policy = if strict {
                TopNPolicy::Strict
            } else {
                config.defaults.top_n_policy
            };
            let (recommender, student) = load_inputs(&inputs, &config, policy)?;
            let top_n = top_n.unwrap_or(config.defaults.top_n);
            let recommendations = recommender.score(&student, top_n)?;
            let path = recommendations.first().and_then(|top| {
                recommender.generate_path(
                    &student,
                    &top.career.title,
                    config.defaults.timeframe_months,
                )
            });

            if json {
                let payload = serde_json::json!({
                    "recommendations": recommendations,
                    "learning_path": path,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
                return Ok(());
            }

            print_recommendations(&recommendations);
            if let Some(path) = path {
                println!();
                print_path(&path, false)?;
            }
        }
        Commands::Path {
            inputs,
            career,
            months,
            json,
        } => {
            let (recommender, student) =
                load_inputs(&inputs, &config, config.defaults.top_n_policy)?;
            let months = months.unwrap_or(config.defaults.timeframe_months);

            match recommender.generate_path(&student, &career, months) {
                Some(path) => print_path(&path, json)?,
                None => println!("Career \"{career}\" is not in the catalog."),
            }
        }
        Commands::Report {
            inputs,
            top_n,
            months,
            out,
        } => {
            let (recommender, student) =
                load_inputs(&inputs, &config, config.defaults.top_n_policy)?;
            let recommendations =
                recommender.score(&student, top_n.unwrap_or(config.defaults.top_n))?;
            let months = months.unwrap_or(config.defaults.timeframe_months);
            let path = recommendations
                .first()
                .and_then(|top| recommender.generate_path(&student, &top.career.title, months));

            let report = report::build_report(
                &student,
                chrono::Local::now().naive_local(),
                &recommendations,
                path.as_ref(),
            );
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Profile { profile: path } => {
            let student = profile::load_profile(&path)
                .with_context(|| format!("failed to load profile from {}", path.display()))?;
            let analysis = profile::analyze(&student);
            println!("Profile for {} ({}):", student.name, student.education_level);
            println!("- {} skills, {} interests", analysis.total_skills, analysis.total_interests);
            println!("- goals set: {}", if analysis.has_goals { "yes" } else { "no" });
            println!("- completeness {}%", analysis.completeness);
        }
    }

    Ok(())
}
