use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};

use bac_compass::config::{self, Config};
use bac_compass::output;
use bac_compass::scoring::{self, EngineError, GoalInput, OpportunityCategory, ScoreInput};
use bac_compass::store::{self, JsonFileStore, RecordStore, StudentRecord};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_STORAGE: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the Bac average from the three component scores
    Average {
        /// Regional exam score (0-20)
        #[arg(long)]
        regional: String,
        /// Continuous assessment score (0-20)
        #[arg(long)]
        continuous: String,
        /// National exam score (0-20)
        #[arg(long)]
        national: String,
    },
    /// Compute the national exam score needed to reach a target average
    Goal {
        #[arg(long)]
        regional: String,
        #[arg(long)]
        continuous: String,
        /// Target average (10-20)
        #[arg(long)]
        target: String,
    },
    /// Show the mention for an average
    Mention { average: String },
    /// List programs reachable with a score
    Opportunities {
        score: String,
        /// Only show one field (engineering, business, health, ...)
        #[arg(long)]
        category: Option<String>,
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// List scholarships by deadline urgency
    Scholarships {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Check eligibility against this average
        #[arg(long)]
        average: Option<String>,
        /// Hide scholarships the average does not qualify for
        #[arg(long, requires = "average")]
        eligible_only: bool,
        #[arg(long)]
        tsv: bool,
    },
    /// Take the orientation quiz (without --answers, prints the questions)
    Quiz {
        /// Chosen option per question, 1-based, comma separated (e.g. 2,1,3,1,4)
        #[arg(long)]
        answers: Option<String>,
        /// Average used to filter recommended programs
        #[arg(long)]
        average: Option<String>,
    },
    /// Manage saved student profiles
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ProfileCommand {
    /// Create or replace a profile
    Save {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        regional: String,
        #[arg(long)]
        continuous: String,
        #[arg(long)]
        national: Option<String>,
        #[arg(long)]
        target: Option<String>,
    },
    /// Show a profile with its computed average and goal
    Show { id: String },
    /// List all profiles
    List,
    /// Delete a profile
    Remove { id: String },
}

#[derive(Parser, Debug)]
#[command(name = "bac-compass")]
#[command(about = "Bac grade simulator and orientation helper", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/bac-compass/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Why a command stopped; each maps to an exit code.
enum Failure {
    Input(EngineError),
    Config(anyhow::Error),
    Storage(anyhow::Error),
}

impl Failure {
    fn report(&self) -> i32 {
        match self {
            Failure::Input(e) => {
                eprintln!("Invalid input: {}", e);
                EXIT_INPUT
            }
            Failure::Config(e) => {
                eprintln!("Config error: {:#}", e);
                EXIT_CONFIG
            }
            Failure::Storage(e) => {
                error!("storage failure: {:#}", e);
                eprintln!("Storage error: {:#}", e);
                EXIT_STORAGE
            }
        }
    }
}

impl From<EngineError> for Failure {
    fn from(e: EngineError) -> Self {
        Failure::Input(e)
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = bac_compass::logging::init(cli.verbose) {
        eprintln!("Logging error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let code = match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(failure) => failure.report(),
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<(), Failure> {
    let config_path = cli.config.map(PathBuf::from);

    // init writes the file, so it must not require one to load
    if let Commands::Init { force } = cli.command {
        let path = match config_path {
            Some(path) => path,
            None => config::get_config_path().map_err(Failure::Config)?,
        };
        config::write_default_config(&path, force).map_err(Failure::Config)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = config::load_config(config_path).map_err(Failure::Config)?;

    if let Err(errors) = scoring::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Failure::Config(anyhow::anyhow!("configuration is invalid")));
    }

    let use_colors = output::should_use_colors();
    let margin = config.engine.safety_margin();

    match cli.command {
        Commands::Average {
            regional,
            continuous,
            national,
        } => {
            let input = ScoreInput::parse(&regional, &continuous, &national)?;
            let average = input.average();
            let mention = scoring::classify_mention(average);
            let matches = scoring::filter_opportunities(average, &config.opportunities, margin);
            debug!(average, mention = mention.label, matches = matches.len(), "computed average");
            println!(
                "{}",
                output::format_average_report(&input, &mention, &matches, use_colors)
            );
        }
        Commands::Goal {
            regional,
            continuous,
            target,
        } => {
            let goal = GoalInput::parse(&regional, &continuous, &target)?;
            let outcome = goal.solve();
            let matches =
                scoring::filter_opportunities(goal.target(), &config.opportunities, margin);
            debug!(target = outcome.target, required = outcome.required, "solved goal");
            println!(
                "{}",
                output::format_goal_report(&outcome, &matches, use_colors)
            );
        }
        Commands::Mention { average } => {
            let average = parse_average(&average)?;
            let mention = scoring::classify_mention(average);
            println!("{}", output::format_mention(average, &mention, use_colors));
        }
        Commands::Opportunities {
            score,
            category,
            tsv,
        } => {
            let score = parse_average(&score)?;
            let category = category
                .map(|name| {
                    OpportunityCategory::parse(&name)
                        .ok_or_else(|| EngineError::invalid("category", &name, "unknown field"))
                })
                .transpose()?;

            let matches: Vec<_> =
                scoring::filter_opportunities(score, &config.opportunities, margin)
                    .into_iter()
                    .filter(|m| category.map_or(true, |c| m.opportunity.category == c))
                    .collect();

            if tsv {
                println!("{}", output::format_opportunity_tsv(&matches));
            } else {
                println!("{}", output::format_opportunity_table(&matches, use_colors));
            }
        }
        Commands::Scholarships {
            today,
            average,
            eligible_only,
            tsv,
        } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let average = average.as_deref().map(parse_average).transpose()?;

            let statuses: Vec<_> = scoring::assess_scholarships(
                &config.scholarships,
                today,
                config.engine.rollover_grace_days(),
                average,
            )
            .into_iter()
            .filter(|status| !eligible_only || status.eligible == Some(true))
            .collect();

            if tsv {
                println!("{}", output::format_scholarship_tsv(&statuses));
            } else {
                println!("{}", output::format_scholarship_table(&statuses, use_colors));
            }
        }
        Commands::Quiz { answers, average } => match answers {
            None => print_quiz(&config),
            Some(answers) => {
                let answers = scoring::parse_answers(&answers)?;
                let scores = scoring::score_quiz(&config.quiz, &answers)?;

                let average = average.as_deref().map(parse_average).transpose()?;
                let recommendation = average.and_then(|avg| {
                    scoring::recommend(&scores, &config.opportunities, avg, margin)
                });
                println!(
                    "{}",
                    output::format_quiz_result(&scores, recommendation.as_ref(), use_colors)
                );
            }
        },
        Commands::Profile { action } => run_profile(action, &config, use_colors)?,
        Commands::Init { .. } => unreachable!("handled before config load"),
    }

    Ok(())
}

/// A single average typed by the user, checked to lie in [0, 20].
fn parse_average(text: &str) -> Result<f64, EngineError> {
    let value = scoring::grade::parse_number("average", text)?;
    if !(0.0..=scoring::MAX_SCORE).contains(&value) {
        return Err(EngineError::invalid("average", text, "must be between 0 and 20"));
    }
    Ok(value)
}

fn print_quiz(config: &Config) {
    for (i, question) in config.quiz.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt);
        for (j, option) in question.options.iter().enumerate() {
            println!("   {}) {}", j + 1, option.text);
        }
    }
    println!();
    println!("Answer with: bac-compass quiz --answers 1,2,...");
}

fn open_store(config: &Config) -> Result<JsonFileStore, Failure> {
    let path = match &config.store_path {
        Some(path) => PathBuf::from(path),
        None => store::get_store_path().map_err(Failure::Storage)?,
    };
    JsonFileStore::open(path).map_err(Failure::Storage)
}

fn run_profile(action: ProfileCommand, config: &Config, use_colors: bool) -> Result<(), Failure> {
    let mut store = open_store(config)?;

    match action {
        ProfileCommand::Save {
            id,
            name,
            regional,
            continuous,
            national,
            target,
        } => {
            let record = StudentRecord {
                id: id.clone(),
                name,
                regional: scoring::grade::parse_number("regional", &regional)?,
                continuous: scoring::grade::parse_number("continuous", &continuous)?,
                national: national
                    .as_deref()
                    .map(|n| scoring::grade::parse_number("national", n))
                    .transpose()?,
                target: target
                    .as_deref()
                    .map(|t| scoring::grade::parse_number("target", t))
                    .transpose()?,
                updated_at: Utc::now(),
            };
            // reject values the engine would refuse later
            record.scores()?;
            record.goal()?;
            if record.national.is_none() {
                ScoreInput::new(record.regional, record.continuous, 0.0)?;
            }

            store.put(record).map_err(Failure::Storage)?;
            println!("Saved profile '{}' to {}", id, store.path().display());
        }
        ProfileCommand::Show { id } => {
            let Some(record) = store.get(&id).map_err(Failure::Storage)? else {
                println!("No profile named '{}'.", id);
                return Ok(());
            };
            println!("{}", describe_record(&record, use_colors)?);
        }
        ProfileCommand::List => {
            let records = store.list().map_err(Failure::Storage)?;
            if records.is_empty() {
                println!("No saved profiles.");
            }
            for record in &records {
                println!("{}", describe_record(record, use_colors)?);
            }
        }
        ProfileCommand::Remove { id } => {
            if store.remove(&id).map_err(Failure::Storage)? {
                println!("Removed profile '{}'.", id);
            } else {
                println!("No profile named '{}'.", id);
            }
        }
    }

    Ok(())
}

fn describe_record(record: &StudentRecord, use_colors: bool) -> Result<String, Failure> {
    let average = record.scores()?.map(|input| input.average());
    let mention = average.map(scoring::classify_mention);
    let goal = record.goal()?.map(|goal| goal.solve());
    Ok(output::format_record(
        record,
        average.zip(mention.as_ref()),
        goal.as_ref(),
        use_colors,
    ))
}
