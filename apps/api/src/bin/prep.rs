use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prep_api::prep::{run, Action, Category, HttpTransport, DEFAULT_RELAY_URL};

#[derive(Parser, Debug)]
#[command(
    name = "prep",
    about = "Placement prep assistant: resume review, interview Q&A, aptitude practice, project coaching",
    version
)]
struct Cli {
    /// Relay endpoint that forwards prompts to the AI provider
    #[arg(long, env = "PREP_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    #[command(subcommand)]
    panel: Panel,
}

#[derive(Subcommand, Debug)]
enum Panel {
    /// Get five specific improvements for a resume
    Resume {
        /// Resume text (or use --file)
        text: Option<String>,

        /// Read the resume text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Get a structured answer to an interview question
    Ask {
        /// Question category
        #[arg(short, long, value_enum, default_value = "technical")]
        category: CategoryChoice,

        /// The interview question
        #[arg(default_value = "")]
        question: String,
    },
    /// Generate a new aptitude or reasoning problem
    Problem,
    /// Check a solution against a problem
    Check {
        /// Problem text being solved
        #[arg(short, long, default_value = "")]
        problem: String,

        /// Read the problem text from a file
        #[arg(long, conflicts_with = "problem")]
        problem_file: Option<PathBuf>,

        /// Your solution
        #[arg(default_value = "")]
        solution: String,
    },
    /// Coaching on explaining a project to an interviewer in two minutes
    Project {
        /// Short project description (or use --file)
        description: Option<String>,

        /// Read the description from a file
        #[arg(short, long, conflicts_with = "description")]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryChoice {
    Technical,
    Hr,
    Behavioral,
}

impl From<CategoryChoice> for Category {
    fn from(choice: CategoryChoice) -> Self {
        match choice {
            CategoryChoice::Technical => Category::Technical,
            CategoryChoice::Hr => Category::Hr,
            CategoryChoice::Behavioral => Category::Behavioral,
        }
    }
}

fn text_or_file(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(text.unwrap_or_default()),
    }
}

impl Panel {
    fn into_action(self) -> Result<Action> {
        Ok(match self {
            Panel::Resume { text, file } => Action::ReviewResume {
                resume: text_or_file(text, file)?,
            },
            Panel::Ask { category, question } => Action::AskInterview {
                category: category.into(),
                question,
            },
            Panel::Problem => Action::NewProblem,
            Panel::Check {
                problem,
                problem_file,
                solution,
            } => Action::CheckSolution {
                problem: text_or_file(Some(problem), problem_file)?,
                solution,
            },
            Panel::Project { description, file } => Action::ExplainProject {
                description: text_or_file(description, file)?,
            },
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only the panel output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let action = cli.panel.into_action()?;
    let transport = HttpTransport::new(cli.relay_url)?;

    let output = run(&action, &transport, |pending| eprintln!("{pending}")).await;
    println!("{output}");

    Ok(())
}
