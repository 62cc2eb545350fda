//! todo-progress: report an employee's completed todos from a remote REST API.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_progress::{run, ApiClient, DEFAULT_BASE_URL};

/// Report an employee's completed todos
#[derive(Parser, Debug)]
#[command(name = "todo-progress")]
#[command(about = "Fetch an employee's task list and print a completion summary")]
#[command(version)]
struct Cli {
    /// Numeric id of the employee to report on
    ///
    /// No local bounds check: a negative or out-of-range id goes to the
    /// remote service, whose 404 decides.
    #[arg(allow_negative_numbers = true)]
    employee_id: i64,

    /// Base URL of the remote todo service
    #[arg(long, env = "TODO_PROGRESS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // clap exits with status 2 on its own; the CLI contract is exit 1 for
    // usage and parse errors, so parsing is handled explicitly here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        },
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        },
    };

    match execute(cli).await {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}

async fn execute(cli: Cli) -> anyhow::Result<String> {
    let client = ApiClient::new(cli.base_url)?;
    Ok(run(cli.employee_id, &client).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_integer_employee_id() {
        let cli = Cli::try_parse_from(["todo-progress", "1"]).unwrap();
        assert_eq!(cli.employee_id, 1);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parses_negative_employee_id() {
        let cli = Cli::try_parse_from(["todo-progress", "-5"]).unwrap();
        assert_eq!(cli.employee_id, -5);
    }

    #[test]
    fn test_rejects_missing_argument() {
        let err = Cli::try_parse_from(["todo-progress"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["todo-progress", "1", "2"]).is_err());
    }

    #[test]
    fn test_rejects_non_integer_id() {
        let err = Cli::try_parse_from(["todo-progress", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_accepts_base_url_override() {
        let cli =
            Cli::try_parse_from(["todo-progress", "--base-url", "http://localhost:3000", "7"])
                .unwrap();
        assert_eq!(cli.base_url, "http://localhost:3000");
        assert_eq!(cli.employee_id, 7);
    }
}
