use crate::{gh::Gh, git::Git, prompt::DialoguerStringPrompter, session::Session};

use console::style;
use std::env;

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
commit-forge {}

Fill a contribution graph with backdated commits.

USAGE:
    commit-forge [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information

DESCRIPTION:
    Interactively creates or selects a repository with the GitHub CLI (gh),
    clones it into the current directory, and writes one commit per day for
    an inclusive date range, each dated at 12:00:00. The branch `main` is
    then pushed to `origin`.

    Requires `git` and `gh` on PATH, with `gh auth login` already done.",
        env!("CARGO_PKG_VERSION")
    );
}

/// Main CLI entry point for `commit-forge`.
///
/// Handles `--help` and `--version`, then runs the interactive session from
/// the current directory until the user quits.
///
/// # Exit Codes
///
/// * `0` – Normal exit (Ctrl+C or `quit`).
/// * `1` – A required tool is missing.
///
/// # Errors
///
/// Returns `Err(())` if the current directory cannot be determined.
pub fn entry() -> Result<i32, ()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(0);
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("commit-forge {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let workspace = match env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: cannot read current directory ({})", e))
                    .red()
                    .bold()
            );
            return Err(());
        }
    };

    let mut session = Session::new(DialoguerStringPrompter, Git, Gh, workspace);
    Ok(session.run())
}
