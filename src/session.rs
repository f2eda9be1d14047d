use crate::banner::print_banner;
use crate::deps;
use crate::error::ForgeError;
use crate::forge::{self, DateRange, ForgeSettings};
use crate::gh::HostingCli;
use crate::git::VersionControl;
use crate::materialize;
use crate::prompt::{self, StringPrompter};
use crate::selector::{self, RepoChoice};

use chrono::NaiveDate;
use console::style;
use std::path::PathBuf;

/// Message printed when the user leaves the session.
pub const FAREWELL: &str = "Exiting the tool. Thank you for using commit-forge!";

/// Interactive menu loop tying the selector, materializer and forger together.
///
/// Clones are created below `workspace`; the process working directory is
/// never changed, so every round starts from the same place.
pub struct Session<P, V, H> {
    prompter: P,
    vcs: V,
    hosting: H,
    workspace: PathBuf,
    settings: ForgeSettings,
    today: fn() -> NaiveDate,
    check_dependencies: fn() -> Result<(), ForgeError>,
    show_banner: bool,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl<P, V, H> Session<P, V, H>
where
    P: StringPrompter,
    V: VersionControl,
    H: HostingCli,
{
    pub fn new(prompter: P, vcs: V, hosting: H, workspace: PathBuf) -> Self {
        Session {
            prompter,
            vcs,
            hosting,
            workspace,
            settings: ForgeSettings::default(),
            today: local_today,
            check_dependencies: deps::check_dependencies,
            show_banner: true,
        }
    }

    /// Replaces the clock used for a blank end date.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Replaces the check run at the start of every round.
    pub fn with_dependency_check(mut self, check: fn() -> Result<(), ForgeError>) -> Self {
        self.check_dependencies = check;
        self
    }

    /// Turns the welcome banner printed before each round on or off.
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Runs rounds until the user quits. Returns the process exit code.
    ///
    /// * `0` – the user pressed Ctrl+C or typed `quit`.
    /// * `1` – the dependency check failed or the terminal cannot be read.
    ///
    /// Any other error is printed and the menu is shown again.
    pub fn run(&mut self) -> i32 {
        loop {
            if self.show_banner {
                print_banner();
            }
            if let Err(e) = (self.check_dependencies)() {
                eprintln!("{}", style(e).red().bold());
                return 1;
            }
            match self.round() {
                Ok(()) => {}
                Err(ForgeError::Interrupted) => {
                    println!();
                    println!("{}", style(FAREWELL).cyan());
                    return 0;
                }
                Err(e) if e.is_fatal() => {
                    eprintln!("{}", style(e).red().bold());
                    return 1;
                }
                Err(e) => {
                    eprintln!(
                        "{}",
                        style(format!("An error occurred: {}", e)).red().bold()
                    );
                }
            }
        }
    }

    /// One pass through the menu: pick a repository, clone it, forge commits.
    ///
    /// Dependencies are checked by [`Session::run`] before each round.
    /// Backing out of any menu returns `Ok(())` without side effects.
    pub fn round(&mut self) -> Result<(), ForgeError> {
        let repo = match selector::main_menu(&mut self.prompter)? {
            Some(RepoChoice::Create) => {
                selector::create_repository(&mut self.prompter, &mut self.hosting)?
            }
            Some(RepoChoice::Existing) => {
                selector::choose_existing_repository(&mut self.prompter, &mut self.hosting)?
            }
            Some(RepoChoice::Back) => None,
            None => {
                println!("{}", style("Invalid choice.").yellow());
                None
            }
        };
        let Some(repo) = repo else {
            return Ok(());
        };

        let clone_dir = materialize::materialize(
            &mut self.prompter,
            &mut self.vcs,
            &mut self.hosting,
            &self.workspace,
            &repo,
        )?;

        let start = prompt::ask(
            &mut self.prompter,
            "Enter the start date for commits (YYYY-MM-DD)",
        )?;
        let end = prompt::ask(
            &mut self.prompter,
            "Enter the end date for commits (YYYY-MM-DD or press Enter for today)",
        )?;
        let range = DateRange::parse(&start, Some(&end), (self.today)())?;

        forge::forge_commits(&mut self.vcs, &clone_dir, &range, &self.settings)?;
        Ok(())
    }
}
