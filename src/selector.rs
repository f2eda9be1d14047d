use crate::error::ForgeError;
use crate::gh::HostingCli;
use crate::prompt::{self, StringPrompter};

use console::style;

/// Maximum number of repositories requested from the hosting CLI.
pub const REPO_LIST_LIMIT: u32 = 100;

/// Input that cancels a selection and returns to the main menu.
const BACK: &str = "0";

/// Top-level menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoChoice {
    Create,
    Existing,
    Back,
}

/// Parses the main menu answer (`1`, `2` or `0`).
pub fn parse_main_choice(input: &str) -> Option<RepoChoice> {
    match input.trim() {
        "1" => Some(RepoChoice::Create),
        "2" => Some(RepoChoice::Existing),
        "0" => Some(RepoChoice::Back),
        _ => None,
    }
}

/// Prints the main menu and reads one answer.
///
/// Returns `Ok(None)` for unrecognized input; the caller goes back to the menu.
pub fn main_menu<P: StringPrompter>(prompter: &mut P) -> Result<Option<RepoChoice>, ForgeError> {
    println!("Do you want to:");
    println!("1. Create a new repository");
    println!("2. Use an existing repository");
    println!("0. Go back to the main menu");
    let answer = prompt::ask(prompter, "Enter your choice (1/2/0)")?;
    Ok(parse_main_choice(&answer))
}

/// Asks for a name and creates a private repository with it.
///
/// Returns `Ok(None)` if the user enters `0`. Blank names are re-prompted.
pub fn create_repository<P, H>(prompter: &mut P, hosting: &mut H) -> Result<Option<String>, ForgeError>
where
    P: StringPrompter,
    H: HostingCli,
{
    let name = loop {
        let name = prompt::ask(
            prompter,
            "Enter the name for your new repository (0 to go back)",
        )?;
        if name == BACK {
            return Ok(None);
        }
        if name.is_empty() {
            println!("{}", style("Repository name cannot be empty.").yellow());
            continue;
        }
        break name;
    };

    hosting.create_private_repo(&name)?;
    println!(
        "{}",
        style(format!("Repository '{}' created successfully.", name))
            .green()
            .bold()
    );
    Ok(Some(name))
}

/// Extracts repository identifiers from `gh repo list` output.
///
/// Each non-blank line contributes its first whitespace-delimited field
/// (`owner/name`); descriptions and visibility columns are dropped.
pub fn parse_repo_list(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(|s| s.to_string())
        .collect()
}

/// A validated answer to the numbered repository menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexChoice {
    Back,
    /// Zero-based position in the listing.
    Pick(usize),
}

/// Validates a menu answer against a listing of `len` entries.
///
/// Accepts only ASCII digit strings in `[0, len]`.
pub fn parse_index(input: &str, len: usize) -> Option<IndexChoice> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = input.parse().ok()?;
    match n {
        0 => Some(IndexChoice::Back),
        n if n <= len => Some(IndexChoice::Pick(n - 1)),
        _ => None,
    }
}

/// Lists the user's repositories and lets them pick one by number.
///
/// Returns `Ok(None)` when the user goes back or the listing is empty.
pub fn choose_existing_repository<P, H>(
    prompter: &mut P,
    hosting: &mut H,
) -> Result<Option<String>, ForgeError>
where
    P: StringPrompter,
    H: HostingCli,
{
    println!("Fetching your repositories...");
    let repos = parse_repo_list(&hosting.list_repos(REPO_LIST_LIMIT)?);

    if repos.is_empty() {
        println!("{}", style("No repositories found.").yellow());
        return Ok(None);
    }

    for (i, repo) in repos.iter().enumerate() {
        println!("{}: {}", i + 1, repo);
    }
    println!("0: Go back to the main menu");

    loop {
        let answer = prompt::ask(
            prompter,
            "Enter the number of the repository you want to use",
        )?;
        match parse_index(&answer, repos.len()) {
            Some(IndexChoice::Back) => return Ok(None),
            Some(IndexChoice::Pick(i)) => {
                let repo = repos[i].clone();
                println!("Selected repository: {}", style(&repo).cyan());
                return Ok(Some(repo));
            }
            None => {
                println!(
                    "{}",
                    style("Invalid input. Please enter a valid number.").yellow()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeGh, ScriptedPrompter};

    const LISTING: &str = "octocat/hello\tA greeting\tpublic\t2024-01-01\n\
                           octocat/graph\t\tprivate\t2024-02-01\n";

    #[test]
    fn main_choice_parsing() {
        assert_eq!(parse_main_choice("1"), Some(RepoChoice::Create));
        assert_eq!(parse_main_choice(" 2 "), Some(RepoChoice::Existing));
        assert_eq!(parse_main_choice("0"), Some(RepoChoice::Back));
        assert_eq!(parse_main_choice("3"), None);
        assert_eq!(parse_main_choice(""), None);
    }

    #[test]
    fn repo_list_keeps_first_field_and_skips_blank_lines() {
        let repos = parse_repo_list("a/one  desc here\n\n   \nb/two\n");
        assert_eq!(repos, vec!["a/one".to_string(), "b/two".to_string()]);
    }

    #[test]
    fn index_validation_bounds() {
        assert_eq!(parse_index("0", 2), Some(IndexChoice::Back));
        assert_eq!(parse_index("1", 2), Some(IndexChoice::Pick(0)));
        assert_eq!(parse_index("2", 2), Some(IndexChoice::Pick(1)));
        assert_eq!(parse_index("3", 2), None);
        assert_eq!(parse_index("-1", 2), None);
        assert_eq!(parse_index("+1", 2), None);
        assert_eq!(parse_index("1.0", 2), None);
        assert_eq!(parse_index("abc", 2), None);
        assert_eq!(parse_index("", 2), None);
        assert_eq!(parse_index("99999999999999999999999", 2), None);
    }

    #[test]
    fn choose_reprompts_until_valid() {
        let mut prompter = ScriptedPrompter::new(&["x", "7", "2"]);
        let mut gh = FakeGh::new("octocat", LISTING);

        let picked = choose_existing_repository(&mut prompter, &mut gh).unwrap();

        assert_eq!(picked, Some("octocat/graph".to_string()));
        assert_eq!(prompter.prompts.len(), 3);
        assert_eq!(gh.list_calls, vec![REPO_LIST_LIMIT]);
    }

    #[test]
    fn choose_zero_goes_back() {
        let mut prompter = ScriptedPrompter::new(&["0"]);
        let mut gh = FakeGh::new("octocat", LISTING);
        let picked = choose_existing_repository(&mut prompter, &mut gh).unwrap();
        assert_eq!(picked, None);
    }

    #[test]
    fn empty_listing_returns_without_prompting() {
        let mut prompter = ScriptedPrompter::new(&["1"]);
        let mut gh = FakeGh::new("octocat", "");
        let picked = choose_existing_repository(&mut prompter, &mut gh).unwrap();
        assert_eq!(picked, None);
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn create_uses_entered_name() {
        let mut prompter = ScriptedPrompter::new(&["", "  graph-2024 "]);
        let mut gh = FakeGh::new("octocat", "");
        let created = create_repository(&mut prompter, &mut gh).unwrap();
        assert_eq!(created, Some("graph-2024".to_string()));
        assert_eq!(gh.created, vec!["graph-2024".to_string()]);
    }

    #[test]
    fn create_cancel_has_no_side_effects() {
        let mut prompter = ScriptedPrompter::new(&["0"]);
        let mut gh = FakeGh::new("octocat", "");
        let created = create_repository(&mut prompter, &mut gh).unwrap();
        assert_eq!(created, None);
        assert!(gh.created.is_empty());
    }
}
