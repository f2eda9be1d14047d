use crate::error::ForgeError;
use crate::git::VersionControl;

use chrono::NaiveDate;
use console::style;
use std::fs;
use std::path::Path;

/// Calendar format accepted for dates and embedded in commits.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed values of the commit loop.
#[derive(Debug, Clone)]
pub struct ForgeSettings {
    /// File rewritten for every day, relative to the clone root.
    pub marker_file: String,
    pub remote: String,
    pub branch: String,
    /// Time of day appended to each date, `HH:MM:SS`.
    pub commit_time: String,
}

impl Default for ForgeSettings {
    fn default() -> Self {
        ForgeSettings {
            marker_file: String::from("commit.txt"),
            remote: String::from("origin"),
            branch: String::from("main"),
            commit_time: String::from("12:00:00"),
        }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn parse_date(input: &str) -> Result<NaiveDate, ForgeError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| {
        ForgeError::DateParse {
            input: input.to_string(),
            source,
        }
    })
}

impl DateRange {
    /// Parses a start date and an optional end date.
    ///
    /// A missing or blank `end` means `today`. A start after the end is
    /// accepted and yields an empty range.
    pub fn parse(start: &str, end: Option<&str>, today: NaiveDate) -> Result<Self, ForgeError> {
        let start = parse_date(start)?;
        let end = match end.map(str::trim) {
            Some(s) if !s.is_empty() => parse_date(s)?,
            _ => today,
        };
        Ok(DateRange { start, end })
    }

    /// Every day from `start` through `end`, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }
}

/// Content written to the marker file for `date`.
pub fn marker_content(date: NaiveDate) -> String {
    format!("Commit on {}", date.format(DATE_FORMAT))
}

/// Commit message used for `date`.
pub fn commit_message(date: NaiveDate) -> String {
    format!("Commit for {}", date.format(DATE_FORMAT))
}

/// `YYYY-MM-DD HH:MM:SS` timestamp handed to git for `date`.
pub fn commit_timestamp(date: NaiveDate, time: &str) -> String {
    format!("{} {}", date.format(DATE_FORMAT), time)
}

/// Creates one backdated commit per day of `range` in `repo`, then pushes.
///
/// For each day the marker file is overwritten, staged and committed with
/// author and committer dates forced to that day at `settings.commit_time`.
/// The push runs even when the range is empty.
///
/// Returns the number of commits created.
///
/// # Errors
///
/// Stops at the first failing write or git invocation; commits already made
/// stay in the local clone and are not pushed.
pub fn forge_commits<V: VersionControl>(
    vcs: &mut V,
    repo: &Path,
    range: &DateRange,
    settings: &ForgeSettings,
) -> Result<usize, ForgeError> {
    let marker = repo.join(&settings.marker_file);
    let mut count = 0;

    for day in range.days() {
        fs::write(&marker, marker_content(day))?;
        vcs.add(repo, &settings.marker_file)?;

        let timestamp = commit_timestamp(day, &settings.commit_time);
        vcs.commit_as_of(repo, &commit_message(day), &timestamp)?;
        count += 1;
    }

    if count == 0 {
        println!(
            "{}",
            style("Start date is after end date; no commits created.").yellow()
        );
    }

    vcs.push(repo, &settings.remote, &settings.branch)?;
    println!(
        "{}",
        style(format!("✅ {} commit(s) pushed successfully!", count))
            .green()
            .bold()
    );
    Ok(count)
}
