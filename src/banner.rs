use console::{measure_text_width, style};

/// Prints the boxed welcome banner shown at the top of each menu round.
///
/// The box is sized to the widest **visible** line, using
/// [`console::measure_text_width`] so ANSI color codes in the content do not
/// throw off the padding. Borders are styled separately from the content.
///
/// # Examples
///
/// ```no_run
/// use commit_forge::banner::print_banner;
///
/// print_banner();
/// ```
pub fn print_banner() {
    let lines = banner_lines();

    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let top = style(format!("╔{}╗", border)).blue().bold();
    let bottom = style(format!("╚{}╝", border)).blue().bold();
    let left = style("║ ").blue().bold().to_string();
    let right = style("║").blue().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let visible = measure_text_width(&line);
        let pad = max_width - visible; // includes the one space after left border
        println!("{}{}{}{}", left, line, " ".repeat(pad - 1), right);
    }
    println!("{bottom}");
    println!();
}

/// Lines of the welcome banner, some carrying ANSI styling.
fn banner_lines() -> Vec<String> {
    vec![
        style(format!("commit-forge {}", env!("CARGO_PKG_VERSION")))
            .cyan()
            .bold()
            .to_string(),
        String::new(),
        style("Generate backdated commits to fill your contribution graph.")
            .green()
            .to_string(),
        String::from("Each day in the range gets one commit at 12:00:00, then `main` is pushed."),
        String::new(),
        style("Press Ctrl+C or type 'quit' to exit at any time.")
            .red()
            .to_string(),
    ]
}
