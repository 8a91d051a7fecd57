use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;

use briefhq::{derive, load_brief, load_landing, render_brief, render_landing, Brief};

/// One-shot read → derive → render of the B1 HQ executive brief.
#[derive(Debug, Parser)]
#[command(name = "briefhq", version, about = "B1 HQ morning executive brief")]
struct Cli {
    /// Path to the brief document.
    #[arg(long, default_value = "public/brief.json")]
    brief: PathBuf,

    /// Render the landing document at this path instead of the brief.
    #[arg(long)]
    landing: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD). Defaults to the local calendar date.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Emit the derived view as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("briefhq: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(landing_path) = &cli.landing {
        match load_landing(landing_path)? {
            Some(page) => print!("{}", render_landing(&page)),
            None => println!(
                "Add {} to control this page from HQ.",
                landing_path.display()
            ),
        }
        return Ok(());
    }

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let brief = match load_brief(&cli.brief)? {
        Some(brief) => brief,
        None => {
            // Absent input is not fatal: render the all-empty view.
            println!("Add {} to show data.", cli.brief.display());
            Brief::default()
        }
    };

    let view = derive(&brief, today);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_brief(&view, today));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn date_flag_fixes_the_reference_date() {
        let cli = Cli::parse_from(["briefhq", "--date", "2024-06-01", "--json"]);
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(cli.json);
        assert_eq!(cli.brief, PathBuf::from("public/brief.json"));
    }
}
