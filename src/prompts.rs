use std::process;

use console::style;
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};
use regex::Regex;

use crate::providers::{self, Provider};
use crate::selection::{Database, Selection};

pub fn intro() {
    println!();
    println!("{}", style("authwire").cyan().bold());
    println!(
        "{}",
        style("Wire NextAuth and Prisma into this project.").dim()
    );
    println!();
}

/// Print the cancellation warning and stop before any further stage runs.
fn cancelled() -> ! {
    println!();
    println!("{}", style("Setup cancelled.").yellow());
    process::exit(1);
}

/// Unwrap a prompt result, treating Esc/`q` (`None`) and interrupts alike as
/// cancellation.
fn checked<T>(result: dialoguer::Result<Option<T>>) -> T {
    match result {
        Ok(Some(value)) => value,
        Ok(None) | Err(_) => cancelled(),
    }
}

/// Gather the whole selection up front. Later stages only read from it.
pub fn collect() -> Selection {
    let theme = ColorfulTheme::default();

    let labels: Vec<&str> = Database::all().iter().map(|db| db.label()).collect();
    let index = checked(
        Select::with_theme(&theme)
            .with_prompt("Pick your database")
            .items(&labels)
            .default(0)
            .interact_opt(),
    );
    let database = Database::all()[index];

    let database_url = match Input::<String>::with_theme(&theme)
        .with_prompt(format!(
            "Enter your DATABASE_URL (e.g. {})",
            database.url_placeholder()
        ))
        .validate_with(move |input: &String| validate_url(database, input))
        .interact_text()
    {
        Ok(value) => value,
        Err(_) => cancelled(),
    };

    let overwrite = checked(
        Confirm::with_theme(&theme)
            .with_prompt("Overwrite prisma/schema.prisma with the selected template?")
            .default(true)
            .interact_opt(),
    );
    if !overwrite {
        cancelled();
    }

    let names: Vec<&str> = providers::CATALOG.iter().map(|p| p.name).collect();
    let picked = checked(
        MultiSelect::with_theme(&theme)
            .with_prompt("Select the authentication providers you want to use (space to select)")
            .items(&names)
            .interact_opt(),
    );
    let selected: Vec<&'static Provider> =
        picked.into_iter().map(|i| &providers::CATALOG[i]).collect();

    Selection {
        database,
        database_url,
        providers: selected,
    }
}

/// Scheme check applied in-place by the connection-string prompt; rejected
/// input re-prompts with the returned message.
pub fn validate_url(database: Database, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("DATABASE_URL cannot be empty".to_owned());
    }

    let schemes = database.url_schemes();
    let pattern = format!(
        "^(?:{})://",
        schemes
            .iter()
            .map(|scheme| regex::escape(scheme))
            .collect::<Vec<_>>()
            .join("|")
    );
    let re = Regex::new(&pattern).expect("scheme alternation is a valid pattern");

    if re.is_match(value) {
        Ok(())
    } else {
        let expected = schemes
            .iter()
            .map(|scheme| format!("{scheme}://"))
            .collect::<Vec<_>>()
            .join(" or ");
        Err(format!("it should start with {expected}"))
    }
}

/// Ask whether to destroy and rebuild the database after a failed
/// migration. Declining is final; there is no second offer.
pub fn confirm_destructive_reset() -> bool {
    println!();
    println!("{}", style("Database migration failed.").red().bold());
    println!(
        "{}",
        style("A reset will permanently delete all data in the database.").yellow()
    );

    checked(
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset the database and retry the migration?")
            .default(false)
            .interact_opt(),
    )
}
