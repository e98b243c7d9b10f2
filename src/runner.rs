use anyhow::Result;
use console::style;

use crate::cli::{Cli, Command};
use crate::layout::{Artifact, ProjectLayout};
use crate::selection::Selection;
use crate::{layout, prompts, setup};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init => init(),
    }
}

/// Drive the setup stages strictly in order. Nothing is rolled back when a
/// later stage fails; partial output is an accepted outcome of a failed run.
fn init() -> Result<()> {
    prompts::intro();
    let selection = prompts::collect();

    let cwd = layout::current_dir()?;
    let layout = ProjectLayout::detect(&cwd);
    if layout.uses_src_dir() {
        println!(
            "{}",
            style("Detected a src/ layout; app files will go under src/.").dim()
        );
    }

    stage("Setting up Prisma");
    setup::database::bootstrap_orm()?;
    setup::database::write_schema(&selection, &layout)?;

    stage("Configuring environment");
    setup::database::write_env(&selection, &layout)?;

    stage("Applying the database schema");
    setup::database::migrate(&selection)?;

    stage("Installing authentication dependencies");
    setup::auth::install_dependencies()?;

    stage("Writing authentication files");
    setup::auth::write_artifacts(&selection, &layout)?;

    stage("Writing UI files");
    setup::ui::write_artifacts(&layout)?;

    report(&selection, &layout);
    Ok(())
}

fn stage(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
}

fn report(selection: &Selection, layout: &ProjectLayout) {
    println!();
    println!("{}", style("Setup complete.").green().bold());
    println!();
    println!("Next steps:");
    for provider in &selection.providers {
        let prefix = provider.env_prefix();
        println!(
            "  - add {prefix}_CLIENT_ID / {prefix}_CLIENT_SECRET to {}",
            layout.path(Artifact::EnvFile)
        );
    }
    println!("  - review {}", layout.path(Artifact::SetupGuide));
    println!("  - start the dev server: {}", style("npm run dev").cyan());
    println!();
}
