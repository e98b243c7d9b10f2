use anyhow::{Context, Result, bail};
use console::style;

use crate::envfile;
use crate::layout::{Artifact, ProjectLayout};
use crate::process::{self, CommandStep};
use crate::prompts;
use crate::selection::{Database, Selection};

/// Install the ORM toolchain and initialize it in the target project.
/// Failures here are fatal; there is no best-effort fallback.
pub fn bootstrap_orm() -> Result<()> {
    process::run_steps(&bootstrap_plan())
}

fn bootstrap_plan() -> Vec<CommandStep> {
    vec![
        CommandStep::new("install prisma", &["npm", "install", "prisma", "--save-dev"]),
        CommandStep::new("install prisma client", &["npm", "install", "@prisma/client"]),
        CommandStep::new("initialize prisma", &["npx", "prisma", "init"]),
    ]
}

/// Overwrite the schema with the template for the chosen kind, then write
/// the database client bootstrap and the Prisma config file.
pub fn write_schema(selection: &Selection, layout: &ProjectLayout) -> Result<()> {
    super::install_artifact(
        selection.database.schema_template(),
        &layout.path(Artifact::Schema),
    )?;
    super::install_artifact("db.ts", &layout.path(Artifact::DbClient))?;
    super::install_artifact("prisma.config.ts", &layout.path(Artifact::PrismaConfig))
}

/// Regenerate `.env` from the selection. The file is replaced, not merged.
pub fn write_env(selection: &Selection, layout: &ProjectLayout) -> Result<()> {
    let env = envfile::compose(&layout.path(Artifact::EnvFile), selection);
    env.save()?;
    println!("  {} {}", style("created").green(), env.path());
    Ok(())
}

/// Apply the schema and generate the client. On failure, offer exactly one
/// confirmed destructive reset and re-run the same sequence once.
pub fn migrate(selection: &Selection) -> Result<()> {
    let Err(err) = process::run_steps(&apply_plan(selection.database)) else {
        return Ok(());
    };
    println!("     {} {}", style("[failed]").red(), err);

    let confirmed = prompts::confirm_destructive_reset();
    let Some((reset, retry)) = recovery_plan(selection.database, confirmed) else {
        bail!("database migration failed: {err}");
    };

    process::run_step(&reset)?;
    process::run_steps(&retry).context("migration failed again after the reset")
}

fn apply_plan(database: Database) -> Vec<CommandStep> {
    match database {
        Database::Postgres => vec![
            CommandStep::new(
                "run initial migration",
                &["npx", "prisma", "migrate", "dev", "--name", "init"],
            ),
            CommandStep::new("generate prisma client", &["npx", "prisma", "generate"]),
        ],
        Database::MongoDb => vec![
            CommandStep::new("push schema", &["npx", "prisma", "db", "push"]),
            CommandStep::new("generate prisma client", &["npx", "prisma", "generate"]),
        ],
    }
}

/// The bounded recovery path: `None` aborts, `Some` carries the reset step
/// and the single retry of the apply sequence.
fn recovery_plan(database: Database, confirmed: bool) -> Option<(CommandStep, Vec<CommandStep>)> {
    if !confirmed {
        return None;
    }
    let reset = match database {
        Database::Postgres => CommandStep::new(
            "reset database",
            &["npx", "prisma", "migrate", "reset", "--force"],
        ),
        Database::MongoDb => CommandStep::new(
            "reset database",
            &["npx", "prisma", "db", "push", "--force-reset"],
        ),
    };
    Some((reset, apply_plan(database)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_installs_then_initializes() {
        let plan = bootstrap_plan();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].argv[..2], ["npm", "install"]);
        assert_eq!(plan[2].argv, vec!["npx", "prisma", "init"]);
    }

    #[test]
    fn postgres_migrates_and_mongo_pushes() {
        let postgres = apply_plan(Database::Postgres);
        assert_eq!(
            postgres[0].argv,
            vec!["npx", "prisma", "migrate", "dev", "--name", "init"]
        );
        assert_eq!(postgres[1].argv, vec!["npx", "prisma", "generate"]);

        let mongo = apply_plan(Database::MongoDb);
        assert_eq!(mongo[0].argv, vec!["npx", "prisma", "db", "push"]);
        assert_eq!(mongo[1].argv, vec!["npx", "prisma", "generate"]);
    }

    #[test]
    fn declined_reset_produces_no_destructive_command() {
        for database in Database::all() {
            assert!(recovery_plan(database, false).is_none());
        }
    }

    #[test]
    fn confirmed_reset_retries_the_same_apply_sequence_once() {
        let (reset, retry) = recovery_plan(Database::Postgres, true).unwrap();
        assert_eq!(
            reset.argv,
            vec!["npx", "prisma", "migrate", "reset", "--force"]
        );
        assert_eq!(retry, apply_plan(Database::Postgres));

        let (reset, _) = recovery_plan(Database::MongoDb, true).unwrap();
        assert_eq!(
            reset.argv,
            vec!["npx", "prisma", "db", "push", "--force-reset"]
        );
    }
}
