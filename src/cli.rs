use clap::{Parser, Subcommand};

/// Top-level CLI definition. All configuration is gathered interactively, so
/// the surface is a single bare subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "authwire",
    version,
    about = "Wire NextAuth and Prisma into an existing Next.js project"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set up authentication and the database ORM in the current project.
    Init,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
