mod cli;
mod envfile;
mod layout;
mod logging;
mod process;
mod prompts;
mod providers;
mod runner;
mod selection;
mod setup;
mod templates;

fn main() -> anyhow::Result<()> {
    logging::init();
    let app = cli::parse();
    runner::run(app)
}
