// Rust guideline compliant 2026-10-19

//! Sonarbrief CLI Application
//!
//! Prints open SonarCloud issues as a markdown brief for a language model.

use clap::Parser;
use sonarbrief_cli::{init_tracing, run};
use sonarbrief_core::UreqTransport;

#[derive(Parser, Debug)]
#[command(
    name = "sonarbrief",
    version,
    about = "Sonarbrief: SonarCloud issues as an LLM fix brief",
    long_about = "Sonarbrief fetches the open and confirmed issues of a SonarCloud project, adds source context and rule names, and prints one markdown block per issue.",
    after_help = "Environment:\n  SONAR_TOKEN   SonarCloud API token (required)\n  PROJECT_KEY   Project key to report on (required)\n  RUST_LOG      Log filter for stderr output (default: info)\n\nExample:\n  SONAR_TOKEN=... PROJECT_KEY=my-org_my-app sonarbrief > issues.md\n"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let report = run(|name| std::env::var(name).ok(), UreqTransport::new())?;
    println!("{}", report);

    Ok(())
}
