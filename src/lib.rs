pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod fallback;
pub mod line;
pub mod reply;
pub mod server;

use anyhow::{Context, Result};
use cli::{Cli, Commands, InspectArgs, ResolveArgs, ServeArgs};
use dept_lookup::LoadReport;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::Credentials;
use crate::server::AppState;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => serve(&args),
        Commands::Resolve(args) => resolve(&args),
        Commands::Inspect(args) => inspect(&args),
    }
}

fn serve(args: &ServeArgs) -> Result<()> {
    let mapping = dept_lookup::load(&args.mapping.mapping);
    let state = AppState::new(mapping, Credentials::from_env());
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(server::serve(&args.host, args.port, state))
}

fn resolve(args: &ResolveArgs) -> Result<()> {
    let mapping = dept_lookup::load(&args.mapping.mapping);
    let message = reply::respond(&mapping, &args.text);
    println!("{}", message.text);
    if let Some(quick_reply) = message.quick_reply {
        println!("Quick replies:");
        for item in quick_reply.items {
            println!("  - {}", item.action.label);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct InspectDocument<'a> {
    generated_at: String,
    #[serde(flatten)]
    report: &'a LoadReport,
}

fn inspect(args: &InspectArgs) -> Result<()> {
    let report = dept_lookup::load_report(&args.mapping.mapping);
    if args.json {
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("failed to format timestamp")?;
        let document = InspectDocument {
            generated_at,
            report: &report,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&document).context("failed to serialize load report")?
        );
    } else {
        println!("{}", diagnostics::summarize(&report));
    }
    Ok(())
}
