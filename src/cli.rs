use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dept_lookup::DEFAULT_MAPPING_PATH;

#[derive(Parser)]
#[command(name = "dept-responder")]
#[command(about = "Answer LINE messages with the matching department contact", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the webhook server.
    Serve(ServeArgs),
    /// Print the reply a user would receive for TEXT.
    Resolve(ResolveArgs),
    /// Load the mapping table and report what was found.
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MappingArgs {
    /// Department mapping CSV.
    #[arg(long, env = "DEPARTMENTS_CSV", default_value = DEFAULT_MAPPING_PATH)]
    pub mapping: PathBuf,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,
    /// Message text as the user would send it.
    pub text: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub mapping: MappingArgs,
    /// Emit the load report as JSON.
    #[arg(long)]
    pub json: bool,
}
