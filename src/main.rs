//! Route 53 to ELB Instances Lookup
//!
//! Finds the classic ELBs behind a Route 53 name and reports the health of
//! their instances. Read-only; uses the AWS SDK's default credential chain.
//!
//! # Usage
//! ```bash
//! r53elb --fqdn www.example.com
//!
//! # Show each lookup step
//! r53elb --fqdn www.example.com --verbose
//!
//! # Include AWS SDK request and signing output
//! r53elb --fqdn www.example.com --debug
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::info;

use r53elb::{telemetry, AwsInventory, Lookup, LookupConfig, LookupError, Report};

/// Exit status for a missing required flag
const USAGE_EXIT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "r53elb")]
#[command(about = "Route53 to ELB Instances Lookup Tool", long_about = None)]
#[command(version)]
struct Cli {
    /// The FQDN to look up (e.g. foo.example.com.)
    #[arg(long, env = "R53ELB_FQDN")]
    fqdn: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show AWS SDK debug output
    #[arg(long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match LookupConfig::new(cli.fqdn.as_deref().unwrap_or_default()) {
        Ok(config) => config.verbose(cli.verbose).debug(cli.debug),
        Err(LookupError::MissingFqdn) => {
            eprintln!("{}", Cli::command().render_help());
            return Ok(ExitCode::from(USAGE_EXIT));
        }
        Err(e) => return Err(e.into()),
    };

    telemetry::init(&config)?;

    let inventory = AwsInventory::from_env().await;
    let mut report = Report::new(io::stdout().lock());

    let outcome = Lookup::new(&config, &inventory).run(&mut report).await?;
    info!(?outcome, "Done");

    Ok(ExitCode::SUCCESS)
}
