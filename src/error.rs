//! Error types for r53elb.

use thiserror::Error;

/// Errors that end a lookup run.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No FQDN was supplied
    #[error("an FQDN is required")]
    MissingFqdn,

    /// Two hosted zones share a name, so suffix matching is ambiguous
    #[error("duplicate domain name entries for {0}")]
    DuplicateZone(String),

    /// An ELB alias target without the `<name>.<region>.elb.amazonaws.com.` shape
    #[error("unrecognized ELB alias target format: {0}")]
    UnrecognizedAliasFormat(String),

    /// A Route 53 or ELB call failed
    #[error(transparent)]
    Inventory(#[from] anyhow::Error),

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
