//! Run configuration
//!
//! Built once from the command line and handed to telemetry setup and the
//! lookup pipeline. Nothing reads process-wide flags.

use crate::error::LookupError;

/// Log directives that surface the AWS SDK's request, signing and wire output
const SDK_DEBUG_DIRECTIVES: &[&str] = &[
    "aws_smithy_runtime=trace",
    "aws_smithy_runtime_api=trace",
    "aws_sigv4=trace",
    "aws_config=debug",
    "hyper=debug",
];

/// Configuration for a single lookup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Target domain name, always dot-terminated
    pub fqdn: String,
    /// Step-by-step diagnostics from the lookup itself
    pub verbose: bool,
    /// Low-level diagnostics from the AWS SDK
    pub debug: bool,
}

impl LookupConfig {
    /// Create a config for `fqdn`, appending the trailing dot if it is missing.
    pub fn new(fqdn: &str) -> Result<Self, LookupError> {
        let fqdn = fqdn.trim();
        if fqdn.is_empty() {
            return Err(LookupError::MissingFqdn);
        }

        Ok(Self {
            fqdn: normalize_fqdn(fqdn),
            verbose: false,
            debug: false,
        })
    }

    /// Enable verbose lookup diagnostics
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable AWS SDK debug output
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The `EnvFilter` directives this configuration asks for.
    pub fn log_directives(&self) -> String {
        let mut directives = vec!["warn".to_string()];

        if self.verbose {
            directives.push(format!("{}=debug", env!("CARGO_CRATE_NAME")));
        }

        if self.debug {
            directives.extend(SDK_DEBUG_DIRECTIVES.iter().map(|d| d.to_string()));
        }

        directives.join(",")
    }
}

/// Append the root label's dot when it is absent.
pub fn normalize_fqdn(fqdn: &str) -> String {
    if fqdn.ends_with('.') {
        fqdn.to_string()
    } else {
        format!("{}.", fqdn)
    }
}
