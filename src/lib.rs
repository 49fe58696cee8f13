//! Route 53 to ELB Lookup Library
//!
//! Resolves an FQDN hosted in Route 53 to the classic load balancers and
//! backend instances serving it: find the owning hosted zone, pick the
//! record sets that alias an ELB, match those aliases against each region's
//! load balancers and report instance health.

pub mod alias;
pub mod aws;
pub mod config;
pub mod correlate;
pub mod error;
pub mod health;
pub mod inventory;
pub mod lookup;
pub mod report;
pub mod telemetry;
pub mod types;
pub mod zones;

#[cfg(test)]
mod testing;

pub use aws::AwsInventory;
pub use config::LookupConfig;
pub use error::LookupError;
pub use inventory::CloudInventory;
pub use lookup::{Lookup, Outcome};
pub use report::Report;
