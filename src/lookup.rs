//! Lookup pipeline
//!
//! Zone discovery, record set lookup, per-region load balancer correlation
//! and instance health, run strictly in sequence. The first error from any
//! stage ends the run; "nothing found" outcomes are not errors.

use std::io::Write;

use futures::TryStreamExt;
use tracing::{debug, info};

use crate::alias::AliasGroup;
use crate::config::LookupConfig;
use crate::correlate::matches_for;
use crate::error::LookupError;
use crate::health::report_health;
use crate::inventory::CloudInventory;
use crate::report::Report;
use crate::types::RecordSet;
use crate::zones::ZoneDirectory;

/// How a lookup run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No hosted zone owns the FQDN
    NoHostedZone,
    /// The owning zone has no record set named exactly the FQDN
    NoRecordSets,
    /// Record sets exist but none alias a classic ELB
    NoLoadBalancerAliases,
    /// Load balancers were checked; `matches` may be zero
    Completed { matches: usize },
}

/// Resolves an FQDN to the load balancers and instances behind it
pub struct Lookup<'a, I: CloudInventory + ?Sized> {
    config: &'a LookupConfig,
    inventory: &'a I,
}

impl<'a, I: CloudInventory + ?Sized> Lookup<'a, I> {
    pub fn new(config: &'a LookupConfig, inventory: &'a I) -> Self {
        Self { config, inventory }
    }

    /// Run the lookup, writing the report as results arrive.
    pub async fn run<W: Write>(&self, report: &mut Report<W>) -> Result<Outcome, LookupError> {
        let fqdn = self.config.fqdn.as_str();
        report.banner(fqdn)?;

        let zones = ZoneDirectory::collect(self.inventory.hosted_zones()).await?;
        info!(zones = zones.len(), "Loaded hosted zones");

        let Some(zone) = zones.find(fqdn) else {
            report.no_hosted_zone(fqdn)?;
            return Ok(Outcome::NoHostedZone);
        };
        report.zone_found(&zone)?;

        let record_sets = self.record_sets(&zone.zone_id).await?;
        if record_sets.is_empty() {
            report.no_record_sets(&zone)?;
            return Ok(Outcome::NoRecordSets);
        }

        let aliases = AliasGroup::classify(fqdn, &record_sets)?;
        if aliases.is_empty() {
            report.no_load_balancer_aliases()?;
            return Ok(Outcome::NoLoadBalancerAliases);
        }

        let mut matches = 0;
        for (region, targets) in aliases.iter() {
            debug!("Checking Load Balancers in region {}", region);

            let mut load_balancers = self.inventory.load_balancers(region);
            while let Some(lb) = load_balancers.try_next().await? {
                for found in matches_for(fqdn, &lb, targets) {
                    report.load_balancer_match(&found)?;
                    report_health(self.inventory, region, &found.load_balancer, report).await?;
                    matches += 1;
                }
            }
        }

        info!(matches, "Lookup complete");
        Ok(Outcome::Completed { matches })
    }

    /// Record sets in `zone_id` named exactly the configured FQDN.
    async fn record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>, LookupError> {
        let fqdn = self.config.fqdn.as_str();
        let record_sets: Vec<RecordSet> = self
            .inventory
            .record_sets(zone_id)
            .try_filter(|record| futures::future::ready(record.name == fqdn))
            .try_collect()
            .await?;

        for record in &record_sets {
            debug!(?record, "Matched record set");
        }

        Ok(record_sets)
    }
}
