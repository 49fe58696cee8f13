//! Alias classification
//!
//! Picks the record sets for an FQDN that alias a classic ELB and groups
//! their targets by the region encoded in the ELB DNS name.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::LookupError;
use crate::types::RecordSet;

/// Suffix shared by every classic ELB DNS name
pub const ELB_SUFFIX: &str = "elb.amazonaws.com.";

/// ELB alias targets keyed by region, in record set order within a region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasGroup {
    regions: BTreeMap<String, Vec<String>>,
}

impl AliasGroup {
    /// Classify the record sets named exactly `fqdn`.
    ///
    /// Record sets with another name, no alias target, or a non-ELB alias
    /// target are ignored. An ELB-looking target whose region cannot be
    /// located is an error.
    pub fn classify<'a>(
        fqdn: &str,
        record_sets: impl IntoIterator<Item = &'a RecordSet>,
    ) -> Result<Self, LookupError> {
        let mut group = Self::default();

        for record in record_sets.into_iter().filter(|r| r.name == fqdn) {
            let Some(target) = record.alias_target.as_deref().filter(|t| !t.is_empty()) else {
                continue;
            };

            if !target.ends_with(ELB_SUFFIX) {
                debug!("skipping {}", target);
                continue;
            }

            let region = elb_region(target)?;
            group
                .regions
                .entry(region.to_string())
                .or_default()
                .push(target.to_string());
        }

        Ok(group)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Alias targets for one region
    pub fn targets(&self, region: &str) -> &[String] {
        self.regions.get(region).map(Vec::as_slice).unwrap_or_default()
    }

    /// Regions and their alias targets, sorted by region
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.regions
            .iter()
            .map(|(region, targets)| (region.as_str(), targets.as_slice()))
    }
}

/// Extract the region from a classic ELB DNS name.
///
/// Accepted shapes, all dot-terminated:
/// - `name-123456789.region.elb.amazonaws.com.`
/// - `ipv6.name-123456789.region.elb.amazonaws.com.`
/// - `dualstack.name-123456789.region.elb.amazonaws.com.`
///
/// The region is always the fifth label from the end (the trailing dot
/// yields an empty last label).
pub fn elb_region(dns_name: &str) -> Result<&str, LookupError> {
    let labels: Vec<&str> = dns_name.split('.').collect();
    let unrecognized = || LookupError::UnrecognizedAliasFormat(dns_name.to_string());

    if labels.len() < 6 || labels[labels.len() - 4] != "elb" {
        return Err(unrecognized());
    }

    match labels[labels.len() - 5] {
        "" => Err(unrecognized()),
        region => Ok(region),
    }
}
