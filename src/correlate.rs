//! Load balancer correlation
//!
//! Alias targets may carry a `dualstack.` or `ipv6.` prefix that the ELB's
//! own DNS name lacks, so a load balancer matches when its DNS name (plus the
//! root dot) is a suffix of the alias target.

use tracing::debug;

use crate::types::{LoadBalancer, LoadBalancerMatch};

/// Every alias target in `aliases` that `load_balancer` serves.
pub fn matches_for(
    fqdn: &str,
    load_balancer: &LoadBalancer,
    aliases: &[String],
) -> Vec<LoadBalancerMatch> {
    let dns_name = format!("{}.", load_balancer.dns_name);

    aliases
        .iter()
        .filter(|alias| {
            debug!("checking {} against {}", alias, dns_name);
            alias.ends_with(&dns_name)
        })
        .map(|alias| LoadBalancerMatch {
            fqdn: fqdn.to_string(),
            alias: alias.clone(),
            load_balancer: load_balancer.clone(),
        })
        .collect()
}

/// Correlate a region's load balancers against its alias targets.
///
/// Every (load balancer, alias) pair is reported, including several load
/// balancers matching the same alias.
pub fn correlate<'a>(
    fqdn: &str,
    aliases: &[String],
    load_balancers: impl IntoIterator<Item = &'a LoadBalancer>,
) -> Vec<LoadBalancerMatch> {
    load_balancers
        .into_iter()
        .flat_map(|lb| matches_for(fqdn, lb, aliases))
        .collect()
}
