//! Instance health reporting for matched load balancers.

use std::io::Write;

use tracing::debug;

use crate::error::LookupError;
use crate::inventory::CloudInventory;
use crate::report::Report;
use crate::types::{InstanceHealth, LoadBalancer};

/// Describe and print the health of every instance registered with `load_balancer`.
///
/// Uses the load balancer's own instance list. A failed describe call ends
/// the run.
pub async fn report_health<I, W>(
    inventory: &I,
    region: &str,
    load_balancer: &LoadBalancer,
    report: &mut Report<W>,
) -> Result<Vec<InstanceHealth>, LookupError>
where
    I: CloudInventory + ?Sized,
    W: Write,
{
    debug!(
        load_balancer = %load_balancer.name,
        instances = load_balancer.instances.len(),
        "Describing instance health"
    );

    let health = inventory
        .describe_instance_health(region, &load_balancer.name, &load_balancer.instances)
        .await?;

    for instance in &health {
        report.instance(instance)?;
    }

    Ok(health)
}
