//! Cloud inventory seam
//!
//! The lookup only needs four read-only capabilities from AWS. Listings are
//! lazy, finite streams; the pipeline never depends on how pages are fetched.

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::types::{HostedZone, InstanceHealth, LoadBalancer, RecordSet};

/// Read-only access to hosted zones, record sets and load balancers
#[async_trait]
pub trait CloudInventory: Send + Sync {
    /// Stream every hosted zone in the account
    fn hosted_zones(&self) -> BoxStream<'_, Result<HostedZone>>;

    /// Stream every record set in a hosted zone
    fn record_sets<'a>(&'a self, zone_id: &'a str) -> BoxStream<'a, Result<RecordSet>>;

    /// Stream every classic load balancer in `region`
    fn load_balancers<'a>(&'a self, region: &'a str) -> BoxStream<'a, Result<LoadBalancer>>;

    /// Describe the health of `instances` registered with a load balancer in `region`
    async fn describe_instance_health(
        &self,
        region: &str,
        load_balancer: &str,
        instances: &[String],
    ) -> Result<Vec<InstanceHealth>>;
}
