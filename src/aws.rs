//! AWS Inventory
//!
//! `CloudInventory` backed by the AWS SDK: Route 53 for zones and record
//! sets, classic Elastic Load Balancing for load balancers and instance
//! health. Credentials and the home region come from the SDK's default
//! provider chains.

use std::future::Future;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_elasticloadbalancing as elb;
use aws_sdk_route53 as route53;
use aws_sdk_route53::types::RrType;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::debug;

use crate::inventory::CloudInventory;
use crate::types::{HostedZone, InstanceHealth, LoadBalancer, RecordSet};

/// Route 53 is global; any region works for its endpoint
const DEFAULT_REGION: &str = "us-east-1";

/// Position in a `list_resource_record_sets` listing
#[derive(Debug, Clone)]
struct RecordCursor {
    name: String,
    record_type: RrType,
    identifier: Option<String>,
}

/// AWS-backed cloud inventory
pub struct AwsInventory {
    sdk_config: SdkConfig,
    route53: route53::Client,
}

impl AwsInventory {
    /// Load configuration from the environment, falling back to
    /// us-east-1 when no region is configured.
    pub async fn from_env() -> Self {
        let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        Self::new(sdk_config)
    }

    pub fn new(sdk_config: SdkConfig) -> Self {
        let route53 = route53::Client::new(&sdk_config);
        Self { sdk_config, route53 }
    }

    /// An ELB client for `region`, sharing credentials with the base config
    fn elb(&self, region: &str) -> elb::Client {
        let config = elb::config::Builder::from(&self.sdk_config)
            .region(elb::config::Region::new(region.to_string()))
            .build();

        elb::Client::from_conf(config)
    }
}

#[async_trait]
impl CloudInventory for AwsInventory {
    fn hosted_zones(&self) -> BoxStream<'_, Result<HostedZone>> {
        paginate(move |marker| hosted_zone_page(&self.route53, marker))
    }

    fn record_sets<'a>(&'a self, zone_id: &'a str) -> BoxStream<'a, Result<RecordSet>> {
        paginate(move |cursor| record_set_page(&self.route53, zone_id, cursor))
    }

    fn load_balancers<'a>(&'a self, region: &'a str) -> BoxStream<'a, Result<LoadBalancer>> {
        let client = self.elb(region);
        paginate(move |marker| {
            let client = client.clone();
            async move { load_balancer_page(&client, region, marker).await }
        })
    }

    async fn describe_instance_health(
        &self,
        region: &str,
        load_balancer: &str,
        instances: &[String],
    ) -> Result<Vec<InstanceHealth>> {
        let instances = (!instances.is_empty()).then(|| {
            instances
                .iter()
                .map(|id| elb::types::Instance::builder().instance_id(id).build())
                .collect()
        });

        let response = self
            .elb(region)
            .describe_instance_health()
            .load_balancer_name(load_balancer)
            .set_instances(instances)
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to describe instance health for {} in {}",
                    load_balancer, region
                )
            })?;

        Ok(response
            .instance_states()
            .iter()
            .map(|state| {
                InstanceHealth::new(
                    state.instance_id().unwrap_or_default(),
                    state.state().unwrap_or("Unknown"),
                )
            })
            .collect())
    }
}

/// Turn a page fetcher into a flat stream of items.
///
/// `fetch` receives `None` for the first page and the returned cursor for
/// every later one; a `None` cursor ends the listing.
fn paginate<'a, T, C, F, Fut>(fetch: F) -> BoxStream<'a, Result<T>>
where
    T: Send + 'a,
    C: Send + 'a,
    F: FnMut(Option<C>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<(Vec<T>, Option<C>)>> + Send + 'a,
{
    stream::try_unfold((fetch, Some(None)), |(mut fetch, cursor)| async move {
        match cursor {
            None => Ok(None),
            Some(cursor) => fetch(cursor).await.map(move |(items, next)| {
                let items = stream::iter(items.into_iter().map(Ok::<T, anyhow::Error>));
                Some((items, (fetch, next.map(Some))))
            }),
        }
    })
    .try_flatten()
    .boxed()
}

async fn hosted_zone_page(
    client: &route53::Client,
    marker: Option<String>,
) -> Result<(Vec<HostedZone>, Option<String>)> {
    let page = client
        .list_hosted_zones()
        .set_marker(marker)
        .send()
        .await
        .context("Failed to list hosted zones")?;

    let zones = page
        .hosted_zones()
        .iter()
        .map(|zone| HostedZone::new(zone.name(), trim_zone_id(zone.id())))
        .collect();

    let next = page
        .next_marker()
        .filter(|_| page.is_truncated())
        .map(str::to_string);

    Ok((zones, next))
}

async fn record_set_page(
    client: &route53::Client,
    zone_id: &str,
    cursor: Option<RecordCursor>,
) -> Result<(Vec<RecordSet>, Option<RecordCursor>)> {
    let mut request = client.list_resource_record_sets().hosted_zone_id(zone_id);
    if let Some(cursor) = cursor {
        debug!(?cursor, "Fetching next record set page");
        request = request
            .start_record_name(cursor.name)
            .start_record_type(cursor.record_type)
            .set_start_record_identifier(cursor.identifier);
    }

    let page = request
        .send()
        .await
        .with_context(|| format!("Failed to list resource record sets for zone {}", zone_id))?;

    let records = page
        .resource_record_sets()
        .iter()
        .map(|record| RecordSet {
            name: record.name().to_string(),
            record_type: record.r#type().as_str().to_string(),
            alias_target: record.alias_target().map(|a| a.dns_name().to_string()),
        })
        .collect();

    let next = match (page.is_truncated(), page.next_record_name(), page.next_record_type()) {
        (true, Some(name), Some(record_type)) => Some(RecordCursor {
            name: name.to_string(),
            record_type: record_type.clone(),
            identifier: page.next_record_identifier().map(str::to_string),
        }),
        _ => None,
    };

    Ok((records, next))
}

async fn load_balancer_page(
    client: &elb::Client,
    region: &str,
    marker: Option<String>,
) -> Result<(Vec<LoadBalancer>, Option<String>)> {
    let page = client
        .describe_load_balancers()
        .set_marker(marker)
        .send()
        .await
        .with_context(|| format!("Failed to describe load balancers in {}", region))?;

    let load_balancers = page
        .load_balancer_descriptions()
        .iter()
        .map(|lb| LoadBalancer {
            name: lb.load_balancer_name().unwrap_or_default().to_string(),
            dns_name: lb.dns_name().unwrap_or_default().to_string(),
            canonical_hosted_zone_name: lb
                .canonical_hosted_zone_name()
                .unwrap_or_default()
                .to_string(),
            canonical_hosted_zone_id: lb
                .canonical_hosted_zone_name_id()
                .unwrap_or_default()
                .to_string(),
            instances: lb
                .instances()
                .iter()
                .filter_map(|i| i.instance_id().map(str::to_string))
                .collect(),
        })
        .collect();

    Ok((load_balancers, page.next_marker().map(str::to_string)))
}

/// Route 53 reports zone ids as "/hostedzone/Z123"; the API accepts the bare id.
fn trim_zone_id(id: &str) -> &str {
    id.strip_prefix("/hostedzone/").unwrap_or(id)
}
