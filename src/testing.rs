//! In-memory `CloudInventory` for pipeline tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

use crate::inventory::CloudInventory;
use crate::types::{HostedZone, InstanceHealth, LoadBalancer, RecordSet};

/// Serves canned listings and records every call it receives
#[derive(Default)]
pub struct FakeInventory {
    zones: Vec<HostedZone>,
    record_sets: HashMap<String, Vec<RecordSet>>,
    load_balancers: HashMap<String, Vec<LoadBalancer>>,
    health: HashMap<String, Vec<InstanceHealth>>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl FakeInventory {
    pub fn zone(mut self, zone: HostedZone) -> Self {
        self.zones.push(zone);
        self
    }

    pub fn record_set(mut self, zone_id: &str, record: RecordSet) -> Self {
        self.record_sets.entry(zone_id.to_string()).or_default().push(record);
        self
    }

    pub fn load_balancer(mut self, region: &str, lb: LoadBalancer) -> Self {
        self.load_balancers.entry(region.to_string()).or_default().push(lb);
        self
    }

    pub fn health(mut self, load_balancer: &str, health: Vec<InstanceHealth>) -> Self {
        self.health.insert(load_balancer.to_string(), health);
        self
    }

    /// Make every call to `operation` fail
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn listing<'a, T: Clone + Send + 'a>(
        &self,
        operation: &'static str,
        items: Option<&Vec<T>>,
    ) -> BoxStream<'a, Result<T>> {
        if self.failing.contains(operation) {
            return stream::iter(vec![Err(anyhow!("{} failed", operation))]).boxed();
        }

        let items = items.cloned().unwrap_or_default();
        stream::iter(items.into_iter().map(Ok)).boxed()
    }
}

#[async_trait]
impl CloudInventory for FakeInventory {
    fn hosted_zones(&self) -> BoxStream<'_, Result<HostedZone>> {
        self.record("hosted_zones".to_string());
        self.listing("hosted_zones", Some(&self.zones))
    }

    fn record_sets<'a>(&'a self, zone_id: &'a str) -> BoxStream<'a, Result<RecordSet>> {
        self.record(format!("record_sets {}", zone_id));
        self.listing("record_sets", self.record_sets.get(zone_id))
    }

    fn load_balancers<'a>(&'a self, region: &'a str) -> BoxStream<'a, Result<LoadBalancer>> {
        self.record(format!("load_balancers {}", region));
        self.listing("load_balancers", self.load_balancers.get(region))
    }

    async fn describe_instance_health(
        &self,
        region: &str,
        load_balancer: &str,
        instances: &[String],
    ) -> Result<Vec<InstanceHealth>> {
        self.record(format!(
            "describe_instance_health {} {} {}",
            region,
            load_balancer,
            instances.join(",")
        ));

        if self.failing.contains("describe_instance_health") {
            return Err(anyhow!("describe_instance_health failed"));
        }

        Ok(self.health.get(load_balancer).cloned().unwrap_or_default())
    }
}
