//! Hosted zone directory and longest-suffix matching.

use std::collections::HashMap;

use futures::{Stream, TryStreamExt};
use tracing::debug;

use crate::error::LookupError;
use crate::types::HostedZone;

/// Zone name to zone id, with unique names
#[derive(Debug, Clone, Default)]
pub struct ZoneDirectory {
    zones: HashMap<String, String>,
}

/// The hosted zone that owns an FQDN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMatch {
    pub zone_id: String,
    /// Labels in front of the zone apex, joined with "." (may be empty)
    pub prefix: String,
    /// The matched zone name
    pub domain: String,
}

impl ZoneDirectory {
    /// Build a directory, failing on the first duplicate zone name.
    pub fn from_zones(
        zones: impl IntoIterator<Item = HostedZone>,
    ) -> Result<Self, LookupError> {
        let mut directory = Self::default();
        for zone in zones {
            directory.insert(zone)?;
        }
        Ok(directory)
    }

    /// Drain a zone listing into a directory. Stops at the first listing
    /// error or duplicate name without reading further pages.
    pub async fn collect<S>(zones: S) -> Result<Self, LookupError>
    where
        S: Stream<Item = anyhow::Result<HostedZone>>,
    {
        let mut zones = std::pin::pin!(zones);
        let mut directory = Self::default();
        while let Some(zone) = zones.try_next().await? {
            directory.insert(zone)?;
        }
        Ok(directory)
    }

    fn insert(&mut self, zone: HostedZone) -> Result<(), LookupError> {
        if self.zones.contains_key(&zone.name) {
            return Err(LookupError::DuplicateZone(zone.name));
        }

        debug!("{} {}", zone.name, zone.id);
        self.zones.insert(zone.name, zone.id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Find the most specific hosted zone for a dot-terminated `fqdn`.
    ///
    /// Leading labels are dropped one at a time, so the first hit is the
    /// longest registered suffix. Returns `None` when no zone owns the name.
    pub fn find(&self, fqdn: &str) -> Option<ZoneMatch> {
        // "foo.example.com." -> ["foo", "example", "com", ""]
        let labels: Vec<&str> = fqdn.split('.').collect();

        for i in 0..labels.len() {
            let candidate = labels[i..].join(".");
            debug!("searching for {}", candidate);

            if let Some(zone_id) = self.zones.get(&candidate) {
                return Some(ZoneMatch {
                    zone_id: zone_id.clone(),
                    prefix: labels[..i].join("."),
                    domain: candidate,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn directory(zones: &[(&str, &str)]) -> ZoneDirectory {
        ZoneDirectory::from_zones(zones.iter().map(|(name, id)| HostedZone::new(*name, *id)))
            .unwrap()
    }

    #[test]
    fn test_find_prefers_most_specific_zone() {
        let zones = directory(&[("com.", "Z1"), ("example.com.", "Z2")]);

        let found = zones.find("foo.example.com.").unwrap();
        assert_eq!(found.zone_id, "Z2");
        assert_eq!(found.prefix, "foo");
        assert_eq!(found.domain, "example.com.");
    }

    #[test]
    fn test_find_falls_back_to_parent_zone() {
        let zones = directory(&[("com.", "Z1")]);

        let found = zones.find("foo.example.com.").unwrap();
        assert_eq!(found.zone_id, "Z1");
        assert_eq!(found.prefix, "foo.example");
        assert_eq!(found.domain, "com.");
    }

    #[test]
    fn test_find_delegated_subzone() {
        let zones = directory(&[("example.com.", "Z2"), ("foo.example.com.", "Z3")]);

        let found = zones.find("bar.foo.example.com.").unwrap();
        assert_eq!(found.zone_id, "Z3");
        assert_eq!(found.prefix, "bar");
    }

    #[test]
    fn test_find_zone_apex_has_empty_prefix() {
        let zones = directory(&[("example.com.", "Z2")]);

        let found = zones.find("example.com.").unwrap();
        assert_eq!(found.zone_id, "Z2");
        assert_eq!(found.prefix, "");
        assert_eq!(found.domain, "example.com.");
    }

    #[test]
    fn test_find_without_owning_zone() {
        assert_eq!(directory(&[]).find("foo.example.com."), None);
        assert_eq!(directory(&[("example.org.", "Z9")]).find("foo.example.com."), None);
    }

    #[test]
    fn test_find_requires_whole_labels() {
        let zones = directory(&[("ample.com.", "Z4")]);
        assert_eq!(zones.find("foo.example.com."), None);
    }

    #[test]
    fn test_duplicate_zone_is_rejected() {
        let result = ZoneDirectory::from_zones(vec![
            HostedZone::new("example.com.", "Z1"),
            HostedZone::new("example.com.", "Z2"),
        ]);

        match result {
            Err(LookupError::DuplicateZone(name)) => assert_eq!(name, "example.com."),
            other => panic!("expected duplicate zone error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_collect_stops_at_duplicate() {
        let zones = stream::iter(vec![
            Ok(HostedZone::new("example.com.", "Z1")),
            Ok(HostedZone::new("example.com.", "Z2")),
            Err(anyhow::anyhow!("should not be reached")),
        ]);

        let result = ZoneDirectory::collect(zones).await;
        assert!(matches!(result, Err(LookupError::DuplicateZone(_))));
    }

    #[tokio::test]
    async fn test_collect_propagates_listing_error() {
        let zones = stream::iter(vec![
            Ok(HostedZone::new("example.com.", "Z1")),
            Err(anyhow::anyhow!("access denied")),
        ]);

        let result = ZoneDirectory::collect(zones).await;
        assert!(matches!(result, Err(LookupError::Inventory(_))));
    }

    #[tokio::test]
    async fn test_collect_builds_directory() {
        let zones = stream::iter(vec![
            Ok(HostedZone::new("com.", "Z1")),
            Ok(HostedZone::new("example.com.", "Z2")),
        ]);

        let directory = ZoneDirectory::collect(zones).await.unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.find("www.example.com.").unwrap().zone_id, "Z2");
    }
}
