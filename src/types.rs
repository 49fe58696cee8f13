//! Route 53 and ELB Types
//!
//! Plain records for what the lookup reads from AWS. All of them are built
//! fresh per run and never written back.

use std::fmt;

/// A Route 53 hosted zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    /// Zone apex, dot-terminated (e.g. "example.com.")
    pub name: String,
    /// Zone id without the "/hostedzone/" prefix
    pub id: String,
}

impl HostedZone {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// A resource record set within a hosted zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    /// Record name, dot-terminated
    pub name: String,
    /// Record type (A, AAAA, CNAME, ...)
    pub record_type: String,
    /// DNS name of the alias target, when the record is an alias
    pub alias_target: Option<String>,
}

impl RecordSet {
    /// Create a plain (non-alias) record set
    pub fn new(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            alias_target: None,
        }
    }

    /// Create an alias record set pointing at `target`
    pub fn alias(
        name: impl Into<String>,
        record_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            alias_target: Some(target.into()),
            ..Self::new(name, record_type)
        }
    }
}

/// A classic load balancer as described by the ELB API
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadBalancer {
    pub name: String,
    /// DNS name as the API reports it, without a trailing dot
    pub dns_name: String,
    pub canonical_hosted_zone_name: String,
    pub canonical_hosted_zone_id: String,
    /// Registered instance ids
    pub instances: Vec<String>,
}

/// Health state of a registered instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceState {
    InService,
    OutOfService,
    Unknown,
    /// A state this tool does not know by name, kept verbatim
    Other(String),
}

impl From<&str> for InstanceState {
    fn from(state: &str) -> Self {
        match state {
            "InService" => InstanceState::InService,
            "OutOfService" => InstanceState::OutOfService,
            "Unknown" => InstanceState::Unknown,
            other => InstanceState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceState::InService => write!(f, "InService"),
            InstanceState::OutOfService => write!(f, "OutOfService"),
            InstanceState::Unknown => write!(f, "Unknown"),
            InstanceState::Other(state) => write!(f, "{}", state),
        }
    }
}

/// Health of one instance behind a load balancer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceHealth {
    pub instance_id: String,
    pub state: InstanceState,
}

impl InstanceHealth {
    pub fn new(instance_id: impl Into<String>, state: impl Into<InstanceState>) -> Self {
        Self {
            instance_id: instance_id.into(),
            state: state.into(),
        }
    }
}

/// A load balancer whose DNS name is a suffix of an alias target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerMatch {
    /// The FQDN being resolved
    pub fqdn: String,
    /// The Route 53 alias target that matched
    pub alias: String,
    pub load_balancer: LoadBalancer,
}
