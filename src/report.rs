//! Human-readable lookup report.

use std::io::{self, Write};

use crate::types::{InstanceHealth, LoadBalancerMatch};
use crate::zones::ZoneMatch;

const SEPARATOR: &str = "---------------------------------";

/// Writes the lookup report to any writer (stdout in the binary)
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, fqdn: &str) -> io::Result<()> {
        writeln!(self.out, "Route53 to ELB Instances Lookup Tool")?;
        writeln!(self.out, "using fqdn {}", fqdn)
    }

    pub fn zone_found(&mut self, zone: &ZoneMatch) -> io::Result<()> {
        writeln!(self.out, "found zone {} for {}", zone.zone_id, zone.domain)
    }

    pub fn no_hosted_zone(&mut self, fqdn: &str) -> io::Result<()> {
        writeln!(self.out, "could not find hosted zone for {}", fqdn)
    }

    pub fn no_record_sets(&mut self, zone: &ZoneMatch) -> io::Result<()> {
        writeln!(
            self.out,
            "No recordset found for {} in zone {} for domain {}",
            zone.prefix, zone.zone_id, zone.domain
        )
    }

    pub fn no_load_balancer_aliases(&mut self) -> io::Result<()> {
        writeln!(self.out, "did not find any matching elb resource record sets")
    }

    pub fn load_balancer_match(&mut self, found: &LoadBalancerMatch) -> io::Result<()> {
        let lb = &found.load_balancer;

        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "FQDN:      {}", found.fqdn)?;
        writeln!(self.out, "R53 Alias: {}", found.alias)?;
        writeln!(self.out, "ELB Name:  {}", lb.name)?;
        writeln!(self.out, "DNS:       {}", lb.dns_name)?;
        writeln!(self.out, "ZoneName:  {}", lb.canonical_hosted_zone_name)?;
        writeln!(self.out, "ZoneID:    {}", lb.canonical_hosted_zone_id)
    }

    pub fn instance(&mut self, health: &InstanceHealth) -> io::Result<()> {
        writeln!(self.out, "Instance:  {}\t{}", health.instance_id, health.state)
    }
}
