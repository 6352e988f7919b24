use std::time::Duration;

use clap::Parser;
use log::warn;

use crate::error::ProbeError;
use crate::net::{get_interface_mac, MacAddress};
use crate::probe_modules::LinkAddrs;

pub const DEFAULT_INTERFACE: &str = "snet0";

fn parse_duration(arg: &str) -> Result<Duration, String> {
    let secs: f64 = arg.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("{e}"))
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Send filter test probes on a virtual interface", long_about = None)]
pub struct Config {
    /// Network interface that receives the probes
    #[arg(short, long, default_value = DEFAULT_INTERFACE)]
    pub interface: String,

    /// Seconds to wait after each probe
    #[arg(short, long, value_parser = parse_duration, default_value = "1")]
    pub delay: Duration,

    /// Destination MAC address for every probe
    #[arg(short = 'G', long, default_value = "ff:ff:ff:ff:ff:ff")]
    pub dst_mac: MacAddress,

    /// Source MAC address for probes that don't set one (defaults to the interface address)
    #[arg(long)]
    pub src_mac: Option<MacAddress>,

    /// Don't actually send packets
    #[arg(long)]
    pub dryrun: bool,

    /// In dryrun mode, suppress printing packets on send
    #[arg(short, long)]
    pub quiet: bool,
}

impl Config {
    /// Resolves the link-layer defaults. The interface address is only
    /// optional in dry-run mode, where nothing reaches the interface.
    pub fn link_addrs(&self) -> Result<LinkAddrs, ProbeError> {
        let source = match self.src_mac {
            Some(mac) => mac,
            None => match get_interface_mac(&self.interface) {
                Ok(mac) => mac,
                Err(e) if self.dryrun => {
                    warn!("{e}, using {} as source MAC", MacAddress::zero());
                    MacAddress::zero()
                }
                Err(e) => return Err(e),
            },
        };

        Ok(LinkAddrs {
            source,
            destination: self.dst_mac,
        })
    }
}
