pub mod module_filter_probes;

use std::{fmt, net::Ipv4Addr};

use etherparse::{LinkSlice, NetSlice, PacketBuilder, SlicedPacket, TransportSlice};

use crate::error::ProbeError;
use crate::net::MacAddress;

pub const IPV4_TTL: u8 = 64;
pub const TCP_WINDOW: u16 = 8192;
pub const TCP_SEQ: u32 = 0;

/// What the filter under test is expected to do with a probe. Only used for
/// operator-facing output, nothing here checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    Dropped,
    Accepted,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Dropped => f.write_str("should be dropped"),
            Disposition::Accepted => f.write_str("should be accepted"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    Tcp {
        source_port: u16,
        destination_port: u16,
    },
    Udp {
        source_port: u16,
        destination_port: u16,
    },
}

/// Link-layer addresses for probes that don't pin their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkAddrs {
    pub source: MacAddress,
    pub destination: MacAddress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    pub name: &'static str,
    pub summary: &'static str,
    pub expected: Disposition,
    pub source_mac: Option<MacAddress>,
    pub source_ip: Ipv4Addr,
    pub destination_ip: Ipv4Addr,
    pub transport: Transport,
}

impl Probe {
    /// The progress line printed before the probe goes out.
    pub fn announcement(&self) -> String {
        format!("[Test {}] {} ({})", self.name, self.summary, self.expected)
    }

    pub fn make_packet(&self, link: &LinkAddrs) -> Result<Vec<u8>, ProbeError> {
        let source_mac = self.source_mac.unwrap_or(link.source);
        let ip = PacketBuilder::ethernet2(source_mac.octets(), link.destination.octets()).ipv4(
            self.source_ip.octets(),
            self.destination_ip.octets(),
            IPV4_TTL,
        );

        let mut buf = Vec::new();
        let written = match self.transport {
            Transport::Tcp {
                source_port,
                destination_port,
            } => {
                let pkt = ip
                    .tcp(source_port, destination_port, TCP_SEQ, TCP_WINDOW)
                    .syn();
                buf.reserve(pkt.size(0));
                pkt.write(&mut buf, &[])
            }
            Transport::Udp {
                source_port,
                destination_port,
            } => {
                let pkt = ip.udp(source_port, destination_port);
                buf.reserve(pkt.size(0));
                pkt.write(&mut buf, &[])
            }
        };
        written.map_err(|e| ProbeError::Build(e.to_string()))?;

        Ok(buf)
    }
}

/// One-line layered summary of an Ethernet frame, e.g.
/// `Ether 02:00:00:00:00:01 > ff:ff:ff:ff:ff:ff / IP 192.168.1.1 > 192.168.1.200 ttl 64 / TCP 12345 > 80 [S]`
pub fn describe_packet(frame: &[u8]) -> Result<String, ProbeError> {
    let sliced = SlicedPacket::from_ethernet(frame).map_err(|e| ProbeError::Parse(e.to_string()))?;

    let mut layers = Vec::with_capacity(3);

    if let Some(LinkSlice::Ethernet2(eth)) = &sliced.link {
        layers.push(format!(
            "Ether {} > {}",
            MacAddress::new(eth.source()),
            MacAddress::new(eth.destination())
        ));
    }

    match &sliced.net {
        Some(NetSlice::Ipv4(ipv4)) => {
            let header = ipv4.header();
            layers.push(format!(
                "IP {} > {} ttl {}",
                header.source_addr(),
                header.destination_addr(),
                header.ttl()
            ));
        }
        Some(_) => layers.push("non-IPv4".to_string()),
        None => {}
    }

    match &sliced.transport {
        Some(TransportSlice::Tcp(tcp)) => {
            let mut flags = String::new();
            if tcp.syn() {
                flags.push('S');
            }
            if tcp.ack() {
                flags.push('A');
            }
            if tcp.fin() {
                flags.push('F');
            }
            if tcp.rst() {
                flags.push('R');
            }
            layers.push(format!(
                "TCP {} > {} [{}]",
                tcp.source_port(),
                tcp.destination_port(),
                flags
            ));
        }
        Some(TransportSlice::Udp(udp)) => {
            layers.push(format!(
                "UDP {} > {}",
                udp.source_port(),
                udp.destination_port()
            ));
        }
        Some(_) => layers.push("other transport".to_string()),
        None => {}
    }

    Ok(layers.join(" / "))
}
