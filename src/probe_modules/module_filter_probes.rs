use std::net::Ipv4Addr;

use super::{Disposition, Probe, Transport};
use crate::net::MacAddress;

pub const SOURCE_PORT: u16 = 12345;
pub const TARGET_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 200);
pub const ALLOWED_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 100);
pub const FILTERED_IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 1);
pub const FILTERED_MAC: [u8; 6] = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];
pub const ALLOWED_MAC: [u8; 6] = [0x00, 0xaa, 0xbb, 0xcc, 0xdd, 0xee];

const HTTP: Transport = Transport::Tcp {
    source_port: SOURCE_PORT,
    destination_port: 80,
};

const DNS: Transport = Transport::Udp {
    source_port: SOURCE_PORT,
    destination_port: 53,
};

/// The probes sent against the filter, in transmission order.
pub fn filter_probes() -> [Probe; 4] {
    [
        Probe {
            name: "IP Filter",
            summary: "Sending TCP packet with source IP 192.168.1.1",
            expected: Disposition::Dropped,
            source_mac: None,
            source_ip: FILTERED_IP,
            destination_ip: TARGET_IP,
            transport: HTTP,
        },
        Probe {
            name: "UDP Filter",
            summary: "Sending UDP packet with source IP 192.168.1.100",
            expected: Disposition::Dropped,
            source_mac: None,
            source_ip: ALLOWED_IP,
            destination_ip: TARGET_IP,
            transport: DNS,
        },
        Probe {
            name: "MAC Filter",
            summary: "Sending TCP packet with source MAC 00:11:22:33:44:55",
            expected: Disposition::Dropped,
            source_mac: Some(MacAddress::new(FILTERED_MAC)),
            source_ip: ALLOWED_IP,
            destination_ip: TARGET_IP,
            transport: HTTP,
        },
        Probe {
            name: "Valid Packet",
            summary: "Sending TCP packet with valid parameters",
            expected: Disposition::Accepted,
            source_mac: Some(MacAddress::new(ALLOWED_MAC)),
            source_ip: ALLOWED_IP,
            destination_ip: TARGET_IP,
            transport: HTTP,
        },
    ]
}

#[cfg(test)]
mod tests {
    use etherparse::{LinkSlice, NetSlice, SlicedPacket, TransportSlice};

    use super::*;
    use crate::probe_modules::LinkAddrs;

    const IFACE_MAC: [u8; 6] = [0x02, 0x42, 0xac, 0x11, 0x00, 0x02];

    struct Fields {
        src_mac: [u8; 6],
        src_ip: Ipv4Addr,
        dst_ip: Ipv4Addr,
        tcp: Option<(u16, u16)>,
        udp: Option<(u16, u16)>,
    }

    fn fields(frame: &[u8]) -> Fields {
        let sliced = SlicedPacket::from_ethernet(frame).unwrap();
        let src_mac = match &sliced.link {
            Some(LinkSlice::Ethernet2(eth)) => eth.source(),
            _ => panic!("no ethernet header"),
        };
        let (src_ip, dst_ip) = match &sliced.net {
            Some(NetSlice::Ipv4(ipv4)) => (ipv4.header().source_addr(), ipv4.header().destination_addr()),
            _ => panic!("no ipv4 header"),
        };
        let (tcp, udp) = match &sliced.transport {
            Some(TransportSlice::Tcp(tcp)) => (Some((tcp.source_port(), tcp.destination_port())), None),
            Some(TransportSlice::Udp(udp)) => (None, Some((udp.source_port(), udp.destination_port()))),
            _ => (None, None),
        };
        Fields {
            src_mac,
            src_ip,
            dst_ip,
            tcp,
            udp,
        }
    }

    fn frames() -> Vec<Vec<u8>> {
        let link = LinkAddrs {
            source: MacAddress::new(IFACE_MAC),
            destination: MacAddress::broadcast(),
        };
        filter_probes()
            .iter()
            .map(|p| p.make_packet(&link).unwrap())
            .collect()
    }

    #[test]
    fn order_is_fixed() {
        let names: Vec<_> = filter_probes().iter().map(|p| p.name).collect();
        assert_eq!(names, ["IP Filter", "UDP Filter", "MAC Filter", "Valid Packet"]);
    }

    #[test]
    fn ip_filter_probe() {
        let f = fields(&frames()[0]);
        assert_eq!(f.src_mac, IFACE_MAC);
        assert_eq!(f.src_ip, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(f.dst_ip, Ipv4Addr::new(192, 168, 1, 200));
        assert_eq!(f.tcp, Some((12345, 80)));
        assert_eq!(f.udp, None);
    }

    #[test]
    fn udp_filter_probe() {
        let f = fields(&frames()[1]);
        assert_eq!(f.src_mac, IFACE_MAC);
        assert_eq!(f.src_ip, Ipv4Addr::new(192, 168, 1, 100));
        assert_eq!(f.dst_ip, Ipv4Addr::new(192, 168, 1, 200));
        assert_eq!(f.tcp, None);
        assert_eq!(f.udp, Some((12345, 53)));
    }

    #[test]
    fn mac_filter_probe() {
        let f = fields(&frames()[2]);
        assert_eq!(f.src_mac, [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
        assert_eq!(f.src_ip, Ipv4Addr::new(192, 168, 1, 100));
        assert_eq!(f.dst_ip, Ipv4Addr::new(192, 168, 1, 200));
        assert_eq!(f.tcp, Some((12345, 80)));
    }

    #[test]
    fn valid_probe() {
        let f = fields(&frames()[3]);
        assert_eq!(f.src_mac, [0x00, 0xaa, 0xbb, 0xcc, 0xdd, 0xee]);
        assert_eq!(f.src_ip, Ipv4Addr::new(192, 168, 1, 100));
        assert_eq!(f.dst_ip, Ipv4Addr::new(192, 168, 1, 200));
        assert_eq!(f.tcp, Some((12345, 80)));
    }

    #[test]
    fn only_last_probe_should_pass() {
        let expected: Vec<_> = filter_probes().iter().map(|p| p.expected).collect();
        assert_eq!(
            expected,
            [
                Disposition::Dropped,
                Disposition::Dropped,
                Disposition::Dropped,
                Disposition::Accepted
            ]
        );
    }
}
