use std::io;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::error::ProbeError;
use crate::net::socket::RawEthSocket;
use crate::net::{get_interface_index, MacAddress};
use crate::probe_modules::{describe_packet, LinkAddrs, Probe};
use crate::state::SenderState;

/// Where built frames end up.
pub trait FrameSink {
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// Injects frames on an interface through an `AF_PACKET` socket.
pub struct WireSink {
    socket: RawEthSocket,
    interface_index: i32,
    destination: MacAddress,
}

impl WireSink {
    pub fn open(interface: &str, destination: MacAddress) -> Result<Self, ProbeError> {
        let interface_index = get_interface_index(interface)?;
        let socket = RawEthSocket::new().map_err(ProbeError::Socket)?;
        debug!("Opened raw socket on {interface} (ifindex {interface_index})");
        Ok(Self {
            socket,
            interface_index,
            destination,
        })
    }
}

impl FrameSink for WireSink {
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.socket
            .sendto(frame, self.interface_index, &self.destination)
    }
}

/// Prints frames instead of sending them.
pub struct DryRunSink {
    quiet: bool,
}

impl DryRunSink {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl FrameSink for DryRunSink {
    fn send_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        if !self.quiet {
            let summary = describe_packet(frame)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            println!("{summary}");
        }
        Ok(())
    }
}

pub struct Sender {
    delay: Duration,
    link: LinkAddrs,
    state: SenderState,
}

impl Sender {
    pub fn new(delay: Duration, link: LinkAddrs) -> Self {
        if delay.is_zero() {
            warn!("Inter-probe delay is zero, the filter may log probes out of step with the output");
        }

        Self {
            delay,
            link,
            state: SenderState::default(),
        }
    }

    pub fn state(&self) -> &SenderState {
        &self.state
    }

    /// Sends every probe in order, pausing for the configured delay after
    /// each one. The first failure stops the run.
    pub fn run(&mut self, probes: &[Probe], sink: &mut dyn FrameSink) -> Result<(), ProbeError> {
        debug!("Sender started with {} probes", probes.len());
        self.state.start = Instant::now();

        for probe in probes {
            println!("{}", probe.announcement());

            let frame = probe.make_packet(&self.link)?;
            if log::log_enabled!(log::Level::Debug) {
                match describe_packet(&frame) {
                    Ok(summary) => debug!("{summary}"),
                    Err(e) => debug!("{} bytes, {e}", frame.len()),
                }
            }

            sink.send_frame(&frame)
                .map_err(|source| ProbeError::Transmit {
                    probe: probe.name,
                    source,
                })?;
            self.state.sent += 1;
            println!("Sent 1 packets.");

            std::thread::sleep(self.delay);
        }

        self.state.complete = true;
        self.state.finish = Some(Instant::now());
        info!(
            "Sent {} probes in {:.1}s",
            self.state.sent,
            self.state.elapsed().as_secs_f64()
        );
        Ok(())
    }
}
