use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("interface {name} is not available")]
    Interface {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to create raw socket, are you running as root?")]
    Socket(#[source] io::Error),

    #[error("failed to send {probe} probe")]
    Transmit {
        probe: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to build frame: {0}")]
    Build(String),

    #[error("could not parse frame: {0}")]
    Parse(String),
}
