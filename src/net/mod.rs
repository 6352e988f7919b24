pub mod mac;
pub mod socket;

use std::{fs, io, path::PathBuf};

pub use mac::MacAddress;

use crate::error::ProbeError;

fn sysfs_attr(name: &str, attr: &str) -> Result<String, ProbeError> {
    let path: PathBuf = ["/sys/class/net", name, attr].iter().collect();
    fs::read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|source| ProbeError::Interface {
            name: name.to_string(),
            source,
        })
}

fn invalid(name: &str, msg: String) -> ProbeError {
    ProbeError::Interface {
        name: name.to_string(),
        source: io::Error::new(io::ErrorKind::InvalidData, msg),
    }
}

pub fn get_interface_index(name: &str) -> Result<i32, ProbeError> {
    // Reject anything that would escape /sys/class/net
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        return Err(invalid(name, format!("invalid interface name {name:?}")));
    }

    let raw = sysfs_attr(name, "ifindex")?;
    raw.parse()
        .map_err(|e| invalid(name, format!("bad ifindex {raw:?}: {e}")))
}

pub fn get_interface_mac(name: &str) -> Result<MacAddress, ProbeError> {
    let raw = sysfs_attr(name, "address")?;
    raw.parse()
        .map_err(|e| invalid(name, format!("bad hardware address {raw:?}: {e}")))
}
