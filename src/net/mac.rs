use std::{fmt, str::FromStr};

use eui48::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MacAddress(eui48::MacAddress);

impl MacAddress {
    pub fn new(bytes: [u8; 6]) -> Self {
        MacAddress(eui48::MacAddress::new(bytes))
    }

    pub fn broadcast() -> Self {
        MacAddress(eui48::MacAddress::broadcast())
    }

    pub fn zero() -> Self {
        MacAddress(eui48::MacAddress::nil())
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0.to_array()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        eui48::MacAddress::parse_str(s).map(Self)
    }
}

// eui48 displays hyphen-separated by default, kernel logs use colons
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colon_notation() {
        let mac: MacAddress = "00:aa:bb:cc:dd:ee".parse().unwrap();
        assert_eq!(mac.octets(), [0x00, 0xaa, 0xbb, 0xcc, 0xdd, 0xee]);
        assert_eq!(mac.to_string(), "00:aa:bb:cc:dd:ee");
    }

    #[test]
    fn rejects_garbage() {
        assert!("00:11:22".parse::<MacAddress>().is_err());
        assert!("not a mac".parse::<MacAddress>().is_err());
    }

    #[test]
    fn broadcast_is_all_ones() {
        assert_eq!(MacAddress::broadcast().octets(), [0xff; 6]);
        assert_eq!(MacAddress::zero().octets(), [0; 6]);
    }
}
