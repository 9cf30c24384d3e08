//! IPv4 CIDR block to integer range conversion.
//!
//! Provides [`IpRange`] and the helpers used to turn a MaxMind `network`
//! column (`a.b.c.d/n`) into the first and last address of the block.

use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a netmask as u32.
///
/// # Examples
/// ```
/// use geoip_csv_prep::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err(format!("Prefix length /{len} is too long").into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse a dotted-quad address into its big-endian integer value.
///
/// Anything that is not an IPv4 address yields 0, except an IPv4-mapped
/// IPv6 literal (`::ffff:a.b.c.d`) which yields the embedded address.
pub fn ip_to_u32(addr: &str) -> u32 {
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => u32::from(v4),
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().map(u32::from).unwrap_or(0),
        Err(_) => {
            log::debug!("ip_to_u32: not an IPv4 address '{addr}', using 0");
            0
        }
    }
}

/// Inclusive integer bounds of an IPv4 CIDR block.
///
/// Network and broadcast addresses are part of the range.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Default, Copy, Clone, Hash)]
pub struct IpRange {
    pub first: u32,
    pub last: u32,
}

impl IpRange {
    /// Build the range for `addr` masked to `len` bits.
    pub fn from_addr(addr: u32, len: u8) -> Result<IpRange, Box<dyn Error>> {
        let mask = get_cidr_mask(len)?;
        Ok(IpRange {
            first: addr & mask,
            last: addr | !mask,
        })
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        (self.last as u64) - (self.first as u64) + 1
    }

    /// Lowest (network) address.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.first)
    }

    /// Highest (broadcast) address.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.last)
    }
}

impl std::fmt::Display for IpRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.lo(), self.hi())
    }
}

/// Compute the first and last address of a CIDR string like `"1.2.3.0/24"`.
///
/// Input without a `/`, or with a prefix that is not an integer in 0..=32,
/// gives the `(0, 0)` range. An unparseable address is treated as 0.
pub fn ip_range(cidr: &str) -> IpRange {
    let mut parts = cidr.split('/');
    let (addr, prefix) = match (parts.next(), parts.next()) {
        (Some(addr), Some(prefix)) => (addr, prefix),
        _ => {
            log::debug!("ip_range: no prefix in '{cidr}'");
            return IpRange::default();
        }
    };

    // Digits only, `parse` alone would also take a leading '+'.
    let digits_only = prefix.bytes().all(|b| b.is_ascii_digit());
    let len = match prefix.parse::<u8>() {
        Ok(len) if digits_only && len <= MAX_LENGTH => len,
        _ => {
            log::debug!("ip_range: invalid prefix length in '{cidr}'");
            return IpRange::default();
        }
    };

    IpRange::from_addr(ip_to_u32(addr), len).unwrap_or_default()
}
