//! Hardware addresses and EtherType code points.

use core::fmt;
use core::str::FromStr;

enum_sim! {
    /// An enum-like type for the protocol identifiers carried by a SNAP
    /// extension whose OUI is zero (RFC 1042 encapsulation).
    pub struct EtherType (u16) {
        /// Payload is Ipv4 protocol.
        IPV4 = 0x0800,
        /// Payload is Arp protocol.
        ARP = 0x0806,
        /// Payload is AppleTalk Arp protocol.
        AARP = 0x80F3,
        /// Payload is Ipv6 protocol.
        IPV6 = 0x86DD,
    }
}

/// A six-octet IEEE 802 hardware address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// Construct an address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// Return the address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the group bit in the first octet is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether the 'locally administered' bit in the first octet is set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    ///
    /// Every group must hold exactly two hex digits.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut result = [0; 6];
        let mut groups = s.as_ref().split(':');
        for octet in result.iter_mut() {
            let group = groups.next()?;
            if group.len() != 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            *octet = u8::from_str_radix(group, 16).ok()?;
        }
        match groups.next() {
            Some(_) => None,
            None => Some(Self(result)),
        }
    }
}

impl From<[u8; 6]> for EtherAddr {
    fn from(value: [u8; 6]) -> Self {
        Self(value)
    }
}

quick_error! {
    /// The error returned when a string is not a colon-separated hardware address.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AddrParseError {
        /// The string is not six groups of two hex digits.
        Syntax {
            display("invalid hardware address syntax")
        }
    }
}

impl FromStr for EtherAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from(s).ok_or(AddrParseError::Syntax)
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}
