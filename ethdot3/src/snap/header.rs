use byteorder::{ByteOrder, NetworkEndian};

use super::OUI_RFC1042;
use crate::ether::EtherType;
use crate::{Error, Result};

/// A constant that defines the fixed byte length of the Snap header.
pub const SNAP_HEADER_LEN: usize = 5;
/// A fixed Snap header, RFC 1042 encapsulated Ipv4.
pub const SNAP_HEADER_TEMPLATE: SnapHeader<[u8; 5]> = SnapHeader {
    buf: [0x00, 0x00, 0x00, 0x08, 0x00],
};

/// A container of the 5-byte SNAP extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapHeader<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> SnapHeader<T> {
    /// Wrap `buf` without checking its length.
    #[inline]
    pub fn parse_unchecked(buf: T) -> Self {
        Self { buf }
    }

    /// The underlying buffer.
    #[inline]
    pub fn buf(&self) -> &T {
        &self.buf
    }

    /// Release the underlying buffer.
    #[inline]
    pub fn release(self) -> T {
        self.buf
    }

    /// Wrap `buf`, giving it back if it is shorter than the header.
    #[inline]
    pub fn parse(buf: T) -> core::result::Result<Self, T> {
        let remaining_len = buf.as_ref().len();
        if remaining_len < SNAP_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }

    /// The header bytes.
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..SNAP_HEADER_LEN]
    }

    /// The 24-bit organizationally unique identifier.
    #[inline]
    pub fn oui(&self) -> u32 {
        NetworkEndian::read_u24(&self.buf.as_ref()[0..3])
    }

    /// The protocol id.
    #[inline]
    pub fn protocol_id(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[3..5])
    }

    /// The protocol id read as an EtherType, for RFC 1042 encapsulation only.
    #[inline]
    pub fn ethertype(&self) -> Option<EtherType> {
        (self.oui() == OUI_RFC1042).then(|| EtherType::from(self.protocol_id()))
    }

    /// Copy the header into an owned value.
    #[inline]
    pub fn to_owned_header(&self) -> SnapHeader<[u8; 5]> {
        let mut buf = [0; SNAP_HEADER_LEN];
        buf.copy_from_slice(self.header_slice());
        SnapHeader { buf }
    }
}

impl<T: AsMut<[u8]>> SnapHeader<T> {
    /// The mutable header bytes.
    #[inline]
    pub fn header_slice_mut(&mut self) -> &mut [u8] {
        &mut self.buf.as_mut()[0..SNAP_HEADER_LEN]
    }

    /// Set the organizationally unique identifier.
    ///
    /// # Panics
    /// The function panics if `value` does not fit in 24 bits.
    #[inline]
    pub fn set_oui(&mut self, value: u32) {
        assert!(value <= 0xffffff);
        NetworkEndian::write_u24(&mut self.buf.as_mut()[0..3], value);
    }

    /// Set the protocol id.
    #[inline]
    pub fn set_protocol_id(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[3..5], value);
    }
}

impl SnapHeader<[u8; 5]> {
    /// Create an owned header from an OUI and a protocol id.
    ///
    /// # Panics
    /// The function panics if `oui` does not fit in 24 bits.
    pub fn new(oui: u32, protocol_id: u16) -> Self {
        let mut header = Self {
            buf: [0; SNAP_HEADER_LEN],
        };
        header.set_oui(oui);
        header.set_protocol_id(protocol_id);
        header
    }

    /// An RFC 1042 header carrying `ethertype`.
    pub fn rfc1042(ethertype: EtherType) -> Self {
        Self::new(OUI_RFC1042, ethertype.raw())
    }

    /// Decode a header from exactly 5 bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SNAP_HEADER_LEN {
            return Err(Error::HeaderLen {
                header: "snap",
                need: SNAP_HEADER_LEN,
                got: bytes.len(),
            });
        }
        Ok(SnapHeader::parse_unchecked(bytes).to_owned_header())
    }

    /// Encode the header into its 5 wire bytes.
    #[inline]
    pub const fn encode(&self) -> [u8; 5] {
        self.buf
    }
}
