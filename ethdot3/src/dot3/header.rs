use byteorder::{ByteOrder, NetworkEndian};

use super::MAX_LENGTH;
use crate::ether::EtherAddr;

/// A constant that defines the fixed byte length of the 802.3 MAC header.
pub const DOT3_HEADER_LEN: usize = 14;
/// A fixed 802.3 MAC header with zeroed addresses and length.
pub const DOT3_HEADER_TEMPLATE: Dot3Header<[u8; 14]> = Dot3Header {
    buf: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
};

/// A container of the 14-byte 802.3 MAC header: destination, source and the
/// length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dot3Header<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> Dot3Header<T> {
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
    pub fn parse(buf: T) -> Result<Self, T> {
        let remaining_len = buf.as_ref().len();
        if remaining_len < DOT3_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }

    /// The header bytes.
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..DOT3_HEADER_LEN]
    }

    /// The destination address.
    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.as_ref()[0..6])
    }

    /// The source address.
    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        EtherAddr::from_bytes(&self.buf.as_ref()[6..12])
    }

    /// The raw length field.
    #[inline]
    pub fn length(&self) -> u16 {
        NetworkEndian::read_u16(&self.buf.as_ref()[12..14])
    }

    /// Whether the length field is a valid 802.3 length rather than an
    /// out-of-range value (such as an Ethernet II EtherType).
    #[inline]
    pub fn has_valid_length(&self) -> bool {
        self.length() as usize <= MAX_LENGTH
    }
}

impl<T: AsMut<[u8]>> Dot3Header<T> {
    /// The mutable header bytes.
    #[inline]
    pub fn header_slice_mut(&mut self) -> &mut [u8] {
        &mut self.buf.as_mut()[0..DOT3_HEADER_LEN]
    }

    /// Set the destination address.
    #[inline]
    pub fn set_dst_addr(&mut self, value: EtherAddr) {
        (&mut self.buf.as_mut()[0..6]).copy_from_slice(value.as_bytes());
    }

    /// Set the source address.
    #[inline]
    pub fn set_src_addr(&mut self, value: EtherAddr) {
        (&mut self.buf.as_mut()[6..12]).copy_from_slice(value.as_bytes());
    }

    /// Set the raw length field.
    #[inline]
    pub fn set_length(&mut self, value: u16) {
        NetworkEndian::write_u16(&mut self.buf.as_mut()[12..14], value);
    }
}
