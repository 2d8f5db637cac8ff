use log::debug;

use super::{Sap, UI_CONTROL};
use crate::{Error, Result};

/// A constant that defines the fixed byte length of the Llc header.
pub const LLC_HEADER_LEN: usize = 3;
/// A fixed Llc header, addressed to the BPDU SAP.
pub const LLC_HEADER_TEMPLATE: LlcHeader<[u8; 3]> = LlcHeader {
    buf: [0x42, 0x42, UI_CONTROL],
};

/// A container of the 3-byte LLC header.
///
/// `T` is either a borrowed slice (a view over a frame) or a `[u8; 3]` that
/// owns the header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LlcHeader<T> {
    buf: T,
}

impl<T: AsRef<[u8]>> LlcHeader<T> {
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
        if remaining_len < LLC_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }

    /// The header bytes.
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.as_ref()[0..LLC_HEADER_LEN]
    }

    /// The destination service access point.
    #[inline]
    pub fn dsap(&self) -> Sap {
        Sap::from(self.buf.as_ref()[0])
    }

    /// The source service access point.
    #[inline]
    pub fn ssap(&self) -> Sap {
        Sap::from(self.buf.as_ref()[1])
    }

    /// The control field.
    #[inline]
    pub fn control(&self) -> u8 {
        self.buf.as_ref()[2]
    }

    /// Whether both SAP fields carry the SNAP extension marker.
    #[inline]
    pub fn is_snap(&self) -> bool {
        self.dsap() == Sap::SNAP && self.ssap() == Sap::SNAP
    }

    /// Whether the control field is a one-byte unnumbered-format control.
    #[inline]
    pub fn is_unnumbered(&self) -> bool {
        self.control() & 0x03 == 0x03
    }

    /// Copy the header into an owned value.
    #[inline]
    pub fn to_owned_header(&self) -> LlcHeader<[u8; 3]> {
        let mut buf = [0; LLC_HEADER_LEN];
        buf.copy_from_slice(self.header_slice());
        LlcHeader { buf }
    }
}

impl<T: AsMut<[u8]>> LlcHeader<T> {
    /// The mutable header bytes.
    #[inline]
    pub fn header_slice_mut(&mut self) -> &mut [u8] {
        &mut self.buf.as_mut()[0..LLC_HEADER_LEN]
    }

    /// Set the destination service access point.
    #[inline]
    pub fn set_dsap(&mut self, value: Sap) {
        self.buf.as_mut()[0] = value.raw();
    }

    /// Set the source service access point.
    #[inline]
    pub fn set_ssap(&mut self, value: Sap) {
        self.buf.as_mut()[1] = value.raw();
    }

    /// Set the control field.
    #[inline]
    pub fn set_control(&mut self, value: u8) {
        self.buf.as_mut()[2] = value;
    }
}

impl LlcHeader<[u8; 3]> {
    /// Create an owned header from its three fields.
    #[inline]
    pub const fn new(dsap: Sap, ssap: Sap, control: u8) -> Self {
        Self {
            buf: [dsap.raw(), ssap.raw(), control],
        }
    }

    /// The header that announces a SNAP extension.
    #[inline]
    pub const fn snap(control: u8) -> Self {
        Self::new(Sap::SNAP, Sap::SNAP, control)
    }

    /// Decode a header from exactly 3 bytes.
    ///
    /// Fails if `bytes` has the wrong size or the control field is not an
    /// unnumbered-format control, which is the only kind that fits in a
    /// 3-byte header.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != LLC_HEADER_LEN {
            return Err(Error::HeaderLen {
                header: "llc",
                need: LLC_HEADER_LEN,
                got: bytes.len(),
            });
        }
        let header = LlcHeader::parse_unchecked(bytes).to_owned_header();
        if !header.is_unnumbered() {
            debug!("rejecting llc header with control {:#04x}", header.control());
            return Err(Error::MalformedLlc(header.control()));
        }
        Ok(header)
    }

    /// Encode the header into its 3 wire bytes.
    #[inline]
    pub const fn encode(&self) -> [u8; 3] {
        self.buf
    }
}

impl Default for LlcHeader<[u8; 3]> {
    fn default() -> Self {
        Self::new(Sap::NULL, Sap::NULL, UI_CONTROL)
    }
}
