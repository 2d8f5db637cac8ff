use crate::llc::{LlcHeader, Sap, LLC_HEADER_LEN, UI_CONTROL};
use crate::snap::{SnapHeader, SNAP_HEADER_LEN};
use crate::{Error, Result};

/// The encapsulation that follows the 802.3 length field.
///
/// The SNAP extension is present exactly when both LLC SAP fields carry
/// [`Sap::SNAP`]. The `Snap` variant always implies those SAP values, so only
/// its control byte is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encap {
    /// A plain LLC header. Its SAPs must not both be [`Sap::SNAP`].
    Llc(LlcHeader<[u8; 3]>),
    /// An LLC header with both SAPs set to [`Sap::SNAP`], followed by a SNAP
    /// extension.
    Snap {
        /// The LLC control field.
        control: u8,
        /// The SNAP extension.
        snap: SnapHeader<[u8; 5]>,
    },
}

impl Encap {
    /// A plain LLC encapsulation with an unnumbered-information control.
    pub const fn llc(dsap: Sap, ssap: Sap) -> Self {
        Encap::Llc(LlcHeader::new(dsap, ssap, UI_CONTROL))
    }

    /// A SNAP encapsulation with an unnumbered-information control.
    pub const fn snap(snap: SnapHeader<[u8; 5]>) -> Self {
        Encap::Snap {
            control: UI_CONTROL,
            snap,
        }
    }

    /// Select the variant from a decoded LLC header and, when that header
    /// announces it, the SNAP extension.
    ///
    /// Fails with [`Error::SnapMismatch`] when the presence of `snap` does not
    /// agree with the LLC SAP fields.
    pub fn from_parts(llc: LlcHeader<[u8; 3]>, snap: Option<SnapHeader<[u8; 5]>>) -> Result<Self> {
        match (llc.is_snap(), snap) {
            (true, Some(snap)) => Ok(Encap::Snap {
                control: llc.control(),
                snap,
            }),
            (false, None) => Ok(Encap::Llc(llc)),
            _ => Err(Error::SnapMismatch),
        }
    }

    /// Whether the SNAP extension is present.
    #[inline]
    pub fn is_snap(&self) -> bool {
        matches!(self, Encap::Snap { .. })
    }

    /// The LLC header as it appears on the wire.
    #[inline]
    pub fn llc_header(&self) -> LlcHeader<[u8; 3]> {
        match self {
            Encap::Llc(llc) => *llc,
            Encap::Snap { control, .. } => LlcHeader::snap(*control),
        }
    }

    /// The SNAP extension, if present.
    #[inline]
    pub fn snap_header(&self) -> Option<&SnapHeader<[u8; 5]>> {
        match self {
            Encap::Llc(_) => None,
            Encap::Snap { snap, .. } => Some(snap),
        }
    }

    /// The bytes added on top of the payload length in the 802.3 length
    /// field: 5 with SNAP, 0 otherwise.
    #[inline]
    pub fn extension_len(&self) -> usize {
        if self.is_snap() {
            SNAP_HEADER_LEN
        } else {
            0
        }
    }

    /// The wire size of the encapsulation headers: 3, or 8 with SNAP.
    #[inline]
    pub fn header_len(&self) -> usize {
        LLC_HEADER_LEN + self.extension_len()
    }

    /// Check that the encapsulation can be encoded and return the LLC bytes.
    pub(crate) fn encode_llc(&self) -> Result<[u8; 3]> {
        let llc = self.llc_header();
        if let Encap::Llc(header) = self {
            if header.is_snap() {
                return Err(Error::SnapMismatch);
            }
        }
        if !llc.is_unnumbered() {
            return Err(Error::MalformedLlc(llc.control()));
        }
        Ok(llc.encode())
    }
}

impl Default for Encap {
    fn default() -> Self {
        Encap::Llc(LlcHeader::default())
    }
}
