//! SNAP (Sub-Network Access Protocol) extension, as defined in IEEE 802.
//!
//! The 5-byte extension follows an LLC header whose DSAP and SSAP both equal
//! [`Sap::SNAP`](crate::llc::Sap::SNAP). It carries a 3-byte organizationally
//! unique identifier (OUI) and a 2-byte protocol id. With OUI `00-00-00`
//! (RFC 1042) the protocol id is an EtherType.

/// RFC 1042 encapsulation, the protocol id is an EtherType.
pub const OUI_RFC1042: u32 = 0x00_00_00;
/// Cisco, used by CDP, VTP and DTP.
pub const OUI_CISCO: u32 = 0x00_00_0c;
/// IEEE 802.1H bridge tunnel encapsulation.
pub const OUI_BRIDGE_TUNNEL: u32 = 0x00_00_f8;

mod header;
pub use header::{SnapHeader, SNAP_HEADER_LEN, SNAP_HEADER_TEMPLATE};
