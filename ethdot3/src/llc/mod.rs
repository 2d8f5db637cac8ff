//! LLC (Logical Link Control) header, as defined in IEEE 802.2.
//!
//! An 802.3 frame carries a 3-byte LLC header right after its length field:
//!
//! - **DSAP**: destination service access point
//! - **SSAP**: source service access point
//! - **Control**: a one-byte unnumbered-format control field
//!
//! When both SAPs hold [`Sap::SNAP`], the LLC header is followed by a 5-byte
//! SNAP extension (see [`crate::snap`]).
//!
//! # Example
//!
//! ```rust
//! use ethdot3::llc::*;
//!
//! let bytes = [0x42, 0x42, 0x03];
//! let llc = LlcHeader::decode(&bytes[..])?;
//! assert_eq!(llc.dsap(), Sap::BPDU);
//! assert_eq!(llc.control(), UI_CONTROL);
//! assert!(!llc.is_snap());
//! assert_eq!(llc.encode(), bytes);
//! # Ok::<(), ethdot3::Error>(())
//! ```

enum_sim! {
    /// An enum-like type for the service access point values of an LLC header.
    pub struct Sap (u8) {
        /// The null SAP.
        NULL = 0x00,
        /// Internet Protocol.
        IP = 0x06,
        /// Spanning tree bridge protocol data units.
        BPDU = 0x42,
        /// The SNAP extension marker.
        SNAP = 0xAA,
        /// Novell IPX.
        IPX = 0xE0,
        /// NetBIOS.
        NETBIOS = 0xF0,
        /// Global DSAP, addressing every SAP.
        GLOBAL = 0xFF,
    }
}

/// The unnumbered-information control value.
pub const UI_CONTROL: u8 = 0x03;

mod header;
pub use header::{LlcHeader, LLC_HEADER_LEN, LLC_HEADER_TEMPLATE};
