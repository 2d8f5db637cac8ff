//! IEEE 802.3 frames with LLC and SNAP encapsulation.
//!
//! An 802.3 frame replaces the Ethernet II EtherType with a length field that
//! counts the bytes after it: the LLC header, the optional SNAP extension and
//! the payload.
//!
//! | Offset   | Size | Field                                        |
//! |----------|------|----------------------------------------------|
//! | 0        | 6    | Destination address                          |
//! | 6        | 6    | Source address                               |
//! | 12       | 2    | Length, big-endian, at most 1500             |
//! | 14       | 3    | LLC header                                   |
//! | 17       | 5    | SNAP extension, iff both LLC SAPs are `0xAA` |
//! | 17 or 22 | ...  | Payload                                      |
//!
//! The length field is derived from the payload and the encapsulation: it
//! equals the payload length, plus 5 when the SNAP extension is present.
//! Note that the 3 LLC bytes are not counted, they belong to the fixed
//! 17-byte prefix. No frame check sequence is produced or consumed here, see
//! [`crate::fcs`] for that.
//!
//! # Example
//!
//! ```rust
//! use ethdot3::dot3::{Encap, Frame};
//! use ethdot3::ether::EtherAddr;
//! use ethdot3::llc::Sap;
//!
//! let frame = Frame::new(
//!     EtherAddr::parse_from("aa:bb:cc:dd:ee:ff").unwrap(),
//!     EtherAddr::parse_from("11:22:33:44:55:66").unwrap(),
//!     Encap::llc(Sap::BPDU, Sap::BPDU),
//!     vec![0xff; 10],
//! );
//! assert_eq!(frame.len(), 10);
//! assert_eq!(frame.total_len(), 27);
//!
//! let bytes = frame.marshal_binary()?;
//! assert_eq!(&bytes[12..17], &[0x00, 0x0a, 0x42, 0x42, 0x03]);
//! assert_eq!(Frame::parse(&bytes)?, frame);
//! # Ok::<(), ethdot3::Error>(())
//! ```

/// The largest value of the 802.3 length field.
pub const MAX_LENGTH: usize = 1500;
/// Addresses, length field and LLC header.
pub const FRAME_PREFIX_LEN: usize = 17;
/// [`FRAME_PREFIX_LEN`] plus the SNAP extension.
pub const SNAP_PREFIX_LEN: usize = 22;
/// The shortest input accepted as a frame carrying a SNAP extension.
pub const SNAP_MIN_FRAME_LEN: usize = 26;

mod header;
pub use header::{Dot3Header, DOT3_HEADER_LEN, DOT3_HEADER_TEMPLATE};

mod encap;
pub use encap::Encap;

mod frame;
pub use frame::Frame;
