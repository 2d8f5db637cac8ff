//! Optional frame check sequence post-processing.
//!
//! The 802.3 codec in [`crate::dot3`] never touches the trailing FCS. Callers
//! that need it append or verify it as a separate step, with any
//! [`FrameCheck`] implementation. With the `fcs` feature, [`Crc32`] provides
//! the IEEE 802.3 CRC-32.

use byteorder::{ByteOrder, LittleEndian};
use bytes::BufMut;
use log::debug;

use crate::dot3::Frame;
use crate::{Error, Result};

/// The byte length of the 802.3 FCS trailer.
pub const FCS_LEN: usize = 4;

/// A frame check sequence algorithm.
pub trait FrameCheck {
    /// The byte length of the trailer, between 1 and 4. Only the low `LEN`
    /// bytes of [`FrameCheck::compute`] go on the wire.
    const LEN: usize = FCS_LEN;

    /// Compute the check value over the encoded frame, FCS excluded.
    fn compute(&self, frame: &[u8]) -> u32;
}

impl<C: FrameCheck + ?Sized> FrameCheck for &C {
    const LEN: usize = C::LEN;

    #[inline]
    fn compute(&self, frame: &[u8]) -> u32 {
        (**self).compute(frame)
    }
}

/// The IEEE 802.3 CRC-32.
#[cfg(feature = "fcs")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Crc32;

#[cfg(feature = "fcs")]
const ETHERNET_CRC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

#[cfg(feature = "fcs")]
impl FrameCheck for Crc32 {
    #[inline]
    fn compute(&self, frame: &[u8]) -> u32 {
        ETHERNET_CRC.checksum(frame)
    }
}

// The check value as carried by a trailer of `len` bytes.
#[inline]
fn truncate(value: u32, len: usize) -> u32 {
    if len >= FCS_LEN {
        value
    } else {
        value & ((1u32 << (8 * len)) - 1)
    }
}

/// Append the FCS of `buf` to `buf`.
///
/// The value goes on the wire least significant byte first.
///
/// # Panics
/// The function panics if `C::LEN` is not between 1 and 4.
pub fn append_fcs<C: FrameCheck>(buf: &mut Vec<u8>, check: &C) {
    assert!(C::LEN >= 1 && C::LEN <= FCS_LEN);
    let fcs = check.compute(&buf[..]);
    buf.put_uint_le(fcs as u64, C::LEN);
}

/// Verify the trailing FCS of `buf` and return the frame without it.
///
/// # Panics
/// The function panics if `C::LEN` is not between 1 and 4.
pub fn strip_fcs<'a, C: FrameCheck>(buf: &'a [u8], check: &C) -> Result<&'a [u8]> {
    assert!(C::LEN >= 1 && C::LEN <= FCS_LEN);
    if buf.len() < C::LEN {
        return Err(Error::FrameTooShort {
            need: C::LEN,
            got: buf.len(),
        });
    }
    let (frame, trailer) = buf.split_at(buf.len() - C::LEN);
    let found = LittleEndian::read_uint(trailer, C::LEN) as u32;
    let expected = truncate(check.compute(frame), C::LEN);
    if expected != found {
        debug!("fcs mismatch: computed {:#010x}, found {:#010x}", expected, found);
        return Err(Error::FcsMismatch { expected, found });
    }
    Ok(frame)
}

impl Frame {
    /// Encode the frame and append its FCS.
    pub fn marshal_with_fcs<C: FrameCheck>(&self, check: &C) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.total_len() + C::LEN);
        self.encode_to(&mut buf)?;
        append_fcs(&mut buf, check);
        Ok(buf)
    }

    /// Verify and strip the trailing FCS of `buf`, then decode the frame.
    pub fn parse_with_fcs<C: FrameCheck>(buf: &[u8], check: &C) -> Result<Self> {
        Self::parse(strip_fcs(buf, check)?)
    }
}

#[cfg(all(test, feature = "fcs"))]
mod tests {
    use super::*;
    use crate::dot3::Encap;
    use crate::ether::EtherAddr;
    use crate::llc::Sap;

    fn frame() -> Frame {
        Frame::new(
            EtherAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
            EtherAddr([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
            Encap::llc(Sap::NETBIOS, Sap::NETBIOS),
            vec![0xff; 10],
        )
    }

    #[test]
    fn crc32_check_value() {
        assert_eq!(Crc32.compute(b"123456789"), 0xcbf43926);
    }

    #[test]
    fn append_and_strip() {
        let mut buf = b"123456789".to_vec();
        append_fcs(&mut buf, &Crc32);
        assert_eq!(&buf[9..], &[0x26, 0x39, 0xf4, 0xcb][..]);
        assert_eq!(strip_fcs(&buf[..], &Crc32), Ok(&b"123456789"[..]));

        buf[0] ^= 0x01;
        assert!(matches!(
            strip_fcs(&buf[..], &Crc32),
            Err(Error::FcsMismatch { found: 0xcbf43926, .. })
        ));
        assert_eq!(
            strip_fcs(&buf[..3], &Crc32),
            Err(Error::FrameTooShort { need: 4, got: 3 })
        );
    }

    #[test]
    fn frame_with_fcs() {
        let frame = frame();
        let bytes = frame.marshal_with_fcs(&Crc32).unwrap();
        assert_eq!(bytes.len(), frame.total_len() + FCS_LEN);
        assert_eq!(&bytes[..frame.total_len()], &frame.marshal_binary().unwrap()[..]);
        assert_eq!(Frame::parse_with_fcs(&bytes[..], &Crc32), Ok(frame.clone()));

        let mut corrupted = bytes.clone();
        corrupted[20] = 0x00;
        assert!(matches!(
            Frame::parse_with_fcs(&corrupted[..], &Crc32),
            Err(Error::FcsMismatch { .. })
        ));

        // without stripping, the trailer is read as padding
        assert_eq!(Frame::parse(&bytes[..]), Ok(frame));
    }

    // A one-byte trailer holding the xor of every frame byte.
    struct Xor;

    impl FrameCheck for Xor {
        const LEN: usize = 1;

        fn compute(&self, frame: &[u8]) -> u32 {
            frame.iter().fold(0, |acc, b| acc ^ *b as u32)
        }
    }

    // A two-byte trailer holding the low half of the CRC-32.
    struct ShortCrc;

    impl FrameCheck for ShortCrc {
        const LEN: usize = 2;

        fn compute(&self, frame: &[u8]) -> u32 {
            Crc32.compute(frame)
        }
    }

    #[test]
    fn pluggable_check() {
        let frame = frame();
        let bytes = frame.marshal_with_fcs(&Xor).unwrap();
        assert_eq!(bytes.len(), frame.total_len() + 1);
        let xor = bytes[..frame.total_len()].iter().fold(0, |acc, b| acc ^ b);
        assert_eq!(bytes[frame.total_len()], xor);
        assert_eq!(Frame::parse_with_fcs(&bytes[..], &Xor), Ok(frame.clone()));
        assert_eq!(Frame::parse_with_fcs(&bytes[..], &&Xor), Ok(frame.clone()));
        assert!(Frame::parse_with_fcs(&bytes[..], &Crc32).is_err());
        assert_eq!(strip_fcs(&[][..], &Xor), Err(Error::FrameTooShort { need: 1, got: 0 }));
    }

    #[test]
    fn trailer_width_follows_check() {
        let frame = frame();
        let encoded = frame.marshal_binary().unwrap();
        let bytes = frame.marshal_with_fcs(&ShortCrc).unwrap();
        assert_eq!(bytes.len(), encoded.len() + 2);

        let crc = Crc32.compute(&encoded[..]);
        assert_eq!(&bytes[encoded.len()..], &crc.to_le_bytes()[..2]);
        assert_eq!(Frame::parse_with_fcs(&bytes[..], &ShortCrc), Ok(frame));
        assert_eq!(<&ShortCrc as FrameCheck>::LEN, 2);
    }
}
