use bytes::BufMut;
use log::{debug, trace};

use super::header::{Dot3Header, DOT3_HEADER_LEN, DOT3_HEADER_TEMPLATE};
use super::{Encap, FRAME_PREFIX_LEN, MAX_LENGTH, SNAP_MIN_FRAME_LEN, SNAP_PREFIX_LEN};
use crate::ether::EtherAddr;
use crate::llc::{LlcHeader, LLC_HEADER_LEN};
use crate::snap::{SnapHeader, SNAP_HEADER_LEN};
use crate::{Error, Result};

/// An IEEE 802.3 frame with an LLC header and an optional SNAP extension.
///
/// The 802.3 length field is not stored: it is derived from `data` and
/// `encap` by [`Frame::len`] whenever the frame is encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    /// Destination hardware address.
    pub destination: EtherAddr,
    /// Source hardware address.
    pub source: EtherAddr,
    /// LLC header and optional SNAP extension.
    pub encap: Encap,
    /// Payload. 802.3 asks for at least 46 bytes; shorter payloads are not
    /// padded here.
    pub data: Vec<u8>,
}

impl Frame {
    /// Create a frame.
    pub fn new(destination: EtherAddr, source: EtherAddr, encap: Encap, data: Vec<u8>) -> Self {
        Self {
            destination,
            source,
            encap,
            data,
        }
    }

    /// The value of the 802.3 length field: the payload length, plus 5 when
    /// the SNAP extension is present.
    ///
    /// The result is not range checked, see [`Frame::length_field`].
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() + self.encap.extension_len()
    }

    /// Whether [`Frame::len`] is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The 802.3 length field, failing with [`Error::InvalidLength`] if it
    /// exceeds 1500.
    pub fn length_field(&self) -> Result<u16> {
        let len = self.len();
        if len > MAX_LENGTH {
            debug!("802.3 length {} exceeds {}", len, MAX_LENGTH);
            return Err(Error::InvalidLength(len));
        }
        Ok(len as u16)
    }

    /// The number of bytes of the encoded frame: the 17-byte prefix of
    /// addresses, length field and LLC header, plus [`Frame::len`].
    ///
    /// The SNAP extension is counted by [`Frame::len`]. No FCS is included.
    #[inline]
    pub fn total_len(&self) -> usize {
        self.len() + FRAME_PREFIX_LEN
    }

    /// Encode the frame into a newly allocated buffer of exactly
    /// [`Frame::total_len`] bytes.
    pub fn marshal_binary(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.total_len());
        self.encode_to(&mut buf)?;
        Ok(buf)
    }

    /// Encode the frame into the front of `buf`, returning the number of
    /// bytes written.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<usize> {
        let need = self.total_len();
        if buf.len() < need {
            return Err(Error::BufferTooShort {
                need,
                got: buf.len(),
            });
        }
        let mut out = &mut buf[..need];
        self.encode_to(&mut out)
    }

    /// Append the encoded frame to `buf`, returning the number of bytes
    /// written.
    ///
    /// Every check runs before the first byte is written, so `buf` is left
    /// untouched on error.
    pub fn encode_to<B: BufMut>(&self, buf: &mut B) -> Result<usize> {
        let length = self.length_field()?;
        let llc = self.encap.encode_llc()?;

        let total_len = self.total_len();
        if buf.remaining_mut() < total_len {
            return Err(Error::BufferTooShort {
                need: total_len,
                got: buf.remaining_mut(),
            });
        }

        let mut header = DOT3_HEADER_TEMPLATE;
        header.set_dst_addr(self.destination);
        header.set_src_addr(self.source);
        header.set_length(length);
        buf.put_slice(header.header_slice());
        buf.put_slice(&llc[..]);
        if let Some(snap) = self.encap.snap_header() {
            buf.put_slice(snap.header_slice());
        }
        buf.put_slice(&self.data[..]);

        trace!(
            "encoded 802.3 frame {} -> {}, length {}, snap {}",
            self.source,
            self.destination,
            length,
            self.encap.is_snap()
        );
        Ok(total_len)
    }

    /// Decode a frame from `buf`.
    ///
    /// Bytes after the payload, such as padding or an FCS, are ignored.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < FRAME_PREFIX_LEN {
            debug!("802.3 frame of {} bytes is shorter than its prefix", buf.len());
            return Err(Error::FrameTooShort {
                need: FRAME_PREFIX_LEN,
                got: buf.len(),
            });
        }

        let header = Dot3Header::parse_unchecked(&buf[..DOT3_HEADER_LEN]);
        let length = header.length() as usize;
        if length > MAX_LENGTH {
            debug!("802.3 length field {} exceeds {}", length, MAX_LENGTH);
            return Err(Error::InvalidLength(length));
        }

        let llc = LlcHeader::decode(&buf[DOT3_HEADER_LEN..FRAME_PREFIX_LEN])?;
        let (encap, offset, payload_len) = if llc.is_snap() {
            if buf.len() < SNAP_MIN_FRAME_LEN {
                debug!("802.3 snap frame of {} bytes is too short", buf.len());
                return Err(Error::FrameTooShort {
                    need: SNAP_MIN_FRAME_LEN,
                    got: buf.len(),
                });
            }
            let snap = SnapHeader::decode(&buf[FRAME_PREFIX_LEN..SNAP_PREFIX_LEN])?;
            let payload_len = length
                .checked_sub(SNAP_HEADER_LEN)
                .ok_or(Error::InvalidLength(length))?;
            (Encap::from_parts(llc, Some(snap))?, SNAP_PREFIX_LEN, payload_len)
        } else {
            (Encap::Llc(llc), FRAME_PREFIX_LEN, length)
        };

        let end = offset + payload_len;
        if buf.len() < end {
            debug!(
                "802.3 length field {} overruns a {} byte frame",
                length,
                buf.len()
            );
            return Err(Error::FrameTooShort {
                need: end,
                got: buf.len(),
            });
        }

        let frame = Self {
            destination: header.dst_addr(),
            source: header.src_addr(),
            encap,
            data: buf[offset..end].to_vec(),
        };
        trace!(
            "decoded 802.3 frame {} -> {}, length {}, snap {}",
            frame.source,
            frame.destination,
            length,
            frame.encap.is_snap()
        );
        Ok(frame)
    }

    /// Decode `buf` into `self`.
    ///
    /// On error `self` is left unchanged.
    pub fn unmarshal_binary(&mut self, buf: &[u8]) -> Result<()> {
        *self = Self::parse(buf)?;
        Ok(())
    }

    /// The offset of the payload in the encoded frame: 17, or 22 with SNAP.
    #[inline]
    pub fn payload_offset(&self) -> usize {
        DOT3_HEADER_LEN + LLC_HEADER_LEN + self.encap.extension_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ether::EtherType;
    use crate::llc::{Sap, UI_CONTROL};
    use crate::snap::{OUI_CISCO, SNAP_HEADER_TEMPLATE};

    fn dst() -> EtherAddr {
        EtherAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])
    }

    fn src() -> EtherAddr {
        EtherAddr([0x11, 0x22, 0x33, 0x44, 0x55, 0x66])
    }

    fn llc_frame(data: Vec<u8>) -> Frame {
        Frame::new(dst(), src(), Encap::llc(Sap::BPDU, Sap::BPDU), data)
    }

    fn snap_frame(data: Vec<u8>) -> Frame {
        Frame::new(dst(), src(), Encap::snap(SNAP_HEADER_TEMPLATE), data)
    }

    #[test]
    fn llc_frame_layout() {
        let frame = llc_frame(vec![0xff; 10]);
        assert_eq!(frame.len(), 10);
        assert_eq!(frame.length_field(), Ok(10));
        assert_eq!(frame.total_len(), 27);
        assert_eq!(frame.payload_offset(), 17);

        let bytes = frame.marshal_binary().unwrap();
        assert_eq!(bytes.len(), 27);
        assert_eq!(
            &bytes[..17],
            &[
                0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x00,
                0x0a, 0x42, 0x42, 0x03
            ][..]
        );
        assert_eq!(&bytes[17..], &[0xff; 10][..]);

        assert_eq!(Frame::parse(&bytes[..]), Ok(frame));
    }

    #[test]
    fn snap_frame_layout() {
        let frame = snap_frame(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(frame.len(), 9);
        assert_eq!(frame.total_len(), 26);
        assert_eq!(frame.payload_offset(), 22);

        let bytes = frame.marshal_binary().unwrap();
        assert_eq!(bytes.len(), 26);
        assert_eq!(&bytes[12..14], &[0x00, 0x09][..]);
        assert_eq!(&bytes[14..17], &[0xaa, 0xaa, 0x03][..]);
        assert_eq!(&bytes[17..22], &SNAP_HEADER_TEMPLATE.encode()[..]);
        assert_eq!(&bytes[22..], &[0xde, 0xad, 0xbe, 0xef][..]);

        let decoded = Frame::parse(&bytes[..]).unwrap();
        assert_eq!(decoded.encap.snap_header().unwrap().ethertype(), Some(EtherType::IPV4));
        assert_eq!(decoded, frame);
    }

    #[test]
    fn length_is_bounded() {
        let frame = llc_frame(vec![0; 1500]);
        assert_eq!(frame.length_field(), Ok(1500));
        assert!(frame.marshal_binary().is_ok());

        let frame = llc_frame(vec![0; 1501]);
        assert_eq!(frame.marshal_binary(), Err(Error::InvalidLength(1501)));

        let frame = snap_frame(vec![0; 1496]);
        assert_eq!(frame.marshal_binary(), Err(Error::InvalidLength(1501)));

        // would wrap to 4 as a u16
        let frame = llc_frame(vec![0; 65540]);
        assert_eq!(frame.length_field(), Err(Error::InvalidLength(65540)));
    }

    #[test]
    fn failed_encode_writes_nothing() {
        let mut out = vec![0x55; 3];
        let frame = llc_frame(vec![0; 1501]);
        assert!(frame.encode_to(&mut out).is_err());
        assert_eq!(out, vec![0x55; 3]);

        let frame = Frame::new(dst(), src(), Encap::Llc(LlcHeader::snap(UI_CONTROL)), vec![1]);
        assert_eq!(frame.encode_to(&mut out), Err(Error::SnapMismatch));
        assert_eq!(out, vec![0x55; 3]);
    }

    #[test]
    fn write_to_slice() {
        let frame = llc_frame(vec![0x01, 0x02]);
        let mut buf = [0u8; 64];
        assert_eq!(frame.write_to(&mut buf[..]), Ok(19));
        assert_eq!(Frame::parse(&buf[..19]), Ok(frame.clone()));
        // trailing padding is ignored
        assert_eq!(Frame::parse(&buf[..]), Ok(frame.clone()));

        let mut short = [0u8; 18];
        assert_eq!(
            frame.write_to(&mut short[..]),
            Err(Error::BufferTooShort { need: 19, got: 18 })
        );
        assert_eq!(short, [0u8; 18]);
    }

    #[test]
    fn encode_to_bytes_mut() {
        let frame = Frame::new(
            EtherAddr([0x01, 0x00, 0x0c, 0xcc, 0xcc, 0xcc]),
            src(),
            Encap::snap(SnapHeader::new(OUI_CISCO, 0x2000)),
            vec![0x02, 0xb4, 0x00, 0x00],
        );
        let mut buf = bytes::BytesMut::with_capacity(8);
        assert_eq!(frame.encode_to(&mut buf), Ok(frame.total_len()));
        assert_eq!(&buf[..], &frame.marshal_binary().unwrap()[..]);
    }

    #[test]
    fn parse_rejects_short_prefix() {
        let bytes = llc_frame(vec![0xff; 10]).marshal_binary().unwrap();
        for len in 0..17 {
            assert_eq!(
                Frame::parse(&bytes[..len]),
                Err(Error::FrameTooShort { need: 17, got: len })
            );
        }
    }

    #[test]
    fn parse_rejects_invalid_length() {
        let mut bytes = llc_frame(vec![0xff; 10]).marshal_binary().unwrap();
        bytes[12] = 0x05;
        bytes[13] = 0xdd;
        assert_eq!(Frame::parse(&bytes[..]), Err(Error::InvalidLength(1501)));

        // an Ethernet II frame carrying Ipv4
        bytes[12] = 0x08;
        bytes[13] = 0x00;
        assert_eq!(Frame::parse(&bytes[..]), Err(Error::InvalidLength(0x0800)));
    }

    #[test]
    fn parse_rejects_overrunning_length() {
        let mut bytes = llc_frame(vec![0xff; 10]).marshal_binary().unwrap();
        bytes[13] = 11;
        assert_eq!(
            Frame::parse(&bytes[..]),
            Err(Error::FrameTooShort { need: 28, got: 27 })
        );
    }

    #[test]
    fn parse_snap_gating() {
        let bytes = snap_frame(vec![0xde, 0xad, 0xbe, 0xef]).marshal_binary().unwrap();
        for len in 17..26 {
            assert_eq!(
                Frame::parse(&bytes[..len]),
                Err(Error::FrameTooShort { need: 26, got: len })
            );
        }

        // a snap frame whose length cannot even cover the extension
        let mut bytes = bytes;
        bytes[13] = 4;
        assert_eq!(Frame::parse(&bytes[..]), Err(Error::InvalidLength(4)));
    }

    #[test]
    fn parse_propagates_llc_errors() {
        let mut bytes = llc_frame(vec![0xff; 10]).marshal_binary().unwrap();
        bytes[16] = 0x00;
        assert_eq!(Frame::parse(&bytes[..]), Err(Error::MalformedLlc(0x00)));
    }

    #[test]
    fn unmarshal_keeps_frame_on_error() {
        let original = snap_frame(vec![0x01; 8]);
        let mut frame = original.clone();
        assert!(frame.unmarshal_binary(&[0u8; 10]).is_err());
        assert_eq!(frame, original);

        let bytes = llc_frame(vec![0x02; 3]).marshal_binary().unwrap();
        frame.unmarshal_binary(&bytes[..]).unwrap();
        assert_eq!(frame, llc_frame(vec![0x02; 3]));
    }

    #[test]
    fn empty_payload() {
        let frame = llc_frame(Vec::new());
        assert!(frame.is_empty());
        assert_eq!(frame.total_len(), 17);
        let bytes = frame.marshal_binary().unwrap();
        assert_eq!(Frame::parse(&bytes[..]), Ok(frame));

        let frame = snap_frame(Vec::new());
        assert!(!frame.is_empty());
        assert_eq!(frame.len(), 5);
    }
}
