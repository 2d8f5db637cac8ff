quick_error! {
    /// The error type returned by every encoding and decoding operation.
    ///
    /// The variants fall into three groups: size errors (`FrameTooShort`,
    /// `BufferTooShort`), range errors (`InvalidLength`), and header errors
    /// reported by the LLC, SNAP and FCS codecs (`HeaderLen`, `MalformedLlc`,
    /// `SnapMismatch`, `FcsMismatch`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        /// The input holds fewer bytes than the frame layout requires.
        FrameTooShort { need: usize, got: usize } {
            display("frame too short: need {} bytes, got {}", need, got)
        }
        /// The output buffer cannot hold the encoded frame.
        BufferTooShort { need: usize, got: usize } {
            display("output buffer too short: need {} bytes, got {}", need, got)
        }
        /// The 802.3 length field exceeds 1500, or cannot cover the SNAP extension.
        InvalidLength(len: usize) {
            display("invalid 802.3 length value: {}", len)
        }
        /// A fixed-size header was given a slice of the wrong size.
        HeaderLen { header: &'static str, need: usize, got: usize } {
            display("{} header must be {} bytes, got {}", header, need, got)
        }
        /// The LLC control field is not a one-byte unnumbered-format control.
        MalformedLlc(control: u8) {
            display("malformed llc control field: {:#04x}", control)
        }
        /// A plain LLC header carries the SNAP marker in both SAP fields.
        SnapMismatch {
            display("llc header announces a snap extension but none is attached")
        }
        /// The trailing frame check sequence does not match the frame.
        FcsMismatch { expected: u32, found: u32 } {
            display("fcs mismatch: computed {:#010x}, found {:#010x}", expected, found)
        }
    }
}

/// A specialized `Result` for frame encoding and decoding.
pub type Result<T> = core::result::Result<T, Error>;
