//! Classification of raw key encodings.
//!
//! Three mutually exclusive encodings are accepted, told apart purely by the
//! input length and its leading byte:
//!
//! | encoding                          | length         | leading byte     |
//! |-----------------------------------|----------------|------------------|
//! | private scalar, big endian        | `size`         | any              |
//! | uncompressed point `04 ‖ x ‖ y`   | `2 * size + 1` | `0x04`           |
//! | compressed point `02/03 ‖ x`      | `size + 1`     | `0x02` or `0x03` |
//!
//! The rules are applied in the order of the table and the first match wins,
//! so the same bytes can decode differently under curves of different sizes.

use crate::{Error, Result};

/// Tag byte of an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Tag byte of a compressed point with an even y-coordinate.
pub const COMPRESSED_EVEN_TAG: u8 = 0x02;

/// Tag byte of a compressed point with an odd y-coordinate.
pub const COMPRESSED_ODD_TAG: u8 = 0x03;

/// Raw key encoding, borrowing the relevant parts of the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Encoding<'a> {
    /// Big-endian private scalar.
    Private {
        /// Scalar bytes.
        scalar: &'a [u8],
    },

    /// Uncompressed public point.
    UncompressedPublic {
        /// x-coordinate bytes.
        x: &'a [u8],

        /// y-coordinate bytes.
        y: &'a [u8],
    },

    /// Compressed public point.
    CompressedPublic {
        /// x-coordinate bytes.
        x: &'a [u8],

        /// Is the y-coordinate odd?
        y_is_odd: bool,
    },
}

impl<'a> Encoding<'a> {
    /// Classify `bytes` for a curve whose field elements are `size` bytes.
    pub fn classify(bytes: &'a [u8], size: usize) -> Result<Self> {
        let len = bytes.len();

        if len == size {
            return Ok(Encoding::Private { scalar: bytes });
        }

        let (&tag, body) = bytes.split_first().ok_or(Error::InvalidEncoding)?;

        if tag == UNCOMPRESSED_TAG && len % 2 == 1 && (len - 1) / 2 == size {
            let (x, y) = body.split_at(size);
            return Ok(Encoding::UncompressedPublic { x, y });
        }

        if (tag == COMPRESSED_EVEN_TAG || tag == COMPRESSED_ODD_TAG) && len - 1 == size {
            return Ok(Encoding::CompressedPublic {
                x: body,
                y_is_odd: tag == COMPRESSED_ODD_TAG,
            });
        }

        Err(Error::InvalidEncoding)
    }

    /// Does this encoding carry a private key?
    pub fn is_private(&self) -> bool {
        matches!(self, Encoding::Private { .. })
    }
}
