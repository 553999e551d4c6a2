//! Packing of resolved colors into RGBA byte buffers.
//!
//! The buffer has 4 bytes per value and is meant to be viewed as an RGBA8
//! pixel array by a rendering surface. How the 32-bit words are arranged
//! depends on the byte order of the viewing host, see [`ByteOrder`].
use crate::color::PackedColor;

/// Byte order of the host viewing the packed buffer as 32-bit words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

impl ByteOrder {
    /// Byte order of the compilation target
    pub const HOST: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Byte order of the compilation target
    pub const fn host() -> ByteOrder {
        Self::HOST
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::HOST
    }
}

/// Pack colors into an RGBA byte buffer of `4 * values.len()` bytes.
///
/// With [`ByteOrder::Little`], each value is written as `R, G, B, A`
/// in memory, where `R` is derived from the full 32-bit value scaled into
/// `0..=255`, and the other three bytes are bits 16..24, 8..16 and 0..8.
///
/// With [`ByteOrder::Big`], the RGB portion is shifted back into the top
/// 24 bits and the low byte is forced to `0xFF`. Alpha is not carried.
pub fn pack_rgba(values: &[PackedColor], order: ByteOrder) -> Vec<u8> {
    log::trace!("packing {} colors ({:?} endian)", values.len(), order);

    let mut buf = Vec::with_capacity(values.len() * 4);
    match order {
        ByteOrder::Little => {
            for c in values {
                buf.extend_from_slice(&little_bytes(c.value()));
            }
        }
        ByteOrder::Big => {
            for c in values {
                let word = (c.rgb() << 8) | 0xFF;
                buf.extend_from_slice(&word.to_be_bytes());
            }
        }
    }
    buf
}

fn little_bytes(v: u32) -> [u8; 4] {
    // scaled by 0xff000000, so values above it saturate at 255
    let r = (v as f64 / 4278190080.0 * 255.0).floor() as u8;
    [
        r,
        ((v & 0xFF0000) >> 16) as u8,
        ((v & 0xFF00) >> 8) as u8,
        (v & 0xFF) as u8,
    ]
}
