//! Domain types providing compile-time safety and self-documentation

use std::fmt;

/// Absolute byte offset into the binary image
///
/// Descriptor records locate each mapped name by the file offset at which
/// its bytes are stored in the image, not by a virtual address. The newtype
/// keeps raw `u64` lengths and counts from being passed where an offset is
/// expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageOffset(pub u64);

impl fmt::Display for ImageOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl From<u64> for ImageOffset {
    fn from(offset: u64) -> Self {
        ImageOffset(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_offset_display_is_hex() {
        assert_eq!(ImageOffset(0x1759e60).to_string(), "0x1759e60");
        assert_eq!(ImageOffset(0).to_string(), "0x0");
    }
}
