//! Descriptor file line parsing
//!
//! Each descriptor line is comma-separated:
//!
//! ```text
//! field0, original_name, field2, field3, offset_hex[, ...]
//! ```
//!
//! Only the name (field 1) and the hex offset (field 4) matter here; the
//! remaining fields are metadata emitted by the extraction tooling and are
//! read but unused. Lines that don't carry a usable record are skipped
//! silently — a partially garbled descriptor still loads every well-formed
//! line it contains.

use crate::domain::ImageOffset;

/// Number of comma-separated fields a line must provide.
const FIELD_COUNT: usize = 5;

/// One accepted descriptor record: a well-known name and the image offset
/// at which its mapped counterpart is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorRecord {
    pub original_name: String,
    pub read_offset: ImageOffset,
}

/// Parse one raw descriptor line.
///
/// Collects the first five comma-separated fields and returns `None` when
/// the line yields fewer, or when the name field is empty after trimming.
/// Fields past the fifth are ignored. An offset field that carries no hex
/// digits parses as 0 rather than rejecting the line; the image read will
/// then fail its bounds check and the entry ends up with an absent mapped
/// name.
#[must_use]
pub fn parse_line(line: &str) -> Option<DescriptorRecord> {
    let mut fields = line.split(',');
    let mut collected = [""; FIELD_COUNT];
    for slot in &mut collected {
        *slot = fields.next()?;
    }

    let original_name = trim_field(collected[1]);
    if original_name.is_empty() {
        return None;
    }

    let read_offset = parse_hex_offset(trim_field(collected[4]));
    Some(DescriptorRecord { original_name: original_name.to_string(), read_offset })
}

/// Strip surrounding spaces, tabs, and line terminators from a field.
fn trim_field(field: &str) -> &str {
    field.trim_matches([' ', '\t', '\r', '\n'])
}

/// Parse a hex offset with an optional `0x`/`0X` prefix.
///
/// Partial-prefix parse in the manner of `strtoul(.., 16)`: parsing stops at
/// the first non-hex character and whatever follows is ignored. No digits at
/// all parses as 0.
fn parse_hex_offset(field: &str) -> ImageOffset {
    let digits = field.strip_prefix("0x").or_else(|| field.strip_prefix("0X")).unwrap_or(field);
    let end = digits.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(digits.len());
    ImageOffset(u64::from_str_radix(&digits[..end], 16).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let record = parse_line("1,il2cpp_init,2,3,0x1000").unwrap();
        assert_eq!(record.original_name, "il2cpp_init");
        assert_eq!(record.read_offset, ImageOffset(0x1000));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let record = parse_line("1, il2cpp_init\t,2,3,\t 0x1000 \r\n").unwrap();
        assert_eq!(record.original_name, "il2cpp_init");
        assert_eq!(record.read_offset, ImageOffset(0x1000));
    }

    #[test]
    fn test_too_few_fields_rejected() {
        assert_eq!(parse_line("a,b,c"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("1,name,2,3"), None);
    }

    #[test]
    fn test_extra_fields_ignored() {
        // The extraction tooling may append columns; the first five decide.
        let record = parse_line("1,il2cpp_init,2,3,0x1000,extra,more").unwrap();
        assert_eq!(record.original_name, "il2cpp_init");
        assert_eq!(record.read_offset, ImageOffset(0x1000));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(parse_line("1,  ,2,3,0x1000"), None);
    }

    #[test]
    fn test_hex_offset_forms() {
        assert_eq!(parse_hex_offset("0x1759e60"), ImageOffset(0x1759e60));
        assert_eq!(parse_hex_offset("0X1A"), ImageOffset(0x1a));
        assert_eq!(parse_hex_offset("1a2B"), ImageOffset(0x1a2b));
    }

    #[test]
    fn test_hex_offset_partial_prefix() {
        // Parsing stops at the first non-hex character, like strtoul.
        assert_eq!(parse_hex_offset("1000junk"), ImageOffset(0x1000));
        assert_eq!(parse_hex_offset("0x10-20"), ImageOffset(0x10));
    }

    #[test]
    fn test_unparsable_offset_is_zero() {
        assert_eq!(parse_hex_offset("junk"), ImageOffset(0));
        assert_eq!(parse_hex_offset(""), ImageOffset(0));
        assert_eq!(parse_hex_offset("0x"), ImageOffset(0));
    }

    #[test]
    fn test_unparsable_offset_still_accepts_line() {
        let record = parse_line("1,il2cpp_init,2,3,not_hex").unwrap();
        assert_eq!(record.read_offset, ImageOffset(0));
    }
}
