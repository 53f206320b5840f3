//! Rendering of a UUID as a `BLE_UUID128_INIT(...)` macro invocation.
//!
//! The byte order is the little-endian GUID layout: the first three UUID
//! fields are byte-swapped, the trailing eight bytes keep their order.

use std::fmt;

use uuid::Uuid;

/// Text that opens the first line of the macro invocation.
pub const PREFIX: &str = "BLE_UUID128_INIT(";

/// Spaces preceding the first byte of the second line.
pub const INDENT_WIDTH: usize = 16;

/// Number of byte literals rendered per line.
pub const BYTES_PER_LINE: usize = 8;

/// The 16 bytes of a UUID, already in macro (little-endian) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacroLine {
    bytes: [u8; 16],
}

impl MacroLine {
    /// Builds the macro bytes for `uuid`.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self { bytes: uuid.to_bytes_le() }
    }

    /// Wraps bytes that are already in macro order.
    #[must_use]
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }

    /// Bytes in the order they appear in the rendered macro.
    #[must_use]
    pub const fn bytes_le(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Undoes the reordering, yielding the UUID these bytes were taken from.
    #[must_use]
    pub fn to_uuid(&self) -> Uuid {
        Uuid::from_bytes_le(self.bytes)
    }
}

impl From<Uuid> for MacroLine {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl fmt::Display for MacroLine {
    /// Writes both lines without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.bytes.split_at(BYTES_PER_LINE);
        writeln!(f, "{PREFIX}{},", hex_literals(head))?;
        write!(f, "{:width$}{});", "", hex_literals(tail), width = INDENT_WIDTH)
    }
}

fn hex_literals(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("0x{b:02X}")).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "00112233-4455-6677-8899-aabbccddeeff";

    fn sample() -> Uuid {
        Uuid::parse_str(SAMPLE).unwrap()
    }

    #[test]
    fn swaps_leading_fields_and_keeps_trailing_bytes() {
        let line = MacroLine::from_uuid(sample());
        assert_eq!(
            line.bytes_le(),
            &[
                0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xAA, 0xBB, 0xCC,
                0xDD, 0xEE, 0xFF,
            ]
        );
    }

    #[test]
    fn renders_known_uuid() {
        let rendered = MacroLine::from_uuid(sample()).to_string();
        assert_eq!(
            rendered,
            "BLE_UUID128_INIT(0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66,\n                0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF);"
        );
    }

    #[test]
    fn renders_literal_bytes_in_given_order() {
        let bytes: [u8; 16] = std::array::from_fn(|i| u8::try_from(i).unwrap() * 0x11);
        let rendered = MacroLine::from_bytes_le(bytes).to_string();
        assert_eq!(
            rendered,
            "BLE_UUID128_INIT(0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,\n                0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF);"
        );
    }

    #[test]
    fn all_zero_bytes_are_zero_padded() {
        let rendered = MacroLine::from_bytes_le([0; 16]).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("{PREFIX}{},", ["0x00"; 8].join(", ")));
        assert_eq!(lines[1], format!("{}{});", " ".repeat(16), ["0x00"; 8].join(", ")));
    }

    #[test]
    fn all_ff_bytes_are_uppercase() {
        let rendered = MacroLine::from_bytes_le([0xFF; 16]).to_string();
        assert_eq!(rendered.matches("0xFF").count(), 16);
        assert!(!rendered.contains("0xff"));
    }

    #[test]
    fn to_uuid_reverses_reordering() {
        let uuid = Uuid::new_v4();
        assert_eq!(MacroLine::from(uuid).to_uuid(), uuid);
    }

    #[test]
    fn firmware_value_converts_to_canonical_uuid() {
        let value = [
            0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD,
            0xEE, 0xFF,
        ];
        assert_eq!(MacroLine::from_bytes_le(value).to_uuid(), sample());
    }

    #[test]
    fn no_trailing_newline() {
        assert!(!MacroLine::from_bytes_le([1; 16]).to_string().ends_with('\n'));
    }
}
