//! Conversions from raw register contents to display text.

/// The word as a plain decimal integer.
pub fn raw(value: u16) -> String {
    value.to_string()
}

/// Temperature in 0.1 K to degrees Celsius, two decimal places.
pub fn temperature(value: u16) -> String {
    format!("{:.2}", f64::from(value) / 10.0 - 273.0)
}

/// Millivolts to volts, always with a fractional part ("16.0", not "16").
pub fn volts(value: u16) -> String {
    let volts = f64::from(value) / 1000.0;
    if volts.fract() == 0.0 {
        format!("{volts:.1}")
    } else {
        volts.to_string()
    }
}

/// The word in `0x` prefixed lowercase hexadecimal.
pub fn hex(value: u16) -> String {
    format!("{value:#x}")
}

/// Decode a packed SBS manufacture date as `year.month.day`.
///
/// Bits 0-4 are the day, bits 5-8 the month and bits 9-15 the years since
/// 1980. A battery that never had its date programmed reads as `1980.0.0`.
pub fn date(value: u16) -> String {
    let day = value & 0x1f;
    let month = (value >> 5) & 0x0f;
    let year = 1980 + (value >> 9);
    format!("{year}.{month}.{day}")
}

/// A block read from a string register, minus its leading length byte.
///
/// Only the first byte is dropped. Every byte after it is kept, whatever the
/// length byte claims.
pub fn text(block: &[u8]) -> String {
    block.iter().skip(1).map(|&b| char::from(b)).collect()
}

#[test]
fn test_temperature() {
    assert_eq!(temperature(3000), "27.00");
    assert_eq!(temperature(2982), "25.20");
    assert_eq!(temperature(2730), "0.00");
    assert_eq!(temperature(2500), "-23.00");
    assert_eq!(temperature(0), "-273.00");
}

#[test]
fn test_volts() {
    assert_eq!(volts(16400), "16.4");
    assert_eq!(volts(12345), "12.345");
    assert_eq!(volts(16000), "16.0");
    assert_eq!(volts(7), "0.007");
    assert_eq!(volts(0), "0.0");
    assert_eq!(volts(u16::MAX), "65.535");
}

#[test]
fn test_hex() {
    assert_eq!(hex(0x00e0), "0xe0");
    assert_eq!(hex(0), "0x0");
    assert_eq!(hex(0xffff), "0xffff");
}

#[test]
fn test_date() {
    assert_eq!(date(0), "1980.0.0");
    assert_eq!(date((21 << 9) | (6 << 5) | 15), "2001.6.15");
    assert_eq!(date((44 << 9) | (12 << 5) | 31), "2024.12.31");
}

#[test]
fn test_text_drops_length_byte() {
    assert_eq!(text(&[5, 72, 101, 108, 108, 111]), "Hello");
    assert_eq!(text(&[5, 68, 101, 108, 108, 111]), "Dello");
}

#[test]
fn test_text_ignores_reported_length() {
    assert_eq!(text(&[9, 76, 73]), "LI");
    assert_eq!(text(&[1, 76, 73, 79, 78]), "LION");
    assert_eq!(text(&[4]), "");
    assert_eq!(text(&[]), "");
}
