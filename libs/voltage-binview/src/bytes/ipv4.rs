//! IPv4 address codec
//!
//! Four raw bytes in buffer order. The dotted-quad order always equals the
//! buffer order, so no endianness parameter exists here.

use std::net::Ipv4Addr;

use super::{read_array, write_array};
use crate::error::{BinViewError, Result};

/// Accepted input forms for [`set_ipv4`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv4Source<'a> {
    Octets([u8; 4]),
    Slice(&'a [u8]),
    Text(&'a str),
}

impl From<[u8; 4]> for Ipv4Source<'_> {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4Source::Octets(octets)
    }
}

impl<'a> From<&'a [u8]> for Ipv4Source<'a> {
    fn from(slice: &'a [u8]) -> Self {
        Ipv4Source::Slice(slice)
    }
}

impl<'a> From<&'a str> for Ipv4Source<'a> {
    fn from(text: &'a str) -> Self {
        Ipv4Source::Text(text)
    }
}

impl From<Ipv4Addr> for Ipv4Source<'_> {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Source::Octets(addr.octets())
    }
}

impl Ipv4Source<'_> {
    /// Resolve to four octets.
    ///
    /// Text segments are parsed as unsigned decimals and truncated to their
    /// low 8 bits (`"256.1.1.1"` stores `0.1.1.1`). Slices need at least four
    /// bytes; extra bytes are ignored.
    pub fn to_octets(self) -> Result<[u8; 4]> {
        match self {
            Ipv4Source::Octets(octets) => Ok(octets),
            Ipv4Source::Slice(slice) => slice
                .get(..4)
                .and_then(|head| <[u8; 4]>::try_from(head).ok())
                .ok_or_else(|| {
                    BinViewError::invalid_data(format!(
                        "IPv4 slice needs 4 bytes, got {}",
                        slice.len()
                    ))
                }),
            Ipv4Source::Text(text) => parse_dotted(text),
        }
    }
}

fn parse_dotted(text: &str) -> Result<[u8; 4]> {
    let segments: Vec<&str> = text.trim().split('.').collect();
    if segments.len() != 4 {
        return Err(BinViewError::invalid_data(format!(
            "IPv4 address '{}' must have 4 segments",
            text
        )));
    }

    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        *octet = truncate_segment(segment.trim()).ok_or_else(|| {
            BinViewError::invalid_data(format!(
                "IPv4 segment '{}' in '{}' is not a decimal number",
                segment, text
            ))
        })?;
    }
    Ok(octets)
}

/// Low 8 bits of a decimal digit string of any length
fn truncate_segment(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = segment
        .bytes()
        .fold(0u16, |acc, digit| (acc * 10 + u16::from(digit - b'0')) & 0xFF);
    Some(value as u8)
}

/// Read four raw bytes at `offset`
pub fn get_ipv4(buf: &[u8], offset: usize) -> Result<[u8; 4]> {
    read_array::<4>(buf, offset)
}

/// Read an address at `offset` as `std::net::Ipv4Addr`
pub fn get_ipv4_addr(buf: &[u8], offset: usize) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(get_ipv4(buf, offset)?))
}

/// Read an address at `offset` as `"a.b.c.d"`
pub fn get_ipv4_string(buf: &[u8], offset: usize) -> Result<String> {
    Ok(ipv4_to_string(&get_ipv4(buf, offset)?))
}

/// Write an address at `offset` from any [`Ipv4Source`] form
pub fn set_ipv4<'a>(buf: &mut [u8], offset: usize, address: impl Into<Ipv4Source<'a>>) -> Result<()> {
    let octets = address.into().to_octets()?;
    write_array(buf, offset, octets)
}

/// Join four octets with `.`
pub fn ipv4_to_string(octets: &[u8; 4]) -> String {
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_octets_roundtrip() {
        let mut buf = [0u8; 6];
        set_ipv4(&mut buf, 1, [192u8, 168, 1, 145]).unwrap();
        assert_eq!(get_ipv4(&buf, 1).unwrap(), [192, 168, 1, 145]);
        assert_eq!(get_ipv4_string(&buf, 1).unwrap(), "192.168.1.145");
        assert_eq!(buf[0], 0);
        assert_eq!(buf[5], 0);
    }

    #[test]
    fn test_text_input() {
        let mut buf = [0u8; 4];
        set_ipv4(&mut buf, 0, "10.0.0.5").unwrap();
        assert_eq!(get_ipv4(&buf, 0).unwrap(), [10, 0, 0, 5]);
        assert_eq!(get_ipv4_addr(&buf, 0).unwrap(), Ipv4Addr::new(10, 0, 0, 5));
    }

    #[test]
    fn test_text_segments_truncated_to_byte() {
        let mut buf = [0u8; 4];
        set_ipv4(&mut buf, 0, "256.1.300.7").unwrap();
        assert_eq!(buf, [0, 1, 44, 7]);
    }

    #[test]
    fn test_text_segment_wider_than_u64_truncated() {
        // 18446744073709551873 = 2^64 + 257
        let mut buf = [0u8; 4];
        set_ipv4(&mut buf, 0, "1.2.3.18446744073709551873").unwrap();
        assert_eq!(buf, [1, 2, 3, 1]);

        set_ipv4(&mut buf, 0, "00000000000000000000000000000255.0.0.1").unwrap();
        assert_eq!(buf, [255, 0, 0, 1]);
    }

    #[test]
    fn test_text_rejects_malformed() {
        let mut buf = [9u8; 4];
        assert!(set_ipv4(&mut buf, 0, "10.0.0").is_err());
        assert!(set_ipv4(&mut buf, 0, "10.0.0.x").is_err());
        assert!(set_ipv4(&mut buf, 0, "10.0.-1.1").is_err());
        assert!(set_ipv4(&mut buf, 0, "10..0.1").is_err());
        assert!(set_ipv4(&mut buf, 0, "10.+1.0.1").is_err());
        assert_eq!(buf, [9u8; 4]);
    }

    #[test]
    fn test_slice_and_addr_inputs() {
        let mut buf = [0u8; 4];
        let raw: &[u8] = &[1, 2, 3, 4, 5];
        set_ipv4(&mut buf, 0, raw).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);

        set_ipv4(&mut buf, 0, Ipv4Addr::new(127, 0, 0, 1)).unwrap();
        assert_eq!(buf, [127, 0, 0, 1]);

        let short: &[u8] = &[1, 2];
        assert!(set_ipv4(&mut buf, 0, short).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut buf = [0u8; 5];
        assert!(get_ipv4(&buf, 2).unwrap_err().is_addressing());
        assert!(set_ipv4(&mut buf, 2, [1u8, 1, 1, 1]).unwrap_err().is_addressing());
        assert_eq!(buf, [0u8; 5]);
    }
}
