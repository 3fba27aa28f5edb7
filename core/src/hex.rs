use crate::error::HexLoadError;

pub fn hex_bytes(data: &[u8]) -> String {
    let strs: Vec<String> = data.iter().map(|b| format!("{:02X}", b)).collect();
    strs.join("")
}

pub fn hex_bytes_separated(data: &[u8], sep: char) -> String {
    let strs: Vec<String> = data.iter().map(|b| format!("{:02X}{}", b, sep)).collect();
    strs.join("")
}

/// Parses Intel-HEX records and returns the `(address, bytes)` pairs to
/// write into memory, in file order. The record-type field and the
/// trailing checksum byte are present in the format but are not
/// validated: callers only need the byte count, base address and payload.
///
/// A record with a zero byte count ends the load; anything after it is
/// ignored, matching the firmware's own loader.
pub fn parse(text: &str) -> Result<Vec<(u16, Vec<u8>)>, HexLoadError> {
    let mut out = Vec::new();

    for (i, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = i + 1;
        if !line.starts_with(':') {
            return Err(HexLoadError::MalformedRecord(
                lineno,
                "record does not start with ':'".into(),
            ));
        }
        let body = &line[1..];
        if body.len() < 8 {
            return Err(HexLoadError::MalformedRecord(lineno, "record too short".into()));
        }

        let len = parse_hex_u8(&body[0..2], lineno)?;
        let addr = parse_hex_u16(&body[2..6], lineno)?;
        // body[6..8] is the record-type field; ignored.

        if len == 0 {
            break;
        }

        let data_start = 8;
        let data_end = data_start + usize::from(len) * 2;
        if body.len() < data_end {
            return Err(HexLoadError::MalformedRecord(
                lineno,
                format!("declared {} bytes but line is too short", len),
            ));
        }

        let mut data = Vec::with_capacity(usize::from(len));
        for chunk_start in (data_start..data_end).step_by(2) {
            data.push(parse_hex_u8(&body[chunk_start..chunk_start + 2], lineno)?);
        }
        // the trailing checksum byte, if present, is not validated.

        out.push((addr, data));
    }

    Ok(out)
}

fn parse_hex_u8(s: &str, lineno: usize) -> Result<u8, HexLoadError> {
    u8::from_str_radix(s, 16)
        .map_err(|_| HexLoadError::MalformedRecord(lineno, format!("invalid hex byte: {}", s)))
}

fn parse_hex_u16(s: &str, lineno: usize) -> Result<u16, HexLoadError> {
    u16::from_str_radix(s, 16)
        .map_err(|_| HexLoadError::MalformedRecord(lineno, format!("invalid hex address: {}", s)))
}

#[cfg(test)]
#[path = "./hex_test.rs"]
mod hex_test;
