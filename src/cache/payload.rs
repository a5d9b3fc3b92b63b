//! Payload Module
//!
//! Values accepted by [`Cache::store`](crate::cache::Cache::store).

use std::fmt::{self, Write};

use serde::Deserialize;

// == Payload ==
/// Data to store: text, raw bytes, an integer or a float.
///
/// Deserializes from a JSON string, number, or array of byte values.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    /// Encodes the payload the way a Redis client writes values: numbers as
    /// their repr text, strings as UTF-8, bytes unchanged.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Payload::Int(n) => n.to_string().into_bytes(),
            Payload::Float(x) => float_repr(*x).into_bytes(),
            Payload::Text(s) => s.clone().into_bytes(),
            Payload::Bytes(b) => b.clone(),
        }
    }
}

/// Renders a float in repr form: `2.0`, `1e+20`, `1e-05`, `inf`, `nan`.
fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug already picks the shortest digits and switches to exponent form
    // outside [1e-4, 1e16); only the exponent needs a sign and two digits.
    let debug = format!("{:?}", x);
    match debug.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => debug,
    }
}

/// Picks single quotes unless the text holds a single quote and no double quote.
fn quote_for(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double {
        '"'
    } else {
        '\''
    }
}

fn write_str_repr(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = quote_for(s.contains('\''), s.contains('"'));
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c if c.is_control() && (c as u32) < 0x100 => write!(f, "\\x{:02x}", c as u32)?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

fn write_bytes_repr(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    let quote = quote_for(bytes.contains(&b'\''), bytes.contains(&b'"'));
    write!(f, "b{}", quote)?;
    for &b in bytes {
        match b {
            b'\\' => f.write_str("\\\\")?,
            b'\n' => f.write_str("\\n")?,
            b'\r' => f.write_str("\\r")?,
            b'\t' => f.write_str("\\t")?,
            b if b as char == quote => write!(f, "\\{}", quote)?,
            0x20..=0x7e => f.write_char(b as char)?,
            b => write!(f, "\\x{:02x}", b)?,
        }
    }
    f.write_char(quote)
}

/// Repr-style rendering used in call history: `'hello'`, `b'\x00'`, `42`, `1e+20`.
impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Int(n) => write!(f, "{}", n),
            Payload::Float(x) => f.write_str(&float_repr(*x)),
            Payload::Text(s) => write_str_repr(f, s),
            Payload::Bytes(b) => write_bytes_repr(f, b),
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

impl From<&[u8]> for Payload {
    fn from(b: &[u8]) -> Self {
        Payload::Bytes(b.to_vec())
    }
}

impl From<i64> for Payload {
    fn from(n: i64) -> Self {
        Payload::Int(n)
    }
}

impl From<f64> for Payload {
    fn from(x: f64) -> Self {
        Payload::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes() {
        assert_eq!(Payload::from("foo").to_bytes(), b"foo");
        assert_eq!(Payload::from(123_i64).to_bytes(), b"123");
        assert_eq!(Payload::from(-7_i64).to_bytes(), b"-7");
        assert_eq!(Payload::from(1.5_f64).to_bytes(), b"1.5");
        assert_eq!(Payload::from(vec![0u8, 255]).to_bytes(), vec![0u8, 255]);
    }

    #[test]
    fn test_float_encoding() {
        assert_eq!(Payload::from(2.0_f64).to_bytes(), b"2.0");
        assert_eq!(Payload::from(1e20_f64).to_bytes(), b"1e+20");
        assert_eq!(Payload::from(1e16_f64).to_bytes(), b"1e+16");
        assert_eq!(Payload::from(1.5e-5_f64).to_bytes(), b"1.5e-05");
        assert_eq!(Payload::from(0.0001_f64).to_bytes(), b"0.0001");
        assert_eq!(Payload::from(-3.25e100_f64).to_bytes(), b"-3.25e+100");
        assert_eq!(Payload::from(f64::INFINITY).to_bytes(), b"inf");
        assert_eq!(Payload::from(f64::NAN).to_bytes(), b"nan");
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(format!("{:?}", (Payload::from("hello"),)), "('hello',)");
        assert_eq!(format!("{:?}", Payload::from("it's")), r#""it's""#);
        assert_eq!(format!("{:?}", Payload::from(r#"say "hi""#)), r#"'say "hi"'"#);
        assert_eq!(format!("{:?}", Payload::from(r#"'both' "x""#)), r#"'\'both\' "x"'"#);
        assert_eq!(format!("{:?}", Payload::from("a\\b\n\t\x01")), r"'a\\b\n\t\x01'");
        assert_eq!(format!("{:?}", Payload::from("héllo")), "'héllo'");
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(format!("{:?}", (Payload::from(42_i64),)), "(42,)");
        assert_eq!(format!("{:?}", Payload::from(2.0_f64)), "2.0");
        assert_eq!(format!("{:?}", Payload::from(1e20_f64)), "1e+20");
    }

    #[test]
    fn test_bytes_rendering() {
        assert_eq!(format!("{:?}", Payload::from(&b"a\x00"[..])), r"b'a\x00'");
        assert_eq!(format!("{:?}", Payload::from(&b"it's"[..])), r#"b"it's""#);
        assert_eq!(format!("{:?}", Payload::from(vec![0xffu8, b'\n'])), r"b'\xff\n'");
    }

    #[test]
    fn test_deserialize_variants() {
        let text: Payload = serde_json::from_str(r#""bar""#).unwrap();
        assert_eq!(text, Payload::Text("bar".to_string()));

        let int: Payload = serde_json::from_str("12").unwrap();
        assert_eq!(int, Payload::Int(12));

        let float: Payload = serde_json::from_str("0.25").unwrap();
        assert_eq!(float, Payload::Float(0.25));

        let bytes: Payload = serde_json::from_str("[104, 105]").unwrap();
        assert_eq!(bytes, Payload::Bytes(b"hi".to_vec()));
    }
}
