//! Sorted-key JSON encoding used for every hashed preimage.
//!
//! The output matches Python's `json.dumps(obj, sort_keys=True)` byte for
//! byte: `", "` and `": "` separators, non-ASCII escaped as lowercase
//! `\uXXXX`, floats in shortest round-trip form (`1e+16`, `1.5e-05`).

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;
use serde_json::ser::Formatter;
use std::io;

use crate::error::Result;

/// Encode `value` canonically: object keys sorted lexicographically at every
/// depth, fixed separators, fixed number and string formats.
pub fn to_canonical_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let value = serde_json::to_value(value)?;
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter);
    Sorted(&value).serialize(&mut ser)?;
    Ok(buf)
}

/// Serializes a `Value` with object entries ordered by key, independent of
/// whether `serde_json` was built with `preserve_order`.
struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Sorted(item))?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    out.serialize_entry(k, &Sorted(v))?;
                }
                out.end()
            }
            other => other.serialize(serializer),
        }
    }
}

struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(python_float_repr(value).as_bytes())
    }

    // Control characters, quotes and backslashes never reach this method;
    // serde_json routes them through `write_char_escape`.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(|b| b < 0x7f) {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (c as u32) < 0x7f {
                let mut tmp = [0u8; 4];
                writer.write_all(c.encode_utf8(&mut tmp).as_bytes())?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Shortest round-trip float text with Python's exponent spelling.
fn python_float_repr(value: f64) -> String {
    // Debug switches to exponent form at the same thresholds as Python's
    // repr (< 1e-4 or >= 1e16); only the exponent spelling differs.
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::{python_float_repr, to_canonical_json};
    use serde_json::json;

    fn text(v: &serde_json::Value) -> String {
        String::from_utf8(to_canonical_json(v).unwrap()).unwrap()
    }

    #[test]
    fn sorts_keys_at_every_depth() {
        let v = json!({ "b": 1, "a": { "z": [ { "y": 2, "x": 1 } ], "c": "s" } });
        assert_eq!(
            text(&v),
            r#"{"a": {"c": "s", "z": [{"x": 1, "y": 2}]}, "b": 1}"#
        );
    }

    #[test]
    fn escapes_like_python() {
        let v = json!({ "s": "Zo\u{eb} \"q\"\n\u{7f}\u{1F600}" });
        assert_eq!(
            text(&v),
            r#"{"s": "Zo\u00eb \"q\"\n\u007f\ud83d\ude00"}"#
        );
    }

    #[test]
    fn float_spelling() {
        assert_eq!(python_float_repr(1700000000.5), "1700000000.5");
        assert_eq!(python_float_repr(1700000000.0), "1700000000.0");
        assert_eq!(python_float_repr(1e16), "1e+16");
        assert_eq!(python_float_repr(1.5e-5), "1.5e-05");
        assert_eq!(python_float_repr(0.0001), "0.0001");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(text(&json!({ "a": [], "b": {} })), r#"{"a": [], "b": {}}"#);
    }
}
