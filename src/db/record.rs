//! CSV record decoding.
//!
//! A record is transient: header names are zipped with the positional raw
//! values, and any empty field is mapped to "absent" rather than the empty
//! string, so database-side defaults and NULL rules apply on insert. No
//! type coercion happens here; the storage layer receives text.

use crate::error::BoutiqueError;
use encoding_rs::Encoding;
use std::path::Path;

/// Pair headers with raw values, turning `""` into `None`.
///
/// Order is preserved. Equal lengths are an unchecked precondition; a
/// mismatch silently drops the unmatched tail.
pub fn decode_row(headers: &[String], values: &[String]) -> Vec<(String, Option<String>)> {
    headers
        .iter()
        .zip(values.iter())
        .map(|(header, value)| {
            let value = (!value.is_empty()).then(|| value.clone());
            (header.clone(), value)
        })
        .collect()
}

/// Decode one raw CSV field with the configured character encoding.
pub fn decode_field(
    raw: &[u8],
    encoding: &'static Encoding,
    path: &Path,
) -> Result<String, BoutiqueError> {
    let (text, _, malformed) = encoding.decode(raw);
    if malformed {
        return Err(BoutiqueError::Encoding {
            path: path.to_path_buf(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_fields_become_absent() {
        let headers = strings(&["product_id", "discount"]);
        let values = strings(&["CL-1", ""]);
        let row = decode_row(&headers, &values);
        assert_eq!(row[0], ("product_id".to_string(), Some("CL-1".to_string())));
        assert_eq!(row[1], ("discount".to_string(), None));
    }

    #[test]
    fn values_pass_through_in_order() {
        let headers = strings(&["a", "b", "c"]);
        let values = strings(&["1", "2", "3"]);
        let row = decode_row(&headers, &values);
        let names: Vec<&str> = row.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(row.iter().all(|(_, v)| v.is_some()));
    }

    #[test]
    fn decodes_windows_1250_field() {
        let path = PathBuf::from("seed.csv");
        let text = decode_field(b"Kova\xe8", encoding_rs::WINDOWS_1250, &path)
            .expect("valid windows-1250 bytes");
        assert_eq!(text, "Kovač");
    }

    #[test]
    fn malformed_bytes_are_rejected() {
        let path = PathBuf::from("seed.csv");
        let err = decode_field(b"bad\xff\xfe", encoding_rs::UTF_8, &path);
        assert!(matches!(err, Err(BoutiqueError::Encoding { .. })));
    }
}
