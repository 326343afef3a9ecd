// SPDX-License-Identifier: GPL-3.0-only

/// Decode a UDisks2 byte string (`ay`), stopping at the first NUL.
pub fn decode_c_string_bytes(bytes: &[u8]) -> String {
    let raw = match bytes.split(|b| *b == 0).next() {
        Some(v) => v,
        None => bytes,
    };

    String::from_utf8_lossy(raw).to_string()
}
