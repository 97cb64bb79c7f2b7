//! Base85 text encoding with the RFC 1924 alphabet.
//!
//! Output matches Python's `base64.b85encode` without padding: a trailing partial group of `n`
//! bytes encodes to `n + 1` characters. Decoding accepts any length and pads the last group with
//! the highest digit before trimming.

use crate::foundation::error::{SvdVizError, SvdVizResult};

const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

const INVALID: u8 = u8::MAX;

const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode `bytes` as base85 text.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(4) * 5);
    for chunk in bytes.chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        let mut acc = u32::from_be_bytes(word);

        let mut digits = [0u8; 5];
        for d in digits.iter_mut().rev() {
            *d = ALPHABET[(acc % 85) as usize];
            acc /= 85;
        }
        for &d in &digits[..chunk.len() + 1] {
            out.push(char::from(d));
        }
    }
    out
}

/// Decode base85 `text`. Whitespace is not skipped; join tokens before calling.
pub fn decode(text: &str) -> SvdVizResult<Vec<u8>> {
    let input = text.as_bytes();
    let mut out = Vec::with_capacity(input.len().div_ceil(5) * 4);

    for (group, chunk) in input.chunks(5).enumerate() {
        let start = group * 5;
        let mut acc: u64 = 0;
        for j in 0..5 {
            let digit = match chunk.get(j) {
                Some(&c) => match DECODE_TABLE[c as usize] {
                    INVALID => {
                        return Err(SvdVizError::decode(format!(
                            "bad base85 character {:?} at position {}",
                            char::from(c),
                            start + j
                        )));
                    }
                    v => u64::from(v),
                },
                None => 84,
            };
            acc = acc * 85 + digit;
        }
        let word = u32::try_from(acc).map_err(|_| {
            SvdVizError::decode(format!("base85 overflow in hunk starting at byte {start}"))
        })?;

        // A final group of n characters carries n - 1 bytes.
        let keep = if chunk.len() == 5 { 4 } else { chunk.len() - 1 };
        out.extend_from_slice(&word.to_be_bytes()[..keep]);
    }
    Ok(out)
}

/// Split `text` into lines of at most `width` characters. A `width` of zero keeps one line.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 || text.len() <= width {
        let mut s = text.to_owned();
        s.push('\n');
        return s;
    }
    let mut out = String::with_capacity(text.len() + text.len() / width + 1);
    // Base85 output is ASCII, so byte chunks are char boundaries.
    for line in text.as_bytes().chunks(width) {
        out.push_str(&String::from_utf8_lossy(line));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/asset/base85.rs"]
mod tests;
