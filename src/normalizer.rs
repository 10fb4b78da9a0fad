// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unicode digit folding and punctuation stripping (C3). All three
//! functions preserve codepoint order, never panic, and treat invalid UTF-8
//! upstream of them as an empty string (callers already hold `&str`, so
//! validity is guaranteed by the type).

use crate::phonenumberutil::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;

/// Strips everything but digits, folding any Unicode decimal digit
/// (`\p{Nd}`) to its ASCII equivalent.
pub fn normalize_digits_only(s: &str) -> String {
    let ascii_folded = dec_from_char::normalize_decimals(s);
    ascii_folded.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Like [`normalize_digits_only`] but first maps E.161 alpha characters
/// (A,B,C -> 2, ... Z -> 9, case-insensitive ASCII only) to digits.
pub fn normalize(s: &str, mappings: &PhoneNumberRegExpsAndMappings) -> String {
    let ascii_folded = dec_from_char::normalize_decimals(s);
    let mut out = String::with_capacity(ascii_folded.len());
    for c in ascii_folded.chars() {
        if c.is_ascii_digit() {
            out.push(c);
        } else if let Some(&replacement) = mappings.alpha_phone_mappings.get(&c.to_ascii_uppercase())
        {
            out.push(replacement);
        }
    }
    out
}

/// Retains `+`, `*`, `#` and digits (folded to ASCII); drops everything
/// else. Used to build a dialable string from free-form input.
pub fn normalize_diallable_chars_only(s: &str) -> String {
    let ascii_folded = dec_from_char::normalize_decimals(s);
    ascii_folded
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '*' | '#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_punctuation() {
        assert_eq!(normalize_digits_only("+1 (650) 253-0000"), "16502530000");
    }

    #[test]
    fn digits_only_is_idempotent() {
        let once = normalize_digits_only("+1 (650) 253-0000");
        let twice = normalize_digits_only(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn diallable_keeps_star_and_hash() {
        assert_eq!(normalize_diallable_chars_only("*123#"), "*123#");
        assert_eq!(normalize_diallable_chars_only("+1 (650) 253-0000"), "+16502530000");
    }
}
