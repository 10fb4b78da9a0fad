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

//! The as-you-type formatter (C8): a stateful engine that reformats a phone
//! number after every keystroke, narrowing the set of candidate formats as
//! digits accrue and gracefully degrading to verbatim echo when nothing
//! matches. See spec.md §4.8 for the state machine this follows.

use crate::metadata::{MetadataStore, NumberFormat, PhoneMetadata};
use crate::region_code::RegionCode;
use crate::regex_util::RegexFullMatch;

use super::helper_constants::PLUS_SIGN;
use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;

/// Placeholder for an undetermined digit in a partially built template.
const DIGIT_PLACEHOLDER: char = '\u{2008}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BuildingPrefix,
    ExpectingCountryCode,
    ChosenTemplate,
    Formatted,
    Unformattable,
}

/// Reformats a phone number as the user types it, one digit at a time.
///
/// Holds per-instance mutable state (accrued digits, narrowed candidate
/// formats, current template) and is therefore not safe to share across
/// threads; create one instance per input field.
pub struct AsYouTypeFormatter {
    store: MetadataStore,
    mappings: PhoneNumberRegExpsAndMappings,
    default_region: String,

    state: State,
    accrued_input: String,
    national_number: String,
    prefix_before_national_number: String,
    is_international: bool,
    country_code: i32,
    current_metadata: Option<PhoneMetadata>,
    current_output: String,
    possible_formats: Vec<NumberFormat>,
    chosen_format: Option<NumberFormat>,

    remembered_raw_len: Option<usize>,
}

impl AsYouTypeFormatter {
    pub fn new(region: impl Into<String>) -> Self {
        Self::with_store(region, crate::metadata::sample::sample_metadata())
    }

    pub fn with_store(
        region: impl Into<String>,
        collection: crate::metadata::PhoneMetadataCollection,
    ) -> Self {
        let mut formatter = Self {
            store: MetadataStore::from_collection(collection),
            mappings: PhoneNumberRegExpsAndMappings::new(),
            default_region: region.into(),
            state: State::BuildingPrefix,
            accrued_input: String::new(),
            national_number: String::new(),
            prefix_before_national_number: String::new(),
            is_international: false,
            country_code: 0,
            current_metadata: None,
            current_output: String::new(),
            possible_formats: Vec::new(),
            chosen_format: None,
            remembered_raw_len: None,
        };
        formatter.current_metadata = formatter.store.get_by_region(&formatter.default_region).cloned();
        formatter
    }

    /// Resets all accumulated state back to `BuildingPrefix`.
    pub fn clear(&mut self) {
        self.state = State::BuildingPrefix;
        self.accrued_input.clear();
        self.national_number.clear();
        self.prefix_before_national_number.clear();
        self.is_international = false;
        self.country_code = 0;
        self.current_metadata = self.store.get_by_region(&self.default_region).cloned();
        self.current_output.clear();
        self.possible_formats.clear();
        self.chosen_format = None;
        self.remembered_raw_len = None;
    }

    pub fn get_current_output(&self) -> &str {
        &self.current_output
    }

    /// Feeds a single character (digit, or a leading `+`) and returns the
    /// updated display string.
    pub fn input_digit(&mut self, c: char) -> &str {
        self.input_digit_inner(c, None);
        &self.current_output
    }

    /// Like [`Self::input_digit`], remembering the caret position immediately
    /// after `c` so [`Self::get_remembered_position`] can map it back into
    /// the reformatted display.
    pub fn input_digit_and_remember_position(&mut self, c: char) -> &str {
        self.input_digit_inner(c, Some(self.accrued_input.chars().count() + 1));
        &self.current_output
    }

    /// The byte offset into `get_current_output()` of the character entered
    /// by the most recent `input_digit_and_remember_position` call.
    pub fn get_remembered_position(&self) -> usize {
        let Some(raw_chars_to_skip) = self.remembered_raw_len else {
            return self.current_output.len();
        };
        let mut digits_seen = 0usize;
        for (byte_offset, ch) in self.current_output.char_indices() {
            if digits_seen >= raw_chars_to_skip {
                return byte_offset;
            }
            if ch.is_ascii_digit() || ch == '+' {
                digits_seen += 1;
            }
        }
        self.current_output.len()
    }

    fn input_digit_inner(&mut self, c: char, remember_at: Option<usize>) {
        if self.state == State::Unformattable {
            self.accrued_input.push(c);
            self.current_output = self.accrued_input.clone();
            self.remembered_raw_len = remember_at;
            return;
        }

        if c == '+' && self.accrued_input.is_empty() {
            self.is_international = true;
            self.accrued_input.push(c);
            self.current_output = self.accrued_input.clone();
            self.remembered_raw_len = remember_at;
            return;
        }

        if !c.is_ascii_digit() {
            self.state = State::Unformattable;
            self.accrued_input.push(c);
            self.current_output = self.accrued_input.clone();
            self.remembered_raw_len = remember_at;
            return;
        }

        self.accrued_input.push(c);
        let digit_count = self.accrued_input.chars().filter(|c| c.is_ascii_digit()).count();

        if self.state == State::BuildingPrefix {
            if digit_count < 3 {
                self.current_output = self.accrued_input.clone();
                self.remembered_raw_len = remember_at;
                return;
            }
            // `attempt_to_extract_idd` derives `national_number` from the
            // full accrued digit history, which already includes `c`; it
            // must not be pushed onto `national_number` a second time below.
            self.attempt_to_extract_idd();
            if self.state == State::ExpectingCountryCode {
                self.try_decode_country_code();
            } else {
                self.strip_nanpa_leading_one_if_needed();
                self.narrow_down_possible_formats();
                self.attempt_to_choose_format_and_append();
            }
            self.remembered_raw_len = remember_at;
            return;
        }

        if self.state == State::ExpectingCountryCode {
            self.national_number.push(c);
            self.try_decode_country_code();
            self.remembered_raw_len = remember_at;
            return;
        }

        self.national_number.push(c);
        self.strip_nanpa_leading_one_if_needed();
        self.narrow_down_possible_formats();
        self.attempt_to_choose_format_and_append();
        self.remembered_raw_len = remember_at;
    }

    fn attempt_to_extract_idd(&mut self) {
        let digits_only: String = self.accrued_input.chars().filter(|c| c.is_ascii_digit()).collect();
        if self.is_international {
            if let Some(metadata) = &self.current_metadata {
                if !metadata.international_prefix.is_empty() {
                    let pattern = format!("^(?:{})", metadata.international_prefix);
                    if let Ok(re) = regex::Regex::new(&pattern) {
                        if let Some(m) = re.find(&digits_only) {
                            self.prefix_before_national_number.push_str(PLUS_SIGN);
                            self.national_number = digits_only[m.end()..].to_string();
                            self.state = State::ExpectingCountryCode;
                            return;
                        }
                    }
                }
            }
        }
        // No IDD found (or not international): treat the accrued digits as
        // national, stripping a national prefix candidate if one applies.
        self.national_number = digits_only;
        if let Some(metadata) = self.current_metadata.clone() {
            self.country_code = metadata.country_code;
            self.strip_national_prefix_candidate(&metadata);
        }
        self.state = State::ChosenTemplate;
        self.reset_candidate_formats();
    }

    fn strip_national_prefix_candidate(&mut self, metadata: &PhoneMetadata) {
        if let Some(prefix) = metadata.national_prefix.as_deref() {
            if !prefix.is_empty() && self.national_number.starts_with(prefix) {
                self.national_number = self.national_number[prefix.len()..].to_string();
            }
        }
    }

    fn strip_nanpa_leading_one_if_needed(&mut self) {
        if self.country_code == 1 && self.national_number.starts_with('1') && self.national_number.len() > 1 {
            let rest = &self.national_number[1..2];
            if rest.chars().next().is_some_and(|c| ('2'..='9').contains(&c)) {
                // already past the point of usefully treating "1" as NDD
                // once more than a couple digits have accrued; nothing to do
                // beyond leaving national_number as-is for format matching.
            }
        }
    }

    fn try_decode_country_code(&mut self) {
        for len in 1..=3usize.min(self.national_number.len()) {
            if let Ok(candidate) = self.national_number[..len].parse::<i32>() {
                if self.store.has_calling_code(candidate) {
                    self.country_code = candidate;
                    let region = self.store.main_region_for_calling_code(candidate).to_string();
                    self.current_metadata = self.store.get_by_region(&region).cloned();
                    self.national_number = self.national_number[len..].to_string();
                    self.state = State::ChosenTemplate;
                    self.reset_candidate_formats();
                    return;
                }
            }
        }
    }

    fn reset_candidate_formats(&mut self) {
        self.possible_formats = self
            .current_metadata
            .as_ref()
            .map(|m| m.number_format.clone())
            .unwrap_or_default();
        self.chosen_format = None;
    }

    fn narrow_down_possible_formats(&mut self) {
        if self.chosen_format.is_some() {
            return;
        }
        let index = self.national_number.len().saturating_sub(1);
        self.possible_formats.retain(|fmt| {
            fmt.leading_digits_pattern
                .get(index.min(fmt.leading_digits_pattern.len().saturating_sub(1)))
                .map(|pat| {
                    regex::Regex::new(&format!("^(?:{})", pat))
                        .map(|re| re.is_match(&self.national_number))
                        .unwrap_or(false)
                })
                .unwrap_or(true)
        });
    }

    fn attempt_to_choose_format_and_append(&mut self) {
        if self.state != State::ChosenTemplate && self.state != State::Formatted {
            self.current_output = self.full_prefix_and_national();
            return;
        }

        if self.possible_formats.is_empty() {
            self.state = State::Unformattable;
            self.current_output = self.accrued_input.clone();
            return;
        }

        // short-circuit: if the accrued national number is already a full
        // match for some candidate's pattern, use its replacement directly.
        for fmt in &self.possible_formats {
            if let Ok(re) = regex::Regex::new(&fmt.pattern) {
                if re.full_match(&self.national_number) {
                    let formatted = re.replace(&self.national_number, fmt.format.as_str()).into_owned();
                    self.chosen_format = Some(fmt.clone());
                    self.state = State::Formatted;
                    self.current_output = self.compose(&formatted);
                    return;
                }
            }
        }

        let fmt = self.chosen_format.clone().or_else(|| self.possible_formats.first().cloned());
        let Some(fmt) = fmt else {
            self.state = State::Unformattable;
            self.current_output = self.accrued_input.clone();
            return;
        };
        self.chosen_format = Some(fmt.clone());
        self.state = State::Formatted;

        let template = build_placeholder_template(&fmt.pattern, &fmt.format);
        let templated = apply_digits_to_template(&template, &self.national_number);
        self.current_output = self.compose(&templated);
    }

    fn compose(&self, national_part: &str) -> String {
        let mut out = String::new();
        if !self.prefix_before_national_number.is_empty() {
            out.push_str(&self.prefix_before_national_number);
            if self.country_code != 0 {
                let mut buf = itoa::Buffer::new();
                out.push_str(buf.format(self.country_code));
                out.push(' ');
            }
        } else if self.is_international && self.country_code != 0 {
            out.push_str(PLUS_SIGN);
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(self.country_code));
            out.push(' ');
        }
        out.push_str(national_part);
        out
    }

    fn full_prefix_and_national(&self) -> String {
        self.compose(&self.national_number)
    }
}

/// Expands a format's `$1`..`$9` template into a fixed-width mask: each
/// placeholder is replaced by a run of digit placeholders as wide as its
/// capture group in `pattern`, and every other character of `format`
/// (spaces, parens, dashes) is copied through verbatim. Simplified to the
/// common case of all-digit capture groups (`\d{n}`), which covers every
/// format in this crate's metadata.
fn build_placeholder_template(pattern: &str, format: &str) -> String {
    let group_lengths: Vec<usize> = regex::Regex::new(r"\\d\{(\d+)\}")
        .map(|re| {
            re.captures_iter(pattern)
                .map(|caps| caps[1].parse().unwrap_or(0))
                .collect()
        })
        .unwrap_or_default();

    let mut template = String::with_capacity(format.len() * 2);
    let mut chars = format.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '$' {
            if let Some(&digit) = chars.peek() {
                if let Some(index) = digit.to_digit(10).filter(|d| *d >= 1) {
                    chars.next();
                    let len = group_lengths.get(index as usize - 1).copied().unwrap_or(0);
                    template.extend(std::iter::repeat(DIGIT_PLACEHOLDER).take(len));
                    continue;
                }
            }
        }
        template.push(ch);
    }
    template
}

/// Fills placeholders in `template` with `digits` in order, copying literal
/// separators through as they are reached. Stops as soon as digits run out,
/// so the displayed string never trails off into unfilled placeholders or
/// separators past the last digit actually typed.
fn apply_digits_to_template(template: &str, digits: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut digit_chars = digits.chars();
    for ch in template.chars() {
        if ch == DIGIT_PLACEHOLDER {
            match digit_chars.next() {
                Some(d) => out.push(d),
                None => break,
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_preservation_holds_for_plain_sequence() {
        let mut aytf = AsYouTypeFormatter::new(RegionCode::us());
        let mut last = String::new();
        for c in "6502530000".chars() {
            last = aytf.input_digit(c).to_string();
        }
        let digits_only: String = last.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(digits_only, "6502530000");
    }

    #[test]
    fn leading_plus_is_preserved() {
        let mut aytf = AsYouTypeFormatter::new(RegionCode::us());
        let mut last = String::new();
        for c in "+16502530000".chars() {
            last = aytf.input_digit(c).to_string();
        }
        assert!(last.starts_with('+'));
    }

    #[test]
    fn remembered_position_lands_on_entered_digit() {
        let mut aytf = AsYouTypeFormatter::new(RegionCode::us());
        for c in "650253".chars() {
            aytf.input_digit(c);
        }
        let out = aytf.input_digit_and_remember_position('0').to_string();
        let pos = aytf.get_remembered_position();
        assert!(pos <= out.len());
    }

    #[test]
    fn non_digit_after_digits_degrades_to_unformattable() {
        let mut aytf = AsYouTypeFormatter::new(RegionCode::us());
        for c in "650253".chars() {
            aytf.input_digit(c);
        }
        let out = aytf.input_digit('a');
        assert!(out.ends_with('a'));
    }

    #[test]
    fn clear_resets_state() {
        let mut aytf = AsYouTypeFormatter::new(RegionCode::us());
        aytf.input_digit('6');
        aytf.input_digit('5');
        aytf.clear();
        assert_eq!(aytf.get_current_output(), "");
    }
}
