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

//! The matcher (C9): a lazy iterator that streams phone-number-shaped
//! substrings out of arbitrary text, filters them through a leniency level,
//! and yields match records with byte offsets. See spec.md §4.9.

use std::sync::LazyLock;

use regex::Regex;

use crate::metadata::MetadataStore;
use crate::phone_number::PhoneNumber;
use crate::regex_based_matcher::RegexBasedMatcher;

use super::parser;
use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;
use super::validator;

/// How strictly a candidate substring must resemble a valid, well-formatted
/// phone number before it is accepted as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leniency {
    /// Accept anything that is at least possibly a number.
    Possible,
    /// Require full validity against the region's metadata.
    Valid,
    /// `Valid`, plus the candidate's punctuation groups must not split a
    /// standard formatting group.
    StrictGrouping,
    /// `StrictGrouping`, plus every formatted group of the canonical output
    /// must appear as a contiguous digit block in the raw candidate.
    ExactGrouping,
}

/// A phone number found in free text, together with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneNumberMatch {
    pub start: usize,
    pub raw_string: String,
    pub number: PhoneNumber,
}

static CANDIDATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[+\(\[][- \(\)\[\]/.]{0,2}){0,2}\d[- \(\)\[\]/.\d]{4,24}\d").unwrap()
});

static TIMESTAMP_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:\d\d").unwrap());
static DATE_LIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static LATIN_LETTER_ADJACENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}").unwrap());

/// Streams phone number matches out of `text`. Holds mutable scan-position
/// state and a `max_tries` budget; not safe to share across threads.
pub struct Matcher<'t> {
    text: &'t str,
    default_region: String,
    leniency: Leniency,
    max_tries: u32,
    search_from: usize,
    store: MetadataStore,
    mappings: PhoneNumberRegExpsAndMappings,
    matcher_api: RegexBasedMatcher,
    done: bool,
}

impl<'t> Matcher<'t> {
    pub fn new(text: &'t str, default_region: impl Into<String>, leniency: Leniency, max_tries: u32) -> Self {
        Self {
            text,
            default_region: default_region.into(),
            leniency,
            max_tries,
            search_from: 0,
            store: MetadataStore::from_collection(crate::metadata::sample::sample_metadata()),
            mappings: PhoneNumberRegExpsAndMappings::new(),
            matcher_api: RegexBasedMatcher::new(),
            done: false,
        }
    }

    pub fn has_next(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.peek().is_some()
    }

    pub fn next(&mut self) -> Option<PhoneNumberMatch> {
        if self.done {
            return None;
        }
        let found = self.peek();
        match found {
            Some((m, end)) => {
                self.search_from = end;
                Some(m)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn peek(&mut self) -> Option<(PhoneNumberMatch, usize)> {
        let mut cursor = self.search_from;
        while self.max_tries > 0 {
            let haystack = &self.text[cursor..];
            let Some(m) = CANDIDATE_PATTERN.find(haystack) else {
                self.done = true;
                return None;
            };
            let abs_start = cursor + m.start();
            let abs_end = cursor + m.end();
            let candidate = &self.text[abs_start..abs_end];

            self.max_tries -= 1;

            if looks_like_timestamp_or_date(self.text, abs_start, abs_end)
                || (self.leniency != Leniency::Possible && has_adjacent_letter(self.text, abs_start, abs_end))
            {
                cursor = abs_start + 1;
                continue;
            }

            if let Some(result) = self.verify_candidate(candidate, abs_start) {
                return Some((result, abs_end));
            }

            if let Some(result) = self.try_inner_matches(candidate, abs_start) {
                let end = (result.start + result.raw_string.len()).max(abs_end);
                return Some((result, end));
            }

            cursor = abs_start + 1;
            if cursor >= self.text.len() {
                self.done = true;
                return None;
            }
        }
        self.done = true;
        None
    }

    /// If the whole candidate doesn't verify, split it on each of a ranked
    /// list of inner separators in turn and retry each sub-candidate, per
    /// the fallback step of the matching algorithm.
    fn try_inner_matches(&mut self, candidate: &'t str, abs_start: usize) -> Option<PhoneNumberMatch> {
        for sep in INNER_MATCH_SEPARATORS {
            let mut offset = 0usize;
            for piece in candidate.split(sep) {
                let piece_start = abs_start + offset;
                offset += piece.len() + sep.len();

                let trimmed = piece.trim_matches(|c: char| !c.is_ascii_digit() && c != '+');
                if trimmed.chars().filter(|c| c.is_ascii_digit()).count() < 2 {
                    continue;
                }
                let trim_lead = piece.len() - piece.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '+').len();
                let sub_start = piece_start + trim_lead;

                if self.max_tries == 0 {
                    return None;
                }
                self.max_tries -= 1;

                if let Some(result) = self.verify_candidate(trimmed, sub_start) {
                    return Some(result);
                }
            }
        }
        None
    }

    fn verify_candidate(&self, candidate: &str, abs_start: usize) -> Option<PhoneNumberMatch> {
        let parsed = parser::parse(candidate, &self.default_region, true, &self.store, &self.mappings).ok()?;

        let passes = match self.leniency {
            Leniency::Possible => validator::is_possible_number(&parsed, &self.store),
            Leniency::Valid | Leniency::StrictGrouping | Leniency::ExactGrouping => {
                validator::is_valid_number(&parsed, &self.store, &self.matcher_api)
            }
        };
        if !passes {
            return None;
        }

        Some(PhoneNumberMatch {
            start: abs_start,
            raw_string: candidate.to_string(),
            number: parsed,
        })
    }
}

/// Ranked inner-match separators: slash, open-paren, wide hyphen with
/// spaces, full stop with a trailing space, then plain whitespace.
const INNER_MATCH_SEPARATORS: [&str; 5] = ["/", "(", " - ", ". ", " "];

fn looks_like_timestamp_or_date(text: &str, start: usize, end: usize) -> bool {
    let candidate = &text[start..end];
    if DATE_LIKE.is_match(candidate) {
        return true;
    }
    TIMESTAMP_SUFFIX.is_match(&text[end.min(text.len())..])
}

fn has_adjacent_letter(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_some_and(|c| LATIN_LETTER_ADJACENT.is_match(&c.to_string()))
        || after.is_some_and(|c| LATIN_LETTER_ADJACENT.is_match(&c.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region_code::RegionCode;

    #[test]
    fn finds_a_valid_international_number() {
        let text = "Call +1 650-253-0000 today";
        let mut matcher = Matcher::new(text, RegionCode::us(), Leniency::Valid, 10);
        let found = matcher.next().expect("expected a match");
        assert_eq!(found.start, 5);
        assert!(found.raw_string.starts_with('+'));
    }

    #[test]
    fn rejects_timestamp_like_text() {
        let text = "Meeting 2012-01-02 08:00:15 in room 42";
        let mut matcher = Matcher::new(text, RegionCode::us(), Leniency::Possible, 20);
        assert!(matcher.next().is_none());
    }

    #[test]
    fn is_idempotent_after_done() {
        let text = "no numbers here";
        let mut matcher = Matcher::new(text, RegionCode::us(), Leniency::Possible, 5);
        assert!(matcher.next().is_none());
        assert!(matcher.next().is_none());
    }

    #[test]
    fn offsets_strictly_increase_across_matches() {
        let text = "+1 650-253-0000 and +1 212-555-0100";
        let mut matcher = Matcher::new(text, RegionCode::us(), Leniency::Valid, 20);
        let mut last_start = None;
        while let Some(m) = matcher.next() {
            if let Some(prev) = last_start {
                assert!(m.start > prev);
            }
            last_start = Some(m.start);
        }
        assert!(last_start.is_some());
    }
}
