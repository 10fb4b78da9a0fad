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

//! This module provides the main entry point for interacting with the phone
//! number handling library.
//!
//! It exposes the `PhoneNumberUtil` struct, which contains a comprehensive
//! set of methods for parsing, formatting, validating, and analyzing phone
//! numbers from various regions around the world.

use std::borrow::Cow;

use crate::config::ParsingOptions;
use crate::metadata::{MetadataLoadError, MetadataStore, PhoneMetadataCollection};
use crate::phone_number::PhoneNumber;
use crate::regex_based_matcher::RegexBasedMatcher;

use super::{
    enums::{MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType},
    errors::{GetExampleNumberError, ParseError, ValidationError},
    formatter, parser,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    validator,
};

/// The main struct for all phone number-related operations.
///
/// It encapsulates the library's core logic (metadata store, pattern
/// mappings, regex-based number matcher) and provides a public API for
/// parsing, formatting, and validating phone numbers. Stateless and
/// thread-safe: every method takes `&self`.
pub struct PhoneNumberUtil {
    store: MetadataStore,
    mappings: PhoneNumberRegExpsAndMappings,
    matcher: RegexBasedMatcher,
}

impl PhoneNumberUtil {
    /// Creates a new `PhoneNumberUtil` backed by the bundled sample metadata.
    /// Production deployments should use [`PhoneNumberUtil::new_for_metadata`]
    /// or [`PhoneNumberUtil::from_bundle_bytes`] with a real compiled bundle.
    pub fn new() -> Self {
        Self::new_for_metadata(crate::metadata::sample::sample_metadata())
    }

    pub fn new_for_metadata(collection: PhoneMetadataCollection) -> Self {
        Self {
            store: MetadataStore::from_collection(collection),
            mappings: PhoneNumberRegExpsAndMappings::new(),
            matcher: RegexBasedMatcher::new(),
        }
    }

    pub fn from_bundle_bytes(bytes: &[u8]) -> Result<Self, MetadataLoadError> {
        let store = MetadataStore::from_bytes(bytes)?;
        Ok(Self {
            store,
            mappings: PhoneNumberRegExpsAndMappings::new(),
            matcher: RegexBasedMatcher::new(),
        })
    }

    /// Parses a string into a `PhoneNumber`.
    pub fn parse(
        &self,
        number_to_parse: impl AsRef<str>,
        default_region: impl AsRef<str>,
    ) -> Result<PhoneNumber, ParseError> {
        parser::parse(
            number_to_parse.as_ref(),
            default_region.as_ref(),
            false,
            &self.store,
            &self.mappings,
        )
        .map_err(|err| err.into_public())
    }

    /// Parses a string into a `PhoneNumber`, keeping the raw input string and
    /// the detected country-code source.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: impl AsRef<str>,
        default_region: impl AsRef<str>,
    ) -> Result<PhoneNumber, ParseError> {
        parser::parse(
            number_to_parse.as_ref(),
            default_region.as_ref(),
            true,
            &self.store,
            &self.mappings,
        )
        .map_err(|err| err.into_public())
    }

    /// Parses using an explicit [`ParsingOptions`] record.
    pub fn parse_with_options(
        &self,
        number_to_parse: impl AsRef<str>,
        options: &ParsingOptions,
    ) -> Result<PhoneNumber, ParseError> {
        parser::parse(
            number_to_parse.as_ref(),
            &options.default_region,
            options.keep_raw_input,
            &self.store,
            &self.mappings,
        )
        .map_err(|err| err.into_public())
    }

    /// Formats a `PhoneNumber` into a standardized format.
    pub fn format<'a>(&self, phone_number: &'a PhoneNumber, number_format: PhoneNumberFormat) -> Cow<'a, str> {
        formatter::format(phone_number, number_format, &self.store, &self.mappings.regexp_cache)
    }

    /// Formats a `PhoneNumber` for dialing from `region_calling_from`: a
    /// plain national format if the number belongs to that same region, a
    /// leading-`1` NANPA-to-NANPA format between two NANPA countries, or an
    /// international dial string prefixed with the calling region's own
    /// international dialing prefix otherwise.
    pub fn format_out_of_country_calling_from(
        &self,
        phone_number: &PhoneNumber,
        region_calling_from: impl AsRef<str>,
    ) -> String {
        formatter::format_out_of_country_calling_from(phone_number, region_calling_from.as_ref(), &self.store, &self.mappings.regexp_cache)
    }

    /// Gets the National Significant Number (NSN) from a `PhoneNumber`.
    pub fn get_national_significant_number(&self, phone_number: &PhoneNumber) -> String {
        phone_number.national_number().to_string()
    }

    /// Determines the `PhoneNumberType` of a given `PhoneNumber`.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        validator::get_number_type(phone_number, &self.store, &self.matcher)
    }

    /// Performs a fast check to determine if a `PhoneNumber` is possibly
    /// valid (length-only, no pattern match).
    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        validator::is_possible_number(phone_number, &self.store)
    }

    /// Checks if a `PhoneNumber` is possibly valid and provides a reason if
    /// not.
    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> Result<NumberLengthType, ValidationError> {
        validator::is_possible_number_with_reason(phone_number, &self.store)
    }

    /// Performs a full validation of a `PhoneNumber` (pattern match against
    /// its region's metadata).
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        validator::is_valid_number(phone_number, &self.store, &self.matcher)
    }

    /// Validates a `PhoneNumber` for a specific region.
    pub fn is_valid_number_for_region(&self, phone_number: &PhoneNumber, region: impl AsRef<str>) -> bool {
        validator::is_valid_number_for_region(phone_number, region.as_ref(), &self.store, &self.matcher)
    }

    /// Checks if a `PhoneNumber` corresponds to a specific geographic area
    /// (fixed line, or fixed-line-or-mobile).
    pub fn is_number_geographical(&self, phone_number: &PhoneNumber) -> bool {
        validator::is_number_geographical(phone_number, &self.store, &self.matcher)
    }

    /// Gets the region code for a `PhoneNumber`. Returns `"001"` for
    /// non-geographical calling codes, `"ZZ"` if the calling code is unknown.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> &str {
        validator::get_region_code_for_number(phone_number, &self.store)
    }

    /// Gets the primary region code for a given country calling code.
    pub fn get_region_code_for_country_code(&self, country_code: i32) -> &str {
        self.store.main_region_for_calling_code(country_code)
    }

    /// Gets all region codes associated with a country calling code, main
    /// region first.
    pub fn get_region_codes_for_country_code(&self, country_code: i32) -> impl Iterator<Item = &str> {
        self.store
            .metadata_list_for_calling_code(country_code)
            .into_iter()
            .map(|m| m.id.as_str())
    }

    /// Retrieves the country calling code for a given region.
    pub fn get_country_code_for_region(&self, region_code: impl AsRef<str>) -> Option<i32> {
        self.store.calling_code_for_region(region_code.as_ref())
    }

    /// Gets an iterator over all supported two-letter region codes.
    pub fn get_supported_regions(&self) -> impl Iterator<Item = &str> {
        self.store.supported_regions()
    }

    /// Gets an iterator over all supported non-geographical calling codes.
    pub fn get_supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.store.supported_global_network_calling_codes()
    }

    /// Checks if a number string contains alphabetic characters.
    pub fn is_alpha_number(&self, number: impl AsRef<str>) -> bool {
        self.mappings.valid_alpha_phone_pattern.is_match(number.as_ref())
    }

    /// Converts all alpha characters in a phone number string to their
    /// corresponding digits, e.g. `"1-800-FLOWERS"` -> `"1-800-3569377"`.
    pub fn convert_alpha_characters_in_number(&self, number: impl AsRef<str>) -> String {
        crate::normalizer::normalize(number.as_ref(), &self.mappings)
    }

    /// Checks whether `number` looks like a phone number at all (viable
    /// punctuation/digit/alpha pattern, independent of any region).
    pub fn is_viable_phone_number(&self, number: impl AsRef<str>) -> bool {
        use crate::regex_util::RegexFullMatch;
        self.mappings
            .valid_phone_number_pattern
            .full_match(number.as_ref())
    }

    /// Checks if a region is part of the North American Numbering Plan.
    pub fn is_nanpa_country(&self, region_code: impl AsRef<str>) -> bool {
        self.store.calling_code_for_region(region_code.as_ref()) == Some(super::helper_constants::NANPA_COUNTRY_CODE)
    }

    /// Compares two phone numbers and returns their `MatchType`.
    pub fn is_number_match(&self, first_number: &PhoneNumber, second_number: &PhoneNumber) -> MatchType {
        if first_number.core_fields_only() == second_number.core_fields_only() {
            return MatchType::ExactMatch;
        }
        if first_number.country_code == second_number.country_code {
            if first_number.national_number() == second_number.national_number() {
                return MatchType::NsnMatch;
            }
        }
        if super::helper_functions::is_national_number_suffix_of_the_other(first_number, second_number) {
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Gets a valid example `PhoneNumber` for a specific region.
    pub fn get_example_number(&self, region_code: impl AsRef<str>) -> Result<PhoneNumber, GetExampleNumberError> {
        let region_code = region_code.as_ref();
        let metadata = self
            .store
            .get_by_region(region_code)
            .ok_or(GetExampleNumberError::InvalidRegionCode)?;
        if metadata.general_desc.example_number.is_empty() {
            return Err(GetExampleNumberError::NoExampleNumber);
        }
        self.parse(&metadata.general_desc.example_number, region_code)
            .map_err(GetExampleNumberError::FailedToParse)
    }

    /// Gets a valid example `PhoneNumber` for a specific number type, drawn
    /// from whichever region in the metadata store has example data for it.
    pub fn get_example_number_for_type(
        &self,
        number_type: PhoneNumberType,
    ) -> Result<PhoneNumber, GetExampleNumberError> {
        for region in self.store.supported_regions() {
            if let Some(metadata) = self.store.get_by_region(region) {
                let desc = super::helper_functions::get_number_desc_by_type(metadata, number_type);
                if !desc.example_number.is_empty() {
                    return self
                        .parse(&desc.example_number, region)
                        .map_err(GetExampleNumberError::FailedToParse);
                }
            }
        }
        Err(GetExampleNumberError::NoExampleNumber)
    }

    /// Truncates a `PhoneNumber` that is too long down to the longest
    /// possible length for its region, if doing so yields a possible number.
    pub fn truncate_too_long_number(&self, phone_number: &mut PhoneNumber) -> bool {
        if self.is_possible_number(phone_number) {
            return true;
        }
        let mut candidate = phone_number.clone();
        let mut national = candidate.national_number().to_string();
        while national.len() > 1 {
            national.pop();
            candidate.set_national_number(national.clone());
            if self.is_possible_number(&candidate) {
                *phone_number = candidate;
                return true;
            }
        }
        false
    }

    /// Whether this number can be dialled from another country, i.e. its
    /// type does not appear in the region's `no_international_dialling`
    /// description.
    pub fn can_be_internationally_dialled(&self, phone_number: &PhoneNumber) -> bool {
        let region = self.get_region_code_for_number(phone_number);
        let Some(metadata) = self.store.get_by_region(region) else {
            return true;
        };
        if !super::helper_functions::desc_has_data(&metadata.no_international_dialling) {
            return true;
        }
        !super::helper_functions::is_match(&self.matcher, phone_number.national_number(), &metadata.no_international_dialling)
    }
}

impl Default for PhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
