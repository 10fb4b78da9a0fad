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

//! The structured number produced by the parser and consumed by the
//! validator and formatters. Immutable once parsed except through explicit
//! field edits by the caller.

/// Where the country calling code of a parsed number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CountryCodeSource {
    /// The country_code is derived based on a phone number with a leading "+",
    /// e.g. the French number "+33 1 42 68 53 00".
    FromNumberWithPlusSign,
    /// The country_code is derived based on a phone number with a leading IDD,
    /// e.g. the French number "011 33 1 42 68 53 00", as dialled from US.
    FromNumberWithIdd,
    /// The country_code is derived based on a phone number without a leading
    /// "+", e.g. the French number "33 1 42 68 53 00" when parsed in the
    /// context of country calling code "33".
    FromNumberWithoutPlusSign,
    /// The country_code is derived NOT based on the phone number itself, but
    /// from the default country code passed in by the caller.
    FromDefaultCountry,
    /// The country code is unspecified: this is used when no information on
    /// the country code has been found.
    #[default]
    Unspecified,
}

/// A fully parsed, structured telephone number.
///
/// `national_number` is kept as a digit string rather than an integer so
/// that leading zeros (tracked separately via `italian_leading_zero` and
/// `number_of_leading_zeros`) are never lost.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneNumber {
    pub country_code: i32,
    national_number: String,
    pub extension: Option<String>,
    pub italian_leading_zero: bool,
    pub number_of_leading_zeros: i32,
    pub raw_input: Option<String>,
    pub country_code_source: CountryCodeSource,
    pub preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn new(country_code: i32, national_number: impl Into<String>) -> Self {
        Self {
            country_code,
            national_number: national_number.into(),
            ..Default::default()
        }
    }

    /// The national significant number, all ASCII digits, no leading `+`,
    /// country code, national prefix, or extension.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn set_national_number(&mut self, digits: impl Into<String>) {
        self.national_number = digits.into();
    }

    pub fn has_extension(&self) -> bool {
        self.extension.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Returns a copy containing only the fields set by `parse()` (as opposed
    /// to `parse_and_keep_raw_input()`): country code, national number,
    /// extension, and leading-zero bookkeeping. Used for equality checks that
    /// should ignore raw input / country_code_source, per the parse-format
    /// round trip property.
    pub fn core_fields_only(&self) -> PhoneNumber {
        PhoneNumber {
            country_code: self.country_code,
            national_number: self.national_number.clone(),
            extension: self.extension.clone(),
            italian_leading_zero: self.italian_leading_zero,
            number_of_leading_zeros: if self.italian_leading_zero {
                self.number_of_leading_zeros
            } else {
                0
            },
            raw_input: None,
            country_code_source: CountryCodeSource::Unspecified,
            preferred_domestic_carrier_code: None,
        }
    }
}
