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

//! End-to-end tests against the bundled sample metadata, exercising the
//! parser, validator and formatter together through `PhoneNumberUtil`.

use crate::region_code::RegionCode;
use crate::{ParseError, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil};

fn util() -> PhoneNumberUtil {
    PhoneNumberUtil::new()
}

#[test]
fn parses_and_formats_a_us_number() {
    let util = util();
    let number = util.parse("+1 650-253-0000", RegionCode::get_unknown()).unwrap();
    assert_eq!(number.country_code, 1);
    assert_eq!(number.national_number(), "6502530000");

    assert_eq!(util.format(&number, PhoneNumberFormat::National), "(650) 253-0000");
    assert_eq!(util.format(&number, PhoneNumberFormat::International), "+1 650-253-0000");
    assert_eq!(util.format(&number, PhoneNumberFormat::E164), "+16502530000");
    assert_eq!(util.format(&number, PhoneNumberFormat::RFC3966), "tel:+1-650-253-0000");
}

#[test]
fn parses_and_formats_a_gb_number_with_national_prefix_rule() {
    let util = util();
    let number = util.parse("+442087712924", RegionCode::get_unknown()).unwrap();
    assert_eq!(number.country_code, 44);
    assert_eq!(number.national_number(), "2087712924");
    assert_eq!(util.format(&number, PhoneNumberFormat::National), "020 8771 2924");
}

#[test]
fn garbage_input_is_rejected() {
    let util = util();
    assert!(util.parse("not a number", RegionCode::us()).is_err());
}

#[test]
fn unassigned_country_code_is_rejected() {
    let util = util();
    let err = util.parse("+999 12345", RegionCode::get_unknown()).unwrap_err();
    assert_eq!(err, ParseError::InvalidCountryCode);
}

#[test]
fn rfc3966_phone_context_matches_plain_plus_form() {
    let util = util();
    let a = util.parse("+1 650-253-0000", RegionCode::get_unknown()).unwrap();
    let b = util
        .parse("tel:+1-650-253-0000;phone-context=+1", RegionCode::get_unknown())
        .unwrap();
    assert_eq!(a.country_code, b.country_code);
    assert_eq!(a.national_number(), b.national_number());
}

#[test]
fn parse_format_round_trip_ignores_raw_input_fields() {
    let util = util();
    let original = util.parse("+1 650-253-0000", RegionCode::get_unknown()).unwrap();
    let e164 = util.format(&original, PhoneNumberFormat::E164);
    let reparsed = util.parse(e164.as_ref(), RegionCode::get_unknown()).unwrap();
    assert_eq!(original.core_fields_only(), reparsed.core_fields_only());
}

#[test]
fn e164_format_has_no_separators() {
    let util = util();
    let number = util.parse("+1 650-253-0000", RegionCode::get_unknown()).unwrap();
    let e164 = util.format(&number, PhoneNumberFormat::E164);
    assert!(e164.starts_with('+'));
    assert!(e164.chars().skip(1).all(|c| c.is_ascii_digit()));
}

#[test]
fn valid_numbers_are_always_possible() {
    let util = util();
    let number = util.parse("+1 650-253-0000", RegionCode::get_unknown()).unwrap();
    assert!(util.is_valid_number(&number));
    assert!(util.is_possible_number(&number));
}

#[test]
fn toll_free_number_is_classified_correctly() {
    let util = util();
    let number = util.parse("+1 800-253-0000", RegionCode::get_unknown()).unwrap();
    assert_eq!(util.get_number_type(&number), PhoneNumberType::TollFree);
}

#[test]
fn argentina_mobile_token_is_applied_via_national_prefix_transform() {
    let util = util();
    let number = util.parse("011 15-2345-6789", RegionCode::ar()).unwrap();
    assert_eq!(number.country_code, 54);
    assert!(number.national_number().starts_with('9'));
    assert_eq!(util.get_number_type(&number), PhoneNumberType::Mobile);
}

#[test]
fn non_geographical_region_reports_001() {
    let util = util();
    let number = util.parse("+800 1234 5678", RegionCode::get_unknown()).unwrap();
    assert_eq!(util.get_region_code_for_number(&number), RegionCode::un001());
}

#[test]
fn normalize_digits_only_is_idempotent() {
    use crate::normalizer::normalize_digits_only;
    let once = normalize_digits_only("+1 (650) 253-0000 ext. 12");
    let twice = normalize_digits_only(&once);
    assert_eq!(once, twice);
}
