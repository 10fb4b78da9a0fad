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

//! The validator / classifier (C6): possible-length checks, full validity,
//! and number-type classification (spec.md §4.6). Type precedence follows
//! the teacher's `get_number_desc_by_type` ordering: premium, toll-free,
//! shared-cost, voip, personal, pager, uan, voicemail, fixed line, mobile,
//! fixed-or-mobile, unknown.

use crate::interfaces::MatcherApi;
use crate::metadata::{MetadataStore, PhoneMetadata};
use crate::phone_number::PhoneNumber;
use crate::region_code::RegionCode;

use super::enums::{NumberLengthType, PhoneNumberType};
use super::errors::ValidationError;
use super::helper_functions::{get_number_desc_by_type, is_match, test_number_length_with_unknown_type};

pub(super) fn is_possible_number_with_reason(
    phone_number: &PhoneNumber,
    store: &MetadataStore,
) -> Result<NumberLengthType, ValidationError> {
    if !store.has_calling_code(phone_number.country_code) {
        return Err(ValidationError::InvalidCountryCode);
    }
    let region = store.main_region_for_calling_code(phone_number.country_code);
    let metadata = store
        .get_by_region(region)
        .ok_or(ValidationError::InvalidCountryCode)?;
    test_number_length_with_unknown_type(phone_number.national_number(), metadata)
}

pub(super) fn is_possible_number(phone_number: &PhoneNumber, store: &MetadataStore) -> bool {
    is_possible_number_with_reason(phone_number, store).is_ok()
}

fn metadata_for_number<'a>(phone_number: &PhoneNumber, store: &'a MetadataStore) -> Option<&'a PhoneMetadata> {
    let region = store.main_region_for_calling_code(phone_number.country_code);
    store.get_by_region(region)
}

pub(super) fn get_number_type(
    phone_number: &PhoneNumber,
    store: &MetadataStore,
    matcher: &dyn MatcherApi,
) -> PhoneNumberType {
    let Some(metadata) = metadata_for_number(phone_number, store) else {
        return PhoneNumberType::Unknown;
    };
    get_number_type_for_metadata(phone_number.national_number(), metadata, matcher)
}

fn get_number_type_for_metadata(
    national_number: &str,
    metadata: &PhoneMetadata,
    matcher: &dyn MatcherApi,
) -> PhoneNumberType {
    if !is_match(matcher, national_number, &metadata.general_desc) {
        return PhoneNumberType::Unknown;
    }

    const PRECEDENCE: [PhoneNumberType; 8] = [
        PhoneNumberType::PremiumRate,
        PhoneNumberType::TollFree,
        PhoneNumberType::SharedCost,
        PhoneNumberType::VoIP,
        PhoneNumberType::PersonalNumber,
        PhoneNumberType::Pager,
        PhoneNumberType::UAN,
        PhoneNumberType::VoiceMail,
    ];
    for candidate in PRECEDENCE {
        if is_match(matcher, national_number, get_number_desc_by_type(metadata, candidate)) {
            return candidate;
        }
    }

    let fixed_line_matches = is_match(matcher, national_number, &metadata.fixed_line);
    let mobile_matches = is_match(matcher, national_number, &metadata.mobile);
    if fixed_line_matches && mobile_matches {
        PhoneNumberType::FixedLineOrMobile
    } else if fixed_line_matches {
        PhoneNumberType::FixedLine
    } else if mobile_matches {
        PhoneNumberType::Mobile
    } else {
        PhoneNumberType::Unknown
    }
}

pub(super) fn is_valid_number(phone_number: &PhoneNumber, store: &MetadataStore, matcher: &dyn MatcherApi) -> bool {
    let region = get_region_code_for_number(phone_number, store);
    is_valid_number_for_region(phone_number, region, store, matcher)
}

pub(super) fn is_valid_number_for_region(
    phone_number: &PhoneNumber,
    region: &str,
    store: &MetadataStore,
    matcher: &dyn MatcherApi,
) -> bool {
    let Some(metadata) = store.get_by_region(region) else {
        return false;
    };
    if metadata.country_code != phone_number.country_code
        && !(region == RegionCode::un001() && store.has_calling_code(phone_number.country_code))
    {
        return false;
    }
    get_number_type_for_metadata(phone_number.national_number(), metadata, matcher) != PhoneNumberType::Unknown
}

pub(super) fn get_region_code_for_number<'s>(phone_number: &PhoneNumber, store: &'s MetadataStore) -> &'s str {
    store.main_region_for_calling_code(phone_number.country_code)
}

pub(super) fn is_number_geographical(
    phone_number: &PhoneNumber,
    store: &MetadataStore,
    matcher: &dyn MatcherApi,
) -> bool {
    let number_type = get_number_type(phone_number, store, matcher);
    matches!(
        number_type,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
    )
}
