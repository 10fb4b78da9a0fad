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

//! A small, hand-written metadata bundle standing in for the real one that
//! would normally be produced by the (out-of-scope) XML-to-bundle compiler.
//! Covers just enough regions (US/CA share NANPA, GB, AR, and the "001"
//! non-geographical entity) to exercise every component against realistic
//! data without depending on an external build step.

use super::types::{NumberFormat, PhoneMetadata, PhoneMetadataCollection, PhoneNumberDesc};

fn desc(pattern: &str, lengths: &[i32]) -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: pattern.to_string(),
        possible_length: lengths.to_vec(),
        possible_length_local_only: Vec::new(),
        example_number: String::new(),
    }
}

fn empty_desc() -> PhoneNumberDesc {
    desc("", &[-1])
}

fn us() -> PhoneMetadata {
    let general = desc(r"[2-9]\d{9}", &[10]);
    let toll_free = desc(r"8(?:00|33|44|55|66|77|88)[2-9]\d{6}", &[10]);
    let premium_rate = desc(r"900[2-9]\d{6}", &[10]);
    PhoneMetadata {
        id: "US".to_string(),
        country_code: 1,
        international_prefix: "011".to_string(),
        preferred_international_prefix: None,
        national_prefix: Some("1".to_string()),
        preferred_extn_prefix: None,
        national_prefix_for_parsing: Some("1".to_string()),
        national_prefix_transform_rule: None,
        national_prefix_formatting_rule: None,
        fixed_line: general.clone(),
        mobile: general.clone(),
        toll_free,
        premium_rate,
        shared_cost: empty_desc(),
        personal_number: empty_desc(),
        voip: empty_desc(),
        pager: empty_desc(),
        uan: empty_desc(),
        emergency: empty_desc(),
        voicemail: empty_desc(),
        short_code: empty_desc(),
        standard_rate: empty_desc(),
        carrier_specific: empty_desc(),
        sms_services: empty_desc(),
        no_international_dialling: empty_desc(),
        general_desc: general,
        number_format: vec![NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})".to_string(),
            format: "($1) $2-$3".to_string(),
            leading_digits_pattern: vec!["[2-9]".to_string()],
            national_prefix_formatting_rule: None,
            national_prefix_optional_when_formatting: false,
            domestic_carrier_code_formatting_rule: None,
        }],
        intl_number_format: vec![NumberFormat {
            pattern: r"(\d{3})(\d{3})(\d{4})".to_string(),
            format: "$1-$2-$3".to_string(),
            leading_digits_pattern: vec!["[2-9]".to_string()],
            national_prefix_formatting_rule: None,
            national_prefix_optional_when_formatting: false,
            domestic_carrier_code_formatting_rule: None,
        }],
        main_country_for_code: true,
        leading_digits: None,
        mobile_number_portable_region: true,
    }
}

fn ca() -> PhoneMetadata {
    PhoneMetadata {
        id: "CA".to_string(),
        main_country_for_code: false,
        ..us()
    }
}

fn gb() -> PhoneMetadata {
    let general = desc(r"[1-9]\d{8,9}", &[9, 10]);
    PhoneMetadata {
        id: "GB".to_string(),
        country_code: 44,
        international_prefix: "00".to_string(),
        preferred_international_prefix: None,
        national_prefix: Some("0".to_string()),
        preferred_extn_prefix: None,
        national_prefix_for_parsing: Some("0".to_string()),
        national_prefix_transform_rule: None,
        national_prefix_formatting_rule: Some("0$1".to_string()),
        fixed_line: general.clone(),
        mobile: general.clone(),
        toll_free: desc(r"800\d{6,7}", &[9, 10]),
        premium_rate: empty_desc(),
        shared_cost: empty_desc(),
        personal_number: empty_desc(),
        voip: empty_desc(),
        pager: empty_desc(),
        uan: empty_desc(),
        emergency: empty_desc(),
        voicemail: empty_desc(),
        short_code: empty_desc(),
        standard_rate: empty_desc(),
        carrier_specific: empty_desc(),
        sms_services: empty_desc(),
        no_international_dialling: empty_desc(),
        general_desc: general,
        number_format: vec![NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})".to_string(),
            format: "$1 $2 $3".to_string(),
            leading_digits_pattern: vec!["[1-9]".to_string()],
            national_prefix_formatting_rule: Some("0$1".to_string()),
            national_prefix_optional_when_formatting: false,
            domestic_carrier_code_formatting_rule: None,
        }],
        intl_number_format: Vec::new(),
        main_country_for_code: true,
        leading_digits: None,
        mobile_number_portable_region: true,
    }
}

fn ar() -> PhoneMetadata {
    // Argentina: CC 54 is in the mobile-token set (a literal "9" is inserted
    // between the country code and the national number for mobiles when
    // dialled internationally). possible_lengths kept simple for the sample.
    let general = desc(r"\d{10,11}", &[10, 11]);
    PhoneMetadata {
        id: "AR".to_string(),
        country_code: 54,
        international_prefix: "00".to_string(),
        preferred_international_prefix: None,
        national_prefix: Some("0".to_string()),
        preferred_extn_prefix: None,
        national_prefix_for_parsing: Some("0(?:(11|[2-9]\\d{2,3})15)?".to_string()),
        national_prefix_transform_rule: Some("9$1".to_string()),
        national_prefix_formatting_rule: Some("0$1".to_string()),
        fixed_line: desc(r"\d{10}", &[10]),
        mobile: desc(r"9\d{10}", &[11]),
        toll_free: empty_desc(),
        premium_rate: empty_desc(),
        shared_cost: empty_desc(),
        personal_number: empty_desc(),
        voip: empty_desc(),
        pager: empty_desc(),
        uan: empty_desc(),
        emergency: empty_desc(),
        voicemail: empty_desc(),
        short_code: empty_desc(),
        standard_rate: empty_desc(),
        carrier_specific: empty_desc(),
        sms_services: empty_desc(),
        no_international_dialling: empty_desc(),
        general_desc: general,
        number_format: vec![NumberFormat {
            pattern: r"(\d{2})(\d{4})(\d{4})".to_string(),
            format: "$1 $2-$3".to_string(),
            leading_digits_pattern: vec!["[1-9]".to_string()],
            national_prefix_formatting_rule: Some("0$1".to_string()),
            national_prefix_optional_when_formatting: false,
            domestic_carrier_code_formatting_rule: None,
        }],
        intl_number_format: Vec::new(),
        main_country_for_code: true,
        leading_digits: None,
        mobile_number_portable_region: false,
    }
}

fn non_geo_800() -> PhoneMetadata {
    let general = desc(r"\d{8}", &[8]);
    PhoneMetadata {
        id: "001".to_string(),
        country_code: 800,
        international_prefix: "".to_string(),
        preferred_international_prefix: None,
        national_prefix: None,
        preferred_extn_prefix: None,
        national_prefix_for_parsing: None,
        national_prefix_transform_rule: None,
        national_prefix_formatting_rule: None,
        fixed_line: empty_desc(),
        mobile: empty_desc(),
        toll_free: general.clone(),
        premium_rate: empty_desc(),
        shared_cost: empty_desc(),
        personal_number: empty_desc(),
        voip: empty_desc(),
        pager: empty_desc(),
        uan: empty_desc(),
        emergency: empty_desc(),
        voicemail: empty_desc(),
        short_code: empty_desc(),
        standard_rate: empty_desc(),
        carrier_specific: empty_desc(),
        sms_services: empty_desc(),
        no_international_dialling: empty_desc(),
        general_desc: general,
        number_format: vec![NumberFormat {
            pattern: r"(\d{4})(\d{4})".to_string(),
            format: "$1 $2".to_string(),
            leading_digits_pattern: Vec::new(),
            national_prefix_formatting_rule: None,
            national_prefix_optional_when_formatting: false,
            domestic_carrier_code_formatting_rule: None,
        }],
        intl_number_format: Vec::new(),
        main_country_for_code: true,
        leading_digits: None,
        mobile_number_portable_region: false,
    }
}

/// The sample bundle used by tests, benches, and doc examples throughout
/// this crate.
pub fn sample_metadata() -> PhoneMetadataCollection {
    PhoneMetadataCollection {
        metadata: vec![us(), ca(), gb(), ar(), non_geo_800()],
    }
}
