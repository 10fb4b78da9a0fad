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

//! Wire schema for the metadata bundle (spec.md §6). A separate, external
//! tool compiles human-authored region tables into a `bincode`-serialized
//! `PhoneMetadataCollection`; this crate only ever deserializes it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberDesc {
    pub national_number_pattern: String,
    pub possible_length: Vec<i32>,
    pub possible_length_local_only: Vec<i32>,
    pub example_number: String,
}

impl PhoneNumberDesc {
    pub fn has_national_number_pattern(&self) -> bool {
        !self.national_number_pattern.is_empty()
    }

    pub fn has_example_number(&self) -> bool {
        !self.example_number.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub pattern: String,
    pub format: String,
    pub leading_digits_pattern: Vec<String>,
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_optional_when_formatting: bool,
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneMetadata {
    pub id: String,
    pub country_code: i32,
    pub international_prefix: String,
    pub preferred_international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub preferred_extn_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub national_prefix_transform_rule: Option<String>,
    pub national_prefix_formatting_rule: Option<String>,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub emergency: PhoneNumberDesc,
    pub voicemail: PhoneNumberDesc,
    pub short_code: PhoneNumberDesc,
    pub standard_rate: PhoneNumberDesc,
    pub carrier_specific: PhoneNumberDesc,
    pub sms_services: PhoneNumberDesc,
    pub no_international_dialling: PhoneNumberDesc,

    pub number_format: Vec<NumberFormat>,
    pub intl_number_format: Vec<NumberFormat>,

    pub main_country_for_code: bool,
    pub leading_digits: Option<String>,
    pub mobile_number_portable_region: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneMetadataCollection {
    pub metadata: Vec<PhoneMetadata>,
}
