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

//! The parser (C5): turns a free-form phone number string into a structured
//! [`PhoneNumber`]. See spec.md §4.5 for the staged algorithm this follows:
//! strip extension, determine country code, strip national prefix, validate
//! NSN length bounds.

use crate::metadata::MetadataStore;
use crate::phone_number::{CountryCodeSource, PhoneNumber};
use crate::region_code::RegionCode;
use crate::regex_util::{RegexConsume, RegexFullMatch};

use super::errors::{ExtractNumberError, NotANumberError, ParseError, ParseErrorInternal};
use super::helper_constants::{
    MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN, PLUS_SIGN,
    RFC3966_EXTN_PREFIX, RFC3966_ISDN_SUBADDRESS, RFC3966_PHONE_CONTEXT, RFC3966_PREFIX,
};
use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;

const MAX_INPUT_STRING_LENGTH: usize = 250;

/// Parsed, still region-relative halves of a number before national prefix
/// stripping and country code resolution are applied.
struct CountryCodeResult {
    country_code: i32,
    country_code_source: CountryCodeSource,
    rest: String,
}

fn strip_rfc3966_fields(number: &str) -> (String, Option<String>) {
    let mut national_number = number.to_string();
    let mut phone_context = None;

    if let Some(idx) = national_number.find(RFC3966_PHONE_CONTEXT) {
        let after = idx + RFC3966_PHONE_CONTEXT.len();
        let context_end = national_number[after..]
            .find(|c| c == ';')
            .map(|i| after + i)
            .unwrap_or(national_number.len());
        phone_context = Some(national_number[after..context_end].to_string());
        national_number.replace_range(idx..context_end, "");
    }

    if let Some(idx) = national_number.find(RFC3966_ISDN_SUBADDRESS) {
        national_number.truncate(idx);
    }

    if let Some(stripped) = national_number.strip_prefix(RFC3966_PREFIX) {
        national_number = stripped.to_string();
    }

    (national_number, phone_context)
}

fn maybe_strip_extension(number: &mut String, mappings: &PhoneNumberRegExpsAndMappings) -> Option<String> {
    let regexp = &mappings.extn_pattern;
    if let Some(m) = regexp.find(number) {
        // the pattern is anchored with `$`, so whatever it captures is the
        // extension; take the first non-empty capture group as the digits.
        if let Some(caps) = regexp.captures(number) {
            let digits = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|g| g.as_str())
                .find(|s| !s.is_empty())
                .map(|s| s.to_string());
            let start = m.start();
            number.truncate(start);
            return digits;
        }
    }
    None
}

fn extract_possible_number(
    number: &str,
    mappings: &PhoneNumberRegExpsAndMappings,
) -> Result<String, ExtractNumberError> {
    let start = mappings
        .valid_start_char_pattern
        .find(number)
        .ok_or(ExtractNumberError::NoValidStartCharacter)?
        .start();
    let mut candidate = number[start..].to_string();

    if let Some(caps) = mappings
        .capture_up_to_second_number_start_pattern
        .captures(&candidate)
    {
        if let Some(g) = caps.get(1) {
            candidate.truncate(g.end());
        }
    }

    let unwanted_end = &mappings.unwanted_end_char_pattern;
    while let Some(m) = unwanted_end.find(&candidate) {
        if m.start() + m.len() == candidate.len() {
            candidate.truncate(m.start());
        } else {
            break;
        }
    }

    if candidate.is_empty() {
        return Err(ExtractNumberError::NotANumber);
    }
    Ok(candidate)
}

fn strip_national_prefix_and_carrier_code(
    national_number: &mut String,
    metadata: &crate::metadata::PhoneMetadata,
    mappings: &PhoneNumberRegExpsAndMappings,
) {
    let Some(prefix_pattern) = metadata.national_prefix_for_parsing.as_deref() else {
        return;
    };
    if prefix_pattern.is_empty() {
        return;
    }
    let Ok(regexp) = mappings.regexp_cache.get_regex(prefix_pattern) else {
        return;
    };
    let (match_end, group_values): (usize, Vec<Option<String>>) = {
        let Some(caps) = regexp.captures_start(national_number) else {
            return;
        };
        let full_match = caps.get(0).unwrap();
        let groups = (1..caps.len())
            .map(|i| caps.get(i).map(|g| g.as_str().to_string()))
            .collect();
        (full_match.end(), groups)
    };
    // if there is a transform rule and the pattern captured a group, the
    // transform rule (with $1 etc.) replaces the matched prefix rather than
    // simply stripping it.
    if let Some(transform_rule) = metadata.national_prefix_transform_rule.as_deref() {
        if group_values.iter().any(|g| g.is_some()) {
            let mut replaced = transform_rule.to_string();
            for (i, group) in group_values.iter().enumerate() {
                if let Some(group) = group {
                    replaced = replaced.replace(&format!("${}", i + 1), group);
                }
            }
            replaced.push_str(&national_number[match_end..]);
            *national_number = replaced;
            return;
        }
    }
    national_number.replace_range(0..match_end, "");
}

/// Pulls the leading `0`s off `national_number`, returning the count removed.
/// Numbers like Italian fixed lines keep a meaningful leading zero; we track
/// it on the side rather than discard the information.
fn strip_leading_zeros(national_number: &mut String) -> i32 {
    let digits: Vec<char> = national_number.chars().collect();
    let mut count = 0i32;
    for &c in &digits {
        if c == '0' && (count as usize) < digits.len() - 1 {
            count += 1;
        } else {
            break;
        }
    }
    if count > 0 {
        national_number.replace_range(0..count as usize, "");
    }
    count
}

fn determine_country_code(
    full_number: &str,
    default_region_metadata: Option<&crate::metadata::PhoneMetadata>,
    store: &MetadataStore,
) -> Result<CountryCodeResult, ParseError> {
    if let Some(rest) = full_number.strip_prefix(PLUS_SIGN) {
        let (cc, remainder) = extract_country_code_digits(rest, store)?;
        return Ok(CountryCodeResult {
            country_code: cc,
            country_code_source: CountryCodeSource::FromNumberWithPlusSign,
            rest: remainder,
        });
    }

    let Some(default_metadata) = default_region_metadata else {
        return Ok(CountryCodeResult {
            country_code: 0,
            country_code_source: CountryCodeSource::Unspecified,
            rest: full_number.to_string(),
        });
    };

    // try stripping the region's IDD (international call prefix).
    if !default_metadata.international_prefix.is_empty() {
        let idd_pattern = format!("^(?:{})", default_metadata.international_prefix);
        if let Ok(re) = regex::Regex::new(&idd_pattern) {
            if let Some(m) = re.find(full_number) {
                let after_idd = &full_number[m.end()..];
                if let Ok((cc, remainder)) = extract_country_code_digits(after_idd, store) {
                    return Ok(CountryCodeResult {
                        country_code: cc,
                        country_code_source: CountryCodeSource::FromNumberWithIdd,
                        rest: remainder,
                    });
                }
                return Err(ParseError::TooShortAfterIdd);
            }
        }
    }

    Ok(CountryCodeResult {
        country_code: default_metadata.country_code,
        country_code_source: CountryCodeSource::FromDefaultCountry,
        rest: full_number.to_string(),
    })
}

fn extract_country_code_digits(
    s: &str,
    store: &MetadataStore,
) -> Result<(i32, String), ParseError> {
    if s.is_empty() {
        return Err(ParseError::InvalidCountryCode);
    }
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    let rest_start = digits.len();
    for len in 1..=MAX_LENGTH_COUNTRY_CODE.min(digits.len()) {
        if let Ok(candidate) = digits[..len].parse::<i32>() {
            if store.has_calling_code(candidate) {
                return Ok((candidate, s[rest_start.min(len)..].to_string()));
            }
        }
    }
    Err(ParseError::InvalidCountryCode)
}

/// Parses `number_to_parse` using `default_region` as fallback context.
/// `keep_raw_input` controls whether `raw_input` / `country_code_source` are
/// retained on the result (mirrors `parse` vs `parse_and_keep_raw_input`).
pub(super) fn parse(
    number_to_parse: &str,
    default_region: &str,
    keep_raw_input: bool,
    store: &MetadataStore,
    mappings: &PhoneNumberRegExpsAndMappings,
) -> Result<PhoneNumber, ParseErrorInternal> {
    if number_to_parse.is_empty() || number_to_parse.len() > MAX_INPUT_STRING_LENGTH {
        return Err(ParseError::from(NotANumberError::NotMatchedValidNumberPattern).into());
    }

    let (mut after_rfc3966, phone_context) = strip_rfc3966_fields(number_to_parse);

    // phone-context is either a `+<country code>` (RFC3966 "global-number") or
    // a domain name; it is never an ISO region code. A `+`-context supplies
    // the country code for a local number that does not carry its own `+`,
    // so splice it onto the front exactly as the plus-sign path would see it.
    // A domain-name context carries no country code information; it is only
    // checked for well-formedness and otherwise ignored.
    if let Some(ctx) = phone_context.as_deref() {
        if ctx.starts_with(PLUS_SIGN) {
            if !mappings.rfc3966_global_number_digits_pattern.full_match(ctx) {
                return Err(ParseError::from(NotANumberError::NotMatchedValidNumberPattern).into());
            }
            if !after_rfc3966.trim_start().starts_with(PLUS_SIGN) {
                after_rfc3966 = format!("{}{}", ctx, after_rfc3966);
            }
        } else if !mappings.rfc3966_domainname_pattern.full_match(ctx) {
            return Err(ParseError::from(NotANumberError::NotMatchedValidNumberPattern).into());
        }
    }

    let mut national_number_candidate = extract_possible_number(&after_rfc3966, mappings)
        .map_err(|e| ParseError::from(NotANumberError::from(e)))?;

    if !mappings
        .valid_phone_number_pattern
        .full_match(&national_number_candidate)
    {
        return Err(ParseError::from(NotANumberError::NotMatchedValidNumberPattern).into());
    }

    let extension = maybe_strip_extension(&mut national_number_candidate, mappings);

    let raw_input = if keep_raw_input {
        Some(number_to_parse.to_string())
    } else {
        None
    };

    let normalized = crate::normalizer::normalize(&national_number_candidate, mappings);
    let with_plus = if national_number_candidate.trim_start().starts_with(PLUS_SIGN) {
        format!("{}{}", PLUS_SIGN, normalized)
    } else {
        normalized
    };

    let default_region_metadata = if default_region.is_empty() || default_region == RegionCode::get_unknown() {
        None
    } else {
        store.get_by_region(default_region)
    };

    let cc_result = determine_country_code(&with_plus, default_region_metadata, store)?;

    if cc_result.country_code == 0 {
        return Err(ParseError::InvalidCountryCode.into());
    }

    let region_for_nsn_rules = store
        .main_region_for_calling_code(cc_result.country_code)
        .to_string();
    let nsn_metadata = store.get_by_region(&region_for_nsn_rules);

    let mut national_number = cc_result.rest;
    if let Some(meta) = nsn_metadata {
        strip_national_prefix_and_carrier_code(&mut national_number, meta, mappings);
    }

    let leading_zeros = strip_leading_zeros(&mut national_number);

    if national_number.len() < MIN_LENGTH_FOR_NSN {
        return Err(ParseError::TooShortNsn.into());
    }
    if national_number.len() > MAX_LENGTH_FOR_NSN {
        return Err(ParseError::TooLongNsn.into());
    }

    let mut result = PhoneNumber::new(cc_result.country_code, national_number);
    result.extension = extension;
    if leading_zeros > 0 {
        result.italian_leading_zero = true;
        result.number_of_leading_zeros = leading_zeros;
    }
    if keep_raw_input {
        result.raw_input = raw_input;
        result.country_code_source = cc_result.country_code_source;
    }
    Ok(result)
}
