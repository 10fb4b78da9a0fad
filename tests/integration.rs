//! Integration tests against the public API, exercising the bundled sample
//! metadata the same way an external caller of this crate would.

use telenumber::region_code::RegionCode;
use telenumber::{
    AsYouTypeFormatter, Leniency, Matcher, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil,
};

#[test]
fn parses_formats_and_validates_a_national_input() {
    let util = PhoneNumberUtil::new();
    let number = util.parse("(650) 253-0000", RegionCode::us()).unwrap();

    assert_eq!(number.country_code, 1);
    assert!(util.is_valid_number(&number));
    assert_eq!(util.format(&number, PhoneNumberFormat::E164), "+16502530000");
    assert_eq!(util.get_number_type(&number), PhoneNumberType::FixedLineOrMobile);
}

#[test]
fn parse_is_robust_to_punctuation_and_extensions() {
    let util = PhoneNumberUtil::new();
    let a = util.parse("+1 (650) 253-0000", RegionCode::get_unknown()).unwrap();
    let b = util.parse("+1.650.253.0000", RegionCode::get_unknown()).unwrap();
    assert_eq!(a.core_fields_only(), b.core_fields_only());
}

#[test]
fn as_you_type_formatter_builds_up_a_national_number() {
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    let mut last = String::new();
    for ch in "6502530000".chars() {
        last = formatter.input_digit(ch).to_string();
    }
    assert!(last.contains("253"));
    assert!(last.contains("0000"));
}

#[test]
fn matcher_finds_every_number_in_free_text() {
    let text = "Reach the front desk at +1 650-253-0000 or the toll-free line at +1 800-253-0000.";
    let mut matcher = Matcher::new(text, RegionCode::us(), Leniency::Valid, 50);
    let mut found = Vec::new();
    while let Some(m) = matcher.next() {
        found.push(m.number.national_number().to_string());
    }
    assert_eq!(found, vec!["6502530000", "8002530000"]);
}

#[test]
fn unknown_region_without_a_plus_prefix_is_rejected() {
    let util = PhoneNumberUtil::new();
    assert!(util.parse("650 253 0000", RegionCode::get_unknown()).is_err());
}
