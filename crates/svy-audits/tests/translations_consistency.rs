//! Every registered error code has a message in every locale, and every
//! catalog key belongs to a registered check of the level its prefix names.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use svy_audits::AuditRegistries;
use svy_audits::translations::{SUPPORTED_LOCALES, Translations};
use svy_core::enums::ObjectType;

fn code_set<'r>(codes: impl Iterator<Item = &'r str>) -> BTreeSet<String> {
    codes.map(str::to_string).collect()
}

/// Registered codes per level.
fn registered_codes() -> Vec<(ObjectType, BTreeSet<String>)> {
    let registries = AuditRegistries::baseline();
    vec![
        (ObjectType::Interview, code_set(registries.interview.codes())),
        (ObjectType::Household, code_set(registries.household.codes())),
        (ObjectType::Home, code_set(registries.home.codes())),
        (ObjectType::Person, code_set(registries.person.codes())),
        (ObjectType::Journey, code_set(registries.journey.codes())),
        (ObjectType::VisitedPlace, code_set(registries.visited_place.codes())),
        (ObjectType::Trip, code_set(registries.trip.codes())),
        (ObjectType::Segment, code_set(registries.segment.codes())),
    ]
}

#[test]
fn every_level_registers_checks() {
    for (level, codes) in registered_codes() {
        assert!(!codes.is_empty(), "{level} has no baseline checks");
    }
}

#[test]
fn codes_are_prefixed_by_their_level() {
    for (level, codes) in registered_codes() {
        for code in codes {
            assert_eq!(ObjectType::from_error_code(&code), Some(level), "{code} is registered under {level}");
        }
    }
}

#[test]
fn codes_are_globally_unique() {
    let registries = AuditRegistries::baseline();
    let all: Vec<&str> = registries.codes().collect();
    let unique: BTreeSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len());
}

#[test]
fn every_code_has_a_message_in_every_locale() {
    let translations = Translations::builtin().unwrap();
    let registries = AuditRegistries::baseline();

    for locale in SUPPORTED_LOCALES {
        for code in registries.codes() {
            let message = translations
                .message(locale, code)
                .unwrap_or_else(|| panic!("{code} has no {locale} message"));
            assert!(!message.trim().is_empty(), "{code} has an empty {locale} message");
            assert_ne!(message, code, "{code} is not translated in {locale}");
        }
    }
}

#[test]
fn every_message_key_belongs_to_a_registered_check() {
    let translations = Translations::builtin().unwrap();
    let registered = registered_codes();

    for locale in SUPPORTED_LOCALES {
        for key in translations.keys(locale) {
            let level = ObjectType::from_error_code(key).unwrap_or_else(|| panic!("{locale} key {key} has no level prefix"));
            let (_, codes) = registered
                .iter()
                .find(|(registered_level, _)| *registered_level == level)
                .unwrap();
            assert!(
                codes.contains(key),
                "{locale} key {key} has no {level} check"
            );
        }
    }
}

#[test]
fn locales_share_the_same_keys() {
    let translations = Translations::builtin().unwrap();
    let en: Vec<&str> = translations.keys("en").collect();

    for locale in SUPPORTED_LOCALES {
        assert_eq!(translations.keys(locale).collect::<Vec<_>>(), en, "{locale}");
    }
    assert_eq!(translations.locales().collect::<Vec<_>>(), SUPPORTED_LOCALES);
}
