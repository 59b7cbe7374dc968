//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating filter inputs.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::Granularity;
use proptest::prelude::*;

/// Strategy for generating a single granularity
pub fn granularity_strategy() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Week),
        Just(Granularity::Month),
        Just(Granularity::Quarter),
        Just(Granularity::Year),
    ]
}

/// Strategy for generating a non-empty set of granularities in random order
pub fn granularity_set_strategy() -> impl Strategy<Value = Vec<Granularity>> {
    proptest::sample::subsequence(Granularity::ALL.to_vec(), 1..=Granularity::ALL.len())
        .prop_shuffle()
}

/// Strategy for generating the requested type names of a filter
pub fn type_names_strategy() -> impl Strategy<Value = Vec<String>> {
    granularity_set_strategy()
        .prop_map(|set| set.iter().map(|g| g.name().to_string()).collect())
}

/// Strategy for generating years well inside the supported calendar
pub fn year_strategy() -> impl Strategy<Value = i32> {
    1900i32..2200i32
}

/// Strategy for generating timezone names, including zones with DST
pub fn timezone_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("UTC"),
        Just("Europe/Berlin"),
        Just("America/New_York"),
        Just("America/Sao_Paulo"),
        Just("Asia/Kolkata"),
        Just("Pacific/Auckland"),
        Just("Pacific/Kiritimati"),
    ]
}

/// Strategy for generating locale tags, supported or not
pub fn locale_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("en"),
        Just("en-GB"),
        Just("de"),
        Just("fr-CA"),
        Just("es_MX"),
        Just("nl"),
        Just("it"),
        Just("pt-BR"),
        Just("sv"),
    ]
}

/// Strategy for generating instants between 1990 and 2060
pub fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (631_152_000i64..2_871_763_200i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}
