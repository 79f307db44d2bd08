mod common;

use chrono::{DateTime, TimeZone, Utc};
use wayfarer_core::prelude::*;
use wayfarer_core::time::{resolve_time_at, ZoneRule};

fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

#[test]
fn city_zone_comes_from_its_country() {
    let zones = ZoneTable::default();
    let info = resolve_time_at(&zones, &("Tokyo, Japan", Some("Japan")), noon());
    assert_eq!(info.time_zone, "Asia/Tokyo");
    assert_eq!(info.location, "Japan");
    assert_eq!(info.time, "Mon, Oct 19, 2026, 9:00:00 PM");
}

#[test]
fn per_city_entries_and_country_default() {
    let zones = ZoneTable::default();
    let melbourne = zones.resolve_at(&("Melbourne, Australia", Some("Australia")), noon());
    assert_eq!(melbourne.time_zone, "Australia/Melbourne");
    assert_eq!(melbourne.time, "Mon, Oct 19, 2026, 11:00:00 PM");

    let perth = zones.resolve_at(&("Perth, Australia", Some("Australia")), noon());
    assert_eq!(perth.time_zone, "Australia/Sydney");
}

#[test]
fn unknown_country_falls_back_to_utc_keeping_label() {
    let zones = ZoneTable::default();
    let info = zones.resolve_at(&("Paris, France", Some("France")), noon());
    assert_eq!(info.time_zone, "UTC");
    assert_eq!(info.location, "France");
    assert_eq!(info.time, "Mon, Oct 19, 2026, 12:00:00 PM");
}

#[test]
fn country_is_inferred_from_place_names() {
    let zones = ZoneTable::default();
    let cases = [
        ("Angkor Wat, Cambodia", "Asia/Phnom_Penh", "Cambodia", "7:00:00 PM"),
        ("Taj Mahal, India", "Asia/Kolkata", "India", "5:30:00 PM"),
        ("Bora Bora, French Polynesia", "Pacific/Tahiti", "French Polynesia", "2:00:00 AM"),
        ("Copacabana Beach, Brazil", "America/Sao_Paulo", "Brazil", "9:00:00 AM"),
    ];
    for (name, zone, location, clock) in cases {
        let info = zones.resolve_at(&(name, None::<&str>), noon());
        assert_eq!(info.time_zone, zone, "{name}");
        assert_eq!(info.location, location, "{name}");
        assert!(info.time.ends_with(clock), "{name}: {}", info.time);
    }
}

#[test]
fn uninferable_name_uses_utc_label() {
    let info = ZoneTable::default().resolve_at(&("Great Barrier Reef", None::<&str>), noon());
    assert_eq!(info.time_zone, "UTC");
    assert_eq!(info.location, "UTC");
    assert!(info.is_available());
}

#[test]
fn invalid_zone_yields_sentinel() {
    let zones = ZoneTable::empty().with_country("Atlantis", ZoneRule::Single("Ocean/Atlantis".into()));
    let info = zones.resolve_at(&("Poseidonia", Some("Atlantis")), noon());
    assert_eq!(info, TimeInfo::unavailable());
    assert_eq!(info.time, "Time unavailable");
    assert_eq!(info.location, "Unknown");
    assert_eq!(info.time_zone, "UTC");
}

#[test]
fn search_results_resolve_through_the_default_table() {
    let db = common::bundled();
    for hit in search(&db, "a") {
        let info = resolve_time(&hit);
        assert!(info.is_available(), "{}", hit.name());
        assert!(!info.time.is_empty());
    }
}

#[test]
fn display_line() {
    let info = ZoneTable::default().resolve_at(&("Kyoto, Japan", Some("Japan")), noon());
    assert_eq!(
        info.to_string(),
        "🕐 Local time in Japan: Mon, Oct 19, 2026, 9:00:00 PM"
    );
}

#[test]
fn custom_table_infers_in_registration_order() {
    let zones = ZoneTable::empty()
        .with_country("Peru", ZoneRule::Single("America/Lima".into()))
        .with_country("Chile", ZoneRule::Single("America/Santiago".into()))
        .infer_from_name("Peru")
        .infer_from_name("Chile");
    let info = zones.resolve_at(&("Machu Picchu, Peru (near Chile)", None::<&str>), noon());
    assert_eq!(info.time_zone, "America/Lima");
    assert_eq!(info.location, "Peru");
}
