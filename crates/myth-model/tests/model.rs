//! Tests for the figurine model: vocabularies, equality scope, derived values.

use std::collections::HashSet;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use myth_model::vocabulary::{
    ANNIVERSARIES, CATEGORIES, DISTRIBUTION_CHANNELS, DISTRIBUTORS, LINE_UPS, SERIES,
};
use myth_model::{
    Anniversary, Category, Distribution, DistributionChannel, Distributor, Figurine, LineUp,
    Series, SourceFigurine, Status,
};

fn identified_figurine() -> Figurine {
    Figurine {
        base_name: "Pegasus Seiya".to_string(),
        line_up: Some(LineUp::MythClothEx),
        series: Some(Series::SaintSeiya),
        category: Some(Category::V1),
        revival: true,
        ..Figurine::default()
    }
}

#[test]
fn vocabulary_resolves_known_literals() {
    assert_eq!(LINE_UPS.resolve("Myth Cloth EX"), Some(LineUp::MythClothEx));
    assert_eq!(SERIES.resolve("Soul of Gold"), Some(Series::Sog));
    assert_eq!(CATEGORIES.resolve("Gold Saint"), Some(Category::Gold));
    assert_eq!(
        DISTRIBUTION_CHANNELS.resolve("Other Limited Edition"),
        Some(DistributionChannel::Other)
    );
    assert_eq!(DISTRIBUTORS.resolve("DAM"), Some(Distributor::Dam));
    assert_eq!(ANNIVERSARIES.resolve("40"), Some(Anniversary::A40));
}

#[test]
fn vocabulary_unknown_degrades_to_none() {
    assert_eq!(CATEGORIES.resolve("Platinum Saint"), None);
    assert_eq!(LINE_UPS.resolve(""), None);
    assert_eq!(ANNIVERSARIES.resolve("25"), None);
}

#[test]
fn vocabulary_matching_is_case_sensitive_and_untrimmed() {
    assert_eq!(CATEGORIES.resolve("gold saint"), None);
    assert_eq!(CATEGORIES.resolve("Gold Saint "), None);
    assert_eq!(DISTRIBUTORS.resolve("dam"), None);
}

#[test]
fn metallic_touch_input_literal_is_not_the_display_text() {
    assert_eq!(
        LINE_UPS.resolve("Figuarts Zero Metallic Touch"),
        Some(LineUp::FiguartsZero)
    );
    assert_eq!(LINE_UPS.resolve("Figuarts Zero Touche Métallique"), None);
    assert_eq!(
        LineUp::FiguartsZero.description(),
        "Figuarts Zero Touche Métallique"
    );
}

#[test]
fn gold_category_display_text_diverges_from_input_literal() {
    assert_eq!(Category::Gold.description(), "Golden Saint");
    assert_eq!(CATEGORIES.resolve("Golden Saint"), None);
}

#[test]
fn equality_covers_identifying_attributes_only() {
    let mut a = identified_figurine();
    let mut b = identified_figurine();
    b.tamashii_url = Some("https://tamashiiweb.com/item/14976".to_string());
    b.remarks = Some("reissue batch".to_string());
    b.official_images = Some(vec!["img/seiya.jpg".to_string()]);
    b.distribution_jpy = Some(Distribution {
        base_price: Some(BigDecimal::from(22_000)),
        ..Distribution::default()
    });
    assert_eq!(a, b);

    a.revival = false;
    assert_ne!(a, b);
}

#[test]
fn hash_follows_the_equality_scope() {
    let a = identified_figurine();
    let mut b = identified_figurine();
    b.remarks = Some("metadata only".to_string());

    let mut seen = HashSet::new();
    seen.insert(a);
    assert!(seen.contains(&b));
}

#[test]
fn distribution_emptiness_requires_all_fields_absent() {
    assert!(Distribution::default().is_empty());

    let confirmed_only = Distribution {
        release_date_confirmed: Some(true),
        ..Distribution::default()
    };
    assert!(!confirmed_only.is_empty());
}

#[test]
fn status_derivation() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut figurine = identified_figurine();

    assert_eq!(figurine.status(today), Status::Prototype);

    let mut distribution = Distribution {
        release_date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        release_date_confirmed: Some(true),
        ..Distribution::default()
    };
    figurine.distribution_jpy = Some(distribution.clone());
    assert_eq!(figurine.status(today), Status::Released);

    distribution.release_date = Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    figurine.distribution_jpy = Some(distribution.clone());
    assert_eq!(figurine.status(today), Status::FutureRelease);

    distribution.release_date_confirmed = Some(false);
    figurine.distribution_jpy = Some(distribution.clone());
    assert_eq!(figurine.status(today), Status::ReleaseTbd);

    distribution.release_date = None;
    distribution.release_date_confirmed = None;
    distribution.first_announcement_date = Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    figurine.distribution_jpy = Some(distribution);
    assert_eq!(figurine.status(today), Status::Unreleased);
}

#[test]
fn displayable_name_appends_fixed_order_qualifiers() {
    let mut figurine = identified_figurine();
    figurine.revival = false;
    assert_eq!(figurine.displayable_name(), "Pegasus Seiya");

    figurine.oce = true;
    figurine.revival = true;
    figurine.anniversary = Some(Anniversary::A20);
    assert_eq!(
        figurine.displayable_name(),
        "Pegasus Seiya (Original Color Edition) (Revival) (20th Anniversary)"
    );
}

#[test]
fn source_record_binds_export_column_headers() {
    let row = serde_json::json!({
        "Base Name": "Dragon Shiryu",
        "Price (JPY)": "¥7,150",
        "Release (JPY)": "6/2021",
        "Distributor (MXN)": "DTM",
        "Official Images": "a.jpg,b.jpg",
    });
    let source: SourceFigurine = serde_json::from_value(row).expect("deserialize source row");
    assert_eq!(source.base_name, "Dragon Shiryu");
    assert_eq!(source.price_jpy.as_deref(), Some("¥7,150"));
    assert_eq!(source.release_jpy.as_deref(), Some("6/2021"));
    assert_eq!(source.distributor_mxn.as_deref(), Some("DTM"));
    assert_eq!(source.official_images.as_deref(), Some("a.jpg,b.jpg"));
    assert_eq!(source.remarks, None);
    assert_eq!(source.preorder_mxn, None);
}
