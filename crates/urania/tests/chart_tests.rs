use urania::chart::{validate_cusps, ZodiacSign};
use urania::{AdjustedPosition, CelestialPosition, ChartSnapshot, HouseCusp, LayoutError};

#[test]
fn test_celestial_position_new_derives_sign_and_degree() {
    let venus = CelestialPosition::new("venus", 44.5);
    assert_eq!(venus.sign, ZodiacSign::Taurus);
    assert_eq!(venus.degree, 14);
    assert_eq!(venus.minutes(), 30);
    assert!(!venus.retrograde);

    let pluto = CelestialPosition::new("pluto", 359.99).retrograde(true);
    assert_eq!(pluto.sign, ZodiacSign::Pisces);
    assert_eq!(pluto.degree, 29);
    assert!(pluto.retrograde);
}

#[test]
fn test_zodiac_sign_start_longitude() {
    assert_eq!(ZodiacSign::Aries.start_longitude(), 0.0);
    assert_eq!(ZodiacSign::Libra.start_longitude(), 180.0);
    assert_eq!(ZodiacSign::Pisces.index(), 11);
}

#[test]
fn test_chart_snapshot_from_service_json() {
    let json = r#"
    {
      "bodies": [
        { "id": "Sun", "longitude": 44.5, "sign": "Taurus", "degree": 14.5, "isRetrograde": false },
        { "id": "Mercury", "longitude": 38.2, "sign": "taurus", "degree": 8.2, "isRetrograde": true },
        { "id": "TrueNode", "longitude": 190.0, "sign": "Libra", "degree": 10.0 }
      ],
      "houses": [
        { "house": 1, "longitude": 12.0 },
        { "house": 10, "longitude": 282.0 }
      ]
    }
    "#;

    let chart = ChartSnapshot::from_json(json).unwrap();
    assert_eq!(chart.bodies.len(), 3);
    assert_eq!(chart.bodies[0].degree, 14);
    assert_eq!(chart.bodies[1].sign, ZodiacSign::Taurus);
    assert!(chart.bodies[1].retrograde);
    assert!(!chart.bodies[2].retrograde);
    assert_eq!(chart.houses.len(), 2);
    assert!(chart.houses[1].is_angle());
}

#[test]
fn test_sample_chart_matches_schema() {
    let chart = ChartSnapshot::from_json(include_str!("../../../configs/natal_sample.json")).unwrap();
    assert!(chart.validate().is_ok());
    assert_eq!(chart.bodies.len(), 8);
    assert_eq!(chart.houses.len(), 12);
    assert_eq!(chart.houses.iter().filter(|cusp| cusp.is_angle()).count(), 4);

    let saturn = chart.bodies.iter().find(|b| b.id == "Saturn").unwrap();
    assert_eq!(saturn.sign, ZodiacSign::Capricorn);
    assert!(saturn.retrograde);
}

#[test]
fn test_chart_snapshot_houses_are_optional() {
    let json = r#"{ "bodies": [ { "id": "Moon", "longitude": 3.0, "sign": "Aries", "degree": 3 } ] }"#;
    let chart = ChartSnapshot::from_json(json).unwrap();
    assert!(chart.houses.is_empty());
}

#[test]
fn test_chart_snapshot_rejects_bad_degree() {
    let json = r#"{ "bodies": [ { "id": "Moon", "longitude": 3.0, "sign": "Aries", "degree": 31 } ] }"#;
    assert!(matches!(
        ChartSnapshot::from_json(json),
        Err(LayoutError::InvalidJson(_))
    ));
}

#[test]
fn test_chart_snapshot_rejects_bad_house() {
    let json = r#"{ "bodies": [], "houses": [ { "house": 0, "longitude": 3.0 } ] }"#;
    assert_eq!(ChartSnapshot::from_json(json), Err(LayoutError::InvalidHouse(0)));
}

#[test]
fn test_validate_cusps_accepts_full_set() {
    let cusps: Vec<HouseCusp> = (1..=12).map(|h| HouseCusp::new(h, (h as f64 - 1.0) * 30.0)).collect();
    assert!(validate_cusps(&cusps).is_ok());
}

#[test]
fn test_adjusted_position_serializes_camel_case() {
    let pos = AdjustedPosition {
        id: "sun".to_string(),
        original_longitude: 10.0,
        adjusted_longitude: 6.45,
        track: 1,
    };
    let value = serde_json::to_value(&pos).unwrap();
    assert_eq!(value["originalLongitude"], 10.0);
    assert_eq!(value["adjustedLongitude"], 6.45);
    assert_eq!(value["track"], 1);
}
