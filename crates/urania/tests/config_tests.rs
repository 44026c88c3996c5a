use urania::config::{DualChartSettings, MultiTrackSettings, SingleTrackSettings};
use urania::{CelestialPosition, LayoutError, ResolverSettings, Strategy};

#[test]
fn test_defaults() {
    let settings = ResolverSettings::default();
    assert_eq!(settings.single_track.min_spacing, 8.0);
    assert_eq!(settings.single_track.cusp_buffer, 3.5);
    assert!(settings.single_track.avoid_cusps);
    assert_eq!(settings.single_track.max_iterations, 100);
    assert_eq!(settings.single_track.order_slack, 300.0);
    assert_eq!(settings.multi_track.min_spacing, 6.0);
    assert_eq!(settings.multi_track.max_tracks, 2);
    assert_eq!(settings.multi_track.max_iterations, 50);
    assert_eq!(settings.dual_chart.min_spacing, 6.0);
    assert_eq!(settings.dual_chart.max_iterations, 50);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let toml = r#"
[single_track]
min_spacing = 6.0
cusp_buffer = 4.0

[multi_track]
max_tracks = 3
"#;
    let settings = ResolverSettings::from_toml_str(toml).unwrap();
    assert_eq!(settings.single_track.min_spacing, 6.0);
    assert_eq!(settings.single_track.cusp_buffer, 4.0);
    assert_eq!(settings.single_track.max_iterations, 100);
    assert_eq!(settings.multi_track.max_tracks, 3);
    assert_eq!(settings.multi_track.min_spacing, 6.0);
    assert_eq!(settings.dual_chart, DualChartSettings::default());
}

#[test]
fn test_empty_toml_is_default() {
    let settings = ResolverSettings::from_toml_str("").unwrap();
    assert_eq!(settings, ResolverSettings::default());
}

#[test]
fn test_malformed_toml_is_config_error() {
    assert!(matches!(
        ResolverSettings::from_toml_str("[single_track\nmin_spacing = 3"),
        Err(LayoutError::Config(_))
    ));
}

#[test]
fn test_invalid_values_are_rejected() {
    let bad_spacing = SingleTrackSettings {
        min_spacing: -1.0,
        ..SingleTrackSettings::default()
    };
    assert!(matches!(bad_spacing.validate(), Err(LayoutError::InvalidSetting(_))));

    let bad_slack = SingleTrackSettings {
        order_slack: 90.0,
        ..SingleTrackSettings::default()
    };
    assert!(bad_slack.validate().is_err());

    let bad_iterations = MultiTrackSettings {
        max_iterations: 0,
        ..MultiTrackSettings::default()
    };
    assert!(bad_iterations.validate().is_err());

    let bad_tolerance = DualChartSettings {
        tolerance: f64::NAN,
        ..DualChartSettings::default()
    };
    assert!(bad_tolerance.validate().is_err());

    assert!(ResolverSettings::from_toml_str("[dual_chart]\nmin_spacing = 0.0").is_err());
}

#[test]
fn test_missing_file_is_config_error() {
    assert!(matches!(
        ResolverSettings::load_from_file("/nonexistent/urania.toml"),
        Err(LayoutError::Config(_))
    ));
}

#[test]
fn test_sample_settings_file_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/urania.toml");
    let settings = ResolverSettings::load_from_file(path).unwrap();
    assert_eq!(settings.single_track.min_spacing, 6.0);
    assert_eq!(settings.single_track.cusp_buffer, 4.0);
    assert!(settings.single_track.avoid_cusps);
    assert_eq!(settings.single_track.max_iterations, 100);
    assert_eq!(settings.multi_track.max_tracks, 3);
    assert_eq!(settings.dual_chart.min_spacing, 6.0);
    assert_eq!(settings.dual_chart.tolerance, DualChartSettings::default().tolerance);
}

#[test]
fn test_strategy_dispatches_with_settings() {
    let bodies = vec![CelestialPosition::new("a", 10.0), CelestialPosition::new("b", 12.0)];
    let mut settings = ResolverSettings::default();
    settings.multi_track.max_tracks = 2;

    let stacked = Strategy::MultiTrack.resolve(&bodies, &[], &settings).unwrap();
    assert_eq!(stacked[1].track, 1);

    let single = Strategy::SingleTrack.resolve(&bodies, &[], &settings).unwrap();
    assert!(single.iter().all(|p| p.track == 0));

    let dual = Strategy::DualChart.resolve(&bodies, &[], &settings).unwrap();
    assert_eq!(dual[1].track, 1);
}
