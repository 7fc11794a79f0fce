use pv_project::schema::*;
use pv_project::{ValidationError, validate_config};

#[test]
fn default_config_is_valid() {
    validate_config(&SweepConfig::default()).unwrap();
}

#[test]
fn zero_base_modulus_rejected() {
    let mut config = SweepConfig::default();
    config.grid.base_moduli = vec![500.0, 0.0];

    let err = validate_config(&config).unwrap_err();
    match err {
        ValidationError::InvalidValue { field, .. } => assert_eq!(field, "grid.base_moduli"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_base_modulus_rejected() {
    let mut config = SweepConfig::default();
    config.grid.base_moduli = vec![500.0, 1000.0, 500.0];

    let err = validate_config(&config).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::DuplicateValue { value, .. } if value == 500.0
    ));
}

#[test]
fn empty_thickness_set_rejected() {
    let mut config = SweepConfig::default();
    config.grid.surface_thicknesses.clear();

    let err = validate_config(&config).unwrap_err();
    assert!(matches!(err, ValidationError::EmptySet { .. }));
}

#[test]
fn nan_thickness_rejected() {
    let mut config = SweepConfig::default();
    config.grid.surface_thicknesses = vec![40.0, f64::NAN];

    let err = validate_config(&config).unwrap_err();
    assert!(format!("{err}").contains("finite"));
}

#[test]
fn infinite_axle_load_rejected() {
    let mut config = SweepConfig::default();
    config.constants.axle_load = f64::INFINITY;

    match validate_config(&config).unwrap_err() {
        ValidationError::InvalidValue { field, reason, .. } => {
            assert_eq!(field, "constants.axle_load");
            assert_eq!(reason, "must be finite");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn poisson_ratio_out_of_range_rejected() {
    let mut config = SweepConfig::default();
    config.constants.poisson_ratio = 0.5;
    assert!(validate_config(&config).is_err());

    config.constants.poisson_ratio = 0.0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn shared_engine_file_names_rejected() {
    let mut config = SweepConfig::default();
    config.engine.output_file = config.engine.input_file.clone();

    let err = validate_config(&config).unwrap_err();
    assert!(format!("{err}").contains("engine.output_file"));
}

#[test]
fn future_version_rejected() {
    let config = SweepConfig {
        version: 99,
        ..SweepConfig::default()
    };
    assert!(matches!(
        validate_config(&config),
        Err(ValidationError::UnsupportedVersion { version: 99 })
    ));
}

#[test]
fn base_modulus_with_unwritable_table_title_rejected() {
    let mut config = SweepConfig::default();
    config.grid.base_moduli = vec![500.0, 1.0e30];

    let err = validate_config(&config).unwrap_err();
    match err {
        ValidationError::TableTitleTooLong { title, max } => {
            assert_eq!(max, MAX_TABLE_TITLE_LEN);
            assert!(title.starts_with("Base_1000"));
            assert!(title.chars().count() > MAX_TABLE_TITLE_LEN);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn longest_fitting_table_title_accepted() {
    let mut config = SweepConfig::default();
    // "Base_" + 26 digits = 31 characters.
    config.grid.base_moduli = vec![1.0e25];
    assert_eq!(table_title(1.0e25).chars().count(), MAX_TABLE_TITLE_LEN);
    validate_config(&config).unwrap();
}
