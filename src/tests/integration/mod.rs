//! Integration tests for the settings loader
//!
//! These tests drive [`SettingsParser`] through its configuration against
//! bundle directories on disk.

use crate::{
    application::SettingsParser,
    domain::CONFIG_FILE_NAME,
    infrastructure::ResourceOrigin,
    shared::error::AppError,
    tests::{
        common::fixtures::{Bundle, MALFORMED_OPTIONS, VALID_OPTIONS},
        config, TestResult,
    },
};

#[test]
fn test_load_valid_settings_from_bundle() -> TestResult<()> {
    config::init();
    let bundle = Bundle::with_file(CONFIG_FILE_NAME, VALID_OPTIONS);
    let mut parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;

    parser.load_settings()?;

    assert_eq!(&parser.options_xml()?[..], VALID_OPTIONS.as_bytes());
    assert_eq!(
        parser.origin(),
        Some(&ResourceOrigin::File(bundle.dir.path().join(CONFIG_FILE_NAME)))
    );
    assert!(parser.loaded_at().is_some());

    let document = parser.document()?;
    assert_eq!(document.root(), "settings");
    assert_eq!(document.get("settings/language"), Some("pl"));
    assert_eq!(document.get_as::<u8>("settings/map/floor[2]")?, Some(1));
    assert_eq!(document.get_as::<bool>("settings/notifications@enabled")?, Some(true));
    Ok(())
}

#[test]
fn test_bytes_are_returned_verbatim() -> TestResult<()> {
    config::init();
    // CRLF line endings and trailing whitespace survive untouched
    let contents = b"<settings>\r\n  <a>1</a>\r\n</settings>\r\n   ".to_vec();
    let bundle = Bundle::with_file(CONFIG_FILE_NAME, &contents);
    let mut parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;

    parser.load_settings()?;

    assert_eq!(parser.options_xml()?.to_vec(), contents);
    Ok(())
}

#[test]
fn test_missing_settings_fail_cleanly() -> TestResult<()> {
    config::init();
    let bundle = Bundle::empty();
    let mut parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;

    let err = parser.load_settings().unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(parser.options_xml().unwrap_err(), AppError::NotLoaded);
    Ok(())
}

#[test]
fn test_malformed_settings_fail_cleanly() -> TestResult<()> {
    config::init();
    let bundle = Bundle::with_file(CONFIG_FILE_NAME, MALFORMED_OPTIONS);
    let mut parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;

    let err = parser.load_settings().unwrap_err();

    assert!(err.is_parse_failure());
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
    assert!(!parser.is_loaded());
    Ok(())
}

#[test]
fn test_accessor_before_load_is_not_loaded() -> TestResult<()> {
    let bundle = Bundle::with_file(CONFIG_FILE_NAME, VALID_OPTIONS);
    let parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;

    assert_eq!(parser.options_xml().unwrap_err(), AppError::NotLoaded);
    Ok(())
}

#[test]
fn test_failed_reload_discards_previous_settings() -> TestResult<()> {
    config::init();
    let bundle = Bundle::with_file(CONFIG_FILE_NAME, VALID_OPTIONS);
    let mut parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;
    parser.load_settings()?;
    assert!(parser.is_loaded());

    bundle.write(CONFIG_FILE_NAME, MALFORMED_OPTIONS);
    assert!(parser.load_settings().is_err());
    assert_eq!(parser.options_xml().unwrap_err(), AppError::NotLoaded);

    bundle.remove(CONFIG_FILE_NAME);
    assert!(parser.load_settings().unwrap_err().is_not_found());
    assert!(parser.document().is_err());
    Ok(())
}

#[test]
fn test_reload_picks_up_new_contents() -> TestResult<()> {
    config::init();
    let bundle = Bundle::with_file(CONFIG_FILE_NAME, "<settings><language>pl</language></settings>");
    let mut parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;
    parser.load_settings()?;
    assert_eq!(parser.document()?.get("settings/language"), Some("pl"));

    bundle.write(CONFIG_FILE_NAME, "<settings><language>en</language></settings>");
    parser.load_settings()?;
    assert_eq!(parser.document()?.get("settings/language"), Some("en"));
    Ok(())
}

#[test]
fn test_configured_file_name_and_directory_order() -> TestResult<()> {
    config::init();
    let primary = Bundle::empty();
    let fallback = Bundle::with_file("options.xml", "<options><source>fallback</source></options>");
    let mut app_config = config::test_config(&[primary.dir.path(), fallback.dir.path()]);
    app_config.settings.file_name = "options.xml".to_string();

    let mut parser = SettingsParser::new(&app_config)?;
    parser.load_settings()?;
    assert_eq!(parser.document()?.get("options/source"), Some("fallback"));

    primary.write("options.xml", "<options><source>primary</source></options>");
    parser.load_settings()?;
    assert_eq!(parser.document()?.get("options/source"), Some("primary"));
    Ok(())
}

#[test]
fn test_oversized_settings_are_rejected() -> TestResult<()> {
    config::init();
    let padding = " ".repeat(5000);
    let bundle = Bundle::with_file(CONFIG_FILE_NAME, format!("<settings>{}</settings>", padding));
    let mut parser = SettingsParser::new(&config::test_config(&[bundle.dir.path()]))?;

    let err = parser.load_settings().unwrap_err();
    assert!(matches!(err, AppError::ResourceTooLarge { limit: 4096, .. }));
    Ok(())
}
