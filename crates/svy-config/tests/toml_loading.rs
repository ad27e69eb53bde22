//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use svy_config::{AccessCodeFormat, SurveyConfig};

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[period]
start_date = "2025-09-01T00:00:00-04:00"
end_date = "2025-12-31T23:59:59-05:00"

[required_fields]
person = ["age", "gender"]
visitedPlace = ["activity"]

[territory]
geojson_path = "./territory.geojson"

[access_code]
format = "eight_digits"
"#,
        )?;

        let config: SurveyConfig = Figment::from(Serialized::defaults(SurveyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.period.is_configured());
        assert_eq!(
            config.period.end_instant().map(|end| end.timestamp()),
            Some(1_767_243_599)
        );
        assert_eq!(config.required_fields["person"], ["age", "gender"]);
        assert_eq!(config.required_fields["visitedPlace"], ["activity"]);
        assert_eq!(config.territory.geojson_path, "./territory.geojson");
        assert_eq!(config.access_code.format, AccessCodeFormat::EightDigits);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[period]
end_date = "2025-12-31T23:59:59-05:00"
"#,
        )?;
        jail.set_env("SVY_PERIOD__END_DATE", "2026-01-31T23:59:59-05:00");

        let config: SurveyConfig = Figment::from(Serialized::defaults(SurveyConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("SVY_").split("__"))
            .extract()?;

        assert_eq!(config.period.end_date, "2026-01-31T23:59:59-05:00");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".survey")?;
        jail.create_file(
            ".survey/config.toml",
            r#"
[territory]
geojson_path = "zones/area.geojson"
"#,
        )?;

        let config = SurveyConfig::load().expect("config loads");
        assert_eq!(config.territory.geojson_path, "zones/area.geojson");
        Ok(())
    });
}

#[test]
fn load_from_explicit_path() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "other.toml",
            r#"
[required_fields]
household = ["size", "carNumber"]
"#,
        )?;

        let config = SurveyConfig::load_from("other.toml").expect("config loads");
        assert_eq!(config.required_fields["household"], ["size", "carNumber"]);
        Ok(())
    });
}

#[test]
fn unparsable_bound_loads_but_is_unconfigured() {
    Jail::expect_with(|jail| {
        jail.set_env("SVY_PERIOD__START_DATE", "someday");

        let config = SurveyConfig::load().expect("config loads");
        assert_eq!(config.period.start_date, "someday");
        assert_eq!(config.period.start_instant(), None);
        Ok(())
    });
}

#[test]
fn unknown_access_code_format_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("SVY_ACCESS_CODE__FORMAT", "base64");

        assert!(SurveyConfig::load().is_err());
        Ok(())
    });
}
