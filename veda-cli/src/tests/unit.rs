//! Focused unit tests covering configuration resolution and the check command.

use super::helpers::{CatalogueFiles, fake_env};
use super::*;
use crate::{
    check::{CheckArgs, run_check_with},
    serve::{DEFAULT_PORT, ServeArgs, ServeConfig, prepare_state},
    sources::{resolve_paths, validate_sources},
};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use std::{
    fs,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
};
use veda_data::CataloguePaths;

#[fixture]
fn files() -> CatalogueFiles {
    CatalogueFiles::new()
}

#[rstest]
fn serve_defaults_apply_without_configuration() {
    let config = ServeConfig::resolve(ServeArgs::default(), &fake_env(&[])).expect("resolve");
    assert_eq!(config.paths, CataloguePaths::default());
    assert_eq!(
        config.addr,
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
    );
}

#[rstest]
fn legacy_variables_fill_unset_values() {
    let env = fake_env(&[
        (LEGACY_ENV_DATA_ELEMENTS, "/srv/catalogue/elements.csv"),
        (LEGACY_ENV_PURPOSES, "/srv/catalogue/purposes.csv"),
        (LEGACY_ENV_PORT, "9000"),
    ]);
    let config = ServeConfig::resolve(ServeArgs::default(), &env).expect("resolve");
    assert_eq!(
        config.paths,
        CataloguePaths::new("/srv/catalogue/elements.csv", "/srv/catalogue/purposes.csv")
    );
    assert_eq!(config.addr.port(), 9000);
}

#[rstest]
fn explicit_values_beat_legacy_variables() {
    let env = fake_env(&[
        (LEGACY_ENV_DATA_ELEMENTS, "legacy-elements.csv"),
        (LEGACY_ENV_PORT, "9000"),
    ]);
    let args = ServeArgs {
        data_elements: Some(Utf8PathBuf::from("flag-elements.csv")),
        host: Some("::1".to_owned()),
        port: Some(7000),
        ..ServeArgs::default()
    };
    let config = ServeConfig::resolve(args, &env).expect("resolve");
    assert_eq!(config.paths.data_elements, "flag-elements.csv");
    assert_eq!(config.paths.purposes, "purposes.csv");
    assert_eq!(
        config.addr,
        SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 7000)
    );
}

#[rstest]
#[case("eighty")]
#[case("70000")]
#[case("-1")]
fn rejects_invalid_legacy_ports(#[case] raw: &str) {
    let err = ServeConfig::resolve(ServeArgs::default(), &fake_env(&[(LEGACY_ENV_PORT, raw)]))
        .expect_err("invalid port");
    match err {
        CliError::InvalidPort { env, value, .. } => {
            assert_eq!(env, LEGACY_ENV_PORT);
            assert_eq!(value, raw);
        }
        other => panic!("expected InvalidPort, found {other:?}"),
    }
}

#[rstest]
fn rejects_hostnames() {
    let args = ServeArgs {
        host: Some("localhost".to_owned()),
        ..ServeArgs::default()
    };
    let err = ServeConfig::resolve(args, &fake_env(&[])).expect_err("hostname");
    assert!(matches!(err, CliError::InvalidHost { .. }));
}

#[rstest]
fn validate_sources_reports_missing_files(files: CatalogueFiles) {
    let paths = CataloguePaths::new(files.data_elements(), files.root().join("absent.csv"));
    match validate_sources(&paths).expect_err("missing purposes") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PURPOSES);
            assert_eq!(path, files.root().join("absent.csv"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(files: CatalogueFiles) {
    let nested = files.root().join("nested");
    fs::create_dir(&nested).expect("create dir");
    let paths = CataloguePaths::new(nested, files.purposes());
    match validate_sources(&paths).expect_err("directory") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_DATA_ELEMENTS),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn prepare_state_loads_both_files(files: CatalogueFiles) {
    let config = ServeConfig {
        paths: CataloguePaths::new(files.data_elements(), files.purposes()),
        addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
    };
    prepare_state(&config).expect("catalogue loads");
}

#[rstest]
fn prepare_state_fails_on_missing_required_header(files: CatalogueFiles) {
    fs::write(files.purposes(), "purpose_id,industry,data_elements\n").expect("rewrite");
    let config = ServeConfig {
        paths: CataloguePaths::new(files.data_elements(), files.purposes()),
        addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
    };
    let err = prepare_state(&config).expect_err("missing header");
    assert!(matches!(
        err,
        CliError::Load(veda_data::LoadError::MissingHeader {
            header: "sub_category",
            ..
        })
    ));
}

#[rstest]
fn resolve_paths_prefers_explicit_paths() {
    let env = fake_env(&[(LEGACY_ENV_PURPOSES, "legacy.csv")]);
    let paths = resolve_paths(None, Some(Utf8PathBuf::from("explicit.csv")), &env);
    assert_eq!(paths.data_elements, "data_elements.csv");
    assert_eq!(paths.purposes, "explicit.csv");
}

#[rstest]
fn check_writes_a_summary(files: CatalogueFiles) {
    let args = CheckArgs {
        data_elements: Some(files.data_elements().to_owned()),
        purposes: Some(files.purposes().to_owned()),
    };
    let mut output = Vec::new();
    run_check_with(args, &fake_env(&[]), &mut output).expect("check succeeds");
    let summary = String::from_utf8(output).expect("utf-8 summary");
    let lines: Vec<_> = summary.lines().collect();
    assert_eq!(
        lines,
        [
            format!(
                "data elements: 2 loaded, 1 skipped, 1 with default translations ({})",
                files.data_elements()
            ),
            format!("purposes: 2 loaded, 0 skipped ({})", files.purposes()),
        ]
    );
}
