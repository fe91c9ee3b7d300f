//! Focused unit tests covering CLI configuration and command output.

use super::helpers::{DatasetDir, run_argv};
use super::*;
use crate::by_type::{ByTypeConfig, DEFAULT_BAR_COUNT};
use crate::dataset::{DEFAULT_DATA_PATH, DatasetConfig, OutputFormat};
use crate::scatter::{DEFAULT_COUNT, ScatterConfig, config_from_layers_for_test, validate_count};
use camino::Utf8PathBuf;
use observatory_core::LoadPolicy;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(10)]
#[case(100)]
#[case(150)]
fn slider_counts_are_accepted(#[case] count: u32) {
    assert!(validate_count(count).is_ok());
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(95)]
#[case(155)]
#[case(160)]
fn counts_off_the_slider_are_rejected(#[case] count: u32) {
    match validate_count(count) {
        Err(CliError::InvalidCount { count: rejected, .. }) => assert_eq!(rejected, count),
        other => panic!("expected InvalidCount, found {other:?}"),
    }
}

#[rstest]
fn scatter_defaults_follow_the_dashboard() {
    let config = ScatterConfig::try_from(ScatterArgs::default()).expect("defaults are valid");
    assert_eq!(config.count, DEFAULT_COUNT);
    assert_eq!(
        config.dataset,
        DatasetConfig {
            data: Utf8PathBuf::from(DEFAULT_DATA_PATH),
            policy: LoadPolicy::Abort,
            format: OutputFormat::Json,
        }
    );
}

#[rstest]
fn skip_malformed_selects_skip_policy() {
    let args = ScatterArgs {
        skip_malformed: Some(true),
        ..ScatterArgs::default()
    };
    let config = ScatterConfig::try_from(args).expect("config should build");
    assert_eq!(config.dataset.policy, LoadPolicy::Skip);
}

#[rstest]
fn by_type_without_type_errors() {
    let err = ByTypeConfig::try_from(ByTypeArgs::default()).expect_err("type is required");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_TYPE);
            assert_eq!(env, ENV_BY_TYPE_TYPE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, DEFAULT_BAR_COUNT)]
#[case(Some(3), 3)]
#[case(Some(0), 0)]
#[case(Some(-4), 0)]
fn by_type_count_is_clamped_at_zero(#[case] count: Option<i64>, #[case] expected: usize) {
    let args = ByTypeArgs {
        primary_type: Some("rock".to_owned()),
        count,
        ..ByTypeArgs::default()
    };
    let config = ByTypeConfig::try_from(args).expect("config should build");
    assert_eq!(config.count, expected);
}

#[rstest]
fn missing_dataset_is_reported() {
    let dir = DatasetDir::new();
    let config = DatasetConfig::resolve(Some(dir.dataset()), None, None);
    match config.load() {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_DATA);
            assert_eq!(path, dir.dataset());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_dataset_is_rejected() {
    let dir = DatasetDir::new();
    let config = DatasetConfig::resolve(Some(dir.root().to_path_buf()), None, None);
    match config.validate_sources() {
        Err(CliError::SourcePathNotFile { field, .. }) => assert_eq!(field, ARG_DATA),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "count": "lots" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;

    let dir = DatasetDir::new();
    let env_data = dir.root().join("from-env.csv");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "count": 50,
            "data": dir.root().join("from-file.csv").as_str(),
            "format": "text",
        }),
        None,
    );
    composer.push_environment(json!({
        "count": 70,
        "data": env_data.as_str(),
    }));
    composer.push_cli(json!({ "count": 120 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.count, 120);
    assert_eq!(config.dataset.data, env_data);
    assert_eq!(config.dataset.format, OutputFormat::Text);
}

#[rstest]
fn scatter_command_prints_json_view() {
    let dir = DatasetDir::new();
    let data = dir.write_sample();
    let (result, output) = run_argv([
        "observatory",
        "scatter",
        "--count",
        "10",
        "--data",
        data.as_str(),
    ]);
    result.expect("scatter should succeed");

    let view: Value = serde_json::from_str(&output).expect("output should be JSON");
    assert_eq!(view["title"], "Top 10 Pokémon: Attack vs Speed");
    let points = view["points"].as_array().expect("points array");
    assert_eq!(points.len(), 8);
    assert_eq!(
        points.first(),
        Some(&json!({
            "name": "Golem",
            "attack": 120,
            "speed": 45,
            "base_experience": 223,
            "primary_type": "rock",
        }))
    );
}

#[rstest]
fn by_type_command_prints_text_view() {
    let dir = DatasetDir::new();
    let data = dir.write_sample();
    let (result, output) = run_argv([
        "observatory",
        "by-type",
        "--type",
        "rock",
        "--format",
        "text",
        "--data",
        data.as_str(),
    ]);
    result.expect("by-type should succeed");
    assert_eq!(
        output,
        "Top Pokémon by Base Experience - Type: Rock\nGolem: 223\nOnix: 77\n"
    );
}

#[rstest]
fn by_type_accepts_negative_counts() {
    let dir = DatasetDir::new();
    let data = dir.write_sample();
    let (result, output) = run_argv([
        "observatory",
        "by-type",
        "--type",
        "grass",
        "--count",
        "-1",
        "--data",
        data.as_str(),
    ]);
    result.expect("negative counts are not an error");
    let view: Value = serde_json::from_str(&output).expect("output should be JSON");
    assert_eq!(view["bars"], json!([]));
}

#[rstest]
fn by_type_rejects_unknown_type() {
    let dir = DatasetDir::new();
    let data = dir.write_sample();
    let (result, output) = run_argv([
        "observatory",
        "by-type",
        "--type",
        "Grass",
        "--data",
        data.as_str(),
    ]);
    match result {
        Err(CliError::UnknownType { requested, choices }) => {
            assert_eq!(requested, "Grass");
            assert_eq!(choices, ["bug", "electric", "grass", "ground", "rock"]);
        }
        other => panic!("expected UnknownType, found {other:?}"),
    }
    assert!(output.is_empty());
}

#[rstest]
fn types_command_lists_primary_types() {
    let dir = DatasetDir::new();
    let data = dir.write_sample();
    let (result, output) = run_argv([
        "observatory",
        "types",
        "--format",
        "text",
        "--data",
        data.as_str(),
    ]);
    result.expect("types should succeed");
    assert_eq!(output, "bug\nelectric\ngrass\nground\nrock\n");
}

#[rstest]
fn malformed_dataset_fails_unless_skipping() {
    let dir = DatasetDir::new();
    let mut rows = observatory_core::test_support::sample_rows();
    rows.push(observatory_core::RawRow::new("Broken", 1, 1, 1, "['fire'"));
    let data = dir.write_rows(&rows);

    let (aborted, _) = run_argv(["observatory", "types", "--data", data.as_str()]);
    assert!(matches!(aborted, Err(CliError::Dataset(_))));

    let (skipped, output) = run_argv([
        "observatory",
        "types",
        "--skip-malformed",
        "--data",
        data.as_str(),
    ]);
    skipped.expect("skip policy should tolerate the malformed row");
    let view: Value = serde_json::from_str(&output).expect("output should be JSON");
    assert_eq!(view["types"].as_array().map(Vec::len), Some(5));
}

#[rstest]
fn empty_stat_fails_unless_skipping() {
    let dir = DatasetDir::new();
    let data = dir.dataset();
    std::fs::write(
        &data,
        "name,attack,speed,base_experience,types\n\
         Bulbasaur,49,45,64,\"['grass', 'poison']\"\n\
         Golem,120,45,,\"['rock', 'ground']\"\n",
    )
    .expect("write dataset");

    let (aborted, _) = run_argv(["observatory", "types", "--data", data.as_str()]);
    assert!(matches!(aborted, Err(CliError::Dataset(_))));

    let (skipped, output) = run_argv([
        "observatory",
        "types",
        "--skip-malformed",
        "--format",
        "text",
        "--data",
        data.as_str(),
    ]);
    skipped.expect("skip policy should tolerate the empty stat");
    assert_eq!(output, "grass\n");
}
