//! Unit tests for CSV ingestion.

use super::*;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const HEADER: &str = "name,attack,speed,base_experience,types\n";

struct Dataset {
    _tmp: TempDir,
    path: Utf8PathBuf,
}

impl Dataset {
    fn write(&self, contents: &str) -> &Utf8Path {
        std::fs::write(&self.path, contents).expect("write dataset");
        &self.path
    }
}

#[fixture]
fn dataset() -> Dataset {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 tempdir");
    Dataset {
        path: root.join("all_pokemon_data.csv"),
        _tmp: tmp,
    }
}

#[rstest]
fn reads_rows_in_file_order(dataset: Dataset) {
    let path = dataset.write(&format!(
        "{HEADER}Bulbasaur,49,45,64,\"['grass', 'poison']\"\nPikachu,55,90,112,\"['electric']\"\n"
    ));
    let rows = read_rows(path).expect("dataset should parse");
    assert_eq!(
        rows,
        [
            RawRow::new("Bulbasaur", 49, 45, 64, "['grass', 'poison']"),
            RawRow::new("Pikachu", 55, 90, 112, "['electric']"),
        ]
    );
}

#[rstest]
fn ignores_extra_columns_and_order(dataset: Dataset) {
    let path = dataset.write(concat!(
        "id,types,name,hp,speed,attack,base_experience\n",
        "25,\"['electric']\",Pikachu,35,90,55,112\n",
    ));
    let rows = read_rows(path).expect("dataset should parse");
    assert_eq!(rows, [RawRow::new("Pikachu", 55, 90, 112, "['electric']")]);
}

#[rstest]
fn empty_types_cell_is_absent(dataset: Dataset) {
    let path = dataset.write(&format!(
        "{HEADER}Missingno,10,10,10,\nPikachu,55,90,112,\"['electric']\"\n"
    ));
    let rows = read_rows(path).expect("dataset should parse");
    assert_eq!(rows.first().map(|row| row.types_raw.as_deref()), Some(None));
}

#[rstest]
#[case("id,name,attack,speed,types\n1,A,1,1,\"['grass']\"\n", BASE_EXPERIENCE_COLUMN)]
#[case("name,attack,speed,base_experience\nA,1,1,1\n", TYPES_COLUMN)]
#[case("attack,speed,base_experience,types\n1,1,1,\"['grass']\"\n", NAME_COLUMN)]
fn reports_missing_columns(dataset: Dataset, #[case] contents: &str, #[case] expected: &str) {
    let path = dataset.write(contents);
    match read_rows(path) {
        Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, expected),
        other => panic!("expected a missing column, got {other:?}"),
    }
}

#[rstest]
fn reports_empty_stat(dataset: Dataset) {
    let path = dataset.write(&format!(
        "{HEADER}A,50,90,100,\"['grass']\"\nB,,60,300,\"['rock']\"\n"
    ));
    match read_rows(path) {
        Err(IngestError::MissingValue { row, column, .. }) => {
            assert_eq!(row, 1);
            assert_eq!(column, ATTACK_COLUMN);
        }
        other => panic!("expected a missing value, got {other:?}"),
    }
}

#[rstest]
fn rejects_negative_stat(dataset: Dataset) {
    let path = dataset.write(&format!("{HEADER}A,50,-5,100,\"['grass']\"\n"));
    match read_rows(path) {
        Err(IngestError::InvalidStat { row, column, value, .. }) => {
            assert_eq!(row, 0);
            assert_eq!(column, SPEED_COLUMN);
            assert_eq!(value, "-5");
        }
        other => panic!("expected an invalid stat, got {other:?}"),
    }
}

#[rstest]
#[case("100.0", 100)]
#[case("64", 64)]
#[case("0.0", 0)]
fn reads_whole_float_stats(dataset: Dataset, #[case] cell: &str, #[case] expected: u32) {
    let path = dataset.write(&format!(
        "{HEADER}A,50,90,{cell},\"['grass']\"\nB,60,70,80.0,\"['rock']\"\n"
    ));
    let rows = read_rows(path).expect("whole stats should parse");
    assert_eq!(rows.first().map(|row| row.base_experience), Some(expected));
}

#[rstest]
#[case("64.9", "64.9")]
#[case("-3.0", "-3.0")]
fn rejects_fractional_or_negative_float_stats(
    dataset: Dataset,
    #[case] cell: &str,
    #[case] expected: &str,
) {
    let path = dataset.write(&format!("{HEADER}A,50,90,{cell},\"['grass']\"\n"));
    match read_rows(path) {
        Err(IngestError::InvalidStat { row, column, value, .. }) => {
            assert_eq!(row, 0);
            assert_eq!(column, BASE_EXPERIENCE_COLUMN);
            assert_eq!(value, expected);
        }
        other => panic!("expected an invalid stat, got {other:?}"),
    }
}

#[rstest]
fn skip_policy_keeps_rows_around_unusable_cells(dataset: Dataset) {
    let path = dataset.write(&format!(
        "{HEADER}A,50,90,100,\"['grass']\"\nB,120,60,,\"['ground']\"\n,1,1,1,\"['bug']\"\nD,5,6,7,\"['ice']\"\n"
    ));
    let report = read_rows_with_policy(path, LoadPolicy::Skip).expect("skip keeps readable rows");
    let rows: Vec<usize> = report.rows.iter().map(|(row, _)| *row).collect();
    assert_eq!(rows, [0, 3]);
    let skipped: Vec<Option<usize>> = report.skipped.iter().map(IngestError::row).collect();
    assert_eq!(skipped, [Some(1), Some(2)]);
    assert!(matches!(
        report.skipped.first(),
        Some(IngestError::MissingValue {
            column: BASE_EXPERIENCE_COLUMN,
            ..
        })
    ));
}

#[rstest]
fn abort_policy_stops_at_first_unusable_cell(dataset: Dataset) {
    let path = dataset.write(&format!(
        "{HEADER}A,50,90,100,\"['grass']\"\nB,120,60,,\"['ground']\"\n"
    ));
    let err = read_rows_with_policy(path, LoadPolicy::Abort).expect_err("null stat aborts");
    assert_eq!(err.row(), Some(1));
}

#[rstest]
fn skip_policy_still_fails_on_missing_column(dataset: Dataset) {
    let path = dataset.write("name,attack,speed,types\nA,1,1,\"['grass']\"\n");
    let err = read_rows_with_policy(path, LoadPolicy::Skip).expect_err("column is required");
    assert!(matches!(err, IngestError::MissingColumn { .. }));
    assert_eq!(err.row(), None);
}

#[rstest]
fn missing_file_reports_path(dataset: Dataset) {
    let err = read_rows(&dataset.path).expect_err("file was never written");
    match &err {
        IngestError::Open { path, .. } => assert_eq!(path, &dataset.path),
        other => panic!("expected an open failure, got {other:?}"),
    }
    assert!(err.to_string().contains("all_pokemon_data.csv"));
}

#[rstest]
fn header_only_dataset_has_no_rows(dataset: Dataset) {
    let path = dataset.write(HEADER);
    let rows = read_rows(path).expect("header-only dataset should parse");
    assert!(rows.is_empty());
}
