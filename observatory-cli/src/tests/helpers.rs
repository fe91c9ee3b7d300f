//! Test helpers for writing CSV datasets and running commands in memory.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use observatory_core::RawRow;
use observatory_core::test_support::sample_rows;
use std::fmt::Write as _;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "name,attack,speed,base_experience,types\n";

/// A temporary directory holding a dataset file.
#[derive(Debug)]
pub(super) struct DatasetDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl DatasetDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of the dataset file, whether or not it has been written.
    pub(super) fn dataset(&self) -> Utf8PathBuf {
        self.root.join("all_pokemon_data.csv")
    }

    /// Write `rows` as CSV and return the dataset path.
    pub(super) fn write_rows(&self, rows: &[RawRow]) -> Utf8PathBuf {
        let path = self.dataset();
        fs::write(&path, csv_for(rows)).expect("write dataset");
        path
    }

    /// Write the shared sample rows and return the dataset path.
    pub(super) fn write_sample(&self) -> Utf8PathBuf {
        self.write_rows(&sample_rows())
    }
}

/// Render rows in the dataset's CSV layout.
pub(super) fn csv_for(rows: &[RawRow]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        writeln!(
            csv,
            "{},{},{},{},\"{}\"",
            row.name,
            row.attack,
            row.speed,
            row.base_experience,
            row.types_raw.as_deref().unwrap_or_default()
        )
        .expect("write to string");
    }
    csv
}

/// Parse `argv` and run the selected command, capturing its output.
pub(super) fn run_argv<I, T>(argv: I) -> (Result<(), CliError>, String)
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut stdout = Vec::new();
    let result = Cli::try_parse_from(argv)
        .map_err(CliError::ArgumentParsing)
        .and_then(|cli| run_command(cli.command, &mut stdout));
    let output = String::from_utf8(stdout).expect("output should be UTF-8");
    (result, output)
}
