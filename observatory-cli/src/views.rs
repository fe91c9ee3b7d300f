//! Chart payloads produced by the CLI commands and their renderings.

use std::io::{self, Write};

use observatory_core::PokemonRecord;
use serde::Serialize;

use crate::CliError;
use crate::dataset::OutputFormat;

/// Plain-text rendering of a view.
pub(crate) trait TextView {
    fn write_text(&self, writer: &mut dyn Write) -> io::Result<()>;
}

/// One point of the attack versus speed scatter chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ScatterPoint {
    pub(crate) name: String,
    pub(crate) attack: u32,
    pub(crate) speed: u32,
    pub(crate) base_experience: u32,
    pub(crate) primary_type: Option<String>,
}

impl From<&PokemonRecord> for ScatterPoint {
    fn from(record: &PokemonRecord) -> Self {
        Self {
            name: record.name().to_owned(),
            attack: record.attack(),
            speed: record.speed(),
            base_experience: record.base_experience(),
            primary_type: record.primary_type().map(str::to_owned),
        }
    }
}

/// Attack versus speed for the records with the most base experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ScatterView {
    pub(crate) title: String,
    pub(crate) points: Vec<ScatterPoint>,
}

impl ScatterView {
    pub(crate) fn new(count: u32, records: &[&PokemonRecord]) -> Self {
        Self {
            title: format!("Top {count} Pokémon: Attack vs Speed"),
            points: records.iter().map(|&record| ScatterPoint::from(record)).collect(),
        }
    }
}

impl TextView for ScatterView {
    fn write_text(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", self.title)?;
        for point in &self.points {
            writeln!(
                writer,
                "{}: attack {}, speed {}, base experience {}, type {}",
                point.name,
                point.attack,
                point.speed,
                point.base_experience,
                point.primary_type.as_deref().unwrap_or("-"),
            )?;
        }
        Ok(())
    }
}

/// One bar of the base experience bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct BarEntry {
    pub(crate) name: String,
    pub(crate) base_experience: u32,
}

/// Highest base experience records within one primary type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct BarView {
    pub(crate) title: String,
    pub(crate) bars: Vec<BarEntry>,
}

impl BarView {
    pub(crate) fn new(primary_type: &str, records: &[&PokemonRecord]) -> Self {
        Self {
            title: format!(
                "Top Pokémon by Base Experience - Type: {}",
                capitalise(primary_type)
            ),
            bars: records
                .iter()
                .map(|record| BarEntry {
                    name: record.name().to_owned(),
                    base_experience: record.base_experience(),
                })
                .collect(),
        }
    }
}

impl TextView for BarView {
    fn write_text(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", self.title)?;
        for bar in &self.bars {
            writeln!(writer, "{}: {}", bar.name, bar.base_experience)?;
        }
        Ok(())
    }
}

/// Sorted primary types offered by the type selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TypesView {
    pub(crate) types: Vec<String>,
}

impl TextView for TypesView {
    fn write_text(&self, writer: &mut dyn Write) -> io::Result<()> {
        for kind in &self.types {
            writeln!(writer, "{kind}")?;
        }
        Ok(())
    }
}

/// Upper-case the first character and lower-case the rest.
pub(crate) fn capitalise(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Write `view` to `writer` in the requested format.
pub(crate) fn write_view<V>(
    writer: &mut dyn Write,
    view: &V,
    format: OutputFormat,
) -> Result<(), CliError>
where
    V: Serialize + TextView,
{
    match format {
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(view).map_err(CliError::SerialiseOutput)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)
        }
        OutputFormat::Text => view.write_text(writer).map_err(CliError::WriteOutput),
    }
}
