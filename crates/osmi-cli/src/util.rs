use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use osmi_survey::Dataset;

/// Reads a survey records JSON file (a plain array of records).
pub(crate) fn read_records_file<P>(path: P) -> anyhow::Result<Dataset>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open records file: {}", path.display()))?;
    let dataset = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse records JSON file: {}", path.display()))?;
    Ok(dataset)
}

/// Writes a value as pretty JSON to `output`, or stdout if none is given.
pub(crate) fn save_json<T>(value: &T, output: Option<&PathBuf>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(create_output_file(path)?);
            serde_json::to_writer_pretty(&mut writer, value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
            writeln!(writer)?;
            writer.flush()?;
        }
        None => {
            let mut writer = io::stdout().lock();
            serde_json::to_writer_pretty(&mut writer, value)
                .context("Failed to write JSON to stdout")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Writes rendered text to `output`, or stdout if none is given.
pub(crate) fn save_text(text: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(create_output_file(path)?);
            writer
                .write_all(text.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            writer.flush()?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn create_output_file(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}
