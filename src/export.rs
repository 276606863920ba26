use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::chart::{PieChart, ScatterChart};
use crate::data::model::SelectorState;

/// Everything currently on screen, as written to disk.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub source: &'a str,
    pub selector: &'a SelectorState,
    pub pie: Option<&'a PieChart>,
    pub scatter: Option<&'a ScatterChart>,
}

pub fn write_snapshot<W: Write>(writer: W, snapshot: &DashboardSnapshot<'_>) -> Result<()> {
    serde_json::to_writer_pretty(writer, snapshot).context("serializing chart snapshot")
}

/// Write the snapshot as pretty-printed JSON.
pub fn write_json(path: &Path, snapshot: &DashboardSnapshot<'_>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_snapshot(&mut writer, snapshot)?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported charts to {}", path.display());
    Ok(())
}
