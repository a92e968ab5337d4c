//! Catalog listing for `--list`.

use std::io::{self, Write};

use serde::Serialize;
use texmix_core::TransformId;

/// One catalog row as printed by `--list --json`.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub index: usize,
    pub key: TransformId,
    pub label: &'static str,
    pub inputs: &'static [&'static str],
}

pub fn entries() -> Vec<CatalogEntry> {
    TransformId::all()
        .iter()
        .map(|&id| CatalogEntry {
            index: id.index(),
            key: id,
            label: id.label(),
            inputs: id.inputs(),
        })
        .collect()
}

pub fn write_text(mut out: impl Write) -> io::Result<()> {
    for entry in entries() {
        writeln!(
            out,
            "{}: {} ({}) <{}>",
            entry.index,
            entry.label,
            entry.key.key(),
            entry.inputs.join("> <")
        )?;
    }
    Ok(())
}

pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&entries())
}
