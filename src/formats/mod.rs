// src/formats/mod.rs
//! Request files, picked by extension.

pub mod raw;
pub mod text;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::debug;

pub trait RequestFormat: Send + Sync {
    fn name(&self) -> &'static str;
    fn decode(&self, data: &[u8]) -> Result<Vec<u32>>;
    fn encode(&self, cylinders: &[u32]) -> Result<Vec<u8>>;
}

pub fn handler_for(path: &Path) -> Result<Box<dyn RequestFormat>> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .ok_or_else(|| anyhow!("No file extension on {}", path.display()))?;

    match ext.as_str() {
        "txt" => Ok(Box::new(text::TextFormat)),
        "bin" => Ok(Box::new(raw::RawFormat)),
        _ => Err(anyhow!("Unsupported request file format: {}", ext)),
    }
}

pub fn load_requests(path: &Path) -> Result<Vec<u32>> {
    let handler = handler_for(path)?;
    let mut file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;

    let cylinders = handler
        .decode(&data)
        .with_context(|| format!("Failed to read {} requests from {}", handler.name(), path.display()))?;
    debug!(path = %path.display(), format = handler.name(), count = cylinders.len(), "loaded requests");
    Ok(cylinders)
}

pub fn save_requests(path: &Path, cylinders: &[u32]) -> Result<()> {
    let handler = handler_for(path)?;
    let data = handler.encode(cylinders)?;
    let mut file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(&data)?;
    debug!(path = %path.display(), format = handler.name(), bytes = data.len(), "saved requests");
    Ok(())
}
