// src/formats/text.rs
//! Plain-text request lists.
//!
//! Cylinders are separated by commas and/or whitespace. Lines starting
//! with `#` are comments.

use anyhow::{anyhow, Result};

use super::RequestFormat;

pub struct TextFormat;

impl RequestFormat for TextFormat {
    fn name(&self) -> &'static str {
        "text"
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u32>> {
        let text = std::str::from_utf8(data).map_err(|e| anyhow!("Request file is not UTF-8: {}", e))?;
        let mut cylinders = Vec::new();

        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            for token in line.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
                let cylinder = token
                    .parse()
                    .map_err(|e| anyhow!("Line {}: invalid cylinder '{}': {}", n + 1, token, e))?;
                cylinders.push(cylinder);
            }
        }
        Ok(cylinders)
    }

    fn encode(&self, cylinders: &[u32]) -> Result<Vec<u8>> {
        let list: Vec<String> = cylinders.iter().map(|c| c.to_string()).collect();
        Ok(format!("# seektool requests\n{}\n", list.join(", ")).into_bytes())
    }
}
