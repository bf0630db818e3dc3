// src/formats/raw.rs
//! Raw request dumps: consecutive little-endian u32 cylinders, no header.

use std::io::Cursor;

use anyhow::{anyhow, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::RequestFormat;

pub struct RawFormat;

impl RequestFormat for RawFormat {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u32>> {
        if data.len() % 4 != 0 {
            return Err(anyhow!(
                "Raw request file is {} bytes, not a whole number of 4-byte cylinders",
                data.len()
            ));
        }
        let mut cursor = Cursor::new(data);
        let mut cylinders = Vec::with_capacity(data.len() / 4);
        while (cursor.position() as usize) < data.len() {
            cylinders.push(cursor.read_u32::<LittleEndian>()?);
        }
        Ok(cylinders)
    }

    fn encode(&self, cylinders: &[u32]) -> Result<Vec<u8>> {
        let mut raw_data = Vec::with_capacity(cylinders.len() * 4);
        for &cylinder in cylinders {
            raw_data.write_u32::<LittleEndian>(cylinder)?;
        }
        Ok(raw_data)
    }
}
