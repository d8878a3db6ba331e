//! Lectura de los archivos que consume el harness: JSON sueltos y muestras en JSON lines.

use serde_json::Value;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::checks::Sample;
use crate::errors::HarnessError;

pub fn read_json_file(path: &Path) -> Result<Value, HarnessError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Una muestra por línea; las líneas en blanco se ignoran.
pub fn load_samples<R: BufRead>(reader: R) -> Result<Vec<Sample>, HarnessError> {
    let mut samples = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        samples.push(serde_json::from_str(&line)?);
    }
    Ok(samples)
}
