use std::io::Write;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};
use crate::{error::Result, io::dataset::Sample};

/// Output layout for encoded samples
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExportFormat {
    /// One pretty-printed JSON array
    #[default]
    Json,
    /// One JSON object per line
    #[strum(serialize = "jsonl")]
    #[serde(rename = "jsonl")]
    JsonLines,
}

impl ExportFormat {
    /// Names accepted when parsing a format
    pub fn names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }
}

/// Serialize samples to `writer`
pub fn write_samples<W: Write>(samples: &[Sample], format: ExportFormat, mut writer: W) -> Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, samples)?;
            writeln!(writer)?;
        }
        ExportFormat::JsonLines => {
            for sample in samples {
                serde_json::to_writer(&mut writer, sample)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
