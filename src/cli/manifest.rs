//! Collector manifest: the JSON hand-off from a source scanner.
//!
//! ```json
//! {"enums": [{"typeName": "Day", "signed": true, "bitWidth": 64,
//!             "constants": [{"name": "Monday", "value": 0}]}]}
//! ```
//!
//! `signed` defaults to true and `bitWidth` to 64. Values may be JSON
//! integers or decimal strings. The bit width is checked later, per
//! enumeration, so one bad entry never hides the others.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use enumtab_common::limits::DEFAULT_BIT_WIDTH;
use enumtab_common::{Collection, DeclaredEnum, EnumDomain, RawConstant};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub enums: Vec<ManifestEnum>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEnum {
    pub type_name: String,
    #[serde(default = "default_signed")]
    pub signed: bool,
    #[serde(default = "default_bit_width")]
    pub bit_width: u32,
    #[serde(default)]
    pub constants: Vec<RawConstant>,
}

fn default_signed() -> bool {
    true
}

fn default_bit_width() -> u32 {
    DEFAULT_BIT_WIDTH
}

impl Manifest {
    pub fn into_collection(self) -> Collection {
        Collection::new(
            self.enums
                .into_iter()
                .map(|entry| {
                    let domain = EnumDomain {
                        type_name: entry.type_name,
                        signed: entry.signed,
                        bit_width: entry.bit_width,
                    };
                    DeclaredEnum::new(domain, entry.constants)
                })
                .collect(),
        )
    }
}

pub fn parse_manifest(source: &str) -> Result<Collection> {
    let manifest: Manifest =
        serde_json::from_str(source).context("failed to parse collector manifest JSON")?;
    Ok(manifest.into_collection())
}

pub fn load_manifest(path: &Path) -> Result<Collection> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest: {}", path.display()))?;
    parse_manifest(&source).with_context(|| format!("failed to load manifest: {}", path.display()))
}
