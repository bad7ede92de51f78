use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use enumtab_analysis::{Format, FormatSet, GenerateOptions, NameTransform, NamingOptions};

use crate::cli::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "enumtab.json";

/// Boolean options accept both `true` and `"true"` (also yes/no, on/off, 1/0).
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Contents of `enumtab.json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnumtabConfig {
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub trim_prefix: Option<String>,
    #[serde(default)]
    pub add_prefix: Option<String>,
    #[serde(default)]
    pub transform: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub line_comment: Option<bool>,
    #[serde(default)]
    pub formats: Option<Vec<String>>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub json: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub yaml: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub sql: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub text: Option<bool>,
}

impl EnumtabConfig {
    /// Formats requested by the `formats` list and the boolean shorthands.
    pub fn format_set(&self) -> Result<FormatSet> {
        let mut set = FormatSet::empty();
        for name in self.formats.iter().flatten() {
            let format: Format = name.parse().map_err(|err: String| anyhow!(err))?;
            set |= format.flag();
        }
        let shorthands = [
            (self.text, FormatSet::TEXT),
            (self.json, FormatSet::JSON),
            (self.yaml, FormatSet::YAML),
            (self.sql, FormatSet::SQL),
        ];
        for (enabled, flag) in shorthands {
            if enabled == Some(true) {
                set |= flag;
            }
        }
        Ok(set)
    }
}

pub fn parse_config(source: &str) -> Result<EnumtabConfig> {
    let config = serde_json::from_str(&jsonc_to_json(source)).context("failed to parse enumtab JSON")?;
    Ok(config)
}

/// Load a config file, or `enumtab.json` inside `path` when it is a directory.
pub fn load_config(path: &Path) -> Result<EnumtabConfig> {
    let file = config_file_path(path);
    let source = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read config: {}", file.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", file.display()))
}

fn config_file_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// The config to use for `args`: the `--project` file when given, otherwise
/// an `enumtab.json` next to the manifest if one exists.
pub fn discover_config(args: &CliArgs) -> Result<Option<EnumtabConfig>> {
    if let Some(project) = &args.project {
        return load_config(project).map(Some);
    }
    let Some(dir) = args.manifest.parent() else {
        return Ok(None);
    };
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        load_config(&candidate).map(Some)
    } else {
        Ok(None)
    }
}

/// Merge config values with command-line flags. Flags win.
pub fn resolve_options(config: &EnumtabConfig, args: &CliArgs) -> Result<GenerateOptions> {
    let type_names = if args.types.is_empty() {
        config.types.clone().unwrap_or_default()
    } else {
        args.types.clone()
    };

    let transform = match (args.transform, config.transform.as_deref()) {
        (Some(transform), _) => transform,
        (None, Some(name)) => name
            .parse::<NameTransform>()
            .context("invalid 'transform' in config")?,
        (None, None) => NameTransform::default(),
    };

    let mut formats = config.format_set()?;
    let flags = [
        (args.text, FormatSet::TEXT),
        (args.json, FormatSet::JSON),
        (args.yaml, FormatSet::YAML),
        (args.sql, FormatSet::SQL),
    ];
    for (enabled, flag) in flags {
        if enabled {
            formats |= flag;
        }
    }

    Ok(GenerateOptions {
        type_names,
        naming: NamingOptions {
            trim_prefix: args.trim_prefix.clone().or_else(|| config.trim_prefix.clone()),
            add_prefix: args.add_prefix.clone().or_else(|| config.add_prefix.clone()),
            use_annotation_as_name: args.line_comment || config.line_comment.unwrap_or(false),
            transform,
        },
        formats,
    })
}

#[derive(Clone, Copy)]
enum Lexeme {
    Code,
    Str { escaped: bool },
    LineComment,
    BlockComment,
}

/// Reduce JSONC to strict JSON in one pass.
///
/// Comments are removed but their newlines kept, so parse errors still point
/// at the right line. A comma whose next token is `}` or `]` is dropped, even
/// with a comment in between.
pub(crate) fn jsonc_to_json(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut state = Lexeme::Code;
    let mut pending_comma: Option<usize> = None;

    while let Some(ch) = chars.next() {
        state = match state {
            Lexeme::Str { escaped } => {
                out.push(ch);
                match ch {
                    _ if escaped => Lexeme::Str { escaped: false },
                    '\\' => Lexeme::Str { escaped: true },
                    '"' => Lexeme::Code,
                    _ => Lexeme::Str { escaped: false },
                }
            }
            Lexeme::LineComment if ch == '\n' => {
                out.push(ch);
                Lexeme::Code
            }
            Lexeme::LineComment => Lexeme::LineComment,
            Lexeme::BlockComment if ch == '*' && chars.next_if_eq(&'/').is_some() => Lexeme::Code,
            Lexeme::BlockComment => {
                if ch == '\n' {
                    out.push(ch);
                }
                Lexeme::BlockComment
            }
            Lexeme::Code => match ch {
                '/' if chars.next_if_eq(&'/').is_some() => Lexeme::LineComment,
                '/' if chars.next_if_eq(&'*').is_some() => Lexeme::BlockComment,
                _ if ch.is_whitespace() => {
                    out.push(ch);
                    Lexeme::Code
                }
                _ => {
                    if let Some(at) = pending_comma.take() {
                        if matches!(ch, '}' | ']') {
                            out.remove(at);
                        }
                    }
                    if ch == ',' {
                        pending_comma = Some(out.len());
                    }
                    out.push(ch);
                    if ch == '"' {
                        Lexeme::Str { escaped: false }
                    } else {
                        Lexeme::Code
                    }
                }
            },
        };
    }

    out
}
