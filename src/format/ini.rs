//! INI documents in the configparser dialect.
//!
//! Reading yields one mapping per `[section]` with every value kept as a
//! string. Option names are case-folded to lowercase; section names keep
//! their case. Indented lines continue the previous value, joined with
//! `\n`, and text after the closing `]` of a section header is ignored.
//!
//! Options of a `[DEFAULT]` section are inherited by every other section that
//! does not set them, following configparser's lookup semantics. Reading only
//! the raw per-section tables would instead drop those options entirely.

use crate::error::ParamError;
use crate::ParamMap;
use ::ini::{Ini, ParseOption};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

const DEFAULT_SECTION: &str = "DEFAULT";

/// Parse INI text into a mapping of section name to option mapping.
pub fn parse(text: &str) -> Result<ParamMap, ParamError> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };
    let document = Ini::load_from_str_opt(&strip_header_trailers(text), options)?;

    let mut sections = ParamMap::new();
    let mut inherited = ParamMap::new();
    let mut seen_default = false;

    for (name, properties) in document.iter() {
        let Some(name) = name else {
            if properties.iter().next().is_some() {
                return Err(ParamError::MissingSectionHeader {
                    line: first_content_line(text),
                });
            }
            continue;
        };

        let is_default = name == DEFAULT_SECTION;
        if (is_default && seen_default) || sections.contains_key(name) {
            return Err(ParamError::DuplicateSection(name.to_string()));
        }
        seen_default |= is_default;

        let mut section = ParamMap::new();
        for (key, value) in properties.iter() {
            let option = key.to_lowercase();
            if section.contains_key(&option) {
                return Err(ParamError::DuplicateOption {
                    section: name.to_string(),
                    option,
                });
            }
            section.insert(option, Value::String(value.to_string()));
        }

        if is_default {
            inherited = section;
        } else {
            sections.insert(name.to_string(), Value::Object(section));
        }
    }

    if !inherited.is_empty() {
        warn!(
            options = inherited.len(),
            "Folding [DEFAULT] options into every INI section"
        );
        for section in sections.values_mut() {
            if let Value::Object(section) = section {
                for (option, value) in &inherited {
                    if !section.contains_key(option) {
                        section.insert(option.clone(), value.clone());
                    }
                }
            }
        }
    }

    Ok(sections)
}

/// Render a parameter set as INI text, one section per top-level key.
///
/// Every top-level value must be a mapping. Option names are lowercased the
/// way configparser writes them; strings are written raw and other values as
/// compact JSON text, with `null` written as an empty value.
pub fn to_string(params: &ParamMap) -> Result<String, ParamError> {
    let mut out = String::new();
    for (name, section) in params {
        let Value::Object(options) = section else {
            return Err(ParamError::IniShape(name.clone()));
        };

        out.push_str(&format!("[{}]\n", name));
        let mut written = HashSet::new();
        for (key, value) in options {
            let option = key.to_lowercase();
            if !written.insert(option.clone()) {
                return Err(ParamError::DuplicateOption {
                    section: name.clone(),
                    option,
                });
            }
            out.push_str(&format!("{} = {}\n", option, value_text(value).replace('\n', "\n\t")));
        }
        out.push('\n');
    }
    Ok(out)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Cut section header lines after their closing `]`. Line count is kept so
/// error positions still point into `text`.
fn strip_header_trailers(text: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            let end = match line.strip_prefix('[').and_then(|rest| rest.find(']')) {
                Some(close) => close + 2,
                None => return line.to_string(),
            };
            let ending = if line.ends_with("\r\n") {
                "\r\n"
            } else if line.ends_with('\n') {
                "\n"
            } else {
                ""
            };
            format!("{}{}", &line[..end], ending)
        })
        .collect()
}

/// 1-based line of the first option or header, skipping blanks and comments.
fn first_content_line(text: &str) -> usize {
    text.lines()
        .position(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with(';') && !line.starts_with('#')
        })
        .map(|index| index + 1)
        .unwrap_or(1)
}
