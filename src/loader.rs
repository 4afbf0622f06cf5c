//! Format-detecting document loader.
//!
//! Input is read once, parsed as JSON, and on a JSON syntax failure parsed
//! again as INI. Reading errors and well-formed JSON of the wrong shape never
//! trigger the fallback.

use crate::error::ParamError;
use crate::format::{ini, json, Format};
use crate::ParamMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Read a whole document from `reader` and detect its format.
pub fn load_document<R: Read>(mut reader: R) -> Result<(ParamMap, Format), ParamError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_document(&text)
}

/// Open `path` and load it with [`load_document`].
pub fn load_file(path: &Path) -> Result<(ParamMap, Format), ParamError> {
    debug!(path = %path.display(), "Loading parameter file");
    let file = File::open(path)?;
    load_document(BufReader::new(file))
}

/// Parse `text` as JSON, falling back to INI when it is not JSON.
pub fn parse_document(text: &str) -> Result<(ParamMap, Format), ParamError> {
    match json::parse(text) {
        Ok(params) => {
            debug!(keys = params.len(), "Parsed document as JSON");
            Ok((params, Format::Json))
        }
        Err(ParamError::Json(err)) if err.is_syntax() || err.is_eof() => {
            debug!(error = %err, "Document is not JSON, parsing as INI");
            let params = ini::parse(text)?;
            debug!(sections = params.len(), "Parsed document as INI");
            Ok((params, Format::Ini))
        }
        Err(err) => Err(err),
    }
}
