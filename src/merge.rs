//! Recursive merge of parameter sets.
//!
//! Values from the source overwrite the destination leaf by leaf. Mappings
//! present on both sides merge key-wise; everything else (sequences included)
//! is replaced wholesale.

use crate::error::ParamError;
use crate::ParamMap;
use serde_json::Value;

/// Overlay `source` onto `destination` in place.
///
/// Where the destination already holds a mapping at some key, the source must
/// hold a mapping at that key too, otherwise [`ParamError::TypeMismatch`] is
/// returned naming the dotted key path. Keys merged before the mismatch stay
/// applied.
pub fn merge_into(destination: &mut ParamMap, source: &ParamMap) -> Result<(), ParamError> {
    merge_at(destination, source, "")
}

fn merge_at(destination: &mut ParamMap, source: &ParamMap, prefix: &str) -> Result<(), ParamError> {
    for (key, value) in source {
        if let Some(Value::Object(nested)) = destination.get_mut(key) {
            let path = join_path(prefix, key);
            let Value::Object(incoming) = value else {
                return Err(ParamError::TypeMismatch { path });
            };
            merge_at(nested, incoming, &path)?;
            continue;
        }
        destination.insert(key.clone(), value.clone());
    }
    Ok(())
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
