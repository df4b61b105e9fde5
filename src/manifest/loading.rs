use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use super::Manifest;
use crate::error::ManifestError;

impl Manifest {
  /// Load a manifest from a JSON file on disk.
  ///
  /// The file must contain a JSON object whose values are non-empty hash strings.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
      Ok(bytes) => bytes,
      Err(err) if err.kind() == ErrorKind::NotFound => {
        return Err(ManifestError::NotFound {
          path: path.to_path_buf(),
        });
      }
      Err(err) => {
        return Err(ManifestError::Io {
          path: path.to_path_buf(),
          source: err,
        });
      }
    };

    let content = String::from_utf8(bytes).map_err(|err| ManifestError::InvalidFormat {
      path: path.to_path_buf(),
      detail: format!("content is not valid UTF-8: {err}"),
    })?;

    let manifest = parse_manifest(path, &content)?;
    tracing::debug!(
      path = %path.display(),
      entries = manifest.len(),
      "Loaded busters manifest"
    );
    Ok(manifest)
  }
}

fn parse_manifest(path: &Path, content: &str) -> Result<Manifest, ManifestError> {
  if content.trim().is_empty() {
    return Err(ManifestError::Empty {
      path: path.to_path_buf(),
    });
  }

  let invalid = |detail: String| ManifestError::InvalidFormat {
    path: path.to_path_buf(),
    detail,
  };

  let value: Value = serde_json::from_str(content).map_err(|err| invalid(err.to_string()))?;
  let object = match value {
    Value::Object(object) => object,
    other => {
      return Err(invalid(format!(
        "expected a JSON object, found {}",
        json_type_name(&other)
      )));
    }
  };

  let mut entries = Vec::with_capacity(object.len());
  for (key, value) in object {
    match value {
      Value::String(hash) if !hash.is_empty() => entries.push((key, hash)),
      Value::String(_) => return Err(invalid(format!("hash for `{key}` is empty"))),
      other => {
        return Err(invalid(format!(
          "hash for `{key}` must be a string, found {}",
          json_type_name(&other)
        )));
      }
    }
  }

  Ok(Manifest::from_entries(entries))
}

fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
