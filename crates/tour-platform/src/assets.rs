use std::path::PathBuf;

use tour_core::{AssetId, UiError};

const EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Maps asset ids to `<dir>/<id>.<ext>` files.
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    dir: Option<PathBuf>,
}

impl AssetStore {
    /// A store that resolves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn resolve(&self, id: AssetId) -> Result<PathBuf, UiError> {
        if let Some(dir) = &self.dir {
            for ext in EXTENSIONS {
                let p = dir.join(format!("{}.{ext}", id.name()));
                if p.is_file() {
                    return Ok(p);
                }
            }
        }
        Err(UiError::MissingAsset(id.name().to_string()))
    }
}
