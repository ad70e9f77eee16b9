use std::fmt;

/// Opaque identifier of a bundled image. Resolution and loading belong to the
/// host's asset pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetId(pub &'static str);

impl AssetId {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
