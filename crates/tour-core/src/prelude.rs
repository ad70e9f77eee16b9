pub use crate::asset::AssetId;
pub use crate::color::Color;
pub use crate::error::UiError;
pub use crate::geometry::Size;
pub use crate::locals::{Theme, theme, with_theme};
pub use crate::modifier::{Alignment, Arrangement, Modifier};
pub use crate::runtime::{Frame, Scheduler};
pub use crate::scope::{Scope, current_scope};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::text::{
    AnnotatedString, FontStyle, FontWeight, SpanStyle, TextAlign, TextDecoration, TextRun,
};
pub use crate::view::{View, ViewId, ViewKind};
