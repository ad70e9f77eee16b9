//! # Views, state and locals
//!
//! Screens are plain functions that return a [`View`] tree. The host composes
//! the root function once per event, flattens the tree and dispatches input
//! back into the callbacks stored on the views.
//!
//! - [`Signal<T>`] is a cloneable handle to a piece of state.
//! - [`Scope`] collects disposers and is torn down when a navigation entry
//!   is popped.
//!
//! ```rust
//! use tour_core::*;
//!
//! let content = signal(String::new());
//! content.set("hello".into());
//! assert_eq!(content.get(), "hello");
//! ```
//!
//! Global UI parameters (currently only the [`Theme`]) are composition locals:
//!
//! ```rust
//! use tour_core::*;
//!
//! let bg = with_theme(Theme::default(), || theme().background);
//! assert_eq!(bg, Theme::default().background);
//! ```

pub mod asset;
pub mod color;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod text;
pub mod view;

pub use asset::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use text::*;
pub use view::*;
