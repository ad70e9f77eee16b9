//! # Theme local
//!
//! The theme is a thread-local "composition local": widgets read it through
//! [`theme()`] and a subtree can be composed under another one with
//! [`with_theme`]. Outside any `with_theme` call the default theme applies.
//!
//! ```rust
//! use tour_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().background, Color::WHITE);
//! });
//! ```

use std::cell::RefCell;

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub error: Color,
    pub outline: Color,
    pub card: Color,
    pub on_card: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#FFFBFE"),
            surface: Color::from_hex("#FFFBFE"),
            on_surface: Color::from_hex("#1C1B1F"),
            primary: Color::from_hex("#6650A4"),
            on_primary: Color::WHITE,
            error: Color::from_hex("#B3261E"),
            outline: Color::from_hex("#79747E"),
            card: Color::from_hex("#BBDEFB"),
            on_card: Color::from_hex("#1C1B1F"),
        }
    }
}

thread_local! {
    static THEME_STACK: RefCell<Vec<Theme>> = const { RefCell::new(Vec::new()) };
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    THEME_STACK.with(|st| st.borrow_mut().push(theme));
    struct Pop;
    impl Drop for Pop {
        fn drop(&mut self) {
            THEME_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    let _pop = Pop;
    f()
}

pub fn theme() -> Theme {
    THEME_STACK.with(|st| st.borrow().last().copied().unwrap_or_default())
}
