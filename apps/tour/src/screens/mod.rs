//! One render function per route. Screens are plain functions of their
//! props; only the text field screen reads state, and that state belongs to
//! its navigation entry.

pub mod column_layout;
pub mod component_list;
pub mod images;
pub mod row_layout;
pub mod text_detail;
pub mod text_field;
pub mod welcome;
