//! 表示層
//!
//! コンソールに出力するテキストの整形

pub mod table;

pub use table::{render_todos, Table};
