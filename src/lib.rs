//! todo-app - Interactive command-line todo manager backed by a CSV file
//!
//! 起動時にCSVファイルから全件を読み込み、対話ループでコマンドを受け付ける

// コアモジュール
pub mod app;
pub mod error;
pub mod logging;
pub mod options;

// データ層
pub mod store;
pub mod todo;

// ロジック層
pub mod command;

// 表示層
pub mod ui;

// 公開API
pub use app::App;
pub use error::{Result, TodoError};
pub use store::{CsvStore, TodoStore};
pub use todo::{Importance, Status, Todo};
