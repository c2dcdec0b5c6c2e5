//! レコードモデル
//!
//! Todo エンティティと、その状態・重要度を表す閉じた列挙型

pub mod kinds;
pub mod model;

pub use kinds::{parse_importance, parse_status, Importance, Status};
pub use model::{new_todo, Todo};
