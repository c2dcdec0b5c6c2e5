//! Todo エンティティ

use super::kinds::{Importance, Status};
use crate::error::{model::Result, ModelError};

/// 一件のタスクレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// コレクション内で一意な正の整数
    pub id: u32,
    pub importance: Importance,
    pub status: Status,
    pub description: String,
}

impl Todo {
    /// 新しい Todo を作成
    ///
    /// 説明は前後の空白を取り除いて保持する。空になる場合はエラー。
    /// 重要度は Medium、状態は Created で始まる。
    pub fn new(id: u32, description: &str) -> Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ModelError::EmptyDescription);
        }

        Ok(Self {
            id,
            importance: Importance::default(),
            status: Status::default(),
            description: description.to_string(),
        })
    }

    /// 完了にする
    pub fn mark_done(&mut self) {
        self.status = Status::Done;
    }

    /// 中止にする
    pub fn mark_abandoned(&mut self) {
        self.status = Status::Abandoned;
    }
}

/// Todo 作成の便利関数
pub fn new_todo(id: u32, description: &str) -> Result<Todo> {
    Todo::new(id, description)
}
