//! ストアパスの展開

use crate::error::{Result, TodoError};
use std::path::PathBuf;

/// 既定の保存先（作業ディレクトリ直下）
pub const DEFAULT_STORE_FILE: &str = "todo.csv";

/// `~` と環境変数（`$VAR` / `${VAR}`）を展開する
pub fn expand_path(path: &str) -> Result<PathBuf> {
    match shellexpand::full(path) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(e) => Err(TodoError::Config(format!(
            "cannot expand path {}: {}",
            path, e
        ))),
    }
}
