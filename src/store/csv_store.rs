//! CSVファイルストア
//!
//! ヘッダ行 `Id,Importance,Status,Description` と一件一行のデータ行からなる
//! UTF-8テキストを読み書きする。読み込みは全件成功か全件失敗のどちらか。
//! 保存はファイル全体を上書きする（一時ファイル経由の置き換えは行わない）。

use super::TodoStore;
use crate::error::{store::Result, StoreError};
use crate::todo::{parse_importance, parse_status, Todo};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// ヘッダ行（列の順序と名前は固定）
pub const HEADER: [&str; 4] = ["Id", "Importance", "Status", "Description"];

/// ファイル上の一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TodoRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Importance")]
    importance: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Description")]
    description: String,
}

impl From<&Todo> for TodoRow {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            importance: todo.importance.to_string(),
            status: todo.status.to_string(),
            description: todo.description.clone(),
        }
    }
}

impl TodoRow {
    fn into_todo(self, path: &Path, line: u64) -> Result<Todo> {
        let id = match self.id.parse::<u32>() {
            Ok(0) => {
                return Err(StoreError::parse(path, line, "id must be a positive integer"));
            }
            Ok(id) => id,
            Err(_) => {
                return Err(StoreError::parse(
                    path,
                    line,
                    format!("invalid id: {}", self.id),
                ));
            }
        };

        let importance = parse_importance(&self.importance)
            .map_err(|e| StoreError::invalid_value(path, line, e))?;
        let status =
            parse_status(&self.status).map_err(|e| StoreError::invalid_value(path, line, e))?;

        Ok(Todo {
            id,
            importance,
            status,
            description: self.description,
        })
    }
}

/// CSVファイルに保存するストア
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn csv_error(&self, error: csv::Error) -> StoreError {
        let line = error.position().map(|pos| pos.line()).unwrap_or(0);
        StoreError::parse(&self.path, line, error.to_string())
    }

    fn write_error(&self, error: impl std::fmt::Display) -> StoreError {
        StoreError::write(&self.path, error)
    }

    /// 任意のリーダーからレコードを読み込む
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Todo>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers = reader.headers().map_err(|e| self.csv_error(e))?.clone();
        if !headers.iter().eq(HEADER.iter().copied()) {
            return Err(StoreError::parse(
                &self.path,
                1,
                format!("expected header {}", HEADER.join(",")),
            ));
        }

        let mut todos = Vec::new();
        let mut seen = HashSet::new();

        for result in reader.records() {
            let record = result.map_err(|e| self.csv_error(e))?;
            let line = record.position().map(|pos| pos.line()).unwrap_or(0);

            let row: TodoRow = record
                .deserialize(Some(&headers))
                .map_err(|e| StoreError::parse(&self.path, line, e.to_string()))?;
            let todo = row.into_todo(&self.path, line)?;

            if !seen.insert(todo.id) {
                log::warn!(
                    "duplicate id {} at line {} in {}",
                    todo.id,
                    line,
                    self.path.display()
                );
            }
            todos.push(todo);
        }

        log::debug!("loaded {} todos from {}", todos.len(), self.path.display());
        Ok(todos)
    }
}

impl TodoStore for CsvStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        log::info!("creating store file {}", self.path.display());
        self.save(&[])
    }

    fn load(&self) -> Result<Vec<Todo>> {
        let file = File::open(&self.path).map_err(|e| StoreError::open(&self.path, e))?;
        self.read_from(file)
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| self.write_error(e))?;

        writer.write_record(HEADER).map_err(|e| self.write_error(e))?;
        for todo in todos {
            writer
                .serialize(TodoRow::from(todo))
                .map_err(|e| self.write_error(e))?;
        }
        writer.flush().map_err(|e| self.write_error(e))?;

        log::debug!("saved {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }
}
