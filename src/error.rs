//! エラーハンドリングシステム
//!
//! todo-app 全体で使用される統一されたエラー型とユーティリティを定義
//! 起動時の失敗と入力ストリームの失敗は致命的、コマンドループ内の失敗は表示して継続

use std::path::Path;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// レコードモデルのエラー
    #[error(transparent)]
    Model(#[from] ModelError),

    /// ストア（CSVファイル）操作エラー
    #[error(transparent)]
    Store(#[from] StoreError),

    /// コマンドループのエラー
    #[error(transparent)]
    Command(#[from] CommandError),

    /// 保存コマンド（自動保存を含む）の失敗
    #[error("failed to save todos: {0}")]
    Save(#[source] StoreError),

    /// 設定エラー
    #[error("configuration error: {0}")]
    Config(String),
}

/// レコードモデル固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// 列挙値として解釈できない文字列
    #[error("invalid {kind}: {value}")]
    InvalidEnum { kind: &'static str, value: String },

    #[error("description cannot be empty")]
    EmptyDescription,
}

/// ストア固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to open file {path}: {message}")]
    FileOpen { path: String, message: String },

    #[error("failed to write {path}: {message}")]
    FileWrite { path: String, message: String },

    /// 行の形式不正（列数、ID、列挙値、ヘッダ）
    ///
    /// 列挙値の解釈失敗が原因の場合は `source` に元の [`ModelError`] を保持する
    #[error("failed to parse {path} at line {line}: {message}")]
    Parse {
        path: String,
        line: u64,
        message: String,
        #[source]
        source: Option<ModelError>,
    },
}

impl StoreError {
    pub fn open(path: &Path, error: impl std::fmt::Display) -> Self {
        StoreError::FileOpen {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    pub fn write(path: &Path, error: impl std::fmt::Display) -> Self {
        StoreError::FileWrite {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    pub fn parse(path: &Path, line: u64, message: impl Into<String>) -> Self {
        StoreError::Parse {
            path: path.display().to_string(),
            line,
            message: message.into(),
            source: None,
        }
    }

    /// 列挙値エラーを原因とするパースエラー
    pub fn invalid_value(path: &Path, line: u64, error: ModelError) -> Self {
        StoreError::Parse {
            path: path.display().to_string(),
            line,
            message: error.to_string(),
            source: Some(error),
        }
    }
}

/// コマンドループ固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {command}")]
    UnknownCommand { command: String },

    /// 入力ストリームの読み込み失敗（EOFを含む、致命的）
    #[error("failed to read input: {message}")]
    InputStream { message: String },

    /// コンソールへの書き込み失敗（致命的）
    #[error("failed to write output: {message}")]
    Output { message: String },
}

/// エラーレベル分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLevel {
    /// プロンプトに戻って継続できる
    Error,
    /// プロセスを終了する
    Fatal,
}

impl TodoError {
    /// コマンドループ内で発生した場合のエラーレベル
    pub fn level(&self) -> ErrorLevel {
        match self {
            TodoError::Command(CommandError::InputStream { .. }) => ErrorLevel::Fatal,
            TodoError::Command(CommandError::Output { .. }) => ErrorLevel::Fatal,
            TodoError::Config(_) => ErrorLevel::Fatal,
            _ => ErrorLevel::Error,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.level() == ErrorLevel::Fatal
    }
}

/// 致命的エラー処理
///
/// メッセージを標準出力に表示し、終了ステータス1で即座に終了する
pub fn handle_fatal_error(error: &TodoError, context: &str) -> ! {
    log::debug!("fatal error in {}: {:?}", context, error);
    println!("{}: {}", context, error);
    std::process::exit(1);
}

/// パニックハンドラの設定
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .unwrap_or_else(|| std::panic::Location::caller());

        let message: &str = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

/// エラーコンテキスト付与のためのトレイト
pub trait ErrorContext<T> {
    /// 失敗時に操作名付きでログを出力し、[`TodoError`] へ変換する
    fn with_context_info(self, operation: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TodoError>,
{
    fn with_context_info(self, operation: &str) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            log::debug!("{} failed: {:?}", operation, error);
            error
        })
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TodoError>;

/// 各モジュール固有のResult型
pub mod model {
    pub type Result<T> = std::result::Result<T, super::ModelError>;
}

pub mod store {
    pub type Result<T> = std::result::Result<T, super::StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_command_message() {
        let error: TodoError = CommandError::UnknownCommand {
            command: "bogus".to_string(),
        }
        .into();

        assert_eq!(error.to_string(), "unknown command: bogus");
        assert_eq!(error.level(), ErrorLevel::Error);
    }

    #[test]
    fn test_input_stream_is_fatal() {
        let error: TodoError = CommandError::InputStream {
            message: "end of input".to_string(),
        }
        .into();

        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "failed to read input: end of input");
    }

    #[test]
    fn test_store_errors_are_recoverable() {
        let path = PathBuf::from("todo.csv");
        let error: TodoError = StoreError::write(&path, "disk full").into();

        assert!(!error.is_fatal());
        assert_eq!(error.to_string(), "failed to write todo.csv: disk full");
    }

    #[test]
    fn test_save_failure_is_prefixed_and_recoverable() {
        let path = PathBuf::from("todo.csv");
        let error = TodoError::Save(StoreError::write(&path, "disk full"));

        assert!(!error.is_fatal());
        assert_eq!(
            error.to_string(),
            "failed to save todos: failed to write todo.csv: disk full"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_value_keeps_model_error_as_source() {
        let path = PathBuf::from("todo.csv");
        let cause = ModelError::InvalidEnum {
            kind: "status",
            value: "Pending".to_string(),
        };
        let error = StoreError::invalid_value(&path, 3, cause.clone());

        match &error {
            StoreError::Parse { line, source, .. } => {
                assert_eq!(*line, 3);
                assert_eq!(source.as_ref(), Some(&cause));
            }
            _ => panic!("Expected Parse error"),
        }
        assert!(error.to_string().contains("invalid status: Pending"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_with_context_info_converts_error() {
        let result: std::result::Result<(), ModelError> = Err(ModelError::EmptyDescription);
        let converted = result.with_context_info("new");

        assert_eq!(
            converted.unwrap_err(),
            TodoError::Model(ModelError::EmptyDescription)
        );
    }
}
