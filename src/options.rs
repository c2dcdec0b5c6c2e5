//! 起動オプション
//!
//! コマンドライン引数と環境変数から保存先やログ設定を組み立てる

use crate::error::{Result, TodoError};
use crate::logging::LogLevel;
use crate::store::{expand_path, DEFAULT_STORE_FILE};
use std::path::PathBuf;

/// 保存先を指定する環境変数
pub const STORE_ENV: &str = "TODO_APP_FILE";
/// ログレベルを指定する環境変数
pub const LOG_LEVEL_ENV: &str = "TODO_APP_LOG";

/// アプリケーションの起動オプション
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppOptions {
    /// 保存先（未指定時は `todo.csv`）
    pub store_path: Option<PathBuf>,
    /// デバッグログ出力先
    pub debug_log: Option<PathBuf>,
    /// ログレベル（未指定時は警告以上、デバッグログ指定時はデバッグ）
    pub log_level: Option<LogLevel>,
}

impl AppOptions {
    /// コマンドライン引数を解釈（先頭のプログラム名は含めない）
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let mut options = AppOptions::default();

        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    let value = iter.next().ok_or_else(|| {
                        TodoError::Config(format!("{} requires a path", arg))
                    })?;
                    options.store_path = Some(expand_path(value)?);
                }
                "--debug-log" => {
                    let path = match iter.peek() {
                        Some(next) if !next.starts_with('-') => {
                            let path = expand_path(next)?;
                            iter.next();
                            Some(path)
                        }
                        _ => default_log_path(),
                    };
                    options.debug_log = path;
                }
                other if other.starts_with('-') => {
                    return Err(TodoError::Config(format!("unknown option: {}", other)));
                }
                path => {
                    if options.store_path.is_some() {
                        return Err(TodoError::Config(format!(
                            "unexpected argument: {}",
                            path
                        )));
                    }
                    options.store_path = Some(expand_path(path)?);
                }
            }
        }

        Ok(options)
    }

    /// 環境変数から読み込む
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_path = match lookup(STORE_ENV) {
            Some(value) if !value.trim().is_empty() => Some(expand_path(value.trim())?),
            _ => None,
        };

        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(value) if !value.trim().is_empty() => Some(
                value
                    .trim()
                    .parse::<LogLevel>()
                    .map_err(|e| TodoError::Config(format!("{}: {}", LOG_LEVEL_ENV, e)))?,
            ),
            _ => None,
        };

        Ok(Self {
            store_path,
            debug_log: None,
            log_level,
        })
    }

    /// `overrides` に値があればそちらを優先して合成する
    pub fn merged_with(&self, overrides: &AppOptions) -> AppOptions {
        AppOptions {
            store_path: overrides
                .store_path
                .clone()
                .or_else(|| self.store_path.clone()),
            debug_log: overrides
                .debug_log
                .clone()
                .or_else(|| self.debug_log.clone()),
            log_level: overrides.log_level.or(self.log_level),
        }
    }

    /// 実際に使う保存先
    pub fn resolve_store_path(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }

    /// 実際に使うログレベル
    pub fn resolve_log_level(&self) -> LogLevel {
        match (self.log_level, &self.debug_log) {
            (Some(level), _) => level,
            (None, Some(_)) => LogLevel::Debug,
            (None, None) => LogLevel::Warning,
        }
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".todo-app").join("debug.log"))
}
