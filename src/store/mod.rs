//! ストアモジュール
//!
//! メモリ上の Todo コレクションとディスク上の区切りテキストファイルを橋渡しする。
//! - 起動時に全件読み込み、保存時は全件書き直し（差分更新なし）
//! - 同一ファイルへの同時アクセスは非対応

pub mod csv_store;
pub mod path;

pub use csv_store::{CsvStore, HEADER};
pub use path::{expand_path, DEFAULT_STORE_FILE};

use crate::error::store::Result;
use crate::todo::Todo;
use std::path::Path;

/// Todo の永続化先のトレイト
pub trait TodoStore {
    /// 保存先のパス
    fn path(&self) -> &Path;

    /// ファイルが無ければ親ディレクトリとヘッダのみのファイルを作成する
    ///
    /// 既存ファイルの内容はここでは検証しない
    fn ensure_file(&self) -> Result<()>;

    /// 全件を読み込む（一行でも不正なら全体が失敗）
    fn load(&self) -> Result<Vec<Todo>>;

    /// コレクション全体でファイルを上書きする
    fn save(&self, todos: &[Todo]) -> Result<()>;
}

/// 読み込みの便利関数
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Todo>> {
    CsvStore::new(path.as_ref()).load()
}

/// 保存の便利関数
pub fn save<P: AsRef<Path>>(path: P, todos: &[Todo]) -> Result<()> {
    CsvStore::new(path.as_ref()).save(todos)
}

/// ファイル準備の便利関数
pub fn ensure_file<P: AsRef<Path>>(path: P) -> Result<()> {
    CsvStore::new(path.as_ref()).ensure_file()
}
