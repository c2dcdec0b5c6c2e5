//! コマンドシステム
//!
//! 対話ループで受け付けるコマンドの定義。語彙は固定で、前後の空白を除いた行との完全一致で判定する。

/// コマンド実行の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// 結果メッセージ
    pub message: Option<String>,
    /// アプリケーションを終了するか
    pub should_quit: bool,
}

impl CommandResult {
    /// 成功結果を作成
    pub fn success() -> Self {
        Self {
            message: None,
            should_quit: false,
        }
    }

    /// メッセージ付き成功結果を作成
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            should_quit: false,
        }
    }

    /// 終了結果を作成
    pub fn quit() -> Self {
        Self {
            message: Some("Goodbye!".to_string()),
            should_quit: true,
        }
    }
}

/// コマンドの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    New,
    Save,
    Exit,
    /// 空行（何もしない）
    Empty,
    /// 未知のコマンド
    Unknown(String),
}

impl Command {
    /// ヘルプに表示する順序
    pub const BUILTIN: [Command; 5] = [
        Command::List,
        Command::New,
        Command::Save,
        Command::Exit,
        Command::Help,
    ];

    /// 入力行からコマンドを作成
    pub fn from_string(input: &str) -> Self {
        match input.trim() {
            "help" => Command::Help,
            "list" => Command::List,
            "new" => Command::New,
            "save" => Command::Save,
            "exit" => Command::Exit,
            "" => Command::Empty,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// コマンド名
    pub fn name(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::List => "list",
            Command::New => "new",
            Command::Save => "save",
            Command::Exit => "exit",
            Command::Empty => "",
            Command::Unknown(name) => name,
        }
    }

    /// コマンドの説明
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Show this help message",
            Command::List => "Show all todos",
            Command::New => "Create a new todo",
            Command::Save => "Save changes to file",
            Command::Exit => "Exit the application",
            Command::Empty => "",
            Command::Unknown(_) => "Unknown command",
        }
    }
}

/// ヘルプ表示用のテキスト
pub fn help_text() -> String {
    let mut text = String::from("\nAvailable commands:\n");
    for command in Command::BUILTIN.iter() {
        text.push_str(&format!(
            "  {:<8} - {}\n",
            command.name(),
            command.description()
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_string() {
        assert_eq!(Command::from_string("help"), Command::Help);
        assert_eq!(Command::from_string("list"), Command::List);
        assert_eq!(Command::from_string("new"), Command::New);
        assert_eq!(Command::from_string("save"), Command::Save);
        assert_eq!(Command::from_string("exit"), Command::Exit);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(Command::from_string("  list \n"), Command::List);
        assert_eq!(Command::from_string("\r\n"), Command::Empty);
        assert_eq!(Command::from_string(""), Command::Empty);
    }

    #[test]
    fn test_match_is_exact() {
        assert_eq!(
            Command::from_string("List"),
            Command::Unknown("List".to_string())
        );
        assert_eq!(
            Command::from_string("list all"),
            Command::Unknown("list all".to_string())
        );
    }

    #[test]
    fn test_help_text_lists_builtin_commands() {
        let text = help_text();

        assert!(text.starts_with("\nAvailable commands:\n"));
        assert!(text.contains("  list     - Show all todos\n"));
        assert!(text.contains("  new      - Create a new todo\n"));
        assert!(text.contains("  save     - Save changes to file\n"));
        assert!(text.contains("  exit     - Exit the application\n"));
        assert!(text.contains("  help     - Show this help message\n"));
    }

    #[test]
    fn test_quit_result() {
        let result = CommandResult::quit();
        assert!(result.should_quit);
        assert_eq!(result.message.as_deref(), Some("Goodbye!"));
    }
}
