//! メインアプリケーション構造体
//!
//! Todo コレクションの所有と、一行読み込み → 判定 → 実行の対話ループを実装

use crate::command::{help_text, Command, CommandResult};
use crate::error::{CommandError, ErrorContext, Result, TodoError};
use crate::store::{CsvStore, TodoStore};
use crate::todo::Todo;
use crate::ui::render_todos;
use std::io::{self, BufRead, Write};

/// 起動時のメッセージ
pub const BANNER: &str = "Todo App Started - Type 'help' for commands";
/// 入力プロンプト
pub const PROMPT: &str = "> ";
/// 説明入力のプロンプト
pub const DESCRIPTION_PROMPT: &str = "Enter todo description: ";

/// メインアプリケーション構造体
///
/// コレクションはこのインスタンスだけが所有し、ファイルは次回起動までの保存先として扱う
pub struct App<S: TodoStore, R: BufRead, W: Write> {
    store: S,
    todos: Vec<Todo>,
    input: R,
    output: W,
}

impl App<CsvStore, io::StdinLock<'static>, io::Stdout> {
    /// 標準入出力に接続したアプリケーションを作成
    pub fn with_stdio(store: CsvStore) -> Result<Self> {
        Self::new(store, io::stdin().lock(), io::stdout())
    }
}

impl<S: TodoStore, R: BufRead, W: Write> App<S, R, W> {
    /// ストアから全件を読み込んでアプリケーションを作成
    pub fn new(store: S, input: R, output: W) -> Result<Self> {
        let todos = store.load()?;
        log::info!(
            "loaded {} todos from {}",
            todos.len(),
            store.path().display()
        );

        Ok(Self {
            store,
            todos,
            input,
            output,
        })
    }

    /// メモリ上のコレクション
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// メインループを実行
    ///
    /// `exit` で `Ok(())` を返す。入力ストリームの失敗（EOFを含む）は致命的エラーとして返す。
    pub fn run(&mut self) -> Result<()> {
        self.write_line(BANNER)?;

        loop {
            self.write_prompt(PROMPT)?;
            let line = self.read_line()?;
            let command = Command::from_string(&line);

            match self.execute(&command) {
                Ok(result) => {
                    if let Some(message) = &result.message {
                        self.write_line(message)?;
                    }
                    if result.should_quit {
                        log::debug!("exit requested");
                        return Ok(());
                    }
                }
                Err(error) if error.is_fatal() => return Err(error),
                Err(error) => {
                    log::debug!("command {:?} failed: {:?}", command.name(), error);
                    self.write_line(&format!("Error: {}", error))?;
                }
            }
        }
    }

    /// コマンドを実行
    pub fn execute(&mut self, command: &Command) -> Result<CommandResult> {
        match command {
            Command::Help => {
                let text = help_text();
                self.write_text(&text)?;
                Ok(CommandResult::success())
            }
            Command::List => {
                let table = render_todos(&self.todos);
                self.write_text(&table)?;
                Ok(CommandResult::success())
            }
            Command::New => self.create_todo(),
            Command::Save => self.save_todos(),
            Command::Exit => Ok(CommandResult::quit()),
            Command::Empty => Ok(CommandResult::success()),
            Command::Unknown(name) => Err(CommandError::UnknownCommand {
                command: name.clone(),
            }
            .into()),
        }
    }

    /// 説明を尋ねて新しい Todo を追加し、続けて自動保存する
    ///
    /// 自動保存に失敗しても追加は取り消さない
    fn create_todo(&mut self) -> Result<CommandResult> {
        self.write_prompt(DESCRIPTION_PROMPT)?;
        let description = self.read_line()?;

        let id = self.todos.len() as u32 + 1;
        let todo = Todo::new(id, &description)?;
        log::info!("created todo {}", todo.id);
        self.todos.push(todo);

        self.write_line("Todo created successfully!")?;
        self.save_todos()
    }

    /// コレクション全体を保存
    fn save_todos(&mut self) -> Result<CommandResult> {
        self.store
            .save(&self.todos)
            .map_err(TodoError::Save)
            .with_context_info("save")?;
        Ok(CommandResult::success_with_message(
            "Todos saved successfully!",
        ))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(input_error("end of input")),
            Ok(_) => Ok(line),
            Err(e) => Err(input_error(e)),
        }
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt).map_err(output_error)?;
        self.output.flush().map_err(output_error)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(output_error)
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).map_err(output_error)
    }
}

fn input_error(error: impl std::fmt::Display) -> TodoError {
    CommandError::InputStream {
        message: error.to_string(),
    }
    .into()
}

fn output_error(error: io::Error) -> TodoError {
    CommandError::Output {
        message: error.to_string(),
    }
    .into()
}
