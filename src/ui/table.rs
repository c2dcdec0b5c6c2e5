//! 一覧表示用のテキストテーブル
//!
//! 列幅は表示幅（全角文字は2桁）で揃える

use crate::todo::Todo;
use unicode_width::UnicodeWidthStr;

/// 列間の余白
const COLUMN_GAP: &str = "  ";

/// 一覧のヘッダ
pub const TODO_COLUMNS: [&str; 4] = ["ID", "Status", "Importance", "Details"];

/// 単純なテキストテーブル
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 行を追加（列数がヘッダより少ない場合は空欄で埋める）
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len().max(row.len()), String::new());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                if index >= widths.len() {
                    widths.push(0);
                }
                widths[index] = widths[index].max(cell.width());
            }
        }
        widths
    }

    fn render_line(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (index, cell) in cells.iter().enumerate() {
            if index > 0 {
                line.push_str(COLUMN_GAP);
            }
            line.push_str(cell);
            if index + 1 < cells.len() {
                let padding = widths[index].saturating_sub(cell.width());
                line.push_str(&" ".repeat(padding));
            }
        }
        line.trim_end().to_string()
    }

    /// テーブル全体を文字列化（各行末に改行）
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = Self::render_line(&self.headers, &widths);
        output.push('\n');
        for row in &self.rows {
            output.push_str(&Self::render_line(row, &widths));
            output.push('\n');
        }
        output
    }
}

/// Todo 一覧をテーブルとして描画
pub fn render_todos(todos: &[Todo]) -> String {
    let mut table = Table::new(TODO_COLUMNS);
    for todo in todos {
        table.add_row([
            todo.id.to_string(),
            todo.status.to_string(),
            todo.importance.to_string(),
            todo.description.clone(),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_renders_header_only() {
        assert_eq!(render_todos(&[]), "ID  Status  Importance  Details\n");
    }

    #[test]
    fn test_columns_are_aligned() {
        let mut done = Todo::new(10, "Finish report").unwrap();
        done.mark_abandoned();
        let todos = vec![Todo::new(1, "Buy milk").unwrap(), done];

        let output = render_todos(&todos);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ID  Status     Importance  Details");
        assert_eq!(lines[1], "1   Created    Medium      Buy milk");
        assert_eq!(lines[2], "10  Abandoned  Medium      Finish report");
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let mut table = Table::new(["Name", "Note"]);
        table.add_row(["牛乳", "a"]);
        table.add_row(["ab", "b"]);

        let output = table.render();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "牛乳  a");
        assert_eq!(lines[2], "ab    b");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(["1"]);

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.render(), "A  B  C\n1\n");
    }
}
