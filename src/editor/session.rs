//! 編集セッション
//!
//! 現在のバッファ・カーソル・履歴を保持し、抽象コマンドを状態遷移に変換する。
//! 状態の更新は常に「保持している値の差し替え」で行い、その場で書き換えない。

use crate::buffer::{Cursor, LineBuffer};
use crate::editor::history::EditHistory;
use crate::error::buffer::Result;
use crate::input::{Command, CommandOutcome};

/// 編集セッション
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    buffer: LineBuffer,
    cursor: Cursor,
    history: EditHistory,
}

impl EditorSession {
    /// 行のシーケンスからセッションを作成（カーソルは原点）
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_history(LineBuffer::from_lines(lines), EditHistory::new())
    }

    /// 履歴の設定を指定してセッションを作成
    pub fn with_history(buffer: LineBuffer, history: EditHistory) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            history,
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// コマンドを1つ実行する
    ///
    /// `OutOfBounds` はコマンド解釈の契約違反を意味するため、そのまま呼び出し側へ返す
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        log::trace!(
            "apply {} at ({}, {})",
            command.name(),
            self.cursor.row(),
            self.cursor.col()
        );

        let outcome = match command {
            Command::MoveUp => self.move_cursor(Cursor::up),
            Command::MoveDown => self.move_cursor(Cursor::down),
            Command::MoveLeft => self.move_cursor(Cursor::left),
            Command::MoveRight => self.move_cursor(Cursor::right),
            Command::InsertChar(ch) if ch.is_control() => {
                // 改行・制御文字は行に入れない（行分割は SplitLine のみ）
                log::debug!("ignored control char {:?}", ch);
                CommandOutcome::Unchanged
            }
            Command::InsertChar(ch) => {
                let buffer = self.buffer.insert(ch, self.cursor.row(), self.cursor.col())?;
                self.commit(command, buffer, |cursor, buffer| cursor.right(buffer))
            }
            Command::SplitLine => {
                let buffer = self
                    .buffer
                    .split_line(self.cursor.row(), self.cursor.col())?;
                self.commit(command, buffer, |cursor, buffer| {
                    cursor.down(buffer).move_to_col(0)
                })
            }
            Command::DeleteBackward => {
                if self.cursor.col() == 0 {
                    // 行頭では前の行と連結しない
                    CommandOutcome::Unchanged
                } else {
                    let buffer = self
                        .buffer
                        .delete(self.cursor.row(), self.cursor.col() - 1)?;
                    self.commit(command, buffer, |cursor, buffer| cursor.left(buffer))
                }
            }
            Command::Undo => self.undo(),
            Command::Quit => CommandOutcome::Quit,
        };

        Ok(outcome)
    }

    fn move_cursor(&mut self, step: fn(&Cursor, &LineBuffer) -> Cursor) -> CommandOutcome {
        let moved = step(&self.cursor, &self.buffer);
        if moved == self.cursor {
            CommandOutcome::Unchanged
        } else {
            self.cursor = moved;
            CommandOutcome::Moved
        }
    }

    /// 直前の状態を履歴に積んでから新しいバッファとカーソルに差し替える
    fn commit(
        &mut self,
        command: Command,
        buffer: LineBuffer,
        place: impl FnOnce(Cursor, &LineBuffer) -> Cursor,
    ) -> CommandOutcome {
        debug_assert!(command.is_mutating());
        let previous = std::mem::replace(&mut self.buffer, buffer);
        self.history.save(previous, self.cursor);
        self.cursor = place(self.cursor, &self.buffer);
        CommandOutcome::Edited
    }

    fn undo(&mut self) -> CommandOutcome {
        match self.history.restore() {
            Some(snapshot) => {
                self.buffer = snapshot.buffer;
                self.cursor = snapshot.cursor;
                log::debug!("undo: {} snapshots left", self.history.len());
                CommandOutcome::Undone
            }
            None => CommandOutcome::Unchanged,
        }
    }
}
