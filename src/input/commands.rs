//! コマンドシステム
//!
//! 入力層が生成する抽象コマンドと、その実行結果の定義

/// コマンドの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // カーソル移動
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // 編集操作
    InsertChar(char),
    SplitLine,
    DeleteBackward,
    Undo,

    // システム
    Quit,
}

impl Command {
    /// バッファを変更しうるコマンドか
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_) | Command::SplitLine | Command::DeleteBackward
        )
    }

    /// ログ出力用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Command::MoveUp => "move-up",
            Command::MoveDown => "move-down",
            Command::MoveLeft => "move-left",
            Command::MoveRight => "move-right",
            Command::InsertChar(_) => "insert-char",
            Command::SplitLine => "split-line",
            Command::DeleteBackward => "delete-backward",
            Command::Undo => "undo",
            Command::Quit => "quit",
        }
    }
}

/// コマンド実行の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// カーソルのみ移動した
    Moved,
    /// バッファが編集され、履歴が1つ積まれた
    Edited,
    /// 履歴から状態を復元した
    Undone,
    /// 何も変化しなかった
    Unchanged,
    /// セッション終了
    Quit,
}

impl CommandOutcome {
    /// 画面更新が必要か
    pub fn needs_refresh(&self) -> bool {
        matches!(
            self,
            CommandOutcome::Moved | CommandOutcome::Edited | CommandOutcome::Undone
        )
    }

    /// アプリケーションを終了するか
    pub fn should_quit(&self) -> bool {
        matches!(self, CommandOutcome::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_commands() {
        assert!(Command::InsertChar('a').is_mutating());
        assert!(Command::SplitLine.is_mutating());
        assert!(Command::DeleteBackward.is_mutating());
        assert!(!Command::MoveLeft.is_mutating());
        assert!(!Command::Undo.is_mutating());
        assert!(!Command::Quit.is_mutating());
    }

    #[test]
    fn test_outcome_flags() {
        assert!(CommandOutcome::Edited.needs_refresh());
        assert!(!CommandOutcome::Unchanged.needs_refresh());
        assert!(CommandOutcome::Quit.should_quit());
        assert!(!CommandOutcome::Moved.should_quit());
    }
}
