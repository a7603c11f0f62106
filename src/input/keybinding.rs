//! キーバインドシステム
//!
//! crossterm のキーイベントを抽象コマンドに変換する。
//! 端末制御コードの知識はこの層に閉じ込め、編集セッションには持ち込まない。

use super::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// キーの組み合わせ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Ctrl+文字のキー組み合わせを作成
    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    /// 修飾キーなし
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<&KeyEvent> for KeyCombination {
    fn from(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// キーマップ
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCombination, Command>,
}

impl KeyMap {
    /// 既定のキーバインドでキーマップを作成
    pub fn new() -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
        };
        keymap.load_default_bindings();
        keymap
    }

    fn load_default_bindings(&mut self) {
        // システム
        self.bind(KeyCombination::ctrl('q'), Command::Quit);

        // カーソル移動
        self.bind(KeyCombination::ctrl('p'), Command::MoveUp);
        self.bind(KeyCombination::ctrl('n'), Command::MoveDown);
        self.bind(KeyCombination::ctrl('b'), Command::MoveLeft);
        self.bind(KeyCombination::ctrl('f'), Command::MoveRight);
        self.bind(KeyCombination::plain(KeyCode::Up), Command::MoveUp);
        self.bind(KeyCombination::plain(KeyCode::Down), Command::MoveDown);
        self.bind(KeyCombination::plain(KeyCode::Left), Command::MoveLeft);
        self.bind(KeyCombination::plain(KeyCode::Right), Command::MoveRight);

        // 編集操作
        self.bind(KeyCombination::plain(KeyCode::Enter), Command::SplitLine);
        self.bind(KeyCombination::plain(KeyCode::Backspace), Command::DeleteBackward);
        self.bind(KeyCombination::ctrl('h'), Command::DeleteBackward);
        self.bind(KeyCombination::ctrl('u'), Command::Undo);
        self.bind(KeyCombination::ctrl('z'), Command::Undo);
    }

    /// キーバインドを追加（既存の割り当ては上書き）
    pub fn bind(&mut self, key: KeyCombination, command: Command) {
        self.bindings.insert(key, command);
    }

    /// キーイベントに対応するコマンドを検索
    ///
    /// 割り当てのない印字可能文字は `InsertChar` になる
    pub fn lookup(&self, event: &KeyEvent) -> Option<Command> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        if let Some(command) = self.bindings.get(&KeyCombination::from(event)) {
            return Some(*command);
        }

        match event.code {
            KeyCode::Char(ch) if Self::is_insertable(ch, event.modifiers) => {
                Some(Command::InsertChar(ch))
            }
            _ => None,
        }
    }

    fn is_insertable(ch: char, modifiers: KeyModifiers) -> bool {
        !ch.is_control()
            && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
