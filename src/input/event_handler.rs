//! イベントハンドリング
//!
//! ターミナルイベントを読み取り、コマンドに変換する

use super::{Command, KeyMap};
use crate::error::{Result, UiError};
use crossterm::event::{self, Event};

/// 入力ハンドラー
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    keymap: KeyMap,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次のイベントが来るまでブロックし、変換結果を返す
    pub fn read_event(&self) -> Result<InputEvent> {
        let event = event::read().map_err(|err| UiError::terminal("read event", err))?;
        Ok(self.translate(event))
    }

    /// ターミナルイベントを入力結果に変換
    pub fn translate(&self, event: Event) -> InputEvent {
        match event {
            Event::Key(key_event) => match self.keymap.lookup(&key_event) {
                Some(command) => InputEvent::Command(command),
                None => {
                    log::trace!("unbound key: {:?}", key_event);
                    InputEvent::Ignored
                }
            },
            Event::Resize(cols, rows) => InputEvent::Resize { cols, rows },
            // マウス・フォーカス・ペーストは未サポート
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {
                InputEvent::Ignored
            }
        }
    }
}

/// 入力処理の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// コマンドに変換された
    Command(Command),
    /// ターミナルサイズ変更
    Resize { cols: u16, rows: u16 },
    /// 無視（未バインドキー、マウス等）
    Ignored,
}
