//! 入力処理モジュール
//!
//! キーバインド、コマンド定義、イベントハンドリングを提供

pub mod commands;
pub mod event_handler;
pub mod keybinding;

// 公開API
pub use commands::{Command, CommandOutcome};
pub use event_handler::{InputEvent, InputHandler};
pub use keybinding::{KeyCombination, KeyMap};
