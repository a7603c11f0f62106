//! snapline - 最小構成のターミナルテキストエディタ
//!
//! 不変の行バッファ、クランプされたカーソル、スナップショット方式のUndoで構成する

// コアモジュール
pub mod app;
pub mod error;
pub mod logging;
pub mod options;

// データ層
pub mod buffer;
pub mod file;

// 編集層
pub mod editor;

// 入力層
pub mod input;

// 表示層
pub mod ui;

// 公開API
pub use app::App;
pub use buffer::{Cursor, LineBuffer};
pub use editor::{EditHistory, EditorSession, Snapshot};
pub use error::{Result, SnaplineError};
pub use input::{Command, CommandOutcome};
pub use options::EditorOptions;
