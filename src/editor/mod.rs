//! エディタモジュール
//!
//! 編集履歴と、コマンドを解釈する編集セッション

pub mod history;
pub mod session;

// 公開API
pub use history::{EditHistory, Snapshot};
pub use session::EditorSession;
