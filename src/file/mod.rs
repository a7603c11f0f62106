//! ファイル操作モジュール
//!
//! 初期ファイルの読み込みとパス処理

pub mod io;
pub mod path;

// 公開API
pub use io::{load_lines, normalize_line};
pub use path::expand_path;
