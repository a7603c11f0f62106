//! エラーハンドリングシステム
//!
//! snapline 全体で使用される統一されたエラー型とユーティリティを定義
//! 範囲外アクセスは呼び出し側の契約違反として上位へ伝播させる

use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnaplineError {
    /// ファイル操作エラー
    #[error("File operation failed: {0}")]
    File(#[from] FileError),

    /// バッファ操作エラー
    #[error("Buffer operation failed: {0}")]
    Buffer(#[from] BufferError),

    /// UI操作エラー
    #[error("UI operation failed: {0}")]
    Ui(#[from] UiError),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// パスエラー
    #[error("Path error: {0}")]
    Path(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// バッファ操作固有のエラー
///
/// 履歴が空の場合はエラーではなく `None` で表現する
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("Position out of bounds: row {row}, col {col}")]
    OutOfBounds { row: usize, col: usize },
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("Terminal operation failed ({context}): {message}")]
    Terminal { context: String, message: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown option: {option}")]
    UnknownOption { option: String },

    #[error("Missing value for {option}")]
    MissingValue { option: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl UiError {
    /// ターミナル操作の失敗からエラーを作成
    pub fn terminal(context: &str, err: impl std::fmt::Display) -> Self {
        UiError::Terminal {
            context: context.to_string(),
            message: err.to_string(),
        }
    }
}

/// パニックハンドラの設定
///
/// rawモードのまま終了すると端末が壊れるため、先に端末状態を戻してから出力する
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), LeaveAlternateScreen);

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        log::error!("panic at {}: {}", location, message);
        eprintln!("PANIC at {}: {}", location, message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, SnaplineError>;

/// 各モジュール固有のResult型
pub mod file {
    pub type Result<T> = std::result::Result<T, super::FileError>;
}

pub mod buffer {
    pub type Result<T> = std::result::Result<T, super::BufferError>;
}

// std::io::Error から SnaplineError への変換
impl From<std::io::Error> for SnaplineError {
    fn from(error: std::io::Error) -> Self {
        SnaplineError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}
