//! バッファ管理モジュール
//!
//! 行単位のテキストデータと、それに対するカーソル位置を提供

pub mod cursor;
pub mod line_buffer;

// 公開API
pub use cursor::Cursor;
pub use line_buffer::LineBuffer;
pub use crate::error::BufferError;
