//! UIモジュール
//!
//! ratatuiベースのターミナル描画

pub mod renderer;
pub mod viewport;

// 公開API
pub use renderer::EditorRenderer;
pub use viewport::Viewport;
