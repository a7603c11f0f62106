//! カーソル位置管理
//!
//! 行バッファ内のカーソル位置を表す不変の値。
//! 移動操作は常にバッファの形状に合わせてクランプされた新しいカーソルを返す。

use super::LineBuffer;

/// カーソル位置（0ベースの行・列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// 指定位置にカーソルを作成（クランプしない）
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 行番号
    pub const fn row(&self) -> usize {
        self.row
    }

    /// 列番号
    pub const fn col(&self) -> usize {
        self.col
    }

    /// 前の行に移動
    ///
    /// 列は移動先の行の長さで切り詰められ、元の列は記憶しない
    pub fn up(&self, buffer: &LineBuffer) -> Self {
        Self::new(self.row.saturating_sub(1), self.col).clamp(buffer)
    }

    /// 次の行に移動
    pub fn down(&self, buffer: &LineBuffer) -> Self {
        Self::new(self.row.saturating_add(1), self.col).clamp(buffer)
    }

    /// 前の文字に移動（行頭で止まる）
    pub fn left(&self, buffer: &LineBuffer) -> Self {
        Self::new(self.row, self.col.saturating_sub(1)).clamp(buffer)
    }

    /// 次の文字に移動（行末で止まる）
    pub fn right(&self, buffer: &LineBuffer) -> Self {
        Self::new(self.row, self.col.saturating_add(1)).clamp(buffer)
    }

    /// 列を直接設定する
    ///
    /// クランプしないため、有効な列であることは呼び出し側が保証する
    pub const fn move_to_col(&self, col: usize) -> Self {
        Self::new(self.row, col)
    }

    /// バッファの範囲内に収まるよう位置を補正
    pub fn clamp(&self, buffer: &LineBuffer) -> Self {
        let row = self.row.min(buffer.last_row());
        let max_col = buffer.line_length(row).unwrap_or(0);
        Self::new(row, self.col.min(max_col))
    }

    /// バッファの範囲内にあるか
    pub fn is_within(&self, buffer: &LineBuffer) -> bool {
        buffer
            .line_length(self.row)
            .map(|len| self.col <= len)
            .unwrap_or(false)
    }
}
