//! 表示範囲
//!
//! バッファのどの行を画面に出すかと、カーソルの画面上の位置を決める。

use crate::buffer::Cursor;
use std::ops::Range;

/// 画面に映すバッファ行の範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    top: usize,
    rows: usize,
    cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            top: 0,
            rows: rows.max(1),
            cols,
        }
    }

    /// 画面サイズの変更を反映する（先頭行はそのまま）
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols;
    }

    /// カーソル行が映るよう先頭行を動かし、動いたら `true` を返す
    ///
    /// 上にはみ出した場合はその行を先頭にし、下にはみ出した場合は画面中央に置く
    pub fn follow(&mut self, row: usize) -> bool {
        if self.visible_rows().contains(&row) {
            return false;
        }

        self.top = if row < self.top {
            row
        } else {
            row.saturating_sub(self.rows / 2)
        };
        true
    }

    /// 現在映っているバッファ行
    pub fn visible_rows(&self) -> Range<usize> {
        self.top..self.top + self.rows
    }

    /// カーソルを画面上のセル `(x, y)` に変換する
    ///
    /// 行が範囲外なら `None`。列は右端のセルで止める
    pub fn cell(&self, cursor: Cursor) -> Option<(usize, usize)> {
        if !self.visible_rows().contains(&cursor.row()) {
            return None;
        }
        let x = cursor.col().min(self.cols.saturating_sub(1));
        Some((x, cursor.row() - self.top))
    }

    pub fn top(&self) -> usize {
        self.top
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
