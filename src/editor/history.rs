//! 編集履歴
//!
//! 編集直前の (バッファ, カーソル) の組をスタックに積み、1段ずつ取り出して復元する。

use crate::buffer::{Cursor, LineBuffer};
use std::collections::VecDeque;

/// 編集直前の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub buffer: LineBuffer,
    pub cursor: Cursor,
}

/// 編集履歴スタック
///
/// 既定では上限なし。上限を指定した場合は最も古いスナップショットから捨てる。
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    snapshots: VecDeque<Snapshot>,
    limit: Option<usize>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保持数に上限を設けた履歴を作成（0 は 1 として扱う）
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(limit.max(1)),
            limit: Some(limit.max(1)),
        }
    }

    /// スナップショットを積む
    pub fn save(&mut self, buffer: LineBuffer, cursor: Cursor) {
        if let Some(limit) = self.limit {
            while self.snapshots.len() >= limit {
                self.snapshots.pop_front();
                log::debug!("history limit {} reached, oldest snapshot evicted", limit);
            }
        }
        self.snapshots.push_back(Snapshot { buffer, cursor });
    }

    /// 直近のスナップショットを取り出す（空なら `None`）
    pub fn restore(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
