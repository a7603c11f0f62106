//! レンダリングシステム
//!
//! 現在のバッファとカーソルを ratatui のフレームに描画する。
//! フレームは毎回空の状態から組み立てられるため、描画は常に画面全体の書き直しになる。

use crate::buffer::{Cursor, LineBuffer};
use crate::error::{Result, UiError};
use crate::ui::viewport::Viewport;
use ratatui::{
    backend::Backend,
    layout::Position,
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};

/// エディタ画面のレンダラー
#[derive(Debug, Clone, Default)]
pub struct EditorRenderer {
    viewport: Viewport,
}

impl EditorRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// ターミナルに1フレーム描画する
    pub fn draw<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        buffer: &LineBuffer,
        cursor: Cursor,
    ) -> Result<()> {
        terminal
            .draw(|frame| self.render(frame, buffer, cursor))
            .map_err(|err| UiError::terminal("draw", err))?;
        Ok(())
    }

    /// 行を上から順に描き、最後にカーソルを配置する
    pub fn render(&mut self, frame: &mut Frame<'_>, buffer: &LineBuffer, cursor: Cursor) {
        let area = frame.area();
        self.viewport
            .resize(area.height as usize, area.width as usize);
        if self.viewport.follow(cursor.row()) {
            log::trace!("viewport scrolled to line {}", self.viewport.top());
        }

        let visible = self.viewport.visible_rows();
        let lines: Vec<Line<'_>> = buffer
            .lines()
            .skip(visible.start)
            .take(visible.len())
            .map(Line::raw)
            .collect();
        frame.render_widget(Paragraph::new(lines), area);

        if let Some((x, y)) = self.viewport.cell(cursor) {
            frame.set_cursor_position(Position::new(area.x + x as u16, area.y + y as u16));
        }
    }
}
