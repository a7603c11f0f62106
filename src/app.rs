//! メインアプリケーション構造体
//!
//! 端末の初期化・後始末と、描画 → 入力 → コマンド実行のメインループを実装

use crate::buffer::LineBuffer;
use crate::editor::{EditHistory, EditorSession};
use crate::error::{Result, SnaplineError, UiError};
use crate::file::load_lines;
use crate::input::{Command, CommandOutcome, InputEvent, InputHandler};
use crate::options::EditorOptions;
use crate::ui::EditorRenderer;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::stdout;
use std::path::PathBuf;

/// メインアプリケーション構造体
pub struct App {
    /// アプリケーション実行状態
    running: bool,
    /// 編集セッション
    session: EditorSession,
    /// 入力ハンドラー
    input: InputHandler,
    /// レンダラー
    renderer: EditorRenderer,
    /// 編集対象のファイル
    file_path: Option<PathBuf>,
}

impl App {
    /// 起動オプションからアプリケーションを作成
    pub fn new(options: &EditorOptions) -> Result<Self> {
        let lines = match &options.initial_file {
            Some(path) => load_lines(path)?,
            None => Vec::new(),
        };

        let history = match options.history_limit {
            Some(limit) => EditHistory::with_limit(limit),
            None => EditHistory::new(),
        };

        let session = EditorSession::with_history(LineBuffer::from_lines(lines), history);
        let mut app = Self::with_session(session);
        app.file_path = options.initial_file.clone();
        Ok(app)
    }

    /// 既存のセッションからアプリケーションを作成
    pub fn with_session(session: EditorSession) -> Self {
        Self {
            running: true,
            session,
            input: InputHandler::new(),
            renderer: EditorRenderer::new(),
            file_path: None,
        }
    }

    /// メインイベントループを実行
    ///
    /// ループがエラーで終わっても端末は必ず元に戻す
    pub fn run(&mut self) -> Result<()> {
        Self::enter_terminal()?;

        let loop_result = Terminal::new(CrosstermBackend::new(stdout()))
            .map_err(|err| SnaplineError::from(UiError::terminal("terminal init", err)))
            .and_then(|mut terminal| self.event_loop(&mut terminal));
        let cleanup_result = Self::leave_terminal();

        loop_result.and(cleanup_result)
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        log::info!(
            "editing {}",
            self.file_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "<scratch>".to_string())
        );

        let mut dirty = true;
        while self.running {
            if dirty {
                self.renderer
                    .draw(terminal, self.session.buffer(), self.session.cursor())?;
            }

            dirty = match self.input.read_event()? {
                InputEvent::Command(command) => self.handle_command(command)?.needs_refresh(),
                InputEvent::Resize { cols, rows } => {
                    log::debug!("terminal resized to {}x{}", cols, rows);
                    true
                }
                InputEvent::Ignored => false,
            };
        }

        Ok(())
    }

    /// コマンドを1つ実行し、その結果を返す
    pub fn handle_command(&mut self, command: Command) -> Result<CommandOutcome> {
        let outcome = self.session.apply(command).map_err(|err| {
            log::error!("{} failed: {}", command.name(), err);
            err
        })?;

        if outcome.should_quit() {
            log::info!("quit requested");
            self.shutdown();
        }
        Ok(outcome)
    }

    fn enter_terminal() -> Result<()> {
        enable_raw_mode().map_err(|err| UiError::terminal("enable raw mode", err))?;
        let screen = execute!(stdout(), EnterAlternateScreen)
            .map_err(|err| SnaplineError::from(UiError::terminal("enter alternate screen", err)));
        undo_on_error(screen, || {
            let _ = disable_raw_mode();
        })
    }

    fn leave_terminal() -> Result<()> {
        let screen = execute!(stdout(), LeaveAlternateScreen)
            .map_err(|err| UiError::terminal("leave alternate screen", err));
        let raw = disable_raw_mode().map_err(|err| UiError::terminal("disable raw mode", err));
        screen.and(raw)?;
        Ok(())
    }

    /// 編集セッションへの参照
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// 編集対象のファイル
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// アプリケーションが実行中かどうかを確認
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// アプリケーションを終了状態にする
    pub fn shutdown(&mut self) {
        self.running = false;
    }
}

/// 失敗した場合だけ `undo` を実行して結果をそのまま返す
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cursor;
    use std::cell::Cell;

    #[test]
    fn test_quit_stops_running() {
        let mut app = App::with_session(EditorSession::new(["ab"]));
        assert!(app.is_running());

        assert_eq!(app.handle_command(Command::Quit).unwrap(), CommandOutcome::Quit);
        assert!(!app.is_running());
    }

    #[test]
    fn test_outcome_decides_redraw() {
        let mut app = App::with_session(EditorSession::new(["ab"]));
        assert!(app.handle_command(Command::MoveRight).unwrap().needs_refresh());
        assert!(!app.handle_command(Command::MoveUp).unwrap().needs_refresh());
        assert!(!app.handle_command(Command::Undo).unwrap().needs_refresh());
    }

    #[test]
    fn test_failed_terminal_setup_is_rolled_back() {
        let rolled_back = Cell::new(false);
        let failed: Result<()> =
            Err(UiError::terminal("enter alternate screen", "not a tty").into());
        assert!(undo_on_error(failed, || rolled_back.set(true)).is_err());
        assert!(rolled_back.get());

        let rolled_back = Cell::new(false);
        assert!(undo_on_error(Ok(()), || rolled_back.set(true)).is_ok());
        assert!(!rolled_back.get());
    }

    #[test]
    fn test_commands_reach_session() {
        let mut app = App::with_session(EditorSession::new(["ab"]));
        app.handle_command(Command::MoveRight).unwrap();
        app.handle_command(Command::InsertChar('-')).unwrap();

        assert_eq!(app.session().buffer().render(), vec!["a-b"]);
        assert_eq!(app.session().cursor(), Cursor::new(0, 2));
        assert!(app.is_running());
    }

    #[test]
    fn test_new_without_file_starts_with_one_empty_line() {
        let app = App::new(&EditorOptions::default()).unwrap();
        assert_eq!(app.session().buffer().render(), vec![String::new()]);
        assert!(app.file_path().is_none());
        assert_eq!(app.session().history().limit(), None);
    }

    #[test]
    fn test_new_applies_history_limit() {
        let options = EditorOptions {
            history_limit: Some(3),
            ..EditorOptions::default()
        };
        let app = App::new(&options).unwrap();
        assert_eq!(app.session().history().limit(), Some(3));
    }
}
