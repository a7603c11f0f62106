//! ロギングシステム
//!
//! `log` ファサード向けのファイル出力ロガー。
//! エディタ実行中の端末はrawモードのため、標準エラーには書き込まない。

use crate::error::{FileError, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// ファイルに追記するロガー
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    output_file: Mutex<fs::File>,
}

impl Logger {
    /// ログファイルを開いてロガーを作成（親ディレクトリも作成）
    pub fn new<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<Self> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| FileError::Io {
                message: format!("{}: {}", path.display(), e),
            })?;

        Ok(Self {
            level,
            output_file: Mutex::new(file),
        })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    fn format_record(record: &Record<'_>) -> String {
        format!("{} [{}] {}", record.level(), record.target(), record.args())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut file) = self.output_file.lock() {
            let _ = writeln!(file, "{}", Self::format_record(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.output_file.lock() {
            let _ = file.flush();
        }
    }
}

/// ログ出力先が設定されていればロガーを登録する
///
/// 出力先がない場合は何もしない（ログマクロは無効のまま）
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let logger = Logger::new(path, LevelFilter::Debug)?;
    let level = logger.level();
    // ロガーはプロセス終了まで生存する
    log::set_logger(Box::leak(Box::new(logger))).map_err(|e| FileError::Io {
        message: format!("logger already initialized: {}", e),
    })?;
    log::set_max_level(level);
    log::info!("snapline {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn logger_respects_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::new(dir.path().join("debug.log"), LevelFilter::Info).unwrap();

        let debug = Metadata::builder().level(Level::Debug).target("test").build();
        let warn = Metadata::builder().level(Level::Warn).target("test").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));

        let logger = Logger::new(dir.path().join("trace.log"), LevelFilter::Trace).unwrap();
        assert!(logger.enabled(&debug));
    }

    #[test]
    fn logger_appends_formatted_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("debug.log");
        let logger = Logger::new(&path, LevelFilter::Debug).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("snapline::file")
                .args(format_args!("odd byte at {}", 3))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Trace)
                .target("snapline::file")
                .args(format_args!("filtered"))
                .build(),
        );
        logger.flush();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "WARN [snapline::file] odd byte at 3\n");
    }

    #[test]
    fn init_without_path_is_noop() {
        assert!(init(None).is_ok());
    }
}
