//! 起動オプション
//!
//! コマンドライン引数と環境変数からエディタの設定を組み立てる

use crate::error::{ConfigError, Result};
use crate::file::expand_path;
use std::path::{Path, PathBuf};

/// デバッグログを有効にする環境変数
pub const DEBUG_ENV_VAR: &str = "SNAPLINE_DEBUG";

/// 使い方の表示
pub const USAGE: &str = "\
usage: snapline [OPTIONS] [FILE]

options:
  --debug-log [PATH]     write debug log to PATH (default: ~/.snapline-log/debug.log)
  --history-limit N      keep at most N undo snapshots (default: unlimited)
  -h, --help             show this help
  -V, --version          show version

keys:
  C-p/C-n/C-b/C-f, arrows   move cursor
  Enter                     split line
  Backspace, C-h            delete backward
  C-u, C-z                  undo
  C-q                       quit
";

/// エディタの起動オプション
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorOptions {
    /// 起動時に開くファイルパス
    pub initial_file: Option<PathBuf>,
    /// デバッグログ出力先（`--debug-log` をパスなしで指定した場合は既定パス）
    pub debug_log_path: Option<PathBuf>,
    /// 履歴の最大保持数（未指定時は無制限）
    pub history_limit: Option<usize>,
    /// 使い方を表示して終了
    pub show_help: bool,
    /// バージョンを表示して終了
    pub show_version: bool,
}

impl EditorOptions {
    /// コマンドライン引数と環境変数から設定を作成
    pub fn from_env(args: &[String]) -> Result<Self> {
        let mut options = Self::parse_args(args)?;

        if options.debug_log_path.is_none() && std::env::var_os(DEBUG_ENV_VAR).is_some() {
            options.debug_log_path = default_log_path();
        }

        options.initial_file = options
            .initial_file
            .as_deref()
            .map(expand_path)
            .transpose()?;
        options.debug_log_path = options
            .debug_log_path
            .as_deref()
            .map(expand_path)
            .transpose()?;

        Ok(options)
    }

    /// コマンドライン引数を解析（プログラム名は含まない）
    pub fn parse_args(args: &[String]) -> std::result::Result<Self, ConfigError> {
        let mut options = Self::default();

        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => options.show_help = true,
                "-V" | "--version" => options.show_version = true,
                "--debug-log" => {
                    let path = iter
                        .next_if(|next| !next.starts_with('-'))
                        .map(PathBuf::from)
                        .or_else(default_log_path);
                    options.debug_log_path = path;
                }
                "--history-limit" => {
                    let value = iter.next().ok_or_else(|| ConfigError::MissingValue {
                        option: arg.clone(),
                    })?;
                    options.history_limit = Some(parse_history_limit(value)?);
                }
                other if other.starts_with('-') && other != "-" => {
                    return Err(ConfigError::UnknownOption {
                        option: other.to_string(),
                    });
                }
                path => {
                    if options.initial_file.is_some() {
                        return Err(ConfigError::InvalidValue {
                            key: "FILE".to_string(),
                            value: path.to_string(),
                        });
                    }
                    options.initial_file = Some(PathBuf::from(path));
                }
            }
        }

        Ok(options)
    }

    /// ログ出力先
    pub fn log_path(&self) -> Option<&Path> {
        self.debug_log_path.as_deref()
    }
}

fn parse_history_limit(value: &str) -> std::result::Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidValue {
            key: "--history-limit".to_string(),
            value: value.to_string(),
        }),
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".snapline-log").join("debug.log"))
}
