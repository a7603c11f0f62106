//! ファイルI/O操作
//!
//! 起動時に編集対象のテキストファイルを行のシーケンスとして読み込む

use crate::error::{FileError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// タブ展開の幅
pub const TAB_WIDTH: usize = 4;

/// ファイルを読み込み、改行を除いた行のシーケンスを返す
///
/// ファイルが存在しない場合は新規ファイルとして空のシーケンスを返す
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    if path.is_dir() {
        return Err(FileError::InvalidPath {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("{} does not exist, starting with an empty buffer", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(map_io_error(path, err).into()),
    };

    let lines: Vec<String> = content.lines().map(normalize_line).collect();
    log::info!("loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// 行を印字可能文字だけで構成されるよう正規化
///
/// タブは空白に展開し、その他の制御文字は取り除く
pub fn normalize_line(line: &str) -> String {
    let mut normalized = String::with_capacity(line.len());

    for (pos, ch) in line.chars().enumerate() {
        match ch {
            '\t' => normalized.extend(std::iter::repeat(' ').take(TAB_WIDTH)),
            ch if ch.is_control() => {
                log::warn!("Control character dropped at position {}: {:?}", pos, ch);
            }
            ch => normalized.push(ch),
        }
    }

    normalized
}

fn map_io_error(path: &Path, err: std::io::Error) -> FileError {
    let path_str = path.display().to_string();
    match err.kind() {
        ErrorKind::NotFound => FileError::NotFound { path: path_str },
        ErrorKind::PermissionDenied => FileError::PermissionDenied { path: path_str },
        _ => FileError::Io {
            message: format!("{}: {}", path_str, err),
        },
    }
}
