//! パス処理ユーティリティ
//!
//! コマンドライン引数で受け取ったパスの展開と絶対パス化

use crate::error::{Result, SnaplineError};
use std::env;
use std::path::{Path, PathBuf};

/// `~` と環境変数を展開し、絶対パスに変換する
pub fn expand_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path_str = path.as_ref().to_string_lossy();

    let expanded = shellexpand::full(&path_str)
        .map_err(|e| SnaplineError::Path(format!("環境変数展開エラー: {}", e)))?;

    to_absolute(PathBuf::from(expanded.into_owned()))
}

fn to_absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let current_dir = env::current_dir().map_err(|e| {
            SnaplineError::Path(format!("現在のディレクトリが取得できません: {}", e))
        })?;
        Ok(current_dir.join(path))
    }
}
