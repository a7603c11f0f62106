//! 行バッファ
//!
//! 行単位で保持する不変のテキストバッファ。
//! すべての編集操作は新しいバッファを返し、変更のない行は `Rc` で共有する。

use crate::error::{buffer::Result, BufferError};
use std::rc::Rc;

/// 不変の行バッファ
///
/// 常に1行以上を持ち、各行は改行文字を含まない。
/// 列は文字（`char`）単位で数える。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Rc<str>>,
}

impl LineBuffer {
    /// 空行1行だけのバッファを作成
    pub fn new() -> Self {
        Self {
            lines: vec![Rc::from("")],
        }
    }

    /// 行のシーケンスからバッファを作成
    ///
    /// 空のシーケンスは空行1行に正規化する。
    /// 要素に含まれる `\n` / `\r\n` は行の区切りとして扱い、単独の `\r` は取り除く
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<Rc<str>> = lines
            .into_iter()
            .flat_map(|line| {
                line.as_ref()
                    .split('\n')
                    .map(strip_carriage_returns)
                    .collect::<Vec<_>>()
            })
            .collect();

        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    /// 文字を挿入した新しいバッファを返す
    pub fn insert(&self, ch: char, row: usize, col: usize) -> Result<Self> {
        let line = self.checked_line(row, col)?;
        let idx = byte_offset(line, col).ok_or(BufferError::OutOfBounds { row, col })?;

        let mut text = String::with_capacity(line.len() + ch.len_utf8());
        text.push_str(&line[..idx]);
        text.push(ch);
        text.push_str(&line[idx..]);

        Ok(self.replace_line(row, vec![Rc::from(text)]))
    }

    /// 指定位置の文字を削除した新しいバッファを返す
    ///
    /// 行末（`col == line_length`）には文字がないため範囲外になる
    pub fn delete(&self, row: usize, col: usize) -> Result<Self> {
        let line = self.checked_line(row, col)?;
        let start = byte_offset(line, col).ok_or(BufferError::OutOfBounds { row, col })?;
        let end = match line[start..].chars().next() {
            Some(ch) => start + ch.len_utf8(),
            None => return Err(BufferError::OutOfBounds { row, col }),
        };

        let mut text = String::with_capacity(line.len() - (end - start));
        text.push_str(&line[..start]);
        text.push_str(&line[end..]);

        Ok(self.replace_line(row, vec![Rc::from(text)]))
    }

    /// 行を `[0, col)` と `[col, end)` の2行に分割した新しいバッファを返す
    pub fn split_line(&self, row: usize, col: usize) -> Result<Self> {
        let line = self.checked_line(row, col)?;
        let idx = byte_offset(line, col).ok_or(BufferError::OutOfBounds { row, col })?;

        let head: Rc<str> = Rc::from(&line[..idx]);
        let tail: Rc<str> = Rc::from(&line[idx..]);

        Ok(self.replace_line(row, vec![head, tail]))
    }

    /// 行数
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 最終行の行番号
    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    /// 指定行の文字数
    pub fn line_length(&self, row: usize) -> Result<usize> {
        self.line(row)
            .map(|line| line.chars().count())
            .ok_or(BufferError::OutOfBounds { row, col: 0 })
    }

    /// 指定行の内容
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|line| line.as_ref())
    }

    /// 行を先頭から順に返すイテレータ
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.as_ref())
    }

    /// 表示用に全行のスナップショットを作成
    pub fn render(&self) -> Vec<String> {
        self.lines().map(str::to_string).collect()
    }

    fn checked_line(&self, row: usize, col: usize) -> Result<&str> {
        self.line(row).ok_or(BufferError::OutOfBounds { row, col })
    }

    fn replace_line(&self, row: usize, replacement: Vec<Rc<str>>) -> Self {
        let mut lines = Vec::with_capacity(self.lines.len() + replacement.len() - 1);
        lines.extend(self.lines[..row].iter().cloned());
        lines.extend(replacement);
        lines.extend(self.lines[row + 1..].iter().cloned());
        Self { lines }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_carriage_returns(line: &str) -> Rc<str> {
    if line.contains('\r') {
        Rc::from(line.replace('\r', ""))
    } else {
        Rc::from(line)
    }
}

/// 文字単位の列位置をバイト位置に変換（行末は `line.len()`）
fn byte_offset(line: &str, col: usize) -> Option<usize> {
    line.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(line.len()))
        .nth(col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_normalized() {
        let buffer = LineBuffer::from_lines(Vec::<String>::new());
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.render(), vec![String::new()]);
    }

    #[test]
    fn test_embedded_terminators_become_line_breaks() {
        let buffer = LineBuffer::from_lines(["x\ny", "z\r", "a\r\nb", "c\rd"]);
        assert_eq!(buffer.render(), vec!["x", "y", "z", "a", "b", "cd"]);
        assert_eq!(buffer.line_count(), 6);
        assert!(buffer.lines().all(|line| !line.contains(['\n', '\r'])));
    }

    #[test]
    fn test_trailing_newline_yields_blank_line() {
        let buffer = LineBuffer::from_lines(["ab\n"]);
        assert_eq!(buffer.render(), vec!["ab", ""]);
    }

    #[test]
    fn test_insert_does_not_touch_original() {
        let buffer = LineBuffer::from_lines(["ab", "cd"]);
        let edited = buffer.insert('X', 0, 1).unwrap();

        assert_eq!(edited.render(), vec!["aXb", "cd"]);
        assert_eq!(buffer.render(), vec!["ab", "cd"]);
    }

    #[test]
    fn test_insert_at_line_end() {
        let buffer = LineBuffer::from_lines(["ab"]);
        let edited = buffer.insert('c', 0, 2).unwrap();
        assert_eq!(edited.render(), vec!["abc"]);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let buffer = LineBuffer::from_lines(["ab"]);
        assert_eq!(
            buffer.insert('x', 0, 3),
            Err(BufferError::OutOfBounds { row: 0, col: 3 })
        );
        assert_eq!(
            buffer.insert('x', 1, 0),
            Err(BufferError::OutOfBounds { row: 1, col: 0 })
        );
    }

    #[test]
    fn test_delete_removes_single_char() {
        let buffer = LineBuffer::from_lines(["hello", "world"]);
        let edited = buffer.delete(1, 0).unwrap();
        assert_eq!(edited.render(), vec!["hello", "orld"]);
    }

    #[test]
    fn test_delete_at_line_end_is_out_of_bounds() {
        let buffer = LineBuffer::from_lines(["ab"]);
        assert_eq!(
            buffer.delete(0, 2),
            Err(BufferError::OutOfBounds { row: 0, col: 2 })
        );
    }

    #[test]
    fn test_split_line_middle() {
        let buffer = LineBuffer::from_lines(["first", "hello", "last"]);
        let edited = buffer.split_line(1, 2).unwrap();
        assert_eq!(edited.render(), vec!["first", "he", "llo", "last"]);
    }

    #[test]
    fn test_split_line_at_end_yields_blank_line() {
        let buffer = LineBuffer::from_lines(["hello"]);
        let edited = buffer.split_line(0, 5).unwrap();
        assert_eq!(edited.render(), vec!["hello", ""]);
    }

    #[test]
    fn test_split_line_out_of_bounds() {
        let buffer = LineBuffer::from_lines(["hello"]);
        assert!(buffer.split_line(0, 6).is_err());
        assert!(buffer.split_line(2, 0).is_err());
    }

    #[test]
    fn test_untouched_lines_are_shared() {
        let buffer = LineBuffer::from_lines(["one", "two", "three"]);
        let edited = buffer.insert('!', 1, 3).unwrap();

        assert!(Rc::ptr_eq(&buffer.lines[0], &edited.lines[0]));
        assert!(!Rc::ptr_eq(&buffer.lines[1], &edited.lines[1]));
        assert!(Rc::ptr_eq(&buffer.lines[2], &edited.lines[2]));
    }

    #[test]
    fn test_line_length() {
        let buffer = LineBuffer::from_lines(["abc", ""]);
        assert_eq!(buffer.line_length(0), Ok(3));
        assert_eq!(buffer.line_length(1), Ok(0));
        assert_eq!(
            buffer.line_length(2),
            Err(BufferError::OutOfBounds { row: 2, col: 0 })
        );
    }

    #[test]
    fn test_columns_count_chars_not_bytes() {
        let buffer = LineBuffer::from_lines(["aé"]);
        assert_eq!(buffer.line_length(0), Ok(2));

        let edited = buffer.insert('b', 0, 2).unwrap();
        assert_eq!(edited.render(), vec!["aéb"]);

        let deleted = edited.delete(0, 1).unwrap();
        assert_eq!(deleted.render(), vec!["ab"]);
    }
}
