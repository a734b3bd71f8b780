//! 参照画像のファイル名 `output_<数字>.ppm` を扱うモジュール。

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// ファイル名の接頭辞
pub const FILE_PREFIX: &str = "output_";
/// ファイル名の拡張子（ドット込み）
pub const FILE_SUFFIX: &str = ".ppm";

/// ファイル名から取り出した番号の解析結果。
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedName {
    /// `output_<数字>.ppm` に一致し、番号が `u64` に収まった。
    Index(u64),
    /// パターンには一致したが、番号が `u64` に収まらない。
    Overflow,
    /// パターンに一致しない。
    NoMatch,
}

/// ファイル名（パスではなく名前部分）を解析します。
///
/// 番号部分は ASCII 数字のみを許可し、数値として解釈します。
/// そのため `output_007.ppm` の番号は 7 になります。
pub fn parse_file_name(name: &str) -> ParsedName {
    let digits = match name
        .strip_prefix(FILE_PREFIX)
        .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
    {
        Some(d) if !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()) => d,
        _ => return ParsedName::NoMatch,
    };

    match digits.parse::<u64>() {
        Ok(index) => ParsedName::Index(index),
        Err(_) => ParsedName::Overflow,
    }
}

/// 走査で見つかった参照画像ファイル。番号順に並べ替えられます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFile {
    index: u64,
    path: PathBuf,
}

impl ReferenceFile {
    pub fn new(index: u64, path: PathBuf) -> Self {
        Self { index, path }
    }

    /// パスのファイル名を解析し、パターンに一致すれば `ReferenceFile` を返します。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        let name = path.file_name()?.to_str()?;
        match parse_file_name(name) {
            ParsedName::Index(index) => Some(Self {
                index,
                path: path.to_path_buf(),
            }),
            ParsedName::Overflow | ParsedName::NoMatch => None,
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// 番号の昇順。同じ番号（`output_1` と `output_01`）はファイル名で決める。
impl Ord for ReferenceFile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then_with(|| self.path.file_name().cmp(&other.path.file_name()))
    }
}

impl PartialOrd for ReferenceFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
