// 参照画像 1 枚分の読み込みと検証

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 読み飛ばすヘッダーの行数（形式タグ、寸法、最大値）
pub const HEADER_LINES: usize = 3;

/// 参照画像の解像度。1 画素あたり RGB 3 バイトで計算します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub const BYTES_PER_PIXEL: usize = 3;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 画素データの期待バイト数（幅 × 高さ × 3）
    ///
    /// `usize` に収まらない場合は `usize::MAX` に張り付きます。
    /// そのサイズのファイルは存在し得ないため、検証では必ず不一致になります。
    pub fn byte_len(&self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(Self::BYTES_PER_PIXEL)
    }
}

impl Default for ImageDimensions {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 画素データの検証エラー。
#[derive(Debug)]
pub enum PixelDataError {
    /// ファイルを読めなかった。
    Read { path: PathBuf, source: std::io::Error },
    /// 画素データのバイト数が期待値と一致しない。
    SizeMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for PixelDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelDataError::Read { path, source } => {
                write!(f, "'{}' を読み込めません: {}", path.display(), source)
            }
            PixelDataError::SizeMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{} size mismatch! 画素データが {} バイトです（期待値 {} バイト）。",
                path.display(),
                actual,
                expected
            ),
        }
    }
}

impl std::error::Error for PixelDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PixelDataError::Read { source, .. } => Some(source),
            PixelDataError::SizeMismatch { .. } => None,
        }
    }
}

/// ヘッダーを取り除いた参照画像。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    index: u64,
    path: PathBuf,
    pixels: Vec<u8>,
}

impl ReferenceImage {
    /// ファイルを読み込み、ヘッダーを取り除いて検証します。
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        index: u64,
        dimensions: ImageDimensions,
    ) -> Result<Self, PixelDataError> {
        let path = path.as_ref();
        // fs::read はファイルを開いて読み終えた時点で閉じる
        let bytes = fs::read(path).map_err(|source| PixelDataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, index, &bytes, dimensions)
    }

    /// メモリ上のファイル内容から `ReferenceImage` を作ります。
    ///
    /// 先頭 3 行を改行 (`\n`) 単位で読み飛ばし、残りを画素データとして扱います。
    /// 改行が 3 つ未満なら画素データは空になり、サイズ不一致として報告されます。
    pub fn from_bytes<P: AsRef<Path>>(
        path: P,
        index: u64,
        bytes: &[u8],
        dimensions: ImageDimensions,
    ) -> Result<Self, PixelDataError> {
        let path = path.as_ref();
        let pixels = strip_header(bytes);

        let expected = dimensions.byte_len();
        if pixels.len() != expected {
            return Err(PixelDataError::SizeMismatch {
                path: path.to_path_buf(),
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            index,
            path: path.to_path_buf(),
            pixels: pixels.to_vec(),
        })
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// 先頭 `HEADER_LINES` 行を取り除いた残りを返します。
pub fn strip_header(bytes: &[u8]) -> &[u8] {
    let mut rest = bytes;
    for _ in 0..HEADER_LINES {
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return &[],
        }
    }
    rest
}
