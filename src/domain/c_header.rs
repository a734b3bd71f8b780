//! 参照画像リストを C 言語のヘッダーとして書き出すモジュール。
//!
//! 出力形式:
//!
//! ```text
//! #include <stdint.h>
//! #define NUM_REF_IMAGES 2
//! #define IMG_SIZE (640*480*3)
//! static const uint8_t reference_images[NUM_REF_IMAGES][IMG_SIZE]={
//! {0,0,255,...},
//! {12,34,56,...},
//! };
//! ```

use super::reference_image_list::ReferenceImageList;
use std::fmt;
use std::io::{self, Write};

/// 配列名の既定値
pub const DEFAULT_ARRAY_NAME: &str = "reference_images";

/// C の識別子として使えない配列名が渡された場合のエラー。
#[derive(Debug, PartialEq)]
pub struct InvalidIdentifier(pub String);

impl fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' は C の識別子として使えません。", self.0)
    }
}

impl std::error::Error for InvalidIdentifier {}

/// 検証済みの C 識別子（`[A-Za-z_][A-Za-z0-9_]*`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CIdentifier(String);

impl CIdentifier {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let name = name.into();
        let mut bytes = name.bytes();
        let valid = match bytes.next() {
            Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
                bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
            }
            _ => false,
        };
        if valid {
            Ok(Self(name))
        } else {
            Err(InvalidIdentifier(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CIdentifier {
    fn default() -> Self {
        Self(DEFAULT_ARRAY_NAME.to_string())
    }
}

/// ヘッダーの出力器。画像リストを借用し、任意の `Write` へ書き出します。
pub struct CHeader<'a> {
    images: &'a ReferenceImageList,
    array_name: CIdentifier,
}

impl<'a> CHeader<'a> {
    pub fn new(images: &'a ReferenceImageList) -> Self {
        Self {
            images,
            array_name: CIdentifier::default(),
        }
    }

    pub fn with_array_name(mut self, array_name: CIdentifier) -> Self {
        self.array_name = array_name;
        self
    }

    /// ヘッダー全体を `out` へ書き出します。
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }

    /// ヘッダーを文字列として返します。
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// 画像は 1 行に 1 枚、各バイトを 10 進数のカンマ区切りで出力します。
impl fmt::Display for CHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.images.dimensions();

        writeln!(f, "#include <stdint.h>")?;
        writeln!(f, "#define NUM_REF_IMAGES {}", self.images.len())?;
        writeln!(f, "#define IMG_SIZE ({}*{}*3)", dims.width, dims.height)?;
        writeln!(
            f,
            "static const uint8_t {}[NUM_REF_IMAGES][IMG_SIZE]={{",
            self.array_name.as_str()
        )?;

        for image in self.images.images() {
            f.write_str("{")?;
            write_row(f, image.pixels())?;
            f.write_str("},\n")?;
        }

        writeln!(f, "}};")
    }
}

// カンマ区切りの 10 進数列。末尾にカンマは付けない
fn write_row(f: &mut fmt::Formatter<'_>, pixels: &[u8]) -> fmt::Result {
    let mut iter = pixels.iter();
    if let Some(first) = iter.next() {
        write!(f, "{}", first)?;
        for byte in iter {
            write!(f, ",{}", byte)?;
        }
    }
    Ok(())
}
