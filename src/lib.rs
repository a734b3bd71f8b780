//! 固定サイズの PPM 参照画像を C 言語の静的配列ヘッダーへ変換するライブラリ。

pub mod domain;
pub mod error;
