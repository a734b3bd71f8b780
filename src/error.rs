use crate::domain::c_header::InvalidIdentifier;
use crate::domain::reference_image::PixelDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("画素データ検証エラー")]
    PixelData(#[from] PixelDataError),

    #[error("配列名が不正です")]
    InvalidArrayName(#[from] InvalidIdentifier),

    #[error("出力ファイル '{}' を作成できません", .path.display())]
    CreateOutput {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
