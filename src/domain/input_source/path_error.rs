use std::fmt;
use std::path::PathBuf;

// 入力ディレクトリ関連のエラー型
#[derive(Debug)]
pub enum PathError {
    InvalidPath(String),
    IoError(std::io::Error),
    /// 走査中に個別のエントリが読めなかった場合
    Walk { path: Option<PathBuf>, message: String },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "無効なパスです: {}", s),
            PathError::IoError(e) => write!(f, "I/Oエラー: {}", e),
            PathError::Walk { path: Some(p), message } => {
                write!(f, "'{}' の走査に失敗しました: {}", p.display(), message)
            }
            PathError::Walk { path: None, message } => {
                write!(f, "ディレクトリの走査に失敗しました: {}", message)
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<walkdir::Error> for PathError {
    fn from(e: walkdir::Error) -> Self {
        PathError::Walk {
            path: e.path().map(|p| p.to_path_buf()),
            message: e.to_string(),
        }
    }
}
