use super::path_error::PathError;
use super::reference_file_name::{parse_file_name, ParsedName, ReferenceFile};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// 参照画像を格納したディレクトリ
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// 直下にある `output_<数字>.ppm` を番号の昇順で返します。
    ///
    /// サブディレクトリは辿りません。読み取れなかったエントリや、
    /// 番号が `u64` に収まらないファイルは警告を出して読み飛ばします。
    /// ディレクトリ自体が読めない場合だけエラーを返します。
    pub fn reference_files(&self) -> Result<Vec<ReferenceFile>, PathError> {
        // ルート自体を開けるかを先に確認する（walkdir はルートのエラーもエントリとして返すため）
        fs::read_dir(&self.path).map_err(PathError::IoError)?;

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        let mut files = Vec::new();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("{}", PathError::from(e));
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                log::debug!("UTF-8 でないファイル名を無視します: {:?}", entry.file_name());
                continue;
            };
            match parse_file_name(name) {
                ParsedName::Index(index) => {
                    files.push(ReferenceFile::new(index, entry.into_path()));
                }
                ParsedName::Overflow => {
                    log::warn!(
                        "{}: 番号が大きすぎるため '{}' を無視します。",
                        self,
                        name
                    );
                }
                ParsedName::NoMatch => {
                    log::debug!("対象外のファイル: {}", entry.path().display());
                }
            }
        }

        // 読み取り順序は保証されないため番号順に並べ替える
        files.sort();
        Ok(files)
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
