// use宣言
use super::input_source::reference_file_name::ReferenceFile;
use super::reference_image::{ImageDimensions, PixelDataError, ReferenceImage};

// --- 構造体定義 ---

/// ヘッダー出力に使う、検証済みの参照画像コンテナ。
///
/// `load` または `new` を通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - すべての画像の画素データが `dimensions.byte_len()` バイトであること
/// - 画像がファイル名の番号の昇順で並んでいること
///
/// 空のリストも有効です（該当ファイルが 1 つもない場合）。
#[derive(Debug, PartialEq)]
pub struct ReferenceImageList {
    images: Vec<ReferenceImage>,
    dimensions: ImageDimensions,
}

// --- 実装ブロック ---

impl ReferenceImageList {
    /// 走査済みのファイル一覧から画像を順に読み込みます。
    ///
    /// 1 つでもサイズが合わないファイルがあれば、その時点で処理を打ち切ります。
    ///
    /// # 引数
    /// * `files`: 番号順に並べ替え済みのファイル一覧。
    /// * `dimensions`: 期待する解像度。
    pub fn load(
        files: &[ReferenceFile],
        dimensions: ImageDimensions,
    ) -> Result<Self, PixelDataError> {
        let mut images = Vec::with_capacity(files.len());
        for file in files {
            let image = ReferenceImage::from_path(file.path(), file.index(), dimensions)?;
            log::info!(
                "読み込み完了: {} ({} バイト)",
                image.path().display(),
                image.pixels().len()
            );
            images.push(image);
        }
        Self::new(images, dimensions)
    }

    /// 読み込み済みの画像からリストを作ります。
    ///
    /// 画素データの長さを再検証し、番号順に並べ直します。
    pub fn new(
        mut images: Vec<ReferenceImage>,
        dimensions: ImageDimensions,
    ) -> Result<Self, PixelDataError> {
        let expected = dimensions.byte_len();
        if let Some(bad) = images.iter().find(|img| img.pixels().len() != expected) {
            return Err(PixelDataError::SizeMismatch {
                path: bad.path().to_path_buf(),
                expected,
                actual: bad.pixels().len(),
            });
        }

        // 安定ソートなので、同じ番号の画像は渡された順序を保つ
        images.sort_by_key(|img| img.index());

        Ok(Self { images, dimensions })
    }

    // --- 便利メソッド ---

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    // --- ゲッターメソッド ---

    pub fn images(&self) -> &[ReferenceImage] {
        &self.images
    }
    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }
}

// --- テストモジュール ---
