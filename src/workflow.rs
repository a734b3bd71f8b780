//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 走査 → 読み込み・検証 → ヘッダー出力 の流れを実装します。

use crate::cli::Args;
use ppm_ref_header::domain::input_source::path_error::PathError;
use ppm_ref_header::domain::input_source::reference_file_name::ReferenceFile;
use ppm_ref_header::domain::{
    CHeader, CIdentifier, DirectoryPath, ImageDimensions, ReferenceImageList,
};
use ppm_ref_header::error::AppError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// アプリケーションのメインロジックを実行します。
///
/// 出力先は `--output` が指定されていればそのファイル、なければ標準出力です。
///
/// # 戻り値
/// * `Ok(())`: ヘッダーを出力できた場合（対象画像が 0 枚の場合を含む）。
/// * `Err(AppError)`: 検証または書き込みに失敗した場合。
pub fn run(args: Args) -> Result<(), AppError> {
    match args.output.as_deref() {
        Some(path) => {
            write_header(&args, || {
                File::create(path)
                    .map(BufWriter::new)
                    .map_err(|source| AppError::CreateOutput {
                        path: path.to_path_buf(),
                        source,
                    })
            })?;
            log::info!("{} を出力しました。", path.display());
        }
        None => write_header(&args, || Ok(BufWriter::new(io::stdout().lock())))?,
    }
    Ok(())
}

/// 参照画像を読み込んで検証し、`open` で得た出力先へヘッダーを書き出します。
///
/// `open` はすべての画像の検証が終わってから呼ばれます。
/// 1 枚でもサイズが合わなければ出力先は開かれず、何も書き込まれません。
fn write_header<W, F>(args: &Args, open: F) -> Result<(), AppError>
where
    W: Write,
    F: FnOnce() -> Result<W, AppError>,
{
    // 1. 配列名の検証
    let array_name = CIdentifier::new(args.array_name.as_str())?;

    // 2. 走査・読み込み・検証
    let dimensions = ImageDimensions::new(args.width, args.height);
    let files = find_reference_files(&args.input_dir);
    log::debug!("{} 件の参照画像が見つかりました。", files.len());
    let images = ReferenceImageList::load(&files, dimensions)?;

    // 3. 検証が済んでから出力先を開いて書き出す
    CHeader::new(&images)
        .with_array_name(array_name)
        .write_to(open()?)?;

    log::info!(
        "{} 枚の参照画像 ({}) を変換しました。",
        images.len(),
        images.dimensions()
    );
    Ok(())
}

/// 入力フォルダを走査します。
///
/// フォルダが存在しない、フォルダでない、または読めない場合はエラーにせず、
/// 警告を出して空の一覧を返します。
fn find_reference_files(input_dir: &Path) -> Vec<ReferenceFile> {
    let scanned = DirectoryPath::new(input_dir).and_then(|dir| {
        log::debug!("{} を走査します。", dir);
        dir.reference_files()
    });
    files_or_empty(scanned)
}

fn files_or_empty(scanned: Result<Vec<ReferenceFile>, PathError>) -> Vec<ReferenceFile> {
    scanned.unwrap_or_else(|e| {
        log::warn!("{} 空のヘッダーを出力します。", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["ppm_ref_header"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn write_ppm(dir: &Path, name: &str, payload: &[u8]) {
        let mut bytes = b"P6\n2 1\n255\n".to_vec();
        bytes.extend_from_slice(payload);
        fs::write(dir.join(name), bytes).unwrap();
    }

    #[test]
    fn missing_directory_yields_empty_header() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("reference_ppm");

        let mut out = Vec::new();
        let sink = &mut out;
        write_header(&args(&[missing.to_str().unwrap()]), move || Ok(sink)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("#define NUM_REF_IMAGES 0\n"));
        assert!(text.ends_with("={\n};\n"));
    }

    #[test]
    fn converts_in_numeric_order() {
        let dir = tempdir().unwrap();
        write_ppm(dir.path(), "output_10.ppm", &[10, 10, 10, 10, 10, 10]);
        write_ppm(dir.path(), "output_9.ppm", &[9, 9, 9, 9, 9, 9]);

        let mut out = Vec::new();
        let a = args(&[dir.path().to_str().unwrap(), "--width", "2", "--height", "1"]);
        let sink = &mut out;
        write_header(&a, move || Ok(sink)).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("#define NUM_REF_IMAGES 2\n#define IMG_SIZE (2*1*3)\n"));
        let nine = text.find("{9,9,9,9,9,9},").unwrap();
        let ten = text.find("{10,10,10,10,10,10},").unwrap();
        assert!(nine < ten);
    }

    #[test]
    fn invalid_array_name_is_rejected_before_reading() {
        let a = args(&["--array-name", "not-valid"]);
        let mut opened = false;
        let res = write_header(&a, || {
            opened = true;
            Ok(Vec::<u8>::new())
        });
        assert!(matches!(res, Err(AppError::InvalidArrayName(_))));
        assert!(!opened);
    }

    #[test]
    fn size_mismatch_never_opens_output() {
        let dir = tempdir().unwrap();
        write_ppm(dir.path(), "output_0.ppm", &[1, 2, 3]);

        let a = args(&[dir.path().to_str().unwrap(), "--width", "2", "--height", "1"]);
        let mut opened = false;
        let res = write_header(&a, || {
            opened = true;
            Ok(Vec::<u8>::new())
        });
        assert!(matches!(res, Err(AppError::PixelData(_))));
        assert!(!opened);
    }

    #[test]
    fn file_instead_of_directory_yields_empty_header() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("reference_ppm");
        fs::write(&file, b"not a directory").unwrap();

        let mut out = Vec::new();
        let sink = &mut out;
        write_header(&args(&[file.to_str().unwrap()]), move || Ok(sink)).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("#define NUM_REF_IMAGES 0\n"));
    }

    /// 走査中にフォルダが読めなくなっても、エラーにせず空の一覧になる
    #[test]
    fn unreadable_directory_yields_no_files() {
        let dir = tempdir().unwrap();
        let vanished = DirectoryPath {
            path: dir.path().join("vanished"),
        };
        assert!(files_or_empty(vanished.reference_files()).is_empty());
    }

    /// 既定の出力先（標準出力）で最後まで実行できる
    #[test]
    fn run_writes_to_stdout_by_default() {
        let dir = tempdir().unwrap();
        write_ppm(dir.path(), "output_0.ppm", &[0, 1, 2, 3, 4, 5]);

        let a = args(&[dir.path().to_str().unwrap(), "--width", "2", "--height", "1"]);
        assert!(a.output.is_none());
        run(a).unwrap();
    }

    #[test]
    fn size_mismatch_creates_no_output_file() {
        let dir = tempdir().unwrap();
        write_ppm(dir.path(), "output_0.ppm", &[1, 2, 3, 4, 5, 6]);
        write_ppm(dir.path(), "output_1.ppm", &[1, 2, 3]);
        let output = dir.path().join("reference_images.h");

        let a = args(&[
            dir.path().to_str().unwrap(),
            "--width",
            "2",
            "--height",
            "1",
            "-o",
            output.to_str().unwrap(),
        ]);
        let err = run(a).unwrap_err();

        assert!(matches!(err, AppError::PixelData(_)));
        assert!(!output.exists());
    }

    #[test]
    fn run_writes_output_file() {
        let dir = tempdir().unwrap();
        write_ppm(dir.path(), "output_0.ppm", &[0, 1, 2, 3, 4, 5]);
        let output = dir.path().join("reference_images.h");

        let a = args(&[
            dir.path().to_str().unwrap(),
            "--width",
            "2",
            "--height",
            "1",
            "--output",
            output.to_str().unwrap(),
        ]);
        run(a).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("{0,1,2,3,4,5},\n"));
    }
}
