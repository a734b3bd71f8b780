use clap::Parser;
use std::path::PathBuf;

/// 幅・高さとして受け付ける最大値
const MAX_SIDE: i64 = 65535;

/// reference_ppm/ 内の参照画像 (output_<番号>.ppm) を C ヘッダーに変換するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 参照画像が入ったフォルダのパス
    #[arg(default_value = "reference_ppm")]
    pub input_dir: PathBuf,

    /// 画像の幅（ピクセル, 1〜65535）
    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..=MAX_SIDE))]
    pub width: u32,

    /// 画像の高さ（ピクセル, 1〜65535）
    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..=MAX_SIDE))]
    pub height: u32,

    /// ヘッダーの出力先ファイル (オプション: デフォルトは標準出力)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// C 配列の名前
    #[arg(long, default_value = "reference_images")]
    pub array_name: String,

    /// ログレベル (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    pub log_level: log::LevelFilter,
}
