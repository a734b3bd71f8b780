use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

mod cli;
mod workflow;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    // ログは標準エラーに出す（標準出力はヘッダー専用）
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .init();

    match workflow::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            // 原因をたどって表示する
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  原因: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
