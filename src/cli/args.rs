// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "anhinga",
    version = crate::VERSION,
    about = "EBS ボリュームの一覧と月額コスト見積もりツール",
    long_about = Some(include_str!("../../usage.txt"))
)]
pub struct Args {
    /// 見積もり対象のリージョン（未指定時は AWS_REGION, AWS_DEFAULT_REGION の順に参照）
    #[arg(short, long, env = "AWS_REGION", help_heading = "見積もり")]
    pub region: Option<String>,

    /// 料金表ファイル (JSON/YAML)。未指定時は組み込みの料金表を使用
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "見積もり")]
    pub pricing: Option<PathBuf>,

    /// ボリューム一覧のファイル。`-` または未指定で標準入力から読み込み
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub input: Option<PathBuf>,

    /// 出力フォーマット (table, csv, json)
    #[arg(short, long, default_value = "table", help_heading = "出力")]
    pub format: String,

    /// 出力先ファイル（未指定時は標準出力）
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// ログの詳細度 (-v: info, -vv: debug, -vvv: trace)。RUST_LOG が優先
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
