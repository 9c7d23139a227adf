use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tecnica_common::TransportMode;

/// サブコマンドなしで起動すると標準入力の1行を技法フレーズとして分類する
#[derive(Parser)]
#[command(name = "tecnica")]
#[command(about = "Classificador de tecnicas de prompt e utilitarios", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力（stderr）
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 値が浮動小数点数として解釈できるか判定
    Check {
        /// 各値をJSONとして解釈（null, true, [1] など）。値より前に指定する
        #[arg(long)]
        json: bool,

        /// 判定する値（`-2` などの負数もそのまま渡せる）
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// 既知の技法フレーズと説明を一覧表示
    Techniques,

    /// 移動行程のCO₂排出量とカーボンクレジットを計算
    Trip {
        /// 区間 MODE:KM[:ORIGEM:DESTINO]（複数指定可）
        #[arg(short, long = "leg")]
        legs: Vec<String>,

        /// 区間リストJSONファイル
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// 定義済みルート（sp-rj, sp-campinas, rj-bh, bsb-goiania）
        #[arg(short, long = "preset")]
        presets: Vec<String>,

        /// 定義済みルートの移動手段
        #[arg(short, long)]
        mode: Option<TransportMode>,

        /// 対話的に区間を入力
        #[arg(short, long)]
        interactive: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 1クレジットあたりのCO₂量（kg）を設定
        #[arg(long)]
        set_kg_per_credit: Option<f64>,

        /// クレジット価格レンジ（BRL）を設定
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        set_price_range: Option<Vec<f64>>,
    },
}
