use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kart-ai")]
#[command(about = "卡丁车赛果AI识别·成绩表生成工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 识别文件夹里的赛果图片并保存识别文本
    Recognize {
        /// 赛果图片文件夹
        #[arg(required = true)]
        folder: PathBuf,

        /// 输出JSON文件（默认: 输入文件夹/transcripts.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 从识别文本生成Excel成绩表
    Export {
        /// 识别结果JSON文件
        #[arg(required = true)]
        input: PathBuf,

        /// 输出文件或目录（默认: 当前目录，文件名带时间戳）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 识别到成绩表一步完成
    Run {
        /// 赛果图片文件夹
        #[arg(required = true)]
        folder: PathBuf,

        /// 输出文件或目录（默认: 当前目录，文件名带时间戳）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 查看/修改设置
    Config {
        /// 设置API密钥
        #[arg(long)]
        set_api_key: Option<String>,

        /// 显示当前设置
        #[arg(long)]
        show: bool,
    },
}
