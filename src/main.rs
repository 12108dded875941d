use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use kart_ai_rust::{cli, config, error, export, recognizer, scanner, scoring};

use cli::{Cli, Commands};
use config::Config;
use error::{KartAiError, Result};
use recognizer::{ArkClient, BatchRecognizer, RecognitionOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Recognize { folder, output } => {
            println!("🏎 kart-ai - 赛果识别\n");

            let outcomes = recognize_folder(&folder, &config).await?;

            // 3. 保存识别文本
            println!("[3/3] 保存识别文本...");
            let output = output.unwrap_or_else(|| folder.join("transcripts.json"));
            let json = serde_json::to_string_pretty(&outcomes)?;
            std::fs::write(&output, json)?;
            println!("✔ 识别文本已保存: {}", output.display());

            println!("\n✅ 识别完成");
        }

        Commands::Export { input, output } => {
            println!("📄 kart-ai - 成绩表导出\n");

            if !input.is_file() {
                return Err(KartAiError::FileNotFound(input.display().to_string()));
            }
            let content = std::fs::read_to_string(&input)?;
            let outcomes: Vec<RecognitionOutcome> = serde_json::from_str(&content)?;

            export_outcomes(&outcomes, output.as_deref(), cli.verbose)?;

            println!("\n✅ 导出完成");
        }

        Commands::Run { folder, output } => {
            println!("🚀 kart-ai - 一步完成\n");

            let outcomes = recognize_folder(&folder, &config).await?;

            println!("[3/3] 生成成绩表...");
            export_outcomes(&outcomes, output.as_deref(), cli.verbose)?;

            println!("\n✅ 全部完成");
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API密钥已保存");
            }

            if show {
                println!("当前设置:");
                println!("  模型: {}", config.model);
                println!("  接口地址: {}", config.api_url);
                println!("  超时: {}秒", config.timeout_seconds);
                println!(
                    "  API密钥: {}",
                    if config.get_api_key().is_ok() {
                        "已设置"
                    } else {
                        "未设置"
                    }
                );
            }
        }
    }

    Ok(())
}

/// 扫描文件夹并并发识别全部图片，按提交顺序返回每张图片的结果
async fn recognize_folder(folder: &Path, config: &Config) -> Result<Vec<RecognitionOutcome>> {
    // 1. 图片扫描
    println!("[1/3] 扫描赛果图片...");
    let scan = scanner::scan_folder(folder)?;
    for skipped in &scan.skipped {
        println!("⚠ 跳过非图片文件: {}", skipped);
    }
    if scan.images.is_empty() {
        return Err(KartAiError::NoImagesFound(folder.display().to_string()));
    }
    println!("✔ 检测到{}张图片\n", scan.images.len());

    // 2. 并发识别
    println!("[2/3] AI识别中...");
    let client = ArkClient::new(config)?;
    let batch = BatchRecognizer::new(Arc::new(client));

    let progress = ProgressBar::new(scan.images.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let outcomes = batch
        .recognize_all(&scan.images, Some(&progress))
        .await
        .ok_or_else(|| KartAiError::ApiCall("已有识别批次在途".to_string()))?;
    progress.finish_and_clear();

    let failed: Vec<&RecognitionOutcome> = outcomes.iter().filter(|o| !o.is_ok()).collect();
    println!(
        "✔ 识别完成: 成功{}张, 失败{}张",
        outcomes.len() - failed.len(),
        failed.len()
    );
    for outcome in &failed {
        println!(
            "  ✖ {}: {}",
            outcome.file_name,
            outcome.error.as_deref().unwrap_or("未知错误")
        );
    }
    println!();

    Ok(outcomes)
}

/// 解析识别文本、装配成绩表并写出Excel
fn export_outcomes(
    outcomes: &[RecognitionOutcome],
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        for outcome in outcomes.iter().filter(|o| o.is_ok()) {
            let entries = scoring::parse_transcript(&outcome.transcript);
            println!("  {}: 解析出{}条成绩", outcome.file_name, entries.len());
        }
    }

    let table = scoring::build_score_table(outcomes);
    if table.placeholder {
        println!("⚠ 没有可用的识别成绩，写出示例成绩表");
    }
    println!(
        "- 装配成绩表: {}名车手 × {}列",
        table.rows.len(),
        table.columns.len()
    );

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let written = export::export_score_table(&table, &output)?;
    println!("✔ 成绩表已保存: {}", written.display());

    Ok(())
}
