//! 赛果图片扫描
//!
//! 只扫描文件夹直下一层，按扩展名筛选图片文件；
//! 非图片文件记入 skipped 清单，由CLI提示后排除。
//! 图片按文件名排序，该顺序即整批识别的提交顺序。

use crate::error::{KartAiError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

/// 扫描结果：图片清单 + 被排除的非图片文件名
#[derive(Debug, Default)]
pub struct ScanResult {
    pub images: Vec<ImageInfo>,
    pub skipped: Vec<String>,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

pub fn scan_folder(folder: &Path) -> Result<ScanResult> {
    if !folder.is_dir() {
        return Err(KartAiError::FolderNotFound(folder.display().to_string()));
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 只扫直下一层（不递归）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if is_image_file(path) {
            result.images.push(ImageInfo {
                path: path.to_path_buf(),
                file_name,
            });
        } else {
            result.skipped.push(file_name);
        }
    }

    // 按文件名排序，提交顺序由此固定
    result.images.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    result.skipped.sort();

    Ok(result)
}

/// 按扩展名判断是否为图片文件（不区分大小写）
fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

/// 读取图片字节并嗅探MIME类型
///
/// 内容嗅探失败（文件损坏或并非图片）按图片读取错误处理，
/// 由调用方把它限制在单张图片的失败里。
pub fn load_image(path: &Path) -> Result<(Vec<u8>, &'static str)> {
    let bytes = std::fs::read(path)
        .map_err(|e| KartAiError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    let format = image::guess_format(&bytes)
        .map_err(|e| KartAiError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    Ok((bytes, format.to_mime_type()))
}
