//! 错误处理测试
//!
//! 各类错误条件下的行为验证

use kart_ai_rust::error::KartAiError;
use kart_ai_rust::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 扫描不存在的文件夹
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, KartAiError::FolderNotFound(_)));
}

/// 扫描空文件夹：不是错误，返回空清单
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    assert!(result.is_ok());
    let scan = result.unwrap();
    assert!(scan.images.is_empty());
    assert!(scan.skipped.is_empty());
}

/// 只有非图片文件时：被排除的文件全部进skipped清单
#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let scan = scanner::scan_folder(dir.path()).unwrap();
    assert!(scan.images.is_empty());
    assert_eq!(scan.skipped.len(), 2);
}

/// 各类错误的Display信息都非空
#[test]
fn test_error_display() {
    let errors = vec![
        KartAiError::Config("测试配置错误".to_string()),
        KartAiError::FileNotFound("test.json".to_string()),
        KartAiError::FolderNotFound("/path/to/folder".to_string()),
        KartAiError::ImageLoad("坏图片".to_string()),
        KartAiError::ApiCall("接口调用失败".to_string()),
        KartAiError::ApiParse("响应格式不对".to_string()),
        KartAiError::ExcelGeneration("Excel生成错误".to_string()),
        KartAiError::NoImagesFound("文件夹".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "错误信息为空: {:?}", err);
    }
}

/// 缺密钥的错误信息要指出补救命令
#[test]
fn test_missing_api_key_message() {
    let err = KartAiError::MissingApiKey;
    let display = format!("{}", err);

    assert!(display.contains("API密钥"));
    assert!(display.contains("kart-ai config"));
    assert!(display.contains("ARK_API_KEY"));
}

/// IO错误自动转换
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: KartAiError = io_err.into();

    assert!(matches!(err, KartAiError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSON错误自动转换
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: KartAiError = json_err.into();

    assert!(matches!(err, KartAiError::JsonParse(_)));
}

/// 读取损坏的图片内容
#[test]
fn test_load_broken_image() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"this is not an image").unwrap();

    let result = scanner::load_image(&path);
    assert!(matches!(result, Err(KartAiError::ImageLoad(_))));
}
