//! 识别调度
//!
//! `Recognizer` 把视觉识别服务抽象成「图片字节→文本」的黑盒；
//! `BatchRecognizer` 对一批图片同时发起识别（不设并发上限），
//! 全部落定后按提交顺序返回每张图片的结果，单张失败不影响整批。

pub mod ark;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scanner::{self, ImageInfo};

pub use ark::ArkClient;

/// 视觉识别服务：图片字节 + MIME类型 → 识别文本
///
/// 返回的文本不保证任何格式，由评分引擎自行解析。
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(&self, image: &[u8], mime_type: &str) -> Result<String>;
}

/// 单张图片的识别结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionOutcome {
    pub file_name: String,
    /// 识别文本，识别失败时为空串
    #[serde(default)]
    pub transcript: String,
    /// 失败原因，None 表示识别成功
    #[serde(default)]
    pub error: Option<String>,
}

impl RecognitionOutcome {
    pub fn ok(file_name: &str, transcript: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            transcript: transcript.to_string(),
            error: None,
        }
    }

    pub fn failed(file_name: &str, error: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            transcript: String::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// 批量识别调度器
///
/// 同一调度器同一时刻只允许一批在途，在途期间再次调用不产生任何副作用。
pub struct BatchRecognizer {
    recognizer: Arc<dyn Recognizer>,
    in_flight: AtomicBool,
}

impl BatchRecognizer {
    pub fn new(recognizer: Arc<dyn Recognizer>) -> Self {
        Self {
            recognizer,
            in_flight: AtomicBool::new(false),
        }
    }

    /// 并发识别一批图片，全部落定后按提交顺序返回结果
    ///
    /// 已有批次在途时返回 None。单张图片读取失败或识别失败记入
    /// 该图片自己的结果，不会中断其他图片。
    pub async fn recognize_all(
        &self,
        images: &[ImageInfo],
        progress: Option<&ProgressBar>,
    ) -> Option<Vec<RecognitionOutcome>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }

        let futures = images.iter().map(|image| {
            let recognizer = Arc::clone(&self.recognizer);
            async move {
                let outcome = match scanner::load_image(&image.path) {
                    Ok((bytes, mime_type)) => {
                        match recognizer.recognize(&bytes, mime_type).await {
                            Ok(transcript) => {
                                RecognitionOutcome::ok(&image.file_name, &transcript)
                            }
                            Err(e) => {
                                RecognitionOutcome::failed(&image.file_name, &e.to_string())
                            }
                        }
                    }
                    Err(e) => RecognitionOutcome::failed(&image.file_name, &e.to_string()),
                };
                if let Some(pb) = progress {
                    pb.inc(1);
                }
                outcome
            }
        });

        let outcomes = join_all(futures).await;
        self.in_flight.store(false, Ordering::SeqCst);
        Some(outcomes)
    }
}
