//! 火山方舟（Ark）视觉识别客户端
//!
//! 调用豆包多模态 chat/completions 接口：图片以 base64 Data URL
//! 随固定提示词一起发送，取第一个choice的文本作为识别结果。

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{KartAiError, Result};

use super::Recognizer;

/// 赛果识别提示词
const RECOGNITION_PROMPT: &str = "请识别图片中每个名次分别对应的车手名次，依次返回对应的名次和车手名称";

/// chat/completions 请求
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    ImageUrl { image_url: ImageUrl },
    Text { text: String },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

/// chat/completions 响应
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// 把图片字节编码成 Data URL
fn build_data_url(mime_type: &str, image: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(image)
    )
}

/// Ark 识别客户端
pub struct ArkClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl ArkClient {
    /// 按配置构建客户端，超时为客户端级设置
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| KartAiError::ApiCall(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl Recognizer for ArkClient {
    async fn recognize(&self, image: &[u8], mime_type: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: build_data_url(mime_type, image),
                        },
                    },
                    ContentPart::Text {
                        text: RECOGNITION_PROMPT.to_string(),
                    },
                ],
            }],
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| KartAiError::ApiCall(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KartAiError::ApiCall(format!("HTTP {}: {}", status, body)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| KartAiError::ApiParse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| KartAiError::ApiParse("返回内容为空".to_string()))
    }
}
