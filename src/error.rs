use thiserror::Error;

#[derive(Error, Debug)]
pub enum KartAiError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("未设置API密钥。请先执行 `kart-ai config --set-api-key YOUR_KEY`，或设置环境变量 ARK_API_KEY")]
    MissingApiKey,

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件夹不存在: {0}")]
    FolderNotFound(String),

    #[error("图片读取错误: {0}")]
    ImageLoad(String),

    #[error("API调用错误: {0}")]
    ApiCall(String),

    #[error("API响应解析失败: {0}")]
    ApiParse(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成错误: {0}")]
    ExcelGeneration(String),

    #[error("文件夹内没有图片: {0}")]
    NoImagesFound(String),
}

pub type Result<T> = std::result::Result<T, KartAiError>;
