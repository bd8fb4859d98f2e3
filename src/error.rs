use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    /// 与上游或本地服务的连接失败
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),

    #[error("上游返回了错误状态码 {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// 上游响应中没有可用的文本内容
    #[error("上游返回内容为空")]
    EmptyReply,

    #[error("无法解析的请求或响应内容: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("配置文件格式错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("读取文件时出现错误: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// 上游已作出应答但没有给出内容
    pub fn is_empty_reply(&self) -> bool {
        matches!(self, QuizError::EmptyReply | QuizError::UpstreamStatus { .. })
    }
}
