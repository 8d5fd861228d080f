use std::fmt;

/// Classification of a failed status lookup. Every failure on the query path
/// ends up as one of these and travels back to the caller as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Unreachable,
    RemoteError,
    MissingField(String),
    InvalidResponse,
    Internal(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Unreachable => write!(f, "服务器未响应或不可用"),
            QueryError::RemoteError => write!(f, "服务器返回错误状态"),
            QueryError::MissingField(field) => write!(f, "数据字段缺失：{}", field),
            QueryError::InvalidResponse => write!(f, "服务器返回无效数据格式"),
            QueryError::Internal(msg) => write!(f, "查询发生意外错误: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

pub type Result<T> = std::result::Result<T, QueryError>;
