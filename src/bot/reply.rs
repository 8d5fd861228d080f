use crate::bot::commands::ParseError;
use crate::query::types::{QueryResult, ServerAddress, ServerStatus};

/// Render a finished lookup into the lines sent back to the chat.
pub fn render_result(address: &ServerAddress, result: &QueryResult) -> Vec<String> {
    match result {
        QueryResult::Online(status) => render_online(address, status),
        QueryResult::Failed(reason) => {
            vec!["🔴 查询失败".to_string(), format!("原因: {}", reason)]
        }
    }
}

fn render_online(address: &ServerAddress, status: &ServerStatus) -> Vec<String> {
    vec![
        "🟢 我的世界服务器在线".to_string(),
        format!("▫️ ip:{}", address),
        format!("▫️ 版本: {}", status.version),
        format!("▫️ 玩家: {}/{}", status.online, status.max),
        format!("▫️ MOTD: {}", status.motd),
        format!("▫️ 查询时间: {}", status.query_time_ms),
    ]
}

/// Usage warning for a rejected command. No lookup happens for these.
pub fn render_parse_error(error: &ParseError) -> Vec<String> {
    match error {
        ParseError::InvalidPort => vec!["⚠️ 端口号必须是数字！".to_string()],
        ParseError::BadArity { usage } => {
            let mut lines = vec!["⚠️ 指令格式错误！正确格式：".to_string()];
            lines.extend(usage.lines().map(String::from));
            lines
        }
    }
}
