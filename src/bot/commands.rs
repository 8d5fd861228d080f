use crate::query::types::ServerAddress;

/// Why a trigger-prefixed message was rejected before any lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong token count; carries the usage hint to show the user.
    BadArity { usage: String },
    InvalidPort,
}

/// Parse a status-query command into the address to look up.
/// Example: "查询服务器 1.2.3.4 25565" -> address 1.2.3.4:25565
///
/// Returns `None` when the message does not start with the trigger token;
/// such messages are not for this bot and get no reply. A bare trigger falls
/// back to the configured default address. The host token is taken verbatim,
/// only the port is validated.
pub fn parse(
    text: &str,
    trigger: &str,
    default: &ServerAddress,
) -> Option<Result<ServerAddress, ParseError>> {
    let text = text.trim();

    if !text.starts_with(trigger) {
        return None;
    }

    let parts: Vec<&str> = text.split_whitespace().collect();

    let parsed = match parts.len() {
        1 => Ok(default.clone()),
        3 => match parts[2].parse::<u16>() {
            Ok(port) => Ok(ServerAddress::new(parts[1], port)),
            Err(_) => Err(ParseError::InvalidPort),
        },
        _ => Err(ParseError::BadArity {
            usage: format!(
                "{} [IP] [端口]\n示例：{} {} {}",
                trigger, trigger, default.host, default.port
            ),
        }),
    };

    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: &str = "查询服务器";

    fn default_addr() -> ServerAddress {
        ServerAddress::new("103.205.253.14", 23007)
    }

    #[test]
    fn test_bare_trigger_uses_default() {
        assert_eq!(
            parse(TRIGGER, TRIGGER, &default_addr()),
            Some(Ok(default_addr()))
        );

        // Leading and trailing whitespace is stripped first.
        assert_eq!(
            parse("  查询服务器  ", TRIGGER, &default_addr()),
            Some(Ok(default_addr()))
        );
    }

    #[test]
    fn test_explicit_host_and_port() {
        assert_eq!(
            parse("查询服务器 play.example.net 25565", TRIGGER, &default_addr()),
            Some(Ok(ServerAddress::new("play.example.net", 25565)))
        );
    }

    #[test]
    fn test_host_is_not_validated() {
        assert_eq!(
            parse("查询服务器 definitely-not-an-ip 123", TRIGGER, &default_addr()),
            Some(Ok(ServerAddress::new("definitely-not-an-ip", 123)))
        );
    }

    #[test]
    fn test_non_numeric_port() {
        assert_eq!(
            parse("查询服务器 1.2.3.4 abc", TRIGGER, &default_addr()),
            Some(Err(ParseError::InvalidPort))
        );
    }

    #[test]
    fn test_wrong_token_count() {
        assert!(matches!(
            parse("查询服务器 1.2.3.4", TRIGGER, &default_addr()),
            Some(Err(ParseError::BadArity { .. }))
        ));
        assert!(matches!(
            parse("查询服务器 1.2.3.4 25565 extra", TRIGGER, &default_addr()),
            Some(Err(ParseError::BadArity { .. }))
        ));
    }

    #[test]
    fn test_usage_hint_names_trigger_and_default() {
        let Some(Err(ParseError::BadArity { usage })) =
            parse("查询服务器 too many tokens here", TRIGGER, &default_addr())
        else {
            panic!("expected a usage hint");
        };

        assert_eq!(usage, "查询服务器 [IP] [端口]\n示例：查询服务器 103.205.253.14 23007");
    }

    #[test]
    fn test_unrelated_message_is_ignored() {
        assert_eq!(parse("hello there", TRIGGER, &default_addr()), None);
        assert_eq!(parse("", TRIGGER, &default_addr()), None);
    }
}
