//! 核心工具函数

/// 获取当前Unix时间戳（毫秒）
///
/// 只用于错误记录的时间标注；面板内部的计时一律使用 `tick(delta_time)` 累积的帧时间。
pub fn current_timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// 把变量名转换为显示标签
///
/// `show_flight_paths` → `Show Flight Paths`，`maxDucks` → `Max Ducks`
pub fn nicify_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_timestamp_ms() {
        let ts1 = current_timestamp_ms();
        let ts2 = current_timestamp_ms();
        assert!(ts2 >= ts1);
    }

    #[test]
    fn test_nicify_key() {
        assert_eq!(nicify_key("show_flight_paths"), "Show Flight Paths");
        assert_eq!(nicify_key("maxDucks"), "Max Ducks");
        assert_eq!(nicify_key("_god__mode_"), "God Mode");
        assert_eq!(nicify_key(""), "");
    }
}
