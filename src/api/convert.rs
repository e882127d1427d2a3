//! 键名风格转换模块
//!
//! 前端模型统一 camelCase，远程 API 统一 snake_case，转换集中在
//! 请求适配层完成：
//! - 出站：仅转换对象第一层的键，嵌套值按调用方给定的形态透传；
//! - 入站：递归转换对象与数组中的所有键。

use serde_json::Value;

/// camelCase -> snake_case（单个键名）
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    // 首字母大写的键转换后会多出一个前导下划线
    match out.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}

/// snake_case -> camelCase（单个键名）
///
/// 仅当下划线后跟小写字母时折叠，其余下划线原样保留。
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.peek() {
                Some(next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// 出站转换：对象第一层键 camelCase -> snake_case
pub fn to_snake(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (camel_to_snake(&k), v))
                .collect(),
        ),
        other => other,
    }
}

/// 入站转换：递归地将所有键 snake_case -> camelCase
pub fn from_snake(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (snake_to_camel(&k), from_snake(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(from_snake).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests;
