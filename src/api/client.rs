//! HTTP 请求适配层
//!
//! 基于 `gloo_net::http` 封装统一的请求入口：
//! - 自动携带 JSON 头与（按需）Bearer 令牌；
//! - 出站/入站键名风格转换（见 [`super::convert`]）；
//! - 三类错误归一为 [`ApiError`]，各自携带面向用户的提示文案。
//!
//! 未配置 API 地址时所有调用立即失败，调用方应转入本地演示模式。

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::convert;
use crate::session::STORAGE_SESSION_KEY;
use crate::web::LocalStorage;

/// 构建期注入的远程 API 基地址（Trunk: `RONKA_API_URL=... trunk build`）
pub fn api_base() -> Option<&'static str> {
    option_env!("RONKA_API_URL").filter(|base| !base.is_empty())
}

/// 是否配置了远程 API
///
/// 页面据此在「远程调用」与「本地演示数据」之间分流。
pub fn is_configured() -> bool {
    api_base().is_some()
}

fn ensure_configured() -> Result<&'static str, ApiError> {
    api_base().ok_or(ApiError::NotConfigured)
}

// =========================================================
// 错误类型 (Error Taxonomy)
// =========================================================

/// 请求错误
///
/// 三类来源（未配置 / 网络不可达 / 服务端非 2xx）统一为一个错误值，
/// `Display` 输出即为可直接展示给用户的文案。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 未配置 API 基地址，未发起任何网络请求
    NotConfigured,
    /// 网络层失败（主机不可达等）
    Network,
    /// 服务端返回非 2xx
    Server { status: u16, message: String },
    /// 成功响应但无法解码为目标类型
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::NotConfigured => write!(f, "API non configurée"),
            ApiError::Network => write!(
                f,
                "Impossible de joindre le backend. Vérifiez que le serveur API tourne (php artisan serve)."
            ),
            ApiError::Server { message, .. } => write!(f, "{}", message),
            ApiError::Decode(detail) => write!(f, "Réponse invalide du serveur: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

/// 从服务端错误响应推导提示文案
///
/// 优先级：`message` 字段 > `errors` 映射的第一条（数组则取首元素）
/// > 状态码兜底文案。
pub fn parse_error_message(data: &Value, status: u16) -> String {
    if let Some(message) = data.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(errors) = data.get("errors").and_then(Value::as_object) {
        if let Some(first) = errors.values().next() {
            let entry = match first {
                Value::Array(items) => items.first().unwrap_or(first),
                other => other,
            };
            if let Some(text) = entry.as_str() {
                return text.to_string();
            }
        }
    }
    match status {
        401 => "Session expirée. Veuillez vous reconnecter.".to_string(),
        403 => "Accès refusé.".to_string(),
        404 => "Ressource introuvable.".to_string(),
        status if status >= 500 => "Erreur serveur. Réessayez plus tard.".to_string(),
        status => format!("Erreur {}", status),
    }
}

// =========================================================
// 请求核心 (Request Core)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// 直接从持久化的会话数据中读取令牌
///
/// 与原始实现一致：不经过响应式会话上下文，解析失败视为无令牌。
fn stored_token() -> Option<String> {
    let raw = LocalStorage::get(STORAGE_SESSION_KEY)?;
    let data: Value = serde_json::from_str(&raw).ok()?;
    data.get("token")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Delete => Request::delete(url),
    }
}

/// 统一请求入口
///
/// `body` 的第一层键在发出前被转换为 snake_case；
/// 成功响应的所有键被递归转换回 camelCase 后返回。
pub async fn request(
    method: Method,
    path: &str,
    body: Option<Value>,
    auth: bool,
) -> Result<Value, ApiError> {
    let base = ensure_configured()?;
    let url = format!("{}{}", base.trim_end_matches('/'), path);

    let mut req = builder(method, &url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");
    if auth {
        if let Some(token) = stored_token() {
            req = req.header("Authorization", &format!("Bearer {}", token));
        }
    }

    let sent = match body {
        Some(body) if method != Method::Get => {
            let payload = convert::to_snake(body).to_string();
            req.body(payload)
                .map_err(|_| ApiError::Network)?
                .send()
                .await
        }
        _ => req.send().await,
    };
    let response = sent.map_err(|_| ApiError::Network)?;

    // 与原始实现一致：响应体不是合法 JSON 时按空对象处理
    let text = response.text().await.unwrap_or_default();
    let data: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({}));

    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: parse_error_message(&data, response.status()),
        });
    }
    Ok(convert::from_snake(data))
}

pub async fn get(path: &str, auth: bool) -> Result<Value, ApiError> {
    request(Method::Get, path, None, auth).await
}

pub async fn post(path: &str, body: Value, auth: bool) -> Result<Value, ApiError> {
    request(Method::Post, path, Some(body), auth).await
}

pub async fn delete(path: &str, auth: bool) -> Result<Value, ApiError> {
    request(Method::Delete, path, None, auth).await
}

/// 将已完成键名转换的响应解码为目标类型
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// 当前持久化会话中是否存在令牌（用于"有令牌才带认证"的调用）
pub fn has_token() -> bool {
    stored_token().is_some()
}

#[cfg(test)]
mod tests;
