//! 会话模块
//!
//! 管理当前认证身份，与路由系统解耦：路由守卫只消费注入的会话信号。
//! 身份整体序列化为 JSON 持久化到 LocalStorage，进程启动时恢复；
//! 解析失败一律回退为未登录（记录告警，不向上传播）。

use leptos::prelude::*;
use serde_json::Value;

use crate::api::auth_api;
use crate::models::{Role, Session};
use crate::web::{LocalStorage, console};

pub const STORAGE_SESSION_KEY: &str = "ronka_user";

/// 会话上下文
///
/// 两个状态：未登录（`None`）与已登录（`Some(Session)`）。
/// 通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 当前会话（只读）
    pub session: ReadSignal<Option<Session>>,
    /// 设置会话（写入）
    set_session: WriteSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (session, set_session) = signal(None);
        Self {
            session,
            set_session,
        }
    }

    /// 会话信号（用于注入路由服务）
    pub fn session_signal(&self) -> Signal<Option<Session>> {
        self.session.into()
    }

    // 角色谓词：读取时重新计算的纯函数，无隐藏依赖跟踪

    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.get().is_some_and(|s| s.role.is_admin())
    }

    pub fn is_member(&self) -> bool {
        self.session.get().is_some_and(|s| s.role.is_member())
    }

    pub fn is_public_user(&self) -> bool {
        self.session.get().is_some_and(|s| s.role.is_public_user())
    }

    /// 登录：整体替换内存会话并持久化
    pub fn login(&self, session: Session) {
        if let Ok(raw) = serde_json::to_string(&session) {
            LocalStorage::set(STORAGE_SESSION_KEY, &raw);
        }
        self.set_session.set(Some(session));
    }

    /// 登出：清除持久化与内存会话
    pub fn logout(&self) {
        LocalStorage::delete(STORAGE_SESSION_KEY);
        self.set_session.set(None);
    }

    /// 进程启动时从 LocalStorage 恢复会话
    ///
    /// 数据损坏时重置为未登录并清掉脏数据，绝不向上抛错。
    pub fn init_from_storage(&self) {
        let Some(raw) = LocalStorage::get(STORAGE_SESSION_KEY) else {
            return;
        };
        match parse_session(&raw) {
            Some(session) => self.set_session.set(Some(session)),
            None => {
                console::warn("[Session] Stored session is corrupt, resetting to anonymous.");
                LocalStorage::delete(STORAGE_SESSION_KEY);
                self.set_session.set(None);
            }
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析持久化的会话数据，失败返回 `None`
pub fn parse_session(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

// =========================================================
// 远程认证流程 (API-backed auth)
// =========================================================

/// 将登录响应映射为本地会话形态
///
/// 兼容 `{ user: {...}, token }` 与平铺两种形态；
/// `username` 缺失时回退为邮箱。
fn map_login_response(data: &Value) -> Option<Session> {
    let user = data.get("user").unwrap_or(data);
    let id = user.get("id").and_then(Value::as_i64)?;
    let name = user.get("name").and_then(Value::as_str)?.to_string();
    let email = user.get("email").and_then(Value::as_str)?.to_string();
    let username = user
        .get("username")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| email.clone());
    let role = user
        .get("role")
        .and_then(|v| serde_json::from_value::<Role>(v.clone()).ok())
        .unwrap_or(Role::Public);
    let token = data
        .get("token")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(Session {
        id,
        name,
        email,
        username,
        role,
        token,
    })
}

/// 通过远程 API 登录
///
/// 任何失败（网络、凭据、响应形态）都折叠为 `None`，
/// 由调用方决定界面反馈。
pub async fn login_via_api(ctx: &SessionContext, email: &str, password: &str) -> Option<Session> {
    let data = auth_api::login(email, password).await.ok()?;
    let session = map_login_response(&data)?;
    ctx.login(session.clone());
    Some(session)
}

/// 通过远程 API 登出
///
/// 持有令牌时尽力通知服务端（失败仅记录），随后必定执行本地登出。
pub async fn logout_via_api(ctx: &SessionContext) {
    let has_token = ctx
        .session
        .get_untracked()
        .is_some_and(|s| s.token.is_some());
    if has_token {
        if let Err(err) = auth_api::logout().await {
            console::warn(&format!("[Session] Remote logout ignored: {}", err));
        }
    }
    ctx.logout();
}

#[cfg(test)]
mod tests;
