//! 路由服务模块 - 核心引擎
//!
//! 封装 History API，实现「请求 -> 守卫 -> 处理 -> 加载」的导航流程。
//! 守卫本身是纯函数（[`check_route`]），路由服务只负责把裁决落到
//! History 与信号上；会话状态以注入信号的方式提供，保持解耦。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::console;
use super::route::AppRoute;
use crate::models::{Role, Session};

// =========================================================
// 导航守卫 (Navigation Guard)
// =========================================================

/// 守卫裁决
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDecision {
    /// 放行，按原路径加载
    Allow,
    /// 重定向到指定路径
    Redirect(String),
}

/// 当前会话对应的主页（角色优先级 admin > member > public）
fn role_home(role: Role) -> AppRoute {
    match role {
        Role::Admin => AppRoute::AdminDashboard,
        Role::Member => AppRoute::MemberDashboard,
        Role::Public => AppRoute::Account,
        Role::Unknown => AppRoute::Home,
    }
}

/// **核心守卫逻辑**
///
/// 裁决顺序：
/// 1. 需要认证且未登录 -> 登录页，携带 `redirect` 指向原目标；
/// 2. 角色不匹配 -> 当前角色的主页（未知角色回公共首页）；
/// 3. 仅访客页面且已登录 -> 角色主页；
/// 4. 放行。
pub fn check_route(target: &AppRoute, full_path: &str, session: Option<&Session>) -> NavDecision {
    if target.requires_auth() && session.is_none() {
        return NavDecision::Redirect(format!(
            "{}?redirect={}",
            AppRoute::Login.to_path(),
            full_path
        ));
    }

    if let Some(required) = target.required_role() {
        let role = session.map(|s| s.role);
        if role != Some(required) {
            let home = role.map(role_home).unwrap_or(AppRoute::Home);
            return NavDecision::Redirect(home.to_path().to_string());
        }
    }

    if target.is_guest_only() {
        if let Some(session) = session {
            let home = match session.role {
                Role::Admin => AppRoute::AdminDashboard,
                Role::Member => AppRoute::MemberDashboard,
                _ => AppRoute::Account,
            };
            return NavDecision::Redirect(home.to_path().to_string());
        }
    }

    NavDecision::Allow
}

// =========================================================
// History / Location 工具
// =========================================================

/// 当前浏览器路径（含 query）
fn current_full_path() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn set_document_title(route: &AppRoute) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            document.set_title(&route.document_title());
        }
    }
}

/// 读取当前 URL 的某个 query 参数（登录页用它取 `redirect`）
pub fn query_param(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

// =========================================================
// 路由服务 (Router Service)
// =========================================================

/// 路由器服务
///
/// 所有 History 操作集中在此。会话信号由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<Option<Session>>,
}

impl RouterService {
    fn new(session: Signal<Option<Session>>) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        Self {
            current_route,
            set_route,
            session,
        }
    }

    /// 当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到指定路径（守卫在内部执行）
    pub fn navigate(&self, path: &str) {
        self.navigate_to(path.to_string(), true);
    }

    /// 导航核心：守卫裁决可能级联（重定向目标再过一次守卫）
    fn navigate_to(&self, path: String, use_push: bool) {
        let mut full_path = path;
        let mut target = AppRoute::from_path(&full_path);

        loop {
            let session = self.session.get_untracked();
            match check_route(&target, &full_path, session.as_ref()) {
                NavDecision::Allow => break,
                NavDecision::Redirect(redirect) => {
                    console::log(&format!("[Router] {} -> {}", full_path, redirect));
                    target = AppRoute::from_path(&redirect);
                    full_path = redirect;
                }
            }
        }

        if use_push {
            push_history_state(&full_path);
        } else {
            replace_history_state(&full_path);
        }
        set_document_title(&target);
        self.set_route.set(target);
    }

    /// 应用启动时按当前地址栏执行一次带守卫的加载
    fn sync_from_location(&self) {
        self.navigate_to(current_full_path(), false);
    }

    /// 浏览器后退/前进监听：popstate 时同样执行守卫
    fn init_popstate_listener(&self) {
        let service = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            service.navigate_to(current_full_path(), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话状态变化时的自动重定向
    ///
    /// 登出时若停留在受保护页面则回登录页；
    /// 登录后若仍在访客页则进入角色主页。
    fn setup_session_redirect(&self) {
        let service = *self;
        Effect::new(move |_| {
            let session = service.session.get();
            let route = service.current_route.get_untracked();

            let must_leave = match &session {
                None => route.requires_auth(),
                Some(_) => route.is_guest_only(),
            };
            if must_leave {
                service.navigate_to(route.to_path().to_string(), true);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: Signal<Option<Session>>) -> RouterService {
    let router = RouterService::new(session);

    router.sync_from_location();
    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 会话信号（守卫依据）
    session: Signal<Option<Session>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件：根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接：拦截点击，走 History 导航而不是整页刷新
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.clone();
    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests;
