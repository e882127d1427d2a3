//! RONKA Event Multi Service 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，含导航守卫）
//! - `session`: 认证状态管理
//! - `data`: 未配置远程 API 时的本地演示数据
//! - `theme`: 亮/暗主题偏好
//! - `api`: 远程 API 访问层（键名风格转换 + 统一错误文案）
//! - `components`: UI 组件层

mod api;
mod components {
    mod account;
    mod admin;
    mod booking;
    mod donate;
    mod feedback;
    mod gallery;
    mod home;
    mod login;
    mod member_space;
    pub mod navbar;
    pub(crate) mod notice;
    mod partners;
    mod register;
    mod services;

    pub use account::AccountPage;
    pub use admin::bookings::AdminBookings;
    pub use admin::dashboard::AdminDashboard;
    pub use admin::events::AdminEvents;
    pub use admin::gallery::AdminGallery;
    pub use admin::members::AdminMembers;
    pub use booking::BookingPage;
    pub use donate::DonatePage;
    pub use feedback::FeedbackPage;
    pub use gallery::GalleryPage;
    pub use home::HomePage;
    pub use login::LoginPage;
    pub use member_space::MemberSpacePage;
    pub use partners::PartnersPage;
    pub use register::RegisterPage;
    pub use services::ServicesPage;
}
mod data;
mod models;
mod session;
mod theme;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::data::DataContext;
use crate::session::SessionContext;
use crate::theme::{ThemeContext, init_theme};

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod console;
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    use crate::components::*;

    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Services => view! { <ServicesPage /> }.into_any(),
        AppRoute::Booking => view! { <BookingPage /> }.into_any(),
        AppRoute::Donate => view! { <DonatePage /> }.into_any(),
        AppRoute::Partners => view! { <PartnersPage /> }.into_any(),
        AppRoute::Feedback => view! { <FeedbackPage /> }.into_any(),
        AppRoute::Gallery => view! { <GalleryPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboard /> }.into_any(),
        AppRoute::AdminMembers => view! { <AdminMembers /> }.into_any(),
        AppRoute::AdminEvents => view! { <AdminEvents /> }.into_any(),
        AppRoute::AdminBookings => view! { <AdminBookings /> }.into_any(),
        AppRoute::AdminGallery => view! { <AdminGallery /> }.into_any(),
        AppRoute::MemberDashboard => view! { <MemberSpacePage /> }.into_any(),
        AppRoute::Account => view! { <AccountPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page introuvable"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建主题上下文并注册镜像副作用
    let theme_ctx = ThemeContext::new();
    provide_context(theme_ctx);
    init_theme(&theme_ctx);

    // 2. 创建会话上下文并从 LocalStorage 恢复
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);
    session_ctx.init_from_storage();

    // 3. 本地演示数据（未配置远程 API 时的后备）
    provide_context(DataContext::new());

    // 4. 获取会话信号，用于注入路由服务（解耦！）
    let session = session_ctx.session_signal();

    view! {
        // 5. 路由器组件：注入会话信号实现守卫
        <Router session=session>
            <div class="min-h-screen bg-base-200">
                <Navbar />
                <RouterOutlet matcher=route_matcher />
            </div>
        </Router>
    }
}
