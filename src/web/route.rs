//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 每条路由声明自己的标题、认证要求、角色要求与 guest-only 标记，
//! 守卫逻辑（见 `router`）只消费这些声明。

use std::fmt::Display;

use crate::models::{APP_TITLE, Role};

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Services,
    Booking,
    Donate,
    Partners,
    Feedback,
    Gallery,
    /// 登录页（仅访客）
    Login,
    /// 注册页（仅访客）
    Register,
    /// 管理后台（仅 admin）
    AdminDashboard,
    AdminMembers,
    AdminEvents,
    AdminBookings,
    AdminGallery,
    /// 会员空间（仅 member）
    MemberDashboard,
    /// 普通用户账户页（仅 public）
    Account,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举（忽略 query 与 hash 部分）
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or("/");
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "" | "/" => Self::Home,
            "/services" => Self::Services,
            "/booking" => Self::Booking,
            "/donate" => Self::Donate,
            "/partenaires" => Self::Partners,
            "/feedback" => Self::Feedback,
            "/galerie" => Self::Gallery,
            "/auth/login" => Self::Login,
            "/auth/register" => Self::Register,
            "/admin" => Self::AdminDashboard,
            "/admin/members" => Self::AdminMembers,
            "/admin/events" => Self::AdminEvents,
            "/admin/bookings" => Self::AdminBookings,
            "/admin/galerie" => Self::AdminGallery,
            "/member" => Self::MemberDashboard,
            "/account" => Self::Account,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/services",
            Self::Booking => "/booking",
            Self::Donate => "/donate",
            Self::Partners => "/partenaires",
            Self::Feedback => "/feedback",
            Self::Gallery => "/galerie",
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
            Self::AdminDashboard => "/admin",
            Self::AdminMembers => "/admin/members",
            Self::AdminEvents => "/admin/events",
            Self::AdminBookings => "/admin/bookings",
            Self::AdminGallery => "/admin/galerie",
            Self::MemberDashboard => "/member",
            Self::Account => "/account",
            Self::NotFound => "/404",
        }
    }

    /// 页面标题（无标题的路由显示裸应用名）
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Accueil"),
            Self::Services => Some("Nos Services"),
            Self::Booking => Some("Réserver"),
            Self::Donate => Some("Faire un Don"),
            Self::Partners => Some("Partenaires"),
            Self::Feedback => Some("Feedback & Suggestions"),
            Self::Gallery => Some("Galerie"),
            Self::Login => Some("Connexion"),
            Self::Register => Some("Inscription"),
            Self::AdminDashboard => Some("Tableau de bord Admin"),
            Self::AdminMembers => Some("Gestion des membres"),
            Self::AdminEvents => Some("Gestion des événements"),
            Self::AdminBookings => Some("Réservations"),
            Self::AdminGallery => Some("Galerie"),
            Self::MemberDashboard => Some("Mon espace"),
            Self::Account => Some("Mon compte"),
            Self::NotFound => None,
        }
    }

    /// 完整的 document.title 文案
    pub fn document_title(&self) -> String {
        match self.title() {
            Some(title) => format!("{} | {}", title, APP_TITLE),
            None => APP_TITLE.to_string(),
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        self.required_role().is_some()
    }

    /// 该路由要求的角色
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::AdminDashboard
            | Self::AdminMembers
            | Self::AdminEvents
            | Self::AdminBookings
            | Self::AdminGallery => Some(Role::Admin),
            Self::MemberDashboard => Some(Role::Member),
            Self::Account => Some(Role::Public),
            _ => None,
        }
    }

    /// 仅访客可见（已认证用户将被重定向到自己的主页）
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
