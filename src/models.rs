//! 领域模型定义
//!
//! 所有序列化统一使用 camelCase：持久化的会话数据与经过键名转换后的
//! API 响应共用同一套模型。
//! 记录类型采用「请求基础结构 + flatten」模式：创建请求只携带用户输入，
//! 落库记录在其上叠加 `id` 与 `created_at`。

use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const APP_TITLE: &str = "RONKA Event Multi Service";

// =========================================================
// 会话与角色 (Session & Role)
// =========================================================

/// 用户角色
///
/// 服务端可能返回未知角色字符串，统一归入 `Unknown`，
/// 路由守卫会将其重定向到公共首页。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
    Public,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Role::Member)
    }

    pub fn is_public_user(&self) -> bool {
        matches!(self, Role::Public)
    }
}

/// 当前认证身份
///
/// 整体序列化为 JSON 存入 LocalStorage（键 `ronka_user`）。
/// `token` 仅在通过远程 API 登录时存在，本地演示登录为 `None`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub token: Option<String>,
}

// =========================================================
// 业务记录 (Resource Records)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub created_at: String,
    #[serde(flatten)]
    pub base: BookingRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub name: String,
    pub email: String,
    pub amount: f64,
    pub payment_method: String,
    pub payment_details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: i64,
    pub created_at: String,
    #[serde(flatten)]
    pub base: DonationRequest,
}

/// 合作伙伴申请状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    Pending,
    Approved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: i64,
    pub created_at: String,
    pub status: PartnerStatus,
    #[serde(flatten)]
    pub base: PartnerRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub created_at: String,
    #[serde(flatten)]
    pub base: FeedbackRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: i64,
    pub created_at: String,
    #[serde(flatten)]
    pub base: SuggestionRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    pub name: String,
    pub email: String,
    pub username: String,
}

/// 会员记录
///
/// `password` 由本地存储在创建时生成默认值（`ronka` + id 末四位），
/// 远程模式下由服务端负责。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub created_at: String,
    #[serde(default)]
    pub password: String,
    #[serde(flatten)]
    pub base: MemberRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub created_at: String,
    #[serde(flatten)]
    pub base: EventRequest,
}

/// 活动-会员指派（只做 id 关联，不校验引用完整性）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAssignment {
    pub id: i64,
    pub created_at: String,
    pub event_id: i64,
    pub member_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventComment {
    pub id: i64,
    pub created_at: String,
    pub event_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub user_name: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRequest {
    pub title: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: i64,
    pub created_at: String,
    #[serde(flatten)]
    pub base: GalleryRequest,
}

// =========================================================
// 认证请求 (Auth Requests)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}
