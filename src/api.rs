//! 远程 API 访问层
//!
//! `client` 提供统一的请求核心，`convert` 负责键名风格转换；
//! 其余子模块是各资源的门面：只做「路径 + 数据形态」映射并声明
//! 每个调用是否需要认证，不包含业务逻辑。

pub mod client;
pub mod convert;

pub use client::{ApiError, Method, is_configured};

use serde::Serialize;
use serde_json::Value;

use crate::models::*;

fn body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// 认证端点
pub mod auth_api {
    use super::*;
    use serde_json::json;

    pub async fn login(email: &str, password: &str) -> Result<Value, ApiError> {
        client::post("/login", json!({ "email": email, "password": password }), false).await
    }

    pub async fn register(req: &RegisterRequest) -> Result<Value, ApiError> {
        client::post("/register", body(req)?, false).await
    }

    pub async fn logout() -> Result<Value, ApiError> {
        client::post("/logout", json!({}), true).await
    }

    pub async fn me() -> Result<Value, ApiError> {
        client::get("/me", true).await
    }
}

pub mod bookings {
    use super::*;

    pub async fn list() -> Result<Vec<Booking>, ApiError> {
        client::get("/bookings", true).await.and_then(client::decode)
    }

    pub async fn create(req: &BookingRequest) -> Result<Booking, ApiError> {
        client::post("/bookings", body(req)?, true)
            .await
            .and_then(client::decode)
    }
}

pub mod donations {
    use super::*;

    pub async fn list() -> Result<Vec<Donation>, ApiError> {
        client::get("/donations", true).await.and_then(client::decode)
    }

    pub async fn create(req: &DonationRequest) -> Result<Donation, ApiError> {
        client::post("/donations", body(req)?, true)
            .await
            .and_then(client::decode)
    }
}

pub mod partners {
    use super::*;

    pub async fn list() -> Result<Vec<Partner>, ApiError> {
        client::get("/partners", true).await.and_then(client::decode)
    }

    pub async fn create(req: &PartnerRequest) -> Result<Partner, ApiError> {
        client::post("/partners", body(req)?, true)
            .await
            .and_then(client::decode)
    }

    pub async fn approve(id: i64) -> Result<Partner, ApiError> {
        client::request(Method::Post, &format!("/partners/{}/approve", id), None, true)
            .await
            .and_then(client::decode)
    }
}

pub mod feedback {
    use super::*;

    pub async fn list() -> Result<Vec<Feedback>, ApiError> {
        client::get("/feedbacks", true).await.and_then(client::decode)
    }

    /// 匿名访客也可以提交反馈：仅在持有令牌时附带认证
    pub async fn create(req: &FeedbackRequest) -> Result<Feedback, ApiError> {
        client::post("/feedback", body(req)?, client::has_token())
            .await
            .and_then(client::decode)
    }
}

pub mod members {
    use super::*;

    pub async fn list() -> Result<Vec<Member>, ApiError> {
        client::get("/members", true).await.and_then(client::decode)
    }

    pub async fn create(req: &MemberRequest) -> Result<Member, ApiError> {
        client::post("/members", body(req)?, true)
            .await
            .and_then(client::decode)
    }

    pub async fn delete(id: i64) -> Result<Value, ApiError> {
        client::delete(&format!("/members/{}", id), true).await
    }
}

pub mod events {
    use super::*;
    use serde_json::json;

    pub async fn list() -> Result<Vec<Event>, ApiError> {
        client::get("/events", true).await.and_then(client::decode)
    }

    pub async fn create(req: &EventRequest) -> Result<Event, ApiError> {
        client::post("/events", body(req)?, true)
            .await
            .and_then(client::decode)
    }

    pub async fn assign_member(event_id: i64, member_id: i64) -> Result<Value, ApiError> {
        client::post(
            &format!("/events/{}/assign", event_id),
            json!({ "memberId": member_id }),
            true,
        )
        .await
    }

    pub async fn add_comment(event_id: i64, comment: &str) -> Result<Value, ApiError> {
        client::post(
            &format!("/events/{}/comment", event_id),
            json!({ "comment": comment }),
            true,
        )
        .await
    }
}

pub mod gallery {
    use super::*;

    /// 画廊列表是公开页面，无需认证
    pub async fn list() -> Result<Vec<GalleryItem>, ApiError> {
        client::get("/gallery", false).await.and_then(client::decode)
    }

    pub async fn create(req: &GalleryRequest) -> Result<GalleryItem, ApiError> {
        client::post("/gallery", body(req)?, true)
            .await
            .and_then(client::decode)
    }

    pub async fn delete(id: i64) -> Result<Value, ApiError> {
        client::delete(&format!("/gallery/{}", id), true).await
    }
}
