//! 本地数据模块
//!
//! 未配置远程 API 时的演示/后备数据集。纯状态结构 [`LocalData`]
//! 承载全部集合与操作（便于单元测试），[`DataContext`] 将其包进
//! 信号供组件使用。UI 单线程事件循环内变更，无需加锁。
//!
//! 不变量：每条经 `add_*` 创建的记录在插入时获得唯一 id 与创建
//! 时间戳；除合作伙伴状态 pending->approved 与会员删除外，记录
//! 创建后不再变更。集合保持插入顺序（即展示顺序）。

use chrono::{SecondsFormat, Utc};
use leptos::prelude::*;

use crate::models::*;

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 演示数据集
pub struct LocalData {
    pub bookings: Vec<Booking>,
    pub donations: Vec<Donation>,
    pub partners: Vec<Partner>,
    pub feedbacks: Vec<Feedback>,
    pub suggestions: Vec<Suggestion>,
    pub members: Vec<Member>,
    pub events: Vec<Event>,
    pub event_assignments: Vec<EventAssignment>,
    pub event_comments: Vec<EventComment>,
    pub gallery: Vec<GalleryItem>,
    last_id: i64,
}

impl Default for LocalData {
    fn default() -> Self {
        let seeded_at = timestamp();
        Self {
            bookings: Vec::new(),
            donations: Vec::new(),
            partners: Vec::new(),
            feedbacks: Vec::new(),
            suggestions: Vec::new(),
            members: vec![Member {
                id: 1,
                created_at: seeded_at.clone(),
                password: "membre123".to_string(),
                base: MemberRequest {
                    name: "Membre Test".to_string(),
                    email: "membre@ronka.com".to_string(),
                    username: "membre@ronka.com".to_string(),
                },
            }],
            events: Vec::new(),
            event_assignments: Vec::new(),
            event_comments: Vec::new(),
            gallery: vec![
                GalleryItem {
                    id: 2,
                    created_at: seeded_at.clone(),
                    base: GalleryRequest {
                        title: "Mariage traditionnel à Cotonou".to_string(),
                        image_url: "/images/galerie-mariage.jpg".to_string(),
                        description: "Décoration et animation complètes".to_string(),
                    },
                },
                GalleryItem {
                    id: 3,
                    created_at: seeded_at.clone(),
                    base: GalleryRequest {
                        title: "Gala d'entreprise".to_string(),
                        image_url: "/images/galerie-gala.jpg".to_string(),
                        description: "Soirée de fin d'année, 300 invités".to_string(),
                    },
                },
                GalleryItem {
                    id: 4,
                    created_at: seeded_at,
                    base: GalleryRequest {
                        title: "Concert caritatif".to_string(),
                        image_url: "/images/galerie-concert.jpg".to_string(),
                        description: "Au profit des écoles du quartier".to_string(),
                    },
                },
            ],
            last_id: 4,
        }
    }
}

impl LocalData {
    /// 生成记录 id：当前毫秒时间，同一毫秒内强制递增保证唯一
    fn next_id(&mut self) -> i64 {
        let id = now_ms().max(self.last_id + 1);
        self.last_id = id;
        id
    }

    pub fn add_booking(&mut self, base: BookingRequest) {
        let record = Booking {
            id: self.next_id(),
            created_at: timestamp(),
            base,
        };
        self.bookings.push(record);
    }

    pub fn add_donation(&mut self, base: DonationRequest) {
        let record = Donation {
            id: self.next_id(),
            created_at: timestamp(),
            base,
        };
        self.donations.push(record);
    }

    /// 合作伙伴申请初始状态总是 pending
    pub fn add_partner(&mut self, base: PartnerRequest) {
        let record = Partner {
            id: self.next_id(),
            created_at: timestamp(),
            status: PartnerStatus::Pending,
            base,
        };
        self.partners.push(record);
    }

    pub fn add_feedback(&mut self, base: FeedbackRequest) {
        let record = Feedback {
            id: self.next_id(),
            created_at: timestamp(),
            base,
        };
        self.feedbacks.push(record);
    }

    pub fn add_suggestion(&mut self, base: SuggestionRequest) {
        let record = Suggestion {
            id: self.next_id(),
            created_at: timestamp(),
            base,
        };
        self.suggestions.push(record);
    }

    /// 新会员未指定密码时生成默认值：`ronka` + id 末四位
    pub fn add_member(&mut self, base: MemberRequest, password: Option<String>) {
        let id = self.next_id();
        let password = password.unwrap_or_else(|| {
            let digits = id.to_string();
            let tail = &digits[digits.len().saturating_sub(4)..];
            format!("ronka{}", tail)
        });
        self.members.push(Member {
            id,
            created_at: timestamp(),
            password,
            base,
        });
    }

    pub fn remove_member(&mut self, id: i64) {
        self.members.retain(|m| m.id != id);
    }

    pub fn add_event(&mut self, base: EventRequest) {
        let record = Event {
            id: self.next_id(),
            created_at: timestamp(),
            base,
        };
        self.events.push(record);
    }

    /// 纯 id 关联，不校验 event/member 是否存在
    pub fn assign_member_to_event(&mut self, event_id: i64, member_id: i64) {
        let record = EventAssignment {
            id: self.next_id(),
            created_at: timestamp(),
            event_id,
            member_id,
        };
        self.event_assignments.push(record);
    }

    pub fn add_event_comment(
        &mut self,
        event_id: i64,
        comment: String,
        user_id: Option<i64>,
        user_name: String,
    ) {
        let record = EventComment {
            id: self.next_id(),
            created_at: timestamp(),
            event_id,
            user_id,
            user_name,
            comment,
        };
        self.event_comments.push(record);
    }

    pub fn add_gallery_item(&mut self, base: GalleryRequest) {
        let record = GalleryItem {
            id: self.next_id(),
            created_at: timestamp(),
            base,
        };
        self.gallery.push(record);
    }

    pub fn remove_gallery_item(&mut self, id: i64) {
        self.gallery.retain(|item| item.id != id);
    }

    /// 审批合作伙伴：只翻转匹配记录的状态，重复调用无副作用
    pub fn approve_partner(&mut self, id: i64) {
        if let Some(partner) = self.partners.iter_mut().find(|p| p.id == id) {
            partner.status = PartnerStatus::Approved;
        }
    }
}

// =========================================================
// 组件侧上下文 (Context)
// =========================================================

/// 本地数据上下文
#[derive(Clone, Copy)]
pub struct DataContext {
    pub state: RwSignal<LocalData>,
}

impl DataContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LocalData::default()),
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut LocalData)) {
        self.state.update(f);
    }

    pub fn with<R>(&self, f: impl FnOnce(&LocalData) -> R) -> R {
        self.state.with(f)
    }
}

impl Default for DataContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取本地数据上下文
pub fn use_data() -> DataContext {
    use_context::<DataContext>().expect("DataContext should be provided")
}

#[cfg(test)]
mod tests;
