use super::*;

fn booking_input() -> BookingRequest {
    BookingRequest {
        name: "Awa Kone".to_string(),
        email: "awa@ronka.com".to_string(),
        phone: "+22997000000".to_string(),
        event_type: "mariage".to_string(),
        event_date: "2026-10-03".to_string(),
        message: "Décoration incluse ?".to_string(),
    }
}

fn partner_input(name: &str) -> PartnerRequest {
    PartnerRequest {
        name: name.to_string(),
        email: format!("{}@exemple.com", name),
        company: "Traiteur Soleil".to_string(),
        message: "Proposition de partenariat".to_string(),
    }
}

// =========================================================
// 种子数据
// =========================================================

#[test]
fn test_seeds_one_member_and_gallery_entries() {
    let data = LocalData::default();
    assert_eq!(data.members.len(), 1);
    assert_eq!(data.members[0].base.email, "membre@ronka.com");
    assert!(data.gallery.len() >= 2);
    assert!(data.bookings.is_empty());
}

// =========================================================
// 记录创建：唯一 id + 时间戳
// =========================================================

#[test]
fn test_add_stamps_id_and_timestamp() {
    let mut data = LocalData::default();
    data.add_booking(booking_input());

    let booking = &data.bookings[0];
    assert!(booking.id > 0);
    assert!(!booking.created_at.is_empty());
    assert_eq!(booking.base, booking_input());
}

#[test]
fn test_ids_are_unique_even_within_one_millisecond() {
    let mut data = LocalData::default();
    for _ in 0..50 {
        data.add_donation(DonationRequest {
            name: "Don".to_string(),
            email: "don@ronka.com".to_string(),
            amount: 25.0,
            payment_method: "momo".to_string(),
            payment_details: "97xx".to_string(),
        });
    }
    let mut ids: Vec<i64> = data.donations.iter().map(|d| d.id).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_ids_unique_across_collections() {
    let mut data = LocalData::default();
    data.add_booking(booking_input());
    data.add_partner(partner_input("alpha"));
    data.add_event(EventRequest {
        title: "Kermesse".to_string(),
        description: "Journée portes ouvertes".to_string(),
        event_date: "2026-11-11".to_string(),
        location: "Cotonou".to_string(),
    });
    let booking_id = data.bookings[0].id;
    let partner_id = data.partners[0].id;
    let event_id = data.events[0].id;
    assert_ne!(booking_id, partner_id);
    assert_ne!(partner_id, event_id);
}

// =========================================================
// 会员
// =========================================================

#[test]
fn test_member_password_defaults_to_ronka_plus_id_tail() {
    let mut data = LocalData::default();
    data.add_member(
        MemberRequest {
            name: "Nouveau".to_string(),
            email: "nouveau@ronka.com".to_string(),
            username: "nouveau".to_string(),
        },
        None,
    );
    let member = data.members.last().unwrap();
    let digits = member.id.to_string();
    let tail = &digits[digits.len() - 4..];
    assert_eq!(member.password, format!("ronka{}", tail));
}

#[test]
fn test_member_explicit_password_is_kept() {
    let mut data = LocalData::default();
    data.add_member(
        MemberRequest {
            name: "N".to_string(),
            email: "n@ronka.com".to_string(),
            username: "n".to_string(),
        },
        Some("secret".to_string()),
    );
    assert_eq!(data.members.last().unwrap().password, "secret");
}

#[test]
fn test_remove_member_removes_exactly_the_matching_id() {
    let mut data = LocalData::default();
    data.add_member(
        MemberRequest {
            name: "A".to_string(),
            email: "a@ronka.com".to_string(),
            username: "a".to_string(),
        },
        None,
    );
    let seeded = data.members[0].id;
    let added = data.members[1].id;

    data.remove_member(added);
    assert_eq!(data.members.len(), 1);
    assert_eq!(data.members[0].id, seeded);

    // id 不存在时为 no-op
    data.remove_member(999_999);
    assert_eq!(data.members.len(), 1);
}

// =========================================================
// 画廊
// =========================================================

#[test]
fn test_remove_gallery_item_leaves_others_untouched() {
    let mut data = LocalData::default();
    let victim = data.gallery[0].id;
    let survivors: Vec<i64> = data.gallery[1..].iter().map(|g| g.id).collect();

    data.remove_gallery_item(victim);
    let remaining: Vec<i64> = data.gallery.iter().map(|g| g.id).collect();
    assert_eq!(remaining, survivors);

    data.remove_gallery_item(victim);
    assert_eq!(data.gallery.len(), survivors.len());
}

// =========================================================
// 合作伙伴审批
// =========================================================

#[test]
fn test_approve_partner_only_touches_the_match_and_is_idempotent() {
    let mut data = LocalData::default();
    data.add_partner(partner_input("alpha"));
    data.add_partner(partner_input("beta"));
    let alpha = data.partners[0].id;

    assert_eq!(data.partners[0].status, PartnerStatus::Pending);

    data.approve_partner(alpha);
    assert_eq!(data.partners[0].status, PartnerStatus::Approved);
    assert_eq!(data.partners[1].status, PartnerStatus::Pending);

    // 重复审批无副作用
    data.approve_partner(alpha);
    assert_eq!(data.partners[0].status, PartnerStatus::Approved);
    assert_eq!(data.partners[1].status, PartnerStatus::Pending);

    // 不存在的 id 为 no-op
    data.approve_partner(123_456);
    assert_eq!(data.partners[1].status, PartnerStatus::Pending);
}

// =========================================================
// 活动
// =========================================================

#[test]
fn test_event_assignment_and_comment_are_stamped() {
    let mut data = LocalData::default();
    data.assign_member_to_event(10, 20);
    data.add_event_comment(10, "Très réussi".to_string(), Some(5), "Awa".to_string());

    let assignment = &data.event_assignments[0];
    assert_eq!((assignment.event_id, assignment.member_id), (10, 20));
    assert!(!assignment.created_at.is_empty());

    let comment = &data.event_comments[0];
    assert_eq!(comment.event_id, 10);
    assert_eq!(comment.user_name, "Awa");
    assert!(!comment.created_at.is_empty());
    assert_ne!(assignment.id, comment.id);
}
