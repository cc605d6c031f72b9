//! Authorization policy: stateless predicates over (actor, resource).
//!
//! Every admin gate is the single check `actor.is_admin()`; management
//! endpoints share no other condition.

use storage::models::{Notice, Registration};

use crate::actor::Actor;
use crate::error::{WebError, WebResult};

pub fn require_admin(actor: &Actor) -> WebResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(WebError::Unauthorized)
    }
}

/// A registration is visible to its owning user and to admins. Anonymous
/// registrations have no owner, so only admins can read them back.
pub fn can_view_registration(actor: &Actor, registration: &Registration) -> bool {
    if actor.is_admin() {
        return true;
    }

    match (actor.user_id(), registration.user_id) {
        (Some(actor_id), Some(owner_id)) => actor_id == owner_id,
        _ => false,
    }
}

pub fn ensure_can_view_registration(actor: &Actor, registration: &Registration) -> WebResult<()> {
    if can_view_registration(actor, registration) {
        Ok(())
    } else {
        Err(WebError::Unauthorized)
    }
}

/// Public notices are visible to anyone; targeted notices only to their
/// target user and to admins.
pub fn can_view_notice(actor: &Actor, notice: &Notice) -> bool {
    if notice.is_public || actor.is_admin() {
        return true;
    }

    match (actor.user_id(), notice.user_id) {
        (Some(actor_id), Some(target_id)) => actor_id == target_id,
        _ => false,
    }
}

pub fn ensure_can_view_notice(actor: &Actor, notice: &Notice) -> WebResult<()> {
    if can_view_notice(actor, notice) {
        Ok(())
    } else {
        Err(WebError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(user_id: Uuid) -> Actor {
        Actor::User {
            user_id,
            username: "someone".to_string(),
            is_admin: false,
        }
    }

    fn admin() -> Actor {
        Actor::User {
            user_id: Uuid::new_v4(),
            username: "admin".to_string(),
            is_admin: true,
        }
    }

    fn registration(user_id: Option<Uuid>) -> Registration {
        Registration {
            registration_id: Uuid::new_v4(),
            competition_id: Uuid::new_v4(),
            user_id,
            form_data: "{}".to_string(),
            status: "pending".to_string(),
            created_at: "2026-08-01T00:00:00".parse().unwrap(),
        }
    }

    fn notice(is_public: bool, user_id: Option<Uuid>) -> Notice {
        Notice {
            notice_id: Uuid::new_v4(),
            title: "title".to_string(),
            content: "content".to_string(),
            publish_date: "2026-08-01T00:00:00".parse().unwrap(),
            is_public,
            user_id,
        }
    }

    #[test]
    fn admin_gate_admits_only_admins() {
        assert!(require_admin(&admin()).is_ok());
        assert!(require_admin(&user(Uuid::new_v4())).is_err());
        assert!(require_admin(&Actor::Anonymous).is_err());
    }

    #[test]
    fn registration_visible_to_owner_and_admin_only() {
        let owner = Uuid::new_v4();
        let reg = registration(Some(owner));

        assert!(can_view_registration(&user(owner), &reg));
        assert!(can_view_registration(&admin(), &reg));
        assert!(!can_view_registration(&user(Uuid::new_v4()), &reg));
        assert!(!can_view_registration(&Actor::Anonymous, &reg));
    }

    #[test]
    fn anonymous_registration_visible_to_admin_only() {
        let reg = registration(None);

        assert!(can_view_registration(&admin(), &reg));
        assert!(!can_view_registration(&user(Uuid::new_v4()), &reg));
        assert!(!can_view_registration(&Actor::Anonymous, &reg));
    }

    #[test]
    fn public_notice_visible_to_everyone() {
        let n = notice(true, None);

        assert!(can_view_notice(&Actor::Anonymous, &n));
        assert!(can_view_notice(&user(Uuid::new_v4()), &n));
        assert!(can_view_notice(&admin(), &n));
    }

    #[test]
    fn targeted_notice_visible_to_target_and_admin_only() {
        let target = Uuid::new_v4();
        let n = notice(false, Some(target));

        assert!(can_view_notice(&user(target), &n));
        assert!(can_view_notice(&admin(), &n));
        assert!(!can_view_notice(&user(Uuid::new_v4()), &n));
        assert!(!can_view_notice(&Actor::Anonymous, &n));
    }

    #[test]
    fn untargeted_private_notice_visible_to_admin_only() {
        let n = notice(false, None);

        assert!(can_view_notice(&admin(), &n));
        assert!(!can_view_notice(&user(Uuid::new_v4()), &n));
        assert!(!can_view_notice(&Actor::Anonymous, &n));
    }
}
