use sqlx::PgPool;
use storage::dto::notice::CreateNoticeRequest;
use storage::models::Notice;
use storage::repository::notice::NoticeRepository;
use uuid::Uuid;

use crate::actor::Actor;
use crate::error::WebResult;
use crate::policy;

/// List public notices, newest first, capped by the caller
pub async fn list_public_notices(pool: &PgPool, limit: i64) -> WebResult<Vec<Notice>> {
    let repo = NoticeRepository::new(pool);
    Ok(repo.list_public(limit).await?)
}

/// Read one notice; targeted notices are gated to their target user and admins
pub async fn get_notice(pool: &PgPool, id: Uuid, actor: &Actor) -> WebResult<Notice> {
    let notice = NoticeRepository::new(pool).find_by_id(id).await?;

    policy::ensure_can_view_notice(actor, &notice)?;

    Ok(notice)
}

/// Publish a notice; admins only
pub async fn publish_notice(
    pool: &PgPool,
    actor: &Actor,
    req: &CreateNoticeRequest,
) -> WebResult<Notice> {
    policy::require_admin(actor)?;

    let notice = NoticeRepository::new(pool).create(req).await?;

    tracing::info!(notice_id = %notice.notice_id, is_public = notice.is_public, "Notice published");

    Ok(notice)
}

/// List every notice; admins only
pub async fn list_all_notices(pool: &PgPool, actor: &Actor) -> WebResult<Vec<Notice>> {
    policy::require_admin(actor)?;

    let repo = NoticeRepository::new(pool);
    Ok(repo.list().await?)
}
