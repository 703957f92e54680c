//! PostgreSQL implementation of CommentRepository
//!
//! Comment writes maintain the cached counters on the owning post (and, for
//! replies, the parent comment) inside the same transaction as the row
//! change. Decrements clamp at zero.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use alumnet_core::entities::Comment;
use alumnet_core::traits::{CommentRepository, RepoResult};
use alumnet_core::value_objects::Id;

use crate::mappers::CommentInsert;
use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

const COMMENT_COLUMNS: &str = "id, post_id, parent_id, author_id, author_name, author_photo, \
                               author_department, author_graduation_year, content, like_count, \
                               dislike_count, reply_count, created_at, updated_at";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE post_id = $1 AND parent_id IS NULL ORDER BY created_at"
        ))
        .bind(post_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_replies(&self, parent_id: Id) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE parent_id = $1 ORDER BY created_at"
        ))
        .bind(parent_id.into_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let insert = CommentInsert::new(comment);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, parent_id, author_id, author_name, author_photo,
                                  author_department, author_graduation_year, content,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(insert.id)
        .bind(insert.post_id)
        .bind(insert.parent_id)
        .bind(insert.author_id)
        .bind(insert.author_name)
        .bind(insert.author_photo)
        .bind(insert.author_department)
        .bind(insert.author_graduation_year)
        .bind(insert.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("UPDATE posts SET comment_count = comment_count + 1 WHERE id = $1")
            .bind(insert.post_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if let Some(parent_id) = insert.parent_id {
            sqlx::query("UPDATE comments SET reply_count = reply_count + 1 WHERE id = $1")
                .bind(parent_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        // The author snapshot columns are never rewritten
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET content = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(comment.id.into_uuid())
        .bind(&comment.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let Some((post_id, parent_id)) = sqlx::query_as::<_, (Uuid, Option<Uuid>)>(
            "SELECT post_id, parent_id FROM comments WHERE id = $1",
        )
        .bind(id.into_uuid())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        else {
            return Err(comment_not_found(id));
        };

        // Delete the comment and its full reply subtree
        let result = sqlx::query(
            r#"
            WITH RECURSIVE tree AS (
                SELECT id FROM comments WHERE id = $1
                UNION ALL
                SELECT c.id FROM comments c JOIN tree t ON c.parent_id = t.id
            )
            DELETE FROM comments WHERE id IN (SELECT id FROM tree)
            "#,
        )
        .bind(id.into_uuid())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let removed = result.rows_affected();
        let removed_i32 = i32::try_from(removed).unwrap_or(i32::MAX);

        sqlx::query(
            "UPDATE posts SET comment_count = GREATEST(comment_count - $2, 0) WHERE id = $1",
        )
        .bind(post_id)
        .bind(removed_i32)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if let Some(parent_id) = parent_id {
            sqlx::query(
                "UPDATE comments SET reply_count = GREATEST(reply_count - 1, 0) WHERE id = $1",
            )
            .bind(parent_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(removed)
    }
}
