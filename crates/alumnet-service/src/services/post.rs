//! Post service
//!
//! Publishes and maintains news posts. Reaction handling lives in the
//! reaction service; comment counters are maintained by the comment
//! repository.

use alumnet_core::entities::Post;
use alumnet_core::traits::PostQuery;
use alumnet_core::value_objects::Id;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::requests::{CreatePostRequest, UpdatePostRequest};
use crate::dto::responses::PostResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for post listings
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a new post
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Id,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;

        if self
            .ctx
            .profile_repo()
            .find_by_id(author_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Profile", author_id.to_string()));
        }

        let post = Post::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.content,
        );

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");

        Ok(PostResponse::from(&post))
    }

    /// Fetch a single post
    #[instrument(skip(self))]
    pub async fn get_post(&self, id: Id) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", id.to_string()))?;

        Ok(PostResponse::from(&post))
    }

    /// List posts newest first, optionally before a created-at cursor
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        before: Option<DateTime<Utc>>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let query = PostQuery {
            before,
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE),
        };

        let posts = self.ctx.post_repo().list(query).await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// List a member's posts, newest first
    #[instrument(skip(self))]
    pub async fn list_by_author(&self, author_id: Id) -> ServiceResult<Vec<PostResponse>> {
        let posts = self
            .ctx
            .post_repo()
            .find_by_author(author_id, DEFAULT_PAGE_SIZE)
            .await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Edit a post; only the author may edit
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        id: Id,
        editor_id: Id,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate()?;

        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", id.to_string()))?;

        if post.author_id != editor_id {
            return Err(ServiceError::validation("Only the author may edit a post"));
        }

        post.edit(request.title, request.content);
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %id, "Post updated");

        Ok(PostResponse::from(&post))
    }

    /// Delete a post; comments and reactions cascade in storage
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: Id) -> ServiceResult<()> {
        self.ctx.post_repo().delete(id).await?;
        info!(post_id = %id, "Post deleted");
        Ok(())
    }
}
