//! Comment service
//!
//! Creates comments and replies with an author snapshot captured at write
//! time. The comment repository maintains the post and parent counters
//! transactionally; deleting a comment removes its whole reply subtree.

use alumnet_core::entities::Comment;
use alumnet_core::value_objects::Id;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::requests::{CreateCommentRequest, UpdateCommentRequest};
use crate::dto::responses::CommentResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post, optionally as a reply to another comment
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: Id,
        author_id: Id,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", author_id.to_string()))?;

        let comment = match request.parent_id {
            Some(parent_str) => {
                let parent_id: Id = parent_str
                    .parse()
                    .map_err(|_| ServiceError::validation("Invalid parent comment ID"))?;

                let parent = self
                    .ctx
                    .comment_repo()
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Comment", parent_str))?;

                if parent.post_id != post_id {
                    return Err(ServiceError::validation(
                        "Parent comment belongs to a different post",
                    ));
                }

                Comment::new_reply(
                    self.ctx.generate_id(),
                    post_id,
                    parent_id,
                    &author,
                    request.content,
                )
            }
            None => Comment::new(self.ctx.generate_id(), post_id, &author, request.content),
        };

        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            post_id = %post_id,
            reply = comment.is_reply(),
            "Comment created"
        );

        Ok(CommentResponse::from(&comment))
    }

    /// Fetch a single comment
    #[instrument(skip(self))]
    pub async fn get_comment(&self, id: Id) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", id.to_string()))?;

        Ok(CommentResponse::from(&comment))
    }

    /// Top-level comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: Id) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Replies to a comment, oldest first
    #[instrument(skip(self))]
    pub async fn list_replies(&self, parent_id: Id) -> ServiceResult<Vec<CommentResponse>> {
        let replies = self.ctx.comment_repo().find_replies(parent_id).await?;
        Ok(replies.iter().map(CommentResponse::from).collect())
    }

    /// Edit the comment body; the author snapshot is never refreshed
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        id: Id,
        editor_id: Id,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate()?;

        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", id.to_string()))?;

        if comment.author_id != editor_id {
            return Err(ServiceError::validation(
                "Only the author may edit a comment",
            ));
        }

        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        Ok(CommentResponse::from(&comment))
    }

    /// Delete a comment and its reply subtree. Returns the number of
    /// comments removed.
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: Id) -> ServiceResult<u64> {
        let removed = self.ctx.comment_repo().delete(id).await?;
        info!(comment_id = %id, removed, "Comment deleted");
        Ok(removed)
    }
}
