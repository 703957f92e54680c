//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Derived fields (score, remaining days, current position) are computed
//! here so the stored counters and the derived values stay distinct.

use alumnet_core::entities::{
    Comment, Invitation, Post, Profile, Proposal, Reaction, Report, ReportAttachment,
    ReportDetail, ReportStage, ReportType, Vote, WorkExperience,
};

use super::responses::{
    CommentResponse, InvitationResponse, PostResponse, ProfileResponse, ProposalResponse,
    ReactionResponse, ReportAttachmentResponse, ReportDetailResponse, ReportResponse,
    ReportStageResponse, ReportTypeResponse, VoteResponse, WorkExperienceResponse,
};

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            full_name: profile.full_name.clone(),
            photo: profile.photo.clone(),
            department: profile.department.clone(),
            graduation_year: profile.graduation_year,
            current_position: None,
            created_at: profile.created_at,
        }
    }
}

impl ProfileResponse {
    /// Attach the position resolved from the member's work history
    pub fn with_current_position(mut self, position: Option<String>) -> Self {
        self.current_position = position;
        self
    }
}

impl From<&WorkExperience> for WorkExperienceResponse {
    fn from(experience: &WorkExperience) -> Self {
        Self {
            id: experience.id.to_string(),
            title: experience.title.clone(),
            employer: experience.employer.clone(),
            start_date: experience.start_date,
            end_date: experience.end_date,
            ongoing: experience.ongoing,
        }
    }
}

// ============================================================================
// Post and Comment Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            like_count: post.like_count,
            dislike_count: post.dislike_count,
            comment_count: post.comment_count,
            edited: post.is_edited(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            parent_id: comment.parent_id.map(|id| id.to_string()),
            author_id: comment.author_id.to_string(),
            author_name: comment.author.name.clone(),
            author_photo: comment.author.photo.clone(),
            author_department: comment.author.department.clone(),
            author_graduation_year: comment.author.graduation_year,
            content: comment.content.clone(),
            like_count: comment.like_count,
            dislike_count: comment.dislike_count,
            reply_count: comment.reply_count,
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            user_id: reaction.user_id.to_string(),
            user_name: reaction.user_name.clone(),
            kind: reaction.kind.as_str().to_string(),
            created_at: reaction.created_at,
        }
    }
}

// ============================================================================
// Proposal Mappers
// ============================================================================

impl From<&Proposal> for ProposalResponse {
    fn from(proposal: &Proposal) -> Self {
        Self {
            id: proposal.id.to_string(),
            author_id: proposal.author_id.to_string(),
            title: proposal.title.clone(),
            description: proposal.description.clone(),
            status: proposal.status.as_str().to_string(),
            deadline: proposal.deadline,
            upvote_count: proposal.upvote_count,
            downvote_count: proposal.downvote_count,
            score: proposal.score(),
            remaining_days: proposal.remaining_days(),
            expired: proposal.is_expired(),
            created_at: proposal.created_at,
        }
    }
}

impl From<Proposal> for ProposalResponse {
    fn from(proposal: Proposal) -> Self {
        Self::from(&proposal)
    }
}

impl From<&Vote> for VoteResponse {
    fn from(vote: &Vote) -> Self {
        Self {
            user_id: vote.user_id.to_string(),
            kind: vote.kind.as_str().to_string(),
            created_at: vote.created_at,
        }
    }
}

// ============================================================================
// Report Mappers
// ============================================================================

impl From<&ReportType> for ReportTypeResponse {
    fn from(report_type: &ReportType) -> Self {
        Self {
            id: report_type.id.to_string(),
            name: report_type.name.clone(),
            description: report_type.description.clone(),
            status: report_type.status.as_str().to_string(),
            created_at: report_type.created_at,
        }
    }
}

impl From<&ReportStage> for ReportStageResponse {
    fn from(stage: &ReportStage) -> Self {
        Self {
            id: stage.id.to_string(),
            report_type_id: stage.report_type_id.to_string(),
            name: stage.name.clone(),
            stage_order: stage.stage_order,
            status: stage.status.as_str().to_string(),
        }
    }
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.to_string(),
            report_type_id: report.report_type_id.to_string(),
            reporter_id: report.reporter_id.to_string(),
            title: report.title.clone(),
            period: report.period.clone(),
            status: report.status.as_str().to_string(),
            created_at: report.created_at,
            updated_at: report.updated_at,
        }
    }
}

impl From<&ReportDetail> for ReportDetailResponse {
    fn from(detail: &ReportDetail) -> Self {
        Self {
            id: detail.id.to_string(),
            report_id: detail.report_id.to_string(),
            stage_id: detail.stage_id.to_string(),
            content: detail.content.clone(),
            status: detail.status.as_str().to_string(),
            created_at: detail.created_at,
        }
    }
}

impl From<&ReportAttachment> for ReportAttachmentResponse {
    fn from(attachment: &ReportAttachment) -> Self {
        Self {
            id: attachment.id.to_string(),
            detail_id: attachment.detail_id.to_string(),
            file_name: attachment.file_name.clone(),
            url: attachment.url.clone(),
            content_type: attachment.content_type.clone(),
            size: attachment.size,
        }
    }
}

// ============================================================================
// Invitation Mappers
// ============================================================================

impl From<&Invitation> for InvitationResponse {
    fn from(invitation: &Invitation) -> Self {
        Self {
            code: invitation.code.clone(),
            inviter_id: invitation.inviter_id.to_string(),
            recipients: invitation.recipients.clone(),
            message: invitation.message.clone(),
            uses: invitation.uses,
            max_uses: invitation.max_uses,
            remaining_uses: invitation.remaining_uses(),
            expires_at: invitation.expires_at,
            days_until_expiry: invitation.days_until_expiry(),
            created_at: invitation.created_at,
        }
    }
}
