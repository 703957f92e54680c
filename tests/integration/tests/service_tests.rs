//! Service-level integration tests
//!
//! Drive the real services over the in-memory repositories and check the
//! consistency rules: cached counters track live rows, author snapshots
//! never move, and derived fields come out right.

use alumnet_core::entities::{Invitation, ReactionKind, VoteKind};
use alumnet_core::error::DomainError;
use alumnet_core::traits::InvitationRepository;
use alumnet_core::value_objects::Id;
use alumnet_service::dto::requests::{
    AddExperienceRequest, CreateInvitationRequest, CreateReportDetailRequest,
    CreateReportStageRequest, CreateReportTypeRequest, CreateReportRequest, UpdateCommentRequest,
    UpdateProfileRequest, UpdateProposalRequest, UpdateReportRequest,
};
use alumnet_service::{
    CommentService, InvitationService, PostService, ProfileService, ProposalService,
    ReactionService, ReactionTarget, ReportService, ServiceError,
};
use chrono::{Duration, NaiveDate, Utc};
use integration_tests::{
    comment_request, deadline, invitation_request, memory_context, post_request, profile_request,
    proposal_request, reply_request, MemoryInvitationRepository, ReactionTable,
};

fn parse_id(s: &str) -> Id {
    s.parse().expect("valid id")
}

async fn new_member(ctx: &alumnet_service::ServiceContext) -> Id {
    let profile = ProfileService::new(ctx)
        .create_profile(profile_request())
        .await
        .expect("profile created");
    parse_id(&profile.id)
}

// ============================================================================
// Profiles
// ============================================================================

#[tokio::test]
async fn test_profile_current_position_resolution() {
    let (ctx, _store) = memory_context();
    let profiles = ProfileService::new(&ctx);
    let member = new_member(&ctx).await;

    // No history yet
    let fetched = profiles.get_profile(member).await.unwrap();
    assert_eq!(fetched.current_position, None);

    let start = NaiveDate::from_ymd_opt(2010, 3, 1).unwrap();
    let finished = profiles
        .add_experience(
            member,
            AddExperienceRequest {
                title: "Analyst".to_string(),
                employer: "Initech".to_string(),
                start_date: start,
                end_date: Some(NaiveDate::from_ymd_opt(2015, 6, 30).unwrap()),
            },
        )
        .await
        .unwrap();

    // Latest end date wins when nothing is ongoing
    let fetched = profiles.get_profile(member).await.unwrap();
    assert_eq!(
        fetched.current_position.as_deref(),
        Some("Analyst at Initech")
    );

    let ongoing = profiles
        .add_experience(
            member,
            AddExperienceRequest {
                title: "Engineer".to_string(),
                employer: "Globex".to_string(),
                start_date: NaiveDate::from_ymd_opt(2015, 7, 1).unwrap(),
                end_date: None,
            },
        )
        .await
        .unwrap();
    assert!(ongoing.ongoing);

    // An ongoing entry takes precedence
    let fetched = profiles.get_profile(member).await.unwrap();
    assert_eq!(
        fetched.current_position.as_deref(),
        Some("Engineer at Globex")
    );

    // Back to the finished entry once the ongoing one is removed
    profiles
        .remove_experience(parse_id(&ongoing.id))
        .await
        .unwrap();
    let fetched = profiles.get_profile(member).await.unwrap();
    assert_eq!(
        fetched.current_position.as_deref(),
        Some("Analyst at Initech")
    );

    profiles
        .remove_experience(parse_id(&finished.id))
        .await
        .unwrap();
    let fetched = profiles.get_profile(member).await.unwrap();
    assert_eq!(fetched.current_position, None);
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let (ctx, _store) = memory_context();
    let profiles = ProfileService::new(&ctx);

    let mut first = profile_request();
    first.username = "takenname".to_string();
    profiles.create_profile(first).await.unwrap();

    let mut second = profile_request();
    second.username = "takenname".to_string();
    let err = profiles.create_profile(second).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn test_profile_delete_cascades_owned_content() {
    let (ctx, store) = memory_context();
    let profiles = ProfileService::new(&ctx);
    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);
    let reactions = ReactionService::new(&ctx);
    let proposals = ProposalService::new(&ctx);
    let invitations = InvitationService::new(&ctx);
    let leaver = new_member(&ctx).await;
    let survivor = new_member(&ctx).await;

    // The leaver comments on the survivor's post and the survivor replies,
    // so the reply subtree crosses authors
    let survivor_post = posts.create_post(survivor, post_request()).await.unwrap();
    let survivor_post_id = parse_id(&survivor_post.id);
    let leaver_comment = comments
        .create_comment(survivor_post_id, leaver, comment_request())
        .await
        .unwrap();
    comments
        .create_comment(survivor_post_id, survivor, reply_request(&leaver_comment.id))
        .await
        .unwrap();
    reactions
        .apply_reaction(
            ReactionTarget::Post,
            survivor_post_id,
            leaver,
            ReactionKind::Like,
        )
        .await
        .unwrap();

    let leaver_post = posts.create_post(leaver, post_request()).await.unwrap();
    let leaver_post_id = parse_id(&leaver_post.id);
    comments
        .create_comment(leaver_post_id, survivor, comment_request())
        .await
        .unwrap();

    let proposal = proposals
        .create_proposal(leaver, proposal_request(10))
        .await
        .unwrap();
    let proposal_id = parse_id(&proposal.id);
    proposals
        .cast_vote(proposal_id, survivor, VoteKind::Up)
        .await
        .unwrap();

    let invitation = invitations
        .create_invitation(leaver, invitation_request())
        .await
        .unwrap();

    assert_eq!(store.post_counters(survivor_post_id), Some((1, 0, 2)));

    profiles.delete_profile(leaver).await.unwrap();
    assert!(profiles.get_profile(leaver).await.unwrap_err().is_not_found());

    // Everything the leaver owned is gone, including the survivor's comment
    // and vote hanging off it
    assert!(posts.get_post(leaver_post_id).await.unwrap_err().is_not_found());
    assert_eq!(store.live_comment_rows(leaver_post_id), 0);
    assert!(proposals
        .get_proposal(proposal_id)
        .await
        .unwrap_err()
        .is_not_found());
    assert_eq!(store.live_vote_rows(proposal_id), 0);
    assert!(invitations
        .get_invitation(&invitation.code)
        .await
        .unwrap_err()
        .is_not_found());

    // The survivor's post stands, but the leaver's comment took the
    // cross-author reply with it and the leaver's reaction row is gone
    assert!(posts.get_post(survivor_post_id).await.is_ok());
    assert_eq!(store.live_comment_rows(survivor_post_id), 0);
    assert_eq!(
        store.live_reaction_rows(ReactionTable::Posts, survivor_post_id),
        0
    );
    assert!(comments
        .list_comments(survivor_post_id)
        .await
        .unwrap()
        .is_empty());

    // The storage cascade removes rows only; cached counters on the
    // surviving post keep their pre-delete values
    assert_eq!(store.post_counters(survivor_post_id), Some((1, 0, 2)));
}

// ============================================================================
// Posts and comments
// ============================================================================

#[tokio::test]
async fn test_comment_counters_track_live_rows() {
    let (ctx, store) = memory_context();
    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);
    let author = new_member(&ctx).await;

    let post = posts.create_post(author, post_request()).await.unwrap();
    let post_id = parse_id(&post.id);
    assert_eq!(post.comment_count, 0);

    let root = comments
        .create_comment(post_id, author, comment_request())
        .await
        .unwrap();
    let other = comments
        .create_comment(post_id, author, comment_request())
        .await
        .unwrap();
    let _reply = comments
        .create_comment(post_id, author, reply_request(&root.id))
        .await
        .unwrap();

    // Replies count toward the post total too
    let fetched = posts.get_post(post_id).await.unwrap();
    assert_eq!(fetched.comment_count, 3);
    assert_eq!(store.live_comment_rows(post_id), 3);

    let root_fetched = comments.get_comment(parse_id(&root.id)).await.unwrap();
    assert_eq!(root_fetched.reply_count, 1);

    // Deleting the root takes its reply with it
    let removed = comments.delete_comment(parse_id(&root.id)).await.unwrap();
    assert_eq!(removed, 2);

    let fetched = posts.get_post(post_id).await.unwrap();
    assert_eq!(fetched.comment_count, 1);
    assert_eq!(store.live_comment_rows(post_id), 1);

    let remaining = comments.list_comments(post_id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other.id);
}

#[tokio::test]
async fn test_comment_snapshot_survives_author_rename() {
    let (ctx, _store) = memory_context();
    let profiles = ProfileService::new(&ctx);
    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);
    let author = new_member(&ctx).await;

    let original_name = profiles.get_profile(author).await.unwrap().full_name;

    let post = posts.create_post(author, post_request()).await.unwrap();
    let comment = comments
        .create_comment(parse_id(&post.id), author, comment_request())
        .await
        .unwrap();
    assert_eq!(comment.author_name, original_name);

    profiles
        .update_profile(
            author,
            UpdateProfileRequest {
                full_name: Some("Renamed Member".to_string()),
                phone: None,
                photo: None,
                department: None,
                graduation_year: None,
            },
        )
        .await
        .unwrap();

    // The snapshot keeps the name from comment time
    let fetched = comments.get_comment(parse_id(&comment.id)).await.unwrap();
    assert_eq!(fetched.author_name, original_name);

    // Editing the content does not refresh the snapshot either
    let edited = comments
        .update_comment(
            parse_id(&comment.id),
            author,
            UpdateCommentRequest {
                content: "Edited content".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.content, "Edited content");
    assert_eq!(edited.author_name, original_name);
}

#[tokio::test]
async fn test_reply_must_target_same_post() {
    let (ctx, _store) = memory_context();
    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);
    let author = new_member(&ctx).await;

    let first = posts.create_post(author, post_request()).await.unwrap();
    let second = posts.create_post(author, post_request()).await.unwrap();

    let comment = comments
        .create_comment(parse_id(&first.id), author, comment_request())
        .await
        .unwrap();

    let err = comments
        .create_comment(parse_id(&second.id), author, reply_request(&comment.id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_only_author_may_edit_post() {
    let (ctx, _store) = memory_context();
    let posts = PostService::new(&ctx);
    let author = new_member(&ctx).await;
    let stranger = new_member(&ctx).await;

    let post = posts.create_post(author, post_request()).await.unwrap();
    assert!(!post.edited);

    let err = posts
        .update_post(
            parse_id(&post.id),
            stranger,
            alumnet_service::dto::requests::UpdatePostRequest {
                title: "Hijacked".to_string(),
                content: "Hijacked".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reaction_lifecycle_keeps_counters_consistent() {
    let (ctx, store) = memory_context();
    let posts = PostService::new(&ctx);
    let reactions = ReactionService::new(&ctx);
    let author = new_member(&ctx).await;
    let reactor = new_member(&ctx).await;

    let post = posts.create_post(author, post_request()).await.unwrap();
    let post_id = parse_id(&post.id);

    reactions
        .apply_reaction(ReactionTarget::Post, post_id, reactor, ReactionKind::Like)
        .await
        .unwrap();
    assert_eq!(store.post_counters(post_id), Some((1, 0, 0)));

    // Same kind again is a no-op
    reactions
        .apply_reaction(ReactionTarget::Post, post_id, reactor, ReactionKind::Like)
        .await
        .unwrap();
    assert_eq!(store.post_counters(post_id), Some((1, 0, 0)));
    assert_eq!(store.live_reaction_rows(ReactionTable::Posts, post_id), 1);

    // The other kind replaces, net row count unchanged
    reactions
        .apply_reaction(
            ReactionTarget::Post,
            post_id,
            reactor,
            ReactionKind::Dislike,
        )
        .await
        .unwrap();
    assert_eq!(store.post_counters(post_id), Some((0, 1, 0)));
    assert_eq!(store.live_reaction_rows(ReactionTable::Posts, post_id), 1);

    let counts = reactions
        .live_counts(ReactionTarget::Post, post_id)
        .await
        .unwrap();
    assert_eq!(counts, vec![(ReactionKind::Dislike, 1)]);

    let removed = reactions
        .remove_reaction(ReactionTarget::Post, post_id, reactor)
        .await
        .unwrap();
    assert!(removed);
    assert_eq!(store.post_counters(post_id), Some((0, 0, 0)));
    assert_eq!(store.live_reaction_rows(ReactionTable::Posts, post_id), 0);

    // Nothing left to remove
    let removed = reactions
        .remove_reaction(ReactionTarget::Post, post_id, reactor)
        .await
        .unwrap();
    assert!(!removed);
}

#[tokio::test]
async fn test_comment_reactions_use_their_own_counters() {
    let (ctx, store) = memory_context();
    let posts = PostService::new(&ctx);
    let comments = CommentService::new(&ctx);
    let reactions = ReactionService::new(&ctx);
    let author = new_member(&ctx).await;

    let post = posts.create_post(author, post_request()).await.unwrap();
    let post_id = parse_id(&post.id);
    let comment = comments
        .create_comment(post_id, author, comment_request())
        .await
        .unwrap();
    let comment_id = parse_id(&comment.id);

    reactions
        .apply_reaction(
            ReactionTarget::Comment,
            comment_id,
            author,
            ReactionKind::Like,
        )
        .await
        .unwrap();

    // The post's reaction counters are untouched
    assert_eq!(store.comment_counters(comment_id), Some((1, 0, 0)));
    assert_eq!(store.post_counters(post_id), Some((0, 0, 1)));

    let listed = reactions
        .list_reactions(ReactionTarget::Comment, comment_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].kind, "LIKE");
}

// ============================================================================
// Proposals and votes
// ============================================================================

#[tokio::test]
async fn test_vote_flow_and_derived_score() {
    let (ctx, store) = memory_context();
    let proposals = ProposalService::new(&ctx);
    let author = new_member(&ctx).await;
    let first_voter = new_member(&ctx).await;
    let second_voter = new_member(&ctx).await;

    let proposal = proposals
        .create_proposal(author, proposal_request(5))
        .await
        .unwrap();
    let proposal_id = parse_id(&proposal.id);
    assert_eq!(proposal.status, "ACTIVE");
    assert!(!proposal.expired);

    proposals
        .cast_vote(proposal_id, first_voter, VoteKind::Up)
        .await
        .unwrap();
    proposals
        .cast_vote(proposal_id, second_voter, VoteKind::Down)
        .await
        .unwrap();

    let fetched = proposals.get_proposal(proposal_id).await.unwrap();
    assert_eq!(fetched.upvote_count, 1);
    assert_eq!(fetched.downvote_count, 1);
    assert_eq!(fetched.score, 0);
    assert_eq!(store.live_vote_rows(proposal_id), 2);

    // Switching moves one count across, not two rows
    proposals
        .cast_vote(proposal_id, first_voter, VoteKind::Down)
        .await
        .unwrap();
    let fetched = proposals.get_proposal(proposal_id).await.unwrap();
    assert_eq!(fetched.score, -2);
    assert_eq!(store.live_vote_rows(proposal_id), 2);

    // Re-casting the same kind changes nothing
    proposals
        .cast_vote(proposal_id, first_voter, VoteKind::Down)
        .await
        .unwrap();
    assert_eq!(store.proposal_counters(proposal_id), Some((0, 2)));

    let retracted = proposals
        .retract_vote(proposal_id, first_voter)
        .await
        .unwrap();
    assert!(retracted);
    assert_eq!(store.proposal_counters(proposal_id), Some((0, 1)));

    let retracted = proposals
        .retract_vote(proposal_id, first_voter)
        .await
        .unwrap();
    assert!(!retracted);

    let votes = proposals.list_votes(proposal_id).await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].kind, "DOWN");
}

#[tokio::test]
async fn test_voting_closed_after_deadline() {
    let (ctx, _store) = memory_context();
    let proposals = ProposalService::new(&ctx);
    let author = new_member(&ctx).await;
    let voter = new_member(&ctx).await;

    let proposal = proposals
        .create_proposal(author, proposal_request(-1))
        .await
        .unwrap();
    assert!(proposal.expired);
    assert_eq!(proposal.remaining_days, 0);

    let err = proposals
        .cast_vote(parse_id(&proposal.id), voter, VoteKind::Up)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_proposal_status_set_directly() {
    let (ctx, _store) = memory_context();
    let proposals = ProposalService::new(&ctx);
    let author = new_member(&ctx).await;

    let proposal = proposals
        .create_proposal(author, proposal_request(10))
        .await
        .unwrap();

    let updated = proposals
        .update_proposal(
            parse_id(&proposal.id),
            UpdateProposalRequest {
                title: None,
                description: None,
                status: Some("COMPLETED".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "COMPLETED");

    let err = proposals
        .update_proposal(
            parse_id(&proposal.id),
            UpdateProposalRequest {
                title: None,
                description: None,
                status: Some("NONSENSE".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

// ============================================================================
// Report hierarchy
// ============================================================================

#[tokio::test]
async fn test_report_hierarchy_flow() {
    let (ctx, _store) = memory_context();
    let reports = ReportService::new(&ctx);
    let reporter = new_member(&ctx).await;

    let report_type = reports
        .create_report_type(CreateReportTypeRequest {
            name: "Treasurer report".to_string(),
            description: Some("Quarterly finances".to_string()),
        })
        .await
        .unwrap();
    let type_id = parse_id(&report_type.id);
    assert_eq!(report_type.status, "ACTIVE");

    let draft_stage = reports
        .create_stage(
            type_id,
            CreateReportStageRequest {
                name: "Draft".to_string(),
                stage_order: 1,
            },
        )
        .await
        .unwrap();
    reports
        .create_stage(
            type_id,
            CreateReportStageRequest {
                name: "Review".to_string(),
                stage_order: 2,
            },
        )
        .await
        .unwrap();

    let stages = reports.list_stages(type_id).await.unwrap();
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0].name, "Draft");

    let report = reports
        .create_report(
            type_id,
            reporter,
            CreateReportRequest {
                title: "Q1 finances".to_string(),
                period: Some("2026-Q1".to_string()),
            },
        )
        .await
        .unwrap();
    let report_id = parse_id(&report.id);
    assert_eq!(report.status, "DRAFT");

    let detail = reports
        .create_detail(
            report_id,
            CreateReportDetailRequest {
                stage_id: draft_stage.id.clone(),
                content: "Opening balance reconciled".to_string(),
            },
        )
        .await
        .unwrap();

    let attachment = reports
        .add_attachment(
            parse_id(&detail.id),
            "ledger.pdf".to_string(),
            "https://files.example.com/ledger.pdf".to_string(),
            Some("application/pdf".to_string()),
            Some(52_000),
        )
        .await
        .unwrap();
    assert_eq!(attachment.file_name, "ledger.pdf");

    let updated = reports
        .update_report(
            report_id,
            UpdateReportRequest {
                title: None,
                period: None,
                status: Some("APPROVED".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "APPROVED");

    // Deleting the type takes the whole subtree with it
    reports.delete_report_type(type_id).await.unwrap();
    let err = reports.get_report(report_id).await.unwrap_err();
    assert!(err.is_not_found());
    let attachments = reports.list_attachments(parse_id(&detail.id)).await.unwrap();
    assert!(attachments.is_empty());
}

#[tokio::test]
async fn test_detail_stage_must_match_report_type() {
    let (ctx, _store) = memory_context();
    let reports = ReportService::new(&ctx);
    let reporter = new_member(&ctx).await;

    let first_type = reports
        .create_report_type(CreateReportTypeRequest {
            name: "Events".to_string(),
            description: None,
        })
        .await
        .unwrap();
    let second_type = reports
        .create_report_type(CreateReportTypeRequest {
            name: "Finance".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let foreign_stage = reports
        .create_stage(
            parse_id(&second_type.id),
            CreateReportStageRequest {
                name: "Audit".to_string(),
                stage_order: 1,
            },
        )
        .await
        .unwrap();

    let report = reports
        .create_report(
            parse_id(&first_type.id),
            reporter,
            CreateReportRequest {
                title: "Spring gala".to_string(),
                period: None,
            },
        )
        .await
        .unwrap();

    let err = reports
        .create_detail(
            parse_id(&report.id),
            CreateReportDetailRequest {
                stage_id: foreign_stage.id,
                content: "Misplaced".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

// ============================================================================
// Invitations
// ============================================================================

#[tokio::test]
async fn test_invitation_redeem_until_exhausted() {
    let (ctx, _store) = memory_context();
    let invitations = InvitationService::new(&ctx);
    let inviter = new_member(&ctx).await;

    let invitation = invitations
        .create_invitation(
            inviter,
            CreateInvitationRequest {
                recipients: vec!["friend@example.com".to_string()],
                message: None,
                expires_in_days: Some(30),
                max_uses: Some(2),
            },
        )
        .await
        .unwrap();
    assert_eq!(invitation.remaining_uses, Some(2));
    // The countdown truncates toward zero, so a fresh 30-day window reads
    // as 29 once any time at all has passed
    assert!(matches!(invitation.days_until_expiry, Some(29 | 30)));

    let redeemed = invitations.redeem(&invitation.code).await.unwrap();
    assert_eq!(redeemed.uses, 1);
    let redeemed = invitations.redeem(&invitation.code).await.unwrap();
    assert_eq!(redeemed.remaining_uses, Some(0));

    let err = invitations.redeem(&invitation.code).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvitationExhausted)
    ));
}

#[tokio::test]
async fn test_invitation_unlimited_without_caps() {
    let (ctx, _store) = memory_context();
    let invitations = InvitationService::new(&ctx);
    let inviter = new_member(&ctx).await;

    let invitation = invitations
        .create_invitation(inviter, invitation_request())
        .await
        .unwrap();
    assert_eq!(invitation.remaining_uses, None);
    assert_eq!(invitation.days_until_expiry, None);

    for _ in 0..5 {
        invitations.redeem(&invitation.code).await.unwrap();
    }
    let fetched = invitations.get_invitation(&invitation.code).await.unwrap();
    assert_eq!(fetched.uses, 5);

    let listed = invitations.list_by_inviter(inviter).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_purge_removes_only_expired_invitations() {
    let (ctx, store) = memory_context();
    let invitations = InvitationService::new(&ctx);
    let inviter = new_member(&ctx).await;

    let live = invitations
        .create_invitation(inviter, invitation_request())
        .await
        .unwrap();

    // Plant an already expired invitation directly in the store
    let repo = MemoryInvitationRepository::new(store.clone());
    let mut expired = Invitation::new(
        "EXPIRED1".to_string(),
        inviter,
        vec!["late@example.com".to_string()],
    );
    expired.expires_at = Some(Utc::now() - Duration::days(1));
    repo.create(&expired).await.unwrap();

    let err = invitations.redeem("EXPIRED1").await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvitationExpired)
    ));

    let purged = invitations.purge_expired().await.unwrap();
    assert_eq!(purged, 1);
    assert!(invitations.get_invitation(&live.code).await.is_ok());
    let err = invitations.get_invitation("EXPIRED1").await.unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// Deadline helper sanity
// ============================================================================

#[test]
fn test_deadline_shifts_from_today() {
    let today = Utc::now().date_naive();
    assert!(deadline(5) > today);
    assert!(deadline(-5) < today);
}
