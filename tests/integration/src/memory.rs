//! In-memory repository implementations
//!
//! A single shared [`MemoryStore`] backs every repository so cross-entity
//! effects (cached counters, cascading deletes) behave like the SQL layer.
//! Mutex-guarded maps stand in for tables; each repository method takes the
//! locks it needs and applies the whole effect before releasing them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use alumnet_core::entities::{
    Comment, Invitation, Post, Profile, Proposal, Reaction, ReactionKind, Report,
    ReportAttachment, ReportDetail, ReportStage, ReportType, Vote, VoteKind, WorkExperience,
};
use alumnet_core::error::DomainError;
use alumnet_core::traits::{
    CommentRepository, InvitationRepository, PostQuery, PostRepository, ProfileRepository,
    ProposalRepository, ReactionRepository, RepoResult, ReportAttachmentRepository,
    ReportDetailRepository, ReportRepository, ReportStageRepository, ReportTypeRepository,
    VoteRepository,
};
use alumnet_core::value_objects::Id;
use alumnet_service::ServiceContext;

/// Shared backing store for all in-memory repositories
#[derive(Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<Id, Profile>>,
    experiences: Mutex<Vec<WorkExperience>>,
    posts: Mutex<HashMap<Id, Post>>,
    comments: Mutex<HashMap<Id, Comment>>,
    post_reactions: Mutex<HashMap<(Id, Id), Reaction>>,
    comment_reactions: Mutex<HashMap<(Id, Id), Reaction>>,
    proposals: Mutex<HashMap<Id, Proposal>>,
    votes: Mutex<HashMap<(Id, Id), Vote>>,
    report_types: Mutex<HashMap<Id, ReportType>>,
    report_stages: Mutex<HashMap<Id, ReportStage>>,
    reports: Mutex<HashMap<Id, Report>>,
    report_details: Mutex<HashMap<Id, ReportDetail>>,
    report_attachments: Mutex<HashMap<Id, ReportAttachment>>,
    invitations: Mutex<HashMap<String, Invitation>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Read a post's cached counters: (like, dislike, comment)
    pub fn post_counters(&self, post_id: Id) -> Option<(i32, i32, i32)> {
        self.posts
            .lock()
            .get(&post_id)
            .map(|p| (p.like_count, p.dislike_count, p.comment_count))
    }

    /// Read a comment's cached counters: (like, dislike, reply)
    pub fn comment_counters(&self, comment_id: Id) -> Option<(i32, i32, i32)> {
        self.comments
            .lock()
            .get(&comment_id)
            .map(|c| (c.like_count, c.dislike_count, c.reply_count))
    }

    /// Read a proposal's cached counters: (upvote, downvote)
    pub fn proposal_counters(&self, proposal_id: Id) -> Option<(i32, i32)> {
        self.proposals
            .lock()
            .get(&proposal_id)
            .map(|p| (p.upvote_count, p.downvote_count))
    }

    /// Count live reaction rows on a parent, for cross-checking the cache
    pub fn live_reaction_rows(&self, table: ReactionTable, parent_id: Id) -> usize {
        let rows = match table {
            ReactionTable::Posts => self.post_reactions.lock(),
            ReactionTable::Comments => self.comment_reactions.lock(),
        };
        rows.values().filter(|r| r.parent_id == parent_id).count()
    }

    /// Count live comment rows under a post
    pub fn live_comment_rows(&self, post_id: Id) -> usize {
        self.comments
            .lock()
            .values()
            .filter(|c| c.post_id == post_id)
            .count()
    }

    /// Count live vote rows on a proposal
    pub fn live_vote_rows(&self, proposal_id: Id) -> usize {
        self.votes
            .lock()
            .values()
            .filter(|v| v.proposal_id == proposal_id)
            .count()
    }
}

fn clamped_counter_add(counter: &mut i32, delta: i32) {
    *counter = (*counter + delta).max(0);
}

// ============================================================================
// Profiles
// ============================================================================

pub struct MemoryProfileRepository {
    store: Arc<MemoryStore>,
}

impl MemoryProfileRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Profile>> {
        Ok(self.store.profiles.lock().get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Profile>> {
        Ok(self
            .store
            .profiles
            .lock()
            .values()
            .find(|p| p.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        Ok(self
            .store
            .profiles
            .lock()
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .store
            .profiles
            .lock()
            .values()
            .any(|p| p.email == email))
    }

    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        let mut profiles = self.store.profiles.lock();
        if profiles.values().any(|p| p.username == profile.username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        if profiles.values().any(|p| p.email == profile.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if let Some(phone) = &profile.phone {
            if profiles.values().any(|p| p.phone.as_ref() == Some(phone)) {
                return Err(DomainError::PhoneAlreadyExists);
            }
        }
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let mut profiles = self.store.profiles.lock();
        if !profiles.contains_key(&profile.id) {
            return Err(DomainError::ProfileNotFound(profile.id));
        }
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        if self.store.profiles.lock().remove(&id).is_none() {
            return Err(DomainError::ProfileNotFound(id));
        }
        self.store
            .experiences
            .lock()
            .retain(|w| w.profile_id != id);

        // Mirror the schema's ON DELETE CASCADE chain: rows referencing the
        // profile drop out, and their own children follow. Like the SQL
        // cascade, this removes rows only; cached counters on surviving
        // parents are not revisited.
        let removed_posts: Vec<Id> = {
            let mut posts = self.store.posts.lock();
            let ids: Vec<Id> = posts
                .values()
                .filter(|p| p.author_id == id)
                .map(|p| p.id)
                .collect();
            for post_id in &ids {
                posts.remove(post_id);
            }
            ids
        };

        let removed_comments: Vec<Id> = {
            let mut comments = self.store.comments.lock();
            let mut queue: Vec<Id> = comments
                .values()
                .filter(|c| c.author_id == id || removed_posts.contains(&c.post_id))
                .map(|c| c.id)
                .collect();
            let mut removed = Vec::new();
            while let Some(comment_id) = queue.pop() {
                if comments.remove(&comment_id).is_some() {
                    removed.push(comment_id);
                    queue.extend(
                        comments
                            .values()
                            .filter(|c| c.parent_id == Some(comment_id))
                            .map(|c| c.id),
                    );
                }
            }
            removed
        };

        self.store
            .post_reactions
            .lock()
            .retain(|_, r| r.user_id != id && !removed_posts.contains(&r.parent_id));
        self.store
            .comment_reactions
            .lock()
            .retain(|_, r| r.user_id != id && !removed_comments.contains(&r.parent_id));

        let removed_proposals: Vec<Id> = {
            let mut proposals = self.store.proposals.lock();
            let ids: Vec<Id> = proposals
                .values()
                .filter(|p| p.author_id == id)
                .map(|p| p.id)
                .collect();
            for proposal_id in &ids {
                proposals.remove(proposal_id);
            }
            ids
        };
        self.store
            .votes
            .lock()
            .retain(|_, v| v.user_id != id && !removed_proposals.contains(&v.proposal_id));

        let removed_reports: Vec<Id> = {
            let mut reports = self.store.reports.lock();
            let ids: Vec<Id> = reports
                .values()
                .filter(|r| r.reporter_id == id)
                .map(|r| r.id)
                .collect();
            for report_id in &ids {
                reports.remove(report_id);
            }
            ids
        };
        let removed_details: Vec<Id> = {
            let mut details = self.store.report_details.lock();
            let ids: Vec<Id> = details
                .values()
                .filter(|d| removed_reports.contains(&d.report_id))
                .map(|d| d.id)
                .collect();
            for detail_id in &ids {
                details.remove(detail_id);
            }
            ids
        };
        self.store
            .report_attachments
            .lock()
            .retain(|_, a| !removed_details.contains(&a.detail_id));

        self.store.invitations.lock().retain(|_, i| i.inviter_id != id);
        Ok(())
    }

    async fn find_experiences(&self, profile_id: Id) -> RepoResult<Vec<WorkExperience>> {
        Ok(self
            .store
            .experiences
            .lock()
            .iter()
            .filter(|w| w.profile_id == profile_id)
            .cloned()
            .collect())
    }

    async fn add_experience(&self, experience: &WorkExperience) -> RepoResult<()> {
        self.store.experiences.lock().push(experience.clone());
        Ok(())
    }

    async fn remove_experience(&self, id: Id) -> RepoResult<()> {
        self.store.experiences.lock().retain(|w| w.id != id);
        Ok(())
    }
}

// ============================================================================
// Posts
// ============================================================================

pub struct MemoryPostRepository {
    store: Arc<MemoryStore>,
}

impl MemoryPostRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Post>> {
        Ok(self.store.posts.lock().get(&id).cloned())
    }

    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .store
            .posts
            .lock()
            .values()
            .filter(|p| query.before.is_none_or(|before| p.created_at < before))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(usize::try_from(query.limit.clamp(1, 100)).unwrap_or(100));
        Ok(posts)
    }

    async fn find_by_author(&self, author_id: Id, limit: i64) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .store
            .posts
            .lock()
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(usize::try_from(limit.max(1)).unwrap_or(usize::MAX));
        Ok(posts)
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.store.posts.lock().insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut posts = self.store.posts.lock();
        let Some(existing) = posts.get_mut(&post.id) else {
            return Err(DomainError::PostNotFound(post.id));
        };
        // Counters stay owned by the reaction/comment paths
        existing.title = post.title.clone();
        existing.content = post.content.clone();
        existing.updated_at = post.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        if self.store.posts.lock().remove(&id).is_none() {
            return Err(DomainError::PostNotFound(id));
        }
        let removed_comments: Vec<Id> = {
            let mut comments = self.store.comments.lock();
            let ids: Vec<Id> = comments
                .values()
                .filter(|c| c.post_id == id)
                .map(|c| c.id)
                .collect();
            comments.retain(|_, c| c.post_id != id);
            ids
        };
        self.store
            .post_reactions
            .lock()
            .retain(|_, r| r.parent_id != id);
        self.store
            .comment_reactions
            .lock()
            .retain(|_, r| !removed_comments.contains(&r.parent_id));
        Ok(())
    }
}

// ============================================================================
// Comments
// ============================================================================

pub struct MemoryCommentRepository {
    store: Arc<MemoryStore>,
}

impl MemoryCommentRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Comment>> {
        Ok(self.store.comments.lock().get(&id).cloned())
    }

    async fn find_by_post(&self, post_id: Id) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .store
            .comments
            .lock()
            .values()
            .filter(|c| c.post_id == post_id && c.parent_id.is_none())
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    async fn find_replies(&self, parent_id: Id) -> RepoResult<Vec<Comment>> {
        let mut replies: Vec<Comment> = self
            .store
            .comments
            .lock()
            .values()
            .filter(|c| c.parent_id == Some(parent_id))
            .cloned()
            .collect();
        replies.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(replies)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.store.comments.lock();
        let mut posts = self.store.posts.lock();

        let Some(post) = posts.get_mut(&comment.post_id) else {
            return Err(DomainError::PostNotFound(comment.post_id));
        };
        if let Some(parent_id) = comment.parent_id {
            let Some(parent) = comments.get_mut(&parent_id) else {
                return Err(DomainError::CommentNotFound(parent_id));
            };
            clamped_counter_add(&mut parent.reply_count, 1);
        }
        clamped_counter_add(&mut post.comment_count, 1);
        comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut comments = self.store.comments.lock();
        let Some(existing) = comments.get_mut(&comment.id) else {
            return Err(DomainError::CommentNotFound(comment.id));
        };
        // Only the content moves; the author snapshot is immutable
        existing.content = comment.content.clone();
        existing.updated_at = comment.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<u64> {
        let mut comments = self.store.comments.lock();
        let Some(root) = comments.get(&id).cloned() else {
            return Err(DomainError::CommentNotFound(id));
        };

        // Walk the reply subtree breadth-first
        let mut to_remove = vec![id];
        let mut frontier = vec![id];
        while !frontier.is_empty() {
            let next: Vec<Id> = comments
                .values()
                .filter(|c| c.parent_id.is_some_and(|p| frontier.contains(&p)))
                .map(|c| c.id)
                .collect();
            to_remove.extend(&next);
            frontier = next;
        }
        for cid in &to_remove {
            comments.remove(cid);
        }

        let removed = to_remove.len() as u64;
        let removed_i32 = i32::try_from(removed).unwrap_or(i32::MAX);

        if let Some(post) = self.store.posts.lock().get_mut(&root.post_id) {
            clamped_counter_add(&mut post.comment_count, -removed_i32);
        }
        if let Some(parent_id) = root.parent_id {
            if let Some(parent) = comments.get_mut(&parent_id) {
                clamped_counter_add(&mut parent.reply_count, -1);
            }
        }
        self.store
            .comment_reactions
            .lock()
            .retain(|_, r| !to_remove.contains(&r.parent_id));

        Ok(removed)
    }
}

// ============================================================================
// Reactions
// ============================================================================

/// Which reaction table a repository instance serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTable {
    Posts,
    Comments,
}

pub struct MemoryReactionRepository {
    store: Arc<MemoryStore>,
    table: ReactionTable,
}

impl MemoryReactionRepository {
    pub fn for_posts(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            table: ReactionTable::Posts,
        }
    }

    pub fn for_comments(store: Arc<MemoryStore>) -> Self {
        Self {
            store,
            table: ReactionTable::Comments,
        }
    }

    fn rows(&self) -> &Mutex<HashMap<(Id, Id), Reaction>> {
        match self.table {
            ReactionTable::Posts => &self.store.post_reactions,
            ReactionTable::Comments => &self.store.comment_reactions,
        }
    }

    /// Adjust a kind's cached counter on the parent, clamped at zero
    fn bump_counter(&self, parent_id: Id, kind: ReactionKind, delta: i32) {
        match self.table {
            ReactionTable::Posts => {
                if let Some(post) = self.store.posts.lock().get_mut(&parent_id) {
                    match kind {
                        ReactionKind::Like => clamped_counter_add(&mut post.like_count, delta),
                        ReactionKind::Dislike => {
                            clamped_counter_add(&mut post.dislike_count, delta);
                        }
                    }
                }
            }
            ReactionTable::Comments => {
                if let Some(comment) = self.store.comments.lock().get_mut(&parent_id) {
                    match kind {
                        ReactionKind::Like => clamped_counter_add(&mut comment.like_count, delta),
                        ReactionKind::Dislike => {
                            clamped_counter_add(&mut comment.dislike_count, delta);
                        }
                    }
                }
            }
        }
    }
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepository {
    async fn find(&self, parent_id: Id, user_id: Id) -> RepoResult<Option<Reaction>> {
        Ok(self.rows().lock().get(&(parent_id, user_id)).cloned())
    }

    async fn find_by_parent(&self, parent_id: Id) -> RepoResult<Vec<Reaction>> {
        let mut reactions: Vec<Reaction> = self
            .rows()
            .lock()
            .values()
            .filter(|r| r.parent_id == parent_id)
            .cloned()
            .collect();
        reactions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(reactions)
    }

    async fn insert(&self, reaction: &Reaction) -> RepoResult<()> {
        {
            let mut rows = self.rows().lock();
            let key = (reaction.parent_id, reaction.user_id);
            if rows.contains_key(&key) {
                return Err(DomainError::ReactionAlreadyExists);
            }
            rows.insert(key, reaction.clone());
        }
        self.bump_counter(reaction.parent_id, reaction.kind, 1);
        Ok(())
    }

    async fn switch(
        &self,
        parent_id: Id,
        user_id: Id,
        from: ReactionKind,
        to: ReactionKind,
    ) -> RepoResult<()> {
        {
            let mut rows = self.rows().lock();
            let Some(row) = rows.get_mut(&(parent_id, user_id)) else {
                return Err(DomainError::ReactionNotFound);
            };
            if row.kind != from {
                return Err(DomainError::ReactionNotFound);
            }
            row.kind = to;
        }
        self.bump_counter(parent_id, from, -1);
        self.bump_counter(parent_id, to, 1);
        Ok(())
    }

    async fn remove(&self, parent_id: Id, user_id: Id, kind: ReactionKind) -> RepoResult<bool> {
        let removed = {
            let mut rows = self.rows().lock();
            match rows.get(&(parent_id, user_id)) {
                Some(row) if row.kind == kind => {
                    rows.remove(&(parent_id, user_id));
                    true
                }
                _ => false,
            }
        };
        if removed {
            self.bump_counter(parent_id, kind, -1);
        }
        Ok(removed)
    }

    async fn remove_all(&self, parent_id: Id) -> RepoResult<u64> {
        let removed = {
            let mut rows = self.rows().lock();
            let before = rows.len();
            rows.retain(|_, r| r.parent_id != parent_id);
            (before - rows.len()) as u64
        };
        match self.table {
            ReactionTable::Posts => {
                if let Some(post) = self.store.posts.lock().get_mut(&parent_id) {
                    post.like_count = 0;
                    post.dislike_count = 0;
                }
            }
            ReactionTable::Comments => {
                if let Some(comment) = self.store.comments.lock().get_mut(&parent_id) {
                    comment.like_count = 0;
                    comment.dislike_count = 0;
                }
            }
        }
        Ok(removed)
    }

    async fn count_by_kind(&self, parent_id: Id) -> RepoResult<Vec<(ReactionKind, i64)>> {
        let rows = self.rows().lock();
        let mut counts: Vec<(ReactionKind, i64)> = Vec::new();
        for kind in [ReactionKind::Like, ReactionKind::Dislike] {
            let n = rows
                .values()
                .filter(|r| r.parent_id == parent_id && r.kind == kind)
                .count() as i64;
            if n > 0 {
                counts.push((kind, n));
            }
        }
        Ok(counts)
    }
}

// ============================================================================
// Proposals and votes
// ============================================================================

pub struct MemoryProposalRepository {
    store: Arc<MemoryStore>,
}

impl MemoryProposalRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProposalRepository for MemoryProposalRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Proposal>> {
        Ok(self.store.proposals.lock().get(&id).cloned())
    }

    async fn list(&self, limit: i64) -> RepoResult<Vec<Proposal>> {
        let mut proposals: Vec<Proposal> =
            self.store.proposals.lock().values().cloned().collect();
        proposals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        proposals.truncate(usize::try_from(limit.max(1)).unwrap_or(usize::MAX));
        Ok(proposals)
    }

    async fn create(&self, proposal: &Proposal) -> RepoResult<()> {
        self.store
            .proposals
            .lock()
            .insert(proposal.id, proposal.clone());
        Ok(())
    }

    async fn update(&self, proposal: &Proposal) -> RepoResult<()> {
        let mut proposals = self.store.proposals.lock();
        let Some(existing) = proposals.get_mut(&proposal.id) else {
            return Err(DomainError::ProposalNotFound(proposal.id));
        };
        existing.title = proposal.title.clone();
        existing.description = proposal.description.clone();
        existing.status = proposal.status;
        existing.deadline = proposal.deadline;
        existing.updated_at = proposal.updated_at;
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        if self.store.proposals.lock().remove(&id).is_none() {
            return Err(DomainError::ProposalNotFound(id));
        }
        self.store.votes.lock().retain(|_, v| v.proposal_id != id);
        Ok(())
    }
}

pub struct MemoryVoteRepository {
    store: Arc<MemoryStore>,
}

impl MemoryVoteRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn bump_counter(&self, proposal_id: Id, kind: VoteKind, delta: i32) {
        if let Some(proposal) = self.store.proposals.lock().get_mut(&proposal_id) {
            match kind {
                VoteKind::Up => clamped_counter_add(&mut proposal.upvote_count, delta),
                VoteKind::Down => clamped_counter_add(&mut proposal.downvote_count, delta),
            }
        }
    }
}

#[async_trait]
impl VoteRepository for MemoryVoteRepository {
    async fn find(&self, proposal_id: Id, user_id: Id) -> RepoResult<Option<Vote>> {
        Ok(self.store.votes.lock().get(&(proposal_id, user_id)).cloned())
    }

    async fn find_by_proposal(&self, proposal_id: Id) -> RepoResult<Vec<Vote>> {
        let mut votes: Vec<Vote> = self
            .store
            .votes
            .lock()
            .values()
            .filter(|v| v.proposal_id == proposal_id)
            .cloned()
            .collect();
        votes.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(votes)
    }

    async fn insert(&self, vote: &Vote) -> RepoResult<()> {
        {
            let mut votes = self.store.votes.lock();
            let key = (vote.proposal_id, vote.user_id);
            if votes.contains_key(&key) {
                return Err(DomainError::VoteAlreadyExists);
            }
            votes.insert(key, vote.clone());
        }
        self.bump_counter(vote.proposal_id, vote.kind, 1);
        Ok(())
    }

    async fn switch(
        &self,
        proposal_id: Id,
        user_id: Id,
        from: VoteKind,
        to: VoteKind,
    ) -> RepoResult<()> {
        {
            let mut votes = self.store.votes.lock();
            let Some(row) = votes.get_mut(&(proposal_id, user_id)) else {
                return Err(DomainError::VoteNotFound);
            };
            if row.kind != from {
                return Err(DomainError::VoteNotFound);
            }
            row.kind = to;
        }
        self.bump_counter(proposal_id, from, -1);
        self.bump_counter(proposal_id, to, 1);
        Ok(())
    }

    async fn remove(&self, proposal_id: Id, user_id: Id, kind: VoteKind) -> RepoResult<bool> {
        let removed = {
            let mut votes = self.store.votes.lock();
            match votes.get(&(proposal_id, user_id)) {
                Some(row) if row.kind == kind => {
                    votes.remove(&(proposal_id, user_id));
                    true
                }
                _ => false,
            }
        };
        if removed {
            self.bump_counter(proposal_id, kind, -1);
        }
        Ok(removed)
    }

    async fn count_by_kind(&self, proposal_id: Id) -> RepoResult<Vec<(VoteKind, i64)>> {
        let votes = self.store.votes.lock();
        let mut counts: Vec<(VoteKind, i64)> = Vec::new();
        for kind in [VoteKind::Up, VoteKind::Down] {
            let n = votes
                .values()
                .filter(|v| v.proposal_id == proposal_id && v.kind == kind)
                .count() as i64;
            if n > 0 {
                counts.push((kind, n));
            }
        }
        Ok(counts)
    }
}

// ============================================================================
// Report hierarchy
// ============================================================================

pub struct MemoryReportTypeRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReportTypeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportTypeRepository for MemoryReportTypeRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportType>> {
        Ok(self.store.report_types.lock().get(&id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<ReportType>> {
        let mut types: Vec<ReportType> =
            self.store.report_types.lock().values().cloned().collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn create(&self, report_type: &ReportType) -> RepoResult<()> {
        self.store
            .report_types
            .lock()
            .insert(report_type.id, report_type.clone());
        Ok(())
    }

    async fn update(&self, report_type: &ReportType) -> RepoResult<()> {
        let mut types = self.store.report_types.lock();
        if !types.contains_key(&report_type.id) {
            return Err(DomainError::ReportTypeNotFound(report_type.id));
        }
        types.insert(report_type.id, report_type.clone());
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        if self.store.report_types.lock().remove(&id).is_none() {
            return Err(DomainError::ReportTypeNotFound(id));
        }
        self.store
            .report_stages
            .lock()
            .retain(|_, s| s.report_type_id != id);
        let removed_reports: Vec<Id> = {
            let mut reports = self.store.reports.lock();
            let ids: Vec<Id> = reports
                .values()
                .filter(|r| r.report_type_id == id)
                .map(|r| r.id)
                .collect();
            reports.retain(|_, r| r.report_type_id != id);
            ids
        };
        let removed_details: Vec<Id> = {
            let mut details = self.store.report_details.lock();
            let ids: Vec<Id> = details
                .values()
                .filter(|d| removed_reports.contains(&d.report_id))
                .map(|d| d.id)
                .collect();
            details.retain(|_, d| !removed_reports.contains(&d.report_id));
            ids
        };
        self.store
            .report_attachments
            .lock()
            .retain(|_, a| !removed_details.contains(&a.detail_id));
        Ok(())
    }
}

pub struct MemoryReportStageRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReportStageRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportStageRepository for MemoryReportStageRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportStage>> {
        Ok(self.store.report_stages.lock().get(&id).cloned())
    }

    async fn find_by_type(&self, report_type_id: Id) -> RepoResult<Vec<ReportStage>> {
        let mut stages: Vec<ReportStage> = self
            .store
            .report_stages
            .lock()
            .values()
            .filter(|s| s.report_type_id == report_type_id)
            .cloned()
            .collect();
        stages.sort_by_key(|s| s.stage_order);
        Ok(stages)
    }

    async fn create(&self, stage: &ReportStage) -> RepoResult<()> {
        self.store
            .report_stages
            .lock()
            .insert(stage.id, stage.clone());
        Ok(())
    }

    async fn update(&self, stage: &ReportStage) -> RepoResult<()> {
        let mut stages = self.store.report_stages.lock();
        if !stages.contains_key(&stage.id) {
            return Err(DomainError::ReportStageNotFound(stage.id));
        }
        stages.insert(stage.id, stage.clone());
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        if self.store.report_stages.lock().remove(&id).is_none() {
            return Err(DomainError::ReportStageNotFound(id));
        }
        Ok(())
    }
}

pub struct MemoryReportRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReportRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportRepository for MemoryReportRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Report>> {
        Ok(self.store.reports.lock().get(&id).cloned())
    }

    async fn find_by_type(&self, report_type_id: Id) -> RepoResult<Vec<Report>> {
        let mut reports: Vec<Report> = self
            .store
            .reports
            .lock()
            .values()
            .filter(|r| r.report_type_id == report_type_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    async fn find_by_reporter(&self, reporter_id: Id) -> RepoResult<Vec<Report>> {
        let mut reports: Vec<Report> = self
            .store
            .reports
            .lock()
            .values()
            .filter(|r| r.reporter_id == reporter_id)
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    async fn create(&self, report: &Report) -> RepoResult<()> {
        self.store.reports.lock().insert(report.id, report.clone());
        Ok(())
    }

    async fn update(&self, report: &Report) -> RepoResult<()> {
        let mut reports = self.store.reports.lock();
        if !reports.contains_key(&report.id) {
            return Err(DomainError::ReportNotFound(report.id));
        }
        reports.insert(report.id, report.clone());
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        if self.store.reports.lock().remove(&id).is_none() {
            return Err(DomainError::ReportNotFound(id));
        }
        let removed_details: Vec<Id> = {
            let mut details = self.store.report_details.lock();
            let ids: Vec<Id> = details
                .values()
                .filter(|d| d.report_id == id)
                .map(|d| d.id)
                .collect();
            details.retain(|_, d| d.report_id != id);
            ids
        };
        self.store
            .report_attachments
            .lock()
            .retain(|_, a| !removed_details.contains(&a.detail_id));
        Ok(())
    }
}

pub struct MemoryReportDetailRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReportDetailRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportDetailRepository for MemoryReportDetailRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportDetail>> {
        Ok(self.store.report_details.lock().get(&id).cloned())
    }

    async fn find_by_report(&self, report_id: Id) -> RepoResult<Vec<ReportDetail>> {
        let mut details: Vec<ReportDetail> = self
            .store
            .report_details
            .lock()
            .values()
            .filter(|d| d.report_id == report_id)
            .cloned()
            .collect();
        details.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(details)
    }

    async fn find_by_stage(&self, stage_id: Id) -> RepoResult<Vec<ReportDetail>> {
        let mut details: Vec<ReportDetail> = self
            .store
            .report_details
            .lock()
            .values()
            .filter(|d| d.stage_id == stage_id)
            .cloned()
            .collect();
        details.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(details)
    }

    async fn create(&self, detail: &ReportDetail) -> RepoResult<()> {
        self.store
            .report_details
            .lock()
            .insert(detail.id, detail.clone());
        Ok(())
    }

    async fn update(&self, detail: &ReportDetail) -> RepoResult<()> {
        let mut details = self.store.report_details.lock();
        if !details.contains_key(&detail.id) {
            return Err(DomainError::ReportDetailNotFound(detail.id));
        }
        details.insert(detail.id, detail.clone());
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        if self.store.report_details.lock().remove(&id).is_none() {
            return Err(DomainError::ReportDetailNotFound(id));
        }
        self.store
            .report_attachments
            .lock()
            .retain(|_, a| a.detail_id != id);
        Ok(())
    }
}

pub struct MemoryReportAttachmentRepository {
    store: Arc<MemoryStore>,
}

impl MemoryReportAttachmentRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportAttachmentRepository for MemoryReportAttachmentRepository {
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ReportAttachment>> {
        Ok(self.store.report_attachments.lock().get(&id).cloned())
    }

    async fn find_by_detail(&self, detail_id: Id) -> RepoResult<Vec<ReportAttachment>> {
        let mut attachments: Vec<ReportAttachment> = self
            .store
            .report_attachments
            .lock()
            .values()
            .filter(|a| a.detail_id == detail_id)
            .cloned()
            .collect();
        attachments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(attachments)
    }

    async fn create(&self, attachment: &ReportAttachment) -> RepoResult<()> {
        self.store
            .report_attachments
            .lock()
            .insert(attachment.id, attachment.clone());
        Ok(())
    }

    async fn delete(&self, id: Id) -> RepoResult<()> {
        self.store.report_attachments.lock().remove(&id);
        Ok(())
    }
}

// ============================================================================
// Invitations
// ============================================================================

pub struct MemoryInvitationRepository {
    store: Arc<MemoryStore>,
}

impl MemoryInvitationRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl InvitationRepository for MemoryInvitationRepository {
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Invitation>> {
        Ok(self.store.invitations.lock().get(code).cloned())
    }

    async fn find_by_inviter(&self, inviter_id: Id) -> RepoResult<Vec<Invitation>> {
        let mut invitations: Vec<Invitation> = self
            .store
            .invitations
            .lock()
            .values()
            .filter(|i| i.inviter_id == inviter_id)
            .cloned()
            .collect();
        invitations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(invitations)
    }

    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        let mut invitations = self.store.invitations.lock();
        if invitations.contains_key(&invitation.code) {
            return Err(DomainError::InvitationCodeExists);
        }
        invitations.insert(invitation.code.clone(), invitation.clone());
        Ok(())
    }

    async fn increment_uses(&self, code: &str) -> RepoResult<()> {
        let mut invitations = self.store.invitations.lock();
        let Some(invitation) = invitations.get_mut(code) else {
            return Err(DomainError::InvitationNotFound(code.to_string()));
        };
        invitation.increment_uses();
        Ok(())
    }

    async fn delete(&self, code: &str) -> RepoResult<()> {
        if self.store.invitations.lock().remove(code).is_none() {
            return Err(DomainError::InvitationNotFound(code.to_string()));
        }
        Ok(())
    }

    async fn delete_expired(&self) -> RepoResult<u64> {
        let now = Utc::now();
        let mut invitations = self.store.invitations.lock();
        let before = invitations.len();
        invitations.retain(|_, i| !i.is_expired_at(now));
        Ok((before - invitations.len()) as u64)
    }
}

// ============================================================================
// Context wiring
// ============================================================================

/// Build a ServiceContext over a fresh in-memory store.
///
/// Returns the store too so tests can inspect cached counters and live rows
/// directly.
pub fn memory_context() -> (ServiceContext, Arc<MemoryStore>) {
    // Idempotent; later calls within the same test binary are no-ops
    let _ = alumnet_common::try_init_tracing();

    let store = MemoryStore::new();
    let ctx = ServiceContext::builder()
        .profile_repo(Arc::new(MemoryProfileRepository::new(store.clone())))
        .post_repo(Arc::new(MemoryPostRepository::new(store.clone())))
        .comment_repo(Arc::new(MemoryCommentRepository::new(store.clone())))
        .post_reaction_repo(Arc::new(MemoryReactionRepository::for_posts(store.clone())))
        .comment_reaction_repo(Arc::new(MemoryReactionRepository::for_comments(
            store.clone(),
        )))
        .proposal_repo(Arc::new(MemoryProposalRepository::new(store.clone())))
        .vote_repo(Arc::new(MemoryVoteRepository::new(store.clone())))
        .report_type_repo(Arc::new(MemoryReportTypeRepository::new(store.clone())))
        .report_stage_repo(Arc::new(MemoryReportStageRepository::new(store.clone())))
        .report_repo(Arc::new(MemoryReportRepository::new(store.clone())))
        .report_detail_repo(Arc::new(MemoryReportDetailRepository::new(store.clone())))
        .report_attachment_repo(Arc::new(MemoryReportAttachmentRepository::new(
            store.clone(),
        )))
        .invitation_repo(Arc::new(MemoryInvitationRepository::new(store.clone())))
        .build()
        .expect("all repositories provided");
    (ctx, store)
}
