mod api;
pub mod state;

pub use api::EngagementApi;
pub use state::{EngagementState, ViewerState};

use crate::ActionError;
use foursight_model::engagement::{Comment, VoteType, Votes};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Votes and comments of one publication as seen by one viewer.
///
/// Requests for the publication go through a single in-flight gate. A vote
/// attempted while the gate is held is rejected with [`ActionError::Busy`],
/// comment operations wait for it. Failed requests leave the cached state untouched.
pub struct PublicationEngagement<A> {
    slug: String,
    api: Arc<A>,
    state: RwLock<EngagementState>,
    in_flight: Mutex<()>,
}

impl<A: EngagementApi> PublicationEngagement<A> {
    pub fn new(slug: impl Into<String>, api: Arc<A>) -> Self {
        Self {
            slug: slug.into(),
            api,
            state: RwLock::new(EngagementState::default()),
            in_flight: Mutex::new(()),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub async fn snapshot(&self) -> EngagementState {
        self.state.read().await.clone()
    }

    pub async fn viewer(&self) -> ViewerState {
        self.state.read().await.viewer(self.api.is_authenticated())
    }

    /// Fetches votes and comments together and replaces the cache.
    pub async fn load(&self) -> Result<(), ActionError> {
        let _guard = self.in_flight.lock().await;
        let (votes, comments) = futures::try_join!(self.api.get_votes(&self.slug), self.api.get_comments(&self.slug))
            .map_err(|err| self.failed("load", err))?;

        let mut state = self.state.write().await;
        state.apply_votes(votes);
        state.replace_comments(comments);
        tracing::debug!(slug = %self.slug, comments = state.comments().len(), "loaded engagement");
        Ok(())
    }

    pub async fn submit_vote(&self, vote_type: VoteType) -> Result<Votes, ActionError> {
        state::require_auth(self.api.is_authenticated())?;
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::debug!(slug = %self.slug, %vote_type, "vote rejected, request in flight");
            return Err(ActionError::Busy(self.slug.clone()));
        };

        let votes = self
            .api
            .submit_vote(&self.slug, vote_type)
            .await
            .map_err(|err| self.failed("vote", err))?;
        self.state.write().await.apply_votes(votes);
        tracing::info!(
            slug = %self.slug,
            %vote_type,
            upvotes = votes.upvotes,
            downvotes = votes.downvotes,
            user_vote = ?votes.user_vote,
            "vote submitted"
        );
        Ok(votes)
    }

    pub async fn add_comment(&self, text: &str) -> Result<Comment, ActionError> {
        // blank text is a validation error even for signed out viewers
        let text = state::check_comment(self.api.is_authenticated(), text)?;
        let _guard = self.in_flight.lock().await;

        let comment = self
            .api
            .add_comment(&self.slug, text)
            .await
            .map_err(|err| self.failed("add comment", err))?;
        self.state.write().await.prepend_comment(comment.clone());
        tracing::info!(slug = %self.slug, comment_id = %comment.id, "comment added");
        Ok(comment)
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), ActionError> {
        state::require_auth(self.api.is_authenticated())?;
        let _guard = self.in_flight.lock().await;
        state::check_delete(true, &*self.state.read().await, comment_id)?;

        self.api
            .delete_comment(&self.slug, comment_id)
            .await
            .map_err(|err| self.failed("delete comment", err))?;
        self.state.write().await.remove_comment(comment_id);
        tracing::info!(slug = %self.slug, comment_id, "comment deleted");
        Ok(())
    }

    fn failed(&self, action: &str, err: A::Error) -> ActionError {
        let err = err.into();
        tracing::warn!(slug = %self.slug, action, error = %err, "engagement request failed");
        err
    }
}
