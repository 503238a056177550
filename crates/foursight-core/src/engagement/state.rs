use crate::ActionError;
use foursight_model::engagement::{Comment, VoteType, Votes};
use serde::Serialize;

/// How the current viewer relates to the votes of a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewerState {
    Unauthenticated,
    NoVote,
    Upvoted,
    Downvoted,
}

impl ViewerState {
    #[must_use]
    pub fn new(authenticated: bool, user_vote: Option<VoteType>) -> Self {
        match (authenticated, user_vote) {
            (false, _) => Self::Unauthenticated,
            (true, None) => Self::NoVote,
            (true, Some(VoteType::Up)) => Self::Upvoted,
            (true, Some(VoteType::Down)) => Self::Downvoted,
        }
    }
}

/// Cached projection of the server side engagement of one publication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngagementState {
    votes: Votes,
    comments: Vec<Comment>,
}

impl EngagementState {
    #[must_use]
    pub fn votes(&self) -> Votes {
        self.votes
    }

    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    #[must_use]
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    #[must_use]
    pub fn viewer(&self, authenticated: bool) -> ViewerState {
        ViewerState::new(authenticated, self.votes.user_vote)
    }

    /// Takes the server response as is. Counts are never adjusted locally.
    pub fn apply_votes(&mut self, votes: Votes) {
        self.votes = votes;
    }

    pub fn replace_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
    }

    pub fn prepend_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn remove_comment(&mut self, comment_id: &str) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == comment_id)?;
        Some(self.comments.remove(index))
    }
}

pub fn require_auth(authenticated: bool) -> Result<(), ActionError> {
    if authenticated {
        Ok(())
    } else {
        Err(ActionError::auth_required())
    }
}

/// Returns the text to send. Empty text is reported before missing authentication.
pub fn check_comment(authenticated: bool, text: &str) -> Result<&str, ActionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ActionError::validation("Comment must not be empty"));
    }
    require_auth(authenticated)?;
    Ok(text)
}

pub fn check_delete(authenticated: bool, state: &EngagementState, comment_id: &str) -> Result<(), ActionError> {
    require_auth(authenticated)?;
    match state.comment(comment_id) {
        None => Err(ActionError::validation(format!("Comment {comment_id} not found"))),
        Some(comment) if !comment.is_own => Err(ActionError::validation("You can only delete your own comments")),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, is_own: bool) -> Comment {
        Comment {
            id: id.to_owned(),
            username: "lisa".to_owned(),
            text: "Nice".to_owned(),
            created_at: "2024-12-11T08:00:00".to_owned(),
            is_own,
        }
    }

    #[test]
    fn test_viewer_state() {
        assert_eq!(ViewerState::new(false, Some(VoteType::Up)), ViewerState::Unauthenticated);
        assert_eq!(ViewerState::new(true, None), ViewerState::NoVote);
        assert_eq!(ViewerState::new(true, Some(VoteType::Up)), ViewerState::Upvoted);
        assert_eq!(ViewerState::new(true, Some(VoteType::Down)), ViewerState::Downvoted);
    }

    #[test]
    fn test_comment_order() {
        let mut state = EngagementState::default();
        state.replace_comments(vec![comment("b", false), comment("a", false)]);
        state.prepend_comment(comment("c", true));
        let ids = state.comments().iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["c", "b", "a"]);
        assert_eq!(state.remove_comment("b").map(|c| c.id), Some("b".to_owned()));
        assert!(state.remove_comment("b").is_none());
        assert_eq!(state.comments().len(), 2);
    }

    #[test]
    fn test_check_comment() {
        assert_eq!(check_comment(true, "  hello \n"), Ok("hello"));
        assert!(matches!(check_comment(false, "   "), Err(ActionError::Validation(_))));
        assert_eq!(check_comment(false, "hello"), Err(ActionError::auth_required()));
    }

    #[test]
    fn test_check_delete() {
        let mut state = EngagementState::default();
        state.replace_comments(vec![comment("mine", true), comment("theirs", false)]);
        assert_eq!(check_delete(true, &state, "mine"), Ok(()));
        assert!(matches!(check_delete(true, &state, "theirs"), Err(ActionError::Validation(_))));
        assert!(matches!(check_delete(true, &state, "gone"), Err(ActionError::Validation(_))));
        assert_eq!(check_delete(false, &state, "mine"), Err(ActionError::auth_required()));
    }
}
