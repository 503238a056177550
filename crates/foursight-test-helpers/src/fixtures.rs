use foursight_model::engagement::{Comment, VoteType, Votes};
use foursight_model::login::Token;
use foursight_model::user::User;

pub const TOKEN: &str = "test-token";
pub const EMAIL: &str = "mara@example.com";
pub const PASSWORD: &str = "hunter22";

#[must_use]
pub fn user() -> User {
    User {
        id: 7,
        username: "mara".to_owned(),
        email: EMAIL.to_owned(),
        created_at: "2024-12-20T09:30:00".to_owned(),
    }
}

#[must_use]
pub fn token() -> Token {
    Token {
        access_token: TOKEN.to_owned(),
        token_type: "bearer".to_owned(),
        user: user(),
    }
}

#[must_use]
pub fn votes(upvotes: u64, downvotes: u64, user_vote: Option<VoteType>) -> Votes {
    Votes {
        upvotes,
        downvotes,
        user_vote,
    }
}

#[must_use]
pub fn comment(id: &str, text: &str, is_own: bool) -> Comment {
    Comment {
        id: id.to_owned(),
        username: if is_own { "mara" } else { "lisa" }.to_owned(),
        text: text.to_owned(),
        created_at: "2024-12-21T10:00:00".to_owned(),
        is_own,
    }
}
