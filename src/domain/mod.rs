//! Domain models for pinboardin
//!
//! Response records decoded from the pinboard API. Each record is built
//! fresh from a response body and dropped once printed.

pub mod post;
pub mod response;
pub mod suggest;

pub use post::{AllResponse, Post, PostsResponse};
pub use response::ShortResponse;
pub use suggest::{Popular, Recommended, SuggestResponse};
