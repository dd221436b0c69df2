pub mod articles;
pub mod auth;
pub mod companies;
pub mod courses;
pub mod reactions;

pub use articles::{ArticleDto, DisclosedArticleDto};
pub use auth::AuthenticatedUser;
pub use companies::{CourseLinkDto, MemberDto};
pub use courses::{ChapterDto, CourseDto, DisclosedCourseDto, EnrollmentDto, LessonDto};
pub use reactions::ReactionDto;

use serde::{Deserialize, Serialize};

/// How much of the body a disclosed DTO carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Full,
    Teaser,
}
