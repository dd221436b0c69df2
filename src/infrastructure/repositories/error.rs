use crate::domain::errors::DomainError;

const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_COURSE_AUTHOR: &str = "courses_author_id_fkey";
const CNT_ARTICLE_PUBLISHED_CHECK: &str = "articles_published_requires_timestamp_chk";
const CNT_COURSE_PUBLISHED_CHECK: &str = "courses_published_requires_timestamp_chk";
const CNT_LESSON_CHAPTER: &str = "lessons_chapter_id_fkey";
const CNT_COURSE_LINK_ACTIVE: &str = "company_course_links_single_active";
const CNT_USER_USERNAME: &str = "users_username_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_COURSE_LINK_ACTIVE => {
                        DomainError::Conflict("course already has an active company link".into())
                    }
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_ARTICLE_AUTHOR | CNT_COURSE_AUTHOR => {
                        DomainError::NotFound("author not found".into())
                    }
                    CNT_LESSON_CHAPTER => DomainError::NotFound("chapter not found".into()),
                    CNT_ARTICLE_PUBLISHED_CHECK | CNT_COURSE_PUBLISHED_CHECK => {
                        DomainError::Validation("published content requires published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
