use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(pub i64);

impl CourseId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("course id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CourseId> for i64 {
    fn from(value: CourseId) -> Self {
        value.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterId(pub i64);

impl ChapterId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("chapter id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ChapterId> for i64 {
    fn from(value: ChapterId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonId(pub i64);

impl LessonId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("lesson id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LessonId> for i64 {
    fn from(value: LessonId) -> Self {
        value.0
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    #[default]
    Text,
    Video,
    Quiz,
}

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Text => "text",
            LessonType::Video => "video",
            LessonType::Quiz => "quiz",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LessonType::Text),
            "video" => Ok(LessonType::Video),
            "quiz" => Ok(LessonType::Quiz),
            other => Err(DomainError::Validation(format!(
                "unknown lesson type '{other}'"
            ))),
        }
    }
}
