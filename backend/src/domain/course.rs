//! Course entity and its validated field types.

use std::fmt;

/// Maximum allowed length for a course title, in characters.
pub const COURSE_TITLE_MAX: usize = 200;

/// Validation errors raised while constructing course field values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("description must not be empty")]
    EmptyDescription,
}

/// Stable course identifier issued by the course id sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(u64);

impl CourseId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Validate and construct a [`CourseTitle`] from owned input.
    pub fn new(title: impl Into<String>) -> Result<Self, CourseValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(CourseValidationError::EmptyTitle);
        }
        if title.chars().count() > COURSE_TITLE_MAX {
            return Err(CourseValidationError::TitleTooLong {
                max: COURSE_TITLE_MAX,
            });
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for CourseTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Free-form course description; must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDescription(String);

impl CourseDescription {
    /// Validate and construct a [`CourseDescription`] from owned input.
    pub fn new(description: impl Into<String>) -> Result<Self, CourseValidationError> {
        let description = description.into();
        if description.is_empty() {
            return Err(CourseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for CourseDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated field values for a course about to be created.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: CourseTitle,
    pub description: CourseDescription,
}

/// Partial update for a course; `None` fields are left untouched.
///
/// `is_open` may be set in either direction here, matching the update
/// contract; the dedicated close operation is one-directional.
#[derive(Debug, Clone, Default)]
pub struct CourseUpdate {
    pub title: Option<CourseTitle>,
    pub description: Option<CourseDescription>,
    pub is_open: Option<bool>,
}

/// Course open for enrollment until closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: CourseTitle,
    description: CourseDescription,
    is_open: bool,
}

impl Course {
    /// Build a newly published course; courses start open.
    pub(crate) fn new(id: CourseId, title: CourseTitle, description: CourseDescription) -> Self {
        Self {
            id,
            title,
            description,
            is_open: true,
        }
    }

    /// Stable course identifier.
    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Course title.
    pub fn title(&self) -> &CourseTitle {
        &self.title
    }

    /// Course description.
    pub fn description(&self) -> &CourseDescription {
        &self.description
    }

    /// Whether new enrollments are accepted.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Apply the supplied fields, leaving omitted ones untouched.
    pub(crate) fn apply(&mut self, update: CourseUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(is_open) = update.is_open {
            self.is_open = is_open;
        }
    }

    /// Close enrollment; idempotent, no reopen operation exists.
    pub(crate) fn close(&mut self) {
        self.is_open = false;
    }
}
