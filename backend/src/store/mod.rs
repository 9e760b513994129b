//! Process-local in-memory storage.
//!
//! Three id-keyed mapping tables (users, courses, enrollments) plus the
//! per-kind id sequences, all owned by a single [`Registry`] behind one
//! mutual-exclusion domain. Enrollment operations validate across all three
//! tables, so every service operation runs as one closure-scoped critical
//! section; no interleaving can observe a partially applied
//! check-then-act sequence. Storage is volatile and resets on restart.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::course::{Course, CourseId};
use crate::domain::enrollment::{Enrollment, EnrollmentId};
use crate::domain::user::{User, UserId};

/// Monotonic id sequences, one counter per entity kind.
///
/// Counters start at zero and are pre-incremented, so the first issued id is
/// 1. Ids are never reused for the lifetime of the process.
#[derive(Debug, Default)]
struct IdSequences {
    users: u64,
    courses: u64,
    enrollments: u64,
}

/// The three entity tables and their id sequences.
///
/// Tables are plain id-keyed maps; each owns its records exclusively and
/// holds no reference to the others. Keys are issued in ascending order, so
/// scan order equals insertion order.
#[derive(Debug, Default)]
pub struct Tables {
    pub users: BTreeMap<UserId, User>,
    pub courses: BTreeMap<CourseId, Course>,
    pub enrollments: BTreeMap<EnrollmentId, Enrollment>,
    sequences: IdSequences,
}

impl Tables {
    /// Issue the next user id.
    pub fn next_user_id(&mut self) -> UserId {
        self.sequences.users += 1;
        UserId::new(self.sequences.users)
    }

    /// Issue the next course id.
    pub fn next_course_id(&mut self) -> CourseId {
        self.sequences.courses += 1;
        CourseId::new(self.sequences.courses)
    }

    /// Issue the next enrollment id.
    pub fn next_enrollment_id(&mut self) -> EnrollmentId {
        self.sequences.enrollments += 1;
        EnrollmentId::new(self.sequences.enrollments)
    }
}

/// Shared owner of the in-memory tables.
///
/// The composition root creates one registry and injects it into each
/// service; services access the tables only through [`Registry::with`], so
/// each operation is atomic with respect to all three tables.
#[derive(Debug, Default)]
pub struct Registry {
    inner: Mutex<Tables>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with exclusive access to the tables.
    ///
    /// A panic while holding the lock cannot leave the maps structurally
    /// invalid, so a poisoned lock is recovered rather than propagated.
    pub fn with<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut tables)
    }
}
