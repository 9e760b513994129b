//! Tests for the enrollment service and its validation pipeline.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use super::*;
use crate::domain::course::{CourseDescription, CourseTitle, NewCourse};
use crate::domain::ports::{CourseCatalogue, UserAccounts};
use crate::domain::user::{EmailAddress, NewUser, UserName, UserUpdate};
use crate::domain::{CourseService, ErrorCode, UserService};

/// Clock pinned to a known instant so enrollment dates are deterministic.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 16, 12, 0, 0).single().expect("valid instant")
}

struct Fixture {
    users: UserService,
    courses: CourseService,
    enrollments: EnrollmentService,
}

fn fixture() -> Fixture {
    let registry = Arc::new(Registry::new());
    Fixture {
        users: UserService::new(registry.clone()),
        courses: CourseService::new(registry.clone()),
        enrollments: EnrollmentService::new(registry, Arc::new(FixedClock(fixed_instant()))),
    }
}

impl Fixture {
    async fn user(&self, name: &str, email: &str) -> UserId {
        self.users
            .create(NewUser {
                name: UserName::new(name).expect("valid name"),
                email: EmailAddress::new(email).expect("valid email"),
            })
            .await
            .expect("user create succeeds")
            .id()
    }

    async fn course(&self, title: &str) -> CourseId {
        self.courses
            .create(NewCourse {
                title: CourseTitle::new(title).expect("valid title"),
                description: CourseDescription::new("Learn things").expect("valid description"),
            })
            .await
            .expect("course create succeeds")
            .id()
    }
}

#[tokio::test]
async fn enroll_stamps_the_clock_date_and_starts_incomplete() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    let course_id = fx.course("Rust Basics").await;

    let enrollment = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect("enroll succeeds");

    assert_eq!(enrollment.id().get(), 1);
    assert_eq!(enrollment.user_id(), user_id);
    assert_eq!(enrollment.course_id(), course_id);
    assert_eq!(
        enrollment.enrolled_date(),
        NaiveDate::from_ymd_opt(2025, 9, 16).expect("valid date")
    );
    assert!(!enrollment.completed());
}

#[tokio::test]
async fn enroll_reports_missing_user_before_checking_the_course() {
    let fx = fixture();
    // Course 1 does not exist either; the user check must fire first.
    let error = fx
        .enrollments
        .enroll(UserId::new(999), CourseId::new(1))
        .await
        .expect_err("missing user");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "User not found");
}

#[tokio::test]
async fn enroll_rejects_inactive_users() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    fx.users
        .deactivate(user_id)
        .await
        .expect("deactivate succeeds");
    let course_id = fx.course("Rust Basics").await;

    let error = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect_err("inactive user");
    assert_eq!(error.code(), ErrorCode::InvalidState);
    assert_eq!(error.message(), "Only active users can enroll in courses");
}

#[tokio::test]
async fn enroll_reports_missing_course_for_active_users() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;

    let error = fx
        .enrollments
        .enroll(user_id, CourseId::new(999))
        .await
        .expect_err("missing course");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Course not found");
}

#[tokio::test]
async fn enroll_rejects_closed_courses() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    let course_id = fx.course("Rust Basics").await;
    fx.courses.close(course_id).await.expect("close succeeds");

    let error = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect_err("closed course");
    assert_eq!(error.code(), ErrorCode::InvalidState);
    assert_eq!(error.message(), "Course enrollment is closed");
}

#[tokio::test]
async fn enroll_rejects_duplicate_pairs_even_after_completion() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    let course_id = fx.course("Rust Basics").await;

    let enrollment = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect("first enroll succeeds");
    fx.enrollments
        .complete(enrollment.id())
        .await
        .expect("complete succeeds");

    let error = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect_err("duplicate pair");
    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), "User is already enrolled in this course");
}

#[tokio::test]
async fn enroll_allows_distinct_pairs() {
    let fx = fixture();
    let ada = fx.user("Ada", "ada@example.com").await;
    let brian = fx.user("Brian", "brian@example.com").await;
    let rust = fx.course("Rust Basics").await;
    let async_rust = fx.course("Async Rust").await;

    fx.enrollments.enroll(ada, rust).await.expect("ada/rust");
    fx.enrollments
        .enroll(ada, async_rust)
        .await
        .expect("ada/async");
    fx.enrollments.enroll(brian, rust).await.expect("brian/rust");

    let all = fx.enrollments.list().await.expect("list succeeds");
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn complete_is_idempotent() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    let course_id = fx.course("Rust Basics").await;
    let enrollment = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect("enroll succeeds");

    let first = fx
        .enrollments
        .complete(enrollment.id())
        .await
        .expect("complete succeeds");
    assert!(first.completed());

    let second = fx
        .enrollments
        .complete(enrollment.id())
        .await
        .expect("complete is idempotent");
    assert!(second.completed());
}

#[tokio::test]
async fn list_for_user_requires_the_user_to_exist() {
    let fx = fixture();
    let error = fx
        .enrollments
        .list_for_user(UserId::new(42))
        .await
        .expect_err("unknown user");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn list_for_user_filters_by_user() {
    let fx = fixture();
    let ada = fx.user("Ada", "ada@example.com").await;
    let brian = fx.user("Brian", "brian@example.com").await;
    let rust = fx.course("Rust Basics").await;
    let async_rust = fx.course("Async Rust").await;

    fx.enrollments.enroll(ada, rust).await.expect("ada/rust");
    fx.enrollments.enroll(brian, rust).await.expect("brian/rust");
    fx.enrollments
        .enroll(ada, async_rust)
        .await
        .expect("ada/async");

    let for_ada = fx
        .enrollments
        .list_for_user(ada)
        .await
        .expect("list succeeds");
    assert_eq!(for_ada.len(), 2);
    assert!(for_ada.iter().all(|enrollment| enrollment.user_id() == ada));
}

#[tokio::test]
async fn deleting_referenced_entities_leaves_enrollments_orphaned() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    let course_id = fx.course("Rust Basics").await;
    let enrollment = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect("enroll succeeds");

    fx.users.delete(user_id).await.expect("user delete");
    fx.courses.delete(course_id).await.expect("course delete");

    let orphan = fx
        .enrollments
        .get(enrollment.id())
        .await
        .expect("orphan remains retrievable");
    assert_eq!(orphan.user_id(), user_id);
    assert_eq!(orphan.course_id(), course_id);
}

#[tokio::test]
async fn delete_removes_the_enrollment_without_touching_entities() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    let course_id = fx.course("Rust Basics").await;
    let enrollment = fx
        .enrollments
        .enroll(user_id, course_id)
        .await
        .expect("enroll succeeds");

    fx.enrollments
        .delete(enrollment.id())
        .await
        .expect("delete succeeds");
    let error = fx
        .enrollments
        .get(enrollment.id())
        .await
        .expect_err("record removed");
    assert_eq!(error.code(), ErrorCode::NotFound);

    fx.users.get(user_id).await.expect("user still present");
    fx.courses.get(course_id).await.expect("course still present");

    // The pair is free again once the enrollment is gone.
    fx.enrollments
        .enroll(user_id, course_id)
        .await
        .expect("re-enroll succeeds");
}

#[tokio::test]
async fn update_restoring_is_active_allows_enrollment_again() {
    let fx = fixture();
    let user_id = fx.user("Ada", "ada@example.com").await;
    fx.users
        .deactivate(user_id)
        .await
        .expect("deactivate succeeds");
    fx.users
        .update(
            user_id,
            UserUpdate {
                is_active: Some(true),
                ..UserUpdate::default()
            },
        )
        .await
        .expect("update succeeds");
    let course_id = fx.course("Rust Basics").await;

    fx.enrollments
        .enroll(user_id, course_id)
        .await
        .expect("enroll succeeds after explicit reactivation");
}
