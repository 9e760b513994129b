//! Tests for the course catalogue service.

use std::sync::Arc;

use mockable::DefaultClock;

use super::*;
use crate::domain::course::{CourseDescription, CourseTitle};
use crate::domain::ports::{EnrollmentLedger, UserAccounts};
use crate::domain::user::{EmailAddress, NewUser, UserName};
use crate::domain::{EnrollmentService, ErrorCode, UserService};

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
        enrollments: EnrollmentService::new(registry, Arc::new(DefaultClock)),
    }
}

fn new_course(title: &str) -> NewCourse {
    NewCourse {
        title: CourseTitle::new(title).expect("valid title"),
        description: CourseDescription::new("Learn things").expect("valid description"),
    }
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: UserName::new(name).expect("valid name"),
        email: EmailAddress::new(email).expect("valid email"),
    }
}

#[tokio::test]
async fn create_starts_open_with_sequential_ids() {
    let fx = fixture();
    let first = fx
        .courses
        .create(new_course("Rust Basics"))
        .await
        .expect("create succeeds");
    let second = fx
        .courses
        .create(new_course("Async Rust"))
        .await
        .expect("create succeeds");

    assert_eq!(first.id().get(), 1);
    assert_eq!(second.id().get(), 2);
    assert!(first.is_open());
}

#[tokio::test]
async fn get_and_delete_report_not_found_for_unknown_ids() {
    let fx = fixture();
    let error = fx
        .courses
        .get(CourseId::new(9))
        .await
        .expect_err("unknown id");
    assert_eq!(error.code(), ErrorCode::NotFound);

    let error = fx
        .courses
        .delete(CourseId::new(9))
        .await
        .expect_err("unknown id");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn close_is_idempotent_and_one_directional() {
    let fx = fixture();
    let course = fx
        .courses
        .create(new_course("Rust Basics"))
        .await
        .expect("create succeeds");

    let closed = fx.courses.close(course.id()).await.expect("close succeeds");
    assert!(!closed.is_open());

    let closed_again = fx
        .courses
        .close(course.id())
        .await
        .expect("close is idempotent");
    assert!(!closed_again.is_open());
}

#[tokio::test]
async fn update_can_override_is_open() {
    let fx = fixture();
    let course = fx
        .courses
        .create(new_course("Rust Basics"))
        .await
        .expect("create succeeds");
    fx.courses.close(course.id()).await.expect("close succeeds");

    let reopened = fx
        .courses
        .update(
            course.id(),
            CourseUpdate {
                is_open: Some(true),
                ..CourseUpdate::default()
            },
        )
        .await
        .expect("update succeeds");
    assert!(reopened.is_open());
}

#[tokio::test]
async fn enrolled_users_resolves_in_enrollment_scan_order() {
    let fx = fixture();
    let ada = fx
        .users
        .create(new_user("Ada", "ada@example.com"))
        .await
        .expect("create succeeds");
    let brian = fx
        .users
        .create(new_user("Brian", "brian@example.com"))
        .await
        .expect("create succeeds");
    let course = fx
        .courses
        .create(new_course("Rust Basics"))
        .await
        .expect("create succeeds");

    fx.enrollments
        .enroll(brian.id(), course.id())
        .await
        .expect("enroll succeeds");
    fx.enrollments
        .enroll(ada.id(), course.id())
        .await
        .expect("enroll succeeds");

    let enrolled = fx
        .courses
        .enrolled_users(course.id())
        .await
        .expect("listing succeeds");
    let names: Vec<&str> = enrolled.iter().map(|user| user.name().as_ref()).collect();
    assert_eq!(names, ["Brian", "Ada"]);
}

#[tokio::test]
async fn enrolled_users_skips_deleted_users_silently() {
    let fx = fixture();
    let ada = fx
        .users
        .create(new_user("Ada", "ada@example.com"))
        .await
        .expect("create succeeds");
    let brian = fx
        .users
        .create(new_user("Brian", "brian@example.com"))
        .await
        .expect("create succeeds");
    let course = fx
        .courses
        .create(new_course("Rust Basics"))
        .await
        .expect("create succeeds");
    fx.enrollments
        .enroll(ada.id(), course.id())
        .await
        .expect("enroll succeeds");
    fx.enrollments
        .enroll(brian.id(), course.id())
        .await
        .expect("enroll succeeds");

    fx.users.delete(ada.id()).await.expect("delete succeeds");

    let enrolled = fx
        .courses
        .enrolled_users(course.id())
        .await
        .expect("orphan tolerated");
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0].name().as_ref(), "Brian");
}

#[tokio::test]
async fn enrolled_users_requires_the_course_to_exist() {
    let fx = fixture();
    let error = fx
        .courses
        .enrolled_users(CourseId::new(7))
        .await
        .expect_err("unknown course");
    assert_eq!(error.code(), ErrorCode::NotFound);
}
