//! The two seeding procedures, each run over an already-open connection.

use crate::catalog::{base, videos};
use crate::error::SeedError;
use crate::seed::run_seeder;
use crate::seeds::course::{CourseSeeder, SeededCourse};
use crate::seeds::reset::{ResetCounts, ResetSeeder};
use crate::seeds::user::UserSeeder;
use db::models::user;
use log::info;
use sea_orm::DatabaseConnection;

/// Login details printed after `seed` so the data set can be used at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub role: user::Role,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct BaseReport {
    pub cleared: ResetCounts,
    pub users: Vec<user::Model>,
    pub courses: Vec<SeededCourse>,
    pub credentials: Vec<Credential>,
}

#[derive(Debug)]
pub struct VideoReport {
    pub instructor: user::Model,
    pub courses: Vec<SeededCourse>,
}

/// Wipes the store, then writes the starter users and course.
pub async fn seed_database(db: &DatabaseConnection) -> Result<BaseReport, SeedError> {
    let cleared = run_seeder(&ResetSeeder, "Reset", db).await?;

    let new_users = base::users();
    let users = run_seeder(&UserSeeder::new(new_users.clone()), "Users", db).await?;
    let admin = users
        .iter()
        .find(|u| u.is_admin())
        .ok_or(SeedError::MissingAdmin)?;

    let courses = run_seeder(&CourseSeeder::new(base::courses(), admin.id), "Courses", db).await?;
    info!("Base data seeded: {} users, {} courses", users.len(), courses.len());

    let credentials = new_users
        .into_iter()
        .map(|u| Credential {
            role: u.role,
            email: u.email,
            password: u.password,
        })
        .collect();

    Ok(BaseReport {
        cleared,
        users,
        courses,
        credentials,
    })
}

/// Appends the video catalog, taught by the first admin. Writes nothing when
/// no admin exists.
pub async fn seed_courses_with_videos(db: &DatabaseConnection) -> Result<VideoReport, SeedError> {
    let instructor = user::Model::find_admin(db)
        .await?
        .ok_or(SeedError::MissingAdmin)?;
    info!("Using {} as instructor", instructor.email);

    let courses = run_seeder(
        &CourseSeeder::new(videos::courses(), instructor.id),
        "Video courses",
        db,
    )
    .await?;
    info!("Video courses seeded: {}", courses.len());

    Ok(VideoReport {
        instructor,
        courses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::material::MaterialType;
    use db::models::user::Role;
    use db::models::{course, material, module, quiz};
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn seed_writes_the_starter_data_set() {
        let db = setup_test_db().await;
        seed_database(&db).await.unwrap();

        assert_eq!(user::Model::count(&db).await.unwrap(), 3);
        assert_eq!(user::Model::count_by_role(&db, Role::Admin).await.unwrap(), 1);
        assert_eq!(user::Model::count_by_role(&db, Role::Student).await.unwrap(), 2);

        let courses = course::Model::get_all(&db).await.unwrap();
        assert_eq!(courses.len(), 1);
        let course = &courses[0];

        let modules = module::Model::get_by_course_id(&db, course.id).await.unwrap();
        let module_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();
        assert_eq!(module_ids.len(), 3);
        assert_eq!(course.modules.as_slice(), module_ids.as_slice());

        let html = &modules[0];
        let materials = material::Model::get_by_module_id(&db, html.id).await.unwrap();
        let kinds: Vec<MaterialType> = materials.iter().map(|m| m.material_type).collect();
        assert_eq!(kinds, vec![MaterialType::Note, MaterialType::Video]);
        let material_ids: Vec<i64> = materials.iter().map(|m| m.id).collect();
        assert_eq!(html.materials.as_slice(), material_ids.as_slice());

        let quizzes = quiz::Model::get_by_module_id(&db, html.id).await.unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].total_points, 3);
        assert_eq!(html.quizzes.as_slice(), &[quizzes[0].id]);
    }

    #[tokio::test]
    async fn seed_replaces_existing_rows() {
        let db = setup_test_db().await;
        seed_database(&db).await.unwrap();
        seed_courses_with_videos(&db).await.unwrap();

        let report = seed_database(&db).await.unwrap();
        assert_eq!(report.cleared.courses, 6);
        assert_eq!(report.cleared.users, 3);

        assert_eq!(user::Model::count(&db).await.unwrap(), 3);
        assert_eq!(course::Model::count(&db).await.unwrap(), 1);
        assert_eq!(module::Model::count(&db).await.unwrap(), 3);
        assert_eq!(material::Model::count(&db).await.unwrap(), 2);
        assert_eq!(quiz::Model::count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seed_reports_credentials_for_every_user() {
        let db = setup_test_db().await;
        let report = seed_database(&db).await.unwrap();

        assert_eq!(report.credentials.len(), 3);
        let admin = &report.credentials[0];
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.email, "admin@elearning.com");
        assert!(report.users[0].verify_password(&admin.password));
    }

    #[tokio::test]
    async fn videos_append_five_published_courses() {
        let db = setup_test_db().await;
        seed_database(&db).await.unwrap();

        let report = seed_courses_with_videos(&db).await.unwrap();
        assert_eq!(report.courses.len(), 5);
        assert_eq!(course::Model::count(&db).await.unwrap(), 6);

        for (seeded, def) in report.courses.iter().zip(videos::courses()) {
            assert!(seeded.course.is_published);
            assert_eq!(seeded.course.instructor_id, report.instructor.id);
            assert_eq!(seeded.course.modules.len(), def.modules.len());

            for (module, module_def) in seeded.modules.iter().zip(&def.modules) {
                let stored = material::Model::get_by_module_id(&db, module.module.id).await.unwrap();
                let titles: Vec<&str> = stored.iter().map(|m| m.title.as_str()).collect();
                let expected: Vec<&str> =
                    module_def.materials.iter().map(|m| m.title.as_str()).collect();
                assert_eq!(titles, expected);

                let orders: Vec<i32> = stored.iter().map(|m| m.order).collect();
                let wanted: Vec<i32> = (1..=expected.len() as i32).collect();
                assert_eq!(orders, wanted);

                let ids: Vec<i64> = stored.iter().map(|m| m.id).collect();
                assert_eq!(module.module.materials.as_slice(), ids.as_slice());
                let reloaded = module::Model::get_by_id(&db, module.module.id).await.unwrap().unwrap();
                assert_eq!(reloaded.materials.as_slice(), ids.as_slice());
            }
        }
    }

    #[tokio::test]
    async fn videos_twice_duplicates_titles() {
        let db = setup_test_db().await;
        seed_database(&db).await.unwrap();

        seed_courses_with_videos(&db).await.unwrap();
        seed_courses_with_videos(&db).await.unwrap();

        assert_eq!(course::Model::count(&db).await.unwrap(), 11);
        let copies = course::Model::find_by_title(&db, "React for Beginners").await.unwrap();
        assert_eq!(copies.len(), 2);
        assert_ne!(copies[0].id, copies[1].id);
    }

    #[tokio::test]
    async fn videos_without_admin_writes_nothing() {
        let db = setup_test_db().await;

        let err = seed_courses_with_videos(&db).await.unwrap_err();
        assert!(matches!(err, SeedError::MissingAdmin));
        assert_eq!(err.exit_code(), 1);

        assert_eq!(course::Model::count(&db).await.unwrap(), 0);
        assert_eq!(module::Model::count(&db).await.unwrap(), 0);
        assert_eq!(material::Model::count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn videos_ignore_students() {
        let db = setup_test_db().await;
        user::Model::create(
            &db,
            &user::NewUser::new("John Doe", "john@example.com", "password123", Role::Student),
        )
        .await
        .unwrap();

        let err = seed_courses_with_videos(&db).await.unwrap_err();
        assert!(matches!(err, SeedError::MissingAdmin));
    }
}
