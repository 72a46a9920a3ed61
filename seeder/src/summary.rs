//! End-of-run summaries printed by the binaries.

use colored::*;
use std::fmt::Write;

use crate::jobs::{BaseReport, VideoReport};
use crate::seeds::course::SeededCourse;

fn counted(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

fn course_line(out: &mut String, seeded: &SeededCourse) {
    let mut parts = vec![
        counted(seeded.modules.len(), "module", "modules"),
        counted(seeded.material_count(), "material", "materials"),
    ];
    if seeded.quiz_count() > 0 {
        parts.push(counted(seeded.quiz_count(), "quiz", "quizzes"));
    }
    let _ = writeln!(out, "  • {} ({})", seeded.course.title.bold(), parts.join(", "));
}

fn courses_block(out: &mut String, courses: &[SeededCourse]) {
    let _ = writeln!(out, "📚 {}", "Courses".bold());
    for seeded in courses {
        course_line(out, seeded);
    }
}

pub fn render_base(report: &BaseReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n🎉 {}", "Database seeded successfully!".green().bold());
    let _ = writeln!(
        out,
        "🧹 Cleared {} existing rows, created {} users\n",
        report.cleared.total(),
        report.users.len()
    );
    courses_block(&mut out, &report.courses);

    let _ = writeln!(out, "\n🔑 {}", "Test credentials".bold());
    for cred in &report.credentials {
        let _ = writeln!(
            out,
            "  {:<8} {} / {}",
            cred.role.to_string(),
            cred.email.cyan(),
            cred.password
        );
    }
    out
}

pub fn render_videos(report: &VideoReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n🎉 {}",
        format!("Added {} video courses", report.courses.len()).green().bold()
    );
    let _ = writeln!(out, "👤 Instructor: {}\n", report.instructor.email.cyan());
    courses_block(&mut out, &report.courses);
    out
}

pub fn print_base(report: &BaseReport) {
    print!("{}", render_base(report));
}

pub fn print_videos(report: &VideoReport) {
    print!("{}", render_videos(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::{seed_courses_with_videos, seed_database};
    use db::test_utils::setup_test_db;

    #[test]
    fn counts_are_pluralised() {
        assert_eq!(counted(1, "module", "modules"), "1 module");
        assert_eq!(counted(0, "quiz", "quizzes"), "0 quizzes");
        assert_eq!(counted(3, "quiz", "quizzes"), "3 quizzes");
    }

    #[tokio::test]
    async fn base_summary_lists_course_and_credentials() {
        let db = setup_test_db().await;
        let report = seed_database(&db).await.unwrap();
        let text = render_base(&report);

        assert!(text.contains("Introduction to Web Development"));
        assert!(text.contains("(3 modules, 2 materials, 1 quiz)"));
        assert!(text.contains("admin@elearning.com"));
        assert!(text.contains("/ admin123"));
        assert_eq!(text.matches("/ password123").count(), 2);
    }

    #[tokio::test]
    async fn video_summary_lists_every_course() {
        let db = setup_test_db().await;
        seed_database(&db).await.unwrap();
        let report = seed_courses_with_videos(&db).await.unwrap();
        let text = render_videos(&report);

        assert_eq!(text.matches("  • ").count(), 5);
        assert!(text.contains("(2 modules, 10 materials)"));
        assert!(text.contains("(1 module, 5 materials)"));
        assert!(!text.contains("quiz"));
        assert!(!text.contains("password"));
    }
}
