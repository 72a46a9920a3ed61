use db::models::course::Level;
use db::models::quiz::{NewQuiz, Question, QuizOption};
use db::models::user::{NewUser, Role};

use super::{CourseDef, ModuleDef, note, video};

pub fn users() -> Vec<NewUser> {
    vec![
        NewUser::new("Admin User", "admin@elearning.com", "admin123", Role::Admin),
        NewUser::new("John Doe", "john@example.com", "password123", Role::Student),
        NewUser::new("Jane Smith", "jane@example.com", "password123", Role::Student),
    ]
}

pub fn courses() -> Vec<CourseDef> {
    vec![web_development()]
}

fn web_development() -> CourseDef {
    CourseDef::new(
        "Introduction to Web Development",
        "Learn the fundamentals of web development including HTML, CSS, and JavaScript. \
         This comprehensive course covers everything you need to know to start building \
         modern web applications.",
        "Web Development",
        Level::Beginner,
    )
    .duration(40)
    .module(
        ModuleDef::new("HTML Basics", "Learn the fundamentals of HTML")
            .material(note(
                "HTML Introduction",
                "<h2>What is HTML?</h2><p>HTML (HyperText Markup Language) is the standard \
                 markup language for creating web pages. It provides the structure and content \
                 of websites.</p><h3>Key Concepts:</h3><ul><li>Tags and Elements</li>\
                 <li>Attributes</li><li>Document Structure</li><li>Semantic HTML</li></ul>",
            ))
            .material(video(
                "HTML Video Tutorial",
                "https://www.youtube.com/embed/qz0aGYrrlhU",
                15,
            ))
            .quiz(html_basics_quiz()),
    )
    .module(ModuleDef::new("CSS Styling", "Master CSS for styling web pages"))
    .module(ModuleDef::new(
        "JavaScript Fundamentals",
        "Learn JavaScript programming basics",
    ))
}

fn html_basics_quiz() -> NewQuiz {
    NewQuiz {
        title: "HTML Basics Quiz".to_string(),
        description: Some("Test your knowledge of HTML basics".to_string()),
        questions: vec![
            Question::mcq(
                "What does HTML stand for?",
                vec![
                    QuizOption::new("HyperText Markup Language", true),
                    QuizOption::new("High Tech Modern Language", false),
                    QuizOption::new("Home Tool Markup Language", false),
                    QuizOption::new("Hyperlinks and Text Markup Language", false),
                ],
                1,
            )
            .explained(
                "HTML stands for HyperText Markup Language, which is the standard markup \
                 language for creating web pages.",
            ),
            Question::true_false("HTML is a programming language.", false, 1).explained(
                "HTML is a markup language, not a programming language. It is used to \
                 structure content on web pages.",
            ),
            Question::fill_blank(
                "The HTML tag used to create a paragraph is ____.",
                "<p>",
                1,
            )
            .explained("The <p> tag is used to define a paragraph in HTML."),
        ],
        passing_score: 60,
    }
}
