use db::models::course::Level;

use super::{CourseDef, ModuleDef, video};

/// Beginner courses built from public YouTube videos.
pub fn courses() -> Vec<CourseDef> {
    vec![
        javascript(),
        html_and_css(),
        react(),
        python(),
        web_design(),
    ]
}

fn javascript() -> CourseDef {
    CourseDef::new(
        "Introduction to JavaScript",
        "Learn JavaScript fundamentals from scratch. Perfect for beginners who want to start web development.",
        "Programming",
        Level::Beginner,
    )
    .thumbnail("https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=500&h=300&fit=crop")
    .module(
        ModuleDef::new("JavaScript Basics", "Get started with JavaScript fundamentals")
            .material(video("What is JavaScript?", "https://www.youtube.com/embed/W6NZfCO5tTE", 8))
            .material(video("Variables and Data Types", "https://www.youtube.com/embed/le-URjBhevE", 12))
            .material(video("Functions in JavaScript", "https://www.youtube.com/embed/FOD408a0EzU", 15))
            .material(video("Arrays and Objects", "https://www.youtube.com/embed/lLSN6weAqKU", 18))
            .material(video("DOM Manipulation", "https://www.youtube.com/embed/y17RuWkWdn8", 20)),
    )
}

fn html_and_css() -> CourseDef {
    CourseDef::new(
        "HTML & CSS Fundamentals",
        "Master the basics of HTML and CSS to create beautiful web pages. Ideal for complete beginners.",
        "Web Development",
        Level::Beginner,
    )
    .thumbnail("https://images.unsplash.com/photo-1633356122544-f134324ef6db?w=500&h=300&fit=crop")
    .module(
        ModuleDef::new("HTML Basics", "Learn HTML structure and elements")
            .material(video("Introduction to HTML", "https://www.youtube.com/embed/qz0aGYrrlhU", 10))
            .material(video("HTML Tags and Elements", "https://www.youtube.com/embed/bWPMSSsVo5s", 14))
            .material(video("HTML Forms", "https://www.youtube.com/embed/YwbIeMlxZAU", 16))
            .material(video("Semantic HTML", "https://www.youtube.com/embed/kGW8Al_cga4", 12))
            .material(video("HTML Best Practices", "https://www.youtube.com/embed/UB3IHstot6Q", 11)),
    )
    .module(
        ModuleDef::new("CSS Styling", "Learn CSS to style your web pages")
            .material(video("CSS Basics", "https://www.youtube.com/embed/OXGznpKZ_sA", 13))
            .material(video("CSS Selectors", "https://www.youtube.com/embed/l1mER1bV0N0", 15))
            .material(video("Flexbox Layout", "https://www.youtube.com/embed/JJSoEo8JSnc", 18))
            .material(video("CSS Grid", "https://www.youtube.com/embed/EiNiSFaiYvU", 20))
            .material(video("Responsive Design", "https://www.youtube.com/embed/srvUrASNj0s", 17)),
    )
}

fn react() -> CourseDef {
    CourseDef::new(
        "React for Beginners",
        "Start your journey with React. Learn components, hooks, and state management from the ground up.",
        "Frontend",
        Level::Beginner,
    )
    .thumbnail("https://images.unsplash.com/photo-1633356122544-f134324ef6db?w=500&h=300&fit=crop")
    .module(
        ModuleDef::new("React Fundamentals", "Learn React basics and concepts")
            .material(video("What is React?", "https://www.youtube.com/embed/dQw4w9WgXcQ", 9))
            .material(video("JSX and Components", "https://www.youtube.com/embed/sBws8MSXN7A", 16))
            .material(video("Props and State", "https://www.youtube.com/embed/IYvD9oBCuJI", 19))
            .material(video("React Hooks", "https://www.youtube.com/embed/TNhaISOUy6Q", 21))
            .material(video("Handling Events", "https://www.youtube.com/embed/DZfojMVYIsI", 14)),
    )
}

fn python() -> CourseDef {
    CourseDef::new(
        "Python Programming Basics",
        "Learn Python programming from scratch. Perfect for beginners interested in backend development.",
        "Programming",
        Level::Beginner,
    )
    .thumbnail("https://images.unsplash.com/photo-1526374965328-7f5ae4e8b08f?w=500&h=300&fit=crop")
    .module(
        ModuleDef::new("Python Essentials", "Learn Python fundamentals")
            .material(video("Introduction to Python", "https://www.youtube.com/embed/rfscVS0vtik", 11))
            .material(video("Variables and Data Types", "https://www.youtube.com/embed/OYOj8l0DIkE", 13))
            .material(video("Control Flow", "https://www.youtube.com/embed/z1Zw_-wDYAg", 17))
            .material(video("Functions", "https://www.youtube.com/embed/u-OmVr_fT98", 15))
            .material(video("Lists and Dictionaries", "https://www.youtube.com/embed/R-HLU9Fl5ug", 18)),
    )
}

fn web_design() -> CourseDef {
    CourseDef::new(
        "Web Design Essentials",
        "Learn the principles of web design and create beautiful, user-friendly websites.",
        "Design",
        Level::Beginner,
    )
    .thumbnail("https://images.unsplash.com/photo-1561070791-2526d30994b5?w=500&h=300&fit=crop")
    .module(
        ModuleDef::new("Design Principles", "Learn fundamental design principles")
            .material(video("Color Theory", "https://www.youtube.com/embed/GyVMoejbGFg", 12))
            .material(video("Typography", "https://www.youtube.com/embed/wOWk3jCWirQ", 14))
            .material(video("Layout and Composition", "https://www.youtube.com/embed/a5KYlHNKQB8", 16))
            .material(video("User Experience (UX)", "https://www.youtube.com/embed/Ovj4hFxko7c", 18))
            .material(video("Responsive Web Design", "https://www.youtube.com/embed/srvUrASNj0s", 17)),
    )
}
