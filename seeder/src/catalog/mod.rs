//! Hard-coded content fed to the seeders.
//!
//! `base` is the starter data set (users plus one course with a quiz);
//! `videos` is the catalog of beginner video courses.

pub mod base;
pub mod videos;

use db::models::course::{Level, NewCourse};
use db::models::material::{MaterialContent, NewMaterial};
use db::models::module::NewModule;
use db::models::quiz::NewQuiz;

/// A course and everything beneath it, in display order.
#[derive(Debug, Clone)]
pub struct CourseDef {
    pub course: NewCourse,
    pub modules: Vec<ModuleDef>,
}

#[derive(Debug, Clone)]
pub struct ModuleDef {
    pub module: NewModule,
    pub materials: Vec<NewMaterial>,
    pub quizzes: Vec<NewQuiz>,
}

impl CourseDef {
    pub fn new(title: &str, description: &str, category: &str, level: Level) -> Self {
        Self {
            course: NewCourse {
                title: title.to_owned(),
                description: description.to_owned(),
                category: category.to_owned(),
                level,
                duration: None,
                thumbnail: None,
            },
            modules: Vec::new(),
        }
    }

    pub fn duration(mut self, hours: i32) -> Self {
        self.course.duration = Some(hours);
        self
    }

    pub fn thumbnail(mut self, url: &str) -> Self {
        self.course.thumbnail = Some(url.to_owned());
        self
    }

    pub fn module(mut self, module: ModuleDef) -> Self {
        self.modules.push(module);
        self
    }

    pub fn material_count(&self) -> usize {
        self.modules.iter().map(|m| m.materials.len()).sum()
    }
}

impl ModuleDef {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            module: NewModule::new(title, Some(description)),
            materials: Vec::new(),
            quizzes: Vec::new(),
        }
    }

    pub fn material(mut self, material: NewMaterial) -> Self {
        self.materials.push(material);
        self
    }

    pub fn quiz(mut self, quiz: NewQuiz) -> Self {
        self.quizzes.push(quiz);
        self
    }
}

pub fn video(title: &str, embed_url: &str, minutes: i32) -> NewMaterial {
    NewMaterial::new(
        title,
        MaterialContent::Video {
            embed_url: embed_url.to_owned(),
            duration: minutes,
        },
    )
}

pub fn note(title: &str, html: &str) -> NewMaterial {
    NewMaterial::new(
        title,
        MaterialContent::Note {
            content: html.to_owned(),
        },
    )
}
