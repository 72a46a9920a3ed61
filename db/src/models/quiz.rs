//! Quizzes and their questions.
//!
//! Questions are stored as one JSON array on the quiz row. Each question
//! shares an envelope (text, points, explanation) and carries a payload that
//! depends on its kind, so an mcq without options or a fill-in-the-blank with
//! options cannot be built.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, FromJsonQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub module_id: i64,
    /// Copy of the module's course, for lookups without a join.
    pub course_id: i64,
    #[sea_orm(column_type = "Json")]
    pub questions: QuestionList,
    /// Sum of all question points.
    pub total_points: i32,
    /// Percentage of `total_points` needed to pass.
    pub passing_score: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct QuestionList(pub Vec<Question>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

impl QuizOption {
    pub fn new(text: &str, is_correct: bool) -> Self {
        Self {
            text: text.to_owned(),
            is_correct,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuestionKind {
    /// Multiple choice; exactly one option is correct.
    Mcq { options: Vec<QuizOption> },
    TrueFalse { answer: bool },
    FillBlank { correct_answer: String },
}

/// A question as stored. Every kind is written with its derived `options`
/// and `correctAnswer`, so readers never need to know the kind to grade it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "QuestionDoc", try_from = "QuestionDoc")]
pub struct Question {
    pub question: String,
    pub points: u32,
    pub explanation: Option<String>,
    pub kind: QuestionKind,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionDoc {
    #[serde(rename = "type")]
    kind: String,
    question: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<QuizOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correct_answer: Option<String>,
    points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl From<Question> for QuestionDoc {
    fn from(q: Question) -> Self {
        let kind = match q.kind {
            QuestionKind::Mcq { .. } => "mcq",
            QuestionKind::TrueFalse { .. } => "truefalse",
            QuestionKind::FillBlank { .. } => "fillblank",
        };
        QuestionDoc {
            kind: kind.to_string(),
            options: q.options(),
            correct_answer: q.correct_answer(),
            question: q.question,
            points: q.points,
            explanation: q.explanation,
        }
    }
}

impl TryFrom<QuestionDoc> for Question {
    type Error = String;

    fn try_from(doc: QuestionDoc) -> Result<Self, String> {
        let kind = match doc.kind.as_str() {
            "mcq" => {
                let flagged = doc.options.iter().find(|o| o.is_correct).map(|o| &o.text);
                if let Some(stored) = &doc.correct_answer {
                    if flagged != Some(stored) {
                        return Err(format!(
                            "'{}' lists '{}' as correct but no option is flagged with it",
                            doc.question, stored
                        ));
                    }
                }
                QuestionKind::Mcq {
                    options: doc.options,
                }
            }
            "truefalse" => {
                let answer = match doc.correct_answer.as_deref().map(str::trim) {
                    Some(a) if a.eq_ignore_ascii_case("true") => true,
                    Some(a) if a.eq_ignore_ascii_case("false") => false,
                    Some(other) => {
                        return Err(format!("'{}' is not a true/false answer", other));
                    }
                    None => doc
                        .options
                        .iter()
                        .find(|o| o.is_correct)
                        .map(|o| o.text.eq_ignore_ascii_case("true"))
                        .ok_or_else(|| format!("'{}' has no answer", doc.question))?,
                };
                QuestionKind::TrueFalse { answer }
            }
            "fillblank" => QuestionKind::FillBlank {
                correct_answer: doc
                    .correct_answer
                    .ok_or_else(|| format!("'{}' has no correctAnswer", doc.question))?,
            },
            other => return Err(format!("unknown question type '{}'", other)),
        };

        Ok(Question {
            question: doc.question,
            points: doc.points,
            explanation: doc.explanation,
            kind,
        })
    }
}

impl Question {
    pub fn mcq(question: &str, options: Vec<QuizOption>, points: u32) -> Self {
        Self::with_kind(question, points, QuestionKind::Mcq { options })
    }

    pub fn true_false(question: &str, answer: bool, points: u32) -> Self {
        Self::with_kind(question, points, QuestionKind::TrueFalse { answer })
    }

    pub fn fill_blank(question: &str, correct_answer: &str, points: u32) -> Self {
        Self::with_kind(
            question,
            points,
            QuestionKind::FillBlank {
                correct_answer: correct_answer.to_owned(),
            },
        )
    }

    fn with_kind(question: &str, points: u32, kind: QuestionKind) -> Self {
        Self {
            question: question.to_owned(),
            points,
            explanation: None,
            kind,
        }
    }

    pub fn explained(mut self, explanation: &str) -> Self {
        self.explanation = Some(explanation.to_owned());
        self
    }

    /// Options shown to the learner. Empty for fill-in-the-blank.
    pub fn options(&self) -> Vec<QuizOption> {
        match &self.kind {
            QuestionKind::Mcq { options } => options.clone(),
            QuestionKind::TrueFalse { answer } => vec![
                QuizOption::new("True", *answer),
                QuizOption::new("False", !*answer),
            ],
            QuestionKind::FillBlank { .. } => Vec::new(),
        }
    }

    pub fn correct_answer(&self) -> Option<String> {
        match &self.kind {
            QuestionKind::Mcq { options } => options
                .iter()
                .find(|o| o.is_correct)
                .map(|o| o.text.clone()),
            QuestionKind::TrueFalse { answer } => {
                Some(if *answer { "True" } else { "False" }.to_string())
            }
            QuestionKind::FillBlank { correct_answer } => Some(correct_answer.clone()),
        }
    }

    /// Mcq answers must match an option exactly; the other kinds ignore case
    /// and surrounding whitespace.
    pub fn is_correct(&self, answer: &str) -> bool {
        let Some(expected) = self.correct_answer() else {
            return false;
        };
        match self.kind {
            QuestionKind::Mcq { .. } => answer == expected,
            _ => answer.trim().eq_ignore_ascii_case(expected.trim()),
        }
    }

    pub fn check(&self) -> Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("Question text cannot be empty".into());
        }
        if self.points == 0 {
            return Err(format!("'{}' must be worth at least one point", self.question));
        }
        match &self.kind {
            QuestionKind::Mcq { options } => {
                if options.len() < 2 {
                    return Err(format!("'{}' needs at least two options", self.question));
                }
                let correct = options.iter().filter(|o| o.is_correct).count();
                if correct != 1 {
                    return Err(format!(
                        "'{}' must have exactly one correct option, found {}",
                        self.question, correct
                    ));
                }
            }
            QuestionKind::TrueFalse { .. } => {}
            QuestionKind::FillBlank { correct_answer } => {
                if correct_answer.trim().is_empty() {
                    return Err(format!("'{}' needs a correct answer", self.question));
                }
            }
        }
        Ok(())
    }
}

/// Outcome of [`Model::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub earned: u64,
    pub total: u64,
    pub passed: bool,
}

#[derive(Debug, Clone, Validate)]
pub struct NewQuiz {
    #[validate(length(min = 1, message = "Quiz title cannot be empty"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "A quiz needs at least one question"))]
    pub questions: Vec<Question>,

    #[validate(range(min = 0, max = 100, message = "Passing score must be between 0 and 100"))]
    pub passing_score: i32,
}

impl NewQuiz {
    pub fn total_points(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points)).sum()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id"
    )]
    Module,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Validates and inserts a quiz. `total_points` is computed from the
    /// questions.
    pub async fn create(
        db: &DatabaseConnection,
        quiz: &NewQuiz,
        module_id: i64,
        course_id: i64,
        is_published: bool,
    ) -> Result<Self, DbErr> {
        super::validate(quiz)?;
        for question in &quiz.questions {
            question.check().map_err(DbErr::Custom)?;
        }
        let total_points = i32::try_from(quiz.total_points())
            .map_err(|_| DbErr::Custom("Quiz total points overflow".into()))?;

        let now = Utc::now();
        let active = ActiveModel {
            title: Set(quiz.title.clone()),
            description: Set(quiz.description.clone()),
            module_id: Set(module_id),
            course_id: Set(course_id),
            questions: Set(QuestionList(quiz.questions.clone())),
            total_points: Set(total_points),
            passing_score: Set(quiz.passing_score),
            is_published: Set(is_published),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Scores one answer per question, in question order. Missing answers
    /// count as wrong.
    pub fn score(&self, answers: &[&str]) -> Score {
        let earned = self
            .questions
            .0
            .iter()
            .enumerate()
            .filter(|(i, q)| answers.get(*i).is_some_and(|a| q.is_correct(a)))
            .map(|(_, q)| u64::from(q.points))
            .sum::<u64>();
        let total = self.total_points.max(0) as u64;
        let passing = self.passing_score.max(0) as u64;
        let passed = total > 0 && earned * 100 >= passing * total;

        Score {
            earned,
            total,
            passed,
        }
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_by_module_id(
        db: &DatabaseConnection,
        module_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::ModuleId.eq(module_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Entity::find().count(db).await
    }

    pub async fn delete_all(db: &DatabaseConnection) -> Result<u64, DbErr> {
        Ok(Entity::delete_many().exec(db).await?.rows_affected)
    }
}
