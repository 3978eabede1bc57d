use crate::model::{AppState, Question, QuizData};
use std::collections::BTreeMap;

// Submódulos
pub mod actions;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionRow, ResultRow};

/// La vista del quiz: tablas estáticas inyectadas + todo el estado transitorio.
pub struct QuizApp {
    pub(crate) data: QuizData,
    pub(crate) selected_topic: Option<String>,
    pub(crate) selected_subtopic: Option<String>,
    pub(crate) subtopics: Vec<String>,
    pub(crate) questions: Vec<Question>,
    pub(crate) answers: BTreeMap<usize, usize>, // pregunta -> opción elegida
    pub(crate) state: AppState,
    pub(crate) score: usize,
}

impl QuizApp {
    pub fn new(data: QuizData) -> Self {
        log::debug!("QuizApp creada con {} temas", data.catalog.len());
        Self {
            data,
            selected_topic: None,
            selected_subtopic: None,
            subtopics: Vec::new(),
            questions: Vec::new(),
            answers: BTreeMap::new(),
            state: AppState::Answering,
            score: 0,
        }
    }

    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    pub fn selected_subtopic(&self) -> Option<&str> {
        self.selected_subtopic.as_deref()
    }

    /// Subtemas del tema actual, en el orden del catálogo.
    pub fn subtopics(&self) -> &[String] {
        &self.subtopics
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    pub fn answer_for(&self, question_index: usize) -> Option<usize> {
        self.answers.get(&question_index).copied()
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == AppState::Submitted
    }

    /// Solo tiene sentido con el quiz enviado.
    pub fn score(&self) -> usize {
        self.score
    }
}
