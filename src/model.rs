use serde::Deserialize;
use std::collections::HashMap;

/// Tema del catálogo con sus subtemas, en el orden del fichero.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    #[serde(rename = "topic")]
    pub name: String,
    #[serde(default)]
    pub subtopics: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String, // Enunciado
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_option_index: usize, // Índice de la opción correcta
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.correct_option_index == option_index
    }
}

/// Catálogo ordenado de temas.
pub type TopicCatalog = Vec<Topic>;

/// tema -> subtema -> preguntas
pub type QuestionBank = HashMap<String, HashMap<String, Vec<Question>>>;

/// Las dos tablas estáticas que recibe la vista. Nunca se modifican tras la carga.
#[derive(Debug, Clone, Default)]
pub struct QuizData {
    pub catalog: TopicCatalog,
    pub bank: QuestionBank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Answering,
    Submitted,
}

/// Cómo se pinta cada opción en la vista de resultados.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    IncorrectPick,
    Neutral,
}
