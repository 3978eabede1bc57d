use super::*;
use crate::model::Topic;

impl QuizApp {
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.data.catalog.iter().find(|t| t.name == name)
    }

    /// Subtemas de un tema; vacío si el tema no existe.
    pub fn subtopics_for(&self, topic: &str) -> &[String] {
        self.topic(topic).map(|t| t.subtopics.as_slice()).unwrap_or(&[])
    }

    /// Preguntas de un subtema; vacío si falta el tema o el subtema.
    pub fn questions_for(&self, topic: &str, subtopic: &str) -> &[Question] {
        self.data
            .bank
            .get(topic)
            .and_then(|subtopics| subtopics.get(subtopic))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.data.catalog.iter().map(|t| t.name.as_str())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Se recorre el set una vez; las preguntas sin responder nunca puntúan.
    pub fn compute_score(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answer_for(*i).is_some_and(|a| q.is_correct(a)))
            .count()
    }
}
