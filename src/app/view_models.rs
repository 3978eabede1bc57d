use super::*;
use crate::model::OptionMark;

impl QuizApp {
    /// Marca de una opción: la correcta siempre gana a la elegida.
    pub fn option_mark(&self, question_index: usize, option_index: usize) -> OptionMark {
        let Some(q) = self.questions.get(question_index) else {
            return OptionMark::Neutral;
        };
        if q.is_correct(option_index) {
            OptionMark::Correct
        } else if self.answer_for(question_index) == Some(option_index) {
            OptionMark::IncorrectPick
        } else {
            OptionMark::Neutral
        }
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.questions
            .iter()
            .enumerate()
            .map(|(qi, q)| ResultRow {
                number: qi + 1,
                text: q.text.clone(),
                options: q
                    .options
                    .iter()
                    .enumerate()
                    .map(|(oi, text)| OptionRow {
                        text: text.clone(),
                        mark: self.option_mark(qi, oi),
                    })
                    .collect(),
            })
            .collect()
    }

    /// "<aciertos> / <total>"
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.questions.len())
    }

    /// El selector de subtema solo aparece si el tema tiene alguno.
    pub fn shows_subtopic_selector(&self) -> bool {
        !self.subtopics.is_empty()
    }

    pub fn shows_question_form(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Radios activos solo mientras se responde; tras enviar quedan visibles pero bloqueados.
    pub fn options_enabled(&self) -> bool {
        !self.is_submitted()
    }

    /// Enviar y Reiniciar desaparecen al enviar.
    pub fn shows_form_buttons(&self) -> bool {
        self.shows_question_form() && !self.is_submitted()
    }

    pub fn shows_results(&self) -> bool {
        self.is_submitted()
    }

    pub fn progress_label(&self) -> String {
        format!("{} / {} respondidas", self.answered_count(), self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{parse_bank, parse_catalog};
    use crate::model::{OptionMark, QuizData};
    use crate::QuizApp;

    fn arithmetic_app() -> QuizApp {
        let mut app = QuizApp::new(QuizData {
            catalog: parse_catalog("- topic: Math\n  subtopics: [Arithmetic]\n- topic: Empty").unwrap(),
            bank: parse_bank(
                r#"{"Math": {"Arithmetic": [
                    {"question": "2+2?", "options": ["3", "4", "5"], "answer": 1},
                    {"question": "3+3?", "options": ["5", "6", "7"], "answer": 1}
                ]}}"#,
            )
            .unwrap(),
        });
        app.select_topic(Some("Math"));
        app.select_subtopic(Some("Arithmetic"));
        app
    }

    #[test]
    fn marks_correct_and_incorrect_picks() {
        let mut app = arithmetic_app();
        app.answer(0, 1);
        app.answer(1, 0);
        app.submit();

        assert_eq!(app.score(), 1);
        assert_eq!(app.score_label(), "1 / 2");

        let rows = app.result_rows();
        assert_eq!(rows[0].label(), "1. 2+2?");
        assert_eq!(rows[0].options[1].text, "4");
        assert_eq!(rows[0].options[1].mark, OptionMark::Correct);
        assert_eq!(rows[0].options[0].mark, OptionMark::Neutral);

        assert_eq!(rows[1].options[0].text, "5");
        assert_eq!(rows[1].options[0].mark, OptionMark::IncorrectPick);
        assert_eq!(rows[1].options[1].text, "6");
        assert_eq!(rows[1].options[1].mark, OptionMark::Correct);
        assert_eq!(rows[1].options[2].mark, OptionMark::Neutral);
    }

    #[test]
    fn unanswered_submission_never_marks_incorrect_picks() {
        let mut app = arithmetic_app();
        app.submit();

        assert_eq!(app.score(), 0);
        assert_eq!(app.score_label(), "0 / 2");
        let marks: Vec<OptionMark> = app
            .result_rows()
            .into_iter()
            .flat_map(|r| r.options)
            .map(|o| o.mark)
            .collect();
        assert!(marks.iter().all(|m| *m != OptionMark::IncorrectPick));
        assert_eq!(marks.iter().filter(|m| **m == OptionMark::Correct).count(), 2);
    }

    #[test]
    fn progress_label_counts_answers() {
        let mut app = arithmetic_app();
        assert_eq!(app.progress_label(), "0 / 2 respondidas");
        app.answer(1, 2);
        assert_eq!(app.progress_label(), "1 / 2 respondidas");
    }

    #[test]
    fn nothing_selected_shows_only_topic_selector() {
        let mut app = arithmetic_app();
        app.select_topic(None);
        assert!(!app.shows_subtopic_selector());
        assert!(!app.shows_question_form());
        assert!(!app.shows_form_buttons());
        assert!(!app.shows_results());
    }

    #[test]
    fn topic_without_subtopics_hides_selector_and_form() {
        let mut app = arithmetic_app();
        app.select_topic(Some("Empty"));
        assert!(!app.shows_subtopic_selector());
        assert!(!app.shows_question_form());
        assert!(!app.shows_form_buttons());
        assert!(!app.shows_results());
    }

    #[test]
    fn topic_with_subtopics_shows_selector_before_form() {
        let mut app = arithmetic_app();
        app.select_topic(Some("Math"));
        assert!(app.shows_subtopic_selector());
        assert!(!app.shows_question_form());
    }

    #[test]
    fn answering_shows_enabled_form_with_buttons_and_no_results() {
        let mut app = arithmetic_app();
        app.answer(0, 1);
        assert!(app.shows_subtopic_selector());
        assert!(app.shows_question_form());
        assert!(app.options_enabled());
        assert!(app.shows_form_buttons());
        assert!(!app.shows_results());
    }

    #[test]
    fn submitted_keeps_disabled_form_hides_buttons_and_shows_results() {
        let mut app = arithmetic_app();
        app.answer(0, 1);
        app.submit();
        assert!(app.shows_question_form());
        assert!(!app.options_enabled());
        assert!(!app.shows_form_buttons());
        assert!(app.shows_results());
    }

    #[test]
    fn reselecting_subtopic_after_submit_hides_results() {
        let mut app = arithmetic_app();
        app.submit();
        app.select_subtopic(Some("Arithmetic"));
        assert!(app.options_enabled());
        assert!(app.shows_form_buttons());
        assert!(!app.shows_results());
    }
}
