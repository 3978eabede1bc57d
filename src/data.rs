// src/data.rs

use crate::error::DataError;
use crate::model::{QuestionBank, QuizData, TopicCatalog};
use std::collections::HashSet;

const TOPICS_ASSET: &str = "quiz_topics.yaml";
const QUESTIONS_ASSET: &str = "quiz_questions.yaml";

/// Carga y valida las dos tablas embebidas en el binario.
pub fn load_embedded() -> Result<QuizData, DataError> {
    let catalog = parse_catalog(include_str!("data/quiz_topics.yaml"))?;
    let bank = parse_bank(include_str!("data/quiz_questions.yaml"))?;
    let data = QuizData { catalog, bank };
    data.validate()?;
    log::info!(
        "Datos cargados: {} temas, {} preguntas",
        data.catalog.len(),
        data.question_count()
    );
    Ok(data)
}

/// Acepta tanto YAML como el JSON de la versión web (JSON es YAML válido).
pub fn parse_catalog(text: &str) -> Result<TopicCatalog, DataError> {
    serde_yaml::from_str(text).map_err(|source| DataError::Parse {
        asset: TOPICS_ASSET,
        source,
    })
}

pub fn parse_bank(text: &str) -> Result<QuestionBank, DataError> {
    serde_yaml::from_str(text).map_err(|source| DataError::Parse {
        asset: QUESTIONS_ASSET,
        source,
    })
}

impl QuizData {
    pub fn question_count(&self) -> usize {
        self.bank
            .values()
            .flat_map(|subtopics| subtopics.values())
            .map(Vec::len)
            .sum()
    }

    /// Rechaza datos que romperían la vista: temas o subtemas repetidos,
    /// preguntas con menos de 2 opciones y respuestas fuera de rango.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen_topics = HashSet::new();
        for topic in &self.catalog {
            if !seen_topics.insert(topic.name.as_str()) {
                return Err(DataError::DuplicateTopic {
                    topic: topic.name.clone(),
                });
            }
            let mut seen_subtopics = HashSet::new();
            for subtopic in &topic.subtopics {
                if !seen_subtopics.insert(subtopic.as_str()) {
                    return Err(DataError::DuplicateSubtopic {
                        topic: topic.name.clone(),
                        subtopic: subtopic.clone(),
                    });
                }
            }
        }

        for (topic, subtopics) in &self.bank {
            for (subtopic, questions) in subtopics {
                for (index, q) in questions.iter().enumerate() {
                    let count = q.options.len();
                    if count < 2 {
                        return Err(DataError::TooFewOptions {
                            topic: topic.clone(),
                            subtopic: subtopic.clone(),
                            index,
                            count,
                        });
                    }
                    if q.correct_option_index >= count {
                        return Err(DataError::AnswerOutOfRange {
                            topic: topic.clone(),
                            subtopic: subtopic.clone(),
                            index,
                            answer: q.correct_option_index,
                            count,
                        });
                    }
                }

                let reachable = self
                    .catalog
                    .iter()
                    .any(|t| &t.name == topic && t.subtopics.contains(subtopic));
                if !reachable {
                    log::warn!("{topic} / {subtopic} no aparece en el catálogo; no se podrá seleccionar");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_load_and_validate() {
        let data = load_embedded().expect("assets embebidos válidos");
        assert!(!data.catalog.is_empty());
        assert_eq!(data.catalog[0].name, "Math");
        assert_eq!(data.catalog[0].subtopics, vec!["Arithmetic", "Geometry"]);

        let arithmetic = &data.bank["Math"]["Arithmetic"];
        assert_eq!(arithmetic[0].text, "2+2?");
        assert_eq!(arithmetic[0].options, vec!["3", "4", "5"]);
        assert_eq!(arithmetic[0].correct_option_index, 1);
    }

    #[test]
    fn every_catalog_subtopic_has_questions() {
        let data = load_embedded().expect("assets embebidos válidos");
        for topic in &data.catalog {
            for subtopic in &topic.subtopics {
                let questions = data
                    .bank
                    .get(&topic.name)
                    .and_then(|s| s.get(subtopic))
                    .map(Vec::len)
                    .unwrap_or(0);
                assert!(questions > 0, "{} / {} sin preguntas", topic.name, subtopic);
            }
        }
    }

    #[test]
    fn json_assets_from_the_web_version_parse() {
        let catalog = parse_catalog(
            r#"[{"topic": "Math", "subtopics": ["Arithmetic", "Algebra"]}, {"topic": "Empty", "subtopics": []}]"#,
        )
        .expect("catálogo json");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].subtopics, vec!["Arithmetic", "Algebra"]);
        assert!(catalog[1].subtopics.is_empty());

        let bank = parse_bank(
            r#"{"Math": {"Arithmetic": [{"question": "2+2?", "options": ["3", "4", "5"], "answer": 1}]}}"#,
        )
        .expect("banco json");
        assert_eq!(bank["Math"]["Arithmetic"][0].correct_option_index, 1);
    }

    #[test]
    fn malformed_asset_is_a_parse_error() {
        let err = parse_bank("Math: [1, 2").unwrap_err();
        assert!(matches!(err, DataError::Parse { asset: QUESTIONS_ASSET, .. }));
    }

    #[test]
    fn validate_rejects_answer_out_of_range() {
        let data = QuizData {
            catalog: parse_catalog("- topic: Math\n  subtopics: [Arithmetic]").unwrap(),
            bank: parse_bank(
                "Math:\n  Arithmetic:\n    - question: q\n      options: [a, b]\n      answer: 2",
            )
            .unwrap(),
        };
        let err = data.validate().unwrap_err();
        assert!(matches!(
            err,
            DataError::AnswerOutOfRange { answer: 2, count: 2, index: 0, .. }
        ));
    }

    #[test]
    fn validate_rejects_single_option_questions() {
        let data = QuizData {
            catalog: Vec::new(),
            bank: parse_bank("Math:\n  Arithmetic:\n    - question: q\n      options: [a]\n      answer: 0")
                .unwrap(),
        };
        assert!(matches!(
            data.validate(),
            Err(DataError::TooFewOptions { count: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_duplicate_topics_and_subtopics() {
        let dup_topic = QuizData {
            catalog: parse_catalog("- topic: Math\n- topic: Math").unwrap(),
            bank: QuestionBank::new(),
        };
        assert!(matches!(
            dup_topic.validate(),
            Err(DataError::DuplicateTopic { .. })
        ));

        let dup_subtopic = QuizData {
            catalog: parse_catalog("- topic: Math\n  subtopics: [Arithmetic, Arithmetic]").unwrap(),
            bank: QuestionBank::new(),
        };
        assert!(matches!(
            dup_subtopic.validate(),
            Err(DataError::DuplicateSubtopic { .. })
        ));
    }

    #[test]
    fn bank_entries_outside_catalog_are_allowed() {
        let data = QuizData {
            catalog: Vec::new(),
            bank: parse_bank("Orphan:\n  Lost:\n    - question: q\n      options: [a, b]\n      answer: 0")
                .unwrap(),
        };
        assert!(data.validate().is_ok());
        assert_eq!(data.question_count(), 1);
    }
}
