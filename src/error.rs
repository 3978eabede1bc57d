//! Errores al cargar los datos estáticos del quiz.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("no se pudo parsear {asset}: {source}")]
    Parse {
        asset: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("tema duplicado en el catálogo: {topic}")]
    DuplicateTopic { topic: String },

    #[error("subtema duplicado en {topic}: {subtopic}")]
    DuplicateSubtopic { topic: String, subtopic: String },

    #[error("{topic} / {subtopic}, pregunta {index}: necesita al menos 2 opciones (tiene {count})")]
    TooFewOptions {
        topic: String,
        subtopic: String,
        index: usize,
        count: usize,
    },

    #[error("{topic} / {subtopic}, pregunta {index}: respuesta {answer} fuera de rango (0..{count})")]
    AnswerOutOfRange {
        topic: String,
        subtopic: String,
        index: usize,
        answer: usize,
        count: usize,
    },
}
