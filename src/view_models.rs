// src/view_models.rs

use crate::model::OptionMark;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub text: String,
    pub mark: OptionMark,
}

/// Una pregunta en la vista de resultados.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub number: usize, // 1-based
    pub text: String,
    pub options: Vec<OptionRow>,
}

impl ResultRow {
    pub fn label(&self) -> String {
        format!("{}. {}", self.number, self.text)
    }
}

impl OptionRow {
    pub fn label(&self) -> String {
        match self.mark {
            OptionMark::Correct => format!("✅ {}", self.text),
            OptionMark::IncorrectPick => format!("❌ {}", self.text),
            OptionMark::Neutral => self.text.clone(),
        }
    }
}
