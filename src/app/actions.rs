use super::*;

impl QuizApp {
    /// Cambiar de tema deja todo lo demás a cero. `None` es la entrada "--Selecciona tema--".
    pub fn select_topic(&mut self, topic: Option<&str>) {
        log::debug!("Tema seleccionado: {topic:?}");
        self.subtopics = topic
            .map(|t| self.subtopics_for(t).to_vec())
            .unwrap_or_default();
        self.selected_topic = topic.map(str::to_owned);
        self.selected_subtopic = None;
        self.questions.clear();
        self.clear_answers();
    }

    pub fn select_subtopic(&mut self, subtopic: Option<&str>) {
        log::debug!("Subtema seleccionado: {subtopic:?}");
        self.questions = match (self.selected_topic.as_deref(), subtopic) {
            (Some(topic), Some(subtopic)) => self.questions_for(topic, subtopic).to_vec(),
            _ => Vec::new(),
        };
        self.selected_subtopic = subtopic.map(str::to_owned);
        self.clear_answers();
    }

    /// Guarda (o sobrescribe) la opción elegida para una pregunta.
    pub fn answer(&mut self, question_index: usize, option_index: usize) {
        if self.is_submitted() {
            log::warn!("Respuesta ignorada: el quiz ya está enviado");
            return;
        }
        let in_range = self
            .questions
            .get(question_index)
            .is_some_and(|q| option_index < q.options.len());
        if !in_range {
            log::warn!("Respuesta ignorada: pregunta {question_index}, opción {option_index} fuera de rango");
            return;
        }
        self.answers.insert(question_index, option_index);
    }

    /// Solo actúa desde el formulario: respondiendo y con preguntas cargadas.
    pub fn submit(&mut self) {
        if self.is_submitted() || self.questions.is_empty() {
            log::warn!("Envío ignorado en estado {:?}", self.state);
            return;
        }
        self.score = self.compute_score();
        self.state = AppState::Submitted;
        log::info!("Quiz enviado: {}", self.score_label());
    }

    /// Borra las respuestas sin tocar la selección ni las preguntas.
    pub fn reset(&mut self) {
        if self.is_submitted() {
            log::warn!("Reinicio ignorado: el quiz ya está enviado");
            return;
        }
        self.clear_answers();
    }

    fn clear_answers(&mut self) {
        self.answers.clear();
        self.score = 0;
        self.state = AppState::Answering;
    }
}
