//! Client state management.

use crate::models::question::Question;

/// Running per-session score. Monotonically non-decreasing; reset only by
/// restarting the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub total: u32,
}

impl SessionStats {
    /// Accuracy rounded to the nearest whole percent; 0 before any answer.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.correct * 100 + self.total / 2) / self.total
        }
    }
}

/// Current phase of the quiz client.
#[derive(Debug, Clone)]
pub enum Phase {
    /// A question fetch is in flight.
    Loading,

    /// A question is on screen and accepting a selection.
    Answering {
        question: Question,
        /// Highlighted option row.
        cursor: usize,
        /// The user's choice, if any. Submission requires one.
        selected: Option<usize>,
    },

    /// The answer has been graded locally.
    Submitted {
        question: Question,
        selected: usize,
        correct: bool,
    },

    /// The fetch failed; waiting for the user to retry.
    Failed { message: String },
}

/// How an option row should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMarker {
    /// Selectable, not currently chosen.
    Plain,
    /// The user's current (pre-submission) choice.
    Chosen,
    /// Graded: this is the correct answer.
    Correct,
    /// Graded: chosen, but wrong.
    Incorrect,
    /// Graded: neither chosen nor correct.
    Inert,
}

/// Quiz client application state.
pub struct QuizApp {
    pub phase: Phase,
    pub stats: SessionStats,
    pub should_quit: bool,
    generation: u64,
}

impl QuizApp {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            stats: SessionStats::default(),
            should_quit: false,
            generation: 0,
        }
    }

    /// Enter `Loading` and return the generation token the caller must tag
    /// the new fetch with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    /// Apply a settled fetch. Results from superseded fetches are dropped,
    /// so only the latest in-flight fetch can change the phase.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Question, String>) {
        if generation != self.generation {
            return;
        }
        self.phase = match result {
            Ok(question) => Phase::Answering {
                question,
                cursor: 0,
                selected: None,
            },
            Err(message) => Phase::Failed { message },
        };
    }

    pub fn cursor_up(&mut self) {
        if let Phase::Answering {
            question, cursor, ..
        } = &mut self.phase
        {
            // The wire format is not validated client-side, so guard
            // against a question arriving with no options.
            let len = question.options.len();
            if len > 0 {
                *cursor = (*cursor + len - 1) % len;
            }
        }
    }

    pub fn cursor_down(&mut self) {
        if let Phase::Answering {
            question, cursor, ..
        } = &mut self.phase
        {
            let len = question.options.len();
            if len > 0 {
                *cursor = (*cursor + 1) % len;
            }
        }
    }

    /// Select the highlighted option, replacing any prior selection.
    /// Keeps `selected` a valid index into the options.
    pub fn choose(&mut self) {
        if let Phase::Answering {
            question,
            cursor,
            selected,
        } = &mut self.phase
        {
            if *cursor < question.options.len() {
                *selected = Some(*cursor);
            }
        }
    }

    /// The option string currently selected, if any.
    pub fn selected_answer(&self) -> Option<&str> {
        match &self.phase {
            Phase::Answering {
                question,
                selected: Some(i),
                ..
            } => question.options.get(*i).map(String::as_str),
            Phase::Submitted {
                question, selected, ..
            } => question.options.get(*selected).map(String::as_str),
            _ => None,
        }
    }

    /// Grade the current selection locally and update the session stats.
    /// No-op until an option has been selected.
    pub fn submit(&mut self) {
        if let Phase::Answering {
            question,
            selected: Some(selected),
            ..
        } = &self.phase
        {
            let correct = question.options[*selected] == question.answer;
            self.stats.total += 1;
            if correct {
                self.stats.correct += 1;
            }
            self.phase = Phase::Submitted {
                question: question.clone(),
                selected: *selected,
                correct,
            };
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation rule for one option row, given the current phase.
pub fn option_marker(phase: &Phase, index: usize) -> OptionMarker {
    match phase {
        Phase::Answering { selected, .. } => {
            if *selected == Some(index) {
                OptionMarker::Chosen
            } else {
                OptionMarker::Plain
            }
        }
        Phase::Submitted {
            question, selected, ..
        } => {
            if question.options.get(index) == Some(&question.answer) {
                OptionMarker::Correct
            } else if *selected == index {
                OptionMarker::Incorrect
            } else {
                OptionMarker::Inert
            }
        }
        _ => OptionMarker::Plain,
    }
}

/// Literal line shown under a wrong answer.
pub fn correct_answer_line(question: &Question) -> String {
    format!("Correct Answer: {}", question.answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_service_question() -> Question {
        Question {
            id: 1,
            topic: "App Service".to_string(),
            skill_area: "Develop Azure compute solutions".to_string(),
            question: "Which plan offers elastic scale for Azure Functions?".to_string(),
            options: vec![
                "Free".to_string(),
                "Shared".to_string(),
                "PremiumV2".to_string(),
                "Elastic Premium".to_string(),
            ],
            answer: "Elastic Premium".to_string(),
            explanation: "The Elastic Premium plan scales event-driven workloads automatically."
                .to_string(),
        }
    }

    fn slot_question() -> Question {
        Question {
            id: 2,
            topic: "App Service".to_string(),
            skill_area: "Develop Azure compute solutions".to_string(),
            question: "Which operation promotes a staging slot into production?".to_string(),
            options: vec![
                "Traffic Manager".to_string(),
                "Swap".to_string(),
                "Scale-Out".to_string(),
                "Backup".to_string(),
            ],
            answer: "Swap".to_string(),
            explanation: "A slot swap exchanges staging and production with no downtime."
                .to_string(),
        }
    }

    fn app_with(question: Question) -> QuizApp {
        let mut app = QuizApp::new();
        let generation = app.begin_fetch();
        app.apply_fetch(generation, Ok(question));
        app
    }

    fn select_option(app: &mut QuizApp, text: &str) {
        let index = match &app.phase {
            Phase::Answering { question, .. } => {
                question.options.iter().position(|o| o == text).unwrap()
            }
            other => panic!("not answering: {:?}", other),
        };
        for _ in 0..index {
            app.cursor_down();
        }
        app.choose();
    }

    #[test]
    fn correct_submission_updates_stats() {
        let mut app = app_with(app_service_question());
        select_option(&mut app, "Elastic Premium");
        app.submit();

        match &app.phase {
            Phase::Submitted { correct, .. } => assert!(*correct),
            other => panic!("expected Submitted, got {:?}", other),
        }
        assert_eq!(app.stats, SessionStats { correct: 1, total: 1 });
        assert_eq!(app.stats.accuracy_percent(), 100);
    }

    #[test]
    fn incorrect_submission_updates_stats_and_shows_correct_answer() {
        let mut app = app_with(app_service_question());
        select_option(&mut app, "Free");
        app.submit();

        match &app.phase {
            Phase::Submitted {
                question, correct, ..
            } => {
                assert!(!*correct);
                assert_eq!(
                    correct_answer_line(question),
                    "Correct Answer: Elastic Premium"
                );
            }
            other => panic!("expected Submitted, got {:?}", other),
        }
        assert_eq!(app.stats, SessionStats { correct: 0, total: 1 });
        assert_eq!(app.stats.accuracy_percent(), 0);
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut app = app_with(app_service_question());
        app.submit();

        assert!(matches!(app.phase, Phase::Answering { selected: None, .. }));
        assert_eq!(app.stats, SessionStats::default());
    }

    #[test]
    fn choosing_replaces_prior_selection() {
        let mut app = app_with(slot_question());
        select_option(&mut app, "Backup");
        assert_eq!(app.selected_answer(), Some("Backup"));

        // move back up to "Swap" and choose again
        app.cursor_up();
        app.cursor_up();
        app.choose();
        assert_eq!(app.selected_answer(), Some("Swap"));

        app.submit();
        assert_eq!(app.stats, SessionStats { correct: 1, total: 1 });
    }

    #[test]
    fn stats_accumulate_across_questions() {
        let mut app = app_with(app_service_question());
        select_option(&mut app, "Elastic Premium");
        app.submit();

        let generation = app.begin_fetch();
        app.apply_fetch(generation, Ok(slot_question()));
        select_option(&mut app, "Traffic Manager");
        app.submit();

        assert_eq!(app.stats, SessionStats { correct: 1, total: 2 });
        assert_eq!(app.stats.accuracy_percent(), 50);
    }

    #[test]
    fn stale_fetch_results_are_dropped() {
        let mut app = QuizApp::new();
        let old = app.begin_fetch();
        let newer = app.begin_fetch();

        // The slow first fetch settles after a newer one was issued.
        app.apply_fetch(old, Ok(slot_question()));
        assert!(matches!(app.phase, Phase::Loading));

        app.apply_fetch(newer, Ok(app_service_question()));
        match &app.phase {
            Phase::Answering { question, .. } => assert_eq!(question.id, 1),
            other => panic!("expected Answering, got {:?}", other),
        }
    }

    #[test]
    fn fetch_failure_enters_failed_and_retry_recovers() {
        let mut app = QuizApp::new();
        let generation = app.begin_fetch();
        app.apply_fetch(generation, Err("Failed to load question.".to_string()));
        assert!(matches!(app.phase, Phase::Failed { .. }));

        let retry = app.begin_fetch();
        assert!(matches!(app.phase, Phase::Loading));
        app.apply_fetch(retry, Ok(app_service_question()));
        assert!(matches!(app.phase, Phase::Answering { .. }));
    }

    #[test]
    fn cursor_moves_tolerate_a_question_without_options() {
        let mut question = app_service_question();
        question.options.clear();
        question.answer = String::new();

        let mut app = app_with(question);
        app.cursor_down();
        app.cursor_up();
        app.choose();
        app.submit();

        // Nothing to select, so nothing was graded
        assert!(matches!(app.phase, Phase::Answering { .. }));
        assert_eq!(app.stats, SessionStats::default());
    }

    #[test]
    fn option_markers_before_submission() {
        let mut app = app_with(slot_question());
        assert_eq!(option_marker(&app.phase, 0), OptionMarker::Plain);

        select_option(&mut app, "Swap");
        assert_eq!(option_marker(&app.phase, 1), OptionMarker::Chosen);
        assert_eq!(option_marker(&app.phase, 0), OptionMarker::Plain);
    }

    #[test]
    fn option_markers_after_wrong_submission() {
        let mut app = app_with(slot_question());
        select_option(&mut app, "Backup");
        app.submit();

        assert_eq!(option_marker(&app.phase, 1), OptionMarker::Correct);
        assert_eq!(option_marker(&app.phase, 3), OptionMarker::Incorrect);
        assert_eq!(option_marker(&app.phase, 0), OptionMarker::Inert);
        assert_eq!(option_marker(&app.phase, 2), OptionMarker::Inert);
    }
}
