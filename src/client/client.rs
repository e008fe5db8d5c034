//! Interactive quiz client run loop.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::{Mutex, mpsc};

use crate::models::question::Question;

use super::fetch::ApiClient;
use super::state::{Phase, QuizApp};
use super::terminal;
use super::ui;

/// Shared client app state.
type SharedApp = Arc<Mutex<QuizApp>>;

/// A settled fetch: the generation it was issued under, plus the outcome.
type FetchOutcome = (u64, Result<Question, String>);

/// Run the quiz client against the API at `api_url`.
pub async fn run(api_url: String) -> Result<(), Box<dyn std::error::Error>> {
    let api = ApiClient::new(api_url);
    let app = Arc::new(Mutex::new(QuizApp::new()));
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();

    // Initial question fetch on mount
    {
        let mut app = app.lock().await;
        let generation = app.begin_fetch();
        spawn_fetch(&api, &tx, generation);
    }

    let mut term = terminal::init()?;
    let result = run_loop(&mut term, &app, &api, &tx, &mut rx).await;
    terminal::restore()?;
    result
}

/// Issue one random-question fetch tagged with its generation. The state
/// machine drops outcomes whose generation has been superseded.
fn spawn_fetch(api: &ApiClient, tx: &mpsc::UnboundedSender<FetchOutcome>, generation: u64) {
    let api = api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = api
            .random_question()
            .await
            .map_err(|_| "Failed to load question. Please try again.".to_string());
        let _ = tx.send((generation, outcome));
    });
}

async fn run_loop(
    term: &mut terminal::AppTerminal,
    app: &SharedApp,
    api: &ApiClient,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    rx: &mut mpsc::UnboundedReceiver<FetchOutcome>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Apply settled fetches before drawing
        while let Ok((generation, outcome)) = rx.try_recv() {
            let mut app = app.lock().await;
            app.apply_fetch(generation, outcome);
        }

        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            term.draw(|frame| ui::render(frame, &app))?;
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_input(app, api, tx, key.code).await;
            }
        }
    }
    Ok(())
}

/// Handle keyboard input per phase.
async fn handle_input(
    app: &SharedApp,
    api: &ApiClient,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    key: KeyCode,
) {
    let mut app = app.lock().await;

    match &app.phase {
        Phase::Loading => {
            if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
                app.should_quit = true;
            }
        }
        Phase::Answering { .. } => match key {
            KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
            KeyCode::Char(' ') => app.choose(),
            KeyCode::Enter => app.submit(),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let generation = app.begin_fetch();
                spawn_fetch(api, tx, generation);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        Phase::Submitted { .. } => match key {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('N') => {
                let generation = app.begin_fetch();
                spawn_fetch(api, tx, generation);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        Phase::Failed { .. } => match key {
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                let generation = app.begin_fetch();
                spawn_fetch(api, tx, generation);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
    }
}
