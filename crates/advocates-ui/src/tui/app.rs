//! Terminal application state and event loop

use super::ui;
use crate::client::DirectoryClient;
use crate::config::UiConfig;
use crate::directory::{Directory, FetchRequest, FetchResponse};
use crate::worker::spawn_fetch_worker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

pub struct App {
    pub directory: Directory,
    pub should_quit: bool,
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
}

impl App {
    pub fn new(client: DirectoryClient) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
        let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();

        spawn_fetch_worker(client, request_rx, response_tx);

        Self {
            directory: Directory::new(),
            should_quit: false,
            request_tx,
            response_rx,
        }
    }

    fn send(&self, request: FetchRequest) {
        log::debug!("Requesting #{} {:?}", request.seq, request.term);
        if self.request_tx.send(request).is_err() {
            log::warn!("Fetch worker has exited");
        }
    }

    pub fn mount(&mut self) {
        let request = self.directory.mount();
        self.send(request);
    }

    /// Issue the debounced search if it is due
    pub fn poll_search(&mut self, now: Instant) {
        if let Some(request) = self.directory.poll(now) {
            self.send(request);
        }
    }

    /// Apply any responses from the worker (non-blocking)
    pub fn poll_results(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.directory.apply(response);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            (KeyCode::Up, _) => self.directory.select_prev(),
            (KeyCode::Down, _) => self.directory.select_next(),
            (KeyCode::Tab, _) => self.directory.cycle_tag(true),
            (KeyCode::BackTab, _) => self.directory.cycle_tag(false),
            (KeyCode::Enter, _) => {
                self.directory.select_focused_tag(now);
            }
            (code, modifiers) => {
                self.directory.handle_search_key(code, modifiers, now);
            }
        }
    }

    pub fn teardown(&mut self) {
        self.directory.teardown();
    }
}

/// Run the directory browser until the user quits
pub fn run(config: &UiConfig) -> Result<()> {
    let client = DirectoryClient::new(config.api_url.clone())?;
    let mut app = App::new(client);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);
    app.teardown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    app.mount();

    loop {
        app.poll_results();
        app.poll_search(Instant::now());

        terminal.draw(|f| ui::render(f, &app.directory))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
