use braacket_stats::{Cache, match_candidates_limited, player_report};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, DisableLineWrap, EnableLineWrap};
use crossterm::{execute, queue};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PROMPT_PREFIX: &str = "Search player: ";

pub fn run(cache: &Cache, images_dir: &Path, limit: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, DisableLineWrap)?;

    let result = event_loop(&mut stdout, cache, images_dir, limit);

    execute!(stdout, EnableLineWrap)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(
    stdout: &mut io::Stdout,
    cache: &Cache,
    images_dir: &Path,
    limit: usize,
) -> io::Result<()> {
    let mut state = PromptState::new(cache.names(), limit);
    let mut render_requested = true;

    loop {
        if render_requested {
            render(stdout, &state)?;
            render_requested = false;
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match state.on_key(key) {
                PromptAction::Redraw => render_requested = true,
                PromptAction::Submit(name) => {
                    show_player(stdout, cache, images_dir, &name)?;
                    state.reset();
                    render_requested = true;
                }
                PromptAction::Exit => break,
                PromptAction::None => {}
            },
            Event::Resize(..) => render_requested = true,
            _ => {}
        }
    }

    queue!(stdout, Clear(ClearType::FromCursorDown))?;
    write!(stdout, "\r\n")?;
    stdout.flush()
}

#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    None,
    Redraw,
    Submit(String),
    Exit,
}

struct PromptState {
    names: Vec<String>,
    query: String,
    cursor: usize,
    matches: Vec<String>,
    selected: usize,
    limit: usize,
}

impl PromptState {
    fn new(names: Vec<String>, limit: usize) -> Self {
        Self {
            names,
            query: String::new(),
            cursor: 0,
            matches: Vec::new(),
            selected: 0,
            limit: limit.max(1),
        }
    }

    fn reset(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.matches.clear();
        self.selected = 0;
    }

    fn on_key(&mut self, key: KeyEvent) -> PromptAction {
        if key.kind != KeyEventKind::Press {
            return PromptAction::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PromptAction::Exit;
        }

        match key.code {
            KeyCode::Esc => PromptAction::Exit,
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                self.recompute_matches();
                PromptAction::Redraw
            }
            KeyCode::Backspace => {
                if self.backspace_char() {
                    self.recompute_matches();
                    return PromptAction::Redraw;
                }
                PromptAction::None
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    return PromptAction::Redraw;
                }
                PromptAction::None
            }
            KeyCode::Right => {
                if self.cursor < self.query.chars().count() {
                    self.cursor += 1;
                    return PromptAction::Redraw;
                }
                PromptAction::None
            }
            KeyCode::Up => {
                if self.move_selection(-1) {
                    return PromptAction::Redraw;
                }
                PromptAction::None
            }
            KeyCode::Down => {
                if self.move_selection(1) {
                    return PromptAction::Redraw;
                }
                PromptAction::None
            }
            KeyCode::Enter => {
                if let Some(selected) = self.matches.get(self.selected) {
                    return PromptAction::Submit(selected.clone());
                }
                let typed = self.query.trim();
                if typed.is_empty() {
                    return PromptAction::None;
                }
                PromptAction::Submit(typed.to_string())
            }
            _ => PromptAction::None,
        }
    }

    fn recompute_matches(&mut self) {
        self.matches = match_candidates_limited(&self.query, &self.names, self.limit)
            .into_iter()
            .map(str::to_string)
            .collect();

        if self.matches.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.matches.len() {
            self.selected = self.matches.len() - 1;
        }
    }

    fn move_selection(&mut self, direction: isize) -> bool {
        if self.matches.is_empty() {
            return false;
        }

        let len = self.matches.len() as isize;
        let current = self.selected as isize;
        self.selected = ((current + direction + len) % len) as usize;
        true
    }

    fn insert_char(&mut self, ch: char) {
        let pos = self.cursor.min(self.query.chars().count());
        let byte_pos = byte_index_at_char(&self.query, pos);
        self.query.insert(byte_pos, ch);
        self.cursor = pos + 1;
    }

    fn backspace_char(&mut self) -> bool {
        let pos = self.cursor.min(self.query.chars().count());
        if pos == 0 {
            return false;
        }
        let byte_pos = byte_index_at_char(&self.query, pos - 1);
        self.query.remove(byte_pos);
        self.cursor = pos - 1;
        true
    }

    fn cursor_col(&self) -> u16 {
        let mut width = UnicodeWidthStr::width(PROMPT_PREFIX);
        for ch in self.query.chars().take(self.cursor) {
            width = width.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0));
        }
        width.min(u16::MAX as usize) as u16
    }
}

fn byte_index_at_char(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

fn render(stdout: &mut io::Stdout, state: &PromptState) -> io::Result<()> {
    queue!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    write!(stdout, "{PROMPT_PREFIX}{}", state.query)?;

    let mut below: u16 = 0;
    for (row, name) in state.matches.iter().enumerate() {
        let marker = if row == state.selected { "  > " } else { "    " };
        write!(stdout, "\r\n")?;
        queue!(stdout, Clear(ClearType::CurrentLine))?;
        write!(stdout, "{marker}{name}")?;
        below += 1;
    }

    if state.matches.is_empty() && !state.query.is_empty() {
        write!(stdout, "\r\n")?;
        queue!(stdout, Clear(ClearType::CurrentLine))?;
        write!(stdout, "  (no matches)")?;
        below += 1;
    }

    queue!(stdout, Clear(ClearType::FromCursorDown))?;
    if below > 0 {
        queue!(stdout, MoveUp(below))?;
    }
    queue!(stdout, MoveToColumn(state.cursor_col()))?;
    stdout.flush()
}

fn show_player(
    stdout: &mut io::Stdout,
    cache: &Cache,
    images_dir: &Path,
    name: &str,
) -> io::Result<()> {
    queue!(stdout, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;

    let body = match cache.find_by_name(name) {
        Some(record) => player_report(record, images_dir),
        None => "Player not found.".to_string(),
    };
    for line in body.lines() {
        write!(stdout, "{line}\r\n")?;
    }
    write!(stdout, "\r\n")?;
    stdout.flush()
}
