use ratatui::layout::Rect;
use tracing::{debug, warn};

use super::ui;
use crate::splitter::{Chunk, split_chunks};

/// Which pane has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Typing or pasting text into the capture pane
    Capturing,
    /// Paging through the split results
    Viewing,
}

/// Everything the UI loop can ask the model to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Insert(String),
    DeleteBack,
    Submit,
    ToggleView,
    IncreaseSize,
    DecreaseSize,
    Reset,
    NextChunk,
    PrevChunk,
    ScrollUp,
    ScrollDown,
    Resize(u16, u16),
    Quit,
}

/// Bounds for adjusting the chunk size from the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeLimits {
    pub min: usize,
    pub max: usize,
    pub step: usize,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min: 500,
            max: 8000,
            step: 500,
        }
    }
}

/// Application state
pub struct App {
    pub mode: Mode,
    pub should_quit: bool,

    // Capture pane
    pub input: String,
    pub chunk_size: usize,

    // Results pane
    pub chunks: Vec<Chunk>,
    pub selected: usize,
    pub scroll: u16,

    /// Terminal size as (width, height)
    pub viewport: (u16, u16),
    pub last_error: Option<String>,

    limits: SizeLimits,
}

impl App {
    /// Start with `initial_text` already captured. Non-empty input opens
    /// straight on the results.
    pub fn new(chunk_size: usize, limits: SizeLimits, initial_text: &str) -> Self {
        let mut app = Self {
            mode: Mode::Capturing,
            should_quit: false,
            input: clean_input(initial_text).trim().to_string(),
            chunk_size,
            chunks: Vec::new(),
            selected: 0,
            scroll: 0,
            viewport: (0, 0),
            last_error: None,
            limits,
        };

        if !app.input.is_empty() {
            app.resplit();
            if !app.chunks.is_empty() {
                app.mode = Mode::Viewing;
            }
        }

        app
    }

    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Insert(text) => {
                if self.mode == Mode::Capturing {
                    let text = clean_input(&text);
                    if !text.is_empty() {
                        self.input.push_str(&text);
                        self.resplit();
                    }
                }
            }
            Action::DeleteBack => {
                if self.mode == Mode::Capturing && self.input.pop().is_some() {
                    self.resplit();
                }
            }
            Action::Submit => {
                if self.mode == Mode::Capturing {
                    self.resplit();
                    if !self.chunks.is_empty() {
                        self.mode = Mode::Viewing;
                        self.selected = 0;
                        self.scroll = 0;
                    }
                }
            }
            Action::ToggleView => match self.mode {
                Mode::Capturing if !self.chunks.is_empty() => self.mode = Mode::Viewing,
                Mode::Capturing => {}
                Mode::Viewing => self.mode = Mode::Capturing,
            },
            Action::IncreaseSize => {
                if self.chunk_size < self.limits.max {
                    self.chunk_size = (self.chunk_size + self.limits.step).min(self.limits.max);
                    self.resplit();
                }
            }
            Action::DecreaseSize => {
                if self.chunk_size > self.limits.min {
                    self.chunk_size = self
                        .chunk_size
                        .saturating_sub(self.limits.step)
                        .max(self.limits.min);
                    self.resplit();
                }
            }
            Action::Reset => {
                self.input.clear();
                self.chunks.clear();
                self.selected = 0;
                self.scroll = 0;
                self.last_error = None;
                self.mode = Mode::Capturing;
            }
            Action::NextChunk => {
                if self.selected + 1 < self.chunks.len() {
                    self.selected += 1;
                    self.scroll = 0;
                }
            }
            Action::PrevChunk => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.scroll = 0;
                }
            }
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(self.page_step());
                self.clamp_scroll();
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(self.page_step());
            }
            Action::Resize(width, height) => {
                self.viewport = (width, height);
                self.clamp_scroll();
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    pub fn selected_chunk(&self) -> Option<&Chunk> {
        self.chunks.get(self.selected)
    }

    pub fn input_chars(&self) -> usize {
        self.input.chars().count()
    }

    /// Rough part count shown while typing: ceil(chars / size)
    pub fn estimated_chunks(&self) -> usize {
        self.input_chars().div_ceil(self.chunk_size.max(1))
    }

    /// Recompute chunks from the current input and size
    fn resplit(&mut self) {
        match split_chunks(&self.input, self.chunk_size) {
            Ok(chunks) => {
                debug!(
                    chunks = chunks.len(),
                    chunk_size = self.chunk_size,
                    "re-split input"
                );
                self.chunks = chunks;
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "split failed");
                self.chunks.clear();
                self.last_error = Some(e.to_string());
            }
        }

        if self.selected >= self.chunks.len() {
            self.selected = self.chunks.len().saturating_sub(1);
            self.scroll = 0;
        }
        if self.chunks.is_empty() && self.mode == Mode::Viewing {
            self.mode = Mode::Capturing;
        }
        self.clamp_scroll();
    }

    /// Furthest scroll that still leaves the end of the selected part on screen
    pub fn max_scroll(&self) -> u16 {
        let Some(chunk) = self.selected_chunk() else {
            return 0;
        };

        let (width, height) = self.viewport;
        let body = ui::results_body(Rect::new(0, 0, width, height));
        let lines = if body.width == 0 {
            chunk.text.lines().count()
        } else {
            ui::wrapped_line_count(&chunk.text, body.width)
        };
        let visible = usize::from(body.height).max(1);

        u16::try_from(lines.saturating_sub(visible)).unwrap_or(u16::MAX)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Lines moved per scroll step: a quarter of the terminal height, at least one
    fn page_step(&self) -> u16 {
        (self.viewport.1 / 4).max(1)
    }
}

/// Keep printable text, tabs and newlines; fold CR/CRLF to LF
fn clean_input(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|&c| c == '\n' || c == '\t' || !c.is_control())
        .collect()
}
