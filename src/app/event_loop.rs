use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Datelike;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, PageSource, update};
use crate::page::Page;

/// Poll interval while a smooth scroll is animating (~60 fps).
const ANIMATION_FRAME_MS: u64 = 16;
/// Upper bound on idle sleeps.
const IDLE_POLL_MS: u64 = 250;

impl App {
    /// Load the page and run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be read or the terminal cannot be
    /// initialised, or if reading terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        let page = self.load_page()?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; landing requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(page, (size.width, size.height))
            .with_idle_ms(self.idle_ms)
            .with_scroll_top_threshold(self.scroll_top_threshold)
            .with_smooth_ms(self.smooth_ms)
            .with_source_name(self.source.display_name());
        model.show_startup_hint();
        tracing::info!(
            sections = model.page.sections().len(),
            rows = model.page.line_count(),
            "page ready"
        );

        let result = execute!(stdout(), EnableMouseCapture)
            .context("Failed to enable mouse capture")
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }

    fn load_page(&self) -> Result<Page> {
        let mut page = match &self.source {
            PageSource::File(path) => crate::page::load(path)?,
            PageSource::Demo(count) => Page::demo(*count),
        };
        page.stamp_footer_year(chrono::Local::now().year());
        Ok(page)
    }

    fn dispatch(model: &mut Model, msg: Message) {
        tracing::trace!(?msg, "message");
        *model = update(std::mem::take(model), msg);
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let elapsed_ms = || u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let mut needs_render = true;

        loop {
            let before = model.frame_key();
            Self::dispatch(model, Message::Tick(elapsed_ms()));
            if model.frame_key() != before {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            let poll_ms = if model.is_animating() {
                ANIMATION_FRAME_MS
            } else {
                model
                    .next_wakeup_ms()
                    .map_or(IDLE_POLL_MS, |ms| ms.min(IDLE_POLL_MS))
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Keep the clock current so timers armed by this event start now.
                Self::dispatch(model, Message::Tick(elapsed_ms()));
                if let Some(msg) = crate::app::input::handle_event(&event::read()?, model) {
                    Self::dispatch(model, msg);
                    needs_render = true;
                }

                // Coalesce bursts (wheel, key repeat) into a single render.
                while event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = crate::app::input::handle_event(&event::read()?, model) {
                        Self::dispatch(model, msg);
                        needs_render = true;
                    }
                }
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
