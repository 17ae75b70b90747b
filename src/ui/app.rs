use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;
use tracing::info;

use crate::{
    config::Config,
    event::events::Event,
    http::{ApiService, LyricsBackend},
    i18n::Locale,
    ui::{
        components::search_bar::SearchBar,
        controller::QueryController,
        layout::{AppLayout, Hitboxes},
        message::AppMessage,
        renderer::ResultsRenderer,
        state::Focus,
    },
};

use super::{tui, util::handler::EventHandler};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub controller: QueryController,
    pub renderer: ResultsRenderer,
    pub search_bar: SearchBar,
    pub focus: Focus,
    pub hitboxes: Hitboxes,
    pub locale: Locale,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let api = ApiService::new(config.endpoint)?;
        info!("Using endpoint {}", api.endpoint());
        Ok(Self::with_backend(
            Arc::new(api),
            Locale::new(config.language),
        ))
    }

    pub fn with_backend(backend: Arc<dyn LyricsBackend>, locale: Locale) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            controller: QueryController::new(backend, event_tx, locale),
            renderer: ResultsRenderer::new(locale),
            search_bar: SearchBar::default(),
            focus: Focus::SearchBar,
            hitboxes: Hitboxes::default(),
            locale,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true).paste(true);
        tui.enter()?;

        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Input(c) => self.search_bar.push(c),
            AppMessage::Backspace => self.search_bar.pop(),
            AppMessage::Submit => {
                self.controller
                    .dispatch_search(self.search_bar.value(), &mut self.renderer);
            }
            AppMessage::FocusSearchBar => self.focus = Focus::SearchBar,
            AppMessage::FocusResults => self.focus = Focus::Results,
            AppMessage::SelectNext => self.renderer.select_next(),
            AppMessage::SelectPrevious => self.renderer.select_previous(),
            AppMessage::OpenSelected => {
                self.renderer.open_selected();
            }
            AppMessage::OpenResult(index) => {
                if self.renderer.open(index) {
                    self.focus = Focus::Results;
                }
            }
            AppMessage::CloseModal => self.renderer.hide_modal(),
            AppMessage::ScrollModal(delta) => self.renderer.scroll_modal(delta),
        }
    }

    pub fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
