// SPDX-License-Identifier: MPL-2.0
//! Application state, update loop, and view composition.
//!
//! The app owns a navbar, an optional hero slideshow, the portfolio
//! gallery, an optional testimonial carousel, and at most one lightbox
//! overlay. Carousels are driven by a shared 100ms tick subscription;
//! each component computes its own deadlines against the tick instant.

use crate::config::{self, Config, ThemeMode, TICK_PERIOD};
use crate::portfolio::Portfolio;
use crate::testimonials;
use crate::ui::{empty_state, gallery, hero, lightbox, navbar, testimonials as testimonial_ui};
use iced::widget::{scrollable, Column, Stack};
use iced::{event, keyboard, time, window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

const APP_TITLE: &str = "Iced Folio";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Launch parameters collected by `main.rs`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Portfolio directory given on the command line; overrides the
    /// directory remembered in the config file.
    pub portfolio_dir: Option<PathBuf>,
}

/// Top-level messages routed through the update loop.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Gallery(gallery::Message),
    Testimonials(testimonial_ui::Message),
    Lightbox(lightbox::Message),
    /// Shared carousel timer tick.
    Tick(Instant),
    /// Open the native folder picker.
    OpenFolderDialog,
    /// Folder picker result (`None` when cancelled).
    FolderSelected(Option<PathBuf>),
}

/// Page content below the navbar.
enum Content {
    /// No portfolio directory chosen yet (or the last scan failed).
    Empty,
    Loaded(Box<Loaded>),
}

/// Sections of a loaded portfolio page. Hero and testimonials are
/// skipped entirely when they have nothing to show.
struct Loaded {
    hero: Option<hero::State>,
    gallery: gallery::State,
    testimonials: Option<testimonial_ui::State>,
}

pub struct App {
    config: Config,
    menu_open: bool,
    content: Content,
    lightbox: Option<lightbox::State>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let now = Instant::now();

        let dir = flags.portfolio_dir.or_else(|| config.portfolio_dir.clone());
        let content = match dir {
            Some(dir) => match load_content(&dir, &config, now) {
                Ok(content) => content,
                Err(err) => {
                    eprintln!("Failed to load portfolio from {}: {err}", dir.display());
                    Content::Empty
                }
            },
            None => Content::Empty,
        };

        let app = App {
            config,
            menu_open: false,
            content,
            lightbox: None,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        match self.config.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        match message {
            Message::Tick(tick) => {
                if let Content::Loaded(loaded) = &mut self.content {
                    if let Some(hero) = &mut loaded.hero {
                        hero.tick(tick);
                    }
                    if let Some(carousel) = &mut loaded.testimonials {
                        carousel.tick(tick);
                    }
                }
                Task::none()
            }
            Message::Navbar(message) => {
                match navbar::update(message, &mut self.menu_open) {
                    navbar::Event::None => Task::none(),
                    navbar::Event::OpenFolder => self.update(Message::OpenFolderDialog),
                    navbar::Event::ToggleTheme => {
                        self.config.theme_mode = self.config.theme_mode.toggled();
                        self.persist_config();
                        Task::none()
                    }
                    navbar::Event::ToggleAutoAdvance => {
                        let enabled = !self.config.auto_advance_enabled();
                        self.config.auto_advance = Some(enabled);
                        self.apply_auto_advance(enabled, now);
                        self.persist_config();
                        Task::none()
                    }
                }
            }
            Message::Hero(message) => {
                if let Content::Loaded(loaded) = &mut self.content {
                    if let Some(hero) = &mut loaded.hero {
                        hero.handle(message, now);
                    }
                }
                Task::none()
            }
            Message::Gallery(message) => {
                if let Content::Loaded(loaded) = &mut self.content {
                    if let gallery::Event::OpenLightbox { images, start } =
                        loaded.gallery.handle(message)
                    {
                        self.lightbox = Some(lightbox::State::new(images, start, now));
                    }
                }
                Task::none()
            }
            Message::Testimonials(message) => {
                if let Content::Loaded(loaded) = &mut self.content {
                    if let Some(carousel) = &mut loaded.testimonials {
                        carousel.handle(message, now);
                    }
                }
                Task::none()
            }
            Message::Lightbox(message) => {
                if let Some(overlay) = &mut self.lightbox {
                    if let lightbox::Event::Closed = overlay.handle(message, now) {
                        self.lightbox = None;
                    }
                }
                Task::none()
            }
            Message::OpenFolderDialog => {
                Task::perform(pick_folder(), Message::FolderSelected)
            }
            Message::FolderSelected(Some(dir)) => {
                match load_content(&dir, &self.config, now) {
                    Ok(content) => {
                        self.content = content;
                        self.lightbox = None;
                        self.config.portfolio_dir = Some(dir);
                        self.persist_config();
                    }
                    Err(err) => {
                        eprintln!("Failed to load portfolio from {}: {err}", dir.display());
                    }
                }
                Task::none()
            }
            Message::FolderSelected(None) => Task::none(),
        }
    }

    /// Propagates the auto-advance preference to every running carousel.
    fn apply_auto_advance(&mut self, enabled: bool, now: Instant) {
        if let Content::Loaded(loaded) = &mut self.content {
            if let Some(hero) = &mut loaded.hero {
                hero.set_auto_advance(enabled, now);
            }
            if let Some(carousel) = &mut loaded.testimonials {
                carousel.set_auto_advance(enabled, now);
            }
        }
    }

    fn persist_config(&self) {
        if let Err(err) = config::save(&self.config) {
            eprintln!("Failed to save config: {err}");
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        // Carousels only need ticks while a portfolio is loaded.
        if matches!(self.content, Content::Loaded(_)) {
            subscriptions.push(time::every(TICK_PERIOD).map(Message::Tick));
        }

        if self.lightbox.is_some() {
            subscriptions.push(event::listen_with(|event, _status, _window_id| {
                if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                    match key {
                        keyboard::Key::Named(keyboard::key::Named::Escape) => {
                            Some(Message::Lightbox(lightbox::Message::Close))
                        }
                        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                            Some(Message::Lightbox(lightbox::Message::Next))
                        }
                        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                            Some(Message::Lightbox(lightbox::Message::Previous))
                        }
                        _ => None,
                    }
                } else {
                    None
                }
            }));
        } else if self.menu_open {
            subscriptions.push(event::listen_with(|event, _status, _window_id| {
                if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) = event
                {
                    Some(Message::Navbar(navbar::Message::CloseMenu))
                } else {
                    None
                }
            }));
        }

        Subscription::batch(subscriptions)
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar = navbar::view(navbar::ViewContext {
            title: APP_TITLE,
            menu_open: self.menu_open,
            theme_mode: self.config.theme_mode,
            auto_advance: self.config.auto_advance_enabled(),
        })
        .map(Message::Navbar);

        let body: Element<'_, Message> = match &self.content {
            Content::Empty => empty_state::view(Message::OpenFolderDialog),
            Content::Loaded(loaded) => {
                let mut page = Column::new();
                if let Some(hero) = &loaded.hero {
                    page = page.push(hero.view().map(Message::Hero));
                }
                page = page.push(loaded.gallery.view().map(Message::Gallery));
                if let Some(carousel) = &loaded.testimonials {
                    page = page.push(carousel.view().map(Message::Testimonials));
                }
                scrollable(page).height(Length::Fill).into()
            }
        };

        let base: Element<'_, Message> = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(navbar)
            .push(body)
            .into();

        match &self.lightbox {
            Some(overlay) => Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(base)
                .push(overlay.view().map(Message::Lightbox))
                .into(),
            None => base,
        }
    }
}

/// Scans `dir` and builds the page sections. An empty scan result is
/// reported as an error so the caller can keep the previous content.
fn load_content(dir: &std::path::Path, config: &Config, now: Instant) -> crate::error::Result<Content> {
    let portfolio = Portfolio::scan(dir)?;
    if portfolio.is_empty() {
        return Err(crate::error::Error::Portfolio(format!(
            "no supported images found in {}",
            dir.display()
        )));
    }

    let auto_advance = config.auto_advance_enabled();

    let hero = if portfolio.hero_slides().is_empty() {
        None
    } else {
        Some(hero::State::new(portfolio.hero_slides(), auto_advance, now))
    };

    let testimonials = match testimonials::load(dir) {
        Ok(items) if !items.is_empty() => {
            Some(testimonial_ui::State::new(items, auto_advance, now))
        }
        Ok(_) => None,
        Err(err) => {
            eprintln!("Failed to load testimonials: {err}");
            None
        }
    };

    Ok(Content::Loaded(Box::new(Loaded {
        hero,
        gallery: gallery::State::new(portfolio),
        testimonials,
    })))
}

async fn pick_folder() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a portfolio folder")
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}
