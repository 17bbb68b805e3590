use crate::{
    client::CaptionModel,
    clipboard::{ClipboardWriter, Copier},
    orchestrator::Orchestrator,
    settings::ThemeSettings,
};

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Generator,
}

/// Application shell: landing gate, generator, theme, and clipboard.
///
/// The landing screen only decides whether the generator is visible. Leaving
/// and re-entering keeps whatever the generator last showed.
pub struct App<M: CaptionModel, C: ClipboardWriter> {
    screen: Screen,
    pub generator: Orchestrator<M>,
    pub theme: ThemeSettings,
    pub copier: Copier<C>,
}

impl<M: CaptionModel, C: ClipboardWriter> App<M, C> {
    pub fn new(model: M, theme: ThemeSettings, clipboard: C) -> Self {
        Self {
            screen: Screen::Landing,
            generator: Orchestrator::new(model),
            theme,
            copier: Copier::new(clipboard),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn generator_visible(&self) -> bool {
        self.screen == Screen::Generator
    }

    /// Leave the landing screen and show the generator.
    pub fn enter(&mut self) {
        self.screen = Screen::Generator;
    }

    /// Return to the landing screen.
    pub fn exit(&mut self) {
        self.screen = Screen::Landing;
    }
}
