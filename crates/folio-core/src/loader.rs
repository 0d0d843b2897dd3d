//! Full-page loading overlay.
//!
//! Three paths race to hide the overlay: a safety timer, DOM-ready plus the
//! minimum display time, and full load plus the minimum display time. The
//! first to arrive hides it; the rest are no-ops.
//!
//! Full load cancels the safety timer, so a late load event can keep the
//! overlay up past the safety timeout by up to the minimum display time.

use std::time::Duration;

use crate::{
    config::LoaderConfig,
    dom::{ClassList, InlineStyle},
    schedule::Command,
};

/// Class that starts the fade-out transition.
pub const FADE_OUT: &str = "fade-out";

/// Inputs the loader reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderEvent {
    /// The script started executing.
    Start,
    /// The document structure is parsed.
    DomReady,
    /// Every subresource finished loading.
    Loaded,
    /// A previously scheduled timer is due.
    Timer(LoaderTimer),
}

/// Timers owned by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoaderTimer {
    Safety,
    DomReadyDelay,
    LoadDelay,
    FadeComplete,
}

/// Where the overlay is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    FadingOut,
    Hidden,
}

pub struct Loader<N> {
    node: N,
    phase: LoaderPhase,
    min_display: Duration,
    safety_timeout: Duration,
    fade: Duration,
}

impl<N: ClassList + InlineStyle> Loader<N> {
    pub fn new(node: N, config: &LoaderConfig) -> Self {
        Self {
            node,
            phase: LoaderPhase::Visible,
            min_display: config.min_display(),
            safety_timeout: config.safety_timeout(),
            fade: config.fade(),
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn handle(&mut self, event: LoaderEvent) -> Vec<Command<LoaderTimer>> {
        match event {
            LoaderEvent::Start => vec![Command::schedule(self.safety_timeout, LoaderTimer::Safety)],
            LoaderEvent::DomReady => {
                vec![Command::schedule(self.min_display, LoaderTimer::DomReadyDelay)]
            }
            LoaderEvent::Loaded => vec![
                Command::Cancel(LoaderTimer::Safety),
                Command::schedule(self.min_display, LoaderTimer::LoadDelay),
            ],
            LoaderEvent::Timer(LoaderTimer::Safety) | LoaderEvent::Timer(LoaderTimer::LoadDelay) => {
                self.hide()
            }
            LoaderEvent::Timer(LoaderTimer::DomReadyDelay) => {
                let mut commands = vec![Command::Cancel(LoaderTimer::Safety)];
                commands.extend(self.hide());
                commands
            }
            LoaderEvent::Timer(LoaderTimer::FadeComplete) => {
                if self.phase == LoaderPhase::FadingOut {
                    self.node.set_style("display", "none");
                    self.phase = LoaderPhase::Hidden;
                    log::debug!("page loader hidden");
                }
                Vec::new()
            }
        }
    }

    /// Start the fade-out. Calling this again while fading or hidden does
    /// nothing.
    pub fn hide(&mut self) -> Vec<Command<LoaderTimer>> {
        if self.phase != LoaderPhase::Visible || self.node.has_class(FADE_OUT) {
            return Vec::new();
        }

        self.node.add_class(FADE_OUT);
        self.phase = LoaderPhase::FadingOut;
        vec![Command::schedule(self.fade, LoaderTimer::FadeComplete)]
    }
}
