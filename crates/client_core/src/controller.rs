use anyhow::Result;
use schedule::{filter, generate, ScheduleConfig};
use shared::domain::{ScheduleItem, Theme};
use tracing::{error, info, warn};

use crate::{
    provider::TalkProvider,
    render::{Notice, Renderer},
    theme_store::ThemeStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewState {
    Loading,
    Ready(Vec<ScheduleItem>),
    Failed,
}

/// Owns everything the view needs: the generated items, the active search
/// term and the theme. Renders through `R` after every change.
pub struct ScheduleController<R> {
    renderer: R,
    config: ScheduleConfig,
    state: ViewState,
    term: String,
    theme: Theme,
}

impl<R: Renderer> ScheduleController<R> {
    pub fn new(renderer: R, config: ScheduleConfig, theme: Theme) -> Self {
        Self {
            renderer,
            config,
            state: ViewState::Loading,
            term: String::new(),
            theme,
        }
    }

    /// Fetches once and renders. A fetch failure is final for this
    /// controller; later searches keep showing the failure notice.
    pub async fn load(&mut self, provider: &dyn TalkProvider) -> Result<()> {
        self.renderer.apply_theme(self.theme)?;
        match provider.fetch_talks().await {
            Ok(talks) => {
                let items = generate(&talks, &self.config);
                info!(talks = talks.len(), items = items.len(), "schedule generated");
                self.state = ViewState::Ready(items);
            }
            Err(err) => {
                error!(error = %err, "failed to load schedule");
                self.state = ViewState::Failed;
            }
        }
        self.render()
    }

    pub fn search(&mut self, input: &str) -> Result<()> {
        self.term = input.to_lowercase();
        self.render()
    }

    /// Switches theme and re-renders. Persisting the choice is best-effort:
    /// a failed write is logged and the new theme stays active.
    pub fn toggle_theme(&mut self, store: &ThemeStore) -> Result<Theme> {
        let next = self.theme.toggled();
        self.renderer.apply_theme(next)?;
        self.theme = next;
        if let Err(error) = store.save(next) {
            warn!(%error, path = %store.path().display(), "failed to persist theme");
        }
        self.render()?;
        Ok(next)
    }

    pub fn items(&self) -> &[ScheduleItem] {
        match &self.state {
            ViewState::Ready(items) => items.as_slice(),
            ViewState::Loading | ViewState::Failed => &[],
        }
    }

    pub fn visible_items(&self) -> Vec<ScheduleItem> {
        filter(self.items(), &self.term)
    }

    pub fn has_failed(&self) -> bool {
        self.state == ViewState::Failed
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn render(&mut self) -> Result<()> {
        match &self.state {
            ViewState::Loading => Ok(()),
            ViewState::Failed => self.renderer.render_notice(Notice::LoadFailed),
            ViewState::Ready(items) => {
                let visible = filter(items, &self.term);
                if visible.is_empty() {
                    self.renderer.render_notice(Notice::NoResults)
                } else {
                    self.renderer.render_schedule(&visible)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
