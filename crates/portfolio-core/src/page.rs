//! Page controller.
//!
//! All page-local state lives here: navigation, the project modal, the
//! contact form, topic tags, interest filters, and the one scheduler that
//! runs every deferred action. The app builds one controller at startup and
//! hands it to components through context.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Catalog;
use crate::config::PortfolioConfig;
use crate::form::ContactForm;
use crate::interests::{ExpandedItems, InterestFilter};
use crate::modal::{ModalState, ModalTemplate};
use crate::particles::{self, Particle, CELEBRATION};
use crate::scheduler::{Millis, Scheduler};
use crate::submission::Submission;
use crate::topics::TopicSelection;
use crate::validation::{FieldState, FormField};

/// Page sections in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Interests,
    Journey,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Projects,
            Section::Interests,
            Section::Journey,
            Section::Contact,
        ]
    }

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Interests => "interests",
            Section::Journey => "journey",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Interests => "Interests",
            Section::Journey => "Journey",
            Section::Contact => "Contact",
        }
    }
}

/// Deferred work owned by the page scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    CompleteSend { generation: u64 },
    ResetForm { generation: u64 },
    ClearCelebration { burst: u64 },
}

/// A running celebration burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub burst: u64,
    pub particles: Vec<Particle>,
}

pub struct PageController {
    catalog: Catalog,
    reset_delay: Duration,
    send_delay: Duration,
    section: Section,
    menu_open: bool,
    modal: ModalState,
    form: ContactForm,
    topics: TopicSelection,
    interest_filter: InterestFilter,
    expanded: ExpandedItems,
    celebration: Option<Celebration>,
    next_burst: u64,
    scheduler: Scheduler<PageAction>,
    rng: StdRng,
}

impl PageController {
    pub fn new(catalog: Catalog, config: &PortfolioConfig) -> Self {
        Self::with_rng(catalog, config, StdRng::from_os_rng())
    }

    /// Deterministic particles, for tests.
    pub fn with_seed(catalog: Catalog, config: &PortfolioConfig, seed: u64) -> Self {
        Self::with_rng(catalog, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, config: &PortfolioConfig, rng: StdRng) -> Self {
        Self {
            catalog,
            reset_delay: config.reset_delay(),
            send_delay: config.send_delay(),
            section: Section::default(),
            menu_open: false,
            modal: ModalState::default(),
            form: ContactForm::new(),
            topics: TopicSelection::default(),
            interest_filter: InterestFilter::default(),
            expanded: ExpandedItems::default(),
            celebration: None,
            next_burst: 0,
            scheduler: Scheduler::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // Navigation

    pub fn section(&self) -> Section {
        self.section
    }

    /// Jump to `section`; the mobile menu closes behind it.
    pub fn navigate(&mut self, section: Section) {
        self.section = section;
        self.menu_open = false;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Background scroll is suspended while the modal or the mobile menu
    /// is open.
    pub fn scroll_locked(&self) -> bool {
        self.modal.scroll_locked() || self.menu_open
    }

    /// Inline `overflow` for the document scroller. Locking only hides the
    /// scrollbar, so the scroll offset survives the lock.
    pub fn document_overflow(&self) -> &'static str {
        if self.scroll_locked() {
            "hidden"
        } else {
            ""
        }
    }

    // Project modal

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn open_project(&mut self, id: &str) -> bool {
        self.modal.open(&self.catalog, id)
    }

    pub fn close_project(&mut self) -> bool {
        self.modal.close()
    }

    pub fn backdrop_click(&mut self, inside_content: bool) -> bool {
        self.modal.backdrop_click(inside_content)
    }

    /// Page-wide key handler.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.modal.handle_key(key)
    }

    pub fn modal_template(&self) -> Option<ModalTemplate> {
        self.modal
            .project(&self.catalog)
            .map(ModalTemplate::from_record)
    }

    // Contact form

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn update_field(&mut self, field: FormField, raw: &str) -> &FieldState {
        self.form.update(field, raw)
    }

    /// Handle the form's submit event at logical time `now`.
    ///
    /// Returns the captured submission, or `None` when a previous one is
    /// still in flight.
    pub fn submit(&mut self, now: Millis) -> Option<Submission> {
        let submission = self.form.begin_submit()?;
        tracing::info!(
            generation = submission.generation,
            subject = %submission.values.subject,
            "Contact form submitted"
        );
        let generation = submission.generation;
        if self.send_delay.is_zero() {
            self.finish_send(now, generation);
        } else {
            self.scheduler
                .schedule(now, self.send_delay, PageAction::CompleteSend { generation });
        }
        Some(submission)
    }

    fn finish_send(&mut self, now: Millis, generation: u64) {
        if !self.form.complete_send(generation) {
            return;
        }
        self.celebrate(now);
        self.scheduler
            .schedule(now, self.reset_delay, PageAction::ResetForm { generation });
    }

    fn celebrate(&mut self, now: Millis) {
        self.next_burst += 1;
        let burst = self.next_burst;
        self.scheduler
            .cancel_where(|action| matches!(action, PageAction::ClearCelebration { .. }));
        self.celebration = Some(Celebration {
            burst,
            particles: particles::burst(&CELEBRATION, &mut self.rng),
        });
        self.scheduler
            .schedule(now, CELEBRATION.lifetime, PageAction::ClearCelebration { burst });
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    // Topic tags

    pub fn topics(&self) -> &TopicSelection {
        &self.topics
    }

    pub fn select_topic(&mut self, topic: &str) {
        self.topics.select(topic);
    }

    // Interests

    pub fn interest_filter(&self) -> InterestFilter {
        self.interest_filter
    }

    pub fn set_interest_filter(&mut self, filter: InterestFilter) {
        self.interest_filter = filter;
    }

    pub fn expanded(&self) -> &ExpandedItems {
        &self.expanded
    }

    pub fn toggle_interest(&mut self, id: &str) -> bool {
        self.expanded.toggle(id)
    }

    pub fn interest_key(&mut self, id: &str, key: &str) -> Option<bool> {
        self.expanded.handle_key(id, key)
    }

    // Scheduling

    /// Run every action due at `now`. Returns how many ran.
    pub fn tick(&mut self, now: Millis) -> usize {
        let due = self.scheduler.drain_due(now);
        let count = due.len();
        for action in due {
            self.apply(now, action);
        }
        count
    }

    fn apply(&mut self, now: Millis, action: PageAction) {
        match action {
            PageAction::CompleteSend { generation } => self.finish_send(now, generation),
            PageAction::ResetForm { generation } => {
                if self.form.reset(generation) {
                    tracing::debug!(generation, "Contact form reset");
                }
            }
            PageAction::ClearCelebration { burst } => {
                if self.celebration.as_ref().map(|c| c.burst) == Some(burst) {
                    self.celebration = None;
                }
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.scheduler.next_deadline()
    }

    pub fn has_pending(&self) -> bool {
        !self.scheduler.is_idle()
    }
}
