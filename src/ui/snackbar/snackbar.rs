// SPDX-License-Identifier: MPL-2.0
//! The snackbar object: message, options, transition phase and timers.
//!
//! A snackbar is owned independently of whatever displays it. Displays bind
//! to it through its update [`Signal`] and only ever read its state, apart
//! from forwarding clicks and pause requests.
//!
//! Mutators on [`Snackbar`] take the instant explicitly and report whether
//! anything changed. Shared handles go through [`SnackbarHandleExt`], which
//! also has `Instant::now()` forms and emits the update signal.

use super::signal::Signal;
use crate::config::SnackbarConfig;
use crate::domain::{Size, ThemeColor, Variant};
use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shared handle to a snackbar.
pub type SnackbarHandle = Rc<RefCell<Snackbar>>;

/// Unique identifier for a snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnackbarId(u64);

impl SnackbarId {
    /// Creates a new unique snackbar ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SnackbarId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the accent color and default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Normal => palette::GRAY_700,
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown when no custom icon is set.
    #[must_use]
    pub fn default_icon(&self) -> Option<char> {
        match self {
            Severity::Normal => None,
            Severity::Info => Some('ℹ'),
            Severity::Success => Some('✓'),
            Severity::Warning => Some('⚠'),
            Severity::Error => Some('✕'),
        }
    }
}

/// Display and timing options of a snackbar.
#[derive(Debug, Clone, PartialEq)]
pub struct SnackbarOptions {
    pub severity: Severity,
    /// Label of the action button, if any.
    pub action: Option<String>,
    pub action_color: ThemeColor,
    /// Action button variant; falls back to `snackbar_variant`.
    pub action_variant: Option<Variant>,
    pub snackbar_variant: Variant,
    pub show_close_icon: bool,
    pub hide_icon: bool,
    /// Overrides the severity icon.
    pub icon: Option<char>,
    pub icon_color: ThemeColor,
    pub icon_size: Size,
    /// Stay visible until the user clicks.
    pub require_interaction: bool,
    pub visible_duration: Duration,
    pub show_transition: Duration,
    pub hide_transition: Duration,
}

impl Default for SnackbarOptions {
    fn default() -> Self {
        Self::from_config(&SnackbarConfig::default())
    }
}

impl SnackbarOptions {
    /// Options seeded from the `[snackbar]` settings section.
    #[must_use]
    pub fn from_config(config: &SnackbarConfig) -> Self {
        Self {
            severity: Severity::default(),
            action: None,
            action_color: ThemeColor::Default,
            action_variant: None,
            snackbar_variant: Variant::Filled,
            show_close_icon: config.show_close_icon,
            hide_icon: false,
            icon: None,
            icon_color: ThemeColor::Inherit,
            icon_size: Size::Medium,
            require_interaction: config.require_interaction,
            visible_duration: config.visible_duration(),
            show_transition: config.show_transition(),
            hide_transition: config.hide_transition(),
        }
    }
}

/// Transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, not yet displayed.
    Init,
    /// Fading in.
    Showing,
    /// Fully visible; the auto-dismiss timer runs here.
    Visible,
    /// Fading out.
    Hiding,
    /// Done; the snackbar can be removed.
    Hidden,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The action was triggered; the snackbar starts hiding.
    Action,
    /// The snackbar was dismissed without an action.
    Dismissed,
}

/// Read-only view model of a snackbar.
#[derive(Debug, Clone)]
pub struct SnackbarState {
    options: SnackbarOptions,
    phase: Phase,
    /// Time spent in the current phase before the clock was last stopped.
    elapsed: Duration,
    /// When the clock was last started; `None` while the visible timer is held.
    running_since: Option<Instant>,
    paused: bool,
    user_interacted: bool,
}

impl SnackbarState {
    fn new(options: SnackbarOptions) -> Self {
        Self {
            options,
            phase: Phase::Init,
            elapsed: Duration::ZERO,
            running_since: None,
            paused: false,
            user_interacted: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &SnackbarOptions {
        &self.options
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn user_interacted(&self) -> bool {
        self.user_interacted
    }

    #[must_use]
    pub fn show_action_button(&self) -> bool {
        self.options.action.is_some()
    }

    #[must_use]
    pub fn show_close_icon(&self) -> bool {
        self.options.show_close_icon
    }

    #[must_use]
    pub fn hide_icon(&self) -> bool {
        self.options.hide_icon
    }

    /// Icon glyph: the custom one, else the severity default.
    #[must_use]
    pub fn icon(&self) -> Option<char> {
        self.options
            .icon
            .or_else(|| self.options.severity.default_icon())
    }

    #[must_use]
    pub fn action_variant(&self) -> Variant {
        self.options
            .action_variant
            .unwrap_or(self.options.snackbar_variant)
    }

    /// Time spent in the current phase.
    #[must_use]
    pub fn phase_elapsed_at(&self, now: Instant) -> Duration {
        self.elapsed
            + self
                .running_since
                .map_or(Duration::ZERO, |since| now.saturating_duration_since(since))
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity_at(Instant::now())
    }

    /// Opacity for the current transition progress.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        let progress = |total: Duration| {
            if total.is_zero() {
                1.0
            } else {
                (self.phase_elapsed_at(now).as_secs_f32() / total.as_secs_f32()).min(1.0)
            }
        };

        match self.phase {
            Phase::Init | Phase::Hidden => opacity::TRANSPARENT,
            Phase::Showing => progress(self.options.show_transition),
            Phase::Visible => opacity::OPAQUE,
            Phase::Hiding => opacity::OPAQUE - progress(self.options.hide_transition),
        }
    }

    /// Duration of the current phase, `None` when it does not end on a timer.
    fn phase_duration(&self) -> Option<Duration> {
        match self.phase {
            Phase::Showing => Some(self.options.show_transition),
            Phase::Visible if self.options.require_interaction => None,
            Phase::Visible => Some(self.options.visible_duration),
            Phase::Hiding => Some(self.options.hide_transition),
            Phase::Init | Phase::Hidden => None,
        }
    }
}

/// A transient notification.
#[derive(Debug)]
pub struct Snackbar {
    id: SnackbarId,
    message: String,
    state: SnackbarState,
    on_update: Signal,
}

impl Snackbar {
    pub fn new(message: impl Into<String>, options: SnackbarOptions) -> Self {
        Self {
            id: SnackbarId::new(),
            message: message.into(),
            state: SnackbarState::new(options),
            on_update: Signal::new(),
        }
    }

    /// Creates a snackbar with default options and the given severity.
    pub fn with_severity(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(
            message,
            SnackbarOptions {
                severity,
                ..SnackbarOptions::default()
            },
        )
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, message)
    }

    /// Adds an action button.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.state.options.action = Some(label.into());
        self
    }

    /// Keeps the snackbar until the user clicks it.
    #[must_use]
    pub fn require_interaction(mut self) -> Self {
        self.state.options.require_interaction = true;
        self
    }

    /// Wraps the snackbar in a shared handle.
    #[must_use]
    pub fn into_handle(self) -> SnackbarHandle {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn id(&self) -> SnackbarId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn state(&self) -> &SnackbarState {
        &self.state
    }

    /// Signal emitted after every state change made through a handle.
    #[must_use]
    pub fn on_update(&self) -> &Signal {
        &self.on_update
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Hidden
    }

    /// Starts the show transition. Later calls are no-ops.
    ///
    /// Returns whether the state changed. Mutators on the snackbar itself
    /// never emit; [`SnackbarHandleExt`] emits once the borrow is released.
    pub fn init_at(&mut self, now: Instant) -> bool {
        if self.state.phase != Phase::Init {
            return false;
        }
        self.transition(Phase::Showing, now);
        true
    }

    /// Advances through every phase whose duration has elapsed.
    ///
    /// Returns whether any phase changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(duration) = self.state.phase_duration() {
            let elapsed = self.state.phase_elapsed_at(now);
            if elapsed < duration {
                break;
            }
            let next = match self.state.phase {
                Phase::Showing => Phase::Visible,
                Phase::Visible => Phase::Hiding,
                _ => Phase::Hidden,
            };
            // the overshoot belongs to the next phase
            let started = now.checked_sub(elapsed - duration).unwrap_or(now);
            self.transition(next, started);
            changed = true;
        }
        changed
    }

    /// Handles a click on the action, the close icon or the background.
    ///
    /// Returns `None` when the snackbar is already hiding or gone.
    pub fn clicked_at(&mut self, is_close: bool, now: Instant) -> Option<ClickOutcome> {
        if matches!(self.state.phase, Phase::Hiding | Phase::Hidden) {
            return None;
        }

        let outcome = if !is_close && self.state.show_action_button() {
            ClickOutcome::Action
        } else {
            ClickOutcome::Dismissed
        };

        self.state.user_interacted = true;
        self.transition(Phase::Hiding, now);
        Some(outcome)
    }

    /// Holds or releases the auto-dismiss timer. Only the `Visible` phase
    /// is held; show and hide transitions always run to the end.
    ///
    /// Returns whether the state changed.
    pub fn pause_transitions_at(&mut self, pause: bool, now: Instant) -> bool {
        if self.state.paused == pause {
            return false;
        }
        self.state.paused = pause;

        if self.state.phase == Phase::Visible {
            if pause {
                self.state.elapsed = self.state.phase_elapsed_at(now);
                self.state.running_since = None;
            } else {
                self.state.running_since = Some(now);
            }
        }
        true
    }

    fn transition(&mut self, phase: Phase, now: Instant) {
        log::debug!(
            "snackbar {:?}: {:?} -> {:?}",
            self.id,
            self.state.phase,
            phase
        );
        self.state.phase = phase;
        self.state.elapsed = Duration::ZERO;
        self.state.running_since = if self.state.paused && phase == Phase::Visible {
            None
        } else {
            Some(now)
        };
    }
}

/// Mutations through a shared handle.
///
/// Each call releases the `RefCell` borrow before emitting the update
/// signal, so subscribers may read the snackbar from their callback.
pub trait SnackbarHandleExt {
    fn init(&self) {
        self.init_at(Instant::now());
    }

    fn init_at(&self, now: Instant);

    fn tick(&self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&self, now: Instant);

    fn clicked(&self, is_close: bool) -> Option<ClickOutcome> {
        self.clicked_at(is_close, Instant::now())
    }

    fn clicked_at(&self, is_close: bool, now: Instant) -> Option<ClickOutcome>;

    fn pause_transitions(&self, pause: bool) {
        self.pause_transitions_at(pause, Instant::now());
    }

    fn pause_transitions_at(&self, pause: bool, now: Instant);
}

impl SnackbarHandleExt for SnackbarHandle {
    fn init_at(&self, now: Instant) {
        let changed = self.borrow_mut().init_at(now);
        emit_if(self, changed);
    }

    fn tick_at(&self, now: Instant) {
        let changed = self.borrow_mut().tick_at(now);
        emit_if(self, changed);
    }

    fn clicked_at(&self, is_close: bool, now: Instant) -> Option<ClickOutcome> {
        let outcome = self.borrow_mut().clicked_at(is_close, now);
        emit_if(self, outcome.is_some());
        outcome
    }

    fn pause_transitions_at(&self, pause: bool, now: Instant) {
        let changed = self.borrow_mut().pause_transitions_at(pause, now);
        emit_if(self, changed);
    }
}

fn emit_if(handle: &SnackbarHandle, changed: bool) {
    if changed {
        let signal = handle.borrow().on_update().clone();
        signal.emit();
    }
}
