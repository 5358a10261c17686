use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, get_logger};
use leptos::*;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Display phase of one calculator panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Proof that a submission was admitted. Carries the generation number used
/// to recognize late completions of superseded requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

/// Single-flight guard for one panel.
///
/// All state lives on the UI thread; the races being closed here are logical
/// ones between overlapping async completions, not data races.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: Cell<bool>,
    generation: Cell<u64>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a submission unless one is already pending.
    pub fn try_begin(&self) -> Option<SubmissionTicket> {
        if self.in_flight.get() {
            return None;
        }
        self.in_flight.set(true);
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        Some(SubmissionTicket { generation })
    }

    /// Close out a submission. Returns false for a stale ticket - one whose
    /// generation has since been superseded - in which case the in-flight
    /// flag is left alone and the caller must not touch display state.
    pub fn settle(&self, ticket: &SubmissionTicket) -> bool {
        if ticket.generation != self.generation.get() {
            return false;
        }
        self.in_flight.set(false);
        true
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }
}

/// Request lifecycle for one panel: validate -> loading -> request ->
/// result/error. One instance per panel component; panels never share one.
#[derive(Clone)]
pub struct SubmissionFlow {
    panel: &'static str,
    guard: Rc<SubmissionGuard>,
    pub phase: RwSignal<SubmissionPhase>,
    pub notice: RwSignal<Option<String>>,
}

impl SubmissionFlow {
    pub fn new(panel: &'static str) -> Self {
        Self {
            panel,
            guard: Rc::new(SubmissionGuard::new()),
            phase: create_rw_signal(SubmissionPhase::Idle),
            notice: create_rw_signal(None),
        }
    }

    /// Validation failure: user-visible prompt, no network call, display
    /// phase untouched.
    pub fn reject(&self, error: &AppError) {
        get_logger().info(
            LogComponent::Application(self.panel),
            &format!("Submission blocked: {}", error),
        );
        self.notice.set(Some(error.user_notice().to_string()));
    }

    /// Admit the submission and flip the loading indicator on. The indicator
    /// is visible before the caller issues the request. Returns `None` when
    /// a request is already pending - that click is dropped, not queued.
    pub fn begin(&self) -> Option<SubmissionTicket> {
        match self.guard.try_begin() {
            Some(ticket) => {
                self.notice.set(None);
                self.phase.set(SubmissionPhase::Loading);
                Some(ticket)
            }
            None => {
                get_logger().warn(
                    LogComponent::Application(self.panel),
                    "⏳ Submission already in flight, ignoring click",
                );
                None
            }
        }
    }

    /// Successful completion. Returns false when the ticket went stale, in
    /// which case nothing on screen changed.
    pub fn settle_ok(&self, ticket: &SubmissionTicket) -> bool {
        if !self.guard.settle(ticket) {
            get_logger().warn(
                LogComponent::Application(self.panel),
                "Dropping late response for superseded submission",
            );
            return false;
        }
        self.phase.set(SubmissionPhase::Ready);
        true
    }

    /// Failed completion: loading cleared, notice shown, previously rendered
    /// results left untouched.
    pub fn settle_err(&self, ticket: &SubmissionTicket, error: &AppError) -> bool {
        if !self.guard.settle(ticket) {
            get_logger().warn(
                LogComponent::Application(self.panel),
                "Dropping late error for superseded submission",
            );
            return false;
        }
        get_logger().error(
            LogComponent::Application(self.panel),
            &format!("❌ Submission failed: {}", error),
        );
        self.phase.set(SubmissionPhase::Failed);
        self.notice.set(Some(error.user_notice().to_string()));
        true
    }

    pub fn is_loading(&self) -> bool {
        self.guard.is_in_flight()
    }

    /// Drive one full submission: admit it, await the request future, settle
    /// the ticket, and hand a still-current result to `on_success`. The
    /// loading indicator is on before `request` is even constructed.
    pub fn run<T, Fut, F>(&self, request: impl FnOnce() -> Fut + 'static, on_success: F)
    where
        T: 'static,
        Fut: Future<Output = Result<T, AppError>> + 'static,
        F: FnOnce(T) + 'static,
    {
        let Some(ticket) = self.begin() else {
            return;
        };
        let flow = self.clone();
        spawn_local(async move {
            match request().await {
                Ok(value) => {
                    if flow.settle_ok(&ticket) {
                        on_success(value);
                    }
                }
                Err(error) => {
                    flow.settle_err(&ticket, &error);
                }
            }
        });
    }
}
