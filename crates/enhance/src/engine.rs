use crate::boot;
use crate::config::EnhanceConfig;
use crate::diagnostics::Diagnostics;
use bus::{BackgroundEvent, Bus, Dispatcher, FrameScheduler, TimerId, TimerQueue, UiEvent};
use core_types::NodeId;
use dom::{Document, ReadyState};
use net::{SubmitCallback, SubmitRequest, SubmitTransport};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use viewport::{ObserverRegistry, Viewport};

/// Length of one rendering frame on the virtual clock.
pub const FRAME_MS: u64 = 16;

/// What an unprevented default action asks the embedder to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Leave the page for the given URL (form submission, external anchor).
    Navigate(String),
}

/// Everything a handler may touch: document, viewport, observers, timers,
/// frame callbacks, diagnostics, and the submission transport.
///
/// `Page` is the context type of every listener, timer, and frame callback.
/// The dispatch table itself lives on [`Engine`], so a handler can never
/// re-enter dispatch mid-delivery; DOM mutations inside one handler are
/// complete before the next handler observes anything.
pub struct Page {
    pub document: Document,
    pub viewport: Viewport,
    pub observers: ObserverRegistry,
    pub diagnostics: Diagnostics,
    pub config: EnhanceConfig,
    timers: TimerQueue<Page>,
    frames: FrameScheduler<Page>,
    transport: Arc<dyn SubmitTransport>,
    background_tx: Sender<BackgroundEvent>,
    clock_ms: u64,
}

impl Page {
    /// Milliseconds of virtual time since the engine was created.
    pub fn now_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Schedule a one-shot callback `delay_ms` from now.
    pub fn schedule_timer(
        &mut self,
        delay_ms: u64,
        callback: impl FnOnce(&mut Page) + 'static,
    ) -> TimerId {
        self.timers.schedule(self.clock_ms + delay_ms, callback)
    }

    /// Run a callback once, at the start of the next frame.
    pub fn request_frame(&mut self, callback: impl FnOnce(&mut Page) + 'static) {
        self.frames.schedule(callback);
    }

    /// Hand a submission to the transport. Its outcome re-enters through the
    /// background channel as a `SubmitFinished` dispatch targeted at `form`.
    pub fn start_submission(&mut self, form: NodeId, request: SubmitRequest) {
        log::debug!(target: "enhance", "submitting form #{} to {:?}", form.0, request.action);
        let tx = self.background_tx.clone();
        let callback: SubmitCallback = Arc::new(move |outcome| {
            // a slow worker may outlive the engine; its result is then dropped
            let _ = tx.send(BackgroundEvent::SubmitFinished { form, outcome });
        });
        self.transport.submit(request, callback);
    }

    /// Evaluate every intersection observer against the current viewport.
    pub fn deliver_observations(&mut self) {
        let Page {
            observers,
            document,
            viewport,
            ..
        } = self;
        observers.deliver(document, viewport);
    }

    fn run_timers_until(&mut self, target_ms: u64) {
        while let Some(due) = self.timers.pop_due(target_ms) {
            self.clock_ms = self.clock_ms.max(due.due_ms);
            (due.callback)(self);
        }
        self.clock_ms = self.clock_ms.max(target_ms);
    }
}

/// Owns the [`Page`], the dispatch table, and the background receiver, and
/// drives them: events in, default actions out, frames and virtual time in
/// between.
pub struct Engine {
    pub page: Page,
    dispatcher: Dispatcher<Page>,
    background_rx: Receiver<BackgroundEvent>,
    installed: bool,
    install_requested: bool,
}

impl Engine {
    pub fn new(
        document: Document,
        viewport: Viewport,
        config: EnhanceConfig,
        transport: Arc<dyn SubmitTransport>,
    ) -> Self {
        let bus = Bus::new();
        Self {
            page: Page {
                document,
                viewport,
                observers: ObserverRegistry::new(),
                diagnostics: Diagnostics::new(),
                config,
                timers: TimerQueue::new(),
                frames: FrameScheduler::new(),
                transport,
                background_tx: bus.tx,
                clock_ms: 0,
            },
            dispatcher: Dispatcher::new(),
            background_rx: bus.rx,
            installed: false,
            install_requested: false,
        }
    }

    /// Run the installer sequence once. On a still-parsing document the run
    /// is deferred until [`Engine::document_parsed`]; it never runs twice.
    pub fn install(&mut self) {
        if self.installed {
            return;
        }
        if self.page.document.ready_state() == ReadyState::Loading {
            log::debug!(target: "enhance", "document still parsing, install deferred");
            self.install_requested = true;
            return;
        }
        self.run_installers();
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// The document finished parsing (DOMContentLoaded).
    pub fn document_parsed(&mut self) {
        self.page.document.set_ready_state(ReadyState::Interactive);
        if self.install_requested {
            self.install_requested = false;
            self.run_installers();
        }
    }

    /// Every subresource finished loading (the `window.load` analogue).
    pub fn window_loaded(&mut self) {
        self.page.document.set_ready_state(ReadyState::Complete);
        self.dispatcher.dispatch(&mut self.page, &UiEvent::Loaded);
    }

    /// Deliver `event` through the dispatch table, then apply its default
    /// action unless a listener prevented it.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<PageAction> {
        let outcome = self.dispatcher.dispatch(&mut self.page, &event);
        if outcome.default_prevented {
            return None;
        }
        self.default_action(&event)
    }

    /// A user scroll: set the offset and let scroll listeners react.
    pub fn scroll_to(&mut self, y: f32) {
        if self.page.viewport.scroll_to(y) {
            self.dispatcher.dispatch(&mut self.page, &UiEvent::Scroll);
        }
    }

    /// Advance virtual time, firing due timers in (due, scheduled) order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.page.clock_ms + ms;
        self.page.run_timers_until(target);
    }

    /// One rendering frame: 16ms of virtual time (firing due timers), frame
    /// callbacks, the smooth-scroll step, intersection delivery, then the
    /// background pump.
    pub fn run_frame(&mut self) {
        self.advance(FRAME_MS);
        for callback in self.page.frames.drain() {
            callback(&mut self.page);
        }
        if self.page.viewport.step(FRAME_MS) {
            self.dispatcher.dispatch(&mut self.page, &UiEvent::Scroll);
        }
        self.page.deliver_observations();
        self.pump();
    }

    /// Drain worker-thread completions into `SubmitFinished` dispatches.
    pub fn pump(&mut self) {
        while let Ok(event) = self.background_rx.try_recv() {
            match event {
                BackgroundEvent::SubmitFinished { form, outcome } => {
                    self.dispatcher
                        .dispatch(&mut self.page, &UiEvent::SubmitFinished { form, outcome });
                }
            }
        }
    }

    fn run_installers(&mut self) {
        self.installed = true;
        boot::install_all(&mut self.page, &mut self.dispatcher);
    }

    fn default_action(&mut self, event: &UiEvent) -> Option<PageAction> {
        match event {
            UiEvent::Click { target: Some(node) } => {
                let element = self.page.document.get(*node)?;
                if !element.tag.eq_ignore_ascii_case("a") {
                    return None;
                }
                let href = element.attr("href")?.to_string();
                match href.strip_prefix('#') {
                    // same-document fragment navigation: jump, never leave
                    Some("") => {
                        self.scroll_to(0.0);
                        None
                    }
                    Some(fragment) => {
                        if let Some(target) = self.page.document.by_html_id(fragment) {
                            let top = self.page.document.element(target).rect.y;
                            self.scroll_to(top);
                        }
                        None
                    }
                    None => Some(PageAction::Navigate(href)),
                }
            }
            UiEvent::Submit { form } => {
                let action = self
                    .page
                    .document
                    .get(*form)?
                    .attr("action")
                    .unwrap_or_default()
                    .to_string();
                Some(PageAction::Navigate(action))
            }
            _ => None,
        }
    }
}
