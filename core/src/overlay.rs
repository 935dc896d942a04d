use crate::catalog::ProjectRecord;
use crate::tilt::{tilt_for_pointer, PanePointer, Tilt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Nothing rendered. A deferred mount may be pending.
    Closed,
    /// Rendered with the closed transform, waiting two frames.
    Mounting,
    /// Rendered with the open transform.
    Open,
    /// Close requested; waiting for the reverse transition before unmounting.
    Closing,
}

/// Generation number of a scheduled transition. Callbacks that arrive with a
/// ticket other than the pending one are stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEffect {
    /// Zero-delay timer, answered with [`OverlayMachine::timer_elapsed`].
    ScheduleMount { ticket: Ticket },
    /// Two chained animation frames, answered with
    /// [`OverlayMachine::frames_elapsed`].
    ScheduleAnimateIn { ticket: Ticket },
    /// Fixed-delay timer, answered with [`OverlayMachine::timer_elapsed`].
    ScheduleUnmount { ticket: Ticket, delay_ms: u32 },
    CancelTimer,
    CancelFrames,
    AcquireScrollLock,
    ReleaseScrollLock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerPurpose {
    Mount,
    Unmount,
}

/// Open/close lifecycle of the project detail overlay.
///
/// The machine performs no I/O. Each input returns the effects the host must
/// carry out (timers, animation frames, scroll lock), and the host feeds the
/// outcome back in with the ticket it was given.
#[derive(Clone, Debug)]
pub struct OverlayMachine {
    phase: OverlayPhase,
    open_requested: bool,
    animated_in: bool,
    displayed: Option<&'static ProjectRecord>,
    tilt: Tilt,
    next_ticket: u64,
    timer: Option<(Ticket, TimerPurpose)>,
    frames: Option<Ticket>,
    scroll_locked: bool,
    close_delay_ms: u32,
}

impl OverlayMachine {
    pub fn new(close_delay_ms: u32) -> Self {
        Self {
            phase: OverlayPhase::Closed,
            open_requested: false,
            animated_in: false,
            displayed: None,
            tilt: Tilt::REST,
            next_ticket: 1,
            timer: None,
            frames: None,
            scroll_locked: false,
            close_delay_ms,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self.phase, OverlayPhase::Closed)
    }

    pub fn is_animated_in(&self) -> bool {
        self.animated_in
    }

    /// Whether the open transform should be applied this frame.
    pub fn is_presented(&self) -> bool {
        self.open_requested && self.animated_in
    }

    pub fn displayed(&self) -> Option<&'static ProjectRecord> {
        self.displayed
    }

    /// The project to render, or `None` when nothing should be on screen.
    pub fn rendered(&self) -> Option<&'static ProjectRecord> {
        if self.is_mounted() {
            self.displayed
        } else {
            None
        }
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Applies the caller's current `(project, open)` props.
    pub fn request(
        &mut self,
        project: Option<&'static ProjectRecord>,
        open: bool,
    ) -> Vec<OverlayEffect> {
        let mut effects = Vec::new();
        match (open, project) {
            (true, Some(project)) => {
                self.open_requested = true;
                self.displayed = Some(project);
                if !self.scroll_locked {
                    self.scroll_locked = true;
                    effects.push(OverlayEffect::AcquireScrollLock);
                }
                self.advance_open(&mut effects);
            }
            // an open request without a project has nothing to show
            (true, None) => {}
            (false, _) => {
                self.open_requested = false;
                if self.scroll_locked {
                    self.scroll_locked = false;
                    effects.push(OverlayEffect::ReleaseScrollLock);
                }
                self.advance_close(&mut effects);
            }
        }
        effects
    }

    pub fn timer_elapsed(&mut self, ticket: Ticket) -> Vec<OverlayEffect> {
        let mut effects = Vec::new();
        let Some((pending, purpose)) = self.timer else {
            return effects;
        };
        if pending != ticket {
            return effects;
        }
        self.timer = None;
        match purpose {
            TimerPurpose::Mount => {
                if self.phase != OverlayPhase::Closed || !self.open_requested {
                    return effects;
                }
                self.phase = OverlayPhase::Mounting;
                self.schedule_frames(&mut effects);
            }
            TimerPurpose::Unmount => {
                if self.phase != OverlayPhase::Closing {
                    return effects;
                }
                self.phase = OverlayPhase::Closed;
                self.animated_in = false;
                self.displayed = None;
                self.tilt = Tilt::REST;
            }
        }
        effects
    }

    pub fn frames_elapsed(&mut self, ticket: Ticket) -> Vec<OverlayEffect> {
        if self.frames != Some(ticket) {
            return Vec::new();
        }
        self.frames = None;
        if self.phase == OverlayPhase::Mounting && self.open_requested {
            self.animated_in = true;
            self.phase = OverlayPhase::Open;
        }
        Vec::new()
    }

    /// Updates the tilt from a pointer sample. Ignored unless the overlay is
    /// fully open and `enabled` (desktop pointer, wide viewport). Returns
    /// whether the tilt changed.
    pub fn pointer_moved(&mut self, pointer: PanePointer, max_deg: f64, enabled: bool) -> bool {
        if !enabled || !self.is_presented() {
            return false;
        }
        let next = tilt_for_pointer(pointer, max_deg);
        if next == self.tilt {
            return false;
        }
        self.tilt = next;
        true
    }

    pub fn pointer_left(&mut self, enabled: bool) -> bool {
        if !enabled || self.tilt.is_rest() {
            return false;
        }
        self.tilt = Tilt::REST;
        true
    }

    /// Cancels everything pending and releases the scroll lock. Used when the
    /// host component goes away.
    pub fn teardown(&mut self) -> Vec<OverlayEffect> {
        let mut effects = Vec::new();
        if self.timer.take().is_some() {
            effects.push(OverlayEffect::CancelTimer);
        }
        if self.frames.take().is_some() {
            effects.push(OverlayEffect::CancelFrames);
        }
        self.scroll_locked = false;
        effects.push(OverlayEffect::ReleaseScrollLock);
        self.phase = OverlayPhase::Closed;
        self.open_requested = false;
        self.animated_in = false;
        self.displayed = None;
        self.tilt = Tilt::REST;
        effects
    }

    fn advance_open(&mut self, effects: &mut Vec<OverlayEffect>) {
        match self.phase {
            OverlayPhase::Closed => {
                let mount_pending = matches!(self.timer, Some((_, TimerPurpose::Mount)));
                if !mount_pending {
                    let ticket = self.issue_ticket();
                    self.replace_timer(effects, ticket, TimerPurpose::Mount);
                    effects.push(OverlayEffect::ScheduleMount { ticket });
                }
            }
            OverlayPhase::Mounting | OverlayPhase::Open => {}
            OverlayPhase::Closing => {
                if self.timer.take().is_some() {
                    effects.push(OverlayEffect::CancelTimer);
                }
                if self.animated_in {
                    self.phase = OverlayPhase::Open;
                } else {
                    self.phase = OverlayPhase::Mounting;
                    self.schedule_frames(effects);
                }
            }
        }
    }

    fn advance_close(&mut self, effects: &mut Vec<OverlayEffect>) {
        match self.phase {
            OverlayPhase::Closed => {
                if self.timer.take().is_some() {
                    effects.push(OverlayEffect::CancelTimer);
                }
            }
            OverlayPhase::Mounting | OverlayPhase::Open => {
                if self.frames.take().is_some() {
                    effects.push(OverlayEffect::CancelFrames);
                }
                let ticket = self.issue_ticket();
                self.replace_timer(effects, ticket, TimerPurpose::Unmount);
                effects.push(OverlayEffect::ScheduleUnmount {
                    ticket,
                    delay_ms: self.close_delay_ms,
                });
                self.phase = OverlayPhase::Closing;
            }
            OverlayPhase::Closing => {}
        }
    }

    fn schedule_frames(&mut self, effects: &mut Vec<OverlayEffect>) {
        if self.frames.take().is_some() {
            effects.push(OverlayEffect::CancelFrames);
        }
        let ticket = self.issue_ticket();
        self.frames = Some(ticket);
        effects.push(OverlayEffect::ScheduleAnimateIn { ticket });
    }

    fn replace_timer(
        &mut self,
        effects: &mut Vec<OverlayEffect>,
        ticket: Ticket,
        purpose: TimerPurpose,
    ) {
        if self.timer.replace((ticket, purpose)).is_some() {
            effects.push(OverlayEffect::CancelTimer);
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        ticket
    }
}
