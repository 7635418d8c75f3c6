use crate::geometry::Position;
use smallvec::SmallVec;

/// Correlates the down/move/up events of one physical contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub i32);

#[derive(Clone, Copy, Debug)]
pub struct PointerInput {
    pub id: PointerId,
    pub position: Position,
    /// Event originated on (or inside) the lights toggle control.
    pub on_toggle: bool,
}

impl PointerInput {
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self {
            id: PointerId(id),
            position: Position::new(x, y),
            on_toggle: false,
        }
    }

    pub fn on_toggle(mut self) -> Self {
        self.on_toggle = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEnd {
    Up,
    Cancel,
    LostCapture,
}

/// Side effects the host applies to the document after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Add or remove the document-wide "dragging" indicator.
    SetDragging(bool),
    /// Route all further events of this pointer to the stage.
    CapturePointer(PointerId),
}

pub type Effects = SmallVec<[Effect; 2]>;

#[derive(Clone, Debug, Default)]
pub struct Transition {
    /// New (unclamped) target position, if this event aims the spotlight.
    pub target: Option<Position>,
    pub effects: Effects,
}

impl Transition {
    fn ignored() -> Self {
        Self::default()
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub active: bool,
    pub pending: bool,
    pub pointer: Option<PointerId>,
    pub origin: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerPhase {
    Idle,
    PendingPress,
    Dragging,
}

/// Press / drag / click disambiguation for a single pointer.
///
/// A press aims the spotlight immediately. It only becomes a drag once the
/// pointer strays further than the squared threshold from where it went
/// down; until then the release resolves as a plain click.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    session: DragSession,
    threshold_sq: f64,
}

impl PointerTracker {
    pub fn new(threshold_sq: f64) -> Self {
        Self {
            session: DragSession::default(),
            threshold_sq,
        }
    }

    #[inline]
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.active
    }

    pub fn phase(&self) -> TrackerPhase {
        match (self.session.pending, self.session.active) {
            (_, true) => TrackerPhase::Dragging,
            (true, false) => TrackerPhase::PendingPress,
            (false, false) => TrackerPhase::Idle,
        }
    }

    pub fn press(&mut self, input: PointerInput) -> Transition {
        if input.on_toggle {
            return Transition::ignored();
        }
        // A drag owns the stage until it ends; an unresolved press is
        // superseded so a release that never arrived cannot wedge the tracker.
        if let Some(tracked) = self.session.pointer {
            if tracked != input.id && self.session.active {
                log::debug!("[pointer] ignoring {:?}; {:?} is dragging", input.id, tracked);
                return Transition::ignored();
            }
        }

        let mut effects = Effects::new();
        if self.session.active {
            effects.push(Effect::SetDragging(false));
        }
        self.session = DragSession {
            active: false,
            pending: true,
            pointer: Some(input.id),
            origin: input.position,
        };
        Transition {
            target: Some(input.position),
            effects,
        }
    }

    pub fn motion(&mut self, input: PointerInput) -> Transition {
        if !self.session.pending || self.session.pointer != Some(input.id) {
            return Transition::ignored();
        }

        let mut effects = Effects::new();
        let dist2 = input.position.distance_squared(self.session.origin);
        if !self.session.active && dist2 > self.threshold_sq {
            self.session.active = true;
            log::debug!("[pointer] drag start {:?} dist2={:.1}", input.id, dist2);
            effects.push(Effect::SetDragging(true));
            effects.push(Effect::CapturePointer(input.id));
        }

        Transition {
            target: self.session.active.then_some(input.position),
            effects,
        }
    }

    /// Up, cancel and lost capture always end the session, whichever pointer
    /// reports them.
    pub fn release(&mut self, id: PointerId, end: PointerEnd) -> Transition {
        if let Some(tracked) = self.session.pointer {
            log::debug!(
                "[pointer] {:?} {:?} ends {:?} as {}",
                id,
                end,
                tracked,
                if self.session.active { "drag" } else { "click" }
            );
        }
        self.session = DragSession::default();
        let mut effects = Effects::new();
        effects.push(Effect::SetDragging(false));
        Transition {
            target: None,
            effects,
        }
    }
}
