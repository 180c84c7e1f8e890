//! Schnittstellen zu externen Kollaborateuren (Tracking, Rendering).
//!
//! Flächenerkennung, Anker-Erzeugung und Darstellung liegen außerhalb der
//! Engine. Der Controller spricht sie nur über diese Traits an.

use super::pending::AnchorTicket;
use crate::shared::CurveScene;
use glam::DVec3;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Ereignis einer `PointSource`.
#[derive(Debug, Clone, PartialEq)]
pub enum PointEvent {
    /// Treffer auf einer erkannten Fläche
    SurfaceHit {
        /// Trefferpunkt im Weltraum
        point: DVec3,
        /// Anker kann synchron an die Fläche gehängt werden
        attachable: bool,
    },
    /// Eine angeforderte Anker-Erzeugung ist abgeschlossen
    AnchorResolved {
        /// Ticket der Anfrage
        ticket: AnchorTicket,
        /// Anker-Position, `None` bei Fehlschlag
        point: Option<DVec3>,
    },
}

/// Quelle für Weltpunkte (Flächentreffer, asynchron erzeugte Anker).
pub trait PointSource {
    /// Wird bei `AppController::start()` aufgerufen (Event-Abo herstellen).
    ///
    /// Ein Fehler bedeutet: kein Tracking verfügbar, die Quelle wird nicht angehängt.
    fn attach(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Wird bei `AppController::stop()` aufgerufen (Event-Abo lösen).
    fn detach(&mut self) {}

    /// Fordert eine asynchrone Anker-Erzeugung an `point` an.
    ///
    /// Das Ergebnis kommt später als `PointEvent::AnchorResolved` mit demselben Ticket.
    fn request_anchor(&mut self, ticket: AnchorTicket, point: DVec3) -> anyhow::Result<()>;

    /// Entnimmt alle seit dem letzten Aufruf angefallenen Ereignisse.
    fn drain_events(&mut self) -> Vec<PointEvent>;
}

/// Empfänger der berechneten Kurve.
pub trait CurveRenderer {
    /// Stellt die Szene dar. Rückgabewerte werden von der Engine nicht ausgewertet.
    fn render(&mut self, scene: &CurveScene);
}

#[derive(Debug, Default)]
struct QueueInner {
    attached: bool,
    events: VecDeque<PointEvent>,
    requested: Vec<(AnchorTicket, DVec3)>,
    auto_resolve: bool,
}

/// In-Memory-`PointSource` für Headless-Betrieb und Tests.
///
/// Klone teilen sich dieselbe Warteschlange: der Host behält einen Klon,
/// um Ereignisse einzuspeisen, während der Controller den anderen besitzt.
/// Mit `auto_resolve` wird jede Anker-Anfrage sofort an der angefragten
/// Position erfüllt; sonst bleibt sie offen bis `resolve_requested()`.
#[derive(Debug, Clone, Default)]
pub struct QueuedPointSource {
    inner: Rc<RefCell<QueueInner>>,
}

impl QueuedPointSource {
    /// Erstellt eine Quelle, deren Anker-Anfragen offen bleiben.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Quelle, die Anker-Anfragen sofort erfüllt.
    pub fn auto_resolving() -> Self {
        let source = Self::default();
        source.inner.borrow_mut().auto_resolve = true;
        source
    }

    /// Speist ein Ereignis ein.
    pub fn push(&self, event: PointEvent) {
        self.inner.borrow_mut().events.push_back(event);
    }

    /// Offene Anker-Anfragen.
    pub fn requested(&self) -> Vec<(AnchorTicket, DVec3)> {
        self.inner.borrow().requested.clone()
    }

    /// Erfüllt alle offenen Anfragen an ihrer angefragten Position.
    pub fn resolve_requested(&self) {
        let mut inner = self.inner.borrow_mut();
        let requested = std::mem::take(&mut inner.requested);
        for (ticket, point) in requested {
            inner.events.push_back(PointEvent::AnchorResolved {
                ticket,
                point: Some(point),
            });
        }
    }

    /// Gibt zurück, ob die Quelle gerade an einem Controller hängt.
    pub fn is_attached(&self) -> bool {
        self.inner.borrow().attached
    }
}

impl PointSource for QueuedPointSource {
    fn attach(&mut self) -> anyhow::Result<()> {
        self.inner.borrow_mut().attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        self.inner.borrow_mut().attached = false;
    }

    fn request_anchor(&mut self, ticket: AnchorTicket, point: DVec3) -> anyhow::Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.auto_resolve {
            inner.events.push_back(PointEvent::AnchorResolved {
                ticket,
                point: Some(point),
            });
        } else {
            inner.requested.push((ticket, point));
        }
        Ok(())
    }

    fn drain_events(&mut self) -> Vec<PointEvent> {
        self.inner.borrow_mut().events.drain(..).collect()
    }
}

/// `CurveRenderer`, der jede übergebene Szene protokolliert.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Alle bisher übergebenen Szenen
    pub frames: Vec<CurveScene>,
}

impl CurveRenderer for RecordingRenderer {
    fn render(&mut self, scene: &CurveScene) {
        self.frames.push(scene.clone());
    }
}
