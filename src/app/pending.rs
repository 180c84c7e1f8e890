//! Buchführung über laufende asynchrone Anker-Erzeugungen.
//!
//! Jede Anfrage bekommt ein Ticket mit der Generation, die beim Absenden
//! aktiv war. Reset und Template-Wechsel erhöhen die Generation; verspätete
//! Ergebnisse aus einer älteren Generation werden verworfen.

use serde::{Deserialize, Serialize};

/// Kennung einer laufenden Anker-Erzeugung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorTicket {
    /// Fortlaufende Anfrage-ID
    pub id: u64,
    /// Generation des Ausrichtungszustands beim Absenden
    pub generation: u64,
}

/// Ergebnis der Ticket-Prüfung beim Eintreffen eines Ankers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    /// Ticket gehört zur aktuellen Generation, Punkt darf übernommen werden
    Current,
    /// Ticket stammt aus einer älteren Generation
    Stale,
    /// Ticket wurde nie ausgegeben oder bereits eingelöst
    Unknown,
}

/// Offene Anker-Anfragen.
#[derive(Debug, Default)]
pub struct PendingAnchors {
    next_id: u64,
    open: Vec<AnchorTicket>,
}

impl PendingAnchors {
    /// Erstellt eine leere Buchführung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt ein neues Ticket für die angegebene Generation aus.
    pub fn issue(&mut self, generation: u64) -> AnchorTicket {
        self.next_id += 1;
        let ticket = AnchorTicket {
            id: self.next_id,
            generation,
        };
        self.open.push(ticket);
        ticket
    }

    /// Löst ein Ticket ein und prüft es gegen die aktuelle Generation.
    ///
    /// Ein eingelöstes Ticket ist danach nicht mehr offen.
    pub fn redeem(&mut self, ticket: AnchorTicket, current_generation: u64) -> TicketStatus {
        let position = self.open.iter().position(|t| *t == ticket);
        if let Some(index) = position {
            self.open.swap_remove(index);
        }
        if ticket.generation != current_generation {
            TicketStatus::Stale
        } else if position.is_none() {
            TicketStatus::Unknown
        } else {
            TicketStatus::Current
        }
    }

    /// Verwirft alle offenen Tickets (IDs laufen weiter).
    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// Anzahl offener Anfragen.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Gibt `true` zurück, wenn keine Anfrage offen ist.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
