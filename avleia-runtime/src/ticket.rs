use avleia_core::types::ConfirmationRecord;
use avleia_engine::traits::ConfirmationStore;
use serde::{Deserialize, Serialize};

/// What the booking-details screen renders. The defaults are the hardcoded
/// demo ticket; confirmation fields override them one by one when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDetails {
    pub event: String,
    pub venue: String,
    pub date: String,
    pub time: String,
    pub seat: String,
    pub price: String,
    pub booking_id: String,
}

impl Default for TicketDetails {
    fn default() -> Self {
        Self {
            event: "«Ρωμαιος Και Ιουλιετα»".into(),
            venue: "Θέατρο Αυλαία".into(),
            date: "15 Νοεμβριου 2025".into(),
            time: "21:00".into(),
            seat: "Σειρά Α, Θέση 12".into(),
            price: "€25".into(),
            booking_id: "ABC123456".into(),
        }
    }
}

impl TicketDetails {
    /// Overlays non-empty confirmation fields; empty fields keep the
    /// default. The title gets its guillemets back for display.
    pub fn apply_confirmation(mut self, record: &ConfirmationRecord) -> Self {
        if !record.performance.is_empty() {
            self.event = format!("«{}»", record.performance);
        }
        if !record.date.is_empty() {
            self.date = record.date.clone();
        }
        if !record.time.is_empty() {
            self.time = record.time.clone();
        }
        self
    }

    /// What the display screen does at startup: read the slot once and
    /// merge whatever is there over the defaults.
    pub fn load_from(store: &dyn ConfirmationStore) -> Self {
        match store.read() {
            Some(record) => Self::default().apply_confirmation(&record),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirmation_store::FileConfirmationStore;

    #[test]
    fn full_confirmation_overrides_event_date_and_time() {
        let ticket = TicketDetails::default().apply_confirmation(&ConfirmationRecord {
            date: "3/3/2026".into(),
            time: "19:30".into(),
            performance: "Hamlet".into(),
        });

        assert_eq!(ticket.event, "«Hamlet»");
        assert_eq!(ticket.date, "3/3/2026");
        assert_eq!(ticket.time, "19:30");
        // Untouched fields keep their defaults.
        assert_eq!(ticket.seat, "Σειρά Α, Θέση 12");
        assert_eq!(ticket.booking_id, "ABC123456");
    }

    #[test]
    fn empty_fields_keep_the_defaults() {
        let ticket = TicketDetails::default().apply_confirmation(&ConfirmationRecord {
            date: String::new(),
            time: "19:30".into(),
            performance: String::new(),
        });

        assert_eq!(ticket.event, "«Ρωμαιος Και Ιουλιετα»");
        assert_eq!(ticket.date, "15 Νοεμβριου 2025");
        assert_eq!(ticket.time, "19:30");
    }

    #[test]
    fn absent_slot_shows_only_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfirmationStore::at_path(dir.path().join("storage.json"));

        let ticket = TicketDetails::load_from(&store);
        assert_eq!(ticket, TicketDetails::default());
    }

    #[test]
    fn stored_confirmation_reaches_the_ticket() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfirmationStore::at_path(dir.path().join("storage.json"));
        store.write(&ConfirmationRecord {
            date: "1/1/2026".into(),
            time: "20:00".into(),
            performance: "Μήδεια".into(),
        });

        let ticket = TicketDetails::load_from(&store);
        assert_eq!(ticket.event, "«Μήδεια»");
        assert_eq!(ticket.date, "1/1/2026");
        assert_eq!(ticket.time, "20:00");
    }
}
