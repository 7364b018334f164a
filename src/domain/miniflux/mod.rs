pub mod model;

pub use model::{Enclosure, Entry, Feed, NewEntriesEvent};

/// Header Miniflux uses to announce the kind of webhook it is sending
pub const EVENT_TYPE_HEADER: &str = "x-miniflux-event-type";

/// The only event type this service relays
pub const NEW_ENTRIES_EVENT: &str = "new_entries";
