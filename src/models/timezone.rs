//! Timezone name interning.

use chrono_tz::Tz;
use std::collections::HashMap;

/// First id handed out. 0 is reserved for UTC.
pub const FIRST_TIMEZONE_ID: u32 = 1;

/// Check a timezone name against the IANA database.
pub fn is_known_zone(name: &str) -> bool {
    name.parse::<Tz>().is_ok()
}

/// Maps timezone names to dense integer ids in first-seen order.
#[derive(Debug)]
pub struct TimezoneRegistry {
    ids: HashMap<String, u32>,
    next_id: u32,
}

impl Default for TimezoneRegistry {
    fn default() -> Self {
        TimezoneRegistry {
            ids: HashMap::new(),
            next_id: FIRST_TIMEZONE_ID,
        }
    }
}

impl TimezoneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, assigning the next one if it is new.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }

        let id = self.next_id;
        if !name.is_empty() && !is_known_zone(name) {
            log::warn!("Unknown timezone '{name}' interned as id {id}");
        }
        log::debug!("New timezone '{name}' => {id}");
        self.ids.insert(name.to_string(), id);
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// All `(id, name)` pairs ordered by id.
    pub fn entries(&self) -> Vec<(u32, &str)> {
        let mut entries: Vec<(u32, &str)> = self
            .ids
            .iter()
            .map(|(name, id)| (*id, name.as_str()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }
}
