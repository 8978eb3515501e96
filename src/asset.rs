use std::{thread, time::Duration};

/// A game asset (texture, mesh, sound) moving from the loader to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub id: u32,
}

impl Asset {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Stands in for slow IO: sleeps for `delay`.
    pub fn load(&self, delay: Duration) {
        thread::sleep(delay);
        tracing::info!(name = %self.name, id = self.id, "[LOADER] loaded");
    }

    pub fn use_asset(&self) {
        tracing::info!(name = %self.name, "[GAME] using asset");
    }
}
