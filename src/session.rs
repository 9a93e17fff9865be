//! Explicit application state.
//!
//! A [`Session`] owns everything a front end needs between user actions:
//! configuration, the random source, history, saved fingerprints and the
//! most recent password. The engine functions it calls stay stateless.

use crate::charset::ClassSet;
use crate::config::FileConfig;
use crate::error::{Error, Result};
use crate::generation::{generate, GenerationRequest};
use crate::history::{HistoryEntry, HistoryStore, SavedPassword, SavedStore};
use crate::randomness::RandomSource;
use crate::strength::{score, StrengthResult};
use chrono::{Local, NaiveDateTime};

/// A generated password with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The password text.
    pub password: String,
    /// Score and level of `password`.
    pub strength: StrengthResult,
}

/// State shared between front-end actions.
#[derive(Debug)]
pub struct Session {
    config: FileConfig,
    source: RandomSource,
    history: HistoryStore,
    saved: SavedStore,
    current: Option<Generated>,
    last_request: Option<GenerationRequest>,
}

impl Session {
    /// Opens a session from configuration, loading history files.
    ///
    /// Disabling history only stops recording generated passwords; saved
    /// fingerprints are always backed by their file.
    pub fn new(config: FileConfig) -> Self {
        let source = RandomSource::new(config.generator.source_policy());
        let history = if config.history.enabled {
            HistoryStore::load(&config.history.path, config.history.max_entries)
        } else {
            HistoryStore::in_memory(config.history.max_entries)
        };
        let saved = SavedStore::load(&config.history.saved_path);

        tracing::debug!(
            history_entries = history.len(),
            saved_entries = saved.entries().len(),
            "Session opened"
        );

        Self::with_parts(config, source, history, saved)
    }

    /// Assembles a session from explicit parts.
    pub fn with_parts(
        config: FileConfig,
        source: RandomSource,
        history: HistoryStore,
        saved: SavedStore,
    ) -> Self {
        Self {
            config,
            source,
            history,
            saved,
            current: None,
            last_request: None,
        }
    }

    /// Configuration the session was opened with.
    pub fn config(&self) -> &FileConfig {
        &self.config
    }

    /// Recorded history, newest first.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Mutable access to history, for clearing.
    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    /// Saved password fingerprints.
    pub fn saved(&self) -> &SavedStore {
        &self.saved
    }

    /// The most recently generated password.
    pub fn current(&self) -> Option<&Generated> {
        self.current.as_ref()
    }

    /// Returns true if the random source fell back to degraded mode.
    pub fn is_degraded(&self) -> bool {
        self.source.is_degraded()
    }

    /// Builds a request, filling gaps from configuration.
    ///
    /// The length must fall in the configured range.
    pub fn request(
        &self,
        length: Option<usize>,
        classes: Option<ClassSet>,
    ) -> Result<GenerationRequest> {
        let generator = &self.config.generator;
        let length = length.unwrap_or(generator.default_length);
        generator.check_length(length)?;
        let classes = classes.unwrap_or_else(|| generator.class_set());
        Ok(GenerationRequest::new(length, classes))
    }

    /// Generates a password, records it in history and makes it current.
    ///
    /// A history write failure is logged and does not fail generation.
    pub fn generate(&mut self, request: GenerationRequest) -> Result<&Generated> {
        let password = generate(&request, &mut self.source)?;
        let strength = score(&password);

        if self.config.history.enabled {
            let entry = HistoryEntry::new(password.as_str(), now());
            if let Err(e) = self.history.record(entry) {
                tracing::warn!(error = %e, "Failed to save password history");
            }
        }

        tracing::info!(
            length = request.length(),
            score = strength.score,
            level = %strength.level,
            "Password generated"
        );

        self.last_request = Some(request);
        Ok(&*self.current.insert(Generated { password, strength }))
    }

    /// Repeats the last request.
    pub fn regenerate(&mut self) -> Result<&Generated> {
        let request = self.last_request.ok_or(Error::NothingGenerated)?;
        self.generate(request)
    }

    /// Stores a fingerprint of the current password.
    pub fn save_current(&mut self) -> Result<&SavedPassword> {
        let current = self.current.as_ref().ok_or(Error::NothingGenerated)?;
        Ok(self.saved.save_password(&current.password, now())?)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
