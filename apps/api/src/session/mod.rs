//! Editing sessions.
//!
//! A session is created from a catalog entry, seeded with the placeholder document and
//! lives in memory until it is deleted (the client going back to the gallery) or sits
//! untouched for longer than the configured idle TTL. Every
//! changing edit re-renders the chosen arrangement synchronously, so the stored surface
//! always matches the stored document.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::TemplateDescriptor;
use crate::document::{EditOp, Editor, ResumeDocument};
use crate::export::{ExportState, ExportTracker};
use crate::layout::{PageGeometry, Surface};

// ────────────────────────────────────────────────────────────────────────────
// EditorSession
// ────────────────────────────────────────────────────────────────────────────

pub struct EditorSession {
    pub id: Uuid,
    pub template: &'static TemplateDescriptor,
    pub created_at: DateTime<Utc>,
    page: PageGeometry,
    editor: Editor,
    surface: Arc<Surface>,
    export: Arc<ExportTracker>,
    last_access: Instant,
}

/// Client-facing snapshot of a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub template_id: u32,
    pub arrangement: u8,
    pub revision: u64,
    pub document: Arc<ResumeDocument>,
    pub export: ExportState,
    pub last_export_error: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EditorSession {
    pub fn new(template: &'static TemplateDescriptor, page: PageGeometry) -> Self {
        let editor = Editor::default();
        let surface = Arc::new(render(template, editor.document(), &page));
        EditorSession {
            id: Uuid::new_v4(),
            template,
            created_at: Utc::now(),
            page,
            editor,
            surface,
            export: Arc::new(ExportTracker::default()),
            last_access: Instant::now(),
        }
    }

    /// Applies one edit; re-renders only when the document changed.
    pub fn apply(&mut self, op: &EditOp) -> bool {
        let changed = self.editor.apply(op);
        if changed {
            self.surface = Arc::new(render(self.template, self.editor.document(), &self.page));
        }
        debug!(
            "Session {} {:?} -> revision {} (changed: {changed})",
            self.id,
            op,
            self.editor.revision()
        );
        changed
    }

    pub fn revision(&self) -> u64 {
        self.editor.revision()
    }

    pub fn document(&self) -> Arc<ResumeDocument> {
        self.editor.snapshot()
    }

    pub fn surface(&self) -> Arc<Surface> {
        Arc::clone(&self.surface)
    }

    pub fn export_tracker(&self) -> Arc<ExportTracker> {
        Arc::clone(&self.export)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            template_id: self.template.id,
            arrangement: self.template.arrangement().number(),
            revision: self.editor.revision(),
            document: self.editor.snapshot(),
            export: self.export.state(),
            last_export_error: self.export.last_failure(),
            created_at: self.created_at,
        }
    }
}

fn render(template: &TemplateDescriptor, doc: &ResumeDocument, page: &PageGeometry) -> Surface {
    template.arrangement().render(doc, template.accent(), page)
}

// ────────────────────────────────────────────────────────────────────────────
// SessionStore
// ────────────────────────────────────────────────────────────────────────────

pub type SharedSession = Arc<Mutex<EditorSession>>;

/// In-memory session map. Cheap to clone; all clones share the same sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
}

impl SessionStore {
    pub fn create(&self, template: &'static TemplateDescriptor, page: PageGeometry) -> SessionView {
        let session = EditorSession::new(template, page);
        let view = session.view();
        self.write().insert(session.id, Arc::new(Mutex::new(session)));
        info!(
            "Session {} created from template {} ({})",
            view.id, template.id, template.name
        );
        view
    }

    pub fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.read().get(&id).cloned()
    }

    /// Runs `f` with exclusive access to the session and marks it as recently used.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut EditorSession) -> R) -> Option<R> {
        let session = self.get(id)?;
        let mut guard = session.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.last_access = Instant::now();
        Some(f(&mut guard))
    }

    /// Discards sessions idle for at least `ttl`. A session with an export in flight is
    /// kept. Returns how many were discarded.
    pub fn sweep_idle(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.write();
        let before = sessions.len();
        sessions.retain(|id, session| {
            let session = session.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let idle = now.saturating_duration_since(session.last_access);
            let keep = idle < ttl || session.export.state().in_flight();
            if !keep {
                info!("Session {id} expired after {}s idle", idle.as_secs());
            }
            keep
        });
        before - sessions.len()
    }

    pub fn remove(&self, id: Uuid) -> bool {
        let removed = self.write().remove(&id).is_some();
        if removed {
            info!("Session {id} discarded");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, SharedSession>> {
        self.sessions.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, SharedSession>> {
        self.sessions.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Background task that periodically discards idle sessions.
pub fn spawn_idle_sweeper(store: SessionStore, ttl: Duration) -> JoinHandle<()> {
    let period = (ttl / 4).clamp(Duration::from_secs(1), Duration::from_secs(60));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let expired = store.sweep_idle(ttl);
            if expired > 0 {
                debug!("Idle sweep discarded {expired} session(s), {} left", store.len());
            }
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
