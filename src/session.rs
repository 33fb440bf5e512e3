//! One page load.
//!
//! A `PageLoad` owns the page being populated, the document once it
//! arrives, and the readiness join guarding the contact map. The document
//! path and the map-library path may run in either order, from any thread;
//! the map is rendered exactly once, by whichever path completes the join.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::diagnostics::Diagnostics;
use crate::document::SiteDocument;
use crate::join::{JoinOutcome, ReadinessJoin, Signal};
use crate::loader::{load_document, DocumentSource, LoadError, LoaderOptions};
use crate::page::Page;
use crate::populator::{PopulateReport, Populator};

pub struct PageLoad {
    page: Mutex<Page>,
    populator: Populator,
    document: OnceLock<SiteDocument>,
    join: ReadinessJoin,
    diagnostics: Arc<dyn Diagnostics>,
    map_renders: AtomicUsize,
}

impl PageLoad {
    pub fn new(page: Page, populator: Populator, diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self {
            page: Mutex::new(page),
            populator,
            document: OnceLock::new(),
            join: ReadinessJoin::new(),
            diagnostics,
            map_renders: AtomicUsize::new(0),
        }
    }

    /// Store the document, populate every section, then signal the join.
    ///
    /// Only the first document is used; later calls return `None`.
    pub fn document_loaded(&self, doc: SiteDocument) -> Option<PopulateReport> {
        if self.document.set(doc).is_err() {
            tracing::warn!("Site document already loaded for this page, ignoring");
            return None;
        }
        let doc = self.document.get()?;

        let report = {
            let mut page = self.lock_page();
            self.populator.populate(doc, &mut page)
        };
        tracing::info!(
            "Populated page: {} sections rendered, {} skipped",
            report.rendered.len(),
            report.skipped.len()
        );
        if !report.missing_regions.is_empty() {
            tracing::debug!("Regions missing from skeleton: {:?}", report.missing_regions);
        }

        self.arrive(Signal::DocumentLoaded);
        Some(report)
    }

    /// Report a failed load. Nothing is populated and the join never fires.
    pub fn document_failed(&self, source: &str, error: &LoadError) {
        self.diagnostics.document_load_failed(source, error);
    }

    /// The client map library finished loading. Safe to repeat.
    pub fn map_library_ready(&self) {
        self.arrive(Signal::MapLibraryReady);
    }

    fn arrive(&self, signal: Signal) {
        match self.join.arrive(signal) {
            JoinOutcome::Fired => self.render_map(),
            JoinOutcome::Pending => tracing::debug!("{:?} arrived, waiting for the other signal", signal),
            JoinOutcome::AlreadyFired => {}
        }
    }

    fn render_map(&self) {
        let Some(doc) = self.document.get() else {
            return;
        };
        let rendered = {
            let mut page = self.lock_page();
            self.populator.render_map(doc, &mut page)
        };
        if rendered {
            self.map_renders.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("Contact map rendered");
        }
    }

    /// How many times the contact map was written into the page.
    pub fn map_render_count(&self) -> usize {
        self.map_renders.load(Ordering::SeqCst)
    }

    pub fn document(&self) -> Option<&SiteDocument> {
        self.document.get()
    }

    pub fn render_html(&self) -> String {
        self.lock_page().render()
    }

    /// Load the document and signal the map library concurrently, then
    /// return the rendered page.
    ///
    /// `map_enabled = false` means the map library never arrives, so the
    /// map region keeps its skeleton content.
    pub async fn run(&self, source: &DocumentSource, options: &LoaderOptions, map_enabled: bool) -> String {
        let load = async {
            match load_document(source, options).await {
                Ok(doc) => {
                    self.document_loaded(doc);
                }
                Err(e) => self.document_failed(&source.to_string(), &e),
            }
        };
        let library = async {
            if map_enabled {
                tokio::task::yield_now().await;
                self.map_library_ready();
            }
        };
        tokio::join!(load, library);

        self.render_html()
    }

    fn lock_page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
