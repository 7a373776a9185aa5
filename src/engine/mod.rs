//! The pagination engine.
//!
//! Responsibilities:
//! - detect when the active page's rendered content exceeds its writable height
//! - migrate trailing blocks onto the following page, preserving document order
//! - report what a pass did so the UI can refresh counts and the outline
//!
//! Non-responsibilities:
//! - rendering and measuring (callers inject a [`HeightProbe`])
//! - scheduling (the UI coalesces passes onto animation frames)

pub mod block;
pub mod document;
pub mod paste;
pub mod scroll;
pub mod settings;
pub mod stats;

pub use block::{join_blocks, scan_headings, split_blocks, Block, HeadingEntry};
pub use document::{Document, PageIndexError, EMPTY_PAGE};
pub use paste::{text_to_html, PasteChunker, PASTE_CHUNK_LINES};
pub use scroll::{nearest_page, visible_range, VIRTUALIZATION_RADIUS};
pub use settings::{cm_to_px, mm_to_px, Margins, Orientation, PageSettings, PageSize, PX_PER_CM};
pub use stats::{doc_stats, DocStats};

use std::collections::VecDeque;

/// Rendered overflow at or below this many pixels is ignored. Keeps
/// sub-pixel rounding from ping-ponging blocks between pages.
pub const OVERFLOW_TOLERANCE_PX: f64 = 5.0;

/// Upper bound on block removals in a single migration pass.
pub const MAX_MIGRATION_ITERATIONS: u32 = 50;

/// Height measurement strategy injected by the caller: the rendered
/// height, in pixels, of `blocks` laid out in order in the page's content
/// box. The editor backs this with a hidden DOM element; tests use plain
/// closures.
pub trait HeightProbe {
    fn measure(&self, blocks: &[Block]) -> f64;
}

impl<F> HeightProbe for F
where
    F: Fn(&[Block]) -> f64,
{
    fn measure(&self, blocks: &[Block]) -> f64 {
        self(blocks)
    }
}

/// Where the engine is inside a pass. Outside of [`PaginationEngine::run_pass`]
/// the state is always `Idle`; a pass entered while not idle returns a
/// no-op report with `ran == false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EngineState {
    #[default]
    Idle,
    Detecting,
    Migrating,
}

/// What a single pagination pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PassReport {
    /// False when the pass was refused because the engine was mid-pass.
    pub ran: bool,
    /// Rendered height minus writable height before any migration.
    pub overflow_px: f64,
    pub blocks_moved: usize,
    pub iterations: u32,
    /// The iteration cap stopped the pass while the page still overflowed.
    pub hit_cap: bool,
    /// Migration had to append a page to receive the spill.
    pub created_page: bool,
}

impl PassReport {
    /// Whether the document was mutated.
    pub fn changed(&self) -> bool {
        self.blocks_moved > 0
    }
}

/// Overflow detector and node migrator over a [`Document`].
///
/// One pass handles the active page only: trailing blocks move to the
/// following page until the active page fits. Content pushed onto the
/// next page is not cascaded further; that page gets its own pass when it
/// becomes active.
#[derive(Clone, Debug)]
pub struct PaginationEngine {
    tolerance_px: f64,
    max_iterations: u32,
    state: EngineState,
}

impl Default for PaginationEngine {
    fn default() -> Self {
        Self::new(OVERFLOW_TOLERANCE_PX, MAX_MIGRATION_ITERATIONS)
    }
}

impl PaginationEngine {
    pub fn new(tolerance_px: f64, max_iterations: u32) -> Self {
        Self {
            tolerance_px,
            max_iterations,
            state: EngineState::Idle,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Detects overflow on the active page and migrates trailing blocks
    /// to the next page until the page fits, the blocks run out, or the
    /// iteration cap is reached.
    ///
    /// A page whose single remaining block still overflows is left
    /// overflowing; there is nothing left to migrate and shuttling the
    /// block forward would never converge.
    pub fn run_pass(
        &mut self,
        doc: &mut Document,
        settings: &PageSettings,
        probe: &impl HeightProbe,
    ) -> PassReport {
        if self.state != EngineState::Idle {
            return PassReport::default();
        }

        self.state = EngineState::Detecting;
        let writable = settings.writable_height_px();
        let mut blocks = split_blocks(doc.active_page());
        let mut overflow = probe.measure(&blocks) - writable;

        let mut report = PassReport {
            ran: true,
            overflow_px: overflow,
            ..PassReport::default()
        };

        if overflow <= self.tolerance_px {
            self.state = EngineState::Idle;
            return report;
        }

        self.state = EngineState::Migrating;
        let mut moved: VecDeque<Block> = VecDeque::new();
        while overflow > self.tolerance_px
            && blocks.len() > 1
            && report.iterations < self.max_iterations
        {
            report.iterations += 1;
            if let Some(last) = blocks.pop() {
                moved.push_front(last);
            }
            overflow = probe.measure(&blocks) - writable;
        }
        report.hit_cap = overflow > self.tolerance_px && report.iterations >= self.max_iterations;

        if moved.is_empty() {
            self.state = EngineState::Idle;
            return report;
        }

        report.blocks_moved = moved.len();
        let spill: String = moved.iter().map(|b| b.html.as_str()).collect();
        let next = doc.active() + 1;
        if next < doc.page_count() {
            doc.prepend_to_page(next, &spill);
        } else {
            doc.append_page(spill);
            report.created_page = true;
        }
        doc.set_active_page(join_blocks(&blocks));

        self.state = EngineState::Idle;
        report
    }

    #[cfg(test)]
    fn force_state(&mut self, state: EngineState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::settings::PX_PER_CM;

    /// Settings whose writable height is (approximately) `px` on A4.
    fn page(writable_px: f64) -> PageSettings {
        let mut s = PageSettings::default();
        let margin_cm = (1123.0 - writable_px) / (2.0 * PX_PER_CM);
        s.margins.top = margin_cm;
        s.margins.bottom = margin_cm;
        s
    }

    /// Probe that gives every block the same height.
    fn uniform(px_per_block: f64) -> impl Fn(&[Block]) -> f64 {
        move |blocks: &[Block]| blocks.len() as f64 * px_per_block
    }

    fn doc_with_blocks(n: usize) -> Document {
        let html: String = (1..=n).map(|i| format!("<p>{i}</p>")).collect();
        Document::from_pages(vec![html])
    }

    #[test]
    fn fitting_page_is_a_noop() {
        let mut doc = doc_with_blocks(3);
        let before = doc.clone();
        let mut engine = PaginationEngine::default();

        let report = engine.run_pass(&mut doc, &page(500.0), &uniform(100.0));

        assert!(report.ran);
        assert!(!report.changed());
        assert_eq!(report.iterations, 0);
        assert_eq!(doc, before);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn overflow_migrates_trailing_blocks_in_order() {
        let mut doc = doc_with_blocks(5);
        let mut engine = PaginationEngine::default();

        let report = engine.run_pass(&mut doc, &page(320.0), &uniform(100.0));

        assert!(report.ran);
        assert_eq!(report.blocks_moved, 2);
        assert!(report.created_page);
        assert!(!report.hit_cap);
        assert_eq!(doc.page(0), Some("<p>1</p><p>2</p><p>3</p>"));
        assert_eq!(doc.page(1), Some("<p>4</p><p>5</p>"));
        assert_eq!(doc.active(), 0, "migration never moves the pointer");
    }

    #[test]
    fn spill_prepends_to_an_existing_next_page() {
        let mut doc = Document::from_pages(vec![
            "<p>1</p><p>2</p><p>3</p>".to_string(),
            "<p>next</p>".to_string(),
        ]);
        let mut engine = PaginationEngine::default();

        let report = engine.run_pass(&mut doc, &page(210.0), &uniform(100.0));

        assert_eq!(report.blocks_moved, 1);
        assert!(!report.created_page);
        assert_eq!(doc.page(1), Some("<p>3</p><p>next</p>"));
    }

    #[test]
    fn created_page_holds_exactly_the_spill() {
        let mut doc = doc_with_blocks(2);
        let mut engine = PaginationEngine::default();

        engine.run_pass(&mut doc, &page(110.0), &uniform(100.0));

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.page(1), Some("<p>2</p>"));
    }

    #[test]
    fn content_is_conserved_across_passes() {
        let mut doc = Document::from_pages(vec![
            "<h1>ت</h1>text run<p>a<br/>b</p><ul><li>c</li></ul><p>d</p>".to_string(),
            "<p>tail</p>".to_string(),
        ]);
        let before = doc.concat_html();
        let mut engine = PaginationEngine::default();

        engine.run_pass(&mut doc, &page(100.0), &uniform(90.0));

        assert_eq!(doc.concat_html(), before);
    }

    #[test]
    fn second_pass_is_idempotent() {
        let mut doc = doc_with_blocks(4);
        let mut engine = PaginationEngine::default();

        let first = engine.run_pass(&mut doc, &page(250.0), &uniform(100.0));
        assert!(first.changed());

        let after_first = doc.clone();
        let second = engine.run_pass(&mut doc, &page(250.0), &uniform(100.0));
        assert!(second.ran);
        assert!(!second.changed());
        assert_eq!(doc, after_first);
    }

    #[test]
    fn single_oversized_block_stays_put() {
        let mut doc = Document::from_pages(vec!["<p>huge</p>".to_string()]);
        let before = doc.clone();
        let mut engine = PaginationEngine::default();

        let report = engine.run_pass(&mut doc, &page(200.0), &uniform(5000.0));

        assert!(report.ran);
        assert!(!report.changed());
        assert_eq!(report.iterations, 0);
        assert!(!report.hit_cap);
        assert_eq!(doc, before);
    }

    #[test]
    fn adversarial_probe_terminates_at_the_cap() {
        let mut doc = doc_with_blocks(200);
        let before = doc.concat_html();
        let mut engine = PaginationEngine::default();

        // Probe insists on overflow no matter what is removed.
        let report = engine.run_pass(&mut doc, &page(100.0), &|_: &[Block]| 10_000.0);

        assert_eq!(report.iterations, MAX_MIGRATION_ITERATIONS);
        assert!(report.hit_cap);
        assert_eq!(report.blocks_moved, 50);
        assert_eq!(doc.concat_html(), before);
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn overflow_at_the_tolerance_is_ignored() {
        let mut doc = doc_with_blocks(1);
        let mut engine = PaginationEngine::default();

        // Exactly tolerance above the writable height: no-op.
        let report = engine.run_pass(&mut doc, &page(100.0), &|_: &[Block]| 105.0);
        assert!(!report.changed());

        // A hair more: the detector fires (nothing to move with one block,
        // but the engine enters migration).
        let mut doc = doc_with_blocks(2);
        let report = engine.run_pass(&mut doc, &page(100.0), &|b: &[Block]| {
            b.len() as f64 * 52.6
        });
        assert!(report.changed());
    }

    #[test]
    fn custom_tolerance_and_cap_are_honored() {
        let mut doc = doc_with_blocks(10);
        let mut engine = PaginationEngine::new(50.0, 3);

        let report = engine.run_pass(&mut doc, &page(100.0), &uniform(100.0));

        // 10 blocks at 100px over 100px writable: overflow 900 > 50, but
        // only 3 removals are allowed.
        assert_eq!(report.iterations, 3);
        assert_eq!(report.blocks_moved, 3);
        assert!(report.hit_cap);
    }

    #[test]
    fn non_idle_engine_refuses_to_run() {
        let mut doc = doc_with_blocks(5);
        let before = doc.clone();
        let mut engine = PaginationEngine::default();
        engine.force_state(EngineState::Migrating);

        let report = engine.run_pass(&mut doc, &page(100.0), &uniform(100.0));

        assert!(!report.ran);
        assert!(!report.changed());
        assert_eq!(doc, before);
    }

    #[test]
    fn nan_measurements_are_a_noop() {
        let mut doc = doc_with_blocks(3);
        let before = doc.clone();
        let mut engine = PaginationEngine::default();

        let report = engine.run_pass(&mut doc, &page(100.0), &|_: &[Block]| f64::NAN);

        assert!(!report.changed());
        assert_eq!(doc, before);
        assert_eq!(engine.state(), EngineState::Idle);
    }
}
