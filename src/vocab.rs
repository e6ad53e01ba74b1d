//! Static vocabulary store: the category taxonomy and modifier word lists.
//!
//! Content is compile-time constant and trusted; the store only exposes read
//! access. Category iteration order is insertion order so that seeded runs
//! draw categories deterministically.

use indexmap::IndexMap;
use rand::Rng;

use crate::types::{CategoryName, WordList};

// Documents
const REPORT_TERMS: WordList = &[
    "report",
    "quarterly_report",
    "annual_report",
    "financial_report",
    "sales_report",
    "monthly_report",
    "weekly_report",
    "status_report",
    "progress_report",
    "summary_report",
];
const INVOICE_TERMS: WordList = &[
    "invoice",
    "receipt",
    "bill",
    "statement",
    "payment",
    "transaction",
];
const CONTRACT_TERMS: WordList = &["contract", "agreement", "nda", "terms", "proposal", "quote"];
const PRESENTATION_TERMS: WordList = &["presentation", "slides", "deck", "pitch", "demo"];
const MEETING_NOTE_TERMS: WordList = &[
    "meeting_notes",
    "notes",
    "minutes",
    "agenda",
    "action_items",
];
const RESUME_TERMS: WordList = &[
    "resume",
    "cv",
    "curriculum_vitae",
    "cover_letter",
    "application",
];

// Media
const PHOTO_TERMS: WordList = &["photo", "image", "picture", "pic", "img", "snapshot", "shot"];
const VIDEO_TERMS: WordList = &["video", "clip", "footage", "movie", "film", "recording"];
const MUSIC_TERMS: WordList = &[
    "song",
    "track",
    "audio",
    "music",
    "recording",
    "mix",
    "remix",
];
const SCREENSHOT_TERMS: WordList = &["screenshot", "screen_capture", "screengrab", "capture"];

// Development
const CODE_TERMS: WordList = &[
    "main", "index", "app", "server", "client", "utils", "helpers", "config",
];
const TEST_TERMS: WordList = &["test", "spec", "unit_test", "integration_test", "e2e_test"];
const DOC_TERMS: WordList = &[
    "readme",
    "documentation",
    "guide",
    "tutorial",
    "manual",
    "changelog",
];
const DATA_TERMS: WordList = &["data", "dataset", "backup", "export", "dump", "archive"];

// Projects
const DESIGN_TERMS: WordList = &[
    "design",
    "mockup",
    "wireframe",
    "prototype",
    "sketch",
    "layout",
];
const DRAFT_TERMS: WordList = &["draft", "wip", "work_in_progress", "temp", "temporary"];
const FINAL_TERMS: WordList = &[
    "final",
    "final_version",
    "approved",
    "published",
    "released",
];

// Personal
const TAX_TERMS: WordList = &["tax", "tax_return", "w2", "1099", "deduction", "expense"];
const TRAVEL_TERMS: WordList = &[
    "itinerary",
    "booking",
    "reservation",
    "ticket",
    "hotel",
    "flight",
];
const HEALTH_TERMS: WordList = &[
    "medical",
    "prescription",
    "insurance",
    "health_record",
    "lab_result",
];
const EDUCATION_TERMS: WordList = &[
    "assignment",
    "homework",
    "exam",
    "quiz",
    "syllabus",
    "lecture",
];

const YEARS: WordList = &[
    "2015", "2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024", "2025",
];
const MONTHS: WordList = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];
const MONTH_ABBREVIATIONS: WordList = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const QUARTERS: WordList = &["q1", "q2", "q3", "q4"];
const VERSIONS: WordList = &["v1", "v2", "v3", "final", "draft", "revised", "updated"];
const COMPANIES: WordList = &[
    "acme",
    "techcorp",
    "globex",
    "initech",
    "hooli",
    "pied_piper",
    "aperture",
    "umbrella",
];
const CLIENTS: WordList = &[
    "client_a", "client_b", "johnson", "smith", "williams", "brown", "jones",
];
const PROJECTS: WordList = &[
    "alpha",
    "beta",
    "gamma",
    "delta",
    "project_x",
    "project_phoenix",
    "project_atlas",
];
const PRIORITIES: WordList = &["urgent", "high_priority", "important", "critical"];
const STATUSES: WordList = &[
    "pending",
    "approved",
    "rejected",
    "reviewed",
    "completed",
    "in_progress",
];
const ADJECTIVES: WordList = &[
    "new",
    "old",
    "updated",
    "revised",
    "final",
    "draft",
    "preliminary",
    "detailed",
    "complete",
    "partial",
    "full",
    "summary",
    "comprehensive",
    "brief",
    "quick",
    "annual",
    "monthly",
    "weekly",
    "daily",
    "internal",
    "external",
    "public",
    "private",
    "confidential",
    "urgent",
    "important",
    "archived",
    "latest",
    "previous",
];
const TOPICS: WordList = &[
    "marketing",
    "sales",
    "finance",
    "hr",
    "operations",
    "strategy",
    "product",
    "customer",
    "technical",
    "legal",
    "compliance",
    "security",
    "research",
    "development",
    "analysis",
    "budget",
    "forecast",
    "planning",
    "review",
    "audit",
    "training",
    "onboarding",
];
const LOCATIONS: WordList = &[
    "remote",
    "office",
    "headquarters",
    "branch",
    "regional",
    "global",
    "local",
    "domestic",
    "international",
    "north_america",
    "europe",
    "asia",
    "east_coast",
    "west_coast",
    "midwest",
    "san_francisco",
    "new_york",
    "london",
    "tokyo",
];
const DEPARTMENTS: WordList = &[
    "engineering",
    "marketing",
    "sales",
    "hr",
    "finance",
    "operations",
    "legal",
    "product",
    "design",
    "customer_success",
    "support",
    "research",
    "analytics",
    "it",
    "admin",
    "executive",
    "management",
];
const EVENT_TYPES: WordList = &[
    "workshop",
    "conference",
    "seminar",
    "training",
    "webinar",
    "meeting",
    "call",
    "standup",
    "retrospective",
    "planning",
    "review",
    "brainstorm",
    "kickoff",
    "launch",
    "demo",
    "presentation",
    "interview",
    "onboarding",
];
const DOCUMENT_TYPES: WordList = &[
    "summary",
    "overview",
    "outline",
    "checklist",
    "template",
    "form",
    "worksheet",
    "guidelines",
    "policy",
    "procedure",
    "handbook",
    "reference",
    "specs",
    "requirements",
    "roadmap",
    "timeline",
    "schedule",
    "plan",
    "strategy",
];
const MEDIA_SUBJECTS: WordList = &[
    "vacation",
    "birthday",
    "wedding",
    "party",
    "holiday",
    "family",
    "friends",
    "nature",
    "landscape",
    "portrait",
    "sunset",
    "beach",
    "mountains",
    "city",
    "food",
    "pets",
    "travel",
    "adventure",
    "concert",
    "festival",
    "graduation",
];
const FILE_ACTIONS: WordList = &[
    "backup",
    "copy",
    "export",
    "import",
    "sync",
    "transfer",
    "upload",
    "download",
    "archive",
    "restore",
    "migration",
    "conversion",
    "extraction",
    "compilation",
];
const QUALITIES: WordList = &[
    "high_quality",
    "low_res",
    "hd",
    "4k",
    "compressed",
    "raw",
    "edited",
    "unedited",
    "original",
    "processed",
    "enhanced",
    "optimized",
    "draft_quality",
    "print_ready",
];

/// Frozen category-to-terms mapping plus named modifier lists.
///
/// Constructed once via [`Vocabulary::builtin`] and shared read-only for the
/// process lifetime. Every list is guaranteed non-empty.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    categories: IndexMap<CategoryName, WordList>,
}

impl Vocabulary {
    /// The built-in taxonomy: 21 categories across documents, media,
    /// development, project, and personal groupings.
    pub fn builtin() -> Self {
        let categories = IndexMap::from([
            ("reports", REPORT_TERMS),
            ("invoices", INVOICE_TERMS),
            ("contracts", CONTRACT_TERMS),
            ("presentations", PRESENTATION_TERMS),
            ("meeting_notes", MEETING_NOTE_TERMS),
            ("resumes", RESUME_TERMS),
            ("photos", PHOTO_TERMS),
            ("videos", VIDEO_TERMS),
            ("music", MUSIC_TERMS),
            ("screenshots", SCREENSHOT_TERMS),
            ("code", CODE_TERMS),
            ("tests", TEST_TERMS),
            ("docs", DOC_TERMS),
            ("data", DATA_TERMS),
            ("designs", DESIGN_TERMS),
            ("drafts", DRAFT_TERMS),
            ("final", FINAL_TERMS),
            ("taxes", TAX_TERMS),
            ("travel", TRAVEL_TERMS),
            ("health", HEALTH_TERMS),
            ("education", EDUCATION_TERMS),
        ]);
        debug_assert!(categories.values().all(|terms| !terms.is_empty()));
        Self { categories }
    }

    /// Number of categories in the taxonomy.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Category names in insertion order.
    pub fn category_names(&self) -> impl Iterator<Item = CategoryName> + '_ {
        self.categories.keys().copied()
    }

    /// Terms for `category`, or `None` when the category is unknown.
    pub fn terms(&self, category: &str) -> Option<WordList> {
        self.categories.get(category).copied()
    }

    /// Uniform random category draw, returning its name and term list.
    pub fn random_category<R: Rng + ?Sized>(&self, rng: &mut R) -> (CategoryName, WordList) {
        let idx = rng.random_range(0..self.categories.len());
        let (name, terms) = self
            .categories
            .get_index(idx)
            .expect("index drawn from the category map range");
        (*name, *terms)
    }

    /// Calendar years, rendered as strings (`2015` through `2025`).
    pub fn years(&self) -> WordList {
        YEARS
    }

    /// Full lowercase month names.
    pub fn months(&self) -> WordList {
        MONTHS
    }

    /// Three-letter month abbreviations.
    pub fn month_abbreviations(&self) -> WordList {
        MONTH_ABBREVIATIONS
    }

    /// Fiscal quarters (`q1` through `q4`).
    pub fn quarters(&self) -> WordList {
        QUARTERS
    }

    /// Version tags.
    pub fn versions(&self) -> WordList {
        VERSIONS
    }

    /// Fictional company names.
    pub fn companies(&self) -> WordList {
        COMPANIES
    }

    /// Client identifiers and surnames.
    pub fn clients(&self) -> WordList {
        CLIENTS
    }

    /// Project codenames.
    pub fn projects(&self) -> WordList {
        PROJECTS
    }

    /// Priority markers.
    pub fn priorities(&self) -> WordList {
        PRIORITIES
    }

    /// Workflow status words.
    pub fn statuses(&self) -> WordList {
        STATUSES
    }

    /// General-purpose descriptive adjectives.
    pub fn adjectives(&self) -> WordList {
        ADJECTIVES
    }

    /// Business topic words.
    pub fn topics(&self) -> WordList {
        TOPICS
    }

    /// Location words.
    pub fn locations(&self) -> WordList {
        LOCATIONS
    }

    /// Department names.
    pub fn departments(&self) -> WordList {
        DEPARTMENTS
    }

    /// Event type words.
    pub fn event_types(&self) -> WordList {
        EVENT_TYPES
    }

    /// Document type words.
    pub fn document_types(&self) -> WordList {
        DOCUMENT_TYPES
    }

    /// Personal-media subject words.
    pub fn media_subjects(&self) -> WordList {
        MEDIA_SUBJECTS
    }

    /// File operation words.
    pub fn file_actions(&self) -> WordList {
        FILE_ACTIONS
    }

    /// Media quality markers.
    pub fn qualities(&self) -> WordList {
        QUALITIES
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn modifier_lists(vocab: &Vocabulary) -> Vec<(&'static str, WordList)> {
        vec![
            ("years", vocab.years()),
            ("months", vocab.months()),
            ("month_abbreviations", vocab.month_abbreviations()),
            ("quarters", vocab.quarters()),
            ("versions", vocab.versions()),
            ("companies", vocab.companies()),
            ("clients", vocab.clients()),
            ("projects", vocab.projects()),
            ("priorities", vocab.priorities()),
            ("statuses", vocab.statuses()),
            ("adjectives", vocab.adjectives()),
            ("topics", vocab.topics()),
            ("locations", vocab.locations()),
            ("departments", vocab.departments()),
            ("event_types", vocab.event_types()),
            ("document_types", vocab.document_types()),
            ("media_subjects", vocab.media_subjects()),
            ("file_actions", vocab.file_actions()),
            ("qualities", vocab.qualities()),
        ]
    }

    #[test]
    fn builtin_has_full_taxonomy() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.category_count(), 21);
        assert!(vocab.category_names().any(|name| name == "invoices"));
        assert_eq!(
            vocab.terms("invoices"),
            Some(&["invoice", "receipt", "bill", "statement", "payment", "transaction"][..])
        );
        assert_eq!(vocab.terms("unknown"), None);
    }

    #[test]
    fn every_category_is_non_empty() {
        let vocab = Vocabulary::builtin();
        for name in vocab.category_names() {
            let terms = vocab.terms(name).unwrap();
            assert!(!terms.is_empty(), "category '{name}' has no terms");
        }
    }

    #[test]
    fn every_modifier_list_is_non_empty() {
        let vocab = Vocabulary::builtin();
        for (name, list) in modifier_lists(&vocab) {
            assert!(!list.is_empty(), "modifier list '{name}' is empty");
        }
    }

    #[test]
    fn all_words_use_stem_charset() {
        let valid = |word: &str| {
            word.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        };
        let vocab = Vocabulary::builtin();
        for name in vocab.category_names() {
            for term in vocab.terms(name).unwrap() {
                assert!(valid(term), "term '{term}' in '{name}' breaks the charset");
            }
        }
        for (name, list) in modifier_lists(&vocab) {
            for word in list {
                assert!(valid(word), "word '{word}' in '{name}' breaks the charset");
            }
        }
    }

    #[test]
    fn random_category_draws_are_seed_deterministic() {
        let vocab = Vocabulary::builtin();
        let mut a = StdRng::from_seed([9_u8; 32]);
        let mut b = StdRng::from_seed([9_u8; 32]);
        for _ in 0..64 {
            assert_eq!(vocab.random_category(&mut a).0, vocab.random_category(&mut b).0);
        }
    }
}
