//! Candidate set management
//!
//! Holds the ranked candidates for the current composition, the selection,
//! paging for the host window, and the sub-candidates of the selected
//! candidate.

use subcandidates_engine::{CandidateEntry, SubCandidateGroup};
use tracing::debug;

/// A single conversion candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The converted text
    pub text: String,
    /// Alternatives for one position of `text`, decided by the service
    pub sub_candidates: Option<SubCandidateGroup>,
    /// Position in the conversion service's output
    pub index: usize,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sub_candidates: None,
            index: 0,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Decode a service candidate string. A malformed sub-candidate group
    /// makes the whole string a plain candidate.
    pub fn decode(raw: &str) -> Self {
        match CandidateEntry::parse(raw) {
            Ok(entry) => entry.into(),
            Err(e) => {
                debug!("malformed candidate structure in {:?}: {}", raw, e);
                Self::new(raw)
            }
        }
    }
}

impl From<CandidateEntry> for Candidate {
    fn from(entry: CandidateEntry) -> Self {
        Self {
            text: entry.text,
            sub_candidates: entry.sub_candidates,
            index: 0,
        }
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Sub-candidates of the selected candidate, with their own selection
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveSubCandidates {
    anchor: String,
    items: Vec<String>,
    /// Unset until the user moves into the sub-candidate list
    cursor: Option<usize>,
}

/// Ranked candidates with selection, paging and sub-candidate support
#[derive(Debug, Clone)]
pub struct CandidateSet {
    /// All candidates
    candidates: Vec<Candidate>,
    /// Currently selected candidate index (meaningless while empty)
    cursor: usize,
    /// Number of candidates per page
    page_size: usize,
    /// Sub-candidates for the current selection
    sub: Option<ActiveSubCandidates>,
    /// Whether sub-candidate groups are exposed at all
    sub_enabled: bool,
}

impl CandidateSet {
    /// Default page size for candidate display
    pub const DEFAULT_PAGE_SIZE: usize = 9;

    /// Create an empty candidate set
    pub fn new() -> Self {
        Self::with_page_size(Self::DEFAULT_PAGE_SIZE)
    }

    /// Create an empty candidate set with the given page size (at least 1)
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            candidates: Vec::new(),
            cursor: 0,
            page_size: page_size.max(1),
            sub: None,
            sub_enabled: true,
        }
    }

    /// Create a populated set from service strings
    pub fn from_strings(strings: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let candidates = strings
            .into_iter()
            .enumerate()
            .map(|(i, s)| Candidate::decode(s.as_ref()).with_index(i))
            .collect();
        let mut set = Self::new();
        set.populate(candidates);
        set
    }

    /// Enable or disable sub-candidates; recomputes them for the selection
    pub fn set_sub_candidates_enabled(&mut self, enabled: bool) {
        self.sub_enabled = enabled;
        self.compute_sub_candidates();
    }

    /// Replace all candidates and select the first one
    pub fn populate(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.cursor = 0;
        self.compute_sub_candidates();
    }

    /// Remove all candidates
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.cursor = 0;
        self.sub = None;
    }

    /// Get all candidates
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Candidate texts in order, as shown in the host window
    pub fn texts(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Index of the selected candidate, `None` while empty
    pub fn selected_index(&self) -> Option<usize> {
        (!self.candidates.is_empty()).then_some(self.cursor)
    }

    /// Get the currently selected candidate
    pub fn selected(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor)
    }

    /// Get the currently selected text
    pub fn selected_text(&self) -> Option<&str> {
        self.selected().map(|c| c.text.as_str())
    }

    /// Move to the next candidate, wrapping to the first
    pub fn select_next(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.candidates.len();
        self.compute_sub_candidates();
        true
    }

    /// Move to the previous candidate, wrapping to the last
    pub fn select_previous(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        self.cursor = if self.cursor == 0 {
            self.candidates.len() - 1
        } else {
            self.cursor - 1
        };
        self.compute_sub_candidates();
        true
    }

    /// Select an absolute row. Out-of-range offsets leave the selection
    /// unchanged and return false.
    pub fn select_by_row_offset(&mut self, offset: isize) -> bool {
        match usize::try_from(offset) {
            Ok(index) if index < self.candidates.len() => {
                self.cursor = index;
                self.compute_sub_candidates();
                true
            }
            _ => false,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Get the current page number (0-indexed)
    pub fn current_page(&self) -> usize {
        self.cursor / self.page_size
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        self.candidates.len().div_ceil(self.page_size)
    }

    /// Get the start index of the current page
    pub fn page_start(&self) -> usize {
        self.current_page() * self.page_size
    }

    /// Get the candidates for the current page
    pub fn page_candidates(&self) -> &[Candidate] {
        let start = self.page_start().min(self.candidates.len());
        let end = (start + self.page_size).min(self.candidates.len());
        &self.candidates[start..end]
    }

    /// Get the cursor position within the current page (0-indexed)
    pub fn page_cursor(&self) -> usize {
        self.cursor - self.page_start()
    }

    /// Move to the first row of the next page, wrapping to the first page
    pub fn next_page(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        let next_page_start = self.page_start() + self.page_size;
        self.cursor = if next_page_start < self.candidates.len() {
            next_page_start
        } else {
            0
        };
        self.compute_sub_candidates();
        true
    }

    /// Move to the first row of the previous page, wrapping to the last page
    pub fn previous_page(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }
        let current_page = self.current_page();
        self.cursor = if current_page > 0 {
            (current_page - 1) * self.page_size
        } else {
            self.total_pages().saturating_sub(1) * self.page_size
        };
        self.compute_sub_candidates();
        true
    }

    /// Select a candidate by row within the current page (1-based)
    pub fn select_on_page(&mut self, row: usize) -> Option<&Candidate> {
        if row == 0 || row > self.page_size {
            return None;
        }
        let absolute_index = self.page_start() + row - 1;
        if absolute_index >= self.candidates.len() {
            return None;
        }
        self.cursor = absolute_index;
        self.compute_sub_candidates();
        self.selected()
    }

    /// Rebuild the sub-candidates for the current selection.
    ///
    /// Previous sub-candidates are always dropped first, so a selection that
    /// has no structure never shows alternatives of an earlier selection.
    pub fn compute_sub_candidates(&mut self) {
        self.sub = None;
        if !self.sub_enabled {
            return;
        }
        let Some(group) = self.selected().and_then(|c| c.sub_candidates.as_ref()) else {
            return;
        };
        if group.items.is_empty() {
            return;
        }
        self.sub = Some(ActiveSubCandidates {
            anchor: group.anchor.clone(),
            items: group.items.clone(),
            cursor: None,
        });
    }

    pub fn sub_candidates_exist(&self) -> bool {
        self.sub.is_some()
    }

    /// Sub-candidates of the selection (empty when none exist)
    pub fn sub_candidates(&self) -> &[String] {
        self.sub.as_ref().map(|s| s.items.as_slice()).unwrap_or(&[])
    }

    /// Where the sub-candidates attach within the selected candidate
    pub fn sub_candidate_anchor(&self) -> Option<&str> {
        self.sub.as_ref().map(|s| s.anchor.as_str())
    }

    pub fn sub_selected_index(&self) -> Option<usize> {
        self.sub.as_ref().and_then(|s| s.cursor)
    }

    /// Text of the selected sub-candidate, if one is selected
    pub fn selected_sub_text(&self) -> Option<&str> {
        let sub = self.sub.as_ref()?;
        sub.cursor.and_then(|i| sub.items.get(i)).map(String::as_str)
    }

    /// Move to the next sub-candidate; from unset, selects the first
    pub fn select_next_sub(&mut self) -> bool {
        let Some(sub) = self.sub.as_mut() else {
            return false;
        };
        let len = sub.items.len();
        sub.cursor = Some(sub.cursor.map_or(0, |i| (i + 1) % len));
        true
    }

    /// Move to the previous sub-candidate; from unset, selects the last
    pub fn select_previous_sub(&mut self) -> bool {
        let Some(sub) = self.sub.as_mut() else {
            return false;
        };
        let last = sub.items.len() - 1;
        sub.cursor = Some(match sub.cursor {
            None | Some(0) => last,
            Some(i) => i - 1,
        });
        true
    }

    /// Select a sub-candidate row; out-of-range offsets are ignored
    pub fn select_sub_by_row_offset(&mut self, offset: isize) -> bool {
        let Some(sub) = self.sub.as_mut() else {
            return false;
        };
        match usize::try_from(offset) {
            Ok(index) if index < sub.items.len() => {
                sub.cursor = Some(index);
                true
            }
            _ => false,
        }
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_selects_first() {
        let candidates = CandidateSet::from_strings(["日本", "にほん", "ニホン"]);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates.selected_index(), Some(0));
        assert_eq!(candidates.selected_text(), Some("日本"));
    }

    #[test]
    fn test_empty_set_has_no_selection() {
        let mut candidates = CandidateSet::new();
        assert_eq!(candidates.selected_index(), None);
        assert!(!candidates.select_next());
        assert!(!candidates.select_previous());
        assert!(!candidates.next_page());
        assert!(!candidates.select_by_row_offset(0));
        assert!(candidates.page_candidates().is_empty());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut candidates = CandidateSet::from_strings(["a", "b", "c"]);

        assert!(candidates.select_next());
        assert_eq!(candidates.selected_text(), Some("b"));
        assert!(candidates.select_next());
        assert_eq!(candidates.selected_text(), Some("c"));

        // Wrap around
        assert!(candidates.select_next());
        assert_eq!(candidates.selected_text(), Some("a"));

        // Wrap back
        assert!(candidates.select_previous());
        assert_eq!(candidates.selected_text(), Some("c"));
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=5 {
            let items: Vec<_> = (0..len).map(|i| format!("c{}", i)).collect();
            for start in 0..len {
                let mut candidates = CandidateSet::from_strings(&items);
                candidates.select_by_row_offset(start as isize);
                for _ in 0..len {
                    candidates.select_next();
                }
                assert_eq!(candidates.selected_index(), Some(start));
                for _ in 0..len {
                    candidates.select_previous();
                }
                assert_eq!(candidates.selected_index(), Some(start));
            }
        }
    }

    #[test]
    fn test_select_by_row_offset_bounds() {
        let mut candidates = CandidateSet::from_strings(["a", "b"]);
        assert!(!candidates.select_by_row_offset(5));
        assert!(!candidates.select_by_row_offset(2));
        assert!(!candidates.select_by_row_offset(-1));
        assert_eq!(candidates.selected_index(), Some(0));

        assert!(candidates.select_by_row_offset(1));
        assert_eq!(candidates.selected_index(), Some(1));
    }

    #[test]
    fn test_pagination() {
        // 20 items with the default page size of 9 = 3 pages (9+9+2)
        let items: Vec<_> = (1..=20).map(|i| format!("item{}", i)).collect();
        let mut candidates = CandidateSet::from_strings(items);

        assert_eq!(candidates.total_pages(), 3);
        assert_eq!(candidates.current_page(), 0);
        assert_eq!(candidates.page_candidates().len(), 9);

        candidates.next_page();
        assert_eq!(candidates.current_page(), 1);
        assert_eq!(candidates.page_start(), 9);

        candidates.next_page();
        assert_eq!(candidates.page_candidates().len(), 2);

        // Wrap to first page
        candidates.next_page();
        assert_eq!(candidates.current_page(), 0);

        // And back to the last
        candidates.previous_page();
        assert_eq!(candidates.current_page(), 2);
        assert_eq!(candidates.selected_text(), Some("item19"));
    }

    #[test]
    fn test_select_on_page() {
        let items: Vec<_> = (1..=20).map(|i| format!("item{}", i)).collect();
        let mut candidates = CandidateSet::from_strings(items);

        candidates.select_on_page(3);
        assert_eq!(candidates.selected_text(), Some("item3"));
        assert_eq!(candidates.page_cursor(), 2);

        candidates.next_page();
        candidates.select_on_page(2);
        assert_eq!(candidates.selected_text(), Some("item11"));

        // Row past the end of the last page
        candidates.next_page();
        assert!(candidates.select_on_page(5).is_none());
        assert_eq!(candidates.selected_text(), Some("item19"));
        assert!(candidates.select_on_page(0).is_none());
    }

    #[test]
    fn test_sub_candidates_follow_selection() {
        let mut candidates = CandidateSet::from_strings(["日本{2:ニッポン|にっぽん}", "にほん"]);
        assert!(candidates.sub_candidates_exist());
        assert_eq!(candidates.sub_candidate_anchor(), Some("2"));
        assert_eq!(candidates.sub_candidates(), ["ニッポン", "にっぽん"]);
        assert_eq!(candidates.sub_selected_index(), None);

        candidates.select_next_sub();
        assert_eq!(candidates.selected_sub_text(), Some("ニッポン"));

        // A plain candidate never keeps the previous alternatives
        candidates.select_next();
        assert!(!candidates.sub_candidates_exist());
        assert!(candidates.sub_candidates().is_empty());
        assert_eq!(candidates.sub_candidate_anchor(), None);
        assert_eq!(candidates.selected_sub_text(), None);

        // Coming back starts with no sub-selection
        candidates.select_previous();
        assert!(candidates.sub_candidates_exist());
        assert_eq!(candidates.sub_selected_index(), None);
    }

    #[test]
    fn test_sub_navigation_wraps() {
        let mut candidates = CandidateSet::from_strings(["x{1:a|b|c}"]);
        assert!(candidates.select_previous_sub());
        assert_eq!(candidates.selected_sub_text(), Some("c"));
        candidates.select_next_sub();
        assert_eq!(candidates.selected_sub_text(), Some("a"));
        candidates.select_previous_sub();
        assert_eq!(candidates.selected_sub_text(), Some("c"));

        assert!(!candidates.select_sub_by_row_offset(3));
        assert!(!candidates.select_sub_by_row_offset(-1));
        assert_eq!(candidates.sub_selected_index(), Some(2));
        assert!(candidates.select_sub_by_row_offset(1));
        assert_eq!(candidates.selected_sub_text(), Some("b"));
    }

    #[test]
    fn test_malformed_structure_is_plain() {
        let candidates = CandidateSet::from_strings(["x{:a}"]);
        assert_eq!(candidates.selected_text(), Some("x{:a}"));
        assert!(!candidates.sub_candidates_exist());

        let mut empty = CandidateSet::new();
        assert!(!empty.select_next_sub());
    }

    #[test]
    fn test_sub_candidates_disabled() {
        let mut candidates = CandidateSet::from_strings(["日本{2:ニッポン}"]);
        candidates.set_sub_candidates_enabled(false);
        assert_eq!(candidates.selected_text(), Some("日本"));
        assert!(!candidates.sub_candidates_exist());
        assert!(!candidates.select_next_sub());
    }
}
