// ============================================================================
// INCIDENT LIST VIEW-MODEL - query/filter/sort/pagination state machine
// ============================================================================
// Pure state, no DOM and no network. The hook layer owns the debounce timer
// and the fetches; everything decision-shaped lives here so it can be tested
// off the browser.
// ============================================================================

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::incident::{Incident, IncidentCategory, IncidentPriority, IncidentStatus};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct IncidentFilters {
    pub status: Vec<IncidentStatus>,
    pub priority: Vec<IncidentPriority>,
    pub category: Vec<IncidentCategory>,
    pub created_at: Option<NaiveDate>,
}

impl IncidentFilters {
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.priority.is_empty()
            && self.category.is_empty()
            && self.created_at.is_none()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortKey {
    CreatedAt,
    Priority,
    Status,
}

impl SortKey {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// What the next fetch should be. Search and structured filtering are
/// mutually exclusive modes: a non-empty query always wins and the
/// structured filters are not sent at all.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchPlan {
    Search {
        q: String,
        skip: usize,
        limit: usize,
    },
    List {
        page: usize,
        page_size: usize,
        filters: IncidentFilters,
        sort_by: SortKey,
        sort_order: SortOrder,
    },
}

/// The inputs that should trigger a (debounced) refetch when they change
#[derive(Clone, PartialEq, Debug)]
pub struct QueryInputs {
    pub query: String,
    pub filters: IncidentFilters,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub page: usize,
}

#[derive(Clone, PartialEq, Debug)]
pub struct IncidentListVm {
    pub phase: LoadPhase,
    pub incidents: Vec<Incident>,
    pub query: String,
    /// Staged filter edits, committed on an explicit apply
    pub draft: IncidentFilters,
    pub committed: IncidentFilters,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    /// 0-based visible page index
    pub page: usize,
    pub page_size: usize,
    pub has_next_page: bool,
    /// Row-scoped failure (status update), separate from the list phase
    pub action_error: Option<String>,
    /// Rows recently patched in place, for the transient highlight
    pub highlighted: HashSet<i64>,
    generation: u64,
}

impl IncidentListVm {
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: LoadPhase::Idle,
            incidents: Vec::new(),
            query: String::new(),
            draft: IncidentFilters::default(),
            committed: IncidentFilters::default(),
            sort_by: SortKey::CreatedAt,
            sort_order: SortOrder::Desc,
            page: 0,
            page_size,
            has_next_page: false,
            action_error: None,
            highlighted: HashSet::new(),
            generation: 0,
        }
    }

    pub fn inputs_key(&self) -> QueryInputs {
        QueryInputs {
            query: self.query.clone(),
            filters: self.committed.clone(),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page: self.page,
        }
    }

    pub fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            // Search always starts from the first page
            self.page = 0;
        }
    }

    pub fn toggle_draft_status(&mut self, status: IncidentStatus) {
        toggle(&mut self.draft.status, status);
    }

    pub fn toggle_draft_priority(&mut self, priority: IncidentPriority) {
        toggle(&mut self.draft.priority, priority);
    }

    pub fn toggle_draft_category(&mut self, category: IncidentCategory) {
        toggle(&mut self.draft.category, category);
    }

    pub fn set_draft_date(&mut self, date: Option<NaiveDate>) {
        self.draft.created_at = date;
    }

    /// Commit the staged filters. Resets nothing else.
    pub fn apply_filters(&mut self) {
        self.committed = self.draft.clone();
    }

    /// Date-clear is the one filter edit that commits immediately
    pub fn clear_date(&mut self) {
        self.draft.created_at = None;
        self.committed.created_at = None;
    }

    pub fn toggle_created_sort(&mut self) {
        self.sort_by = SortKey::CreatedAt;
        self.sort_order = self.sort_order.toggled();
    }

    pub fn next_page(&mut self) {
        if self.has_next_page {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// The request the current inputs call for
    pub fn plan(&self) -> FetchPlan {
        if self.is_searching() {
            FetchPlan::Search {
                q: self.query.clone(),
                skip: 0,
                limit: self.page_size,
            }
        } else {
            FetchPlan::List {
                page: self.page,
                page_size: self.page_size,
                filters: self.committed.clone(),
                sort_by: self.sort_by,
                sort_order: self.sort_order,
            }
        }
    }

    /// Mark a fetch as started and return its generation. Only the result
    /// carrying the newest generation will be accepted; anything older is
    /// a stale in-flight response and gets dropped on arrival.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        if self.is_searching() {
            self.page = 0;
        }
        self.generation
    }

    /// Apply a fetch result. Returns false (and changes nothing) when the
    /// result is stale.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<Vec<Incident>, String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(rows) => {
                // Probe pagination: a full page means there may be more
                self.has_next_page = !self.is_searching() && rows.len() >= self.page_size;
                self.incidents = rows;
                self.phase = LoadPhase::Loaded;
            }
            Err(message) => {
                self.phase = LoadPhase::Error(message);
            }
        }
        true
    }

    /// Patch one row in place after a successful status update; no refetch
    pub fn patch_status(&mut self, id: i64, new_status: IncidentStatus) -> bool {
        match self.incidents.iter_mut().find(|i| i.id == id) {
            Some(incident) => {
                incident.status = new_status;
                true
            }
            None => false,
        }
    }

    /// Drop one row after a successful delete; no refetch
    pub fn remove_incident(&mut self, id: i64) -> bool {
        let before = self.incidents.len();
        self.incidents.retain(|i| i.id != id);
        self.incidents.len() != before
    }

    pub fn mark_updated(&mut self, id: i64) {
        self.highlighted.insert(id);
        self.action_error = None;
    }

    pub fn clear_highlight(&mut self, id: i64) {
        self.highlighted.remove(&id);
    }

    pub fn set_action_error(&mut self, message: String) {
        self.action_error = Some(message);
    }
}

fn toggle<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if let Some(pos) = set.iter().position(|v| *v == value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(id: i64, status: IncidentStatus) -> Incident {
        Incident {
            id,
            title: format!("incident {}", id),
            description: "desc".to_string(),
            category: IncidentCategory::Software,
            priority: IncidentPriority::Medium,
            status,
            created_at: "2025-01-01T00:00:00".to_string(),
            reporter_id: 1,
            resolver_id: None,
        }
    }

    fn page_of(len: usize) -> Vec<Incident> {
        (0..len as i64)
            .map(|id| incident(id, IncidentStatus::Open))
            .collect()
    }

    #[test]
    fn rapid_edits_collapse_into_one_plan_with_the_last_state() {
        let mut vm = IncidentListVm::new(10);
        vm.set_query("pri".to_string());
        vm.set_query("print".to_string());
        vm.set_query("printer".to_string());
        match vm.plan() {
            FetchPlan::Search { q, skip, limit } => {
                assert_eq!(q, "printer");
                assert_eq!(skip, 0);
                assert_eq!(limit, 10);
            }
            other => panic!("expected search plan, got {:?}", other),
        }
    }

    #[test]
    fn search_supersedes_structured_filters() {
        let mut vm = IncidentListVm::new(10);
        vm.toggle_draft_status(IncidentStatus::Open);
        vm.apply_filters();
        vm.set_query("router down".to_string());
        assert!(matches!(vm.plan(), FetchPlan::Search { .. }));
    }

    #[test]
    fn entering_search_mode_forces_page_zero() {
        let mut vm = IncidentListVm::new(10);
        vm.has_next_page = true;
        vm.next_page();
        vm.next_page();
        assert_eq!(vm.page, 2);
        vm.set_query("printer".to_string());
        assert_eq!(vm.page, 0);
    }

    #[test]
    fn clearing_the_query_returns_to_list_mode() {
        let mut vm = IncidentListVm::new(10);
        vm.set_query("printer".to_string());
        vm.set_query(String::new());
        assert!(matches!(vm.plan(), FetchPlan::List { .. }));
    }

    #[test]
    fn draft_edits_do_not_reach_the_plan_until_applied() {
        let mut vm = IncidentListVm::new(10);
        vm.toggle_draft_status(IncidentStatus::Open);
        vm.toggle_draft_priority(IncidentPriority::High);
        match vm.plan() {
            FetchPlan::List { filters, .. } => assert!(filters.is_empty()),
            other => panic!("expected list plan, got {:?}", other),
        }

        vm.apply_filters();
        match vm.plan() {
            FetchPlan::List { filters, .. } => {
                assert_eq!(filters.status, vec![IncidentStatus::Open]);
                assert_eq!(filters.priority, vec![IncidentPriority::High]);
            }
            other => panic!("expected list plan, got {:?}", other),
        }
    }

    #[test]
    fn toggling_twice_removes_the_filter_value() {
        let mut vm = IncidentListVm::new(10);
        vm.toggle_draft_status(IncidentStatus::Solved);
        vm.toggle_draft_status(IncidentStatus::Solved);
        assert!(vm.draft.status.is_empty());
    }

    #[test]
    fn applying_filters_keeps_the_rest_of_the_state() {
        let mut vm = IncidentListVm::new(10);
        vm.has_next_page = true;
        vm.next_page();
        vm.toggle_created_sort();
        vm.toggle_draft_status(IncidentStatus::Open);
        vm.apply_filters();
        assert_eq!(vm.page, 1);
        assert_eq!(vm.sort_order, SortOrder::Asc);
    }

    #[test]
    fn date_clear_commits_immediately_without_apply() {
        let mut vm = IncidentListVm::new(10);
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        vm.set_draft_date(Some(day));
        vm.apply_filters();
        assert_eq!(vm.committed.created_at, Some(day));

        vm.clear_date();
        assert_eq!(vm.draft.created_at, None);
        assert_eq!(vm.committed.created_at, None);
    }

    #[test]
    fn staged_date_needs_apply_to_commit() {
        let mut vm = IncidentListVm::new(10);
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        vm.set_draft_date(Some(day));
        assert_eq!(vm.committed.created_at, None);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut vm = IncidentListVm::new(10);
        let gen_a = vm.begin_fetch();
        let gen_b = vm.begin_fetch();

        // B lands first
        assert!(vm.resolve(gen_b, Ok(vec![incident(2, IncidentStatus::Open)])));
        // A lands afterwards and must be dropped without touching the rows
        assert!(!vm.resolve(gen_a, Ok(vec![incident(1, IncidentStatus::Open)])));

        assert_eq!(vm.incidents.len(), 1);
        assert_eq!(vm.incidents[0].id, 2);
        assert_eq!(vm.phase, LoadPhase::Loaded);
    }

    #[test]
    fn stale_error_cannot_clobber_a_fresh_result() {
        let mut vm = IncidentListVm::new(10);
        let gen_a = vm.begin_fetch();
        let gen_b = vm.begin_fetch();
        assert!(vm.resolve(gen_b, Ok(page_of(3))));
        assert!(!vm.resolve(gen_a, Err("timeout".to_string())));
        assert_eq!(vm.phase, LoadPhase::Loaded);
    }

    #[test]
    fn fetch_error_moves_to_error_phase() {
        let mut vm = IncidentListVm::new(10);
        let generation = vm.begin_fetch();
        assert!(vm.resolve(generation, Err("HTTP 500".to_string())));
        assert_eq!(vm.phase, LoadPhase::Error("HTTP 500".to_string()));
    }

    #[test]
    fn full_page_enables_next_and_short_page_disables_it() {
        let mut vm = IncidentListVm::new(10);
        let generation = vm.begin_fetch();
        vm.resolve(generation, Ok(page_of(10)));
        assert!(vm.has_next_page);

        let generation = vm.begin_fetch();
        vm.resolve(generation, Ok(page_of(4)));
        assert!(!vm.has_next_page);
    }

    #[test]
    fn previous_is_disabled_at_page_zero() {
        let mut vm = IncidentListVm::new(10);
        assert!(!vm.can_prev());
        vm.prev_page();
        assert_eq!(vm.page, 0);

        vm.has_next_page = true;
        vm.next_page();
        assert!(vm.can_prev());
    }

    #[test]
    fn next_is_a_no_op_without_a_full_page() {
        let mut vm = IncidentListVm::new(10);
        vm.next_page();
        assert_eq!(vm.page, 0);
    }

    #[test]
    fn search_results_never_offer_a_next_page() {
        let mut vm = IncidentListVm::new(10);
        vm.set_query("printer".to_string());
        let generation = vm.begin_fetch();
        vm.resolve(generation, Ok(page_of(10)));
        assert!(!vm.has_next_page);
    }

    #[test]
    fn status_patch_touches_exactly_one_row() {
        let mut vm = IncidentListVm::new(10);
        let generation = vm.begin_fetch();
        vm.resolve(
            generation,
            Ok(vec![
                incident(5, IncidentStatus::Open),
                incident(7, IncidentStatus::Open),
                incident(9, IncidentStatus::InProgress),
            ]),
        );

        assert!(vm.patch_status(7, IncidentStatus::Solved));

        assert_eq!(vm.incidents[0].status, IncidentStatus::Open);
        assert_eq!(vm.incidents[1].status, IncidentStatus::Solved);
        assert_eq!(vm.incidents[2].status, IncidentStatus::InProgress);
    }

    #[test]
    fn status_patch_on_a_missing_row_reports_failure() {
        let mut vm = IncidentListVm::new(10);
        assert!(!vm.patch_status(42, IncidentStatus::Solved));
    }

    #[test]
    fn removing_a_row_leaves_the_others_untouched() {
        let mut vm = IncidentListVm::new(10);
        let generation = vm.begin_fetch();
        vm.resolve(
            generation,
            Ok(vec![
                incident(1, IncidentStatus::Open),
                incident(2, IncidentStatus::Open),
            ]),
        );
        assert!(vm.remove_incident(1));
        assert!(!vm.remove_incident(1));
        assert_eq!(vm.incidents.len(), 1);
        assert_eq!(vm.incidents[0].id, 2);
    }

    #[test]
    fn highlight_lifecycle_follows_mark_and_clear() {
        let mut vm = IncidentListVm::new(10);
        vm.mark_updated(7);
        assert!(vm.highlighted.contains(&7));
        vm.clear_highlight(7);
        assert!(!vm.highlighted.contains(&7));
    }

    #[test]
    fn inputs_key_ignores_results_and_draft_edits() {
        let mut vm = IncidentListVm::new(10);
        let before = vm.inputs_key();

        vm.toggle_draft_status(IncidentStatus::Open);
        let generation = vm.begin_fetch();
        vm.resolve(generation, Ok(page_of(10)));
        assert_eq!(vm.inputs_key(), before);

        vm.apply_filters();
        assert_ne!(vm.inputs_key(), before);
    }
}
