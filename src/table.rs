//! Coupon Table View Engine
//!
//! Pure filtering and sorting over the in-memory coupon list. The table
//! component hides rows that fail the filter instead of removing them, so
//! realtime events can still address every row id.

use std::cmp::Ordering;

use crate::models::Coupon;

/// Which row field the categorical filter inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Status,
    Type,
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Code,
    Name,
    Type,
    Discount,
    Usage,
    Status,
    Expiry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Current query, categorical filter and sort column/direction.
/// Owned by the store; reset only by explicit user action.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub filter_kind: FilterKind,
    pub filter_value: String,
    pub sort: Option<(SortColumn, SortDirection)>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            filter_kind: FilterKind::Status,
            filter_value: "all".to_string(),
            sort: None,
        }
    }
}

impl FilterState {
    /// Text filter AND categorical filter, both case-insensitive.
    /// An empty query and the value `"all"` each match every row.
    pub fn matches(&self, coupon: &Coupon) -> bool {
        let query = self.query.to_lowercase();
        if !query.is_empty() && !coupon.searchable_text().contains(&query) {
            return false;
        }
        if self.filter_value != "all" {
            let value = self.filter_value.to_lowercase();
            let field = match self.filter_kind {
                FilterKind::Status => coupon.status.as_str().to_string(),
                FilterKind::Type => coupon.discount_type.to_lowercase(),
            };
            if !field.contains(&value) {
                return false;
            }
        }
        true
    }

    pub fn set_filter(&mut self, kind: FilterKind, value: &str) {
        self.filter_kind = kind;
        self.filter_value = value.to_string();
    }

    /// Repeated activation of the same column toggles asc/desc;
    /// a different column resets to ascending. Last-activated wins.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        let direction = match self.sort {
            Some((current, SortDirection::Asc)) if current == column => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        self.sort = Some((column, direction));
    }
}

/// Cell text for a column, the value the comparator sees.
pub fn cell_value(coupon: &Coupon, column: SortColumn) -> String {
    match column {
        SortColumn::Code => coupon.code.clone(),
        SortColumn::Name => coupon.name.clone(),
        SortColumn::Type => coupon.discount_type.clone(),
        SortColumn::Discount => coupon.discount_value.to_string(),
        SortColumn::Usage => coupon.usage_count.to_string(),
        SortColumn::Status => coupon.status.to_string(),
        SortColumn::Expiry => coupon.expiry_date.clone(),
    }
}

/// Numeric comparison when both cells parse as finite numbers, otherwise
/// case-insensitive string ordering.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    if let (Ok(a_num), Ok(b_num)) = (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        if a_num.is_finite() && b_num.is_finite() {
            return a_num.partial_cmp(&b_num).unwrap_or(Ordering::Equal);
        }
    }
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Stable in-place sort by the active column, if any.
pub fn sort_rows(rows: &mut [Coupon], state: &FilterState) {
    let Some((column, direction)) = state.sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_cells(&cell_value(a, column), &cell_value(b, column));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// The full view pipeline: filter conjunctively, then sort.
/// Pure and synchronous; the UI adapter derives row visibility from it.
pub fn apply_view(rows: &[Coupon], state: &FilterState) -> Vec<Coupon> {
    let mut visible: Vec<Coupon> = rows.iter().filter(|c| state.matches(c)).cloned().collect();
    sort_rows(&mut visible, state);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CouponStatus;

    fn coupon(id: &str, code: &str, usage: u32, status: CouponStatus) -> Coupon {
        Coupon {
            id: id.to_string(),
            code: code.to_string(),
            name: format!("Coupon {code}"),
            description: String::new(),
            discount_type: "percentage".to_string(),
            discount_value: 10.0,
            status,
            usage_count: usage,
            expiry_date: "2027-01-01".to_string(),
            assigned_to_email: None,
        }
    }

    fn rows() -> Vec<Coupon> {
        vec![
            coupon("1", "SUMMER10", 10, CouponStatus::Active),
            coupon("2", "WINTER20", 2, CouponStatus::Inactive),
            coupon("3", "SPRING5", 33, CouponStatus::Active),
        ]
    }

    #[test]
    fn empty_query_matches_all() {
        let state = FilterState::default();
        assert_eq!(apply_view(&rows(), &state).len(), 3);
    }

    #[test]
    fn query_filters_case_insensitively_and_never_grows() {
        let all = rows();
        let state = FilterState {
            query: "winter".to_string(),
            ..Default::default()
        };
        let visible = apply_view(&all, &state);
        assert!(visible.len() <= all.len());
        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|c| c.searchable_text().contains("winter")));
    }

    #[test]
    fn categorical_filter_and_query_are_conjunctive() {
        let mut state = FilterState {
            query: "winter".to_string(),
            ..Default::default()
        };
        state.set_filter(FilterKind::Status, "inactive");
        assert_eq!(apply_view(&rows(), &state).len(), 1);
        state.query = "summer".to_string();
        assert_eq!(apply_view(&rows(), &state).len(), 0);
    }

    #[test]
    fn status_filter_matches_substring() {
        // "active" is a substring of "inactive", so it matches both statuses
        let mut state = FilterState::default();
        state.set_filter(FilterKind::Status, "active");
        assert_eq!(apply_view(&rows(), &state).len(), 3);
        state.set_filter(FilterKind::Status, "inactive");
        assert_eq!(apply_view(&rows(), &state).len(), 1);
    }

    #[test]
    fn type_filter_matches_substring() {
        let mut state = FilterState::default();
        state.set_filter(FilterKind::Type, "percent");
        assert_eq!(apply_view(&rows(), &state).len(), 3);
        state.set_filter(FilterKind::Type, "fixed");
        assert_eq!(apply_view(&rows(), &state).len(), 0);
    }

    #[test]
    fn numeric_cells_sort_numerically() {
        // "10", "2", "33" ascending must come out 2, 10, 33
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::Usage);
        let visible = apply_view(&rows(), &state);
        let usage: Vec<u32> = visible.iter().map(|c| c.usage_count).collect();
        assert_eq!(usage, vec![2, 10, 33]);
    }

    #[test]
    fn string_cells_sort_lexically() {
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::Code);
        let visible = apply_view(&rows(), &state);
        let codes: Vec<&str> = visible.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["SPRING5", "SUMMER10", "WINTER20"]);
    }

    #[test]
    fn repeated_sort_toggles_direction_then_back() {
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::Usage);
        assert_eq!(state.sort, Some((SortColumn::Usage, SortDirection::Asc)));
        state.toggle_sort(SortColumn::Usage);
        assert_eq!(state.sort, Some((SortColumn::Usage, SortDirection::Desc)));
        state.toggle_sort(SortColumn::Usage);
        assert_eq!(state.sort, Some((SortColumn::Usage, SortDirection::Asc)));
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::Usage);
        state.toggle_sort(SortColumn::Usage);
        state.toggle_sort(SortColumn::Code);
        assert_eq!(state.sort, Some((SortColumn::Code, SortDirection::Asc)));
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let mut all = rows();
        for c in &mut all {
            c.usage_count = 7;
        }
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::Usage);
        let visible = apply_view(&all, &state);
        let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn descending_reverses_comparator() {
        let mut state = FilterState::default();
        state.toggle_sort(SortColumn::Usage);
        state.toggle_sort(SortColumn::Usage);
        let visible = apply_view(&rows(), &state);
        let usage: Vec<u32> = visible.iter().map(|c| c.usage_count).collect();
        assert_eq!(usage, vec![33, 10, 2]);
    }
}
