//! Villa search criteria.
//!
//! `FilterParams` lives for one request only and is never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{DomainError, DomainResult};

/// Criteria for listing villas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub region: Option<String>,
    pub tags: Vec<String>,
    pub page: u64,
    pub per_page: u64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: None,
            region: None,
            tags: Vec::new(),
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One criterion currently narrowing the listing, for display as a removable chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActiveFilter {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl ActiveFilter {
    fn new(key: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            value: value.into(),
        }
    }
}

impl FilterParams {
    /// Reject criteria that can never match.
    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                return Err(DomainError::validation(
                    "check_out must be after check_in",
                ));
            }
        }
        if self.guests == Some(0) {
            return Err(DomainError::validation("guests must be at least 1"));
        }
        Ok(())
    }

    /// Half-open stay range `[check_in, check_out)`, present only when both ends are set
    pub fn stay(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.check_in.zip(self.check_out)
    }

    /// Region with surrounding whitespace removed; blank counts as unset
    pub fn region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty())
    }

    /// Page number, 1-indexed and never zero
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// Page size capped at [`MAX_PAGE_SIZE`] and never zero
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }

    /// List the criteria that are set, in display order.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut filters = Vec::new();

        if let Some(check_in) = self.check_in {
            filters.push(ActiveFilter::new("check_in", "Check-in", check_in.to_string()));
        }
        if let Some(check_out) = self.check_out {
            filters.push(ActiveFilter::new("check_out", "Check-out", check_out.to_string()));
        }
        if let Some(guests) = self.guests {
            filters.push(ActiveFilter::new("guests", "Guests", guests.to_string()));
        }
        if let Some(region) = self.region() {
            filters.push(ActiveFilter::new("region", "Region", region));
        }
        for tag in &self.tags {
            filters.push(ActiveFilter::new("tags", "Tag", tag.clone()));
        }

        filters
    }
}
