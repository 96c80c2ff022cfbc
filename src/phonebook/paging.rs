//! Page arithmetic and the interactive pager.
//!
//! Pages are 1-based. [`page_bounds`] clips to the collection, so an
//! out-of-range page gives an empty range rather than an error; rejecting
//! such pages is the caller's job (see [`validate_page`]).

use crate::error::{PhonebookError, Result};
use std::ops::Range;
use std::str::FromStr;

/// `ceil(total / per_page)`. Zero when `per_page` is zero.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Index range `[(page-1)*per_page, page*per_page)` clipped to `0..total`.
pub fn page_bounds(page: usize, per_page: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);
    start..end
}

/// Rejects page numbers outside `1..=pages`.
pub fn validate_page(page: usize, pages: usize) -> Result<()> {
    if page == 0 || page > pages {
        return Err(PhonebookError::InvalidInput(format!(
            "Page {} does not exist (1-{})",
            page, pages
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

/// A command typed at the pager prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    GoTo,
    Back,
}

impl FromStr for Navigation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Navigation::Next),
            "2" => Ok(Navigation::Previous),
            "3" => Ok(Navigation::GoTo),
            "0" => Ok(Navigation::Back),
            other => Err(format!("Invalid pager command: {}", other)),
        }
    }
}

/// Current position while paging through a fixed number of pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    pages: usize,
}

impl Pager {
    pub fn new(pages: usize) -> Self {
        Self { page: 1, pages }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Moves forward. Returns false (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Moves back. Returns false (and stays put) on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn go_to(&mut self, page: usize) -> Result<()> {
        validate_page(page, self.pages)?;
        self.page = page;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pages() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(11, 5), 3);
        assert_eq!(page_count(3, 0), 0);
    }

    #[test]
    fn bounds_clip_to_total() {
        assert_eq!(page_bounds(1, 5, 12), 0..5);
        assert_eq!(page_bounds(3, 5, 12), 10..12);
        assert_eq!(page_bounds(4, 5, 12), 12..12);
        assert_eq!(page_bounds(1, 5, 0), 0..0);
        assert_eq!(page_bounds(usize::MAX, usize::MAX, 3), 3..3);
    }

    #[test]
    fn page_zero_is_treated_as_first_page_by_bounds_but_rejected_by_validation() {
        assert_eq!(page_bounds(0, 5, 12), 0..5);
        assert!(validate_page(0, 3).is_err());
        assert!(validate_page(4, 3).is_err());
        assert!(validate_page(3, 3).is_ok());
    }

    #[test]
    fn parses_navigation() {
        assert_eq!("1".parse::<Navigation>(), Ok(Navigation::Next));
        assert_eq!(" 2 ".parse::<Navigation>(), Ok(Navigation::Previous));
        assert_eq!("3".parse::<Navigation>(), Ok(Navigation::GoTo));
        assert_eq!("0".parse::<Navigation>(), Ok(Navigation::Back));
        assert!("9".parse::<Navigation>().is_err());
        assert!("".parse::<Navigation>().is_err());
    }

    #[test]
    fn pager_stays_within_range() {
        let mut pager = Pager::new(3);
        assert!(!pager.has_previous());
        assert!(!pager.previous());
        assert!(pager.next());
        assert!(pager.next());
        assert!(!pager.next());
        assert_eq!(pager.page(), 3);
        assert!(pager.previous());
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn pager_go_to_rejects_missing_pages() {
        let mut pager = Pager::new(2);
        assert!(pager.go_to(3).is_err());
        assert!(pager.go_to(0).is_err());
        assert_eq!(pager.page(), 1);
        pager.go_to(2).unwrap();
        assert_eq!(pager.page(), 2);
    }
}
