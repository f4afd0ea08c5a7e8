//! Pagination shared by the service and API layers.

use serde::Serialize;

/// Pagination parameters as received from the API layer.
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 0-based page index
    pub page: u32,
    /// items per page
    pub size: u32,
}

impl Pagination {
    /// Clamp to sane bounds and convert to `(offset, size)`.
    pub fn normalize(self) -> (usize, usize) {
        let size = self.size.clamp(1, 100) as usize;
        (self.page as usize * size, size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// A bounded slice of a result set plus its total match count.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// matches before slicing
    pub total: usize,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    /// Wrap an already-sliced item list; `size` reports the effective
    /// (clamped) page size.
    pub fn new(items: Vec<T>, total: usize, pagination: Pagination) -> Self {
        let (_, size) = pagination.normalize();
        Self { items, total, page: pagination.page, size: size as u32 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, Pagination};

    #[test]
    fn normalize_clamps_zero_size() {
        let (offset, size) = Pagination { page: 0, size: 0 }.normalize();
        assert_eq!(offset, 0);
        assert_eq!(size, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (offset, size) = Pagination { page: 4, size: 1000 }.normalize();
        assert_eq!(offset, 400);
        assert_eq!(size, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 20);
    }

    #[test]
    fn page_envelope_serializes() {
        let page = Page::new(vec!["a", "b"], 5, Pagination { page: 1, size: 2 });
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"items": ["a", "b"], "total": 5, "page": 1, "size": 2})
        );
    }
}
