//! Fixed-size pagination over an already-ordered collection.

/// One page of an ordered collection.
#[derive(Debug, Clone)]
pub struct Page<T> {
  pub items:       Vec<T>,
  /// 1-based page number actually served (requested number clamped to >= 1).
  pub number:      usize,
  pub per_page:    usize,
  pub total_items: usize,
  /// At least 1, even for an empty collection.
  pub total_pages: usize,
}

impl<T> Page<T> {
  /// Slice `items` down to the requested page.
  ///
  /// A non-positive `number` is clamped to 1. A page past the end yields an
  /// empty slice rather than clamping to the last page.
  pub fn slice(items: Vec<T>, number: i64, per_page: usize) -> Self {
    let number = if number < 1 { 1 } else { number as usize };
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);

    let start = (number - 1).saturating_mul(per_page);
    let items: Vec<T> = items
      .into_iter()
      .skip(start)
      .take(per_page)
      .collect();

    Self { items, number, per_page, total_items, total_pages }
  }

  pub fn has_prev(&self) -> bool {
    self.number > 1
  }

  pub fn has_next(&self) -> bool {
    self.number < self.total_pages
  }
}
