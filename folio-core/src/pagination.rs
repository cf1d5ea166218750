/// Default number of items shown per page in a carousel
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Which way the visible window last moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

impl Direction {
    /// Signed unit used to pick the side a window slides in from
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
            Direction::None => 0.0,
        }
    }
}

/// Pagination state that does not own the items it pages over.
///
/// Pages are 1-based. The item count is passed to every query so the
/// collection can live elsewhere (e.g. inside the fetched portfolio).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
    direction: Direction,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            direction: Direction::None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn page_count(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_items: usize) -> bool {
        self.current_page < self.page_count(total_items)
    }

    /// Arrows and dots are only worth drawing when there is somewhere to go
    pub fn show_controls(&self, total_items: usize) -> bool {
        self.page_count(total_items) > 1
    }

    /// Navigate to `page`. Returns `false` (and leaves the state untouched)
    /// when the page is the current one or outside `1..=page_count`.
    pub fn go_to(&mut self, page: usize, total_items: usize) -> bool {
        if page == self.current_page || page < 1 || page > self.page_count(total_items) {
            return false;
        }

        self.direction = if page > self.current_page {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_page = page;
        true
    }

    pub fn next(&mut self, total_items: usize) -> bool {
        self.go_to(self.current_page + 1, total_items)
    }

    pub fn previous(&mut self, total_items: usize) -> bool {
        // page 0 is rejected by go_to, saturating keeps page 1 from underflowing
        self.go_to(self.current_page.saturating_sub(1), total_items)
    }

    /// Half-open index range of the current window
    pub fn window_range(&self, total_items: usize) -> (usize, usize) {
        let start = ((self.current_page - 1) * self.page_size).min(total_items);
        let end = (start + self.page_size).min(total_items);
        (start, end)
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.page_window(self.current_page, items)
    }

    /// Window of an arbitrary page, e.g. the one sliding out. Empty when
    /// `page` is out of range.
    pub fn page_window<'a, T>(&self, page: usize, items: &'a [T]) -> &'a [T] {
        if page < 1 {
            return &[];
        }
        let start = ((page - 1).saturating_mul(self.page_size)).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }

    /// Keep the current page valid after the collection was replaced.
    /// Direction is left alone since no navigation happened.
    pub fn clamp_to(&mut self, total_items: usize) {
        let last_page = self.page_count(total_items).max(1);
        if self.current_page > last_page {
            self.current_page = last_page;
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Paginator that owns its collection, exposing the argument-free contract
#[derive(Debug, Clone)]
pub struct WindowedPaginator<T> {
    items: Vec<T>,
    state: PaginationState,
}

impl<T> WindowedPaginator<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            state: PaginationState::new(page_size),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count(self.items.len())
    }

    pub fn current_window(&self) -> &[T] {
        self.state.window(&self.items)
    }

    pub fn go_to(&mut self, page: usize) -> bool {
        self.state.go_to(page, self.items.len())
    }

    pub fn next(&mut self) -> bool {
        self.state.next(self.items.len())
    }

    pub fn previous(&mut self) -> bool {
        self.state.previous(self.items.len())
    }

    pub fn has_previous(&self) -> bool {
        self.state.has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.state.has_next(self.items.len())
    }

    pub fn show_controls(&self) -> bool {
        self.state.show_controls(self.items.len())
    }

    /// Replace the collection wholesale, clamping the current page into range
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.state.clamp_to(self.items.len());
    }

    /// Every window in page order, mostly useful for printing
    pub fn pages(&self) -> impl Iterator<Item = &[T]> {
        self.items.chunks(self.state.page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_page_count_is_ceiling() {
        for page_size in 1..=5 {
            for n in 0..=20 {
                let paginator = WindowedPaginator::new(numbers(n), page_size);
                assert_eq!(paginator.page_count(), n.div_ceil(page_size));
            }
        }
        assert_eq!(WindowedPaginator::new(numbers(0), 3).page_count(), 0);
    }

    #[test]
    fn test_window_sizes_on_every_page() {
        for page_size in 1..=4 {
            for n in 1..=13 {
                let mut paginator = WindowedPaginator::new(numbers(n), page_size);
                let pages = paginator.page_count();
                for page in 1..=pages {
                    paginator.go_to(page);
                    let expected = if page < pages {
                        page_size
                    } else {
                        n - (pages - 1) * page_size
                    };
                    assert_eq!(paginator.current_window().len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_seven_items_page_size_three() {
        let mut paginator = WindowedPaginator::new(numbers(7), 3);
        assert_eq!(paginator.page_count(), 3);
        assert_eq!(paginator.current_window(), &[0, 1, 2]);

        assert!(paginator.next());
        assert_eq!(paginator.current_window(), &[3, 4, 5]);

        assert!(paginator.go_to(3));
        assert_eq!(paginator.current_window(), &[6]);
        assert!(!paginator.has_next());
        assert!(paginator.has_previous());

        let pages: Vec<&[usize]> = paginator.pages().collect();
        assert_eq!(pages, vec![&[0, 1, 2][..], &[3, 4, 5][..], &[6][..]]);
    }

    #[test]
    fn test_out_of_range_navigation_is_noop() {
        let mut paginator = WindowedPaginator::new(numbers(10), 3);
        paginator.go_to(2);
        let before = paginator.state().clone();

        assert!(!paginator.go_to(0));
        assert!(!paginator.go_to(5));
        assert!(!paginator.go_to(usize::MAX));
        assert_eq!(paginator.state(), &before);

        paginator.go_to(4);
        assert!(!paginator.next());
        assert_eq!(paginator.current_page(), 4);
        assert_eq!(paginator.direction(), Direction::Forward);
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let mut paginator = WindowedPaginator::new(numbers(10), 3);
        assert!(!paginator.previous());
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.direction(), Direction::None);
    }

    #[test]
    fn test_direction_tracks_accepted_navigation() {
        let mut paginator = WindowedPaginator::new(numbers(12), 3);
        assert_eq!(paginator.direction(), Direction::None);

        paginator.go_to(3);
        assert_eq!(paginator.direction(), Direction::Forward);

        paginator.go_to(2);
        assert_eq!(paginator.direction(), Direction::Backward);

        assert!(!paginator.go_to(2));
        assert_eq!(paginator.direction(), Direction::Backward);
    }

    #[test]
    fn test_repeated_go_to_same_page() {
        // 4 pages, start on page 2
        let mut paginator = WindowedPaginator::new(numbers(12), 3);
        paginator.go_to(2);

        assert!(paginator.go_to(1));
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.direction(), Direction::Backward);

        assert!(!paginator.go_to(1));
        assert_eq!(paginator.current_page(), 1);
        assert_eq!(paginator.direction(), Direction::Backward);
    }

    #[test]
    fn test_empty_collection() {
        let mut paginator: WindowedPaginator<usize> = WindowedPaginator::new(Vec::new(), 3);
        assert_eq!(paginator.page_count(), 0);
        assert!(paginator.current_window().is_empty());
        assert_eq!(paginator.current_page(), 1);
        assert!(!paginator.show_controls());
        assert!(!paginator.has_next());
        assert!(!paginator.has_previous());
        assert!(!paginator.go_to(1));
        assert!(!paginator.next());
    }

    #[test]
    fn test_single_page_hides_controls() {
        let paginator = WindowedPaginator::new(numbers(3), 3);
        assert_eq!(paginator.page_count(), 1);
        assert!(!paginator.show_controls());
        assert_eq!(paginator.current_window().len(), 3);
    }

    #[test]
    fn test_set_items_clamps_current_page() {
        let mut paginator = WindowedPaginator::new(numbers(12), 3);
        paginator.go_to(4);

        paginator.set_items(numbers(5));
        assert_eq!(paginator.current_page(), 2);
        assert_eq!(paginator.current_window(), &[3, 4]);
        assert_eq!(paginator.direction(), Direction::Forward);

        paginator.set_items(Vec::new());
        assert_eq!(paginator.current_page(), 1);
        assert!(paginator.current_window().is_empty());
    }

    #[test]
    fn test_set_items_keeps_valid_page() {
        let mut paginator = WindowedPaginator::new(numbers(6), 3);
        paginator.go_to(2);
        paginator.set_items(numbers(9));
        assert_eq!(paginator.current_page(), 2);
        assert_eq!(paginator.current_window(), &[3, 4, 5]);
    }

    #[test]
    fn test_zero_page_size_is_coerced() {
        let state = PaginationState::new(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.page_count(4), 4);
    }

    #[test]
    fn test_state_window_over_borrowed_items() {
        let items = ["a", "b", "c", "d", "e"];
        let mut state = PaginationState::new(2);
        assert_eq!(state.window(&items), &["a", "b"]);
        assert!(state.go_to(3, items.len()));
        assert_eq!(state.window(&items), &["e"]);
        assert_eq!(state.window_range(items.len()), (4, 5));
    }

    #[test]
    fn test_stale_page_yields_empty_window_without_clamp() {
        let mut state = PaginationState::new(3);
        state.go_to(3, 9);
        assert!(state.window(&[1, 2]).is_empty());
        state.clamp_to(2);
        assert_eq!(state.window(&[1, 2]), &[1, 2]);
    }

    #[test]
    fn test_page_window_for_outgoing_page() {
        let items: Vec<usize> = numbers(7);
        let state = PaginationState::new(3);
        assert_eq!(state.page_window(3, &items), &[6]);
        assert!(state.page_window(0, &items).is_empty());
        assert!(state.page_window(4, &items).is_empty());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Forward.sign(), 1.0);
        assert_eq!(Direction::Backward.sign(), -1.0);
        assert_eq!(Direction::None.sign(), 0.0);
    }
}
