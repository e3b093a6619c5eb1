use std::ops::Range;

/// Reviews rendered with the page before any "load more".
pub const STATIC_REVIEWS: usize = 3;
pub const PAGE_SIZE: usize = 3;

/// How many reviews are on screen. Indexes passed around are into the
/// list of extra (non-static) reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewPager {
    loaded: usize,
}

impl Default for ReviewPager {
    fn default() -> Self {
        Self {
            loaded: STATIC_REVIEWS,
        }
    }
}

impl ReviewPager {
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn has_more(&self, total_extra: usize) -> bool {
        self.loaded < total_extra + STATIC_REVIEWS
    }

    /// The extra reviews to append next, and the pager after appending them.
    pub fn next_page(self, total_extra: usize) -> (Range<usize>, ReviewPager) {
        let start = (self.loaded - STATIC_REVIEWS).min(total_extra);
        let end = (start + PAGE_SIZE).min(total_extra);
        let next = ReviewPager {
            loaded: self.loaded + PAGE_SIZE,
        };
        (start..end, next)
    }

    /// The pager after `clicks` presses of "load more", stopping once exhausted.
    pub fn after_clicks(clicks: usize, total_extra: usize) -> ReviewPager {
        let mut pager = ReviewPager::default();
        for _ in 0..clicks {
            if !pager.has_more(total_extra) {
                break;
            }
            pager = pager.next_page(total_extra).1;
        }
        pager
    }

    /// Range of extra reviews visible for this pager.
    pub fn visible_extra(&self, total_extra: usize) -> Range<usize> {
        0..(self.loaded - STATIC_REVIEWS).min(total_extra)
    }
}
