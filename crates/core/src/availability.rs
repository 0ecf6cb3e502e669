//! Availability paging over a [`TimeslotMatrix`].
//!
//! Three modes share one design: scan a bounded occupancy range in matrix
//! order (day ascending, then slot ascending), filter candidates by an
//! availability predicate, slice the filtered sequence into fixed-size pages,
//! and emit forward/backward navigation markers only when more data exists in
//! that direction.

use chrono::DateTime;
use chrono::Utc;

use crate::errors::DomainError;
use crate::timeslot::{SlotCoord, TimeslotMatrix, MINUTES_PER_DAY};

/// Zero-based index of a fixed-size window over the candidate sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(u32);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(0);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The page before this one, absent on the first page.
    pub fn previous(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// A date option: the day still has at least one free minute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateCandidate {
    pub coord: SlotCoord,
    pub start: DateTime<Utc>,
}

/// A start-time option: the entire requested length is free from here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeCandidate {
    pub coord: SlotCoord,
    pub start: DateTime<Utc>,
}

/// A duration option: `count` contiguous slot lengths are free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationCandidate {
    pub count: u32,
    pub minutes: u32,
}

/// One page of candidates plus the navigation markers that apply to it.
///
/// `previous` is present iff the page index is past the first page; `next` is
/// present iff at least one further qualifying candidate exists beyond this
/// page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityPage<T> {
    pub candidates: Vec<T>,
    pub previous: Option<PageIndex>,
    pub next: Option<PageIndex>,
}

impl<T> AvailabilityPage<T> {
    fn new(page: PageIndex) -> Self {
        Self { candidates: Vec::new(), previous: page.previous(), next: None }
    }
}

/// Where a qualifying candidate's 1-based rank falls relative to the
/// requested page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    /// Rank is below the window; keep scanning.
    Before,
    /// Rank is inside the window; include the candidate.
    Within,
    /// Rank is past the window; the page overflowed and scanning can stop.
    Beyond,
}

/// Running page-window state. Page `k` holds candidates with 1-based rank in
/// `(k * page_size, (k + 1) * page_size]`.
#[derive(Debug)]
struct PageWindow {
    lower: usize,
    upper: usize,
    seen: usize,
}

impl PageWindow {
    fn new(page: PageIndex, page_size: usize) -> Self {
        let lower = page.value() as usize * page_size;
        Self { lower, upper: lower.saturating_add(page_size), seen: 0 }
    }

    /// Rank the next qualifying candidate.
    fn admit(&mut self) -> Placement {
        self.seen += 1;
        if self.seen <= self.lower {
            Placement::Before
        } else if self.seen <= self.upper {
            Placement::Within
        } else {
            Placement::Beyond
        }
    }
}

/// Page through the days that still have at least one free minute.
///
/// At most one candidate per day offset, in day order. The scan is bounded by
/// the matrix's day dimension; the "next" marker is emitted only when a
/// further qualifying day exists beyond the requested page.
pub fn page_dates(
    matrix: &TimeslotMatrix,
    page: PageIndex,
    page_size: usize,
) -> AvailabilityPage<DateCandidate> {
    let mut window = PageWindow::new(page, page_size);
    let mut out = AvailabilityPage::new(page);

    for day in 0..matrix.days() {
        let coord = SlotCoord::day_start(day);
        if !matrix.is_any_greater(coord, MINUTES_PER_DAY, 0) {
            continue;
        }

        match window.admit() {
            Placement::Before => {}
            Placement::Within => {
                out.candidates.push(DateCandidate { coord, start: matrix.moment(coord).start });
            }
            Placement::Beyond => {
                out.next = Some(page.next());
                break;
            }
        }
    }

    tracing::debug!(
        page = page.value(),
        dates = out.candidates.len(),
        has_next = out.next.is_some(),
        "paged available dates"
    );
    out
}

/// Page through the start times of one day that can host `length_minutes` of
/// contiguous free capacity.
///
/// A slot qualifies only when the entire span `[slot, slot + length)` is
/// free, not just the start instant. Scanning stops as soon as a qualifying
/// slot overflows the page.
pub fn page_times(
    matrix: &TimeslotMatrix,
    day: usize,
    length_minutes: u32,
    page: PageIndex,
    page_size: usize,
) -> AvailabilityPage<TimeCandidate> {
    let mut window = PageWindow::new(page, page_size);
    let mut out = AvailabilityPage::new(page);

    for slot in 0..matrix.slots_per_day() {
        let coord = SlotCoord::new(day, slot);
        if !matrix.is_all_greater(coord, length_minutes, 0) {
            continue;
        }

        match window.admit() {
            Placement::Before => {}
            Placement::Within => {
                out.candidates.push(TimeCandidate { coord, start: matrix.moment(coord).start });
            }
            Placement::Beyond => {
                out.next = Some(page.next());
                break;
            }
        }
    }

    tracing::debug!(
        page = page.value(),
        day,
        length_minutes,
        times = out.candidates.len(),
        has_next = out.next.is_some(),
        "paged available times"
    );
    out
}

/// Page through the durations offerable from `start`, quantized to
/// `length_minutes`.
///
/// Multiples `1, 2, 3, …` of the slot length qualify while the whole run
/// stays free; the longest contiguous free run bounds the scan, so the
/// qualifying multiples are always a prefix of the naturals. Fails with
/// [`DomainError::InvalidDuration`] before the scan when `length_minutes` is
/// zero, since the enumeration would otherwise never terminate.
pub fn page_durations(
    matrix: &TimeslotMatrix,
    start: SlotCoord,
    length_minutes: u32,
    page: PageIndex,
    page_size: usize,
) -> Result<AvailabilityPage<DurationCandidate>, DomainError> {
    if length_minutes == 0 {
        return Err(DomainError::InvalidDuration);
    }

    let mut window = PageWindow::new(page, page_size);
    let mut out = AvailabilityPage::new(page);

    let mut count: u32 = 1;
    while matrix.is_all_greater(start, length_minutes * count, 0) {
        match window.admit() {
            Placement::Before => {}
            Placement::Within => {
                out.candidates.push(DurationCandidate { count, minutes: length_minutes * count });
            }
            Placement::Beyond => {
                out.next = Some(page.next());
                break;
            }
        }
        count += 1;
    }

    tracing::debug!(
        page = page.value(),
        length_minutes,
        durations = out.candidates.len(),
        has_next = out.next.is_some(),
        "paged offerable durations"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{page_dates, page_durations, page_times, PageIndex};
    use crate::errors::DomainError;
    use crate::timeslot::{SlotCoord, TimeslotMatrix};

    fn matrix(grid: Vec<Vec<i32>>, slot_minutes: u32) -> TimeslotMatrix {
        let origin = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).single().expect("valid origin");
        TimeslotMatrix::new(origin, slot_minutes, grid).expect("uniform grid")
    }

    /// Seven days, 360-minute slots: days 0, 2, 3, 5, 6 have free capacity.
    fn week_matrix() -> TimeslotMatrix {
        matrix(
            vec![
                vec![1, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 2, 0, 0],
                vec![1, 1, 1, 1],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 3],
                vec![2, 0, 1, 0],
            ],
            360,
        )
    }

    #[test]
    fn date_paging_skips_fully_booked_days() {
        let page = page_dates(&week_matrix(), PageIndex::FIRST, 10);
        let days: Vec<usize> = page.candidates.iter().map(|c| c.coord.day).collect();
        assert_eq!(days, vec![0, 2, 3, 5, 6]);
        assert_eq!(page.previous, None);
        assert_eq!(page.next, None);
    }

    #[test]
    fn date_paging_windows_and_bounds_the_next_marker() {
        let m = week_matrix();

        let first = page_dates(&m, PageIndex::FIRST, 2);
        assert_eq!(first.candidates.iter().map(|c| c.coord.day).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(first.previous, None);
        assert_eq!(first.next, Some(PageIndex::new(1)));

        let second = page_dates(&m, PageIndex::new(1), 2);
        assert_eq!(second.candidates.iter().map(|c| c.coord.day).collect::<Vec<_>>(), vec![3, 5]);
        assert_eq!(second.previous, Some(PageIndex::FIRST));
        assert_eq!(second.next, Some(PageIndex::new(2)));

        let last = page_dates(&m, PageIndex::new(2), 2);
        assert_eq!(last.candidates.iter().map(|c| c.coord.day).collect::<Vec<_>>(), vec![6]);
        assert_eq!(last.previous, Some(PageIndex::new(1)));
        assert_eq!(last.next, None, "no next marker past the last qualifying day");
    }

    #[test]
    fn date_paging_all_zero_matrix_yields_no_candidates() {
        let page = page_dates(&matrix(vec![vec![0; 4]; 3], 360), PageIndex::FIRST, 5);
        assert!(page.candidates.is_empty());
        assert_eq!(page.next, None);
    }

    #[test]
    fn date_paging_all_positive_matrix_yields_every_day() {
        let page = page_dates(&matrix(vec![vec![1; 4]; 3], 360), PageIndex::FIRST, 5);
        assert_eq!(page.candidates.len(), 3);
    }

    #[test]
    fn date_paging_empty_matrix_is_not_an_error() {
        let page = page_dates(&matrix(vec![], 360), PageIndex::FIRST, 5);
        assert!(page.candidates.is_empty());
        assert_eq!(page.previous, None);
        assert_eq!(page.next, None);
    }

    #[test]
    fn date_candidates_carry_day_start_instants() {
        let m = week_matrix();
        let page = page_dates(&m, PageIndex::FIRST, 10);
        assert_eq!(page.candidates[1].start, m.origin() + chrono::Duration::minutes(2 * 1440));
    }

    #[test]
    fn time_paging_requires_the_full_length_free() {
        // One zero anywhere in the span disqualifies the start slot.
        let m = matrix(vec![vec![1, 1, 0, 1]], 30);
        let page = page_times(&m, 0, 60, PageIndex::FIRST, 10);
        let slots: Vec<usize> = page.candidates.iter().map(|c| c.coord.slot).collect();
        assert_eq!(slots, vec![0], "gap disqualifies starts 1 and 2, the edge disqualifies 3");
    }

    #[test]
    fn time_paging_windows_with_early_termination() {
        let m = matrix(vec![vec![1, 1, 1, 1]], 360);

        let first = page_times(&m, 0, 360, PageIndex::FIRST, 2);
        assert_eq!(first.candidates.iter().map(|c| c.coord.slot).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(first.previous, None);
        assert_eq!(first.next, Some(PageIndex::new(1)));

        let second = page_times(&m, 0, 360, PageIndex::new(1), 2);
        assert_eq!(second.candidates.iter().map(|c| c.coord.slot).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(second.previous, Some(PageIndex::FIRST));
        assert_eq!(second.next, None);
    }

    #[test]
    fn time_paging_empty_page_is_valid() {
        let m = matrix(vec![vec![0, 0, 0, 0]], 360);
        let page = page_times(&m, 0, 360, PageIndex::FIRST, 10);
        assert!(page.candidates.is_empty());
        assert_eq!(page.previous, None);
        assert_eq!(page.next, None);
    }

    #[test]
    fn duration_paging_enumerates_the_free_run_prefix() {
        // 6 contiguous free slots of 30 minutes from slot 0.
        let m = matrix(vec![vec![1, 1, 1, 1, 1, 1, 0, 1]], 30);
        let page = page_durations(&m, SlotCoord::day_start(0), 30, PageIndex::FIRST, 10)
            .expect("valid length");

        let counts: Vec<u32> = page.candidates.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(page.candidates[5].minutes, 180);
        assert_eq!(page.next, None);
    }

    #[test]
    fn duration_paging_windows_with_early_termination() {
        let m = matrix(vec![vec![1; 10]], 30);

        let first = page_durations(&m, SlotCoord::day_start(0), 30, PageIndex::FIRST, 4)
            .expect("valid length");
        assert_eq!(first.candidates.iter().map(|c| c.count).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(first.next, Some(PageIndex::new(1)));

        let second = page_durations(&m, SlotCoord::day_start(0), 30, PageIndex::new(1), 4)
            .expect("valid length");
        assert_eq!(
            second.candidates.iter().map(|c| c.count).collect::<Vec<_>>(),
            vec![5, 6, 7, 8]
        );
        assert_eq!(second.previous, Some(PageIndex::FIRST));
        assert_eq!(second.next, Some(PageIndex::new(2)));

        let last = page_durations(&m, SlotCoord::day_start(0), 30, PageIndex::new(2), 4)
            .expect("valid length");
        assert_eq!(last.candidates.iter().map(|c| c.count).collect::<Vec<_>>(), vec![9, 10]);
        assert_eq!(last.next, None);
    }

    #[test]
    fn duration_paging_rejects_zero_length_before_scanning() {
        let m = matrix(vec![vec![1; 4]], 30);
        let error = page_durations(&m, SlotCoord::day_start(0), 0, PageIndex::FIRST, 4)
            .expect_err("zero length must fail");
        assert_eq!(error, DomainError::InvalidDuration);
    }

    #[test]
    fn duration_paging_from_a_booked_slot_yields_nothing() {
        let m = matrix(vec![vec![1, 0, 1]], 30);
        let page = page_durations(&m, SlotCoord::new(0, 1), 30, PageIndex::FIRST, 4)
            .expect("valid length");
        assert!(page.candidates.is_empty());
        assert_eq!(page.next, None);
    }

    /// Concatenating all pages reproduces the full ordered candidate list
    /// with no duplicates and no gaps, for every mode.
    #[test]
    fn concatenated_pages_reproduce_the_full_sequence() {
        let m = matrix(
            (0..9).map(|day| (0..6).map(|slot| ((day + slot) % 3 == 0) as i32).collect()).collect(),
            240,
        );

        for page_size in [1, 2, 3, 5, 50] {
            let full: Vec<usize> =
                page_dates(&m, PageIndex::FIRST, usize::MAX).candidates.iter().map(|c| c.coord.day).collect();

            let mut paged = Vec::new();
            let mut page = PageIndex::FIRST;
            loop {
                let window = page_dates(&m, page, page_size);
                paged.extend(window.candidates.iter().map(|c| c.coord.day));
                match window.next {
                    Some(next) => page = next,
                    None => break,
                }
            }
            assert_eq!(paged, full, "date pages must concatenate losslessly (size {page_size})");
        }

        for page_size in [1, 2, 3, 50] {
            let full: Vec<usize> = page_times(&m, 0, 240, PageIndex::FIRST, usize::MAX)
                .candidates
                .iter()
                .map(|c| c.coord.slot)
                .collect();

            let mut paged = Vec::new();
            let mut page = PageIndex::FIRST;
            loop {
                let window = page_times(&m, 0, 240, page, page_size);
                paged.extend(window.candidates.iter().map(|c| c.coord.slot));
                match window.next {
                    Some(next) => page = next,
                    None => break,
                }
            }
            assert_eq!(paged, full, "time pages must concatenate losslessly (size {page_size})");
        }
    }
}
