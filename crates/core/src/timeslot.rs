use chrono::{DateTime, Duration, Utc};

use crate::errors::DomainError;

/// Span covering one whole day, in minutes.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Position in the occupancy grid: day offset from the origin, then sub-slot
/// within that day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotCoord {
    pub day: usize,
    pub slot: usize,
}

impl SlotCoord {
    pub fn new(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }

    /// Start of the given day.
    pub fn day_start(day: usize) -> Self {
        Self { day, slot: 0 }
    }
}

/// Concrete start/finish instants of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotMoment {
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
}

/// Day × sub-slot grid of remaining capacity.
///
/// Each cell holds a signed capacity remainder: `<= 0` means the slot is not
/// bookable, `> 0` means it still has room. Queries take spans in minutes and
/// treat the grid as a continuous timeline starting at `origin`; a span that
/// runs past the end of the grid cannot be fully free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeslotMatrix {
    origin: DateTime<Utc>,
    slot_minutes: u32,
    grid: Vec<Vec<i32>>,
}

impl TimeslotMatrix {
    pub fn new(
        origin: DateTime<Utc>,
        slot_minutes: u32,
        grid: Vec<Vec<i32>>,
    ) -> Result<Self, DomainError> {
        if slot_minutes == 0 {
            return Err(DomainError::InvalidSlotLength);
        }

        if let Some(first) = grid.first() {
            let expected = first.len();
            for (day, row) in grid.iter().enumerate() {
                if row.len() != expected {
                    return Err(DomainError::RaggedGrid { day, expected, actual: row.len() });
                }
            }
        }

        Ok(Self { origin, slot_minutes, grid })
    }

    /// The matrix's reference instant: start of day 0, slot 0.
    pub fn origin(&self) -> DateTime<Utc> {
        self.origin
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    pub fn days(&self) -> usize {
        self.grid.len()
    }

    pub fn slots_per_day(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.days() == 0 || self.slots_per_day() == 0
    }

    /// True if any sub-slot in the span starting at `coord` has capacity
    /// above `threshold`. A zero-length span holds no sub-slot and is never
    /// satisfied.
    pub fn is_any_greater(&self, coord: SlotCoord, span_minutes: u32, threshold: i32) -> bool {
        self.span_cells(coord, span_minutes)
            .is_some_and(|(cells, _)| cells.iter().any(|capacity| *capacity > threshold))
    }

    /// True only if the entire span starting at `coord` exceeds `threshold`.
    /// A span that extends past the grid edge fails; so does a zero-length
    /// span.
    pub fn is_all_greater(&self, coord: SlotCoord, span_minutes: u32, threshold: i32) -> bool {
        self.span_cells(coord, span_minutes).is_some_and(|(cells, truncated)| {
            !truncated && cells.iter().all(|capacity| *capacity > threshold)
        })
    }

    /// Materialize the capacity sequence for a span, truncated at the grid
    /// edge.
    pub fn range(&self, coord: SlotCoord, span_minutes: u32) -> Vec<i32> {
        self.span_cells(coord, span_minutes).map(|(cells, _)| cells).unwrap_or_default()
    }

    /// Map a grid coordinate to the concrete start/finish instants of that
    /// cell. Pure offset arithmetic from the origin.
    pub fn moment(&self, coord: SlotCoord) -> SlotMoment {
        let offset = self.linear_index(coord) as i64 * i64::from(self.slot_minutes);
        let start = self.origin + Duration::minutes(offset);
        SlotMoment { start, finish: start + Duration::minutes(i64::from(self.slot_minutes)) }
    }

    fn linear_index(&self, coord: SlotCoord) -> usize {
        coord.day * self.slots_per_day() + coord.slot
    }

    fn span_slots(&self, span_minutes: u32) -> usize {
        span_minutes.div_ceil(self.slot_minutes) as usize
    }

    /// Cells covered by a span, flattened across day boundaries, plus whether
    /// the span ran past the grid edge. `None` for zero-length spans.
    fn span_cells(&self, coord: SlotCoord, span_minutes: u32) -> Option<(Vec<i32>, bool)> {
        let wanted = self.span_slots(span_minutes);
        if wanted == 0 {
            return None;
        }

        let total = self.days() * self.slots_per_day();
        let start = self.linear_index(coord);
        let end = start.saturating_add(wanted);
        let truncated = end > total;

        let slots_per_day = self.slots_per_day();
        let cells = (start..end.min(total))
            .map(|index| self.grid[index / slots_per_day][index % slots_per_day])
            .collect();

        Some((cells, truncated))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{SlotCoord, TimeslotMatrix};
    use crate::errors::DomainError;

    fn matrix(grid: Vec<Vec<i32>>, slot_minutes: u32) -> TimeslotMatrix {
        let origin = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid origin");
        TimeslotMatrix::new(origin, slot_minutes, grid).expect("uniform grid")
    }

    #[test]
    fn rejects_zero_slot_length() {
        let origin = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid origin");
        let error = TimeslotMatrix::new(origin, 0, vec![vec![1]]).expect_err("zero slot length");
        assert_eq!(error, DomainError::InvalidSlotLength);
    }

    #[test]
    fn rejects_ragged_grid() {
        let origin = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid origin");
        let error = TimeslotMatrix::new(origin, 30, vec![vec![1, 1], vec![1]])
            .expect_err("ragged grid");
        assert_eq!(error, DomainError::RaggedGrid { day: 1, expected: 2, actual: 1 });
    }

    #[test]
    fn any_greater_finds_a_single_free_slot() {
        let m = matrix(vec![vec![0, 0, 2, 0]], 30);
        assert!(m.is_any_greater(SlotCoord::day_start(0), 120, 0));
        assert!(!m.is_any_greater(SlotCoord::day_start(0), 60, 0));
        assert!(!m.is_any_greater(SlotCoord::day_start(0), 120, 2));
    }

    #[test]
    fn all_greater_requires_the_entire_span() {
        let m = matrix(vec![vec![1, 1, 0, 1]], 30);
        assert!(m.is_all_greater(SlotCoord::day_start(0), 60, 0));
        assert!(!m.is_all_greater(SlotCoord::day_start(0), 90, 0));
        assert!(!m.is_all_greater(SlotCoord::new(0, 1), 60, 0));
    }

    #[test]
    fn all_greater_fails_past_the_grid_edge() {
        let m = matrix(vec![vec![1, 1]], 30);
        assert!(m.is_all_greater(SlotCoord::day_start(0), 60, 0));
        assert!(!m.is_all_greater(SlotCoord::day_start(0), 90, 0));
        assert!(!m.is_all_greater(SlotCoord::new(0, 1), 60, 0));
    }

    #[test]
    fn spans_cross_day_boundaries() {
        let m = matrix(vec![vec![1, 1], vec![1, 0]], 30);
        assert!(m.is_all_greater(SlotCoord::new(0, 1), 60, 0));
        assert!(!m.is_all_greater(SlotCoord::new(0, 1), 90, 0));
    }

    #[test]
    fn zero_span_satisfies_neither_query() {
        let m = matrix(vec![vec![5, 5]], 30);
        assert!(!m.is_any_greater(SlotCoord::day_start(0), 0, 0));
        assert!(!m.is_all_greater(SlotCoord::day_start(0), 0, 0));
    }

    #[test]
    fn partial_slot_spans_round_up() {
        let m = matrix(vec![vec![1, 0]], 30);
        // 31 minutes covers two 30-minute slots.
        assert!(!m.is_all_greater(SlotCoord::day_start(0), 31, 0));
        assert!(m.is_all_greater(SlotCoord::day_start(0), 30, 0));
    }

    #[test]
    fn range_truncates_at_the_edge() {
        let m = matrix(vec![vec![1, 2, 3]], 30);
        assert_eq!(m.range(SlotCoord::new(0, 1), 120), vec![2, 3]);
        assert_eq!(m.range(SlotCoord::day_start(0), 0), Vec::<i32>::new());
    }

    #[test]
    fn moment_is_offset_arithmetic_from_origin() {
        let m = matrix(vec![vec![1, 1], vec![1, 1]], 30);
        let moment = m.moment(SlotCoord::new(1, 1));
        assert_eq!(moment.start, m.origin() + chrono::Duration::minutes(90));
        assert_eq!(moment.finish, m.origin() + chrono::Duration::minutes(120));
    }

    #[test]
    fn empty_matrix_reports_empty() {
        let m = matrix(vec![], 30);
        assert!(m.is_empty());
        assert!(!m.is_any_greater(SlotCoord::day_start(0), 1440, 0));
    }
}
