use fully_pub::fully_pub;
use log::info;
use rand::Rng;
use strum_macros::EnumIter;

use crate::bar::Bar;

/// Dimensions of the value space that sets and bars are generated in. The
/// canvas scales this onto whatever screen area is available.
pub const PANEL_WIDTH: i32 = 800;
pub const PANEL_HEIGHT: i32 = 800;

/// The scale that the default set values are reduced by.
const DEFAULT_SET_SCALE: i32 = 40;

const DEFAULT_SET_FACTORS: [i32; 16] = [7, 9, 4, -3, -5, 18, -9, 3, 1, -6, 12, -11, -1, -17, 5, 10];

#[derive(EnumIter, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SortAlgorithm {
    Selection,
    Insertion,
}

impl SortAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
        }
    }

    /// Insertion sort treats the first element as already placed, so its
    /// animation starts one frame in.
    pub fn starting_frame(&self) -> usize {
        match self {
            SortAlgorithm::Selection => 0,
            SortAlgorithm::Insertion => 1,
        }
    }
}

#[fully_pub]
pub struct Sorter {
    algorithm: SortAlgorithm,

    values: Vec<i32>, // The values and their bars are permuted in lockstep.
    bars: Vec<Bar>,

    frame: usize, // The index the next step will place.
}

impl Sorter {
    pub fn new(algorithm: SortAlgorithm, values: Vec<i32>) -> Self {
        let bars = build_bars(&values);
        let frame = algorithm.starting_frame();

        Sorter {
            algorithm,
            values,
            bars,
            frame,
        }
    }
}

/// The hand-picked set of heights used before any random set is generated.
pub fn default_set() -> Vec<i32> {
    DEFAULT_SET_FACTORS.iter().map(|k| PANEL_HEIGHT * k / DEFAULT_SET_SCALE).collect()
}

/// Draws `size` heights uniformly from the displayable range, roughly
/// 90% of the panel height centered on the midline.
pub fn random_set(size: usize) -> Vec<i32> {
    let mut rng = rand::rng();
    let span = PANEL_HEIGHT * 90 / 100;
    let offset = PANEL_HEIGHT * 45 / 100;

    let values: Vec<i32> = (0..size).map(|_| rng.random_range(0..span) - offset - 1).collect();
    info!("Generated a random set of {} values.", values.len());

    values
}

/// Builds one bar per value. Bars tile the panel width left to right; the x
/// field stays zero and the canvas accumulates positions from the widths, so
/// swapping two bars moves their color and height but not their slot.
pub fn build_bars(values: &[i32]) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }

    let width = (PANEL_WIDTH / values.len() as i32).max(1);
    values.iter().map(|&value| Bar::new(0, PANEL_HEIGHT / 2, width, value)).collect()
}

/// True once every remaining frame would leave the set unchanged.
pub fn is_done(sorter: &Sorter) -> bool {
    sorter.frame >= sorter.values.len()
}

/// Advances the animation by one frame according to the algorithm.
pub fn advance(sorter: &mut Sorter) {
    if is_done(sorter) {
        return;
    }

    match sorter.algorithm {
        SortAlgorithm::Selection => step_selection(sorter),
        SortAlgorithm::Insertion => step_insertion(sorter),
    }

    sorter.frame += 1;
}

/// One selection sort step: find the minimum of the unsorted tail and swap it
/// into place at the current frame index.
fn step_selection(sorter: &mut Sorter) {
    let i = sorter.frame;
    let mut min = i;

    for j in i + 1..sorter.values.len() {
        if sorter.values[j] < sorter.values[min] {
            min = j;
        }
    }

    sorter.values.swap(i, min);
    sorter.bars.swap(i, min);
}

/// One insertion sort step: shift the value at the current frame index left
/// until its predecessor is no larger.
fn step_insertion(sorter: &mut Sorter) {
    let i = sorter.frame;
    let value = sorter.values[i];
    let bar = sorter.bars[i];
    let mut position = i;

    while position > 0 && value < sorter.values[position - 1] {
        sorter.values[position] = sorter.values[position - 1];
        sorter.bars[position] = sorter.bars[position - 1];
        position -= 1;
    }

    sorter.values[position] = value;
    sorter.bars[position] = bar;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn run_to_completion(sorter: &mut Sorter) -> usize {
        let mut steps = 0;
        while !is_done(sorter) {
            advance(sorter);
            steps += 1;
        }
        steps
    }

    fn assert_bars_track_values(sorter: &Sorter) {
        for (value, bar) in sorter.values.iter().zip(sorter.bars.iter()) {
            assert_eq!(*value, bar.height);
            assert_eq!(bar.color, crate::palette::color_for_height(*value));
        }
    }

    #[test]
    fn both_algorithms_sort_the_default_set() {
        for algorithm in SortAlgorithm::iter() {
            let mut sorter = Sorter::new(algorithm, default_set());
            run_to_completion(&mut sorter);

            let mut expected = default_set();
            expected.sort();
            assert_eq!(sorter.values, expected, "{:?}", algorithm);
        }
    }

    #[test]
    fn bars_follow_their_values_through_every_step() {
        for algorithm in SortAlgorithm::iter() {
            let mut sorter = Sorter::new(algorithm, default_set());
            assert_bars_track_values(&sorter);

            while !is_done(&sorter) {
                advance(&mut sorter);
                assert_bars_track_values(&sorter);
            }
        }
    }

    #[test]
    fn selection_sort_places_one_value_per_frame() {
        let mut sorter = Sorter::new(SortAlgorithm::Selection, vec![3, 1, 2]);

        advance(&mut sorter);
        assert_eq!(sorter.values, vec![1, 3, 2]);

        advance(&mut sorter);
        assert_eq!(sorter.values, vec![1, 2, 3]);
    }

    #[test]
    fn insertion_sort_shifts_the_prefix_in_one_frame() {
        let mut sorter = Sorter::new(SortAlgorithm::Insertion, vec![5, 4, 1]);

        advance(&mut sorter);
        assert_eq!(sorter.values, vec![4, 5, 1]);

        advance(&mut sorter);
        assert_eq!(sorter.values, vec![1, 4, 5]);
    }

    #[test]
    fn stepping_a_sorted_set_changes_nothing() {
        for algorithm in SortAlgorithm::iter() {
            let mut sorter = Sorter::new(algorithm, vec![-2, 0, 1, 5]);
            run_to_completion(&mut sorter);
            assert_eq!(sorter.values, vec![-2, 0, 1, 5]);
        }
    }

    #[test]
    fn degenerate_sets_are_done_immediately() {
        let empty = Sorter::new(SortAlgorithm::Selection, Vec::new());
        assert!(is_done(&empty));

        let single = Sorter::new(SortAlgorithm::Insertion, vec![7]);
        assert!(is_done(&single));
    }

    #[test]
    fn insertion_sort_starts_one_frame_in() {
        assert_eq!(SortAlgorithm::Selection.starting_frame(), 0);
        assert_eq!(SortAlgorithm::Insertion.starting_frame(), 1);
    }

    #[test]
    fn random_set_stays_within_the_displayable_range() {
        let values = random_set(256);
        assert_eq!(values.len(), 256);

        let offset = PANEL_HEIGHT * 45 / 100;
        for value in values {
            assert!(value >= -offset - 1 && value < offset - 1);
        }
    }

    #[test]
    fn bars_tile_the_panel_width() {
        let bars = build_bars(&default_set());
        assert_eq!(bars.len(), 16);
        assert!(bars.iter().all(|b| b.width == PANEL_WIDTH / 16));
    }
}
