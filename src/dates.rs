//! Randomized calendar-date stamps for date-bearing filename slots.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::constants::dates::{
    WINDOW_SPAN_DAYS, WINDOW_START_DAY, WINDOW_START_MONTH, WINDOW_START_YEAR,
};

/// Textual layouts a date stamp may be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `2021-03-14`
    IsoDashed,
    /// `20210314`
    Compact,
    /// `14-03-2021`
    DayFirst,
    /// `03-14-2021`
    MonthFirst,
    /// `2021_03_14`
    IsoUnderscored,
}

impl DateLayout {
    /// All layouts, in selection order.
    pub const ALL: [DateLayout; 5] = [
        DateLayout::IsoDashed,
        DateLayout::Compact,
        DateLayout::DayFirst,
        DateLayout::MonthFirst,
        DateLayout::IsoUnderscored,
    ];

    /// strftime spec used to render (or parse back) this layout.
    pub fn strftime(self) -> &'static str {
        match self {
            DateLayout::IsoDashed => "%Y-%m-%d",
            DateLayout::Compact => "%Y%m%d",
            DateLayout::DayFirst => "%d-%m-%Y",
            DateLayout::MonthFirst => "%m-%d-%Y",
            DateLayout::IsoUnderscored => "%Y_%m_%d",
        }
    }
}

/// First day of the sampling window.
pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(WINDOW_START_YEAR, WINDOW_START_MONTH, WINDOW_START_DAY)
        .expect("window start is a valid calendar date")
}

/// Uniform random date inside the sampling window, rendered in a uniform
/// random [`DateLayout`].
///
/// The day offset is bounded by the window span, so every produced stamp is a
/// valid calendar date without a separate validation step.
pub fn random_date_stamp<R: Rng + ?Sized>(rng: &mut R) -> String {
    let offset = rng.random_range(0..=WINDOW_SPAN_DAYS);
    let date = window_start() + Duration::days(offset);
    let layout = *DateLayout::ALL
        .choose(rng)
        .expect("layout table is non-empty");
    date.format(layout.strftime()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn parse_any_layout(stamp: &str) -> Option<NaiveDate> {
        DateLayout::ALL
            .iter()
            .find_map(|layout| NaiveDate::parse_from_str(stamp, layout.strftime()).ok())
    }

    #[test]
    fn layouts_render_distinct_specs() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
        let rendered: Vec<String> = DateLayout::ALL
            .iter()
            .map(|layout| date.format(layout.strftime()).to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["2021-03-14", "20210314", "14-03-2021", "03-14-2021", "2021_03_14"]
        );
    }

    #[test]
    fn seeded_stamp_matches_a_layout_inside_the_window() {
        let mut rng = StdRng::from_seed([0_u8; 32]);
        let end = window_start() + Duration::days(WINDOW_SPAN_DAYS);
        for _ in 0..500 {
            let stamp = random_date_stamp(&mut rng);
            let date = parse_any_layout(&stamp)
                .unwrap_or_else(|| panic!("stamp '{stamp}' matches no layout"));
            assert!(date >= window_start() && date <= end, "stamp '{stamp}' out of window");
        }
    }

    #[test]
    fn same_seed_yields_same_stamps() {
        let mut a = StdRng::from_seed([3_u8; 32]);
        let mut b = StdRng::from_seed([3_u8; 32]);
        for _ in 0..64 {
            assert_eq!(random_date_stamp(&mut a), random_date_stamp(&mut b));
        }
    }
}
