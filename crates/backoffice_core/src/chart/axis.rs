use super::DayPoint;

/// Above this many points only every n-th axis label is drawn.
pub const MAX_VISIBLE_LABELS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AxisLabels {
    pub categories: Vec<String>,
    pub full_dates: Vec<String>,
}

impl AxisLabels {
    pub fn from_days(days: &[DayPoint]) -> Self {
        let dates: Vec<&str> = days.iter().map(|day| day.date.as_str()).collect();
        Self {
            categories: thin_categories(&dates),
            full_dates: days.iter().map(|day| day.full_date.clone()).collect(),
        }
    }
}

/// Blanks out labels so at most about ten remain readable.
///
/// Hidden labels become a single space rather than an empty string so the
/// axis keeps one category per point.
pub fn thin_categories(labels: &[&str]) -> Vec<String> {
    let count = labels.len();
    let interval = count.div_ceil(MAX_VISIBLE_LABELS).max(1);
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            if count > MAX_VISIBLE_LABELS && index % interval > 0 {
                " ".to_string()
            } else {
                (*label).to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_axis_keeps_every_label() {
        let labels = ["1/1", "2/1", "3/1"];
        assert_eq!(thin_categories(&labels), vec!["1/1", "2/1", "3/1"]);
    }

    #[test]
    fn exactly_ten_labels_are_untouched() {
        let labels: Vec<String> = (1..=10).map(|day| day.to_string()).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        assert_eq!(thin_categories(&refs), labels);
    }

    #[test]
    fn long_axis_keeps_every_interval_th_label() {
        let labels: Vec<String> = (0..25).map(|day| format!("d{day}")).collect();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let thinned = thin_categories(&refs);

        assert_eq!(thinned.len(), 25);
        for (index, label) in thinned.iter().enumerate() {
            if index % 3 == 0 {
                assert_eq!(label, &format!("d{index}"));
            } else {
                assert_eq!(label, " ");
            }
        }
    }

    #[test]
    fn empty_axis_is_empty() {
        assert!(thin_categories(&[]).is_empty());
    }
}
