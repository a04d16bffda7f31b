//! Terminal rendering of the tracker display.
//!
//! The view only remembers the latest values the tracker published; commands
//! print it once they are done.

use serde::Serialize;

use caltrack_core::{Meal, TrackerDisplay, Workout};

const BAR_WIDTH: usize = 30;

#[derive(Debug, Default, Serialize)]
pub struct TerminalView {
    pub limit: i64,
    pub total: i64,
    pub consumed: i64,
    pub burned: i64,
    pub remaining: i64,
    pub is_over: bool,
    pub progress: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meals: Vec<Meal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workouts: Vec<Workout>,
}

impl TrackerDisplay for TerminalView {
    fn set_limit(&mut self, limit: i64) {
        self.limit = limit;
    }

    fn set_total(&mut self, total: i64) {
        self.total = total;
    }

    fn set_consumed(&mut self, consumed: i64) {
        self.consumed = consumed;
    }

    fn set_burned(&mut self, burned: i64) {
        self.burned = burned;
    }

    fn set_remaining(&mut self, remaining: i64, is_over: bool) {
        self.remaining = remaining;
        self.is_over = is_over;
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = percent;
    }

    fn append_meal_row(&mut self, meal: &Meal) {
        self.meals.push(meal.clone());
    }

    fn append_workout_row(&mut self, workout: &Workout) {
        self.workouts.push(workout.clone());
    }
}

impl TerminalView {
    pub fn print_summary(&self) {
        print!("{}", self.format_summary());
    }

    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Daily limit: {:>7}\n", self.limit));
        out.push_str(&format!("Net total:   {:>7}\n", self.total));
        out.push_str(&format!("Consumed:    {:>7}\n", self.consumed));
        out.push_str(&format!("Burned:      {:>7}\n", self.burned));

        let marker = if self.is_over { "  (over limit)" } else { "" };
        out.push_str(&format!("Remaining:   {:>7}{}\n", self.remaining, marker));

        out.push_str(&format!(
            "[{}] {:.1}%\n",
            progress_bar(self.progress, BAR_WIDTH),
            self.progress
        ));
        out
    }

    pub fn format_meal_rows(&self) -> String {
        format_rows(self.meals.iter().map(|m| (m.id.as_str(), m.name.as_str(), m.calories)))
    }

    pub fn format_workout_rows(&self) -> String {
        format_rows(
            self.workouts
                .iter()
                .map(|w| (w.id.as_str(), w.name.as_str(), w.calories)),
        )
    }
}

fn format_rows<'a>(rows: impl Iterator<Item = (&'a str, &'a str, i64)>) -> String {
    let mut out = String::new();
    for (id, name, calories) in rows {
        out.push_str(&format!("  {:<30} {:>6}  {}\n", name, calories, id));
    }
    out
}

/// Renders `percent` (clamped to 0..=100) as a bar of `width` cells.
fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use caltrack_core::{MemoryStore, RecordStore, Tracker};

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0, 10), "----------");
        assert_eq!(progress_bar(50.0, 10), "#####-----");
        assert_eq!(progress_bar(100.0, 10), "##########");
        assert_eq!(progress_bar(-20.0, 4), "----");
    }

    #[test]
    fn test_view_tracks_published_values() {
        let mut view = TerminalView::default();
        {
            let mut tracker =
                Tracker::initialize(RecordStore::new(MemoryStore::new()), &mut view).unwrap();
            tracker.add_meal(Meal::with_id("1", "Eggs", 300)).unwrap();
            tracker.add_workout(Workout::with_id("2", "Run", 100)).unwrap();
        }

        assert_eq!(view.limit, 1950);
        assert_eq!(view.total, 200);
        assert_eq!(view.consumed, 300);
        assert_eq!(view.burned, 100);
        assert_eq!(view.remaining, 1750);
        assert_eq!(view.meals.len(), 1);
        assert_eq!(view.workouts.len(), 1);
    }

    #[test]
    fn test_format_summary_marks_over_limit() {
        let mut view = TerminalView::default();
        view.set_limit(2000);
        view.set_total(2500);
        view.set_remaining(-500, true);
        view.set_progress(100.0);

        let output = view.format_summary();
        assert!(output.contains("-500  (over limit)"));
        assert!(output.contains("100.0%"));
    }

    #[test]
    fn test_format_meal_rows() {
        let mut view = TerminalView::default();
        view.append_meal_row(&Meal::with_id("m1", "Eggs", 300));

        let rows = view.format_meal_rows();
        assert!(rows.contains("Eggs"));
        assert!(rows.contains("300"));
        assert!(rows.contains("m1"));
    }
}
