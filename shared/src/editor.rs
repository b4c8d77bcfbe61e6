use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::MAX_OPTIONS;
use crate::error::WheelError;
use crate::profanity::ProfanityFilter;
use crate::segment::{palette_color, segment_id, Segment, Wheel};
use crate::validation::{
    normalize_label, validate_capacity, validate_label, validate_unique, validate_weight,
};

/// Splits pasted text into option labels: one per line, trimmed, blank
/// lines dropped, at most `MAX_OPTIONS` kept.
pub fn parse_options(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize_label)
        .filter(|label| !label.is_empty())
        .take(MAX_OPTIONS)
        .collect()
}

/// Add/remove/reorder operations behind the custom wheel editor. Hosts
/// hand the edited wheel to the engine wholesale after every change.
#[derive(Debug, Clone)]
pub struct WheelEditor {
    wheel: Wheel,
    family_safe: bool,
    next_id: usize,
}

impl WheelEditor {
    pub fn new(wheel: Wheel) -> Self {
        let next_id = wheel.len();
        Self {
            wheel,
            family_safe: false,
            next_id,
        }
    }

    /// Rejects labels the content filter flags.
    pub fn family_safe(mut self, enabled: bool) -> Self {
        self.family_safe = enabled;
        self
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn into_wheel(self) -> Wheel {
        self.wheel
    }

    fn checked_label(&self, raw: &str, skip_id: Option<&str>) -> Result<String, WheelError> {
        let label = normalize_label(raw);
        validate_label(&label)?;
        validate_unique(&label, &self.wheel.segments, skip_id)?;
        if self.family_safe {
            ProfanityFilter::validate_label(&label)?;
        }
        Ok(label)
    }

    fn fresh_id(&mut self, label: &str) -> String {
        loop {
            let id = segment_id(label, self.next_id);
            self.next_id += 1;
            if self.wheel.segment(&id).is_none() {
                return id;
            }
        }
    }

    fn position(&self, id: &str) -> Result<usize, WheelError> {
        self.wheel
            .segments
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| WheelError::NotFound(format!("option {}", id)))
    }

    pub fn add_option(&mut self, raw: &str) -> Result<&Segment, WheelError> {
        validate_capacity(self.wheel.len())?;
        let label = self.checked_label(raw, None)?;
        let id = self.fresh_id(&label);
        let color = palette_color(self.wheel.len());
        self.wheel.segments.push(Segment::new(id, label, color));
        Ok(&self.wheel.segments[self.wheel.len() - 1])
    }

    pub fn remove_option(&mut self, id: &str) -> Result<Segment, WheelError> {
        let index = self.position(id)?;
        Ok(self.wheel.segments.remove(index))
    }

    pub fn rename_option(&mut self, id: &str, raw: &str) -> Result<(), WheelError> {
        let index = self.position(id)?;
        let label = self.checked_label(raw, Some(id))?;
        self.wheel.segments[index].label = label;
        Ok(())
    }

    pub fn move_option(&mut self, from: usize, to: usize) -> Result<(), WheelError> {
        let len = self.wheel.len();
        if from >= len || to >= len {
            return Err(WheelError::NotFound(format!("position {} or {} of {}", from, to, len)));
        }
        let segment = self.wheel.segments.remove(from);
        self.wheel.segments.insert(to, segment);
        Ok(())
    }

    pub fn set_weight(&mut self, id: &str, weight: f64) -> Result<(), WheelError> {
        let index = self.position(id)?;
        validate_weight(weight)?;
        self.wheel.segments[index].weight = Some(weight);
        Ok(())
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.wheel.segments.shuffle(rng);
    }

    pub fn sort_alphabetically(&mut self) {
        self.wheel
            .segments
            .sort_by_cached_key(|s| s.label.to_lowercase());
    }

    pub fn clear(&mut self) {
        self.wheel.segments.clear();
    }

    /// Adds every acceptable line of `text`; duplicates and rejected labels
    /// are skipped. Returns how many options were added.
    pub fn import_text(&mut self, text: &str) -> usize {
        let mut added = 0;
        for label in parse_options(text) {
            match self.add_option(&label) {
                Ok(_) => added += 1,
                Err(err) => {
                    debug!("Skipping imported option {:?}: {}", label, err);
                    if self.wheel.len() >= MAX_OPTIONS {
                        break;
                    }
                }
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn editor() -> WheelEditor {
        WheelEditor::new(Wheel::from_labels("lunch", "Lunch", ["Tacos", "Sushi", "Burger"]))
    }

    #[test]
    fn test_parse_options() {
        let parsed = parse_options("  Tacos \n\n Sushi\r\n   \nPizza   Slice");
        assert_eq!(parsed, vec!["Tacos", "Sushi", "Pizza Slice"]);

        let many: String = (0..80).map(|i| format!("Option {}\n", i)).collect();
        assert_eq!(parse_options(&many).len(), MAX_OPTIONS);
    }

    #[test]
    fn test_add_option_rejects_duplicates_and_blanks() {
        let mut editor = editor();
        let added = editor.add_option("  Soup ").unwrap();
        assert_eq!(added.label, "Soup");
        assert_eq!(added.id, "soup-3");
        assert!(matches!(editor.add_option("sushi"), Err(WheelError::Validation(_))));
        assert!(editor.add_option("   ").is_err());
        assert_eq!(editor.wheel().len(), 4);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let mut editor = editor();
        editor.remove_option("sushi-1").unwrap();
        let id = editor.add_option("Sushi").unwrap().id.clone();
        assert_ne!(id, "tacos-0");
        let ids: HashSet<_> = editor.wheel().segments.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), editor.wheel().len());
    }

    #[test]
    fn test_capacity_limit() {
        let mut editor = WheelEditor::new(Wheel::new("w", "W", vec![]));
        for i in 0..MAX_OPTIONS {
            editor.add_option(&format!("Option {}", i)).unwrap();
        }
        assert!(editor.add_option("One more").is_err());
    }

    #[test]
    fn test_rename_and_move() {
        let mut editor = editor();
        editor.rename_option("tacos-0", "tacos").unwrap();
        assert_eq!(editor.wheel().segments[0].label, "tacos");
        assert!(editor.rename_option("tacos-0", "Burger").is_err());
        assert!(matches!(editor.rename_option("nope", "x"), Err(WheelError::NotFound(_))));

        editor.move_option(0, 2).unwrap();
        let labels: Vec<_> = editor.wheel().segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Sushi", "Burger", "tacos"]);
        assert!(editor.move_option(0, 3).is_err());
    }

    #[test]
    fn test_set_weight_bounds() {
        let mut editor = editor();
        editor.set_weight("sushi-1", 4.0).unwrap();
        assert_eq!(editor.wheel().segments[1].weight, Some(4.0));
        assert!(editor.set_weight("sushi-1", 11.0).is_err());
    }

    #[test]
    fn test_sort_and_shuffle_keep_segments() {
        let mut editor = editor();
        editor.sort_alphabetically();
        let labels: Vec<_> = editor.wheel().segments.iter().map(|s| s.label.clone()).collect();
        assert_eq!(labels, vec!["Burger", "Sushi", "Tacos"]);

        let mut rng = StdRng::seed_from_u64(1);
        editor.shuffle(&mut rng);
        let mut after: Vec<_> = editor.wheel().segments.iter().map(|s| s.label.clone()).collect();
        after.sort();
        assert_eq!(after, labels);
    }

    #[test]
    fn test_import_text_skips_duplicates() {
        let mut editor = editor();
        let added = editor.import_text("Tacos\nSalad\nsalad\nWrap\n");
        assert_eq!(added, 2);
        assert_eq!(editor.wheel().len(), 5);
    }

    #[test]
    fn test_family_safe_mode() {
        let mut editor = editor().family_safe(true);
        assert!(editor.add_option("fuck").is_err());
        assert!(editor.add_option("Smoothie").is_ok());
    }
}
