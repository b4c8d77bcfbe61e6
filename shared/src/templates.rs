use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::segment::{palette_color, segment_id, Segment, Wheel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Learning,
    Utility,
    Entertainment,
    Gaming,
    Life,
    Food,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Learning,
        Category::Utility,
        Category::Entertainment,
        Category::Gaming,
        Category::Life,
        Category::Food,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Learning => "Learning",
            Category::Utility => "Decisions",
            Category::Entertainment => "Party Games",
            Category::Gaming => "Gaming",
            Category::Life => "Everyday Life",
            Category::Food => "Food",
        }
    }
}

/// A ready-made wheel, addressed by its URL slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub options: Vec<String>,
    pub colors: Option<Vec<String>>,
}

impl Template {
    fn new(slug: &str, title: &str, description: &str, category: Category, options: &[&str]) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            options: options.iter().map(|o| o.to_string()).collect(),
            colors: None,
        }
    }

    fn with_colors(mut self, colors: &[&str]) -> Self {
        self.colors = Some(colors.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn to_wheel(&self) -> Wheel {
        let segments = self
            .options
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = self
                    .colors
                    .as_ref()
                    .and_then(|colors| colors.get(i % colors.len().max(1)))
                    .map(String::as_str)
                    .unwrap_or_else(|| palette_color(i));
                Segment::new(segment_id(label, i), label.as_str(), color)
            })
            .collect();
        Wheel::new(self.slug.as_str(), self.title.as_str(), segments)
    }
}

static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    let raffle: Vec<String> = (1..=100).map(|n| n.to_string()).collect();
    let raffle: Vec<&str> = raffle.iter().map(String::as_str).collect();

    vec![
        // Spin & Learn
        Template::new("colors", "Colors", "Learn about colors", Category::Learning,
            &["Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Brown"])
            .with_colors(&["#FF5252", "#2196F3", "#4CAF50", "#FFEB3B", "#9C27B0", "#FF9800", "#E91E63", "#795548"]),
        Template::new("counting", "Counting", "Practice numbers 1-8", Category::Learning,
            &["One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight"])
            .with_colors(&["#FF5722", "#FF9800", "#FFC107", "#CDDC39", "#4CAF50", "#00BCD4", "#2196F3", "#9C27B0"]),
        Template::new("simple-words", "Simple Words", "Learn simple words", Category::Learning,
            &["Cat", "Dog", "Fish", "Bird", "Sun", "Moon", "Star", "Tree"]),
        Template::new("actions", "Actions", "Fun physical activities", Category::Learning,
            &["Jump", "Clap", "Spin", "Dance", "Wave", "March", "Stretch", "Wiggle"]),

        // Decision wheels
        Template::new("yes-no", "Yes or No", "Let the wheel make the call.", Category::Utility, &["Yes", "No"]),
        Template::new("coin-flip", "Coin Flip", "Heads or tails, on a wheel.", Category::Utility, &["Heads", "Tails"]),
        Template::new("dice-roll", "Dice Roll", "Roll a six-sided die.", Category::Utility, &["1", "2", "3", "4", "5", "6"]),
        Template::new("raffle-number-1-100", "Raffle Number Picker", "Draw a number from 1 to 100.", Category::Utility, &raffle),
        Template::new("truth-or-dare", "Truth or Dare", "The party classic.", Category::Entertainment, &["Truth", "Dare"]),
        Template::new("pokemon-type", "Pokemon Type Picker", "Pick a type for your next team.", Category::Gaming,
            &["Normal", "Fire", "Water", "Grass", "Electric", "Ice", "Fighting", "Poison", "Ground", "Flying",
              "Psychic", "Bug", "Rock", "Ghost", "Dark", "Dragon", "Steel", "Fairy"]),
        Template::new("couple-activity", "Couple Date Night Ideas", "Spin for a date night idea.", Category::Life,
            &["Movie Night", "Cook Together", "Stargazing", "Board Games", "Massage Night", "Walk in Park",
              "Video Games", "Fancy Dinner", "Picnic", "Karaoke"]),
        Template::new("weekend-activity", "Weekend Activity", "What to do this weekend.", Category::Life,
            &["Hiking", "Movie Marathon", "Visit Museum", "Try New Restaurant", "Clean House", "Read a Book",
              "Video Games", "Visit Friends", "Baking", "Nap"]),
        Template::new("what-for-lunch", "What to Eat for Lunch?", "Find a quick meal idea.", Category::Food,
            &["Sandwich", "Salad", "Leftovers", "Burger", "Tacos", "Sushi", "Pizza Slice", "Soup", "Wrap", "Smoothie"]),
        Template::new("dessert-picker", "Dessert Picker", "Spin to choose your dessert.", Category::Food,
            &["Ice Cream", "Chocolate Cake", "Cookies", "Fruit Salad", "Donuts", "Cheesecake", "Brownies", "Pie",
              "Yogurt", "Candy"]),
    ]
});

static BY_SLUG: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, t)| (t.slug.as_str(), i))
        .collect()
});

pub fn all() -> &'static [Template] {
    &TEMPLATES
}

pub fn template(slug: &str) -> Option<&'static Template> {
    BY_SLUG.get(slug).map(|&i| &TEMPLATES[i])
}

pub fn templates_in(category: Category) -> impl Iterator<Item = &'static Template> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

/// Other templates to suggest next to `slug`: same category first, then
/// the rest in table order.
pub fn related(slug: &str, limit: usize) -> Vec<&'static Template> {
    let category = template(slug).map(|t| t.category);
    let (mut same, other): (Vec<_>, Vec<_>) = TEMPLATES
        .iter()
        .filter(|t| t.slug != slug)
        .partition(|t| Some(t.category) == category);
    same.extend(other);
    same.truncate(limit);
    same
}

/// Wheels a fresh install starts with.
pub fn default_wheels() -> Vec<Wheel> {
    templates_in(Category::Learning).map(Template::to_wheel).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_slug() {
        let colors = template("colors").unwrap();
        assert_eq!(colors.options.len(), 8);
        assert!(template("missing").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        assert_eq!(BY_SLUG.len(), all().len());
    }

    #[test]
    fn test_to_wheel_uses_template_colors() {
        let wheel = template("colors").unwrap().to_wheel();
        assert_eq!(wheel.id, "colors");
        assert_eq!(wheel.segments[1].label, "Blue");
        assert_eq!(wheel.segments[1].color, "#2196F3");
        assert_eq!(wheel.segments[1].id, "blue-1");
    }

    #[test]
    fn test_raffle_has_hundred_numbers() {
        let raffle = template("raffle-number-1-100").unwrap();
        assert_eq!(raffle.options.first().map(String::as_str), Some("1"));
        assert_eq!(raffle.options.len(), 100);
    }

    #[test]
    fn test_related_prefers_same_category() {
        let related = related("what-for-lunch", 3);
        assert_eq!(related.len(), 3);
        assert_eq!(related[0].slug, "dessert-picker");
        assert!(related.iter().all(|t| t.slug != "what-for-lunch"));
    }

    #[test]
    fn test_default_wheels_are_learning_wheels() {
        let wheels = default_wheels();
        assert_eq!(wheels.len(), 4);
        assert!(wheels.iter().all(Wheel::is_ready));
    }

    #[test]
    fn test_every_category_has_templates() {
        for category in Category::ALL {
            assert!(templates_in(category).next().is_some(), "{}", category.label());
        }
    }
}
