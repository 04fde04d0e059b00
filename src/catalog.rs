use crate::models::{ExerciseCategory, FoodItem};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ExerciseCategory,
    pub has_distance: bool,
    pub has_elevation: bool,
    pub has_time: bool,
    /// Metabolic equivalent used by the calorie estimate.
    pub met_value: f64,
}

const fn exercise(
    id: &'static str,
    name: &'static str,
    category: ExerciseCategory,
    has_distance: bool,
    has_elevation: bool,
    has_time: bool,
    met_value: f64,
) -> Exercise {
    Exercise {
        id,
        name,
        category,
        has_distance,
        has_elevation,
        has_time,
        met_value,
    }
}

pub const EXERCISES: &[Exercise] = &[
    exercise("run-outdoor", "Outdoor Run", ExerciseCategory::Running, true, true, true, 9.8),
    exercise("run-treadmill", "Treadmill Run", ExerciseCategory::Running, true, false, true, 9.0),
    exercise("run-trail", "Trail Run", ExerciseCategory::Running, true, true, true, 10.5),
    exercise("run-interval", "Interval Training", ExerciseCategory::Running, true, false, true, 11.0),
    exercise("run-sprint", "Sprints", ExerciseCategory::Running, true, false, true, 12.0),
    exercise("cycle-outdoor", "Outdoor Cycling", ExerciseCategory::Cycling, true, true, true, 8.0),
    exercise("cycle-indoor", "Indoor Cycling", ExerciseCategory::Cycling, true, false, true, 7.0),
    exercise("cycle-mountain", "Mountain Biking", ExerciseCategory::Cycling, true, true, true, 9.0),
    exercise("cycle-spin", "Spin Class", ExerciseCategory::Cycling, false, false, true, 8.5),
    exercise("swim-pool", "Pool Swimming", ExerciseCategory::Swimming, true, false, true, 8.0),
    exercise("swim-open", "Open Water Swimming", ExerciseCategory::Swimming, true, false, true, 9.5),
    exercise("walk-outdoor", "Walk", ExerciseCategory::Walking, true, true, true, 3.5),
    exercise("walk-power", "Power Walk", ExerciseCategory::Walking, true, true, true, 5.0),
    exercise("walk-nordic", "Nordic Walking", ExerciseCategory::Walking, true, true, true, 6.0),
    exercise("hike-easy", "Easy Hike", ExerciseCategory::Hiking, true, true, true, 5.0),
    exercise("hike-moderate", "Moderate Hike", ExerciseCategory::Hiking, true, true, true, 6.5),
    exercise("hike-strenuous", "Strenuous Hike", ExerciseCategory::Hiking, true, true, true, 8.0),
    exercise("hike-backpacking", "Backpacking", ExerciseCategory::Hiking, true, true, true, 7.5),
    exercise("strength-weight", "Weight Training", ExerciseCategory::Strength, false, false, true, 5.0),
    exercise("strength-bodyweight", "Bodyweight Training", ExerciseCategory::Strength, false, false, true, 4.0),
    exercise("strength-crossfit", "CrossFit", ExerciseCategory::Strength, false, false, true, 8.0),
    exercise("strength-powerlifting", "Powerlifting", ExerciseCategory::Strength, false, false, true, 6.0),
    exercise("strength-kettlebell", "Kettlebell", ExerciseCategory::Strength, false, false, true, 6.0),
    exercise("cardio-hiit", "HIIT", ExerciseCategory::Cardio, false, false, true, 10.0),
    exercise("cardio-elliptical", "Elliptical", ExerciseCategory::Cardio, true, false, true, 7.0),
    exercise("cardio-rowing", "Rowing", ExerciseCategory::Cardio, true, false, true, 8.5),
    exercise("cardio-jump-rope", "Jump Rope", ExerciseCategory::Cardio, false, false, true, 11.0),
    exercise("cardio-stair", "Stair Climber", ExerciseCategory::Cardio, false, true, true, 9.0),
    exercise("cardio-dance", "Dance Workout", ExerciseCategory::Cardio, false, false, true, 6.5),
    exercise("cardio-aerobics", "Aerobics", ExerciseCategory::Cardio, false, false, true, 7.0),
    exercise("sport-basketball", "Basketball", ExerciseCategory::Sports, false, false, true, 8.0),
    exercise("sport-soccer", "Soccer", ExerciseCategory::Sports, true, false, true, 9.0),
    exercise("sport-tennis", "Tennis", ExerciseCategory::Sports, false, false, true, 7.5),
    exercise("sport-golf", "Golf", ExerciseCategory::Sports, true, false, true, 4.5),
    exercise("sport-boxing", "Boxing", ExerciseCategory::Sports, false, false, true, 9.0),
    exercise("sport-martial-arts", "Martial Arts", ExerciseCategory::Sports, false, false, true, 8.0),
    exercise("sport-volleyball", "Volleyball", ExerciseCategory::Sports, false, false, true, 6.0),
    exercise("sport-badminton", "Badminton", ExerciseCategory::Sports, false, false, true, 5.5),
    exercise("sport-table-tennis", "Table Tennis", ExerciseCategory::Sports, false, false, true, 4.0),
    exercise("sport-climbing", "Rock Climbing", ExerciseCategory::Sports, false, true, true, 8.0),
    exercise("sport-skiing", "Skiing", ExerciseCategory::Sports, true, true, true, 7.0),
    exercise("sport-snowboarding", "Snowboarding", ExerciseCategory::Sports, true, true, true, 6.0),
    exercise("sport-skateboarding", "Skateboarding", ExerciseCategory::Sports, true, false, true, 5.0),
    exercise("sport-surfing", "Surfing", ExerciseCategory::Sports, false, false, true, 6.0),
    exercise("yoga", "Yoga", ExerciseCategory::Other, false, false, true, 3.0),
    exercise("pilates", "Pilates", ExerciseCategory::Other, false, false, true, 3.5),
    exercise("stretching", "Stretching", ExerciseCategory::Other, false, false, true, 2.5),
    exercise("meditation", "Meditation", ExerciseCategory::Other, false, false, true, 1.5),
    exercise("other-custom", "Other Exercise", ExerciseCategory::Other, true, true, true, 5.0),
];

pub const CATEGORIES: &[(ExerciseCategory, &str)] = &[
    (ExerciseCategory::Running, "Running"),
    (ExerciseCategory::Cycling, "Cycling"),
    (ExerciseCategory::Swimming, "Swimming"),
    (ExerciseCategory::Walking, "Walking"),
    (ExerciseCategory::Hiking, "Hiking"),
    (ExerciseCategory::Strength, "Strength"),
    (ExerciseCategory::Cardio, "Cardio"),
    (ExerciseCategory::Sports, "Sports"),
    (ExerciseCategory::Other, "Other"),
];

pub fn exercise_by_id(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|exercise| exercise.id == id)
}

pub fn category_name(category: Option<ExerciseCategory>) -> &'static str {
    category
        .and_then(|category| CATEGORIES.iter().find(|(c, _)| *c == category))
        .map(|(_, name)| *name)
        .unwrap_or("All Activities")
}

/// Exercises in `category` (or every category) whose name contains `query`,
/// case-insensitively.
pub fn search_exercises(category: Option<ExerciseCategory>, query: &str) -> Vec<&'static Exercise> {
    let query = query.trim().to_lowercase();
    EXERCISES
        .iter()
        .filter(|exercise| category.is_none_or(|c| exercise.category == c))
        .filter(|exercise| exercise.name.to_lowercase().contains(&query))
        .collect()
}

struct FoodEntry {
    id: &'static str,
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: Option<f64>,
    sodium: Option<f64>,
}

#[allow(clippy::too_many_arguments)]
const fn food(
    id: &'static str,
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: Option<f64>,
    sodium: Option<f64>,
) -> FoodEntry {
    FoodEntry {
        id,
        name,
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sodium,
    }
}

impl FoodEntry {
    fn to_item(&self) -> FoodItem {
        FoodItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sodium: self.sodium,
            is_custom: None,
        }
    }
}

const FOODS: &[FoodEntry] = &[
    food("mcd-bigmac", "McDonald's Big Mac", 590.0, 25.0, 46.0, 34.0, None, Some(1010.0)),
    food("mcd-mcchicken", "McDonald's McChicken", 400.0, 14.0, 40.0, 21.0, None, Some(560.0)),
    food("mcd-fries-m", "McDonald's Medium Fries", 320.0, 5.0, 43.0, 15.0, None, Some(260.0)),
    food("mcd-nuggets-10", "McDonald's 10pc Nuggets", 410.0, 24.0, 25.0, 24.0, None, Some(900.0)),
    food("mcd-qpc", "McDonald's Quarter Pounder", 520.0, 30.0, 42.0, 26.0, None, Some(1100.0)),
    food("mcd-filet", "McDonald's Filet-O-Fish", 390.0, 16.0, 39.0, 19.0, None, Some(580.0)),
    food("mcd-mcflurry", "McDonald's McFlurry Oreo", 510.0, 12.0, 80.0, 17.0, None, Some(280.0)),
    food("bk-whopper", "Burger King Whopper", 677.0, 28.0, 49.0, 40.0, None, Some(980.0)),
    food("bk-chicken", "Burger King Chicken Sandwich", 660.0, 28.0, 48.0, 40.0, None, Some(1170.0)),
    food("bk-onion-rings", "Burger King Onion Rings", 410.0, 5.0, 47.0, 22.0, None, Some(840.0)),
    food("wendys-baconator", "Wendy's Baconator", 950.0, 57.0, 38.0, 62.0, None, Some(1810.0)),
    food("wendys-spicy", "Wendy's Spicy Chicken", 500.0, 29.0, 47.0, 20.0, None, Some(1370.0)),
    food("wendys-frosty", "Wendy's Chocolate Frosty", 350.0, 9.0, 56.0, 9.0, None, Some(200.0)),
    food("wendys-nuggets", "Wendy's 10pc Nuggets", 450.0, 21.0, 27.0, 29.0, None, Some(1040.0)),
    food("subway-italian", "Subway Italian BMT 6\"", 410.0, 20.0, 44.0, 18.0, None, Some(1260.0)),
    food("subway-turkey", "Subway Turkey Breast 6\"", 280.0, 18.0, 45.0, 4.0, None, Some(760.0)),
    food("subway-meatball", "Subway Meatball 6\"", 480.0, 22.0, 52.0, 20.0, None, Some(1020.0)),
    food("subway-veggie", "Subway Veggie Delite 6\"", 230.0, 9.0, 44.0, 3.0, None, Some(310.0)),
    food("tb-crunchy", "Taco Bell Crunchy Taco", 170.0, 8.0, 13.0, 10.0, None, Some(310.0)),
    food("tb-burrito", "Taco Bell Bean Burrito", 380.0, 14.0, 55.0, 11.0, None, Some(1080.0)),
    food("tb-chalupa", "Taco Bell Chalupa Supreme", 350.0, 14.0, 30.0, 20.0, None, Some(560.0)),
    food("tb-nachos", "Taco Bell Nachos BellGrande", 740.0, 16.0, 82.0, 38.0, None, Some(1050.0)),
    food("cfa-sandwich", "Chick-fil-A Sandwich", 440.0, 29.0, 40.0, 19.0, None, Some(1400.0)),
    food("cfa-nuggets-12", "Chick-fil-A 12pc Nuggets", 380.0, 40.0, 13.0, 17.0, None, Some(1680.0)),
    food("cfa-waffle-fries", "Chick-fil-A Waffle Fries", 420.0, 5.0, 45.0, 24.0, None, Some(240.0)),
    food("pizza-pepperoni", "Pepperoni Pizza Slice", 300.0, 13.0, 34.0, 12.0, None, Some(680.0)),
    food("pizza-cheese", "Cheese Pizza Slice", 272.0, 12.0, 34.0, 10.0, None, Some(551.0)),
    food("pizza-supreme", "Supreme Pizza Slice", 320.0, 14.0, 35.0, 14.0, None, Some(760.0)),
    food("kfc-breast", "KFC Original Chicken Breast", 390.0, 39.0, 11.0, 21.0, None, Some(1190.0)),
    food("kfc-popcorn", "KFC Popcorn Chicken", 400.0, 20.0, 23.0, 26.0, None, Some(1160.0)),
    food("kfc-mashed", "KFC Mashed Potatoes & Gravy", 130.0, 2.0, 18.0, 5.0, None, Some(530.0)),
    food("drink-coke", "Coca-Cola (Medium)", 210.0, 0.0, 58.0, 0.0, None, Some(45.0)),
    food("drink-sprite", "Sprite (Medium)", 200.0, 0.0, 54.0, 0.0, None, Some(40.0)),
    food("drink-coffee", "Coffee (Black, 16oz)", 5.0, 0.0, 1.0, 0.0, None, Some(5.0)),
    food("drink-latte", "Latte (16oz)", 190.0, 13.0, 18.0, 7.0, None, Some(170.0)),
    food("drink-smoothie", "Fruit Smoothie (Medium)", 280.0, 4.0, 62.0, 1.0, None, Some(45.0)),
    food("mcd-mcmuffin", "McDonald's Egg McMuffin", 300.0, 17.0, 30.0, 13.0, None, Some(820.0)),
    food("mcd-hotcakes", "McDonald's Hotcakes", 580.0, 9.0, 102.0, 15.0, None, Some(600.0)),
    food("sb-croissant", "Starbucks Butter Croissant", 260.0, 5.0, 32.0, 13.0, None, Some(280.0)),
    food("dd-donut", "Dunkin Glazed Donut", 260.0, 3.0, 31.0, 14.0, None, Some(340.0)),
    food("side-chips", "Bag of Chips (1oz)", 150.0, 2.0, 15.0, 10.0, None, Some(180.0)),
    food("side-cookie", "Chocolate Chip Cookie", 220.0, 2.0, 30.0, 11.0, None, Some(160.0)),
    food("side-mozzsticks", "Mozzarella Sticks (6pc)", 480.0, 22.0, 36.0, 28.0, None, Some(1280.0)),
    food("healthy-salad", "Garden Salad (no dressing)", 35.0, 2.0, 7.0, 0.0, Some(3.0), Some(25.0)),
    food("healthy-chicken", "Grilled Chicken Breast", 165.0, 31.0, 0.0, 4.0, None, Some(70.0)),
    food("healthy-salmon", "Grilled Salmon (6oz)", 350.0, 38.0, 0.0, 21.0, None, Some(110.0)),
    food("healthy-rice", "Brown Rice (1 cup)", 216.0, 5.0, 45.0, 2.0, Some(4.0), Some(10.0)),
    food("healthy-banana", "Banana", 105.0, 1.0, 27.0, 0.0, Some(3.0), Some(1.0)),
    food("healthy-apple", "Apple", 95.0, 0.0, 25.0, 0.0, Some(4.0), Some(2.0)),
    food("healthy-eggs", "Eggs (2 large)", 140.0, 12.0, 1.0, 10.0, None, Some(140.0)),
    food("healthy-oatmeal", "Oatmeal (1 cup)", 150.0, 5.0, 27.0, 3.0, Some(4.0), Some(0.0)),
    food("healthy-yogurt", "Greek Yogurt (1 cup)", 130.0, 17.0, 8.0, 4.0, None, Some(65.0)),
    food("healthy-almonds", "Almonds (1oz)", 164.0, 6.0, 6.0, 14.0, Some(4.0), Some(0.0)),
];

pub fn builtin_foods() -> Vec<FoodItem> {
    FOODS.iter().map(FoodEntry::to_item).collect()
}

pub fn builtin_food(id: &str) -> Option<FoodItem> {
    FOODS.iter().find(|entry| entry.id == id).map(FoodEntry::to_item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exercise_ids_are_unique() {
        let ids: HashSet<_> = EXERCISES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), EXERCISES.len());
    }

    #[test]
    fn food_ids_are_unique() {
        let ids: HashSet<_> = FOODS.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FOODS.len());
    }

    #[test]
    fn search_filters_by_category_and_name() {
        let runs = search_exercises(Some(ExerciseCategory::Running), "run");
        assert!(runs.iter().all(|e| e.category == ExerciseCategory::Running));
        assert!(runs.iter().any(|e| e.id == "run-trail"));

        let walks = search_exercises(None, "WALK");
        assert!(walks.iter().any(|e| e.id == "walk-nordic"));
        assert!(walks.iter().any(|e| e.id == "walk-power"));
    }

    #[test]
    fn lookups() {
        assert_eq!(exercise_by_id("yoga").map(|e| e.met_value), Some(3.0));
        assert!(exercise_by_id("juggling").is_none());
        assert_eq!(builtin_food("healthy-banana").map(|f| f.calories), Some(105.0));
        assert_eq!(category_name(Some(ExerciseCategory::Hiking)), "Hiking");
        assert_eq!(category_name(None), "All Activities");
    }
}
