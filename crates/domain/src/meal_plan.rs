use std::ops::{Add, AddAssign, Mul};

#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: &'static str,
    pub name: &'static str,
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    /// Portion the nutrition values refer to, e.g. `100g`.
    pub serving: &'static str,
}

impl FoodItem {
    #[must_use]
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
        }
    }
}

#[must_use]
pub fn find_food<'a>(foods: &'a [FoodItem], id: &str) -> Option<&'a FoodItem> {
    foods.iter().find(|f| f.id == id)
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Nutrition {
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Self) -> Self::Output {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Nutrition {
    type Output = Nutrition;

    #[allow(clippy::cast_precision_loss)]
    fn mul(self, rhs: u32) -> Self::Output {
        let factor = rhs as f32;
        Nutrition {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanItem<'a> {
    pub food: &'a FoodItem,
    /// Always at least 1.
    pub servings: u32,
}

impl MealPlanItem<'_> {
    #[must_use]
    pub fn nutrition(&self) -> Nutrition {
        self.food.nutrition() * self.servings
    }
}

/// Transient selection of foods planned against a calorie target.
///
/// A plan is never persisted and lives only as long as the planning session.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan<'a> {
    pub target_calories: i32,
    items: Vec<MealPlanItem<'a>>,
}

impl<'a> MealPlan<'a> {
    #[must_use]
    pub fn new(target_calories: i32) -> Self {
        Self {
            target_calories,
            items: vec![],
        }
    }

    #[must_use]
    pub fn items(&self) -> &[MealPlanItem<'a>] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one serving of `food`, creating a new item if the food is not yet selected.
    pub fn add_food(&mut self, food: &'a FoodItem) {
        if let Some(item) = self.items.iter_mut().find(|i| i.food.id == food.id) {
            item.servings += 1;
        } else {
            self.items.push(MealPlanItem { food, servings: 1 });
        }
    }

    pub fn remove_food(&mut self, food_id: &str) {
        self.items.retain(|i| i.food.id != food_id);
    }

    /// Setting zero servings removes the food. Unknown foods are ignored.
    pub fn set_servings(&mut self, food_id: &str, servings: u32) {
        if servings == 0 {
            self.remove_food(food_id);
        } else if let Some(item) = self.items.iter_mut().find(|i| i.food.id == food_id) {
            item.servings = servings;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn totals(&self) -> Nutrition {
        self.items
            .iter()
            .fold(Nutrition::default(), |acc, item| acc + item.nutrition())
    }

    /// Calories left until the target is reached, negative if exceeded.
    #[must_use]
    pub fn remaining_calories(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let target = self.target_calories as f32;
        target - self.totals().calories
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::FOODS;

    fn food(id: &str) -> &'static FoodItem {
        find_food(FOODS, id).unwrap()
    }

    #[test]
    fn test_add_food_increments_servings() {
        let mut plan = MealPlan::new(2000);
        plan.add_food(food("1"));
        plan.add_food(food("2"));
        plan.add_food(food("1"));

        assert_eq!(
            plan.items()
                .iter()
                .map(|i| (i.food.name, i.servings))
                .collect::<Vec<_>>(),
            vec![("Chicken Breast", 2), ("Brown Rice", 1)]
        );
    }

    #[test]
    fn test_set_servings() {
        let mut plan = MealPlan::new(2000);
        plan.add_food(food("6"));
        plan.set_servings("6", 3);
        assert_eq!(plan.items()[0].servings, 3);

        plan.set_servings("7", 2);
        assert_eq!(plan.items().len(), 1);

        plan.set_servings("6", 0);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_remove_food() {
        let mut plan = MealPlan::new(2000);
        plan.add_food(food("9"));
        plan.add_food(food("10"));
        plan.remove_food("9");
        assert_eq!(plan.items().len(), 1);
        assert_eq!(plan.items()[0].food.id, "10");
        plan.remove_food("42");
        assert_eq!(plan.items().len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut plan = MealPlan::new(1500);
        assert_eq!(plan.totals(), Nutrition::default());

        // chicken breast x2, brown rice x1
        plan.add_food(food("1"));
        plan.add_food(food("1"));
        plan.add_food(food("2"));

        let totals = plan.totals();
        assert_approx_eq!(totals.calories, 442.0, 0.001);
        assert_approx_eq!(totals.protein, 64.6, 0.001);
        assert_approx_eq!(totals.carbs, 24.0, 0.001);
        assert_approx_eq!(totals.fat, 8.1, 0.001);
        assert_approx_eq!(plan.remaining_calories(), 1058.0, 0.001);
    }

    #[test]
    fn test_remaining_calories_when_exceeded() {
        let mut plan = MealPlan::new(500);
        plan.add_food(food("19"));
        assert_approx_eq!(plan.remaining_calories(), -88.0, 0.001);
        plan.clear();
        assert_approx_eq!(plan.remaining_calories(), 500.0, 0.001);
    }
}
