use std::slice::Iter;

use crate::Property;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub description: &'static str,
    pub technique: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Arms,
    Abs,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 5] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Arms,
            MuscleGroup::Abs,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Abs => "Abs",
        }
    }
}

#[must_use]
pub fn exercises_by_muscle_group(
    exercises: &[Exercise],
    muscle_group: MuscleGroup,
) -> Vec<&Exercise> {
    exercises
        .iter()
        .filter(|e| e.muscle_group == muscle_group)
        .collect()
}

#[must_use]
pub fn find_exercise<'a>(exercises: &'a [Exercise], id: &str) -> Option<&'a Exercise> {
    exercises.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::catalog::EXERCISES;

    #[rstest]
    #[case(MuscleGroup::Chest, vec!["Push-ups", "Bench Press", "Dumbbell Flyes"])]
    #[case(MuscleGroup::Abs, vec!["Crunches", "Plank", "Russian Twists"])]
    fn test_exercises_by_muscle_group(
        #[case] muscle_group: MuscleGroup,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(
            exercises_by_muscle_group(EXERCISES, muscle_group)
                .iter()
                .map(|e| e.name)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_every_muscle_group_has_exercises() {
        for muscle_group in MuscleGroup::iter() {
            assert!(!exercises_by_muscle_group(EXERCISES, *muscle_group).is_empty());
        }
    }

    #[test]
    fn test_find_exercise() {
        let squats = find_exercise(EXERCISES, "legs-1").unwrap();
        assert_eq!(squats.name, "Squats");
        assert_eq!(squats.technique.len(), 5);
        assert_eq!(find_exercise(EXERCISES, "legs-9"), None);
    }
}
