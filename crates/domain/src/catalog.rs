//! Reference data
//!
//! Static catalogs of exercises, pre-built workout plans and foods. The tables are loaded once and
//! never mutated.

use crate::{
    DayOfWeek, Exercise, FoodItem, Level, MuscleGroup, PlanDay, PlanExercise, Prescription,
    WorkoutPlan, WorkoutType,
};

pub static EXERCISES: &[Exercise] = &[
    Exercise {
        id: "chest-1",
        name: "Push-ups",
        muscle_group: MuscleGroup::Chest,
        description: "A fundamental bodyweight exercise for chest and triceps development.",
        technique: &[
            "Start in a plank position with hands shoulder-width apart",
            "Lower your body until chest nearly touches the floor",
            "Keep your core engaged and back straight",
            "Push back up to starting position",
            "Exhale on the way up, inhale on the way down",
        ],
    },
    Exercise {
        id: "chest-2",
        name: "Bench Press",
        muscle_group: MuscleGroup::Chest,
        description: "Classic compound exercise for building chest strength and mass.",
        technique: &[
            "Lie on bench with feet flat on floor",
            "Grip bar slightly wider than shoulder-width",
            "Lower bar to mid-chest with control",
            "Press bar up until arms are fully extended",
            "Keep shoulder blades retracted throughout",
        ],
    },
    Exercise {
        id: "chest-3",
        name: "Dumbbell Flyes",
        muscle_group: MuscleGroup::Chest,
        description: "Isolation exercise for chest stretch and muscle activation.",
        technique: &[
            "Lie on bench holding dumbbells above chest",
            "Lower weights out to sides in wide arc",
            "Keep slight bend in elbows throughout",
            "Stop when chest feels stretched",
            "Bring weights back together above chest",
        ],
    },
    Exercise {
        id: "back-1",
        name: "Pull-ups",
        muscle_group: MuscleGroup::Back,
        description: "Excellent compound exercise for back width and arm strength.",
        technique: &[
            "Hang from bar with overhand grip",
            "Pull yourself up until chin clears bar",
            "Keep core tight and avoid swinging",
            "Lower yourself with control",
            "Fully extend arms at bottom",
        ],
    },
    Exercise {
        id: "back-2",
        name: "Bent-Over Rows",
        muscle_group: MuscleGroup::Back,
        description: "Compound movement for back thickness and strength.",
        technique: &[
            "Bend at hips with slight knee bend",
            "Hold bar with overhand grip",
            "Pull bar to lower chest",
            "Squeeze shoulder blades together",
            "Lower bar with control",
        ],
    },
    Exercise {
        id: "back-3",
        name: "Lat Pulldowns",
        muscle_group: MuscleGroup::Back,
        description: "Machine exercise targeting the latissimus dorsi muscles.",
        technique: &[
            "Sit at machine with thighs secured",
            "Grip bar wider than shoulder-width",
            "Pull bar down to upper chest",
            "Keep torso upright",
            "Slowly return to starting position",
        ],
    },
    Exercise {
        id: "legs-1",
        name: "Squats",
        muscle_group: MuscleGroup::Legs,
        description: "King of leg exercises for overall lower body development.",
        technique: &[
            "Stand with feet shoulder-width apart",
            "Lower body by bending knees and hips",
            "Keep chest up and core engaged",
            "Descend until thighs parallel to ground",
            "Drive through heels to return to start",
        ],
    },
    Exercise {
        id: "legs-2",
        name: "Lunges",
        muscle_group: MuscleGroup::Legs,
        description: "Unilateral exercise for leg strength and balance.",
        technique: &[
            "Step forward with one leg",
            "Lower hips until both knees bent at 90 degrees",
            "Keep front knee aligned with ankle",
            "Push back to starting position",
            "Alternate legs or complete set on one side",
        ],
    },
    Exercise {
        id: "legs-3",
        name: "Leg Press",
        muscle_group: MuscleGroup::Legs,
        description: "Machine exercise for quadriceps, hamstrings, and glutes.",
        technique: &[
            "Sit in machine with feet on platform",
            "Lower platform by bending knees",
            "Stop when knees at 90 degrees",
            "Press platform back up",
            "Do not lock knees at top",
        ],
    },
    Exercise {
        id: "arms-1",
        name: "Bicep Curls",
        muscle_group: MuscleGroup::Arms,
        description: "Classic isolation exercise for bicep development.",
        technique: &[
            "Stand with dumbbells at sides",
            "Keep elbows close to body",
            "Curl weights up to shoulders",
            "Squeeze biceps at top",
            "Lower with control",
        ],
    },
    Exercise {
        id: "arms-2",
        name: "Tricep Dips",
        muscle_group: MuscleGroup::Arms,
        description: "Bodyweight exercise for tricep strength.",
        technique: &[
            "Position hands on parallel bars or bench",
            "Lower body by bending elbows",
            "Keep elbows pointing back",
            "Descend until upper arms parallel to ground",
            "Press back up to start",
        ],
    },
    Exercise {
        id: "arms-3",
        name: "Hammer Curls",
        muscle_group: MuscleGroup::Arms,
        description: "Variation of bicep curl targeting brachialis and forearms.",
        technique: &[
            "Hold dumbbells with neutral grip",
            "Keep palms facing each other",
            "Curl weights to shoulders",
            "Maintain neutral wrist position",
            "Lower slowly to starting position",
        ],
    },
    Exercise {
        id: "abs-1",
        name: "Crunches",
        muscle_group: MuscleGroup::Abs,
        description: "Basic abdominal exercise for core strength.",
        technique: &[
            "Lie on back with knees bent",
            "Place hands behind head or crossed on chest",
            "Lift shoulders off ground",
            "Contract abs and hold briefly",
            "Lower back down with control",
        ],
    },
    Exercise {
        id: "abs-2",
        name: "Plank",
        muscle_group: MuscleGroup::Abs,
        description: "Isometric core exercise for stability and endurance.",
        technique: &[
            "Start in forearm plank position",
            "Keep body in straight line from head to heels",
            "Engage core and squeeze glutes",
            "Hold position without sagging hips",
            "Breathe steadily throughout",
        ],
    },
    Exercise {
        id: "abs-3",
        name: "Russian Twists",
        muscle_group: MuscleGroup::Abs,
        description: "Rotational exercise for obliques and core.",
        technique: &[
            "Sit with knees bent and feet off ground",
            "Lean back slightly",
            "Hold weight at chest",
            "Rotate torso side to side",
            "Touch weight to ground on each side",
        ],
    },
];

pub static WORKOUT_PLANS: &[WorkoutPlan] = &[
    WorkoutPlan {
        id: "beginner-full-body",
        name: "Beginner Full Body",
        description: "Perfect for those new to fitness. Build strength and endurance with full-body workouts.",
        level: Level::Beginner,
        days_per_week: 3,
        duration: "45 min",
        goal: "Build Foundation",
        days: &[
            PlanDay {
                day: DayOfWeek::Monday,
                name: "Full Body A",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Squats",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Push-ups",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "8-10",
                        },
                    },
                    PlanExercise {
                        name: "Bent-Over Rows",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Plank",
                        prescription: Prescription::Duration("30-45 sec"),
                    },
                    PlanExercise {
                        name: "Walking",
                        prescription: Prescription::Duration("10 min"),
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Wednesday,
                name: "Full Body B",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Lunges",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10-12 each leg",
                        },
                    },
                    PlanExercise {
                        name: "Dumbbell Press",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Lat Pulldowns",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Russian Twists",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "15 each side",
                        },
                    },
                    PlanExercise {
                        name: "Light Cardio",
                        prescription: Prescription::Duration("10 min"),
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Friday,
                name: "Full Body C",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Leg Press",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12-15",
                        },
                    },
                    PlanExercise {
                        name: "Bench Press",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "8-10",
                        },
                    },
                    PlanExercise {
                        name: "Pull-ups (Assisted)",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "6-8",
                        },
                    },
                    PlanExercise {
                        name: "Crunches",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "15-20",
                        },
                    },
                    PlanExercise {
                        name: "Stretching",
                        prescription: Prescription::Duration("10 min"),
                    },
                ],
            },
        ],
    },
    WorkoutPlan {
        id: "fat-burning",
        name: "Fat Burning",
        description: "High-intensity program focused on burning calories and losing fat.",
        level: Level::Intermediate,
        days_per_week: 5,
        duration: "45-60 min",
        goal: "Fat Loss",
        days: &[
            PlanDay {
                day: DayOfWeek::Monday,
                name: "HIIT Cardio",
                workout_type: WorkoutType::Cardio,
                exercises: &[
                    PlanExercise {
                        name: "Warm-up Jog",
                        prescription: Prescription::Duration("5 min"),
                    },
                    PlanExercise {
                        name: "Sprint Intervals",
                        prescription: Prescription::Duration("20 min"),
                    },
                    PlanExercise {
                        name: "Jump Rope",
                        prescription: Prescription::Duration("5 min"),
                    },
                    PlanExercise {
                        name: "Burpees",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10",
                        },
                    },
                    PlanExercise {
                        name: "Cool Down",
                        prescription: Prescription::Duration("5 min"),
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Tuesday,
                name: "Upper Body Circuit",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Push-ups",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "15",
                        },
                    },
                    PlanExercise {
                        name: "Dumbbell Rows",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Shoulder Press",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Tricep Dips",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Bicep Curls",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "15",
                        },
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Wednesday,
                name: "Cardio & Core",
                workout_type: WorkoutType::Cardio,
                exercises: &[
                    PlanExercise {
                        name: "Running",
                        prescription: Prescription::Duration("25 min"),
                    },
                    PlanExercise {
                        name: "Mountain Climbers",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "20",
                        },
                    },
                    PlanExercise {
                        name: "Plank",
                        prescription: Prescription::Duration("60 sec"),
                    },
                    PlanExercise {
                        name: "Russian Twists",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "20 each side",
                        },
                    },
                    PlanExercise {
                        name: "Leg Raises",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "15",
                        },
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Thursday,
                name: "Lower Body",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Squats",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "15",
                        },
                    },
                    PlanExercise {
                        name: "Lunges",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "12 each leg",
                        },
                    },
                    PlanExercise {
                        name: "Deadlifts",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10",
                        },
                    },
                    PlanExercise {
                        name: "Calf Raises",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "20",
                        },
                    },
                    PlanExercise {
                        name: "Wall Sit",
                        prescription: Prescription::Duration("45 sec"),
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Friday,
                name: "Full Body HIIT",
                workout_type: WorkoutType::Cardio,
                exercises: &[
                    PlanExercise {
                        name: "Warm-up",
                        prescription: Prescription::Duration("5 min"),
                    },
                    PlanExercise {
                        name: "Burpees",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "15",
                        },
                    },
                    PlanExercise {
                        name: "Kettlebell Swings",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "20",
                        },
                    },
                    PlanExercise {
                        name: "Box Jumps",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Battle Ropes",
                        prescription: Prescription::Duration("30 sec x 4"),
                    },
                    PlanExercise {
                        name: "Cool Down Stretch",
                        prescription: Prescription::Duration("10 min"),
                    },
                ],
            },
        ],
    },
    WorkoutPlan {
        id: "muscle-gain",
        name: "Muscle Gain",
        description: "Build lean muscle mass with split training focused on different muscle groups.",
        level: Level::Intermediate,
        days_per_week: 4,
        duration: "60 min",
        goal: "Build Muscle",
        days: &[
            PlanDay {
                day: DayOfWeek::Monday,
                name: "Chest & Triceps",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Bench Press",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "8-10",
                        },
                    },
                    PlanExercise {
                        name: "Incline Dumbbell Press",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Dumbbell Flyes",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Tricep Dips",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Overhead Tricep Extension",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Cable Pushdowns",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "15",
                        },
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Tuesday,
                name: "Back & Biceps",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Pull-ups",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "8-10",
                        },
                    },
                    PlanExercise {
                        name: "Bent-Over Rows",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Lat Pulldowns",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Seated Cable Rows",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Barbell Curls",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "10-12",
                        },
                    },
                    PlanExercise {
                        name: "Hammer Curls",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Thursday,
                name: "Legs",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Squats",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "8-10",
                        },
                    },
                    PlanExercise {
                        name: "Leg Press",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Romanian Deadlifts",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "10",
                        },
                    },
                    PlanExercise {
                        name: "Leg Curls",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Leg Extensions",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Calf Raises",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "15-20",
                        },
                    },
                ],
            },
            PlanDay {
                day: DayOfWeek::Friday,
                name: "Shoulders & Abs",
                workout_type: WorkoutType::Strength,
                exercises: &[
                    PlanExercise {
                        name: "Military Press",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "8-10",
                        },
                    },
                    PlanExercise {
                        name: "Lateral Raises",
                        prescription: Prescription::SetsReps {
                            sets: "4",
                            reps: "12-15",
                        },
                    },
                    PlanExercise {
                        name: "Front Raises",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Rear Delt Flyes",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "12",
                        },
                    },
                    PlanExercise {
                        name: "Plank",
                        prescription: Prescription::Duration("60 sec x 3"),
                    },
                    PlanExercise {
                        name: "Russian Twists",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "20 each side",
                        },
                    },
                    PlanExercise {
                        name: "Leg Raises",
                        prescription: Prescription::SetsReps {
                            sets: "3",
                            reps: "15",
                        },
                    },
                ],
            },
        ],
    },
];

pub static FOODS: &[FoodItem] = &[
    FoodItem {
        id: "1",
        name: "Chicken Breast",
        calories: 165.0,
        protein: 31.0,
        carbs: 0.0,
        fat: 3.6,
        serving: "100g",
    },
    FoodItem {
        id: "2",
        name: "Brown Rice",
        calories: 112.0,
        protein: 2.6,
        carbs: 24.0,
        fat: 0.9,
        serving: "100g",
    },
    FoodItem {
        id: "3",
        name: "Broccoli",
        calories: 34.0,
        protein: 2.8,
        carbs: 7.0,
        fat: 0.4,
        serving: "100g",
    },
    FoodItem {
        id: "4",
        name: "Salmon",
        calories: 208.0,
        protein: 20.0,
        carbs: 0.0,
        fat: 13.0,
        serving: "100g",
    },
    FoodItem {
        id: "5",
        name: "Sweet Potato",
        calories: 86.0,
        protein: 1.6,
        carbs: 20.0,
        fat: 0.1,
        serving: "100g",
    },
    FoodItem {
        id: "6",
        name: "Eggs",
        calories: 155.0,
        protein: 13.0,
        carbs: 1.1,
        fat: 11.0,
        serving: "2 large",
    },
    FoodItem {
        id: "7",
        name: "Greek Yogurt",
        calories: 59.0,
        protein: 10.0,
        carbs: 3.6,
        fat: 0.4,
        serving: "100g",
    },
    FoodItem {
        id: "8",
        name: "Oatmeal",
        calories: 71.0,
        protein: 2.5,
        carbs: 12.0,
        fat: 1.5,
        serving: "100g",
    },
    FoodItem {
        id: "9",
        name: "Almonds",
        calories: 579.0,
        protein: 21.0,
        carbs: 22.0,
        fat: 50.0,
        serving: "100g",
    },
    FoodItem {
        id: "10",
        name: "Banana",
        calories: 89.0,
        protein: 1.1,
        carbs: 23.0,
        fat: 0.3,
        serving: "1 medium",
    },
    FoodItem {
        id: "11",
        name: "Avocado",
        calories: 160.0,
        protein: 2.0,
        carbs: 9.0,
        fat: 15.0,
        serving: "100g",
    },
    FoodItem {
        id: "12",
        name: "Quinoa",
        calories: 120.0,
        protein: 4.4,
        carbs: 21.0,
        fat: 1.9,
        serving: "100g",
    },
    FoodItem {
        id: "13",
        name: "Tuna",
        calories: 132.0,
        protein: 28.0,
        carbs: 0.0,
        fat: 1.3,
        serving: "100g",
    },
    FoodItem {
        id: "14",
        name: "Spinach",
        calories: 23.0,
        protein: 2.9,
        carbs: 3.6,
        fat: 0.4,
        serving: "100g",
    },
    FoodItem {
        id: "15",
        name: "Apple",
        calories: 52.0,
        protein: 0.3,
        carbs: 14.0,
        fat: 0.2,
        serving: "1 medium",
    },
    FoodItem {
        id: "16",
        name: "Beef (Lean)",
        calories: 250.0,
        protein: 26.0,
        carbs: 0.0,
        fat: 15.0,
        serving: "100g",
    },
    FoodItem {
        id: "17",
        name: "Pasta (Whole Wheat)",
        calories: 124.0,
        protein: 5.3,
        carbs: 26.0,
        fat: 0.5,
        serving: "100g",
    },
    FoodItem {
        id: "18",
        name: "Cottage Cheese",
        calories: 98.0,
        protein: 11.0,
        carbs: 3.4,
        fat: 4.3,
        serving: "100g",
    },
    FoodItem {
        id: "19",
        name: "Peanut Butter",
        calories: 588.0,
        protein: 25.0,
        carbs: 20.0,
        fat: 50.0,
        serving: "100g",
    },
    FoodItem {
        id: "20",
        name: "Orange",
        calories: 47.0,
        protein: 0.9,
        carbs: 12.0,
        fat: 0.1,
        serving: "1 medium",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_eq!(
            EXERCISES.iter().map(|e| e.id).collect::<HashSet<_>>().len(),
            EXERCISES.len()
        );
        assert_eq!(
            WORKOUT_PLANS.iter().map(|p| p.id).collect::<HashSet<_>>().len(),
            WORKOUT_PLANS.len()
        );
        assert_eq!(
            FOODS.iter().map(|f| f.id).collect::<HashSet<_>>().len(),
            FOODS.len()
        );
    }

    #[test]
    fn test_plan_days_are_distinct_weekdays() {
        for plan in WORKOUT_PLANS {
            assert_eq!(
                plan.days.iter().map(|d| d.day).collect::<HashSet<_>>().len(),
                plan.days.len(),
                "{}",
                plan.id
            );
            assert!(plan.days.iter().all(|d| !d.exercises.is_empty()));
        }
    }
}
