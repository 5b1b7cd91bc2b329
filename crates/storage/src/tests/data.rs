use calroast_domain as domain;

pub static WORKOUTS: std::sync::LazyLock<Vec<domain::Workout>> =
    std::sync::LazyLock::new(|| vec![WORKOUT.clone(), WORKOUT_2.clone()]);

pub static WORKOUT: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: "1712345678901".into(),
        name: domain::Name::new("Morning Run").unwrap(),
        day: domain::DayOfWeek::Monday,
        time: domain::ScheduledTime::new("07:00 AM").unwrap(),
        workout_type: domain::WorkoutType::Cardio,
        date: None,
    });

pub static WORKOUT_2: std::sync::LazyLock<domain::Workout> =
    std::sync::LazyLock::new(|| domain::Workout {
        id: "5b0d4f7e-9c1a-4d0e-8f57-2a8e3c6b1d90".into(),
        name: domain::Name::new("Upper Body").unwrap(),
        day: domain::DayOfWeek::Thursday,
        time: domain::ScheduledTime::new("06:30 PM").unwrap(),
        workout_type: domain::WorkoutType::Strength,
        date: Some("2026-10-15".to_string()),
    });

pub const WORKOUTS_JSON: &str = r#"[{"id":"1712345678901","name":"Morning Run","dayOfWeek":"monday","time":"07:00 AM","type":"cardio"},{"id":"5b0d4f7e-9c1a-4d0e-8f57-2a8e3c6b1d90","name":"Upper Body","dayOfWeek":"thursday","time":"06:30 PM","type":"strength","date":"2026-10-15"}]"#;
