//! VITAL Storage - Storage Trait and In-Memory Implementation
//!
//! Defines the storage abstraction for VITAL entities. Every operation is
//! scoped by user id; cross-user reads are impossible through this interface.
//! The in-memory implementation backs the API by default and the test suites.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;
use vital_core::{
    BodyMeasurement, DateRange, EntityKind, Exercise, ExerciseType, Habit, HabitLog, JournalEntry,
    LifeAssessment, PersonalRecord, Sex, StorageError, UserId, UserProfile, VitalError,
    VitalResult, Workout, WorkoutTemplate,
};

// ============================================================================
// UPDATE TYPES
// ============================================================================

/// Update payload for habits.
#[derive(Debug, Clone, Default)]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub target_frequency: Option<String>,
}

/// Update payload for habit logs.
#[derive(Debug, Clone, Default)]
pub struct HabitLogUpdate {
    pub completed: Option<bool>,
    /// `Some(None)` clears the measured value.
    pub value: Option<Option<f64>>,
}

/// Update payload for workouts.
#[derive(Debug, Clone, Default)]
pub struct WorkoutUpdate {
    pub title: Option<String>,
    pub exercises: Option<serde_json::Value>,
    pub feeling: Option<i16>,
    pub comments: Option<String>,
}

/// Update payload for workout templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub exercises: Option<serde_json::Value>,
}

/// Update payload for exercise library entries.
#[derive(Debug, Clone, Default)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub exercise_type: Option<ExerciseType>,
    pub muscle_group: Option<String>,
}

/// Update payload for user profiles.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub height_cm: Option<f64>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<Sex>,
}

// ============================================================================
// STORAGE TRAIT
// ============================================================================

/// Storage trait for VITAL entities.
///
/// All list operations return only the named user's rows. Deletes are
/// idempotent on missing ids only where documented; by default a missing id
/// is `StorageError::NotFound`.
pub trait EventStore: Send + Sync {
    // === Habit Operations ===

    /// Insert a new habit.
    fn habit_insert(&self, habit: &Habit) -> VitalResult<()>;

    /// Get a habit by id, scoped to its owner.
    fn habit_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<Habit>>;

    /// Update a habit.
    fn habit_update(&self, user_id: UserId, id: Uuid, update: HabitUpdate) -> VitalResult<()>;

    /// Delete a habit and all of its logs.
    fn habit_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List a user's habits, oldest first.
    fn habit_list(&self, user_id: UserId) -> VitalResult<Vec<Habit>>;

    /// Count a user's habits.
    fn habit_count(&self, user_id: UserId) -> VitalResult<usize>;

    // === Habit Log Operations ===

    /// Insert a new habit log.
    ///
    /// Enforces the uniqueness invariant: at most one log per
    /// (user, habit, calendar day). A second insert for the same triple is
    /// `StorageError::Duplicate`.
    fn habit_log_insert(&self, log: &HabitLog) -> VitalResult<()>;

    /// Get a log by id, scoped to its owner.
    fn habit_log_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<HabitLog>>;

    /// Update a log's completion flag or measured value.
    fn habit_log_update(&self, user_id: UserId, id: Uuid, update: HabitLogUpdate)
        -> VitalResult<()>;

    /// Delete a log.
    fn habit_log_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List a user's logs with dates inside `range`, oldest first.
    fn habit_log_list_in_range(&self, user_id: UserId, range: DateRange)
        -> VitalResult<Vec<HabitLog>>;

    /// List a user's logs for one calendar day.
    fn habit_log_list_on(&self, user_id: UserId, date: NaiveDate) -> VitalResult<Vec<HabitLog>>;

    // === Workout Operations ===

    /// Insert a new workout.
    fn workout_insert(&self, workout: &Workout) -> VitalResult<()>;

    /// Get a workout by id, scoped to its owner.
    fn workout_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<Workout>>;

    /// Update a workout.
    fn workout_update(&self, user_id: UserId, id: Uuid, update: WorkoutUpdate) -> VitalResult<()>;

    /// Delete a workout.
    fn workout_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List a user's workouts, newest first.
    fn workout_list(&self, user_id: UserId) -> VitalResult<Vec<Workout>>;

    /// List a user's workouts with session dates inside `range`.
    fn workout_list_in_range(&self, user_id: UserId, range: DateRange) -> VitalResult<Vec<Workout>>;

    // === Workout Template Operations ===

    /// Insert a new template.
    fn template_insert(&self, template: &WorkoutTemplate) -> VitalResult<()>;

    /// Get a template by id, scoped to its owner.
    fn template_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<WorkoutTemplate>>;

    /// Update a template.
    fn template_update(&self, user_id: UserId, id: Uuid, update: TemplateUpdate) -> VitalResult<()>;

    /// Delete a template.
    fn template_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List a user's templates, oldest first.
    fn template_list(&self, user_id: UserId) -> VitalResult<Vec<WorkoutTemplate>>;

    // === Exercise Library Operations ===

    /// Insert a new library entry.
    ///
    /// Enforces the uniqueness invariant: one name per owner. A second entry
    /// with the same (owner, name) pair is `StorageError::Duplicate`.
    fn exercise_insert(&self, exercise: &Exercise) -> VitalResult<()>;

    /// Get a library entry visible to `user_id`: their own or a public one.
    fn exercise_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<Exercise>>;

    /// Update a library entry. Only the owner can modify an entry; public
    /// standard exercises are immutable through this interface.
    fn exercise_update(&self, user_id: UserId, id: Uuid, update: ExerciseUpdate) -> VitalResult<()>;

    /// Delete a library entry. Owner-only, like `exercise_update`.
    fn exercise_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List the entries visible to `user_id` (own plus public), sorted by
    /// name.
    fn exercise_list(&self, user_id: UserId) -> VitalResult<Vec<Exercise>>;

    // === Personal Record Operations ===

    /// Insert a new PR entry.
    fn record_insert(&self, record: &PersonalRecord) -> VitalResult<()>;

    /// Delete a PR entry.
    fn record_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List all of a user's PR entries.
    fn record_list(&self, user_id: UserId) -> VitalResult<Vec<PersonalRecord>>;

    // === Body Measurement Operations ===

    /// Insert a new measurement.
    fn measurement_insert(&self, measurement: &BodyMeasurement) -> VitalResult<()>;

    /// Delete a measurement.
    fn measurement_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// The `limit` most recent measurements, newest first. Ties on the date
    /// break toward the most recently inserted row.
    fn measurement_list_recent(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> VitalResult<Vec<BodyMeasurement>>;

    // === Journal Operations ===

    /// Insert a new journal entry.
    fn journal_insert(&self, entry: &JournalEntry) -> VitalResult<()>;

    /// Delete a journal entry.
    fn journal_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List a user's journal entries, newest first.
    fn journal_list(&self, user_id: UserId) -> VitalResult<Vec<JournalEntry>>;

    // === Life Assessment Operations ===

    /// Insert a new assessment.
    fn assessment_insert(&self, assessment: &LifeAssessment) -> VitalResult<()>;

    /// Delete an assessment.
    fn assessment_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()>;

    /// List a user's assessments, newest first by date.
    fn assessment_list(&self, user_id: UserId) -> VitalResult<Vec<LifeAssessment>>;

    // === Profile Operations ===

    /// Get a user's profile, if one has been created.
    fn profile_get(&self, user_id: UserId) -> VitalResult<Option<UserProfile>>;

    /// Apply `update` to the user's profile, creating an empty profile first
    /// when none exists. Returns the stored profile.
    fn profile_upsert(&self, user_id: UserId, update: ProfileUpdate) -> VitalResult<UserProfile>;

    // === Health ===

    /// Whether the store is reachable; used by the readiness probe.
    fn is_ready(&self) -> bool;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// In-memory store backed by per-entity `RwLock`ed maps.
///
/// Lock poisoning surfaces as `StorageError::LockPoisoned` rather than a
/// panic, so one crashed writer cannot take the whole API down.
#[derive(Debug)]
pub struct InMemoryStore {
    habits: Arc<RwLock<HashMap<Uuid, Habit>>>,
    habit_logs: Arc<RwLock<HashMap<Uuid, HabitLog>>>,
    workouts: Arc<RwLock<HashMap<Uuid, Workout>>>,
    templates: Arc<RwLock<HashMap<Uuid, WorkoutTemplate>>>,
    exercises: Arc<RwLock<HashMap<Uuid, Exercise>>>,
    records: Arc<RwLock<HashMap<Uuid, PersonalRecord>>>,
    measurements: Arc<RwLock<HashMap<Uuid, BodyMeasurement>>>,
    journal: Arc<RwLock<HashMap<Uuid, JournalEntry>>>,
    assessments: Arc<RwLock<HashMap<Uuid, LifeAssessment>>>,
    profiles: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

/// The public standard exercise library, seeded into every new store so a
/// fresh install has something to pick from.
pub fn standard_exercises() -> Vec<Exercise> {
    use ExerciseType::{Calisthenics, Cardio, Strength};

    let catalog: &[(&str, ExerciseType, &str)] = &[
        ("Bench Press", Strength, "Chest"),
        ("Incline Dumbbell Press", Strength, "Chest"),
        ("Push-up", Calisthenics, "Chest"),
        ("Lat Pulldown", Strength, "Back"),
        ("Barbell Row", Strength, "Back"),
        ("Pull-up", Calisthenics, "Back"),
        ("Deadlift", Strength, "Back/Legs"),
        ("Back Squat", Strength, "Legs"),
        ("Front Squat", Strength, "Legs"),
        ("Leg Press", Strength, "Legs"),
        ("Lunge", Strength, "Legs"),
        ("Hip Thrust", Strength, "Glutes"),
        ("Standing Calf Raise", Strength, "Calves"),
        ("Overhead Press", Strength, "Shoulders"),
        ("Push Press", Strength, "Shoulders"),
        ("Lateral Raise", Strength, "Shoulders"),
        ("Barbell Curl", Strength, "Biceps"),
        ("Triceps Pushdown", Strength, "Triceps"),
        ("Dips", Calisthenics, "Triceps/Chest"),
        ("Snatch", Strength, "Full Body"),
        ("Clean & Jerk", Strength, "Full Body"),
        ("Thruster", Strength, "Full Body"),
        ("Running", Cardio, "Full Body"),
        ("Rowing", Cardio, "Full Body"),
        ("Cycling", Cardio, "Legs"),
    ];

    catalog
        .iter()
        .map(|(name, exercise_type, muscle_group)| {
            Exercise::new(None, name, *exercise_type).with_muscle_group(muscle_group)
        })
        .collect()
}

fn read_guard<T>(lock: &RwLock<T>) -> VitalResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| VitalError::Storage(StorageError::LockPoisoned))
}

fn write_guard<T>(lock: &RwLock<T>) -> VitalResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| VitalError::Storage(StorageError::LockPoisoned))
}

fn not_found(entity_kind: EntityKind, id: Uuid) -> VitalError {
    VitalError::Storage(StorageError::NotFound { entity_kind, id })
}

fn already_exists(entity_kind: EntityKind) -> VitalError {
    VitalError::Storage(StorageError::InsertFailed {
        entity_kind,
        reason: "already exists".to_string(),
    })
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new store pre-seeded with the standard exercise library.
    pub fn new() -> Self {
        let exercises: HashMap<Uuid, Exercise> = standard_exercises()
            .into_iter()
            .map(|e| (e.exercise_id, e))
            .collect();
        Self {
            habits: Arc::default(),
            habit_logs: Arc::default(),
            workouts: Arc::default(),
            templates: Arc::default(),
            exercises: Arc::new(RwLock::new(exercises)),
            records: Arc::default(),
            measurements: Arc::default(),
            journal: Arc::default(),
            assessments: Arc::default(),
            profiles: Arc::default(),
        }
    }

    /// Clear all stored data, including the seeded exercise library.
    pub fn clear(&self) -> VitalResult<()> {
        write_guard(&self.habits)?.clear();
        write_guard(&self.habit_logs)?.clear();
        write_guard(&self.workouts)?.clear();
        write_guard(&self.templates)?.clear();
        write_guard(&self.exercises)?.clear();
        write_guard(&self.records)?.clear();
        write_guard(&self.measurements)?.clear();
        write_guard(&self.journal)?.clear();
        write_guard(&self.assessments)?.clear();
        write_guard(&self.profiles)?.clear();
        Ok(())
    }
}

impl EventStore for InMemoryStore {
    // === Habit Operations ===

    fn habit_insert(&self, habit: &Habit) -> VitalResult<()> {
        let mut habits = write_guard(&self.habits)?;
        if habits.contains_key(&habit.habit_id) {
            return Err(already_exists(EntityKind::Habit));
        }
        habits.insert(habit.habit_id, habit.clone());
        Ok(())
    }

    fn habit_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<Habit>> {
        let habits = read_guard(&self.habits)?;
        Ok(habits.get(&id).filter(|h| h.user_id == user_id).cloned())
    }

    fn habit_update(&self, user_id: UserId, id: Uuid, update: HabitUpdate) -> VitalResult<()> {
        let mut habits = write_guard(&self.habits)?;
        let habit = habits
            .get_mut(&id)
            .filter(|h| h.user_id == user_id)
            .ok_or_else(|| not_found(EntityKind::Habit, id))?;

        if let Some(name) = update.name {
            habit.name = name;
        }
        if let Some(category) = update.category {
            habit.category = category;
        }
        if let Some(target_frequency) = update.target_frequency {
            habit.target_frequency = target_frequency;
        }
        Ok(())
    }

    fn habit_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut habits = write_guard(&self.habits)?;
        match habits.get(&id) {
            Some(h) if h.user_id == user_id => {
                habits.remove(&id);
            }
            _ => return Err(not_found(EntityKind::Habit, id)),
        }
        // Logs for a deleted habit go with it.
        write_guard(&self.habit_logs)?.retain(|_, log| log.habit_id != id);
        Ok(())
    }

    fn habit_list(&self, user_id: UserId) -> VitalResult<Vec<Habit>> {
        let habits = read_guard(&self.habits)?;
        let mut result: Vec<Habit> = habits
            .values()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by_key(|h| h.habit_id);
        Ok(result)
    }

    fn habit_count(&self, user_id: UserId) -> VitalResult<usize> {
        let habits = read_guard(&self.habits)?;
        Ok(habits.values().filter(|h| h.user_id == user_id).count())
    }

    // === Habit Log Operations ===

    fn habit_log_insert(&self, log: &HabitLog) -> VitalResult<()> {
        let mut logs = write_guard(&self.habit_logs)?;
        if logs.contains_key(&log.log_id) {
            return Err(already_exists(EntityKind::HabitLog));
        }
        let duplicate = logs.values().any(|existing| {
            existing.user_id == log.user_id
                && existing.habit_id == log.habit_id
                && existing.date == log.date
        });
        if duplicate {
            return Err(VitalError::Storage(StorageError::Duplicate {
                entity_kind: EntityKind::HabitLog,
                reason: format!("habit {} already logged on {}", log.habit_id, log.date),
            }));
        }
        logs.insert(log.log_id, log.clone());
        Ok(())
    }

    fn habit_log_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<HabitLog>> {
        let logs = read_guard(&self.habit_logs)?;
        Ok(logs.get(&id).filter(|l| l.user_id == user_id).cloned())
    }

    fn habit_log_update(
        &self,
        user_id: UserId,
        id: Uuid,
        update: HabitLogUpdate,
    ) -> VitalResult<()> {
        let mut logs = write_guard(&self.habit_logs)?;
        let log = logs
            .get_mut(&id)
            .filter(|l| l.user_id == user_id)
            .ok_or_else(|| not_found(EntityKind::HabitLog, id))?;

        if let Some(completed) = update.completed {
            log.completed = completed;
        }
        if let Some(value) = update.value {
            log.value = value;
        }
        Ok(())
    }

    fn habit_log_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut logs = write_guard(&self.habit_logs)?;
        match logs.get(&id) {
            Some(l) if l.user_id == user_id => {
                logs.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::HabitLog, id)),
        }
    }

    fn habit_log_list_in_range(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> VitalResult<Vec<HabitLog>> {
        let logs = read_guard(&self.habit_logs)?;
        let mut result: Vec<HabitLog> = logs
            .values()
            .filter(|l| l.user_id == user_id && range.contains(l.date))
            .cloned()
            .collect();
        result.sort_by_key(|l| (l.date, l.log_id));
        Ok(result)
    }

    fn habit_log_list_on(&self, user_id: UserId, date: NaiveDate) -> VitalResult<Vec<HabitLog>> {
        let logs = read_guard(&self.habit_logs)?;
        let mut result: Vec<HabitLog> = logs
            .values()
            .filter(|l| l.user_id == user_id && l.date == date)
            .cloned()
            .collect();
        result.sort_by_key(|l| l.log_id);
        Ok(result)
    }

    // === Workout Operations ===

    fn workout_insert(&self, workout: &Workout) -> VitalResult<()> {
        let mut workouts = write_guard(&self.workouts)?;
        if workouts.contains_key(&workout.workout_id) {
            return Err(already_exists(EntityKind::Workout));
        }
        workouts.insert(workout.workout_id, workout.clone());
        Ok(())
    }

    fn workout_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<Workout>> {
        let workouts = read_guard(&self.workouts)?;
        Ok(workouts.get(&id).filter(|w| w.user_id == user_id).cloned())
    }

    fn workout_update(&self, user_id: UserId, id: Uuid, update: WorkoutUpdate) -> VitalResult<()> {
        let mut workouts = write_guard(&self.workouts)?;
        let workout = workouts
            .get_mut(&id)
            .filter(|w| w.user_id == user_id)
            .ok_or_else(|| not_found(EntityKind::Workout, id))?;

        if let Some(title) = update.title {
            workout.title = title;
        }
        if let Some(exercises) = update.exercises {
            workout.exercises = exercises;
        }
        if let Some(feeling) = update.feeling {
            workout.feeling = feeling;
        }
        if let Some(comments) = update.comments {
            workout.comments = comments;
        }
        Ok(())
    }

    fn workout_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut workouts = write_guard(&self.workouts)?;
        match workouts.get(&id) {
            Some(w) if w.user_id == user_id => {
                workouts.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::Workout, id)),
        }
    }

    fn workout_list(&self, user_id: UserId) -> VitalResult<Vec<Workout>> {
        let workouts = read_guard(&self.workouts)?;
        let mut result: Vec<Workout> = workouts
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(result)
    }

    fn workout_list_in_range(
        &self,
        user_id: UserId,
        range: DateRange,
    ) -> VitalResult<Vec<Workout>> {
        let workouts = read_guard(&self.workouts)?;
        let mut result: Vec<Workout> = workouts
            .values()
            .filter(|w| w.user_id == user_id && range.contains(w.date()))
            .cloned()
            .collect();
        result.sort_by_key(|w| (w.occurred_at, w.workout_id));
        Ok(result)
    }

    // === Workout Template Operations ===

    fn template_insert(&self, template: &WorkoutTemplate) -> VitalResult<()> {
        let mut templates = write_guard(&self.templates)?;
        if templates.contains_key(&template.template_id) {
            return Err(already_exists(EntityKind::WorkoutTemplate));
        }
        templates.insert(template.template_id, template.clone());
        Ok(())
    }

    fn template_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<WorkoutTemplate>> {
        let templates = read_guard(&self.templates)?;
        Ok(templates.get(&id).filter(|t| t.user_id == user_id).cloned())
    }

    fn template_update(
        &self,
        user_id: UserId,
        id: Uuid,
        update: TemplateUpdate,
    ) -> VitalResult<()> {
        let mut templates = write_guard(&self.templates)?;
        let template = templates
            .get_mut(&id)
            .filter(|t| t.user_id == user_id)
            .ok_or_else(|| not_found(EntityKind::WorkoutTemplate, id))?;

        if let Some(name) = update.name {
            template.name = name;
        }
        if let Some(exercises) = update.exercises {
            template.exercises = exercises;
        }
        Ok(())
    }

    fn template_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut templates = write_guard(&self.templates)?;
        match templates.get(&id) {
            Some(t) if t.user_id == user_id => {
                templates.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::WorkoutTemplate, id)),
        }
    }

    fn template_list(&self, user_id: UserId) -> VitalResult<Vec<WorkoutTemplate>> {
        let templates = read_guard(&self.templates)?;
        let mut result: Vec<WorkoutTemplate> = templates
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by_key(|t| t.template_id);
        Ok(result)
    }

    // === Exercise Library Operations ===

    fn exercise_insert(&self, exercise: &Exercise) -> VitalResult<()> {
        let mut exercises = write_guard(&self.exercises)?;
        if exercises.contains_key(&exercise.exercise_id) {
            return Err(already_exists(EntityKind::Exercise));
        }
        let duplicate = exercises
            .values()
            .any(|existing| existing.owner == exercise.owner && existing.name == exercise.name);
        if duplicate {
            return Err(VitalError::Storage(StorageError::Duplicate {
                entity_kind: EntityKind::Exercise,
                reason: format!("exercise '{}' already exists", exercise.name),
            }));
        }
        exercises.insert(exercise.exercise_id, exercise.clone());
        Ok(())
    }

    fn exercise_get(&self, user_id: UserId, id: Uuid) -> VitalResult<Option<Exercise>> {
        let exercises = read_guard(&self.exercises)?;
        Ok(exercises
            .get(&id)
            .filter(|e| e.visible_to(user_id))
            .cloned())
    }

    fn exercise_update(
        &self,
        user_id: UserId,
        id: Uuid,
        update: ExerciseUpdate,
    ) -> VitalResult<()> {
        let mut exercises = write_guard(&self.exercises)?;
        let exercise = exercises
            .get_mut(&id)
            .filter(|e| e.owner == Some(user_id))
            .ok_or_else(|| not_found(EntityKind::Exercise, id))?;

        if let Some(name) = update.name {
            exercise.name = name;
        }
        if let Some(exercise_type) = update.exercise_type {
            exercise.exercise_type = exercise_type;
        }
        if let Some(muscle_group) = update.muscle_group {
            exercise.muscle_group = muscle_group;
        }
        Ok(())
    }

    fn exercise_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut exercises = write_guard(&self.exercises)?;
        match exercises.get(&id) {
            Some(e) if e.owner == Some(user_id) => {
                exercises.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::Exercise, id)),
        }
    }

    fn exercise_list(&self, user_id: UserId) -> VitalResult<Vec<Exercise>> {
        let exercises = read_guard(&self.exercises)?;
        let mut result: Vec<Exercise> = exercises
            .values()
            .filter(|e| e.visible_to(user_id))
            .cloned()
            .collect();
        result.sort_by(|a, b| (&a.name, a.exercise_id).cmp(&(&b.name, b.exercise_id)));
        Ok(result)
    }

    // === Personal Record Operations ===

    fn record_insert(&self, record: &PersonalRecord) -> VitalResult<()> {
        let mut records = write_guard(&self.records)?;
        if records.contains_key(&record.record_id) {
            return Err(already_exists(EntityKind::PersonalRecord));
        }
        records.insert(record.record_id, record.clone());
        Ok(())
    }

    fn record_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut records = write_guard(&self.records)?;
        match records.get(&id) {
            Some(r) if r.user_id == user_id => {
                records.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::PersonalRecord, id)),
        }
    }

    fn record_list(&self, user_id: UserId) -> VitalResult<Vec<PersonalRecord>> {
        let records = read_guard(&self.records)?;
        let mut result: Vec<PersonalRecord> = records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by_key(|r| r.record_id);
        Ok(result)
    }

    // === Body Measurement Operations ===

    fn measurement_insert(&self, measurement: &BodyMeasurement) -> VitalResult<()> {
        let mut measurements = write_guard(&self.measurements)?;
        if measurements.contains_key(&measurement.measurement_id) {
            return Err(already_exists(EntityKind::BodyMeasurement));
        }
        measurements.insert(measurement.measurement_id, measurement.clone());
        Ok(())
    }

    fn measurement_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut measurements = write_guard(&self.measurements)?;
        match measurements.get(&id) {
            Some(m) if m.user_id == user_id => {
                measurements.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::BodyMeasurement, id)),
        }
    }

    fn measurement_list_recent(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> VitalResult<Vec<BodyMeasurement>> {
        let measurements = read_guard(&self.measurements)?;
        let mut result: Vec<BodyMeasurement> = measurements
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| (b.date, b.measurement_id).cmp(&(a.date, a.measurement_id)));
        result.truncate(limit);
        Ok(result)
    }

    // === Journal Operations ===

    fn journal_insert(&self, entry: &JournalEntry) -> VitalResult<()> {
        let mut journal = write_guard(&self.journal)?;
        if journal.contains_key(&entry.entry_id) {
            return Err(already_exists(EntityKind::JournalEntry));
        }
        journal.insert(entry.entry_id, entry.clone());
        Ok(())
    }

    fn journal_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut journal = write_guard(&self.journal)?;
        match journal.get(&id) {
            Some(e) if e.user_id == user_id => {
                journal.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::JournalEntry, id)),
        }
    }

    fn journal_list(&self, user_id: UserId) -> VitalResult<Vec<JournalEntry>> {
        let journal = read_guard(&self.journal)?;
        let mut result: Vec<JournalEntry> = journal
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| (b.created_at, b.entry_id).cmp(&(a.created_at, a.entry_id)));
        Ok(result)
    }

    // === Life Assessment Operations ===

    fn assessment_insert(&self, assessment: &LifeAssessment) -> VitalResult<()> {
        let mut assessments = write_guard(&self.assessments)?;
        if assessments.contains_key(&assessment.assessment_id) {
            return Err(already_exists(EntityKind::LifeAssessment));
        }
        assessments.insert(assessment.assessment_id, assessment.clone());
        Ok(())
    }

    fn assessment_delete(&self, user_id: UserId, id: Uuid) -> VitalResult<()> {
        let mut assessments = write_guard(&self.assessments)?;
        match assessments.get(&id) {
            Some(a) if a.user_id == user_id => {
                assessments.remove(&id);
                Ok(())
            }
            _ => Err(not_found(EntityKind::LifeAssessment, id)),
        }
    }

    fn assessment_list(&self, user_id: UserId) -> VitalResult<Vec<LifeAssessment>> {
        let assessments = read_guard(&self.assessments)?;
        let mut result: Vec<LifeAssessment> = assessments
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| (b.date, b.assessment_id).cmp(&(a.date, a.assessment_id)));
        Ok(result)
    }

    // === Profile Operations ===

    fn profile_get(&self, user_id: UserId) -> VitalResult<Option<UserProfile>> {
        let profiles = read_guard(&self.profiles)?;
        Ok(profiles.get(&user_id).cloned())
    }

    fn profile_upsert(&self, user_id: UserId, update: ProfileUpdate) -> VitalResult<UserProfile> {
        let mut profiles = write_guard(&self.profiles)?;
        let profile = profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id));

        if let Some(height_cm) = update.height_cm {
            profile.height_cm = Some(height_cm);
        }
        if let Some(birth_date) = update.birth_date {
            profile.birth_date = Some(birth_date);
        }
        if let Some(sex) = update.sex {
            profile.sex = Some(sex);
        }
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }

    // === Health ===

    fn is_ready(&self) -> bool {
        self.habits.read().is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use vital_core::new_entity_id;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_habit_crud_is_user_scoped() {
        let store = InMemoryStore::new();
        let owner = new_entity_id();
        let stranger = new_entity_id();

        let habit = Habit::new(owner, "Read", "study", "daily");
        store.habit_insert(&habit).unwrap();

        assert!(store.habit_get(owner, habit.habit_id).unwrap().is_some());
        assert!(store.habit_get(stranger, habit.habit_id).unwrap().is_none());
        assert_eq!(store.habit_count(owner).unwrap(), 1);
        assert_eq!(store.habit_count(stranger).unwrap(), 0);

        let err = store
            .habit_update(stranger, habit.habit_id, HabitUpdate::default())
            .unwrap_err();
        assert!(matches!(
            err,
            VitalError::Storage(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_habit_update_applies_partial_fields() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        let habit = Habit::new(user, "Read", "study", "daily");
        store.habit_insert(&habit).unwrap();

        store
            .habit_update(
                user,
                habit.habit_id,
                HabitUpdate {
                    name: Some("Read books".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let stored = store.habit_get(user, habit.habit_id).unwrap().unwrap();
        assert_eq!(stored.name, "Read books");
        assert_eq!(stored.category, "study");
    }

    #[test]
    fn test_habit_delete_cascades_to_logs() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        let habit = Habit::new(user, "Run", "health", "daily");
        store.habit_insert(&habit).unwrap();

        let log = HabitLog::new(user, habit.habit_id, date(2024, 3, 10), true);
        store.habit_log_insert(&log).unwrap();

        store.habit_delete(user, habit.habit_id).unwrap();
        assert!(store.habit_log_get(user, log.log_id).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_log_for_same_day_is_rejected() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        let habit_id = new_entity_id();

        let first = HabitLog::new(user, habit_id, date(2024, 3, 10), true);
        store.habit_log_insert(&first).unwrap();

        let second = HabitLog::new(user, habit_id, date(2024, 3, 10), false);
        let err = store.habit_log_insert(&second).unwrap_err();
        assert!(matches!(
            err,
            VitalError::Storage(StorageError::Duplicate { .. })
        ));

        // Same habit, different day: fine.
        let next_day = HabitLog::new(user, habit_id, date(2024, 3, 11), true);
        store.habit_log_insert(&next_day).unwrap();

        // Same day, different user: fine.
        let other_user = HabitLog::new(new_entity_id(), habit_id, date(2024, 3, 10), true);
        store.habit_log_insert(&other_user).unwrap();
    }

    #[test]
    fn test_log_range_query_is_sorted_and_bounded() {
        let store = InMemoryStore::new();
        let user = new_entity_id();

        for day in [10, 12, 8, 15] {
            let log = HabitLog::new(user, new_entity_id(), date(2024, 3, day), true);
            store.habit_log_insert(&log).unwrap();
        }

        let range = DateRange::new(date(2024, 3, 9), date(2024, 3, 13));
        let logs = store.habit_log_list_in_range(user, range).unwrap();
        let dates: Vec<NaiveDate> = logs.iter().map(|l| l.date).collect();
        assert_eq!(dates, vec![date(2024, 3, 10), date(2024, 3, 12)]);
    }

    #[test]
    fn test_log_update_clears_value() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        let log = HabitLog::new(user, new_entity_id(), date(2024, 3, 10), true).with_value(2.0);
        store.habit_log_insert(&log).unwrap();

        store
            .habit_log_update(
                user,
                log.log_id,
                HabitLogUpdate {
                    completed: Some(false),
                    value: Some(None),
                },
            )
            .unwrap();

        let stored = store.habit_log_get(user, log.log_id).unwrap().unwrap();
        assert!(!stored.completed);
        assert_eq!(stored.value, None);
    }

    #[test]
    fn test_workout_range_query_uses_session_date() {
        let store = InMemoryStore::new();
        let user = new_entity_id();

        let inside = Workout::new(user, "A", "2024-03-10T23:30:00Z".parse().unwrap());
        let outside = Workout::new(user, "B", "2024-03-11T00:30:00Z".parse().unwrap());
        store.workout_insert(&inside).unwrap();
        store.workout_insert(&outside).unwrap();

        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 10));
        let found = store.workout_list_in_range(user, range).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].workout_id, inside.workout_id);
    }

    #[test]
    fn test_new_store_is_seeded_with_standard_exercises() {
        let store = InMemoryStore::new();
        let user = new_entity_id();

        let library = store.exercise_list(user).unwrap();
        assert_eq!(library.len(), standard_exercises().len());
        assert!(library.iter().all(|e| e.is_public()));
        assert!(library.iter().any(|e| e.name == "Bench Press"));
        // Sorted by name.
        for pair in library.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn test_exercise_listing_mixes_own_and_public() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        let other = new_entity_id();

        let own = Exercise::new(Some(user), "Sled Push", ExerciseType::Strength);
        store.exercise_insert(&own).unwrap();

        let seeded = standard_exercises().len();
        assert_eq!(store.exercise_list(user).unwrap().len(), seeded + 1);
        assert_eq!(store.exercise_list(other).unwrap().len(), seeded);

        assert!(store.exercise_get(user, own.exercise_id).unwrap().is_some());
        assert!(store.exercise_get(other, own.exercise_id).unwrap().is_none());
    }

    #[test]
    fn test_exercise_name_is_unique_per_owner() {
        let store = InMemoryStore::new();
        let user = new_entity_id();

        let first = Exercise::new(Some(user), "Sled Push", ExerciseType::Strength);
        store.exercise_insert(&first).unwrap();

        let same_name = Exercise::new(Some(user), "Sled Push", ExerciseType::Cardio);
        let err = store.exercise_insert(&same_name).unwrap_err();
        assert!(matches!(
            err,
            VitalError::Storage(StorageError::Duplicate { .. })
        ));

        // Same name under another owner is a different entry.
        let other_owner = Exercise::new(Some(new_entity_id()), "Sled Push", ExerciseType::Strength);
        store.exercise_insert(&other_owner).unwrap();

        // A name already taken by the public library is also fine: the user's
        // row shadows nothing, both stay visible.
        let shadows_public = Exercise::new(Some(user), "Bench Press", ExerciseType::Strength);
        store.exercise_insert(&shadows_public).unwrap();
    }

    #[test]
    fn test_public_exercises_are_immutable() {
        let store = InMemoryStore::new();
        let user = new_entity_id();

        let public_id = store
            .exercise_list(user)
            .unwrap()
            .into_iter()
            .find(|e| e.is_public())
            .unwrap()
            .exercise_id;

        let err = store
            .exercise_update(
                user,
                public_id,
                ExerciseUpdate {
                    name: Some("Hijacked".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            VitalError::Storage(StorageError::NotFound { .. })
        ));
        assert!(store.exercise_delete(user, public_id).is_err());
    }

    #[test]
    fn test_template_crud_is_user_scoped() {
        let store = InMemoryStore::new();
        let owner = new_entity_id();
        let stranger = new_entity_id();

        let template = WorkoutTemplate::new(owner, "Workout A - Chest")
            .with_exercises(serde_json::json!([{ "name": "Bench Press", "sets": 4 }]));
        store.template_insert(&template).unwrap();

        assert!(store
            .template_get(owner, template.template_id)
            .unwrap()
            .is_some());
        assert!(store
            .template_get(stranger, template.template_id)
            .unwrap()
            .is_none());

        store
            .template_update(
                owner,
                template.template_id,
                TemplateUpdate {
                    name: Some("Workout A - Chest & Triceps".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let stored = store
            .template_get(owner, template.template_id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Workout A - Chest & Triceps");
        assert_eq!(stored.exercises, template.exercises);

        assert!(store
            .template_delete(stranger, template.template_id)
            .is_err());
        store.template_delete(owner, template.template_id).unwrap();
        assert!(store.template_list(owner).unwrap().is_empty());
    }

    #[test]
    fn test_measurement_list_recent_newest_first_with_limit() {
        let store = InMemoryStore::new();
        let user = new_entity_id();

        for (day, weight) in [(1, 81.0), (15, 80.2), (8, 80.6), (22, 79.9)] {
            let m = BodyMeasurement::new(user, date(2024, 3, day), weight);
            store.measurement_insert(&m).unwrap();
        }

        let recent = store.measurement_list_recent(user, 3).unwrap();
        let dates: Vec<NaiveDate> = recent.iter().map(|m| m.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 3, 22), date(2024, 3, 15), date(2024, 3, 8)]
        );
    }

    #[test]
    fn test_profile_upsert_creates_then_patches() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        assert!(store.profile_get(user).unwrap().is_none());

        let created = store
            .profile_upsert(
                user,
                ProfileUpdate {
                    height_cm: Some(180.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(created.height_cm, Some(180.0));
        assert_eq!(created.birth_date, None);

        let patched = store
            .profile_upsert(
                user,
                ProfileUpdate {
                    sex: Some(Sex::Male),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(patched.height_cm, Some(180.0));
        assert_eq!(patched.sex, Some(Sex::Male));
    }

    #[test]
    fn test_journal_and_assessment_listing() {
        let store = InMemoryStore::new();
        let user = new_entity_id();

        let first = JournalEntry::new(user, "slept well", 4);
        let second = JournalEntry::new(user, "long day", 2);
        store.journal_insert(&first).unwrap();
        store.journal_insert(&second).unwrap();

        let entries = store.journal_list(user).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].created_at >= entries[1].created_at);

        let assessment = LifeAssessment {
            assessment_id: new_entity_id(),
            user_id: user,
            date: date(2024, 3, 1),
            health_score: 7,
            career_score: 6,
            financial_score: 5,
            social_score: 8,
            family_score: 9,
            love_score: 7,
            spiritual_score: 4,
            intellectual_score: 8,
            notes: String::new(),
        };
        store.assessment_insert(&assessment).unwrap();
        assert_eq!(store.assessment_list(user).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_missing_entity_is_not_found() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        let err = store.workout_delete(user, new_entity_id()).unwrap_err();
        assert!(matches!(
            err,
            VitalError::Storage(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_clear_empties_every_table() {
        let store = InMemoryStore::new();
        let user = new_entity_id();
        store
            .habit_insert(&Habit::new(user, "Read", "study", "daily"))
            .unwrap();
        store
            .record_insert(&PersonalRecord::new(user, "Squat", 100.0, 5, date(2024, 1, 1)))
            .unwrap();

        store.clear().unwrap();
        assert_eq!(store.habit_count(user).unwrap(), 0);
        assert!(store.record_list(user).unwrap().is_empty());
    }
}
