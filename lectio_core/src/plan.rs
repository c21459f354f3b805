//! Named reading plans and their JSON persistence.
//!
//! A plan stores only its configuration; the schedule is deterministic, so
//! it is recomputed on demand instead of being written to disk. External
//! consumers that want a durable copy use the CSV export.

use crate::calendar::{day_number_for_date, projected_end_date};
use crate::schedule::{generate_schedule, total_reading_days};
use crate::scope::{resolve_scope, total_chapters};
use crate::types::{Book, Catalog, PlanConfig, ScheduleEntry};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// A saved reading plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReadingPlan {
    pub id: Uuid,
    pub name: String,
    pub config: PlanConfig,
    pub created_at: DateTime<Utc>,
}

impl ReadingPlan {
    /// Create a new plan with a fresh id
    ///
    /// The config is not validated here; call `PlanConfig::validate` (or
    /// just generate the schedule) before persisting anything.
    pub fn new(name: impl Into<String>, config: PlanConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            config,
            created_at: Utc::now(),
        }
    }

    /// The plan's resolved scope, in canonical order
    pub fn books(&self, catalog: &Catalog) -> Result<Vec<Book>> {
        resolve_scope(catalog, &self.config.scope)
    }

    /// Regenerate the plan's full schedule
    pub fn schedule(&self, catalog: &Catalog) -> Result<Vec<ScheduleEntry>> {
        let books = self.books(catalog)?;
        generate_schedule(
            &books,
            self.config.chapters_per_day,
            self.config.reading_days,
            self.config.start_date,
        )
    }

    /// Total chapters covered by the plan
    pub fn total_chapters(&self, catalog: &Catalog) -> Result<u32> {
        Ok(total_chapters(&self.books(catalog)?))
    }

    /// Number of reading days in the plan
    pub fn total_reading_days(&self, catalog: &Catalog) -> Result<u32> {
        Ok(total_reading_days(
            self.total_chapters(catalog)?,
            self.config.chapters_per_day,
        ))
    }

    /// Calendar date of the plan's final reading day
    pub fn end_date(&self, catalog: &Catalog) -> Result<NaiveDate> {
        projected_end_date(
            self.config.start_date,
            self.total_reading_days(catalog)?,
            self.config.reading_days,
        )
    }

    /// Day number for an arbitrary date; 0 before the plan starts
    pub fn day_number_on(&self, date: NaiveDate) -> u32 {
        day_number_for_date(self.config.start_date, date, self.config.reading_days)
    }

    /// Load a plan from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Plan(format!("no saved plan at {:?}", path)));
        }

        let contents = std::fs::read_to_string(path)?;
        let plan: ReadingPlan = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded plan '{}' from {:?}", plan.name, path);
        Ok(plan)
    }

    /// Save the plan as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved plan '{}' to {:?}", self.name, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::types::{PlanScope, WeekdaySet};

    fn test_config() -> PlanConfig {
        PlanConfig {
            scope: PlanScope::NewTestament,
            chapters_per_day: 2,
            reading_days: WeekdaySet::from_indices(&[1, 2, 3, 4, 5]).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_derived_totals() {
        let catalog = build_default_catalog();
        let plan = ReadingPlan::new("NT in a season", test_config());

        assert_eq!(plan.total_chapters(&catalog).unwrap(), 260);
        assert_eq!(plan.total_reading_days(&catalog).unwrap(), 130);
        assert_eq!(
            plan.schedule(&catalog).unwrap().len() as u32,
            plan.total_reading_days(&catalog).unwrap()
        );
    }

    #[test]
    fn test_end_date_matches_last_entry() {
        let catalog = build_default_catalog();
        let plan = ReadingPlan::new("NT in a season", test_config());

        let schedule = plan.schedule(&catalog).unwrap();
        assert_eq!(plan.end_date(&catalog).unwrap(), schedule.last().unwrap().date);
    }

    #[test]
    fn test_day_number_on() {
        let plan = ReadingPlan::new("NT in a season", test_config());

        // Monday start, Mon-Fri reading
        assert_eq!(plan.day_number_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 1);
        assert_eq!(plan.day_number_on(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()), 6);
        // Before the start
        assert_eq!(plan.day_number_on(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()), 0);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let plan_path = temp_dir.path().join("plan.json");

        let plan = ReadingPlan::new("NT in a season", test_config());
        plan.save(&plan_path).unwrap();

        let loaded = ReadingPlan::load(&plan_path).unwrap();
        assert_eq!(loaded.id, plan.id);
        assert_eq!(loaded.name, plan.name);
        assert_eq!(loaded.config, plan.config);
    }

    #[test]
    fn test_load_missing_plan_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = ReadingPlan::load(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Plan(_))));
    }

    #[test]
    fn test_load_corrupted_plan_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let plan_path = temp_dir.path().join("plan.json");
        std::fs::write(&plan_path, "{ not json }").unwrap();

        let result = ReadingPlan::load(&plan_path);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
