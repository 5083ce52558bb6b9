/// Tracker service - Registration, exercise logging and log queries
use chrono::NaiveDate;
use validator::Validate;

use crate::error::TrackerError;
use crate::models::{
    CreateUserRequest, Exercise, ExerciseRecord, LogQuery, LogView, NewExercise, Registration,
    User,
};
use crate::services::UserStore;
use crate::utils::{coerce_duration, format_calendar_date, parse_calendar_date, parse_limit};

pub struct TrackerService;

impl TrackerService {
    /// Return the user with this username, creating it first if needed
    pub async fn create_or_get_user(
        store: &dyn UserStore,
        request: &CreateUserRequest,
    ) -> Result<Registration, TrackerError> {
        if request.validate().is_err() {
            return Err(TrackerError::InvalidUsername);
        }
        let username = request.username.as_str();

        if let Some(existing) = store.find_by_username(username).await? {
            log::info!("User {} already exists, returning it", username);
            return Ok(Registration::Existing(existing.summary()));
        }

        let id = store.insert_user(username).await?;
        let created = store.find_by_id(&id).await?.unwrap_or(User {
            id,
            username: username.to_string(),
            log: Vec::new(),
        });

        log::info!("Created user {} ({})", created.username, created.id);
        Ok(Registration::Created(created))
    }

    pub async fn list_users(store: &dyn UserStore) -> Result<Vec<User>, TrackerError> {
        Ok(store.list_users().await?)
    }

    /// Append an exercise to a user's log.
    ///
    /// `today` fills in a missing date.
    pub async fn add_exercise(
        store: &dyn UserStore,
        user_id: &str,
        input: &NewExercise,
        today: NaiveDate,
    ) -> Result<ExerciseRecord, TrackerError> {
        let user = match store.find_by_id(user_id).await? {
            Some(user) => user,
            None => {
                log::warn!("Exercise posted for unknown user {}", user_id);
                return Err(TrackerError::InvalidUser);
            }
        };

        let date = match non_blank(input.date.as_deref()) {
            None => today,
            Some(raw) => parse_calendar_date(raw).ok_or(TrackerError::InvalidDate)?,
        };

        let exercise = Exercise {
            description: input.description.clone().unwrap_or_default(),
            duration: coerce_duration(input.duration.as_deref()),
            date: format_calendar_date(date),
        };

        if !store.append_exercise(&user.id, &exercise).await? {
            // Lookup succeeded but the user was gone by the time of the push
            return Err(TrackerError::InvalidUser);
        }

        log::info!(
            "Logged exercise for {}: {} ({})",
            user.username,
            exercise.description,
            exercise.date
        );

        Ok(ExerciseRecord {
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            id: user.id,
        })
    }

    /// Read a user's log with optional inclusive date bounds and a limit
    pub async fn get_logs(
        store: &dyn UserStore,
        user_id: &str,
        query: &LogQuery,
    ) -> Result<LogView, TrackerError> {
        let user = match store.find_by_id(user_id).await? {
            Some(user) => user,
            None => {
                log::warn!("Logs requested for unknown user {}", user_id);
                return Err(TrackerError::NotFound);
            }
        };

        let filter = LogFilter::parse(query)?;
        let count = user.log.len();

        Ok(LogView {
            username: user.username,
            count,
            id: user.id,
            log: filter.apply(user.log),
        })
    }
}

/// Validated form of a [`LogQuery`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Checks `from`, `to` and `limit` in that order and stops at the first
    /// bad one. Blank values count as absent.
    pub fn parse(query: &LogQuery) -> Result<Self, TrackerError> {
        let from = non_blank(query.from.as_deref())
            .map(|raw| parse_calendar_date(raw).ok_or(TrackerError::InvalidParameter("from")))
            .transpose()?;
        let to = non_blank(query.to.as_deref())
            .map(|raw| parse_calendar_date(raw).ok_or(TrackerError::InvalidParameter("to")))
            .transpose()?;
        let limit = non_blank(query.limit.as_deref())
            .map(|raw| parse_limit(raw).ok_or(TrackerError::InvalidParameter("limit")))
            .transpose()?;

        Ok(Self { from, to, limit })
    }

    pub fn apply(&self, log: Vec<Exercise>) -> Vec<Exercise> {
        let bounded = self.from.is_some() || self.to.is_some();
        let in_range = |entry: &Exercise| {
            if !bounded {
                return true;
            }
            match parse_calendar_date(&entry.date) {
                Some(date) => {
                    self.from.map_or(true, |from| date >= from)
                        && self.to.map_or(true, |to| date <= to)
                }
                None => false,
            }
        };

        log.into_iter()
            .filter(|entry| in_range(entry))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}
