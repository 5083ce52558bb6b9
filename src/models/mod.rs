pub mod exercise;
pub mod user;

pub use exercise::{Exercise, ExerciseRecord, LogQuery, LogView, NewExercise};
pub use user::{CreateUserForm, CreateUserRequest, Registration, User, UserDocument, UserSummary};
