mod exercises;
mod health;
mod index;
mod logs;
pub mod users;

use actix_web::web;

pub use exercises::add_exercise;
pub use health::health;
pub use index::index;
pub use logs::get_logs;
pub use users::{create_user, list_users};

/// Mount every route. Expects a `web::Data<dyn UserStore>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api/users")
                .route("", web::post().to(create_user))
                .route("", web::get().to(list_users))
                .route("/{id}/exercises", web::post().to(add_exercise))
                .route("/{id}/logs", web::get().to(get_logs)),
        );
}
