//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod invitation;
pub mod rsvps;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod wishes;

use actix_web::web;

pub use error::ApiResult;

/// Register the `/api` routes, the JSON extractor config, and the 404
/// fallback.
///
/// Callers provide [`state::HttpState`] as app data.
///
/// # Examples
/// ```no_run
/// use actix_web::{App, web};
/// use rsvp_backend::inbound::http::{configure_api, state::HttpState};
///
/// fn app(state: HttpState) -> App<
///     impl actix_web::dev::ServiceFactory<
///         actix_web::dev::ServiceRequest,
///         Config = (),
///         Response = actix_web::dev::ServiceResponse,
///         Error = actix_web::Error,
///         InitError = (),
///     >,
/// > {
///     App::new()
///         .app_data(web::Data::new(state))
///         .configure(configure_api)
/// }
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(
            web::scope("/api")
                .service(rsvps::submit_rsvp)
                .service(rsvps::list_rsvps)
                .service(wishes::submit_wish)
                .service(invitation::list_events)
                .service(invitation::countdown),
        )
        .default_service(web::to(validation::not_found));
}
