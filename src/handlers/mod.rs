pub mod health_handler;
pub mod mcq_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_live};
pub use mcq_handler::generate_mcqs;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(generate_mcqs);
}
