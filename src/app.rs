use std::sync::Arc;

use actix_web::web;

use crate::classifier::{Classifier, StaticClassifier};
use crate::handlers;
use crate::upload::UploadSettings;

/// Read-only state shared by every worker.
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub uploads: UploadSettings,
}

impl AppState {
    pub fn new(uploads: UploadSettings) -> Self {
        Self::with_classifier(Arc::new(StaticClassifier), uploads)
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>, uploads: UploadSettings) -> Self {
        Self {
            classifier,
            uploads,
        }
    }
}

/// Register the health check and the classification route under each of
/// `route_patterns`.
pub fn configure(
    state: web::Data<AppState>,
    route_patterns: Vec<String>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state)
            .route("/healthz", web::get().to(handlers::healthz))
            .service(
                web::resource(route_patterns).route(web::post().to(handlers::test_classify)),
            );
    }
}
