use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use colorguess::middleware::request_trace::RequestTrace;
use colorguess::routes;
use colorguess::state::app_state::AppState;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the test service with the production routes and middleware.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        let data = web::Data::new(self.state);

        test::init_service(
            App::new()
                .wrap(RequestTrace)
                .app_data(data)
                .configure(routes::configure),
        )
        .await
    }
}

/// Create a new test app builder with the given AppState
///
/// ```ignore
/// let state = build_state().build()?;
/// let app = create_test_app(state).build().await;
/// ```
pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
