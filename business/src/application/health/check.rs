use crate::domain::advice::services::GeneratorHandle;
use crate::domain::health::model::HealthStatus;
use crate::domain::health::use_cases::check::CheckHealthUseCase;

pub struct CheckHealthUseCaseImpl {
    status: HealthStatus,
}

impl CheckHealthUseCaseImpl {
    pub fn new(generator: &GeneratorHandle, credential_present: bool) -> Self {
        Self {
            status: HealthStatus {
                generator_configured: generator.is_configured(),
                credential_present,
            },
        }
    }
}

impl CheckHealthUseCase for CheckHealthUseCaseImpl {
    fn execute(&self) -> HealthStatus {
        self.status
    }
}
