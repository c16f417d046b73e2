use crate::domain::health::model::HealthStatus;

pub trait CheckHealthUseCase: Send + Sync {
    fn execute(&self) -> HealthStatus;
}
