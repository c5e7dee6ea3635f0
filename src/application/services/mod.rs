mod distribution;
mod domain_service;
mod normalizer;
mod quiz_service;

pub use distribution::{DistributionError, DomainShare, distribute};
pub use domain_service::DomainService;
pub use normalizer::{NormalizedQuestion, RejectReason, normalize};
pub use quiz_service::{QuizError, QuizService};
