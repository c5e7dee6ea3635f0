mod distribution_test;
mod normalizer_test;
mod quiz_service_test;
