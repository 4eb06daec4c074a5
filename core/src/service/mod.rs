pub mod day_service;
mod day_service_test;
