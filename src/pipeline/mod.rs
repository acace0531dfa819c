pub mod capture_loop;
pub mod job_runner;
pub mod orchestrator;
