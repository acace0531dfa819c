//! Batch execution: all jobs, strictly sequential.

use crate::config::settings::Settings;
use crate::pipeline::job_runner::{JobConfig, JobResult, run_job};

/// Run multiple jobs one after another, collecting results.
/// One job failure does NOT prevent later jobs from running.
pub fn run_all_jobs(
    jobs: &[JobConfig],
    settings: &Settings,
) -> Vec<crate::error::Result<JobResult>> {
    jobs.iter().map(|job| run_job(job, settings)).collect()
}
