pub mod experience_logs;
