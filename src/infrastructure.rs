pub mod db;
pub mod telemetry;
