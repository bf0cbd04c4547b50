pub mod agent;
pub mod execute;
