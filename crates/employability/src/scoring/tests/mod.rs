mod common;
mod insights;
