pub mod fake_platform;
