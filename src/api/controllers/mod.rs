pub mod account;
pub mod signup;
