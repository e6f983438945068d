pub mod figment;
pub mod validator;
