pub mod directory_service;
pub mod name_validator;
pub mod phone_validator;
