mod list_experience_service;

pub use list_experience_service::ListExperienceService;
